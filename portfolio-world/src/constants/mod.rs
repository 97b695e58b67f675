/// Colours, font sizes and overlay dimensions.
pub mod render_settings;
