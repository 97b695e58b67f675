//! Asset types loaded through the Bevy asset server.

/// Site manifest with the content service location and greeting.
pub mod site_manifest;
