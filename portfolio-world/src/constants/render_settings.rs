use bevy::prelude::*;

/// #87CEEB
pub const SKY_COLOUR: Color = Color::srgb(0.529, 0.808, 0.922);
/// #90EE90
pub const GROUND_COLOUR: Color = Color::srgb(0.565, 0.933, 0.565);
pub const AMBIENT_BRIGHTNESS: f32 = 2000.0;

pub const AVATAR_BODY_COLOUR: Color = Color::srgb(0.0, 0.0, 1.0);
pub const AVATAR_LEG_COLOUR: Color = Color::srgb(0.0, 0.0, 0.0);
/// Peach puff.
pub const AVATAR_SKIN_COLOUR: Color = Color::srgb(1.0, 0.855, 0.725);
pub const AVATAR_HAIR_COLOUR: Color = Color::srgb(0.647, 0.165, 0.165);

pub const CARD_COLOUR: Color = Color::WHITE;
pub const CARD_METALLIC: f32 = 1.0;
pub const CARD_ROUGHNESS: f32 = 0.5;
/// #C7B307
pub const SKILL_CHIP_COLOUR: Color = Color::srgb(0.780, 0.702, 0.027);
pub const SKILL_CHIP_DEPTH: f32 = 0.03;

pub const HEADER_TEXT_COLOUR: Color = Color::BLACK;
pub const TITLE_TEXT_COLOUR: Color = Color::BLACK;
pub const LINK_TEXT_COLOUR: Color = Color::srgb(0.0, 0.0, 1.0);
pub const DETAIL_TEXT_COLOUR: Color = Color::srgb(0.5, 0.5, 0.5);

pub const HEADER_FONT_SIZE: f32 = 28.0;
pub const TITLE_FONT_SIZE: f32 = 16.0;
pub const DETAIL_FONT_SIZE: f32 = 11.0;
pub const CHIP_FONT_SIZE: f32 = 9.0;

/// #1A1A1A
pub const TERMINAL_BACKGROUND: Color = Color::srgb(0.102, 0.102, 0.102);
/// #404040, used for the border and title bar.
pub const TERMINAL_CHROME: Color = Color::srgb(0.251, 0.251, 0.251);
pub const TERMINAL_TEXT_COLOUR: Color = Color::srgb(0.0, 1.0, 0.0);
pub const TERMINAL_FONT_SIZE: f32 = 12.0;
pub const TERMINAL_VISIBLE_LINES: usize = 10;
pub const TERMINAL_MARGIN: f32 = 20.0;
