use bevy::math::Vec3;

/// Card row placement: `x = index * spacing + x_offset`, constant `y` and `z`.
pub struct RowLayout {
    pub spacing: f32,
    pub x_offset: f32,
    pub y: f32,
    pub z: f32,
    /// Full card extents (width, height, depth).
    pub card_size: Vec3,
    pub header: Vec3,
}

pub const PROJECT_ROW: RowLayout = RowLayout {
    spacing: 5.0,
    x_offset: -9.0,
    y: 2.0,
    z: -7.0,
    card_size: Vec3::new(3.0, 4.0, 0.1),
    header: Vec3::new(-8.0, 5.0, -7.0),
};

pub const WORK_HISTORY_ROW: RowLayout = RowLayout {
    spacing: 5.0,
    x_offset: -9.0,
    y: 2.0,
    z: -22.0,
    card_size: Vec3::new(3.0, 4.0, 0.1),
    header: Vec3::new(0.0, 5.0, -22.0),
};

pub const CERTIFICATION_ROW: RowLayout = RowLayout {
    spacing: 6.0,
    x_offset: -9.0,
    y: 2.0,
    z: -40.0,
    card_size: Vec3::new(5.5, 4.5, 0.1),
    header: Vec3::new(15.0, 5.0, -40.0),
};

/// Skill chip grid origin, relative to the work history card centre.
pub const SKILL_CHIP_ORIGIN: Vec3 = Vec3::new(0.0, -1.2, 0.1);

/// Vertical distance between chip rows.
pub const SKILL_CHIP_ROW_HEIGHT: f32 = 0.4;

pub const SKILL_CHIP_HEIGHT: f32 = 0.3;

/// Chip width is `SKILL_CHIP_BASE_WIDTH + chars * SKILL_CHIP_CHAR_WIDTH`.
pub const SKILL_CHIP_BASE_WIDTH: f32 = 0.2;
pub const SKILL_CHIP_CHAR_WIDTH: f32 = 0.08;

/// Characters of a skill name shown on its chip.
pub const SKILL_LABEL_MAX_CHARS: usize = 12;
