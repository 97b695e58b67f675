use bevy::math::Vec3;

/// Where the avatar stands when the session starts.
pub const AVATAR_START: Vec3 = Vec3::new(0.0, 0.0, 10.0);

/// Distance moved per frame along each held direction.
/// Not scaled by frame time, so speed follows the display refresh rate.
pub const MOVE_STEP: f32 = 0.1;

/// Swing phase advance per second of walking.
pub const SWING_RATE: f32 = 5.0;

/// Peak limb rotation about X, in radians.
pub const SWING_AMPLITUDE: f32 = 2.0;
