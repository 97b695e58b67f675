/// Camera eye height above the world origin.
pub const CAMERA_HEIGHT: f32 = 5.0;

/// Camera distance behind the avatar along +Z.
pub const CAMERA_TRAILING: f32 = 10.0;

/// Ground plane height, half a unit below the avatar's feet.
pub const GROUND_Y: f32 = -0.5;

/// Edge length of the square ground plane that is recentred under the avatar.
pub const GROUND_SIZE: f32 = 100.0;
