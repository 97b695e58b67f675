//! Player avatar: movement, walk cycle and the mesh rig that displays it.
//!
//! The controller is plain state advanced once per frame. The rig module owns
//! the Bevy entities and copies controller state onto their transforms.

/// Position and swing phase state machine advanced per frame tick.
pub mod controller;

/// Avatar mesh hierarchy spawning and per-frame transform sync.
pub mod rig;

pub use controller::{AvatarController, Gait, LimbPose};
pub use rig::{Avatar, avatar_movement_system, spawn_avatar};
