//! Third-person follow camera for avatar navigation.
//!
//! Recomputes the camera pose and the recentred ground plane from the avatar
//! position every frame, after the avatar has moved.

/// Follow rig, pure pose derivation and the per-frame apply system.
pub mod follow_camera;

pub use follow_camera::{
    FollowCamera, FollowPose, FollowRig, GroundPlane, camera_follow_system, follow,
    spawn_follow_camera,
};
