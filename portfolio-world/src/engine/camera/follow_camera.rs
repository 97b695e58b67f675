use bevy::prelude::*;
use constants::camera::{CAMERA_HEIGHT, CAMERA_TRAILING, GROUND_Y};

use crate::engine::avatar::{Avatar, AvatarController};

/// The scene camera, repositioned behind the avatar every frame.
#[derive(Component)]
pub struct FollowCamera;

/// Ground plane that is recentred under the avatar instead of growing.
#[derive(Component)]
pub struct GroundPlane;

/// Fixed offsets of the follow camera rig.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct FollowRig {
    pub height: f32,
    pub trailing: f32,
    pub ground_y: f32,
}

impl Default for FollowRig {
    fn default() -> Self {
        Self {
            height: CAMERA_HEIGHT,
            trailing: CAMERA_TRAILING,
            ground_y: GROUND_Y,
        }
    }
}

/// Camera and ground placement derived from one avatar position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowPose {
    pub eye: Vec3,
    pub target: Vec3,
    pub ground: Vec3,
}

impl FollowPose {
    pub fn camera_transform(&self) -> Transform {
        Transform::from_translation(self.eye).looking_at(self.target, Vec3::Y)
    }
}

/// Pure per-frame recomputation; nothing carries over between frames.
pub fn follow(rig: &FollowRig, avatar: Vec3) -> FollowPose {
    FollowPose {
        eye: Vec3::new(avatar.x, rig.height, avatar.z + rig.trailing),
        target: avatar,
        ground: Vec3::new(avatar.x, rig.ground_y, avatar.z),
    }
}

pub fn spawn_follow_camera(commands: &mut Commands, rig: &FollowRig, avatar: Vec3) -> Entity {
    commands
        .spawn((
            Camera3d::default(),
            follow(rig, avatar).camera_transform(),
            FollowCamera,
        ))
        .id()
}

/// Apply [`follow`] to the camera and ground. Chained after the avatar tick.
pub fn camera_follow_system(
    rig: Res<FollowRig>,
    avatar_query: Query<&AvatarController, With<Avatar>>,
    mut camera_query: Query<&mut Transform, (With<FollowCamera>, Without<GroundPlane>)>,
    mut ground_query: Query<&mut Transform, (With<GroundPlane>, Without<FollowCamera>)>,
) {
    let Ok(controller) = avatar_query.single() else {
        return;
    };
    let pose = follow(&rig, controller.position());

    if let Ok(mut camera_transform) = camera_query.single_mut() {
        *camera_transform = pose.camera_transform();
    }
    if let Ok(mut ground_transform) = ground_query.single_mut() {
        ground_transform.translation = pose.ground;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::avatar::avatar_movement_system;
    use crate::engine::input::movement::MovementInput;

    #[test]
    fn pose_tracks_avatar() {
        let rig = FollowRig::default();
        let positions = [
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(-3.4, 0.0, 2.1),
            Vec3::new(12.0, 0.0, -40.5),
        ];

        for avatar in positions {
            let pose = follow(&rig, avatar);
            assert_eq!(pose.eye.x, avatar.x);
            assert_eq!(pose.eye.y, 5.0);
            assert_eq!(pose.eye.z, avatar.z + 10.0);
            assert_eq!(pose.target, avatar);
            assert_eq!(pose.ground, Vec3::new(avatar.x, -0.5, avatar.z));
        }
    }

    #[test]
    fn camera_looks_at_avatar() {
        let avatar = Vec3::new(1.0, 0.0, -4.0);
        let transform = follow(&FollowRig::default(), avatar).camera_transform();
        let towards = (avatar - transform.translation).normalize();
        assert!(transform.forward().dot(towards) > 0.9999);
    }

    #[test]
    fn camera_and_ground_follow_within_the_same_frame() {
        let mut app = App::new();
        app.init_resource::<MovementInput>()
            .init_resource::<Time>()
            .init_resource::<FollowRig>()
            .add_systems(Update, (avatar_movement_system, camera_follow_system).chain());

        app.world_mut()
            .spawn((Avatar, Transform::default(), AvatarController::default()));
        let camera = app.world_mut().spawn((FollowCamera, Transform::default())).id();
        let ground = app.world_mut().spawn((GroundPlane, Transform::default())).id();

        {
            let mut input = app.world_mut().resource_mut::<MovementInput>();
            input.forward = true;
            input.right = true;
        }
        for _ in 0..4 {
            app.update();

            let avatar = {
                let mut query = app.world_mut().query::<&AvatarController>();
                query.single(app.world()).unwrap().position()
            };
            let camera_at = app.world().get::<Transform>(camera).unwrap().translation;
            let ground_at = app.world().get::<Transform>(ground).unwrap().translation;

            assert_eq!(camera_at.x, avatar.x);
            assert_eq!(camera_at.z, avatar.z + 10.0);
            assert_eq!(ground_at.x, avatar.x);
            assert_eq!(ground_at.z, avatar.z);
        }
    }
}
