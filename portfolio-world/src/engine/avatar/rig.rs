use bevy::prelude::*;

use super::controller::{AvatarController, LimbPose};
use crate::constants::render_settings::{
    AVATAR_BODY_COLOUR, AVATAR_HAIR_COLOUR, AVATAR_LEG_COLOUR, AVATAR_SKIN_COLOUR,
};
use crate::engine::input::movement::MovementInput;

/// Root of the avatar hierarchy. Carries the [`AvatarController`].
#[derive(Component)]
pub struct Avatar;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limb {
    LeftLeg,
    RightLeg,
    LeftArm,
    RightArm,
}

impl Limb {
    pub fn rotation(self, pose: &LimbPose) -> f32 {
        match self {
            Limb::LeftLeg => pose.left_leg,
            Limb::RightLeg => pose.right_leg,
            Limb::LeftArm => pose.left_arm,
            Limb::RightArm => pose.right_arm,
        }
    }

    fn offset(self) -> Vec3 {
        match self {
            Limb::LeftLeg => Vec3::new(-0.15, -0.25, 0.0),
            Limb::RightLeg => Vec3::new(0.15, -0.25, 0.0),
            Limb::LeftArm => Vec3::new(-0.35, 0.25, 0.0),
            Limb::RightArm => Vec3::new(0.35, 0.25, 0.0),
        }
    }
}

/// Spawn the avatar: box torso, head, hair bun and four swinging limbs.
pub fn spawn_avatar(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    controller: AvatarController,
) -> Entity {
    let body_material = materials.add(StandardMaterial {
        base_color: AVATAR_BODY_COLOUR,
        ..default()
    });
    let leg_material = materials.add(StandardMaterial {
        base_color: AVATAR_LEG_COLOUR,
        metallic: 0.0,
        perceptual_roughness: 1.0,
        ..default()
    });
    let skin_material = materials.add(StandardMaterial {
        base_color: AVATAR_SKIN_COLOUR,
        ..default()
    });
    let hair_material = materials.add(StandardMaterial {
        base_color: AVATAR_HAIR_COLOUR,
        ..default()
    });

    let limb_mesh = meshes.add(Cuboid::new(0.2, 0.5, 0.2));
    let torso_mesh = meshes.add(Cuboid::new(0.5, 0.5, 0.3));
    let head_mesh = meshes.add(Sphere::new(0.25).mesh().uv(32, 32));
    let bun_mesh = meshes.add(Sphere::new(0.1).mesh().uv(32, 32));

    commands
        .spawn((
            Avatar,
            Transform::from_translation(controller.position()),
            Visibility::default(),
            controller,
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(torso_mesh),
                MeshMaterial3d(body_material.clone()),
                Transform::from_xyz(0.0, 0.2, 0.0),
            ));
            parent.spawn((
                Mesh3d(head_mesh),
                MeshMaterial3d(skin_material),
                Transform::from_xyz(0.0, 0.75, 0.0),
            ));
            parent.spawn((
                Mesh3d(bun_mesh),
                MeshMaterial3d(hair_material),
                Transform::from_xyz(0.0, 0.95, -0.1),
            ));

            for limb in [Limb::LeftLeg, Limb::RightLeg] {
                parent.spawn((
                    Mesh3d(limb_mesh.clone()),
                    MeshMaterial3d(leg_material.clone()),
                    Transform::from_translation(limb.offset()),
                    limb,
                ));
            }
            for limb in [Limb::LeftArm, Limb::RightArm] {
                parent.spawn((
                    Mesh3d(limb_mesh.clone()),
                    MeshMaterial3d(body_material.clone()),
                    Transform::from_translation(limb.offset()),
                    limb,
                ));
            }
        })
        .id()
}

/// Per-frame avatar tick. Must run before the camera follow in the same frame.
pub fn avatar_movement_system(
    movement: Res<MovementInput>,
    time: Res<Time>,
    mut avatar_query: Query<(&mut AvatarController, &mut Transform), With<Avatar>>,
    mut limb_query: Query<(&Limb, &mut Transform), Without<Avatar>>,
) {
    let Ok((mut controller, mut transform)) = avatar_query.single_mut() else {
        return;
    };

    controller.tick(&movement, time.delta_secs());
    transform.translation = controller.position();

    let pose = controller.pose();
    for (limb, mut limb_transform) in &mut limb_query {
        limb_transform.rotation = Quat::from_rotation_x(limb.rotation(&pose));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::avatar::AVATAR_START;

    fn rig_app() -> App {
        let mut app = App::new();
        app.init_resource::<MovementInput>()
            .init_resource::<Time>()
            .add_systems(Update, avatar_movement_system);

        app.world_mut()
            .spawn((
                Avatar,
                Transform::from_translation(AVATAR_START),
                AvatarController::default(),
            ))
            .with_children(|parent| {
                for limb in [Limb::LeftLeg, Limb::RightLeg, Limb::LeftArm, Limb::RightArm] {
                    parent.spawn((Transform::from_translation(limb.offset()), limb));
                }
            });
        app
    }

    fn limb_angles(app: &mut App) -> Vec<(Limb, Quat)> {
        let mut query = app.world_mut().query::<(&Limb, &Transform)>();
        query
            .iter(app.world())
            .map(|(limb, transform)| (*limb, transform.rotation))
            .collect()
    }

    #[test]
    fn transform_tracks_controller() {
        let mut app = rig_app();
        app.world_mut().resource_mut::<MovementInput>().left = true;
        app.update();
        app.update();

        let mut query = app
            .world_mut()
            .query_filtered::<&Transform, With<Avatar>>();
        let transform = query.single(app.world()).unwrap();
        assert!((transform.translation.x + 0.2).abs() < 1e-5);
        assert!((transform.translation.z - 10.0).abs() < 1e-5);
    }

    #[test]
    fn idle_frame_straightens_limbs() {
        let mut app = rig_app();
        app.world_mut().resource_mut::<MovementInput>().forward = true;
        app.update();

        *app.world_mut().resource_mut::<MovementInput>() = MovementInput::default();
        app.update();

        for (limb, rotation) in limb_angles(&mut app) {
            assert_eq!(rotation, Quat::IDENTITY, "{limb:?} still rotated");
        }
    }
}
