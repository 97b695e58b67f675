use bevy::prelude::*;
use constants::camera::{GROUND_SIZE, GROUND_Y};

use crate::constants::render_settings::GROUND_COLOUR;
use crate::engine::camera::GroundPlane;

/// Spawn the bounded ground plane. The follow camera recentres it under the
/// avatar each frame, so it never needs to grow.
pub fn spawn_ground(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) -> Entity {
    commands
        .spawn((
            Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: GROUND_COLOUR,
                perceptual_roughness: 1.0,
                ..default()
            })),
            Transform::from_xyz(0.0, GROUND_Y, 1.0),
            GroundPlane,
        ))
        .id()
}
