use bevy::prelude::*;

use crate::engine::camera::FollowCamera;

/// Screen-space text pinned to a world point and re-projected every frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct WorldLabel {
    pub anchor: Vec3,
}

/// Spawn a hidden label; [`update_world_labels`] places and reveals it.
pub fn spawn_world_label(
    commands: &mut Commands,
    text: impl Into<String>,
    anchor: Vec3,
    font_size: f32,
    colour: Color,
) -> Entity {
    commands
        .spawn((
            Text::new(text),
            TextFont {
                font_size,
                ..default()
            },
            TextColor(colour),
            Node {
                position_type: PositionType::Absolute,
                ..default()
            },
            Visibility::Hidden,
            WorldLabel { anchor },
        ))
        .id()
}

/// Top-left corner that centres a label of `label_size` on `projected`.
/// `None` when the label would be entirely outside the viewport.
pub fn label_screen_position(
    projected: Vec2,
    label_size: Vec2,
    viewport_size: Vec2,
) -> Option<Vec2> {
    let top_left = projected - label_size * 0.5;
    let bottom_right = top_left + label_size;

    let outside = bottom_right.x < 0.0
        || bottom_right.y < 0.0
        || top_left.x > viewport_size.x
        || top_left.y > viewport_size.y;

    (!outside).then_some(top_left)
}

pub fn update_world_labels(
    camera_query: Query<(&Camera, &Transform), With<FollowCamera>>,
    mut label_query: Query<(&WorldLabel, &ComputedNode, &mut Node, &mut Visibility)>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Some(viewport_size) = camera.logical_viewport_size() else {
        return;
    };
    // The camera is a root entity; its pose was written earlier this frame.
    let camera_transform = GlobalTransform::from(*camera_transform);

    for (label, computed, mut node, mut visibility) in &mut label_query {
        let label_size = computed.size() * computed.inverse_scale_factor();

        // Points behind the camera fail to project.
        let placed = camera
            .world_to_viewport(&camera_transform, label.anchor)
            .ok()
            .and_then(|projected| label_screen_position(projected, label_size, viewport_size));

        match placed {
            Some(top_left) => {
                node.left = Val::Px(top_left.x);
                node.top = Val::Px(top_left.y);
                visibility.set_if_neq(Visibility::Inherited);
            }
            None => {
                visibility.set_if_neq(Visibility::Hidden);
            }
        }
    }
}
