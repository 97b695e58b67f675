use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::engine::core::app_state::FpsText;

pub fn spawn_fps_overlay(commands: &mut Commands) {
    commands.spawn((
        Text::new("FPS: --"),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(1., 0., 0.)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            right: Val::Px(12.0),
            ..default()
        },
        FpsText,
    ));
}

pub fn fps_label(fps: Option<f64>) -> String {
    match fps {
        Some(value) => format!("FPS: {value:.1}"),
        None => "FPS: --".to_string(),
    }
}

/// Refresh the overlay from the smoothed frame-rate diagnostic.
pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut overlay: Query<&mut Text, With<FpsText>>,
) {
    let smoothed = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed());
    let label = fps_label(smoothed);

    for mut text in &mut overlay {
        if text.0 != label {
            text.0.clone_from(&label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_rounds_to_one_decimal() {
        assert_eq!(fps_label(Some(59.96)), "FPS: 60.0");
        assert_eq!(fps_label(Some(143.04)), "FPS: 143.0");
    }

    #[test]
    fn overlay_shows_placeholder_before_first_sample() {
        let mut app = App::new();
        app.init_resource::<DiagnosticsStore>()
            .add_systems(Update, fps_text_update_system);
        let overlay = app.world_mut().spawn((Text::new("FPS: "), FpsText)).id();

        app.update();

        assert_eq!(app.world().get::<Text>(overlay).unwrap().0, "FPS: --");
    }
}
