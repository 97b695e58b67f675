use bevy::prelude::*;

use crate::activity::ActivityLog;
use crate::constants::render_settings::{
    TERMINAL_BACKGROUND, TERMINAL_CHROME, TERMINAL_FONT_SIZE, TERMINAL_MARGIN,
    TERMINAL_TEXT_COLOUR, TERMINAL_VISIBLE_LINES,
};

#[derive(Component)]
pub struct TerminalText;

/// Clipping area between the title bar and the panel edge.
#[derive(Component)]
pub struct TerminalViewport;

/// Bottom-right log panel with a title bar, styled as a terminal window.
pub fn spawn_terminal(commands: &mut Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(TERMINAL_MARGIN),
                right: Val::Px(TERMINAL_MARGIN),
                width: Val::Percent(50.0),
                height: Val::Percent(20.0),
                flex_direction: FlexDirection::Column,
                border: UiRect::all(Val::Px(1.0)),
                overflow: Overflow::clip(),
                ..default()
            },
            BackgroundColor(TERMINAL_BACKGROUND),
            BorderColor(TERMINAL_CHROME),
            BorderRadius::all(Val::Px(10.0)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Px(20.0),
                    flex_shrink: 0.0,
                    ..default()
                },
                BackgroundColor(TERMINAL_CHROME),
                BorderRadius::top(Val::Px(5.0)),
            ));
            // Bottom-aligned and clipped, so overflow drops the oldest lines.
            parent
                .spawn((
                    Node {
                        flex_grow: 1.0,
                        min_height: Val::Px(0.0),
                        flex_direction: FlexDirection::Column,
                        justify_content: JustifyContent::FlexEnd,
                        padding: UiRect::all(Val::Px(10.0)),
                        overflow: Overflow::clip(),
                        ..default()
                    },
                    TerminalViewport,
                ))
                .with_children(|viewport| {
                    viewport.spawn((
                        Text::new(""),
                        TextFont {
                            font_size: TERMINAL_FONT_SIZE,
                            ..default()
                        },
                        TextColor(TERMINAL_TEXT_COLOUR),
                        Node {
                            flex_shrink: 0.0,
                            ..default()
                        },
                        TerminalText,
                    ));
                });
        });
}

/// Newest lines last; older lines scroll off the top.
pub fn terminal_lines(log: &ActivityLog, visible: usize) -> String {
    log.tail(visible)
        .iter()
        .map(|entry| entry.display())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn update_terminal_text(
    log: Res<ActivityLog>,
    mut query: Query<&mut Text, With<TerminalText>>,
) {
    if !log.is_changed() {
        return;
    }
    for mut text in &mut query {
        text.0 = terminal_lines(&log, TERMINAL_VISIBLE_LINES);
    }
}
