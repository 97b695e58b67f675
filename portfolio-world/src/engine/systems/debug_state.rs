use bevy::prelude::*;

use crate::activity::ActivityLog;
use crate::content::{ContentKind, PortfolioContent};
use crate::engine::avatar::{Avatar, AvatarController};

/// F1 dumps avatar and content state to the log.
pub fn debug_world_state(
    keyboard: Res<ButtonInput<KeyCode>>,
    avatar_query: Query<&AvatarController, With<Avatar>>,
    content: Res<PortfolioContent>,
    log: Res<ActivityLog>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    info!("=== WORLD DEBUG STATE ===");
    if let Ok(controller) = avatar_query.single() {
        info!("Avatar position: {:?}", controller.position());
        info!(
            "Avatar gait: {:?} (phase {:.3})",
            controller.gait(),
            controller.phase()
        );
    }
    for kind in ContentKind::ALL {
        info!("{}: {} loaded", kind.title(), content.len(kind));
    }
    info!("Activity log entries: {}", log.len());
    info!("=================================");
}
