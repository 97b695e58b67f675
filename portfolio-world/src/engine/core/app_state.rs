use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

/// The world runs once the site manifest has been resolved.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States, Resource)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Component)]
pub struct FpsText;

pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.manifest_resolved {
        info!("→ Site configuration ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
