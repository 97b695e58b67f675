//! Remote portfolio content: projects, work history and certifications.
//!
//! Three independent GET requests are issued once when the world starts
//! running. Completed requests land in a shared queue that a frame system
//! drains, replacing the matching list and logging the result.
//!
//! ```text
//! start_content_fetch ──spawn──> fetch task (thread / spawn_local)
//!                                     │ FetchOutcome per list
//!                                     v
//! drain_fetch_outcomes <──FetchQueue──┘
//!        │
//!        ├─ PortfolioContent (replace list)
//!        ├─ ActivityLog      (success / error line)
//!        └─ ContentUpdated   (row rebuild)
//! ```

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;

/// Content service location and environment override.
pub mod config;

/// Fetch failure taxonomy.
pub mod error;

/// Fetch kickoff, outcome queue and per-frame drain.
pub mod fetcher;

/// Entity shapes and the content lists resource.
pub mod model;

/// HTTP transport seam.
pub mod source;

pub use config::ApiConfig;
pub use fetcher::{ContentUpdated, FetchQueue, drain_fetch_outcomes, start_content_fetch};
pub use model::{ContentKind, PortfolioContent};

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FetchQueue>()
            .init_resource::<PortfolioContent>()
            .add_event::<ContentUpdated>()
            .add_systems(OnEnter(AppState::Running), start_content_fetch)
            .add_systems(
                Update,
                drain_fetch_outcomes.run_if(in_state(AppState::Running)),
            );
    }
}
