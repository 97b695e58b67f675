use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::avatar::AVATAR_START;

use crate::activity::ActivityLog;
use crate::constants::render_settings::{AMBIENT_BRIGHTNESS, SKY_COLOUR};
use crate::content::{ContentPlugin, drain_fetch_outcomes};
use crate::engine::assets::site_manifest::SiteManifest;
use crate::engine::avatar::{AvatarController, avatar_movement_system, spawn_avatar};
use crate::engine::camera::{FollowRig, camera_follow_system, spawn_follow_camera};
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::input::movement::{MovementInput, keyboard_movement_system};
use crate::engine::loading::manifest_loader::{
    ManifestLoader, load_site_manifest_system, start_loading,
};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::cards::{rebuild_card_rows, spawn_row_headers};
use crate::engine::scene::ground::spawn_ground;
use crate::engine::scene::labels::update_world_labels;
use crate::engine::systems::debug_state::debug_world_state;
use crate::engine::systems::terminal::{spawn_terminal, update_terminal_text};
use crate::tools::card_links::handle_card_clicks;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::{fps_text_update_system, spawn_fps_overlay};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SiteManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SiteManifest>::new(&["json"]))
        .add_plugins(ContentPlugin)
        .insert_resource(ClearColor(SKY_COLOUR))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: AMBIENT_BRIGHTNESS,
            ..default()
        });

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<ActivityLog>()
        .init_resource::<MovementInput>()
        .init_resource::<FollowRig>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (load_site_manifest_system, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    // Input is latched before the avatar ticks, and the camera follows the
    // avatar's new position in the same frame.
    let navigation_systems = (
        keyboard_movement_system,
        avatar_movement_system,
        camera_follow_system,
    )
        .chain();

    let runtime_systems = (
        navigation_systems,
        rebuild_card_rows.after(drain_fetch_outcomes),
        update_world_labels
            .after(camera_follow_system)
            .after(rebuild_card_rows),
        handle_card_clicks.after(camera_follow_system),
        debug_world_state,
    );

    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    // The terminal also shows the greeting logged while loading.
    app.add_systems(Update, update_terminal_text);

    // Add fps_text_update_system only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

// Startup system that spawns the static world; content rows arrive later.
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    rig: Res<FollowRig>,
) {
    spawn_follow_camera(&mut commands, &rig, AVATAR_START);
    spawn_ground(&mut commands, &mut meshes, &mut materials);
    spawn_avatar(
        &mut commands,
        &mut meshes,
        &mut materials,
        AvatarController::default(),
    );
    spawn_row_headers(&mut commands);
    spawn_terminal(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        spawn_fps_overlay(&mut commands);
    }
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
