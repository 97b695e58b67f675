use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::activity::ActivityLog;
use crate::engine::assets::site_manifest::SiteManifest;
use crate::engine::loading::progress::LoadingProgress;

pub const SITE_MANIFEST_PATH: &str = "portfolio_site.json";

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SiteManifest>>,
}

pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    manifest_loader.handle = Some(asset_server.load(SITE_MANIFEST_PATH));
}

/// Resolve the manifest, or fall back to defaults if it cannot be loaded,
/// then publish the API configuration and greet the visitor.
pub fn load_site_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    manifests: Res<Assets<SiteManifest>>,
    asset_server: Res<AssetServer>,
    mut activity_log: ResMut<ActivityLog>,
    mut commands: Commands,
) {
    if loading_progress.manifest_resolved {
        return;
    }
    let Some(ref handle) = manifest_loader.handle else {
        return;
    };

    let manifest = if let Some(manifest) = manifests.get(handle) {
        info!("✓ Site manifest loaded");
        manifest.clone()
    } else if let Some(LoadState::Failed(error)) = asset_server.get_load_state(handle) {
        warn!("Site manifest unavailable ({}), using defaults", error);
        SiteManifest::default()
    } else {
        return;
    };

    let api_config = manifest.api_config().with_env_override();
    info!("Content service: {}", api_config.base_url);
    commands.insert_resource(api_config);

    activity_log.push(manifest.welcome_message());
    loading_progress.manifest_resolved = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ApiConfig;

    fn loader_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<SiteManifest>()
            .init_resource::<LoadingProgress>()
            .init_resource::<ManifestLoader>()
            .init_resource::<ActivityLog>()
            .add_systems(Update, load_site_manifest_system);
        app
    }

    #[test]
    fn waits_until_loading_has_started() {
        let mut app = loader_app();
        app.update();

        assert!(!app.world().resource::<LoadingProgress>().manifest_resolved);
        assert!(app.world().get_resource::<ApiConfig>().is_none());
    }

    #[test]
    fn resolved_manifest_publishes_config_and_greeting() {
        let mut app = loader_app();
        let handle = app
            .world_mut()
            .resource_mut::<Assets<SiteManifest>>()
            .add(SiteManifest {
                api_base_url: Some("http://localhost:5000".into()),
                welcome_message: Some("welcome".into()),
            });
        app.world_mut().resource_mut::<ManifestLoader>().handle = Some(handle);

        app.update();

        assert!(app.world().resource::<LoadingProgress>().manifest_resolved);
        assert_eq!(
            app.world().resource::<ApiConfig>().base_url,
            ApiConfig::new("http://localhost:5000").with_env_override().base_url
        );
        let log = app.world().resource::<ActivityLog>();
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].message, "welcome");

        // A second pass does not greet twice.
        app.update();
        assert_eq!(app.world().resource::<ActivityLog>().len(), 1);
    }
}
