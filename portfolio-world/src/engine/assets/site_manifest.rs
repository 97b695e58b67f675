use bevy::prelude::*;
use constants::api::WELCOME_MESSAGE;
use serde::Deserialize;

use crate::content::ApiConfig;

/// Deployment settings shipped next to the binary as `portfolio_site.json`.
/// Every field is optional; missing ones fall back to the built-in defaults.
#[derive(Asset, TypePath, Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteManifest {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub welcome_message: Option<String>,
}

impl SiteManifest {
    pub fn api_config(&self) -> ApiConfig {
        match self.api_base_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => ApiConfig::new(url),
            _ => ApiConfig::default(),
        }
    }

    pub fn welcome_message(&self) -> &str {
        self.welcome_message.as_deref().unwrap_or(WELCOME_MESSAGE)
    }
}
