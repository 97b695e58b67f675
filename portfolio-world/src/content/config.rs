use bevy::prelude::*;
use constants::api::{API_BASE_URL_ENV, DEFAULT_API_BASE_URL};

/// Where the content service lives.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Native builds honour `PORTFOLIO_API_URL`; an empty value is ignored.
    pub fn with_env_override(self) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(url) = std::env::var(API_BASE_URL_ENV) {
                if !url.trim().is_empty() {
                    info!("Using content service from {}: {}", API_BASE_URL_ENV, url);
                    return Self::new(url.trim());
                }
            }
        }
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ApiConfig::new("http://api.test/");
        assert_eq!(config.endpoint("/projects"), "http://api.test/projects");
        assert_eq!(
            ApiConfig::new("http://api.test").endpoint("/workhistory"),
            "http://api.test/workhistory"
        );
    }

    #[test]
    fn default_points_at_content_service() {
        assert!(ApiConfig::default().endpoint("/certifications").starts_with("http://"));
    }
}
