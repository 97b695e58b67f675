use async_trait::async_trait;

use super::config::ApiConfig;
use super::error::FetchError;

/// Transport for the content service: GET a path, return the response body.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait ContentSource {
    async fn get(&self, path: &str) -> Result<String, FetchError>;
}

/// Unauthenticated HTTP transport backed by `reqwest`.
pub struct HttpContentSource {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpContentSource {
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        let builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(30));

        let client = builder
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl ContentSource for HttpContentSource {
    async fn get(&self, path: &str) -> Result<String, FetchError> {
        let url = self.config.endpoint(path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}
