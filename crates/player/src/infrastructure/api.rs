//! HTTP adapter for the engine's scenario API

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use scenarium_domain::{Scenario, ScenarioId};
use scenarium_shared::{ErrorBody, ErrorCode, LikeCountData, LikeRequest};

use crate::ports::outbound::{ApiError, ScenarioApiPort};

/// Default engine base URL.
pub const DEFAULT_ENGINE_URL: &str = "http://localhost:3000";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the engine's REST API
#[derive(Clone)]
pub struct HttpScenarioApi {
    client: Client,
    base_url: String,
}

impl HttpScenarioApi {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create client with custom timeout (for testing).
    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create client from environment variables.
    ///
    /// Uses `SCENARIUM_ENGINE_URL`, falling back to the default if not set.
    pub fn from_env() -> Self {
        let base_url = std::env::var("SCENARIUM_ENGINE_URL")
            .unwrap_or_else(|_| DEFAULT_ENGINE_URL.to_string());
        Self::new(&base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::decode(response).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &LikeRequest,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::decode(response).await
    }

    /// Turn a response into typed data, or into the engine's error shape.
    ///
    /// Non-success responses normally carry an `ErrorBody`; anything else
    /// (a proxy error page, say) is reported verbatim under `internal`.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let (code, message) = match serde_json::from_str::<ErrorBody>(&text) {
                Ok(body) => (body.code, body.message),
                Err(_) => (ErrorCode::Internal, text),
            };
            return Err(ApiError::Status {
                status: status.as_u16(),
                code,
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl Default for HttpScenarioApi {
    fn default() -> Self {
        Self::new(DEFAULT_ENGINE_URL)
    }
}

#[async_trait]
impl ScenarioApiPort for HttpScenarioApi {
    async fn list_scenarios(&self) -> Result<Vec<Scenario>, ApiError> {
        self.get_json("/api/scenarios").await
    }

    async fn get_scenario(&self, id: ScenarioId) -> Result<Scenario, ApiError> {
        self.get_json(&format!("/api/scenarios/{}", id)).await
    }

    async fn like_count(&self, id: ScenarioId) -> Result<LikeCountData, ApiError> {
        self.get_json(&format!("/api/likes?id={}", id)).await
    }

    async fn like(&self, id: ScenarioId) -> Result<LikeCountData, ApiError> {
        self.post_json("/api/likes/increment", &LikeRequest::new(i64::from(id.get())))
            .await
    }

    async fn unlike(&self, id: ScenarioId) -> Result<LikeCountData, ApiError> {
        self.post_json("/api/likes/decrement", &LikeRequest::new(i64::from(id.get())))
            .await
    }
}
