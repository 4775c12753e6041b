//! HTTP client for the BloodLink registration API

use super::{GatewayError, RegistrationGateway};
use crate::config::ClientConfig;
use crate::state::RegistrationPayload;
use async_trait::async_trait;
use serde::Deserialize;

/// Default API base URL
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Error body returned by the API on rejection
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Client posting registrations to the BloodLink backend
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Resolve the base URL from the environment, then the config file,
    /// then the localhost default.
    pub fn new(config: &ClientConfig) -> Self {
        let base_url = std::env::var("BLOODLINK_API_URL")
            .ok()
            .or_else(|| config.api_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn register_url(&self) -> String {
        format!("{}/api/requestors/register", self.base_url)
    }
}

#[async_trait]
impl RegistrationGateway for ApiClient {
    async fn register(&self, payload: &RegistrationPayload) -> Result<(), GatewayError> {
        tracing::debug!(url = %self.register_url(), "submitting registration");

        let response = self
            .http
            .post(self.register_url())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(%status, email = %payload.email, "registration accepted");
            return Ok(());
        }

        // Prefer the API's own explanation over the bare status
        match response.json::<ErrorBody>().await {
            Ok(ErrorBody {
                detail: Some(detail),
            }) => {
                tracing::warn!(%status, %detail, "registration rejected");
                Err(GatewayError::Rejected { detail })
            }
            _ => {
                tracing::warn!(%status, "registration failed without error detail");
                Err(GatewayError::Status { status })
            }
        }
    }
}
