//! Gateway module for the BloodLink registration REST API

mod client;
mod traits;

pub use client::ApiClient;
pub use traits::RegistrationGateway;

#[cfg(test)]
pub use traits::MockRegistrationGateway;

use thiserror::Error;

/// Fallback shown when the API gives no explanation of its own
const GENERIC_FAILURE: &str = "Registration failed. Please try again.";

/// A submission that did not go through
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The endpoint answered non-2xx with a `detail` message in the body
    #[error("registration rejected: {detail}")]
    Rejected { detail: String },
    /// The endpoint answered non-2xx without a usable error body
    #[error("registration failed with status {status}")]
    Status { status: reqwest::StatusCode },
    /// The request never completed
    #[error("registration request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl GatewayError {
    /// Message for the user notification: the server's `detail` verbatim
    /// when present, a generic retry prompt otherwise.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Rejected { detail } => detail.clone(),
            GatewayError::Status { .. } | GatewayError::Transport(_) => {
                GENERIC_FAILURE.to_string()
            }
        }
    }
}
