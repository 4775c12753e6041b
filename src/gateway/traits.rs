//! Trait abstraction for the registration endpoint to enable mocking in tests

use super::GatewayError;
use crate::state::RegistrationPayload;
use async_trait::async_trait;

/// The wizard only needs to call, await, and branch on the outcome; how the
/// payload travels is this trait's concern.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationGateway: Send + Sync {
    /// Submit a completed registration
    async fn register(&self, payload: &RegistrationPayload) -> Result<(), GatewayError>;
}
