//! Engine API port - the client's view of the scenario backend
//!
//! Application services talk to the engine exclusively through this trait,
//! so they can be exercised against a mock without any HTTP in the loop.
//!
//! Note: The async methods use `async_trait` instead of returning
//! `Pin<Box<dyn Future>>` for better mockall compatibility.

use async_trait::async_trait;

use scenarium_domain::{Scenario, ScenarioId};
use scenarium_shared::{ErrorCode, LikeCountData};

/// Errors surfaced by engine API adapters
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Request could not be sent or timed out before a response arrived
    Network(String),
    /// Engine answered with a non-success status
    Status {
        status: u16,
        code: ErrorCode,
        message: String,
    },
    /// Response body could not be decoded
    Parse(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status {
                status,
                code,
                message,
            } => {
                write!(f, "Engine error {} ({:?}): {}", status, code, message)
            }
            ApiError::Parse(msg) => write!(f, "Failed to decode response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Port for the engine's scenario and like-counter API
///
/// Covers the whole read surface (catalog, detail, counts) plus the two
/// like mutations. Implementations live in `infrastructure`.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ScenarioApiPort: Send + Sync {
    /// Fetch the full scenario catalog, in catalog order
    async fn list_scenarios(&self) -> Result<Vec<Scenario>, ApiError>;

    /// Fetch a single scenario by id
    async fn get_scenario(&self, id: ScenarioId) -> Result<Scenario, ApiError>;

    /// Read the current like count for a scenario
    async fn like_count(&self, id: ScenarioId) -> Result<LikeCountData, ApiError>;

    /// Register one like for a scenario
    async fn like(&self, id: ScenarioId) -> Result<LikeCountData, ApiError>;

    /// Withdraw one like from a scenario
    async fn unlike(&self, id: ScenarioId) -> Result<LikeCountData, ApiError>;
}
