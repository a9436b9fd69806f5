//! Request/response payloads for the HTTP API.

use serde::{Deserialize, Serialize};

/// Body of the like increment/decrement endpoints.
///
/// `id` is optional so that a body with the field omitted still
/// deserializes; the engine answers `invalid_request` when it is absent or
/// non-positive instead of letting the framework reject the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeRequest {
    pub id: Option<i64>,
}

impl LikeRequest {
    pub fn new(id: i64) -> Self {
        Self { id: Some(id) }
    }
}

/// Current like count for a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeCountData {
    pub id: u32,
    pub count: u64,
}

/// Machine-readable error category carried in error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidRequest,
    NotFound,
    Internal,
}

/// JSON body of every non-2xx API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorBody {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
