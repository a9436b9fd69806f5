//! Service layer error types
//!
//! This module defines errors that can occur in the application service layer,
//! abstracting over the transport-specific `ApiError`.

use scenarium_shared::ErrorCode;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone)]
pub enum ServiceError {
    /// The engine could not be reached
    Unavailable(String),
    /// The engine rejected the request
    Rejected { code: ErrorCode, message: String },
    /// Response data could not be interpreted
    Parse(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Unavailable(msg) => write!(f, "Engine unavailable: {}", msg),
            ServiceError::Rejected { code, message } => {
                write!(f, "Engine rejected request ({:?}): {}", code, message)
            }
            ServiceError::Parse(msg) => write!(f, "Failed to parse response: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<ApiError> for ServiceError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Network(msg) => ServiceError::Unavailable(msg),
            ApiError::Status { code, message, .. } => ServiceError::Rejected { code, message },
            ApiError::Parse(msg) => ServiceError::Parse(msg),
        }
    }
}

impl ServiceError {
    /// Check if this is a "not found" rejection
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ServiceError::Rejected {
                code: ErrorCode::NotFound,
                ..
            }
        )
    }

    /// Check if this is a validation rejection (bad or missing id)
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            ServiceError::Rejected {
                code: ErrorCode::InvalidRequest,
                ..
            }
        )
    }
}
