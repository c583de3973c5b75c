//! Shared error type across gatekeep crates.

use thiserror::Error;

/// Stable error codes (safe to log and to match on in tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Model or policy source could not be read.
    LoadFailed,
    /// Malformed model definition.
    InvalidModel,
    /// Malformed policy rule set.
    InvalidPolicy,
    /// Unsupported config/model version.
    UnsupportedVersion,
    /// Invalid configuration input.
    BadRequest,
    /// The engine could not evaluate a query.
    Evaluation,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::LoadFailed => "LOAD_FAILED",
            ErrorCode::InvalidModel => "INVALID_MODEL",
            ErrorCode::InvalidPolicy => "INVALID_POLICY",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::Evaluation => "EVALUATION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, GatekeepError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum GatekeepError {
    #[error("load failed: {0}")]
    Load(String),
    #[error("invalid model: {0}")]
    InvalidModel(String),
    #[error("invalid policy: {0}")]
    InvalidPolicy(String),
    #[error("unsupported version")]
    UnsupportedVersion,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("evaluation failed: {0}")]
    Evaluation(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl GatekeepError {
    /// Map error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            GatekeepError::Load(_) => ErrorCode::LoadFailed,
            GatekeepError::InvalidModel(_) => ErrorCode::InvalidModel,
            GatekeepError::InvalidPolicy(_) => ErrorCode::InvalidPolicy,
            GatekeepError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            GatekeepError::BadRequest(_) => ErrorCode::BadRequest,
            GatekeepError::Evaluation(_) => ErrorCode::Evaluation,
            GatekeepError::Internal(_) => ErrorCode::Internal,
        }
    }
}
