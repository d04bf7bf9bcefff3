use std::fmt;

/// Engine-wide Result type
pub type Result<T> = std::result::Result<T, EngineError>;

/// Main engine error type
///
/// Only preconditions that invalidate an entire calculation run surface as
/// errors. Recoverable data gaps (unknown currency code, missing salary row,
/// exhausted rate fallback) resolve to documented defaults instead and are
/// logged for data-quality monitoring.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// Target month did not parse as `YYYY-MM`
    #[error("Invalid month format: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    /// No rule set matched the requested rule id
    #[error("Commission rule set {0} not found")]
    RuleNotFound(i64),

    /// The requested rule set exists but is disabled
    #[error("Commission rule set {0} is disabled")]
    RuleInactive(i64),

    /// Validation errors for business rules
    #[error("Validation error: {0}")]
    Validation(String),
}

// Helper functions for common error scenarios
impl EngineError {
    pub fn validation(msg: impl Into<String>) -> Self {
        EngineError::Validation(msg.into())
    }

    pub fn invalid_month(raw: impl fmt::Display) -> Self {
        EngineError::InvalidMonth(raw.to_string())
    }
}
