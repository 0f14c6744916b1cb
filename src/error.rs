//! Error types for the Libris policy engine

use thiserror::Error;

/// Main application error type.
///
/// Policy failures are plain results, never panics. The `Display` text of
/// each variant is the exact message surfaced to callers, while the variant
/// itself keeps the failure taxonomy (input validation, missing data,
/// business rules, storage writes) distinguishable. Payment-gateway faults
/// never reach this type: the fee services normalize them into outcomes.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BusinessRule(String),

    #[error("{0}")]
    Storage(String),
}

/// Result type alias for policy operations
pub type AppResult<T> = Result<T, AppError>;
