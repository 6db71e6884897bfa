//! Error types for DoseCheck

use thiserror::Error;

/// Main error type for DoseCheck operations
///
/// Every variant here is recoverable: a rejected draft leaves the store
/// untouched and the caller may re-prompt. The core has no fatal failure
/// mode.
#[derive(Debug, Error)]
pub enum DoseCheckError {
    /// A required draft field was never filled in
    #[error("Incomplete constraint draft: missing {0}")]
    MissingField(&'static str),

    /// The dose limit must be a finite number
    #[error("Dose limit is not finite: {0}")]
    NonFiniteLimit(f64),

    /// Vx constraints need the dose threshold "x"
    #[error("Vx constraint requires a finite dose parameter")]
    MissingVxParam,

    /// The caution fraction must be finite and >= 0
    #[error("Invalid caution fraction: {0}")]
    InvalidTolerance(f64),

    /// Export serialization failed
    #[error("Export error: {0}")]
    Export(String),
}

/// Result type alias for DoseCheck operations
pub type Result<T> = std::result::Result<T, DoseCheckError>;
