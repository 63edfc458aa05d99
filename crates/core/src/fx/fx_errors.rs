use thiserror::Error;

/// Failures of a single conversion request.
///
/// All variants are recoverable: the caller is expected to show the message
/// and let the user correct the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FxError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Invalid conversion request: {0}")]
    InvalidRequest(String),
}
