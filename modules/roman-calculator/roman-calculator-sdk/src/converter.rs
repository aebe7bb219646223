//! Numeral conversion contract
//!
//! The calculator never parses or renders Roman numerals itself; it delegates
//! both directions to an implementation of [`NumeralConverterClient`].

use async_trait::async_trait;

/// Converts between Roman numeral text and integers.
#[async_trait]
pub trait NumeralConverterClient: Send + Sync {
    /// Convert Roman numeral text to its integer value.
    async fn to_number(&self, text: &str) -> Result<i64, ConverterError>;

    /// Render an integer as Roman numeral text.
    async fn to_roman(&self, value: i64) -> Result<String, ConverterError>;
}

/// Error type for numeral conversion.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConverterError {
    /// The converter rejected the input (malformed numeral or out-of-domain integer)
    #[error("converter rejected input: {0}")]
    InvalidInput(String),

    /// Any other failure: transport, timeout, unexpected status or response shape
    #[error("converter unavailable: {0}")]
    Upstream(String),
}
