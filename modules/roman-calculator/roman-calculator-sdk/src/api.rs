//! Calculator API trait and error types

use async_trait::async_trait;

use crate::models::Operator;

/// Roman Calculator API trait
///
/// Performs arithmetic over comma-separated Roman numeral operands and
/// returns the result as Roman numeral text. Division results with a
/// non-zero remainder carry a reduced fraction suffix, e.g. `"III (I/II)"`.
#[async_trait]
pub trait RomanCalculatorClientV1: Send + Sync {
    /// Apply `operator` to the operands listed in `operands` (comma separated).
    async fn calculate(&self, operator: Operator, operands: &str)
    -> Result<String, CalculatorError>;
}

/// Error type for calculator operations.
///
/// Kinds only; mapping to transport status codes belongs to the caller.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// Operand text was empty or an operand was rejected as malformed
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Integer part of the result is outside the representable range
    #[error("result out of range: {0}")]
    OutOfRange(String),

    /// The numeral conversion service failed
    #[error("upstream failure: {0}")]
    UpstreamFailure(String),
}
