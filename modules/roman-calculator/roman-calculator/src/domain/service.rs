//! Domain service for roman_calculator
//!
//! Runs one calculation end to end: parse operands, convert them through the
//! numeral converter, reduce, validate the range and format the result.
//! The service holds no mutable state; concurrent calls are independent.

use std::sync::Arc;

use futures::future::try_join_all;
use roman_calculator_sdk::{NumeralConverterClient, Operator};
use tracing::{debug, instrument};

use super::error::DomainError;
use super::operands::parse_operands;
use super::range::ensure_in_range;
use super::reduction::{Computation, reduce};

/// Calculator engine.
pub struct Service {
    converter: Arc<dyn NumeralConverterClient>,
}

impl Service {
    /// Create a new service backed by the given numeral converter.
    #[must_use]
    pub fn new(converter: Arc<dyn NumeralConverterClient>) -> Self {
        Self { converter }
    }

    /// Apply `operator` to the comma-separated Roman numeral `operands`.
    ///
    /// # Errors
    /// - [`DomainError::InvalidInput`] for empty operand text
    /// - [`DomainError::RejectedNumeral`] if the converter rejects an operand
    /// - [`DomainError::OutOfRange`] if the integer part is outside `0..=3999`
    /// - [`DomainError::Upstream`] if the converter fails for any other reason
    #[instrument(skip(self, operator), fields(operator = %operator))]
    pub async fn calculate(&self, operator: Operator, operands: &str) -> Result<String, DomainError> {
        let tokens = parse_operands(operands)?;
        let values = self.convert_operands(&tokens).await?;
        debug!(?values, "operands converted");

        let computation = reduce(operator, &values)?;
        ensure_in_range(computation.integer_part())?;
        debug!(?computation, "computation validated");

        self.format(computation).await
    }

    /// Convert all tokens concurrently; results keep the token order.
    async fn convert_operands(&self, tokens: &[&str]) -> Result<Vec<i64>, DomainError> {
        let conversions = tokens.iter().map(|token| self.converter.to_number(token));
        try_join_all(conversions).await.map_err(DomainError::from)
    }

    async fn format(&self, computation: Computation) -> Result<String, DomainError> {
        match computation {
            Computation::Whole(value) => Ok(self.converter.to_roman(value).await?),
            Computation::Fraction {
                quotient,
                remainder,
                divisor,
            } => {
                let (quotient, remainder, divisor) = futures::try_join!(
                    self.converter.to_roman(quotient),
                    self.converter.to_roman(remainder),
                    self.converter.to_roman(divisor),
                )?;
                Ok(format!("{quotient} ({remainder}/{divisor})"))
            }
        }
    }
}
