use roman_calculator_sdk::{CalculatorError, ConverterError};

/// Errors produced by the calculation pipeline.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The converter rejected an operand; carries the converter's message.
    #[error("numeral rejected by converter: {0}")]
    RejectedNumeral(String),

    #[error("result {value} is outside the range {min}..={max}")]
    OutOfRange { value: String, min: i64, max: i64 },

    #[error("numeral converter failed: {0}")]
    Upstream(String),
}

impl DomainError {
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Stable machine-readable code, used by the REST layer.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) | Self::RejectedNumeral(_) => "invalid_input",
            Self::OutOfRange { .. } => "out_of_range",
            Self::Upstream(_) => "upstream_failure",
        }
    }
}

impl From<ConverterError> for DomainError {
    fn from(err: ConverterError) -> Self {
        match err {
            ConverterError::InvalidInput(msg) => Self::RejectedNumeral(msg),
            ConverterError::Upstream(msg) => Self::Upstream(msg),
        }
    }
}

impl From<DomainError> for CalculatorError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidInput(msg) | DomainError::RejectedNumeral(msg) => {
                CalculatorError::InvalidInput(msg)
            }
            e @ DomainError::OutOfRange { .. } => CalculatorError::OutOfRange(e.to_string()),
            DomainError::Upstream(msg) => CalculatorError::UpstreamFailure(msg),
        }
    }
}
