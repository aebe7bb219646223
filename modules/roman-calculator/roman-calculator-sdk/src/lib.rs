//! Roman Calculator SDK
//!
//! This crate provides everything needed to consume the roman-calculator service:
//! - API trait (`RomanCalculatorClientV1`)
//! - Numeral conversion contract (`NumeralConverterClient`)
//! - Operator model (`Operator`)
//! - Error types (`CalculatorError`, `ConverterError`)
//!
//! ## Usage
//!
//! ```ignore
//! use roman_calculator_sdk::{Operator, RomanCalculatorClientV1};
//!
//! let client: Arc<dyn RomanCalculatorClientV1> = /* wired by the host */;
//! let result = client.calculate(Operator::Add, "I, IV, X, XX").await?;
//! assert_eq!(result, "XXXV");
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAITS AND TYPES ===
mod api;
pub use api::{CalculatorError, RomanCalculatorClientV1};

mod converter;
pub use converter::{ConverterError, NumeralConverterClient};

mod models;
pub use models::{Operator, UnknownOperator};
