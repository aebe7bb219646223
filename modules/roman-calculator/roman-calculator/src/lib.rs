//! Roman Calculator Module
//!
//! Arithmetic over Roman numeral operands, served over REST.
//! Numeral parsing and rendering are delegated to a remote converter service.
//!
//! ## Architecture
//!
//! - `domain` - operand parsing, reduction, range validation, `Service`
//! - `infra::converter` - HTTP client for the numeral converter
//! - `api::rest` - routes, handlers and problem responses
//! - `module.rs` - wiring of the above for the host
//!
//! The public contract lives in `roman-calculator-sdk` and is re-exported here.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub use roman_calculator_sdk::{
    CalculatorError, ConverterError, NumeralConverterClient, Operator, RomanCalculatorClientV1,
};

// === MODULE DEFINITION ===
mod module;
pub use module::RomanCalculatorModule;

pub mod config;
pub use config::ConverterConfig;

pub mod local_client;

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod testing;
