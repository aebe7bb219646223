//! Domain layer for roman_calculator module
//!
//! Operand parsing, reduction, range validation and the calculation service.

pub mod error;
pub mod operands;
pub mod range;
pub mod reduction;
pub mod service;

pub use error::DomainError;
pub use service::Service;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod service_test;
