//! Numeral converter adapters.

mod http_client;

pub use http_client::{ConverterClientBuildError, HttpNumeralConverter};
