//! Roman Calculator Module definition
//!
//! Builds the converter client and the domain Service, exposes the SDK client
//! and the REST routes to the host.

use std::sync::Arc;

use axum::Router;
use roman_calculator_sdk::{NumeralConverterClient, RomanCalculatorClientV1};

use crate::api::rest::routes;
use crate::config::ConverterConfig;
use crate::domain::Service;
use crate::infra::converter::{ConverterClientBuildError, HttpNumeralConverter};
use crate::local_client::RomanCalculatorLocalClient;

/// Roman calculator module.
pub struct RomanCalculatorModule {
    service: Arc<Service>,
}

impl RomanCalculatorModule {
    /// Initialize the module against the HTTP numeral converter.
    ///
    /// # Errors
    /// Returns an error if the converter client cannot be built from `config`.
    pub fn init(config: &ConverterConfig) -> Result<Self, ConverterClientBuildError> {
        tracing::info!("Initializing roman_calculator module");

        let converter = Arc::new(HttpNumeralConverter::new(config)?);
        let module = Self::with_converter(converter);

        tracing::info!(converter = %config.base_url, "roman_calculator module initialized");
        Ok(module)
    }

    /// Initialize the module with an arbitrary converter implementation.
    #[must_use]
    pub fn with_converter(converter: Arc<dyn NumeralConverterClient>) -> Self {
        Self {
            service: Arc::new(Service::new(converter)),
        }
    }

    /// Client for in-process consumers.
    #[must_use]
    pub fn client(&self) -> Arc<dyn RomanCalculatorClientV1> {
        Arc::new(RomanCalculatorLocalClient::new(Arc::clone(&self.service)))
    }

    /// Add the module's REST routes to `router`.
    pub fn register_rest(&self, router: Router) -> Router {
        tracing::info!("Registering roman_calculator REST routes");
        routes::register_routes(router, Arc::clone(&self.service))
    }
}
