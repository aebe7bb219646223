//! In-process implementation of `RomanCalculatorClientV1`.

use std::sync::Arc;

use async_trait::async_trait;
use roman_calculator_sdk::{CalculatorError, Operator, RomanCalculatorClientV1};

use crate::domain::Service;

/// Local client that delegates to the module's Service.
pub struct RomanCalculatorLocalClient {
    service: Arc<Service>,
}

impl RomanCalculatorLocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl RomanCalculatorClientV1 for RomanCalculatorLocalClient {
    async fn calculate(
        &self,
        operator: Operator,
        operands: &str,
    ) -> Result<String, CalculatorError> {
        self.service
            .calculate(operator, operands)
            .await
            .map_err(CalculatorError::from)
    }
}
