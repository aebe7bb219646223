//! REST DTOs for roman_calculator module

use serde::{Deserialize, Serialize};

/// Query string of the calculation endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateQuery {
    /// Comma-separated Roman numerals; a missing parameter is treated as empty.
    #[serde(default)]
    pub operands: String,
}

/// Liveness probe response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
