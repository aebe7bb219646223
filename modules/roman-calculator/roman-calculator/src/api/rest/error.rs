use axum::http::StatusCode;

use super::problem::Problem;
use crate::domain::DomainError;

/// Map domain error to RFC 9457 Problem.
///
/// `InvalidInput` and `RejectedNumeral` → 400, `OutOfRange` → 501, `Upstream` → 500.
/// Converter messages are logged, never returned to the client.
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let trace_id = tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string());

    let problem = match e {
        DomainError::InvalidInput(msg) => {
            tracing::warn!(error = %e, "Rejected calculation input");
            Problem::new(StatusCode::BAD_REQUEST, "Bad Request", msg.clone())
        }
        DomainError::RejectedNumeral(_) => {
            tracing::warn!(error = %e, "Numeral converter rejected an operand");
            Problem::new(
                StatusCode::BAD_REQUEST,
                "Bad Request",
                "An operand is not a valid Roman numeral",
            )
        }
        DomainError::OutOfRange { .. } => {
            tracing::warn!(error = %e, "Calculation result not representable");
            Problem::new(StatusCode::NOT_IMPLEMENTED, "Not Implemented", e.to_string())
        }
        DomainError::Upstream(_) => {
            tracing::error!(error = %e, "Numeral converter failure");
            Problem::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "The numeral converter is unavailable",
            )
        }
    };

    problem
        .with_code(e.code())
        .with_instance(instance)
        .with_trace_id(trace_id)
}
