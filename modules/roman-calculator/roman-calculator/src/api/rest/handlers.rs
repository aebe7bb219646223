use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Query};
use roman_calculator_sdk::Operator;

use crate::domain::Service;

use super::dto::{CalculateQuery, HealthResponse};
use super::error::domain_error_to_problem;
use super::problem::Problem;

pub type ApiResult<T> = Result<T, Problem>;

pub async fn handle_add(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<CalculateQuery>,
) -> ApiResult<String> {
    calculate(&svc, Operator::Add, &query.operands).await
}

pub async fn handle_sub(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<CalculateQuery>,
) -> ApiResult<String> {
    calculate(&svc, Operator::Subtract, &query.operands).await
}

pub async fn handle_mult(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<CalculateQuery>,
) -> ApiResult<String> {
    calculate(&svc, Operator::Multiply, &query.operands).await
}

pub async fn handle_div(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<CalculateQuery>,
) -> ApiResult<String> {
    calculate(&svc, Operator::Divide, &query.operands).await
}

#[allow(clippy::unused_async)] // axum handlers must be async
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn calculate(svc: &Service, operator: Operator, operands: &str) -> ApiResult<String> {
    tracing::info!(%operator, operands, "Calculation requested");

    svc.calculate(operator, operands)
        .await
        .map_err(|e| domain_error_to_problem(&e, &format!("/{}", operator.route_name())))
}
