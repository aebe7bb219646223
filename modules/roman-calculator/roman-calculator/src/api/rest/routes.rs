//! Route registration for roman_calculator module

use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use crate::domain::Service;

use super::handlers;

/// Register all REST routes for roman_calculator module.
///
/// # Arguments
/// * `router` - Axum router to add routes to
/// * `service` - Domain Service
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        // GET /add?operands=I,II
        .route("/add", get(handlers::handle_add))
        // GET /sub?operands=X,I
        .route("/sub", get(handlers::handle_sub))
        // GET /mult?operands=X,II
        .route("/mult", get(handlers::handle_mult))
        // GET /div?operands=X,III
        .route("/div", get(handlers::handle_div))
        .route("/health", get(handlers::handle_health))
        .layer(Extension(service))
}
