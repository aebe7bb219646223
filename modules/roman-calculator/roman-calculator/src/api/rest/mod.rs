//! REST boundary for roman_calculator module.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod problem;
pub mod routes;
