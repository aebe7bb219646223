//! Infrastructure adapters for roman_calculator module.

pub mod converter;
