//! Reduction of an ordered operand list into a single result.
//!
//! `add`, `subtract` and `multiply` are left folds starting from the first
//! operand. `divide` treats the first operand as the dividend and the product
//! of the rest as the divisor, producing a floor quotient plus a remainder
//! fraction in lowest terms.

use roman_calculator_sdk::Operator;

use super::error::DomainError;
use super::range::{MAX_VALUE, MIN_VALUE};

/// Outcome of reducing the operand list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Computation {
    /// A single integer (add/subtract/multiply, or division without remainder).
    Whole(i64),
    /// Mixed fraction `quotient + remainder/divisor`.
    ///
    /// Invariants: `divisor > 0`, `0 < remainder < divisor`,
    /// `gcd(remainder, divisor) == 1`.
    Fraction {
        quotient: i64,
        remainder: i64,
        divisor: i64,
    },
}

impl Computation {
    /// The integer part subject to range validation.
    #[must_use]
    pub fn integer_part(&self) -> i64 {
        match *self {
            Computation::Whole(value) => value,
            Computation::Fraction { quotient, .. } => quotient,
        }
    }
}

/// Reduce `operands` with `operator`.
///
/// # Errors
/// - [`DomainError::InvalidInput`] if `operands` is empty
/// - [`DomainError::OutOfRange`] on arithmetic overflow or a non-positive divisor
pub fn reduce(operator: Operator, operands: &[i64]) -> Result<Computation, DomainError> {
    let (&first, rest) = operands
        .split_first()
        .ok_or_else(|| DomainError::invalid_input("no operands to reduce"))?;

    match operator {
        Operator::Add => fold(first, rest, i64::checked_add).map(Computation::Whole),
        Operator::Subtract => fold(first, rest, i64::checked_sub).map(Computation::Whole),
        Operator::Multiply => fold(first, rest, i64::checked_mul).map(Computation::Whole),
        Operator::Divide => {
            let divisor = fold(1, rest, i64::checked_mul)?;
            divide(first, divisor)
        }
    }
}

/// Divide `dividend` by `divisor` into a floor quotient and reduced remainder.
///
/// # Errors
/// Returns [`DomainError::OutOfRange`] when `divisor` is not positive.
pub fn divide(dividend: i64, divisor: i64) -> Result<Computation, DomainError> {
    if divisor <= 0 {
        return Err(out_of_range(format!("{dividend}/{divisor}")));
    }

    let quotient = dividend.div_euclid(divisor);
    let remainder = dividend.rem_euclid(divisor);

    if remainder == 0 {
        return Ok(Computation::Whole(quotient));
    }

    let g = gcd(remainder, divisor);
    Ok(Computation::Fraction {
        quotient,
        remainder: remainder / g,
        divisor: divisor / g,
    })
}

/// Greatest common divisor of two non-negative integers; `gcd(x, 0) == x`.
#[must_use]
pub fn gcd(mut x: i64, mut y: i64) -> i64 {
    while y != 0 {
        (x, y) = (y, x % y);
    }
    x
}

fn fold(
    init: i64,
    rest: &[i64],
    step: fn(i64, i64) -> Option<i64>,
) -> Result<i64, DomainError> {
    rest.iter().try_fold(init, |acc, &value| {
        step(acc, value).ok_or_else(|| out_of_range("arithmetic overflow".to_owned()))
    })
}

fn out_of_range(value: String) -> DomainError {
    DomainError::OutOfRange {
        value,
        min: MIN_VALUE,
        max: MAX_VALUE,
    }
}
