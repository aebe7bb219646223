//! Operand list parsing.

use super::error::DomainError;

/// Separator between operands in the request text.
pub const OPERAND_SEPARATOR: char = ',';

/// Split operand text into trimmed tokens, preserving order.
///
/// Only an entirely empty or whitespace-only input is rejected here. Empty
/// tokens between separators (`"I,,II"`) are kept and left for the numeral
/// converter to reject.
///
/// # Errors
/// Returns [`DomainError::InvalidInput`] when `text` has no non-whitespace content.
pub fn parse_operands(text: &str) -> Result<Vec<&str>, DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::invalid_input("operand list is empty"));
    }

    Ok(text.split(OPERAND_SEPARATOR).map(str::trim).collect())
}
