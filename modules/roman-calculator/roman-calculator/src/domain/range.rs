//! Representable range of standard Roman numerals.

use super::error::DomainError;

/// Smallest accepted integer part.
pub const MIN_VALUE: i64 = 0;
/// Largest value expressible in standard Roman numerals (`MMMCMXCIX`).
pub const MAX_VALUE: i64 = 3999;

/// Ensure `value` lies within [`MIN_VALUE`]`..=`[`MAX_VALUE`]. Never clamps.
///
/// # Errors
/// Returns [`DomainError::OutOfRange`] if `value` is outside the range.
pub fn ensure_in_range(value: i64) -> Result<i64, DomainError> {
    if (MIN_VALUE..=MAX_VALUE).contains(&value) {
        Ok(value)
    } else {
        Err(DomainError::OutOfRange {
            value: value.to_string(),
            min: MIN_VALUE,
            max: MAX_VALUE,
        })
    }
}
