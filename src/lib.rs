#[cfg(feature = "certora")]
mod certora;
mod error;

pub use error::{OverflowError, Result};

/// Adds two integers together.
/// Returns the sum of x and y, or an [`OverflowError`] if it does not fit in an `i64`.
///
/// # Examples
///
/// ```
/// assert_eq!(math_utils::add(1, 2), Ok(3));
/// assert!(math_utils::add(i64::MAX, 1).is_err());
/// ```
pub const fn add(x: i64, y: i64) -> Result<i64> {
    match x.checked_add(y) {
        Some(sum) => Ok(sum),
        None => Err(OverflowError { x, y }),
    }
}
