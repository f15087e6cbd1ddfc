use thiserror::Error;

pub type Result<T> = std::result::Result<T, OverflowError>;

/// The sum of `x` and `y` does not fit in an `i64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("integer overflow adding {x} and {y}")]
pub struct OverflowError {
    pub x: i64,
    pub y: i64,
}
