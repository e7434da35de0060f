//! The four elementary arithmetic operations.
//!
//! Every function is pure: it takes two operands of the same primitive
//! numeric type and returns a value, touching no shared state. Only
//! [`divide`] can fail.

pub mod operation;

use num_traits::{AsPrimitive, Num};
use thiserror::Error;

pub use operation::Operation;

/// Message carried by the zero-divisor error.
pub const DIVIDE_BY_ZERO: &str = "Cannot divide by zero";

/// Errors raised by arithmetic operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    /// An operand the operation cannot process (a zero divisor).
    #[error("{0}")]
    InvalidArgument(String),
}

/// Return `x + y`.
pub fn add<T: Num + Copy + std::fmt::Debug>(x: T, y: T) -> T {
    tracing::trace!(?x, ?y, "add");
    x + y
}

/// Return `x - y`.
pub fn subtract<T: Num + Copy + std::fmt::Debug>(x: T, y: T) -> T {
    tracing::trace!(?x, ?y, "subtract");
    x - y
}

/// Return `x * y`.
pub fn multiply<T: Num + Copy + std::fmt::Debug>(x: T, y: T) -> T {
    tracing::trace!(?x, ?y, "multiply");
    x * y
}

/// Return `x / y` using true (floating-point) division.
///
/// Integer operands are widened to `f64` first, so `divide(7, 2)` is `3.5`.
/// Fails with [`ArithmeticError::InvalidArgument`] when `y` is exactly zero;
/// the check runs before any division is attempted.
pub fn divide<T>(x: T, y: T) -> Result<f64, ArithmeticError>
where
    T: Num + AsPrimitive<f64> + std::fmt::Debug,
{
    tracing::trace!(?x, ?y, "divide");
    if y.is_zero() {
        tracing::debug!(?x, "rejected zero divisor");
        return Err(ArithmeticError::InvalidArgument(DIVIDE_BY_ZERO.to_string()));
    }
    Ok(x.as_() / y.as_())
}
