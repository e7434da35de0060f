//! Shared types used across modules.

use serde::Serialize;

use crate::arithmetic::Operation;

/// A single evaluated operation: `lhs operation rhs = result`.
///
/// Operands and result share one numeric type. Division results are always
/// `f64`, so a divided calculation is built from widened operands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Calculation<T = f64> {
    pub operation: Operation,
    pub lhs: T,
    pub rhs: T,
    pub result: T,
}

impl<T> Calculation<T> {
    pub fn new(operation: Operation, lhs: T, rhs: T, result: T) -> Self {
        Self {
            operation,
            lhs,
            rhs,
            result,
        }
    }
}
