//! Labels for the four operations, used when rendering results.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ArithmeticError, add, divide, multiply, subtract};

/// One of the four arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Infix symbol shown between the operands.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Evaluate this operation on two `f64` operands.
    pub fn apply(self, x: f64, y: f64) -> Result<f64, ArithmeticError> {
        match self {
            Operation::Add => Ok(add(x, y)),
            Operation::Subtract => Ok(subtract(x, y)),
            Operation::Multiply => Ok(multiply(x, y)),
            Operation::Divide => divide(x, y),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Subtract => write!(f, "subtract"),
            Operation::Multiply => write!(f, "multiply"),
            Operation::Divide => write!(f, "divide"),
        }
    }
}
