//! calculator — elementary arithmetic with a zero-divisor guard (library crate).
//!
//! The four operations are re-exported at the crate root; the remaining
//! modules back the `calculator` binary and its integration tests.

pub mod arithmetic;
pub mod config;
pub mod constants;
pub mod demo;
pub mod env;
pub mod models;
pub mod output;

pub use arithmetic::{ArithmeticError, Operation, add, divide, multiply, subtract};
