//! JSON output renderer.
//!
//! Outputs `{"operation": ..., "lhs": ..., "rhs": ..., "result": ...}`.

use std::fmt;

use serde::Serialize;

use crate::models::Calculation;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render<T: fmt::Display + Serialize>(&self, calc: &Calculation<T>) -> String {
        let mut out = serde_json::to_string_pretty(calc).unwrap_or_else(|_| "{}".to_string());
        out.push('\n');
        out
    }
}
