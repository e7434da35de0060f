//! Terminal renderer: a single `lhs op rhs = result` line.

use std::fmt;

use serde::Serialize;

use crate::models::Calculation;
use crate::output::OutputRenderer;

/// Plain one-line renderer.
///
/// Numbers use their `Display` form, so a whole `f64` prints without a
/// fractional part (`15`, not `15.0`).
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render<T: fmt::Display + Serialize>(&self, calc: &Calculation<T>) -> String {
        format!(
            "{} {} {} = {}\n",
            calc.lhs,
            calc.operation.symbol(),
            calc.rhs,
            calc.result
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::Operation;

    #[test]
    fn render_integer_calculation() {
        let calc = Calculation::new(Operation::Add, 10, 5, 15);
        assert_eq!(TerminalRenderer.render(&calc), "10 + 5 = 15\n");
    }

    #[test]
    fn render_whole_floats_without_fraction() {
        let calc = Calculation::new(Operation::Add, 10.0, 5.0, 15.0);
        assert_eq!(TerminalRenderer.render(&calc), "10 + 5 = 15\n");
    }

    #[test]
    fn render_fractional_division() {
        let calc = Calculation::new(Operation::Divide, 7.0, 2.0, 3.5);
        assert_eq!(TerminalRenderer.render(&calc), "7 / 2 = 3.5\n");
    }

    #[test]
    fn render_negative_operands() {
        let calc = Calculation::new(Operation::Subtract, -3.0, 4.0, -7.0);
        assert_eq!(TerminalRenderer.render(&calc), "-3 - 4 = -7\n");
    }
}
