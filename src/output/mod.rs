//! Output renderers: terminal line and JSON.

pub mod json;
pub mod terminal;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Calculation;

/// Trait for rendering a calculation to an output format.
pub trait OutputRenderer {
    /// Render a calculation to a string, including the trailing newline.
    fn render<T: fmt::Display + Serialize>(&self, calc: &Calculation<T>) -> String;
}

/// Output format options.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render a calculation using the renderer for this format.
    pub fn render<T: fmt::Display + Serialize>(&self, calc: &Calculation<T>) -> String {
        match self {
            OutputFormat::Terminal => terminal::TerminalRenderer.render(calc),
            OutputFormat::Json => json::JsonRenderer.render(calc),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Terminal => write!(f, "terminal"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::Operation;

    #[test]
    fn parse_output_format() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("Terminal".parse::<OutputFormat>().unwrap(), OutputFormat::Terminal);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn render_dispatches_by_format() {
        let calc = Calculation::new(Operation::Multiply, 10, 5, 50);
        assert_eq!(OutputFormat::Terminal.render(&calc), "10 * 5 = 50\n");
        assert!(OutputFormat::Json.render(&calc).contains("\"multiply\""));
    }
}
