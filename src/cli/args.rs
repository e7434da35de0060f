//! Clap argument types.

use clap::Parser;

use calculator::Operation;
use calculator::output::OutputFormat;

/// Elementary arithmetic. Runs a short demonstration when no command is given.
#[derive(Parser, Debug)]
#[command(name = "calculator", version = calculator::constants::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Add two numbers.
    Add(OperandArgs),

    /// Subtract the second number from the first.
    Subtract(OperandArgs),

    /// Multiply two numbers.
    Multiply(OperandArgs),

    /// Divide the first number by the second.
    Divide(OperandArgs),

    /// Print version information.
    Version,
}

impl Command {
    /// The arithmetic operation and operands for this command, if any.
    pub fn operation(&self) -> Option<(Operation, &OperandArgs)> {
        match self {
            Command::Add(args) => Some((Operation::Add, args)),
            Command::Subtract(args) => Some((Operation::Subtract, args)),
            Command::Multiply(args) => Some((Operation::Multiply, args)),
            Command::Divide(args) => Some((Operation::Divide, args)),
            Command::Version => None,
        }
    }
}

/// Two operands and an optional output format.
#[derive(Parser, Debug)]
pub struct OperandArgs {
    /// Left-hand operand.
    #[arg(allow_negative_numbers = true)]
    pub x: f64,

    /// Right-hand operand.
    #[arg(allow_negative_numbers = true)]
    pub y: f64,

    /// Output format (overrides config and CALCULATOR_FORMAT).
    #[arg(long)]
    pub format: Option<OutputFormat>,
}
