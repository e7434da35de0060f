//! calculator — elementary arithmetic CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use calculator::config;
use calculator::constants;
use calculator::demo;
use calculator::env;
use calculator::models;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::args::{Cli, OperandArgs};
use config::Config;
use env::Env;
use models::Calculation;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    init_tracing(&Env::real());

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return demo::run(&mut std::io::stdout().lock()).context("failed to write demo output");
    };

    match command.operation() {
        Some((operation, args)) => run_operation(operation, args),
        None => run_version(),
    }
}

/// Install a stderr log subscriber filtered by `CALCULATOR_LOG`.
fn init_tracing(env: &Env) {
    let filter = env
        .var(constants::ENV_LOG)
        .ok()
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(constants::DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Print version information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    Ok(())
}

/// Evaluate one operation and print it in the configured format.
fn run_operation(operation: calculator::Operation, args: &OperandArgs) -> Result<()> {
    let work_dir = std::env::current_dir().context("failed to resolve working directory")?;
    let config = Config::load(Some(&work_dir), &Env::real())
        .context("failed to load configuration")?;
    let format = args.format.unwrap_or_else(|| config.output_format());

    let result = operation.apply(args.x, args.y)?;
    tracing::debug!(%operation, %format, result, "evaluated");

    let calc = Calculation::new(operation, args.x, args.y, result);
    print!("{}", format.render(&calc));
    Ok(())
}
