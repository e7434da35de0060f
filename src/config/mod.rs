//! Configuration loading and layering.
//!
//! Handles `.calculator.toml` loading, environment variable resolution,
//! and CLI flag merging with proper priority ordering.

pub mod loader;

pub use loader::{Config, ConfigError, OutputConfig};
