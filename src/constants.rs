//! App-wide constants.
//!
//! Names, config paths and environment variables live here so the rest of
//! the crate never spells them out.

/// Crate version as reported by `calculator version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "calculator";

/// Local config filename, looked up in the current directory.
pub const CONFIG_FILENAME: &str = ".calculator.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "calculator";

/// First line printed by the demonstration routine.
pub const LOADED_BANNER: &str = "Calculator module loaded";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_FORMAT: &str = "CALCULATOR_FORMAT";
pub const ENV_LOG: &str = "CALCULATOR_LOG";

/// Log filter used when `CALCULATOR_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";
