//! Global output configuration and utilities.
//!
//! This module provides centralized control over CLI output behavior.
//!
//! ## Design Principles
//!
//! - Translation output goes to stdout (for piping)
//! - Status messages, progress, and debug traces go to stderr
//! - Errors always go to stderr
//! - Quiet mode suppresses non-essential output

use std::io::{self, Write};
use std::sync::OnceLock;

/// Global output configuration.
static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Emit debug traces to stderr.
    pub debug: bool,
}

/// Initialize the global output configuration.
///
/// This should be called once at startup with the CLI flags.
/// If called multiple times, subsequent calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// Get the current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

/// Check if quiet mode is enabled.
pub fn is_quiet() -> bool {
    config().quiet
}

/// Check if debug traces are enabled.
pub fn is_debug() -> bool {
    config().debug
}

/// Print a status message to stderr (respects quiet mode).
///
/// Use this for progress indicators and informational messages.
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Print a debug trace to stderr (only with `--debug`).
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::output::is_debug() {
            eprint!("DEBUG: ");
            eprintln!($($arg)*);
        }
    };
}

/// Flush stderr.
pub fn flush_stderr() {
    let _ = io::stderr().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_config_default() {
        let config = OutputConfig::default();
        assert!(!config.quiet);
        assert!(!config.debug);
    }
}
