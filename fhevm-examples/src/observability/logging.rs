//! Logging initialization for `fhevm-examples`.
//!
//! Provides structured logging via `tracing` with human-readable and
//! JSON output formats, configurable verbosity, and environment-based
//! override via `FHEVM_EXAMPLES_LOG_LEVEL`.

use std::io::IsTerminal;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::cli::args::ColorChoice;

/// Environment variable that overrides the verbosity flags.
pub const LOG_LEVEL_ENV: &str = "FHEVM_EXAMPLES_LOG_LEVEL";

/// Log output format.
///
/// Controls how log messages are rendered to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with optional ANSI colors.
    #[default]
    Human,
    /// Newline-delimited JSON for machine consumption.
    Json,
}

/// Maps a verbosity level to a tracing directive string.
///
/// - 0 → `"warn"`
/// - 1 → `"info"`
/// - 2 → `"debug"`
/// - 3+ → `"trace"` (saturates)
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Whether log output should carry ANSI colors.
///
/// `Auto` enables colors only when stderr is a terminal and `NO_COLOR` is
/// unset.
#[must_use]
pub fn use_ansi(color: ColorChoice) -> bool {
    match color {
        ColorChoice::Auto => {
            std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

/// Builds the log filter from `-v` occurrences and the value of
/// `FHEVM_EXAMPLES_LOG_LEVEL`, if any.
///
/// A valid override wins over the flags; an unparsable one is ignored with a
/// note on stderr.
#[must_use]
pub fn log_filter(verbosity: u8, level_override: Option<&str>) -> EnvFilter {
    let fallback = || EnvFilter::new(verbosity_to_directive(verbosity));
    match level_override.map(str::trim) {
        None | Some("") => fallback(),
        Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|e| {
            eprintln!("ignoring {LOG_LEVEL_ENV}={directives}: {e}");
            fallback()
        }),
    }
}

/// Initializes the global tracing subscriber.
///
/// If `FHEVM_EXAMPLES_LOG_LEVEL` is set it takes precedence over
/// `verbosity`. Uses `try_init()` so calling this more than once is safe.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let level_override = std::env::var(LOG_LEVEL_ENV).ok();
    let filter = log_filter(verbosity, level_override.as_deref());

    let show_target = verbosity >= 2;

    match format {
        LogFormat::Human => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(use_ansi(color))
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_default_is_human() {
        assert_eq!(LogFormat::default(), LogFormat::Human);
    }

    #[test]
    fn init_logging_does_not_panic() {
        init_logging(LogFormat::Human, 0, ColorChoice::Auto);
        init_logging(LogFormat::Json, 3, ColorChoice::Never);
    }

    #[test]
    fn explicit_color_choices() {
        assert!(use_ansi(ColorChoice::Always));
        assert!(!use_ansi(ColorChoice::Never));
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(verbosity_to_directive(0), "warn");
        assert_eq!(verbosity_to_directive(1), "info");
        assert_eq!(verbosity_to_directive(2), "debug");
        assert_eq!(verbosity_to_directive(3), "trace");
    }

    #[test]
    fn filter_follows_verbosity_without_override() {
        assert_eq!(log_filter(0, None).to_string(), "warn");
        assert_eq!(log_filter(2, None).to_string(), "debug");
        assert_eq!(log_filter(1, Some("  ")).to_string(), "info");
    }

    #[test]
    fn filter_override_wins_over_verbosity() {
        assert_eq!(log_filter(0, Some("debug")).to_string(), "debug");
        assert_eq!(
            log_filter(3, Some("fhevm_examples_docs=info")).to_string(),
            "fhevm_examples_docs=info"
        );
    }

    #[test]
    fn filter_invalid_override_falls_back() {
        assert_eq!(log_filter(1, Some("docs=loud")).to_string(), "info");
    }

    #[test]
    fn verbosity_saturates_at_trace() {
        assert_eq!(verbosity_to_directive(255), "trace");
    }
}
