//! Structured logging setup for envtag
//!
//! This module provides initialization and configuration for structured logging using
//! the `tracing` ecosystem. It supports console and JSON output, filtering, and
//! runtime configuration via environment variables.
//!
//! # Features
//!
//! - Console output with pretty formatting (default)
//! - Optional JSON output for production environments
//! - Environment-based configuration via `RUST_LOG`
//! - Configurable log levels and formatting options
//! - Thread-safe, can only be initialized once
//!
//! # Example
//!
//! ```no_run
//! use envtag::util::logging;
//!
//! // Initialize with default configuration
//! logging::init_default();
//!
//! // Or initialize from environment variables
//! logging::init_from_env();
//!
//! // Now use tracing macros throughout your code
//! use tracing::{debug, info};
//!
//! info!("Application started");
//! debug!(path = ".env", "Loading annotated env file");
//! ```

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

/// Configuration for logging initialization
///
/// This struct controls how the logging system behaves, including the minimum
/// log level, output format, and what information is included in log messages.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Use JSON output format (for structured logging in production)
    pub use_json: bool,

    /// Include the module target (e.g., envtag::parser) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,

    /// Include thread ID and name in logs
    pub include_thread_ids: bool,
}

impl Default for LoggingConfig {
    /// Creates a default logging configuration
    ///
    /// Defaults:
    /// - Level: INFO
    /// - JSON: false (pretty console output)
    /// - Target: true
    /// - Location: false (for cleaner output)
    /// - Thread IDs: false
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
            include_thread_ids: false,
        }
    }
}

impl LoggingConfig {
    /// Creates a logging configuration with the specified level
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Creates a logging configuration for production use
    ///
    /// This enables JSON output and includes more metadata for structured logging.
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            use_json: true,
            include_target: true,
            include_location: true,
            include_thread_ids: true,
        }
    }

    /// Creates a logging configuration for development use
    ///
    /// This uses pretty console output with debug level and minimal metadata.
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            use_json: false,
            include_target: true,
            include_location: false,
            include_thread_ids: false,
        }
    }
}

/// Parses a log level from a string
///
/// Returns the corresponding `Level`, or `Level::INFO` if parsing fails.
///
/// # Example
///
/// ```
/// use envtag::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("INFO"), Level::INFO);
/// assert_eq!(parse_level("invalid"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

/// Initializes the logging system with the provided configuration
///
/// This function sets up the `tracing` subscriber with the specified configuration.
/// It can only be called once, subsequent calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env()
            .add_directive(format!("envtag={}", config.level).parse().unwrap());

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_thread_ids(config.include_thread_ids)
                        .with_thread_names(config.include_thread_ids),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_thread_ids(config.include_thread_ids)
                        .with_thread_names(config.include_thread_ids),
                )
                .init();
        }
    });
}

/// Initializes logging with default configuration
///
/// INFO level, pretty console output, module targets included, `RUST_LOG`
/// respected.
pub fn init_default() {
    init_logging(LoggingConfig::default());
}

/// Initializes logging from environment variables
///
/// This reads configuration from:
/// - `ENVTAG_LOG_LEVEL` - Log level (trace, debug, info, warn, error)
/// - `ENVTAG_LOG_JSON` - Use JSON output (true/false)
/// - `RUST_LOG` - Standard Rust log filtering
///
/// Falls back to default configuration if environment variables are not set.
pub fn init_from_env() {
    let level_str = env::var("ENVTAG_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let level = parse_level(&level_str);

    let use_json = env::var("ENVTAG_LOG_JSON")
        .ok()
        .and_then(|v| v.parse::<bool>().ok())
        .unwrap_or(false);

    let config = LoggingConfig {
        level,
        use_json,
        ..Default::default()
    };

    init_logging(config);
}

/// Initializes logging with a specific log level from string
pub fn with_level(level_str: &str) {
    let level = parse_level(level_str);
    init_logging(LoggingConfig::with_level(level));
}
