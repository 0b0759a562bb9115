use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Logging configuration.
    pub logging: LoggingConfig,
    /// Diagnostic display configuration.
    pub display: DisplayConfig,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug").
    pub level: String,
    /// Output format for log lines.
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    /// Human-readable output.
    Pretty,
    /// Newline-delimited JSON output.
    Json,
}

/// Diagnostic display configuration
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// When false, rendered step frames are not written to stderr.
    pub log_thoughts: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        let display = DisplayConfig {
            log_thoughts: !env::var("DISABLE_THOUGHT_LOGGING")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        };

        Config { logging, display }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { log_thoughts: true }
    }
}
