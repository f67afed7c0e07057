// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;

pub use crate::logging::events::LogLevel;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Minimum level forwarded by the logging service
    pub min_log_level: LogLevel,

    /// Whether events are rendered as single-line JSON
    pub use_structured_logging: bool,

    /// Whether every interpreted message is logged at debug level
    pub log_dispatch_events: bool,

    /// Whether context key/value pairs are appended to rendered messages
    pub include_context: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            min_log_level: env::var(env_vars::LOG_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
            use_structured_logging: env::var(env_vars::LOG_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dispatch_events: env::var(env_vars::LOG_DISPATCH)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            include_context: env::var(env_vars::LOG_INCLUDE_CONTEXT)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultPreferences {
    /// Whether unknown rule ids are reported as warnings during normalization
    pub warn_on_unknown_rules: bool,

    /// Whether screenshots are kept on the scan completed payload
    pub keep_screenshots: bool,
}

impl Default for ResultPreferences {
    fn default() -> Self {
        Self {
            warn_on_unknown_rules: env::var(env_vars::WARN_UNKNOWN_RULES)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            keep_screenshots: env::var(env_vars::KEEP_SCREENSHOTS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

/// Complete runtime preferences of the core
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorePreferences {
    pub logging: LoggingPreferences,
    pub results: ResultPreferences,
}

impl CorePreferences {
    /// Read every preference from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::default()
    }
}

/// Parse a log level name as accepted by `INSIGHTS_LOG_LEVEL`
pub fn parse_log_level(value: &str) -> Option<LogLevel> {
    match value.trim().to_ascii_lowercase().as_str() {
        "error" => Some(LogLevel::Error),
        "warn" | "warning" => Some(LogLevel::Warning),
        "info" => Some(LogLevel::Info),
        "debug" | "trace" => Some(LogLevel::Debug),
        _ => None,
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Logging
    pub const LOG_LEVEL: &str = "INSIGHTS_LOG_LEVEL";
    pub const LOG_STRUCTURED: &str = "INSIGHTS_LOG_STRUCTURED";
    pub const LOG_DISPATCH: &str = "INSIGHTS_LOG_DISPATCH";
    pub const LOG_INCLUDE_CONTEXT: &str = "INSIGHTS_LOG_INCLUDE_CONTEXT";

    // Results
    pub const WARN_UNKNOWN_RULES: &str = "INSIGHTS_WARN_UNKNOWN_RULES";
    pub const KEEP_SCREENSHOTS: &str = "INSIGHTS_KEEP_SCREENSHOTS";
}
