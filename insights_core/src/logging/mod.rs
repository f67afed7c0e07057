//! Global logging module for the insights core
//!
//! Coded events with key/value context and a thin macro interface. The default
//! backend forwards to the `log` facade so the host decides where output goes.

pub mod codes;
pub mod events;
pub mod macros;
pub mod service;

use crate::config::runtime::LoggingPreferences;
use std::sync::{Arc, OnceLock};

// Re-export main types
pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{LogFacadeLogger, Logger, LoggingService, MemoryLogger};

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging from environment preferences
pub fn init_global_logging() -> Result<(), String> {
    init_global_logging_with_preferences(&LoggingPreferences::default())
}

/// Initialize global logging from explicit preferences
pub fn init_global_logging_with_preferences(
    preferences: &LoggingPreferences,
) -> Result<(), String> {
    let service = Arc::new(LoggingService::with_preferences(preferences));
    init_global_logging_with_service(service.clone())?;

    service.log_event(LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    ));
    Ok(())
}

/// Initialize with custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

/// Check if global logging is initialized
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Route an event to the global service, or straight to the `log` facade
pub fn emit(event: LogEvent) {
    match try_get_global_logger() {
        Some(logger) => logger.log_event(event),
        None => LogFacadeLogger::forward(&event),
    }
}

fn with_context(mut event: LogEvent, context: Vec<(&str, &str)>) -> LogEvent {
    for (key, value) in context {
        event = event.with_context(key, value);
    }
    event
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

/// Log error with context (used by log_error! macro)
pub fn log_error_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    emit(with_context(LogEvent::error(code, message), context));
}

/// Log warning with context (used by log_warning! macro)
pub fn log_warning_with_context(code: Option<Code>, message: &str, context: Vec<(&str, &str)>) {
    let event = match code {
        Some(code) => LogEvent::warning_with_code(code, message),
        None => LogEvent::warning(message),
    };
    emit(with_context(event, context));
}

/// Log success with context (used by log_success! macro)
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    emit(with_context(LogEvent::success(code, message), context));
}

/// Log info with context (used by log_info! macro)
pub fn log_info_with_context(message: &str, context: Vec<(&str, &str)>) {
    emit(with_context(LogEvent::info(message), context));
}

/// Log debug with context (used by log_debug! macro)
pub fn log_debug_with_context(message: &str, context: Vec<(&str, &str)>) {
    emit(with_context(LogEvent::debug(message), context));
}

/// Get system diagnostics
pub fn get_system_diagnostics() -> String {
    let mut diagnostics = String::new();

    diagnostics.push_str("=== Logging System Diagnostics ===\n");
    diagnostics.push_str(&format!("Initialized: {}\n", is_initialized()));
    if let Some(logger) = try_get_global_logger() {
        diagnostics.push_str(&format!("Min level: {}\n", logger.min_level().as_str()));
    }
    diagnostics.push_str(&format!(
        "Build: {}\n",
        crate::config::build_info::source_info()
    ));

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_without_initialization() {
        // Falls back to the log facade; must not panic
        emit(LogEvent::info("fallback"));
    }

    #[test]
    fn test_diagnostics() {
        let diagnostics = get_system_diagnostics();
        assert!(diagnostics.contains("Logging System Diagnostics"));
        assert!(diagnostics.contains("Initialized:"));
    }
}
