//! Logging service and logger backends

use super::events::{LogEvent, LogLevel};
use crate::config::runtime::LoggingPreferences;
use std::sync::{Arc, Mutex};

/// Simple logger trait
pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);
}

/// Main logging service with a minimum level filter
pub struct LoggingService {
    logger: Arc<dyn Logger>,
    min_level: LogLevel,
}

impl LoggingService {
    /// Create new logging service with specified logger and minimum level
    pub fn new(logger: Arc<dyn Logger>, min_level: LogLevel) -> Self {
        Self { logger, min_level }
    }

    /// Create service from logging preferences
    pub fn with_preferences(preferences: &LoggingPreferences) -> Self {
        let logger = Arc::new(LogFacadeLogger::new(
            preferences.use_structured_logging,
            preferences.include_context,
        ));
        Self::new(logger, preferences.min_log_level)
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Set minimum log level
    pub fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    /// Check if level should be logged
    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }

    /// Log an event
    pub fn log_event(&self, event: LogEvent) {
        if self.should_log(event.level) {
            self.logger.log(&event);
        }
    }
}

/// Forwards events to the `log` facade under the `insights` target
pub struct LogFacadeLogger {
    structured: bool,
    include_context: bool,
}

impl LogFacadeLogger {
    pub fn new(structured: bool, include_context: bool) -> Self {
        Self {
            structured,
            include_context,
        }
    }

    /// Forward without a service in between
    pub fn forward(event: &LogEvent) {
        Self::new(false, true).log(event);
    }
}

impl Logger for LogFacadeLogger {
    fn log(&self, event: &LogEvent) {
        let line = if self.structured {
            event.format_structured()
        } else {
            event.format_console(self.include_context)
        };
        log::log!(target: "insights", event.level.to_log_level(), "{}", line);
    }
}

/// Keeps events in memory; used by tests and diagnostics
pub struct MemoryLogger {
    events: Mutex<Vec<LogEvent>>,
    capacity: usize,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::with_capacity(crate::config::compile_time::logging::LOG_BUFFER_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            capacity,
        }
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn error_count(&self) -> usize {
        self.events().iter().filter(|e| e.is_error()).count()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}

impl Default for MemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, event: &LogEvent) {
        if let Ok(mut events) = self.events.lock() {
            if events.len() >= self.capacity {
                events.remove(0);
            }
            events.push(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;

    #[test]
    fn test_service_filters_by_level() {
        let memory = Arc::new(MemoryLogger::new());
        let service = LoggingService::new(memory.clone(), LogLevel::Warning);

        service.log_event(LogEvent::debug("dropped"));
        service.log_event(LogEvent::info("dropped too"));
        service.log_event(LogEvent::warning("kept"));
        service.log_event(LogEvent::error(codes::system::INTERNAL_ERROR, "kept"));

        let events = memory.events();
        assert_eq!(events.len(), 2);
        assert_eq!(memory.error_count(), 1);
    }

    #[test]
    fn test_memory_logger_capacity() {
        let memory = MemoryLogger::with_capacity(2);
        memory.log(&LogEvent::info("one"));
        memory.log(&LogEvent::info("two"));
        memory.log(&LogEvent::info("three"));

        let messages: Vec<String> = memory.events().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["two", "three"]);

        memory.clear();
        assert!(memory.events().is_empty());
    }
}
