//! Log codes and their metadata
//!
//! Every error and success event carries a [`Code`]. Codes are grouped by the
//! subsystem that emits them so a log line can be traced back without a stack.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generic codes used when an event has no specific code
pub mod generic {
    use super::Code;

    pub const WARNING: Code = Code::new("W000");
    pub const INFO: Code = Code::new("I000");
    pub const DEBUG: Code = Code::new("D000");
}

pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("E001");
    pub const CONFIGURATION_ERROR: Code = Code::new("E002");
}

pub mod rules {
    use super::Code;

    pub const DUPLICATE_RULE: Code = Code::new("E010");
    pub const UNKNOWN_RULE: Code = Code::new("W010");
    pub const MALFORMED_RULE_PROPS: Code = Code::new("W011");
}

pub mod results {
    use super::Code;

    pub const SCAN_RESULTS_PARSE_FAILED: Code = Code::new("E020");
    pub const SCREENSHOT_DECODE_FAILED: Code = Code::new("E021");
    pub const REPORT_SERIALIZATION_FAILED: Code = Code::new("E022");
}

pub mod dispatch {
    use super::Code;

    pub const HANDLER_FAILED: Code = Code::new("E030");
    pub const UNHANDLED_MESSAGE: Code = Code::new("W030");
}

pub mod store {
    use super::Code;

    pub const LISTENER_FAILED: Code = Code::new("E040");
    pub const UNKNOWN_CARD: Code = Code::new("W040");
}

pub mod persistence {
    use super::Code;

    pub const STORAGE_READ_FAILED: Code = Code::new("E050");
    pub const STORAGE_WRITE_FAILED: Code = Code::new("E051");
}

pub mod scan {
    use super::Code;

    pub const FETCH_FAILED: Code = Code::new("E060");
}

pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("S001");
    pub const SCAN_RESULTS_NORMALIZED: Code = Code::new("S020");
    pub const STORES_INITIALIZED: Code = Code::new("S040");
    pub const PERSISTED_DATA_LOADED: Code = Code::new("S050");
    pub const SCAN_COMPLETED: Code = Code::new("S060");
    pub const REPORT_EXPORTED: Code = Code::new("S070");
}

/// Subsystem a code belongs to
pub fn get_category(code: &str) -> &'static str {
    metadata()
        .get(code)
        .map(|(category, _)| *category)
        .unwrap_or("unknown")
}

/// Human readable description of a code
pub fn get_description(code: &str) -> &'static str {
    metadata()
        .get(code)
        .map(|(_, description)| *description)
        .unwrap_or("Unknown error")
}

/// Whether the code marks a success event
pub fn is_success_code(code: &str) -> bool {
    code.starts_with('S')
}

fn metadata() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    static METADATA: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> =
        OnceLock::new();

    METADATA.get_or_init(|| {
        let entries: [(Code, &'static str, &'static str); 21] = [
            (system::INTERNAL_ERROR, "system", "Internal error"),
            (system::CONFIGURATION_ERROR, "system", "Invalid configuration"),
            (rules::DUPLICATE_RULE, "rules", "Rule registered twice"),
            (rules::UNKNOWN_RULE, "rules", "Finding references an unregistered rule"),
            (rules::MALFORMED_RULE_PROPS, "rules", "Finding properties missing or malformed"),
            (results::SCAN_RESULTS_PARSE_FAILED, "results", "Scan results could not be parsed"),
            (results::SCREENSHOT_DECODE_FAILED, "results", "Screenshot data is not valid base64"),
            (results::REPORT_SERIALIZATION_FAILED, "results", "Report could not be serialized"),
            (dispatch::HANDLER_FAILED, "dispatch", "Message handler failed"),
            (dispatch::UNHANDLED_MESSAGE, "dispatch", "No handler registered for message"),
            (store::LISTENER_FAILED, "store", "Store change listener failed"),
            (store::UNKNOWN_CARD, "store", "Payload references an unknown rule or card"),
            (persistence::STORAGE_READ_FAILED, "persistence", "Persisted data could not be read"),
            (persistence::STORAGE_WRITE_FAILED, "persistence", "Persisted data could not be written"),
            (scan::FETCH_FAILED, "scan", "Scan results could not be fetched"),
            (success::SYSTEM_INITIALIZATION_COMPLETED, "system", "Logging initialized"),
            (success::SCAN_RESULTS_NORMALIZED, "results", "Scan results normalized"),
            (success::STORES_INITIALIZED, "store", "Stores initialized"),
            (success::PERSISTED_DATA_LOADED, "persistence", "Persisted data loaded"),
            (success::SCAN_COMPLETED, "scan", "Scan completed"),
            (success::REPORT_EXPORTED, "results", "Report exported"),
        ];

        entries
            .into_iter()
            .map(|(code, category, description)| (code.as_str(), (category, description)))
            .collect()
    })
}
