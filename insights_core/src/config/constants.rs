pub mod compile_time {
    pub mod rules {
        /// Contrast ratio at or above which normal-size text passes WCAG AA
        pub const MIN_TEXT_CONTRAST_RATIO: f64 = 4.5;

        /// Minimum touch target edge, in density independent pixels
        pub const MIN_TOUCH_TARGET_DP: i64 = 48;

        /// Android baseline density; one dp equals one pixel at this dpi
        pub const BASELINE_DPI: f64 = 160.0;

        /// Decimal places kept when a contrast ratio is shown to the user
        pub const CONTRAST_RATIO_DECIMALS: i32 = 3;
    }

    pub mod scan {
        /// Maximum scan result file accepted by file based fetchers (32MB)
        /// RESOURCE: screenshots are embedded as base64 and dominate the size
        pub const MAX_SCAN_RESULT_FILE_SIZE: u64 = 32 * 1024 * 1024;

        /// Extension recognised when scanning a directory of result files
        pub const SCAN_RESULT_FILE_EXTENSION: &str = "json";
    }

    pub mod logging {
        /// Capacity of the in-memory logger used by tests and diagnostics
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Maximum log message length before truncation
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 4096;
    }

    pub mod persistence {
        /// Storage key holding serialized user configuration
        pub const USER_CONFIGURATION_KEY: &str = "userConfiguration";

        /// Storage key holding installation metadata
        pub const INSTALLATION_KEY: &str = "installation";
    }
}

#[cfg(test)]
mod tests {
    use super::compile_time::*;

    #[test]
    fn test_rule_limits_are_consistent() {
        assert!(rules::MIN_TEXT_CONTRAST_RATIO > 1.0);
        assert!(rules::MIN_TOUCH_TARGET_DP > 0);
        assert!(rules::BASELINE_DPI > 0.0);
    }

    #[test]
    fn test_persistence_keys_are_distinct() {
        assert_ne!(persistence::USER_CONFIGURATION_KEY, persistence::INSTALLATION_KEY);
    }
}
