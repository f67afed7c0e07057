// results/error.rs

use thiserror::Error;

/// Failures while reading scan output or producing result payloads
///
/// Normalization itself never fails; these cover the edges around it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResultGenerationError {
    /// Scan service body was not valid scan results JSON
    #[error("Failed to parse scan results: {cause}")]
    ScanResultsParseFailed { cause: String },

    /// Screenshot was not valid base64
    #[error("Failed to decode screenshot: {cause}")]
    ScreenshotDecodeFailed { cause: String },

    /// Report or payload could not be serialized
    #[error("Failed to serialize {format} output: {cause}")]
    SerializationFailed { format: String, cause: String },

    /// Scan output exceeded the accepted size
    #[error("Scan results too large: {size} bytes exceeds limit of {limit} bytes")]
    ScanResultsTooLarge { size: u64, limit: u64 },
}

impl ResultGenerationError {
    pub fn scan_results_parse_failed(cause: &str) -> Self {
        Self::ScanResultsParseFailed {
            cause: cause.to_string(),
        }
    }

    pub fn screenshot_decode_failed(cause: &str) -> Self {
        Self::ScreenshotDecodeFailed {
            cause: cause.to_string(),
        }
    }

    pub fn serialization_failed(format: &str, cause: &str) -> Self {
        Self::SerializationFailed {
            format: format.to_string(),
            cause: cause.to_string(),
        }
    }

    pub fn scan_results_too_large(size: u64, limit: u64) -> Self {
        Self::ScanResultsTooLarge { size, limit }
    }
}
