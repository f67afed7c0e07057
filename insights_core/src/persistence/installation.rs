// src/persistence/installation.rs
//! Anonymous installation identity attached to telemetry

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationData {
    pub id: String,
    /// Zero based, as stored by earlier releases
    pub month: u32,
    pub year: i32,
}

impl InstallationData {
    pub fn generate(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            month: now.month0(),
            year: now.year(),
        }
    }

    pub fn is_current(&self, now: DateTime<Utc>) -> bool {
        self.month == now.month0() && self.year == now.year()
    }

    /// Keep the stored identity within its month, otherwise mint a new one
    ///
    /// Returns the data to use and whether it must be written back.
    pub fn refresh(existing: Option<InstallationData>, now: DateTime<Utc>) -> (Self, bool) {
        match existing {
            Some(data) if data.is_current(now) => (data, false),
            _ => (Self::generate(now), true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_refresh_keeps_current_month() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        let existing = InstallationData {
            id: "abc".to_string(),
            month: 2,
            year: 2024,
        };

        let (data, changed) = InstallationData::refresh(Some(existing.clone()), now);
        assert_eq!(data, existing);
        assert!(!changed);
    }

    #[test]
    fn test_refresh_regenerates_stale_or_missing() {
        let now = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
        let stale = InstallationData {
            id: "abc".to_string(),
            month: 2,
            year: 2024,
        };

        let (data, changed) = InstallationData::refresh(Some(stale), now);
        assert!(changed);
        assert_ne!(data.id, "abc");
        assert_eq!((data.month, data.year), (3, 2024));

        let (_, changed) = InstallationData::refresh(None, now);
        assert!(changed);
    }
}
