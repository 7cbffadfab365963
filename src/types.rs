//! Core types shared by the sweep driver and the console output

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of probing one candidate, derived from the HTTP status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Profile page is missing, so the handle is free
    Available,
    /// Profile page exists
    Taken,
    /// Profile page redirects away, which the service does for suspended accounts
    Suspended,
    /// Any status outside the known table
    Unrecognized(u16),
}

impl Classification {
    /// Map a raw HTTP status code to a classification
    pub fn from_status(code: u16) -> Self {
        match code {
            404 => Classification::Available,
            200 => Classification::Taken,
            302 => Classification::Suspended,
            other => Classification::Unrecognized(other),
        }
    }

    /// Console label, `None` for unrecognized codes
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Classification::Available => Some("free"),
            Classification::Taken => Some("unavailable"),
            Classification::Suspended => Some("suspended"),
            Classification::Unrecognized(_) => None,
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Unrecognized(code) => write!(f, "unrecognized ({})", code),
            known => write!(f, "{}", known.label().unwrap_or_default()),
        }
    }
}

/// Result of probing a single candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeReport {
    /// Ordinal index of the candidate
    pub index: u64,
    pub name: String,
    /// Raw HTTP status code
    pub status: u16,
    pub classification: Classification,
}

impl ProbeReport {
    pub fn new(index: u64, name: impl Into<String>, status: u16) -> Self {
        Self {
            index,
            name: name.into(),
            status,
            classification: Classification::from_status(status),
        }
    }
}

/// One console line per candidate
impl std::fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.classification.label() {
            Some(label) => write!(f, "{} {}", label, self.name),
            None => write!(
                f,
                "Error getting user \"{}\": HTTP response {}",
                self.name, self.status
            ),
        }
    }
}

/// Totals for a finished sweep
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepSummary {
    pub length: usize,
    /// Index the sweep resumed from
    pub resumed_from: u64,
    /// Last index processed, `None` when nothing was left to scan
    pub last_index: Option<u64>,
    pub total_combinations: u64,
    pub checked: u64,
    pub available: u64,
    pub taken: u64,
    pub suspended: u64,
    pub unrecognized: u64,
    pub pauses: u64,
    pub checkpoints_written: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl SweepSummary {
    pub fn new(length: usize, resumed_from: u64, total_combinations: u64) -> Self {
        let now = Utc::now();
        Self {
            length,
            resumed_from,
            last_index: None,
            total_combinations,
            checked: 0,
            available: 0,
            taken: 0,
            suspended: 0,
            unrecognized: 0,
            pauses: 0,
            checkpoints_written: 0,
            started_at: now,
            finished_at: now,
        }
    }

    /// Count a report
    pub fn record(&mut self, report: &ProbeReport) {
        self.checked += 1;
        self.last_index = Some(report.index);
        match report.classification {
            Classification::Available => self.available += 1,
            Classification::Taken => self.taken += 1,
            Classification::Suspended => self.suspended += 1,
            Classification::Unrecognized(_) => self.unrecognized += 1,
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Utc::now();
    }

    pub fn elapsed(&self) -> Duration {
        (self.finished_at - self.started_at).to_std().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_table() {
        assert_eq!(Classification::from_status(404), Classification::Available);
        assert_eq!(Classification::from_status(200), Classification::Taken);
        assert_eq!(Classification::from_status(302), Classification::Suspended);
        assert_eq!(Classification::from_status(500), Classification::Unrecognized(500));
    }

    #[test]
    fn test_report_lines() {
        assert_eq!(ProbeReport::new(0, "ABC", 404).to_string(), "free ABC");
        assert_eq!(ProbeReport::new(1, "ABD", 200).to_string(), "unavailable ABD");
        assert_eq!(ProbeReport::new(2, "ABE", 302).to_string(), "suspended ABE");

        let line = ProbeReport::new(3, "ABF", 500).to_string();
        assert!(line.contains("500"));
        assert!(line.contains("\"ABF\""));
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = SweepSummary::new(1, 0, 4);
        summary.record(&ProbeReport::new(0, "A", 404));
        summary.record(&ProbeReport::new(1, "B", 200));
        summary.record(&ProbeReport::new(2, "C", 429));
        assert_eq!(summary.checked, 3);
        assert_eq!(summary.available, 1);
        assert_eq!(summary.taken, 1);
        assert_eq!(summary.unrecognized, 1);
        assert_eq!(summary.last_index, Some(2));
    }

    #[test]
    fn test_report_json() {
        let json = serde_json::to_string(&ProbeReport::new(7, "X_1", 404)).unwrap();
        assert!(json.contains("\"available\""));
        assert!(json.contains("\"index\":7"));
    }
}
