use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Configuration stored in ~/.lasboard/config.json
///
/// Every field is defaulted so a partial (or empty) file still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory CSV exports are written into.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default)]
    pub csv_style: CsvStyle,
    /// Cases untouched for longer than this show up under "Cases Not Updated".
    #[serde(default = "default_stale_after_days")]
    pub stale_after_days: u32,
    /// Apply the random 0.8–1.2 factor to avgDays on filtered recomputes.
    #[serde(default)]
    pub avg_days_jitter: bool,
    /// Seed for the avgDays jitter. Unset means a fresh thread RNG per draw.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jitter_seed: Option<u64>,
    /// Initial quick-action card order, by card id. Unknown ids are ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_action_order: Option<Vec<String>>,
}

fn default_export_dir() -> String {
    ".".to_string()
}

fn default_stale_after_days() -> u32 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            csv_style: CsvStyle::default(),
            stale_after_days: default_stale_after_days(),
            avg_days_jitter: false,
            jitter_seed: None,
            quick_action_order: None,
        }
    }
}

/// How CSV fields are written.
///
/// `Legacy` joins raw values with commas, so a value containing a comma
/// shifts every column after it. `Quoted` quotes fields the RFC 4180 way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvStyle {
    #[default]
    Legacy,
    Quoted,
}

/// Ordered calendar range used by the file-date and disposal-date filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DashboardError> {
        let range = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.start > self.end {
            return Err(DashboardError::InvalidDateRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

// =============================================================================
// Case records
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    Approved,
    Pending,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    Pending,
    Disposed,
    Active,
}

/// A case row as shown in the cases list and the "not updated" view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    pub id: u32,
    pub file_number: String,
    pub client_name: String,
    pub case_number: String,
    pub court_name: String,
    pub district: String,
    pub interviewer: String,
    pub status: ApprovalStatus,
    pub case_status: CaseStatus,
    pub last_updated: NaiveDate,
}

// =============================================================================
// Hearings, interviews, approvals
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HearingType {
    #[serde(rename = "First Hearing")]
    FirstHearing,
    Adjournment,
    #[serde(rename = "Final Arguments")]
    FinalArguments,
    Judgment,
}

impl fmt::Display for HearingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::FirstHearing => "First Hearing",
            Self::Adjournment => "Adjournment",
            Self::FinalArguments => "Final Arguments",
            Self::Judgment => "Judgment",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HearingRecord {
    pub id: u32,
    pub case_number: String,
    pub client_name: String,
    pub court_name: String,
    pub date: NaiveDate,
    /// Display time, e.g. "10:00 AM".
    pub time: String,
    pub lawyer: String,
    #[serde(rename = "type")]
    pub hearing_type: HearingType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterviewStatus {
    Completed,
    Scheduled,
    #[serde(rename = "Pending Review")]
    PendingReview,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRecord {
    pub id: u32,
    pub client_name: String,
    pub phone: String,
    pub date: NaiveDate,
    pub interviewer: String,
    pub program: String,
    pub status: InterviewStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRecord {
    pub id: u32,
    pub file_number: String,
    pub client_name: String,
    pub program: String,
    pub submitted_by: String,
    pub submitted_date: NaiveDate,
    pub case_type: String,
    pub priority: Priority,
}

// =============================================================================
// Chart drill-down
// =============================================================================

/// A generated case behind a clicked chart segment. These are the rows the
/// CSV export writes, in header order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartCase {
    pub id: u32,
    pub case_number: String,
    pub client_name: String,
    #[serde(rename = "type")]
    pub case_type: String,
    pub status: String,
    pub date: String,
    pub lawyer: String,
    pub court: String,
}

impl ChartCase {
    /// Field values in export column order.
    pub fn fields(&self) -> [&str; 7] {
        [
            self.case_number.as_str(),
            self.client_name.as_str(),
            self.case_type.as_str(),
            self.status.as_str(),
            self.date.as_str(),
            self.lawyer.as_str(),
            self.court.as_str(),
        ]
    }
}
