//! Report catalogue and request validation for the reports panel.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::types::DateRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Summary,
    Program,
    District,
    Trend,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Summary,
        ReportKind::Program,
        ReportKind::District,
        ReportKind::Trend,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Program => "program",
            Self::District => "district",
            Self::Trend => "trend",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Summary => "Case Summary Report",
            Self::Program => "Program-wise Report",
            Self::District => "District-wise Report",
            Self::Trend => "Monthly Trend Report",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Summary => "Overview of all cases with status breakdown",
            Self::Program => "Cases categorized by program",
            Self::District => "Cases distributed across districts",
            Self::Trend => "Case filing and disposal trends",
        }
    }
}

impl FromStr for ReportKind {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKind::ALL
            .into_iter()
            .find(|k| k.id() == s)
            .ok_or_else(|| DashboardError::UnknownReport(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Pdf,
    Excel,
    Csv,
}

/// What the reports panel has selected so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    #[serde(default)]
    pub kind: Option<ReportKind>,
    #[serde(default)]
    pub format: ReportFormat,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportJob {
    pub kind: ReportKind,
    pub title: &'static str,
    pub description: &'static str,
    pub format: ReportFormat,
    pub range: Option<DateRange>,
}

impl ReportRequest {
    /// A kind must be chosen; a range needs both ends and must be ordered.
    /// A single end date alone is treated as open and dropped.
    pub fn validate(&self) -> Result<ReportJob, DashboardError> {
        let kind = self.kind.ok_or(DashboardError::MissingReportSelection)?;
        let range = match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)?),
            _ => None,
        };
        log::info!("Generating {} report as {:?}", kind.id(), self.format);
        Ok(ReportJob {
            kind,
            title: kind.title(),
            description: kind.description(),
            format: self.format,
            range,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!("trend".parse::<ReportKind>().unwrap(), ReportKind::Trend);
        assert!(matches!(
            "weekly".parse::<ReportKind>(),
            Err(DashboardError::UnknownReport(_))
        ));
    }

    #[test]
    fn test_missing_kind_rejected() {
        let err = ReportRequest::default().validate().unwrap_err();
        assert!(matches!(err, DashboardError::MissingReportSelection));
    }

    #[test]
    fn test_valid_request_with_range() {
        let request = ReportRequest {
            kind: Some(ReportKind::District),
            format: ReportFormat::Csv,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 31),
        };
        let job = request.validate().unwrap();
        assert_eq!(job.kind, ReportKind::District);
        assert_eq!(job.title, "District-wise Report");
        assert!(job.range.is_some());

        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["description"], "Cases distributed across districts");
        assert_eq!(json["format"], "csv");
    }

    #[test]
    fn test_reversed_range_rejected() {
        let request = ReportRequest {
            kind: Some(ReportKind::Summary),
            start_date: NaiveDate::from_ymd_opt(2025, 4, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 31),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_half_open_range_dropped() {
        let request = ReportRequest {
            kind: Some(ReportKind::Program),
            start_date: NaiveDate::from_ymd_opt(2025, 4, 1),
            ..Default::default()
        };
        assert_eq!(request.validate().unwrap().range, None);
    }

    #[test]
    fn test_request_from_json() {
        let request: ReportRequest =
            serde_json::from_str(r#"{"kind":"summary","format":"excel"}"#).unwrap();
        assert_eq!(request.format, ReportFormat::Excel);
        assert_eq!(request.kind, Some(ReportKind::Summary));
    }
}
