//! Error types for the dashboard edges
//!
//! Deriving metrics never fails. Errors only come from the surfaces around it:
//! - Configuration: unreadable or malformed `~/.lasboard/config.json`
//! - Editor input: date ranges entered backwards, card moves past the end
//! - Export: CSV files that could not be written
//! - Reports: generate pressed without a report kind

use chrono::NaiveDate;
use thiserror::Error;

/// Error types for dashboard operations
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Date range starts on {start} but ends on {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Card index {index} is out of range for {len} quick actions")]
    CardIndexOutOfRange { index: usize, len: usize },

    #[error("Unknown report kind: {0}")]
    UnknownReport(String),

    #[error("No report kind selected")]
    MissingReportSelection,
}

impl DashboardError {
    /// Returns true if the user can fix this from the dashboard itself
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            DashboardError::InvalidDateRange { .. }
                | DashboardError::CardIndexOutOfRange { .. }
                | DashboardError::UnknownReport(_)
                | DashboardError::MissingReportSelection
        )
    }

    /// Get a user-friendly recovery suggestion
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DashboardError::Config(_) => "Check your configuration in ~/.lasboard/config.json",
            DashboardError::Io(_) => "Check file permissions and disk space.",
            DashboardError::Json(_) => "Check the file format is correct.",
            DashboardError::InvalidDateRange { .. } => {
                "Pick an end date on or after the start date."
            }
            DashboardError::CardIndexOutOfRange { .. } => "Drop the card onto an existing slot.",
            DashboardError::UnknownReport(_) => {
                "Choose one of: summary, program, district, trend."
            }
            DashboardError::MissingReportSelection => "Select a report type first.",
        }
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Json(err.to_string())
    }
}

/// Serializable error representation for a UI bridge
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub message: String,
    pub error_type: ErrorType,
    pub recovery_suggestion: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorType {
    UserCorrectable,
    Environment,
}

impl From<&DashboardError> for ErrorPayload {
    fn from(err: &DashboardError) -> Self {
        let error_type = if err.is_user_correctable() {
            ErrorType::UserCorrectable
        } else {
            ErrorType::Environment
        };

        ErrorPayload {
            message: err.to_string(),
            error_type,
            recovery_suggestion: err.recovery_suggestion().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err: DashboardError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, DashboardError::Io(_)));
        assert!(!err.is_user_correctable());
    }

    #[test]
    fn test_payload_classifies_user_errors() {
        let err = DashboardError::CardIndexOutOfRange { index: 9, len: 7 };
        let payload = ErrorPayload::from(&err);
        assert_eq!(payload.error_type, ErrorType::UserCorrectable);
        assert!(payload.message.contains("index 9"));
        assert_eq!(payload.recovery_suggestion, "Drop the card onto an existing slot.");
    }

    #[test]
    fn test_payload_serializes_camel_case() {
        let err = DashboardError::Config("bad exportDir".to_string());
        let json = serde_json::to_value(ErrorPayload::from(&err)).unwrap();
        assert_eq!(json["errorType"], "environment");
        assert!(json["recoverySuggestion"].as_str().unwrap().contains("config.json"));
    }
}
