//! List search and the stale-case view.
//!
//! Matching is a case-insensitive substring test; an empty query keeps every
//! row.

use chrono::{Days, NaiveDate};

use crate::filters::FilterSelection;
use crate::types::{ApprovalRecord, CaseRecord, ChartCase, HearingRecord, InterviewRecord};

/// Rows that can be matched by the search box.
pub trait Searchable {
    /// Text fields the search box looks at.
    fn search_fields(&self) -> Vec<&str>;

    fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl Searchable for CaseRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.client_name.as_str(), self.file_number.as_str(), self.district.as_str()]
    }
}

impl Searchable for HearingRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.case_number.as_str(),
            self.client_name.as_str(),
            self.court_name.as_str(),
            self.lawyer.as_str(),
        ]
    }
}

impl Searchable for InterviewRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.client_name.as_str(), self.interviewer.as_str(), self.program.as_str()]
    }
}

impl Searchable for ApprovalRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.client_name.as_str(), self.file_number.as_str(), self.program.as_str()]
    }
}

impl Searchable for ChartCase {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.case_number.as_str(),
            self.client_name.as_str(),
            self.lawyer.as_str(),
            self.court.as_str(),
        ]
    }
}

/// Keep the rows matching `query`, preserving order.
pub fn search<T: Searchable + Clone>(rows: &[T], query: &str) -> Vec<T> {
    rows.iter().filter(|row| row.matches(query)).cloned().collect()
}

/// Cases whose last update is strictly older than `stale_after_days` before
/// `today`. A window reaching past the earliest representable date leaves
/// nothing stale.
pub fn not_updated(cases: &[CaseRecord], today: NaiveDate, stale_after_days: u32) -> Vec<CaseRecord> {
    let Some(cutoff) = today.checked_sub_days(Days::new(u64::from(stale_after_days))) else {
        log::debug!("Stale window of {} days has no cutoff", stale_after_days);
        return Vec::new();
    };
    cases
        .iter()
        .filter(|c| c.last_updated < cutoff)
        .cloned()
        .collect()
}

/// Narrow the case list by the facets a case row carries (district and
/// interviewer). Facets the row has no column for are ignored.
pub fn filter_cases(cases: &[CaseRecord], selection: &FilterSelection) -> Vec<CaseRecord> {
    cases
        .iter()
        .filter(|c| selection.districts.is_empty() || selection.districts.contains(&c.district))
        .filter(|c| selection.lawyers.is_empty() || selection.lawyers.contains(&c.interviewer))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let rows = datasets::cases();
        assert_eq!(search(&rows, "").len(), rows.len());
        assert_eq!(search(&rows, "   ").len(), rows.len());
    }

    #[test]
    fn test_case_search_is_case_insensitive() {
        let rows = datasets::cases();
        let hits = search(&rows, "karachi WEST");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|c| c.district == "Karachi West"));
    }

    #[test]
    fn test_case_search_by_file_number() {
        let hits = search(&datasets::cases(), "hrd-2510");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].client_name, "Muhammad Faisal");
    }

    #[test]
    fn test_case_search_ignores_court() {
        // Court is not a searchable column for cases.
        assert!(search(&datasets::cases(), "Supreme").is_empty());
    }

    #[test]
    fn test_hearing_search_by_lawyer() {
        let hits = search(&datasets::hearings(), "nafees");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_interview_and_approval_search_by_program() {
        assert_eq!(search(&datasets::interviews(), "hrd").len(), 2);
        assert_eq!(search(&datasets::approvals(), "wrlmp").len(), 1);
    }

    #[test]
    fn test_not_updated_strictly_older_than_cutoff() {
        let rows = datasets::cases();
        // Cutoff 2024-12-25: only the 2024-12-25 and 2024-12-28 rows are fresh.
        let stale = not_updated(&rows, ymd(2025, 1, 24), 30);
        assert_eq!(stale.len(), 4);
        assert!(stale.iter().all(|c| c.last_updated < ymd(2024, 12, 25)));
    }

    #[test]
    fn test_not_updated_zero_days() {
        let rows = datasets::cases();
        assert_eq!(not_updated(&rows, ymd(2024, 8, 5), 0).len(), 0);
        assert_eq!(not_updated(&rows, ymd(2030, 1, 1), 0).len(), rows.len());
    }

    #[test]
    fn test_not_updated_huge_window_is_empty() {
        let rows = datasets::cases();
        assert!(not_updated(&rows, ymd(2025, 1, 1), 200_000_000).is_empty());
        assert!(not_updated(&rows, ymd(2025, 1, 1), u32::MAX).is_empty());
    }

    #[test]
    fn test_filter_cases_by_district_and_lawyer() {
        let rows = datasets::cases();
        let mut selection = FilterSelection::default();
        selection.districts.insert("Karachi West".to_string());
        assert_eq!(filter_cases(&rows, &selection).len(), 2);

        selection.lawyers.insert("Amanullah".to_string());
        assert!(filter_cases(&rows, &selection).is_empty());

        assert_eq!(filter_cases(&rows, &FilterSelection::default()).len(), rows.len());
    }
}
