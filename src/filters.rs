//! Filter selection and the editor that stages it.
//!
//! The editor keeps two selections: the draft the user is toggling and the
//! applied selection that metrics are derived from. Nothing reaches the
//! metrics until Apply (or Clear) publishes the draft.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Facet;
use crate::error::DashboardError;
use crate::types::DateRange;

/// Selected facet values plus the two date ranges.
///
/// An empty set means the facet is unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    #[serde(default)]
    pub programs: BTreeSet<String>,
    #[serde(default)]
    pub districts: BTreeSet<String>,
    #[serde(default)]
    pub lawyers: BTreeSet<String>,
    #[serde(default)]
    pub case_referred: BTreeSet<String>,
    #[serde(default)]
    pub case_types: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_date_range: Option<DateRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disposal_date_range: Option<DateRange>,
}

impl FilterSelection {
    pub fn facet(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Program => &self.programs,
            Facet::District => &self.districts,
            Facet::Lawyer => &self.lawyers,
            Facet::CaseReferred => &self.case_referred,
            Facet::CaseType => &self.case_types,
        }
    }

    fn facet_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::Program => &mut self.programs,
            Facet::District => &mut self.districts,
            Facet::Lawyer => &mut self.lawyers,
            Facet::CaseReferred => &mut self.case_referred,
            Facet::CaseType => &mut self.case_types,
        }
    }

    /// True when at least one facet set is non-empty. Date ranges don't count.
    pub fn has_active_facets(&self) -> bool {
        Facet::ALL.iter().any(|f| !self.facet(*f).is_empty())
    }

    /// Number of facets carrying a restriction.
    pub fn active_facet_count(&self) -> usize {
        Facet::ALL.iter().filter(|f| !self.facet(**f).is_empty()).count()
    }

    /// True when nothing at all is restricted, date ranges included.
    pub fn is_unrestricted(&self) -> bool {
        !self.has_active_facets()
            && self.file_date_range.is_none()
            && self.disposal_date_range.is_none()
    }

    /// Date ranges coming from JSON bypass `DateRange::new`; check them here.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if let Some(range) = &self.file_date_range {
            range.validate()?;
        }
        if let Some(range) = &self.disposal_date_range {
            range.validate()?;
        }
        Ok(())
    }

    /// Drop any "All …" sentinel that slipped into a facet set.
    pub fn normalize(&mut self) {
        for facet in Facet::ALL {
            self.facet_mut(facet).remove(facet.sentinel());
        }
    }
}

/// Staging area for filter edits.
#[derive(Debug, Clone, Default)]
pub struct FilterEditor {
    draft: FilterSelection,
    applied: FilterSelection,
}

impl FilterEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &FilterSelection {
        &self.draft
    }

    pub fn applied(&self) -> &FilterSelection {
        &self.applied
    }

    /// Toggle one value of a facet. The sentinel clears the facet; a value
    /// already present is removed; anything else is added.
    pub fn toggle(&mut self, facet: Facet, value: &str) {
        if facet.is_sentinel(value) {
            self.draft.facet_mut(facet).clear();
            return;
        }
        if !facet.is_known_option(value) {
            log::debug!("Toggling {} value not in catalog: {}", facet.as_str(), value);
        }
        let set = self.draft.facet_mut(facet);
        if !set.remove(value) {
            set.insert(value.to_string());
        }
    }

    /// Set or unset the case-file date range. A reversed range is rejected
    /// and the draft keeps its previous value.
    pub fn set_file_date_range(
        &mut self,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<(), DashboardError> {
        self.draft.file_date_range = build_range(range)?;
        Ok(())
    }

    /// Set or unset the disposal date range. Same rules as the file range.
    pub fn set_disposal_date_range(
        &mut self,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<(), DashboardError> {
        self.draft.disposal_date_range = build_range(range)?;
        Ok(())
    }

    /// Publish the draft. Returns the selection metrics should be derived from.
    pub fn apply(&mut self) -> &FilterSelection {
        self.applied = self.draft.clone();
        log::debug!(
            "Applied filters: {} active facets, file range {}, disposal range {}",
            self.applied.active_facet_count(),
            self.applied.file_date_range.is_some(),
            self.applied.disposal_date_range.is_some()
        );
        &self.applied
    }

    /// Reset everything to unrestricted and publish.
    pub fn clear(&mut self) -> &FilterSelection {
        self.draft = FilterSelection::default();
        self.applied = FilterSelection::default();
        log::debug!("Cleared filters");
        &self.applied
    }

    /// Replace the draft wholesale, e.g. from a saved selection.
    pub fn load_draft(&mut self, mut selection: FilterSelection) -> Result<(), DashboardError> {
        selection.validate()?;
        selection.normalize();
        self.draft = selection;
        Ok(())
    }
}

fn build_range(range: Option<(NaiveDate, NaiveDate)>) -> Result<Option<DateRange>, DashboardError> {
    range
        .map(|(start, end)| DateRange::new(start, end))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut editor = FilterEditor::new();
        editor.toggle(Facet::Program, "HRD");
        assert!(editor.draft().programs.contains("HRD"));
        editor.toggle(Facet::Program, "HRD");
        assert!(editor.draft().programs.is_empty());
    }

    #[test]
    fn test_sentinel_clears_facet() {
        let mut editor = FilterEditor::new();
        editor.toggle(Facet::District, "Badin");
        editor.toggle(Facet::District, "Dadu");
        editor.toggle(Facet::District, "All Districts");
        assert!(editor.draft().districts.is_empty());
        assert!(!editor.draft().districts.contains("All Districts"));
    }

    #[test]
    fn test_toggle_leaves_other_facets_alone() {
        let mut editor = FilterEditor::new();
        editor.toggle(Facet::Lawyer, "Amanullah");
        editor.toggle(Facet::Program, "All Programs");
        assert_eq!(editor.draft().lawyers.len(), 1);
    }

    #[test]
    fn test_draft_not_applied_until_apply() {
        let mut editor = FilterEditor::new();
        editor.toggle(Facet::CaseType, "Family");
        assert!(editor.applied().case_types.is_empty());
        let applied = editor.apply();
        assert!(applied.case_types.contains("Family"));
    }

    #[test]
    fn test_clear_resets_draft_and_applied() {
        let mut editor = FilterEditor::new();
        editor.toggle(Facet::CaseReferred, "Walk-In");
        editor
            .set_file_date_range(Some((ymd(2026, 1, 1), ymd(2026, 1, 31))))
            .unwrap();
        editor.apply();

        let applied = editor.clear();
        assert!(applied.is_unrestricted());
        assert!(editor.draft().is_unrestricted());
    }

    #[test]
    fn test_reversed_range_keeps_previous_draft() {
        let mut editor = FilterEditor::new();
        editor
            .set_disposal_date_range(Some((ymd(2025, 1, 1), ymd(2025, 6, 30))))
            .unwrap();
        let result = editor.set_disposal_date_range(Some((ymd(2025, 7, 1), ymd(2025, 6, 1))));
        assert!(result.is_err());
        assert_eq!(
            editor.draft().disposal_date_range.map(|r| r.start),
            Some(ymd(2025, 1, 1))
        );
    }

    #[test]
    fn test_unset_range() {
        let mut editor = FilterEditor::new();
        editor
            .set_file_date_range(Some((ymd(2025, 1, 1), ymd(2025, 2, 1))))
            .unwrap();
        editor.set_file_date_range(None).unwrap();
        assert!(editor.draft().file_date_range.is_none());
    }

    #[test]
    fn test_date_ranges_are_not_facets() {
        let mut selection = FilterSelection::default();
        selection.file_date_range = Some(DateRange::new(ymd(2025, 1, 1), ymd(2025, 1, 2)).unwrap());
        assert!(!selection.has_active_facets());
        assert!(!selection.is_unrestricted());
    }

    #[test]
    fn test_selection_deserializes_partial_json() {
        let selection: FilterSelection =
            serde_json::from_str(r#"{"programs":["HRD","HRD","MFL"]}"#).unwrap();
        assert_eq!(selection.programs.len(), 2, "sets collapse duplicates");
        assert_eq!(selection.active_facet_count(), 1);
    }

    #[test]
    fn test_load_draft_strips_sentinels_and_validates() {
        let mut editor = FilterEditor::new();
        let selection: FilterSelection =
            serde_json::from_str(r#"{"lawyers":["All Lawyers","Abida Bibi"]}"#).unwrap();
        editor.load_draft(selection).unwrap();
        assert_eq!(editor.draft().lawyers.len(), 1);

        let bad: FilterSelection = serde_json::from_str(
            r#"{"fileDateRange":{"start":"2026-02-01","end":"2026-01-01"}}"#,
        )
        .unwrap();
        assert!(editor.load_draft(bad).is_err());
    }
}
