//! Dashboard KPI derivation.
//!
//! Metrics are the unfiltered baseline scaled by how much of the program and
//! district space the selection covers. There is no per-record aggregation:
//! every count moves by the same combined multiplier, and the percentages are
//! recomputed from the scaled counts.

pub mod jitter;

use serde::Serialize;

use crate::charts::{DISTRICT_DISTRIBUTION, PROGRAM_DISTRIBUTION};
use crate::filters::FilterSelection;

pub use jitter::{AvgDaysJitter, NoJitter, SeededJitter, ThreadJitter};

/// Programs the scaling treats as the whole program space.
pub const KNOWN_PROGRAM_COUNT: usize = PROGRAM_DISTRIBUTION.len();
/// Districts the scaling treats as the whole district space.
pub const KNOWN_DISTRICT_COUNT: usize = DISTRICT_DISTRIBUTION.len();

/// Counts behind the quick-action badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionCounts {
    pub new_interviews: u32,
    pub pending_approvals: u32,
    pub upcoming_hearings: u32,
    pub cases_not_updated: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_cases: u32,
    pub total_approved: u32,
    pub total_filed: u32,
    pub in_favour: u32,
    #[serde(rename = "againstLAS")]
    pub against_las: u32,
    pub pending_in_court: u32,
    pub pending_percent: u32,
    pub disposed_of: u32,
    pub disposed_percent: u32,
    pub favour_percent: u32,
    pub avg_days: u32,
    pub actions: ActionCounts,
}

/// Unfiltered reference totals.
///
/// The percentages here are the published figures, not recomputed from the
/// counts above them; an unfiltered view returns them verbatim.
pub const BASELINE: DashboardMetrics = DashboardMetrics {
    total_cases: 2977,
    total_approved: 2650,
    total_filed: 2771,
    in_favour: 1851,
    against_las: 409,
    pending_in_court: 448,
    pending_percent: 16,
    disposed_of: 2323,
    disposed_percent: 84,
    favour_percent: 82,
    avg_days: 134,
    actions: ActionCounts {
        new_interviews: 24,
        pending_approvals: 18,
        upcoming_hearings: 42,
        cases_not_updated: 63,
    },
};

/// Derive dashboard metrics for an applied selection.
///
/// With no facet restricted the baseline comes back untouched. Date ranges
/// never affect the numbers.
pub fn derive_metrics(selection: &FilterSelection, jitter: &mut dyn AvgDaysJitter) -> DashboardMetrics {
    if !selection.has_active_facets() {
        return BASELINE;
    }

    let program_multiplier = facet_multiplier(selection.programs.len(), KNOWN_PROGRAM_COUNT);
    let district_multiplier = facet_multiplier(selection.districts.len(), KNOWN_DISTRICT_COUNT);
    let combined = (program_multiplier + district_multiplier) / 2.0;
    log::debug!(
        "Scaling metrics: program x{:.4}, district x{:.4}, combined x{:.4}",
        program_multiplier,
        district_multiplier,
        combined
    );

    let total_cases = scale(BASELINE.total_cases, combined);
    let pending_in_court = scale(BASELINE.pending_in_court, combined);
    let disposed_of = scale(BASELINE.disposed_of, combined);
    let in_favour = scale(BASELINE.in_favour, combined);

    DashboardMetrics {
        total_cases,
        total_approved: scale(BASELINE.total_approved, combined),
        total_filed: scale(BASELINE.total_filed, combined),
        in_favour,
        against_las: scale(BASELINE.against_las, combined),
        pending_in_court,
        pending_percent: percent(pending_in_court, total_cases),
        disposed_of,
        disposed_percent: percent(disposed_of, total_cases),
        favour_percent: percent(in_favour, disposed_of),
        avg_days: (BASELINE.avg_days as f64 * jitter.factor()).round() as u32,
        actions: ActionCounts {
            new_interviews: scale(BASELINE.actions.new_interviews, combined),
            pending_approvals: scale(BASELINE.actions.pending_approvals, combined),
            upcoming_hearings: scale(BASELINE.actions.upcoming_hearings, combined),
            cases_not_updated: scale(BASELINE.actions.cases_not_updated, combined),
        },
    }
}

/// Share of the known space a facet selection covers; 1.0 when unrestricted.
/// Selecting more values than the known count caps at 1.0.
fn facet_multiplier(selected: usize, known: usize) -> f64 {
    if selected == 0 || known == 0 {
        return 1.0;
    }
    (selected as f64 / known as f64).min(1.0)
}

/// Round-half-up on non-negative values.
fn scale(count: u32, multiplier: f64) -> u32 {
    (count as f64 * multiplier).round() as u32
}

fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64 * 100.0).round() as u32).min(100)
}
