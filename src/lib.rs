//! Case-management dashboard core for the Legal Aid Society.
//!
//! Filters are staged in a [`filters::FilterEditor`] and published into a
//! [`state::DashboardState`], which derives KPI metrics from the unfiltered
//! baseline. The record sets, chart series and exports hang off the same
//! state object.

pub mod catalog;
pub mod charts;
pub mod datasets;
pub mod error;
pub mod export;
pub mod filters;
pub mod metrics;
pub mod quick_actions;
pub mod reports;
pub mod search;
pub mod state;
pub mod types;

pub use error::DashboardError;
pub use filters::{FilterEditor, FilterSelection};
pub use metrics::{derive_metrics, DashboardMetrics, BASELINE};
pub use state::DashboardState;
