//! Dashboard state object and config loading.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;

use crate::charts;
use crate::datasets;
use crate::error::DashboardError;
use crate::export;
use crate::filters::{FilterEditor, FilterSelection};
use crate::metrics::{self, jitter, AvgDaysJitter, DashboardMetrics};
use crate::quick_actions::QuickActionBoard;
use crate::search;
use crate::types::{CaseRecord, ChartCase, Config};

/// Dashboard state owned by the top-level view.
///
/// One writer: every mutation goes through `&mut self`, and metrics are
/// recomputed only when filters are applied or cleared.
pub struct DashboardState {
    config: Config,
    editor: FilterEditor,
    metrics: DashboardMetrics,
    quick_actions: QuickActionBoard,
    jitter: Box<dyn AvgDaysJitter>,
}

/// Serializable view of the state for a UI bridge.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub filters: FilterSelection,
    pub metrics: DashboardMetrics,
    pub quick_actions: QuickActionBoard,
}

impl DashboardState {
    pub fn new(config: Config) -> Self {
        let jitter = jitter::from_config(config.avg_days_jitter, config.jitter_seed);
        Self::with_jitter(config, jitter)
    }

    pub fn with_jitter(config: Config, jitter: Box<dyn AvgDaysJitter>) -> Self {
        let mut quick_actions = match &config.quick_action_order {
            Some(order) => QuickActionBoard::with_order(order),
            None => QuickActionBoard::default(),
        };
        quick_actions.refresh_counts(&metrics::BASELINE);

        Self {
            config,
            editor: FilterEditor::new(),
            metrics: metrics::BASELINE,
            quick_actions,
            jitter,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn editor(&self) -> &FilterEditor {
        &self.editor
    }

    /// Draft edits; nothing changes in the metrics until `apply_filters`.
    pub fn editor_mut(&mut self) -> &mut FilterEditor {
        &mut self.editor
    }

    pub fn metrics(&self) -> &DashboardMetrics {
        &self.metrics
    }

    pub fn quick_actions(&self) -> &QuickActionBoard {
        &self.quick_actions
    }

    /// Publish the draft selection and recompute.
    pub fn apply_filters(&mut self) -> &DashboardMetrics {
        self.editor.apply();
        self.recompute();
        &self.metrics
    }

    /// Reset every facet and date range, then recompute.
    pub fn clear_filters(&mut self) -> &DashboardMetrics {
        self.editor.clear();
        self.recompute();
        &self.metrics
    }

    fn recompute(&mut self) {
        self.metrics = metrics::derive_metrics(self.editor.applied(), self.jitter.as_mut());
        self.quick_actions.refresh_counts(&self.metrics);
        log::debug!(
            "Recomputed metrics: {} total cases, {} days avg",
            self.metrics.total_cases,
            self.metrics.avg_days
        );
    }

    pub fn move_quick_action(&mut self, from: usize, to: usize) -> Result<(), DashboardError> {
        self.quick_actions.move_card(from, to)
    }

    /// Case list narrowed by the applied filters and the search box.
    pub fn visible_cases(&self, query: &str) -> Vec<CaseRecord> {
        let filtered = search::filter_cases(&datasets::cases(), self.editor.applied());
        search::search(&filtered, query)
    }

    /// Cases with no update inside the configured window.
    pub fn stale_cases(&self, today: NaiveDate) -> Vec<CaseRecord> {
        search::not_updated(&datasets::cases(), today, self.config.stale_after_days)
    }

    pub fn drill_down(&self, filter_value: &str) -> Vec<ChartCase> {
        charts::drill_down_cases(filter_value)
    }

    /// Export the drill-down for `filter_value` into the configured directory.
    pub fn export_drill_down(&self, filter_value: &str) -> Result<PathBuf, DashboardError> {
        let rows = self.drill_down(filter_value);
        export::write_export(
            Path::new(&self.config.export_dir),
            filter_value,
            &rows,
            self.config.csv_style,
        )
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            filters: self.editor.applied().clone(),
            metrics: self.metrics,
            quick_actions: self.quick_actions.clone(),
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Path of ~/.lasboard/config.json
pub fn config_path() -> Result<PathBuf, DashboardError> {
    let home = dirs::home_dir()
        .ok_or_else(|| DashboardError::Config("Could not find home directory".to_string()))?;
    Ok(home.join(".lasboard").join("config.json"))
}

/// Load configuration from ~/.lasboard/config.json
pub fn load_config() -> Result<Config, DashboardError> {
    load_config_from(&config_path()?)
}

/// Load configuration from an explicit path.
pub fn load_config_from(path: &Path) -> Result<Config, DashboardError> {
    if !path.exists() {
        return Err(DashboardError::Config(format!(
            "Config file not found at {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&content)
        .map_err(|e| DashboardError::Config(format!("Failed to parse config: {}", e)))?;

    if config.export_dir.trim().is_empty() {
        return Err(DashboardError::Config("exportDir must not be empty".to_string()));
    }

    Ok(config)
}

/// Load configuration, falling back to defaults when it is missing or bad.
pub fn load_config_or_default() -> Config {
    match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{e}. Using default configuration.");
            Config::default()
        }
    }
}
