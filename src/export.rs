//! CSV export of drill-down case lists.
//!
//! Output is one header row plus one row per case, rows joined with `\n` and
//! no trailing newline. In `CsvStyle::Legacy` field values are written raw:
//! a comma inside a value is not escaped.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::error::DashboardError;
use crate::types::{ChartCase, CsvStyle};

pub const CSV_HEADER: [&str; 7] = [
    "Case Number",
    "Client Name",
    "Type",
    "Status",
    "Date",
    "Lawyer",
    "Court",
];

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Download name for a drill-down export: whitespace runs become `_`, and
/// so do path separators, so the name is always a plain file name.
///
/// Example: "Walk-In" → "Walk-In_cases.csv", "Govt. Institutions" →
/// "Govt._Institutions_cases.csv"
pub fn export_filename(filter_value: &str) -> String {
    let name = whitespace_run()
        .replace_all(filter_value, "_")
        .replace(['/', '\\'], "_");
    format!("{}_cases.csv", name)
}

/// Render rows as CSV text.
pub fn render_csv(rows: &[ChartCase], style: CsvStyle) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render_row(&CSV_HEADER, style));
    for row in rows {
        lines.push(render_row(&row.fields(), style));
    }
    lines.join("\n")
}

fn render_row(fields: &[&str], style: CsvStyle) -> String {
    match style {
        CsvStyle::Legacy => fields.join(","),
        CsvStyle::Quoted => fields
            .iter()
            .map(|f| quote_field(f))
            .collect::<Vec<_>>()
            .join(","),
    }
}

fn should_neutralize_formula(value: &str) -> bool {
    let trimmed = value.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('\'') {
        return false;
    }
    matches!(trimmed.chars().next(), Some('=') | Some('+') | Some('@'))
}

/// Quote a field if it carries a delimiter, quote or line break. Values that
/// a spreadsheet would evaluate as a formula get a leading `'`.
fn quote_field(value: &str) -> String {
    let safe = if should_neutralize_formula(value) {
        format!("'{value}")
    } else {
        value.to_string()
    };
    if safe.contains(',') || safe.contains('"') || safe.contains('\n') || safe.contains('\r') {
        format!("\"{}\"", safe.replace('"', "\"\""))
    } else {
        safe
    }
}

/// Write the export for `filter_value` into `dir`. Returns the written path.
pub fn write_export(
    dir: &Path,
    filter_value: &str,
    rows: &[ChartCase],
    style: CsvStyle,
) -> Result<PathBuf, DashboardError> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    let path = dir.join(export_filename(filter_value));
    if path.parent() != Some(dir) {
        return Err(DashboardError::Io(format!(
            "Export path {} is outside {}",
            path.display(),
            dir.display()
        )));
    }
    fs::write(&path, render_csv(rows, style))?;
    log::info!("{} cases exported to {}", rows.len(), path.display());
    Ok(path)
}
