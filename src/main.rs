//! `lasboard [FILTER_JSON] [--export VALUE]`
//!
//! Prints the dashboard snapshot for an optional saved filter selection and,
//! with `--export`, writes the chart drill-down CSV for VALUE.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use lasboard_lib::error::ErrorPayload;
use lasboard_lib::state::{load_config_or_default, DashboardState};
use lasboard_lib::{DashboardError, FilterSelection};

#[derive(Debug, Parser)]
#[command(name = "lasboard")]
#[command(about = "Legal Aid Society case dashboard")]
struct Args {
    /// Saved filter selection (JSON) to apply before printing.
    filter_path: Option<PathBuf>,
    /// Write the chart drill-down CSV for this value into exportDir.
    #[arg(long = "export", value_name = "VALUE")]
    export_value: Option<String>,
}

fn run(args: Args) -> Result<(), DashboardError> {
    let mut state = DashboardState::new(load_config_or_default());

    if let Some(path) = &args.filter_path {
        let content = fs::read_to_string(path)?;
        let selection: FilterSelection = serde_json::from_str(&content)?;
        state.editor_mut().load_draft(selection)?;
        state.apply_filters();
    }

    println!("{}", serde_json::to_string_pretty(&state.snapshot())?);

    if let Some(value) = &args.export_value {
        let path = state.export_drill_down(value)?;
        log::info!("Wrote {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let payload = ErrorPayload::from(&e);
            log::error!("{} ({})", payload.message, payload.recovery_suggestion);
            ExitCode::FAILURE
        }
    }
}
