//! `rollcall scan`: mark roster entries attended or absent.

use std::path::PathBuf;

use serde::Serialize;

use rollcall_io::{load_document, RosterTable};
use rollcall_recon::{run_scan, Cleaner, ScanSummary};

use crate::config::load_config;
use crate::{print_json, resolve_output, CliError, RunMeta};

pub const DEFAULT_SCAN_OUTPUT: &str = "roster_new.csv";

#[derive(Serialize)]
struct ScanOutput<'a> {
    meta: RunMeta,
    roster: String,
    document: String,
    output: String,
    summary: &'a ScanSummary,
}

pub fn cmd_scan(
    roster_path: PathBuf,
    document_path: PathBuf,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
    json: bool,
) -> Result<(), CliError> {
    let config = load_config(config_path.as_deref())?;
    let cleaner = Cleaner::new(&config.rules)?;
    let output_path = resolve_output(&roster_path, output, DEFAULT_SCAN_OUTPUT)?;

    // Everything is read and checked before anything is written
    let mut roster = RosterTable::load(&roster_path)?;
    let mut records = roster.scan_records(&config.columns)?;
    let doc = load_document(&document_path, &cleaner)?;

    let summary = run_scan(&config.scan, &doc, &mut records);

    roster.apply_scan(&records, &config.columns);
    roster.save(&output_path)?;
    tracing::debug!(output = %output_path.display(), "roster written");

    if json {
        print_json(&ScanOutput {
            meta: RunMeta::new("scan"),
            roster: roster_path.display().to_string(),
            document: document_path.display().to_string(),
            output: output_path.display().to_string(),
            summary: &summary,
        })?;
    }

    eprintln!("wrote {}", output_path.display());
    eprintln!(
        "scan: {} of {} attended ({} skipped with an empty name)",
        summary.attended, summary.records, summary.skipped
    );
    Ok(())
}
