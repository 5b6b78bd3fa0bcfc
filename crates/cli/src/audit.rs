//! `rollcall audit`: ranked correction proposals for absent roster entries.

use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;

use rollcall_io::{load_document, write_audit_csv, write_audit_json, RosterTable};
use rollcall_recon::{run_audit, AuditResult, AuditSummary, Cleaner};

use crate::config::load_config;
use crate::{print_json, resolve_output, CliError, RunMeta};

pub const DEFAULT_AUDIT_OUTPUT: &str = "missing_attendance_best_matches";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AuditFormat {
    Csv,
    Json,
}

impl AuditFormat {
    fn extension(self) -> &'static str {
        match self {
            AuditFormat::Csv => "csv",
            AuditFormat::Json => "json",
        }
    }
}

#[derive(Serialize)]
struct AuditOutput<'a> {
    meta: RunMeta,
    roster: String,
    document: String,
    output: String,
    summary: &'a AuditSummary,
    results: &'a [AuditResult],
}

pub fn cmd_audit(
    roster_path: PathBuf,
    document_path: PathBuf,
    output: Option<PathBuf>,
    format: AuditFormat,
    config_path: Option<PathBuf>,
    json: bool,
) -> Result<(), CliError> {
    let config = load_config(config_path.as_deref())?;
    let cleaner = Cleaner::new(&config.rules)?;
    let default_name = format!("{DEFAULT_AUDIT_OUTPUT}.{}", format.extension());
    let output_path = resolve_output(&roster_path, output, &default_name)?;

    let roster = RosterTable::load(&roster_path)?;
    if !roster.headers().iter().any(|h| h == &config.columns.attended) {
        tracing::warn!(
            column = %config.columns.attended,
            "roster has no attended column; auditing every entry"
        );
    }
    let records = roster.records(&config.columns)?;
    let doc = load_document(&document_path, &cleaner)?;

    let report = run_audit(&config.audit, &doc, &records);

    match format {
        AuditFormat::Csv => write_audit_csv(&report.results, &output_path)?,
        AuditFormat::Json => write_audit_json(&report, &output_path)?,
    }

    if json {
        print_json(&AuditOutput {
            meta: RunMeta::new("audit"),
            roster: roster_path.display().to_string(),
            document: document_path.display().to_string(),
            output: output_path.display().to_string(),
            summary: &report.summary,
            results: &report.results,
        })?;
    } else if report.results.is_empty() {
        println!("No candidates found for missing students.");
    } else {
        for result in &report.results {
            println!("{}", format_result_line(result));
        }
    }

    let s = &report.summary;
    eprintln!("wrote {}", output_path.display());
    eprintln!(
        "audit: {} absent, {} with a proposed match, {} without",
        s.examined, s.matched, s.unmatched
    );
    Ok(())
}

/// `[idx] First Last -> 'first last' (Combined=x.x, Direction=D)`
fn format_result_line(result: &AuditResult) -> String {
    format!(
        "[{}] {} {} -> '{}' (Combined={:.1}, Direction={})",
        result.roster_index,
        result.roster_first,
        result.roster_last,
        result.best.matched_name(),
        result.best.combined,
        result.best.direction,
    )
}
