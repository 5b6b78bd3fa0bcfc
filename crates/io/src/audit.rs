// Audit CSV export

use std::path::Path;

use rollcall_recon::AuditResult;

use crate::csv::{write_table, Table};
use crate::error::IoError;
use crate::roster::format_score;

pub const AUDIT_HEADERS: [&str; 10] = [
    "RosterIndex",
    "RosterFirst",
    "RosterLast",
    "Direction",
    "CandFirstToken",
    "FirstScore",
    "CandLastToken",
    "LastScore",
    "Combined",
    "Context",
];

pub fn audit_table(results: &[AuditResult]) -> Table {
    let rows = results
        .iter()
        .map(|r| {
            let best = &r.best;
            vec![
                r.roster_index.to_string(),
                r.roster_first.clone(),
                r.roster_last.clone(),
                best.direction.to_string(),
                best.first_token.clone().unwrap_or_default(),
                format_score(best.first_score),
                best.last_token.clone().unwrap_or_default(),
                format_score(best.last_score),
                format_score(best.combined),
                best.context.clone(),
            ]
        })
        .collect();
    Table {
        headers: AUDIT_HEADERS.iter().map(|h| h.to_string()).collect(),
        rows,
        delimiter: b',',
    }
}

/// Header row is written even when there are no results.
pub fn write_audit_csv(results: &[AuditResult], path: &Path) -> Result<(), IoError> {
    write_table(&audit_table(results), path)
}
