// Audit JSON export

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use rollcall_recon::AuditReport;

use crate::error::IoError;

/// Export the audit report (summary + results) as pretty JSON.
pub fn write_audit_json(report: &AuditReport, path: &Path) -> Result<(), IoError> {
    let file = File::create(path).map_err(|e| IoError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report).map_err(|e| IoError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(())
}
