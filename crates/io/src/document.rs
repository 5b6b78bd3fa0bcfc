// Attendance document text

use std::path::Path;

use rollcall_recon::{Cleaner, Document};

use crate::csv::read_file_as_utf8;
use crate::error::IoError;

/// Read the raw document and build the token stream in one step.
pub fn load_document(path: &Path, cleaner: &Cleaner) -> Result<Document, IoError> {
    let raw = read_file_as_utf8(path)?;
    log::debug!("document {}: {} bytes", path.display(), raw.len());
    Ok(Document::from_raw(&raw, cleaner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_recon::NormalizeRules;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_cleans_and_tokenizes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sheet.txt");
        fs::write(&path, "CNIT 180 roll\n1. Ana Cruz\n").unwrap();

        let cleaner = Cleaner::new(&NormalizeRules::default()).unwrap();
        let doc = load_document(&path, &cleaner).unwrap();
        assert_eq!(doc.normalized(), "ana cruz");
    }

    #[test]
    fn unreadable_document() {
        let dir = tempdir().unwrap();
        let cleaner = Cleaner::new(&NormalizeRules::default()).unwrap();
        let err = load_document(&dir.path().join("missing.txt"), &cleaner).unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }
}
