use std::path::PathBuf;

use rollcall_recon::config::{MatchConfig, NormalizeRules, ReconConfig, ScanConfig};
use rollcall_recon::window::best_last_name_score;
use rollcall_recon::{run_audit, run_scan, Cleaner, Direction, Document, RosterRecord};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_sheet() -> Document {
    let path = fixtures_dir().join("sheet.txt");
    let raw = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    let cleaner = Cleaner::new(&NormalizeRules::default()).unwrap();
    Document::from_raw(&raw, &cleaner)
}

fn roster(names: &[(&str, &str)]) -> Vec<RosterRecord> {
    names
        .iter()
        .enumerate()
        .map(|(i, (f, l))| RosterRecord::new(i, *f, *l))
        .collect()
}

// -------------------------------------------------------------------------
// Document
// -------------------------------------------------------------------------

#[test]
fn sheet_cleans_to_name_tokens() {
    let doc = load_sheet();
    assert_eq!(
        doc.normalized(),
        "john michael smith maria van derberg jose nunez pepe o'brien liam jane doe present"
    );
    assert_eq!(doc.len(), 14);
}

// -------------------------------------------------------------------------
// Scan
// -------------------------------------------------------------------------

#[test]
fn scan_against_sheet() {
    let doc = load_sheet();
    let mut records = roster(&[
        ("Jon", "Smith"),
        ("José", "Núñez"),
        ("Liam", "O'Brien"),
        ("Jane", "Dough"),
        ("Yusuf", "Kwok"),
        ("", "Doe"),
    ]);
    let summary = run_scan(&ScanConfig::default(), &doc, &mut records);

    // Nickname-ish first name still clears the cutoff next to an exact surname
    assert!(records[0].attended);
    assert!(records[0].match_score > 120.0);
    // Accents fold on both sides
    assert!(records[1].attended);
    assert_eq!(records[1].match_score, 200.0);
    assert!(records[2].attended);
    assert_eq!(records[2].match_score, 200.0);
    // "dough" vs "doe" is only 50: below the scan cutoff
    assert!(!records[3].attended);
    assert!(!records[4].attended);
    assert_eq!(records[4].match_score, 0.0);
    assert!(!records[5].attended);

    assert_eq!(summary.records, 6);
    assert_eq!(summary.attended, 3);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.tokens, 14);
}

#[test]
fn attended_iff_score_positive() {
    let doc = load_sheet();
    let mut records = roster(&[("Jon", "Smith"), ("Yusuf", "Kwok"), ("Maria", "Vanderberg")]);
    run_scan(&ScanConfig::default(), &doc, &mut records);
    for r in &records {
        assert_eq!(r.attended, r.match_score > 0.0, "record {}", r.index);
    }
}

// -------------------------------------------------------------------------
// Audit
// -------------------------------------------------------------------------

#[test]
fn audit_proposes_corrections_for_absent_records() {
    let doc = load_sheet();
    let mut records = roster(&[("Jon", "Smith"), ("Jane", "Dough"), ("Yusuf", "Kwok")]);
    run_scan(&ScanConfig::default(), &doc, &mut records);

    let report = run_audit(&MatchConfig::audit_defaults(), &doc, &records);
    assert_eq!(report.summary.examined, 2);
    assert_eq!(report.summary.matched, 1);
    assert_eq!(report.summary.unmatched, 1);

    let result = &report.results[0];
    assert_eq!(result.roster_index, 1);
    assert_eq!(result.roster_first, "Jane");
    assert_eq!(result.roster_last, "Dough");
    assert_eq!(result.best.matched_name(), "jane doe");
    assert_eq!(result.best.direction, Direction::LastToFirst);
    assert_eq!(result.best.first_score, 100.0);
    assert_eq!(result.best.last_score, 50.0);
    assert_eq!(result.best.combined, 150.0);
    assert!(result.best.context.contains("jane doe"));
}

#[test]
fn audit_recovers_split_compound_surname() {
    let doc = load_sheet();
    let records = roster(&[("Maria", "Vanderberg")]);
    let report = run_audit(&MatchConfig::audit_defaults(), &doc, &records);

    assert_eq!(report.results.len(), 1);
    let best = &report.results[0].best;
    assert_eq!(best.direction, Direction::FirstToLast);
    assert_eq!(best.last_token.as_deref(), Some("van derberg"));
    assert!(best.last_score > 95.0);
}

#[test]
fn compound_surname_parts_score_high() {
    let (cand, score) = best_last_name_score("van der berg", &["maria", "van", "derberg"]);
    assert!(cand.is_some());
    assert!(score >= 90.0);
}

#[test]
fn shifted_space_in_surname_recovered_by_bigrams() {
    let doc = Document::from_text("ana dela cruz present");
    let records = roster(&[("Ana", "De Lacruz")]);
    let report = run_audit(&MatchConfig::audit_defaults(), &doc, &records);

    assert_eq!(report.results.len(), 1);
    let best = &report.results[0].best;
    // Whole surname against the fused window pair beats any single part
    assert_eq!(best.direction, Direction::FirstToLast);
    assert_eq!(best.first_token.as_deref(), Some("ana"));
    assert_eq!(best.last_token.as_deref(), Some("dela cruz"));
    assert_eq!(best.last_score, 1600.0 / 18.0);
    assert_eq!(best.combined, 100.0 + 1600.0 / 18.0);
}

#[test]
fn absent_everywhere_gives_no_row() {
    let doc = load_sheet();
    let mut records = roster(&[("Yusuf", "Kwok")]);
    run_scan(&ScanConfig::default(), &doc, &mut records);
    assert!(!records[0].attended);

    let report = run_audit(&MatchConfig::audit_defaults(), &doc, &records);
    assert!(report.results.is_empty());
}

#[test]
fn every_result_combined_is_sum() {
    let doc = load_sheet();
    let records = roster(&[
        ("Jon", "Smith"),
        ("Jane", "Dough"),
        ("Maria", "Van Der Berg"),
        ("Liam", "OBrian"),
        ("Pepe", "Nunes"),
    ]);
    let report = run_audit(&MatchConfig::audit_defaults(), &doc, &records);
    assert!(!report.results.is_empty());
    for r in &report.results {
        assert_eq!(r.best.combined, r.best.first_score + r.best.last_score);
    }
    let indices: Vec<usize> = report.results.iter().map(|r| r.roster_index).collect();
    let mut sorted = indices.clone();
    sorted.sort_unstable();
    assert_eq!(indices, sorted);
}

// -------------------------------------------------------------------------
// Config-driven runs
// -------------------------------------------------------------------------

#[test]
fn config_file_tightens_scan() {
    let config = ReconConfig::from_toml("[scan]\nfirst_name_cutoff = 90\n").unwrap();
    let doc = load_sheet();
    let mut records = roster(&[("Jon", "Smith")]);
    // ratio("jon", "john") is ~85.7
    run_scan(&config.scan, &doc, &mut records);
    assert!(!records[0].attended);
}

#[test]
fn custom_noise_words_drop_tokens() {
    let rules = NormalizeRules {
        noise_words: vec!["present".into()],
        ..NormalizeRules::default()
    };
    let cleaner = Cleaner::new(&rules).unwrap();
    let doc = Document::from_raw("Jane Doe Present\nAm", &cleaner);
    assert_eq!(doc.normalized(), "jane doe am");
}
