use std::collections::HashMap;

use crate::config::{MatchConfig, ScanConfig};
use crate::document::Document;
use crate::matcher::{match_both_directions, match_last_to_first};
use crate::model::{AuditReport, AuditResult, AuditSummary, RosterRecord, ScanSummary};
use crate::normalize::normalize;
use crate::rank::best_per_record;

/// Mark every record attended or absent against `doc`, in place.
///
/// A record is attended when at least one surname anchor has a first-name
/// hit at or above the cutoff in its window; its score is the best combined
/// score seen. Records with an empty first or last name are marked absent
/// with score 0 and never matched.
pub fn run_scan(config: &ScanConfig, doc: &Document, records: &mut [RosterRecord]) -> ScanSummary {
    let mut summary = ScanSummary {
        records: records.len(),
        tokens: doc.len(),
        ..Default::default()
    };

    for record in records.iter_mut() {
        let first = normalize(&record.first_name);
        let last = normalize(&record.last_name);

        if first.is_empty() || last.is_empty() {
            record.attended = false;
            record.match_score = 0.0;
            summary.skipped += 1;
            log::debug!("scan: skipping record {} (empty name part)", record.index);
            continue;
        }

        let queries: Vec<&str> = if config.split_last_name {
            last.split_whitespace().collect()
        } else {
            vec![last.as_str()]
        };

        let candidates =
            match_last_to_first(record.index, &first, &queries, doc.tokens(), &config.matching);

        record.attended = !candidates.is_empty();
        record.match_score = candidates
            .iter()
            .map(|c| c.combined)
            .fold(0.0, f64::max);

        if record.attended {
            summary.attended += 1;
        }
        log::debug!(
            "scan: [{}] {} {} attended={} score={:.1}",
            record.index,
            record.first_name,
            record.last_name,
            record.attended,
            record.match_score
        );
    }

    log::info!(
        "scan: {}/{} attended ({} skipped, {} tokens)",
        summary.attended,
        summary.records,
        summary.skipped,
        summary.tokens
    );
    summary
}

/// Propose the best document match for every record the scan left absent.
///
/// Both anchor directions run with the audit's wider settings. Records with
/// no qualifying candidate produce no result.
pub fn run_audit(config: &MatchConfig, doc: &Document, records: &[RosterRecord]) -> AuditReport {
    let mut summary = AuditSummary {
        records: records.len(),
        tokens: doc.len(),
        ..Default::default()
    };

    let missing: Vec<&RosterRecord> = records.iter().filter(|r| !r.attended).collect();
    summary.examined = missing.len();

    let mut candidates = Vec::new();
    for record in &missing {
        let first = normalize(&record.first_name);
        let last = normalize(&record.last_name);
        let found = match_both_directions(record.index, &first, &last, doc.tokens(), config);
        log::debug!(
            "audit: [{}] {} {} -> {} candidates",
            record.index,
            record.first_name,
            record.last_name,
            found.len()
        );
        candidates.extend(found);
    }
    summary.candidates = candidates.len();

    let by_index: HashMap<usize, &RosterRecord> = missing.iter().map(|r| (r.index, *r)).collect();
    let results: Vec<AuditResult> = best_per_record(candidates)
        .into_iter()
        .filter_map(|best| {
            let record = by_index.get(&best.roster_index)?;
            Some(AuditResult {
                roster_index: record.index,
                roster_first: record.first_name.clone(),
                roster_last: record.last_name.clone(),
                best,
            })
        })
        .collect();

    summary.matched = results.len();
    summary.unmatched = summary.examined - summary.matched;

    log::info!(
        "audit: {} examined, {} with candidates, {} without",
        summary.examined,
        summary.matched,
        summary.unmatched
    );
    AuditReport { summary, results }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Direction;

    fn roster(names: &[(&str, &str)]) -> Vec<RosterRecord> {
        names
            .iter()
            .enumerate()
            .map(|(i, (f, l))| RosterRecord::new(i, *f, *l))
            .collect()
    }

    #[test]
    fn scan_marks_present_and_absent() {
        let doc = Document::from_text("john michael smith attended jane doe present");
        let mut records = roster(&[("Jon", "Smith"), ("Jane", "Doe"), ("Robert", "Kowalski")]);
        let summary = run_scan(&ScanConfig::default(), &doc, &mut records);

        assert!(records[0].attended);
        assert!(records[0].match_score > 120.0);
        assert!(records[1].attended);
        assert_eq!(records[1].match_score, 200.0);
        assert!(!records[2].attended);
        assert_eq!(records[2].match_score, 0.0);
        assert_eq!(summary.records, 3);
        assert_eq!(summary.attended, 2);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.tokens, 7);
    }

    #[test]
    fn scan_skips_empty_names() {
        let doc = Document::from_text("smith");
        let mut records = roster(&[("", "Smith"), ("123", "Smith")]);
        records[0].attended = true;
        records[0].match_score = 99.0;
        let summary = run_scan(&ScanConfig::default(), &doc, &mut records);
        assert!(records.iter().all(|r| !r.attended && r.match_score == 0.0));
        assert_eq!(summary.skipped, 2);
    }

    #[test]
    fn scan_split_last_name_anchors_on_parts() {
        // Only the "berg" part survives in the text
        let doc = Document::from_text("maria berg present");
        let mut whole = roster(&[("Maria", "Van Der Berg")]);
        run_scan(&ScanConfig::default(), &doc, &mut whole);
        assert!(!whole[0].attended);

        let mut split = whole.clone();
        let config = ScanConfig {
            split_last_name: true,
            ..ScanConfig::default()
        };
        run_scan(&config, &doc, &mut split);
        assert!(split[0].attended);
        assert_eq!(split[0].match_score, 200.0);
    }

    #[test]
    fn audit_only_examines_absent_records() {
        let doc = Document::from_text("jon smyth x y z");
        let records = vec![
            RosterRecord::new(0, "Jon", "Smith").with_attended(true),
            RosterRecord::new(1, "John", "Smith"),
        ];
        let report = run_audit(&MatchConfig::audit_defaults(), &doc, &records);
        assert_eq!(report.summary.examined, 1);
        assert_eq!(report.results.len(), 1);
        let result = &report.results[0];
        assert_eq!(result.roster_index, 1);
        assert_eq!(result.roster_first, "John");
        assert_eq!(result.best.first_token.as_deref(), Some("jon"));
        assert_eq!(result.best.last_token.as_deref(), Some("smyth"));
        assert_eq!(result.best.direction, Direction::LastToFirst);
    }

    #[test]
    fn audit_omits_records_without_candidates() {
        let doc = Document::from_text("alpha beta gamma");
        let records = roster(&[("Xu", "Qi")]);
        let report = run_audit(&MatchConfig::audit_defaults(), &doc, &records);
        assert!(report.results.is_empty());
        assert_eq!(report.summary.unmatched, 1);
        assert_eq!(report.summary.candidates, 0);
    }

    #[test]
    fn audit_results_sorted_by_index() {
        let doc = Document::from_text("ann lee bob ray");
        let records = roster(&[("Bob", "Ray"), ("Ann", "Lee")]);
        let report = run_audit(&MatchConfig::audit_defaults(), &doc, &records);
        let indices: Vec<usize> = report.results.iter().map(|r| r.roster_index).collect();
        assert_eq!(indices, vec![0, 1]);
    }
}
