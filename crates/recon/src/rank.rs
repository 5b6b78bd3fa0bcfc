use std::cmp::Ordering;

use crate::model::CandidateMatch;

/// Combined desc, then last desc, then first desc.
pub fn by_strength(a: &CandidateMatch, b: &CandidateMatch) -> Ordering {
    desc(a.combined, b.combined)
        .then_with(|| desc(a.last_score, b.last_score))
        .then_with(|| desc(a.first_score, b.first_score))
}

fn desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Keep the strongest candidate per roster index, ordered by index.
///
/// The sort is stable, so candidates that tie on every score keep the order
/// they were generated in.
pub fn best_per_record(mut candidates: Vec<CandidateMatch>) -> Vec<CandidateMatch> {
    candidates.sort_by(|a, b| a.roster_index.cmp(&b.roster_index).then_with(|| by_strength(a, b)));

    let mut out: Vec<CandidateMatch> = Vec::new();
    for cand in candidates {
        if out.last().map(|m| m.roster_index) != Some(cand.roster_index) {
            out.push(cand);
        }
    }
    out
}
