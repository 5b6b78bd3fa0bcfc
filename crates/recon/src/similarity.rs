//! Ratio-based string similarity.
//!
//! The score is the classic indel ratio: `200 * LCS(a, b) / (|a| + |b|)`,
//! computed over Unicode scalar values. 100 means identical, 0 means no
//! shared subsequence at all.
//!
//! Ties between candidates with exactly equal scores are always resolved by
//! ascending position in the candidate sequence (first seen wins).

use std::cmp::Ordering;

/// One scored candidate, with its index in the sequence it was drawn from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub text: String,
    pub score: f64,
    pub position: usize,
}

/// Similarity ratio in `[0, 100]`.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    let lcs = lcs_len(&a, &b);
    200.0 * lcs as f64 / total as f64
}

/// Length of the longest common subsequence, two-row DP.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Best single candidate for `query`.
///
/// Returns `(None, 0.0)` when the query or the candidate set is empty.
pub fn best_match<S: AsRef<str>>(query: &str, candidates: &[S]) -> (Option<String>, f64) {
    if query.is_empty() {
        return (None, 0.0);
    }
    let mut best: Option<(usize, f64)> = None;
    for (i, cand) in candidates.iter().enumerate() {
        let score = ratio(query, cand.as_ref());
        // Strict comparison keeps the earliest candidate on ties.
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((i, score));
        }
    }
    match best {
        Some((i, score)) => (Some(candidates[i].as_ref().to_string()), score),
        None => (None, 0.0),
    }
}

/// All candidates scoring at or above `cutoff`, best first, at most `limit`.
pub fn top_matches<S: AsRef<str>>(
    query: &str,
    candidates: &[S],
    cutoff: f64,
    limit: usize,
) -> Vec<ScoredCandidate> {
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }
    let mut hits: Vec<ScoredCandidate> = candidates
        .iter()
        .enumerate()
        .filter_map(|(position, cand)| {
            let score = ratio(query, cand.as_ref());
            (score >= cutoff).then(|| ScoredCandidate {
                text: cand.as_ref().to_string(),
                score,
                position,
            })
        })
        .collect();
    hits.sort_by(by_score_then_position);
    hits.truncate(limit);
    hits
}

/// Descending score, then ascending position.
pub fn by_score_then_position(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then(a.position.cmp(&b.position))
}
