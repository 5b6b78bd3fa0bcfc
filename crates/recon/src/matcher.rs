use std::collections::HashSet;

use crate::config::MatchConfig;
use crate::document::Token;
use crate::model::{CandidateMatch, Direction};
use crate::similarity::{top_matches, ScoredCandidate};
use crate::window::{best_last_name_score, window_around};

/// Anchor on surname hits, then look for the first name around each one.
///
/// Every query in `last_queries` is searched independently for up to
/// `top_n_anchor` hits at or above the last-name cutoff. The merged hits
/// are visited best first; an anchor position reached through two surname
/// parts is only opened once.
pub fn match_last_to_first(
    roster_index: usize,
    first_norm: &str,
    last_queries: &[&str],
    tokens: &[Token],
    config: &MatchConfig,
) -> Vec<CandidateMatch> {
    if first_norm.is_empty() {
        return Vec::new();
    }

    let mut anchors: Vec<ScoredCandidate> = last_queries
        .iter()
        .filter(|q| !q.is_empty())
        .flat_map(|q| top_matches(q, tokens, config.last_name_cutoff, config.top_n_anchor))
        .collect();
    // Stable: equal scores keep query order, then position order.
    anchors.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for anchor in anchors {
        if !seen.insert(anchor.position) {
            continue;
        }
        let window = window_around(tokens, anchor.position, config.window_radius);
        let texts = window.texts();
        let near = top_matches(first_norm, &texts, config.first_name_cutoff, config.top_n_near);
        if near.is_empty() {
            continue;
        }
        let context = window.context();
        for hit in near {
            out.push(CandidateMatch {
                roster_index,
                direction: Direction::LastToFirst,
                first_token: Some(hit.text),
                last_token: Some(anchor.text.clone()),
                first_score: hit.score,
                last_score: anchor.score,
                combined: anchor.score + hit.score,
                anchor_position: anchor.position,
                context: context.clone(),
            });
        }
    }

    out
}

/// Anchor on first-name hits, then score the surname around each one with
/// the multi-part / bigram scorer.
pub fn match_first_to_last(
    roster_index: usize,
    first_norm: &str,
    last_norm: &str,
    tokens: &[Token],
    config: &MatchConfig,
) -> Vec<CandidateMatch> {
    if first_norm.is_empty() || last_norm.is_empty() {
        return Vec::new();
    }

    let anchors = top_matches(first_norm, tokens, config.first_name_cutoff, config.top_n_anchor);
    let mut out = Vec::new();

    for anchor in anchors {
        let window = window_around(tokens, anchor.position, config.window_radius);
        let (last_token, last_score) = best_last_name_score(last_norm, &window.texts());
        if last_token.is_none() || last_score < config.last_name_cutoff {
            continue;
        }
        out.push(CandidateMatch {
            roster_index,
            direction: Direction::FirstToLast,
            first_token: Some(anchor.text),
            last_token,
            first_score: anchor.score,
            last_score,
            combined: anchor.score + last_score,
            anchor_position: anchor.position,
            context: window.context(),
        });
    }

    out
}

/// Both anchor directions for one record, LAST->FIRST candidates first.
///
/// Surname parts are searched independently in the LAST->FIRST direction.
pub fn match_both_directions(
    roster_index: usize,
    first_norm: &str,
    last_norm: &str,
    tokens: &[Token],
    config: &MatchConfig,
) -> Vec<CandidateMatch> {
    let parts: Vec<&str> = last_norm.split_whitespace().collect();
    let mut out = match_last_to_first(roster_index, first_norm, &parts, tokens, config);
    out.extend(match_first_to_last(roster_index, first_norm, last_norm, tokens, config));
    out
}
