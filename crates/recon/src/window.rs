//! Fixed-radius neighborhoods around anchor tokens, and the surname scorer
//! that runs inside them.

use crate::document::Token;
use crate::similarity::best_match;

/// A contiguous slice of the token stream around an anchor.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    pub anchor: usize,
    pub start: usize,
    pub tokens: &'a [Token],
}

impl<'a> Window<'a> {
    pub fn end(&self) -> usize {
        self.start + self.tokens.len()
    }

    pub fn texts(&self) -> Vec<&'a str> {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Window tokens joined by single spaces.
    pub fn context(&self) -> String {
        self.texts().join(" ")
    }
}

/// Tokens `[anchor - radius, anchor + radius]`, clamped to the stream.
pub fn window_around(tokens: &[Token], anchor: usize, radius: usize) -> Window<'_> {
    let start = anchor.saturating_sub(radius).min(tokens.len());
    let end = anchor
        .saturating_add(radius)
        .saturating_add(1)
        .min(tokens.len());
    Window {
        anchor,
        start,
        tokens: &tokens[start..end.max(start)],
    }
}

/// Best surname score inside a window.
///
/// Scores every surname part against every window token, every window
/// bigram against every surname part, and every surname bigram against
/// every window bigram. The single best comparison wins; on equal scores
/// the earlier comparison is kept.
pub fn best_last_name_score(last_norm: &str, window: &[&str]) -> (Option<String>, f64) {
    let parts: Vec<&str> = last_norm.split_whitespace().collect();
    if parts.is_empty() {
        return (None, 0.0);
    }

    let mut best: (Option<String>, f64) = (None, 0.0);
    let mut consider = |hit: (Option<String>, f64)| {
        if hit.0.is_some() && (best.0.is_none() || hit.1 > best.1) {
            best = hit;
        }
    };

    for part in &parts {
        consider(best_match(part, window));
    }

    let window_bigrams: Vec<String> = window.windows(2).map(|w| w.join(" ")).collect();
    if !window_bigrams.is_empty() {
        for part in &parts {
            consider(best_match(part, &window_bigrams));
        }
        for pair in parts.windows(2) {
            consider(best_match(&pair.join(" "), &window_bigrams));
        }
    }

    best
}
