//! Document cleaning and name normalization.
//!
//! `Cleaner::clean` strips sheet artifacts from raw OCR text using the
//! configured rules; `normalize` folds any text (document or roster name)
//! into the canonical `[a-z' ]` form the matcher works on.

use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizeRules;
use crate::error::ReconError;

/// Compiled cleaning rules.
#[derive(Debug, Clone)]
pub struct Cleaner {
    marker: Option<Regex>,
    digits: Regex,
    non_letters: Regex,
    noise: Option<Regex>,
    whitespace: Regex,
}

impl Cleaner {
    pub fn new(rules: &NormalizeRules) -> Result<Self, ReconError> {
        let marker = if rules.course_code_markers.is_empty() {
            None
        } else {
            let alternation = rules
                .course_code_markers
                .iter()
                .map(|p| {
                    // Compile each fragment alone first so the error names it.
                    Regex::new(p).map_err(|e| ReconError::InvalidPattern {
                        pattern: p.clone(),
                        message: e.to_string(),
                    })?;
                    Ok(format!("(?:{p})"))
                })
                .collect::<Result<Vec<_>, ReconError>>()?
                .join("|");
            Some(compile(&format!("(?:{alternation}).*"))?)
        };

        let noise = if rules.noise_words.is_empty() {
            None
        } else {
            let words: Vec<String> = rules.noise_words.iter().map(|w| regex::escape(w)).collect();
            Some(compile(&format!(r"(?i)\b(?:{})\b", words.join("|")))?)
        };

        Ok(Self {
            marker,
            digits: compile(r"\d+")?,
            non_letters: compile(r"[^A-Za-zÀ-ÖØ-öø-ÿ\s'()]")?,
            noise,
            whitespace: compile(r"\s+")?,
        })
    }

    /// Strip course codes, digits, punctuation and noise words from raw text.
    pub fn clean(&self, raw: &str) -> String {
        let mut text = raw.to_string();
        if let Some(ref marker) = self.marker {
            text = marker.replace_all(&text, "").into_owned();
        }
        text = self.digits.replace_all(&text, "").into_owned();
        text = self.non_letters.replace_all(&text, "").into_owned();
        if let Some(ref noise) = self.noise {
            text = noise.replace_all(&text, "").into_owned();
        }
        self.whitespace.replace_all(&text, " ").trim().to_string()
    }
}

fn compile(pattern: &str) -> Result<Regex, ReconError> {
    Regex::new(pattern).map_err(|e| ReconError::InvalidPattern {
        pattern: pattern.into(),
        message: e.to_string(),
    })
}

/// Canonical form: lowercase ASCII letters, apostrophes and single spaces.
///
/// Parentheses become spaces so bracketed nicknames don't fuse with the
/// surrounding word; accents are folded through NFKD.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .replace(['(', ')'], " ")
        .to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| {
            if c.is_ascii_lowercase() || c == '\'' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    collapse_whitespace(&folded)
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
