use serde::Serialize;

use crate::normalize::{normalize, Cleaner};

/// A normalized word and its index in the document's token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub position: usize,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Cleaned, normalized and tokenized attendance text.
///
/// Built once per run and shared read-only by every matching operation.
#[derive(Debug, Clone)]
pub struct Document {
    cleaned: String,
    normalized: String,
    tokens: Vec<Token>,
}

impl Document {
    /// Clean raw OCR text with `cleaner`, then normalize and tokenize it.
    pub fn from_raw(raw: &str, cleaner: &Cleaner) -> Self {
        let cleaned = cleaner.clean(raw);
        let doc = Self::build(cleaned);
        log::debug!(
            "document: {} raw bytes -> {} tokens",
            raw.len(),
            doc.tokens.len()
        );
        doc
    }

    /// Skip cleaning; useful when the text was already prepared upstream.
    pub fn from_text(text: &str) -> Self {
        Self::build(text.to_string())
    }

    fn build(cleaned: String) -> Self {
        let normalized = normalize(&cleaned);
        let tokens = normalized
            .split(' ')
            .filter(|t| !t.is_empty())
            .enumerate()
            .map(|(position, text)| Token {
                text: text.to_string(),
                position,
            })
            .collect();
        Self {
            cleaned,
            normalized,
            tokens,
        }
    }

    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
