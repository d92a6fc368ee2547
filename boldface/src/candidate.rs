//! Result text with memoized derived state.
//!
//! Module isolation ensures no code outside this module can mutate `text`
//! after construction, so the `OnceLock` caches can never go stale.

use crate::compose::is_unspaced_script;
use crate::highlight::{highlight_result, split_pieces, Piece, PreparedQuery};
use crate::interface::HighlightSpan;
use crate::normalize::{canonicalize_hyphens, normalize, remove_accents};
use std::sync::OnceLock;

/// A result row whose derived forms are computed on first access and cached.
///
/// A search UI re-highlights the same rows on every keystroke; only the query
/// changes, so the comparison string, the hyphen-canonicalized string, and the
/// folded words can be kept for the lifetime of the row.
#[derive(Debug, Clone)]
pub struct ResultText {
    text: String,
    normalized: OnceLock<String>,
    hyphenated: OnceLock<String>,
    pieces: OnceLock<Vec<Piece>>,
    unspaced: OnceLock<bool>,
}

impl ResultText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            normalized: OnceLock::new(),
            hyphenated: OnceLock::new(),
            pieces: OnceLock::new(),
            unspaced: OnceLock::new(),
        }
    }

    /// The display string
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Comparison string (see [`crate::normalize()`])
    pub fn normalized(&self) -> &str {
        self.normalized.get_or_init(|| normalize(&self.text))
    }

    /// Accent-stripped, lower-cased, every hyphen glyph replaced by `-`
    pub fn hyphenated(&self) -> &str {
        self.hyphenated
            .get_or_init(|| canonicalize_hyphens(&remove_accents(&self.text)))
    }

    /// Whether the text is highlighted character by character instead of word
    /// by word (no whitespace, no case distinction).
    pub fn is_unspaced_script(&self) -> bool {
        *self.unspaced.get_or_init(|| is_unspaced_script(&self.text))
    }

    pub(crate) fn pieces(&self) -> &[Piece] {
        self.pieces.get_or_init(|| split_pieces(&self.text))
    }

    pub fn highlight(&self, query: &str) -> Vec<HighlightSpan> {
        highlight_result(self, &PreparedQuery::new(query))
    }
}

impl From<String> for ResultText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for ResultText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
