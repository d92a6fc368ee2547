//! Boldface FFI Interface Definition
//!
//! This file defines the public interface exposed to host UIs via UniFFI.
//! It acts as the source of truth for shared types.

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDS (Structs)
// ═══════════════════════════════════════════════════════════════════════════════

/// A run of display text and whether it should be rendered bold.
///
/// A highlight result is a sequence of spans whose texts, concatenated in
/// order, reproduce the display string exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Record)]
pub struct HighlightSpan {
    pub text: String,
    pub bold: bool,
}

impl HighlightSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// A bold range (start, end) in character offsets of the display string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct BoldRange {
    pub start: u64,
    pub end: u64,
}

// ═══════════════════════════════════════════════════════════════════════════════
// EXPORTED FUNCTIONS
// ═══════════════════════════════════════════════════════════════════════════════

/// Highlight one result row. Empty query returns the row unbolded.
#[uniffi::export]
pub fn highlight_text(query: String, result_text: String) -> Vec<HighlightSpan> {
    crate::highlight(&query, &result_text)
}

/// Highlight every row for the same query, preserving row order.
#[uniffi::export]
pub fn highlight_texts(query: String, result_texts: Vec<String>) -> Vec<Vec<HighlightSpan>> {
    crate::highlight_all(&query, &result_texts)
}

/// Bold ranges for one row, for hosts that style attributed strings by offset.
#[uniffi::export]
pub fn bold_ranges_for(query: String, result_text: String) -> Vec<BoldRange> {
    crate::render::bold_ranges(&crate::highlight(&query, &result_text))
}
