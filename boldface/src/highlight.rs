//! Highlighting engine (query tokens → merged tokens → per-word bold ranges)
//!
//! The query and result text are compared in folded form (see
//! [`crate::normalize`]). Query segments become tokens through a
//! longest-common-substring search against the whole result text, adjacent
//! tokens fuse across result-text hyphens, and each display word is then
//! matched either whole (the query already contains it) or through a pattern
//! that lets hyphen glyphs reappear between token characters. Bold ranges are
//! always derived from the display word's own characters, so original casing,
//! accents, and hyphen glyphs come back untouched.
//!
//! Scripts without spaces or case (Chinese, Japanese) skip all of this and
//! bold individual characters found in the query.

use crate::candidate::ResultText;
use crate::compose::{highlight_characters, Composer};
use crate::interface::HighlightSpan;
use crate::merge::merge_compound_tokens;
use crate::normalize::{fold_char, is_hyphen, normalize, Fold, HYPHENS};
use crate::tokens::query_tokens;
use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;
use std::ops::Range;
use thiserror::Error;

/// Zero or more hyphen-set glyphs, spliced between token characters.
static HYPHEN_GAP: Lazy<String> = Lazy::new(|| {
    let class: String = HYPHENS
        .iter()
        .map(|h| format!("\\x{{{:X}}}", *h as u32))
        .collect();
    format!("[{class}]*")
});

/// Error type for token pattern compilation
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("cannot compile pattern for token {token:?}: {source}")]
    Regex {
        token: String,
        #[source]
        source: regex::Error,
    },
}

pub type PatternResult<T> = Result<T, PatternError>;

/// The query, normalized once and shared by every row it is matched against.
#[derive(Debug, Clone)]
pub(crate) struct PreparedQuery<'q> {
    raw: &'q str,
    normalized: String,
}

impl<'q> PreparedQuery<'q> {
    pub(crate) fn new(raw: &'q str) -> Self {
        Self {
            raw,
            normalized: normalize(raw),
        }
    }

    pub(crate) fn raw(&self) -> &str {
        self.raw
    }

    pub(crate) fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Nothing left to match once hyphens and whitespace are gone.
    fn is_blank(&self) -> bool {
        self.normalized.trim().is_empty()
    }
}

/// One piece of display text: a word or the whitespace between words.
#[derive(Debug, Clone)]
pub(crate) enum Piece {
    Word(Word),
    Gap(String),
}

/// A display word with its accent-stripped fold and the mapping from folded
/// chars back to display chars.
#[derive(Debug, Clone)]
pub(crate) struct Word {
    text: String,
    /// Lower-cased, accents removed, hyphen glyphs kept.
    folded: String,
    /// Display char index for each char of `folded`.
    origin: Vec<usize>,
    /// Folded char count for each display char; 0 for combining marks.
    widths: Vec<usize>,
}

impl Word {
    pub(crate) fn new(text: &str) -> Self {
        let mut folded = String::with_capacity(text.len());
        let mut origin = Vec::with_capacity(text.len());
        let mut widths = Vec::with_capacity(text.len());
        for (i, c) in text.chars().enumerate() {
            let n = fold_char(c, Fold::KeepHyphens, &mut folded);
            origin.extend(std::iter::repeat(i).take(n));
            widths.push(n);
        }
        Self {
            text: text.to_string(),
            folded,
            origin,
            widths,
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn folded(&self) -> &str {
        &self.folded
    }

    /// Display char count
    fn len(&self) -> usize {
        self.widths.len()
    }

    /// Display chars covered by folded chars `start..end`. Marks that fold to
    /// nothing right after the range belong to its last glyph and are included.
    fn display_range(&self, start: usize, end: usize) -> Range<usize> {
        let first = self.origin[start];
        let mut last = self.origin[end - 1] + 1;
        while last < self.len() && self.widths[last] == 0 {
            last += 1;
        }
        first..last
    }
}

/// Split display text into alternating words and whitespace gaps.
/// Gaps are kept verbatim (they may be non-breaking or ideographic spaces).
pub(crate) fn split_pieces(text: &str) -> Vec<Piece> {
    fn piece(s: &str, is_gap: bool) -> Piece {
        if is_gap {
            Piece::Gap(s.to_string())
        } else {
            Piece::Word(Word::new(s))
        }
    }

    let mut pieces = Vec::new();
    let mut start = 0;
    let mut in_gap: Option<bool> = None;
    for (idx, c) in text.char_indices() {
        let is_gap = c.is_whitespace();
        if let Some(prev) = in_gap {
            if prev != is_gap {
                pieces.push(piece(&text[start..idx], prev));
                start = idx;
            }
        }
        in_gap = Some(is_gap);
    }
    if let Some(prev) = in_gap {
        pieces.push(piece(&text[start..], prev));
    }
    pieces
}

/// A merged token compiled into a hyphen-tolerant pattern.
#[derive(Debug)]
pub(crate) struct TokenPattern {
    /// Token chars with hyphens removed, for the cheap subsequence pre-check.
    chars: Vec<char>,
    regex: Regex,
}

impl TokenPattern {
    /// Build `c1[H]*c2[H]*…cn`, where `[H]` is the hyphen set. Every token
    /// char is escaped; query text may contain regex metacharacters.
    /// Returns `None` for a token with nothing but hyphens.
    pub(crate) fn compile(token: &str) -> PatternResult<Option<Self>> {
        let chars: Vec<char> = token.chars().filter(|c| !is_hyphen(*c)).collect();
        if chars.is_empty() {
            return Ok(None);
        }

        let mut pattern = String::with_capacity(chars.len() * (HYPHEN_GAP.len() + 4));
        let mut buf = [0u8; 4];
        for (i, c) in chars.iter().enumerate() {
            if i > 0 {
                pattern.push_str(&HYPHEN_GAP);
            }
            pattern.push_str(&regex::escape(c.encode_utf8(&mut buf)));
        }

        let regex = Regex::new(&pattern).map_err(|source| PatternError::Regex {
            token: token.to_string(),
            source,
        })?;
        Ok(Some(Self { chars, regex }))
    }

    /// Whether the token chars appear in order in `folded`.
    fn is_subsequence_of(&self, folded: &[char]) -> bool {
        let mut wanted = self.chars.iter().peekable();
        for c in folded {
            if wanted.peek() == Some(&c) {
                wanted.next();
            }
        }
        wanted.peek().is_none()
    }
}

/// Compile merged tokens, skipping (and logging) any that fail.
pub(crate) fn compile_patterns(merged: &[String]) -> Vec<TokenPattern> {
    let mut patterns = Vec::with_capacity(merged.len());
    for token in merged {
        match TokenPattern::compile(token) {
            Ok(Some(pattern)) => patterns.push(pattern),
            Ok(None) => {}
            Err(error) => {
                tracing::warn!(target: "boldface.highlight", %error, "token skipped");
            }
        }
    }
    patterns
}

/// Per display char of `word`: should it be bold?
///
/// A word the normalized query fully contains is bolded whole. Otherwise every
/// pattern occurrence in the folded word is collected and only the longest
/// ones are bolded.
pub(crate) fn match_word(
    word: &Word,
    normalized_query: &str,
    patterns: &[TokenPattern],
) -> Vec<bool> {
    let mut mask = vec![false; word.len()];
    let folded = word.folded();
    if folded.is_empty() {
        return mask;
    }
    if normalized_query.contains(folded) {
        mask.fill(true);
        return mask;
    }

    let folded_chars: Vec<char> = folded.chars().collect();
    let mut occurrences: Vec<Range<usize>> = Vec::new();
    for pattern in patterns {
        if !pattern.is_subsequence_of(&folded_chars) {
            continue;
        }
        for m in pattern.regex.find_iter(folded) {
            let start = folded[..m.start()].chars().count();
            let end = start + m.as_str().chars().count();
            if end > start {
                occurrences.push(word.display_range(start, end));
            }
        }
    }

    let Some(longest) = occurrences.iter().map(|r| r.len()).max() else {
        return mask;
    };
    for range in occurrences.into_iter().filter(|r| r.len() == longest) {
        mask[range].fill(true);
    }
    mask
}

/// Run the whole pipeline for one result row.
pub(crate) fn highlight_result(
    result: &ResultText,
    query: &PreparedQuery<'_>,
) -> Vec<HighlightSpan> {
    let text = result.text();
    if text.is_empty() {
        return Vec::new();
    }
    // Rows of hyphen glyphs and whitespace have nothing to compare against.
    if query.is_blank() || result.normalized().trim().is_empty() {
        return vec![HighlightSpan::plain(text)];
    }
    if result.is_unspaced_script() {
        return highlight_characters(text, query.raw());
    }

    #[cfg(feature = "perf-log")]
    let t0 = std::time::Instant::now();

    let tokens = query_tokens(query.normalized(), result.normalized());
    let merged = merge_compound_tokens(&tokens, result.hyphenated());
    let patterns = compile_patterns(&merged);

    #[cfg(feature = "perf-log")]
    let t1 = std::time::Instant::now();

    let pieces = result.pieces();
    let mut composer = Composer::with_capacity(pieces.len());
    for piece in pieces {
        match piece {
            Piece::Gap(gap) => composer.push(gap, false),
            Piece::Word(word) => {
                let mask = match_word(word, query.normalized(), &patterns);
                composer.push_masked(word.text(), &mask);
            }
        }
    }
    let spans = composer.finish();

    #[cfg(feature = "perf-log")]
    {
        let t2 = std::time::Instant::now();
        tracing::debug!(
            target: "boldface.perf",
            tokens_ms = (t1 - t0).as_secs_f64() * 1000.0,
            words_ms = (t2 - t1).as_secs_f64() * 1000.0,
            tokens = tokens.len(),
            merged = merged.len(),
            spans = spans.len(),
            "highlight"
        );
    }

    spans
}

/// Highlight `result_text` for `query`.
///
/// Total over all inputs: an empty result gives no spans, a blank query gives
/// the whole text unbolded, and the returned spans always concatenate back to
/// `result_text`.
pub fn highlight(query: &str, result_text: &str) -> Vec<HighlightSpan> {
    ResultText::new(result_text).highlight(query)
}

/// Highlight many rows for one query in parallel. Output order follows input.
pub fn highlight_all<S: AsRef<str> + Sync>(
    query: &str,
    result_texts: &[S],
) -> Vec<Vec<HighlightSpan>> {
    let query = PreparedQuery::new(query);
    result_texts
        .par_iter()
        .map(|text| highlight_result(&ResultText::new(text.as_ref()), &query))
        .collect()
}

/// Like [`highlight_all`] for rows that keep their derived forms between
/// keystrokes.
pub fn highlight_cached(query: &str, results: &[ResultText]) -> Vec<Vec<HighlightSpan>> {
    let query = PreparedQuery::new(query);
    results
        .par_iter()
        .map(|result| highlight_result(result, &query))
        .collect()
}
