//! Comparison forms of display text.
//!
//! Matching never runs on the display string itself. Both the query and the
//! result text are folded first: lower-cased, canonically decomposed, and
//! stripped of combining accents (and, for the plain comparison form, of every
//! hyphen-like glyph).
//!
//! Folding works one scalar value at a time, so the fold of a word is exactly
//! the concatenation of the folds of its characters. The highlighter relies on
//! this to map a match in folded text back onto display characters.

use unicode_normalization::char::decompose_canonical;

/// Glyphs that render as a hyphen or dash and are treated as interchangeable
/// (or as no separator at all, in comparison strings).
pub const HYPHENS: [char; 23] = [
    '\u{002D}', // HYPHEN-MINUS
    '\u{007E}', // TILDE
    '\u{058A}', // ARMENIAN HYPHEN
    '\u{05BE}', // HEBREW PUNCTUATION MAQAF
    '\u{1806}', // MONGOLIAN TODO SOFT HYPHEN
    '\u{2010}', // HYPHEN
    '\u{2011}', // NON-BREAKING HYPHEN
    '\u{2012}', // FIGURE DASH
    '\u{2013}', // EN DASH
    '\u{2014}', // EM DASH
    '\u{2015}', // HORIZONTAL BAR
    '\u{2053}', // SWUNG DASH
    '\u{207B}', // SUPERSCRIPT MINUS
    '\u{208B}', // SUBSCRIPT MINUS
    '\u{2212}', // MINUS SIGN
    '\u{2E3A}', // TWO-EM DASH
    '\u{2E3B}', // THREE-EM DASH
    '\u{301C}', // WAVE DASH
    '\u{3030}', // WAVY DASH
    '\u{30A0}', // KATAKANA-HIRAGANA DOUBLE HYPHEN
    '\u{FE58}', // SMALL EM DASH
    '\u{FE63}', // SMALL HYPHEN-MINUS
    '\u{FF0D}', // FULLWIDTH HYPHEN-MINUS
];

/// Hyphen every glyph in [`HYPHENS`] collapses to in hyphen-canonicalized text.
pub const CANONICAL_HYPHEN: char = '-';

/// Which glyphs survive folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fold {
    /// Comparison string: accents and hyphens removed.
    Comparison,
    /// Accents removed, hyphen glyphs kept verbatim.
    KeepHyphens,
}

pub fn is_hyphen(c: char) -> bool {
    HYPHENS.contains(&c)
}

/// Combining diacritical marks (U+0300..=U+036F), as left behind by NFD.
fn is_accent(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Append the fold of `c` to `out`, returning how many chars were appended.
/// A lone combining mark folds to nothing.
pub(crate) fn fold_char(c: char, fold: Fold, out: &mut String) -> usize {
    let mut pushed = 0;
    for lower in c.to_lowercase() {
        decompose_canonical(lower, |d| {
            if is_accent(d) || (fold == Fold::Comparison && is_hyphen(d)) {
                return;
            }
            out.push(d);
            pushed += 1;
        });
    }
    pushed
}

fn fold_str(s: &str, fold: Fold) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        fold_char(c, fold, &mut out);
    }
    out
}

/// Comparison string: lower-cased, accents stripped, hyphens stripped.
pub fn normalize(s: &str) -> String {
    fold_str(s, Fold::Comparison)
}

/// Like [`normalize`] but hyphen glyphs are preserved, so the result can
/// still be matched against text that spells out its hyphens.
pub fn remove_accents(s: &str) -> String {
    fold_str(s, Fold::KeepHyphens)
}

/// Replace every hyphen-set glyph with [`CANONICAL_HYPHEN`].
pub fn canonicalize_hyphens(s: &str) -> String {
    s.chars()
        .map(|c| if is_hyphen(c) { CANONICAL_HYPHEN } else { c })
        .collect()
}
