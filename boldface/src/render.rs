//! Span utilities: offset ranges and text renderings of a highlight result.

use crate::interface::{BoldRange, HighlightSpan};

const ANSI_BOLD: &str = "\u{1b}[1m";
const ANSI_NORMAL: &str = "\u{1b}[22m";

/// Character-offset ranges of the bold spans, in display order.
pub fn bold_ranges(spans: &[HighlightSpan]) -> Vec<BoldRange> {
    let mut ranges = Vec::new();
    let mut offset = 0u64;
    for span in spans {
        let len = span.text.chars().count() as u64;
        if span.bold && len > 0 {
            match ranges.last_mut() {
                Some(BoldRange { end, .. }) if *end == offset => *end = offset + len,
                _ => ranges.push(BoldRange {
                    start: offset,
                    end: offset + len,
                }),
            }
        }
        offset += len;
    }
    ranges
}

/// The display string the spans were cut from.
pub fn render_plain(spans: &[HighlightSpan]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

/// Bold spans wrapped in ANSI bold / normal-intensity escapes.
pub fn render_ansi(spans: &[HighlightSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        if span.bold {
            out.push_str(ANSI_BOLD);
            out.push_str(&span.text);
            out.push_str(ANSI_NORMAL);
        } else {
            out.push_str(&span.text);
        }
    }
    out
}
