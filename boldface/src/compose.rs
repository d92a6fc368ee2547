//! Reassembling highlighted words and separators into spans.

use crate::interface::HighlightSpan;

/// Accumulates display text into spans, merging neighbours that share the
/// same bold flag so the output alternates wherever it can.
#[derive(Debug, Default)]
pub(crate) struct Composer {
    spans: Vec<HighlightSpan>,
}

impl Composer {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            spans: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, text: &str, bold: bool) {
        if text.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.bold == bold => last.text.push_str(text),
            _ => self.spans.push(HighlightSpan {
                text: text.to_string(),
                bold,
            }),
        }
    }

    /// Push `text` with one bold flag per char.
    pub(crate) fn push_masked(&mut self, text: &str, mask: &[bool]) {
        debug_assert_eq!(text.chars().count(), mask.len());
        let mut run_start = 0;
        let mut run_bold: Option<bool> = None;
        for ((idx, _), &bold) in text.char_indices().zip(mask) {
            match run_bold {
                Some(prev) if prev != bold => {
                    self.push(&text[run_start..idx], prev);
                    run_start = idx;
                }
                _ => {}
            }
            run_bold = Some(bold);
        }
        if let Some(bold) = run_bold {
            self.push(&text[run_start..], bold);
        }
    }

    pub(crate) fn finish(self) -> Vec<HighlightSpan> {
        self.spans
    }
}

/// Heuristic for scripts that separate neither words nor case (Chinese,
/// Japanese): no whitespace at all, and lower-casing changes nothing that
/// upper-casing would not.
pub(crate) fn is_unspaced_script(text: &str) -> bool {
    !text.chars().any(char::is_whitespace) && text.to_lowercase() == text.to_uppercase()
}

/// Bold every character of `text` that occurs anywhere in `raw_query`.
pub(crate) fn highlight_characters(text: &str, raw_query: &str) -> Vec<HighlightSpan> {
    let mut composer = Composer::with_capacity(text.chars().count());
    let mut buf = [0u8; 4];
    for c in text.chars() {
        composer.push(c.encode_utf8(&mut buf), raw_query.contains(c));
    }
    composer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> HighlightSpan {
        HighlightSpan::plain(text)
    }

    fn bold(text: &str) -> HighlightSpan {
        HighlightSpan::emphasized(text)
    }

    #[test]
    fn test_push_coalesces_same_flag() {
        let mut composer = Composer::default();
        composer.push("Turn", false);
        composer.push(" ", false);
        composer.push("on", true);
        composer.push("", false);
        composer.push(" ", false);
        assert_eq!(composer.finish(), vec![plain("Turn "), bold("on"), plain(" ")]);
    }

    #[test]
    fn test_push_masked_splits_runs() {
        let mut composer = Composer::default();
        composer.push_masked("Wi-Fi", &[true, true, true, true, false]);
        assert_eq!(composer.finish(), vec![bold("Wi-F"), plain("i")]);
    }

    #[test]
    fn test_push_masked_multibyte() {
        let mut composer = Composer::default();
        composer.push_masked("brûlée", &[false, false, true, true, true, false]);
        assert_eq!(composer.finish(), vec![plain("br"), bold("ûlé"), plain("e")]);
    }

    #[test]
    fn test_unspaced_script_detection() {
        assert!(is_unspaced_script("一二三四"));
        assert!(is_unspaced_script("トラックパッド"));
        assert!(!is_unspaced_script("Wi-Fi"));
        assert!(!is_unspaced_script("一二 三四"));
        assert!(!is_unspaced_script("一二\u{3000}三四"));
    }

    #[test]
    fn test_highlight_characters() {
        let spans = highlight_characters("一二三四", "三一");
        assert_eq!(spans, vec![bold("一"), plain("二"), bold("三"), plain("四")]);
    }

    #[test]
    fn test_highlight_characters_adjacent_matches_merge() {
        let spans = highlight_characters("一二三四", "二三");
        assert_eq!(spans, vec![plain("一"), bold("二三"), plain("四")]);
    }
}
