//! Fusing query tokens across hyphens in the result text.
//!
//! The query "tap to clic" yields three tokens, but the result text spells
//! them as one compound, "tap-to-click". Adjacent tokens whose hyphen-joined
//! form appears in the result are merged so the compound is highlighted as a
//! single run.

use crate::normalize::CANONICAL_HYPHEN;

/// Greedily merge adjacent tokens whose hyphen-joined form occurs in
/// `hyphenated_result`.
///
/// `hyphenated_result` must be accent-stripped, lower-cased, and
/// hyphen-canonicalized (every hyphen glyph replaced by [`CANONICAL_HYPHEN`]).
/// Every token ends up in exactly one merged token, so the output is never
/// longer than the input.
pub fn merge_compound_tokens(tokens: &[String], hyphenated_result: &str) -> Vec<String> {
    let mut merged = Vec::with_capacity(tokens.len());
    let mut rest = tokens.iter();
    let Some(first) = rest.next() else {
        return merged;
    };

    let mut prefix = first.clone();
    for token in rest {
        let extended = format!("{prefix}{CANONICAL_HYPHEN}{token}");
        if hyphenated_result.contains(&extended) {
            prefix = extended;
        } else {
            merged.push(std::mem::replace(&mut prefix, token.clone()));
        }
    }
    merged.push(prefix);

    tracing::trace!(target: "boldface.merge", ?merged, "merged tokens");
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_merges_full_chain() {
        let merged =
            merge_compound_tokens(&tokens(&["tap", "to", "clic"]), "touchpad tap-to-click");
        assert_eq!(merged, vec!["tap-to-clic"]);
    }

    #[test]
    fn test_chain_breaks_and_restarts() {
        let merged = merge_compound_tokens(&tokens(&["wif", "on"]), "turn on wi-fi");
        assert_eq!(merged, vec!["wif", "on"]);

        let merged = merge_compound_tokens(&tokens(&["turn", "wi", "fi"]), "turn on wi-fi");
        assert_eq!(merged, vec!["turn", "wi-fi"]);
    }

    #[test]
    fn test_partial_chain() {
        let merged = merge_compound_tokens(&tokens(&["tap", "to", "zoom"]), "tap-to-click");
        assert_eq!(merged, vec!["tap-to", "zoom"]);
    }

    #[test]
    fn test_no_merge_across_space() {
        let merged = merge_compound_tokens(&tokens(&["turn", "on"]), "turn on wi-fi");
        assert_eq!(merged, vec!["turn", "on"]);
    }

    #[test]
    fn test_never_longer_than_input() {
        let input = tokens(&["a", "b", "c", "d"]);
        let merged = merge_compound_tokens(&input, "a-b c-d");
        assert_eq!(merged, vec!["a-b", "c-d"]);
        assert!(merged.len() <= input.len());
    }

    #[test]
    fn test_empty_and_single() {
        assert!(merge_compound_tokens(&[], "anything").is_empty());
        assert_eq!(merge_compound_tokens(&tokens(&["solo"]), ""), vec!["solo"]);
    }
}
