//! Query token generation.
//!
//! Each whitespace-delimited query segment is matched against the whole
//! normalized result text (not word by word), so a segment can point at the
//! right word even when several result words share material with it.

use crate::lcs::longest_common_substrings;

/// Derive the query tokens worth highlighting.
///
/// Both inputs must already be comparison strings (see [`crate::normalize()`]).
/// For every segment only its longest common substrings survive, and a
/// segment longer than one character whose best match is a single character
/// contributes nothing: a lone shared letter is noise, not a match. Tokens keep
/// segment order and duplicates collapse onto their first occurrence.
pub fn query_tokens(normalized_query: &str, normalized_result: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();

    for segment in normalized_query.split_whitespace() {
        let candidates = longest_common_substrings(segment, normalized_result);
        let Some(max_len) = candidates.iter().map(|c| c.chars().count()).max() else {
            continue;
        };

        if max_len == 1 && segment.chars().count() > 1 {
            tracing::trace!(target: "boldface.tokens", segment, "single-char overlap dropped");
            continue;
        }

        for candidate in candidates {
            if candidate.chars().count() == max_len && !tokens.contains(&candidate) {
                tokens.push(candidate);
            }
        }
    }

    tracing::trace!(target: "boldface.tokens", ?tokens, "query tokens");
    tokens
}
