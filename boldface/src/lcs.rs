//! Longest common substrings between a query segment and result text.

use std::collections::BTreeSet;

/// All longest common substrings of `a` and `b`, as substrings of `a`.
///
/// Ties are all kept: a segment like `"to"` can match both "touchpad" and
/// "auto", and the caller decides what to do with each. Results are ordered by
/// their start position in `a` and contain no duplicate values.
///
/// Runs the classic suffix-length dynamic program backwards over both
/// strings, keeping only two rows of the table.
pub fn longest_common_substrings(a: &str, b: &str) -> Vec<String> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    // `next[j]` is the common run length of a[i + 1..] and b[j..]
    let mut next = vec![0usize; b.len() + 1];
    let mut row = vec![0usize; b.len() + 1];
    let mut best = 0usize;
    let mut starts: BTreeSet<usize> = BTreeSet::new();

    for i in (0..a.len()).rev() {
        for j in (0..b.len()).rev() {
            let run = if a[i] == b[j] { next[j + 1] + 1 } else { 0 };
            row[j] = run;
            if run == 0 || run < best {
                continue;
            }
            if run > best {
                best = run;
                starts.clear();
            }
            starts.insert(i);
        }
        std::mem::swap(&mut row, &mut next);
    }

    let mut found: Vec<String> = Vec::with_capacity(starts.len());
    for start in starts {
        let s: String = a[start..start + best].iter().collect();
        if !found.contains(&s) {
            found.push(s);
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_longest() {
        assert_eq!(longest_common_substrings("wif", "turn on wifi"), vec!["wif"]);
        assert_eq!(longest_common_substrings("clicking", "taptoclick"), vec!["click"]);
    }

    #[test]
    fn test_ties_are_all_kept() {
        // "ab" and "cd" both have length 2
        assert_eq!(longest_common_substrings("abxcd", "cd ab"), vec!["ab", "cd"]);
    }

    #[test]
    fn test_ties_ordered_by_start_in_first_string() {
        assert_eq!(longest_common_substrings("cdxab", "ab cd"), vec!["cd", "ab"]);
    }

    #[test]
    fn test_repeated_value_reported_once() {
        assert_eq!(longest_common_substrings("toto", "auto"), vec!["to"]);
    }

    #[test]
    fn test_segment_matching_two_words() {
        assert_eq!(longest_common_substrings("to", "touchpad auto"), vec!["to"]);
    }

    #[test]
    fn test_single_char_overlap() {
        assert_eq!(longest_common_substrings("hi", "search and assistant"), vec!["h", "i"]);
    }

    #[test]
    fn test_no_overlap() {
        assert!(longest_common_substrings("xyz", "abc").is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(longest_common_substrings("", "abc").is_empty());
        assert!(longest_common_substrings("abc", "").is_empty());
        assert!(longest_common_substrings("", "").is_empty());
    }

    #[test]
    fn test_multibyte_chars() {
        assert_eq!(longest_common_substrings("三一", "一二三四"), vec!["三", "一"]);
        assert_eq!(longest_common_substrings("二三", "一二三四"), vec!["二三"]);
    }

    #[test]
    fn test_whole_string_match() {
        assert_eq!(longest_common_substrings("brulee", "brulee"), vec!["brulee"]);
    }
}
