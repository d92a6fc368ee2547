//! The shared demo corpus highlights exactly the expected texts per locale.

use boldface::render::{bold_ranges, render_plain};
use boldface::{highlight, highlight_all};
use demo_data::{rows_for_locale, DEMO_ROWS};

#[test]
fn test_corpus_bold_texts() {
    assert!(!DEMO_ROWS.is_empty(), "demo corpus failed to load");
    for row in DEMO_ROWS.iter() {
        let spans = highlight(&row.query, &row.text);
        let bold: Vec<String> = spans.iter().filter(|s| s.bold).map(|s| s.text.clone()).collect();
        assert_eq!(bold, row.bold, "[{}] {:?} in {:?}", row.locale, row.query, row.text);
        assert_eq!(render_plain(&spans), row.text);
    }
}

#[test]
fn test_corpus_ranges_point_at_bold_text() {
    for row in DEMO_ROWS.iter() {
        let spans = highlight(&row.query, &row.text);
        let chars: Vec<char> = row.text.chars().collect();
        let from_ranges: Vec<String> = bold_ranges(&spans)
            .iter()
            .map(|r| chars[r.start as usize..r.end as usize].iter().collect())
            .collect();
        assert_eq!(from_ranges, row.bold, "{:?}", row.text);
    }
}

#[test]
fn test_locale_batches() {
    for locale in ["en", "fr", "ja", "zh"] {
        let rows: Vec<_> = rows_for_locale(locale).collect();
        assert!(!rows.is_empty(), "no rows for {locale}");
        for row in &rows {
            let texts: Vec<&str> = rows.iter().map(|r| r.text.as_str()).collect();
            let batch = highlight_all(&row.query, &texts);
            for (text, spans) in texts.iter().zip(&batch) {
                assert_eq!(render_plain(spans), *text);
            }
        }
    }
}
