//! Multilingual search-result fixtures shared by benches and integration tests.
//!
//! Each row pairs a query with a result string and the texts that should come
//! out bold, in display order (`|`-separated in the CSV, empty for none).

use once_cell::sync::Lazy;

const CORPUS_CSV: &str = include_str!("../corpus.csv");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoRow {
    pub locale: String,
    pub query: String,
    pub text: String,
    pub bold: Vec<String>,
}

/// All corpus rows, parsed on first access.
pub static DEMO_ROWS: Lazy<Vec<DemoRow>> = Lazy::new(|| {
    load_rows().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load demo corpus CSV: {}", e);
        Vec::new()
    })
});

/// Rows for one locale ("en", "fr", "ja", "zh").
pub fn rows_for_locale(locale: &str) -> impl Iterator<Item = &'static DemoRow> + '_ {
    DEMO_ROWS.iter().filter(move |row| row.locale == locale)
}

fn load_rows() -> Result<Vec<DemoRow>, Box<dyn std::error::Error>> {
    let mut reader = csv::Reader::from_reader(CORPUS_CSV.as_bytes());
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let field = |idx: usize, name: &str| -> Result<String, String> {
            record
                .get(idx)
                .map(str::to_string)
                .ok_or_else(|| format!("Missing {} column", name))
        };
        let bold = field(3, "bold")?;
        rows.push(DemoRow {
            locale: field(0, "locale")?,
            query: field(1, "query")?,
            text: field(2, "text")?,
            bold: if bold.is_empty() {
                Vec::new()
            } else {
                bold.split('|').map(str::to_string).collect()
            },
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_loads() {
        assert!(DEMO_ROWS.len() >= 10);
        assert!(DEMO_ROWS.iter().all(|row| !row.text.is_empty()));
    }

    #[test]
    fn test_rows_for_locale() {
        assert!(rows_for_locale("fr").count() >= 3);
        assert!(rows_for_locale("xx").next().is_none());
    }

    #[test]
    fn test_empty_bold_column() {
        let row = DEMO_ROWS.iter().find(|row| row.query == "hi").unwrap();
        assert!(row.bold.is_empty());
    }
}
