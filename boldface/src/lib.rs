//! Boldface - query-to-text highlight matching for search result rows
//!
//! Decides which parts of a result string to bold for a search query:
//! accent- and case-insensitive, tolerant of the many Unicode hyphen glyphs,
//! able to follow a query across hyphenated compounds ("tap to clic" in
//! "tap-to-click"), and character-based for scripts without word spacing.
//!
//! Types are exported via UniFFI proc-macros (#[derive(uniffi::Record)]).

mod candidate;
mod compose;
pub mod highlight;
pub mod interface;
pub mod lcs;
pub mod merge;
pub mod normalize;
pub mod render;
pub mod tokens;

pub use candidate::ResultText;
pub use highlight::{highlight, highlight_all, highlight_cached, PatternError, PatternResult};
pub use interface::*;
pub use normalize::{canonicalize_hyphens, is_hyphen, normalize, remove_accents};

uniffi::setup_scaffolding!("boldface");
