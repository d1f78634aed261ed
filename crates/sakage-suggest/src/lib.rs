//! Craving-to-menu suggestion engine.
//!
//! Tokenizes free-text cravings, expands keywords through a fixed synonym
//! table, and scores every catalog item on verbatim and synonym hits. When a
//! budget is given it searches for an affordable combination of up to three
//! matching items.

pub mod engine;
pub mod error;
pub mod synonyms;
pub mod tokens;

pub use engine::{min_budget, suggest, Suggestion, MAX_SUGGESTIONS};
pub use error::SuggestError;
pub use tokens::tokenize;
