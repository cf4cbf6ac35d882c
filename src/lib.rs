//! Wordle Index
//!
//! A positional inverted index over five-letter words with distinct letters.
//! Queries combine letters that must appear (anywhere, or in a given slot)
//! with letters that must not, and are answered by posting-list set algebra
//! instead of scanning the word list.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_index::index::PositionalIndex;
//! use wordle_index::query::{Query, QueryEngine, parse_constraints};
//! use wordle_index::ranking::rank;
//!
//! let index = PositionalIndex::build(["table", "tiles", "panic", "manic"]);
//! let query = Query::from_parts(
//!     parse_constraints("a1 n2").unwrap(),
//!     parse_constraints("p").unwrap(),
//! );
//!
//! let matches = QueryEngine::new(&index).execute(&query);
//! let ranked = rank(&matches);
//! assert_eq!(ranked[0].word.text(), "manic");
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Positional index and posting-list algebra
pub mod index;

// Constraints, queries and evaluation
pub mod query;

// Result ordering and letter statistics
pub mod ranking;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
