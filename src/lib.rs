//! Rowql - client-side WHERE / ORDER BY engine for in-memory rowsets.
//!
//! This crate parses SQL-like WHERE and ORDER BY clauses and applies them to
//! a rowset that has already been fetched from a data source, with no
//! database round trip. It is the filtering core of a result-grid display:
//! the surrounding layer supplies rows as JSON objects and swaps in whatever
//! this crate returns.
//!
//! # Main Components
//!
//! - **Splitter**: quote-aware splitting of a clause on AND / OR keywords
//! - **Parser**: recursive-descent parser building a [`Condition`] tree
//! - **Executor**: evaluates conditions per row, sorts by multi-key rules,
//!   and orchestrates both over a rowset
//!
//! # Example
//!
//! ```rust
//! use rowql::{run_filter, FilterOptions};
//! use serde_json::json;
//!
//! let rows = vec![
//!     json!({"name": "Alice", "age": 30}),
//!     json!({"name": "Bob", "age": 17}),
//!     json!({"name": "Carol", "age": 25}),
//! ];
//!
//! let visible = run_filter(
//!     &rows,
//!     Some("age >= 18"),
//!     Some("age DESC"),
//!     &FilterOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(visible[0]["name"], json!("Alice"));
//! assert_eq!(visible[1]["name"], json!("Carol"));
//! ```

pub mod ast;
pub mod error;
pub mod executor;
pub mod lexer;
pub mod parser;
pub mod splitter;

// Re-export main types for convenience
pub use ast::{ComparisonOp, Condition, SortDirection, SortRule};
pub use error::{RowqlError, RowqlResult};
pub use executor::{
    compare_values, evaluate, run_filter, sort_rows, FilterOptions, RowErrorPolicy, RowGrid,
};
pub use lexer::{Lexer, Token};
pub use parser::{parse_condition, parse_sort_rules};
pub use splitter::split_by_operator;
