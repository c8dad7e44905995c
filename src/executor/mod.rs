//! Executor module: condition evaluation, row sorting, and the filter
//! orchestrator that composes them over a rowset.

pub mod evaluate;
pub mod grid;
pub mod sort;

pub use evaluate::{compare_values, evaluate, get_field_value, is_empty_value, value_text};
pub use grid::{run_filter, RowGrid};
pub use sort::{compare_sort_values, sort_rows};

/// What to do when evaluating the condition against one row fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowErrorPolicy {
    /// Treat the row as non-matching, log the failure, and continue.
    ExcludeRow,
    /// Abort the whole filter call with the row's error.
    Abort,
}

/// Configuration for a filter invocation.
#[derive(Debug, Clone)]
pub struct FilterOptions {
    pub row_error_policy: RowErrorPolicy,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            row_error_policy: RowErrorPolicy::ExcludeRow,
        }
    }
}

impl FilterOptions {
    /// Options that abort on the first row evaluation failure.
    pub fn strict() -> Self {
        Self {
            row_error_policy: RowErrorPolicy::Abort,
        }
    }
}
