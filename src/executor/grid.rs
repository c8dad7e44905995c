//! Filter orchestration: apply WHERE and ORDER BY clauses to a rowset.

use serde_json::Value;

use crate::error::RowqlResult;
use crate::executor::evaluate::evaluate;
use crate::executor::sort::sort_rows;
use crate::executor::{FilterOptions, RowErrorPolicy};
use crate::parser::{parse_condition, parse_sort_rules};

/// Filter and sort a rowset.
///
/// The input is never mutated; the result is built from a fresh copy. An
/// empty or absent clause is a no-op for its stage, so with neither clause
/// the result equals the input, same content and order. A parse error aborts
/// the whole call before any row is touched.
///
/// Rows that fail to evaluate are handled per [`FilterOptions`]: excluded
/// and logged by default, or surfaced as the call's error.
pub fn run_filter(
    rows: &[Value],
    where_clause: Option<&str>,
    order_by: Option<&str>,
    options: &FilterOptions,
) -> RowqlResult<Vec<Value>> {
    let mut result: Vec<Value> = rows.to_vec();

    if let Some(clause) = non_empty(where_clause) {
        let condition = parse_condition(clause)?;
        tracing::debug!("Applying filter condition to {} rows: {}", result.len(), clause);

        let mut kept = Vec::with_capacity(result.len());
        for (index, row) in result.into_iter().enumerate() {
            match evaluate(&condition, &row) {
                Ok(true) => kept.push(row),
                Ok(false) => {}
                Err(err) => match options.row_error_policy {
                    RowErrorPolicy::ExcludeRow => {
                        tracing::warn!("Row {} excluded from filter results: {}", index, err);
                    }
                    RowErrorPolicy::Abort => return Err(err),
                },
            }
        }
        result = kept;
    }

    if let Some(clause) = non_empty(order_by) {
        let rules = parse_sort_rules(clause)?;
        tracing::debug!("Applying {} sort rules: {}", rules.len(), clause);
        sort_rows(&mut result, &rules);
    }

    Ok(result)
}

fn non_empty(clause: Option<&str>) -> Option<&str> {
    clause.map(str::trim).filter(|c| !c.is_empty())
}

/// A rowset snapshot plus the rows currently shown by the display layer.
///
/// The display layer hands over the full rowset and the column names once;
/// each `apply_filter` call then recomputes the visible rows from the full
/// snapshot. On error the visible rows are left exactly as they were.
/// Column names are carried for the display layer only and are not used to
/// validate field references.
#[derive(Debug, Clone)]
pub struct RowGrid {
    columns: Vec<String>,
    rows: Vec<Value>,
    visible: Vec<Value>,
    options: FilterOptions,
}

impl RowGrid {
    pub fn new(columns: Vec<String>, rows: Vec<Value>) -> Self {
        Self::with_options(columns, rows, FilterOptions::default())
    }

    pub fn with_options(columns: Vec<String>, rows: Vec<Value>, options: FilterOptions) -> Self {
        let visible = rows.clone();
        Self {
            columns,
            rows,
            visible,
            options,
        }
    }

    /// Recompute the visible rows from the full snapshot. The previous
    /// filter and sort state is discarded first, so clauses never stack
    /// across calls. Replacement is atomic: on any error the currently
    /// visible rows stay untouched.
    pub fn apply_filter(
        &mut self,
        where_clause: Option<&str>,
        order_by: Option<&str>,
    ) -> RowqlResult<&[Value]> {
        let filtered = run_filter(&self.rows, where_clause, order_by, &self.options)?;
        self.visible = filtered;
        Ok(&self.visible)
    }

    /// Drop any applied filter and sort, restoring the full rowset.
    pub fn reset(&mut self) {
        self.visible = self.rows.clone();
    }

    pub fn visible(&self) -> &[Value] {
        &self.visible
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows in the full snapshot.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
