use serde::{Deserialize, Serialize};

/// Maximum nesting depth for parsed and evaluated conditions.
pub const MAX_CONDITION_DEPTH: usize = 64;

/// AST node for a parsed WHERE condition.
///
/// A condition is a finite tree built fresh for each filter call; it is never
/// shared across calls or mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    /// Conjunction over two or more child conditions
    And(Vec<Condition>),
    /// Disjunction over two or more child conditions
    Or(Vec<Condition>),
    /// field <op> value, where value is the raw literal text
    Comparison {
        field: String,
        op: ComparisonOp,
        value: String,
    },
    /// field LIKE 'pattern' - plain substring match, no wildcard expansion
    Like { field: String, pattern: String },
    /// field IS NULL
    IsNull { field: String },
    /// field IS NOT NULL
    IsNotNull { field: String },
}

/// Comparison operator in a `field <op> value` condition.
///
/// `<>` in query text is normalized to [`ComparisonOp::NotEq`] at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOp {
    Eq,
    NotEq,
    LessThan,
    GreaterThan,
    LessThanEq,
    GreaterThanEq,
}

/// Sort direction for a single ORDER BY rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// One ORDER BY rule: a field name and a direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortRule {
    pub field: String,
    pub direction: SortDirection,
}
