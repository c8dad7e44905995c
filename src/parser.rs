//! Recursive-descent parsing of WHERE and ORDER BY clauses.
//!
//! Logical structure is found first by splitting on OR, then AND, with quote
//! state respected (see [`crate::splitter`]); OR binds looser than AND. The
//! leaves are single comparisons, tokenized by [`crate::lexer::Lexer`].

use crate::ast::{ComparisonOp, Condition, SortDirection, SortRule, MAX_CONDITION_DEPTH};
use crate::error::{RowqlError, RowqlResult};
use crate::lexer::{Lexer, Token};
use crate::splitter::split_by_operator;

/// IS / NOT / NULL / LIKE are contextual keywords: they only act as keywords
/// in the positions the grammar expects them, so fields and bare values may
/// still use those spellings.
fn is_keyword(token: Option<&Token>, keyword: &str) -> bool {
    matches!(token, Some(Token::Word(word)) if word.to_uppercase() == keyword)
}

/// Parse a WHERE clause into a [`Condition`] tree.
pub fn parse_condition(clause: &str) -> RowqlResult<Condition> {
    parse_condition_at(clause, 0)
}

fn parse_condition_at(clause: &str, depth: usize) -> RowqlResult<Condition> {
    if depth > MAX_CONDITION_DEPTH {
        return Err(RowqlError::ParseError(format!(
            "Condition nesting exceeds {} levels: '{}'",
            MAX_CONDITION_DEPTH,
            clause.trim()
        )));
    }

    let or_parts = split_by_operator(clause, "OR");
    if or_parts.len() >= 2 {
        let children = or_parts
            .iter()
            .map(|part| parse_condition_at(part, depth + 1))
            .collect::<RowqlResult<Vec<_>>>()?;
        return Ok(Condition::Or(children));
    }

    let and_parts = split_by_operator(clause, "AND");
    if and_parts.len() >= 2 {
        let children = and_parts
            .iter()
            .map(|part| parse_condition_at(part, depth + 1))
            .collect::<RowqlResult<Vec<_>>>()?;
        return Ok(Condition::And(children));
    }

    parse_comparison(clause)
}

/// Parse a single comparison expression.
///
/// Recognized forms, in priority order:
/// 1. `field IS NULL` / `field IS NOT NULL`
/// 2. `field LIKE 'pattern'` (the pattern must be quoted)
/// 3. `field <op> value` with op one of `= != <> < > <= >=`
pub fn parse_comparison(expr: &str) -> RowqlResult<Condition> {
    let tokens = Lexer::new(expr).tokenize()?;

    let field = match tokens.first() {
        Some(Token::Word(name)) => name.clone(),
        _ => {
            return Err(RowqlError::ParseError(format!(
                "Expected a field name in condition: '{}'",
                expr.trim()
            )))
        }
    };

    let rest = &tokens[1..];

    if is_keyword(rest.first(), "IS") {
        if is_keyword(rest.get(1), "NULL") && rest.get(2) == Some(&Token::Eof) {
            return Ok(Condition::IsNull { field });
        }
        if is_keyword(rest.get(1), "NOT")
            && is_keyword(rest.get(2), "NULL")
            && rest.get(3) == Some(&Token::Eof)
        {
            return Ok(Condition::IsNotNull { field });
        }
        return Err(RowqlError::ParseError(format!(
            "Expected NULL or NOT NULL after IS: '{}'",
            expr.trim()
        )));
    }

    if is_keyword(rest.first(), "LIKE") {
        return match (rest.get(1), rest.get(2)) {
            (Some(Token::StringLit(pattern)), Some(Token::Eof)) => Ok(Condition::Like {
                field,
                pattern: pattern.clone(),
            }),
            _ => Err(RowqlError::ParseError(format!(
                "LIKE pattern must be a quoted string: '{}'",
                expr.trim()
            ))),
        };
    }

    match rest {
        [op_token, value_token, Token::Eof] => {
            let op = match comparison_op(op_token) {
                Some(op) => op,
                None => {
                    return Err(RowqlError::ParseError(format!(
                        "Unrecognized condition: '{}'",
                        expr.trim()
                    )))
                }
            };

            let value = match value_token {
                // Bare tokens are taken verbatim; quoted literals arrive
                // with quotes already stripped by the lexer
                Token::Word(raw) => raw.clone(),
                Token::StringLit(text) => text.clone(),
                _ => {
                    return Err(RowqlError::ParseError(format!(
                        "Expected a value after comparison operator: '{}'",
                        expr.trim()
                    )))
                }
            };

            Ok(Condition::Comparison { field, op, value })
        }

        _ => Err(RowqlError::ParseError(format!(
            "Unrecognized condition: '{}'",
            expr.trim()
        ))),
    }
}

fn comparison_op(token: &Token) -> Option<ComparisonOp> {
    match token {
        Token::Eq => Some(ComparisonOp::Eq),
        Token::NotEq => Some(ComparisonOp::NotEq),
        Token::LessThan => Some(ComparisonOp::LessThan),
        Token::GreaterThan => Some(ComparisonOp::GreaterThan),
        Token::LessThanEq => Some(ComparisonOp::LessThanEq),
        Token::GreaterThanEq => Some(ComparisonOp::GreaterThanEq),
        _ => None,
    }
}

/// Parse an ORDER BY clause into an ordered list of sort rules.
///
/// Rules are comma-separated `field [ASC|DESC]` pieces. The direction
/// defaults to ascending when omitted or unrecognized; only the literal
/// tokens ASC / DESC (case-insensitive) are honored.
pub fn parse_sort_rules(order_by: &str) -> RowqlResult<Vec<SortRule>> {
    let mut rules = Vec::new();

    for piece in order_by.split(',') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }

        let mut words = piece.split_whitespace();
        let field = match words.next() {
            Some(field) => field.to_string(),
            None => continue,
        };

        let direction = match words.next() {
            Some(word) if word.eq_ignore_ascii_case("DESC") => SortDirection::Desc,
            _ => SortDirection::Asc,
        };

        rules.push(SortRule { field, direction });
    }

    if rules.is_empty() {
        return Err(RowqlError::ParseError(format!(
            "Invalid ORDER BY clause: '{}'",
            order_by.trim()
        )));
    }

    Ok(rules)
}
