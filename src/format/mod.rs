//! Rendering: the recursive serializer that turns expression trees into
//! T-SQL text, plus literal encoding and type-directed decoding.

pub mod decode;
pub mod encode;
pub mod ops;

#[cfg(test)]
mod tests;

pub use decode::decode;
pub use encode::{quote, quote_raw};

use std::collections::HashMap;

use crate::ast::{Expr, Scalar};
use crate::error::ExprError;

/// Read-only evaluation context threaded through every recursive render
/// call. Holds named scalar bindings; the core never mutates it, and only
/// [`context`](crate::ast::builders::context) nodes read from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    values: HashMap<String, Scalar>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a named value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Scalar>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up a bound value.
    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.values.get(name)
    }
}

/// Render any expression node to SQL text.
///
/// Literals go through the value encoder with quoting enabled, lists
/// render as a parenthesized comma-separated tuple, raw fragments pass
/// through verbatim, and operator nodes render via their own template
/// (which recurses back here for their children).
///
/// # Example
/// ```
/// use mssql_expr::ast::builders::*;
/// use mssql_expr::format::to_sql;
///
/// let e = eq(field("a", None), "1");
/// assert_eq!(to_sql(&e, None).unwrap(), "(a='1')");
/// ```
pub fn to_sql(expr: &Expr, env: Option<&Environment>) -> Result<String, ExprError> {
    match expr {
        Expr::Lit(v) => Ok(encode::quote(v)),
        Expr::List(items) => {
            let parts: Vec<String> = items
                .iter()
                .map(|e| to_sql(e, env))
                .collect::<Result<_, _>>()?;
            Ok(format!("({})", parts.join(",")))
        }
        Expr::Op(op) => op.to_sql(env),
        Expr::Raw(sql) => Ok(sql.clone()),
    }
}

/// Render a node standing in boolean-predicate position.
///
/// Returns `Ok(None)` for empty conditions (the null node, a blank raw
/// fragment, or an operator that renders to nothing) — the caller must
/// omit the predicate rather than emit a malformed fragment. Raw text is
/// returned unchanged. Any other node kind is a caller bug and fails with
/// [`ExprError::InvalidExpression`].
pub fn condition_to_sql(cond: &Expr, env: Option<&Environment>) -> Result<Option<String>, ExprError> {
    if cond.is_empty_condition() {
        return Ok(None);
    }
    match cond {
        Expr::Op(op) => {
            let sql = op.to_sql(env)?;
            Ok(if sql.is_empty() { None } else { Some(sql) })
        }
        Expr::Raw(sql) => Ok(Some(sql.clone())),
        other => Err(ExprError::InvalidExpression(
            serde_json::to_string(other).unwrap_or_else(|_| format!("{other:?}")),
        )),
    }
}
