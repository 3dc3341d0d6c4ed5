//! Ergonomic constructor functions for expression nodes.
//!
//! Each function produces an immutable [`Expr`] whose render rule is fixed
//! by its operator; operands are anything convertible into an `Expr`
//! (native scalars, other nodes, or node lists).
//!
//! # Example
//! ```
//! use mssql_expr::ast::builders::*;
//! use mssql_expr::format::to_sql;
//!
//! let cond = is_in(field("el", None), vec![1.into(), 2.into(), 3.into(), 4.into()]);
//! assert_eq!(to_sql(&cond, None).unwrap(), "(el in (1,2,3,4))");
//! ```

use crate::ast::expr::Expr;
use crate::ast::ops::{AggregateFunc, CmpOp, SqlOp};

// ==================== References & literals ====================

/// Column reference, optionally prefixed with a table alias.
///
/// `field("id", Some("customer"))` renders `customer.id`;
/// `field("id", None)` renders `id`.
pub fn field(name: impl Into<String>, alias: Option<&str>) -> Expr {
    SqlOp::Field {
        name: name.into(),
        alias: alias.map(str::to_string),
    }
    .into()
}

/// Named environment variable, resolved when the tree is rendered.
pub fn context(name: impl Into<String>) -> Expr {
    SqlOp::Context(name.into()).into()
}

// ==================== Predicates ====================

/// `(a is null)`
pub fn is_null(a: impl Into<Expr>) -> Expr {
    SqlOp::IsNull(a.into()).into()
}

/// `(a=b)`
pub fn eq(a: impl Into<Expr>, b: impl Into<Expr>) -> Expr {
    cmp(CmpOp::Eq, a, b)
}

/// `(a<>b)`
pub fn ne(a: impl Into<Expr>, b: impl Into<Expr>) -> Expr {
    cmp(CmpOp::Ne, a, b)
}

/// `(a>b)`
pub fn gt(a: impl Into<Expr>, b: impl Into<Expr>) -> Expr {
    cmp(CmpOp::Gt, a, b)
}

/// `(a>=b)`
pub fn ge(a: impl Into<Expr>, b: impl Into<Expr>) -> Expr {
    cmp(CmpOp::Ge, a, b)
}

/// `(a<b)`
pub fn lt(a: impl Into<Expr>, b: impl Into<Expr>) -> Expr {
    cmp(CmpOp::Lt, a, b)
}

/// `(a<=b)`
pub fn le(a: impl Into<Expr>, b: impl Into<Expr>) -> Expr {
    cmp(CmpOp::Le, a, b)
}

fn cmp(op: CmpOp, a: impl Into<Expr>, b: impl Into<Expr>) -> Expr {
    SqlOp::Cmp {
        op,
        left: a.into(),
        right: b.into(),
    }
    .into()
}

/// `not(a)`
pub fn not(a: impl Into<Expr>) -> Expr {
    SqlOp::Not(a.into()).into()
}

/// `(el in (e1,e2,...,en))`
///
/// # Example
/// `is_in(field("el", None), vec![1.into(), 2.into()])` renders `(el in (1,2))`.
pub fn is_in(expr: impl Into<Expr>, list: Vec<Expr>) -> Expr {
    SqlOp::IsIn {
        expr: expr.into(),
        list: Expr::List(list),
    }
    .into()
}

/// `((a & mask)=val)` — bitwise-and then compare.
pub fn test_mask(expr: impl Into<Expr>, mask: impl Into<Expr>, val: impl Into<Expr>) -> Expr {
    SqlOp::TestMask {
        expr: expr.into(),
        mask: mask.into(),
        val: val.into(),
    }
    .into()
}

/// `(a between min and max)`
pub fn between(expr: impl Into<Expr>, min: impl Into<Expr>, max: impl Into<Expr>) -> Expr {
    SqlOp::Between {
        expr: expr.into(),
        min: min.into(),
        max: max.into(),
    }
    .into()
}

/// `(a like mask)`
pub fn like(expr: impl Into<Expr>, mask: impl Into<Expr>) -> Expr {
    SqlOp::Like {
        expr: expr.into(),
        mask: mask.into(),
    }
    .into()
}

/// `((a&(1<<b))<>0)` — true when the b-th bit of a is set.
pub fn bit_set(a: impl Into<Expr>, b: impl Into<Expr>) -> Expr {
    SqlOp::BitSet(a.into(), b.into()).into()
}

/// `((a&(1<<b))=0)` — true when the b-th bit of a is clear.
pub fn bit_clear(a: impl Into<Expr>, b: impl Into<Expr>) -> Expr {
    SqlOp::BitClear(a.into(), b.into()).into()
}

/// Conjunction of conditions; empty conditions are dropped, so
/// `join_and(vec![a, Expr::raw(""), b, Expr::null()])` renders like
/// `join_and(vec![a, b])`.
pub fn join_and(conditions: Vec<Expr>) -> Expr {
    SqlOp::JoinAnd(conditions).into()
}

/// Disjunction of conditions; empty conditions are dropped.
pub fn join_or(conditions: Vec<Expr>) -> Expr {
    SqlOp::JoinOr(conditions).into()
}

// ==================== Arithmetic & string expressions ====================

/// `-(a)`
pub fn minus(a: impl Into<Expr>) -> Expr {
    SqlOp::Minus(a.into()).into()
}

/// `(e1+e2+...+en)`
pub fn add(exprs: Vec<Expr>) -> Expr {
    SqlOp::Add(exprs).into()
}

/// String concatenation; T-SQL uses `+`, so this renders like [`add`].
pub fn concat(exprs: Vec<Expr>) -> Expr {
    SqlOp::Add(exprs).into()
}

/// `(a-b)`
pub fn sub(a: impl Into<Expr>, b: impl Into<Expr>) -> Expr {
    SqlOp::Sub(a.into(), b.into()).into()
}

/// `(a/b)`
pub fn div(a: impl Into<Expr>, b: impl Into<Expr>) -> Expr {
    SqlOp::Div(a.into(), b.into()).into()
}

/// `sum(a)`
pub fn sum(expr: impl Into<Expr>) -> Expr {
    aggregate(AggregateFunc::Sum, expr)
}

/// `min(a)`
pub fn min(expr: impl Into<Expr>) -> Expr {
    aggregate(AggregateFunc::Min, expr)
}

/// `max(a)`
pub fn max(expr: impl Into<Expr>) -> Expr {
    aggregate(AggregateFunc::Max, expr)
}

fn aggregate(func: AggregateFunc, expr: impl Into<Expr>) -> Expr {
    SqlOp::Aggregate {
        func,
        expr: expr.into(),
    }
    .into()
}

/// `distinct e1,e2,...,en` — note: no enclosing parentheses.
pub fn distinct(exprs: Vec<Expr>) -> Expr {
    SqlOp::Distinct(exprs).into()
}

/// `SUBSTRING(a,start,len)` — 1-based start, as T-SQL counts.
pub fn substring(expr: impl Into<Expr>, start: impl Into<Expr>, len: impl Into<Expr>) -> Expr {
    SqlOp::Substring {
        expr: expr.into(),
        start: start.into(),
        len: len.into(),
    }
    .into()
}

/// `CONVERT(int,a)`
pub fn convert_to_int(expr: impl Into<Expr>) -> Expr {
    SqlOp::ConvertToInt(expr.into()).into()
}

/// `CONVERT(varchar(max_len),a)`
pub fn convert_to_string(expr: impl Into<Expr>, max_len: u32) -> Expr {
    SqlOp::ConvertToString {
        expr: expr.into(),
        max_len,
    }
    .into()
}
