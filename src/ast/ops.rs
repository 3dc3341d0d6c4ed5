//! The operator catalog: one variant per render template.
//!
//! Variants hold only operator identity and child nodes; the templates
//! themselves live in [`crate::format::ops`].

use serde::{Deserialize, Serialize};

use crate::ast::expr::Expr;

/// Comparison operator of a binary predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CmpOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl CmpOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CmpOp::Eq => "=",
            CmpOp::Ne => "<>",
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
        }
    }
}

/// Aggregate function name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregateFunc {
    Sum,
    Min,
    Max,
}

impl AggregateFunc {
    pub fn name(self) -> &'static str {
        match self {
            AggregateFunc::Sum => "sum",
            AggregateFunc::Min => "min",
            AggregateFunc::Max => "max",
        }
    }
}

/// An operator application: the compound node of the expression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlOp {
    /// Column reference, optionally qualified by a table alias.
    Field { name: String, alias: Option<String> },
    /// `(a is null)`
    IsNull(Expr),
    /// `(a <op> b)`
    Cmp { op: CmpOp, left: Expr, right: Expr },
    /// `not(a)`
    Not(Expr),
    /// `-(a)`
    Minus(Expr),
    /// `(e1+e2+...+en)` — both numeric addition and T-SQL string concatenation
    Add(Vec<Expr>),
    /// `(a-b)`
    Sub(Expr, Expr),
    /// `(a/b)`
    Div(Expr, Expr),
    /// `sum(a)`, `min(a)`, `max(a)`
    Aggregate { func: AggregateFunc, expr: Expr },
    /// `distinct e1,e2,...` — no enclosing parentheses
    Distinct(Vec<Expr>),
    /// `(a in (e1,e2,...))`
    IsIn { expr: Expr, list: Expr },
    /// `((a & mask)=val)`
    TestMask { expr: Expr, mask: Expr, val: Expr },
    /// `(a between min and max)`
    Between { expr: Expr, min: Expr, max: Expr },
    /// `(a like mask)`
    Like { expr: Expr, mask: Expr },
    /// `SUBSTRING(a,start,len)`
    Substring { expr: Expr, start: Expr, len: Expr },
    /// `CONVERT(int,a)`
    ConvertToInt(Expr),
    /// `CONVERT(varchar(n),a)`
    ConvertToString { expr: Expr, max_len: u32 },
    /// `((a&(1<<b))<>0)`
    BitSet(Expr, Expr),
    /// `((a&(1<<b))=0)`
    BitClear(Expr, Expr),
    /// `(c1 and c2 and ... and cn)`, empty conditions dropped
    JoinAnd(Vec<Expr>),
    /// `(c1 or c2 or ... or cn)`, empty conditions dropped
    JoinOr(Vec<Expr>),
    /// Named value resolved from the [`Environment`](crate::format::Environment)
    /// at render time; `null` when the variable is not bound.
    Context(String),
}
