//! Expression node types: literal scalars and the node tree itself.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::ast::ops::SqlOp;

/// A literal constant, with its kind fixed at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    /// SQL `null`
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Date without a time of day; renders as a `{d '...'}` escape literal
    Date(NaiveDate),
    /// Date and time; renders as `{ts '...'}` unless the time is exactly midnight
    DateTime(NaiveDateTime),
}

/// A node of the serializable expression tree.
///
/// Nodes are immutable after construction and only borrowed during
/// rendering; the caller keeps ownership of the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A literal constant. `Lit(Scalar::Null)` is the null node.
    Lit(Scalar),
    /// An ordered list of nodes; always renders as `(e1,e2,...,en)`.
    List(Vec<Expr>),
    /// An operator application carrying its own render template.
    Op(Box<SqlOp>),
    /// A pre-formatted SQL fragment, passed through verbatim.
    Raw(String),
}

impl Expr {
    /// The null node.
    pub fn null() -> Self {
        Expr::Lit(Scalar::Null)
    }

    /// A raw SQL fragment, used where a caller already holds rendered text.
    pub fn raw(sql: impl Into<String>) -> Self {
        Expr::Raw(sql.into())
    }

    /// True if this node is an "empty condition": the null node or a blank
    /// raw fragment. Empty conditions mean "no predicate here" and are
    /// dropped from conjunctions rather than rendered.
    pub fn is_empty_condition(&self) -> bool {
        match self {
            Expr::Lit(Scalar::Null) => true,
            Expr::Raw(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl From<SqlOp> for Expr {
    fn from(op: SqlOp) -> Self {
        Expr::Op(Box::new(op))
    }
}

impl From<Scalar> for Expr {
    fn from(v: Scalar) -> Self {
        Expr::Lit(v)
    }
}

impl From<Vec<Expr>> for Expr {
    fn from(items: Vec<Expr>) -> Self {
        Expr::List(items)
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident($conv:expr)),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(v: $ty) -> Self {
                    Scalar::$variant($conv(v))
                }
            }
            impl From<$ty> for Expr {
                fn from(v: $ty) -> Self {
                    Expr::Lit(Scalar::from(v))
                }
            }
        )*
    };
}

scalar_from! {
    bool => Bool(std::convert::identity),
    i32 => Int(i64::from),
    i64 => Int(std::convert::identity),
    f64 => Float(std::convert::identity),
    &str => String(str::to_string),
    String => String(std::convert::identity),
    NaiveDate => Date(std::convert::identity),
    NaiveDateTime => DateTime(std::convert::identity),
}
