//! Composable expression trees rendered as Microsoft SQL Server (T-SQL) text.
//!
//! Build a predicate with the constructor functions in [`ast::builders`],
//! then render it with [`format::to_sql`] or [`format::condition_to_sql`]:
//!
//! ```
//! use mssql_expr::ast::builders::*;
//! use mssql_expr::format::to_sql;
//!
//! let cond = join_and(vec![
//!     eq(field("age", None), 18),
//!     like(field("name", Some("c")), "A%"),
//! ]);
//! assert_eq!(to_sql(&cond, None).unwrap(), "((age=18) and (c.name like 'A%'))");
//! ```
//!
//! Serialization is one-way (tree to text); no SQL is ever parsed back.
//! Every entry point is a pure function, safe to call concurrently.

pub mod ast;
pub mod error;
pub mod format;

pub use ast::{Expr, Scalar, SqlOp};
pub use error::ExprError;
pub use format::{Environment, condition_to_sql, decode, quote, quote_raw, to_sql};
