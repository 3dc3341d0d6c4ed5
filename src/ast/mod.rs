pub mod builders;
pub mod expr;
pub mod ops;

pub use self::expr::{Expr, Scalar};
pub use self::ops::{AggregateFunc, CmpOp, SqlOp};
