//! Render templates, one per operator variant.
//!
//! Every binary/unary operator wraps its full result in one enclosing pair
//! of parentheses. That is deliberately conservative: precedence stays
//! unambiguous without tracking operator binding strength.

use crate::ast::{Expr, Scalar, SqlOp};
use crate::error::ExprError;
use crate::format::{Environment, condition_to_sql, encode, to_sql};

fn par(inner: String) -> String {
    format!("({inner})")
}

impl SqlOp {
    /// Render this operator application, recursing through the serializer
    /// for every child node. `env` is threaded read-only to all children.
    pub fn to_sql(&self, env: Option<&Environment>) -> Result<String, ExprError> {
        match self {
            SqlOp::Field { name, alias } => Ok(match alias {
                Some(a) => format!("{a}.{name}"),
                None => name.clone(),
            }),
            SqlOp::IsNull(a) => Ok(par(format!("{} is null", to_sql(a, env)?))),
            SqlOp::Cmp { op, left, right } => Ok(par(format!(
                "{}{}{}",
                to_sql(left, env)?,
                op.symbol(),
                to_sql(right, env)?
            ))),
            SqlOp::Not(a) => Ok(format!("not{}", par(to_sql(a, env)?))),
            SqlOp::Minus(a) => Ok(format!("-{}", par(to_sql(a, env)?))),
            SqlOp::Add(items) => Ok(par(join_all(items, "+", env)?)),
            SqlOp::Sub(a, b) => Ok(par(format!("{}-{}", to_sql(a, env)?, to_sql(b, env)?))),
            SqlOp::Div(a, b) => Ok(par(format!("{}/{}", to_sql(a, env)?, to_sql(b, env)?))),
            SqlOp::Aggregate { func, expr } => {
                Ok(format!("{}{}", func.name(), par(to_sql(expr, env)?)))
            }
            SqlOp::Distinct(items) => Ok(format!("distinct {}", join_all(items, ",", env)?)),
            SqlOp::IsIn { expr, list } => Ok(par(format!(
                "{} in {}",
                to_sql(expr, env)?,
                to_sql(list, env)?
            ))),
            SqlOp::TestMask { expr, mask, val } => {
                let masked = par(format!("{} & {}", to_sql(expr, env)?, to_sql(mask, env)?));
                Ok(par(format!("{}={}", masked, to_sql(val, env)?)))
            }
            SqlOp::Between { expr, min, max } => Ok(par(format!(
                "{} between {} and {}",
                to_sql(expr, env)?,
                to_sql(min, env)?,
                to_sql(max, env)?
            ))),
            SqlOp::Like { expr, mask } => Ok(par(format!(
                "{} like {}",
                to_sql(expr, env)?,
                to_sql(mask, env)?
            ))),
            SqlOp::Substring { expr, start, len } => Ok(format!(
                "SUBSTRING({},{},{})",
                to_sql(expr, env)?,
                to_sql(start, env)?,
                to_sql(len, env)?
            )),
            SqlOp::ConvertToInt(expr) => Ok(format!("CONVERT(int,{})", to_sql(expr, env)?)),
            SqlOp::ConvertToString { expr, max_len } => Ok(format!(
                "CONVERT(varchar({}),{})",
                max_len,
                to_sql(expr, env)?
            )),
            SqlOp::BitSet(a, b) => Ok(format!(
                "(({}&(1<<{}))<>0)",
                to_sql(a, env)?,
                to_sql(b, env)?
            )),
            SqlOp::BitClear(a, b) => Ok(format!(
                "(({}&(1<<{}))=0)",
                to_sql(a, env)?,
                to_sql(b, env)?
            )),
            SqlOp::JoinAnd(conds) => join_conditions(conds, " and ", env),
            SqlOp::JoinOr(conds) => join_conditions(conds, " or ", env),
            SqlOp::Context(name) => {
                let value = env.and_then(|e| e.get(name)).unwrap_or(&Scalar::Null);
                Ok(encode::quote(value))
            }
        }
    }
}

fn join_all(items: &[Expr], sep: &str, env: Option<&Environment>) -> Result<String, ExprError> {
    let parts: Vec<String> = items
        .iter()
        .map(|e| to_sql(e, env))
        .collect::<Result<_, _>>()?;
    Ok(parts.join(sep))
}

/// Serialize predicate children, dropping empty conditions. Nothing left
/// renders to the empty string, so an all-empty conjunction is itself an
/// empty condition instead of a malformed `()`.
fn join_conditions(
    conds: &[Expr],
    sep: &str,
    env: Option<&Environment>,
) -> Result<String, ExprError> {
    let mut parts = Vec::new();
    for cond in conds {
        if let Some(sql) = condition_to_sql(cond, env)? {
            parts.push(sql);
        }
    }
    if parts.is_empty() {
        return Ok(String::new());
    }
    Ok(par(parts.join(sep)))
}
