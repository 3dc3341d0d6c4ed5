//! Type-directed coercion: column text back to a native scalar, keyed by
//! the T-SQL type name. The inverse of the value encoder for scalar text;
//! dates and structured literals are never recovered here.

use crate::ast::Scalar;
use crate::error::ExprError;

const CHAR_TYPES: &[&str] = &["text", "ntext", "varchar", "char", "nvarchar", "nchar", "sysname"];
const INT_TYPES: &[&str] = &["tinyint", "smallint", "int", "bigint"];
const FLOAT_TYPES: &[&str] = &["real", "money", "float", "decimal", "numeric", "smallmoney"];

/// Map column text to a native scalar according to a T-SQL type name.
///
/// Character types pass through unchanged; integer types parse base-10;
/// floating, decimal and money types parse as `f64`. Unrecognized type
/// names pass the text through unchanged. Parse failures propagate.
///
/// # Example
/// ```
/// use mssql_expr::ast::Scalar;
/// use mssql_expr::format::decode;
///
/// assert_eq!(decode("123", "int").unwrap(), Scalar::Int(123));
/// assert_eq!(decode("12.5", "float").unwrap(), Scalar::Float(12.5));
/// assert_eq!(decode("abc", "varchar").unwrap(), Scalar::String("abc".into()));
/// ```
pub fn decode(s: &str, sql_type: &str) -> Result<Scalar, ExprError> {
    if CHAR_TYPES.contains(&sql_type) {
        return Ok(Scalar::String(s.to_string()));
    }
    if INT_TYPES.contains(&sql_type) {
        return Ok(Scalar::Int(s.parse::<i64>()?));
    }
    if FLOAT_TYPES.contains(&sql_type) {
        return Ok(Scalar::Float(s.parse::<f64>()?));
    }
    Ok(Scalar::String(s.to_string()))
}
