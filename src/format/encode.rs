//! The value encoder: one literal scalar to its T-SQL textual form.
//!
//! Strings double embedded single quotes; dates use the ODBC escape
//! literals `{d '...'}` and `{ts '...'}`. Encoding is best-effort and
//! never fails: every scalar kind has a canonical rendering.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::ast::Scalar;

/// Encode a literal with full quoting.
///
/// # Example
/// ```
/// use mssql_expr::ast::Scalar;
/// use mssql_expr::format::quote;
///
/// assert_eq!(quote(&Scalar::String("it's".into())), "'it''s'");
/// assert_eq!(quote(&Scalar::Int(123)), "123");
/// assert_eq!(quote(&Scalar::Null), "null");
/// ```
pub fn quote(v: &Scalar) -> String {
    match v {
        Scalar::Null => "null".to_string(),
        Scalar::Bool(b) => b.to_string(),
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(x) => x.to_string(),
        Scalar::String(s) => format!("'{}'", s.replace('\'', "''")),
        Scalar::Date(d) => date_literal(*d),
        Scalar::DateTime(dt) => {
            // midnight to the nanosecond renders as a date-only literal
            if dt.time() == NaiveTime::MIN {
                date_literal(dt.date())
            } else {
                timestamp_literal(*dt)
            }
        }
    }
}

/// Encode a literal without surrounding quotes on strings; escaping still
/// applies. Non-string scalars render exactly as [`quote`] does.
pub fn quote_raw(v: &Scalar) -> String {
    match v {
        Scalar::String(s) => s.replace('\'', "''"),
        other => quote(other),
    }
}

fn date_literal(d: NaiveDate) -> String {
    format!("{{d '{:04}-{:02}-{:02}'}}", d.year(), d.month(), d.day())
}

fn timestamp_literal(dt: NaiveDateTime) -> String {
    format!(
        "{{ts '{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:03}'}}",
        dt.year(),
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second(),
        dt.nanosecond() / 1_000_000
    )
}
