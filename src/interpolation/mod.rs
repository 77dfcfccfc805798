use std::borrow::Cow;

mod literal;
mod parsers;
mod scanner;

pub use literal::{quote_backslash, quote_standard, render_literal};
pub use scanner::EscapeStyle;

use crate::error::SqlInterpolateError;
use crate::types::BindValue;
use literal::push_literal;
use scanner::scan;

/// Substitute positional bind values for the `?` placeholders in `sql`.
///
/// For drivers whose backend has no native bind parameters. Placeholders inside string
/// literals, quoted identifiers, `--` comments and (nested) `/* */` comments are left alone.
/// `quote` is the backend's escaping routine for text going between single quotes:
/// ```rust
/// use sql_interpolate::prelude::*;
///
/// let sql = interpolate(
///     "SELECT * FROM users WHERE name = ? AND note <> '?' AND id > ?",
///     &[BindValue::from("O'Hara"), BindValue::Int(7)],
///     quote_standard,
/// )?;
/// assert_eq!(
///     sql,
///     "SELECT * FROM users WHERE name = 'O''Hara' AND note <> '?' AND id > 7"
/// );
/// # Ok::<(), SqlInterpolateError>(())
/// ```
/// Returns a borrowed `Cow` when there is nothing to substitute.
///
/// # Errors
/// Returns `SqlInterpolateError::UnterminatedConstruct` if the template ends inside a quoted
/// literal or block comment, and `SqlInterpolateError::ArityMismatch` if the number of
/// placeholders differs from `values.len()`. No SQL is returned in either case.
pub fn interpolate<'a, Q>(
    sql: &'a str,
    values: &[BindValue],
    quote: Q,
) -> Result<Cow<'a, str>, SqlInterpolateError>
where
    Q: Fn(&str) -> String,
{
    interpolate_with(sql, values, quote, EscapeStyle::Doubled)
}

/// [`interpolate`] for dialects whose quoted literals use backslash escapes.
///
/// `escapes` tells the scanner how quotes are escaped inside literals already in `sql`, and
/// must match what `quote` produces so the output reads back the same way:
/// ```rust
/// use sql_interpolate::prelude::*;
///
/// let sql = interpolate_with(
///     r"SELECT 'it\'s?', ?",
///     &[BindValue::from("a'b")],
///     quote_backslash,
///     EscapeStyle::Backslash,
/// )?;
/// assert_eq!(sql, r"SELECT 'it\'s?', 'a\'b'");
/// # Ok::<(), SqlInterpolateError>(())
/// ```
///
/// # Errors
/// As [`interpolate`].
pub fn interpolate_with<'a, Q>(
    sql: &'a str,
    values: &[BindValue],
    quote: Q,
    escapes: EscapeStyle,
) -> Result<Cow<'a, str>, SqlInterpolateError>
where
    Q: Fn(&str) -> String,
{
    let mut out: Option<String> = None;
    let mut copied = 0;
    let mut placeholders = 0;

    scan(sql, escapes, |idx| {
        if let Some(value) = values.get(placeholders) {
            let buf = out.get_or_insert_with(|| String::with_capacity(sql.len() + 8 * values.len()));
            buf.push_str(&sql[copied..idx]);
            push_literal(buf, value, &quote);
            copied = idx + 1;
        }
        placeholders += 1;
    })?;

    if placeholders != values.len() {
        return Err(SqlInterpolateError::ArityMismatch {
            expected: placeholders,
            actual: values.len(),
        });
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&sql[copied..]);
            Ok(Cow::Owned(buf))
        }
        None => Ok(Cow::Borrowed(sql)),
    }
}

/// Count the `?` placeholders `interpolate` would substitute.
///
/// # Errors
/// Returns `SqlInterpolateError::UnterminatedConstruct` for the same inputs `interpolate`
/// rejects.
pub fn count_placeholders(sql: &str) -> Result<usize, SqlInterpolateError> {
    count_placeholders_with(sql, EscapeStyle::Doubled)
}

/// # Errors
/// As [`count_placeholders`], reading quoted literals with `escapes`.
pub fn count_placeholders_with(
    sql: &str,
    escapes: EscapeStyle,
) -> Result<usize, SqlInterpolateError> {
    let mut count = 0;
    scan(sql, escapes, |_| count += 1)?;
    Ok(count)
}
