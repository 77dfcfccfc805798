use std::str::FromStr;
use std::sync::LazyLock;

use bigdecimal::BigDecimal;
use regex::Regex;

use crate::error::SqlInterpolateError;
use crate::types::SqlDecimal;

// Plain or exponential decimal notation; `inf`, `nan` and friends are not numbers here.
static DECIMAL_NOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d+)?|\.\d+)(?:[eE][+-]?\d+)?$").expect("valid decimal regex")
});

/// Convert backend float text to `f64`, honouring `Infinity`, `-Infinity` and `NaN`.
///
/// # Errors
/// Returns `SqlInterpolateError::DecodeError` for anything that is neither a sentinel nor
/// decimal/exponential notation.
pub fn decode_float(s: &str) -> Result<f64, SqlInterpolateError> {
    match s {
        "Infinity" => Ok(f64::INFINITY),
        "-Infinity" => Ok(f64::NEG_INFINITY),
        "NaN" => Ok(f64::NAN),
        _ if DECIMAL_NOTATION.is_match(s) => {
            f64::from_str(s).map_err(|_| SqlInterpolateError::decode("float", s))
        }
        _ => Err(SqlInterpolateError::decode("float", s)),
    }
}

/// Convert backend decimal text to an exact decimal, keeping every digit and the scale.
///
/// # Errors
/// Returns `SqlInterpolateError::DecodeError` unless `s` is `NaN` or decimal/exponential
/// notation.
pub fn decode_decimal(s: &str) -> Result<SqlDecimal, SqlInterpolateError> {
    if s == "NaN" {
        return Ok(SqlDecimal::NaN);
    }
    if !DECIMAL_NOTATION.is_match(s) {
        return Err(SqlInterpolateError::decode("decimal", s));
    }
    BigDecimal::from_str(s)
        .map(SqlDecimal::Number)
        .map_err(|_| SqlInterpolateError::decode("decimal", s))
}

/// # Errors
/// Returns `SqlInterpolateError::DecodeError` unless `s` is a base-10 `i64`.
pub fn decode_int(s: &str) -> Result<i64, SqlInterpolateError> {
    s.parse::<i64>()
        .map_err(|_| SqlInterpolateError::decode("integer", s))
}

/// Backends spell booleans `t`/`f` or `true`/`false`; only the first letter matters.
///
/// # Errors
/// Returns `SqlInterpolateError::DecodeError` for empty input.
pub fn decode_bool(s: &str) -> Result<bool, SqlInterpolateError> {
    match s.chars().next() {
        Some(c) => Ok(c == 't' || c == 'T'),
        None => Err(SqlInterpolateError::decode("boolean", s)),
    }
}
