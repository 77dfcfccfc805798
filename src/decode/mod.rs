//! Decoders from the text a backend sends back to typed values.
//!
//! Each decoder accepts exactly its documented grammar and returns
//! `SqlInterpolateError::DecodeError` for anything else. Surrounding whitespace is not
//! part of any grammar: `" 1.2"` and `"2012-09-22 "` are both rejected.

mod calendar;
mod numeric;
mod zone;

pub use calendar::{decode_date, decode_date_time_with_zone};
pub use numeric::{decode_bool, decode_decimal, decode_float, decode_int};
pub use zone::{decode_date_time_without_zone, system_time_zone};

pub(crate) use calendar::{format_date, format_date_time};

use crate::error::SqlInterpolateError;
use crate::types::{DecodedValue, ScalarKind};

/// Decode one raw scalar into the `DecodedValue` variant for `kind`.
///
/// ```rust
/// use sql_interpolate::prelude::*;
///
/// let v = decode_scalar(ScalarKind::Float, "-Infinity")?;
/// assert_eq!(v.as_float(), Some(f64::NEG_INFINITY));
/// # Ok::<(), SqlInterpolateError>(())
/// ```
///
/// # Errors
/// Returns `SqlInterpolateError::DecodeError` if `raw` does not fit `kind`.
pub fn decode_scalar(kind: ScalarKind, raw: &str) -> Result<DecodedValue, SqlInterpolateError> {
    let value = match kind {
        ScalarKind::Int => DecodedValue::Int(decode_int(raw)?),
        ScalarKind::Bool => DecodedValue::Bool(decode_bool(raw)?),
        ScalarKind::Float => DecodedValue::Float(decode_float(raw)?),
        ScalarKind::Decimal => DecodedValue::Decimal(decode_decimal(raw)?),
        ScalarKind::Date => DecodedValue::Date(decode_date(raw)?),
        ScalarKind::DateTimeWithZone => DecodedValue::DateTime(decode_date_time_with_zone(raw)?),
        ScalarKind::DateTimeWithoutZone => {
            DecodedValue::DateTime(decode_date_time_without_zone(raw)?)
        }
        ScalarKind::Text => DecodedValue::Text(raw.to_string()),
    };
    Ok(value)
}

/// Like [`decode_scalar`], with `None` (SQL NULL) mapping to `DecodedValue::Null`.
///
/// # Errors
/// Returns `SqlInterpolateError::DecodeError` if a present value does not fit `kind`.
pub fn decode_nullable(
    kind: ScalarKind,
    raw: Option<&str>,
) -> Result<DecodedValue, SqlInterpolateError> {
    raw.map_or(Ok(DecodedValue::Null), |raw| decode_scalar(kind, raw))
}
