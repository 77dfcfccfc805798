use std::borrow::Cow;

use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use serde_json::Value as JsonValue;

use crate::decode::{format_date, format_date_time};

/// Values that can be bound to a `?` placeholder.
///
/// `Null`, `Int` and `Float` are written into the SQL unquoted; `Text` goes through the
/// driver's quote function and is wrapped in single quotes. Everything else lives under
/// `Other` and is rendered as text:
/// ```rust
/// use sql_interpolate::prelude::*;
///
/// let params = vec![
///     BindValue::Int(1),
///     BindValue::from("alice"),
///     BindValue::from(true),
///     BindValue::from(None::<i64>),
/// ];
/// # let _ = params;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    /// NULL value
    Null,
    /// Integer value (64-bit)
    Int(i64),
    /// Floating point value (64-bit)
    Float(f64),
    /// Text/string value
    Text(String),
    /// Any other value, canonicalized to text before it is quoted
    Other(OtherValue),
}

/// Bind values without a literal form of their own.
#[derive(Debug, Clone, PartialEq)]
pub enum OtherValue {
    Bool(bool),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    TimestampTz(DateTime<FixedOffset>),
    Decimal(BigDecimal),
    Json(JsonValue),
}

impl OtherValue {
    /// Canonical text form, as it will appear between the quotes.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            OtherValue::Bool(b) => b.to_string(),
            OtherValue::Date(d) => format_date(*d),
            OtherValue::Timestamp(ts) => format_date_time(*ts, None),
            OtherValue::TimestampTz(ts) => {
                format_date_time(ts.naive_local(), Some(*ts.offset()))
            }
            OtherValue::Decimal(d) => d.to_string(),
            OtherValue::Json(j) => j.to_string(),
        }
    }
}

impl BindValue {
    /// Check if this value is NULL
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// `Other` as its `Text` form; every other variant is borrowed unchanged.
    #[must_use]
    pub fn canonicalize(&self) -> Cow<'_, BindValue> {
        match self {
            BindValue::Other(other) => Cow::Owned(BindValue::Text(other.to_text())),
            value => Cow::Borrowed(value),
        }
    }
}

impl From<i64> for BindValue {
    fn from(value: i64) -> Self {
        BindValue::Int(value)
    }
}

impl From<i32> for BindValue {
    fn from(value: i32) -> Self {
        BindValue::Int(i64::from(value))
    }
}

impl From<u32> for BindValue {
    fn from(value: u32) -> Self {
        BindValue::Int(i64::from(value))
    }
}

impl From<f64> for BindValue {
    fn from(value: f64) -> Self {
        BindValue::Float(value)
    }
}

impl From<f32> for BindValue {
    fn from(value: f32) -> Self {
        BindValue::Float(f64::from(value))
    }
}

impl From<&str> for BindValue {
    fn from(value: &str) -> Self {
        BindValue::Text(value.to_string())
    }
}

impl From<String> for BindValue {
    fn from(value: String) -> Self {
        BindValue::Text(value)
    }
}

impl From<bool> for BindValue {
    fn from(value: bool) -> Self {
        BindValue::Other(OtherValue::Bool(value))
    }
}

impl From<NaiveDate> for BindValue {
    fn from(value: NaiveDate) -> Self {
        BindValue::Other(OtherValue::Date(value))
    }
}

impl From<NaiveDateTime> for BindValue {
    fn from(value: NaiveDateTime) -> Self {
        BindValue::Other(OtherValue::Timestamp(value))
    }
}

impl From<DateTime<FixedOffset>> for BindValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        BindValue::Other(OtherValue::TimestampTz(value))
    }
}

impl From<BigDecimal> for BindValue {
    fn from(value: BigDecimal) -> Self {
        BindValue::Other(OtherValue::Decimal(value))
    }
}

impl From<JsonValue> for BindValue {
    fn from(value: JsonValue) -> Self {
        BindValue::Other(OtherValue::Json(value))
    }
}

impl<T: Into<BindValue>> From<Option<T>> for BindValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(BindValue::Null, Into::into)
    }
}

/// An arbitrary-precision decimal as returned by a backend, including the `NaN` sentinel.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlDecimal {
    Number(BigDecimal),
    NaN,
}

impl SqlDecimal {
    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self, SqlDecimal::NaN)
    }

    #[must_use]
    pub fn as_number(&self) -> Option<&BigDecimal> {
        if let SqlDecimal::Number(value) = self {
            Some(value)
        } else {
            None
        }
    }
}

/// Typed values produced by the scalar decoders and stored in result rows.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    /// NULL value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value (64-bit)
    Int(i64),
    /// Floating point value, possibly infinite or NaN
    Float(f64),
    /// Arbitrary-precision decimal value
    Decimal(SqlDecimal),
    /// Proleptic Gregorian date; years at or before zero are BC
    Date(NaiveDate),
    /// Date and time with an explicit UTC offset
    DateTime(DateTime<FixedOffset>),
    /// Text/string value
    Text(String),
}

impl DecodedValue {
    /// Check if this value is NULL
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        if let DecodedValue::Int(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        if let DecodedValue::Bool(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        if let DecodedValue::Float(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_decimal(&self) -> Option<&SqlDecimal> {
        if let DecodedValue::Decimal(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        if let DecodedValue::Date(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        if let DecodedValue::DateTime(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let DecodedValue::Text(value) = self {
            Some(value)
        } else {
            None
        }
    }
}

/// The type a raw scalar should be decoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ScalarKind {
    /// Base-10 integer
    Int,
    /// `t`/`true` style boolean
    Bool,
    /// Float with `Infinity`/`-Infinity`/`NaN` sentinels
    Float,
    /// Arbitrary-precision decimal, or `NaN`
    Decimal,
    /// Calendar date, optionally BC
    Date,
    /// Date and time carrying its own offset
    DateTimeWithZone,
    /// Date and time interpreted in the local zone
    DateTimeWithoutZone,
    /// Text passed through as-is
    Text,
}
