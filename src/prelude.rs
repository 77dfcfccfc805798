//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types and functions
//! to make it easier to get started with the library.

pub use crate::config::{ConnectionOptions, ConnectionOptionsBuilder};
pub use crate::connection::Connection;
pub use crate::decode::{
    decode_bool, decode_date, decode_date_time_with_zone, decode_date_time_without_zone,
    decode_decimal, decode_float, decode_int, decode_nullable, decode_scalar, system_time_zone,
};
pub use crate::driver::{Driver, DriverFactory};
pub use crate::error::{Construct, SqlInterpolateError};
pub use crate::interpolation::{
    EscapeStyle, count_placeholders, count_placeholders_with, interpolate, interpolate_with,
    quote_backslash, quote_standard, render_literal,
};
pub use crate::registry::DriverRegistry;
pub use crate::results::{ResultInfo, ResultSet, Row};
pub use crate::statement::{EmulatedStatementExecutor, Statement, StatementExecutor};
pub use crate::types::{BindValue, DecodedValue, OtherValue, ScalarKind, SqlDecimal};
