//! Placeholder interpolation and typed scalar decoding for SQL drivers.
//!
//! Drivers for backends without native bind parameters inline values into the SQL text
//! with [`interpolate`], which only treats `?` as a placeholder outside quoted strings,
//! quoted identifiers and comments. Raw text coming back from the backend is converted
//! with the [`decode`] functions.
//!
//! ```rust
//! use sql_interpolate::prelude::*;
//!
//! let sql = interpolate(
//!     "SELECT * FROM users WHERE name = ? AND note <> '?' -- ?",
//!     &[BindValue::from("O'Brien")],
//!     quote_standard,
//! )?;
//! assert_eq!(sql, "SELECT * FROM users WHERE name = 'O''Brien' AND note <> '?' -- ?");
//!
//! assert_eq!(decode_date("431-09-22 BC")?.to_string(), "-0430-09-22");
//! # Ok::<(), SqlInterpolateError>(())
//! ```

pub mod config;
pub mod connection;
pub mod decode;
pub mod driver;
pub mod error;
pub mod interpolation;
pub mod prelude;
pub mod registry;
pub mod results;
pub mod statement;
pub mod types;

pub use config::{ConnectionOptions, ConnectionOptionsBuilder};
pub use connection::Connection;
pub use driver::{Driver, DriverFactory};
pub use error::{Construct, SqlInterpolateError};
pub use interpolation::{EscapeStyle, count_placeholders, interpolate, interpolate_with};
pub use registry::DriverRegistry;
pub use results::{ResultInfo, ResultSet, Row};
pub use statement::Statement;
pub use types::{BindValue, DecodedValue, OtherValue, ScalarKind, SqlDecimal};
