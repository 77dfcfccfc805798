use std::borrow::Cow;

use async_trait::async_trait;

use crate::error::SqlInterpolateError;
use crate::interpolation::{EscapeStyle, interpolate_with};
use crate::results::ResultSet;
use crate::statement::{EmulatedStatementExecutor, Statement};
use crate::types::BindValue;

/// A backend driver.
///
/// Drivers own their wire protocol. Those without native bind parameters call
/// [`Driver::interpolate`] from `execute` to inline the values using their own `quote`:
/// ```rust
/// use async_trait::async_trait;
/// use sql_interpolate::prelude::*;
///
/// struct EchoDriver;
///
/// #[async_trait]
/// impl Driver for EchoDriver {
///     async fn open(&self) -> Result<bool, SqlInterpolateError> { Ok(true) }
///     fn is_open(&self) -> bool { true }
///     async fn close(&self) -> Result<bool, SqlInterpolateError> { Ok(true) }
///
///     async fn execute(
///         &self,
///         sql: &str,
///         binds: &[BindValue],
///     ) -> Result<ResultSet, SqlInterpolateError> {
///         let sql = self.interpolate(sql, binds)?;
///         let mut rs = ResultSet::with_columns(vec!["sql".to_string()]);
///         rs.add_row_values(vec![DecodedValue::Text(sql.into_owned())])?;
///         Ok(rs)
///     }
///
///     fn quote(&self, text: &str) -> String { quote_standard(text) }
/// }
/// ```
#[async_trait]
pub trait Driver: Send + Sync {
    /// Open the backend connection if it is not open yet.
    ///
    /// `Ok(false)` means the driver could not open but has no error to report.
    ///
    /// # Errors
    /// Returns `SqlInterpolateError` if the backend refused the connection.
    async fn open(&self) -> Result<bool, SqlInterpolateError>;

    fn is_open(&self) -> bool;

    /// # Errors
    /// Returns `SqlInterpolateError` if the backend failed to close cleanly.
    async fn close(&self) -> Result<bool, SqlInterpolateError>;

    /// Run `sql` with `binds` substituted for its `?` placeholders.
    ///
    /// # Errors
    /// Returns `SqlInterpolateError` if interpolation fails or the backend reports an error.
    async fn execute(
        &self,
        sql: &str,
        binds: &[BindValue],
    ) -> Result<ResultSet, SqlInterpolateError>;

    /// Escape `text` for use between single quotes in this backend's dialect.
    fn quote(&self, text: &str) -> String;

    /// How `quote` escapes quotes, so literals it produced are read back as literals.
    fn escape_style(&self) -> EscapeStyle {
        EscapeStyle::Doubled
    }

    /// Prepare `command` for repeated execution.
    ///
    /// The default emulates preparation by handing the command back to `execute` on every
    /// run; drivers with server-side statements should override it.
    ///
    /// # Errors
    /// Returns `SqlInterpolateError` if the backend rejects the statement.
    fn prepare(&self, command: &str) -> Result<Statement<'_>, SqlInterpolateError> {
        Ok(Statement::new(Box::new(EmulatedStatementExecutor::new(
            self, command,
        ))))
    }

    /// Inline `binds` into `sql` with this driver's `quote` and `escape_style`.
    ///
    /// # Errors
    /// Returns `SqlInterpolateError::ArityMismatch` or
    /// `SqlInterpolateError::UnterminatedConstruct`; see [`interpolate_with`].
    fn interpolate<'q>(
        &self,
        sql: &'q str,
        binds: &[BindValue],
    ) -> Result<Cow<'q, str>, SqlInterpolateError> {
        interpolate_with(sql, binds, |text| self.quote(text), self.escape_style())
    }
}

/// Builds a driver for a set of connection options; registered per URI scheme.
pub type DriverFactory = std::sync::Arc<
    dyn Fn(&crate::config::ConnectionOptions) -> Result<Box<dyn Driver>, SqlInterpolateError>
        + Send
        + Sync,
>;
