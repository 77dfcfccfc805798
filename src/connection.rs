use tracing::info;

use crate::config::ConnectionOptions;
use crate::driver::Driver;
use crate::error::SqlInterpolateError;
use crate::results::ResultSet;
use crate::statement::{Statement, log_outcome};
use crate::types::BindValue;

/// An open connection: the options it was made from plus the driver serving it.
///
/// Obtained from [`DriverRegistry::connect`](crate::registry::DriverRegistry::connect).
/// Every operation delegates to the driver.
pub struct Connection {
    options: ConnectionOptions,
    driver: Box<dyn Driver>,
}

impl Connection {
    /// Wrap `driver` and open it.
    ///
    /// # Errors
    /// Returns `SqlInterpolateError::ConnectionError` if the driver declines to open without
    /// an error of its own, or the driver's error otherwise.
    pub async fn establish(
        options: ConnectionOptions,
        driver: Box<dyn Driver>,
    ) -> Result<Self, SqlInterpolateError> {
        if !driver.open().await? {
            return Err(SqlInterpolateError::ConnectionError(format!(
                "Unable to establish {} connection, but the driver did not provide a reason",
                options.driver
            )));
        }
        info!(
            driver = %options.driver,
            host = options.host.as_deref().unwrap_or(""),
            database = options.database.as_deref().unwrap_or(""),
            "connection opened"
        );
        Ok(Self { options, driver })
    }

    #[must_use]
    pub fn options(&self) -> &ConnectionOptions {
        &self.options
    }

    #[must_use]
    pub fn driver(&self) -> &dyn Driver {
        self.driver.as_ref()
    }

    /// # Errors
    /// Returns the driver's error if reopening fails.
    pub async fn open(&self) -> Result<bool, SqlInterpolateError> {
        self.driver.open().await
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.driver.is_open()
    }

    /// # Errors
    /// Returns the driver's error if closing fails.
    pub async fn close(&self) -> Result<bool, SqlInterpolateError> {
        let closed = self.driver.close().await?;
        if closed {
            info!(driver = %self.options.driver, "connection closed");
        }
        Ok(closed)
    }

    /// Execute `sql`, substituting `binds` for its `?` placeholders.
    ///
    /// # Errors
    /// Returns the driver's error; it is logged before being returned.
    pub async fn execute(
        &self,
        sql: &str,
        binds: &[BindValue],
    ) -> Result<ResultSet, SqlInterpolateError> {
        let res = self.driver.execute(sql, binds).await;
        log_outcome(sql, binds, &res);
        res
    }

    /// # Errors
    /// Returns the driver's error if the statement cannot be prepared.
    pub fn prepare(&self, command: &str) -> Result<Statement<'_>, SqlInterpolateError> {
        self.driver.prepare(command)
    }

    #[must_use]
    pub fn quote(&self, text: &str) -> String {
        self.driver.quote(text)
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("options", &self.options)
            .field("open", &self.driver.is_open())
            .finish_non_exhaustive()
    }
}
