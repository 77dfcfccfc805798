use async_trait::async_trait;
use tracing::{debug, error};

use crate::driver::Driver;
use crate::error::SqlInterpolateError;
use crate::results::ResultSet;
use crate::types::BindValue;

/// Runs one prepared command; wrapped by [`Statement`].
#[async_trait]
pub trait StatementExecutor: Send + Sync {
    fn command(&self) -> &str;

    /// # Errors
    /// Returns `SqlInterpolateError` if the command fails with these binds.
    async fn execute(&self, binds: &[BindValue]) -> Result<ResultSet, SqlInterpolateError>;
}

/// Fallback executor for drivers without server-side prepared statements: every run goes
/// back through `Driver::execute` with the stored command.
pub struct EmulatedStatementExecutor<'a, D: Driver + ?Sized> {
    driver: &'a D,
    command: String,
}

impl<'a, D: Driver + ?Sized> EmulatedStatementExecutor<'a, D> {
    #[must_use]
    pub fn new(driver: &'a D, command: impl Into<String>) -> Self {
        Self {
            driver,
            command: command.into(),
        }
    }

    #[must_use]
    pub fn driver(&self) -> &'a D {
        self.driver
    }
}

#[async_trait]
impl<'a, D: Driver + ?Sized> StatementExecutor for EmulatedStatementExecutor<'a, D> {
    fn command(&self) -> &str {
        &self.command
    }

    async fn execute(&self, binds: &[BindValue]) -> Result<ResultSet, SqlInterpolateError> {
        self.driver.execute(&self.command, binds).await
    }
}

/// A prepared statement.
pub struct Statement<'a> {
    executor: Box<dyn StatementExecutor + 'a>,
}

impl<'a> Statement<'a> {
    #[must_use]
    pub fn new(executor: Box<dyn StatementExecutor + 'a>) -> Self {
        Self { executor }
    }

    #[must_use]
    pub fn command(&self) -> &str {
        self.executor.command()
    }

    /// Execute the command with `binds` in place of its `?` placeholders.
    ///
    /// # Errors
    /// Returns whatever error the executor reports; it is logged before being returned.
    pub async fn execute(&self, binds: &[BindValue]) -> Result<ResultSet, SqlInterpolateError> {
        let res = self.executor.execute(binds).await;
        log_outcome(self.command(), binds, &res);
        res
    }
}

impl std::fmt::Debug for Statement<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Statement")
            .field("command", &self.command())
            .finish_non_exhaustive()
    }
}

pub(crate) fn log_outcome(
    command: &str,
    binds: &[BindValue],
    res: &Result<ResultSet, SqlInterpolateError>,
) {
    match res {
        Ok(_) if binds.is_empty() => debug!(sql = command, "executed"),
        Ok(_) => debug!(sql = command, binds = ?binds, "executed"),
        Err(err) => error!(sql = command, error = %err, "execution failed"),
    }
}
