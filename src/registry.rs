use std::sync::Arc;

use tracing::debug;

use crate::config::ConnectionOptions;
use crate::connection::Connection;
use crate::driver::{Driver, DriverFactory};
use crate::error::SqlInterpolateError;

/// Maps URI schemes to driver factories.
///
/// The registry is an ordinary value: build one, register the drivers the application links
/// in, and pass it to whatever opens connections.
/// ```rust,no_run
/// # use sql_interpolate::prelude::*;
/// # async fn demo(make_driver: fn(&ConnectionOptions) -> Box<dyn Driver>) -> Result<(), SqlInterpolateError> {
/// let mut registry = DriverRegistry::new();
/// registry.register("mydb", move |opts| Ok(make_driver(opts)));
///
/// let conn = registry.connect_uri("mydb://localhost/app").await?;
/// # let _ = conn;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct DriverRegistry {
    drivers: Vec<(String, DriverFactory)>,
}

impl DriverRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` for `scheme`. Registering a scheme again replaces its factory but
    /// keeps its original position.
    pub fn register<F>(&mut self, scheme: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&ConnectionOptions) -> Result<Box<dyn Driver>, SqlInterpolateError>
            + Send
            + Sync
            + 'static,
    {
        let scheme = scheme.into();
        let factory: DriverFactory = Arc::new(factory);
        match self.drivers.iter_mut().find(|(name, _)| *name == scheme) {
            Some(entry) => entry.1 = factory,
            None => {
                debug!(scheme = %scheme, "driver registered");
                self.drivers.push((scheme, factory));
            }
        }
        self
    }

    /// Remove `scheme`, returning whether it was registered.
    pub fn unregister(&mut self, scheme: &str) -> bool {
        let before = self.drivers.len();
        self.drivers.retain(|(name, _)| name != scheme);
        self.drivers.len() != before
    }

    #[must_use]
    pub fn is_registered(&self, scheme: &str) -> bool {
        self.factory(scheme).is_some()
    }

    /// Registered schemes in registration order.
    pub fn schemes(&self) -> impl Iterator<Item = &str> {
        self.drivers.iter().map(|(name, _)| name.as_str())
    }

    fn factory(&self, scheme: &str) -> Option<&DriverFactory> {
        self.drivers
            .iter()
            .find(|(name, _)| name == scheme)
            .map(|(_, factory)| factory)
    }

    /// Build, but do not open, the driver for `options.driver`.
    ///
    /// # Errors
    /// Returns `SqlInterpolateError::UnregisteredDriver` for an unknown scheme, or the
    /// factory's own error.
    pub fn instantiate(&self, options: &ConnectionOptions) -> Result<Box<dyn Driver>, SqlInterpolateError> {
        let factory = self
            .factory(&options.driver)
            .ok_or_else(|| SqlInterpolateError::UnregisteredDriver(options.driver.clone()))?;
        factory(options)
    }

    /// Build the driver for `options` and open a connection with it.
    ///
    /// # Errors
    /// Returns `SqlInterpolateError::UnregisteredDriver` for an unknown scheme, or
    /// `SqlInterpolateError::ConnectionError` if the driver does not open.
    pub async fn connect(&self, options: ConnectionOptions) -> Result<Connection, SqlInterpolateError> {
        let driver = self.instantiate(&options)?;
        Connection::establish(options, driver).await
    }

    /// [`connect`](Self::connect) with options parsed from a URI.
    ///
    /// # Errors
    /// Returns `SqlInterpolateError::ConfigError` for a malformed URI, otherwise as
    /// [`connect`](Self::connect).
    pub async fn connect_uri(&self, uri: &str) -> Result<Connection, SqlInterpolateError> {
        self.connect(ConnectionOptions::parse(uri)?).await
    }
}

// Manual Debug implementation because driver factories are closures
impl std::fmt::Debug for DriverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.schemes()).finish()
    }
}
