//! Builder pattern for session configuration.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use async_trait::async_trait;
//! use browser_element::{Driver, Result, Session};
//!
//! struct Blank;
//!
//! #[async_trait]
//! impl Driver for Blank {
//!     async fn find(&self, _xpath: &str) -> Result<Vec<String>> {
//!         Ok(Vec::new())
//!     }
//!     async fn get_text(&self, _xpath: &str) -> Result<String> {
//!         Ok(String::new())
//!     }
//!     async fn get_html(&self, _xpath: &str) -> Result<String> {
//!         Ok(String::new())
//!     }
//!     async fn get_outer_html(&self, _xpath: &str) -> Result<String> {
//!         Ok(String::new())
//!     }
//! }
//!
//! # fn example() -> Result<()> {
//! let session = Session::builder()
//!     .driver(Arc::new(Blank))
//!     .poll_interval(Duration::from_millis(50))
//!     .build()?;
//!
//! assert_eq!(session.options().poll_interval_ms, 50);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::driver::Driver;
use crate::error::{Error, Result};
use crate::selector::SelectorsHandler;
use crate::wait::WaitOptions;

use super::Session;

// ============================================================================
// SessionBuilder
// ============================================================================

/// Builder for configuring a [`Session`].
///
/// Use [`Session::builder()`] to create a new builder.
#[derive(Default, Clone)]
pub struct SessionBuilder {
    /// Automation backend.
    driver: Option<Arc<dyn Driver>>,
    /// Selector registry, a fresh one with the built-in engines if unset.
    selectors: Option<Arc<SelectorsHandler>>,
    /// Wait configuration.
    options: WaitOptions,
}

impl fmt::Debug for SessionBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionBuilder")
            .field("has_driver", &self.driver.is_some())
            .field("selectors", &self.selectors)
            .field("options", &self.options)
            .finish()
    }
}

// ============================================================================
// SessionBuilder Implementation
// ============================================================================

impl SessionBuilder {
    /// Creates a new builder with no driver and default options.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the driver. Required.
    #[inline]
    #[must_use]
    pub fn driver(mut self, driver: Arc<dyn Driver>) -> Self {
        self.driver = Some(driver);
        self
    }

    /// Shares an existing selector registry.
    #[inline]
    #[must_use]
    pub fn selectors_handler(mut self, selectors: Arc<SelectorsHandler>) -> Self {
        self.selectors = Some(selectors);
        self
    }

    /// Replaces the wait options.
    #[inline]
    #[must_use]
    pub fn options(mut self, options: WaitOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the sleep between two predicate runs.
    #[inline]
    #[must_use]
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.options = self.options.with_poll_interval(interval);
        self
    }

    /// Builds the session.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if no driver was set.
    pub fn build(self) -> Result<Session> {
        let driver = self.driver.ok_or_else(|| {
            Error::config(
                "A driver is required. Use .driver() to set it.\n\
                 Example: Session::builder().driver(Arc::new(my_driver))",
            )
        })?;
        let selectors = self
            .selectors
            .unwrap_or_else(|| Arc::new(SelectorsHandler::new()));

        Ok(Session::with_parts(driver, selectors, self.options))
    }
}

// ============================================================================
// Tests
// ============================================================================
