//! Error types for browser-element.
//!
//! This module defines all error types used throughout the crate.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```ignore
//! use browser_element::{Element, Result, Session};
//!
//! async fn example(session: &Session) -> Result<()> {
//!     let heading = session.page().find("css", "h1").await?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`] |
//! | Arguments | [`Error::InvalidArgument`] |
//! | Selector | [`Error::UnknownSelector`], [`Error::InvalidSelector`] |
//! | Driver | [`Error::Driver`], [`Error::UnsupportedDriverAction`] |
//! | Element | [`Error::ElementNotFound`] |
//!
//! Errors raised by a [`Driver`](crate::driver::Driver) implementation are
//! returned to the caller as-is; nothing in this crate retries or rewraps them.

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use thiserror::Error;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when a session builder is missing required parts.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    // ========================================================================
    // Argument Errors
    // ========================================================================
    /// Invalid argument passed to an operation.
    ///
    /// Returned by wait operations given an unusable timeout.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument.
        message: String,
    },

    // ========================================================================
    // Selector Errors
    // ========================================================================
    /// No selector engine registered under this name.
    #[error("Unknown selector: {selector}")]
    UnknownSelector {
        /// The requested selector name.
        selector: String,
    },

    /// Locator cannot be translated by its selector engine.
    #[error("Invalid {selector} selector '{locator}': {message}")]
    InvalidSelector {
        /// Selector engine name.
        selector: String,
        /// The offending locator.
        locator: String,
        /// Why translation failed.
        message: String,
    },

    // ========================================================================
    // Driver Errors
    // ========================================================================
    /// Failure reported by a driver implementation.
    #[error("Driver error: {message}")]
    Driver {
        /// Description of the driver failure.
        message: String,
    },

    /// The driver does not implement this action.
    #[error("Driver does not support action: {action}")]
    UnsupportedDriverAction {
        /// Name of the unsupported action.
        action: String,
    },

    // ========================================================================
    // Element Errors
    // ========================================================================
    /// Element lookup returned no match where one was required.
    #[error("Element not found: {selector}={locator} within {xpath}")]
    ElementNotFound {
        /// Selector engine name.
        selector: String,
        /// Locator used.
        locator: String,
        /// Scope the search ran in.
        xpath: String,
    },
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates an invalid argument error.
    #[inline]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates an unknown selector error.
    #[inline]
    pub fn unknown_selector(selector: impl Into<String>) -> Self {
        Self::UnknownSelector {
            selector: selector.into(),
        }
    }

    /// Creates an invalid selector error.
    #[inline]
    pub fn invalid_selector(
        selector: impl Into<String>,
        locator: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            locator: locator.into(),
            message: message.into(),
        }
    }

    /// Creates a driver error.
    #[inline]
    pub fn driver(message: impl Into<String>) -> Self {
        Self::Driver {
            message: message.into(),
        }
    }

    /// Creates an unsupported driver action error.
    #[inline]
    pub fn unsupported_driver_action(action: impl Into<String>) -> Self {
        Self::UnsupportedDriverAction {
            action: action.into(),
        }
    }

    /// Creates an element not found error.
    #[inline]
    pub fn element_not_found(
        selector: impl Into<String>,
        locator: impl Into<String>,
        xpath: impl Into<String>,
    ) -> Self {
        Self::ElementNotFound {
            selector: selector.into(),
            locator: locator.into(),
            xpath: xpath.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is a selector error.
    #[inline]
    #[must_use]
    pub fn is_selector_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownSelector { .. } | Self::InvalidSelector { .. }
        )
    }

    /// Returns `true` if this error came from the driver.
    #[inline]
    #[must_use]
    pub fn is_driver_error(&self) -> bool {
        matches!(
            self,
            Self::Driver { .. } | Self::UnsupportedDriverAction { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
