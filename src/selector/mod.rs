//! Selectors: turning a `(selector, locator)` pair into XPath.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`By`] | Typed locator strategy |
//! | [`SelectorsHandler`] | Registry of named engines |
//! | [`SelectorEngine`] | Locator to XPath translator |
//!
//! # Example
//!
//! ```
//! use browser_element::{By, SelectorsHandler};
//!
//! let handler = SelectorsHandler::new();
//! let by = By::class("error");
//!
//! assert_eq!(
//!     handler.selector_to_xpath(by.strategy(), by.value()).unwrap(),
//!     by.to_xpath().unwrap(),
//! );
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Locator strategies.
pub mod by;

/// CSS to XPath translation.
pub mod css;

/// Named engine registry.
pub mod handler;

// ============================================================================
// Re-exports
// ============================================================================

pub use by::By;
pub use handler::{SelectorEngine, SelectorsHandler, StrategyEngine};
