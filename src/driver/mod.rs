//! Driver module.
//!
//! The [`Driver`] trait is the seam between element wrappers and the
//! automation backend that actually talks to a browser.
//!
//! # Implementing a driver
//!
//! ```
//! use async_trait::async_trait;
//! use browser_element::{Driver, Result};
//!
//! struct StaticPage;
//!
//! #[async_trait]
//! impl Driver for StaticPage {
//!     async fn find(&self, xpath: &str) -> Result<Vec<String>> {
//!         Ok(vec![format!("({xpath})[1]")])
//!     }
//!
//!     async fn get_text(&self, _xpath: &str) -> Result<String> {
//!         Ok("Hello".into())
//!     }
//!
//!     async fn get_html(&self, _xpath: &str) -> Result<String> {
//!         Ok("Hello".into())
//!     }
//!
//!     async fn get_outer_html(&self, _xpath: &str) -> Result<String> {
//!         Ok("<h1>Hello</h1>".into())
//!     }
//! }
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Driver trait.
pub mod core;

#[cfg(test)]
pub(crate) mod mock;

// ============================================================================
// Re-exports
// ============================================================================

pub use self::core::Driver;
