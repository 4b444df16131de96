//! Browser Element - XPath-addressed element wrappers for browser automation.
//!
//! This library provides the element layer of a browser automation stack:
//! typed handles to page nodes that find descendants, read content and wait
//! for conditions, on top of any backend implementing [`Driver`].
//!
//! # Architecture
//!
//! - **Driver (backend)**: resolves XPath expressions and reads node data
//! - **Selectors**: named engines translate `(selector, locator)` to XPath
//! - **Elements**: a path plus a shared context; queries are re-run each time
//!
//! Key design principles:
//!
//! - Elements hold no live references, only paths
//! - Descendant lookups are scoped by prefixing the parent path, unions included
//! - Waits poll with a fixed sleep and return the last result on timeout
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use browser_element::{Element, Result, Session};
//!
//! async fn login(driver: Arc<dyn browser_element::Driver>) -> Result<()> {
//!     let session = Session::new(driver);
//!     session.visit("https://example.com/login").await?;
//!
//!     let page = session.page();
//!     let form = page
//!         .wait_for(Duration::from_secs(5), |page| async move {
//!             page.find("css", "form#login").await
//!         })
//!         .await?;
//!
//!     if let Some(form) = form {
//!         println!("{}", form.get_outer_html().await?);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`driver`] | The [`Driver`] backend trait |
//! | [`element`] | [`Element`], [`NodeElement`], [`DocumentElement`], factory and finder |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`selector`] | [`By`] strategies and the [`SelectorsHandler`] registry |
//! | [`session`] | [`Session`] entry point and its builder |
//! | [`wait`] | Polling loop, [`WaitOptions`] and [`Truthy`] |
//! | [`xpath`] | Expression scoping and literal escaping |

// ============================================================================
// Modules
// ============================================================================

/// Automation backend trait.
pub mod driver;

/// Element wrappers.
///
/// - [`Element`] - Query, content and wait operations
/// - [`NodeElement`] - A node inside the page
/// - [`DocumentElement`] - The page root
pub mod element;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Selector translation.
pub mod selector;

/// Session entry point.
///
/// Use [`Session::builder()`] to configure one.
pub mod session;

/// Polling waits.
pub mod wait;

/// XPath helpers.
pub mod xpath;

// ============================================================================
// Re-exports
// ============================================================================

// Driver
pub use driver::Driver;

// Element types
pub use element::{
    DOCUMENT_XPATH, DocumentElement, Element, ElementContext, ElementFactory, ElementFinder,
    NodeElement,
};

// Error types
pub use error::{Error, Result};

// Selector types
pub use selector::{By, SelectorEngine, SelectorsHandler, StrategyEngine};

// Session types
pub use session::{Session, SessionBuilder};

// Wait types
pub use wait::{Truthy, WaitOptions};
