//! Element wrappers.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Element`] | Query, content and wait operations |
//! | [`NodeElement`] | A node inside the page |
//! | [`DocumentElement`] | The page root (`//html`) |
//! | [`ElementFactory`] | Builds elements from paths |
//! | [`ElementFinder`] | Resolves descendant lookups |
//!
//! Elements never hold live browser references. Each one is a path plus an
//! [`ElementContext`], and every query is re-run against the driver, so a
//! stale element simply stops matching (see [`Element::is_valid`]).

// ============================================================================
// Submodules
// ============================================================================

/// The `Element` trait and its context.
pub mod core;

/// The page root.
pub mod document;

/// Element construction.
pub mod factory;

/// Descendant lookups.
pub mod finder;

/// Nodes inside the page.
pub mod node;

// ============================================================================
// Re-exports
// ============================================================================

pub use self::core::{Element, ElementContext};
pub use document::{DOCUMENT_XPATH, DocumentElement};
pub use factory::ElementFactory;
pub use finder::ElementFinder;
pub use node::NodeElement;
