//! XPath helpers.
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`prepend`] | Scope an expression (unions included) under a parent path |
//! | [`escape_literal`] | Quote a string for use inside an expression |

// ============================================================================
// Submodules
// ============================================================================

/// String literal escaping.
pub mod escape;

/// Expression scoping.
pub mod manipulator;

// ============================================================================
// Re-exports
// ============================================================================

pub use escape::escape_literal;
pub use manipulator::{prepend, split_union};
