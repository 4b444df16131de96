//! Driver abstraction.
//!
//! A driver executes queries against the live document. Nodes are
//! addressed by XPath: [`Driver::find`] returns one path per matching node,
//! and every other query takes such a path.

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Error, Result};

// ============================================================================
// Driver
// ============================================================================

/// Browser automation backend.
///
/// Only the four content queries are required. The remaining actions
/// default to [`Error::UnsupportedDriverAction`] so that partial backends
/// (static HTML parsers, recorded fixtures) can still be plugged in.
///
/// Errors are returned to callers untouched.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Resolves `xpath` to one path per matching node, in document order.
    async fn find(&self, xpath: &str) -> Result<Vec<String>>;

    /// Visible text of the node at `xpath`.
    async fn get_text(&self, xpath: &str) -> Result<String>;

    /// Inner HTML of the node at `xpath`.
    async fn get_html(&self, xpath: &str) -> Result<String>;

    /// Outer HTML of the node at `xpath`.
    async fn get_outer_html(&self, xpath: &str) -> Result<String>;

    /// Tag name of the node at `xpath`.
    async fn get_tag_name(&self, _xpath: &str) -> Result<String> {
        Err(Error::unsupported_driver_action("get_tag_name"))
    }

    /// Attribute value, `None` if the attribute is absent.
    async fn get_attribute(&self, _xpath: &str, _name: &str) -> Result<Option<String>> {
        Err(Error::unsupported_driver_action("get_attribute"))
    }

    /// Form value of the node at `xpath`.
    async fn get_value(&self, _xpath: &str) -> Result<Value> {
        Err(Error::unsupported_driver_action("get_value"))
    }

    /// Whether the node at `xpath` is rendered visibly.
    async fn is_visible(&self, _xpath: &str) -> Result<bool> {
        Err(Error::unsupported_driver_action("is_visible"))
    }

    /// Navigates to `url`.
    async fn visit(&self, _url: &str) -> Result<()> {
        Err(Error::unsupported_driver_action("visit"))
    }

    /// URL of the current page.
    async fn get_current_url(&self) -> Result<String> {
        Err(Error::unsupported_driver_action("get_current_url"))
    }

    /// Full source of the current page.
    async fn get_content(&self) -> Result<String> {
        Err(Error::unsupported_driver_action("get_content"))
    }

    /// Evaluates a script expression and returns its value.
    async fn evaluate_script(&self, _script: &str) -> Result<Value> {
        Err(Error::unsupported_driver_action("evaluate_script"))
    }
}

// ============================================================================
// Tests
// ============================================================================
