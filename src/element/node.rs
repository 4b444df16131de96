//! Elements found inside the page.
//!
//! A [`NodeElement`] is addressed by the path its finder resolved it to.
//! Besides the [`Element`] operations it exposes read-only node
//! properties.
//!
//! # Example
//!
//! ```ignore
//! use browser_element::Element;
//!
//! let link = page.find("css", "a.download").await?.expect("download link");
//! let href = link.get_attribute("href").await?;
//! let visible = link.is_visible().await?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::wait::Truthy;

use super::core::{Element, ElementContext};

// ============================================================================
// Types
// ============================================================================

/// Internal shared state for a node element.
struct NodeInner {
    xpath: String,
    context: ElementContext,
}

// ============================================================================
// NodeElement
// ============================================================================

/// A handle to a node inside the page.
#[derive(Clone)]
pub struct NodeElement {
    inner: Arc<NodeInner>,
}

impl fmt::Debug for NodeElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeElement")
            .field("xpath", &self.inner.xpath)
            .finish_non_exhaustive()
    }
}

impl Element for NodeElement {
    fn xpath(&self) -> &str {
        &self.inner.xpath
    }

    fn context(&self) -> &ElementContext {
        &self.inner.context
    }
}

impl Truthy for NodeElement {
    fn is_truthy(&self) -> bool {
        true
    }
}

// ============================================================================
// NodeElement - Constructor
// ============================================================================

impl NodeElement {
    /// Creates a node handle. Use [`ElementFactory`](super::ElementFactory).
    pub(crate) fn new(xpath: impl Into<String>, context: ElementContext) -> Self {
        Self {
            inner: Arc::new(NodeInner {
                xpath: xpath.into(),
                context,
            }),
        }
    }
}

// ============================================================================
// NodeElement - Properties
// ============================================================================

impl NodeElement {
    /// Parent node.
    ///
    /// # Errors
    ///
    /// [`Error::ElementNotFound`] if the node has no parent.
    pub async fn get_parent(&self) -> Result<NodeElement> {
        self.find("xpath", "..")
            .await?
            .ok_or_else(|| Error::element_not_found("xpath", "..", self.xpath()))
    }

    /// Lower-cased tag name.
    pub async fn get_tag_name(&self) -> Result<String> {
        let tag = self.driver().get_tag_name(self.xpath()).await?;
        Ok(tag.to_lowercase())
    }

    /// Attribute value, `None` if absent.
    pub async fn get_attribute(&self, name: &str) -> Result<Option<String>> {
        self.driver().get_attribute(self.xpath(), name).await
    }

    /// Returns `true` if the attribute is present (even if empty).
    pub async fn has_attribute(&self, name: &str) -> Result<bool> {
        Ok(self.get_attribute(name).await?.is_some())
    }

    /// Returns `true` if `class` is one of the node's classes.
    pub async fn has_class(&self, class: &str) -> Result<bool> {
        let classes = self.get_attribute("class").await?;
        let found = classes
            .as_deref()
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class));

        debug!(xpath = %self.xpath(), class, found, "Checked class");
        Ok(found)
    }

    /// Form value (string, list for multi-selects, bool for checkboxes).
    pub async fn get_value(&self) -> Result<Value> {
        self.driver().get_value(self.xpath()).await
    }

    /// Returns `true` if the node is rendered visibly.
    pub async fn is_visible(&self) -> Result<bool> {
        self.driver().is_visible(self.xpath()).await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use tokio_test::{assert_err, assert_ok};

    use crate::driver::mock::MockDriver;
    use crate::element::ElementFactory;
    use crate::selector::SelectorsHandler;

    fn node(xpath: &str, driver: MockDriver) -> NodeElement {
        ElementFactory::new().create_node_element(
            xpath,
            Arc::new(driver),
            Arc::new(SelectorsHandler::new()),
        )
    }

    #[test]
    fn test_node_element_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<NodeElement>();
    }

    #[test]
    fn test_debug_shows_xpath() {
        let element = node("//main", MockDriver::new());
        assert_eq!(
            format!("{element:?}"),
            "NodeElement { xpath: \"//main\", .. }"
        );
    }

    #[tokio::test]
    async fn test_get_parent() {
        let element = node(
            "//main/p",
            MockDriver::new().with_nodes("//main/p/..", &["(//main/p/..)[1]"]),
        );

        let parent = assert_ok!(element.get_parent().await);
        assert_eq!(parent.xpath(), "(//main/p/..)[1]");
    }

    #[tokio::test]
    async fn test_missing_parent_is_not_found() {
        let element = node("/", MockDriver::new());

        let err = assert_err!(element.get_parent().await);
        assert!(matches!(err, Error::ElementNotFound { .. }));
    }

    #[tokio::test]
    async fn test_tag_name_is_lowercased() {
        let element = node("//main", MockDriver::new().with_tag_name("//main", "MAIN"));
        assert_eq!(assert_ok!(element.get_tag_name().await), "main");
    }

    #[tokio::test]
    async fn test_attributes() {
        let element = node(
            "//input",
            MockDriver::new()
                .with_attribute("//input", "required", "")
                .with_attribute("//input", "class", " form-control  is-invalid "),
        );

        assert!(assert_ok!(element.has_attribute("required").await));
        assert!(!assert_ok!(element.has_attribute("disabled").await));
        assert_eq!(
            assert_ok!(element.get_attribute("required").await).as_deref(),
            Some("")
        );
        assert!(assert_ok!(element.has_class("is-invalid").await));
        assert!(!assert_ok!(element.has_class("invalid").await));
    }

    #[tokio::test]
    async fn test_visibility() {
        let element = node("//dialog", MockDriver::new().with_visible("//dialog", false));
        assert!(!assert_ok!(element.is_visible().await));
    }

    #[tokio::test]
    async fn test_unsupported_action_passes_through() {
        let element = node("//input", MockDriver::new());

        let err = assert_err!(element.get_value().await);
        assert!(
            matches!(err, Error::UnsupportedDriverAction { ref action } if action == "get_value")
        );
    }
}
