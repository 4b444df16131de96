//! The page root.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::wait::Truthy;

use super::core::{Element, ElementContext};

// ============================================================================
// Constants
// ============================================================================

/// Path of the document root.
pub const DOCUMENT_XPATH: &str = "//html";

// ============================================================================
// DocumentElement
// ============================================================================

/// The whole page, rooted at `//html`.
#[derive(Clone)]
pub struct DocumentElement {
    context: Arc<ElementContext>,
}

impl fmt::Debug for DocumentElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentElement")
            .field("xpath", &DOCUMENT_XPATH)
            .finish_non_exhaustive()
    }
}

impl Element for DocumentElement {
    fn xpath(&self) -> &str {
        DOCUMENT_XPATH
    }

    fn context(&self) -> &ElementContext {
        &self.context
    }
}

impl Truthy for DocumentElement {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl DocumentElement {
    /// Creates the page element. Use [`ElementFactory`](super::ElementFactory).
    pub(crate) fn new(context: ElementContext) -> Self {
        Self {
            context: Arc::new(context),
        }
    }

    /// Full page source.
    pub async fn get_content(&self) -> Result<String> {
        self.driver().get_content().await
    }

    /// Returns `true` if some node's text contains `content`.
    pub async fn has_content(&self, content: &str) -> Result<bool> {
        self.has("partialText", content).await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use tokio_test::assert_ok;

    use crate::driver::mock::MockDriver;
    use crate::element::ElementFactory;
    use crate::selector::SelectorsHandler;

    fn document(driver: MockDriver) -> (Arc<MockDriver>, DocumentElement) {
        let driver = Arc::new(driver);
        let page = ElementFactory::new()
            .create_document_element(driver.clone(), Arc::new(SelectorsHandler::new()));
        (driver, page)
    }

    #[test]
    fn test_xpath_is_root() {
        let (_, page) = document(MockDriver::new());
        assert_eq!(page.xpath(), "//html");
    }

    #[tokio::test]
    async fn test_get_content() {
        let (_, page) = document(MockDriver::new().with_content("<html></html>"));
        assert_eq!(assert_ok!(page.get_content().await), "<html></html>");
    }

    #[tokio::test]
    async fn test_has_content_searches_text() {
        let (driver, page) = document(MockDriver::new().with_nodes(
            "//html/descendant-or-self::*[contains(normalize-space(string(.)), 'Welcome back')]",
            &["//html", "//html/body"],
        ));

        assert!(assert_ok!(page.has_content("Welcome back").await));
        assert!(!assert_ok!(page.has_content("Goodbye").await));
        assert_eq!(driver.calls().len(), 2);
    }
}
