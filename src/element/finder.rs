//! Descendant lookups.
//!
//! A lookup is resolved in three steps:
//!
//! 1. the [`SelectorsHandler`] translates `selector`/`locator` to XPath,
//! 2. the expression is scoped under the searching element's path,
//! 3. the driver resolves it to one path per node, each wrapped in a
//!    [`NodeElement`] by the [`ElementFactory`].

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::driver::Driver;
use crate::error::Result;
use crate::selector::SelectorsHandler;
use crate::xpath;

use super::factory::ElementFactory;
use super::node::NodeElement;

// ============================================================================
// ElementFinder
// ============================================================================

/// Resolves selector lookups into [`NodeElement`]s.
pub struct ElementFinder {
    driver: Arc<dyn Driver>,
    selectors: Arc<SelectorsHandler>,
    factory: ElementFactory,
}

impl fmt::Debug for ElementFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementFinder")
            .field("selectors", &self.selectors)
            .field("factory", &self.factory)
            .finish_non_exhaustive()
    }
}

impl ElementFinder {
    /// Creates a finder.
    pub fn new(
        driver: Arc<dyn Driver>,
        selectors: Arc<SelectorsHandler>,
        factory: ElementFactory,
    ) -> Self {
        Self {
            driver,
            selectors,
            factory,
        }
    }

    /// Driver resolving the scoped expressions.
    #[inline]
    #[must_use]
    pub fn driver(&self) -> &Arc<dyn Driver> {
        &self.driver
    }

    /// Registry translating selectors.
    #[inline]
    #[must_use]
    pub fn selectors_handler(&self) -> &Arc<SelectorsHandler> {
        &self.selectors
    }

    /// Finds every node matching `selector`/`locator` under `scope_xpath`.
    ///
    /// Elements come back in the order the driver reported them and share
    /// this finder.
    ///
    /// # Errors
    ///
    /// Selector translation errors and driver errors, unchanged.
    pub async fn find_all(
        self: &Arc<Self>,
        selector: &str,
        locator: &str,
        scope_xpath: &str,
    ) -> Result<Vec<NodeElement>> {
        let expression = self.selectors.selector_to_xpath(selector, locator)?;
        let expression = xpath::prepend(&expression, scope_xpath);

        let nodes = self.driver.find(&expression).await?;
        debug!(
            selector,
            locator,
            xpath = %expression,
            count = nodes.len(),
            "Resolved elements"
        );

        Ok(nodes
            .into_iter()
            .map(|node| self.factory.create_found_element(node, self))
            .collect())
    }
}

// ============================================================================
// Tests
// ============================================================================
