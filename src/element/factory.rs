//! Element construction.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use crate::driver::Driver;
use crate::selector::SelectorsHandler;
use crate::wait::WaitOptions;

use super::core::ElementContext;
use super::document::DocumentElement;
use super::finder::ElementFinder;
use super::node::NodeElement;

// ============================================================================
// ElementFactory
// ============================================================================

/// Builds [`NodeElement`]s and [`DocumentElement`]s.
///
/// Every element built by a factory, and every element later found through
/// it, inherits the factory's [`WaitOptions`].
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use browser_element::{Element, ElementFactory, SelectorsHandler};
///
/// let element = ElementFactory::new().create_node_element(
///     "//form[@id='login']",
///     driver,
///     Arc::new(SelectorsHandler::new()),
/// );
/// assert_eq!(element.xpath(), "//form[@id='login']");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementFactory {
    options: WaitOptions,
}

impl ElementFactory {
    /// Creates a factory with default wait options.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: WaitOptions::new(),
        }
    }

    /// Creates a factory handing `options` to its elements.
    #[inline]
    #[must_use]
    pub const fn with_options(options: WaitOptions) -> Self {
        Self { options }
    }

    /// Wait options given to built elements.
    #[inline]
    #[must_use]
    pub fn options(&self) -> WaitOptions {
        self.options
    }

    /// Creates a finder bound to `driver` and `selectors`.
    #[must_use]
    pub fn create_finder(
        &self,
        driver: Arc<dyn Driver>,
        selectors: Arc<SelectorsHandler>,
    ) -> Arc<ElementFinder> {
        Arc::new(ElementFinder::new(driver, selectors, *self))
    }

    /// Creates an element whose [`xpath`](super::Element::xpath) is `xpath`.
    #[must_use]
    pub fn create_node_element(
        &self,
        xpath: impl Into<String>,
        driver: Arc<dyn Driver>,
        selectors: Arc<SelectorsHandler>,
    ) -> NodeElement {
        let finder = self.create_finder(Arc::clone(&driver), selectors);
        NodeElement::new(xpath, ElementContext::new(driver, finder, self.options))
    }

    /// Creates the page element.
    #[must_use]
    pub fn create_document_element(
        &self,
        driver: Arc<dyn Driver>,
        selectors: Arc<SelectorsHandler>,
    ) -> DocumentElement {
        let finder = self.create_finder(Arc::clone(&driver), selectors);
        DocumentElement::new(ElementContext::new(driver, finder, self.options))
    }

    /// Wraps a node resolved by `finder`, sharing it.
    pub(crate) fn create_found_element(
        &self,
        xpath: String,
        finder: &Arc<ElementFinder>,
    ) -> NodeElement {
        let context = ElementContext::new(
            Arc::clone(finder.driver()),
            Arc::clone(finder),
            self.options,
        );
        NodeElement::new(xpath, context)
    }
}

// ============================================================================
// Tests
// ============================================================================
