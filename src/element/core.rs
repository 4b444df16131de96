//! The element capability set.
//!
//! [`Element`] provides every query, content and wait operation on top of
//! two required methods: [`Element::xpath`] (where the element is) and
//! [`Element::context`] (who answers queries about it).
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use browser_element::Element;
//!
//! let page = session.page();
//! if page.has("css", "#cookie-banner").await? {
//!     let banner = page.find("css", "#cookie-banner").await?;
//! }
//!
//! // Poll until the results list is rendered, or give up after 5 seconds.
//! let results = page
//!     .wait_for(Duration::from_secs(5), |page| async move {
//!         page.find_all("css", "ul.results > li").await
//!     })
//!     .await?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::driver::Driver;
use crate::error::Result;
use crate::selector::By;
use crate::wait::{self, Truthy, WaitOptions};

use super::finder::ElementFinder;
use super::node::NodeElement;

// ============================================================================
// ElementContext
// ============================================================================

/// Collaborators an element delegates to.
///
/// Cloning is cheap: driver and finder are shared.
#[derive(Clone)]
pub struct ElementContext {
    driver: Arc<dyn Driver>,
    finder: Arc<ElementFinder>,
    options: WaitOptions,
}

impl fmt::Debug for ElementContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementContext")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl ElementContext {
    /// Creates a context.
    pub fn new(driver: Arc<dyn Driver>, finder: Arc<ElementFinder>, options: WaitOptions) -> Self {
        Self {
            driver,
            finder,
            options,
        }
    }

    /// Driver answering content and validity queries.
    #[inline]
    #[must_use]
    pub fn driver(&self) -> &Arc<dyn Driver> {
        &self.driver
    }

    /// Finder answering descendant lookups.
    #[inline]
    #[must_use]
    pub fn finder(&self) -> &Arc<ElementFinder> {
        &self.finder
    }

    /// Polling configuration for waits.
    #[inline]
    #[must_use]
    pub fn options(&self) -> WaitOptions {
        self.options
    }
}

// ============================================================================
// Element
// ============================================================================

/// Query, content and wait operations scoped to one document position.
///
/// Implementors only report their path and their context. Every operation
/// delegates to the driver or the finder and returns their errors as-is.
#[async_trait]
pub trait Element: Send + Sync {
    /// XPath expression locating this element.
    fn xpath(&self) -> &str;

    /// Driver, finder and options this element delegates to.
    fn context(&self) -> &ElementContext;

    /// The bound driver.
    fn driver(&self) -> &Arc<dyn Driver> {
        self.context().driver()
    }

    /// Returns `true` if [`find`](Self::find) yields a match.
    async fn has(&self, selector: &str, locator: &str) -> Result<bool> {
        Ok(self.find(selector, locator).await?.is_some())
    }

    /// Returns `true` if this element's path resolves to exactly one node.
    ///
    /// Zero nodes means the element is gone; several means the path no
    /// longer identifies it.
    async fn is_valid(&self) -> Result<bool> {
        let nodes = self.driver().find(self.xpath()).await?;
        Ok(nodes.len() == 1)
    }

    /// First descendant matching `selector`/`locator`.
    async fn find(&self, selector: &str, locator: &str) -> Result<Option<NodeElement>> {
        Ok(self.find_all(selector, locator).await?.into_iter().next())
    }

    /// Every descendant matching `selector`/`locator`, in finder order.
    async fn find_all(&self, selector: &str, locator: &str) -> Result<Vec<NodeElement>> {
        debug!(xpath = %self.xpath(), selector, locator, "Finding elements");
        self.context()
            .finder()
            .find_all(selector, locator, self.xpath())
            .await
    }

    /// [`find`](Self::find) with a typed locator. Plain strings are CSS.
    async fn find_by<B>(&self, by: B) -> Result<Option<NodeElement>>
    where
        B: Into<By> + Send,
    {
        let by = by.into();
        self.find(by.strategy(), by.value()).await
    }

    /// [`find_all`](Self::find_all) with a typed locator. Plain strings are
    /// CSS.
    async fn find_all_by<B>(&self, by: B) -> Result<Vec<NodeElement>>
    where
        B: Into<By> + Send,
    {
        let by = by.into();
        self.find_all(by.strategy(), by.value()).await
    }

    /// Text content, as reported by the driver.
    async fn get_text(&self) -> Result<String> {
        self.driver().get_text(self.xpath()).await
    }

    /// Inner HTML, as reported by the driver.
    async fn get_html(&self) -> Result<String> {
        self.driver().get_html(self.xpath()).await
    }

    /// Outer HTML, as reported by the driver.
    async fn get_outer_html(&self) -> Result<String> {
        self.driver().get_outer_html(self.xpath()).await
    }

    /// Polls `predicate` with this element until it returns a truthy value.
    ///
    /// The predicate runs at least once. Between runs the wait sleeps the
    /// configured poll interval (100ms by default). When `timeout` runs out
    /// the last, falsy, result is returned rather than an error. An error
    /// from the predicate ends the wait and is returned.
    async fn wait_for<F, Fut, T>(&self, timeout: Duration, predicate: F) -> Result<T>
    where
        Self: Clone + Sized,
        F: FnMut(Self) -> Fut + Send,
        Fut: Future<Output = Result<T>> + Send,
        T: Truthy + Send,
    {
        debug!(
            xpath = %self.xpath(),
            timeout_ms = timeout.as_millis() as u64,
            "Waiting on element"
        );

        let element = self.clone();
        let mut predicate = predicate;
        wait::poll_until(
            timeout,
            self.context().options().poll_interval(),
            move || predicate(element.clone()),
        )
        .await
    }

    /// [`wait_for`](Self::wait_for) with a timeout in fractional seconds.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) for a NaN or
    /// infinite timeout, before the predicate runs. Negative timeouts run
    /// the predicate once.
    async fn wait_for_secs<F, Fut, T>(&self, timeout_secs: f64, predicate: F) -> Result<T>
    where
        Self: Clone + Sized,
        F: FnMut(Self) -> Fut + Send,
        Fut: Future<Output = Result<T>> + Send,
        T: Truthy + Send,
    {
        let timeout = wait::timeout_from_secs(timeout_secs)?;
        self.wait_for(timeout, predicate).await
    }
}

// ============================================================================
// Tests
// ============================================================================
