//! Session: one driver plus the page element built on it.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use browser_element::{Element, Session};
//!
//! let session = Session::builder()
//!     .driver(driver)
//!     .poll_interval(Duration::from_millis(50))
//!     .build()?;
//!
//! session.visit("https://example.com/login").await?;
//! session
//!     .wait(Duration::from_secs(5), "document.readyState === 'complete'")
//!     .await?;
//!
//! let form = session.page().find("id", "login").await?;
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Builder pattern for session configuration.
pub mod builder;

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::driver::Driver;
use crate::element::{DocumentElement, ElementFactory};
use crate::error::Result;
use crate::selector::SelectorsHandler;
use crate::wait::{self, Truthy, WaitOptions};

pub use builder::SessionBuilder;

// ============================================================================
// Session
// ============================================================================

/// Entry point tying a driver, a selector registry and wait options
/// together.
///
/// Cloning is cheap and clones share the driver and the registry.
#[derive(Clone)]
pub struct Session {
    driver: Arc<dyn Driver>,
    selectors: Arc<SelectorsHandler>,
    factory: ElementFactory,
    page: DocumentElement,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("selectors", &self.selectors)
            .field("options", &self.factory.options())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Session - Constructors
// ============================================================================

impl Session {
    /// Creates a session with the built-in selector engines and default
    /// wait options.
    #[must_use]
    pub fn new(driver: Arc<dyn Driver>) -> Self {
        Self::with_parts(
            driver,
            Arc::new(SelectorsHandler::new()),
            WaitOptions::default(),
        )
    }

    /// Creates a session builder.
    #[inline]
    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub(crate) fn with_parts(
        driver: Arc<dyn Driver>,
        selectors: Arc<SelectorsHandler>,
        options: WaitOptions,
    ) -> Self {
        let factory = ElementFactory::with_options(options);
        let page = factory.create_document_element(Arc::clone(&driver), Arc::clone(&selectors));

        Self {
            driver,
            selectors,
            factory,
            page,
        }
    }
}

// ============================================================================
// Session - Accessors
// ============================================================================

impl Session {
    /// The page element.
    #[inline]
    #[must_use]
    pub fn page(&self) -> &DocumentElement {
        &self.page
    }

    /// The bound driver.
    #[inline]
    #[must_use]
    pub fn driver(&self) -> &Arc<dyn Driver> {
        &self.driver
    }

    /// The selector registry. Engines registered here are visible to every
    /// element of the session.
    #[inline]
    #[must_use]
    pub fn selectors_handler(&self) -> &Arc<SelectorsHandler> {
        &self.selectors
    }

    /// Factory building elements bound to this session.
    #[inline]
    #[must_use]
    pub fn element_factory(&self) -> &ElementFactory {
        &self.factory
    }

    /// Wait options shared by the session's elements.
    #[inline]
    #[must_use]
    pub fn options(&self) -> WaitOptions {
        self.factory.options()
    }
}

// ============================================================================
// Session - Navigation & Scripts
// ============================================================================

impl Session {
    /// Navigates to `url`.
    pub async fn visit(&self, url: &str) -> Result<()> {
        debug!(url, "Visiting page");
        self.driver.visit(url).await
    }

    /// URL of the current page.
    pub async fn current_url(&self) -> Result<String> {
        self.driver.get_current_url().await
    }

    /// Evaluates `script` and returns its JSON value.
    pub async fn evaluate_script(&self, script: &str) -> Result<Value> {
        self.driver.evaluate_script(script).await
    }

    /// Re-evaluates `condition` until it yields a truthy value or `timeout`
    /// elapses.
    ///
    /// Returns whether the last evaluation was truthy.
    ///
    /// # Errors
    ///
    /// Driver errors end the wait and are returned.
    pub async fn wait(&self, timeout: Duration, condition: &str) -> Result<bool> {
        debug!(condition, timeout_ms = timeout.as_millis() as u64, "Waiting on script");

        let last = wait::poll_until(timeout, self.options().poll_interval(), || {
            self.driver.evaluate_script(condition)
        })
        .await?;

        Ok(last.is_truthy())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;
    use tokio::time::Instant;
    use tokio_test::{assert_err, assert_ok};

    use crate::driver::mock::MockDriver;
    use crate::element::Element;

    const READY: &str = "document.readyState === 'complete'";

    fn session(driver: MockDriver) -> (Arc<MockDriver>, Session) {
        let driver = Arc::new(driver);
        let session = Session::new(driver.clone());
        (driver, session)
    }

    #[test]
    fn test_new_uses_defaults() {
        let (_, session) = session(MockDriver::new());

        assert_eq!(session.options(), WaitOptions::default());
        assert!(session.selectors_handler().is_registered("css"));
        assert_eq!(session.page().xpath(), "//html");
    }

    #[test]
    fn test_page_shares_session_collaborators() {
        let (_, session) = session(MockDriver::new());
        let page = session.page();

        assert!(Arc::ptr_eq(page.driver(), session.driver()));
        assert!(Arc::ptr_eq(
            page.context().finder().selectors_handler(),
            session.selectors_handler()
        ));
    }

    #[tokio::test]
    async fn test_custom_engine_is_visible_to_page() {
        let (driver, session) = session(MockDriver::new().with_nodes(
            "//html/descendant-or-self::*[@data-test = 'save']",
            &["(//*[@data-test = 'save'])[1]"],
        ));

        session
            .selectors_handler()
            .register("testId", |locator: &str| -> Result<String> {
                Ok(format!("descendant-or-self::*[@data-test = '{locator}']"))
            });

        assert!(assert_ok!(session.page().has("testId", "save").await));
        assert_eq!(driver.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_visit_and_current_url() {
        let (_, session) = session(MockDriver::new());

        assert_ok!(session.visit("https://example.com/").await);
        assert_eq!(
            assert_ok!(session.current_url().await),
            "https://example.com/"
        );
    }

    #[tokio::test]
    async fn test_evaluate_script() {
        let (_, session) = session(
            MockDriver::new().with_script_results("document.title", vec![json!("Inbox")]),
        );

        assert_eq!(
            assert_ok!(session.evaluate_script("document.title").await),
            json!("Inbox")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_returns_true_once_condition_holds() {
        let (driver, session) = session(MockDriver::new().with_script_results(
            READY,
            vec![json!(false), json!(false), json!(true)],
        ));
        let start = Instant::now();

        assert!(assert_ok!(session.wait(Duration::from_secs(5), READY).await));
        assert_eq!(driver.calls().len(), 3);
        assert_eq!(start.elapsed(), Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_times_out_with_false() {
        let (driver, session) =
            session(MockDriver::new().with_script_results(READY, vec![json!(null)]));

        assert!(!assert_ok!(session.wait(Duration::from_millis(500), READY).await));
        assert_eq!(driver.calls().len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_propagates_driver_errors() {
        let (_, session) = session(MockDriver::new().failing("script timeout"));

        let err = assert_err!(session.wait(Duration::from_secs(1), READY).await);
        assert!(err.is_driver_error());
    }
}
