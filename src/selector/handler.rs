//! Selector engine registry.
//!
//! A selector is the name of an engine; the locator is that engine's input.
//! The handler looks the engine up and asks it for an XPath expression.
//!
//! # Example
//!
//! ```
//! use browser_element::SelectorsHandler;
//!
//! let handler = SelectorsHandler::new();
//! assert_eq!(handler.selector_to_xpath("xpath", "//h1").unwrap(), "//h1");
//! assert!(handler.selector_to_xpath("named", "link").is_err());
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::error::{Error, Result};

use super::by::By;

// ============================================================================
// SelectorEngine
// ============================================================================

/// Translates a locator into an XPath expression.
///
/// The returned expression is relative; the finder scopes it under the
/// searching element's path.
pub trait SelectorEngine: Send + Sync {
    /// Translates `locator` to XPath.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSelector`] if the locator is not valid for this engine.
    fn translate_to_xpath(&self, locator: &str) -> Result<String>;
}

impl<F> SelectorEngine for F
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn translate_to_xpath(&self, locator: &str) -> Result<String> {
        self(locator)
    }
}

/// Engine backed by one [`By`] strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyEngine {
    strategy: &'static str,
}

impl StrategyEngine {
    /// Creates the engine for a [`By`] strategy name.
    ///
    /// Returns `None` if `strategy` is not one of [`By::STRATEGIES`].
    #[must_use]
    pub fn new(strategy: &str) -> Option<Self> {
        By::STRATEGIES
            .iter()
            .find(|name| **name == strategy)
            .map(|name| Self { strategy: *name })
    }

    /// Strategy this engine translates.
    #[inline]
    #[must_use]
    pub fn strategy(&self) -> &'static str {
        self.strategy
    }
}

impl SelectorEngine for StrategyEngine {
    fn translate_to_xpath(&self, locator: &str) -> Result<String> {
        By::from_strategy(self.strategy, locator)
            .ok_or_else(|| Error::unknown_selector(self.strategy))?
            .to_xpath()
    }
}

// ============================================================================
// SelectorsHandler
// ============================================================================

/// Registry of named [`SelectorEngine`]s.
///
/// Engines can be registered through a shared reference, so one handler can
/// be shared (`Arc<SelectorsHandler>`) by every element of a session.
pub struct SelectorsHandler {
    engines: RwLock<FxHashMap<String, Arc<dyn SelectorEngine>>>,
}

impl fmt::Debug for SelectorsHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<String> = self.engines.read().keys().cloned().collect();
        names.sort();
        f.debug_struct("SelectorsHandler")
            .field("engines", &names)
            .finish()
    }
}

impl Default for SelectorsHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectorsHandler {
    /// Creates a handler with every [`By`] strategy registered.
    #[must_use]
    pub fn new() -> Self {
        let handler = Self::empty();
        for strategy in By::STRATEGIES {
            if let Some(engine) = StrategyEngine::new(strategy) {
                handler.register(strategy, engine);
            }
        }
        handler
    }

    /// Creates a handler without any engine.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            engines: RwLock::new(FxHashMap::default()),
        }
    }

    /// Registers `engine` under `name`, replacing any previous engine.
    pub fn register(&self, name: impl Into<String>, engine: impl SelectorEngine + 'static) {
        let name = name.into();
        debug!(selector = %name, "Registering selector engine");
        self.engines.write().insert(name, Arc::new(engine));
    }

    /// Returns `true` if an engine is registered under `name`.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.engines.read().contains_key(name)
    }

    /// Returns the engine registered under `name`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownSelector`] if nothing is registered under `name`.
    pub fn engine(&self, name: &str) -> Result<Arc<dyn SelectorEngine>> {
        self.engines
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::unknown_selector(name))
    }

    /// Translates a selector/locator pair to XPath.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownSelector`] or whatever the engine reports.
    pub fn selector_to_xpath(&self, selector: &str, locator: &str) -> Result<String> {
        let xpath = self.engine(selector)?.translate_to_xpath(locator)?;
        trace!(selector, locator, xpath = %xpath, "Translated selector");
        Ok(xpath)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_engines_registered() {
        let handler = SelectorsHandler::new();
        for strategy in By::STRATEGIES {
            assert!(handler.is_registered(strategy), "{strategy} missing");
        }
    }

    #[test]
    fn test_empty_handler() {
        let handler = SelectorsHandler::empty();
        assert!(!handler.is_registered("css"));
        let err = handler.selector_to_xpath("css", "div").unwrap_err();
        assert!(matches!(err, Error::UnknownSelector { ref selector } if selector == "css"));
    }

    #[test]
    fn test_css_translation() {
        let handler = SelectorsHandler::new();
        assert_eq!(
            handler.selector_to_xpath("css", "#main").unwrap(),
            "descendant-or-self::*[@id = 'main']"
        );
    }

    #[test]
    fn test_register_closure_engine() {
        let handler = SelectorsHandler::empty();
        handler.register("field", |locator: &str| -> Result<String> {
            Ok(format!("descendant-or-self::input[@name = '{locator}']"))
        });

        assert_eq!(
            handler.selector_to_xpath("field", "email").unwrap(),
            "descendant-or-self::input[@name = 'email']"
        );
    }

    #[test]
    fn test_register_replaces_engine() {
        let handler = SelectorsHandler::new();
        handler.register("xpath", |_: &str| -> Result<String> { Ok("//override".to_string()) });
        assert_eq!(handler.selector_to_xpath("xpath", "//a").unwrap(), "//override");
    }

    #[test]
    fn test_strategy_engine_rejects_unknown_name() {
        assert!(StrategyEngine::new("named").is_none());
        assert_eq!(StrategyEngine::new("id").unwrap().strategy(), "id");
    }

    #[test]
    fn test_debug_lists_engines() {
        let handler = SelectorsHandler::empty();
        handler.register("xpath", StrategyEngine::new("xpath").unwrap());
        assert_eq!(
            format!("{handler:?}"),
            "SelectorsHandler { engines: [\"xpath\"] }"
        );
    }
}
