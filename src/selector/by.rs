//! Element locator strategies.
//!
//! Provides Selenium-like `By` selectors that translate to XPath.
//!
//! # Example
//!
//! ```
//! use browser_element::By;
//!
//! let by = By::id("login-form");
//! assert_eq!(by.strategy(), "id");
//! assert_eq!(by.to_xpath().unwrap(), "descendant-or-self::*[@id = 'login-form']");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::xpath::escape_literal;

use super::css;

// ============================================================================
// By Enum
// ============================================================================

/// Element locator strategy (like Selenium's `By`).
///
/// Every strategy is also registered as a selector engine under its
/// [`strategy`](Self::strategy) name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", content = "value")]
pub enum By {
    /// CSS selector (simple subset, see [`css`](super::css)).
    #[serde(rename = "css")]
    Css(String),

    /// XPath expression, used as-is.
    #[serde(rename = "xpath")]
    XPath(String),

    /// Exact text content match (whitespace-normalized).
    #[serde(rename = "text")]
    Text(String),

    /// Partial text content match.
    #[serde(rename = "partialText")]
    PartialText(String),

    /// Element ID.
    #[serde(rename = "id")]
    Id(String),

    /// Tag name.
    #[serde(rename = "tag")]
    Tag(String),

    /// Name attribute.
    #[serde(rename = "name")]
    Name(String),

    /// Class name (single class).
    #[serde(rename = "class")]
    Class(String),

    /// Link text (for `<a>` elements).
    #[serde(rename = "linkText")]
    LinkText(String),

    /// Partial link text (for `<a>` elements).
    #[serde(rename = "partialLinkText")]
    PartialLinkText(String),
}

impl By {
    /// Creates a CSS selector.
    #[inline]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Creates an XPath selector.
    #[inline]
    pub fn xpath(expr: impl Into<String>) -> Self {
        Self::XPath(expr.into())
    }

    /// Creates a text content selector.
    #[inline]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates a partial text content selector.
    #[inline]
    pub fn partial_text(text: impl Into<String>) -> Self {
        Self::PartialText(text.into())
    }

    /// Creates an ID selector.
    #[inline]
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Creates a tag name selector.
    #[inline]
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag(tag.into())
    }

    /// Creates a name attribute selector.
    #[inline]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Creates a class name selector.
    #[inline]
    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }

    /// Creates a link text selector.
    #[inline]
    pub fn link_text(text: impl Into<String>) -> Self {
        Self::LinkText(text.into())
    }

    /// Creates a partial link text selector.
    #[inline]
    pub fn partial_link_text(text: impl Into<String>) -> Self {
        Self::PartialLinkText(text.into())
    }

    /// Builds the strategy registered under `strategy`, if any.
    #[must_use]
    pub fn from_strategy(strategy: &str, value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let by = match strategy {
            "css" => Self::Css(value),
            "xpath" => Self::XPath(value),
            "text" => Self::Text(value),
            "partialText" => Self::PartialText(value),
            "id" => Self::Id(value),
            "tag" => Self::Tag(value),
            "name" => Self::Name(value),
            "class" => Self::Class(value),
            "linkText" => Self::LinkText(value),
            "partialLinkText" => Self::PartialLinkText(value),
            _ => return None,
        };
        Some(by)
    }

    /// Every strategy name, in declaration order.
    pub const STRATEGIES: [&'static str; 10] = [
        "css",
        "xpath",
        "text",
        "partialText",
        "id",
        "tag",
        "name",
        "class",
        "linkText",
        "partialLinkText",
    ];

    /// Returns the strategy (selector engine) name.
    #[must_use]
    pub fn strategy(&self) -> &'static str {
        match self {
            Self::Css(_) => "css",
            Self::XPath(_) => "xpath",
            Self::Text(_) => "text",
            Self::PartialText(_) => "partialText",
            Self::Id(_) => "id",
            Self::Tag(_) => "tag",
            Self::Name(_) => "name",
            Self::Class(_) => "class",
            Self::LinkText(_) => "linkText",
            Self::PartialLinkText(_) => "partialLinkText",
        }
    }

    /// Returns the selector value.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Css(v)
            | Self::XPath(v)
            | Self::Text(v)
            | Self::PartialText(v)
            | Self::Id(v)
            | Self::Tag(v)
            | Self::Name(v)
            | Self::Class(v)
            | Self::LinkText(v)
            | Self::PartialLinkText(v) => v,
        }
    }

    /// Translates this locator to a relative XPath expression.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSelector`] if the value is empty or, for CSS and tag
    /// selectors, not valid syntax.
    pub fn to_xpath(&self) -> Result<String> {
        let value = self.value();
        if value.trim().is_empty() {
            return Err(Error::invalid_selector(
                self.strategy(),
                value,
                "locator is empty",
            ));
        }

        let xpath = match self {
            Self::Css(selector) => css::to_xpath(selector)?,
            Self::XPath(expr) => expr.clone(),
            Self::Text(text) => format!(
                "descendant-or-self::*[normalize-space(string(.)) = {}]",
                escape_literal(text.trim())
            ),
            Self::PartialText(text) => format!(
                "descendant-or-self::*[contains(normalize-space(string(.)), {})]",
                escape_literal(text.trim())
            ),
            Self::Id(id) => format!("descendant-or-self::*[@id = {}]", escape_literal(id)),
            Self::Tag(tag) => {
                if !is_tag_name(tag) {
                    return Err(Error::invalid_selector("tag", tag, "not a tag name"));
                }
                format!("descendant-or-self::{}", tag.to_ascii_lowercase())
            }
            Self::Name(name) => {
                format!("descendant-or-self::*[@name = {}]", escape_literal(name))
            }
            Self::Class(class) => format!(
                "descendant-or-self::*[contains(concat(' ', normalize-space(@class), ' '), {})]",
                escape_literal(&format!(" {} ", class.trim()))
            ),
            Self::LinkText(text) => format!(
                "descendant-or-self::a[normalize-space(string(.)) = {}]",
                escape_literal(text.trim())
            ),
            Self::PartialLinkText(text) => format!(
                "descendant-or-self::a[contains(normalize-space(string(.)), {})]",
                escape_literal(text.trim())
            ),
        };

        Ok(xpath)
    }
}

/// Returns `true` for `*` and identifiers like `h1`, `my-widget`, `svg:rect`.
pub(crate) fn is_tag_name(value: &str) -> bool {
    value == "*"
        || (value.starts_with(|c: char| c.is_ascii_alphabetic())
            && value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':')))
}

// ============================================================================
// From implementations for ergonomics
// ============================================================================

impl From<&str> for By {
    /// Converts a string to CSS selector (default).
    fn from(s: &str) -> Self {
        Self::Css(s.to_string())
    }
}

impl From<String> for By {
    /// Converts a string to CSS selector (default).
    fn from(s: String) -> Self {
        Self::Css(s)
    }
}

// ============================================================================
// Tests
// ============================================================================
