//! Scoping XPath expressions under a parent path.
//!
//! Element lookups are expressed relative to the element that runs them,
//! so every translated selector is prefixed with the parent's own path
//! before it is handed to the driver.

// ============================================================================
// Imports
// ============================================================================

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

// ============================================================================
// Constants
// ============================================================================

/// Opening parentheses (and blanks) in front of a union member.
static LEADING_PARENTHESES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[(\s]+").expect("static pattern is valid"));

// ============================================================================
// Functions
// ============================================================================

/// Splits an expression on its top-level `|` operators.
///
/// A `|` inside a string literal or a predicate (`[...]`) is part of its
/// member and does not split.
///
/// # Example
///
/// ```
/// use browser_element::xpath::split_union;
///
/// assert_eq!(split_union("a | b[@x='|']"), vec!["a ", " b[@x='|']"]);
/// ```
#[must_use]
pub fn split_union(xpath: &str) -> Vec<&str> {
    if !xpath.contains('|') {
        return vec![xpath];
    }

    let mut parts = Vec::new();
    let mut single_quote = false;
    let mut double_quote = false;
    let mut brackets = 0usize;
    let mut last = 0;

    for (index, c) in xpath.char_indices() {
        match c {
            '\'' if !double_quote => single_quote = !single_quote,
            '"' if !single_quote => double_quote = !double_quote,
            _ if single_quote || double_quote => {}
            '[' => brackets += 1,
            ']' => brackets = brackets.saturating_sub(1),
            '|' if brackets == 0 => {
                parts.push(&xpath[last..index]);
                last = index + 1;
            }
            _ => {}
        }
    }

    parts.push(&xpath[last..]);
    parts
}

/// Scopes `xpath` under `prefix`.
///
/// Each union member is prefixed separately. Members starting with `/`
/// are appended to the prefix as-is, others get a `/` separator. Leading
/// parentheses of a member stay in front of the prefix, and a prefix that
/// is itself a union is wrapped in parentheses.
///
/// # Example
///
/// ```
/// use browser_element::xpath::prepend;
///
/// assert_eq!(prepend("div", "//html"), "//html/div");
/// assert_eq!(prepend("//a | (.//b)", "//body"), "//body//a | (//body/.//b)");
/// ```
#[must_use]
pub fn prepend(xpath: &str, prefix: &str) -> String {
    let prefix = if split_union(prefix).len() > 1 {
        format!("({prefix})")
    } else {
        prefix.to_string()
    };

    let scoped: Vec<String> = split_union(xpath)
        .into_iter()
        .map(|member| {
            let member = member.trim();
            let parentheses = LEADING_PARENTHESES
                .find(member)
                .map_or("", |found| found.as_str());
            let expression = &member[parentheses.len()..];

            if expression.starts_with('/') {
                format!("{parentheses}{prefix}{expression}")
            } else {
                format!("{parentheses}{prefix}/{expression}")
            }
        })
        .collect();

    let result = scoped.join(" | ");
    trace!(xpath, prefix = %prefix, result = %result, "Scoped XPath");
    result
}

// ============================================================================
// Tests
// ============================================================================
