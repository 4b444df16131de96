//! XPath string literal escaping.
//!
//! XPath 1.0 has no escape sequence inside string literals, so a value that
//! contains both quote kinds has to be assembled with `concat()`.

/// Quotes `value` as an XPath string literal.
///
/// Single quotes are used when possible, then double quotes, and
/// `concat()` as the last resort.
///
/// # Example
///
/// ```
/// use browser_element::xpath::escape_literal;
///
/// assert_eq!(escape_literal("submit"), "'submit'");
/// assert_eq!(escape_literal("it's"), "\"it's\"");
/// assert_eq!(escape_literal("'a\""), "concat('',\"'\",'a\"')");
/// ```
#[must_use]
pub fn escape_literal(value: &str) -> String {
    if !value.contains('\'') {
        return format!("'{value}'");
    }

    if !value.contains('"') {
        return format!("\"{value}\"");
    }

    let parts: Vec<String> = value
        .split('\'')
        .map(|chunk| format!("'{chunk}'"))
        .collect();

    format!("concat({})", parts.join(",\"'\","))
}

// ============================================================================
// Tests
// ============================================================================
