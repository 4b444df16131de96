//! CSS to XPath translation.
//!
//! Covers the selectors test suites reach for most:
//!
//! | Syntax | Example |
//! |--------|---------|
//! | Type / universal | `button`, `*` |
//! | ID / class | `#login`, `.btn.primary` |
//! | Attribute | `[disabled]`, `[type=submit]`, `[href^="https"]`, `[title*='x']`, `[rel~=next]` |
//! | Combinators | `form input`, `ul > li` |
//! | Lists | `h1, h2` |
//!
//! Pseudo-classes, sibling combinators and namespaces are rejected with
//! [`Error::InvalidSelector`].

use crate::error::{Error, Result};
use crate::xpath::escape_literal;

/// Translates a CSS selector to a relative XPath expression.
///
/// # Example
///
/// ```
/// use browser_element::selector::css;
///
/// assert_eq!(
///     css::to_xpath("ul > li.active").unwrap(),
///     "descendant-or-self::ul/li[contains(concat(' ', normalize-space(@class), ' '), ' active ')]"
/// );
/// ```
pub fn to_xpath(selector: &str) -> Result<String> {
    let mut parser = Parser::new(selector);
    let mut alternatives = vec![parser.complex()?];

    while parser.eat(',') {
        alternatives.push(parser.complex()?);
    }

    if let Some(c) = parser.peek() {
        return Err(parser.error(format!("unexpected '{c}'")));
    }

    Ok(alternatives.join(" | "))
}

// ============================================================================
// Parser
// ============================================================================

struct Parser<'a> {
    source: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::invalid_selector("css", self.source, message)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Skips whitespace, returning whether any was found.
    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn ident(&mut self) -> Result<String> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || matches!(c, '-' | '_'))
        {
            self.pos += 1;
        }

        if self.pos == start {
            return Err(match self.peek() {
                Some(c) => self.error(format!("expected identifier, found '{c}'")),
                None => self.error("expected identifier, found end of selector"),
            });
        }

        Ok(self.chars[start..self.pos].iter().collect())
    }

    fn complex(&mut self) -> Result<String> {
        self.skip_whitespace();
        let mut xpath = format!("descendant-or-self::{}", self.compound()?);

        loop {
            let spaced = self.skip_whitespace();
            match self.peek() {
                Some('>') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    xpath.push('/');
                    xpath.push_str(&self.compound()?);
                }
                Some(',') | None => break,
                Some(_) if spaced => {
                    xpath.push_str("/descendant-or-self::*/");
                    xpath.push_str(&self.compound()?);
                }
                Some(c) => return Err(self.error(format!("unsupported combinator '{c}'"))),
            }
        }

        Ok(xpath)
    }

    fn compound(&mut self) -> Result<String> {
        let start = self.pos;
        let element = match self.peek() {
            Some('*') => {
                self.pos += 1;
                "*".to_string()
            }
            Some(c) if c.is_alphabetic() => self.ident()?.to_ascii_lowercase(),
            _ => "*".to_string(),
        };

        let mut conditions = Vec::new();
        while let Some(c) = self.peek() {
            match c {
                '#' => {
                    self.pos += 1;
                    conditions.push(format!("@id = {}", escape_literal(&self.ident()?)));
                }
                '.' => {
                    self.pos += 1;
                    conditions.push(word_condition("@class", &self.ident()?));
                }
                '[' => {
                    self.pos += 1;
                    conditions.push(self.attribute()?);
                }
                ':' => return Err(self.error("pseudo-classes are not supported")),
                _ => break,
            }
        }

        if self.pos == start {
            return Err(match self.peek() {
                Some(c) => self.error(format!("unexpected '{c}'")),
                None => self.error("expected selector, found end of selector"),
            });
        }

        if conditions.is_empty() {
            Ok(element)
        } else {
            Ok(format!("{element}[{}]", conditions.join(" and ")))
        }
    }

    fn attribute(&mut self) -> Result<String> {
        self.skip_whitespace();
        let name = format!("@{}", self.ident()?);
        self.skip_whitespace();

        let operator = match self.peek() {
            Some(']') => {
                self.pos += 1;
                return Ok(name);
            }
            Some('=') => {
                self.pos += 1;
                '='
            }
            Some(op @ ('*' | '^' | '~')) if self.chars.get(self.pos + 1) == Some(&'=') => {
                self.pos += 2;
                op
            }
            Some(c) => return Err(self.error(format!("unsupported attribute operator '{c}'"))),
            None => return Err(self.error("unterminated attribute selector")),
        };

        self.skip_whitespace();
        let value = self.attribute_value()?;
        self.skip_whitespace();
        if self.peek() != Some(']') {
            return Err(self.error("unterminated attribute selector"));
        }
        self.pos += 1;

        let literal = escape_literal(&value);
        Ok(match operator {
            '=' => format!("{name} = {literal}"),
            '*' => format!("contains({name}, {literal})"),
            '^' => format!("starts-with({name}, {literal})"),
            _ => word_condition(&name, &value),
        })
    }

    fn attribute_value(&mut self) -> Result<String> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.pos += 1;
                let start = self.pos;
                while self.peek().is_some_and(|c| c != quote) {
                    self.pos += 1;
                }
                if self.peek().is_none() {
                    return Err(self.error("unterminated string"));
                }
                let value = self.chars[start..self.pos].iter().collect();
                self.pos += 1;
                Ok(value)
            }
            _ => self.ident(),
        }
    }
}

/// Whitespace-separated word match, as used for `class` lists.
fn word_condition(attribute: &str, word: &str) -> String {
    format!(
        "contains(concat(' ', normalize-space({attribute}), ' '), {})",
        escape_literal(&format!(" {word} "))
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_selector() {
        assert_eq!(to_xpath("button").unwrap(), "descendant-or-self::button");
    }

    #[test]
    fn test_universal_selector() {
        assert_eq!(to_xpath("*").unwrap(), "descendant-or-self::*");
    }

    #[test]
    fn test_id_selector() {
        assert_eq!(
            to_xpath("#login").unwrap(),
            "descendant-or-self::*[@id = 'login']"
        );
    }

    #[test]
    fn test_compound_selector() {
        assert_eq!(
            to_xpath("input#email[type=\"email\"]").unwrap(),
            "descendant-or-self::input[@id = 'email' and @type = 'email']"
        );
    }

    #[test]
    fn test_attribute_operators() {
        assert_eq!(
            to_xpath("a[href^='https']").unwrap(),
            "descendant-or-self::a[starts-with(@href, 'https')]"
        );
        assert_eq!(
            to_xpath("a[title*=docs]").unwrap(),
            "descendant-or-self::a[contains(@title, 'docs')]"
        );
        assert_eq!(
            to_xpath("[disabled]").unwrap(),
            "descendant-or-self::*[@disabled]"
        );
        assert_eq!(
            to_xpath("a[rel~=next]").unwrap(),
            "descendant-or-self::a[contains(concat(' ', normalize-space(@rel), ' '), ' next ')]"
        );
    }

    #[test]
    fn test_descendant_and_child_combinators() {
        assert_eq!(
            to_xpath("form input").unwrap(),
            "descendant-or-self::form/descendant-or-self::*/input"
        );
        assert_eq!(
            to_xpath("ul >li").unwrap(),
            "descendant-or-self::ul/li"
        );
    }

    #[test]
    fn test_selector_list() {
        assert_eq!(
            to_xpath("h1, h2").unwrap(),
            "descendant-or-self::h1 | descendant-or-self::h2"
        );
    }

    #[test]
    fn test_pseudo_class_is_rejected() {
        let err = to_xpath("a:hover").unwrap_err();
        assert!(err.to_string().contains("pseudo-classes"));
    }

    #[test]
    fn test_sibling_combinator_is_rejected() {
        assert!(to_xpath("h1 + p").is_err());
        assert!(to_xpath("h1 ~ p").is_err());
    }

    #[test]
    fn test_unterminated_input_is_rejected() {
        assert!(to_xpath("a[href").is_err());
        assert!(to_xpath("a[title='x]").is_err());
        assert!(to_xpath("div,").is_err());
        assert!(to_xpath("#").is_err());
    }
}
