//! Pre-encoded markup fragments.

use std::fmt;

use crate::encode;

/// A fragment of markup that is already safe to emit verbatim.
///
/// Child content produced by nested components is carried around as an
/// `HtmlString` so it is never encoded twice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct HtmlString(String);

impl HtmlString {
    /// Wrap markup that is known to be safe.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// An empty fragment.
    #[must_use]
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Encode plain text into a fragment.
    ///
    /// # Example
    ///
    /// ```
    /// use govuk_html::HtmlString;
    ///
    /// assert_eq!(HtmlString::from_text("a < b").as_str(), "a &lt; b");
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self(encode(text).into_owned())
    }

    /// The raw markup.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the fragment, returning the raw markup.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the fragment has no visible characters.
    ///
    /// Component children that render nothing but whitespace are treated as
    /// absent content.
    #[must_use]
    pub fn is_empty_or_whitespace(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Append another fragment.
    pub fn push_html(&mut self, html: &Self) {
        self.0.push_str(&html.0);
    }

    /// Append raw markup.
    pub fn push_str(&mut self, html: &str) {
        self.0.push_str(html);
    }

    /// Append text, encoding it.
    pub fn push_text(&mut self, text: &str) {
        self.0.push_str(&encode(text));
    }
}

impl fmt::Display for HtmlString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for HtmlString {
    fn from(html: String) -> Self {
        Self(html)
    }
}

impl From<&str> for HtmlString {
    fn from(html: &str) -> Self {
        Self(html.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_only_is_empty() {
        assert!(HtmlString::new("  \n\t").is_empty_or_whitespace());
        assert!(!HtmlString::new(" x ").is_empty_or_whitespace());
    }

    #[test]
    fn test_push_text_encodes() {
        let mut html = HtmlString::new("<p>");
        html.push_text("1 < 2");
        html.push_str("</p>");
        assert_eq!(html.as_str(), "<p>1 &lt; 2</p>");
    }

    #[test]
    fn test_push_html_verbatim() {
        let mut html = HtmlString::empty();
        html.push_html(&HtmlString::new("<br>"));
        assert_eq!(html.to_string(), "<br>");
    }
}
