//! HTML encoding.

use std::borrow::Cow;

/// Encode text for safe inclusion in HTML content or a quoted attribute value.
///
/// Returns the input unchanged (borrowed) when nothing needs encoding.
///
/// # Example
///
/// ```
/// use govuk_html::encode;
///
/// assert_eq!(encode("<b>\"Tom\" & 'Jerry'</b>"), "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;");
/// assert_eq!(encode("plain"), "plain");
/// ```
#[must_use]
pub fn encode(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_borrows_when_clean() {
        assert!(matches!(encode("Day"), Cow::Borrowed("Day")));
    }

    #[test]
    fn test_encode_all_special_characters() {
        assert_eq!(encode("&<>\"'"), "&amp;&lt;&gt;&quot;&#x27;");
    }

    #[test]
    fn test_encode_preserves_unicode() {
        assert_eq!(encode("£5 – ок"), "£5 – ок");
    }
}
