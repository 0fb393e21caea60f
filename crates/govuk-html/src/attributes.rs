//! Ordered attribute bag.

use std::fmt::Write;

use crate::encode;

/// An insertion-ordered collection of HTML attributes.
///
/// Values are optional: `None` renders a minimized boolean attribute
/// (`disabled`), `Some` renders `name="value"`. The `class` attribute merges
/// rather than overwrites (see [`add_class`](Self::add_class) and
/// [`merge`](Self::merge)).
///
/// # Example
///
/// ```
/// use govuk_html::AttributeDictionary;
///
/// let mut attributes = AttributeDictionary::parse(r#"class="app-wide" data-track=yes hidden"#);
/// attributes.add_class("govuk-button");
/// assert_eq!(attributes.get("class"), Some("app-wide govuk-button"));
/// assert_eq!(attributes.get("data-track"), Some("yes"));
/// assert!(attributes.contains_key("hidden"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeDictionary {
    entries: Vec<(String, Option<String>)>,
}

impl AttributeDictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse HTML attribute syntax: `key="value"`, `key='value'`, `key=value`
    /// or a bare `key` (boolean attribute).
    ///
    /// Unrecognized characters are skipped. Later duplicates replace earlier
    /// values, except `class` which accumulates.
    #[must_use]
    pub fn parse(attrs_str: &str) -> Self {
        let mut attributes = Self::new();
        let mut remaining = attrs_str.trim();

        while !remaining.is_empty() {
            remaining = remaining.trim_start();
            if remaining.is_empty() {
                break;
            }

            let name_end = remaining
                .find(|c: char| c.is_whitespace() || c == '=')
                .unwrap_or(remaining.len());
            let name = &remaining[..name_end];

            if name.is_empty() {
                // Stray '='
                remaining = &remaining[1..];
                continue;
            }

            let after_name = remaining[name_end..].trim_start();
            if let Some(after_eq) = after_name.strip_prefix('=') {
                let (value, rest) = parse_value(after_eq.trim_start());
                if name == "class" {
                    attributes.add_class(value);
                } else {
                    attributes.insert(name, value);
                }
                remaining = rest;
            } else {
                attributes.insert_boolean(name);
                remaining = &remaining[name_end..];
            }
        }

        attributes
    }

    /// Set an attribute, replacing any existing value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.set(name.into(), Some(value.into()));
    }

    /// Set a minimized boolean attribute (e.g. `checked`).
    pub fn insert_boolean(&mut self, name: impl Into<String>) {
        self.set(name.into(), None);
    }

    /// Set an attribute only if `value` is `Some`.
    pub fn insert_opt(&mut self, name: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.insert(name, value);
        }
    }

    /// Set an attribute only if it is not already present.
    pub fn insert_if_absent(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if !self.contains_key(&name) {
            self.entries.push((name, Some(value.into())));
        }
    }

    fn set(&mut self, name: String, value: Option<String>) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Append a CSS class, keeping the `class` attribute's position.
    ///
    /// Empty input and classes already present are ignored.
    pub fn add_class(&mut self, class: &str) {
        let class = class.trim();
        if class.is_empty() {
            return;
        }

        match self.entries.iter_mut().find(|(n, _)| n == "class") {
            Some((_, Some(existing))) if !existing.trim().is_empty() => {
                for token in class.split_whitespace() {
                    if !existing.split_whitespace().any(|t| t == token) {
                        existing.push(' ');
                        existing.push_str(token);
                    }
                }
            }
            Some(entry) => entry.1 = Some(class.to_owned()),
            None => self.entries.push(("class".to_owned(), Some(class.to_owned()))),
        }
    }

    /// Merge `other` into this dictionary.
    ///
    /// Classes from `other` are appended; other attributes from `other`
    /// replace existing values.
    pub fn merge(&mut self, other: &Self) {
        for (name, value) in &other.entries {
            if name == "class" {
                if let Some(class) = value {
                    self.add_class(class);
                }
            } else {
                self.set(name.clone(), value.clone());
            }
        }
    }

    /// Get an attribute value. Boolean attributes return `Some("")`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Remove an attribute, returning its value (`Some("")` for booleans).
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(idx).1.unwrap_or_default())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_deref()))
    }

    /// Serialize as ` name="value"` pairs (each with a leading space).
    pub fn write_to(&self, out: &mut String) {
        for (name, value) in &self.entries {
            match value {
                Some(value) => {
                    let _ = write!(out, r#" {name}="{}""#, encode(value));
                }
                None => {
                    out.push(' ');
                    out.push_str(name);
                }
            }
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeDictionary {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}

/// Parse an attribute value following `=`; returns `(value, rest)`.
fn parse_value(s: &str) -> (&str, &str) {
    for quote in ['"', '\''] {
        if let Some(stripped) = s.strip_prefix(quote) {
            return match stripped.find(quote) {
                Some(end) => (&stripped[..end], &stripped[end + 1..]),
                // Unterminated: take the rest
                None => (stripped, ""),
            };
        }
    }

    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    (&s[..end], &s[end..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(attributes: &AttributeDictionary) -> String {
        let mut out = String::new();
        attributes.write_to(&mut out);
        out
    }

    #[test]
    fn test_parse_empty() {
        assert!(AttributeDictionary::parse("").is_empty());
        assert!(AttributeDictionary::parse("   ").is_empty());
    }

    #[test]
    fn test_parse_quoted_values() {
        let attributes = AttributeDictionary::parse(r#"lang="en" title='Hello World'"#);
        assert_eq!(attributes.get("lang"), Some("en"));
        assert_eq!(attributes.get("title"), Some("Hello World"));
    }

    #[test]
    fn test_parse_unquoted_and_boolean() {
        let attributes = AttributeDictionary::parse("width=560 disabled");
        assert_eq!(attributes.get("width"), Some("560"));
        assert_eq!(attributes.get("disabled"), Some(""));
        assert_eq!(render(&attributes), r#" width="560" disabled"#);
    }

    #[test]
    fn test_parse_empty_quoted_value() {
        let attributes = AttributeDictionary::parse(r#"alt="""#);
        assert_eq!(attributes.get("alt"), Some(""));
        assert_eq!(render(&attributes), r#" alt="""#);
    }

    #[test]
    fn test_parse_repeated_class_accumulates() {
        let attributes = AttributeDictionary::parse(r#"class="a" class="b""#);
        assert_eq!(attributes.get("class"), Some("a b"));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut attributes = AttributeDictionary::new();
        attributes.insert("id", "one");
        attributes.insert("name", "n");
        attributes.insert("id", "two");
        assert_eq!(render(&attributes), r#" id="two" name="n""#);
    }

    #[test]
    fn test_add_class_ignores_duplicates() {
        let mut attributes = AttributeDictionary::new();
        attributes.add_class("govuk-input");
        attributes.add_class("govuk-input govuk-input--error");
        attributes.add_class("");
        assert_eq!(attributes.get("class"), Some("govuk-input govuk-input--error"));
    }

    #[test]
    fn test_merge_appends_class_and_overrides_others() {
        let mut attributes = AttributeDictionary::new();
        attributes.add_class("govuk-tag");
        attributes.insert("id", "original");

        let user = AttributeDictionary::parse(r#"class="app-tag" id="custom" data-x=1"#);
        attributes.merge(&user);

        assert_eq!(
            render(&attributes),
            r#" class="govuk-tag app-tag" id="custom" data-x="1""#
        );
    }

    #[test]
    fn test_insert_if_absent() {
        let mut attributes = AttributeDictionary::parse("role=alert");
        attributes.insert_if_absent("role", "region");
        attributes.insert_if_absent("tabindex", "-1");
        assert_eq!(attributes.get("role"), Some("alert"));
        assert_eq!(attributes.get("tabindex"), Some("-1"));
    }

    #[test]
    fn test_remove() {
        let mut attributes = AttributeDictionary::parse("a=1 b");
        assert_eq!(attributes.remove("a"), Some("1".to_owned()));
        assert_eq!(attributes.remove("b"), Some(String::new()));
        assert_eq!(attributes.remove("c"), None);
        assert!(attributes.is_empty());
    }

    #[test]
    fn test_values_are_encoded() {
        let attributes: AttributeDictionary = [("title", "\"quoted\" & <b>")].into_iter().collect();
        assert_eq!(
            render(&attributes),
            r#" title="&quot;quoted&quot; &amp; &lt;b&gt;""#
        );
    }
}
