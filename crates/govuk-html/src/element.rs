//! Element tree builder.

use crate::{AttributeDictionary, HtmlString, encode};

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// A child of an [`HtmlElement`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HtmlNode {
    /// A nested element.
    Element(HtmlElement),
    /// Pre-encoded markup emitted verbatim.
    Html(HtmlString),
    /// Plain text, encoded on output.
    Text(String),
}

/// A builder for a single HTML element and its children.
///
/// Attributes are emitted in insertion order, which keeps generated markup
/// stable and comparable in tests.
///
/// # Example
///
/// ```
/// use govuk_html::HtmlElement;
///
/// let input = HtmlElement::new("input")
///     .with_class("govuk-input")
///     .with_attribute("id", "email")
///     .with_boolean_attribute("disabled");
///
/// assert_eq!(
///     input.to_html_string().as_str(),
///     r#"<input class="govuk-input" id="email" disabled>"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlElement {
    tag_name: String,
    attributes: AttributeDictionary,
    children: Vec<HtmlNode>,
}

impl HtmlElement {
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: AttributeDictionary::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    #[must_use]
    pub fn attributes(&self) -> &AttributeDictionary {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut AttributeDictionary {
        &mut self.attributes
    }

    #[must_use]
    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.attributes.add_class(class);
        self
    }

    /// Add `class` only when `condition` holds.
    #[must_use]
    pub fn with_class_if(mut self, condition: bool, class: &str) -> Self {
        if condition {
            self.attributes.add_class(class);
        }
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    #[must_use]
    pub fn with_attribute_opt(
        mut self,
        name: impl Into<String>,
        value: Option<impl Into<String>>,
    ) -> Self {
        self.attributes.insert_opt(name, value);
        self
    }

    #[must_use]
    pub fn with_boolean_attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.insert_boolean(name);
        self
    }

    /// Add a boolean attribute only when `condition` holds.
    #[must_use]
    pub fn with_boolean_attribute_if(mut self, condition: bool, name: impl Into<String>) -> Self {
        if condition {
            self.attributes.insert_boolean(name);
        }
        self
    }

    /// Merge caller-supplied attributes (classes append, others override).
    #[must_use]
    pub fn with_merged_attributes(mut self, attributes: &AttributeDictionary) -> Self {
        self.attributes.merge(attributes);
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(HtmlNode::Element(child));
        self
    }

    #[must_use]
    pub fn with_child_opt(mut self, child: Option<Self>) -> Self {
        if let Some(child) = child {
            self.children.push(HtmlNode::Element(child));
        }
        self
    }

    #[must_use]
    pub fn with_html(mut self, html: impl Into<HtmlString>) -> Self {
        self.children.push(HtmlNode::Html(html.into()));
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(HtmlNode::Text(text.into()));
        self
    }

    pub fn push_child(&mut self, child: Self) {
        self.children.push(HtmlNode::Element(child));
    }

    pub fn push_html(&mut self, html: impl Into<HtmlString>) {
        self.children.push(HtmlNode::Html(html.into()));
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(HtmlNode::Text(text.into()));
    }

    #[must_use]
    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag_name.as_str())
    }

    /// Serialize the element and its descendants.
    pub fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag_name);
        self.attributes.write_to(out);
        out.push('>');

        if self.is_void() {
            return;
        }

        self.write_children_to(out);

        out.push_str("</");
        out.push_str(&self.tag_name);
        out.push('>');
    }

    /// Serialize only the children (the element's inner HTML).
    pub fn write_children_to(&self, out: &mut String) {
        for child in &self.children {
            match child {
                HtmlNode::Element(element) => element.write_to(out),
                HtmlNode::Html(html) => out.push_str(html.as_str()),
                HtmlNode::Text(text) => out.push_str(&encode(text)),
            }
        }
    }

    #[must_use]
    pub fn to_html_string(&self) -> HtmlString {
        let mut out = String::with_capacity(256);
        self.write_to(&mut out);
        HtmlString::new(out)
    }

    #[must_use]
    pub fn inner_html(&self) -> HtmlString {
        let mut out = String::new();
        self.write_children_to(&mut out);
        HtmlString::new(out)
    }

    /// Split into tag name, attributes and inner HTML.
    #[must_use]
    pub fn into_parts(self) -> (String, AttributeDictionary, HtmlString) {
        let inner = self.inner_html();
        (self.tag_name, self.attributes, inner)
    }
}
