//! The output sink written by tag helpers.

use govuk_html::{AttributeDictionary, HtmlElement, HtmlString};

/// What a tag helper emits for its element.
///
/// Starts as the element as written: its tag name, its pass-through
/// attributes and no content. A helper may rename or drop the tag, rewrite the
/// attributes, replace the content, or suppress the element entirely.
///
/// If the helper never touches the content, the host renders the element's
/// children as its content.
#[derive(Debug)]
pub struct TagHelperOutput {
    tag_name: Option<String>,
    attributes: AttributeDictionary,
    content: HtmlString,
    content_modified: bool,
    suppressed: bool,
}

impl TagHelperOutput {
    /// Output for an element as written: its name and attributes, no content yet.
    #[must_use]
    pub fn new(tag_name: impl Into<String>, attributes: AttributeDictionary) -> Self {
        Self {
            tag_name: Some(tag_name.into()),
            attributes,
            content: HtmlString::empty(),
            content_modified: false,
            suppressed: false,
        }
    }

    /// The tag to emit, or `None` to emit only the content.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        self.tag_name.as_deref()
    }

    /// Rename the element. `None` drops the tag and emits only the content.
    pub fn set_tag_name(&mut self, tag_name: Option<&str>) {
        self.tag_name = tag_name.map(str::to_owned);
    }

    /// Attributes written on the element.
    #[must_use]
    pub fn attributes(&self) -> &AttributeDictionary {
        &self.attributes
    }

    /// Mutable access to the element's attributes.
    pub fn attributes_mut(&mut self) -> &mut AttributeDictionary {
        &mut self.attributes
    }

    /// Take the pass-through attributes, leaving the output with none.
    ///
    /// Components that forward caller attributes onto a generated element
    /// take them here so they are not emitted twice.
    pub fn take_attributes(&mut self) -> AttributeDictionary {
        std::mem::take(&mut self.attributes)
    }

    /// Current content.
    #[must_use]
    pub fn content(&self) -> &HtmlString {
        &self.content
    }

    /// Replace the content with markup.
    pub fn set_html_content(&mut self, html: HtmlString) {
        self.content = html;
        self.content_modified = true;
    }

    /// Replace the content with encoded text.
    pub fn set_text_content(&mut self, text: &str) {
        self.content = HtmlString::from_text(text);
        self.content_modified = true;
    }

    /// Append pre-encoded markup to the content.
    pub fn append_html(&mut self, html: &HtmlString) {
        self.content.push_html(html);
        self.content_modified = true;
    }

    /// Append text to the content, encoding it.
    pub fn append_text(&mut self, text: &str) {
        self.content.push_text(text);
        self.content_modified = true;
    }

    /// Whether the helper set any content. Untouched output renders the
    /// element's children.
    #[must_use]
    pub fn is_content_modified(&self) -> bool {
        self.content_modified
    }

    /// Emit nothing for this element.
    pub fn suppress_output(&mut self) {
        self.tag_name = None;
        self.attributes = AttributeDictionary::new();
        self.content = HtmlString::empty();
        self.content_modified = true;
        self.suppressed = true;
    }

    /// Whether the element renders nothing.
    #[must_use]
    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Replace tag, attributes and content with a generated element.
    pub fn write_element(&mut self, element: HtmlElement) {
        let void = element.is_void();
        let (tag_name, attributes, content) = element.into_parts();
        if void {
            // Void elements cannot carry content; emit them whole.
            self.tag_name = None;
            self.attributes = AttributeDictionary::new();
            self.set_html_content(
                HtmlElement::new(tag_name)
                    .with_merged_attributes(&attributes)
                    .to_html_string(),
            );
            return;
        }

        self.tag_name = Some(tag_name);
        self.attributes = attributes;
        self.set_html_content(content);
    }

    /// Serialize the output.
    #[must_use]
    pub fn render(&self) -> HtmlString {
        if self.suppressed {
            return HtmlString::empty();
        }

        let Some(tag_name) = &self.tag_name else {
            return self.content.clone();
        };

        let mut out = String::with_capacity(self.content.as_str().len() + 64);
        out.push('<');
        out.push_str(tag_name);
        self.attributes.write_to(&mut out);
        out.push('>');
        out.push_str(self.content.as_str());
        out.push_str("</");
        out.push_str(tag_name);
        out.push('>');
        HtmlString::new(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_wraps_content() {
        let mut output = TagHelperOutput::new("p", AttributeDictionary::parse("class=lead"));
        output.append_text("a & b");
        assert_eq!(output.render().as_str(), r#"<p class="lead">a &amp; b</p>"#);
    }

    #[test]
    fn test_no_tag_name_emits_content_only() {
        let mut output = TagHelperOutput::new("govuk-x", AttributeDictionary::new());
        output.set_tag_name(None);
        output.set_html_content(HtmlString::new("<b>x</b>"));
        assert_eq!(output.render().as_str(), "<b>x</b>");
    }

    #[test]
    fn test_suppressed_output_is_empty() {
        let mut output = TagHelperOutput::new("govuk-x", AttributeDictionary::parse("id=a"));
        output.append_text("ignored");
        output.suppress_output();
        assert!(output.is_suppressed());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_take_attributes() {
        let mut output = TagHelperOutput::new("govuk-x", AttributeDictionary::parse("data-a=1"));
        let attributes = output.take_attributes();
        assert_eq!(attributes.get("data-a"), Some("1"));
        assert!(output.attributes().is_empty());
    }

    #[test]
    fn test_write_element() {
        let mut output = TagHelperOutput::new("govuk-x", AttributeDictionary::new());
        output.write_element(
            HtmlElement::new("div")
                .with_class("govuk-panel")
                .with_text("Done"),
        );
        assert!(output.is_content_modified());
        assert_eq!(output.render().as_str(), r#"<div class="govuk-panel">Done</div>"#);
    }

    #[test]
    fn test_write_void_element() {
        let mut output = TagHelperOutput::new("govuk-x", AttributeDictionary::new());
        output.write_element(HtmlElement::new("input").with_attribute("type", "file"));
        assert_eq!(output.render().as_str(), r#"<input type="file">"#);
    }
}
