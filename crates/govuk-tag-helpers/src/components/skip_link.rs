//! `<govuk-skip-link>`.

use govuk_html::{HtmlElement, HtmlString};

use crate::error::RenderError;
use crate::form_group::non_empty;
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

const TAG_NAME: &str = "govuk-skip-link";

const DEFAULT_HREF: &str = "#content";
const DEFAULT_CONTENT: &str = "Skip to main content";

/// `<govuk-skip-link>`.
#[derive(Clone, Debug, Default)]
pub struct SkipLinkTagHelper {
    href: Option<String>,
}

impl SkipLinkTagHelper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Link target. Defaults to `#content`.
    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

impl TagHelper for SkipLinkTagHelper {
    fn tag_name(&self) -> &'static str {
        TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let content = non_empty(context.child_content()?)
            .unwrap_or_else(|| HtmlString::from_text(DEFAULT_CONTENT));

        let element = HtmlElement::new("a")
            .with_class("govuk-skip-link")
            .with_attribute("href", self.href.as_deref().unwrap_or(DEFAULT_HREF))
            .with_attribute("data-module", "govuk-skip-link")
            .with_merged_attributes(&output.take_attributes())
            .with_html(content);

        output.write_element(element);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::Node;
    use crate::testing::render;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let html = render(Node::component(SkipLinkTagHelper::new())).unwrap();
        assert_eq!(
            html,
            "<a class=\"govuk-skip-link\" href=\"#content\" data-module=\"govuk-skip-link\">Skip to main content</a>"
        );
    }

    #[test]
    fn test_custom_href() {
        let html = render(Node::component(SkipLinkTagHelper::new().with_href("#main"))).unwrap();
        assert!(html.contains("href=\"#main\""));
    }
}
