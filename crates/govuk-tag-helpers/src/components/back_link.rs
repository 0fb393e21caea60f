//! `<govuk-back-link>`.

use govuk_html::{HtmlElement, HtmlString};

use crate::error::RenderError;
use crate::form_group::non_empty;
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

const TAG_NAME: &str = "govuk-back-link";

const DEFAULT_CONTENT: &str = "Back";

/// `<govuk-back-link>`. Content defaults to "Back".
#[derive(Clone, Debug, Default)]
pub struct BackLinkTagHelper {
    href: Option<String>,
}

impl BackLinkTagHelper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Link target. Defaults to `#`.
    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

impl TagHelper for BackLinkTagHelper {
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
            .with_class("govuk-back-link")
            .with_attribute("href", self.href.as_deref().unwrap_or("#"))
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
    use crate::testing::{render, text};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_content() {
        let html = render(Node::component(BackLinkTagHelper::new())).unwrap();
        assert_eq!(html, "<a class=\"govuk-back-link\" href=\"#\">Back</a>");
    }

    #[test]
    fn test_custom_content_and_href() {
        let html = render(
            Node::component(BackLinkTagHelper::new().with_href("/previous"))
                .attributes("class=extra")
                .child(text("Go back")),
        )
        .unwrap();
        assert_eq!(
            html,
            "<a class=\"govuk-back-link extra\" href=\"/previous\">Go back</a>"
        );
    }
}
