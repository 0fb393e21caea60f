//! `<govuk-warning-text>`.

use govuk_html::HtmlElement;

use crate::error::RenderError;
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

const TAG_NAME: &str = "govuk-warning-text";

const DEFAULT_ICON_FALLBACK_TEXT: &str = "Warning";

/// `<govuk-warning-text>`.
#[derive(Clone, Debug, Default)]
pub struct WarningTextTagHelper {
    icon_fallback_text: Option<String>,
}

impl WarningTextTagHelper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text read out in place of the icon. Defaults to "Warning".
    #[must_use]
    pub fn with_icon_fallback_text(mut self, text: impl Into<String>) -> Self {
        self.icon_fallback_text = Some(text.into());
        self
    }
}

impl TagHelper for WarningTextTagHelper {
    fn tag_name(&self) -> &'static str {
        TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let fallback = self
            .icon_fallback_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or(DEFAULT_ICON_FALLBACK_TEXT);

        let element = HtmlElement::new("div")
            .with_class("govuk-warning-text")
            .with_merged_attributes(&output.take_attributes())
            .with_child(
                HtmlElement::new("span")
                    .with_class("govuk-warning-text__icon")
                    .with_attribute("aria-hidden", "true")
                    .with_text("!"),
            )
            .with_child(
                HtmlElement::new("strong")
                    .with_class("govuk-warning-text__text")
                    .with_child(
                        HtmlElement::new("span")
                            .with_class("govuk-warning-text__assistive")
                            .with_text(fallback),
                    )
                    .with_html(context.child_content()?),
            );

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
    fn test_default_fallback_text() {
        let html = render(
            Node::component(WarningTextTagHelper::new())
                .child(text("You can be fined up to £5,000")),
        )
        .unwrap();
        assert_eq!(
            html,
            "<div class=\"govuk-warning-text\">\
             <span class=\"govuk-warning-text__icon\" aria-hidden=\"true\">!</span>\
             <strong class=\"govuk-warning-text__text\">\
             <span class=\"govuk-warning-text__assistive\">Warning</span>\
             You can be fined up to £5,000</strong></div>"
        );
    }

    #[test]
    fn test_custom_fallback_text() {
        let html = render(
            Node::component(WarningTextTagHelper::new().with_icon_fallback_text("Caution"))
                .child(text("Mind the step")),
        )
        .unwrap();
        assert!(html.contains("<span class=\"govuk-warning-text__assistive\">Caution</span>Mind the step"));
    }
}
