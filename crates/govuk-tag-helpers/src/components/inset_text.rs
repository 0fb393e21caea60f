//! `<govuk-inset-text>`.

use govuk_html::HtmlElement;

use crate::error::RenderError;
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

const TAG_NAME: &str = "govuk-inset-text";

/// `<govuk-inset-text>`.
#[derive(Clone, Debug, Default)]
pub struct InsetTextTagHelper {
    id: Option<String>,
}

impl InsetTextTagHelper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `id` of the inset text.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl TagHelper for InsetTextTagHelper {
    fn tag_name(&self) -> &'static str {
        TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let element = HtmlElement::new("div")
            .with_class("govuk-inset-text")
            .with_attribute_opt("id", self.id.as_deref())
            .with_merged_attributes(&output.take_attributes())
            .with_html(context.child_content()?);

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
    fn test_inset_text() {
        let html = render(
            Node::component(InsetTextTagHelper::new().with_id("inset"))
                .child(text("It can take up to 8 weeks.")),
        )
        .unwrap();
        assert_eq!(
            html,
            "<div class=\"govuk-inset-text\" id=\"inset\">It can take up to 8 weeks.</div>"
        );
    }
}
