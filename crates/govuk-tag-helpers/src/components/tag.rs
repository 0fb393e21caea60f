//! `<govuk-tag>`.

use govuk_html::HtmlElement;

use crate::error::RenderError;
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

const TAG_NAME: &str = "govuk-tag";

/// `<govuk-tag>`. Colour variants are plain classes, e.g. `govuk-tag--grey`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TagTagHelper;

impl TagHelper for TagTagHelper {
    fn tag_name(&self) -> &'static str {
        TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let element = HtmlElement::new("strong")
            .with_class("govuk-tag")
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
    fn test_tag_with_colour_class() {
        let html = render(
            Node::component(TagTagHelper)
                .attributes("class=govuk-tag--grey")
                .child(text("Inactive")),
        )
        .unwrap();
        assert_eq!(html, "<strong class=\"govuk-tag govuk-tag--grey\">Inactive</strong>");
    }
}
