//! `<govuk-details>`: a summary that expands to show more text.

use govuk_html::{AttributeDictionary, HtmlElement, HtmlString};

use crate::error::RenderError;
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

const TAG_NAME: &str = "govuk-details";
const SUMMARY_TAG_NAME: &str = "govuk-details-summary";
const TEXT_TAG_NAME: &str = "govuk-details-text";

/// The summary or text of a details element.
#[derive(Clone, Debug, Default)]
pub struct DetailsPart {
    pub attributes: AttributeDictionary,
    pub content: HtmlString,
}

/// Summary, then text. Both are required.
#[derive(Clone, Debug, Default)]
pub struct DetailsContext {
    summary: Option<DetailsPart>,
    text: Option<DetailsPart>,
}

impl DetailsContext {
    /// # Errors
    ///
    /// Fails on a second summary or when the text was already set.
    pub fn set_summary(&mut self, summary: DetailsPart) -> Result<(), RenderError> {
        if self.summary.is_some() {
            return Err(RenderError::only_one(SUMMARY_TAG_NAME, TAG_NAME));
        }
        if self.text.is_some() {
            return Err(RenderError::must_be_specified_before(SUMMARY_TAG_NAME, TEXT_TAG_NAME));
        }
        self.summary = Some(summary);
        Ok(())
    }

    /// # Errors
    ///
    /// Fails on a second text.
    pub fn set_text(&mut self, text: DetailsPart) -> Result<(), RenderError> {
        if self.text.is_some() {
            return Err(RenderError::only_one(TEXT_TAG_NAME, TAG_NAME));
        }
        self.text = Some(text);
        Ok(())
    }

    fn finish(self) -> Result<(DetailsPart, DetailsPart), RenderError> {
        let summary = self
            .summary
            .ok_or_else(|| RenderError::child_must_be_provided(SUMMARY_TAG_NAME))?;
        let text = self
            .text
            .ok_or_else(|| RenderError::child_must_be_provided(TEXT_TAG_NAME))?;
        Ok((summary, text))
    }
}

/// `<govuk-details>`.
#[derive(Clone, Debug, Default)]
pub struct DetailsTagHelper {
    open: bool,
}

impl DetailsTagHelper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render expanded.
    #[must_use]
    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }
}

impl TagHelper for DetailsTagHelper {
    fn tag_name(&self) -> &'static str {
        TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let (details, _) = context.scoped(DetailsContext::default(), |context| {
            context.child_content()
        })?;
        let (summary, text) = details.finish()?;

        let element = HtmlElement::new("details")
            .with_class("govuk-details")
            .with_boolean_attribute_if(self.open, "open")
            .with_merged_attributes(&output.take_attributes())
            .with_child(
                HtmlElement::new("summary")
                    .with_class("govuk-details__summary")
                    .with_merged_attributes(&summary.attributes)
                    .with_child(
                        HtmlElement::new("span")
                            .with_class("govuk-details__summary-text")
                            .with_html(summary.content),
                    ),
            )
            .with_child(
                HtmlElement::new("div")
                    .with_class("govuk-details__text")
                    .with_merged_attributes(&text.attributes)
                    .with_html(text.content),
            );

        output.write_element(element);
        Ok(())
    }
}

/// `<govuk-details-summary>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetailsSummaryTagHelper;

impl TagHelper for DetailsSummaryTagHelper {
    fn tag_name(&self) -> &'static str {
        SUMMARY_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<DetailsContext>(SUMMARY_TAG_NAME, TAG_NAME)?;
        let summary = DetailsPart {
            attributes: output.take_attributes(),
            content: context.child_content()?,
        };
        context
            .parent_mut::<DetailsContext>(SUMMARY_TAG_NAME, TAG_NAME)?
            .set_summary(summary)?;
        output.suppress_output();
        Ok(())
    }
}

/// `<govuk-details-text>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetailsTextTagHelper;

impl TagHelper for DetailsTextTagHelper {
    fn tag_name(&self) -> &'static str {
        TEXT_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<DetailsContext>(TEXT_TAG_NAME, TAG_NAME)?;
        let text = DetailsPart {
            attributes: output.take_attributes(),
            content: context.child_content()?,
        };
        context
            .parent_mut::<DetailsContext>(TEXT_TAG_NAME, TAG_NAME)?
            .set_text(text)?;
        output.suppress_output();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::Node;
    use crate::testing::{render, text};
    use pretty_assertions::assert_eq;

    fn summary(content: &str) -> Node {
        Node::component(DetailsSummaryTagHelper)
            .child(text(content))
            .into()
    }

    fn details_text(content: &str) -> Node {
        Node::component(DetailsTextTagHelper)
            .child(text(content))
            .into()
    }

    #[test]
    fn test_open_details() {
        let html = render(
            Node::component(DetailsTagHelper::new().with_open(true))
                .attributes("id=help")
                .child(summary("Help with nationality"))
                .child(details_text("We need to know your nationality.")),
        )
        .unwrap();
        assert_eq!(
            html,
            "<details class=\"govuk-details\" open id=\"help\">\
             <summary class=\"govuk-details__summary\">\
             <span class=\"govuk-details__summary-text\">Help with nationality</span></summary>\
             <div class=\"govuk-details__text\">We need to know your nationality.</div>\
             </details>"
        );
    }

    #[test]
    fn test_summary_after_text() {
        let error = render(
            Node::component(DetailsTagHelper::new())
                .child(details_text("Text"))
                .child(summary("Summary")),
        )
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            "<govuk-details-summary> must be specified before <govuk-details-text>."
        );
    }

    #[test]
    fn test_second_summary() {
        let error = render(
            Node::component(DetailsTagHelper::new())
                .child(summary("One"))
                .child(summary("Two")),
        )
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Only one <govuk-details-summary> element is permitted within each <govuk-details>."
        );
    }

    #[test]
    fn test_missing_text() {
        let error = render(Node::component(DetailsTagHelper::new()).child(summary("Summary"))).unwrap_err();
        assert_eq!(error, RenderError::child_must_be_provided("govuk-details-text"));
    }

    #[test]
    fn test_summary_outside_details() {
        let error = render(summary("Summary")).unwrap_err();
        assert_eq!(
            error.to_string(),
            "<govuk-details-summary> must be inside <govuk-details>."
        );
    }
}
