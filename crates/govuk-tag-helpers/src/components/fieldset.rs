//! `<govuk-fieldset>`: groups related form controls under a legend.

use crate::error::RenderError;
use crate::form_group::{FieldsetLegend, FormGroupFieldset};
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

const TAG_NAME: &str = "govuk-fieldset";
const LEGEND_TAG_NAME: &str = "govuk-fieldset-legend";

/// An optional legend. Everything else is the fieldset's content.
#[derive(Clone, Debug, Default)]
pub struct FieldsetContext {
    legend: Option<FieldsetLegend>,
}

impl FieldsetContext {
    /// # Errors
    ///
    /// Fails on a second legend.
    pub fn set_legend(&mut self, legend: FieldsetLegend) -> Result<(), RenderError> {
        if self.legend.is_some() {
            return Err(RenderError::only_one(LEGEND_TAG_NAME, TAG_NAME));
        }
        self.legend = Some(legend);
        Ok(())
    }
}

/// `<govuk-fieldset>`. Everything other than the legend is the fieldset's
/// content.
#[derive(Clone, Debug, Default)]
pub struct FieldsetTagHelper {
    described_by: Option<String>,
    role: Option<String>,
}

impl FieldsetTagHelper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `aria-describedby` of the fieldset.
    #[must_use]
    pub fn with_described_by(mut self, described_by: impl Into<String>) -> Self {
        self.described_by = Some(described_by.into());
        self
    }

    /// `role` of the fieldset.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

impl TagHelper for FieldsetTagHelper {
    fn tag_name(&self) -> &'static str {
        TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        if context.items().contains::<FieldsetContext>() {
            return Err(RenderError::cannot_be_nested(TAG_NAME));
        }

        let (fieldset, content) = context.scoped(FieldsetContext::default(), |context| {
            context.child_content()
        })?;
        let legend = fieldset
            .legend
            .ok_or_else(|| RenderError::child_must_be_provided(LEGEND_TAG_NAME))?;

        let fieldset = FormGroupFieldset {
            described_by: self.described_by.clone(),
            attributes: output.take_attributes(),
            legend,
        };
        output.write_element(fieldset.to_element(
            self.role.as_deref(),
            fieldset.described_by.as_deref(),
            content,
        ));
        Ok(())
    }
}

/// `<govuk-fieldset-legend>`.
#[derive(Clone, Debug, Default)]
pub struct FieldsetLegendTagHelper {
    is_page_heading: bool,
}

impl FieldsetLegendTagHelper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the legend text inside an `h1`.
    #[must_use]
    pub fn with_is_page_heading(mut self, is_page_heading: bool) -> Self {
        self.is_page_heading = is_page_heading;
        self
    }
}

impl TagHelper for FieldsetLegendTagHelper {
    fn tag_name(&self) -> &'static str {
        LEGEND_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<FieldsetContext>(LEGEND_TAG_NAME, TAG_NAME)?;
        let legend = FieldsetLegend {
            is_page_heading: self.is_page_heading,
            attributes: output.take_attributes(),
            content: context.child_content()?,
        };
        context
            .parent_mut::<FieldsetContext>(LEGEND_TAG_NAME, TAG_NAME)?
            .set_legend(legend)?;
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

    fn legend(content: &str) -> Node {
        Node::component(FieldsetLegendTagHelper::new())
            .child(text(content))
            .into()
    }

    #[test]
    fn test_fieldset_with_content() {
        let html = render(
            Node::component(FieldsetTagHelper::new().with_described_by("address-hint").with_role("group"))
                .child(
                    Node::component(FieldsetLegendTagHelper::new().with_is_page_heading(true))
                        .attributes("class=govuk-fieldset__legend--l")
                        .child(text("What is your address?")),
                )
                .child(Node::element("p").child(text("Content"))),
        )
        .unwrap();
        assert_eq!(
            html,
            "<fieldset class=\"govuk-fieldset\" role=\"group\" aria-describedby=\"address-hint\">\
             <legend class=\"govuk-fieldset__legend govuk-fieldset__legend--l\">\
             <h1 class=\"govuk-fieldset__heading\">What is your address?</h1></legend>\
             <p>Content</p></fieldset>"
        );
    }

    #[test]
    fn test_missing_legend() {
        let error = render(Node::component(FieldsetTagHelper::new()).child(text("Content"))).unwrap_err();
        assert_eq!(error.to_string(), "A <govuk-fieldset-legend> element must be provided.");
    }

    #[test]
    fn test_nested_fieldset() {
        let error = render(
            Node::component(FieldsetTagHelper::new())
                .child(legend("Outer"))
                .child(Node::component(FieldsetTagHelper::new()).child(legend("Inner"))),
        )
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            "<govuk-fieldset> cannot be nested inside another <govuk-fieldset>."
        );
    }

    #[test]
    fn test_second_legend() {
        let error = render(
            Node::component(FieldsetTagHelper::new())
                .child(legend("One"))
                .child(legend("Two")),
        )
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Only one <govuk-fieldset-legend> element is permitted within each <govuk-fieldset>."
        );
    }
}
