//! `<govuk-panel>`: a confirmation panel.

use govuk_html::{HtmlElement, HtmlString};

use crate::error::RenderError;
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

use super::{heading_tag, validate_heading_level};

const TAG_NAME: &str = "govuk-panel";
const TITLE_TAG_NAME: &str = "govuk-panel-title";
const BODY_TAG_NAME: &str = "govuk-panel-body";

const DEFAULT_HEADING_LEVEL: u8 = 1;

/// A required title, then an optional body.
#[derive(Clone, Debug, Default)]
pub struct PanelContext {
    title: Option<HtmlString>,
    body: Option<HtmlString>,
}

impl PanelContext {
    /// # Errors
    ///
    /// Fails on a second title or when the body was already set.
    pub fn set_title(&mut self, title: HtmlString) -> Result<(), RenderError> {
        if self.title.is_some() {
            return Err(RenderError::only_one(TITLE_TAG_NAME, TAG_NAME));
        }
        if self.body.is_some() {
            return Err(RenderError::must_be_specified_before(TITLE_TAG_NAME, BODY_TAG_NAME));
        }
        self.title = Some(title);
        Ok(())
    }

    /// # Errors
    ///
    /// Fails on a second body.
    pub fn set_body(&mut self, body: HtmlString) -> Result<(), RenderError> {
        if self.body.is_some() {
            return Err(RenderError::only_one(BODY_TAG_NAME, TAG_NAME));
        }
        self.body = Some(body);
        Ok(())
    }
}

/// `<govuk-panel>`.
#[derive(Clone, Debug)]
pub struct PanelTagHelper {
    heading_level: u8,
}

impl PanelTagHelper {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heading_level: DEFAULT_HEADING_LEVEL,
        }
    }

    /// # Errors
    ///
    /// Returns a range error unless `level` is between 1 and 6.
    pub fn with_heading_level(mut self, level: u8) -> Result<Self, RenderError> {
        self.heading_level = validate_heading_level(level)?;
        Ok(self)
    }
}

impl Default for PanelTagHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl TagHelper for PanelTagHelper {
    fn tag_name(&self) -> &'static str {
        TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let (panel, _) = context.scoped(PanelContext::default(), |context| {
            context.child_content()
        })?;
        let title = panel
            .title
            .ok_or_else(|| RenderError::child_must_be_provided(TITLE_TAG_NAME))?;

        let element = HtmlElement::new("div")
            .with_class("govuk-panel govuk-panel--confirmation")
            .with_merged_attributes(&output.take_attributes())
            .with_child(
                HtmlElement::new(heading_tag(self.heading_level))
                    .with_class("govuk-panel__title")
                    .with_html(title),
            )
            .with_child_opt(panel.body.map(|body| {
                HtmlElement::new("div")
                    .with_class("govuk-panel__body")
                    .with_html(body)
            }));

        output.write_element(element);
        Ok(())
    }
}

/// `<govuk-panel-title>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanelTitleTagHelper;

impl TagHelper for PanelTitleTagHelper {
    fn tag_name(&self) -> &'static str {
        TITLE_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<PanelContext>(TITLE_TAG_NAME, TAG_NAME)?;
        let title = context.child_content()?;
        context
            .parent_mut::<PanelContext>(TITLE_TAG_NAME, TAG_NAME)?
            .set_title(title)?;
        output.suppress_output();
        Ok(())
    }
}

/// `<govuk-panel-body>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanelBodyTagHelper;

impl TagHelper for PanelBodyTagHelper {
    fn tag_name(&self) -> &'static str {
        BODY_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<PanelContext>(BODY_TAG_NAME, TAG_NAME)?;
        let body = context.child_content()?;
        context
            .parent_mut::<PanelContext>(BODY_TAG_NAME, TAG_NAME)?
            .set_body(body)?;
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

    fn title(content: &str) -> Node {
        Node::component(PanelTitleTagHelper).child(text(content)).into()
    }

    fn body(content: &str) -> Node {
        Node::component(PanelBodyTagHelper).child(text(content)).into()
    }

    #[test]
    fn test_title_and_body() {
        let html = render(
            Node::component(PanelTagHelper::new())
                .child(title("Application complete"))
                .child(body("Your reference number is HDJ2123F")),
        )
        .unwrap();
        assert_eq!(
            html,
            "<div class=\"govuk-panel govuk-panel--confirmation\">\
             <h1 class=\"govuk-panel__title\">Application complete</h1>\
             <div class=\"govuk-panel__body\">Your reference number is HDJ2123F</div>\
             </div>"
        );
    }

    #[test]
    fn test_heading_level() {
        let html = render(
            Node::component(PanelTagHelper::new().with_heading_level(3).unwrap()).child(title("Done")),
        )
        .unwrap();
        assert_eq!(
            html,
            "<div class=\"govuk-panel govuk-panel--confirmation\"><h3 class=\"govuk-panel__title\">Done</h3></div>"
        );
    }

    #[test]
    fn test_heading_level_out_of_range() {
        let error = PanelTagHelper::new().with_heading_level(0).unwrap_err();
        assert!(matches!(error, RenderError::Range(_)));
    }

    #[test]
    fn test_missing_title() {
        let error = render(Node::component(PanelTagHelper::new()).child(body("Body"))).unwrap_err();
        assert_eq!(error.to_string(), "A <govuk-panel-title> element must be provided.");
    }

    #[test]
    fn test_title_after_body() {
        let error = render(
            Node::component(PanelTagHelper::new())
                .child(body("Body"))
                .child(title("Title")),
        )
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            "<govuk-panel-title> must be specified before <govuk-panel-body>."
        );
    }
}
