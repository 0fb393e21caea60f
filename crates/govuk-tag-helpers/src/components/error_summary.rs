//! `<govuk-error-summary>`.
//!
//! Items can point at a bound field with `asp-for`: the link targets the
//! field's generated id and the content falls back to the field's
//! validation message. A summary with no title, description or items
//! renders nothing.

use govuk_html::{AttributeDictionary, HtmlElement, HtmlString};

use crate::date::DateInputErrorComponents;
use crate::error::RenderError;
use crate::form_group::non_empty;
use crate::model::{ModelExpression, ModelHelper};
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

const TAG_NAME: &str = "govuk-error-summary";
const TITLE_TAG_NAME: &str = "govuk-error-summary-title";
const DESCRIPTION_TAG_NAME: &str = "govuk-error-summary-description";
const ITEM_TAG_NAME: &str = "govuk-error-summary-item";

const DEFAULT_TITLE: &str = "There is a problem";

/// The title or description.
#[derive(Clone, Debug, Default)]
pub struct ErrorSummaryPart {
    pub attributes: AttributeDictionary,
    pub content: HtmlString,
}

/// One error in the list.
#[derive(Clone, Debug, Default)]
pub struct ErrorSummaryItem {
    /// Link to the field in error. Items without one render as plain text.
    pub href: Option<String>,
    pub attributes: AttributeDictionary,
    pub content: HtmlString,
}

/// Title, description, then items.
#[derive(Clone, Debug, Default)]
pub struct ErrorSummaryContext {
    title: Option<ErrorSummaryPart>,
    description: Option<ErrorSummaryPart>,
    items: Vec<ErrorSummaryItem>,
}

impl ErrorSummaryContext {
    /// Items in document order.
    #[must_use]
    pub fn items(&self) -> &[ErrorSummaryItem] {
        &self.items
    }

    /// Nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.items.is_empty()
    }

    /// # Errors
    ///
    /// Fails on a second title, or when the description or an item was
    /// already added.
    pub fn set_title(&mut self, title: ErrorSummaryPart) -> Result<(), RenderError> {
        if self.title.is_some() {
            return Err(RenderError::only_one(TITLE_TAG_NAME, TAG_NAME));
        }
        if self.description.is_some() {
            return Err(RenderError::must_be_specified_before(TITLE_TAG_NAME, DESCRIPTION_TAG_NAME));
        }
        if !self.items.is_empty() {
            return Err(RenderError::must_be_specified_before(TITLE_TAG_NAME, ITEM_TAG_NAME));
        }
        self.title = Some(title);
        Ok(())
    }

    /// # Errors
    ///
    /// Fails on a second description or when an item was already added.
    pub fn set_description(&mut self, description: ErrorSummaryPart) -> Result<(), RenderError> {
        if self.description.is_some() {
            return Err(RenderError::only_one(DESCRIPTION_TAG_NAME, TAG_NAME));
        }
        if !self.items.is_empty() {
            return Err(RenderError::must_be_specified_before(DESCRIPTION_TAG_NAME, ITEM_TAG_NAME));
        }
        self.description = Some(description);
        Ok(())
    }

    /// Append an item.
    pub fn add_item(&mut self, item: ErrorSummaryItem) {
        self.items.push(item);
    }
}

/// `<govuk-error-summary>`.
#[derive(Clone, Debug, Default)]
pub struct ErrorSummaryTagHelper {
    disable_auto_focus: Option<bool>,
}

impl ErrorSummaryTagHelper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the summary taking focus on page load.
    #[must_use]
    pub fn with_disable_auto_focus(mut self, disable_auto_focus: bool) -> Self {
        self.disable_auto_focus = Some(disable_auto_focus);
        self
    }
}

impl TagHelper for ErrorSummaryTagHelper {
    fn tag_name(&self) -> &'static str {
        TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let (summary, _) = context.scoped(ErrorSummaryContext::default(), |context| {
            context.child_content()
        })?;

        if summary.is_empty() {
            output.suppress_output();
            return Ok(());
        }

        let title = summary.title.unwrap_or_else(|| ErrorSummaryPart {
            attributes: AttributeDictionary::new(),
            content: HtmlString::from_text(DEFAULT_TITLE),
        });

        let mut list = HtmlElement::new("ul").with_class("govuk-list govuk-error-summary__list");
        for item in summary.items {
            let entry = match item.href {
                Some(href) => HtmlElement::new("li").with_child(
                    HtmlElement::new("a")
                        .with_attribute("href", href)
                        .with_merged_attributes(&item.attributes)
                        .with_html(item.content),
                ),
                None => HtmlElement::new("li")
                    .with_merged_attributes(&item.attributes)
                    .with_html(item.content),
            };
            list.push_child(entry);
        }

        let body = HtmlElement::new("div")
            .with_class("govuk-error-summary__body")
            .with_child_opt(summary.description.map(|description| {
                HtmlElement::new("p")
                    .with_merged_attributes(&description.attributes)
                    .with_html(description.content)
            }))
            .with_child(list);

        let element = HtmlElement::new("div")
            .with_class("govuk-error-summary")
            .with_attribute("data-module", "govuk-error-summary")
            .with_attribute_opt(
                "data-disable-auto-focus",
                self.disable_auto_focus.map(|disable| disable.to_string()),
            )
            .with_merged_attributes(&output.take_attributes())
            .with_child(
                HtmlElement::new("div")
                    .with_attribute("role", "alert")
                    .with_child(
                        HtmlElement::new("h2")
                            .with_class("govuk-error-summary__title")
                            .with_merged_attributes(&title.attributes)
                            .with_html(title.content),
                    )
                    .with_child(body),
            );

        output.write_element(element);
        Ok(())
    }
}

/// `<govuk-error-summary-title>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ErrorSummaryTitleTagHelper;

impl TagHelper for ErrorSummaryTitleTagHelper {
    fn tag_name(&self) -> &'static str {
        TITLE_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<ErrorSummaryContext>(TITLE_TAG_NAME, TAG_NAME)?;
        let title = ErrorSummaryPart {
            attributes: output.take_attributes(),
            content: context.child_content()?,
        };
        context
            .parent_mut::<ErrorSummaryContext>(TITLE_TAG_NAME, TAG_NAME)?
            .set_title(title)?;
        output.suppress_output();
        Ok(())
    }
}

/// `<govuk-error-summary-description>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ErrorSummaryDescriptionTagHelper;

impl TagHelper for ErrorSummaryDescriptionTagHelper {
    fn tag_name(&self) -> &'static str {
        DESCRIPTION_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<ErrorSummaryContext>(DESCRIPTION_TAG_NAME, TAG_NAME)?;
        let description = ErrorSummaryPart {
            attributes: output.take_attributes(),
            content: context.child_content()?,
        };
        context
            .parent_mut::<ErrorSummaryContext>(DESCRIPTION_TAG_NAME, TAG_NAME)?
            .set_description(description)?;
        output.suppress_output();
        Ok(())
    }
}

/// `<govuk-error-summary-item>`.
#[derive(Clone, Debug, Default)]
pub struct ErrorSummaryItemTagHelper {
    href: Option<String>,
    asp_for: Option<ModelExpression>,
}

impl ErrorSummaryItemTagHelper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Link target. Exclusive with `asp-for`.
    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Link to a bound field and default the content to its error.
    #[must_use]
    pub fn with_asp_for(mut self, expression: impl Into<ModelExpression>) -> Self {
        self.asp_for = Some(expression.into());
        self
    }

    /// `#id` of the field, or of the first date part in error for date
    /// inputs.
    fn field_href(model: &dyn ModelHelper, expression: &ModelExpression) -> String {
        let id = model.generate_id(expression);
        let components = model
            .date_input_parse_errors(expression)
            .map(|errors| errors.error_components())
            .unwrap_or_default();

        let part = [
            (DateInputErrorComponents::DAY, "Day"),
            (DateInputErrorComponents::MONTH, "Month"),
            (DateInputErrorComponents::YEAR, "Year"),
        ]
        .into_iter()
        .find_map(|(component, part)| components.contains(component).then_some(part));

        match part {
            Some(part) => format!("#{id}.{part}"),
            None => format!("#{id}"),
        }
    }
}

impl TagHelper for ErrorSummaryItemTagHelper {
    fn tag_name(&self) -> &'static str {
        ITEM_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<ErrorSummaryContext>(ITEM_TAG_NAME, TAG_NAME)?;
        let attributes = output.take_attributes();
        output.suppress_output();

        if self.href.is_some() && self.asp_for.is_some() {
            return Err(RenderError::only_one_attribute("href", "asp-for"));
        }

        let content = non_empty(context.child_content()?);
        let model = context.model();

        let (href, content) = match (&self.asp_for, content) {
            (Some(expression), content) => {
                let Some(content) = content.or_else(|| {
                    model
                        .validation_message(expression)
                        .map(|message| HtmlString::from_text(&message))
                }) else {
                    tracing::debug!(field = expression.name(), "No error for error summary item");
                    return Ok(());
                };
                (Some(Self::field_href(model, expression)), content)
            }
            (None, Some(content)) => (self.href.clone(), content),
            (None, None) => {
                return Err(RenderError::Configuration(
                    "Content is required when the 'asp-for' attribute is not specified.".to_owned(),
                ));
            }
        };

        let item = ErrorSummaryItem {
            href,
            attributes,
            content,
        };
        context
            .parent_mut::<ErrorSummaryContext>(ITEM_TAG_NAME, TAG_NAME)?
            .add_item(item);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::DateInputParseErrors;
    use crate::model::{FormField, FormModel};
    use crate::rendering::Node;
    use crate::testing::{render, render_with_model, text};
    use pretty_assertions::assert_eq;

    fn item(href: &str, message: &str) -> Node {
        Node::component(ErrorSummaryItemTagHelper::new().with_href(href))
            .child(text(message))
            .into()
    }

    #[test]
    fn test_default_title_with_items() {
        let html = render(
            Node::component(ErrorSummaryTagHelper::new())
                .child(item("#name", "Enter your full name")),
        )
        .unwrap();
        assert_eq!(
            html,
            "<div class=\"govuk-error-summary\" data-module=\"govuk-error-summary\">\
             <div role=\"alert\">\
             <h2 class=\"govuk-error-summary__title\">There is a problem</h2>\
             <div class=\"govuk-error-summary__body\">\
             <ul class=\"govuk-list govuk-error-summary__list\">\
             <li><a href=\"#name\">Enter your full name</a></li>\
             </ul></div></div></div>"
        );
    }

    #[test]
    fn test_empty_summary_renders_nothing() {
        let html = render(Node::component(ErrorSummaryTagHelper::new())).unwrap();
        assert_eq!(html, "");
    }

    #[test]
    fn test_title_and_description() {
        let html = render(
            Node::component(ErrorSummaryTagHelper::new().with_disable_auto_focus(true))
                .child(Node::component(ErrorSummaryTitleTagHelper).child(text("Fix these")))
                .child(Node::component(ErrorSummaryDescriptionTagHelper).child(text("Details")))
                .child(Node::component(ErrorSummaryItemTagHelper::new()).child(text("No link"))),
        )
        .unwrap();
        assert!(html.starts_with(
            "<div class=\"govuk-error-summary\" data-module=\"govuk-error-summary\" data-disable-auto-focus=\"true\">"
        ));
        assert!(html.contains("<h2 class=\"govuk-error-summary__title\">Fix these</h2>"));
        assert!(html.contains(
            "<div class=\"govuk-error-summary__body\"><p>Details</p>\
             <ul class=\"govuk-list govuk-error-summary__list\"><li>No link</li></ul>"
        ));
    }

    #[test]
    fn test_item_from_model() {
        let model = FormModel::new()
            .with_field("Email", FormField::new().with_error("Enter an email address"))
            .with_field("Phone", FormField::new());
        let html = render_with_model(
            &model,
            Node::component(ErrorSummaryTagHelper::new())
                .child(Node::component(ErrorSummaryItemTagHelper::new().with_asp_for("Email")))
                .child(Node::component(ErrorSummaryItemTagHelper::new().with_asp_for("Phone"))),
        )
        .unwrap();
        assert!(html.contains(
            "<ul class=\"govuk-list govuk-error-summary__list\">\
             <li><a href=\"#Email\">Enter an email address</a></li></ul>"
        ));
    }

    #[test]
    fn test_item_links_to_first_date_part_in_error() {
        let model = FormModel::new().with_field(
            "DateOfBirth",
            FormField::new()
                .with_error("Date of birth must include a month")
                .with_date_parse_errors(DateInputParseErrors::MISSING_MONTH),
        );
        let html = render_with_model(
            &model,
            Node::component(ErrorSummaryTagHelper::new())
                .child(Node::component(ErrorSummaryItemTagHelper::new().with_asp_for("DateOfBirth"))),
        )
        .unwrap();
        assert!(html.contains("<a href=\"#DateOfBirth.Month\">Date of birth must include a month</a>"));
    }

    #[test]
    fn test_item_without_content() {
        let error = render(
            Node::component(ErrorSummaryTagHelper::new())
                .child(Node::component(ErrorSummaryItemTagHelper::new().with_href("#x"))),
        )
        .unwrap_err();
        assert!(matches!(error, RenderError::Configuration(_)));
    }

    #[test]
    fn test_href_and_asp_for() {
        let error = render(
            Node::component(ErrorSummaryTagHelper::new()).child(
                Node::component(ErrorSummaryItemTagHelper::new().with_href("#x").with_asp_for("X"))
                    .child(text("Message")),
            ),
        )
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Only one of the 'href' or 'asp-for' attributes can be specified."
        );
    }

    #[test]
    fn test_title_after_item() {
        let error = render(
            Node::component(ErrorSummaryTagHelper::new())
                .child(item("#a", "A"))
                .child(Node::component(ErrorSummaryTitleTagHelper).child(text("Title"))),
        )
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            "<govuk-error-summary-title> must be specified before <govuk-error-summary-item>."
        );
    }

    #[test]
    fn test_description_after_item() {
        let error = render(
            Node::component(ErrorSummaryTagHelper::new())
                .child(item("#a", "A"))
                .child(Node::component(ErrorSummaryDescriptionTagHelper).child(text("D"))),
        )
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            "<govuk-error-summary-description> must be specified before <govuk-error-summary-item>."
        );
    }
}
