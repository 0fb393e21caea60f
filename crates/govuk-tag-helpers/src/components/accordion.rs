//! `<govuk-accordion>`: sections that expand and collapse.
//!
//! ```text
//! <govuk-accordion id="...">
//!   <govuk-accordion-item expanded>
//!     <govuk-accordion-item-heading>...</govuk-accordion-item-heading>
//!     <govuk-accordion-item-summary>...</govuk-accordion-item-summary>
//!     content
//!   </govuk-accordion-item>
//! </govuk-accordion>
//! ```

use govuk_html::{AttributeDictionary, HtmlElement, HtmlString};

use crate::error::RenderError;
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

use super::{heading_tag, validate_heading_level};

const TAG_NAME: &str = "govuk-accordion";
const ITEM_TAG_NAME: &str = "govuk-accordion-item";
const ITEM_HEADING_TAG_NAME: &str = "govuk-accordion-item-heading";
const ITEM_SUMMARY_TAG_NAME: &str = "govuk-accordion-item-summary";

const DEFAULT_HEADING_LEVEL: u8 = 2;

/// A section's heading or summary.
#[derive(Clone, Debug, Default)]
pub struct AccordionItemPart {
    pub attributes: AttributeDictionary,
    pub content: HtmlString,
}

/// A finished section.
#[derive(Clone, Debug, Default)]
pub struct AccordionItem {
    /// Open on first load.
    pub expanded: bool,
    pub attributes: AttributeDictionary,
    pub heading: AccordionItemPart,
    pub summary: Option<AccordionItemPart>,
    /// The section body.
    pub content: HtmlString,
}

/// Sections collected by `<govuk-accordion>`.
#[derive(Clone, Debug, Default)]
pub struct AccordionContext {
    items: Vec<AccordionItem>,
}

impl AccordionContext {
    /// Sections in document order.
    #[must_use]
    pub fn items(&self) -> &[AccordionItem] {
        &self.items
    }

    /// Append a section.
    pub fn add_item(&mut self, item: AccordionItem) {
        self.items.push(item);
    }
}

/// A required heading, then an optional summary.
#[derive(Clone, Debug, Default)]
pub struct AccordionItemContext {
    heading: Option<AccordionItemPart>,
    summary: Option<AccordionItemPart>,
}

impl AccordionItemContext {
    /// # Errors
    ///
    /// Fails on a second heading or when a summary was already set.
    pub fn set_heading(&mut self, heading: AccordionItemPart) -> Result<(), RenderError> {
        if self.heading.is_some() {
            return Err(RenderError::only_one(ITEM_HEADING_TAG_NAME, ITEM_TAG_NAME));
        }
        if self.summary.is_some() {
            return Err(RenderError::must_be_specified_before(
                ITEM_HEADING_TAG_NAME,
                ITEM_SUMMARY_TAG_NAME,
            ));
        }
        self.heading = Some(heading);
        Ok(())
    }

    /// # Errors
    ///
    /// Fails on a second summary.
    pub fn set_summary(&mut self, summary: AccordionItemPart) -> Result<(), RenderError> {
        if self.summary.is_some() {
            return Err(RenderError::only_one(ITEM_SUMMARY_TAG_NAME, ITEM_TAG_NAME));
        }
        self.summary = Some(summary);
        Ok(())
    }
}

/// `<govuk-accordion>`.
#[derive(Clone, Debug)]
pub struct AccordionTagHelper {
    id: Option<String>,
    heading_level: u8,
    remember_expanded: bool,
}

impl AccordionTagHelper {
    /// An accordion with `h2` headings that remembers expanded sections.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: None,
            heading_level: DEFAULT_HEADING_LEVEL,
            remember_expanded: true,
        }
    }

    /// Required. Prefix of every section's ids.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// # Errors
    ///
    /// Returns a range error unless `level` is between 1 and 6.
    pub fn with_heading_level(mut self, level: u8) -> Result<Self, RenderError> {
        self.heading_level = validate_heading_level(level)?;
        Ok(self)
    }

    /// Whether the browser restores each section's state on reload.
    #[must_use]
    pub fn with_remember_expanded(mut self, remember_expanded: bool) -> Self {
        self.remember_expanded = remember_expanded;
        self
    }

    fn generate_section(&self, id: &str, index: usize, item: AccordionItem) -> HtmlElement {
        let heading_id = format!("{id}-heading-{index}");
        let content_id = format!("{id}-content-{index}");
        let summary_id = format!("{id}-summary-{index}");

        let header = HtmlElement::new("div")
            .with_class("govuk-accordion__section-header")
            .with_child(
                HtmlElement::new(heading_tag(self.heading_level))
                    .with_class("govuk-accordion__section-heading")
                    .with_child(
                        HtmlElement::new("span")
                            .with_class("govuk-accordion__section-button")
                            .with_attribute("id", heading_id.as_str())
                            .with_merged_attributes(&item.heading.attributes)
                            .with_html(item.heading.content),
                    ),
            )
            .with_child_opt(item.summary.map(|summary| {
                HtmlElement::new("div")
                    .with_class("govuk-accordion__section-summary govuk-body")
                    .with_attribute("id", summary_id)
                    .with_merged_attributes(&summary.attributes)
                    .with_html(summary.content)
            }));

        HtmlElement::new("div")
            .with_class("govuk-accordion__section")
            .with_class_if(item.expanded, "govuk-accordion__section--expanded")
            .with_merged_attributes(&item.attributes)
            .with_child(header)
            .with_child(
                HtmlElement::new("div")
                    .with_attribute("id", content_id)
                    .with_class("govuk-accordion__section-content")
                    .with_attribute("aria-labelledby", heading_id)
                    .with_html(item.content),
            )
    }
}

impl Default for AccordionTagHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl TagHelper for AccordionTagHelper {
    fn tag_name(&self) -> &'static str {
        TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let id = self
            .id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| RenderError::attribute_required("id"))?;

        let (accordion, _) = context.scoped(AccordionContext::default(), |context| {
            context.child_content()
        })?;

        let mut element = HtmlElement::new("div")
            .with_class("govuk-accordion")
            .with_attribute("data-module", "govuk-accordion")
            .with_attribute("id", id)
            .with_attribute_opt(
                "data-remember-expanded",
                (!self.remember_expanded).then_some("false"),
            )
            .with_merged_attributes(&output.take_attributes());

        for (index, item) in accordion.items.into_iter().enumerate() {
            element.push_child(self.generate_section(id, index, item));
        }

        output.write_element(element);
        Ok(())
    }
}

/// `<govuk-accordion-item>`. Content other than the heading and summary is
/// the section's body.
#[derive(Clone, Debug, Default)]
pub struct AccordionItemTagHelper {
    expanded: bool,
}

impl AccordionItemTagHelper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the section on first load.
    #[must_use]
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }
}

impl TagHelper for AccordionItemTagHelper {
    fn tag_name(&self) -> &'static str {
        ITEM_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<AccordionContext>(ITEM_TAG_NAME, TAG_NAME)?;

        let (item_context, content) = context.scoped(AccordionItemContext::default(), |context| {
            context.child_content()
        })?;
        let heading = item_context
            .heading
            .ok_or_else(|| RenderError::missing_element(ITEM_HEADING_TAG_NAME))?;

        let item = AccordionItem {
            expanded: self.expanded,
            attributes: output.take_attributes(),
            heading,
            summary: item_context.summary,
            content,
        };
        context
            .parent_mut::<AccordionContext>(ITEM_TAG_NAME, TAG_NAME)?
            .add_item(item);
        output.suppress_output();
        Ok(())
    }
}

/// `<govuk-accordion-item-heading>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AccordionItemHeadingTagHelper;

impl TagHelper for AccordionItemHeadingTagHelper {
    fn tag_name(&self) -> &'static str {
        ITEM_HEADING_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<AccordionItemContext>(ITEM_HEADING_TAG_NAME, ITEM_TAG_NAME)?;
        let heading = AccordionItemPart {
            attributes: output.take_attributes(),
            content: context.child_content()?,
        };
        context
            .parent_mut::<AccordionItemContext>(ITEM_HEADING_TAG_NAME, ITEM_TAG_NAME)?
            .set_heading(heading)?;
        output.suppress_output();
        Ok(())
    }
}

/// `<govuk-accordion-item-summary>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AccordionItemSummaryTagHelper;

impl TagHelper for AccordionItemSummaryTagHelper {
    fn tag_name(&self) -> &'static str {
        ITEM_SUMMARY_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<AccordionItemContext>(ITEM_SUMMARY_TAG_NAME, ITEM_TAG_NAME)?;
        let summary = AccordionItemPart {
            attributes: output.take_attributes(),
            content: context.child_content()?,
        };
        context
            .parent_mut::<AccordionItemContext>(ITEM_SUMMARY_TAG_NAME, ITEM_TAG_NAME)?
            .set_summary(summary)?;
        output.suppress_output();
        Ok(())
    }
}
