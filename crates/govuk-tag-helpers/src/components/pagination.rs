//! `<govuk-pagination>`.
//!
//! Children arrive as an optional previous link, then page items and
//! ellipses, then an optional next link. Without any items the component
//! renders in block mode: stacked previous/next links with optional labels.

use govuk_html::{AttributeDictionary, HtmlElement, HtmlString};

use crate::error::RenderError;
use crate::form_group::non_empty;
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

const TAG_NAME: &str = "govuk-pagination";
const PREVIOUS_TAG_NAME: &str = "govuk-pagination-previous";
const ITEM_TAG_NAME: &str = "govuk-pagination-item";
const ELLIPSIS_TAG_NAME: &str = "govuk-pagination-ellipsis";
const NEXT_TAG_NAME: &str = "govuk-pagination-next";

const DEFAULT_LANDMARK_LABEL: &str = "results";

const PREVIOUS_ARROW_PATH: &str = "m6.5938-0.0078125-6.7266 6.7266 6.7441 6.4062 1.377-1.449-4.1856-3.9768h12.896v-2h-12.984l4.2931-4.293-1.414-1.414z";
const NEXT_ARROW_PATH: &str = "m8.107-0.0078125-1.4136 1.414 4.2926 4.293h-12.986v2h12.896l-4.1855 3.9766 1.377 1.4492 6.7441-6.4062-6.7246-6.7266z";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Previous,
    Next,
}

impl Direction {
    fn tag_name(self) -> &'static str {
        match self {
            Self::Previous => PREVIOUS_TAG_NAME,
            Self::Next => NEXT_TAG_NAME,
        }
    }

    fn short_name(self) -> &'static str {
        match self {
            Self::Previous => "prev",
            Self::Next => "next",
        }
    }

    fn default_text(self) -> &'static str {
        match self {
            Self::Previous => "Previous",
            Self::Next => "Next",
        }
    }

    fn arrow(self) -> HtmlElement {
        let path = match self {
            Self::Previous => PREVIOUS_ARROW_PATH,
            Self::Next => NEXT_ARROW_PATH,
        };
        HtmlElement::new("svg")
            .with_class("govuk-pagination__icon")
            .with_class(&format!("govuk-pagination__icon--{}", self.short_name()))
            .with_attribute("xmlns", "http://www.w3.org/2000/svg")
            .with_attribute("height", "13")
            .with_attribute("width", "15")
            .with_attribute("aria-hidden", "true")
            .with_attribute("focusable", "false")
            .with_attribute("viewBox", "0 0 15 13")
            .with_child(HtmlElement::new("path").with_attribute("d", path))
    }
}

/// A previous or next link.
#[derive(Clone, Debug, Default)]
pub struct PaginationLink {
    /// Link target.
    pub href: String,
    /// Secondary text under the link, e.g. the page's title.
    pub label_text: Option<String>,
    pub attributes: AttributeDictionary,
    /// Link text; defaults to "Previous" or "Next".
    pub content: Option<HtmlString>,
}

/// A numbered page link.
#[derive(Clone, Debug, Default)]
pub struct PaginationPage {
    pub href: String,
    /// The page number, from the item's content.
    pub number: HtmlString,
    /// Marks the current page.
    pub is_current: bool,
    pub visually_hidden_text: Option<String>,
    pub attributes: AttributeDictionary,
}

/// An entry in the page list.
#[derive(Clone, Debug)]
pub enum PaginationItem {
    /// A numbered page.
    Page(PaginationPage),
    /// A gap between page numbers.
    Ellipsis { attributes: AttributeDictionary },
}

impl PaginationItem {
    fn tag_name(&self) -> &'static str {
        match self {
            Self::Page(_) => ITEM_TAG_NAME,
            Self::Ellipsis { .. } => ELLIPSIS_TAG_NAME,
        }
    }
}

/// Previous link, page items, then next link.
#[derive(Clone, Debug, Default)]
pub struct PaginationContext {
    previous: Option<PaginationLink>,
    items: Vec<PaginationItem>,
    next: Option<PaginationLink>,
}

impl PaginationContext {
    /// Page items in document order.
    #[must_use]
    pub fn items(&self) -> &[PaginationItem] {
        &self.items
    }

    /// # Errors
    ///
    /// Fails on a second previous link or when an item or the next link
    /// was already added.
    pub fn set_previous(&mut self, previous: PaginationLink) -> Result<(), RenderError> {
        if self.previous.is_some() {
            return Err(RenderError::only_one(PREVIOUS_TAG_NAME, TAG_NAME));
        }
        if let Some(first) = self.items.first() {
            return Err(RenderError::must_be_specified_before(
                PREVIOUS_TAG_NAME,
                first.tag_name(),
            ));
        }
        if self.next.is_some() {
            return Err(RenderError::must_be_specified_before(PREVIOUS_TAG_NAME, NEXT_TAG_NAME));
        }
        self.previous = Some(previous);
        Ok(())
    }

    /// # Errors
    ///
    /// Fails when the next link was already added.
    pub fn add_item(&mut self, item: PaginationItem) -> Result<(), RenderError> {
        if self.next.is_some() {
            return Err(RenderError::must_be_specified_before(item.tag_name(), NEXT_TAG_NAME));
        }
        self.items.push(item);
        Ok(())
    }

    /// # Errors
    ///
    /// Fails on a second next link.
    pub fn set_next(&mut self, next: PaginationLink) -> Result<(), RenderError> {
        if self.next.is_some() {
            return Err(RenderError::only_one(NEXT_TAG_NAME, TAG_NAME));
        }
        self.next = Some(next);
        Ok(())
    }
}

/// `<govuk-pagination>`.
#[derive(Clone, Debug, Default)]
pub struct PaginationTagHelper {
    landmark_label: Option<String>,
}

impl PaginationTagHelper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The `aria-label` of the `nav` landmark. Defaults to "results".
    #[must_use]
    pub fn with_landmark_label(mut self, landmark_label: impl Into<String>) -> Self {
        self.landmark_label = Some(landmark_label.into());
        self
    }

    fn link_element(direction: Direction, link: PaginationLink, block_level: bool) -> HtmlElement {
        let has_label = block_level && link.label_text.is_some();

        let mut title = HtmlElement::new("span")
            .with_class("govuk-pagination__link-title")
            .with_class_if(block_level && !has_label, "govuk-pagination__link-title--decorated");
        match link.content.and_then(non_empty) {
            Some(content) => title.push_html(content),
            None => {
                title.push_text(direction.default_text());
                title.push_child(
                    HtmlElement::new("span")
                        .with_class("govuk-visually-hidden")
                        .with_text(" page"),
                );
            }
        }

        let mut anchor = HtmlElement::new("a")
            .with_class("govuk-link govuk-pagination__link")
            .with_attribute("href", link.href)
            .with_attribute("rel", direction.short_name())
            .with_merged_attributes(&link.attributes);

        if block_level || direction == Direction::Previous {
            anchor.push_child(direction.arrow());
        }
        anchor.push_child(title);
        if let Some(label_text) = link.label_text.filter(|_| block_level) {
            anchor.push_child(
                HtmlElement::new("span")
                    .with_class("govuk-visually-hidden")
                    .with_text(":"),
            );
            anchor.push_child(
                HtmlElement::new("span")
                    .with_class("govuk-pagination__link-label")
                    .with_text(label_text),
            );
        }
        if !block_level && direction == Direction::Next {
            anchor.push_child(direction.arrow());
        }

        HtmlElement::new("div")
            .with_class(&format!("govuk-pagination__{}", direction.short_name()))
            .with_child(anchor)
    }

    fn item_element(item: PaginationItem) -> HtmlElement {
        match item {
            PaginationItem::Page(page) => {
                let aria_label = page
                    .visually_hidden_text
                    .unwrap_or_else(|| format!("Page {}", page.number.as_str()));
                HtmlElement::new("li")
                    .with_class("govuk-pagination__item")
                    .with_class_if(page.is_current, "govuk-pagination__item--current")
                    .with_child(
                        HtmlElement::new("a")
                            .with_class("govuk-link govuk-pagination__link")
                            .with_attribute("href", page.href)
                            .with_attribute("aria-label", aria_label)
                            .with_attribute_opt("aria-current", page.is_current.then_some("page"))
                            .with_merged_attributes(&page.attributes)
                            .with_html(page.number),
                    )
            }
            PaginationItem::Ellipsis { attributes } => HtmlElement::new("li")
                .with_class("govuk-pagination__item govuk-pagination__item--ellipses")
                .with_merged_attributes(&attributes)
                .with_html(HtmlString::new("&ctdot;")),
        }
    }
}

impl TagHelper for PaginationTagHelper {
    fn tag_name(&self) -> &'static str {
        TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let (pagination, _) = context.scoped(PaginationContext::default(), |context| {
            context.child_content()
        })?;

        let block_level = pagination.items.is_empty()
            && (pagination.previous.is_some() || pagination.next.is_some());

        let mut element = HtmlElement::new("nav")
            .with_class("govuk-pagination")
            .with_class_if(block_level, "govuk-pagination--block")
            .with_attribute("role", "navigation")
            .with_attribute(
                "aria-label",
                self.landmark_label.as_deref().unwrap_or(DEFAULT_LANDMARK_LABEL),
            )
            .with_merged_attributes(&output.take_attributes())
            .with_child_opt(
                pagination
                    .previous
                    .map(|previous| Self::link_element(Direction::Previous, previous, block_level)),
            );

        if !pagination.items.is_empty() {
            let mut list = HtmlElement::new("ul").with_class("govuk-pagination__list");
            for item in pagination.items {
                list.push_child(Self::item_element(item));
            }
            element.push_child(list);
        }

        element = element.with_child_opt(
            pagination
                .next
                .map(|next| Self::link_element(Direction::Next, next, block_level)),
        );

        output.write_element(element);
        Ok(())
    }
}

/// `<govuk-pagination-previous>` and `<govuk-pagination-next>`.
#[derive(Clone, Debug)]
pub struct PaginationLinkTagHelper {
    direction: Direction,
    href: String,
    label_text: Option<String>,
}

impl PaginationLinkTagHelper {
    /// `<govuk-pagination-previous>`.
    #[must_use]
    pub fn previous(href: impl Into<String>) -> Self {
        Self {
            direction: Direction::Previous,
            href: href.into(),
            label_text: None,
        }
    }

    /// `<govuk-pagination-next>`.
    #[must_use]
    pub fn next(href: impl Into<String>) -> Self {
        Self {
            direction: Direction::Next,
            ..Self::previous(href)
        }
    }

    /// Label shown under the link in block mode.
    #[must_use]
    pub fn with_label_text(mut self, label_text: impl Into<String>) -> Self {
        self.label_text = Some(label_text.into());
        self
    }
}

impl TagHelper for PaginationLinkTagHelper {
    fn tag_name(&self) -> &'static str {
        self.direction.tag_name()
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let tag_name = self.direction.tag_name();
        context.ensure_parent::<PaginationContext>(tag_name, TAG_NAME)?;
        let link = PaginationLink {
            href: self.href.clone(),
            label_text: self.label_text.clone(),
            attributes: output.take_attributes(),
            content: Some(context.child_content()?),
        };

        let pagination = context.parent_mut::<PaginationContext>(tag_name, TAG_NAME)?;
        match self.direction {
            Direction::Previous => pagination.set_previous(link)?,
            Direction::Next => pagination.set_next(link)?,
        }
        output.suppress_output();
        Ok(())
    }
}

/// `<govuk-pagination-item>`. The child content is the page number.
#[derive(Clone, Debug)]
pub struct PaginationItemTagHelper {
    href: String,
    is_current: bool,
    visually_hidden_text: Option<String>,
}

impl PaginationItemTagHelper {
    /// A page item linking to `href`.
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            is_current: false,
            visually_hidden_text: None,
        }
    }

    /// Mark the item as the current page.
    #[must_use]
    pub fn with_is_current(mut self, is_current: bool) -> Self {
        self.is_current = is_current;
        self
    }

    /// Override the link's `aria-label`, which defaults to "Page N".
    #[must_use]
    pub fn with_visually_hidden_text(mut self, text: impl Into<String>) -> Self {
        self.visually_hidden_text = Some(text.into());
        self
    }
}

impl TagHelper for PaginationItemTagHelper {
    fn tag_name(&self) -> &'static str {
        ITEM_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<PaginationContext>(ITEM_TAG_NAME, TAG_NAME)?;
        let page = PaginationPage {
            href: self.href.clone(),
            number: context.child_content()?,
            is_current: self.is_current,
            visually_hidden_text: self.visually_hidden_text.clone(),
            attributes: output.take_attributes(),
        };
        context
            .parent_mut::<PaginationContext>(ITEM_TAG_NAME, TAG_NAME)?
            .add_item(PaginationItem::Page(page))?;
        output.suppress_output();
        Ok(())
    }
}

/// `<govuk-pagination-ellipsis>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PaginationEllipsisTagHelper;

impl TagHelper for PaginationEllipsisTagHelper {
    fn tag_name(&self) -> &'static str {
        ELLIPSIS_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let attributes = output.take_attributes();
        context
            .parent_mut::<PaginationContext>(ELLIPSIS_TAG_NAME, TAG_NAME)?
            .add_item(PaginationItem::Ellipsis { attributes })?;
        output.suppress_output();
        Ok(())
    }
}
