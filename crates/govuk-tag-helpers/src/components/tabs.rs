//! `<govuk-tabs>`.

use govuk_html::{AttributeDictionary, HtmlElement, HtmlString};

use crate::error::RenderError;
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

const TAG_NAME: &str = "govuk-tabs";
const ITEM_TAG_NAME: &str = "govuk-tabs-item";

const DEFAULT_TITLE: &str = "Contents";

/// A finished tab.
#[derive(Clone, Debug, Default)]
pub struct TabsItem {
    /// Explicit panel id; otherwise numbered under the id prefix.
    pub id: Option<String>,
    /// Text of the tab link.
    pub label: String,
    pub attributes: AttributeDictionary,
    pub content: HtmlString,
}

/// Tabs collected by `<govuk-tabs>`.
#[derive(Clone, Debug, Default)]
pub struct TabsContext {
    items: Vec<TabsItem>,
}

impl TabsContext {
    /// Tabs in document order.
    #[must_use]
    pub fn items(&self) -> &[TabsItem] {
        &self.items
    }

    /// Append a tab.
    pub fn add_item(&mut self, item: TabsItem) {
        self.items.push(item);
    }
}

/// `<govuk-tabs>`.
///
/// Items without an `id` are numbered from 1 under `id-prefix`.
#[derive(Clone, Debug, Default)]
pub struct TabsTagHelper {
    id: Option<String>,
    id_prefix: Option<String>,
    title: Option<String>,
}

impl TabsTagHelper {
    /// Tabs titled "Contents".
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `id` of the tabs container.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Prefix of generated panel ids.
    #[must_use]
    pub fn with_id_prefix(mut self, id_prefix: impl Into<String>) -> Self {
        self.id_prefix = Some(id_prefix.into());
        self
    }

    /// Heading of the list of tabs. Defaults to "Contents".
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn resolve_id(&self, item: &TabsItem, index: usize) -> Result<String, RenderError> {
        if let Some(id) = &item.id {
            return Ok(id.clone());
        }
        self.id_prefix
            .as_deref()
            .map(|prefix| format!("{prefix}-{}", index + 1))
            .ok_or_else(|| {
                RenderError::Configuration(
                    "Item must have the 'id' attribute specified when its parent does not specify the 'id-prefix' attribute."
                        .to_owned(),
                )
            })
    }
}

impl TagHelper for TabsTagHelper {
    fn tag_name(&self) -> &'static str {
        TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let (tabs, _) = context.scoped(TabsContext::default(), |context| {
            context.child_content()
        })?;

        let mut list = HtmlElement::new("ul").with_class("govuk-tabs__list");
        let mut panels = Vec::with_capacity(tabs.items.len());

        for (index, item) in tabs.items.into_iter().enumerate() {
            let id = self.resolve_id(&item, index)?;
            let is_first = index == 0;

            list.push_child(
                HtmlElement::new("li")
                    .with_class("govuk-tabs__list-item")
                    .with_class_if(is_first, "govuk-tabs__list-item--selected")
                    .with_child(
                        HtmlElement::new("a")
                            .with_class("govuk-tabs__tab")
                            .with_attribute("href", format!("#{id}"))
                            .with_text(item.label),
                    ),
            );
            panels.push(
                HtmlElement::new("div")
                    .with_class("govuk-tabs__panel")
                    .with_class_if(!is_first, "govuk-tabs__panel--hidden")
                    .with_attribute("id", id)
                    .with_merged_attributes(&item.attributes)
                    .with_html(item.content),
            );
        }

        let mut element = HtmlElement::new("div")
            .with_class("govuk-tabs")
            .with_attribute_opt("id", self.id.as_deref())
            .with_attribute("data-module", "govuk-tabs")
            .with_merged_attributes(&output.take_attributes())
            .with_child(
                HtmlElement::new("h2")
                    .with_class("govuk-tabs__title")
                    .with_text(self.title.as_deref().unwrap_or(DEFAULT_TITLE)),
            )
            .with_child(list);
        for panel in panels {
            element.push_child(panel);
        }

        output.write_element(element);
        Ok(())
    }
}

/// `<govuk-tabs-item>`. The child content is the panel.
#[derive(Clone, Debug)]
pub struct TabsItemTagHelper {
    id: Option<String>,
    label: String,
}

impl TabsItemTagHelper {
    /// A tab labelled `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
        }
    }

    /// `id` of the panel.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl TagHelper for TabsItemTagHelper {
    fn tag_name(&self) -> &'static str {
        ITEM_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<TabsContext>(ITEM_TAG_NAME, TAG_NAME)?;
        let item = TabsItem {
            id: self.id.clone(),
            label: self.label.clone(),
            attributes: output.take_attributes(),
            content: context.child_content()?,
        };
        context
            .parent_mut::<TabsContext>(ITEM_TAG_NAME, TAG_NAME)?
            .add_item(item);
        output.suppress_output();
        Ok(())
    }
}
