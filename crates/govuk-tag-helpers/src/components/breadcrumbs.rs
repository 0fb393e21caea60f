//! `<govuk-breadcrumbs>`.

use govuk_html::{AttributeDictionary, HtmlElement, HtmlString};

use crate::error::RenderError;
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

const TAG_NAME: &str = "govuk-breadcrumbs";
const ITEM_TAG_NAME: &str = "govuk-breadcrumbs-item";

/// A breadcrumb. Items without an `href` are the current page.
#[derive(Clone, Debug, Default)]
pub struct BreadcrumbsItem {
    /// `None` marks the current page.
    pub href: Option<String>,
    pub attributes: AttributeDictionary,
    pub content: HtmlString,
}

/// Items collected by `<govuk-breadcrumbs>`.
#[derive(Clone, Debug, Default)]
pub struct BreadcrumbsContext {
    items: Vec<BreadcrumbsItem>,
}

impl BreadcrumbsContext {
    /// Append an item.
    pub fn add_item(&mut self, item: BreadcrumbsItem) {
        self.items.push(item);
    }
}

/// `<govuk-breadcrumbs>`.
#[derive(Clone, Debug, Default)]
pub struct BreadcrumbsTagHelper {
    collapse_on_mobile: bool,
}

impl BreadcrumbsTagHelper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show only the first and last items on small screens.
    #[must_use]
    pub fn with_collapse_on_mobile(mut self, collapse_on_mobile: bool) -> Self {
        self.collapse_on_mobile = collapse_on_mobile;
        self
    }
}

impl TagHelper for BreadcrumbsTagHelper {
    fn tag_name(&self) -> &'static str {
        TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let (breadcrumbs, _) = context.scoped(BreadcrumbsContext::default(), |context| {
            context.child_content()
        })?;

        let mut list = HtmlElement::new("ol").with_class("govuk-breadcrumbs__list");
        for item in breadcrumbs.items {
            let entry = HtmlElement::new("li").with_class("govuk-breadcrumbs__list-item");
            let entry = match item.href {
                Some(href) => entry.with_child(
                    HtmlElement::new("a")
                        .with_class("govuk-breadcrumbs__link")
                        .with_attribute("href", href)
                        .with_merged_attributes(&item.attributes)
                        .with_html(item.content),
                ),
                None => entry
                    .with_attribute("aria-current", "page")
                    .with_merged_attributes(&item.attributes)
                    .with_html(item.content),
            };
            list.push_child(entry);
        }

        let element = HtmlElement::new("div")
            .with_class("govuk-breadcrumbs")
            .with_class_if(self.collapse_on_mobile, "govuk-breadcrumbs--collapse-on-mobile")
            .with_merged_attributes(&output.take_attributes())
            .with_child(list);

        output.write_element(element);
        Ok(())
    }
}

/// `<govuk-breadcrumbs-item>`.
#[derive(Clone, Debug, Default)]
pub struct BreadcrumbsItemTagHelper {
    href: Option<String>,
}

impl BreadcrumbsItemTagHelper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Link target. Items without one render as the current page.
    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

impl TagHelper for BreadcrumbsItemTagHelper {
    fn tag_name(&self) -> &'static str {
        ITEM_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<BreadcrumbsContext>(ITEM_TAG_NAME, TAG_NAME)?;
        let item = BreadcrumbsItem {
            href: self.href.clone(),
            attributes: output.take_attributes(),
            content: context.child_content()?,
        };
        context
            .parent_mut::<BreadcrumbsContext>(ITEM_TAG_NAME, TAG_NAME)?
            .add_item(item);
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

    #[test]
    fn test_breadcrumbs() {
        let html = render(
            Node::component(BreadcrumbsTagHelper::new().with_collapse_on_mobile(true))
                .child(Node::component(BreadcrumbsItemTagHelper::new().with_href("/")).child(text("Home")))
                .child(Node::component(BreadcrumbsItemTagHelper::new()).child(text("Passports"))),
        )
        .unwrap();
        assert_eq!(
            html,
            "<div class=\"govuk-breadcrumbs govuk-breadcrumbs--collapse-on-mobile\">\
             <ol class=\"govuk-breadcrumbs__list\">\
             <li class=\"govuk-breadcrumbs__list-item\"><a class=\"govuk-breadcrumbs__link\" href=\"/\">Home</a></li>\
             <li class=\"govuk-breadcrumbs__list-item\" aria-current=\"page\">Passports</li>\
             </ol></div>"
        );
    }

    #[test]
    fn test_item_outside_breadcrumbs() {
        let error = render(Node::component(BreadcrumbsItemTagHelper::new()).child(text("Home"))).unwrap_err();
        assert_eq!(
            error.to_string(),
            "<govuk-breadcrumbs-item> must be inside <govuk-breadcrumbs>."
        );
    }
}
