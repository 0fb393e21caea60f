//! `<govuk-notification-banner>`.

use govuk_html::{AttributeDictionary, HtmlElement, HtmlString};

use crate::error::RenderError;
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

use super::{heading_tag, validate_heading_level};

const TAG_NAME: &str = "govuk-notification-banner";
const TITLE_TAG_NAME: &str = "govuk-notification-banner-title";

/// `id` of the title when neither the banner nor the title sets one.
pub const DEFAULT_TITLE_ID: &str = "govuk-notification-banner-title";

/// Banner flavour. Controls the default title and role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationBannerType {
    #[default]
    Important,
    Success,
}

impl NotificationBannerType {
    fn default_title(self) -> &'static str {
        match self {
            Self::Important => "Important",
            Self::Success => "Success",
        }
    }

    fn default_role(self) -> &'static str {
        match self {
            Self::Important => "region",
            Self::Success => "alert",
        }
    }
}

/// The banner's title.
#[derive(Clone, Debug, Default)]
pub struct NotificationBannerTitle {
    pub id: Option<String>,
    pub heading_level: Option<u8>,
    pub attributes: AttributeDictionary,
    pub content: HtmlString,
}

/// An optional title. Everything else is the banner's content.
#[derive(Clone, Debug, Default)]
pub struct NotificationBannerContext {
    title: Option<NotificationBannerTitle>,
}

impl NotificationBannerContext {
    /// # Errors
    ///
    /// Fails on a second title.
    pub fn set_title(&mut self, title: NotificationBannerTitle) -> Result<(), RenderError> {
        if self.title.is_some() {
            return Err(RenderError::only_one(TITLE_TAG_NAME, TAG_NAME));
        }
        self.title = Some(title);
        Ok(())
    }
}

/// `<govuk-notification-banner>`.
#[derive(Clone, Debug, Default)]
pub struct NotificationBannerTagHelper {
    banner_type: NotificationBannerType,
    role: Option<String>,
    title_id: Option<String>,
    disable_auto_focus: Option<bool>,
}

impl NotificationBannerTagHelper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Banner flavour. Defaults to important.
    #[must_use]
    pub fn with_type(mut self, banner_type: NotificationBannerType) -> Self {
        self.banner_type = banner_type;
        self
    }

    /// Override the `role`, which defaults to `alert` for success banners and
    /// `region` otherwise.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// The title's `id`, unless the title element sets its own.
    #[must_use]
    pub fn with_title_id(mut self, title_id: impl Into<String>) -> Self {
        self.title_id = Some(title_id.into());
        self
    }

    /// Stop a success banner taking focus on page load.
    #[must_use]
    pub fn with_disable_auto_focus(mut self, disable_auto_focus: bool) -> Self {
        self.disable_auto_focus = Some(disable_auto_focus);
        self
    }
}

impl TagHelper for NotificationBannerTagHelper {
    fn tag_name(&self) -> &'static str {
        TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let (banner, content) = context.scoped(NotificationBannerContext::default(), |context| {
            context.child_content()
        })?;

        let title = banner.title.unwrap_or_default();
        let title_id = title
            .id
            .or_else(|| self.title_id.clone())
            .unwrap_or_else(|| DEFAULT_TITLE_ID.to_owned());
        let title_content = if title.content.is_empty_or_whitespace() {
            HtmlString::from_text(self.banner_type.default_title())
        } else {
            title.content
        };
        let is_success = self.banner_type == NotificationBannerType::Success;

        let element = HtmlElement::new("div")
            .with_class("govuk-notification-banner")
            .with_class_if(is_success, "govuk-notification-banner--success")
            .with_attribute(
                "role",
                self.role.as_deref().unwrap_or(self.banner_type.default_role()),
            )
            .with_attribute("aria-labelledby", title_id.as_str())
            .with_attribute("data-module", "govuk-notification-banner")
            .with_attribute_opt(
                "data-disable-auto-focus",
                self.disable_auto_focus.map(|disable| disable.to_string()),
            )
            .with_merged_attributes(&output.take_attributes())
            .with_child(
                HtmlElement::new("div")
                    .with_class("govuk-notification-banner__header")
                    .with_child(
                        HtmlElement::new(heading_tag(title.heading_level.unwrap_or(2)))
                            .with_class("govuk-notification-banner__title")
                            .with_attribute("id", title_id)
                            .with_merged_attributes(&title.attributes)
                            .with_html(title_content),
                    ),
            )
            .with_child(
                HtmlElement::new("div")
                    .with_class("govuk-notification-banner__content")
                    .with_html(content),
            );

        output.write_element(element);
        Ok(())
    }
}

/// `<govuk-notification-banner-title>`.
#[derive(Clone, Debug, Default)]
pub struct NotificationBannerTitleTagHelper {
    id: Option<String>,
    heading_level: Option<u8>,
}

impl NotificationBannerTitleTagHelper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `id` of the title element.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// # Errors
    ///
    /// Returns a range error unless `level` is between 1 and 6.
    pub fn with_heading_level(mut self, level: u8) -> Result<Self, RenderError> {
        self.heading_level = Some(validate_heading_level(level)?);
        Ok(self)
    }
}

impl TagHelper for NotificationBannerTitleTagHelper {
    fn tag_name(&self) -> &'static str {
        TITLE_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<NotificationBannerContext>(TITLE_TAG_NAME, TAG_NAME)?;
        let title = NotificationBannerTitle {
            id: self.id.clone(),
            heading_level: self.heading_level,
            attributes: output.take_attributes(),
            content: context.child_content()?,
        };
        context
            .parent_mut::<NotificationBannerContext>(TITLE_TAG_NAME, TAG_NAME)?
            .set_title(title)?;
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
    fn test_default_title() {
        let html = render(
            Node::component(NotificationBannerTagHelper::new())
                .child(Node::element("p").child(text("You have 7 days left"))),
        )
        .unwrap();
        assert_eq!(
            html,
            "<div class=\"govuk-notification-banner\" role=\"region\" \
             aria-labelledby=\"govuk-notification-banner-title\" data-module=\"govuk-notification-banner\">\
             <div class=\"govuk-notification-banner__header\">\
             <h2 class=\"govuk-notification-banner__title\" id=\"govuk-notification-banner-title\">Important</h2></div>\
             <div class=\"govuk-notification-banner__content\"><p>You have 7 days left</p></div></div>"
        );
    }

    #[test]
    fn test_success_banner() {
        let html = render(
            Node::component(
                NotificationBannerTagHelper::new()
                    .with_type(NotificationBannerType::Success)
                    .with_disable_auto_focus(true),
            )
            .child(text("Saved")),
        )
        .unwrap();
        assert!(html.starts_with(
            "<div class=\"govuk-notification-banner govuk-notification-banner--success\" role=\"alert\" \
             aria-labelledby=\"govuk-notification-banner-title\" data-module=\"govuk-notification-banner\" \
             data-disable-auto-focus=\"true\">"
        ));
        assert!(html.contains(">Success</h2>"));
    }

    #[test]
    fn test_custom_title() {
        let html = render(
            Node::component(NotificationBannerTagHelper::new())
                .child(
                    Node::component(
                        NotificationBannerTitleTagHelper::new()
                            .with_id("my-title")
                            .with_heading_level(3)
                            .unwrap(),
                    )
                    .child(text("Notice")),
                )
                .child(text("Body")),
        )
        .unwrap();
        assert!(html.contains("aria-labelledby=\"my-title\""));
        assert!(html.contains("<h3 class=\"govuk-notification-banner__title\" id=\"my-title\">Notice</h3>"));
        assert!(html.contains("<div class=\"govuk-notification-banner__content\">Body</div>"));
    }

    #[test]
    fn test_title_id_on_banner() {
        let html = render(
            Node::component(NotificationBannerTagHelper::new().with_title_id("banner-title"))
                .child(text("Body")),
        )
        .unwrap();
        assert!(html.contains("aria-labelledby=\"banner-title\""));
        assert!(html.contains("id=\"banner-title\">Important</h2>"));
    }

    #[test]
    fn test_second_title() {
        let title = || Node::component(NotificationBannerTitleTagHelper::new()).child(text("T"));
        let error = render(
            Node::component(NotificationBannerTagHelper::new())
                .child(title())
                .child(title()),
        )
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Only one <govuk-notification-banner-title> element is permitted within each <govuk-notification-banner>."
        );
    }
}
