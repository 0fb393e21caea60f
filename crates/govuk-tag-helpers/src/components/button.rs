//! `<govuk-button>` and `<govuk-button-link>`.

use govuk_html::HtmlElement;

use crate::error::RenderError;
use crate::options::ComponentOptions;
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

const TAG_NAME: &str = "govuk-button";
const LINK_TAG_NAME: &str = "govuk-button-link";

fn start_icon() -> HtmlElement {
    HtmlElement::new("svg")
        .with_class("govuk-button__start-icon")
        .with_attribute("xmlns", "http://www.w3.org/2000/svg")
        .with_attribute("width", "17.5")
        .with_attribute("height", "19")
        .with_attribute("viewBox", "0 0 33 40")
        .with_attribute("aria-hidden", "true")
        .with_attribute("focusable", "false")
        .with_child(
            HtmlElement::new("path")
                .with_attribute("fill", "currentColor")
                .with_attribute("d", "M0 0h13l20 20-20 20H0l20-20z"),
        )
}

/// `<govuk-button>`.
#[derive(Clone, Debug, Default)]
pub struct ButtonTagHelper {
    button_type: Option<String>,
    name: Option<String>,
    value: Option<String>,
    disabled: bool,
    is_start_button: bool,
    prevent_double_click: Option<bool>,
}

impl ButtonTagHelper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The `type` attribute. Defaults to `submit`.
    #[must_use]
    pub fn with_type(mut self, button_type: impl Into<String>) -> Self {
        self.button_type = Some(button_type.into());
        self
    }

    /// The `name` submitted with the form.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The `value` submitted with the form.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Render disabled, with `aria-disabled` and the disabled modifier class.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Style as a start button, with the arrow icon.
    #[must_use]
    pub fn with_is_start_button(mut self, is_start_button: bool) -> Self {
        self.is_start_button = is_start_button;
        self
    }

    /// Overrides [`ComponentOptions::button_prevent_double_click`].
    #[must_use]
    pub fn with_prevent_double_click(mut self, prevent_double_click: bool) -> Self {
        self.prevent_double_click = Some(prevent_double_click);
        self
    }

    fn prevent_double_click(&self, options: &ComponentOptions) -> Option<bool> {
        self.prevent_double_click
            .or(options.button_prevent_double_click.then_some(true))
    }
}

impl TagHelper for ButtonTagHelper {
    fn tag_name(&self) -> &'static str {
        TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let prevent_double_click = self.prevent_double_click(context.options());

        let mut element = HtmlElement::new("button")
            .with_class("govuk-button")
            .with_class_if(self.is_start_button, "govuk-button--start")
            .with_attribute("data-module", "govuk-button")
            .with_attribute_opt("name", self.name.as_deref())
            .with_attribute("type", self.button_type.as_deref().unwrap_or("submit"))
            .with_attribute_opt("value", self.value.as_deref())
            .with_boolean_attribute_if(self.disabled, "disabled")
            .with_attribute_opt("aria-disabled", self.disabled.then_some("true"))
            .with_attribute_opt(
                "data-prevent-double-click",
                prevent_double_click.map(|prevent| prevent.to_string()),
            )
            .with_merged_attributes(&output.take_attributes())
            .with_html(context.child_content()?);
        if self.is_start_button {
            element.push_child(start_icon());
        }

        output.write_element(element);
        Ok(())
    }
}

/// `<govuk-button-link>`: an anchor styled as a button.
#[derive(Clone, Debug, Default)]
pub struct ButtonLinkTagHelper {
    href: Option<String>,
    is_start_button: bool,
}

impl ButtonLinkTagHelper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Link target. Defaults to `#`.
    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Style as a start button, with the arrow icon.
    #[must_use]
    pub fn with_is_start_button(mut self, is_start_button: bool) -> Self {
        self.is_start_button = is_start_button;
        self
    }
}

impl TagHelper for ButtonLinkTagHelper {
    fn tag_name(&self) -> &'static str {
        LINK_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let mut element = HtmlElement::new("a")
            .with_class("govuk-button")
            .with_class_if(self.is_start_button, "govuk-button--start")
            .with_attribute("href", self.href.as_deref().unwrap_or("#"))
            .with_attribute("role", "button")
            .with_attribute("draggable", "false")
            .with_attribute("data-module", "govuk-button")
            .with_merged_attributes(&output.take_attributes())
            .with_html(context.child_content()?);
        if self.is_start_button {
            element.push_child(start_icon());
        }

        output.write_element(element);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NullModelHelper;
    use crate::rendering::Node;
    use crate::testing::{render, render_with_options, text};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_button() {
        let html = render(Node::component(ButtonTagHelper::new()).child(text("Save and continue"))).unwrap();
        assert_eq!(
            html,
            "<button class=\"govuk-button\" data-module=\"govuk-button\" type=\"submit\">Save and continue</button>"
        );
    }

    #[test]
    fn test_disabled_button_with_name_and_value() {
        let html = render(
            Node::component(
                ButtonTagHelper::new()
                    .with_name("action")
                    .with_value("save")
                    .with_disabled(true),
            )
            .child(text("Save")),
        )
        .unwrap();
        assert_eq!(
            html,
            "<button class=\"govuk-button\" data-module=\"govuk-button\" name=\"action\" type=\"submit\" \
             value=\"save\" disabled aria-disabled=\"true\">Save</button>"
        );
    }

    #[test]
    fn test_prevent_double_click_from_options() {
        let mut options = ComponentOptions::default();
        options.button_prevent_double_click = true;
        let html = render_with_options(
            &NullModelHelper,
            &options,
            Node::component(ButtonTagHelper::new()).child(text("Pay")),
        )
        .unwrap();
        assert!(html.contains("data-prevent-double-click=\"true\""));
    }

    #[test]
    fn test_explicit_prevent_double_click_wins() {
        let mut options = ComponentOptions::default();
        options.button_prevent_double_click = true;
        let html = render_with_options(
            &NullModelHelper,
            &options,
            Node::component(ButtonTagHelper::new().with_prevent_double_click(false)).child(text("Pay")),
        )
        .unwrap();
        assert!(html.contains("data-prevent-double-click=\"false\""));
    }

    #[test]
    fn test_start_button_link() {
        let html = render(
            Node::component(ButtonLinkTagHelper::new().with_href("/start").with_is_start_button(true))
                .child(text("Start now")),
        )
        .unwrap();
        assert!(html.starts_with(
            "<a class=\"govuk-button govuk-button--start\" href=\"/start\" role=\"button\" \
             draggable=\"false\" data-module=\"govuk-button\">Start now<svg class=\"govuk-button__start-icon\""
        ));
        assert!(html.ends_with("</svg></a>"));
    }
}
