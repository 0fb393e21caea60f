//! `<govuk-select>`.

use govuk_html::{AttributeDictionary, HtmlElement, HtmlString};

use crate::error::RenderError;
use crate::form_group::{
    FormGroupBuilder, FormGroupContext, FormGroupErrorMessage, FormGroupErrorMessageTagHelper,
    FormGroupField, FormGroupHint, FormGroupHintTagHelper, FormGroupLabel,
    FormGroupLabelTagHelper, FormGroupOptions, FormGroupTagHelper, FormGroupTagNames,
    form_group_builder_methods, process_form_group,
};
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

const ITEM_TAG_NAME: &str = "govuk-select-item";

/// An `<option>`.
#[derive(Clone, Debug, Default)]
pub struct SelectItem {
    /// The submitted value.
    pub value: Option<String>,
    /// Explicit selection; `None` infers it from the bound value.
    pub selected: Option<bool>,
    pub disabled: bool,
    pub attributes: AttributeDictionary,
    pub content: HtmlString,
}

/// Label, hint and error message, then options.
#[derive(Clone, Debug)]
pub struct SelectContext {
    form_group: FormGroupBuilder,
    items: Vec<SelectItem>,
}

impl SelectContext {
    /// An empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            form_group: FormGroupBuilder::new(Self::TAG_NAMES),
            items: Vec::new(),
        }
    }

    /// Options in document order.
    #[must_use]
    pub fn items(&self) -> &[SelectItem] {
        &self.items
    }

    /// Append an option.
    pub fn add_item(&mut self, item: SelectItem) {
        self.items.push(item);
    }

    fn check_no_items(&self, element: &str) -> Result<(), RenderError> {
        if self.items.is_empty() {
            Ok(())
        } else {
            Err(RenderError::must_be_specified_before(element, ITEM_TAG_NAME))
        }
    }
}

impl Default for SelectContext {
    fn default() -> Self {
        Self::new()
    }
}

impl FormGroupContext for SelectContext {
    const TAG_NAMES: FormGroupTagNames = FormGroupTagNames {
        root: "govuk-select",
        label: "govuk-select-label",
        hint: "govuk-select-hint",
        error_message: "govuk-select-error-message",
    };

    fn builder(&self) -> &FormGroupBuilder {
        &self.form_group
    }

    fn builder_mut(&mut self) -> &mut FormGroupBuilder {
        &mut self.form_group
    }

    fn set_label(&mut self, label: FormGroupLabel) -> Result<(), RenderError> {
        self.check_no_items(Self::TAG_NAMES.label)?;
        self.form_group.set_label(label)
    }

    fn set_hint(&mut self, hint: FormGroupHint) -> Result<(), RenderError> {
        self.check_no_items(Self::TAG_NAMES.hint)?;
        self.form_group.set_hint(hint)
    }

    fn set_error_message(&mut self, error_message: FormGroupErrorMessage) -> Result<(), RenderError> {
        self.check_no_items(Self::TAG_NAMES.error_message)?;
        self.form_group.set_error_message(error_message)
    }
}

/// `<govuk-select-label>`.
pub type SelectLabelTagHelper = FormGroupLabelTagHelper<SelectContext>;
pub type SelectHintTagHelper = FormGroupHintTagHelper<SelectContext>;
pub type SelectErrorMessageTagHelper = FormGroupErrorMessageTagHelper<SelectContext>;

/// `<govuk-select>`.
#[derive(Clone, Debug, Default)]
pub struct SelectTagHelper {
    form_group: FormGroupOptions,
    disabled: bool,
}

impl SelectTagHelper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    form_group_builder_methods!();

    /// Render the select disabled.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl FormGroupTagHelper for SelectTagHelper {
    type Context = SelectContext;

    fn form_group_options(&self) -> &FormGroupOptions {
        &self.form_group
    }

    fn create_context(&self) -> SelectContext {
        SelectContext::new()
    }

    fn generate_content(
        &self,
        context: &SelectContext,
        field: FormGroupField<'_>,
    ) -> Result<HtmlString, RenderError> {
        let mut select = HtmlElement::new("select")
            .with_class("govuk-select")
            .with_class_if(field.have_error(), "govuk-select--error")
            .with_attribute("id", field.id.as_str())
            .with_attribute("name", field.name.as_str())
            .with_attribute_opt("aria-describedby", field.described_by.as_deref())
            .with_boolean_attribute_if(self.disabled, "disabled")
            .with_merged_attributes(&field.attributes);

        for item in &context.items {
            let selected = item.selected.unwrap_or_else(|| {
                item.value
                    .as_deref()
                    .is_some_and(|value| field.model_value.selects(value))
            });
            select.push_child(
                HtmlElement::new("option")
                    .with_attribute_opt("value", item.value.as_deref())
                    .with_boolean_attribute_if(selected, "selected")
                    .with_boolean_attribute_if(item.disabled, "disabled")
                    .with_merged_attributes(&item.attributes)
                    .with_html(item.content.clone()),
            );
        }

        let mut content = field.label_hint_and_error_message();
        content.push_html(&select.to_html_string());
        Ok(content)
    }
}

impl TagHelper for SelectTagHelper {
    fn tag_name(&self) -> &'static str {
        SelectContext::TAG_NAMES.root
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        process_form_group(self, context, output)
    }
}

/// `<govuk-select-item>`: one `<option>`.
#[derive(Clone, Debug, Default)]
pub struct SelectItemTagHelper {
    value: Option<String>,
    selected: Option<bool>,
    disabled: bool,
}

impl SelectItemTagHelper {
    /// An option submitting `value`.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Override selection inferred from the bound value.
    #[must_use]
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = Some(selected);
        self
    }

    /// Render the option disabled.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl TagHelper for SelectItemTagHelper {
    fn tag_name(&self) -> &'static str {
        ITEM_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let root = SelectContext::TAG_NAMES.root;
        context.ensure_parent::<SelectContext>(ITEM_TAG_NAME, root)?;

        let item = SelectItem {
            value: self.value.clone(),
            selected: self.selected,
            disabled: self.disabled,
            attributes: output.take_attributes(),
            content: context.child_content()?,
        };
        context
            .parent_mut::<SelectContext>(ITEM_TAG_NAME, root)?
            .add_item(item);

        output.suppress_output();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FormField, FormModel};
    use crate::rendering::Node;
    use crate::testing::{render, render_with_model, text};
    use pretty_assertions::assert_eq;

    fn item(value: &str, label: &str) -> Node {
        Node::component(SelectItemTagHelper::new(value))
            .child(text(label))
            .into()
    }

    #[test]
    fn test_selected_inferred_from_model() {
        let model = FormModel::new().with_field(
            "Sort",
            FormField::new().with_display_name("Sort by").with_value("updated"),
        );
        let html = render_with_model(
            &model,
            Node::component(SelectTagHelper::new().with_asp_for("Sort"))
                .child(item("published", "Recently published"))
                .child(item("updated", "Recently updated")),
        )
        .unwrap();
        assert_eq!(
            html,
            "<div class=\"govuk-form-group\">\
             <label class=\"govuk-label\" for=\"Sort\">Sort by</label>\
             <select class=\"govuk-select\" id=\"Sort\" name=\"Sort\">\
             <option value=\"published\">Recently published</option>\
             <option value=\"updated\" selected>Recently updated</option>\
             </select></div>"
        );
    }

    #[test]
    fn test_explicit_selected_wins() {
        let model = FormModel::new().with_field("Sort", FormField::new().with_value("a"));
        let html = render_with_model(
            &model,
            Node::component(SelectTagHelper::new().with_asp_for("Sort"))
                .child(Node::component(SelectItemTagHelper::new("a").with_selected(false)).child(text("A")))
                .child(Node::component(SelectItemTagHelper::new("b").with_selected(true)).child(text("B"))),
        )
        .unwrap();
        assert!(html.contains("<option value=\"a\">A</option><option value=\"b\" selected>B</option>"));
    }

    #[test]
    fn test_hint_after_item() {
        let error = render(
            Node::component(SelectTagHelper::new().with_name("s"))
                .child(item("a", "A"))
                .child(Node::component(SelectHintTagHelper::new()).child(text("Hint"))),
        )
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            "<govuk-select-hint> must be specified before <govuk-select-item>."
        );
    }

    #[test]
    fn test_item_outside_select() {
        let error = render(item("a", "A")).unwrap_err();
        assert_eq!(
            error.to_string(),
            "<govuk-select-item> must be inside <govuk-select>."
        );
    }
}
