//! `<govuk-textarea>`.

use govuk_html::{HtmlElement, HtmlString};

use crate::error::RenderError;
use crate::form_group::{
    FormGroupBuilder, FormGroupContext, FormGroupErrorMessageTagHelper, FormGroupField,
    FormGroupHintTagHelper, FormGroupLabelTagHelper, FormGroupOptions, FormGroupTagHelper,
    FormGroupTagNames, form_group_builder_methods, process_form_group,
};
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

pub(crate) const DEFAULT_ROWS: u32 = 5;

/// Label, hint, then error message.
#[derive(Clone, Debug)]
pub struct TextareaContext {
    form_group: FormGroupBuilder,
}

impl Default for TextareaContext {
    fn default() -> Self {
        Self {
            form_group: FormGroupBuilder::new(Self::TAG_NAMES),
        }
    }
}

impl FormGroupContext for TextareaContext {
    const TAG_NAMES: FormGroupTagNames = FormGroupTagNames {
        root: "govuk-textarea",
        label: "govuk-textarea-label",
        hint: "govuk-textarea-hint",
        error_message: "govuk-textarea-error-message",
    };

    fn builder(&self) -> &FormGroupBuilder {
        &self.form_group
    }

    fn builder_mut(&mut self) -> &mut FormGroupBuilder {
        &mut self.form_group
    }
}

/// `<govuk-textarea-label>`.
pub type TextareaLabelTagHelper = FormGroupLabelTagHelper<TextareaContext>;
pub type TextareaHintTagHelper = FormGroupHintTagHelper<TextareaContext>;
pub type TextareaErrorMessageTagHelper = FormGroupErrorMessageTagHelper<TextareaContext>;

/// Attributes of a `<textarea>` shared with the character count.
#[derive(Clone, Debug)]
pub(crate) struct TextareaAttributes {
    pub rows: u32,
    pub value: Option<String>,
    pub autocomplete: Option<String>,
    pub spellcheck: Option<bool>,
    pub disabled: bool,
}

impl Default for TextareaAttributes {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            value: None,
            autocomplete: None,
            spellcheck: None,
            disabled: false,
        }
    }
}

impl TextareaAttributes {
    /// The `<textarea>` element for `field`, with `extra_class` appended.
    pub fn to_element(
        &self,
        field: &FormGroupField<'_>,
        extra_class: Option<&str>,
        described_by: Option<&str>,
    ) -> HtmlElement {
        let value = self
            .value
            .clone()
            .or_else(|| field.asp_for.and_then(|_| field.view.model.attempted_value(&field.name)))
            .or_else(|| field.model_value.as_scalar().map(str::to_owned))
            .unwrap_or_default();

        HtmlElement::new("textarea")
            .with_class("govuk-textarea")
            .with_class_if(field.have_error(), "govuk-textarea--error")
            .with_class(extra_class.unwrap_or_default())
            .with_attribute("id", field.id.as_str())
            .with_attribute("name", field.name.as_str())
            .with_attribute("rows", self.rows.to_string())
            .with_attribute_opt("spellcheck", self.spellcheck.map(|s| s.to_string()))
            .with_attribute_opt("autocomplete", self.autocomplete.as_deref())
            .with_attribute_opt("aria-describedby", described_by)
            .with_boolean_attribute_if(self.disabled, "disabled")
            .with_merged_attributes(&field.attributes)
            .with_text(value)
    }
}

/// `<govuk-textarea>`.
#[derive(Clone, Debug, Default)]
pub struct TextareaTagHelper {
    form_group: FormGroupOptions,
    textarea: TextareaAttributes,
}

impl TextareaTagHelper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    form_group_builder_methods!();

    /// Visible text lines. Defaults to 5.
    #[must_use]
    pub fn with_rows(mut self, rows: u32) -> Self {
        self.textarea.rows = rows;
        self
    }

    /// Initial text, overriding the bound value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.textarea.value = Some(value.into());
        self
    }

    /// `autocomplete` of the textarea.
    #[must_use]
    pub fn with_autocomplete(mut self, autocomplete: impl Into<String>) -> Self {
        self.textarea.autocomplete = Some(autocomplete.into());
        self
    }

    #[must_use]
    pub fn with_spellcheck(mut self, spellcheck: bool) -> Self {
        self.textarea.spellcheck = Some(spellcheck);
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.textarea.disabled = disabled;
        self
    }
}

impl FormGroupTagHelper for TextareaTagHelper {
    type Context = TextareaContext;

    fn form_group_options(&self) -> &FormGroupOptions {
        &self.form_group
    }

    fn create_context(&self) -> TextareaContext {
        TextareaContext::default()
    }

    fn generate_content(
        &self,
        _context: &TextareaContext,
        field: FormGroupField<'_>,
    ) -> Result<HtmlString, RenderError> {
        let mut content = field.label_hint_and_error_message();
        let textarea = self
            .textarea
            .to_element(&field, None, field.described_by.as_deref());
        content.push_html(&textarea.to_html_string());
        Ok(content)
    }
}

impl TagHelper for TextareaTagHelper {
    fn tag_name(&self) -> &'static str {
        TextareaContext::TAG_NAMES.root
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        process_form_group(self, context, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FormField, FormModel};
    use crate::rendering::Node;
    use crate::testing::{render, render_with_model, text};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_rows() {
        let html = render(
            Node::component(TextareaTagHelper::new().with_name("more-detail"))
                .child(Node::component(TextareaLabelTagHelper::new()).child(text("More detail"))),
        )
        .unwrap();
        assert_eq!(
            html,
            "<div class=\"govuk-form-group\">\
             <label class=\"govuk-label\" for=\"more-detail\">More detail</label>\
             <textarea class=\"govuk-textarea\" id=\"more-detail\" name=\"more-detail\" rows=\"5\"></textarea>\
             </div>"
        );
    }

    #[test]
    fn test_value_from_model_is_encoded() {
        let model = FormModel::new().with_field("Notes", FormField::new().with_value("<b>x</b>"));
        let html = render_with_model(
            &model,
            Node::component(TextareaTagHelper::new().with_asp_for("Notes").with_rows(8)),
        )
        .unwrap();
        assert!(html.contains("rows=\"8\">&lt;b&gt;x&lt;/b&gt;</textarea>"));
    }

    #[test]
    fn test_attempted_value_wins_over_model_value() {
        let model = FormModel::new()
            .with_field("Notes", FormField::new().with_value("saved"))
            .with_attempted_value("Notes", "typed");
        let html = render_with_model(
            &model,
            Node::component(TextareaTagHelper::new().with_asp_for("Notes")),
        )
        .unwrap();
        assert!(html.contains(">typed</textarea>"));
    }

    #[test]
    fn test_shared_form_group_builders() {
        let html = render(
            Node::component(
                TextareaTagHelper::new()
                    .with_name("notes")
                    .with_id("notes-id")
                    .with_described_by("extra")
                    .with_label_class("govuk-label--s")
                    .with_form_group_attributes("class=app-notes"),
            )
            .child(Node::component(TextareaLabelTagHelper::new()).child(text("Notes"))),
        )
        .unwrap();
        assert_eq!(
            html,
            "<div class=\"govuk-form-group app-notes\">\
             <label class=\"govuk-label govuk-label--s\" for=\"notes-id\">Notes</label>\
             <textarea class=\"govuk-textarea\" id=\"notes-id\" name=\"notes\" rows=\"5\" \
             aria-describedby=\"extra\"></textarea>\
             </div>"
        );
    }

    #[test]
    fn test_error_class() {
        let html = render(
            Node::component(TextareaTagHelper::new().with_name("n").with_disabled(true))
                .child(Node::component(TextareaLabelTagHelper::new()).child(text("N")))
                .child(Node::component(TextareaErrorMessageTagHelper::new()).child(text("Required"))),
        )
        .unwrap();
        assert!(html.contains(
            "<textarea class=\"govuk-textarea govuk-textarea--error\" id=\"n\" name=\"n\" rows=\"5\" \
             aria-describedby=\"n-error\" disabled></textarea>"
        ));
    }
}
