//! Form group orchestration.

use govuk_html::{AttributeDictionary, HtmlElement, HtmlString};

use crate::error::RenderError;
use crate::model::{ModelExpression, ModelHelper, ModelValue};
use crate::rendering::{TagHelperContext, TagHelperOutput, ViewContext};

use super::{FormGroupBuilder, FormGroupContext};

/// Attributes common to every form control.
#[derive(Clone, Debug, Default)]
pub struct FormGroupOptions {
    /// The bound model field.
    pub asp_for: Option<ModelExpression>,
    /// Explicit `name`, overriding the bound field's name.
    pub name: Option<String>,
    /// Explicit `id`, overriding the generated id.
    pub id: Option<String>,
    /// Extra `aria-describedby` tokens.
    pub described_by: Option<String>,
    /// Do not read the error message from the model's validation state.
    pub ignore_model_state_errors: bool,
    /// Extra classes for the label (e.g. `govuk-label--l`).
    pub label_class: Option<String>,
    /// Attributes for the `govuk-form-group` wrapper.
    pub form_group_attributes: AttributeDictionary,
}

/// Inherent `with_*` builder methods over a `form_group: FormGroupOptions`
/// field.
macro_rules! form_group_builder_methods {
    () => {
        /// Bind to a model field.
        #[must_use]
        pub fn with_asp_for(mut self, expression: impl Into<$crate::model::ModelExpression>) -> Self {
            self.form_group.asp_for = Some(expression.into());
            self
        }

        /// Set the control's `name`. Takes precedence over the name derived
        /// from `asp-for`.
        #[must_use]
        pub fn with_name(mut self, name: impl Into<String>) -> Self {
            self.form_group.name = Some(name.into());
            self
        }

        /// Set the control's `id`. Defaults to the name with invalid id
        /// characters replaced.
        #[must_use]
        pub fn with_id(mut self, id: impl Into<String>) -> Self {
            self.form_group.id = Some(id.into());
            self
        }

        /// Extra ids for `aria-describedby`, placed before the hint and
        /// error message ids.
        #[must_use]
        pub fn with_described_by(mut self, described_by: impl Into<String>) -> Self {
            self.form_group.described_by = Some(described_by.into());
            self
        }

        /// Ignore validation errors recorded against the bound field.
        #[must_use]
        pub fn with_ignore_model_state_errors(mut self, ignore: bool) -> Self {
            self.form_group.ignore_model_state_errors = ignore;
            self
        }

        /// Extra classes for the label, e.g. `govuk-label--l`.
        #[must_use]
        pub fn with_label_class(mut self, class: impl Into<String>) -> Self {
            self.form_group.label_class = Some(class.into());
            self
        }

        /// Add attributes to the `govuk-form-group` wrapper, in HTML syntax.
        #[must_use]
        pub fn with_form_group_attributes(mut self, attrs: &str) -> Self {
            self.form_group
                .form_group_attributes
                .merge(&govuk_html::AttributeDictionary::parse(attrs));
            self
        }
    };
}

pub(crate) use form_group_builder_methods;

/// The resolved state handed to a control's markup hook.
pub struct FormGroupField<'a> {
    /// Model and options of the current render.
    pub view: ViewContext<'a>,
    /// The bound field, if any.
    pub asp_for: Option<&'a ModelExpression>,
    /// Resolved `id` of the control.
    pub id: String,
    /// Resolved `name` of the control.
    pub name: String,
    /// Label content, for controls that have a label.
    pub label: Option<HtmlString>,
    /// Error message content, explicit or from the model's validation state.
    pub error_message: Option<HtmlString>,
    /// Space-separated `aria-describedby` tokens, if any.
    pub described_by: Option<String>,
    /// The bound field's current value.
    pub model_value: ModelValue,
    /// Pass-through attributes for the control element.
    pub attributes: AttributeDictionary,
    builder: &'a FormGroupBuilder,
    label_class: Option<&'a str>,
}

impl FormGroupField<'_> {
    /// The builder holding the label, hint and error message children.
    #[must_use]
    pub fn builder(&self) -> &FormGroupBuilder {
        self.builder
    }

    /// Whether the control is in error.
    #[must_use]
    pub fn have_error(&self) -> bool {
        self.error_message.is_some()
    }

    /// `{id}-hint`.
    #[must_use]
    pub fn hint_id(&self) -> String {
        format!("{}-hint", self.id)
    }

    /// `{id}-error`.
    #[must_use]
    pub fn error_id(&self) -> String {
        format!("{}-error", self.id)
    }

    /// `aria-describedby` with one more token appended.
    #[must_use]
    pub fn described_by_with(&self, extra: &str) -> String {
        match &self.described_by {
            Some(described_by) => format!("{described_by} {extra}"),
            None => extra.to_owned(),
        }
    }

    /// The `<label>`, wrapped in an `h1` for page headings.
    #[must_use]
    pub fn label_element(&self) -> Option<HtmlElement> {
        let content = self.label.clone()?;
        let builder_label = self.builder.label();

        let mut label = HtmlElement::new("label")
            .with_class("govuk-label")
            .with_class(self.label_class.unwrap_or_default())
            .with_attribute("for", self.id.as_str());
        if let Some(builder_label) = builder_label {
            label = label.with_merged_attributes(&builder_label.attributes);
        }
        let label = label.with_html(content);

        if builder_label.is_some_and(|label| label.is_page_heading) {
            Some(
                HtmlElement::new("h1")
                    .with_class("govuk-label-wrapper")
                    .with_child(label),
            )
        } else {
            Some(label)
        }
    }

    /// The hint `div`, if a hint was given.
    #[must_use]
    pub fn hint_element(&self) -> Option<HtmlElement> {
        let hint = self.builder.hint()?;
        Some(
            HtmlElement::new("div")
                .with_attribute("id", self.hint_id())
                .with_class("govuk-hint")
                .with_merged_attributes(&hint.attributes)
                .with_html(hint.content.clone()),
        )
    }

    /// The error message `p` with its visually hidden prefix, if the control
    /// is in error.
    #[must_use]
    pub fn error_message_element(&self) -> Option<HtmlElement> {
        let content = self.error_message.clone()?;
        let builder_error = self.builder.error_message();
        let visually_hidden_text = builder_error
            .and_then(|error| error.visually_hidden_text.as_deref())
            .unwrap_or("Error");

        let mut element = HtmlElement::new("p")
            .with_attribute("id", self.error_id())
            .with_class("govuk-error-message");
        if let Some(builder_error) = builder_error {
            element = element.with_merged_attributes(&builder_error.attributes);
        }

        Some(
            element
                .with_child(
                    HtmlElement::new("span")
                        .with_class("govuk-visually-hidden")
                        .with_text(format!("{visually_hidden_text}:")),
                )
                .with_text(" ")
                .with_html(content),
        )
    }

    /// Label, hint and error message, in that order.
    #[must_use]
    pub fn label_hint_and_error_message(&self) -> HtmlString {
        let mut html = HtmlString::empty();
        for element in [
            self.label_element(),
            self.hint_element(),
            self.error_message_element(),
        ]
        .into_iter()
        .flatten()
        {
            html.push_html(&element.to_html_string());
        }
        html
    }
}

/// A form control rendered inside a `govuk-form-group`.
///
/// [`process_form_group`] drives the shared steps; implementors supply the
/// context and the control markup.
pub trait FormGroupTagHelper {
    type Context: FormGroupContext;

    /// Whether the control has a `<label>` that must resolve to content.
    const HAS_LABEL: bool = true;

    fn form_group_options(&self) -> &FormGroupOptions;

    fn create_context(&self) -> Self::Context;

    /// The model's error message for the bound field.
    fn model_error_message(
        &self,
        view: ViewContext<'_>,
        expression: &ModelExpression,
    ) -> Option<String> {
        view.model.validation_message(expression)
    }

    /// Generate everything inside the `govuk-form-group` wrapper.
    fn generate_content(
        &self,
        context: &Self::Context,
        field: FormGroupField<'_>,
    ) -> Result<HtmlString, RenderError>;

    /// Adjust the `govuk-form-group` wrapper.
    fn decorate_form_group(&self, form_group: HtmlElement) -> HtmlElement {
        form_group
    }
}

/// Process a form control.
///
/// 1. Resolve the field name from `name` or `asp-for`.
/// 2. Evaluate the children into the control's context.
/// 3. Resolve the id, label, error message and `aria-describedby`.
/// 4. Generate the control and wrap it in `govuk-form-group`.
pub fn process_form_group<H: FormGroupTagHelper>(
    helper: &H,
    context: &mut TagHelperContext<'_, '_>,
    output: &mut TagHelperOutput,
) -> Result<(), RenderError> {
    let options = helper.form_group_options();
    let view = context.view();
    let model = view.model;
    let name = resolve_name(options, model)?;

    let (form_context, _) = context.scoped(helper.create_context(), |context| {
        context.child_content()
    })?;
    let builder = form_context.builder();

    let id = options
        .id
        .clone()
        .or_else(|| options.asp_for.as_ref().map(|expression| model.generate_id(expression)))
        .unwrap_or_else(|| name.clone());

    let label = if H::HAS_LABEL {
        Some(resolve_label(options, builder, model)?)
    } else {
        None
    };

    let error_message = match builder.error_message().and_then(|error| error.content.clone()) {
        Some(content) => Some(content),
        None if options.ignore_model_state_errors => None,
        None => options
            .asp_for
            .as_ref()
            .and_then(|expression| helper.model_error_message(view, expression))
            .map(|message| HtmlString::from_text(&message)),
    };

    let mut described_by: Vec<String> = options.described_by.iter().cloned().collect();
    if builder.hint().is_some() {
        described_by.push(format!("{id}-hint"));
    }
    if error_message.is_some() {
        described_by.push(format!("{id}-error"));
    }
    let described_by = described_by
        .into_iter()
        .filter(|token| !token.trim().is_empty())
        .collect::<Vec<_>>();

    let field = FormGroupField {
        view,
        asp_for: options.asp_for.as_ref(),
        model_value: options
            .asp_for
            .as_ref()
            .map(|expression| model.model_value(expression))
            .unwrap_or_default(),
        id,
        name,
        label,
        described_by: (!described_by.is_empty()).then(|| described_by.join(" ")),
        error_message,
        attributes: output.take_attributes(),
        builder,
        label_class: options.label_class.as_deref(),
    };
    let have_error = field.have_error();
    let content = helper.generate_content(&form_context, field)?;

    let form_group = HtmlElement::new("div")
        .with_class("govuk-form-group")
        .with_class_if(have_error, "govuk-form-group--error");
    let form_group = helper
        .decorate_form_group(form_group)
        .with_merged_attributes(&options.form_group_attributes)
        .with_html(content);

    output.write_element(form_group);
    Ok(())
}

fn resolve_name(options: &FormGroupOptions, model: &dyn ModelHelper) -> Result<String, RenderError> {
    match (&options.name, &options.asp_for) {
        (Some(name), _) => Ok(name.clone()),
        (None, Some(expression)) => Ok(model.full_html_field_name(expression)),
        (None, None) => Err(RenderError::at_least_one_attribute("name", "asp-for")),
    }
}

fn resolve_label(
    options: &FormGroupOptions,
    builder: &FormGroupBuilder,
    model: &dyn ModelHelper,
) -> Result<HtmlString, RenderError> {
    if let Some(content) = builder.label().and_then(|label| label.content.clone()) {
        return Ok(content);
    }

    let expression = options.asp_for.as_ref().ok_or_else(|| {
        RenderError::Configuration(
            "Label content must be specified when the 'asp-for' attribute is not specified."
                .to_owned(),
        )
    })?;

    let display_name = model
        .display_name(expression)
        .unwrap_or_else(|| expression.member_name().to_owned());
    Ok(HtmlString::from_text(&display_name))
}
