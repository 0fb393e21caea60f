//! `<govuk-input>`: text input with optional prefix and suffix.

use govuk_html::{AttributeDictionary, HtmlElement, HtmlString};

use crate::error::RenderError;
use crate::form_group::{
    FormGroupBuilder, FormGroupContext, FormGroupErrorMessage, FormGroupErrorMessageTagHelper,
    FormGroupField, FormGroupHint, FormGroupHintTagHelper, FormGroupLabel,
    FormGroupLabelTagHelper, FormGroupOptions, FormGroupTagHelper, FormGroupTagNames,
    form_group_builder_methods, process_form_group,
};
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

const TAG_NAME: &str = "govuk-input";
const PREFIX_TAG_NAME: &str = "govuk-input-prefix";
const SUFFIX_TAG_NAME: &str = "govuk-input-suffix";

/// A prefix or suffix shown next to the input.
#[derive(Clone, Debug, Default)]
pub struct InputAffix {
    pub attributes: AttributeDictionary,
    pub content: HtmlString,
}

/// Label, hint, error message, then prefix, then suffix.
#[derive(Clone, Debug)]
pub struct InputContext {
    form_group: FormGroupBuilder,
    prefix: Option<InputAffix>,
    suffix: Option<InputAffix>,
}

impl InputContext {
    #[must_use]
    pub fn new() -> Self {
        Self {
            form_group: FormGroupBuilder::new(Self::TAG_NAMES),
            prefix: None,
            suffix: None,
        }
    }

    /// The prefix, if one was set.
    #[must_use]
    pub fn prefix(&self) -> Option<&InputAffix> {
        self.prefix.as_ref()
    }

    /// The suffix, if one was set.
    #[must_use]
    pub fn suffix(&self) -> Option<&InputAffix> {
        self.suffix.as_ref()
    }

    /// # Errors
    ///
    /// Fails on a second prefix or when the suffix was already set.
    pub fn set_prefix(&mut self, prefix: InputAffix) -> Result<(), RenderError> {
        if self.prefix.is_some() {
            return Err(RenderError::only_one(PREFIX_TAG_NAME, TAG_NAME));
        }
        if self.suffix.is_some() {
            return Err(RenderError::must_be_specified_before(
                PREFIX_TAG_NAME,
                SUFFIX_TAG_NAME,
            ));
        }
        self.prefix = Some(prefix);
        Ok(())
    }

    /// # Errors
    ///
    /// Fails on a second suffix.
    pub fn set_suffix(&mut self, suffix: InputAffix) -> Result<(), RenderError> {
        if self.suffix.is_some() {
            return Err(RenderError::only_one(SUFFIX_TAG_NAME, TAG_NAME));
        }
        self.suffix = Some(suffix);
        Ok(())
    }

    fn check_before_affixes(&self, element: &str) -> Result<(), RenderError> {
        let first_affix = if self.prefix.is_some() {
            Some(PREFIX_TAG_NAME)
        } else if self.suffix.is_some() {
            Some(SUFFIX_TAG_NAME)
        } else {
            None
        };

        match first_affix {
            Some(affix) => Err(RenderError::must_be_specified_before(element, affix)),
            None => Ok(()),
        }
    }
}

impl Default for InputContext {
    fn default() -> Self {
        Self::new()
    }
}

impl FormGroupContext for InputContext {
    const TAG_NAMES: FormGroupTagNames = FormGroupTagNames {
        root: TAG_NAME,
        label: "govuk-input-label",
        hint: "govuk-input-hint",
        error_message: "govuk-input-error-message",
    };

    fn builder(&self) -> &FormGroupBuilder {
        &self.form_group
    }

    fn builder_mut(&mut self) -> &mut FormGroupBuilder {
        &mut self.form_group
    }

    fn set_label(&mut self, label: FormGroupLabel) -> Result<(), RenderError> {
        self.check_before_affixes(Self::TAG_NAMES.label)?;
        self.form_group.set_label(label)
    }

    fn set_hint(&mut self, hint: FormGroupHint) -> Result<(), RenderError> {
        self.check_before_affixes(Self::TAG_NAMES.hint)?;
        self.form_group.set_hint(hint)
    }

    fn set_error_message(&mut self, error_message: FormGroupErrorMessage) -> Result<(), RenderError> {
        self.check_before_affixes(Self::TAG_NAMES.error_message)?;
        self.form_group.set_error_message(error_message)
    }
}

/// `<govuk-input-label>`.
pub type InputLabelTagHelper = FormGroupLabelTagHelper<InputContext>;
/// `<govuk-input-hint>`.
pub type InputHintTagHelper = FormGroupHintTagHelper<InputContext>;
/// `<govuk-input-error-message>`.
pub type InputErrorMessageTagHelper = FormGroupErrorMessageTagHelper<InputContext>;

/// `<govuk-input>`.
///
/// # Example
///
/// ```
/// use govuk_tag_helpers::{
///     ComponentOptions, InputLabelTagHelper, InputTagHelper, Node, NullModelHelper, Renderer,
/// };
///
/// let view = [Node::component(InputTagHelper::new().with_name("postcode"))
///     .child(Node::component(InputLabelTagHelper::new()).child(Node::text("Postcode")))
///     .into()];
///
/// let options = ComponentOptions::default();
/// let html = Renderer::new(&NullModelHelper, &options).render(&view).unwrap();
/// assert!(html.as_str().contains(r#"<input class="govuk-input" id="postcode" name="postcode" type="text">"#));
/// ```
#[derive(Clone, Debug)]
pub struct InputTagHelper {
    form_group: FormGroupOptions,
    input_type: String,
    input_mode: Option<String>,
    spellcheck: Option<bool>,
    autocomplete: Option<String>,
    pattern: Option<String>,
    value: Option<String>,
    disabled: bool,
}

impl InputTagHelper {
    /// A text input.
    #[must_use]
    pub fn new() -> Self {
        Self {
            form_group: FormGroupOptions::default(),
            input_type: "text".to_owned(),
            input_mode: None,
            spellcheck: None,
            autocomplete: None,
            pattern: None,
            value: None,
            disabled: false,
        }
    }

    form_group_builder_methods!();

    /// The input `type`. Defaults to `text`.
    #[must_use]
    pub fn with_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    /// `inputmode`, e.g. `numeric`.
    #[must_use]
    pub fn with_input_mode(mut self, input_mode: impl Into<String>) -> Self {
        self.input_mode = Some(input_mode.into());
        self
    }

    #[must_use]
    pub fn with_spellcheck(mut self, spellcheck: bool) -> Self {
        self.spellcheck = Some(spellcheck);
        self
    }

    /// `autocomplete`, e.g. `email`.
    #[must_use]
    pub fn with_autocomplete(mut self, autocomplete: impl Into<String>) -> Self {
        self.autocomplete = Some(autocomplete.into());
        self
    }

    /// `pattern` of the input.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Initial value, overriding the bound value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Render the input disabled.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Default for InputTagHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl FormGroupTagHelper for InputTagHelper {
    type Context = InputContext;

    fn form_group_options(&self) -> &FormGroupOptions {
        &self.form_group
    }

    fn create_context(&self) -> InputContext {
        InputContext::new()
    }

    fn generate_content(
        &self,
        context: &InputContext,
        field: FormGroupField<'_>,
    ) -> Result<HtmlString, RenderError> {
        let value = self
            .value
            .clone()
            .or_else(|| field.asp_for.and_then(|_| field.view.model.attempted_value(&field.name)))
            .or_else(|| field.model_value.as_scalar().map(str::to_owned));

        let input = HtmlElement::new("input")
            .with_class("govuk-input")
            .with_class_if(field.have_error(), "govuk-input--error")
            .with_attribute("id", field.id.as_str())
            .with_attribute("name", field.name.as_str())
            .with_attribute("type", self.input_type.as_str())
            .with_attribute_opt("spellcheck", self.spellcheck.map(|s| s.to_string()))
            .with_attribute_opt("value", value)
            .with_attribute_opt("inputmode", self.input_mode.as_deref())
            .with_attribute_opt("autocomplete", self.autocomplete.as_deref())
            .with_attribute_opt("pattern", self.pattern.as_deref())
            .with_attribute_opt("aria-describedby", field.described_by.as_deref())
            .with_boolean_attribute_if(self.disabled, "disabled")
            .with_merged_attributes(&field.attributes);

        let mut content = field.label_hint_and_error_message();

        if context.prefix.is_none() && context.suffix.is_none() {
            content.push_html(&input.to_html_string());
            return Ok(content);
        }

        let affix = |class: &str, affix: &InputAffix| {
            HtmlElement::new("div")
                .with_class(class)
                .with_attribute("aria-hidden", "true")
                .with_merged_attributes(&affix.attributes)
                .with_html(affix.content.clone())
        };
        let wrapper = HtmlElement::new("div")
            .with_class("govuk-input__wrapper")
            .with_child_opt(context.prefix.as_ref().map(|p| affix("govuk-input__prefix", p)))
            .with_child(input)
            .with_child_opt(context.suffix.as_ref().map(|s| affix("govuk-input__suffix", s)));
        content.push_html(&wrapper.to_html_string());
        Ok(content)
    }
}

impl TagHelper for InputTagHelper {
    fn tag_name(&self) -> &'static str {
        TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        process_form_group(self, context, output)
    }
}

/// `<govuk-input-prefix>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputPrefixTagHelper;

impl TagHelper for InputPrefixTagHelper {
    fn tag_name(&self) -> &'static str {
        PREFIX_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<InputContext>(PREFIX_TAG_NAME, TAG_NAME)?;
        let prefix = InputAffix {
            content: context.child_content()?,
            attributes: output.take_attributes(),
        };
        context
            .parent_mut::<InputContext>(PREFIX_TAG_NAME, TAG_NAME)?
            .set_prefix(prefix)?;
        output.suppress_output();
        Ok(())
    }
}

/// `<govuk-input-suffix>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputSuffixTagHelper;

impl TagHelper for InputSuffixTagHelper {
    fn tag_name(&self) -> &'static str {
        SUFFIX_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<InputContext>(SUFFIX_TAG_NAME, TAG_NAME)?;
        let suffix = InputAffix {
            content: context.child_content()?,
            attributes: output.take_attributes(),
        };
        context
            .parent_mut::<InputContext>(SUFFIX_TAG_NAME, TAG_NAME)?
            .set_suffix(suffix)?;
        output.suppress_output();
        Ok(())
    }
}
