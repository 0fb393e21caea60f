//! `<govuk-character-count>`: a textarea with a live length message.

use govuk_html::{HtmlElement, HtmlString};

use crate::error::RenderError;
use crate::form_group::{
    FormGroupBuilder, FormGroupContext, FormGroupErrorMessageTagHelper, FormGroupField,
    FormGroupHintTagHelper, FormGroupLabelTagHelper, FormGroupOptions, FormGroupTagHelper,
    FormGroupTagNames, form_group_builder_methods, process_form_group,
};
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

use super::textarea::TextareaAttributes;

/// Label, hint, then error message.
#[derive(Clone, Debug)]
pub struct CharacterCountContext {
    form_group: FormGroupBuilder,
}

impl Default for CharacterCountContext {
    fn default() -> Self {
        Self {
            form_group: FormGroupBuilder::new(Self::TAG_NAMES),
        }
    }
}

impl FormGroupContext for CharacterCountContext {
    const TAG_NAMES: FormGroupTagNames = FormGroupTagNames {
        root: "govuk-character-count",
        label: "govuk-character-count-label",
        hint: "govuk-character-count-hint",
        error_message: "govuk-character-count-error-message",
    };

    fn builder(&self) -> &FormGroupBuilder {
        &self.form_group
    }

    fn builder_mut(&mut self) -> &mut FormGroupBuilder {
        &mut self.form_group
    }
}

/// `<govuk-character-count-label>`.
pub type CharacterCountLabelTagHelper = FormGroupLabelTagHelper<CharacterCountContext>;
/// `<govuk-character-count-hint>`.
pub type CharacterCountHintTagHelper = FormGroupHintTagHelper<CharacterCountContext>;
/// `<govuk-character-count-error-message>`.
pub type CharacterCountErrorMessageTagHelper = FormGroupErrorMessageTagHelper<CharacterCountContext>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Limit {
    Characters(u32),
    Words(u32),
}

/// `<govuk-character-count>`.
///
/// Exactly one of `max-length` and `max-words` must be set.
#[derive(Clone, Debug, Default)]
pub struct CharacterCountTagHelper {
    form_group: FormGroupOptions,
    textarea: TextareaAttributes,
    max_length: Option<u32>,
    max_words: Option<u32>,
    threshold: Option<u8>,
}

impl CharacterCountTagHelper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    form_group_builder_methods!();

    /// Limit by characters. Exclusive with `max-words`.
    #[must_use]
    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Limit by words. Exclusive with `max-length`.
    #[must_use]
    pub fn with_max_words(mut self, max_words: u32) -> Self {
        self.max_words = Some(max_words);
        self
    }

    /// Percentage of the limit at which the message appears.
    ///
    /// # Errors
    ///
    /// Returns a range error unless `threshold` is between 0 and 100.
    pub fn with_threshold(mut self, threshold: u8) -> Result<Self, RenderError> {
        if threshold > 100 {
            return Err(RenderError::out_of_range("threshold", 0, 100));
        }
        self.threshold = Some(threshold);
        Ok(self)
    }

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

    fn limit(&self) -> Result<Limit, RenderError> {
        match (self.max_length, self.max_words) {
            (Some(_), Some(_)) => Err(RenderError::only_one_attribute("max-length", "max-words")),
            (Some(max_length), None) => Ok(Limit::Characters(max_length)),
            (None, Some(max_words)) => Ok(Limit::Words(max_words)),
            (None, None) => Err(RenderError::at_least_one_attribute("max-length", "max-words")),
        }
    }
}

impl FormGroupTagHelper for CharacterCountTagHelper {
    type Context = CharacterCountContext;

    fn form_group_options(&self) -> &FormGroupOptions {
        &self.form_group
    }

    fn create_context(&self) -> CharacterCountContext {
        CharacterCountContext::default()
    }

    fn generate_content(
        &self,
        _context: &CharacterCountContext,
        field: FormGroupField<'_>,
    ) -> Result<HtmlString, RenderError> {
        let message = match self.limit()? {
            Limit::Characters(max) => format!("You can enter up to {max} characters"),
            Limit::Words(max) => format!("You can enter up to {max} words"),
        };
        let info_id = format!("{}-info", field.id);

        let described_by = field.described_by_with(&info_id);

        let mut content = field.label_hint_and_error_message();
        let textarea = self.textarea.to_element(
            &field,
            Some("govuk-js-character-count"),
            Some(described_by.as_str()),
        );
        content.push_html(&textarea.to_html_string());

        let info = HtmlElement::new("div")
            .with_attribute("id", info_id)
            .with_class("govuk-hint govuk-character-count__message")
            .with_text(message);
        content.push_html(&info.to_html_string());
        Ok(content)
    }

    fn decorate_form_group(&self, form_group: HtmlElement) -> HtmlElement {
        let form_group = form_group
            .with_class("govuk-character-count")
            .with_attribute("data-module", "govuk-character-count");
        let form_group = match self.limit() {
            Ok(Limit::Characters(max)) => form_group.with_attribute("data-maxlength", max.to_string()),
            Ok(Limit::Words(max)) => form_group.with_attribute("data-maxwords", max.to_string()),
            Err(_) => form_group,
        };
        form_group.with_attribute_opt("data-threshold", self.threshold.map(|t| t.to_string()))
    }
}

impl TagHelper for CharacterCountTagHelper {
    fn tag_name(&self) -> &'static str {
        CharacterCountContext::TAG_NAMES.root
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        self.limit()?;
        process_form_group(self, context, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::Node;
    use crate::testing::{render, text};
    use pretty_assertions::assert_eq;

    fn label() -> Node {
        Node::component(CharacterCountLabelTagHelper::new())
            .child(text("Details"))
            .into()
    }

    #[test]
    fn test_max_length() {
        let html = render(
            Node::component(CharacterCountTagHelper::new().with_name("details").with_max_length(200))
                .child(label()),
        )
        .unwrap();
        assert_eq!(
            html,
            "<div class=\"govuk-form-group govuk-character-count\" data-module=\"govuk-character-count\" data-maxlength=\"200\">\
             <label class=\"govuk-label\" for=\"details\">Details</label>\
             <textarea class=\"govuk-textarea govuk-js-character-count\" id=\"details\" name=\"details\" rows=\"5\" aria-describedby=\"details-info\"></textarea>\
             <div id=\"details-info\" class=\"govuk-hint govuk-character-count__message\">You can enter up to 200 characters</div>\
             </div>"
        );
    }

    #[test]
    fn test_max_words_with_threshold_and_hint() {
        let html = render(
            Node::component(
                CharacterCountTagHelper::new()
                    .with_name("d")
                    .with_max_words(150)
                    .with_threshold(75)
                    .unwrap(),
            )
            .child(label())
            .child(Node::component(CharacterCountHintTagHelper::new()).child(text("Be brief"))),
        )
        .unwrap();
        assert!(html.starts_with(
            "<div class=\"govuk-form-group govuk-character-count\" data-module=\"govuk-character-count\" \
             data-maxwords=\"150\" data-threshold=\"75\">"
        ));
        assert!(html.contains("aria-describedby=\"d-hint d-info\""));
        assert!(html.contains("You can enter up to 150 words"));
    }

    #[test]
    fn test_threshold_out_of_range() {
        let error = CharacterCountTagHelper::new().with_threshold(101).unwrap_err();
        assert_eq!(
            error,
            RenderError::Range("The 'threshold' attribute must be between 0 and 100.".to_owned())
        );
    }

    #[test]
    fn test_both_limits() {
        let error = render(
            Node::component(
                CharacterCountTagHelper::new()
                    .with_name("d")
                    .with_max_length(10)
                    .with_max_words(10),
            )
            .child(label()),
        )
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Only one of the 'max-length' or 'max-words' attributes can be specified."
        );
    }

    #[test]
    fn test_no_limit() {
        let error = render(Node::component(CharacterCountTagHelper::new().with_name("d")).child(label()))
            .unwrap_err();
        assert!(matches!(error, RenderError::Configuration(_)));
    }
}
