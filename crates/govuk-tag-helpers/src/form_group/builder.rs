//! Label, hint and error message accumulator.

use govuk_html::{AttributeDictionary, HtmlString};

use crate::error::RenderError;

/// How far a form group's children have progressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormGroupRenderStage {
    /// No child has been set yet.
    #[default]
    None,
    /// The label (or legend) has been set.
    Label,
    /// The hint has been set.
    Hint,
    /// The error message has been set.
    ErrorMessage,
}

/// Element names used in a form group's error messages.
///
/// For components grouped by a fieldset the `label` slot names the legend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormGroupTagNames {
    /// The control itself, e.g. `govuk-input`.
    pub root: &'static str,
    /// The label child, or the legend for fieldset-grouped controls.
    pub label: &'static str,
    /// The hint child.
    pub hint: &'static str,
    /// The error message child.
    pub error_message: &'static str,
}

/// Content and attributes of a `<{control}-label>` child.
#[derive(Clone, Debug, Default)]
pub struct FormGroupLabel {
    /// Wrap the label in an `h1`.
    pub is_page_heading: bool,
    /// Attributes written on the `<label>`.
    pub attributes: AttributeDictionary,
    /// `None` falls back to the bound field's display name.
    pub content: Option<HtmlString>,
}

/// Content and attributes of a `<{control}-hint>` child.
#[derive(Clone, Debug, Default)]
pub struct FormGroupHint {
    /// Attributes written on the hint `div`.
    pub attributes: AttributeDictionary,
    /// Hint markup.
    pub content: HtmlString,
}

/// Content and attributes of a `<{control}-error-message>` child.
#[derive(Clone, Debug, Default)]
pub struct FormGroupErrorMessage {
    /// Prefix read by screen readers; defaults to "Error".
    pub visually_hidden_text: Option<String>,
    /// Attributes written on the error message `p`.
    pub attributes: AttributeDictionary,
    /// `None` falls back to the bound field's validation message.
    pub content: Option<HtmlString>,
}

/// Collects a form group's label, hint and error message in that order.
///
/// Each slot can be set once. Setting a slot after a later one fails.
///
/// # Example
///
/// ```
/// use govuk_html::HtmlString;
/// use govuk_tag_helpers::form_group::{
///     FormGroupBuilder, FormGroupHint, FormGroupLabel, FormGroupTagNames,
/// };
///
/// const TAG_NAMES: FormGroupTagNames = FormGroupTagNames {
///     root: "govuk-input",
///     label: "govuk-input-label",
///     hint: "govuk-input-hint",
///     error_message: "govuk-input-error-message",
/// };
///
/// let mut builder = FormGroupBuilder::new(TAG_NAMES);
/// builder
///     .set_hint(FormGroupHint { content: HtmlString::from("Hint"), ..Default::default() })
///     .unwrap();
///
/// let error = builder.set_label(FormGroupLabel::default()).unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "<govuk-input-label> must be specified before <govuk-input-hint>."
/// );
/// ```
#[derive(Clone, Debug)]
pub struct FormGroupBuilder {
    tag_names: FormGroupTagNames,
    render_stage: FormGroupRenderStage,
    label: Option<FormGroupLabel>,
    hint: Option<FormGroupHint>,
    error_message: Option<FormGroupErrorMessage>,
}

impl FormGroupBuilder {
    /// An empty builder. `tag_names` are used in ordering errors.
    #[must_use]
    pub fn new(tag_names: FormGroupTagNames) -> Self {
        Self {
            tag_names,
            render_stage: FormGroupRenderStage::None,
            label: None,
            hint: None,
            error_message: None,
        }
    }

    /// Element names used in this builder's errors.
    #[must_use]
    pub fn tag_names(&self) -> FormGroupTagNames {
        self.tag_names
    }

    /// The latest slot that has been set.
    #[must_use]
    pub fn render_stage(&self) -> FormGroupRenderStage {
        self.render_stage
    }

    /// The label, if one was set.
    #[must_use]
    pub fn label(&self) -> Option<&FormGroupLabel> {
        self.label.as_ref()
    }

    /// The hint, if one was set.
    #[must_use]
    pub fn hint(&self) -> Option<&FormGroupHint> {
        self.hint.as_ref()
    }

    /// The error message, if one was set.
    #[must_use]
    pub fn error_message(&self) -> Option<&FormGroupErrorMessage> {
        self.error_message.as_ref()
    }

    /// Whether any slot has been set.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.render_stage > FormGroupRenderStage::None
    }

    /// Set the label unless a label or a later slot is already present.
    pub fn try_set_label(&mut self, label: FormGroupLabel) -> bool {
        if self.render_stage >= FormGroupRenderStage::Label {
            return false;
        }
        self.label = Some(label);
        self.render_stage = FormGroupRenderStage::Label;
        true
    }

    /// Set the hint unless a hint or a later slot is already present.
    pub fn try_set_hint(&mut self, hint: FormGroupHint) -> bool {
        if self.render_stage >= FormGroupRenderStage::Hint {
            return false;
        }
        self.hint = Some(hint);
        self.render_stage = FormGroupRenderStage::Hint;
        true
    }

    /// Set the error message unless one is already present.
    pub fn try_set_error_message(&mut self, error_message: FormGroupErrorMessage) -> bool {
        if self.render_stage >= FormGroupRenderStage::ErrorMessage {
            return false;
        }
        self.error_message = Some(error_message);
        self.render_stage = FormGroupRenderStage::ErrorMessage;
        true
    }

    /// Set the label.
    ///
    /// # Errors
    ///
    /// Fails if a label was already set, or if a hint or error message
    /// already was; the error names the first of those that is present.
    pub fn set_label(&mut self, label: FormGroupLabel) -> Result<(), RenderError> {
        self.check_can_set(FormGroupRenderStage::Label)?;
        self.try_set_label(label);
        Ok(())
    }

    /// Set the hint.
    ///
    /// # Errors
    ///
    /// Fails if a hint was already set or an error message already was.
    pub fn set_hint(&mut self, hint: FormGroupHint) -> Result<(), RenderError> {
        self.check_can_set(FormGroupRenderStage::Hint)?;
        self.try_set_hint(hint);
        Ok(())
    }

    /// Set the error message.
    ///
    /// # Errors
    ///
    /// Fails if an error message was already set.
    pub fn set_error_message(
        &mut self,
        error_message: FormGroupErrorMessage,
    ) -> Result<(), RenderError> {
        self.check_can_set(FormGroupRenderStage::ErrorMessage)?;
        self.try_set_error_message(error_message);
        Ok(())
    }

    fn check_can_set(&self, stage: FormGroupRenderStage) -> Result<(), RenderError> {
        if self.render_stage < stage {
            return Ok(());
        }

        let element = self.tag_name(stage);
        if self.is_set(stage) {
            return Err(RenderError::only_one(element, self.tag_names.root));
        }

        let later = [
            FormGroupRenderStage::Label,
            FormGroupRenderStage::Hint,
            FormGroupRenderStage::ErrorMessage,
        ]
        .into_iter()
        .find(|later| *later > stage && self.is_set(*later))
        .unwrap_or(self.render_stage);

        Err(RenderError::must_be_specified_before(
            element,
            self.tag_name(later),
        ))
    }

    fn is_set(&self, stage: FormGroupRenderStage) -> bool {
        match stage {
            FormGroupRenderStage::None => false,
            FormGroupRenderStage::Label => self.label.is_some(),
            FormGroupRenderStage::Hint => self.hint.is_some(),
            FormGroupRenderStage::ErrorMessage => self.error_message.is_some(),
        }
    }

    fn tag_name(&self, stage: FormGroupRenderStage) -> &'static str {
        match stage {
            FormGroupRenderStage::None => self.tag_names.root,
            FormGroupRenderStage::Label => self.tag_names.label,
            FormGroupRenderStage::Hint => self.tag_names.hint,
            FormGroupRenderStage::ErrorMessage => self.tag_names.error_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAG_NAMES: FormGroupTagNames = FormGroupTagNames {
        root: "govuk-textarea",
        label: "govuk-textarea-label",
        hint: "govuk-textarea-hint",
        error_message: "govuk-textarea-error-message",
    };

    fn hint() -> FormGroupHint {
        FormGroupHint {
            attributes: AttributeDictionary::new(),
            content: HtmlString::from("Hint"),
        }
    }

    #[test]
    fn test_slots_in_order() {
        let mut builder = FormGroupBuilder::new(TAG_NAMES);
        builder.set_label(FormGroupLabel::default()).unwrap();
        builder.set_hint(hint()).unwrap();
        builder
            .set_error_message(FormGroupErrorMessage::default())
            .unwrap();
        assert_eq!(builder.render_stage(), FormGroupRenderStage::ErrorMessage);
        assert_eq!(builder.hint().unwrap().content.as_str(), "Hint");
    }

    #[test]
    fn test_slots_are_optional() {
        let mut builder = FormGroupBuilder::new(TAG_NAMES);
        assert!(!builder.has_content());
        builder
            .set_error_message(FormGroupErrorMessage::default())
            .unwrap();
        assert!(builder.has_content());
        assert!(builder.label().is_none());
    }

    #[test]
    fn test_set_label_twice() {
        let mut builder = FormGroupBuilder::new(TAG_NAMES);
        builder.set_label(FormGroupLabel::default()).unwrap();
        let error = builder.set_label(FormGroupLabel::default()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Only one <govuk-textarea-label> element is permitted within each <govuk-textarea>."
        );
    }

    #[test]
    fn test_set_hint_after_error_message() {
        let mut builder = FormGroupBuilder::new(TAG_NAMES);
        builder
            .set_error_message(FormGroupErrorMessage::default())
            .unwrap();
        let error = builder.set_hint(hint()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "<govuk-textarea-hint> must be specified before <govuk-textarea-error-message>."
        );
    }

    #[test]
    fn test_set_label_names_first_later_slot() {
        let mut builder = FormGroupBuilder::new(TAG_NAMES);
        builder.set_hint(hint()).unwrap();
        builder
            .set_error_message(FormGroupErrorMessage::default())
            .unwrap();
        let error = builder.set_label(FormGroupLabel::default()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "<govuk-textarea-label> must be specified before <govuk-textarea-hint>."
        );
    }

    #[test]
    fn test_set_hint_twice_after_error_message() {
        let mut builder = FormGroupBuilder::new(TAG_NAMES);
        builder.set_hint(hint()).unwrap();
        builder
            .set_error_message(FormGroupErrorMessage::default())
            .unwrap();
        let error = builder.set_hint(hint()).unwrap_err();
        assert!(matches!(error, RenderError::Ordering(_)));
        assert!(error.to_string().starts_with("Only one <govuk-textarea-hint>"));
    }

    #[test]
    fn test_try_set_reports_rejection() {
        let mut builder = FormGroupBuilder::new(TAG_NAMES);
        assert!(builder.try_set_hint(hint()));
        assert!(!builder.try_set_label(FormGroupLabel::default()));
        assert!(!builder.try_set_hint(hint()));
        assert!(builder.try_set_error_message(FormGroupErrorMessage::default()));
        assert!(builder.label().is_none());
    }
}
