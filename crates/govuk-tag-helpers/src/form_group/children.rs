//! Label, hint and error message tag helpers shared by form controls.

use std::marker::PhantomData;

use crate::error::RenderError;
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

use super::{FormGroupContext, FormGroupErrorMessage, FormGroupHint, FormGroupLabel, non_empty};

/// `<{control}-label>` for the form control whose context is `C`.
pub struct FormGroupLabelTagHelper<C> {
    is_page_heading: bool,
    _context: PhantomData<fn() -> C>,
}

impl<C> FormGroupLabelTagHelper<C> {
    /// A label rendered as a plain `<label>`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            is_page_heading: false,
            _context: PhantomData,
        }
    }

    /// Render the label inside an `h1`.
    #[must_use]
    pub fn with_is_page_heading(mut self, is_page_heading: bool) -> Self {
        self.is_page_heading = is_page_heading;
        self
    }
}

impl<C> Default for FormGroupLabelTagHelper<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: FormGroupContext> TagHelper for FormGroupLabelTagHelper<C> {
    fn tag_name(&self) -> &'static str {
        C::TAG_NAMES.label
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let tag_names = C::TAG_NAMES;
        context.ensure_parent::<C>(tag_names.label, tag_names.root)?;

        let content = context.child_content()?;
        let label = FormGroupLabel {
            is_page_heading: self.is_page_heading,
            attributes: output.take_attributes(),
            content: non_empty(content),
        };
        context
            .parent_mut::<C>(tag_names.label, tag_names.root)?
            .set_label(label)?;

        output.suppress_output();
        Ok(())
    }
}

/// `<{control}-hint>` for the form control whose context is `C`.
pub struct FormGroupHintTagHelper<C> {
    _context: PhantomData<fn() -> C>,
}

impl<C> FormGroupHintTagHelper<C> {
    /// A hint element.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _context: PhantomData,
        }
    }
}

impl<C> Default for FormGroupHintTagHelper<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: FormGroupContext> TagHelper for FormGroupHintTagHelper<C> {
    fn tag_name(&self) -> &'static str {
        C::TAG_NAMES.hint
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let tag_names = C::TAG_NAMES;
        context.ensure_parent::<C>(tag_names.hint, tag_names.root)?;

        let hint = FormGroupHint {
            content: context.child_content()?,
            attributes: output.take_attributes(),
        };
        context
            .parent_mut::<C>(tag_names.hint, tag_names.root)?
            .set_hint(hint)?;

        output.suppress_output();
        Ok(())
    }
}

/// `<{control}-error-message>` for the form control whose context is `C`.
pub struct FormGroupErrorMessageTagHelper<C> {
    visually_hidden_text: Option<String>,
    _context: PhantomData<fn() -> C>,
}

impl<C> FormGroupErrorMessageTagHelper<C> {
    /// An error message with the default "Error" prefix.
    #[must_use]
    pub fn new() -> Self {
        Self {
            visually_hidden_text: None,
            _context: PhantomData,
        }
    }

    /// Replace the visually hidden "Error" prefix.
    #[must_use]
    pub fn with_visually_hidden_text(mut self, text: impl Into<String>) -> Self {
        self.visually_hidden_text = Some(text.into());
        self
    }
}

impl<C> Default for FormGroupErrorMessageTagHelper<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: FormGroupContext> TagHelper for FormGroupErrorMessageTagHelper<C> {
    fn tag_name(&self) -> &'static str {
        C::TAG_NAMES.error_message
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let tag_names = C::TAG_NAMES;
        context.ensure_parent::<C>(tag_names.error_message, tag_names.root)?;

        let content = context.child_content()?;
        let error_message = FormGroupErrorMessage {
            visually_hidden_text: self.visually_hidden_text.clone(),
            attributes: output.take_attributes(),
            content: non_empty(content),
        };
        context
            .parent_mut::<C>(tag_names.error_message, tag_names.root)?
            .set_error_message(error_message)?;

        output.suppress_output();
        Ok(())
    }
}
