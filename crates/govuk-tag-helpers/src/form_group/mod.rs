//! Shared label, hint and error message handling for form controls.
//!
//! Every form control (input, textarea, select, radios, ...) renders the
//! same wrapper: an optional label or legend, an optional hint, an optional
//! error message and the control itself inside a `govuk-form-group` div.
//!
//! - [`FormGroupBuilder`] collects the label, hint and error message in order.
//! - [`FormGroupContext`] is implemented by each control's context so the
//!   generic child helpers in this module can find it.
//! - [`FormGroupTagHelper`] and [`process_form_group`] resolve names, ids,
//!   labels and errors against the model and assemble the wrapper.
//! - [`FieldsetScope`] handles the optional fieldset of grouped controls.

mod base;
mod builder;
mod children;
mod fieldset;

use govuk_html::HtmlString;

use crate::error::RenderError;

pub(crate) use base::form_group_builder_methods;
pub use base::{FormGroupField, FormGroupOptions, FormGroupTagHelper, process_form_group};
pub use builder::{
    FormGroupBuilder, FormGroupErrorMessage, FormGroupHint, FormGroupLabel, FormGroupRenderStage,
    FormGroupTagNames,
};
pub use children::{
    FormGroupErrorMessageTagHelper, FormGroupHintTagHelper, FormGroupLabelTagHelper,
};
pub use fieldset::{
    FieldsetLegend, FieldsetParent, FieldsetScope, FieldsetTagNames, FormGroupFieldset,
    FormGroupFieldsetContext, FormGroupFieldsetLegendTagHelper, FormGroupFieldsetTagHelper,
};

/// A component context that owns a [`FormGroupBuilder`].
///
/// The default setters forward to the builder. Contexts with extra children
/// (items, prefixes, a fieldset) override them to enforce their own
/// ordering first.
pub trait FormGroupContext: 'static {
    const TAG_NAMES: FormGroupTagNames;

    fn builder(&self) -> &FormGroupBuilder;

    fn builder_mut(&mut self) -> &mut FormGroupBuilder;

    fn set_label(&mut self, label: FormGroupLabel) -> Result<(), RenderError> {
        self.builder_mut().set_label(label)
    }

    fn set_hint(&mut self, hint: FormGroupHint) -> Result<(), RenderError> {
        self.builder_mut().set_hint(hint)
    }

    fn set_error_message(&mut self, error_message: FormGroupErrorMessage) -> Result<(), RenderError> {
        self.builder_mut().set_error_message(error_message)
    }
}

/// Child content, or `None` when it is blank.
pub(crate) fn non_empty(content: HtmlString) -> Option<HtmlString> {
    if content.is_empty_or_whitespace() {
        None
    } else {
        Some(content)
    }
}
