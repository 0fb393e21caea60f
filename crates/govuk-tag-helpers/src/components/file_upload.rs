//! `<govuk-file-upload>`.

use govuk_html::{HtmlElement, HtmlString};

use crate::error::RenderError;
use crate::form_group::{
    FormGroupBuilder, FormGroupContext, FormGroupErrorMessageTagHelper, FormGroupField,
    FormGroupHintTagHelper, FormGroupLabelTagHelper, FormGroupOptions, FormGroupTagHelper,
    FormGroupTagNames, form_group_builder_methods, process_form_group,
};
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

/// Label, hint, then error message.
#[derive(Clone, Debug)]
pub struct FileUploadContext {
    form_group: FormGroupBuilder,
}

impl Default for FileUploadContext {
    fn default() -> Self {
        Self {
            form_group: FormGroupBuilder::new(Self::TAG_NAMES),
        }
    }
}

impl FormGroupContext for FileUploadContext {
    const TAG_NAMES: FormGroupTagNames = FormGroupTagNames {
        root: "govuk-file-upload",
        label: "govuk-file-upload-label",
        hint: "govuk-file-upload-hint",
        error_message: "govuk-file-upload-error-message",
    };

    fn builder(&self) -> &FormGroupBuilder {
        &self.form_group
    }

    fn builder_mut(&mut self) -> &mut FormGroupBuilder {
        &mut self.form_group
    }
}

/// `<govuk-file-upload-label>`.
pub type FileUploadLabelTagHelper = FormGroupLabelTagHelper<FileUploadContext>;
pub type FileUploadHintTagHelper = FormGroupHintTagHelper<FileUploadContext>;
pub type FileUploadErrorMessageTagHelper = FormGroupErrorMessageTagHelper<FileUploadContext>;

/// `<govuk-file-upload>`.
#[derive(Clone, Debug, Default)]
pub struct FileUploadTagHelper {
    form_group: FormGroupOptions,
    disabled: bool,
}

impl FileUploadTagHelper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    form_group_builder_methods!();

    /// Render the input disabled.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl FormGroupTagHelper for FileUploadTagHelper {
    type Context = FileUploadContext;

    fn form_group_options(&self) -> &FormGroupOptions {
        &self.form_group
    }

    fn create_context(&self) -> FileUploadContext {
        FileUploadContext::default()
    }

    fn generate_content(
        &self,
        _context: &FileUploadContext,
        field: FormGroupField<'_>,
    ) -> Result<HtmlString, RenderError> {
        let input = HtmlElement::new("input")
            .with_class("govuk-file-upload")
            .with_class_if(field.have_error(), "govuk-file-upload--error")
            .with_attribute("id", field.id.as_str())
            .with_attribute("name", field.name.as_str())
            .with_attribute("type", "file")
            .with_attribute_opt("aria-describedby", field.described_by.as_deref())
            .with_boolean_attribute_if(self.disabled, "disabled")
            .with_merged_attributes(&field.attributes);

        let mut content = field.label_hint_and_error_message();
        content.push_html(&input.to_html_string());
        Ok(content)
    }
}

impl TagHelper for FileUploadTagHelper {
    fn tag_name(&self) -> &'static str {
        FileUploadContext::TAG_NAMES.root
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
    use crate::rendering::Node;
    use crate::testing::{render, text};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_file_upload_with_error() {
        let html = render(
            Node::component(FileUploadTagHelper::new().with_name("file"))
                .child(Node::component(FileUploadLabelTagHelper::new()).child(text("Upload a file")))
                .child(Node::component(FileUploadErrorMessageTagHelper::new()).child(text("Select a file"))),
        )
        .unwrap();
        assert_eq!(
            html,
            "<div class=\"govuk-form-group govuk-form-group--error\">\
             <label class=\"govuk-label\" for=\"file\">Upload a file</label>\
             <p id=\"file-error\" class=\"govuk-error-message\"><span class=\"govuk-visually-hidden\">Error:</span> Select a file</p>\
             <input class=\"govuk-file-upload govuk-file-upload--error\" id=\"file\" name=\"file\" type=\"file\" aria-describedby=\"file-error\">\
             </div>"
        );
    }

    #[test]
    fn test_error_before_label() {
        let error = render(
            Node::component(FileUploadTagHelper::new().with_name("file"))
                .child(Node::component(FileUploadErrorMessageTagHelper::new()).child(text("E")))
                .child(Node::component(FileUploadLabelTagHelper::new()).child(text("L"))),
        )
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            "<govuk-file-upload-label> must be specified before <govuk-file-upload-error-message>."
        );
    }
}
