//! GOV.UK Frontend components as tag helpers.
//!
//! Each component is a [`TagHelper`] registered under a custom element name
//! (`<govuk-radios>`, `<govuk-accordion-item>`, ...). A view is a tree of
//! [`Node`]s; the [`Renderer`] expands every component into the design
//! system's markup and enforces each component's structure while doing so.
//!
//! # Architecture
//!
//! - [`rendering`]: the render host. Node tree, typed per-render context
//!   store, output sink.
//! - [`form_group`]: label, hint, error message and fieldset handling shared
//!   by every form control.
//! - [`components`]: one module per component family. Composite components
//!   keep a context their children fill in a fixed order; a child arriving
//!   out of order or twice fails the render with a [`RenderError`].
//! - [`ModelHelper`]: the view's model and validation state, used by form
//!   controls bound with `asp-for`.
//!
//! # Example
//!
//! ```
//! use govuk_tag_helpers::{
//!     ComponentOptions, FormField, FormModel, InputLabelTagHelper, InputTagHelper, Node,
//!     Renderer,
//! };
//!
//! let model = FormModel::new().with_field(
//!     "Email",
//!     FormField::new()
//!         .with_display_name("Email address")
//!         .with_value("not-an-email")
//!         .with_error("Enter an email address in the correct format"),
//! );
//!
//! let view = [Node::component(InputTagHelper::new().with_asp_for("Email"))
//!     .child(Node::component(InputLabelTagHelper::new()))
//!     .into()];
//!
//! let options = ComponentOptions::default();
//! let html = Renderer::new(&model, &options).render(&view).unwrap();
//! assert!(html.as_str().contains(r#"<label class="govuk-label" for="Email">Email address</label>"#));
//! assert!(html.as_str().contains("govuk-input--error"));
//! ```

pub mod components;
mod date;
mod error;
pub mod form_group;
mod model;
mod options;
pub mod rendering;
#[cfg(test)]
mod testing;

pub use components::accordion::{
    AccordionContext, AccordionItem, AccordionItemContext, AccordionItemHeadingTagHelper,
    AccordionItemPart, AccordionItemSummaryTagHelper, AccordionItemTagHelper, AccordionTagHelper,
};
pub use components::back_link::BackLinkTagHelper;
pub use components::breadcrumbs::{BreadcrumbsItemTagHelper, BreadcrumbsTagHelper};
pub use components::button::{ButtonLinkTagHelper, ButtonTagHelper};
pub use components::character_count::{
    CharacterCountContext, CharacterCountErrorMessageTagHelper, CharacterCountHintTagHelper,
    CharacterCountLabelTagHelper, CharacterCountTagHelper,
};
pub use components::checkboxes::{
    Checkboxes, CheckboxesContext, CheckboxesDividerTagHelper, CheckboxesErrorMessageTagHelper,
    CheckboxesFieldsetLegendTagHelper, CheckboxesFieldsetTagHelper, CheckboxesHintTagHelper,
    CheckboxesItemConditionalTagHelper, CheckboxesItemHintTagHelper, CheckboxesItemTagHelper,
    CheckboxesTagHelper,
};
pub use components::date_input::{
    DateInputContext, DateInputErrorMessageTagHelper, DateInputFieldsetLegendTagHelper,
    DateInputFieldsetTagHelper, DateInputHintTagHelper, DateInputItem, DateInputItemTagHelper,
    DateInputItemType, DateInputTagHelper,
};
pub use components::details::{
    DetailsContext, DetailsSummaryTagHelper, DetailsTagHelper, DetailsTextTagHelper,
};
pub use components::error_summary::{
    ErrorSummaryContext, ErrorSummaryDescriptionTagHelper, ErrorSummaryItemTagHelper,
    ErrorSummaryTagHelper, ErrorSummaryTitleTagHelper,
};
pub use components::fieldset::{FieldsetContext, FieldsetLegendTagHelper, FieldsetTagHelper};
pub use components::file_upload::{
    FileUploadContext, FileUploadErrorMessageTagHelper, FileUploadHintTagHelper,
    FileUploadLabelTagHelper, FileUploadTagHelper,
};
pub use components::input::{
    InputAffix, InputContext, InputErrorMessageTagHelper, InputHintTagHelper, InputLabelTagHelper,
    InputPrefixTagHelper, InputSuffixTagHelper, InputTagHelper,
};
pub use components::inset_text::InsetTextTagHelper;
pub use components::notification_banner::{
    NotificationBannerContext, NotificationBannerTagHelper, NotificationBannerTitleTagHelper,
    NotificationBannerType,
};
pub use components::pagination::{
    PaginationContext, PaginationEllipsisTagHelper, PaginationItem, PaginationItemTagHelper,
    PaginationLinkTagHelper, PaginationTagHelper,
};
pub use components::panel::{PanelBodyTagHelper, PanelContext, PanelTagHelper, PanelTitleTagHelper};
pub use components::phase_banner::{PhaseBannerTagHelper, PhaseBannerTagTagHelper};
pub use components::radios::{
    Radios, RadiosContext, RadiosDividerTagHelper, RadiosErrorMessageTagHelper,
    RadiosFieldsetLegendTagHelper, RadiosFieldsetTagHelper, RadiosHintTagHelper,
    RadiosItemConditionalTagHelper, RadiosItemHintTagHelper, RadiosItemTagHelper, RadiosTagHelper,
};
pub use components::select::{
    SelectContext, SelectErrorMessageTagHelper, SelectHintTagHelper, SelectItem,
    SelectItemTagHelper, SelectLabelTagHelper, SelectTagHelper,
};
pub use components::skip_link::SkipLinkTagHelper;
pub use components::summary_list::{
    SummaryCardActionsTagHelper, SummaryCardContext, SummaryCardTagHelper,
    SummaryCardTitleTagHelper, SummaryListActionTagHelper, SummaryListContext,
    SummaryListRowActionsTagHelper, SummaryListRowContext, SummaryListRowKeyTagHelper,
    SummaryListRowTagHelper, SummaryListRowValueTagHelper, SummaryListTagHelper,
};
pub use components::tabs::{TabsContext, TabsItemTagHelper, TabsTagHelper};
pub use components::tag::TagTagHelper;
pub use components::textarea::{
    TextareaContext, TextareaErrorMessageTagHelper, TextareaHintTagHelper,
    TextareaLabelTagHelper, TextareaTagHelper,
};
pub use components::warning_text::WarningTextTagHelper;
pub use date::{
    Date, DateInputBindError, DateInputErrorComponents, DateInputModelConverter,
    DateInputParseErrors, DateModelConverter, NaiveDateModelConverter, bind_date_input,
    built_in_converter, date_from_model, parse_date_input,
};
pub use error::RenderError;
pub use model::{
    FormField, FormModel, ModelExpression, ModelHelper, ModelValue, NullModelHelper, sanitize_id,
};
pub use options::ComponentOptions;
pub use rendering::{
    ContextItems, Node, Renderer, TagHelper, TagHelperContext, TagHelperOutput, ViewContext,
};
