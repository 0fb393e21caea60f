//! `<govuk-radios>` and its children.

use crate::form_group::{
    FormGroupErrorMessageTagHelper, FormGroupFieldsetLegendTagHelper, FormGroupFieldsetTagHelper,
    FormGroupHintTagHelper,
};

use super::choices::{
    ChoiceContext, ChoiceDividerTagHelper, ChoiceItemConditionalTagHelper, ChoiceItemHintTagHelper,
    ChoiceItemTagHelper, ChoiceKind, ChoiceTagHelper, ChoiceTagNames,
};

/// Marker for the radios flavour of the choice components.
#[derive(Debug)]
pub enum Radios {}

impl ChoiceKind for Radios {
    const TAG_NAMES: ChoiceTagNames = ChoiceTagNames {
        root: "govuk-radios",
        fieldset: "govuk-radios-fieldset",
        legend: "govuk-radios-fieldset-legend",
        hint: "govuk-radios-hint",
        error_message: "govuk-radios-error-message",
        item: "govuk-radios-item",
        item_hint: "govuk-radios-item-hint",
        item_conditional: "govuk-radios-item-conditional",
        divider: "govuk-radios-divider",
    };
    const CLASS_PREFIX: &'static str = "govuk-radios";
    const INPUT_TYPE: &'static str = "radio";
}

/// Context of `<govuk-radios>`.
pub type RadiosContext = ChoiceContext<Radios>;
/// `<govuk-radios>`.
pub type RadiosTagHelper = ChoiceTagHelper<Radios>;
/// `<govuk-radios-fieldset>`.
pub type RadiosFieldsetTagHelper = FormGroupFieldsetTagHelper<RadiosContext>;
pub type RadiosFieldsetLegendTagHelper = FormGroupFieldsetLegendTagHelper<RadiosContext>;
pub type RadiosHintTagHelper = FormGroupHintTagHelper<RadiosContext>;
pub type RadiosErrorMessageTagHelper = FormGroupErrorMessageTagHelper<RadiosContext>;
/// `<govuk-radios-item>`. Its content is the label.
pub type RadiosItemTagHelper = ChoiceItemTagHelper<Radios>;
pub type RadiosItemHintTagHelper = ChoiceItemHintTagHelper<Radios>;
/// `<govuk-radios-item-conditional>`, revealed when the item is checked.
pub type RadiosItemConditionalTagHelper = ChoiceItemConditionalTagHelper<Radios>;
pub type RadiosDividerTagHelper = ChoiceDividerTagHelper<Radios>;
