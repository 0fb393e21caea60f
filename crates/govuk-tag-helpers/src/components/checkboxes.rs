//! `<govuk-checkboxes>` and its children.

use crate::form_group::{
    FormGroupErrorMessageTagHelper, FormGroupFieldsetLegendTagHelper, FormGroupFieldsetTagHelper,
    FormGroupHintTagHelper,
};

use super::choices::{
    ChoiceContext, ChoiceDividerTagHelper, ChoiceItemConditionalTagHelper, ChoiceItemHintTagHelper,
    ChoiceItemTagHelper, ChoiceKind, ChoiceTagHelper, ChoiceTagNames,
};

/// Marker for the checkboxes flavour of the choice components.
#[derive(Debug)]
pub enum Checkboxes {}

impl ChoiceKind for Checkboxes {
    const TAG_NAMES: ChoiceTagNames = ChoiceTagNames {
        root: "govuk-checkboxes",
        fieldset: "govuk-checkboxes-fieldset",
        legend: "govuk-checkboxes-fieldset-legend",
        hint: "govuk-checkboxes-hint",
        error_message: "govuk-checkboxes-error-message",
        item: "govuk-checkboxes-item",
        item_hint: "govuk-checkboxes-item-hint",
        item_conditional: "govuk-checkboxes-item-conditional",
        divider: "govuk-checkboxes-divider",
    };
    const CLASS_PREFIX: &'static str = "govuk-checkboxes";
    const INPUT_TYPE: &'static str = "checkbox";
}

impl ChoiceItemTagHelper<Checkboxes> {
    /// Submit this checkbox under its own `name` instead of the group's.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(name.into());
        self
    }

    /// Mark this checkbox as "none of the above".
    #[must_use]
    pub fn with_exclusive(mut self, exclusive: bool) -> Self {
        self.set_exclusive(exclusive);
        self
    }
}

/// Context of `<govuk-checkboxes>`.
pub type CheckboxesContext = ChoiceContext<Checkboxes>;
/// `<govuk-checkboxes>`.
pub type CheckboxesTagHelper = ChoiceTagHelper<Checkboxes>;
/// `<govuk-checkboxes-fieldset>`.
pub type CheckboxesFieldsetTagHelper = FormGroupFieldsetTagHelper<CheckboxesContext>;
pub type CheckboxesFieldsetLegendTagHelper = FormGroupFieldsetLegendTagHelper<CheckboxesContext>;
pub type CheckboxesHintTagHelper = FormGroupHintTagHelper<CheckboxesContext>;
pub type CheckboxesErrorMessageTagHelper = FormGroupErrorMessageTagHelper<CheckboxesContext>;
/// `<govuk-checkboxes-item>`. Its content is the label.
pub type CheckboxesItemTagHelper = ChoiceItemTagHelper<Checkboxes>;
pub type CheckboxesItemHintTagHelper = ChoiceItemHintTagHelper<Checkboxes>;
pub type CheckboxesItemConditionalTagHelper = ChoiceItemConditionalTagHelper<Checkboxes>;
/// `<govuk-checkboxes-divider>`, e.g. "or" before an exclusive item.
pub type CheckboxesDividerTagHelper = ChoiceDividerTagHelper<Checkboxes>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FormField, FormModel, ModelValue};
    use crate::rendering::Node;
    use crate::testing::{render, render_with_model, text};
    use pretty_assertions::assert_eq;

    fn item(value: &str, label: &str) -> Node {
        Node::component(CheckboxesItemTagHelper::new(value))
            .child(text(label))
            .into()
    }

    fn waste_model(value: ModelValue) -> FormModel {
        FormModel::new().with_field(
            "Waste",
            FormField::new().with_display_name("Waste types").with_value(value),
        )
    }

    fn waste_checkboxes() -> Node {
        Node::component(CheckboxesTagHelper::new().with_asp_for("Waste"))
            .child(item("carcasses", "Carcasses"))
            .child(item("mines", "Mines"))
            .child(item("farm", "Farm"))
            .into()
    }

    #[test]
    fn test_checked_from_collection() {
        let model = waste_model(ModelValue::Collection(vec!["mines".to_owned(), "farm".to_owned()]));
        let html = render_with_model(&model, waste_checkboxes()).unwrap();
        assert_eq!(
            html,
            "<div class=\"govuk-form-group\"><div class=\"govuk-checkboxes\">\
             <div class=\"govuk-checkboxes__item\">\
             <input class=\"govuk-checkboxes__input\" id=\"Waste\" name=\"Waste\" type=\"checkbox\" value=\"carcasses\">\
             <label class=\"govuk-label govuk-checkboxes__label\" for=\"Waste\">Carcasses</label></div>\
             <div class=\"govuk-checkboxes__item\">\
             <input class=\"govuk-checkboxes__input\" id=\"Waste-1\" name=\"Waste\" type=\"checkbox\" value=\"mines\" checked>\
             <label class=\"govuk-label govuk-checkboxes__label\" for=\"Waste-1\">Mines</label></div>\
             <div class=\"govuk-checkboxes__item\">\
             <input class=\"govuk-checkboxes__input\" id=\"Waste-2\" name=\"Waste\" type=\"checkbox\" value=\"farm\" checked>\
             <label class=\"govuk-label govuk-checkboxes__label\" for=\"Waste-2\">Farm</label></div>\
             </div></div>"
        );
    }

    #[test]
    fn test_null_model_checks_nothing() {
        let html = render_with_model(&waste_model(ModelValue::Null), waste_checkboxes()).unwrap();
        assert!(!html.contains("checked"));
    }

    #[test]
    fn test_model_error_adds_error_message() {
        let model = FormModel::new().with_field(
            "Waste",
            FormField::new().with_error("Select the types of waste"),
        );
        let html = render_with_model(&model, waste_checkboxes()).unwrap();
        assert!(html.starts_with(
            "<div class=\"govuk-form-group govuk-form-group--error\">\
             <p id=\"Waste-error\" class=\"govuk-error-message\">\
             <span class=\"govuk-visually-hidden\">Error:</span> Select the types of waste</p>\
             <div class=\"govuk-checkboxes\" aria-describedby=\"Waste-error\">"
        ));
    }

    #[test]
    fn test_item_name_and_exclusive() {
        let html = render(
            Node::component(CheckboxesTagHelper::new().with_name("contact"))
                .child(
                    Node::component(CheckboxesItemTagHelper::new("email").with_name("contact-email"))
                        .child(text("Email")),
                )
                .child(Node::component(CheckboxesDividerTagHelper::new()).child(text("or")))
                .child(
                    Node::component(CheckboxesItemTagHelper::new("none").with_exclusive(true))
                        .child(text("None")),
                ),
        )
        .unwrap();
        assert!(html.contains(
            "<input class=\"govuk-checkboxes__input\" id=\"contact\" name=\"contact-email\" type=\"checkbox\" value=\"email\">"
        ));
        assert!(html.contains("<div class=\"govuk-checkboxes__divider\">or</div>"));
        assert!(html.contains(
            "<input class=\"govuk-checkboxes__input\" id=\"contact-1\" name=\"contact\" type=\"checkbox\" value=\"none\" \
             data-behaviour=\"exclusive\">"
        ));
    }

    #[test]
    fn test_item_attributes_go_on_input() {
        let html = render(
            Node::component(CheckboxesTagHelper::new().with_name("n")).child(
                Node::component(CheckboxesItemTagHelper::new("a").with_disabled(true))
                    .attributes(r#"data-test="x""#)
                    .child(text("A")),
            ),
        )
        .unwrap();
        assert!(html.contains("value=\"a\" disabled data-test=\"x\">"));
    }

    #[test]
    fn test_fieldset_described_by_combined() {
        let html = render(
            Node::component(CheckboxesTagHelper::new().with_name("n")).child(
                Node::component(CheckboxesFieldsetTagHelper::new().with_described_by("extra"))
                    .child(Node::component(CheckboxesFieldsetLegendTagHelper::new()).child(text("Legend")))
                    .child(Node::component(CheckboxesErrorMessageTagHelper::new()).child(text("Pick one")))
                    .child(item("a", "A")),
            ),
        )
        .unwrap();
        assert!(html.contains(
            "<fieldset class=\"govuk-fieldset\" aria-describedby=\"extra n-error\">\
             <legend class=\"govuk-fieldset__legend\">Legend</legend>"
        ));
        assert!(html.contains("<div class=\"govuk-checkboxes\"><div class=\"govuk-checkboxes__item\">"));
    }

    #[test]
    fn test_second_item_conditional() {
        let error = render(
            Node::component(CheckboxesTagHelper::new().with_name("n")).child(
                Node::component(CheckboxesItemTagHelper::new("a"))
                    .child(Node::component(CheckboxesItemConditionalTagHelper::new()).child(text("1")))
                    .child(Node::component(CheckboxesItemConditionalTagHelper::new()).child(text("2"))),
            ),
        )
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Only one <govuk-checkboxes-item-conditional> element is permitted within each <govuk-checkboxes-item>."
        );
    }

    #[test]
    fn test_missing_name() {
        let error = render(waste_checkboxes_without_binding()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "At least one of the 'name' and 'asp-for' attributes must be specified."
        );
    }

    fn waste_checkboxes_without_binding() -> Node {
        Node::component(CheckboxesTagHelper::new())
            .child(item("a", "A"))
            .into()
    }
}
