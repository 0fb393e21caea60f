//! `<govuk-date-input>`: day, month and year inputs.
//!
//! Children arrive in order: an optional fieldset (holding the legend and
//! everything else), hint, error message, then the day, month and year
//! items. Each item is optional; missing items render with defaults.

use govuk_html::{AttributeDictionary, HtmlElement, HtmlString};

use crate::date::{Date, DateInputErrorComponents, date_from_model};
use crate::error::RenderError;
use crate::form_group::{
    FieldsetParent, FieldsetScope, FieldsetTagNames, FormGroupBuilder, FormGroupContext,
    FormGroupErrorMessage, FormGroupErrorMessageTagHelper, FormGroupField,
    FormGroupFieldsetLegendTagHelper, FormGroupFieldsetTagHelper, FormGroupHint,
    FormGroupHintTagHelper, FormGroupOptions, FormGroupTagHelper, FormGroupTagNames,
    form_group_builder_methods, non_empty, process_form_group,
};
use crate::model::{ModelExpression, ModelValue};
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput, ViewContext};

/// One of the three inputs of a date input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DateInputItemType {
    Day,
    Month,
    Year,
}

impl DateInputItemType {
    /// In rendering order.
    pub const ALL: [Self; 3] = [Self::Day, Self::Month, Self::Year];

    /// The element that configures this input.
    #[must_use]
    pub fn tag_name(self) -> &'static str {
        match self {
            Self::Day => "govuk-date-input-day",
            Self::Month => "govuk-date-input-month",
            Self::Year => "govuk-date-input-year",
        }
    }

    /// Suffix of the item's id and name, and its default label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Month => "Month",
            Self::Year => "Year",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Day => 0,
            Self::Month => 1,
            Self::Year => 2,
        }
    }

    fn width_class(self) -> &'static str {
        match self {
            Self::Day | Self::Month => "govuk-input--width-2",
            Self::Year => "govuk-input--width-4",
        }
    }

    fn error_component(self) -> DateInputErrorComponents {
        match self {
            Self::Day => DateInputErrorComponents::DAY,
            Self::Month => DateInputErrorComponents::MONTH,
            Self::Year => DateInputErrorComponents::YEAR,
        }
    }

    fn date_part(self, date: Date) -> String {
        match self {
            Self::Day => date.day().to_string(),
            Self::Month => date.month().to_string(),
            Self::Year => date.year().to_string(),
        }
    }
}

/// A configured day, month or year input.
#[derive(Clone, Debug, Default)]
pub struct DateInputItem {
    /// Explicit id; otherwise `{id}.Day` and so on.
    pub id: Option<String>,
    /// Explicit name; otherwise `{name}.Day` and so on.
    pub name: Option<String>,
    /// Explicit value, overriding the bound date.
    pub value: Option<String>,
    /// Label markup; defaults to "Day", "Month" or "Year".
    pub label: Option<HtmlString>,
    pub attributes: AttributeDictionary,
}

/// Fieldset, hint, error message and the three date parts.
#[derive(Clone, Debug)]
pub struct DateInputContext {
    form_group: FormGroupBuilder,
    fieldset: FieldsetScope,
    items: [Option<DateInputItem>; 3],
}

impl DateInputContext {
    /// An empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            form_group: FormGroupBuilder::new(Self::TAG_NAMES),
            fieldset: FieldsetScope::default(),
            items: [None, None, None],
        }
    }

    /// The configured item of `item_type`, if any.
    #[must_use]
    pub fn item(&self, item_type: DateInputItemType) -> Option<&DateInputItem> {
        self.items[item_type.index()].as_ref()
    }

    /// Set an item. Items must arrive as day, month, year, each at most once.
    pub fn set_item(
        &mut self,
        item_type: DateInputItemType,
        item: DateInputItem,
    ) -> Result<(), RenderError> {
        let tag_name = item_type.tag_name();
        self.fieldset
            .check_not_closed(tag_name, Self::FIELDSET_TAG_NAMES)?;

        if self.item(item_type).is_some() {
            return Err(RenderError::only_one(tag_name, Self::TAG_NAMES.root));
        }
        if let Some(later) = DateInputItemType::ALL[item_type.index() + 1..]
            .iter()
            .find(|later| self.item(**later).is_some())
        {
            return Err(RenderError::must_be_specified_before(tag_name, later.tag_name()));
        }

        self.items[item_type.index()] = Some(item);
        Ok(())
    }

    fn first_item_tag_name(&self) -> Option<&'static str> {
        DateInputItemType::ALL
            .into_iter()
            .find(|item_type| self.item(*item_type).is_some())
            .map(DateInputItemType::tag_name)
    }

    fn check_can_set(&self, element: &str) -> Result<(), RenderError> {
        self.fieldset
            .check_not_closed(element, Self::FIELDSET_TAG_NAMES)?;
        match self.first_item_tag_name() {
            Some(item) => Err(RenderError::must_be_specified_before(element, item)),
            None => Ok(()),
        }
    }
}

impl Default for DateInputContext {
    fn default() -> Self {
        Self::new()
    }
}

impl FormGroupContext for DateInputContext {
    const TAG_NAMES: FormGroupTagNames = FormGroupTagNames {
        root: "govuk-date-input",
        label: "govuk-date-input-fieldset-legend",
        hint: "govuk-date-input-hint",
        error_message: "govuk-date-input-error-message",
    };

    fn builder(&self) -> &FormGroupBuilder {
        &self.form_group
    }

    fn builder_mut(&mut self) -> &mut FormGroupBuilder {
        &mut self.form_group
    }

    fn set_hint(&mut self, hint: FormGroupHint) -> Result<(), RenderError> {
        self.check_can_set(Self::TAG_NAMES.hint)?;
        self.form_group.set_hint(hint)
    }

    fn set_error_message(&mut self, error_message: FormGroupErrorMessage) -> Result<(), RenderError> {
        self.check_can_set(Self::TAG_NAMES.error_message)?;
        self.form_group.set_error_message(error_message)
    }
}

impl FieldsetParent for DateInputContext {
    const FIELDSET_TAG_NAMES: FieldsetTagNames = FieldsetTagNames {
        root: "govuk-date-input",
        fieldset: "govuk-date-input-fieldset",
        legend: "govuk-date-input-fieldset-legend",
    };

    fn fieldset_scope(&self) -> &FieldsetScope {
        &self.fieldset
    }

    fn fieldset_scope_mut(&mut self) -> &mut FieldsetScope {
        &mut self.fieldset
    }

    fn has_direct_content(&self) -> bool {
        self.form_group.has_content() || self.first_item_tag_name().is_some()
    }

    fn first_child_after_legend(&self) -> Option<&'static str> {
        if self.form_group.hint().is_some() {
            Some(Self::TAG_NAMES.hint)
        } else if self.form_group.error_message().is_some() {
            Some(Self::TAG_NAMES.error_message)
        } else {
            self.first_item_tag_name()
        }
    }
}

/// `<govuk-date-input-fieldset>`.
pub type DateInputFieldsetTagHelper = FormGroupFieldsetTagHelper<DateInputContext>;
pub type DateInputFieldsetLegendTagHelper = FormGroupFieldsetLegendTagHelper<DateInputContext>;
pub type DateInputHintTagHelper = FormGroupHintTagHelper<DateInputContext>;
pub type DateInputErrorMessageTagHelper = FormGroupErrorMessageTagHelper<DateInputContext>;

/// `<govuk-date-input>`.
#[derive(Clone, Debug, Default)]
pub struct DateInputTagHelper {
    form_group: FormGroupOptions,
    value: Option<Date>,
    disabled: bool,
    error_items: Option<DateInputErrorComponents>,
}

impl DateInputTagHelper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    form_group_builder_methods!();

    /// The date shown, overriding the bound value.
    #[must_use]
    pub fn with_value(mut self, value: Date) -> Self {
        self.value = Some(value);
        self
    }

    /// Disable all three inputs.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Inputs to highlight when there is an error. Overrides the inputs
    /// inferred from the model's parse errors.
    #[must_use]
    pub fn with_error_items(mut self, error_items: DateInputErrorComponents) -> Self {
        self.error_items = Some(error_items);
        self
    }

    fn error_components(&self, field: &FormGroupField<'_>) -> DateInputErrorComponents {
        if !field.have_error() {
            return DateInputErrorComponents::empty();
        }
        self.error_items
            .or_else(|| {
                field
                    .asp_for
                    .and_then(|expression| field.view.model.date_input_parse_errors(expression))
                    .map(|errors| errors.error_components())
                    .filter(|components| !components.is_empty())
            })
            .unwrap_or(DateInputErrorComponents::all())
    }

    fn model_date(field: &FormGroupField<'_>) -> Option<Date> {
        match &field.model_value {
            ModelValue::Typed(model) => {
                date_from_model(field.view.options.date_input_converters(), model.as_ref())
            }
            _ => None,
        }
    }

    fn generate_item(
        &self,
        field: &FormGroupField<'_>,
        item_type: DateInputItemType,
        item: Option<&DateInputItem>,
        model_date: Option<Date>,
        have_error: bool,
    ) -> HtmlElement {
        let suffix = item_type.label();
        let id = item
            .and_then(|item| item.id.clone())
            .unwrap_or_else(|| format!("{}.{suffix}", field.id));
        let name = item
            .and_then(|item| item.name.clone())
            .unwrap_or_else(|| format!("{}.{suffix}", field.name));

        let value = item
            .and_then(|item| item.value.clone())
            .or_else(|| self.value.map(|date| item_type.date_part(date)))
            .or_else(|| field.asp_for.and_then(|_| field.view.model.attempted_value(&name)))
            .or_else(|| model_date.map(|date| item_type.date_part(date)));

        let label = item
            .and_then(|item| item.label.clone())
            .unwrap_or_else(|| HtmlString::from_text(suffix));

        let mut input = HtmlElement::new("input")
            .with_class("govuk-input govuk-date-input__input")
            .with_class(item_type.width_class())
            .with_class_if(have_error, "govuk-input--error")
            .with_attribute("id", id.as_str())
            .with_attribute("name", name)
            .with_attribute("type", "text")
            .with_attribute("inputmode", "numeric")
            .with_attribute_opt("value", value)
            .with_boolean_attribute_if(self.disabled, "disabled");
        if let Some(item) = item {
            input = input.with_merged_attributes(&item.attributes);
        }

        HtmlElement::new("div")
            .with_class("govuk-date-input__item")
            .with_child(
                HtmlElement::new("div")
                    .with_class("govuk-form-group")
                    .with_child(
                        HtmlElement::new("label")
                            .with_class("govuk-label govuk-date-input__label")
                            .with_attribute("for", id)
                            .with_html(label),
                    )
                    .with_child(input),
            )
    }
}

impl FormGroupTagHelper for DateInputTagHelper {
    type Context = DateInputContext;

    const HAS_LABEL: bool = false;

    fn form_group_options(&self) -> &FormGroupOptions {
        &self.form_group
    }

    fn create_context(&self) -> DateInputContext {
        DateInputContext::new()
    }

    fn model_error_message(
        &self,
        view: ViewContext<'_>,
        expression: &ModelExpression,
    ) -> Option<String> {
        view.model.validation_message(expression).or_else(|| {
            let errors = view
                .model
                .date_input_parse_errors(expression)
                .filter(|errors| !errors.is_empty())?;
            let display_name = view
                .model
                .display_name(expression)
                .unwrap_or_else(|| expression.member_name().to_owned());
            Some(errors.message(&display_name))
        })
    }

    fn generate_content(
        &self,
        context: &DateInputContext,
        field: FormGroupField<'_>,
    ) -> Result<HtmlString, RenderError> {
        let fieldset = context.fieldset.fieldset();
        let error_components = self.error_components(&field);
        let model_date = Self::model_date(&field);

        let mut container = HtmlElement::new("div")
            .with_class("govuk-date-input")
            .with_attribute("id", field.id.as_str());
        if fieldset.is_none() {
            container = container.with_attribute_opt("aria-describedby", field.described_by.as_deref());
        }
        container = container.with_merged_attributes(&field.attributes);

        for item_type in DateInputItemType::ALL {
            container.push_child(self.generate_item(
                &field,
                item_type,
                context.item(item_type),
                model_date,
                error_components.contains(item_type.error_component()),
            ));
        }

        let mut content = HtmlString::empty();
        for element in [field.hint_element(), field.error_message_element()]
            .into_iter()
            .flatten()
        {
            content.push_html(&element.to_html_string());
        }
        content.push_html(&container.to_html_string());

        let Some(fieldset) = fieldset else {
            return Ok(content);
        };

        let described_by = [fieldset.described_by.as_deref(), field.described_by.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        let described_by = (!described_by.is_empty()).then_some(described_by.as_str());
        Ok(fieldset
            .to_element(Some("group"), described_by, content)
            .to_html_string())
    }
}

impl TagHelper for DateInputTagHelper {
    fn tag_name(&self) -> &'static str {
        DateInputContext::TAG_NAMES.root
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        process_form_group(self, context, output)
    }
}

/// `<govuk-date-input-day>`, `<govuk-date-input-month>` or
/// `<govuk-date-input-year>`. Content replaces the default label.
#[derive(Clone, Debug)]
pub struct DateInputItemTagHelper {
    item_type: DateInputItemType,
    id: Option<String>,
    name: Option<String>,
    value: Option<String>,
}

impl DateInputItemTagHelper {
    /// Configuration for the `item_type` input.
    #[must_use]
    pub fn new(item_type: DateInputItemType) -> Self {
        Self {
            item_type,
            id: None,
            name: None,
            value: None,
        }
    }

    /// `<govuk-date-input-day>`.
    #[must_use]
    pub fn day() -> Self {
        Self::new(DateInputItemType::Day)
    }

    /// `<govuk-date-input-month>`.
    #[must_use]
    pub fn month() -> Self {
        Self::new(DateInputItemType::Month)
    }

    /// `<govuk-date-input-year>`.
    #[must_use]
    pub fn year() -> Self {
        Self::new(DateInputItemType::Year)
    }

    /// Explicit input id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Explicit input name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Value shown in this input, overriding the date.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl TagHelper for DateInputItemTagHelper {
    fn tag_name(&self) -> &'static str {
        self.item_type.tag_name()
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let tag_name = self.item_type.tag_name();
        let root = DateInputContext::TAG_NAMES.root;
        context.ensure_parent::<DateInputContext>(tag_name, root)?;

        let item = DateInputItem {
            id: self.id.clone(),
            name: self.name.clone(),
            value: self.value.clone(),
            label: non_empty(context.child_content()?),
            attributes: output.take_attributes(),
        };
        context
            .parent_mut::<DateInputContext>(tag_name, root)?
            .set_item(self.item_type, item)?;

        output.suppress_output();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::DateInputParseErrors;
    use crate::model::{FormField, FormModel};
    use crate::rendering::Node;
    use crate::testing::{render, render_with_model, text};
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> Date {
        Date::new(year, month, day).unwrap()
    }

    #[test]
    fn test_fieldset_with_value() {
        let html = render(
            Node::component(DateInputTagHelper::new().with_name("dob").with_value(date(2020, 3, 2))).child(
                Node::component(DateInputFieldsetTagHelper::new())
                    .child(Node::component(DateInputFieldsetLegendTagHelper::new()).child(text("Date of birth")))
                    .child(Node::component(DateInputHintTagHelper::new()).child(text("For example, 27 3 2007"))),
            ),
        )
        .unwrap();
        assert_eq!(
            html,
            "<div class=\"govuk-form-group\">\
             <fieldset class=\"govuk-fieldset\" role=\"group\" aria-describedby=\"dob-hint\">\
             <legend class=\"govuk-fieldset__legend\">Date of birth</legend>\
             <div id=\"dob-hint\" class=\"govuk-hint\">For example, 27 3 2007</div>\
             <div class=\"govuk-date-input\" id=\"dob\">\
             <div class=\"govuk-date-input__item\"><div class=\"govuk-form-group\">\
             <label class=\"govuk-label govuk-date-input__label\" for=\"dob.Day\">Day</label>\
             <input class=\"govuk-input govuk-date-input__input govuk-input--width-2\" id=\"dob.Day\" name=\"dob.Day\" type=\"text\" inputmode=\"numeric\" value=\"2\">\
             </div></div>\
             <div class=\"govuk-date-input__item\"><div class=\"govuk-form-group\">\
             <label class=\"govuk-label govuk-date-input__label\" for=\"dob.Month\">Month</label>\
             <input class=\"govuk-input govuk-date-input__input govuk-input--width-2\" id=\"dob.Month\" name=\"dob.Month\" type=\"text\" inputmode=\"numeric\" value=\"3\">\
             </div></div>\
             <div class=\"govuk-date-input__item\"><div class=\"govuk-form-group\">\
             <label class=\"govuk-label govuk-date-input__label\" for=\"dob.Year\">Year</label>\
             <input class=\"govuk-input govuk-date-input__input govuk-input--width-4\" id=\"dob.Year\" name=\"dob.Year\" type=\"text\" inputmode=\"numeric\" value=\"2020\">\
             </div></div>\
             </div></fieldset></div>"
        );
    }

    #[test]
    fn test_typed_model_value() {
        let model = FormModel::new().with_field(
            "StartDate",
            FormField::new().with_value(ModelValue::typed(date(2024, 12, 25))),
        );
        let html = render_with_model(&model, Node::component(DateInputTagHelper::new().with_asp_for("StartDate")))
            .unwrap();
        assert!(html.contains("id=\"StartDate.Day\" name=\"StartDate.Day\" type=\"text\" inputmode=\"numeric\" value=\"25\""));
        assert!(html.contains("name=\"StartDate.Month\" type=\"text\" inputmode=\"numeric\" value=\"12\""));
        assert!(html.contains("name=\"StartDate.Year\" type=\"text\" inputmode=\"numeric\" value=\"2024\""));
    }

    #[test]
    fn test_naive_date_model_value() {
        let model = FormModel::new().with_field(
            "StartDate",
            FormField::new().with_value(ModelValue::typed(
                chrono::NaiveDate::from_ymd_opt(2001, 2, 3).unwrap(),
            )),
        );
        let html = render_with_model(&model, Node::component(DateInputTagHelper::new().with_asp_for("StartDate")))
            .unwrap();
        assert!(html.contains("name=\"StartDate.Year\" type=\"text\" inputmode=\"numeric\" value=\"2001\""));
    }

    #[test]
    fn test_parse_errors_highlight_components() {
        let model = FormModel::new()
            .with_field(
                "DateOfBirth",
                FormField::new()
                    .with_display_name("Date of birth")
                    .with_date_parse_errors(DateInputParseErrors::MISSING_YEAR),
            )
            .with_attempted_value("DateOfBirth.Day", "1")
            .with_attempted_value("DateOfBirth.Month", "4");
        let html = render_with_model(&model, Node::component(DateInputTagHelper::new().with_asp_for("DateOfBirth")))
            .unwrap();
        assert!(html.starts_with(
            "<div class=\"govuk-form-group govuk-form-group--error\">\
             <p id=\"DateOfBirth-error\" class=\"govuk-error-message\">\
             <span class=\"govuk-visually-hidden\">Error:</span> Date of birth must include a year</p>\
             <div class=\"govuk-date-input\" id=\"DateOfBirth\" aria-describedby=\"DateOfBirth-error\">"
        ));
        assert!(html.contains(
            "<input class=\"govuk-input govuk-date-input__input govuk-input--width-2\" id=\"DateOfBirth.Day\" \
             name=\"DateOfBirth.Day\" type=\"text\" inputmode=\"numeric\" value=\"1\">"
        ));
        assert!(html.contains(
            "<input class=\"govuk-input govuk-date-input__input govuk-input--width-4 govuk-input--error\" \
             id=\"DateOfBirth.Year\" name=\"DateOfBirth.Year\" type=\"text\" inputmode=\"numeric\">"
        ));
    }

    #[test]
    fn test_explicit_error_items_win() {
        let model = FormModel::new().with_field(
            "D",
            FormField::new().with_date_parse_errors(DateInputParseErrors::MISSING_YEAR),
        );
        let html = render_with_model(
            &model,
            Node::component(
                DateInputTagHelper::new()
                    .with_asp_for("D")
                    .with_error_items(DateInputErrorComponents::DAY),
            ),
        )
        .unwrap();
        assert!(html.contains("govuk-input--width-2 govuk-input--error\" id=\"D.Day\""));
        assert!(html.contains("govuk-input--width-4\" id=\"D.Year\""));
    }

    #[test]
    fn test_error_message_highlights_all_by_default() {
        let html = render(
            Node::component(DateInputTagHelper::new().with_name("d"))
                .child(Node::component(DateInputErrorMessageTagHelper::new()).child(text("Enter a date"))),
        )
        .unwrap();
        assert_eq!(html.matches("govuk-input--error").count(), 3);
    }

    #[test]
    fn test_item_overrides() {
        let html = render(
            Node::component(DateInputTagHelper::new().with_name("d"))
                .child(
                    Node::component(DateInputItemTagHelper::day().with_value("09"))
                        .attributes("autocomplete=bday-day")
                        .child(text("Dydd")),
                )
                .child(Node::component(DateInputItemTagHelper::year().with_id("year").with_name("y"))),
        )
        .unwrap();
        assert!(html.contains(
            "<label class=\"govuk-label govuk-date-input__label\" for=\"d.Day\">Dydd</label>\
             <input class=\"govuk-input govuk-date-input__input govuk-input--width-2\" id=\"d.Day\" name=\"d.Day\" \
             type=\"text\" inputmode=\"numeric\" value=\"09\" autocomplete=\"bday-day\">"
        ));
        assert!(html.contains("for=\"year\">Year</label>"));
        assert!(html.contains("id=\"year\" name=\"y\""));
    }

    #[test]
    fn test_items_out_of_order() {
        let error = render(
            Node::component(DateInputTagHelper::new().with_name("d"))
                .child(Node::component(DateInputItemTagHelper::month()))
                .child(Node::component(DateInputItemTagHelper::day())),
        )
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            "<govuk-date-input-day> must be specified before <govuk-date-input-month>."
        );
    }

    #[test]
    fn test_duplicate_item() {
        let error = render(
            Node::component(DateInputTagHelper::new().with_name("d"))
                .child(Node::component(DateInputItemTagHelper::year()))
                .child(Node::component(DateInputItemTagHelper::year())),
        )
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Only one <govuk-date-input-year> element is permitted within each <govuk-date-input>."
        );
    }

    #[test]
    fn test_hint_after_item() {
        let error = render(
            Node::component(DateInputTagHelper::new().with_name("d"))
                .child(Node::component(DateInputItemTagHelper::day()))
                .child(Node::component(DateInputHintTagHelper::new()).child(text("Hint"))),
        )
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            "<govuk-date-input-hint> must be specified before <govuk-date-input-day>."
        );
    }
}
