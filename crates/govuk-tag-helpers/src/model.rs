//! Model binding access.
//!
//! Components bound to a model field (the `asp-for` attribute) never inspect
//! the model directly. They go through a [`ModelHelper`], which the host
//! implements over its own model and validation state.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::date::DateInputParseErrors;

/// An expression identifying a bound model field, e.g. `Address.Postcode`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModelExpression(String);

impl ModelExpression {
    /// An expression naming a model field, e.g. `Person.Email`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The expression text.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// The last member of the expression, used as a fallback display name.
    ///
    /// ```
    /// use govuk_tag_helpers::ModelExpression;
    ///
    /// assert_eq!(ModelExpression::new("Address.Postcode").member_name(), "Postcode");
    /// assert_eq!(ModelExpression::new("Items[0].Name").member_name(), "Name");
    /// ```
    #[must_use]
    pub fn member_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

impl From<&str> for ModelExpression {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ModelExpression {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// The current value of a bound model field.
#[derive(Clone, Default)]
pub enum ModelValue {
    /// No value.
    #[default]
    Null,
    /// A single value in its string form.
    Scalar(String),
    /// A collection of values in their string forms.
    Collection(Vec<String>),
    /// A typed value (e.g. a date) interpreted by a converter.
    Typed(Arc<dyn Any + Send + Sync>),
}

impl ModelValue {
    /// Wrap a typed value.
    #[must_use]
    pub fn typed<T: Any + Send + Sync>(value: T) -> Self {
        Self::Typed(Arc::new(value))
    }

    /// The scalar string form, if this is a scalar.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Whether `value` is selected by this model value.
    ///
    /// Scalars match by string equality, collections by membership. `Null`
    /// selects nothing.
    ///
    /// ```
    /// use govuk_tag_helpers::ModelValue;
    ///
    /// assert!(ModelValue::Scalar("red".to_owned()).selects("red"));
    /// assert!(ModelValue::Collection(vec!["red".to_owned(), "blue".to_owned()]).selects("blue"));
    /// assert!(!ModelValue::Null.selects("red"));
    /// ```
    #[must_use]
    pub fn selects(&self, value: &str) -> bool {
        match self {
            Self::Null | Self::Typed(_) => false,
            Self::Scalar(model) => model == value,
            Self::Collection(values) => values.iter().any(|v| v == value),
        }
    }
}

impl fmt::Debug for ModelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
            Self::Collection(values) => f.debug_tuple("Collection").field(values).finish(),
            Self::Typed(_) => f.write_str("Typed(..)"),
        }
    }
}

impl From<&str> for ModelValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_owned())
    }
}

impl From<String> for ModelValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<String>> for ModelValue {
    fn from(values: Vec<String>) -> Self {
        Self::Collection(values)
    }
}

/// Access to a view's model and validation state.
pub trait ModelHelper {
    /// The HTML `name` for a bound field.
    fn full_html_field_name(&self, expression: &ModelExpression) -> String {
        expression.name().to_owned()
    }

    /// The element id generated for a bound field.
    fn generate_id(&self, expression: &ModelExpression) -> String {
        sanitize_id(&self.full_html_field_name(expression))
    }

    /// The field's display name, if the model declares one.
    fn display_name(&self, expression: &ModelExpression) -> Option<String>;

    /// The field's current value.
    fn model_value(&self, expression: &ModelExpression) -> ModelValue;

    /// The first validation error for the field, if any.
    fn validation_message(&self, expression: &ModelExpression) -> Option<String>;

    /// A raw submitted value that failed binding, by full field name.
    fn attempted_value(&self, _field_name: &str) -> Option<String> {
        None
    }

    /// Date input parse errors recorded while binding the field.
    fn date_input_parse_errors(&self, _expression: &ModelExpression) -> Option<DateInputParseErrors> {
        None
    }
}

/// Convert a field name into a valid element id.
///
/// ```
/// use govuk_tag_helpers::sanitize_id;
///
/// assert_eq!(sanitize_id("Items[0].Name"), "Items_0__Name");
/// ```
#[must_use]
pub fn sanitize_id(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ':' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// A [`ModelHelper`] for views without a model.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullModelHelper;

impl ModelHelper for NullModelHelper {
    fn display_name(&self, _expression: &ModelExpression) -> Option<String> {
        None
    }

    fn model_value(&self, _expression: &ModelExpression) -> ModelValue {
        ModelValue::Null
    }

    fn validation_message(&self, _expression: &ModelExpression) -> Option<String> {
        None
    }
}

/// A single field of a [`FormModel`].
#[derive(Clone, Debug, Default)]
pub struct FormField {
    display_name: Option<String>,
    value: ModelValue,
    errors: Vec<String>,
    date_parse_errors: Option<DateInputParseErrors>,
}

impl FormField {
    /// A field with no value, display name or errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name used as the default label or legend.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// The field's current value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<ModelValue>) -> Self {
        self.value = value.into();
        self
    }

    /// Add a validation error. The first one is shown.
    #[must_use]
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.errors.push(message.into());
        self
    }

    /// Record which parts of a submitted date failed to parse.
    #[must_use]
    pub fn with_date_parse_errors(mut self, errors: DateInputParseErrors) -> Self {
        self.date_parse_errors = Some(errors);
        self
    }
}

/// An in-memory model: a map of field expressions to values and errors.
///
/// # Example
///
/// ```
/// use govuk_tag_helpers::{FormField, FormModel, ModelExpression, ModelHelper};
///
/// let model = FormModel::new().with_field(
///     "Email",
///     FormField::new()
///         .with_display_name("Email address")
///         .with_error("Enter an email address"),
/// );
///
/// let email = ModelExpression::new("Email");
/// assert_eq!(model.display_name(&email).as_deref(), Some("Email address"));
/// assert_eq!(model.validation_message(&email).as_deref(), Some("Enter an email address"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FormModel {
    prefix: Option<String>,
    fields: HashMap<String, FormField>,
    attempted_values: HashMap<String, String>,
}

impl FormModel {
    /// An empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix every generated field name (e.g. `Person` → `Person.Email`).
    #[must_use]
    pub fn with_html_field_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Add a field under `expression`.
    #[must_use]
    pub fn with_field(mut self, expression: impl Into<String>, field: FormField) -> Self {
        self.fields.insert(expression.into(), field);
        self
    }

    /// Record a raw submitted value by full field name (e.g. `DateOfBirth.Day`).
    #[must_use]
    pub fn with_attempted_value(
        mut self,
        field_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.attempted_values.insert(field_name.into(), value.into());
        self
    }

    fn field(&self, expression: &ModelExpression) -> Option<&FormField> {
        self.fields.get(expression.name())
    }
}

impl ModelHelper for FormModel {
    fn full_html_field_name(&self, expression: &ModelExpression) -> String {
        match &self.prefix {
            Some(prefix) if !prefix.is_empty() => format!("{prefix}.{}", expression.name()),
            _ => expression.name().to_owned(),
        }
    }

    fn display_name(&self, expression: &ModelExpression) -> Option<String> {
        self.field(expression)?.display_name.clone()
    }

    fn model_value(&self, expression: &ModelExpression) -> ModelValue {
        self.field(expression)
            .map(|field| field.value.clone())
            .unwrap_or_default()
    }

    fn validation_message(&self, expression: &ModelExpression) -> Option<String> {
        self.field(expression)?.errors.first().cloned()
    }

    fn attempted_value(&self, field_name: &str) -> Option<String> {
        self.attempted_values.get(field_name).cloned()
    }

    fn date_input_parse_errors(&self, expression: &ModelExpression) -> Option<DateInputParseErrors> {
        self.field(expression)?.date_parse_errors
    }
}
