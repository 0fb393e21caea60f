//! Date input model conversion and parsing.
//!
//! A date input renders three discrete inputs (day, month, year). This module
//! converts between those parts and a model's date type through a list of
//! pluggable [`DateInputModelConverter`]s, and parses submitted parts into a
//! [`Date`] while recording which parts were missing or invalid.

use std::any::{Any, TypeId};
use std::fmt;

use bitflags::bitflags;
use chrono::{Datelike, NaiveDate};

/// A calendar date without a time component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: u32,
    day: u32,
}

impl Date {
    /// Create a date, returning `None` if it does not exist (e.g. 31 February).
    #[must_use]
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from)
    }

    /// The year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month, 1 to 12.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The day of the month.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.day
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        // Dates are only constructed from valid NaiveDates.
        Self::from_ymd_opt(date.year, date.month, date.day).unwrap_or_default()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

bitflags! {
    /// Which parts of a submitted date were missing or invalid.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DateInputParseErrors: u8 {
        const MISSING_DAY = 1 << 0;
        const MISSING_MONTH = 1 << 1;
        const MISSING_YEAR = 1 << 2;
        const INVALID_DAY = 1 << 3;
        const INVALID_MONTH = 1 << 4;
        const INVALID_YEAR = 1 << 5;
    }
}

bitflags! {
    /// The day, month and year inputs of a date input.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DateInputErrorComponents: u8 {
        const DAY = 1 << 0;
        const MONTH = 1 << 1;
        const YEAR = 1 << 2;
    }
}

impl DateInputParseErrors {
    /// The inputs that should be highlighted for these errors.
    ///
    /// ```
    /// use govuk_tag_helpers::{DateInputErrorComponents, DateInputParseErrors};
    ///
    /// let errors = DateInputParseErrors::MISSING_DAY | DateInputParseErrors::MISSING_MONTH;
    /// assert_eq!(
    ///     errors.error_components(),
    ///     DateInputErrorComponents::DAY | DateInputErrorComponents::MONTH
    /// );
    /// ```
    #[must_use]
    pub fn error_components(self) -> DateInputErrorComponents {
        let mut components = DateInputErrorComponents::empty();
        if self.intersects(Self::MISSING_DAY | Self::INVALID_DAY) {
            components |= DateInputErrorComponents::DAY;
        }
        if self.intersects(Self::MISSING_MONTH | Self::INVALID_MONTH) {
            components |= DateInputErrorComponents::MONTH;
        }
        if self.intersects(Self::MISSING_YEAR | Self::INVALID_YEAR) {
            components |= DateInputErrorComponents::YEAR;
        }
        components
    }

    /// The validation message for these errors.
    ///
    /// ```
    /// use govuk_tag_helpers::DateInputParseErrors;
    ///
    /// assert_eq!(
    ///     DateInputParseErrors::MISSING_YEAR.message("Date of birth"),
    ///     "Date of birth must include a year"
    /// );
    /// assert_eq!(
    ///     DateInputParseErrors::INVALID_MONTH.message("Date of birth"),
    ///     "Date of birth must be a real date"
    /// );
    /// ```
    #[must_use]
    pub fn message(self, display_name: &str) -> String {
        let invalid = Self::INVALID_DAY | Self::INVALID_MONTH | Self::INVALID_YEAR;
        if self.intersects(invalid) {
            return format!("{display_name} must be a real date");
        }

        let missing: Vec<&str> = [
            (Self::MISSING_DAY, "day"),
            (Self::MISSING_MONTH, "month"),
            (Self::MISSING_YEAR, "year"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
        .collect();

        match missing.as_slice() {
            [] => format!("{display_name} must be a real date"),
            [one] => format!("{display_name} must include a {one}"),
            [first, second] => format!("{display_name} must include a {first} and {second}"),
            _ => format!("Enter {}", display_name.to_lowercase()),
        }
    }
}

/// Parse submitted day, month and year parts into a [`Date`].
///
/// Empty or whitespace-only parts are missing; parts that are not numbers or
/// are out of range are invalid. When every part is individually valid but
/// the combination is not a real date, all three parts are invalid.
///
/// ```
/// use govuk_tag_helpers::{parse_date_input, Date, DateInputParseErrors};
///
/// assert_eq!(parse_date_input(Some("1"), Some("4"), Some("2024")), Ok(Date::new(2024, 4, 1).unwrap()));
/// assert_eq!(
///     parse_date_input(None, Some("13"), Some("2024")),
///     Err(DateInputParseErrors::MISSING_DAY | DateInputParseErrors::INVALID_MONTH)
/// );
/// ```
pub fn parse_date_input(
    day: Option<&str>,
    month: Option<&str>,
    year: Option<&str>,
) -> Result<Date, DateInputParseErrors> {
    let mut errors = DateInputParseErrors::empty();

    let day = parse_component(
        day,
        1..=31,
        DateInputParseErrors::MISSING_DAY,
        DateInputParseErrors::INVALID_DAY,
        &mut errors,
    );
    let month = parse_component(
        month,
        1..=12,
        DateInputParseErrors::MISSING_MONTH,
        DateInputParseErrors::INVALID_MONTH,
        &mut errors,
    );
    let year = parse_component(
        year,
        1..=9999,
        DateInputParseErrors::MISSING_YEAR,
        DateInputParseErrors::INVALID_YEAR,
        &mut errors,
    );

    match (day, month, year) {
        (Some(day), Some(month), Some(year)) if errors.is_empty() => i32::try_from(year)
            .ok()
            .and_then(|year| Date::new(year, month, day))
            .ok_or(
                DateInputParseErrors::INVALID_DAY
                    | DateInputParseErrors::INVALID_MONTH
                    | DateInputParseErrors::INVALID_YEAR,
            ),
        _ => Err(errors),
    }
}

fn parse_component(
    value: Option<&str>,
    range: std::ops::RangeInclusive<u32>,
    missing: DateInputParseErrors,
    invalid: DateInputParseErrors,
    errors: &mut DateInputParseErrors,
) -> Option<u32> {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        *errors |= missing;
        return None;
    }

    match value.parse::<u32>() {
        Ok(parsed) if range.contains(&parsed) => Some(parsed),
        _ => {
            *errors |= invalid;
            None
        }
    }
}

/// Converts between a model type and a [`Date`].
///
/// Converters are consulted in registration order; the first whose
/// [`can_convert_model_type`](Self::can_convert_model_type) matches is used.
pub trait DateInputModelConverter: Send + Sync {
    /// Whether this converter handles `model_type`.
    fn can_convert_model_type(&self, model_type: TypeId) -> bool;

    /// Build a model value of `model_type` from a parsed date.
    fn create_model_from_date(&self, model_type: TypeId, date: Date) -> Box<dyn Any + Send + Sync>;

    /// Extract the date from a model value, or `None` if it holds no date.
    fn get_date_from_model(&self, model: &dyn Any) -> Option<Date>;
}

/// Converter for [`Date`] and `Option<Date>` models.
#[derive(Clone, Copy, Debug, Default)]
pub struct DateModelConverter;

impl DateInputModelConverter for DateModelConverter {
    fn can_convert_model_type(&self, model_type: TypeId) -> bool {
        model_type == TypeId::of::<Date>() || model_type == TypeId::of::<Option<Date>>()
    }

    fn create_model_from_date(&self, model_type: TypeId, date: Date) -> Box<dyn Any + Send + Sync> {
        if model_type == TypeId::of::<Option<Date>>() {
            Box::new(Some(date))
        } else {
            Box::new(date)
        }
    }

    fn get_date_from_model(&self, model: &dyn Any) -> Option<Date> {
        model
            .downcast_ref::<Date>()
            .copied()
            .or_else(|| model.downcast_ref::<Option<Date>>().copied().flatten())
    }
}

/// Converter for `chrono::NaiveDate` and `Option<NaiveDate>` models.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaiveDateModelConverter;

impl DateInputModelConverter for NaiveDateModelConverter {
    fn can_convert_model_type(&self, model_type: TypeId) -> bool {
        model_type == TypeId::of::<NaiveDate>() || model_type == TypeId::of::<Option<NaiveDate>>()
    }

    fn create_model_from_date(&self, model_type: TypeId, date: Date) -> Box<dyn Any + Send + Sync> {
        let date = NaiveDate::from(date);
        if model_type == TypeId::of::<Option<NaiveDate>>() {
            Box::new(Some(date))
        } else {
            Box::new(date)
        }
    }

    fn get_date_from_model(&self, model: &dyn Any) -> Option<Date> {
        model
            .downcast_ref::<NaiveDate>()
            .copied()
            .or_else(|| model.downcast_ref::<Option<NaiveDate>>().copied().flatten())
            .map(Date::from)
    }
}

/// Look up a built-in converter by its configuration name.
#[must_use]
pub fn built_in_converter(name: &str) -> Option<Box<dyn DateInputModelConverter>> {
    match name {
        "date" => Some(Box::new(DateModelConverter)),
        "naive-date" => Some(Box::new(NaiveDateModelConverter)),
        _ => None,
    }
}

/// Extract a date from a typed model value using the first matching converter.
#[must_use]
pub fn date_from_model(
    converters: &[Box<dyn DateInputModelConverter>],
    model: &(dyn Any + Send + Sync),
) -> Option<Date> {
    let model_type = Any::type_id(model);
    converters
        .iter()
        .find(|converter| converter.can_convert_model_type(model_type))
        .and_then(|converter| converter.get_date_from_model(model))
}

/// Error returned by [`bind_date_input`].
#[derive(Debug, thiserror::Error)]
pub enum DateInputBindError {
    /// No registered converter handles the model type.
    #[error("No date input model converter is registered for the model type.")]
    UnsupportedModelType,
    /// The submitted parts do not form a date.
    #[error("{}", .0.message("Date"))]
    Parse(DateInputParseErrors),
}

/// Bind submitted day, month and year parts to a model of `model_type`.
///
/// ```
/// use std::any::TypeId;
/// use govuk_tag_helpers::{bind_date_input, Date, DateModelConverter, DateInputModelConverter};
///
/// let converters: Vec<Box<dyn DateInputModelConverter>> = vec![Box::new(DateModelConverter)];
/// let model = bind_date_input(&converters, TypeId::of::<Date>(), Some("2"), Some("3"), Some("2020")).unwrap();
/// assert_eq!(model.downcast_ref::<Date>(), Date::new(2020, 3, 2).as_ref());
/// ```
pub fn bind_date_input(
    converters: &[Box<dyn DateInputModelConverter>],
    model_type: TypeId,
    day: Option<&str>,
    month: Option<&str>,
    year: Option<&str>,
) -> Result<Box<dyn Any + Send + Sync>, DateInputBindError> {
    let converter = converters
        .iter()
        .find(|converter| converter.can_convert_model_type(model_type))
        .ok_or(DateInputBindError::UnsupportedModelType)?;
    let date = parse_date_input(day, month, year).map_err(DateInputBindError::Parse)?;
    Ok(converter.create_model_from_date(model_type, date))
}
