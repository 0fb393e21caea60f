//! Runtime options for component rendering.

use std::fmt;

use govuk_config::Config;

use crate::date::{DateInputModelConverter, built_in_converter};

/// Options shared by every component in a render.
///
/// Built from a [`Config`] via [`from_config`](Self::from_config); custom date
/// converters are registered in code.
///
/// # Example
///
/// ```
/// use govuk_config::Config;
/// use govuk_tag_helpers::ComponentOptions;
///
/// let config = Config::from_toml_str("[button]\nprevent_double_click = true\n").unwrap();
/// let options = ComponentOptions::from_config(&config);
/// assert!(options.button_prevent_double_click);
/// assert_eq!(options.date_input_converters().len(), 2);
/// ```
pub struct ComponentOptions {
    /// Default for `prevent-double-click` on buttons.
    pub button_prevent_double_click: bool,
    date_input_converters: Vec<Box<dyn DateInputModelConverter>>,
}

impl ComponentOptions {
    /// Build options from validated configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let date_input_converters = config
            .date_input
            .converters
            .iter()
            .filter_map(|name| built_in_converter(name))
            .collect();

        Self {
            button_prevent_double_click: config.button.prevent_double_click,
            date_input_converters,
        }
    }

    /// Append a converter. Converters registered earlier take precedence.
    pub fn register_date_input_converter(
        &mut self,
        converter: impl DateInputModelConverter + 'static,
    ) {
        self.date_input_converters.push(Box::new(converter));
    }

    /// Insert a converter ahead of all existing converters.
    pub fn prepend_date_input_converter(
        &mut self,
        converter: impl DateInputModelConverter + 'static,
    ) {
        self.date_input_converters.insert(0, Box::new(converter));
    }

    /// Converters tried in order when binding a date input to a model value.
    #[must_use]
    pub fn date_input_converters(&self) -> &[Box<dyn DateInputModelConverter>] {
        &self.date_input_converters
    }
}

impl Default for ComponentOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl fmt::Debug for ComponentOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentOptions")
            .field("button_prevent_double_click", &self.button_prevent_double_click)
            .field("date_input_converters", &self.date_input_converters.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    use crate::date::{Date, DateModelConverter};

    #[test]
    fn test_default_registers_built_ins_in_order() {
        let options = ComponentOptions::default();
        let converters = options.date_input_converters();
        assert_eq!(converters.len(), 2);
        assert!(converters[0].can_convert_model_type(TypeId::of::<Date>()));
        assert!(converters[1].can_convert_model_type(TypeId::of::<chrono::NaiveDate>()));
    }

    #[test]
    fn test_config_controls_converter_order() {
        let config = Config::from_toml_str("[date_input]\nconverters = [\"naive-date\"]\n").unwrap();
        let options = ComponentOptions::from_config(&config);
        assert_eq!(options.date_input_converters().len(), 1);
        assert!(!options.date_input_converters()[0].can_convert_model_type(TypeId::of::<Date>()));
    }

    #[test]
    fn test_prepend_converter() {
        let config = Config::from_toml_str("[date_input]\nconverters = [\"naive-date\"]\n").unwrap();
        let mut options = ComponentOptions::from_config(&config);
        options.prepend_date_input_converter(DateModelConverter);
        assert!(options.date_input_converters()[0].can_convert_model_type(TypeId::of::<Date>()));
    }
}
