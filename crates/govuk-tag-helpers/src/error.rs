//! Render errors.

/// Error raised while processing a component.
///
/// Every variant is fatal for the component being rendered and for every
/// component that encloses it. The message is the user-facing text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A required attribute combination is missing or conflicting.
    #[error("{0}")]
    Configuration(String),
    /// A child element appeared out of order or more than once.
    #[error("{0}")]
    Ordering(String),
    /// A required child element was never provided.
    #[error("{0}")]
    Completeness(String),
    /// An attribute value is outside its valid range.
    #[error("{0}")]
    Range(String),
}

impl RenderError {
    /// "Only one `<element>` element is permitted within each `<parent>`."
    #[must_use]
    pub fn only_one(element: &str, parent: &str) -> Self {
        Self::Ordering(format!(
            "Only one <{element}> element is permitted within each <{parent}>."
        ))
    }

    /// "`<element>` must be specified before `<before>`."
    #[must_use]
    pub fn must_be_specified_before(element: &str, before: &str) -> Self {
        Self::Ordering(format!("<{element}> must be specified before <{before}>."))
    }

    /// "`<element>` must be inside `<parent>`."
    #[must_use]
    pub fn must_be_inside(element: &str, parent: &str) -> Self {
        Self::Ordering(format!("<{element}> must be inside <{parent}>."))
    }

    /// "`<element>` cannot be nested inside another `<element>`."
    #[must_use]
    pub fn cannot_be_nested(element: &str) -> Self {
        Self::Ordering(format!(
            "<{element}> cannot be nested inside another <{element}>."
        ))
    }

    /// "`<element>` must be the only direct child of the `<parent>`."
    #[must_use]
    pub fn must_be_only_child(element: &str, parent: &str) -> Self {
        Self::Ordering(format!(
            "<{element}> must be the only direct child of the <{parent}>."
        ))
    }

    /// "A `<element>` element must be provided."
    #[must_use]
    pub fn child_must_be_provided(element: &str) -> Self {
        Self::Completeness(format!("A <{element}> element must be provided."))
    }

    /// "Missing `<element>` element."
    #[must_use]
    pub fn missing_element(element: &str) -> Self {
        Self::Completeness(format!("Missing <{element}> element."))
    }

    /// "At least one of the 'a' and 'b' attributes must be specified."
    #[must_use]
    pub fn at_least_one_attribute(first: &str, second: &str) -> Self {
        Self::Configuration(format!(
            "At least one of the '{first}' and '{second}' attributes must be specified."
        ))
    }

    /// "Only one of the 'a' or 'b' attributes can be specified."
    #[must_use]
    pub fn only_one_attribute(first: &str, second: &str) -> Self {
        Self::Configuration(format!(
            "Only one of the '{first}' or '{second}' attributes can be specified."
        ))
    }

    /// "The 'attribute' attribute must be specified."
    #[must_use]
    pub fn attribute_required(attribute: &str) -> Self {
        Self::Configuration(format!("The '{attribute}' attribute must be specified."))
    }

    /// "The 'attribute' attribute must be between min and max."
    #[must_use]
    pub fn out_of_range(attribute: &str, min: impl std::fmt::Display, max: impl std::fmt::Display) -> Self {
        Self::Range(format!(
            "The '{attribute}' attribute must be between {min} and {max}."
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_one_message() {
        let err = RenderError::only_one("govuk-details-summary", "govuk-details");
        assert_eq!(
            err.to_string(),
            "Only one <govuk-details-summary> element is permitted within each <govuk-details>."
        );
        assert!(matches!(err, RenderError::Ordering(_)));
    }

    #[test]
    fn test_must_be_specified_before_message() {
        let err = RenderError::must_be_specified_before("govuk-input-hint", "govuk-input-error-message");
        assert_eq!(
            err.to_string(),
            "<govuk-input-hint> must be specified before <govuk-input-error-message>."
        );
    }

    #[test]
    fn test_completeness_messages() {
        assert_eq!(
            RenderError::child_must_be_provided("govuk-panel-title").to_string(),
            "A <govuk-panel-title> element must be provided."
        );
        assert_eq!(
            RenderError::missing_element("govuk-accordion-item-heading").to_string(),
            "Missing <govuk-accordion-item-heading> element."
        );
    }

    #[test]
    fn test_range_message() {
        let err = RenderError::out_of_range("heading-level", 1, 6);
        assert_eq!(
            err,
            RenderError::Range("The 'heading-level' attribute must be between 1 and 6.".to_owned())
        );
    }
}
