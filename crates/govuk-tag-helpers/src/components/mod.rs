//! The component tag helpers.
//!
//! Form controls build on [`crate::form_group`]; composite components each
//! keep a small context that their children fill in order.

pub mod accordion;
pub mod back_link;
pub mod breadcrumbs;
pub mod button;
pub mod character_count;
pub mod checkboxes;
mod choices;
pub mod date_input;
pub mod details;
pub mod error_summary;
pub mod fieldset;
pub mod file_upload;
pub mod input;
pub mod inset_text;
pub mod notification_banner;
pub mod pagination;
pub mod panel;
pub mod phase_banner;
pub mod radios;
pub mod select;
pub mod skip_link;
pub mod summary_list;
pub mod tabs;
pub mod tag;
pub mod textarea;
pub mod warning_text;

pub use choices::{
    ChoiceContext, ChoiceDividerTagHelper, ChoiceItem, ChoiceItemConditional,
    ChoiceItemConditionalTagHelper, ChoiceItemContext, ChoiceItemData, ChoiceItemHint,
    ChoiceItemHintTagHelper, ChoiceItemTagHelper, ChoiceKind, ChoiceTagHelper, ChoiceTagNames,
};

use crate::error::RenderError;

pub(crate) const MIN_HEADING_LEVEL: u8 = 1;
pub(crate) const MAX_HEADING_LEVEL: u8 = 6;

/// Check a `heading-level` attribute.
pub(crate) fn validate_heading_level(level: u8) -> Result<u8, RenderError> {
    if (MIN_HEADING_LEVEL..=MAX_HEADING_LEVEL).contains(&level) {
        Ok(level)
    } else {
        Err(RenderError::out_of_range(
            "heading-level",
            MIN_HEADING_LEVEL,
            MAX_HEADING_LEVEL,
        ))
    }
}

/// `h1` to `h6`.
pub(crate) fn heading_tag(level: u8) -> String {
    format!("h{level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_bounds() {
        assert_eq!(validate_heading_level(1), Ok(1));
        assert_eq!(validate_heading_level(6), Ok(6));
        assert!(validate_heading_level(0).is_err());
        assert_eq!(
            validate_heading_level(7).unwrap_err().to_string(),
            "The 'heading-level' attribute must be between 1 and 6."
        );
    }
}
