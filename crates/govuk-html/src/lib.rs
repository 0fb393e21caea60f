//! Markup primitives for GOV.UK Frontend components.
//!
//! This crate provides the building blocks every component uses to produce
//! its final markup:
//!
//! - [`encode`]: HTML encoding for text and attribute values
//! - [`HtmlString`]: an already-encoded markup fragment
//! - [`AttributeDictionary`]: an insertion-ordered attribute bag with `class` merging
//! - [`HtmlElement`]: an element tree builder that serializes to [`HtmlString`]
//!
//! # Example
//!
//! ```
//! use govuk_html::{HtmlElement, HtmlString};
//!
//! let element = HtmlElement::new("div")
//!     .with_class("govuk-inset-text")
//!     .with_text("Fish & chips");
//!
//! assert_eq!(
//!     element.to_html_string(),
//!     HtmlString::new(r#"<div class="govuk-inset-text">Fish &amp; chips</div>"#)
//! );
//! ```

mod attributes;
mod element;
mod encode;
mod html_string;

pub use attributes::AttributeDictionary;
pub use element::{HtmlElement, HtmlNode};
pub use encode::encode;
pub use html_string::HtmlString;
