//! The tag helper trait.

use crate::error::RenderError;

use super::{TagHelperContext, TagHelperOutput};

/// Handler for a component element such as `<govuk-accordion>`.
///
/// # Processing Model
///
/// The host calls [`process`](Self::process) when it reaches the element.
/// Outer components push a context object into the ambient store, evaluate
/// their children with [`TagHelperContext::child_content`], then read the
/// context back and write the final markup to the output. Child components
/// look up their parent's context, record their contribution and suppress
/// their own output.
///
/// Children are always evaluated before the parent resumes, so a parent
/// consumes its context strictly after every mutation by its descendants.
///
/// # Example
///
/// ```
/// use govuk_tag_helpers::{
///     Node, NullModelHelper, ComponentOptions, RenderError, Renderer, TagHelper,
///     TagHelperContext, TagHelperOutput,
/// };
///
/// struct Shout;
///
/// impl TagHelper for Shout {
///     fn tag_name(&self) -> &'static str { "app-shout" }
///
///     fn process(
///         &self,
///         context: &mut TagHelperContext<'_, '_>,
///         output: &mut TagHelperOutput,
///     ) -> Result<(), RenderError> {
///         let content = context.child_content()?;
///         output.set_tag_name(Some("strong"));
///         output.set_text_content(&content.as_str().to_uppercase());
///         Ok(())
///     }
/// }
///
/// let options = ComponentOptions::default();
/// let renderer = Renderer::new(&NullModelHelper, &options);
/// let html = renderer.render(&[Node::component(Shout).child(Node::text("hi")).into()]).unwrap();
/// assert_eq!(html.as_str(), "<strong>HI</strong>");
/// ```
pub trait TagHelper {
    /// The element name this helper handles (e.g. `govuk-accordion`).
    fn tag_name(&self) -> &'static str;

    /// Process the element.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] for configuration, ordering, completeness or
    /// range violations. The error aborts the whole render.
    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError>;
}
