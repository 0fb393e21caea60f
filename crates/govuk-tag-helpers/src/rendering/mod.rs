//! Render host for component trees.
//!
//! A view is a tree of [`Node`]s: plain elements, markup, text and
//! components. The [`Renderer`] walks the tree depth-first. For each
//! component it builds a [`TagHelperOutput`] from the element as written,
//! hands the component a [`TagHelperContext`] and serializes whatever the
//! component leaves in the output.
//!
//! # Architecture
//!
//! Composite components communicate through typed contexts held in
//! [`ContextItems`]:
//!
//! 1. The outer component pushes its context with
//!    [`TagHelperContext::scoped`] and evaluates its children inside the
//!    scope.
//! 2. Each child looks up the context with
//!    [`TagHelperContext::parent_mut`], records its part and suppresses its
//!    own output.
//! 3. When the scope ends the outer component owns the finished context and
//!    generates the final markup from it.
//!
//! # Example
//!
//! ```
//! use govuk_tag_helpers::{
//!     ComponentOptions, DetailsSummaryTagHelper, DetailsTagHelper, DetailsTextTagHelper,
//!     Node, NullModelHelper, Renderer,
//! };
//!
//! let view = [Node::component(DetailsTagHelper::new())
//!     .child(Node::component(DetailsSummaryTagHelper).child(Node::text("Help")))
//!     .child(Node::component(DetailsTextTagHelper).child(Node::text("Call us")))
//!     .into()];
//!
//! let options = ComponentOptions::default();
//! let html = Renderer::new(&NullModelHelper, &options).render(&view).unwrap();
//! assert!(html.as_str().starts_with(r#"<details class="govuk-details">"#));
//! ```

mod context;
mod output;
mod tag_helper;

use std::fmt;

use govuk_html::{AttributeDictionary, HtmlElement, HtmlString};

use crate::error::RenderError;
use crate::model::ModelHelper;
use crate::options::ComponentOptions;

pub use context::{ContextItems, TagHelperContext, ViewContext};
pub use output::TagHelperOutput;
pub use tag_helper::TagHelper;

/// A node in a view tree.
pub enum Node {
    /// An element handled by a tag helper.
    Component(ComponentNode),
    /// A plain HTML element, emitted as written.
    Element(ElementNode),
    /// Pre-encoded markup.
    Html(HtmlString),
    /// Text, encoded on output.
    Text(String),
}

impl Node {
    /// Start a component element.
    pub fn component(helper: impl TagHelper + 'static) -> ComponentNode {
        ComponentNode {
            helper: Box::new(helper),
            attributes: AttributeDictionary::new(),
            children: Vec::new(),
        }
    }

    /// Start a plain element.
    pub fn element(tag_name: impl Into<String>) -> ElementNode {
        ElementNode {
            tag_name: tag_name.into(),
            attributes: AttributeDictionary::new(),
            children: Vec::new(),
        }
    }

    /// Pre-encoded markup, emitted as is.
    pub fn html(html: impl Into<HtmlString>) -> Self {
        Self::Html(html.into())
    }

    /// Text, encoded on output.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Component(node) => f
                .debug_struct("Component")
                .field("tag_name", &node.helper.tag_name())
                .field("attributes", &node.attributes)
                .field("children", &node.children)
                .finish(),
            Self::Element(node) => node.fmt(f),
            Self::Html(html) => f.debug_tuple("Html").field(html).finish(),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
        }
    }
}

impl From<ComponentNode> for Node {
    fn from(node: ComponentNode) -> Self {
        Self::Component(node)
    }
}

impl From<ElementNode> for Node {
    fn from(node: ElementNode) -> Self {
        Self::Element(node)
    }
}

impl From<HtmlString> for Node {
    fn from(html: HtmlString) -> Self {
        Self::Html(html)
    }
}

/// A component element: its helper, pass-through attributes and children.
pub struct ComponentNode {
    helper: Box<dyn TagHelper>,
    attributes: AttributeDictionary,
    children: Vec<Node>,
}

impl ComponentNode {
    /// Add pass-through attributes in HTML syntax (e.g. `class="x" data-a=1`).
    #[must_use]
    pub fn attributes(mut self, attrs: &str) -> Self {
        self.attributes.merge(&AttributeDictionary::parse(attrs));
        self
    }

    /// Add one attribute.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append child nodes in order.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }
}

/// A plain element and its children.
#[derive(Debug)]
pub struct ElementNode {
    tag_name: String,
    attributes: AttributeDictionary,
    children: Vec<Node>,
}

impl ElementNode {
    /// Add attributes in HTML syntax.
    #[must_use]
    pub fn attributes(mut self, attrs: &str) -> Self {
        self.attributes.merge(&AttributeDictionary::parse(attrs));
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append child nodes in order.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Renders view trees against one model and set of options.
pub struct Renderer<'v> {
    view: ViewContext<'v>,
}

impl<'v> Renderer<'v> {
    /// A renderer over `model` with `options`.
    #[must_use]
    pub fn new(model: &'v dyn ModelHelper, options: &'v ComponentOptions) -> Self {
        Self {
            view: ViewContext { model, options },
        }
    }

    /// Render `nodes` to markup.
    ///
    /// Each call starts with an empty context store.
    ///
    /// # Errors
    ///
    /// Returns the first [`RenderError`] raised by any component. No partial
    /// markup is returned.
    pub fn render(&self, nodes: &[Node]) -> Result<HtmlString, RenderError> {
        let mut items = ContextItems::default();
        render_nodes(self.view, &mut items, nodes)
    }
}

pub(crate) fn render_nodes(
    view: ViewContext<'_>,
    items: &mut ContextItems,
    nodes: &[Node],
) -> Result<HtmlString, RenderError> {
    let mut html = HtmlString::empty();
    for node in nodes {
        match node {
            Node::Component(component) => {
                html.push_html(&render_component(view, items, component)?);
            }
            Node::Element(element) => {
                let content = render_nodes(view, items, &element.children)?;
                let element = HtmlElement::new(element.tag_name.as_str())
                    .with_merged_attributes(&element.attributes);
                let element = if content.is_empty() {
                    element
                } else {
                    element.with_html(content)
                };
                html.push_html(&element.to_html_string());
            }
            Node::Html(fragment) => html.push_html(fragment),
            Node::Text(text) => html.push_text(text),
        }
    }
    Ok(html)
}

fn render_component(
    view: ViewContext<'_>,
    items: &mut ContextItems,
    node: &ComponentNode,
) -> Result<HtmlString, RenderError> {
    let tag_name = node.helper.tag_name();
    let mut output = TagHelperOutput::new(tag_name, node.attributes.clone());
    let mut context = TagHelperContext::new(view, items, &node.children);

    if let Err(error) = node.helper.process(&mut context, &mut output) {
        // Ancestors pass a child's error through; log it once, where it arose.
        if !context.child_failed() {
            tracing::debug!(tag = tag_name, %error, "Component failed to render");
        }
        return Err(error);
    }

    if !output.is_content_modified() {
        let content = context.child_content()?;
        output.set_html_content(content);
    }

    Ok(output.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NullModelHelper;
    use pretty_assertions::assert_eq;

    struct Passthrough;

    impl TagHelper for Passthrough {
        fn tag_name(&self) -> &'static str {
            "app-passthrough"
        }

        fn process(
            &self,
            _context: &mut TagHelperContext<'_, '_>,
            output: &mut TagHelperOutput,
        ) -> Result<(), RenderError> {
            output.set_tag_name(Some("section"));
            Ok(())
        }
    }

    struct Counter;

    impl TagHelper for Counter {
        fn tag_name(&self) -> &'static str {
            "app-counter"
        }

        fn process(
            &self,
            context: &mut TagHelperContext<'_, '_>,
            output: &mut TagHelperOutput,
        ) -> Result<(), RenderError> {
            let (count, _) = context.scoped(0_usize, |context| context.child_content())?;
            output.set_tag_name(None);
            output.set_text_content(&count.to_string());
            Ok(())
        }
    }

    struct Increment;

    impl TagHelper for Increment {
        fn tag_name(&self) -> &'static str {
            "app-increment"
        }

        fn process(
            &self,
            context: &mut TagHelperContext<'_, '_>,
            output: &mut TagHelperOutput,
        ) -> Result<(), RenderError> {
            *context.parent_mut::<usize>("app-increment", "app-counter")? += 1;
            output.suppress_output();
            Ok(())
        }
    }

    fn render(nodes: &[Node]) -> Result<String, RenderError> {
        let options = ComponentOptions::default();
        Renderer::new(&NullModelHelper, &options)
            .render(nodes)
            .map(HtmlString::into_string)
    }

    #[test]
    fn test_render_plain_nodes() {
        let html = render(&[
            Node::element("p")
                .attributes("class=lead")
                .child(Node::text("Fish & chips"))
                .into(),
            Node::html("<hr>"),
        ])
        .unwrap();
        assert_eq!(html, r#"<p class="lead">Fish &amp; chips</p><hr>"#);
    }

    #[test]
    fn test_untouched_content_renders_children() {
        let html = render(&[Node::component(Passthrough)
            .attributes("id=main")
            .child(Node::text("Body"))
            .into()])
        .unwrap();
        assert_eq!(html, r#"<section id="main">Body</section>"#);
    }

    #[test]
    fn test_children_mutate_parent_context() {
        let html = render(&[Node::component(Counter)
            .child(Node::component(Increment))
            .child(Node::component(Increment))
            .into()])
        .unwrap();
        assert_eq!(html, "2");
    }

    #[test]
    fn test_nested_scopes_shadow_and_restore() {
        let html = render(&[Node::component(Counter)
            .child(Node::component(Increment))
            .child(
                Node::component(Counter)
                    .child(Node::component(Increment))
                    .child(Node::component(Increment))
                    .child(Node::component(Increment)),
            )
            .child(Node::component(Increment))
            .into()])
        .unwrap();
        assert_eq!(html, "2");
    }

    #[test]
    fn test_child_failure_is_recorded_on_parent_context() {
        let options = ComponentOptions::default();
        let view = ViewContext {
            model: &NullModelHelper,
            options: &options,
        };
        let mut items = ContextItems::default();
        let children: [Node; 1] = [Node::component(Increment).into()];
        let mut context = TagHelperContext::new(view, &mut items, &children);
        assert!(!context.child_failed());

        let error = context.child_content().unwrap_err();
        assert_eq!(
            error.to_string(),
            "<app-increment> must be inside <app-counter>."
        );
        assert!(context.child_failed());
    }

    #[test]
    fn test_own_failure_is_not_a_child_failure() {
        let options = ComponentOptions::default();
        let view = ViewContext {
            model: &NullModelHelper,
            options: &options,
        };
        let mut items = ContextItems::default();
        let children: [Node; 1] = [Node::text("ok")];
        let mut context = TagHelperContext::new(view, &mut items, &children);
        context.child_content().unwrap();

        let mut output = TagHelperOutput::new("app-increment", AttributeDictionary::new());
        Increment.process(&mut context, &mut output).unwrap_err();
        assert!(!context.child_failed());
    }

    #[test]
    fn test_missing_parent_is_an_error() {
        let error = render(&[Node::component(Increment).into()]).unwrap_err();
        assert_eq!(
            error.to_string(),
            "<app-increment> must be inside <app-counter>."
        );
    }
}
