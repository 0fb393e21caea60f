//! Rendering shortcuts for unit tests.

use crate::error::RenderError;
use crate::model::{ModelHelper, NullModelHelper};
use crate::options::ComponentOptions;
use crate::rendering::{Node, Renderer};

pub(crate) fn render(node: impl Into<Node>) -> Result<String, RenderError> {
    render_with_model(&NullModelHelper, node)
}

pub(crate) fn render_with_model(
    model: &dyn ModelHelper,
    node: impl Into<Node>,
) -> Result<String, RenderError> {
    render_with_options(model, &ComponentOptions::default(), node)
}

pub(crate) fn render_with_options(
    model: &dyn ModelHelper,
    options: &ComponentOptions,
    node: impl Into<Node>,
) -> Result<String, RenderError> {
    Renderer::new(model, options)
        .render(&[node.into()])
        .map(govuk_html::HtmlString::into_string)
}

pub(crate) fn text(text: &str) -> Node {
    Node::text(text)
}
