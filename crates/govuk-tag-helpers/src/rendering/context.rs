//! Ambient context passed to tag helpers.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;

use govuk_html::HtmlString;

use crate::error::RenderError;
use crate::model::ModelHelper;
use crate::options::ComponentOptions;

use super::{Node, render_nodes};

/// Per-render services: the model accessor and component options.
#[derive(Clone, Copy)]
pub struct ViewContext<'v> {
    /// The view's model and validation state.
    pub model: &'v dyn ModelHelper,
    /// Application-wide component options.
    pub options: &'v ComponentOptions,
}

/// Typed store of component contexts, keyed by type.
///
/// Holds at most one value per type. Values are only added through
/// [`TagHelperContext::scoped`], which bounds their lifetime to the
/// processing of one element.
#[derive(Default)]
pub struct ContextItems {
    items: HashMap<TypeId, Box<dyn Any>>,
}

impl ContextItems {
    /// The value of type `T`, if one is in scope.
    #[must_use]
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.items.get(&TypeId::of::<T>())?.downcast_ref()
    }

    /// Mutable access to the value of type `T`, if one is in scope.
    pub fn get_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.items.get_mut(&TypeId::of::<T>())?.downcast_mut()
    }

    /// Whether a value of type `T` is in scope.
    #[must_use]
    pub fn contains<T: 'static>(&self) -> bool {
        self.items.contains_key(&TypeId::of::<T>())
    }

    fn insert<T: 'static>(&mut self, value: T) -> Option<Box<dyn Any>> {
        self.items.insert(TypeId::of::<T>(), Box::new(value))
    }

    fn take<T: 'static>(&mut self) -> Option<T> {
        let value = self.items.remove(&TypeId::of::<T>())?;
        value.downcast().ok().map(|value| *value)
    }

    fn restore<T: 'static>(&mut self, previous: Option<Box<dyn Any>>) {
        if let Some(previous) = previous {
            self.items.insert(TypeId::of::<T>(), previous);
        }
    }
}

/// Context handed to [`TagHelper::process`](super::TagHelper::process).
pub struct TagHelperContext<'v, 'a> {
    view: ViewContext<'v>,
    items: &'a mut ContextItems,
    children: &'a [Node],
    child_content: Option<HtmlString>,
    child_failed: bool,
}

impl<'v, 'a> TagHelperContext<'v, 'a> {
    pub(super) fn new(
        view: ViewContext<'v>,
        items: &'a mut ContextItems,
        children: &'a [Node],
    ) -> Self {
        Self {
            view,
            items,
            children,
            child_content: None,
            child_failed: false,
        }
    }

    /// Model and options of the current render.
    #[must_use]
    pub fn view(&self) -> ViewContext<'v> {
        self.view
    }

    /// The view's model.
    #[must_use]
    pub fn model(&self) -> &'v dyn ModelHelper {
        self.view.model
    }

    /// Component options of the current render.
    #[must_use]
    pub fn options(&self) -> &'v ComponentOptions {
        self.view.options
    }

    /// Contexts pushed by enclosing components.
    #[must_use]
    pub fn items(&self) -> &ContextItems {
        self.items
    }

    /// Mutable access to the enclosing components' contexts.
    pub fn items_mut(&mut self) -> &mut ContextItems {
        self.items
    }

    /// Render the element's children.
    ///
    /// Children are evaluated on the first call; later calls return the same
    /// markup without re-running any child helper.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by a child component.
    pub fn child_content(&mut self) -> Result<HtmlString, RenderError> {
        if let Some(content) = &self.child_content {
            return Ok(content.clone());
        }

        let content = render_nodes(self.view, self.items, self.children)
            .inspect_err(|_| self.child_failed = true)?;
        self.child_content = Some(content.clone());
        Ok(content)
    }

    /// Whether a child component has already failed, i.e. an error leaving
    /// this element was raised further down the tree.
    pub(super) fn child_failed(&self) -> bool {
        self.child_failed
    }

    /// Make `value` visible to descendants while `f` runs, then take it back.
    ///
    /// An outer value of the same type is shadowed for the duration and
    /// restored afterwards, so nested components of the same kind each see
    /// their own context.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `f`. The scope is unwound either way.
    pub fn scoped<T: 'static, R>(
        &mut self,
        value: T,
        f: impl FnOnce(&mut Self) -> Result<R, RenderError>,
    ) -> Result<(T, R), RenderError> {
        let previous = self.items.insert(value);
        tracing::trace!(context = type_name::<T>(), "Pushed component context");

        let result = f(self);

        // Only `scoped` adds or removes entries.
        let value = self
            .items
            .take::<T>()
            .expect("scoped context is present until its scope ends");
        self.items.restore::<T>(previous);
        tracing::trace!(context = type_name::<T>(), "Popped component context");

        result.map(|result| (value, result))
    }

    /// Fail unless a context of type `T` encloses this element.
    ///
    /// # Errors
    ///
    /// Returns "`<tag>` must be inside `<parent>`." when there is none.
    pub fn ensure_parent<T: 'static>(&self, tag: &str, parent: &str) -> Result<(), RenderError> {
        if self.items.contains::<T>() {
            Ok(())
        } else {
            Err(RenderError::must_be_inside(tag, parent))
        }
    }

    /// The enclosing context of type `T`.
    ///
    /// # Errors
    ///
    /// Returns "`<tag>` must be inside `<parent>`." when there is none.
    pub fn parent_mut<T: 'static>(&mut self, tag: &str, parent: &str) -> Result<&mut T, RenderError> {
        self.items
            .get_mut::<T>()
            .ok_or_else(|| RenderError::must_be_inside(tag, parent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_keyed_by_type() {
        let mut items = ContextItems::default();
        items.insert(1_u32);
        items.insert("outer");
        assert_eq!(items.get::<u32>(), Some(&1));
        assert_eq!(items.get::<&str>(), Some(&"outer"));
        assert!(items.get::<u64>().is_none());
    }

    #[test]
    fn test_take_and_restore() {
        let mut items = ContextItems::default();
        items.insert(1_u32);
        let previous = items.insert(2_u32);
        assert_eq!(items.take::<u32>(), Some(2));
        items.restore::<u32>(previous);
        assert_eq!(items.get::<u32>(), Some(&1));
    }
}
