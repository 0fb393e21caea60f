//! Shared implementation of radios and checkboxes.
//!
//! Both components have the same children and ordering rules and differ only
//! in element names, CSS prefix and input type, captured by [`ChoiceKind`].
//!
//! ```text
//! <govuk-radios>
//!   [<govuk-radios-fieldset> + <govuk-radios-fieldset-legend>]
//!   [<govuk-radios-hint>] [<govuk-radios-error-message>]
//!   <govuk-radios-item> [<govuk-radios-item-hint>] [<govuk-radios-item-conditional>]
//!   <govuk-radios-divider>
//!   ...
//! ```

use std::marker::PhantomData;

use govuk_html::{AttributeDictionary, HtmlElement, HtmlString};

use crate::error::RenderError;
use crate::form_group::{
    FieldsetParent, FieldsetScope, FieldsetTagNames, FormGroupBuilder, FormGroupContext,
    FormGroupErrorMessage, FormGroupField, FormGroupHint, FormGroupOptions, FormGroupTagHelper,
    FormGroupTagNames, form_group_builder_methods, process_form_group,
};
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

/// Element names of one choice component, used in error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChoiceTagNames {
    pub root: &'static str,
    pub fieldset: &'static str,
    pub legend: &'static str,
    pub hint: &'static str,
    pub error_message: &'static str,
    pub item: &'static str,
    pub item_hint: &'static str,
    pub item_conditional: &'static str,
    pub divider: &'static str,
}

/// Radios or checkboxes.
pub trait ChoiceKind: 'static {
    const TAG_NAMES: ChoiceTagNames;
    /// Block name of the CSS classes (e.g. `govuk-radios`).
    const CLASS_PREFIX: &'static str;
    /// The `type` of each `<input>`.
    const INPUT_TYPE: &'static str;
}

/// An item's hint.
#[derive(Clone, Debug, Default)]
pub struct ChoiceItemHint {
    pub attributes: AttributeDictionary,
    pub content: HtmlString,
}

/// Content revealed when an item is checked.
#[derive(Clone, Debug, Default)]
pub struct ChoiceItemConditional {
    pub attributes: AttributeDictionary,
    pub content: HtmlString,
}

/// A finished item.
#[derive(Clone, Debug, Default)]
pub struct ChoiceItemData {
    /// Explicit id; otherwise numbered under the component's id prefix.
    pub id: Option<String>,
    /// The submitted value.
    pub value: String,
    /// Explicit state; `None` infers it from the bound value.
    pub checked: Option<bool>,
    pub disabled: bool,
    /// Per-item `name` (checkboxes only).
    pub name: Option<String>,
    /// Unchecks every other checkbox when checked.
    pub exclusive: bool,
    /// Label markup, from the item's content.
    pub label: HtmlString,
    /// Attributes written on the `<input>`.
    pub input_attributes: AttributeDictionary,
    pub hint: Option<ChoiceItemHint>,
    pub conditional: Option<ChoiceItemConditional>,
}

/// An entry in a choice list.
#[derive(Clone, Debug)]
pub enum ChoiceItem {
    /// A checkable item.
    Item(ChoiceItemData),
    /// Text between items.
    Divider(HtmlString),
}

/// Context of a radios or checkboxes component.
#[derive(Debug)]
pub struct ChoiceContext<K> {
    form_group: FormGroupBuilder,
    fieldset: FieldsetScope,
    items: Vec<ChoiceItem>,
    is_conditional: bool,
    _kind: PhantomData<fn() -> K>,
}

impl<K: ChoiceKind> ChoiceContext<K> {
    /// An empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            form_group: FormGroupBuilder::new(Self::TAG_NAMES),
            fieldset: FieldsetScope::default(),
            items: Vec::new(),
            is_conditional: false,
            _kind: PhantomData,
        }
    }

    /// Items and dividers in document order.
    #[must_use]
    pub fn items(&self) -> &[ChoiceItem] {
        &self.items
    }

    /// Whether any item has conditional content.
    #[must_use]
    pub fn is_conditional(&self) -> bool {
        self.is_conditional
    }

    /// Append an item.
    ///
    /// # Errors
    ///
    /// Fails when the component's fieldset has already closed.
    pub fn add_item(&mut self, item: ChoiceItemData) -> Result<(), RenderError> {
        self.fieldset
            .check_not_closed(K::TAG_NAMES.item, Self::FIELDSET_TAG_NAMES)?;
        self.is_conditional |= item.conditional.is_some();
        self.items.push(ChoiceItem::Item(item));
        Ok(())
    }

    /// Append a divider.
    ///
    /// # Errors
    ///
    /// Fails when the component's fieldset has already closed.
    pub fn add_divider(&mut self, content: HtmlString) -> Result<(), RenderError> {
        self.fieldset
            .check_not_closed(K::TAG_NAMES.divider, Self::FIELDSET_TAG_NAMES)?;
        self.items.push(ChoiceItem::Divider(content));
        Ok(())
    }

    fn check_can_set(&self, element: &str) -> Result<(), RenderError> {
        self.fieldset
            .check_not_closed(element, Self::FIELDSET_TAG_NAMES)?;
        if self.items.is_empty() {
            Ok(())
        } else {
            Err(RenderError::must_be_specified_before(element, K::TAG_NAMES.item))
        }
    }
}

impl<K: ChoiceKind> Default for ChoiceContext<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ChoiceKind> FormGroupContext for ChoiceContext<K> {
    const TAG_NAMES: FormGroupTagNames = FormGroupTagNames {
        root: K::TAG_NAMES.root,
        label: K::TAG_NAMES.legend,
        hint: K::TAG_NAMES.hint,
        error_message: K::TAG_NAMES.error_message,
    };

    fn builder(&self) -> &FormGroupBuilder {
        &self.form_group
    }

    fn builder_mut(&mut self) -> &mut FormGroupBuilder {
        &mut self.form_group
    }

    fn set_hint(&mut self, hint: FormGroupHint) -> Result<(), RenderError> {
        self.check_can_set(K::TAG_NAMES.hint)?;
        self.form_group.set_hint(hint)
    }

    fn set_error_message(&mut self, error_message: FormGroupErrorMessage) -> Result<(), RenderError> {
        self.check_can_set(K::TAG_NAMES.error_message)?;
        self.form_group.set_error_message(error_message)
    }
}

impl<K: ChoiceKind> FieldsetParent for ChoiceContext<K> {
    const FIELDSET_TAG_NAMES: FieldsetTagNames = FieldsetTagNames {
        root: K::TAG_NAMES.root,
        fieldset: K::TAG_NAMES.fieldset,
        legend: K::TAG_NAMES.legend,
    };

    fn fieldset_scope(&self) -> &FieldsetScope {
        &self.fieldset
    }

    fn fieldset_scope_mut(&mut self) -> &mut FieldsetScope {
        &mut self.fieldset
    }

    fn has_direct_content(&self) -> bool {
        self.form_group.has_content() || !self.items.is_empty()
    }

    fn first_child_after_legend(&self) -> Option<&'static str> {
        if self.form_group.hint().is_some() {
            Some(K::TAG_NAMES.hint)
        } else if self.form_group.error_message().is_some() {
            Some(K::TAG_NAMES.error_message)
        } else if !self.items.is_empty() {
            Some(K::TAG_NAMES.item)
        } else {
            None
        }
    }
}

/// The root element of radios or checkboxes.
#[derive(Debug)]
pub struct ChoiceTagHelper<K> {
    form_group: FormGroupOptions,
    id_prefix: Option<String>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: ChoiceKind> ChoiceTagHelper<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            form_group: FormGroupOptions::default(),
            id_prefix: None,
            _kind: PhantomData,
        }
    }

    form_group_builder_methods!();

    /// Prefix for generated item ids. Defaults to the component id.
    #[must_use]
    pub fn with_id_prefix(mut self, id_prefix: impl Into<String>) -> Self {
        self.id_prefix = Some(id_prefix.into());
        self
    }
}

impl<K: ChoiceKind> Default for ChoiceTagHelper<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ChoiceKind> FormGroupTagHelper for ChoiceTagHelper<K> {
    type Context = ChoiceContext<K>;

    const HAS_LABEL: bool = false;

    fn form_group_options(&self) -> &FormGroupOptions {
        &self.form_group
    }

    fn create_context(&self) -> ChoiceContext<K> {
        ChoiceContext::new()
    }

    fn generate_content(
        &self,
        context: &ChoiceContext<K>,
        field: FormGroupField<'_>,
    ) -> Result<HtmlString, RenderError> {
        let prefix = K::CLASS_PREFIX;
        let id_prefix = self.id_prefix.as_deref().unwrap_or(&field.id);
        let fieldset = context.fieldset.fieldset();

        let mut container = HtmlElement::new("div").with_class(prefix);
        if context.is_conditional {
            container = container
                .with_class(&format!("{prefix}--conditional"))
                .with_attribute("data-module", prefix);
        }
        if fieldset.is_none() {
            container = container.with_attribute_opt("aria-describedby", field.described_by.as_deref());
        }
        container = container.with_merged_attributes(&field.attributes);

        let mut index = 0;
        for item in &context.items {
            match item {
                ChoiceItem::Item(item) => {
                    let id = item.id.clone().unwrap_or_else(|| {
                        if index == 0 {
                            id_prefix.to_owned()
                        } else {
                            format!("{id_prefix}-{index}")
                        }
                    });
                    index += 1;

                    let checked = item
                        .checked
                        .unwrap_or_else(|| field.model_value.selects(&item.value));
                    let name = item.name.as_deref().unwrap_or(&field.name);
                    for element in generate_item::<K>(item, &id, name, checked) {
                        container.push_child(element);
                    }
                }
                ChoiceItem::Divider(content) => {
                    container.push_child(
                        HtmlElement::new("div")
                            .with_class(&format!("{prefix}__divider"))
                            .with_html(content.clone()),
                    );
                }
            }
        }

        let mut content = HtmlString::empty();
        for element in [field.hint_element(), field.error_message_element()]
            .into_iter()
            .flatten()
        {
            content.push_html(&element.to_html_string());
        }
        content.push_html(&container.to_html_string());

        let Some(fieldset) = fieldset else {
            return Ok(content);
        };

        let described_by = [fieldset.described_by.as_deref(), field.described_by.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        let described_by = (!described_by.is_empty()).then_some(described_by.as_str());
        Ok(fieldset
            .to_element(None, described_by, content)
            .to_html_string())
    }
}

fn generate_item<K: ChoiceKind>(
    item: &ChoiceItemData,
    id: &str,
    name: &str,
    checked: bool,
) -> impl Iterator<Item = HtmlElement> {
    let prefix = K::CLASS_PREFIX;
    let hint_id = format!("{id}-item-hint");
    let conditional_id = format!("conditional-{id}");

    let input = HtmlElement::new("input")
        .with_class(&format!("{prefix}__input"))
        .with_attribute("id", id)
        .with_attribute("name", name)
        .with_attribute("type", K::INPUT_TYPE)
        .with_attribute("value", item.value.as_str())
        .with_boolean_attribute_if(checked, "checked")
        .with_boolean_attribute_if(item.disabled, "disabled")
        .with_attribute_opt(
            "data-aria-controls",
            item.conditional.as_ref().map(|_| conditional_id.as_str()),
        )
        .with_attribute_opt("aria-describedby", item.hint.as_ref().map(|_| hint_id.as_str()))
        .with_attribute_opt("data-behaviour", item.exclusive.then_some("exclusive"))
        .with_merged_attributes(&item.input_attributes);

    let label = HtmlElement::new("label")
        .with_class(&format!("govuk-label {prefix}__label"))
        .with_attribute("for", id)
        .with_html(item.label.clone());

    let hint = item.hint.as_ref().map(|hint| {
        HtmlElement::new("div")
            .with_attribute("id", hint_id.as_str())
            .with_class(&format!("govuk-hint {prefix}__hint"))
            .with_merged_attributes(&hint.attributes)
            .with_html(hint.content.clone())
    });

    let item_element = HtmlElement::new("div")
        .with_class(&format!("{prefix}__item"))
        .with_child(input)
        .with_child(label)
        .with_child_opt(hint);

    let conditional = item.conditional.as_ref().map(|conditional| {
        HtmlElement::new("div")
            .with_class(&format!("{prefix}__conditional"))
            .with_class_if(!checked, &format!("{prefix}__conditional--hidden"))
            .with_attribute("id", conditional_id.as_str())
            .with_merged_attributes(&conditional.attributes)
            .with_html(conditional.content.clone())
    });

    std::iter::once(item_element).chain(conditional)
}

impl<K: ChoiceKind> TagHelper for ChoiceTagHelper<K> {
    fn tag_name(&self) -> &'static str {
        K::TAG_NAMES.root
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        process_form_group(self, context, output)
    }
}

/// Context of one item, collecting its hint then its conditional content.
pub struct ChoiceItemContext<K> {
    hint: Option<ChoiceItemHint>,
    conditional: Option<ChoiceItemConditional>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: ChoiceKind> ChoiceItemContext<K> {
    fn new() -> Self {
        Self {
            hint: None,
            conditional: None,
            _kind: PhantomData,
        }
    }

    /// # Errors
    ///
    /// Fails on a second hint or when the conditional content was already set.
    pub fn set_hint(&mut self, hint: ChoiceItemHint) -> Result<(), RenderError> {
        let tag_names = K::TAG_NAMES;
        if self.hint.is_some() {
            return Err(RenderError::only_one(tag_names.item_hint, tag_names.item));
        }
        if self.conditional.is_some() {
            return Err(RenderError::must_be_specified_before(
                tag_names.item_hint,
                tag_names.item_conditional,
            ));
        }
        self.hint = Some(hint);
        Ok(())
    }

    /// # Errors
    ///
    /// Fails on a second conditional.
    pub fn set_conditional(&mut self, conditional: ChoiceItemConditional) -> Result<(), RenderError> {
        let tag_names = K::TAG_NAMES;
        if self.conditional.is_some() {
            return Err(RenderError::only_one(tag_names.item_conditional, tag_names.item));
        }
        self.conditional = Some(conditional);
        Ok(())
    }
}

/// An item of radios or checkboxes. Its content is the label.
#[derive(Debug)]
pub struct ChoiceItemTagHelper<K> {
    value: String,
    id: Option<String>,
    checked: Option<bool>,
    disabled: bool,
    name: Option<String>,
    exclusive: bool,
    _kind: PhantomData<fn() -> K>,
}

impl<K: ChoiceKind> ChoiceItemTagHelper<K> {
    /// An item submitting `value`.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            id: None,
            checked: None,
            disabled: false,
            name: None,
            exclusive: false,
            _kind: PhantomData,
        }
    }

    /// Explicit input id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Override the state inferred from the bound value.
    #[must_use]
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Render the input disabled.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = Some(name);
    }

    pub(crate) fn set_exclusive(&mut self, exclusive: bool) {
        self.exclusive = exclusive;
    }
}

impl<K: ChoiceKind> TagHelper for ChoiceItemTagHelper<K> {
    fn tag_name(&self) -> &'static str {
        K::TAG_NAMES.item
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let tag_names = K::TAG_NAMES;
        context.ensure_parent::<ChoiceContext<K>>(tag_names.item, tag_names.root)?;

        let (item_context, label) = context.scoped(ChoiceItemContext::<K>::new(), |context| {
            context.child_content()
        })?;

        let item = ChoiceItemData {
            id: self.id.clone(),
            value: self.value.clone(),
            checked: self.checked,
            disabled: self.disabled,
            name: self.name.clone(),
            exclusive: self.exclusive,
            label,
            input_attributes: output.take_attributes(),
            hint: item_context.hint,
            conditional: item_context.conditional,
        };
        context
            .parent_mut::<ChoiceContext<K>>(tag_names.item, tag_names.root)?
            .add_item(item)?;

        output.suppress_output();
        Ok(())
    }
}

/// Hint for one item.
pub struct ChoiceItemHintTagHelper<K> {
    _kind: PhantomData<fn() -> K>,
}

impl<K> ChoiceItemHintTagHelper<K> {
    #[must_use]
    pub fn new() -> Self {
        Self { _kind: PhantomData }
    }
}

impl<K> Default for ChoiceItemHintTagHelper<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ChoiceKind> TagHelper for ChoiceItemHintTagHelper<K> {
    fn tag_name(&self) -> &'static str {
        K::TAG_NAMES.item_hint
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let tag_names = K::TAG_NAMES;
        context.ensure_parent::<ChoiceItemContext<K>>(tag_names.item_hint, tag_names.item)?;

        let hint = ChoiceItemHint {
            attributes: output.take_attributes(),
            content: context.child_content()?,
        };
        context
            .parent_mut::<ChoiceItemContext<K>>(tag_names.item_hint, tag_names.item)?
            .set_hint(hint)?;

        output.suppress_output();
        Ok(())
    }
}

/// Content revealed when an item is selected.
pub struct ChoiceItemConditionalTagHelper<K> {
    _kind: PhantomData<fn() -> K>,
}

impl<K> ChoiceItemConditionalTagHelper<K> {
    #[must_use]
    pub fn new() -> Self {
        Self { _kind: PhantomData }
    }
}

impl<K> Default for ChoiceItemConditionalTagHelper<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ChoiceKind> TagHelper for ChoiceItemConditionalTagHelper<K> {
    fn tag_name(&self) -> &'static str {
        K::TAG_NAMES.item_conditional
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let tag_names = K::TAG_NAMES;
        context.ensure_parent::<ChoiceItemContext<K>>(tag_names.item_conditional, tag_names.item)?;

        let conditional = ChoiceItemConditional {
            attributes: output.take_attributes(),
            content: context.child_content()?,
        };
        context
            .parent_mut::<ChoiceItemContext<K>>(tag_names.item_conditional, tag_names.item)?
            .set_conditional(conditional)?;

        output.suppress_output();
        Ok(())
    }
}

/// A divider between items, usually "or".
pub struct ChoiceDividerTagHelper<K> {
    _kind: PhantomData<fn() -> K>,
}

impl<K> ChoiceDividerTagHelper<K> {
    #[must_use]
    pub fn new() -> Self {
        Self { _kind: PhantomData }
    }
}

impl<K> Default for ChoiceDividerTagHelper<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ChoiceKind> TagHelper for ChoiceDividerTagHelper<K> {
    fn tag_name(&self) -> &'static str {
        K::TAG_NAMES.divider
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let tag_names = K::TAG_NAMES;
        context.ensure_parent::<ChoiceContext<K>>(tag_names.divider, tag_names.root)?;

        let content = context.child_content()?;
        context
            .parent_mut::<ChoiceContext<K>>(tag_names.divider, tag_names.root)?
            .add_divider(content)?;

        output.suppress_output();
        Ok(())
    }
}
