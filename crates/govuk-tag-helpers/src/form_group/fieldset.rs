//! Optional fieldset grouping for radios, checkboxes and date inputs.
//!
//! A grouped control either has all its children directly inside it, or a
//! single fieldset that holds the legend followed by everything else:
//!
//! ```text
//! <govuk-radios>                       <govuk-radios>
//!   <govuk-radios-hint/>                 <govuk-radios-fieldset>
//!   <govuk-radios-item/>                   <govuk-radios-fieldset-legend/>
//! </govuk-radios>                          <govuk-radios-hint/>
//!                                          <govuk-radios-item/>
//!                                        </govuk-radios-fieldset>
//!                                      </govuk-radios>
//! ```
//!
//! The choice is enforced as children arrive, through [`FieldsetScope`].

use std::marker::PhantomData;

use govuk_html::{AttributeDictionary, HtmlElement, HtmlString};

use crate::error::RenderError;
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

/// Element names used in a fieldset's error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldsetTagNames {
    /// The control owning the fieldset, e.g. `govuk-radios`.
    pub root: &'static str,
    /// The fieldset child, e.g. `govuk-radios-fieldset`.
    pub fieldset: &'static str,
    /// The legend inside the fieldset.
    pub legend: &'static str,
}

/// A fieldset's `<legend>`.
#[derive(Clone, Debug, Default)]
pub struct FieldsetLegend {
    /// Wrap the legend content in an `h1`.
    pub is_page_heading: bool,
    pub attributes: AttributeDictionary,
    pub content: HtmlString,
}

impl FieldsetLegend {
    /// The `<legend>` element.
    #[must_use]
    pub fn to_element(&self) -> HtmlElement {
        let legend = HtmlElement::new("legend")
            .with_class("govuk-fieldset__legend")
            .with_merged_attributes(&self.attributes);

        if self.is_page_heading {
            legend.with_child(
                HtmlElement::new("h1")
                    .with_class("govuk-fieldset__heading")
                    .with_html(self.content.clone()),
            )
        } else {
            legend.with_html(self.content.clone())
        }
    }
}

/// A finished fieldset of a grouped control.
#[derive(Clone, Debug, Default)]
pub struct FormGroupFieldset {
    /// Extra `aria-describedby` tokens from the fieldset element.
    pub described_by: Option<String>,
    /// Attributes written on the `<fieldset>`.
    pub attributes: AttributeDictionary,
    /// The required legend.
    pub legend: FieldsetLegend,
}

impl FormGroupFieldset {
    /// Wrap `content` in the fieldset, after its legend.
    #[must_use]
    pub fn to_element(
        &self,
        role: Option<&str>,
        described_by: Option<&str>,
        content: HtmlString,
    ) -> HtmlElement {
        HtmlElement::new("fieldset")
            .with_class("govuk-fieldset")
            .with_attribute_opt("role", role)
            .with_attribute_opt("aria-describedby", described_by)
            .with_merged_attributes(&self.attributes)
            .with_child(self.legend.to_element())
            .with_html(content)
    }
}

/// Whether a grouped control's fieldset has been opened or closed.
#[derive(Clone, Debug, Default)]
pub enum FieldsetScope {
    #[default]
    NotOpened,
    Open,
    Closed(FormGroupFieldset),
}

impl FieldsetScope {
    /// Open the fieldset.
    ///
    /// Fails when a fieldset is already open or was already closed, or when
    /// the control already has children outside a fieldset.
    pub fn open(
        &mut self,
        tag_names: FieldsetTagNames,
        has_direct_content: bool,
    ) -> Result<(), RenderError> {
        match self {
            Self::Open => Err(RenderError::cannot_be_nested(tag_names.fieldset)),
            Self::Closed(_) => Err(RenderError::only_one(tag_names.fieldset, tag_names.root)),
            Self::NotOpened if has_direct_content => Err(RenderError::must_be_only_child(
                tag_names.fieldset,
                tag_names.root,
            )),
            Self::NotOpened => {
                *self = Self::Open;
                Ok(())
            }
        }
    }

    /// Close the open fieldset, keeping its finished state.
    pub fn close(
        &mut self,
        tag_names: FieldsetTagNames,
        fieldset: FormGroupFieldset,
    ) -> Result<(), RenderError> {
        if !matches!(self, Self::Open) {
            return Err(RenderError::must_be_inside(tag_names.fieldset, tag_names.root));
        }
        *self = Self::Closed(fieldset);
        Ok(())
    }

    /// Fail if `element` arrives after the fieldset has closed.
    pub fn check_not_closed(
        &self,
        element: &str,
        tag_names: FieldsetTagNames,
    ) -> Result<(), RenderError> {
        match self {
            Self::Closed(_) => Err(RenderError::must_be_inside(element, tag_names.fieldset)),
            Self::NotOpened | Self::Open => Ok(()),
        }
    }

    /// Whether children are currently being added inside the fieldset.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// The finished fieldset, once it has closed.
    #[must_use]
    pub fn fieldset(&self) -> Option<&FormGroupFieldset> {
        match self {
            Self::Closed(fieldset) => Some(fieldset),
            Self::NotOpened | Self::Open => None,
        }
    }
}

/// A control context that can be grouped by a fieldset.
pub trait FieldsetParent: 'static {
    const FIELDSET_TAG_NAMES: FieldsetTagNames;

    fn fieldset_scope(&self) -> &FieldsetScope;

    fn fieldset_scope_mut(&mut self) -> &mut FieldsetScope;

    /// Whether any hint, error message or item has been added.
    fn has_direct_content(&self) -> bool;

    /// The first child already added that the legend must precede.
    fn first_child_after_legend(&self) -> Option<&'static str>;
}

/// Context of an open fieldset belonging to a `C` control.
pub struct FormGroupFieldsetContext<C> {
    legend: Option<FieldsetLegend>,
    _parent: PhantomData<fn() -> C>,
}

impl<C: FieldsetParent> FormGroupFieldsetContext<C> {
    fn new() -> Self {
        Self {
            legend: None,
            _parent: PhantomData,
        }
    }

    /// Set the legend.
    ///
    /// # Errors
    ///
    /// Fails if the fieldset already has one.
    pub fn set_legend(&mut self, legend: FieldsetLegend) -> Result<(), RenderError> {
        let tag_names = C::FIELDSET_TAG_NAMES;
        if self.legend.is_some() {
            return Err(RenderError::only_one(tag_names.legend, tag_names.fieldset));
        }
        self.legend = Some(legend);
        Ok(())
    }
}

/// `<{control}-fieldset>`.
pub struct FormGroupFieldsetTagHelper<C> {
    described_by: Option<String>,
    _parent: PhantomData<fn() -> C>,
}

impl<C> FormGroupFieldsetTagHelper<C> {
    /// A fieldset with no extra `aria-describedby`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            described_by: None,
            _parent: PhantomData,
        }
    }

    /// Extra ids for the fieldset's `aria-describedby`.
    #[must_use]
    pub fn with_described_by(mut self, described_by: impl Into<String>) -> Self {
        self.described_by = Some(described_by.into());
        self
    }
}

impl<C> Default for FormGroupFieldsetTagHelper<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: FieldsetParent> TagHelper for FormGroupFieldsetTagHelper<C> {
    fn tag_name(&self) -> &'static str {
        C::FIELDSET_TAG_NAMES.fieldset
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let tag_names = C::FIELDSET_TAG_NAMES;
        let parent = context.parent_mut::<C>(tag_names.fieldset, tag_names.root)?;
        let has_direct_content = parent.has_direct_content();
        parent
            .fieldset_scope_mut()
            .open(tag_names, has_direct_content)?;

        let attributes = output.take_attributes();
        let (fieldset, _) = context.scoped(FormGroupFieldsetContext::<C>::new(), |context| {
            context.child_content()
        })?;
        let legend = fieldset
            .legend
            .ok_or_else(|| RenderError::child_must_be_provided(tag_names.legend))?;

        context
            .parent_mut::<C>(tag_names.fieldset, tag_names.root)?
            .fieldset_scope_mut()
            .close(
                tag_names,
                FormGroupFieldset {
                    described_by: self.described_by.clone(),
                    attributes,
                    legend,
                },
            )?;

        output.suppress_output();
        Ok(())
    }
}

/// `<{control}-fieldset-legend>`.
pub struct FormGroupFieldsetLegendTagHelper<C> {
    is_page_heading: bool,
    _parent: PhantomData<fn() -> C>,
}

impl<C> FormGroupFieldsetLegendTagHelper<C> {
    /// A plain legend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            is_page_heading: false,
            _parent: PhantomData,
        }
    }

    /// Render the legend text inside an `h1`.
    #[must_use]
    pub fn with_is_page_heading(mut self, is_page_heading: bool) -> Self {
        self.is_page_heading = is_page_heading;
        self
    }
}

impl<C> Default for FormGroupFieldsetLegendTagHelper<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: FieldsetParent> TagHelper for FormGroupFieldsetLegendTagHelper<C> {
    fn tag_name(&self) -> &'static str {
        C::FIELDSET_TAG_NAMES.legend
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let tag_names = C::FIELDSET_TAG_NAMES;
        context.ensure_parent::<FormGroupFieldsetContext<C>>(tag_names.legend, tag_names.fieldset)?;

        let legend = FieldsetLegend {
            is_page_heading: self.is_page_heading,
            attributes: output.take_attributes(),
            content: context.child_content()?,
        };

        if let Some(after) = context
            .items()
            .get::<C>()
            .and_then(C::first_child_after_legend)
        {
            return Err(RenderError::must_be_specified_before(tag_names.legend, after));
        }

        context
            .parent_mut::<FormGroupFieldsetContext<C>>(tag_names.legend, tag_names.fieldset)?
            .set_legend(legend)?;

        output.suppress_output();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TAG_NAMES: FieldsetTagNames = FieldsetTagNames {
        root: "govuk-radios",
        fieldset: "govuk-radios-fieldset",
        legend: "govuk-radios-fieldset-legend",
    };

    #[test]
    fn test_open_and_close() {
        let mut scope = FieldsetScope::default();
        scope.open(TAG_NAMES, false).unwrap();
        assert!(scope.is_open());
        scope.check_not_closed("govuk-radios-item", TAG_NAMES).unwrap();
        scope.close(TAG_NAMES, FormGroupFieldset::default()).unwrap();
        assert!(scope.fieldset().is_some());
    }

    #[test]
    fn test_open_with_direct_content() {
        let mut scope = FieldsetScope::default();
        let error = scope.open(TAG_NAMES, true).unwrap_err();
        assert_eq!(
            error.to_string(),
            "<govuk-radios-fieldset> must be the only direct child of the <govuk-radios>."
        );
    }

    #[test]
    fn test_open_while_open() {
        let mut scope = FieldsetScope::Open;
        let error = scope.open(TAG_NAMES, false).unwrap_err();
        assert_eq!(
            error.to_string(),
            "<govuk-radios-fieldset> cannot be nested inside another <govuk-radios-fieldset>."
        );
    }

    #[test]
    fn test_open_after_close() {
        let mut scope = FieldsetScope::Closed(FormGroupFieldset::default());
        let error = scope.open(TAG_NAMES, false).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Only one <govuk-radios-fieldset> element is permitted within each <govuk-radios>."
        );
    }

    #[test]
    fn test_content_after_close() {
        let scope = FieldsetScope::Closed(FormGroupFieldset::default());
        let error = scope
            .check_not_closed("govuk-radios-item", TAG_NAMES)
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "<govuk-radios-item> must be inside <govuk-radios-fieldset>."
        );
    }

    #[test]
    fn test_close_without_open() {
        let mut scope = FieldsetScope::default();
        assert!(scope.close(TAG_NAMES, FormGroupFieldset::default()).is_err());
    }

    #[test]
    fn test_page_heading_legend() {
        let legend = FieldsetLegend {
            is_page_heading: true,
            attributes: AttributeDictionary::parse("class=govuk-fieldset__legend--l"),
            content: HtmlString::from("Where do you live?"),
        };
        assert_eq!(
            legend.to_element().to_html_string().as_str(),
            "<legend class=\"govuk-fieldset__legend govuk-fieldset__legend--l\">\
             <h1 class=\"govuk-fieldset__heading\">Where do you live?</h1></legend>"
        );
    }
}
