//! `<govuk-phase-banner>`: a required phase tag, then the banner text.

use govuk_html::{AttributeDictionary, HtmlElement, HtmlString};

use crate::error::RenderError;
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

const TAG_NAME: &str = "govuk-phase-banner";
const TAG_TAG_NAME: &str = "govuk-phase-banner-tag";

/// The phase tag, e.g. "Alpha".
#[derive(Clone, Debug, Default)]
pub struct PhaseBannerTag {
    pub attributes: AttributeDictionary,
    pub content: HtmlString,
}

/// The required tag. Everything else is the banner's text.
#[derive(Clone, Debug, Default)]
pub struct PhaseBannerContext {
    tag: Option<PhaseBannerTag>,
}

impl PhaseBannerContext {
    /// # Errors
    ///
    /// Fails on a second tag.
    pub fn set_tag(&mut self, tag: PhaseBannerTag) -> Result<(), RenderError> {
        if self.tag.is_some() {
            return Err(RenderError::only_one(TAG_TAG_NAME, TAG_NAME));
        }
        self.tag = Some(tag);
        Ok(())
    }
}

/// `<govuk-phase-banner>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PhaseBannerTagHelper;

impl TagHelper for PhaseBannerTagHelper {
    fn tag_name(&self) -> &'static str {
        TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let (banner, content) = context.scoped(PhaseBannerContext::default(), |context| {
            context.child_content()
        })?;
        let tag = banner
            .tag
            .ok_or_else(|| RenderError::child_must_be_provided(TAG_TAG_NAME))?;

        let element = HtmlElement::new("div")
            .with_class("govuk-phase-banner")
            .with_merged_attributes(&output.take_attributes())
            .with_child(
                HtmlElement::new("p")
                    .with_class("govuk-phase-banner__content")
                    .with_child(
                        HtmlElement::new("strong")
                            .with_class("govuk-tag govuk-phase-banner__content__tag")
                            .with_merged_attributes(&tag.attributes)
                            .with_html(tag.content),
                    )
                    .with_child(
                        HtmlElement::new("span")
                            .with_class("govuk-phase-banner__text")
                            .with_html(content),
                    ),
            );

        output.write_element(element);
        Ok(())
    }
}

/// `<govuk-phase-banner-tag>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PhaseBannerTagTagHelper;

impl TagHelper for PhaseBannerTagTagHelper {
    fn tag_name(&self) -> &'static str {
        TAG_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<PhaseBannerContext>(TAG_TAG_NAME, TAG_NAME)?;
        let tag = PhaseBannerTag {
            attributes: output.take_attributes(),
            content: context.child_content()?,
        };
        context
            .parent_mut::<PhaseBannerContext>(TAG_TAG_NAME, TAG_NAME)?
            .set_tag(tag)?;
        output.suppress_output();
        Ok(())
    }
}
