//! `<govuk-summary-list>` and `<govuk-summary-card>`.
//!
//! Each row has a required key, then an optional value, then optional
//! actions. A summary card wraps exactly one summary list under a title and
//! optional card-level actions.

use govuk_html::{AttributeDictionary, HtmlElement, HtmlString};

use crate::error::RenderError;
use crate::form_group::non_empty;
use crate::rendering::{TagHelper, TagHelperContext, TagHelperOutput};

use super::{heading_tag, validate_heading_level};

const TAG_NAME: &str = "govuk-summary-list";
const ROW_TAG_NAME: &str = "govuk-summary-list-row";
const ROW_KEY_TAG_NAME: &str = "govuk-summary-list-row-key";
const ROW_VALUE_TAG_NAME: &str = "govuk-summary-list-row-value";
const ROW_ACTIONS_TAG_NAME: &str = "govuk-summary-list-row-actions";
const ROW_ACTION_TAG_NAME: &str = "govuk-summary-list-row-action";

const CARD_TAG_NAME: &str = "govuk-summary-card";
const CARD_TITLE_TAG_NAME: &str = "govuk-summary-card-title";
const CARD_ACTIONS_TAG_NAME: &str = "govuk-summary-card-actions";
const CARD_ACTION_TAG_NAME: &str = "govuk-summary-card-action";

/// A link in a row's or card's actions.
#[derive(Clone, Debug, Default)]
pub struct SummaryListAction {
    /// Link target.
    pub href: String,
    /// Appended for screen readers.
    pub visually_hidden_text: Option<String>,
    pub attributes: AttributeDictionary,
    /// Link text.
    pub content: HtmlString,
}

impl SummaryListAction {
    fn to_element(&self) -> HtmlElement {
        HtmlElement::new("a")
            .with_class("govuk-link")
            .with_attribute("href", self.href.as_str())
            .with_merged_attributes(&self.attributes)
            .with_html(self.content.clone())
            .with_child_opt(self.visually_hidden_text.as_deref().map(|text| {
                HtmlElement::new("span")
                    .with_class("govuk-visually-hidden")
                    .with_text(format!(" {text}"))
            }))
    }
}

/// The actions of a row or card.
#[derive(Clone, Debug, Default)]
pub struct SummaryListActions {
    pub attributes: AttributeDictionary,
    pub items: Vec<SummaryListAction>,
}

/// A row's key or value.
#[derive(Clone, Debug, Default)]
pub struct SummaryListRowPart {
    pub attributes: AttributeDictionary,
    pub content: HtmlString,
}

/// A finished row.
#[derive(Clone, Debug, Default)]
pub struct SummaryListRow {
    pub attributes: AttributeDictionary,
    pub key: SummaryListRowPart,
    /// Rendered empty when absent.
    pub value: Option<SummaryListRowPart>,
    /// Rows without actions get the `--no-actions` modifier when another row has some.
    pub actions: Option<SummaryListActions>,
}

impl SummaryListRow {
    fn has_actions(&self) -> bool {
        self.actions
            .as_ref()
            .is_some_and(|actions| !actions.items.is_empty())
    }
}

/// Rows collected by `<govuk-summary-list>`.
#[derive(Clone, Debug, Default)]
pub struct SummaryListContext {
    rows: Vec<SummaryListRow>,
}

impl SummaryListContext {
    /// Rows in document order.
    #[must_use]
    pub fn rows(&self) -> &[SummaryListRow] {
        &self.rows
    }

    /// Append a row.
    pub fn add_row(&mut self, row: SummaryListRow) {
        self.rows.push(row);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SummaryListRowRenderStage {
    None,
    Key,
    Value,
    Actions,
}

/// Key, value, then actions; each at most once.
#[derive(Clone, Debug)]
pub struct SummaryListRowContext {
    render_stage: SummaryListRowRenderStage,
    key: Option<SummaryListRowPart>,
    value: Option<SummaryListRowPart>,
    actions: Option<SummaryListActions>,
}

impl SummaryListRowContext {
    fn new() -> Self {
        Self {
            render_stage: SummaryListRowRenderStage::None,
            key: None,
            value: None,
            actions: None,
        }
    }

    fn check_stage(
        &self,
        stage: SummaryListRowRenderStage,
        tag_name: &str,
    ) -> Result<(), RenderError> {
        if self.render_stage < stage {
            return Ok(());
        }
        if self.is_set(stage) {
            return Err(RenderError::only_one(tag_name, ROW_TAG_NAME));
        }
        let later = [
            SummaryListRowRenderStage::Value,
            SummaryListRowRenderStage::Actions,
        ]
        .into_iter()
        .find(|later| *later > stage && self.is_set(*later))
        .unwrap_or(self.render_stage);
        Err(RenderError::must_be_specified_before(
            tag_name,
            Self::stage_tag_name(later),
        ))
    }

    fn is_set(&self, stage: SummaryListRowRenderStage) -> bool {
        match stage {
            SummaryListRowRenderStage::None => false,
            SummaryListRowRenderStage::Key => self.key.is_some(),
            SummaryListRowRenderStage::Value => self.value.is_some(),
            SummaryListRowRenderStage::Actions => self.actions.is_some(),
        }
    }

    fn stage_tag_name(stage: SummaryListRowRenderStage) -> &'static str {
        match stage {
            SummaryListRowRenderStage::None => ROW_TAG_NAME,
            SummaryListRowRenderStage::Key => ROW_KEY_TAG_NAME,
            SummaryListRowRenderStage::Value => ROW_VALUE_TAG_NAME,
            SummaryListRowRenderStage::Actions => ROW_ACTIONS_TAG_NAME,
        }
    }

    /// # Errors
    ///
    /// Fails on a second key or when the value or actions were already set.
    pub fn set_key(&mut self, key: SummaryListRowPart) -> Result<(), RenderError> {
        self.check_stage(SummaryListRowRenderStage::Key, ROW_KEY_TAG_NAME)?;
        self.key = Some(key);
        self.render_stage = SummaryListRowRenderStage::Key;
        Ok(())
    }

    /// # Errors
    ///
    /// Fails on a second value or when the actions were already set.
    pub fn set_value(&mut self, value: SummaryListRowPart) -> Result<(), RenderError> {
        self.check_stage(SummaryListRowRenderStage::Value, ROW_VALUE_TAG_NAME)?;
        self.value = Some(value);
        self.render_stage = SummaryListRowRenderStage::Value;
        Ok(())
    }

    /// # Errors
    ///
    /// Fails on a second set of actions.
    pub fn set_actions(&mut self, actions: SummaryListActions) -> Result<(), RenderError> {
        self.check_stage(SummaryListRowRenderStage::Actions, ROW_ACTIONS_TAG_NAME)?;
        self.actions = Some(actions);
        self.render_stage = SummaryListRowRenderStage::Actions;
        Ok(())
    }
}

/// Actions collected by `<govuk-summary-list-row-actions>`.
#[derive(Clone, Debug, Default)]
pub struct SummaryListRowActionsContext {
    items: Vec<SummaryListAction>,
}

impl SummaryListRowActionsContext {
    /// Append a row action.
    pub fn add_action(&mut self, action: SummaryListAction) {
        self.items.push(action);
    }
}

/// Actions collected by `<govuk-summary-card-actions>`.
#[derive(Clone, Debug, Default)]
pub struct SummaryCardActionsContext {
    items: Vec<SummaryListAction>,
}

impl SummaryCardActionsContext {
    /// Append a card action.
    pub fn add_action(&mut self, action: SummaryListAction) {
        self.items.push(action);
    }
}

fn actions_element(actions: &[SummaryListAction], list_class: &str, item_class: &str) -> HtmlElement {
    if let [action] = actions {
        return action.to_element();
    }
    let mut list = HtmlElement::new("ul").with_class(list_class);
    for action in actions {
        list.push_child(
            HtmlElement::new("li")
                .with_class(item_class)
                .with_child(action.to_element()),
        );
    }
    list
}

/// `<govuk-summary-list>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SummaryListTagHelper;

impl SummaryListTagHelper {
    fn generate(rows: &[SummaryListRow], attributes: &AttributeDictionary) -> HtmlElement {
        let any_row_has_actions = rows.iter().any(SummaryListRow::has_actions);

        let mut list = HtmlElement::new("dl")
            .with_class("govuk-summary-list")
            .with_merged_attributes(attributes);

        for row in rows {
            let mut row_element = HtmlElement::new("div")
                .with_class("govuk-summary-list__row")
                .with_class_if(
                    any_row_has_actions && !row.has_actions(),
                    "govuk-summary-list__row--no-actions",
                )
                .with_merged_attributes(&row.attributes)
                .with_child(
                    HtmlElement::new("dt")
                        .with_class("govuk-summary-list__key")
                        .with_merged_attributes(&row.key.attributes)
                        .with_html(row.key.content.clone()),
                );

            let value = row.value.clone().unwrap_or_default();
            row_element.push_child(
                HtmlElement::new("dd")
                    .with_class("govuk-summary-list__value")
                    .with_merged_attributes(&value.attributes)
                    .with_html(value.content),
            );

            if let Some(actions) = row.actions.as_ref().filter(|actions| !actions.items.is_empty()) {
                row_element.push_child(
                    HtmlElement::new("dd")
                        .with_class("govuk-summary-list__actions")
                        .with_merged_attributes(&actions.attributes)
                        .with_child(actions_element(
                            &actions.items,
                            "govuk-summary-list__actions-list",
                            "govuk-summary-list__actions-list-item",
                        )),
                );
            }

            list.push_child(row_element);
        }

        list
    }
}

impl TagHelper for SummaryListTagHelper {
    fn tag_name(&self) -> &'static str {
        TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        // A list directly inside a card belongs to the card; lists nested
        // further down (e.g. in a row value) render in place.
        let in_card = context.items().contains::<SummaryCardContext>()
            && !context.items().contains::<SummaryListContext>();

        let (summary_list, _) = context.scoped(SummaryListContext::default(), |context| {
            context.child_content()
        })?;
        let list = Self::generate(&summary_list.rows, &output.take_attributes());

        if in_card {
            context
                .parent_mut::<SummaryCardContext>(TAG_NAME, CARD_TAG_NAME)?
                .set_summary_list(list.to_html_string())?;
            output.suppress_output();
        } else {
            output.write_element(list);
        }
        Ok(())
    }
}

/// `<govuk-summary-list-row>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SummaryListRowTagHelper;

impl TagHelper for SummaryListRowTagHelper {
    fn tag_name(&self) -> &'static str {
        ROW_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<SummaryListContext>(ROW_TAG_NAME, TAG_NAME)?;

        let (row, _) = context.scoped(SummaryListRowContext::new(), |context| {
            context.child_content()
        })?;
        let key = row
            .key
            .ok_or_else(|| RenderError::child_must_be_provided(ROW_KEY_TAG_NAME))?;

        let row = SummaryListRow {
            attributes: output.take_attributes(),
            key,
            value: row.value,
            actions: row.actions,
        };
        context
            .parent_mut::<SummaryListContext>(ROW_TAG_NAME, TAG_NAME)?
            .add_row(row);
        output.suppress_output();
        Ok(())
    }
}

/// `<govuk-summary-list-row-key>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SummaryListRowKeyTagHelper;

impl TagHelper for SummaryListRowKeyTagHelper {
    fn tag_name(&self) -> &'static str {
        ROW_KEY_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<SummaryListRowContext>(ROW_KEY_TAG_NAME, ROW_TAG_NAME)?;
        let key = SummaryListRowPart {
            attributes: output.take_attributes(),
            content: context.child_content()?,
        };
        context
            .parent_mut::<SummaryListRowContext>(ROW_KEY_TAG_NAME, ROW_TAG_NAME)?
            .set_key(key)?;
        output.suppress_output();
        Ok(())
    }
}

/// `<govuk-summary-list-row-value>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SummaryListRowValueTagHelper;

impl TagHelper for SummaryListRowValueTagHelper {
    fn tag_name(&self) -> &'static str {
        ROW_VALUE_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<SummaryListRowContext>(ROW_VALUE_TAG_NAME, ROW_TAG_NAME)?;
        let value = SummaryListRowPart {
            attributes: output.take_attributes(),
            content: context.child_content()?,
        };
        context
            .parent_mut::<SummaryListRowContext>(ROW_VALUE_TAG_NAME, ROW_TAG_NAME)?
            .set_value(value)?;
        output.suppress_output();
        Ok(())
    }
}

/// `<govuk-summary-list-row-actions>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SummaryListRowActionsTagHelper;

impl TagHelper for SummaryListRowActionsTagHelper {
    fn tag_name(&self) -> &'static str {
        ROW_ACTIONS_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<SummaryListRowContext>(ROW_ACTIONS_TAG_NAME, ROW_TAG_NAME)?;
        let (actions, _) = context.scoped(SummaryListRowActionsContext::default(), |context| {
            context.child_content()
        })?;
        let actions = SummaryListActions {
            attributes: output.take_attributes(),
            items: actions.items,
        };
        context
            .parent_mut::<SummaryListRowContext>(ROW_ACTIONS_TAG_NAME, ROW_TAG_NAME)?
            .set_actions(actions)?;
        output.suppress_output();
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ActionOwner {
    Row,
    Card,
}

/// An action link. Used as both `<govuk-summary-list-row-action>` and
/// `<govuk-summary-card-action>`; each is only accepted inside its own
/// actions element.
#[derive(Clone, Debug)]
pub struct SummaryListActionTagHelper {
    owner: ActionOwner,
    href: String,
    visually_hidden_text: Option<String>,
}

impl SummaryListActionTagHelper {
    /// `<govuk-summary-list-row-action>`, inside
    /// `<govuk-summary-list-row-actions>`.
    #[must_use]
    pub fn row(href: impl Into<String>) -> Self {
        Self {
            owner: ActionOwner::Row,
            href: href.into(),
            visually_hidden_text: None,
        }
    }

    /// `<govuk-summary-card-action>`, inside `<govuk-summary-card-actions>`.
    #[must_use]
    pub fn card(href: impl Into<String>) -> Self {
        Self {
            owner: ActionOwner::Card,
            ..Self::row(href)
        }
    }

    /// Extra text for screen readers, e.g. the name of the row's key.
    #[must_use]
    pub fn with_visually_hidden_text(mut self, text: impl Into<String>) -> Self {
        self.visually_hidden_text = Some(text.into());
        self
    }

    fn parent_tag_name(&self) -> &'static str {
        match self.owner {
            ActionOwner::Row => ROW_ACTIONS_TAG_NAME,
            ActionOwner::Card => CARD_ACTIONS_TAG_NAME,
        }
    }
}

impl TagHelper for SummaryListActionTagHelper {
    fn tag_name(&self) -> &'static str {
        match self.owner {
            ActionOwner::Row => ROW_ACTION_TAG_NAME,
            ActionOwner::Card => CARD_ACTION_TAG_NAME,
        }
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let tag_name = self.tag_name();
        let parent_tag_name = self.parent_tag_name();
        match self.owner {
            ActionOwner::Row => {
                context.ensure_parent::<SummaryListRowActionsContext>(tag_name, parent_tag_name)?;
            }
            ActionOwner::Card => {
                context.ensure_parent::<SummaryCardActionsContext>(tag_name, parent_tag_name)?;
            }
        }
        let action = SummaryListAction {
            href: self.href.clone(),
            visually_hidden_text: self.visually_hidden_text.clone(),
            attributes: output.take_attributes(),
            content: context.child_content()?,
        };
        match self.owner {
            ActionOwner::Row => context
                .parent_mut::<SummaryListRowActionsContext>(tag_name, parent_tag_name)?
                .add_action(action),
            ActionOwner::Card => context
                .parent_mut::<SummaryCardActionsContext>(tag_name, parent_tag_name)?
                .add_action(action),
        }
        output.suppress_output();
        Ok(())
    }
}

/// A card's title.
#[derive(Clone, Debug, Default)]
pub struct SummaryCardTitle {
    pub heading_level: Option<u8>,
    pub attributes: AttributeDictionary,
    pub content: HtmlString,
}

/// Title, actions, then the summary list.
#[derive(Clone, Debug, Default)]
pub struct SummaryCardContext {
    title: Option<SummaryCardTitle>,
    actions: Option<SummaryListActions>,
    summary_list: Option<HtmlString>,
}

impl SummaryCardContext {
    /// # Errors
    ///
    /// Fails on a second title or when the actions or summary list were
    /// already set.
    pub fn set_title(&mut self, title: SummaryCardTitle) -> Result<(), RenderError> {
        if self.title.is_some() {
            return Err(RenderError::only_one(CARD_TITLE_TAG_NAME, CARD_TAG_NAME));
        }
        if let Some(later) = self.first_set_after_title() {
            return Err(RenderError::must_be_specified_before(CARD_TITLE_TAG_NAME, later));
        }
        self.title = Some(title);
        Ok(())
    }

    /// # Errors
    ///
    /// Fails on a second set of actions or when the summary list was
    /// already set.
    pub fn set_actions(&mut self, actions: SummaryListActions) -> Result<(), RenderError> {
        if self.actions.is_some() {
            return Err(RenderError::only_one(CARD_ACTIONS_TAG_NAME, CARD_TAG_NAME));
        }
        if self.summary_list.is_some() {
            return Err(RenderError::must_be_specified_before(CARD_ACTIONS_TAG_NAME, TAG_NAME));
        }
        self.actions = Some(actions);
        Ok(())
    }

    /// # Errors
    ///
    /// Fails on a second summary list.
    pub fn set_summary_list(&mut self, summary_list: HtmlString) -> Result<(), RenderError> {
        if self.summary_list.is_some() {
            return Err(RenderError::only_one(TAG_NAME, CARD_TAG_NAME));
        }
        self.summary_list = Some(summary_list);
        Ok(())
    }

    fn first_set_after_title(&self) -> Option<&'static str> {
        if self.actions.is_some() {
            Some(CARD_ACTIONS_TAG_NAME)
        } else if self.summary_list.is_some() {
            Some(TAG_NAME)
        } else {
            None
        }
    }
}

/// `<govuk-summary-card>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SummaryCardTagHelper;

impl TagHelper for SummaryCardTagHelper {
    fn tag_name(&self) -> &'static str {
        CARD_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        let (card, _) = context.scoped(SummaryCardContext::default(), |context| {
            context.child_content()
        })?;
        let title = card
            .title
            .ok_or_else(|| RenderError::child_must_be_provided(CARD_TITLE_TAG_NAME))?;
        let summary_list = card
            .summary_list
            .ok_or_else(|| RenderError::child_must_be_provided(TAG_NAME))?;

        let title_wrapper = HtmlElement::new("div")
            .with_class("govuk-summary-card__title-wrapper")
            .with_child(
                HtmlElement::new(heading_tag(title.heading_level.unwrap_or(2)))
                    .with_class("govuk-summary-card__title")
                    .with_merged_attributes(&title.attributes)
                    .with_html(title.content),
            )
            .with_child_opt(
                card.actions
                    .filter(|actions| !actions.items.is_empty())
                    .map(|actions| {
                        let element = actions_element(
                            &actions.items,
                            "govuk-summary-card__actions",
                            "govuk-summary-card__action",
                        );
                        let element = if actions.items.len() == 1 {
                            HtmlElement::new("div")
                                .with_class("govuk-summary-card__actions")
                                .with_child(element)
                        } else {
                            element
                        };
                        element.with_merged_attributes(&actions.attributes)
                    }),
            );

        let element = HtmlElement::new("div")
            .with_class("govuk-summary-card")
            .with_merged_attributes(&output.take_attributes())
            .with_child(title_wrapper)
            .with_child(
                HtmlElement::new("div")
                    .with_class("govuk-summary-card__content")
                    .with_html(summary_list),
            );

        output.write_element(element);
        Ok(())
    }
}

/// `<govuk-summary-card-title>`.
#[derive(Clone, Debug, Default)]
pub struct SummaryCardTitleTagHelper {
    heading_level: Option<u8>,
}

impl SummaryCardTitleTagHelper {
    /// A title rendered as an `h2`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns a range error unless `level` is between 1 and 6.
    pub fn with_heading_level(mut self, level: u8) -> Result<Self, RenderError> {
        self.heading_level = Some(validate_heading_level(level)?);
        Ok(self)
    }
}

impl TagHelper for SummaryCardTitleTagHelper {
    fn tag_name(&self) -> &'static str {
        CARD_TITLE_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<SummaryCardContext>(CARD_TITLE_TAG_NAME, CARD_TAG_NAME)?;
        let content = non_empty(context.child_content()?)
            .ok_or_else(|| RenderError::Configuration("Summary card title content is required.".to_owned()))?;
        let title = SummaryCardTitle {
            heading_level: self.heading_level,
            attributes: output.take_attributes(),
            content,
        };
        context
            .parent_mut::<SummaryCardContext>(CARD_TITLE_TAG_NAME, CARD_TAG_NAME)?
            .set_title(title)?;
        output.suppress_output();
        Ok(())
    }
}

/// `<govuk-summary-card-actions>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SummaryCardActionsTagHelper;

impl TagHelper for SummaryCardActionsTagHelper {
    fn tag_name(&self) -> &'static str {
        CARD_ACTIONS_TAG_NAME
    }

    fn process(
        &self,
        context: &mut TagHelperContext<'_, '_>,
        output: &mut TagHelperOutput,
    ) -> Result<(), RenderError> {
        context.ensure_parent::<SummaryCardContext>(CARD_ACTIONS_TAG_NAME, CARD_TAG_NAME)?;
        let (actions, _) = context.scoped(SummaryCardActionsContext::default(), |context| {
            context.child_content()
        })?;
        let actions = SummaryListActions {
            attributes: output.take_attributes(),
            items: actions.items,
        };
        context
            .parent_mut::<SummaryCardContext>(CARD_ACTIONS_TAG_NAME, CARD_TAG_NAME)?
            .set_actions(actions)?;
        output.suppress_output();
        Ok(())
    }
}
