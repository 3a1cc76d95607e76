//! The dropdown controller.
//!
//! Owns the open/closed state, the search term, keyboard focus and the
//! selection, and turns discrete input events into state transitions.
//! Each transition is queued as a [`SelectEvent`] for the host to drain.

use std::borrow::Cow;

use crate::config::{CountTotal, SelectConfig};
use crate::event::SelectEvent;
use crate::filter::Query;
use crate::key::Key;
use crate::navigator::{KeyOutcome, NavAction, Navigator};
use crate::option::{Entry, FlatList, OptionSet, SelectOption, flatten};
use crate::sanitize::{Sanitizer, escape_text};
use crate::selection::{SelectionState, SelectionValue};
use crate::view::{ActionsView, ButtonView, MenuView, OptionRow, RowView, SearchView};

/// Where a pointer click landed relative to the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    /// The toggle button.
    Button,
    /// Anywhere inside the open menu.
    Menu,
    /// Anywhere else on the page.
    Outside,
}

/// A single/multiple select dropdown.
///
/// # Example
///
/// ```
/// use dropselect::{Dropdown, Key, OptionSet, SelectConfig, SelectEvent, SelectOption, SelectionValue};
///
/// let options = OptionSet::new([
///     SelectOption::new("x", "Fox").into(),
///     SelectOption::new("y", "Fax").into(),
/// ])
/// .unwrap();
/// let mut dropdown = Dropdown::new(SelectConfig::new().searchable(), options);
///
/// dropdown.open();
/// dropdown.set_search("Fo");
/// dropdown.handle_key(Key::Down);
/// dropdown.handle_key(Key::Enter);
///
/// assert_eq!(dropdown.value(), SelectionValue::Single("x".into()));
/// assert_eq!(
///     dropdown.take_events(),
///     vec![
///         SelectEvent::Opened,
///         SelectEvent::SelectionCommitted(SelectionValue::Single("x".into())),
///         SelectEvent::Closed,
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Dropdown {
    config: SelectConfig,
    options: OptionSet,
    selection: SelectionState,
    navigator: Navigator,
    search: String,
    sanitizer: Sanitizer,
    events: Vec<SelectEvent>,
}

impl Dropdown {
    /// Create a closed dropdown with nothing selected.
    pub fn new(config: SelectConfig, options: OptionSet) -> Self {
        let selection =
            SelectionState::new(config.selection_mode()).with_max_options(config.max_options);
        let sanitizer = Sanitizer::new(config.effective_whitelist());
        Self {
            config,
            options,
            selection,
            navigator: Navigator::new(),
            search: String::new(),
            sanitizer,
            events: Vec::new(),
        }
    }

    /// Set the initial externally controlled value.
    pub fn with_value(mut self, value: SelectionValue) -> Self {
        self.set_value(value);
        self
    }

    fn name(&self) -> &str {
        self.config.id.as_deref().unwrap_or("dropdown")
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The current value, shaped like a commit payload.
    pub fn value(&self) -> SelectionValue {
        self.selection.payload()
    }

    pub fn is_open(&self) -> bool {
        self.navigator.is_open()
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    /// Focused row in the current flattened list, if any.
    pub fn focused(&self) -> Option<usize> {
        self.navigator.focused_in(self.flattened().len())
    }

    /// The focused option, if any.
    pub fn focused_option(&self) -> Option<SelectOption> {
        let flat = self.flattened();
        self.navigator
            .focused_in(flat.len())
            .and_then(|i| flat.get(i).cloned())
    }

    /// Entries matching the current search term.
    pub fn filtered(&self) -> Cow<'_, [Entry]> {
        Query::with_normalization(
            &self.search,
            &self.config.search_style,
            self.config.search_normalize,
        )
        .apply(self.options.entries())
    }

    /// Enabled options matching the current search term, in display order.
    pub fn flattened(&self) -> FlatList {
        flatten(&self.filtered())
    }

    /// Drain queued notifications, oldest first.
    pub fn take_events(&mut self) -> Vec<SelectEvent> {
        std::mem::take(&mut self.events)
    }

    // -------------------------------------------------------------------------
    // Open / close
    // -------------------------------------------------------------------------

    /// Open the menu. No-op when disabled or already open.
    pub fn open(&mut self) {
        if self.config.disabled || self.is_open() {
            return;
        }
        log::debug!("Dropdown::open id={}", self.name());
        self.navigator.set_open(true);
        self.events.push(SelectEvent::Opened);
    }

    /// Close the menu, clearing the search term and focus.
    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }
        log::debug!("Dropdown::close id={}", self.name());
        self.navigator.set_open(false);
        self.search.clear();
        self.events.push(SelectEvent::Closed);
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// React to a pointer click. Clicks outside the button and menu close it.
    pub fn click(&mut self, region: HitRegion) {
        match region {
            HitRegion::Button => self.toggle(),
            HitRegion::Menu => {}
            HitRegion::Outside => self.close(),
        }
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Replace the search term. Ignored unless searchable and open.
    pub fn set_search(&mut self, term: impl Into<String>) {
        if !self.config.searchable || !self.is_open() {
            return;
        }
        let term = term.into();
        if term == self.search {
            return;
        }
        log::debug!("Dropdown::set_search id={} term={:?}", self.name(), term);
        self.search = term;
        self.navigator.clear_focus();
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut term = self.search.clone();
        term.push(c);
        self.set_search(term);
    }

    pub fn pop_search_char(&mut self) {
        let mut term = self.search.clone();
        if term.pop().is_some() {
            self.set_search(term);
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard and pointer selection
    // -------------------------------------------------------------------------

    /// Feed a key press. Keys are ignored while closed.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::ignored();
        }
        let flat = self.flattened();
        let outcome = self.navigator.handle_key(key, flat.as_slice());
        match &outcome.action {
            NavAction::Commit(value) => {
                self.commit(value);
            }
            NavAction::Close => self.close(),
            NavAction::Ignored | NavAction::Noop | NavAction::Focus(_) => {}
        }
        outcome
    }

    /// Pick an option by pointer. Returns whether the selection changed.
    pub fn click_option(&mut self, value: &str) -> bool {
        if !self.is_open() {
            return false;
        }
        self.commit(value)
    }

    fn commit(&mut self, value: &str) -> bool {
        if !self.options.is_enabled(value) {
            log::debug!(
                "Dropdown::commit id={} ignoring unknown or disabled value={}",
                self.name(),
                value
            );
            return false;
        }
        let Some(payload) = self.selection.select(value) else {
            return false;
        };
        log::debug!("Dropdown::commit id={} payload={:?}", self.name(), payload);
        self.events.push(SelectEvent::SelectionCommitted(payload));
        if !self.selection.is_multiple() {
            self.close();
        }
        true
    }

    /// Select every visible option, up to the limit. Multiple mode only.
    pub fn select_all(&mut self) {
        let flat = self.flattened();
        if let Some(payload) = self.selection.select_all(&flat) {
            log::debug!("Dropdown::select_all id={} payload={:?}", self.name(), payload);
            self.events.push(SelectEvent::SelectionCommitted(payload));
        }
    }

    /// Clear the selection. Multiple mode only.
    pub fn deselect_all(&mut self) {
        if let Some(payload) = self.selection.deselect_all() {
            log::debug!("Dropdown::deselect_all id={}", self.name());
            self.events.push(SelectEvent::SelectionCommitted(payload));
        }
    }

    // -------------------------------------------------------------------------
    // Host-driven updates
    // -------------------------------------------------------------------------

    /// Sync the externally controlled value. Emits no commit.
    ///
    /// Values missing from the option set are dropped.
    pub fn set_value(&mut self, value: SelectionValue) {
        self.selection.set_value(&value);
        let options = &self.options;
        self.selection.retain(|v| options.contains(v));
    }

    /// Replace the option universe, dropping selected values it lacks.
    pub fn set_options(&mut self, options: OptionSet) {
        self.options = options;
        let options = &self.options;
        self.selection.retain(|v| options.contains(v));
        self.navigator.clear_focus();
    }

    // -------------------------------------------------------------------------
    // Display
    // -------------------------------------------------------------------------

    /// Whether the selection is at its limit.
    pub fn is_limit_reached(&self) -> bool {
        self.selection.is_limit_reached()
    }

    /// The limit-reached notice, while the limit is reached.
    pub fn limit_text(&self) -> Option<String> {
        self.selection
            .max_options()
            .filter(|_| self.is_limit_reached())
            .map(|max| self.config.texts.limit_reached(max))
    }

    /// Text shown on the toggle button.
    ///
    /// A single label is looked up in the current flattened list and falls
    /// back to the raw value. Several values render the count template.
    pub fn button_text(&self) -> String {
        let flat = self.flattened();
        let count = self.selection.len();
        match self.selection.values().next() {
            None => self.config.texts.placeholder.clone(),
            Some(first) if count == 1 || !self.selection.is_multiple() => flat
                .label_of(first)
                .map(|label| self.sanitizer.plain_text(label))
                .unwrap_or_else(|| first.to_string()),
            Some(_) => {
                let total = match self.config.count_total {
                    CountTotal::Filtered => flat.len(),
                    CountTotal::Universe => flatten(self.options.entries()).len(),
                };
                self.config.texts.count_selected(count, total)
            }
        }
    }

    /// Label markup for rendering: sanitized, or escaped when sanitizing is
    /// turned off.
    pub fn label_html(&self, label: &str) -> String {
        if !self.config.sanitize {
            return escape_text(label);
        }
        match &self.config.sanitize_fn {
            Some(custom) => custom.call(&self.sanitizer.parse(label)),
            None => self.sanitizer.sanitize(label),
        }
    }

    /// Snapshot of everything a renderer needs.
    pub fn view(&self) -> MenuView {
        let open = self.is_open();
        let button = ButtonView {
            text: self.button_text(),
            is_placeholder: self.selection.is_empty(),
            disabled: self.config.disabled,
        };

        if !open {
            return MenuView {
                button,
                open,
                search: None,
                actions: None,
                rows: Vec::new(),
                limit: None,
            };
        }

        let entries = self.filtered();
        let flat = flatten(&entries);
        let focus = self.navigator.focused_in(flat.len());

        let mut rows = Vec::new();
        if entries.is_empty() {
            rows.push(RowView::NoResults(self.config.texts.no_results(&self.search)));
        }
        for (i, entry) in entries.iter().enumerate() {
            match entry {
                Entry::Group(group) => {
                    rows.push(RowView::Header(group.label.clone()));
                    for option in &group.options {
                        let row = self.option_row(option, group.is_enabled(option), &flat, focus);
                        rows.push(RowView::Option(row));
                    }
                    if i + 1 < entries.len() {
                        rows.push(RowView::Divider);
                    }
                }
                Entry::Option(option) => {
                    let row = self.option_row(option, !option.disabled, &flat, focus);
                    rows.push(RowView::Option(row));
                }
            }
        }

        let texts = &self.config.texts;
        MenuView {
            button,
            open,
            search: self.config.searchable.then(|| SearchView {
                term: self.search.clone(),
                placeholder: texts.search_placeholder.clone(),
            }),
            actions: (self.config.actions_box && self.selection.is_multiple()).then(|| {
                ActionsView {
                    select_all: texts.select_all_text.clone(),
                    deselect_all: texts.deselect_all_text.clone(),
                }
            }),
            rows,
            limit: self.limit_text(),
        }
    }

    fn option_row(
        &self,
        option: &SelectOption,
        enabled: bool,
        flat: &FlatList,
        focus: Option<usize>,
    ) -> OptionRow {
        let index = if enabled {
            flat.position(&option.value)
        } else {
            None
        };
        let selected = self.selection.is_selected(&option.value);
        let markup = option.content.as_deref().unwrap_or(&option.label);

        OptionRow {
            value: option.value.clone(),
            label: self.sanitizer.plain_text(markup),
            label_html: self.label_html(markup),
            subtext: option.subtext.clone().filter(|_| self.config.show_subtext),
            icon: option.icon.clone(),
            selected,
            focused: index.is_some() && index == focus,
            disabled: !enabled,
            tick: self.config.show_tick && selected,
            index,
        }
    }
}
