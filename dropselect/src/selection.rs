//! Selected values and the commit protocol.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::option::FlatList;

/// Single or multiple selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one value; picking a value closes the dropdown.
    #[default]
    Single,
    /// Any number of values, up to an optional limit.
    Multiple,
}

/// A selection as seen from outside: the committed payload, or the
/// externally controlled value handed in by the host.
///
/// Serializes as a bare string or an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectionValue {
    /// Single mode; the empty string means nothing is selected.
    Single(String),
    Multiple(Vec<String>),
}

impl SelectionValue {
    /// Selected values in order, dropping the single-mode empty string.
    pub fn values(&self) -> Vec<&str> {
        match self {
            SelectionValue::Single(value) if value.is_empty() => Vec::new(),
            SelectionValue::Single(value) => vec![value.as_str()],
            SelectionValue::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

impl Default for SelectionValue {
    fn default() -> Self {
        SelectionValue::Single(String::new())
    }
}

/// The set of selected values.
///
/// In multiple mode insertion order is display order. Every mutating call
/// returns the committed payload on success and `None` when nothing changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    mode: SelectionMode,
    values: IndexSet<String>,
    max_options: Option<usize>,
}

impl SelectionState {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            values: IndexSet::new(),
            max_options: None,
        }
    }

    pub fn single() -> Self {
        Self::new(SelectionMode::Single)
    }

    pub fn multiple() -> Self {
        Self::new(SelectionMode::Multiple)
    }

    /// Cap the number of values in multiple mode. A cap of zero means no cap.
    pub fn with_max_options(mut self, max: Option<usize>) -> Self {
        self.max_options = max.filter(|&max| max > 0);
        self
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn max_options(&self) -> Option<usize> {
        self.max_options
    }

    pub fn is_multiple(&self) -> bool {
        self.mode == SelectionMode::Multiple
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Whether adding another value would be rejected.
    pub fn is_limit_reached(&self) -> bool {
        self.is_multiple() && self.max_options.is_some_and(|max| self.values.len() >= max)
    }

    /// The payload a commit reports for the current state.
    pub fn payload(&self) -> SelectionValue {
        match self.mode {
            SelectionMode::Single => {
                SelectionValue::Single(self.values.first().cloned().unwrap_or_default())
            }
            SelectionMode::Multiple => SelectionValue::Multiple(self.values.iter().cloned().collect()),
        }
    }

    /// Pick `value`.
    ///
    /// Single mode replaces the selection. Multiple mode toggles the value,
    /// refusing to add past the limit.
    pub fn select(&mut self, value: &str) -> Option<SelectionValue> {
        match self.mode {
            SelectionMode::Single => {
                self.values.clear();
                self.values.insert(value.to_string());
            }
            SelectionMode::Multiple => {
                if self.values.contains(value) {
                    self.values.shift_remove(value);
                } else if self.is_limit_reached() {
                    log::debug!(
                        "SelectionState::select rejected value={} limit={:?}",
                        value,
                        self.max_options
                    );
                    return None;
                } else {
                    self.values.insert(value.to_string());
                }
            }
        }
        Some(self.payload())
    }

    /// Select every value in `list`, truncated to the limit. Multiple mode only.
    pub fn select_all(&mut self, list: &FlatList) -> Option<SelectionValue> {
        if !self.is_multiple() {
            return None;
        }
        let limit = self.max_options.unwrap_or(usize::MAX);
        self.values = list.values().take(limit).map(str::to_string).collect();
        Some(self.payload())
    }

    /// Clear the selection. Multiple mode only.
    pub fn deselect_all(&mut self) -> Option<SelectionValue> {
        if !self.is_multiple() {
            return None;
        }
        self.values.clear();
        Some(self.payload())
    }

    /// Replace the selection with an externally controlled value.
    ///
    /// A list handed to a single select keeps its first entry; a bare string
    /// handed to a multiple select clears the selection.
    pub fn set_value(&mut self, value: &SelectionValue) {
        self.values = match (self.mode, value) {
            (SelectionMode::Single, SelectionValue::Single(v)) if v.is_empty() => IndexSet::new(),
            (SelectionMode::Single, SelectionValue::Single(v)) => IndexSet::from([v.clone()]),
            (SelectionMode::Single, SelectionValue::Multiple(vs)) => {
                vs.iter().take(1).cloned().collect()
            }
            (SelectionMode::Multiple, SelectionValue::Multiple(vs)) => vs.iter().cloned().collect(),
            (SelectionMode::Multiple, SelectionValue::Single(_)) => IndexSet::new(),
        };
    }

    /// Drop every value for which `keep` returns false.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.values.retain(|value| keep(value));
    }
}
