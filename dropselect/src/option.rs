//! Option model: single options, one-level groups and the flattened list.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A selectable option.
///
/// `value` is the unique key within an option set; `label` may contain
/// markup, which is passed through the sanitizer before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Markup shown instead of the label in the menu.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Extra search keywords matched alongside the label.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<String>,
}

impl SelectOption {
    /// Create an enabled option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            subtext: None,
            icon: None,
            content: None,
            tokens: Vec::new(),
        }
    }

    /// Mark the option as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the secondary text shown next to the label.
    pub fn subtext(mut self, subtext: impl Into<String>) -> Self {
        self.subtext = Some(subtext.into());
        self
    }

    /// Set the icon class.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set custom menu content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the search tokens.
    pub fn tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tokens = tokens.into_iter().map(Into::into).collect();
        self
    }
}

/// A labelled group of options. Groups do not nest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionGroup {
    pub label: String,
    pub options: Vec<SelectOption>,
    /// Disables every member of the group.
    #[serde(default)]
    pub disabled: bool,
}

impl OptionGroup {
    pub fn new(label: impl Into<String>, options: impl IntoIterator<Item = SelectOption>) -> Self {
        Self {
            label: label.into(),
            options: options.into_iter().collect(),
            disabled: false,
        }
    }

    /// Mark the whole group as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Whether `option` (a member of this group) can be focused or picked.
    pub fn is_enabled(&self, option: &SelectOption) -> bool {
        !self.disabled && !option.disabled
    }
}

/// Either a single option or a group of options.
///
/// Host data is told apart structurally: an object carrying an `options`
/// array is a group, anything else an option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Group(OptionGroup),
    Option(SelectOption),
}

impl Entry {
    pub fn label(&self) -> &str {
        match self {
            Entry::Group(group) => &group.label,
            Entry::Option(option) => &option.label,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Entry::Group(_))
    }

    /// Iterate every option in this entry with its effective enabled state.
    pub fn options(&self) -> Box<dyn Iterator<Item = (&SelectOption, bool)> + '_> {
        match self {
            Entry::Group(group) => Box::new(
                group
                    .options
                    .iter()
                    .map(move |option| (option, group.is_enabled(option))),
            ),
            Entry::Option(option) => Box::new(std::iter::once((option, !option.disabled))),
        }
    }
}

impl From<SelectOption> for Entry {
    fn from(option: SelectOption) -> Self {
        Entry::Option(option)
    }
}

impl From<OptionGroup> for Entry {
    fn from(group: OptionGroup) -> Self {
        Entry::Group(group)
    }
}

// -----------------------------------------------------------------------------
// Option set (the option universe)
// -----------------------------------------------------------------------------

/// The full option universe supplied by the host.
///
/// Values are unique across the whole set, groups included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    entries: Vec<Entry>,
}

impl OptionSet {
    /// Build an option set, rejecting duplicate values.
    pub fn new(entries: impl IntoIterator<Item = Entry>) -> Result<Self, ConfigError> {
        let entries: Vec<Entry> = entries.into_iter().collect();
        let mut seen = HashSet::new();
        for entry in &entries {
            for (option, _) in entry.options() {
                if !seen.insert(option.value.as_str()) {
                    return Err(ConfigError::Invalid(format!(
                        "duplicate option value '{}'",
                        option.value
                    )));
                }
            }
        }
        Ok(Self { entries })
    }

    /// Parse an option set from a JSON array of options and groups.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let entries: Vec<Entry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Load an option set from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an option by value anywhere in the universe.
    pub fn find(&self, value: &str) -> Option<&SelectOption> {
        self.iter_options()
            .map(|(option, _)| option)
            .find(|option| option.value == value)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.find(value).is_some()
    }

    /// Whether `value` exists and can be picked.
    pub fn is_enabled(&self, value: &str) -> bool {
        self.iter_options()
            .any(|(option, enabled)| enabled && option.value == value)
    }

    /// Number of options in the universe, disabled ones included.
    pub fn option_count(&self) -> usize {
        self.iter_options().count()
    }

    fn iter_options(&self) -> impl Iterator<Item = (&SelectOption, bool)> {
        self.entries.iter().flat_map(Entry::options)
    }
}

// -----------------------------------------------------------------------------
// Flattened list
// -----------------------------------------------------------------------------

/// Enabled options in display order, derived from a (filtered) entry list.
///
/// This is the list keyboard focus indexes into. It is rebuilt whenever the
/// entries or the search term change and never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatList {
    options: Vec<SelectOption>,
}

impl FlatList {
    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.options.get(index)
    }

    pub fn as_slice(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectOption> {
        self.options.iter()
    }

    /// Index of the option with `value`, if present.
    pub fn position(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|option| option.value == value)
    }

    /// Label of the option with `value`, if present.
    pub fn label_of(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|option| option.value.as_str())
    }
}

/// Depth-first flatten of `entries`, skipping disabled options and the
/// members of disabled groups.
pub fn flatten(entries: &[Entry]) -> FlatList {
    let options = entries
        .iter()
        .flat_map(Entry::options)
        .filter(|(_, enabled)| *enabled)
        .map(|(option, _)| option.clone())
        .collect();
    FlatList { options }
}
