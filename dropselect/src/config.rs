//! Dropdown configuration (the component's props).

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::filter::SearchStyle;
use crate::sanitize::{CustomSanitizer, Whitelist};
use crate::selection::SelectionMode;
use crate::template::Texts;

/// What the `{1}` of the "{0} of {1} selected" text counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CountTotal {
    /// Options currently visible, after search filtering.
    #[default]
    Filtered,
    /// Every enabled option, ignoring the search term.
    Universe,
}

/// Width of the dropdown container.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Width {
    Pixels(u32),
    /// Any CSS width, `auto` included.
    Css(String),
}

impl Default for Width {
    fn default() -> Self {
        Width::Css("auto".into())
    }
}

impl Width {
    pub fn to_css(&self) -> String {
        match self {
            Width::Pixels(px) => format!("{px}px"),
            Width::Css(css) => css.clone(),
        }
    }
}

/// Per-dropdown configuration.
///
/// Deserializes from camelCase JSON props; closures (custom search predicate,
/// custom sanitizer) can only be set through the builder.
///
/// # Example
///
/// ```
/// use dropselect::SelectConfig;
///
/// let config = SelectConfig::new()
///     .multiple()
///     .actions_box()
///     .max_options(3)
///     .placeholder("Choose condiments...");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectConfig {
    pub multiple: bool,
    pub disabled: bool,
    pub searchable: bool,
    pub search_style: SearchStyle,
    /// Strip diacritics before matching.
    pub search_normalize: bool,
    /// Show the "Select All" / "Deselect All" buttons (multiple mode).
    pub actions_box: bool,
    pub show_tick: bool,
    pub show_subtext: bool,
    pub max_options: Option<usize>,
    pub count_total: CountTotal,
    /// Run option labels through the sanitizer before rendering.
    pub sanitize: bool,
    /// Replaces the default whitelist.
    #[serde(rename = "whiteList", alias = "whitelist")]
    pub whitelist: Option<Whitelist>,
    #[serde(skip)]
    pub sanitize_fn: Option<CustomSanitizer>,
    /// Button style class.
    pub style: String,
    pub class_name: String,
    pub width: Width,
    pub dropup: bool,
    pub id: Option<String>,
    #[serde(flatten)]
    pub texts: Texts,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            multiple: false,
            disabled: false,
            searchable: false,
            search_style: SearchStyle::default(),
            search_normalize: false,
            actions_box: false,
            show_tick: false,
            show_subtext: true,
            max_options: None,
            count_total: CountTotal::default(),
            sanitize: true,
            whitelist: None,
            sanitize_fn: None,
            style: "btn-light".into(),
            class_name: String::new(),
            width: Width::default(),
            dropup: false,
            id: None,
            texts: Texts::default(),
        }
    }
}

impl SelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate JSON props.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate JSON props from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_options == Some(0) {
            return Err(ConfigError::Invalid("maxOptions must be at least 1".into()));
        }
        Ok(())
    }

    pub fn selection_mode(&self) -> SelectionMode {
        if self.multiple {
            SelectionMode::Multiple
        } else {
            SelectionMode::Single
        }
    }

    /// The whitelist in effect: the override, or the default.
    pub fn effective_whitelist(&self) -> Whitelist {
        self.whitelist.clone().unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Builder
    // -------------------------------------------------------------------------

    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub fn search_style(mut self, style: SearchStyle) -> Self {
        self.search_style = style;
        self
    }

    pub fn search_normalize(mut self) -> Self {
        self.search_normalize = true;
        self
    }

    pub fn actions_box(mut self) -> Self {
        self.actions_box = true;
        self
    }

    pub fn show_tick(mut self) -> Self {
        self.show_tick = true;
        self
    }

    pub fn hide_subtext(mut self) -> Self {
        self.show_subtext = false;
        self
    }

    /// Cap multiple-mode selections. `validate()` rejects 0; unvalidated, 0 means no cap.
    pub fn max_options(mut self, max: usize) -> Self {
        self.max_options = Some(max);
        self
    }

    pub fn count_total(mut self, count: CountTotal) -> Self {
        self.count_total = count;
        self
    }

    /// Render labels as escaped text instead of sanitized markup.
    pub fn without_sanitize(mut self) -> Self {
        self.sanitize = false;
        self
    }

    pub fn whitelist(mut self, whitelist: Whitelist) -> Self {
        self.whitelist = Some(whitelist);
        self
    }

    pub fn sanitize_fn(mut self, f: CustomSanitizer) -> Self {
        self.sanitize_fn = Some(f);
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = class.into();
        self
    }

    pub fn width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    pub fn dropup(mut self) -> Self {
        self.dropup = true;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.texts.placeholder = text.into();
        self
    }

    pub fn search_placeholder(mut self, text: impl Into<String>) -> Self {
        self.texts.search_placeholder = text.into();
        self
    }

    pub fn texts(mut self, texts: Texts) -> Self {
        self.texts = texts;
        self
    }
}
