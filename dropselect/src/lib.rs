//! Headless single/multi-select dropdown.
//!
//! The crate models the behavior of a searchable select box without tying it
//! to a rendering backend:
//!
//! - [`filter`]: search-as-you-type over options and groups;
//! - [`navigator`]: keyboard focus over the filtered, flattened list;
//! - [`selection`]: single or multiple selection with a size limit;
//! - [`sanitize`]: whitelist-based pruning of label markup;
//! - [`Dropdown`]: the controller tying these together and emitting
//!   [`SelectEvent`]s, with [`Dropdown::view`] and [`render_html`] for output.

pub mod config;
pub mod dropdown;
pub mod error;
pub mod event;
pub mod filter;
pub mod key;
pub mod navigator;
pub mod option;
pub mod render;
pub mod sanitize;
pub mod selection;
pub mod template;
pub mod view;

pub use config::{CountTotal, SelectConfig, Width};
pub use dropdown::{Dropdown, HitRegion};
pub use error::ConfigError;
pub use event::SelectEvent;
pub use filter::{MatchFn, Query, SearchStyle, filter};
pub use key::Key;
pub use navigator::{KeyOutcome, NavAction, Navigator};
pub use option::{Entry, FlatList, OptionGroup, OptionSet, SelectOption, flatten};
pub use render::render_html;
pub use sanitize::{Sanitizer, Whitelist, sanitize};
pub use selection::{SelectionMode, SelectionState, SelectionValue};
pub use template::{Texts, format_template};
pub use view::{MenuView, OptionRow, RowView};
