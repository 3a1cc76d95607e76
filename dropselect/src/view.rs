//! Render-ready snapshot of a dropdown.
//!
//! Built by [`Dropdown::view`](crate::Dropdown::view); consumed by the HTML
//! renderer and by terminal hosts alike.

/// The toggle button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub text: String,
    /// Showing the placeholder (nothing selected).
    pub is_placeholder: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    pub term: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionsView {
    pub select_all: String,
    pub deselect_all: String,
}

/// One selectable row in the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub value: String,
    /// Label with markup removed.
    pub label: String,
    /// Label markup, sanitized or escaped per configuration.
    pub label_html: String,
    pub subtext: Option<String>,
    pub icon: Option<String>,
    pub selected: bool,
    pub focused: bool,
    pub disabled: bool,
    /// Draw the check mark.
    pub tick: bool,
    /// Position in the flattened list; `None` for disabled rows.
    pub index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowView {
    Header(String),
    Divider,
    Option(OptionRow),
    NoResults(String),
}

/// Everything needed to draw the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub button: ButtonView,
    pub open: bool,
    pub search: Option<SearchView>,
    pub actions: Option<ActionsView>,
    /// Menu rows; empty while closed.
    pub rows: Vec<RowView>,
    /// Limit-reached notice, when the selection is full.
    pub limit: Option<String>,
}

impl MenuView {
    /// The option rows only, in display order.
    pub fn options(&self) -> impl Iterator<Item = &OptionRow> {
        self.rows.iter().filter_map(|row| match row {
            RowView::Option(option) => Some(option),
            _ => None,
        })
    }

    pub fn focused(&self) -> Option<&OptionRow> {
        self.options().find(|option| option.focused)
    }
}
