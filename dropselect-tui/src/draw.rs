//! Turns dropdown views into styled screen lines.

use dropselect::{MenuView, RowView, SelectionValue};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, Panel};

/// One screen row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub bold: bool,
    pub dim: bool,
    pub reverse: bool,
}

impl Line {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim_if(mut self, dim: bool) -> Self {
        self.dim = dim;
        self
    }

    pub fn reverse_if(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}

fn selected_text(value: &SelectionValue) -> String {
    value.values().join(", ")
}

/// Lay out every panel top to bottom, followed by the key help.
pub fn lines(app: &App) -> Vec<Line> {
    let mut out = vec![Line::plain("dropselect demo").bold(), Line::default()];
    for (i, panel) in app.panels().iter().enumerate() {
        panel_lines(panel, i == app.focus(), &mut out);
        out.push(Line::default());
    }
    out.push(
        Line::plain(
            "Tab/Shift-Tab: switch  Enter/Space/Down: open  Esc: close  a/d: select/deselect all  q: quit",
        )
        .dim_if(true),
    );
    out
}

fn panel_lines(panel: &Panel, focused: bool, out: &mut Vec<Line>) {
    let dropdown = panel.dropdown();
    let view = dropdown.view();
    let marker = if focused { '›' } else { ' ' };

    out.push(Line::plain(format!("{marker} {}", panel.title())).bold());
    out.push(
        Line::plain(format!(
            "  [ {} {} ]",
            view.button.text,
            if view.open { '▴' } else { '▾' }
        ))
        .dim_if(view.button.disabled || view.button.is_placeholder)
        .reverse_if(focused && !view.open),
    );

    if view.open {
        menu_lines(&view, dropdown.selection().is_multiple(), out);
    }

    let last = panel
        .last_committed()
        .map(selected_text)
        .unwrap_or_default();
    out.push(Line::plain(format!("  Selected: {last}")).dim_if(true));
}

fn menu_lines(view: &MenuView, multiple: bool, out: &mut Vec<Line>) {
    if let Some(search) = &view.search {
        if search.term.is_empty() {
            out.push(Line::plain(format!("    {}", search.placeholder)).dim_if(true));
        } else {
            out.push(Line::plain(format!("    {}_", search.term)));
        }
    }
    if let Some(actions) = &view.actions {
        out.push(
            Line::plain(format!(
                "    (a) {}  (d) {}",
                actions.select_all, actions.deselect_all
            ))
            .dim_if(true),
        );
    }
    if let Some(limit) = &view.limit {
        out.push(Line::plain(format!("    {limit}")).bold());
    }

    for row in &view.rows {
        match row {
            RowView::Header(label) => out.push(Line::plain(format!("    {label}")).bold()),
            RowView::Divider => out.push(Line::plain("    ────────").dim_if(true)),
            RowView::NoResults(text) => out.push(Line::plain(format!("    {text}")).dim_if(true)),
            RowView::Option(option) => {
                let check = match (multiple, option.selected) {
                    (true, true) => "[x]",
                    (true, false) => "[ ]",
                    (false, _) if option.tick => " ✓ ",
                    (false, _) => "   ",
                };
                let subtext = option
                    .subtext
                    .as_deref()
                    .map(|s| format!("  {s}"))
                    .unwrap_or_default();
                out.push(
                    Line::plain(format!("    {check} {}{subtext}", option.label))
                        .dim_if(option.disabled)
                        .reverse_if(option.focused),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_fits() {
        assert_eq!(truncate_to_width("Mustard", 10), "Mustard");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Toilet Paper", 6), "Toile…");
        assert_eq!(truncate_to_width("Toilet Paper", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        assert_eq!(truncate_to_width("日本語", 4), "日…");
    }
}
