//! HTML rendering in the bootstrap-select markup structure.

use crate::dropdown::Dropdown;
use crate::sanitize::{escape_attr, escape_text};
use crate::view::{MenuView, OptionRow, RowView};

/// Join the non-empty class names with spaces.
fn class_list(classes: &[&str]) -> String {
    classes
        .iter()
        .filter(|class| !class.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render `dropdown` as an HTML string.
///
/// Option labels are inserted as sanitized markup (or escaped text when
/// sanitizing is off); every other string is escaped.
pub fn render_html(dropdown: &Dropdown) -> String {
    let config = dropdown.config();
    let view = dropdown.view();
    let mut out = String::new();

    let container = class_list(&[
        "bootstrap-select",
        config.class_name.as_str(),
        if view.open { "show" } else { "" },
        if config.disabled { "disabled" } else { "" },
        if config.dropup { "dropup" } else { "" },
    ]);
    out.push_str(&format!(
        r#"<div class="{}" style="width: {}""#,
        escape_attr(&container),
        escape_attr(&config.width.to_css())
    ));
    if let Some(id) = &config.id {
        out.push_str(&format!(r#" id="{}""#, escape_attr(id)));
    }
    out.push('>');

    render_button(&view, &config.style, &mut out);
    if view.open {
        render_menu(&view, &mut out);
    }

    out.push_str("</div>");
    out
}

fn render_button(view: &MenuView, style: &str, out: &mut String) {
    let classes = class_list(&[
        "btn",
        "dropdown-toggle",
        style,
        if view.button.is_placeholder {
            "bs-placeholder"
        } else {
            ""
        },
    ]);
    out.push_str(&format!(
        r#"<button type="button" class="{}" aria-expanded="{}" aria-haspopup="listbox"{}>"#,
        escape_attr(&classes),
        view.open,
        if view.button.disabled { " disabled" } else { "" }
    ));
    out.push_str(r#"<span class="filter-option"><span class="filter-option-inner">"#);
    out.push_str(r#"<span class="filter-option-inner-inner">"#);
    out.push_str(&escape_text(&view.button.text));
    out.push_str("</span></span></span>");
    out.push_str(r#"<span class="bs-caret"><span class="caret"></span></span>"#);
    out.push_str("</button>");
}

fn render_menu(view: &MenuView, out: &mut String) {
    out.push_str(r#"<div class="dropdown-menu show"><div class="inner" role="listbox">"#);

    if let Some(search) = &view.search {
        out.push_str(&format!(
            r#"<div class="bs-searchbox"><input type="text" class="form-control" placeholder="{}" value="{}"></div>"#,
            escape_attr(&search.placeholder),
            escape_attr(&search.term)
        ));
    }

    if let Some(actions) = &view.actions {
        out.push_str(r#"<div class="bs-actionsbox"><div class="btn-group btn-group-sm btn-block">"#);
        out.push_str(&format!(
            r#"<button type="button" class="actions-btn bs-select-all btn btn-light">{}</button>"#,
            escape_text(&actions.select_all)
        ));
        out.push_str(&format!(
            r#"<button type="button" class="actions-btn bs-deselect-all btn btn-light">{}</button>"#,
            escape_text(&actions.deselect_all)
        ));
        out.push_str("</div></div>");
    }

    if let Some(limit) = &view.limit {
        out.push_str(&format!(r#"<div class="notify">{}</div>"#, escape_text(limit)));
    }

    out.push_str(r#"<ul class="dropdown-menu inner">"#);
    for row in &view.rows {
        match row {
            RowView::Header(label) => {
                out.push_str(&format!(
                    r#"<li class="dropdown-header">{}</li>"#,
                    escape_text(label)
                ));
            }
            RowView::Divider => out.push_str(r#"<li class="dropdown-divider"></li>"#),
            RowView::NoResults(text) => {
                out.push_str(&format!(r#"<li class="no-results">{}</li>"#, escape_text(text)));
            }
            RowView::Option(option) => render_option(option, out),
        }
    }
    out.push_str("</ul></div></div>");
}

fn render_option(option: &OptionRow, out: &mut String) {
    let classes = class_list(&[
        "dropdown-item",
        if option.selected { "selected" } else { "" },
        if option.focused { "focused" } else { "" },
        if option.disabled { "disabled" } else { "" },
    ]);
    out.push_str(&format!(
        r##"<li class="{}" role="option" data-value="{}" aria-selected="{}"><a href="#">"##,
        escape_attr(&classes),
        escape_attr(&option.value),
        option.selected
    ));
    if option.tick {
        out.push_str(r#"<span class="check-mark"><span class="bs-ok-default"></span></span>"#);
    }
    if let Some(icon) = &option.icon {
        out.push_str(&format!(r#"<i class="{}"></i> "#, escape_attr(icon)));
    }
    out.push_str(r#"<span class="text">"#);
    out.push_str(&option.label_html);
    out.push_str("</span>");
    if let Some(subtext) = &option.subtext {
        out.push_str(&format!(
            r#"<small class="text-muted">{}</small>"#,
            escape_text(subtext)
        ));
    }
    out.push_str("</a></li>");
}
