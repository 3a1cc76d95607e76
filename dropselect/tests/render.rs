use dropselect::sanitize::CustomSanitizer;
use dropselect::{
    Dropdown, Key, OptionSet, SelectConfig, SelectOption, SelectionValue, Width, render_html,
};

fn options() -> OptionSet {
    OptionSet::new([
        SelectOption::new("bold", r#"<b onclick="x">Bold</b>"#).into(),
        SelectOption::new("ketchup", "Ketchup")
            .subtext("Heinz")
            .icon("fa fa-bottle")
            .into(),
        SelectOption::new("relish", "Relish").disabled().into(),
    ])
    .unwrap()
}

fn open(config: SelectConfig) -> Dropdown {
    let mut dropdown = Dropdown::new(config, options());
    dropdown.open();
    dropdown
}

// ============================================================================
// Button
// ============================================================================

#[test]
fn test_closed_dropdown_renders_button_only() {
    let html = render_html(&Dropdown::new(SelectConfig::new(), options()));
    assert!(html.contains(r#"class="btn dropdown-toggle btn-light bs-placeholder""#));
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(html.contains(">Nothing selected<"));
    assert!(!html.contains("dropdown-menu"));
}

#[test]
fn test_container_attributes() {
    let config = SelectConfig::new()
        .width(Width::Pixels(200))
        .id("meals")
        .class_name("wide");
    let html = render_html(&Dropdown::new(config, options()));
    assert!(html.starts_with(r#"<div class="bootstrap-select wide" style="width: 200px" id="meals">"#));
    assert!(html.ends_with("</div>"));
}

#[test]
fn test_button_text_is_escaped() {
    let html = render_html(&Dropdown::new(
        SelectConfig::new().placeholder("<Pick>"),
        options(),
    ));
    assert!(html.contains("&lt;Pick&gt;"));
}

#[test]
fn test_selected_button_drops_placeholder_class() {
    let dropdown =
        Dropdown::new(SelectConfig::new(), options()).with_value(SelectionValue::Single("bold".into()));
    let html = render_html(&dropdown);
    assert!(html.contains(r#"class="btn dropdown-toggle btn-light""#));
    assert!(html.contains(">Bold<"));
}

// ============================================================================
// Menu
// ============================================================================

#[test]
fn test_open_menu_with_search_and_actions() {
    let html = render_html(&open(
        SelectConfig::new().multiple().searchable().actions_box(),
    ));
    assert!(html.starts_with(r#"<div class="bootstrap-select show""#));
    assert!(html.contains(r#"aria-expanded="true""#));
    assert!(html.contains(r#"<div class="bs-searchbox">"#));
    assert!(html.contains(r#"placeholder="Search...""#));
    assert!(html.contains(r#"bs-select-all btn btn-light">Select All</button>"#));
    assert!(html.contains(r#"bs-deselect-all btn btn-light">Deselect All</button>"#));
}

#[test]
fn test_labels_are_sanitized() {
    let html = render_html(&open(SelectConfig::new()));
    assert!(html.contains(r#"<span class="text"><b>Bold</b></span>"#));
    assert!(!html.contains("onclick"));
}

#[test]
fn test_labels_are_escaped_without_sanitize() {
    let html = render_html(&open(SelectConfig::new().without_sanitize()));
    assert!(html.contains(r#"<span class="text">&lt;b onclick="x"&gt;Bold&lt;/b&gt;</span>"#));
}

#[test]
fn test_custom_sanitizer() {
    let config = SelectConfig::new()
        .sanitize_fn(CustomSanitizer::new(|fragment| fragment.text_content().to_uppercase()));
    let html = render_html(&open(config));
    assert!(html.contains(r#"<span class="text">BOLD</span>"#));
}

#[test]
fn test_option_row_markup() {
    let html = render_html(&open(SelectConfig::new()));
    assert!(html.contains(r#"<i class="fa fa-bottle"></i> "#));
    assert!(html.contains(r#"<small class="text-muted">Heinz</small>"#));
    assert!(html.contains(r#"<li class="dropdown-item disabled" role="option" data-value="relish""#));
}

#[test]
fn test_selected_and_focused_classes() {
    let mut dropdown = open(SelectConfig::new().multiple().show_tick());
    dropdown.click_option("bold");
    dropdown.handle_key(Key::Down);
    let html = render_html(&dropdown);
    assert!(html.contains(
        r#"<li class="dropdown-item selected focused" role="option" data-value="bold" aria-selected="true">"#
    ));
    assert!(html.contains(r#"<span class="check-mark">"#));
}

#[test]
fn test_no_results_is_escaped() {
    let mut dropdown = open(SelectConfig::new().searchable());
    dropdown.set_search("<x>");
    let html = render_html(&dropdown);
    assert!(html.contains(r#"<li class="no-results">No results match &lt;x&gt;</li>"#));
    assert!(html.contains(r#"value="&lt;x&gt;""#));
}

#[test]
fn test_limit_notice() {
    let mut dropdown = open(SelectConfig::new().multiple().max_options(1));
    dropdown.click_option("ketchup");
    let html = render_html(&dropdown);
    assert!(html.contains(r#"<div class="notify">Limit reached (1 items max)</div>"#));
}
