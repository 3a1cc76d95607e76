//! Demo state: four dropdowns and a focus cursor between them.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dropselect::{
    Dropdown, Entry, Key, OptionGroup, OptionSet, SelectConfig, SelectEvent, SelectOption,
    SelectionValue,
};

use crate::DemoError;
use crate::draw;
use crate::terminal::Terminal;

fn condiments() -> Result<OptionSet, DemoError> {
    let entries: Vec<Entry> = vec![
        SelectOption::new("mustard", "Mustard").into(),
        SelectOption::new("ketchup", "Ketchup").subtext("Heinz").into(),
        SelectOption::new("relish", "Relish").disabled().into(),
        OptionGroup::new(
            "Camping",
            [
                SelectOption::new("tent", "Tent"),
                SelectOption::new("flashlight", "Flashlight"),
                SelectOption::new("toilet-paper", "Toilet Paper"),
            ],
        )
        .into(),
    ];
    Ok(OptionSet::new(entries)?)
}

fn meals() -> Result<OptionSet, DemoError> {
    let entries: Vec<Entry> = vec![
        SelectOption::new("hot-dog", "Hot Dog, Fries and a Soda")
            .tokens(["ketchup", "mustard"])
            .into(),
        SelectOption::new("burger", "Burger, Shake and a Smile")
            .tokens(["mustard"])
            .into(),
        SelectOption::new("sugar", "Sugar, Spice and all things nice")
            .tokens(["frosting"])
            .into(),
    ];
    Ok(OptionSet::new(entries)?)
}

/// A titled dropdown and the last payload it committed.
pub struct Panel {
    title: &'static str,
    dropdown: Dropdown,
    last: Option<SelectionValue>,
}

impl Panel {
    fn new(title: &'static str, config: SelectConfig, options: OptionSet) -> Self {
        Self {
            title,
            dropdown: Dropdown::new(config, options),
            last: None,
        }
    }

    pub fn title(&self) -> &str {
        self.title
    }

    pub fn dropdown(&self) -> &Dropdown {
        &self.dropdown
    }

    pub fn last_committed(&self) -> Option<&SelectionValue> {
        self.last.as_ref()
    }
}

pub struct App {
    panels: Vec<Panel>,
    focus: usize,
    quit: bool,
}

impl App {
    /// Build the demo panels. `options` replaces every panel's option set.
    pub fn new(options: Option<OptionSet>) -> Result<Self, DemoError> {
        let (condiments, meals) = match options {
            Some(set) => (set.clone(), set),
            None => (condiments()?, meals()?),
        };

        let panels = vec![
            Panel::new(
                "Basic Select",
                SelectConfig::new()
                    .id("basic")
                    .show_tick()
                    .placeholder("Choose a condiment..."),
                condiments.clone(),
            ),
            Panel::new(
                "Multiple Select",
                SelectConfig::new()
                    .id("multiple")
                    .multiple()
                    .actions_box()
                    .max_options(3)
                    .placeholder("Choose condiments..."),
                condiments.clone(),
            ),
            Panel::new(
                "Searchable Select",
                SelectConfig::new()
                    .id("searchable")
                    .searchable()
                    .search_placeholder("Search for food...")
                    .placeholder("Choose a meal..."),
                meals,
            ),
            Panel::new(
                "Disabled Select",
                SelectConfig::new()
                    .id("disabled")
                    .disabled()
                    .placeholder("This is disabled"),
                condiments,
            ),
        ];

        Ok(Self {
            panels,
            focus: 0,
            quit: false,
        })
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn run(&mut self, terminal: &mut Terminal) -> Result<(), DemoError> {
        while !self.quit {
            terminal.draw(&draw::lines(self))?;
            if let Event::Key(key) = terminal.read_event()? {
                self.handle_key_event(key);
            }
        }
        log::info!("dropselect-tui exiting");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    pub fn handle_key_event(&mut self, event: KeyEvent) {
        if event.kind != KeyEventKind::Press {
            return;
        }
        if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        let key = Key::from(event.code);
        if self.current().is_open() {
            self.handle_open_key(key);
        } else {
            self.handle_closed_key(key);
        }
        self.drain_events();
    }

    fn current(&mut self) -> &mut Dropdown {
        &mut self.panels[self.focus].dropdown
    }

    fn handle_closed_key(&mut self, key: Key) {
        match key {
            Key::Enter | Key::Down | Key::SPACE => self.current().open(),
            Key::Tab => self.focus_next(),
            Key::BackTab => self.focus_prev(),
            Key::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_open_key(&mut self, key: Key) {
        let outcome = self.current().handle_key(key);
        if outcome.is_handled() {
            // Tab closes the menu and still moves on to the next dropdown.
            if !outcome.prevent_default && key == Key::Tab {
                self.focus_next();
            }
            return;
        }

        let dropdown = self.current();
        let config = dropdown.config();
        let (searchable, actions) = (config.searchable, config.actions_box);
        match key {
            Key::Char(c) if searchable => dropdown.push_search_char(c),
            Key::Backspace if searchable => dropdown.pop_search_char(),
            Key::Char('a') if actions => dropdown.select_all(),
            Key::Char('d') if actions => dropdown.deselect_all(),
            Key::Char('q') => self.quit = true,
            Key::BackTab => {
                dropdown.close();
                self.focus_prev();
            }
            _ => {}
        }
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.panels.len();
    }

    fn focus_prev(&mut self) {
        self.focus = (self.focus + self.panels.len() - 1) % self.panels.len();
    }

    fn drain_events(&mut self) {
        for panel in &mut self.panels {
            for event in panel.dropdown.take_events() {
                log::info!("{}: {:?}", panel.title, event);
                if let SelectEvent::SelectionCommitted(value) = event {
                    panel.last = Some(value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut app = App::new(None).unwrap();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), 1);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus(), 3);
    }

    #[test]
    fn test_commit_records_payload() {
        let mut app = App::new(None).unwrap();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.panels()[0].last_committed(),
            Some(&SelectionValue::Single("mustard".into()))
        );
        assert!(!app.panels()[0].dropdown().is_open());
    }

    #[test]
    fn test_typing_filters_searchable_panel() {
        let mut app = App::new(None).unwrap();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        for c in "frost".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        let dropdown = app.panels()[2].dropdown();
        assert_eq!(dropdown.search_term(), "frost");
        assert_eq!(dropdown.flattened().len(), 1);
    }

    #[test]
    fn test_actions_keys() {
        let mut app = App::new(None).unwrap();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(
            app.panels()[1].last_committed(),
            Some(&SelectionValue::Multiple(vec![
                "mustard".into(),
                "ketchup".into(),
                "tent".into()
            ]))
        );
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(
            app.panels()[1].last_committed(),
            Some(&SelectionValue::Multiple(Vec::new()))
        );
    }

    #[test]
    fn test_disabled_panel_stays_closed() {
        let mut app = App::new(None).unwrap();
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Enter);
        assert!(!app.panels()[3].dropdown().is_open());
    }

    #[test]
    fn test_q_quits_unless_typing() {
        let mut app = App::new(None).unwrap();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.quit);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.quit);
    }
}
