//! Keyboard focus over the flattened option list.

use crate::key::Key;
use crate::option::SelectOption;

/// What a key press asks the owner of the navigator to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Key not handled; the host should process it normally.
    Ignored,
    /// Key handled with no effect (e.g. Enter with nothing focused).
    Noop,
    /// Focus moved to this index.
    Focus(usize),
    /// Commit the option with this value.
    Commit(String),
    /// Close the dropdown without changing the selection.
    Close,
}

/// Result of feeding a key to the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOutcome {
    pub action: NavAction,
    /// Whether the host must suppress the key's default action.
    pub prevent_default: bool,
}

impl KeyOutcome {
    pub fn ignored() -> Self {
        Self {
            action: NavAction::Ignored,
            prevent_default: false,
        }
    }

    fn consumed(action: NavAction) -> Self {
        Self {
            action,
            prevent_default: true,
        }
    }

    fn passthrough(action: NavAction) -> Self {
        Self {
            action,
            prevent_default: false,
        }
    }

    /// Check if the key was handled.
    pub fn is_handled(&self) -> bool {
        self.action != NavAction::Ignored
    }
}

/// Tracks the focused row while the dropdown is open.
///
/// The focus index is not clamped when the list shrinks underneath it; use
/// [`Navigator::focused_in`] to read it against the current list length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    open: bool,
    focus: Option<usize>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Mirror the dropdown's open state. Closing drops focus.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
        if !open {
            self.focus = None;
        }
    }

    /// The raw focus index, possibly stale.
    pub fn focused(&self) -> Option<usize> {
        self.focus
    }

    /// The focus index if it is valid for a list of `len` rows.
    pub fn focused_in(&self, len: usize) -> Option<usize> {
        self.focus.filter(|&i| i < len)
    }

    pub fn set_focus(&mut self, focus: Option<usize>) {
        self.focus = focus;
    }

    pub fn clear_focus(&mut self) {
        self.focus = None;
    }

    /// Move focus down, wrapping to the top. No-op on an empty list.
    pub fn focus_next(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return self.focus;
        }
        let next = match self.focus {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.focus = Some(next);
        self.focus
    }

    /// Move focus up, wrapping to the bottom. No-op on an empty list.
    ///
    /// With nothing focused (or a stale index) focus lands on the last row.
    pub fn focus_prev(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return self.focus;
        }
        let prev = match self.focus {
            Some(i) if i > 0 && i < len => i - 1,
            _ => len - 1,
        };
        self.focus = Some(prev);
        self.focus
    }

    fn step(&mut self, len: usize, mv: fn(&mut Self, usize) -> Option<usize>) -> NavAction {
        mv(self, len).map_or(NavAction::Noop, NavAction::Focus)
    }

    /// Handle a key press against the current flattened list.
    ///
    /// Keys are ignored while closed. Tab closes but keeps its default
    /// focus-advance behavior; every other handled key suppresses it.
    pub fn handle_key(&mut self, key: Key, list: &[SelectOption]) -> KeyOutcome {
        if !self.open {
            return KeyOutcome::ignored();
        }

        let len = list.len();
        let outcome = match key {
            Key::Down | Key::Up if len == 0 => KeyOutcome::consumed(NavAction::Noop),
            Key::Down => KeyOutcome::consumed(self.step(len, Self::focus_next)),
            Key::Up => KeyOutcome::consumed(self.step(len, Self::focus_prev)),
            Key::Enter | Key::Char(' ') => {
                match self.focused_in(len).and_then(|i| list.get(i)) {
                    Some(option) => KeyOutcome::consumed(NavAction::Commit(option.value.clone())),
                    None => KeyOutcome::consumed(NavAction::Noop),
                }
            }
            Key::Escape => KeyOutcome::consumed(NavAction::Close),
            Key::Tab => KeyOutcome::passthrough(NavAction::Close),
            _ => KeyOutcome::ignored(),
        };

        log::trace!(
            "Navigator::handle_key key={:?} len={} -> {:?}",
            key,
            len,
            outcome.action
        );
        outcome
    }
}
