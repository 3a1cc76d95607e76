//! Notifications emitted by a dropdown.

use crate::selection::SelectionValue;

/// One state transition, reported to the host.
///
/// Hosts drain these with [`Dropdown::take_events`](crate::Dropdown::take_events)
/// after each input event and perform their own I/O or re-rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEvent {
    /// The menu opened.
    Opened,
    /// The menu closed.
    Closed,
    /// The selection changed; carries the full new value.
    SelectionCommitted(SelectionValue),
}
