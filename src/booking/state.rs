//! Picker selection state machine
//!
//! The picker owns a small amount of local state: nothing selected yet,
//! a calendar date being viewed, or a committed window ready for
//! checkout. Transitions are driven only by discrete user events; the
//! validator itself stays pure and stateless.

use chrono::NaiveDate;

use super::Window;

/// Current selection of one picker instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing picked yet
    #[default]
    Empty,
    /// A calendar date is being viewed, no window committed
    Viewing(NaiveDate),
    /// A validated window awaiting checkout
    Committed(Window),
}

impl Selection {
    /// User browsed to a date. A committed window is kept when the user
    /// merely views another month; it is only replaced by `commit`.
    pub fn view(self, date: NaiveDate) -> Self {
        match self {
            Selection::Committed(window) => Selection::Committed(window),
            _ => Selection::Viewing(date),
        }
    }

    /// An accepted window replaces whatever was selected
    pub fn commit(self, window: Window) -> Self {
        Selection::Committed(window)
    }

    /// User cleared the picker
    pub fn clear(self) -> Self {
        Selection::Empty
    }

    /// Date to render the picker around, if any
    pub fn viewed_date(&self) -> Option<NaiveDate> {
        match self {
            Selection::Empty => None,
            Selection::Viewing(date) => Some(*date),
            Selection::Committed(window) => Some(window.start.date()),
        }
    }

    pub fn committed(&self) -> Option<Window> {
        match self {
            Selection::Committed(window) => Some(*window),
            _ => None,
        }
    }
}
