//! Single-item selection: clicking the selected event again clears it, clicking
//! another event moves the selection, changing category or view resets it.

use crate::models::{Event, EventKey, EventKind};

/// Pure reducer: `current == clicked` → `None`, otherwise `clicked`.
pub fn toggle(current: Option<&EventKey>, clicked: &EventKey) -> Option<EventKey> {
    match current {
        Some(c) if c == clicked => None,
        _ => Some(clicked.clone()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Unselected,
    Selected(EventKey),
}

impl SelectionState {
    pub fn click(self, clicked: &EventKey) -> Self {
        match toggle(self.key(), clicked) {
            Some(k) => SelectionState::Selected(k),
            None => SelectionState::Unselected,
        }
    }

    pub fn key(&self) -> Option<&EventKey> {
        match self {
            SelectionState::Unselected => None,
            SelectionState::Selected(k) => Some(k),
        }
    }
}

/// Selection scoped to one visualization instance (one category of events).
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    category: Option<EventKind>,
    state: SelectionState,
}

impl SelectionController {
    pub fn new(category: EventKind) -> Self {
        Self {
            category: Some(category),
            state: SelectionState::Unselected,
        }
    }

    /// Forward a click on `key`. Returns the new selection.
    pub fn click(&mut self, key: &EventKey) -> Option<&EventKey> {
        let prev = std::mem::take(&mut self.state);
        self.state = prev.click(key);
        log::debug!("selection -> {:?}", self.state);
        self.state.key()
    }

    /// External reset (view discarded).
    pub fn reset(&mut self) {
        self.state = SelectionState::Unselected;
    }

    /// Switch the active category; always discards the selection.
    pub fn set_category(&mut self, category: EventKind) {
        self.category = Some(category);
        self.reset();
    }

    pub fn category(&self) -> Option<EventKind> {
        self.category
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected(&self) -> Option<&EventKey> {
        self.state.key()
    }

    pub fn is_selected(&self, key: &EventKey) -> bool {
        self.selected() == Some(key)
    }

    /// The event list was replaced. A selection survives only when it is keyed by
    /// id and that id is still in `events`; positional keys never carry over.
    pub fn replace_events(&mut self, events: &[Event]) {
        let keep = match self.selected() {
            Some(k @ EventKey::Id(_)) => events.iter().any(|e| &e.key() == k),
            Some(EventKey::Index(_)) => false,
            None => return,
        };
        if !keep {
            self.reset();
        }
    }

    /// The selected event in `events`, for the detail panel.
    pub fn selected_event<'a>(&self, events: &'a [Event]) -> Option<&'a Event> {
        let key = self.selected()?;
        events.iter().find(|e| &e.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_a_reducer() {
        let a = EventKey::Index(0);
        let b = EventKey::Index(1);
        assert_eq!(toggle(None, &a), Some(a.clone()));
        assert_eq!(toggle(Some(&a), &a), None);
        assert_eq!(toggle(Some(&a), &b), Some(b.clone()));
    }

    #[test]
    fn category_change_resets() {
        let mut c = SelectionController::new(EventKind::Shot);
        c.click(&EventKey::Id("x".into()));
        assert!(c.selected().is_some());
        c.set_category(EventKind::Pass);
        assert_eq!(c.state(), &SelectionState::Unselected);
        assert_eq!(c.category(), Some(EventKind::Pass));
    }

    #[test]
    fn positional_selection_dropped_on_new_list() {
        use crate::models::Location;
        let loc = Location::new(30.0, 30.0);
        let list = vec![
            Event::new(0, EventKind::Touch, loc, "Pass"),
            Event::new(1, EventKind::Touch, loc, "Carry"),
        ];
        let mut c = SelectionController::new(EventKind::Touch);
        c.click(&EventKey::Index(1));
        c.replace_events(&list);
        assert_eq!(c.selected(), None);
    }
}
