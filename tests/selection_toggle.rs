use pitchviz::models::{Event, EventKey, EventKind, Location};
use pitchviz::viz::{SelectionController, SelectionState, toggle};

#[test]
fn double_toggle_clears() {
    let e = EventKey::Id("a".into());
    assert_eq!(toggle(toggle(None, &e).as_ref(), &e), None);
}

#[test]
fn click_sequence_a_a_b() {
    let a = EventKey::Index(0);
    let b = EventKey::Index(1);
    let mut c = SelectionController::new(EventKind::Pass);
    let seen: Vec<Option<EventKey>> = [&a, &a, &b]
        .into_iter()
        .map(|k| c.click(k).cloned())
        .collect();
    assert_eq!(seen, vec![Some(a.clone()), None, Some(b.clone())]);
    assert!(c.is_selected(&b));
}

#[test]
fn reset_and_category_change_clear_selection() {
    let mut c = SelectionController::new(EventKind::Shot);
    c.click(&EventKey::Index(3));
    c.reset();
    assert_eq!(c.state(), &SelectionState::Unselected);

    c.click(&EventKey::Index(3));
    c.set_category(EventKind::Touch);
    assert!(c.selected().is_none());
}

#[test]
fn selection_survives_only_if_event_is_still_present() {
    let loc = Location::new(10.0, 10.0);
    let events = vec![
        Event::new(0, EventKind::Shot, loc, "Saved").with_id("s1"),
        Event::new(1, EventKind::Shot, loc, "Goal").with_id("s2"),
    ];
    let mut c = SelectionController::new(EventKind::Shot);
    c.click(&EventKey::Id("s2".into()));
    assert_eq!(c.selected_event(&events).map(|e| e.outcome.as_str()), Some("Goal"));

    c.replace_events(&events);
    assert!(c.selected().is_some());
    c.replace_events(&events[..1]);
    assert!(c.selected().is_none());
}

#[test]
fn refetch_clears_touch_selection() {
    let loc = Location::new(40.0, 30.0);
    let first = vec![
        Event::new(0, EventKind::Touch, loc, "Pass"),
        Event::new(1, EventKind::Touch, loc, "Carry"),
    ];
    let second = vec![
        Event::new(0, EventKind::Touch, loc, "Shot"),
        Event::new(1, EventKind::Touch, loc, "Dribble"),
    ];
    let mut c = SelectionController::new(EventKind::Touch);
    c.click(&first[1].key());
    assert_eq!(c.selected_event(&first).map(|e| e.outcome.as_str()), Some("Carry"));

    c.replace_events(&second);
    assert!(c.selected_event(&second).is_none());
    assert_eq!(c.state(), &SelectionState::Unselected);
}
