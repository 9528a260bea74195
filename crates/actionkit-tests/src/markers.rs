//! Integration tests for pose markers and the active selection.

use actionkit_action::{Action, ActionChange};
use actionkit_core::limits::DEFAULT_MARKER_FRAME;

fn poses() -> Action {
    let mut action = Action::new("Hand Poses");
    for name in ["Open", "Fist", "Point"] {
        action.create_marker(name);
    }
    action.take_changes();
    action
}

#[test]
fn markers_keep_creation_order() {
    let action = poses();
    let names: Vec<&str> = action.markers().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Open", "Fist", "Point"]);
    assert!(action
        .markers()
        .iter()
        .all(|m| m.frame == DEFAULT_MARKER_FRAME && m.selected));
}

#[test]
fn active_marker_by_identity_and_index() {
    let mut action = poses();
    let fist = action.markers()[1].id();

    action.set_active_marker(fist);
    assert_eq!(action.active_marker_index(), 1);
    assert_eq!(action.active_marker().unwrap().name, "Fist");

    action.set_active_marker_index(2);
    assert_eq!(action.active_marker().unwrap().name, "Point");
}

#[test]
fn removing_earlier_marker_keeps_active_identity() {
    let mut action = poses();
    let open = action.markers()[0].id();
    let fist = action.markers()[1].id();
    action.set_active_marker(fist);

    action.remove_marker(open).unwrap();
    assert_eq!(action.active_marker().map(|m| m.id()), Some(fist));
    assert_eq!(action.active_marker_index(), 0);
    assert_eq!(action.active_marker_index_range(), (0, 1));
}

#[test]
fn removing_later_marker_keeps_index() {
    let mut action = poses();
    let fist = action.markers()[1].id();
    let point = action.markers()[2].id();
    action.set_active_marker(fist);

    action.remove_marker(point).unwrap();
    assert_eq!(action.active_marker_index(), 1);
    assert_eq!(action.active_marker().unwrap().name, "Fist");
}

#[test]
fn index_setter_clamps_to_range() {
    let mut action = poses();
    action.set_active_marker_index(99);
    assert_eq!(action.active_marker_index(), 2);
    action.set_active_marker_index(-1);
    assert_eq!(action.active_marker_index(), 0);
    assert_eq!(action.active_marker().unwrap().name, "Open");
}

#[test]
fn foreign_marker_clears_selection_without_error() {
    let mut action = poses();
    let mut other = Action::new("Other");
    let foreign = other.create_marker("Elsewhere");

    action.set_active_marker_index(1);
    action.set_active_marker(foreign);
    assert!(action.active_marker().is_none());
    assert_eq!(action.active_marker_index(), 0);
    assert!(action.remove_marker(foreign).unwrap_err().is_not_found());
}

#[test]
fn editing_a_marker_is_recorded() {
    let mut action = poses();
    let open = action.markers()[0].id();
    action
        .update_marker(open, |m| {
            m.frame = 24;
            m.name = "Relaxed".into();
            m.selected = false;
        })
        .unwrap();

    let marker = action.marker(open).unwrap();
    assert_eq!((marker.name.as_str(), marker.frame, marker.selected), ("Relaxed", 24, false));
    assert_eq!(
        action.take_changes().as_slice(),
        &[ActionChange::MarkerEdited { marker: open }]
    );
}
