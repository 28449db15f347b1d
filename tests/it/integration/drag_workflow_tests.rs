//! Complete drag sequences through the pointer tracker.

use crate::helpers::{DragScript, assert_position};
use floatcam::constants::DEFAULT_FLOATING_POSITION;
use floatcam::input::{
    DRAG_BUTTON, PointerCapture, PointerInput, PointerTracker, Position, is_drag_release,
};
use gpui::{MouseButton, MouseUpEvent};

fn tracker() -> PointerTracker {
    PointerTracker::new(DEFAULT_FLOATING_POSITION)
}

#[test]
fn test_press_move_release_commits_last_position() {
    let mut tracker = tracker();
    let trace = DragScript::new()
        .press(200.0, 300.0)
        .move_to(210.0, 320.0)
        .release()
        .move_to(500.0, 500.0)
        .run(&mut tracker);

    assert_position(trace[0], (50.0, 100.0));
    assert_position(trace[1], (60.0, 120.0));
    assert_position(trace[2], (60.0, 120.0));
    assert_position(trace[3], (60.0, 120.0));
    assert!(!tracker.is_dragging());
}

#[test]
fn test_capture_held_only_while_dragging() {
    let mut tracker = tracker();
    assert!(tracker.capture().is_none());

    tracker.press(&PointerInput::mouse(100.0, 150.0));
    assert!(tracker.is_capturing());
    assert!(tracker.is_dragging());

    tracker.release();
    assert!(tracker.capture().is_none());
    assert!(!tracker.is_dragging());
}

#[test]
fn test_each_drag_gets_fresh_capture() {
    let mut tracker = tracker();

    tracker.press(&PointerInput::mouse(60.0, 110.0));
    let first = tracker.capture().map(PointerCapture::id);
    tracker.release();

    tracker.press(&PointerInput::mouse(60.0, 110.0));
    let second = tracker.capture().map(PointerCapture::id);

    assert!(first.is_some() && second.is_some());
    assert_ne!(first, second);
}

#[test]
fn test_capture_counts_only_effective_moves() {
    let mut tracker = tracker();
    tracker.press(&PointerInput::mouse(60.0, 110.0));

    // Same point as the press: no change, no delivery
    assert!(!tracker.track(&PointerInput::mouse(60.0, 110.0)));
    assert!(tracker.track(&PointerInput::mouse(61.0, 110.0)));
    assert!(tracker.track(&PointerInput::mouse(62.0, 111.0)));

    assert_eq!(tracker.capture().map(PointerCapture::moves), Some(2));
}

#[test]
fn test_release_without_drag_is_harmless() {
    let mut tracker = tracker();
    assert_eq!(tracker.release(), None);
    assert_eq!(tracker.release(), None);
    assert_eq!(tracker.position(), DEFAULT_FLOATING_POSITION);
}

#[test]
fn test_second_press_does_not_reanchor() {
    let mut tracker = tracker();
    let trace = DragScript::new()
        .press(200.0, 300.0)
        .move_to(210.0, 320.0)
        .press(400.0, 400.0)
        .move_to(220.0, 330.0)
        .release()
        .run(&mut tracker);

    assert_position(trace[2], (60.0, 120.0));
    assert_position(trace[3], (70.0, 130.0));
    assert_position(trace[4], (70.0, 130.0));
}

#[test]
fn test_consecutive_drags_accumulate() {
    let mut tracker = tracker();
    let trace = DragScript::new()
        .press(100.0, 100.0)
        .move_to(150.0, 100.0)
        .release()
        .press(0.0, 0.0)
        .move_to(0.0, 40.0)
        .release()
        .run(&mut tracker);

    assert_position(*trace.last().unwrap(), (100.0, 140.0));
}

#[test]
fn test_reset_drops_capture() {
    let mut tracker = tracker();
    tracker.press(&PointerInput::mouse(60.0, 110.0));
    tracker.reset(Position::new(0.0, 0.0));

    assert!(!tracker.is_capturing());
    assert!(!tracker.is_dragging());
    assert_eq!(tracker.position(), Position::new(0.0, 0.0));
}

#[test]
fn test_tap_releases_before_any_move() {
    let mut tracker = tracker();
    assert!(tracker.press(&PointerInput::mouse(60.0, 110.0)));

    // Up from the window's own listener, then again from the capture layer
    assert_eq!(tracker.release(), Some(DEFAULT_FLOATING_POSITION));
    assert_eq!(tracker.release(), None);
    assert!(!tracker.is_capturing());

    // Nothing left stuck: moves are ignored and the next press starts a drag
    assert!(!tracker.track(&PointerInput::mouse(300.0, 300.0)));
    assert_eq!(tracker.position(), DEFAULT_FLOATING_POSITION);
    assert!(tracker.press(&PointerInput::mouse(60.0, 110.0)));
}

#[test]
fn test_only_drag_button_release_ends_drag() {
    let up = |button| MouseUpEvent {
        button,
        ..Default::default()
    };

    assert!(is_drag_release(&up(DRAG_BUTTON)));
    assert!(is_drag_release(&up(MouseButton::Left)));
    assert!(!is_drag_release(&up(MouseButton::Right)));
    assert!(!is_drag_release(&up(MouseButton::Middle)));
}
