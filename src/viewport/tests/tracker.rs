use super::{Pointer, ViewportTracker};
use crate::config::TrackerConfig;

fn two_sections() -> ViewportTracker<&'static str> {
    let mut tracker = ViewportTracker::new("home", TrackerConfig::default());
    tracker.registry_mut().register("a", 0.0, 500.0);
    tracker.registry_mut().register("b", 500.0, 500.0);
    tracker
}

#[test]
fn test_initial_state() {
    let tracker: ViewportTracker<&str> = ViewportTracker::new("home", TrackerConfig::default());
    let state = tracker.state();
    assert!(!state.scrolled);
    assert_eq!(state.active_section, "home");
    assert_eq!(state.pointer, Pointer { x: 0.0, y: 0.0 });
}

#[test]
fn test_scroll_threshold_boundary() {
    let mut tracker = two_sections();

    tracker.on_scroll(10.0, 900.0);
    assert!(!tracker.state().scrolled);

    tracker.on_scroll(11.0, 900.0);
    assert!(tracker.state().scrolled);

    tracker.on_scroll(0.0, 900.0);
    assert!(!tracker.state().scrolled);
}

#[test]
fn test_focal_band_selects_section() {
    let mut tracker = two_sections();

    tracker.on_scroll(0.0, 900.0);
    assert_eq!(tracker.focal_y(0.0, 900.0), 300.0);
    assert_eq!(tracker.state().active_section, "a");

    tracker.on_scroll(300.0, 900.0);
    assert_eq!(tracker.focal_y(300.0, 900.0), 600.0);
    assert_eq!(tracker.state().active_section, "b");
}

#[test]
fn test_active_section_is_sticky_past_the_end() {
    let mut tracker = two_sections();
    tracker.on_scroll(300.0, 900.0);

    tracker.on_scroll(10_000.0, 900.0);

    assert_eq!(tracker.state().active_section, "b");
    assert!(tracker.state().scrolled);
}

#[test]
fn test_last_match_wins_on_overlap() {
    let mut tracker = ViewportTracker::new("home", TrackerConfig::default());
    tracker.registry_mut().register("wide", 0.0, 2000.0);
    tracker.registry_mut().register("inner", 200.0, 400.0);

    tracker.on_scroll(0.0, 900.0);
    assert_eq!(tracker.state().active_section, "inner");

    // Outside "inner" only the wide section matches.
    tracker.on_scroll(1000.0, 900.0);
    assert_eq!(tracker.state().active_section, "wide");
}

#[test]
fn test_empty_registry_keeps_default() {
    let mut tracker = two_sections();
    tracker.registry_mut().clear();

    assert_eq!(tracker.registry().lookup().count(), 0);
    tracker.on_scroll(300.0, 900.0);
    assert_eq!(tracker.state().active_section, "home");
}

#[test]
fn test_clear_keeps_previous_match() {
    let mut tracker = two_sections();
    tracker.on_scroll(300.0, 900.0);

    tracker.registry_mut().clear();
    tracker.on_scroll(0.0, 900.0);

    assert_eq!(tracker.state().active_section, "b");
}

#[test]
fn test_pointer_is_taken_verbatim() {
    let mut tracker = two_sections();

    tracker.on_pointer_move(12.5, 40.0);
    tracker.on_pointer_move(640.25, 17.75);

    assert_eq!(tracker.state().pointer, Pointer { x: 640.25, y: 17.75 });
}

#[test]
fn test_on_scroll_reports_changes() {
    let mut tracker = two_sections();

    // Default "home" gives way to "a".
    assert!(tracker.on_scroll(0.0, 900.0));
    // Still section "a", still below the threshold.
    assert!(!tracker.on_scroll(5.0, 900.0));
    assert!(tracker.on_scroll(20.0, 900.0));
    assert!(!tracker.on_scroll(40.0, 900.0));
    assert!(tracker.on_scroll(300.0, 900.0));
}

#[test]
fn test_custom_focal_divisor() {
    let config = TrackerConfig {
        focal_divisor: 2.0,
        ..TrackerConfig::default()
    };
    let mut tracker = ViewportTracker::new("home", config);
    tracker.registry_mut().register("a", 0.0, 500.0);
    tracker.registry_mut().register("b", 500.0, 500.0);

    // Center line at 50 + 450 = 500 already sits in "b".
    tracker.on_scroll(50.0, 900.0);
    assert_eq!(tracker.state().active_section, "b");
}
