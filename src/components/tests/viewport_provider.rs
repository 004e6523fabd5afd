use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use yew::Callback;

use super::{Handlers, ScrollView, ViewportContext};
use crate::config::TrackerConfig;
use crate::viewport::{Extent, RevealLatch, SectionId, ViewportTracker};

fn handlers() -> (super::Tracker, super::Reveals, Handlers) {
    let tracker = Rc::new(RefCell::new(ViewportTracker::new(
        SectionId::default(),
        TrackerConfig::default(),
    )));
    let reveals = Rc::new(RefCell::new(RevealLatch::new()));
    let handlers = Handlers::new(&tracker, &reveals, Callback::from(|_| ()));
    (tracker, reveals, handlers)
}

fn top_of_page() -> ScrollView {
    ScrollView {
        scrolled: false,
        active_section: SectionId::Home,
    }
}

#[test]
fn test_context_is_stable_for_an_unchanged_snapshot() {
    let (_, _, handlers) = handlers();
    let revealed = Rc::new(HashSet::from(["hero-title".to_string()]));

    let first = handlers.context(top_of_page(), true, revealed.clone());
    let second = handlers.context(top_of_page(), true, revealed);
    assert!(first == second);
}

#[test]
fn test_context_changes_with_the_snapshot() {
    let (_, _, handlers) = handlers();
    let revealed = Rc::new(HashSet::new());

    let before = handlers.context(top_of_page(), false, revealed.clone());
    let scrolled = ScrollView {
        scrolled: true,
        active_section: SectionId::About,
    };
    assert!(before != handlers.context(scrolled, false, revealed.clone()));
    assert!(before != handlers.context(top_of_page(), true, revealed));
}

#[test]
fn test_section_callbacks_drive_the_registry() {
    let (tracker, _, handlers) = handlers();
    let context: ViewportContext = handlers.context(top_of_page(), false, Rc::new(HashSet::new()));

    context.on_section_mount.emit((SectionId::About, Extent::new(900.0, 700.0)));
    context.on_section_mount.emit((SectionId::About, Extent::new(0.0, 10.0)));
    assert_eq!(
        tracker.borrow().registry().get(&SectionId::About),
        Some(Extent::new(900.0, 700.0))
    );

    context.on_section_unmount.emit(SectionId::About);
    assert!(tracker.borrow().registry().is_empty());
}

#[test]
fn test_block_mount_publishes_when_already_in_view() {
    let tracker = Rc::new(RefCell::new(ViewportTracker::new(
        SectionId::default(),
        TrackerConfig::default(),
    )));
    let reveals = Rc::new(RefCell::new(RevealLatch::new()));
    let published = Rc::new(RefCell::new(Vec::new()));
    let handlers = {
        let published = published.clone();
        Handlers::new(
            &tracker,
            &reveals,
            Callback::from(move |set| published.borrow_mut().push(set)),
        )
    };
    reveals.borrow_mut().on_scroll(0.0, 900.0);

    handlers.on_block_mount.emit(("contact-form".to_string(), 4000.0));
    assert!(published.borrow().is_empty());

    handlers.on_block_mount.emit(("hero-title".to_string(), 120.0));
    let published = published.borrow();
    assert_eq!(published.len(), 1);
    assert!(published[0].contains("hero-title"));

    handlers.on_block_unmount.emit("hero-title".to_string());
    assert_eq!(reveals.borrow().len(), 1);
}
