use std::collections::HashSet;

use super::RevealLatch;

#[test]
fn test_blocks_start_hidden() {
    let mut latch = RevealLatch::new();
    assert!(!latch.register("about-text", 1200.0));
    assert!(!latch.is_revealed(&"about-text"));
    assert!(!latch.is_revealed(&"never-registered"));
}

#[test]
fn test_block_reveals_when_top_enters_viewport() {
    let mut latch = RevealLatch::new();
    latch.register("about-text", 1200.0);

    assert!(latch.on_scroll(0.0, 900.0).is_empty());
    assert!(!latch.is_revealed(&"about-text"));

    assert_eq!(latch.on_scroll(301.0, 900.0), vec!["about-text"]);
    assert!(latch.is_revealed(&"about-text"));
}

#[test]
fn test_top_exactly_at_viewport_bottom_stays_hidden() {
    let mut latch = RevealLatch::new();
    latch.register("stats", 900.0);

    latch.on_scroll(0.0, 900.0);
    assert!(!latch.is_revealed(&"stats"));
}

#[test]
fn test_reveal_never_reverts() {
    let mut latch = RevealLatch::new();
    latch.register("events-0", 2500.0);

    latch.on_scroll(2000.0, 900.0);
    assert!(latch.is_revealed(&"events-0"));

    assert!(latch.on_scroll(0.0, 900.0).is_empty());
    assert!(latch.is_revealed(&"events-0"));
}

#[test]
fn test_only_fresh_blocks_are_reported() {
    let mut latch = RevealLatch::new();
    latch.register("a", 100.0);
    latch.register("b", 1500.0);
    latch.register("c", 5000.0);

    assert_eq!(latch.on_scroll(0.0, 900.0), vec!["a"]);

    let second: HashSet<_> = latch.on_scroll(4500.0, 900.0).into_iter().collect();
    assert_eq!(second, HashSet::from(["b", "c"]));

    let revealed: HashSet<_> = latch.revealed().copied().collect();
    assert_eq!(revealed, HashSet::from(["a", "b", "c"]));
}

#[test]
fn test_late_registration_uses_last_window() {
    let mut latch = RevealLatch::new();
    latch.on_scroll(1000.0, 900.0);

    assert!(latch.register("members-1", 1500.0));
    assert!(!latch.register("contact-form", 4000.0));
    assert!(latch.is_revealed(&"members-1"));
    assert!(!latch.is_revealed(&"contact-form"));
}

#[test]
fn test_duplicate_registration_is_ignored() {
    let mut latch = RevealLatch::new();
    latch.register("hero", 5000.0);
    latch.on_scroll(0.0, 900.0);

    // Re-measuring at a visible position does not replace the first entry.
    assert!(!latch.register("hero", 0.0));
    assert!(!latch.is_revealed(&"hero"));
    assert_eq!(latch.len(), 1);
}

#[test]
fn test_forget_drops_the_latch() {
    let mut latch = RevealLatch::new();
    latch.register("a", 0.0);
    latch.on_scroll(0.0, 900.0);

    assert!(latch.forget(&"a"));
    assert!(!latch.forget(&"a"));
    assert!(!latch.is_revealed(&"a"));
    assert!(latch.is_empty());
}

#[test]
fn test_remount_after_forget_starts_a_new_latch() {
    let mut latch = RevealLatch::new();
    latch.register("members-0", 1200.0);
    latch.on_scroll(1000.0, 900.0);
    assert!(latch.is_revealed(&"members-0"));

    latch.forget(&"members-0");
    latch.on_scroll(0.0, 900.0);

    // Remounted below the current window: hidden until scrolled to again.
    assert!(!latch.register("members-0", 1200.0));
    assert!(!latch.is_revealed(&"members-0"));
    assert_eq!(latch.on_scroll(400.0, 900.0), vec!["members-0"]);
}
