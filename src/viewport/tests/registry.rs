use super::{Extent, SectionRegistry};

fn entries(registry: &SectionRegistry<&'static str>) -> Vec<(&'static str, Extent)> {
    registry.lookup().map(|(id, extent)| (*id, extent)).collect()
}

#[test]
fn test_first_registration_wins() {
    let mut registry = SectionRegistry::new();

    assert!(registry.register("about", 900.0, 700.0));
    assert!(!registry.register("about", 10.0, 20.0));

    assert_eq!(registry.get(&"about"), Some(Extent::new(900.0, 700.0)));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_lookup_keeps_insertion_order() {
    let mut registry = SectionRegistry::new();
    registry.register("contact", 3000.0, 800.0);
    registry.register("home", 0.0, 900.0);
    registry.register("about", 900.0, 700.0);

    let ids: Vec<_> = entries(&registry).into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["contact", "home", "about"]);
}

#[test]
fn test_unregister_removes_only_that_entry() {
    let mut registry = SectionRegistry::new();
    registry.register("home", 0.0, 900.0);
    registry.register("about", 900.0, 700.0);
    registry.register("events", 1600.0, 500.0);

    assert_eq!(registry.unregister(&"about"), Some(Extent::new(900.0, 700.0)));
    assert_eq!(registry.unregister(&"about"), None);
    assert_eq!(
        entries(&registry),
        vec![
            ("home", Extent::new(0.0, 900.0)),
            ("events", Extent::new(1600.0, 500.0)),
        ]
    );
    assert_eq!(registry.get(&"events"), Some(Extent::new(1600.0, 500.0)));

    // A removed section can be measured again.
    assert!(registry.register("about", 950.0, 650.0));
    assert_eq!(registry.get(&"about"), Some(Extent::new(950.0, 650.0)));
}

#[test]
fn test_unknown_identity_is_absent() {
    let registry: SectionRegistry<&str> = SectionRegistry::new();
    assert_eq!(registry.get(&"members"), None);
    assert!(registry.is_empty());
}

#[test]
fn test_clear_empties_lookup() {
    let mut registry = SectionRegistry::new();
    registry.register("home", 0.0, 900.0);
    registry.register("about", 900.0, 700.0);

    registry.clear();

    assert!(entries(&registry).is_empty());
    assert!(registry.register("home", 0.0, 900.0));
}

#[test]
fn test_extent_is_half_open() {
    let extent = Extent::new(500.0, 500.0);
    assert!(extent.contains(500.0));
    assert!(extent.contains(999.5));
    assert!(!extent.contains(1000.0));
    assert!(!extent.contains(499.9));
    assert_eq!(extent.bottom(), 1000.0);
}
