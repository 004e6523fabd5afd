use std::hash::Hash;

use crate::config::TrackerConfig;

use super::registry::SectionRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

/// Snapshot handed to the renderer. Replaced wholesale on every event.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState<K> {
    pub scrolled: bool,
    pub active_section: K,
    pub pointer: Pointer,
}

impl<K> ViewportState<K> {
    pub fn new(default_section: K) -> Self {
        Self {
            scrolled: false,
            active_section: default_section,
            pointer: Pointer::default(),
        }
    }
}

impl<K: Default> Default for ViewportState<K> {
    fn default() -> Self {
        Self::new(K::default())
    }
}

/// Turns raw scroll and pointer input into a [`ViewportState`].
///
/// The active section only moves when some registered section contains the
/// focal line; otherwise it keeps its previous value.
#[derive(Debug, Clone)]
pub struct ViewportTracker<K> {
    registry: SectionRegistry<K>,
    state: ViewportState<K>,
    config: TrackerConfig,
}

impl<K: Eq + Hash + Clone> ViewportTracker<K> {
    pub fn new(default_section: K, config: TrackerConfig) -> Self {
        Self {
            registry: SectionRegistry::new(),
            state: ViewportState::new(default_section),
            config,
        }
    }

    pub fn registry(&self) -> &SectionRegistry<K> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut SectionRegistry<K> {
        &mut self.registry
    }

    pub fn state(&self) -> &ViewportState<K> {
        &self.state
    }

    pub fn focal_y(&self, scroll_y: f64, viewport_height: f64) -> f64 {
        scroll_y + viewport_height / self.config.focal_divisor
    }

    /// Returns whether the snapshot changed.
    pub fn on_scroll(&mut self, scroll_y: f64, viewport_height: f64) -> bool {
        let scrolled = scroll_y > self.config.scroll_threshold;
        let focal_y = self.focal_y(scroll_y, viewport_height);

        // Overlapping ranges resolve to the last entry in registration order.
        let matched = self
            .registry
            .lookup()
            .filter(|(_, extent)| extent.contains(focal_y))
            .map(|(id, _)| id)
            .last()
            .cloned();

        let mut changed = scrolled != self.state.scrolled;
        self.state.scrolled = scrolled;
        if let Some(id) = matched {
            if id != self.state.active_section {
                log::debug!("active section changed at focal y {focal_y}");
                self.state.active_section = id;
                changed = true;
            }
        }
        changed
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.state.pointer = Pointer { x, y };
    }
}

#[cfg(test)]
#[path = "tests/tracker.rs"]
mod tests;
