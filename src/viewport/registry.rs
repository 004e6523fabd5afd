use std::collections::HashMap;
use std::hash::Hash;

/// Vertical extent of a page region in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open: the top edge belongs to the region, the bottom edge does not.
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && y < self.bottom()
    }
}

/// Measured sections keyed by identity.
///
/// Entries keep insertion order so scans are deterministic. The first
/// registration of an identity wins; later ones are ignored until the
/// section is unregistered.
#[derive(Debug, Clone)]
pub struct SectionRegistry<K> {
    entries: Vec<(K, Extent)>,
    index: HashMap<K, usize>,
}

impl<K> Default for SectionRegistry<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> SectionRegistry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `id` unless it is already present. Returns whether an entry was added.
    pub fn register(&mut self, id: K, top: f64, height: f64) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id.clone(), self.entries.len());
        self.entries.push((id, Extent::new(top, height)));
        true
    }

    pub fn unregister(&mut self, id: &K) -> Option<Extent> {
        let pos = self.index.remove(id)?;
        let (_, extent) = self.entries.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(extent)
    }

    pub fn get(&self, id: &K) -> Option<Extent> {
        self.index.get(id).map(|&pos| self.entries[pos].1)
    }

    /// Entries in insertion order.
    pub fn lookup(&self) -> impl Iterator<Item = (&K, Extent)> + '_ {
        self.entries.iter().map(|(id, extent)| (id, *extent))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/registry.rs"]
mod tests;
