use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Block {
    top: f64,
    revealed: bool,
}

/// Last observed scroll window, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollWindow {
    bottom: f64,
}

impl ScrollWindow {
    fn new(scroll_y: f64, viewport_height: f64) -> Self {
        Self {
            bottom: scroll_y + viewport_height,
        }
    }

    fn reaches(&self, top: f64) -> bool {
        top < self.bottom
    }
}

/// One-shot reveal flags for fade-in blocks.
///
/// A block flips to revealed the first time its top edge is inside the
/// viewport and never flips back.
#[derive(Debug, Clone)]
pub struct RevealLatch<K> {
    blocks: HashMap<K, Block>,
    window: Option<ScrollWindow>,
}

impl<K> Default for RevealLatch<K> {
    fn default() -> Self {
        Self {
            blocks: HashMap::new(),
            window: None,
        }
    }
}

impl<K: Eq + Hash + Clone> RevealLatch<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a block at `top`. Returns true when the block is revealed by
    /// this call, which happens if a scroll window was already seen and
    /// reaches it. Re-registering a known block does nothing.
    pub fn register(&mut self, id: K, top: f64) -> bool {
        if self.blocks.contains_key(&id) {
            return false;
        }
        let revealed = self.window.map_or(false, |w| w.reaches(top));
        self.blocks.insert(id, Block { top, revealed });
        revealed
    }

    /// Returns the blocks newly revealed by this scroll position.
    pub fn on_scroll(&mut self, scroll_y: f64, viewport_height: f64) -> Vec<K> {
        let window = ScrollWindow::new(scroll_y, viewport_height);
        self.window = Some(window);

        let mut fresh = Vec::new();
        for (id, block) in self.blocks.iter_mut() {
            if !block.revealed && window.reaches(block.top) {
                block.revealed = true;
                fresh.push(id.clone());
            }
        }
        fresh
    }

    pub fn is_revealed(&self, id: &K) -> bool {
        self.blocks.get(id).map_or(false, |b| b.revealed)
    }

    /// Drops the latch for an unmounted block. The latch only holds for one
    /// mount: a block registered again under the same id starts hidden.
    pub fn forget(&mut self, id: &K) -> bool {
        self.blocks.remove(id).is_some()
    }

    pub fn revealed(&self) -> impl Iterator<Item = &K> + '_ {
        self.blocks
            .iter()
            .filter(|(_, b)| b.revealed)
            .map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/reveal.rs"]
mod tests;
