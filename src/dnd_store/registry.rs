use ahash::HashMap;

use super::drop_target::{DropTargetId, DropTargetState};

/// Drop targets in first-registration order.
///
/// Re-registering an id replaces the entry in its existing slot, so the
/// iteration order (and with it the hit-test tie-break) only changes when a
/// target is unregistered and registered again.
#[derive(Clone, Debug, Default)]
pub(super) struct DropTargetRegistry {
    entries: Vec<DropTargetState>,
    index: HashMap<DropTargetId, usize>,
}

impl DropTargetRegistry {
    /// Returns `true` if an entry with the same id was replaced.
    pub(super) fn insert(&mut self, state: DropTargetState) -> bool {
        if let Some(&slot) = self.index.get(state.id()) {
            self.entries[slot] = state;
            true
        } else {
            self.index.insert(state.id().clone(), self.entries.len());
            self.entries.push(state);
            false
        }
    }

    pub(super) fn remove(&mut self, id: &DropTargetId) -> Option<DropTargetState> {
        let slot = self.index.remove(id)?;
        let removed = self.entries.remove(slot);
        for entry in &self.entries[slot..] {
            if let Some(i) = self.index.get_mut(entry.id()) {
                *i -= 1;
            }
        }
        Some(removed)
    }

    pub(super) fn get(&self, id: &DropTargetId) -> Option<&DropTargetState> {
        self.index.get(id).map(|&slot| &self.entries[slot])
    }

    pub(super) fn contains(&self, id: &DropTargetId) -> bool {
        self.index.contains_key(id)
    }

    pub(super) fn iter(&self) -> std::slice::Iter<'_, DropTargetState> {
        self.entries.iter()
    }

    pub(super) fn iter_mut(&mut self) -> std::slice::IterMut<'_, DropTargetState> {
        self.entries.iter_mut()
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(super) fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}
