//! Loading queue.

use phosphor_core::ElementId;
use serde::{Deserialize, Serialize};

/// Ordered set of element ids awaiting external preparation.
///
/// Entries are appended at parse time for elements carrying an `onLoad`
/// marker and removed when the loader reports them ready. The engine only
/// tracks membership; how the preparation happens is up to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingQueue {
    pending: Vec<ElementId>,
}

impl LoadingQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an id unless it is already queued.
    pub fn push(&mut self, id: ElementId) {
        if !self.contains(id) {
            self.pending.push(id);
        }
    }

    /// Removes an id, returning whether it was queued.
    pub fn remove(&mut self, id: ElementId) -> bool {
        match self.pending.iter().position(|queued| *queued == id) {
            Some(index) => {
                self.pending.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether the id is still waiting.
    pub fn contains(&self, id: ElementId) -> bool {
        self.pending.contains(&id)
    }

    /// Queued ids, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.pending.iter().copied()
    }

    /// Number of queued ids.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
