use egui::Pos2;

use super::drop_target::DropTargetId;
use super::session::DragSessionId;
use super::types::DragItemId;

/// A state change of a [`super::DndStore`], delivered to subscribers right after it happened.
///
/// Events carry just enough to decide whether to re-query the store.
/// Calls that turn out to be no-ops produce no events.
#[derive(Clone, Debug, PartialEq)]
pub enum DndEvent {
    DragStarted {
        session: DragSessionId,
        item_id: DragItemId,
        kind: String,
    },

    DragMoved {
        session: DragSessionId,
        pos: Pos2,
    },

    /// The active drop target changed, either through hit-testing or an explicit set.
    ActiveTargetChanged {
        previous: Option<DropTargetId>,
        current: Option<DropTargetId>,
    },

    DragEnded {
        session: DragSessionId,
        item_id: DragItemId,
        dropped_on: Option<DropTargetId>,
    },

    TargetRegistered {
        id: DropTargetId,

        /// An entry with this id already existed and was replaced.
        replaced: bool,
    },

    TargetUnregistered {
        id: DropTargetId,
    },

    /// Everything was cleared by [`super::DndStore::reset`].
    Reset,
}

/// Handle returned by [`super::DndStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&DndEvent)>;

#[derive(Default)]
pub(super) struct Observers {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback)>,
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl Observers {
    pub(super) fn subscribe(
        &mut self,
        callback: impl FnMut(&DndEvent) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub(super) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Calls subscribers in subscription order.
    pub(super) fn notify(&mut self, event: &DndEvent) {
        for (_, callback) in &mut self.subscribers {
            callback(event);
        }
    }

    pub(super) fn len(&self) -> usize {
        self.subscribers.len()
    }
}
