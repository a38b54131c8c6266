use super::drop_target::{DropTargetId, DropTargetState};
use super::session::DragSessionId;
use super::types::{DragItem, DragPosition};
use super::DndStore;

/// An owned copy of everything observable on a [`DndStore`].
///
/// Handy for hosts that diff state between frames, and for debugging dumps
/// (serializable with the `serde` feature).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DndSnapshot<Meta> {
    pub is_dragging: bool,
    pub session: Option<DragSessionId>,
    pub drag_item: Option<DragItem<Meta>>,
    pub drag_position: Option<DragPosition>,

    /// In registry order.
    pub drop_targets: Vec<DropTargetState>,
    pub active_drop_target_id: Option<DropTargetId>,
}

impl<Meta> DndSnapshot<Meta> {
    pub fn drop_target(&self, id: &DropTargetId) -> Option<&DropTargetState> {
        self.drop_targets.iter().find(|state| state.id() == id)
    }
}

impl<Meta: Clone> DndStore<Meta> {
    pub fn snapshot(&self) -> DndSnapshot<Meta> {
        DndSnapshot {
            is_dragging: self.is_dragging,
            session: self.session.active_id(),
            drag_item: self.drag_item.clone(),
            drag_position: self.drag_position,
            drop_targets: self.targets.iter().cloned().collect(),
            active_drop_target_id: self.active_drop_target.clone(),
        }
    }
}
