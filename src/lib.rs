//! Drag-and-drop interaction state for egui apps.
//!
//! [`DndStore`] tracks one drag gesture at a time together with a registry of rectangular
//! drop targets, and hit-tests the dragged item against them on every pointer move.
//! It does no painting and no input handling of its own: the host feeds it pointer events and
//! reads back which target is droppable ([`DropTargetState::can_drop`]) and which one the
//! pointer is over ([`DropTargetState::is_over`]).
//!
//! ```
//! use egui_dnd_store::{DndStore, DragItem, DragPosition, DropTarget};
//!
//! let mut store: DndStore = DndStore::new();
//! store.register_drop_target(
//!     DropTarget::from_xywh("trash", 0.0, 0.0, 100.0, 100.0).accepting(["file"]),
//! );
//!
//! store.start_drag(
//!     DragItem::new("report.pdf", "file"),
//!     DragPosition::new(300.0, 300.0, 40.0, 40.0),
//! );
//! store.update_drag_position(egui::pos2(50.0, 50.0));
//! assert_eq!(store.active_drop_target_id().map(|id| id.as_str()), Some("trash"));
//!
//! let outcome = store.end_drag().expect("a drag was active");
//! assert_eq!(outcome.target.map(|id| id.0), Some("trash".to_owned()));
//! ```

#![forbid(unsafe_code)]

pub mod dnd_store;

pub use dnd_store::{
    DndEvent, DndSnapshot, DndStore, DndStoreOptions, DragItem, DragItemId, DragPosition,
    DragSessionId, DropOutcome, DropTarget, DropTargetId, DropTargetState, SubscriptionId,
};

#[cfg(feature = "persistence")]
pub use dnd_store::{DROP_TARGET_LAYOUT_VERSION, DropTargetLayout, LayoutPersistenceError};
