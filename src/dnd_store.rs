use std::collections::VecDeque;

use egui::Pos2;

mod debug;
mod drop_target;
mod observer;
mod options;
#[cfg(feature = "persistence")]
mod persistence;
mod registry;
mod session;
mod snapshot;
mod types;


pub use drop_target::{DropTarget, DropTargetId, DropTargetState};
pub use observer::{DndEvent, SubscriptionId};
pub use options::DndStoreOptions;
#[cfg(feature = "persistence")]
pub use persistence::{DROP_TARGET_LAYOUT_VERSION, DropTargetLayout, LayoutPersistenceError};
pub use session::DragSessionId;
pub use snapshot::DndSnapshot;
pub use types::{DragItem, DragItemId, DragPosition};

use observer::Observers;
use registry::DropTargetRegistry;
use session::DragSession;

/// What was being dragged, and where it was released.
///
/// Returned by [`DndStore::end_drag`].
#[derive(Clone, Debug, PartialEq)]
pub struct DropOutcome<Meta> {
    pub session: DragSessionId,
    pub item: DragItem<Meta>,
    pub position: Option<DragPosition>,

    /// The active drop target at release time, if any.
    ///
    /// This can name a target that was re-registered during the drag and has not seen a
    /// position update since, in which case its [`DropTargetState::is_over`] is `false`.
    pub target: Option<DropTargetId>,
}

/// Single source of truth for an in-progress drag gesture and the drop targets it can land on.
///
/// The store is driven by the host's pointer handlers:
/// - pointer down → [`Self::start_drag`]
/// - pointer move → [`Self::update_drag_position`] (runs hit-testing)
/// - pointer up / cancel → [`Self::end_drag`]
///
/// Drop zones call [`Self::register_drop_target`] / [`Self::unregister_drop_target`] when they
/// appear and disappear, and read [`DropTargetState::can_drop`] / [`DropTargetState::is_over`]
/// to paint feedback. Registered targets outlive individual drags.
///
/// Invariants kept by every operation except [`Self::set_active_drop_target`]:
/// - at most one target has `is_over == true`, and it is the active drop target;
/// - while idle, every target has `can_drop == false` and `is_over == false`.
///
/// Nothing here can fail: unknown ids and moves without a drag are silently ignored.
#[derive(Debug)]
pub struct DndStore<Meta = ()> {
    pub options: DndStoreOptions,

    drag_item: Option<DragItem<Meta>>,
    drag_position: Option<DragPosition>,
    is_dragging: bool,
    targets: DropTargetRegistry,
    active_drop_target: Option<DropTargetId>,

    session: DragSession,
    observers: Observers,
    debug_log: VecDeque<String>,
}

impl<Meta> Default for DndStore<Meta> {
    fn default() -> Self {
        Self::with_options(DndStoreOptions::default())
    }
}

impl<Meta> DndStore<Meta> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DndStoreOptions) -> Self {
        Self {
            options,
            drag_item: None,
            drag_position: None,
            is_dragging: false,
            targets: DropTargetRegistry::default(),
            active_drop_target: None,
            session: DragSession::default(),
            observers: Observers::default(),
            debug_log: VecDeque::new(),
        }
    }

    // ------------------------------------------------------------------------
    // Drag gesture

    /// Begins a drag. A drag that is still active is replaced without ending it first.
    ///
    /// Every registered target's `can_drop` is recomputed against `item.kind`, and the active
    /// drop target is cleared until the next [`Self::update_drag_position`].
    pub fn start_drag(&mut self, item: DragItem<Meta>, position: DragPosition) {
        if !(position.pos.is_finite() && position.size.is_finite()) {
            log::trace!("start_drag with non-finite geometry: {position:?}");
        }

        let (session, replaced) = self.session.start();
        if let Some(replaced) = replaced {
            log::debug!("drag {replaced} replaced by {session} without end_drag");
        }

        for state in self.targets.iter_mut() {
            state.can_drop = state.target.accepts(&item.kind);
            state.is_over = false;
        }
        let previous_active = self.active_drop_target.take();

        log::debug!(
            "drag {session} started: item={} kind={} at ({:.1},{:.1})",
            item.id,
            item.kind,
            position.pos.x,
            position.pos.y,
        );
        self.debug_log_event(format!(
            "start item={} kind={} pos=({:.1},{:.1}) size=({:.1},{:.1})",
            item.id, item.kind, position.pos.x, position.pos.y, position.size.x, position.size.y,
        ));

        let event = DndEvent::DragStarted {
            session,
            item_id: item.id.clone(),
            kind: item.kind.clone(),
        };
        self.drag_item = Some(item);
        self.drag_position = Some(position);
        self.is_dragging = true;

        self.observers.notify(&event);
        self.notify_active_changed(previous_active, None);
    }

    /// Moves the dragged item's reference point to `pos` and re-runs hit-testing.
    ///
    /// Width and height of the drag position are kept. Does nothing if no drag is active.
    ///
    /// Hit-testing: a target is a candidate if `can_drop` is set and its box contains `pos`
    /// (edges included). If several candidates overlap, the one registered last wins.
    pub fn update_drag_position(&mut self, pos: Pos2) {
        if self.drag_item.is_none() {
            log::trace!("update_drag_position({pos:?}) ignored: no active drag");
            return;
        }

        if let Some(position) = &mut self.drag_position {
            position.pos = pos;
        }

        let winner = hit_test::drop_target_at(self.targets.iter(), pos).cloned();
        hit_test::apply_is_over(self.targets.iter_mut(), winner.as_ref());

        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "hit-test at ({:.1},{:.1}): candidates=[{}] winner={winner:?}",
                pos.x,
                pos.y,
                hit_test::describe_candidates(self.targets.iter(), pos),
            );
        }

        let previous = std::mem::replace(&mut self.active_drop_target, winner.clone());
        if previous != winner {
            self.debug_log_event(format!(
                "over {} -> {} at ({:.1},{:.1})",
                display_target(previous.as_ref()),
                display_target(winner.as_ref()),
                pos.x,
                pos.y,
            ));
        }

        if let Some(session) = self.session.observe_move() {
            self.observers.notify(&DndEvent::DragMoved { session, pos });
        }
        self.notify_active_changed(previous, winner);
    }

    /// Ends the drag and clears all drag-related state.
    ///
    /// Returns the dragged item and the drop target that was active at release, or `None` if
    /// no drag was active. Calling this while idle is harmless.
    pub fn end_drag(&mut self) -> Option<DropOutcome<Meta>> {
        for state in self.targets.iter_mut() {
            state.clear_flags();
        }
        let target = self.active_drop_target.take();
        let position = self.drag_position.take();
        let item = self.drag_item.take();
        self.is_dragging = false;

        if let Some(item) = &item {
            self.debug_log_event(format!(
                "end item={} dropped_on={}",
                item.id,
                display_target(target.as_ref()),
            ));
        }
        let ended = self.session.end();

        let (Some(item), Some((session, moves))) = (item, ended) else {
            // `set_active_drop_target` may have set a target while idle.
            self.notify_active_changed(target, None);
            return None;
        };

        log::debug!(
            "drag {session} ended after {moves} moves: item={} dropped_on={}",
            item.id,
            display_target(target.as_ref()),
        );

        self.observers.notify(&DndEvent::DragEnded {
            session,
            item_id: item.id.clone(),
            dropped_on: target.clone(),
        });
        self.notify_active_changed(target.clone(), None);

        Some(DropOutcome {
            session,
            item,
            position,
            target,
        })
    }

    // ------------------------------------------------------------------------
    // Drop targets

    /// Adds a drop target, or replaces the one with the same id (keeping its place in the
    /// hit-test order).
    ///
    /// The entry starts with `is_over == false`. `can_drop` starts `false` as well unless
    /// [`DndStoreOptions::recompute_can_drop_on_register`] is set and a drag is active.
    /// The active drop target id is left untouched, even when it names the replaced entry.
    pub fn register_drop_target(&mut self, target: DropTarget) {
        let mut state = DropTargetState::neutral(target);
        if self.options.recompute_can_drop_on_register {
            if let Some(item) = &self.drag_item {
                state.can_drop = state.target.accepts(&item.kind);
            }
        }

        let id = state.id().clone();
        let can_drop = state.can_drop;
        let replaced = self.targets.insert(state);

        log::trace!("registered drop target {id} (replaced={replaced}, can_drop={can_drop})");
        self.debug_log_event(format!("register {id} replaced={replaced} can_drop={can_drop}"));
        self.observers.notify(&DndEvent::TargetRegistered { id, replaced });
    }

    /// Removes a drop target. Unknown ids are ignored.
    ///
    /// If `id` is the active drop target, the active drop target is cleared.
    pub fn unregister_drop_target(&mut self, id: &DropTargetId) {
        let removed = self.targets.remove(id).is_some();
        let was_active = self.active_drop_target.as_ref() == Some(id);

        if removed {
            log::trace!("unregistered drop target {id}");
            self.debug_log_event(format!("unregister {id} was_active={was_active}"));
            self.observers.notify(&DndEvent::TargetUnregistered { id: id.clone() });
        }
        if was_active {
            let previous = self.active_drop_target.take();
            self.notify_active_changed(previous, None);
        }
    }

    /// Sets the active drop target verbatim.
    ///
    /// Bypasses hit-testing: neither the registry nor any `can_drop` / `is_over` flag is
    /// consulted or updated. Meant for tests and hosts that do their own targeting.
    pub fn set_active_drop_target(&mut self, id: Option<DropTargetId>) {
        let previous = std::mem::replace(&mut self.active_drop_target, id.clone());
        if previous != id {
            self.debug_log_event(format!(
                "set_active {} -> {}",
                display_target(previous.as_ref()),
                display_target(id.as_ref()),
            ));
        }
        self.notify_active_changed(previous, id);
    }

    /// Back to a freshly constructed store: no drag, no targets.
    ///
    /// Options, subscribers and the debug log survive.
    pub fn reset(&mut self) {
        self.drag_item = None;
        self.drag_position = None;
        self.is_dragging = false;
        self.targets.clear();
        self.active_drop_target = None;
        if let Some((session, _)) = self.session.end() {
            log::debug!("drag {session} discarded by reset");
        }

        self.debug_log_event("reset");
        self.observers.notify(&DndEvent::Reset);
    }

    // ------------------------------------------------------------------------
    // Observers

    /// Registers a callback that receives every [`DndEvent`] after the state change is applied.
    pub fn subscribe(&mut self, callback: impl FnMut(&DndEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    fn notify_active_changed(
        &mut self,
        previous: Option<DropTargetId>,
        current: Option<DropTargetId>,
    ) {
        if previous != current {
            self.observers.notify(&DndEvent::ActiveTargetChanged { previous, current });
        }
    }

    // ------------------------------------------------------------------------
    // Reading state

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn drag_item(&self) -> Option<&DragItem<Meta>> {
        self.drag_item.as_ref()
    }

    pub fn drag_position(&self) -> Option<&DragPosition> {
        self.drag_position.as_ref()
    }

    /// The session of the active drag, if any.
    pub fn session_id(&self) -> Option<DragSessionId> {
        self.session.active_id()
    }

    pub fn drop_target(&self, id: &DropTargetId) -> Option<&DropTargetState> {
        self.targets.get(id)
    }

    pub fn has_drop_target(&self, id: &DropTargetId) -> bool {
        self.targets.contains(id)
    }

    /// All registered targets, in hit-test order.
    pub fn drop_targets(&self) -> impl Iterator<Item = &DropTargetState> {
        self.targets.iter()
    }

    pub fn drop_target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn active_drop_target_id(&self) -> Option<&DropTargetId> {
        self.active_drop_target.as_ref()
    }

    /// The registry entry of the active drop target, if it is registered.
    pub fn active_drop_target(&self) -> Option<&DropTargetState> {
        self.active_drop_target
            .as_ref()
            .and_then(|id| self.targets.get(id))
    }
}

fn display_target(id: Option<&DropTargetId>) -> &str {
    id.map_or("none", DropTargetId::as_str)
}
