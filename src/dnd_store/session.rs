/// Identifies one drag gesture, from `start_drag` to `end_drag`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DragSessionId(pub u64);

impl std::fmt::Display for DragSessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Default)]
pub(super) struct DragSession {
    next_id: u64,
    active: Option<ActiveSession>,
}

#[derive(Debug)]
struct ActiveSession {
    id: DragSessionId,
    moves: u64,
}

impl DragSession {
    /// Opens a new session, closing any session still open.
    ///
    /// Returns the new id and the id of the session it replaced, if any.
    pub(super) fn start(&mut self) -> (DragSessionId, Option<DragSessionId>) {
        let id = self.next_id.max(1);
        self.next_id = id.saturating_add(1);
        let replaced = self.active.replace(ActiveSession {
            id: DragSessionId(id),
            moves: 0,
        });
        (DragSessionId(id), replaced.map(|s| s.id))
    }

    pub(super) fn observe_move(&mut self) -> Option<DragSessionId> {
        let active = self.active.as_mut()?;
        active.moves = active.moves.saturating_add(1);
        Some(active.id)
    }

    /// Closes the active session, returning its id and the number of position updates it saw.
    pub(super) fn end(&mut self) -> Option<(DragSessionId, u64)> {
        self.active.take().map(|s| (s.id, s.moves))
    }

    pub(super) fn active_id(&self) -> Option<DragSessionId> {
        self.active.as_ref().map(|s| s.id)
    }
}
