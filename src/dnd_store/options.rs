/// Options for [`super::DndStore`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DndStoreOptions {
    /// What happens when a drop target is registered while a drag is already active.
    ///
    /// - `false` (default): the new entry starts neutral (`can_drop == false`) and only becomes
    ///   droppable with the next `start_drag`.
    /// - `true`: `can_drop` is computed right away against the active drag item.
    ///
    /// In both cases `is_over` starts `false` and is only set by the next position update.
    pub recompute_can_drop_on_register: bool,

    /// Record a human-readable line for every state change
    /// (see [`super::DndStore::debug_log_text`]).
    pub debug_event_log: bool,

    /// Maximum number of lines kept in the debug event log. Clamped to `1..=10_000`.
    pub debug_event_log_capacity: usize,
}

impl Default for DndStoreOptions {
    fn default() -> Self {
        Self {
            recompute_can_drop_on_register: false,
            debug_event_log: false,
            debug_event_log_capacity: 256,
        }
    }
}
