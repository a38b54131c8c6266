use std::collections::BTreeSet;

use egui::{Pos2, Rect, Vec2};

/// Identifier of a registered drop zone.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DropTargetId(pub String);

impl DropTargetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DropTargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DropTargetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DropTargetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// What a zone component hands to [`super::DndStore::register_drop_target`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DropTarget {
    pub id: DropTargetId,

    /// Bounding box, in the same coordinate space as [`super::DragPosition`].
    pub rect: Rect,

    /// Type tags (see [`super::DragItem::kind`]) this zone accepts.
    pub accepts: BTreeSet<String>,
}

impl DropTarget {
    pub fn new(id: impl Into<DropTargetId>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            rect,
            accepts: BTreeSet::new(),
        }
    }

    /// Box given as `x, y, width, height`.
    pub fn from_xywh(id: impl Into<DropTargetId>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(
            id,
            Rect::from_min_size(Pos2::new(x, y), Vec2::new(width, height)),
        )
    }

    pub fn accepting<S: Into<String>>(mut self, kinds: impl IntoIterator<Item = S>) -> Self {
        self.accepts.extend(kinds.into_iter().map(Into::into));
        self
    }

    pub fn accepts(&self, kind: &str) -> bool {
        self.accepts.contains(kind)
    }

    /// Inclusive on all four edges. Any NaN coordinate (point or box) yields `false`.
    pub fn contains(&self, pos: Pos2) -> bool {
        self.rect.contains(pos)
    }
}

/// A registered target together with the flags the store derives for it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DropTargetState {
    pub target: DropTarget,

    /// The active drag item's kind is in `accepts`. Geometry plays no part.
    pub can_drop: bool,

    /// This target is the current hit-test winner.
    pub is_over: bool,
}

impl DropTargetState {
    pub(super) fn neutral(target: DropTarget) -> Self {
        Self {
            target,
            can_drop: false,
            is_over: false,
        }
    }

    pub fn id(&self) -> &DropTargetId {
        &self.target.id
    }

    pub(super) fn clear_flags(&mut self) {
        self.can_drop = false;
        self.is_over = false;
    }
}
