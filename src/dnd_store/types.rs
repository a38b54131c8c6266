use egui::{Pos2, Rect, Vec2};

use super::drop_target::DropTargetId;

/// Identifier of the item being dragged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DragItemId(pub String);

impl DragItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DragItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DragItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The payload of a drag gesture.
///
/// `kind` is the type tag matched against [`super::DropTarget::accepts`].
/// `metadata` is opaque to the store.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DragItem<Meta> {
    pub id: DragItemId,
    pub kind: String,
    pub metadata: Meta,

    /// The drop target this item was picked up from, if any.
    pub source_zone: Option<DropTargetId>,
}

impl<Meta: Default> DragItem<Meta> {
    /// An item with default metadata and no source zone.
    pub fn new(id: impl Into<DragItemId>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            metadata: Meta::default(),
            source_zone: None,
        }
    }
}

impl<Meta> DragItem<Meta> {
    pub fn with_metadata<M>(self, metadata: M) -> DragItem<M> {
        DragItem {
            id: self.id,
            kind: self.kind,
            metadata,
            source_zone: self.source_zone,
        }
    }

    pub fn with_source_zone(mut self, zone: impl Into<DropTargetId>) -> Self {
        self.source_zone = Some(zone.into());
        self
    }
}

/// Pointer / item geometry during a drag.
///
/// Hit-testing only looks at `pos`; `size` is carried along for the host
/// (e.g. to paint a drag ghost) and is never changed by position updates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DragPosition {
    pub pos: Pos2,
    pub size: Vec2,
}

impl DragPosition {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Pos2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.pos, self.size)
    }
}

impl From<Rect> for DragPosition {
    fn from(rect: Rect) -> Self {
        Self {
            pos: rect.min,
            size: rect.size(),
        }
    }
}
