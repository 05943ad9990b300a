use glam::Vec2;
use kosmos_engine::{EntityId, Rect};

use super::radius::Metric;

/// A fixed spot an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointTarget {
    pub pos: Vec2,
    pub tolerance: f32,
    pub metric: Metric,
    /// Added to `pos` when the item snaps in.
    pub snap_offset: Vec2,
}

impl PointTarget {
    /// Strict per-axis box check.
    pub fn axis(pos: Vec2, tolerance: f32) -> Self {
        Self {
            pos,
            tolerance,
            metric: Metric::Axis,
            snap_offset: Vec2::ZERO,
        }
    }

    /// Inclusive distance check.
    pub fn radius(pos: Vec2, tolerance: f32) -> Self {
        Self {
            pos,
            tolerance,
            metric: Metric::Euclidean,
            snap_offset: Vec2::ZERO,
        }
    }

    pub fn with_snap_offset(mut self, offset: Vec2) -> Self {
        self.snap_offset = offset;
        self
    }

    pub fn snap_pos(&self) -> Vec2 {
        self.pos + self.snap_offset
    }
}

/// Where an item is supposed to go.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetDescriptor {
    Point(PointTarget),
    /// Member of an ordered sequence, matched by key.
    Sequence,
    /// Accepted by any zone expecting this type.
    Zone(String),
}

/// Validation-side view of a draggable entity.
#[derive(Debug, Clone, PartialEq)]
pub struct DraggableItem {
    pub key: String,
    /// Scene entity drawn for this item, if spawned.
    pub entity: Option<EntityId>,
    pub start: Vec2,
    pub pos: Vec2,
    pub size: Vec2,
    pub target: TargetDescriptor,
    /// Set once the item was placed or consumed.
    pub placed: bool,
}

impl DraggableItem {
    pub fn new(key: impl Into<String>, start: Vec2, size: Vec2, target: TargetDescriptor) -> Self {
        Self {
            key: key.into(),
            entity: None,
            start,
            pos: start,
            size,
            target,
            placed: false,
        }
    }

    pub fn at_point(key: impl Into<String>, start: Vec2, size: Vec2, target: PointTarget) -> Self {
        Self::new(key, start, size, TargetDescriptor::Point(target))
    }

    pub fn in_sequence(key: impl Into<String>, start: Vec2, size: Vec2) -> Self {
        Self::new(key, start, size, TargetDescriptor::Sequence)
    }

    pub fn of_kind(key: impl Into<String>, kind: impl Into<String>, start: Vec2, size: Vec2) -> Self {
        Self::new(key, start, size, TargetDescriptor::Zone(kind.into()))
    }

    pub fn with_entity(mut self, id: EntityId) -> Self {
        self.entity = Some(id);
        self
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    /// Zone type, for zone-validated items.
    pub fn kind(&self) -> Option<&str> {
        match &self.target {
            TargetDescriptor::Zone(kind) => Some(kind),
            _ => None,
        }
    }
}

/// Find the item drawn by `entity`.
pub fn find_mut(items: &mut [DraggableItem], entity: EntityId) -> Option<&mut DraggableItem> {
    items.iter_mut().find(|item| item.entity == Some(entity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_starts_at_start() {
        let item = DraggableItem::in_sequence("bone", Vec2::new(300.0, 488.0), Vec2::splat(70.0));
        assert_eq!(item.pos, item.start);
        assert!(!item.placed);
        assert_eq!(item.kind(), None);
    }

    #[test]
    fn lookup_by_entity() {
        let mut items = vec![
            DraggableItem::of_kind("holz", "item_red", Vec2::ZERO, Vec2::ONE).with_entity(EntityId(4)),
            DraggableItem::of_kind("metal", "item_blue", Vec2::ZERO, Vec2::ONE).with_entity(EntityId(9)),
        ];
        let found = find_mut(&mut items, EntityId(9)).map(|i| i.key.clone());
        assert_eq!(found.as_deref(), Some("metal"));
        assert!(find_mut(&mut items, EntityId(1)).is_none());
    }

    #[test]
    fn snap_applies_offset() {
        let target = PointTarget::radius(Vec2::new(720.0, 170.0), 50.0).with_snap_offset(Vec2::new(30.0, 9.0));
        assert_eq!(target.snap_pos(), Vec2::new(750.0, 179.0));
    }
}
