//! Zone validation: typed items dropped onto typed rectangles.

use glam::Vec2;
use kosmos_engine::{Rect, Rng};
use serde::Deserialize;

use super::item::DraggableItem;
use super::{DropOutcome, LevelState};

/// A rectangle that accepts one item type.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetZone {
    pub id: String,
    pub rect: Rect,
    pub expects: String,
}

impl TargetZone {
    pub fn new(id: impl Into<String>, rect: Rect, expects: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rect,
            expects: expects.into(),
        }
    }

    fn hit_by(&self, item: &DraggableItem, hit: HitMode) -> bool {
        match hit {
            HitMode::Overlap => self.rect.intersects(&item.bounds()),
            HitMode::Contains => self.rect.contains(item.pos),
        }
    }
}

/// What counts as "landed on a zone".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitMode {
    /// Item bounds intersect the zone.
    Overlap,
    /// Zone contains the item centre.
    Contains,
}

/// Zone lookup result, indices into the zone list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneMatch {
    Accepted(usize),
    Wrong(usize),
    Outside,
}

/// First hit zone that accepts `kind`; otherwise the first hit zone at all.
pub fn find_zone(zones: &[TargetZone], item: &DraggableItem, hit: HitMode, kind: &str) -> ZoneMatch {
    let mut wrong = None;
    for (i, zone) in zones.iter().enumerate() {
        if !zone.hit_by(item, hit) {
            continue;
        }
        if zone.expects == kind {
            return ZoneMatch::Accepted(i);
        }
        wrong.get_or_insert(i);
    }
    wrong.map_or(ZoneMatch::Outside, ZoneMatch::Wrong)
}

/// Random point in the inner half of `rect`, whole pixels.
fn jittered(rect: &Rect, rng: &mut Rng) -> Vec2 {
    let quarter = rect.size() / 4.0;
    let dx = rng.between(-quarter.x as i32, quarter.x as i32);
    let dy = rng.between(-quarter.y as i32, quarter.y as i32);
    rect.center() + Vec2::new(dx as f32, dy as f32)
}

pub(super) fn evaluate(
    item: &mut DraggableItem,
    state: LevelState,
    zones: &[TargetZone],
    hit: HitMode,
    jitter: Option<&mut Rng>,
) -> (LevelState, DropOutcome) {
    let Some(kind) = item.kind() else {
        log::warn!("item '{}' has no zone type", item.key);
        return (state, DropOutcome::Ignored);
    };

    match find_zone(zones, item, hit, kind) {
        ZoneMatch::Accepted(i) => {
            let rect = &zones[i].rect;
            let snap_to = match jitter {
                Some(rng) => jittered(rect, rng),
                None => rect.center(),
            };
            item.pos = snap_to;
            item.placed = true;
            (state.record_placement(), DropOutcome::Placed { snap_to })
        }
        ZoneMatch::Wrong(zone) => (state, DropOutcome::WrongZone { zone }),
        ZoneMatch::Outside => (state, DropOutcome::NoZone),
    }
}
