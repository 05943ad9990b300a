//! Fixed-target validation: an item belongs to one point.

use glam::Vec2;
use serde::Deserialize;

use super::item::{DraggableItem, TargetDescriptor};
use super::{DropOutcome, LevelState};

/// How "close enough" is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// `|dx| < tol && |dy| < tol`
    Axis,
    /// `distance <= tol`
    Euclidean,
}

impl Metric {
    pub fn within(self, a: Vec2, b: Vec2, tolerance: f32) -> bool {
        match self {
            Metric::Axis => (a.x - b.x).abs() < tolerance && (a.y - b.y).abs() < tolerance,
            Metric::Euclidean => a.distance(b) <= tolerance,
        }
    }
}

/// What a missed drop does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissPolicy {
    /// Leave the item where it was dropped.
    Stay,
    /// Send it back to its start position.
    Return,
}

pub(super) fn evaluate(
    item: &mut DraggableItem,
    state: LevelState,
    on_miss: MissPolicy,
) -> (LevelState, DropOutcome) {
    let TargetDescriptor::Point(target) = &item.target else {
        log::warn!("item '{}' has no point target", item.key);
        return (state, DropOutcome::Ignored);
    };

    if target.metric.within(item.pos, target.pos, target.tolerance) {
        let snap_to = target.snap_pos();
        item.pos = snap_to;
        item.placed = true;
        return (state.record_placement(), DropOutcome::Placed { snap_to });
    }

    match on_miss {
        MissPolicy::Stay => (state, DropOutcome::Ignored),
        MissPolicy::Return => {
            item.pos = item.start;
            (state, DropOutcome::Rejected { return_to: item.start })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::item::PointTarget;

    #[test]
    fn axis_metric_is_strict() {
        let t = Vec2::new(470.0, 300.0);
        assert!(Metric::Axis.within(Vec2::new(504.9, 265.1), t, 35.0));
        assert!(!Metric::Axis.within(Vec2::new(505.0, 300.0), t, 35.0));
        // Diagonal: outside a 35 px circle, inside the box.
        assert!(Metric::Axis.within(Vec2::new(500.0, 330.0), t, 35.0));
    }

    #[test]
    fn euclidean_metric_is_inclusive() {
        let t = Vec2::new(450.0, 490.0);
        assert!(Metric::Euclidean.within(Vec2::new(480.0, 530.0), t, 50.0));
        assert!(!Metric::Euclidean.within(Vec2::new(481.0, 530.0), t, 50.0));
    }

    #[test]
    fn hit_snaps_with_offset_and_counts_once() {
        let target = PointTarget::radius(Vec2::new(615.0, 410.0), 50.0).with_snap_offset(Vec2::new(9.0, 24.0));
        let mut item = DraggableItem::at_point("door", Vec2::new(400.0, 520.0), Vec2::splat(80.0), target);
        item.pos = Vec2::new(640.0, 420.0);

        let (state, outcome) = evaluate(&mut item, LevelState::new(8), MissPolicy::Return);
        assert_eq!(outcome, DropOutcome::Placed { snap_to: Vec2::new(624.0, 434.0) });
        assert_eq!(state.placed, 1);
        assert!(item.placed);
        assert_eq!(item.pos, Vec2::new(624.0, 434.0));
    }

    #[test]
    fn miss_returns_or_stays() {
        let target = PointTarget::radius(Vec2::new(615.0, 410.0), 50.0);
        let mut item = DraggableItem::at_point("door", Vec2::new(400.0, 520.0), Vec2::splat(80.0), target);
        item.pos = Vec2::new(100.0, 100.0);

        let (state, outcome) = evaluate(&mut item.clone(), LevelState::new(8), MissPolicy::Stay);
        assert_eq!(outcome, DropOutcome::Ignored);
        assert_eq!(state.placed, 0);

        let (_, outcome) = evaluate(&mut item, LevelState::new(8), MissPolicy::Return);
        assert_eq!(outcome, DropOutcome::Rejected { return_to: Vec2::new(400.0, 520.0) });
        assert_eq!(item.pos, item.start);
        assert!(!item.placed);
    }
}
