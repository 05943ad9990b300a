//! Ordered-sequence validation: ingredients go into the cauldron one by one.

use glam::Vec2;

use super::item::DraggableItem;
use super::{DropOutcome, LevelState};

/// A round drop area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Strictly inside.
    pub fn contains(&self, p: Vec2) -> bool {
        p.distance(self.center) < self.radius
    }
}

pub(super) fn evaluate(
    item: &mut DraggableItem,
    state: LevelState,
    expected: &[String],
    receiver: Circle,
    reset_delay: f32,
) -> (LevelState, DropOutcome) {
    if !receiver.contains(item.pos) {
        return (state, DropOutcome::Ignored);
    }

    match expected.get(state.sequence_index) {
        Some(key) if *key == item.key => {
            item.placed = true;
            let state = LevelState {
                sequence_index: state.sequence_index + 1,
                ..state.record_placement()
            };
            (state, DropOutcome::Consumed)
        }
        _ => (state.schedule_reset(), DropOutcome::ResetScheduled { delay: reset_delay }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::{DropRule, LevelPhase};
    use kosmos_engine::Rng;

    const CAULDRON: Vec2 = Vec2::new(485.0, 350.0);

    fn rule() -> DropRule {
        DropRule::Sequence {
            expected: ["mushroom", "sheet", "stick"].iter().map(|s| s.to_string()).collect(),
            receiver: Circle::new(CAULDRON, 100.0),
            reset_delay: 1.5,
        }
    }

    fn dropped(key: &str, at: Vec2) -> DraggableItem {
        let mut item = DraggableItem::in_sequence(key, Vec2::new(820.0, 560.0), Vec2::splat(70.0));
        item.pos = at;
        item
    }

    #[test]
    fn circle_edge_is_outside() {
        let c = Circle::new(CAULDRON, 100.0);
        assert!(c.contains(CAULDRON + Vec2::new(99.9, 0.0)));
        assert!(!c.contains(CAULDRON + Vec2::new(100.0, 0.0)));
    }

    #[test]
    fn correct_key_advances_by_one() {
        let mut rng = Rng::new(3);
        let mut item = dropped("mushroom", CAULDRON);
        let (state, outcome) = rule().apply(&mut item, LevelState::new(3), &mut rng);
        assert_eq!(outcome, DropOutcome::Consumed);
        assert_eq!(state.sequence_index, 1);
        assert_eq!(state.placed, 1);
        assert!(item.placed);
    }

    #[test]
    fn wrong_key_schedules_reset_and_blocks_drops() {
        let mut rng = Rng::new(3);
        let mut first = dropped("mushroom", CAULDRON);
        let (state, _) = rule().apply(&mut first, LevelState::new(3), &mut rng);

        let mut wrong = dropped("stick", CAULDRON);
        let (state, outcome) = rule().apply(&mut wrong, state, &mut rng);
        assert_eq!(outcome, DropOutcome::ResetScheduled { delay: 1.5 });
        assert_eq!(state.phase, LevelPhase::ResetPending);
        assert!(!wrong.placed);

        let mut next = dropped("sheet", CAULDRON);
        let (pending, outcome) = rule().apply(&mut next, state, &mut rng);
        assert_eq!(outcome, DropOutcome::Ignored);
        assert_eq!(pending, state);

        let state = state.reset();
        assert_eq!(state.sequence_index, 0);
        assert_eq!(state.placed, 0);
        assert!(state.is_playing());
    }

    #[test]
    fn drop_outside_cauldron_is_ignored() {
        let mut item = dropped("sheet", Vec2::new(100.0, 100.0));
        let (state, outcome) = rule().apply(&mut item, LevelState::new(3), &mut Rng::new(3));
        assert_eq!(outcome, DropOutcome::Ignored);
        assert!(state.is_playing());
    }

    #[test]
    fn full_sequence_completes() {
        let mut rng = Rng::new(3);
        let mut state = LevelState::new(3);
        for key in ["mushroom", "sheet", "stick"] {
            let (next, outcome) = rule().apply(&mut dropped(key, CAULDRON), state, &mut rng);
            assert_eq!(outcome, DropOutcome::Consumed);
            state = next;
        }
        assert!(state.is_complete());
        let (_, outcome) = rule().apply(&mut dropped("mushroom", CAULDRON), state, &mut rng);
        assert_eq!(outcome, DropOutcome::Ignored);
    }
}
