//! Drop validation shared by every mini-game.
//!
//! A scene owns its `LevelState` and a `DropRule`. Each release of a dragged
//! item goes through `DropRule::apply`, which returns the new state together
//! with a `DropOutcome` the scene turns into tweens, sounds and labels.

pub mod item;
pub mod lights_out;
pub mod radius;
pub mod sequence;
pub mod zone;

use glam::Vec2;
use kosmos_engine::Rng;

pub use item::{DraggableItem, PointTarget, TargetDescriptor};
pub use lights_out::{GridLayout, LightsOut};
pub use radius::{Metric, MissPolicy};
pub use sequence::Circle;
pub use zone::{HitMode, TargetZone, ZoneMatch};

/// Where a level stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelPhase {
    #[default]
    Playing,
    /// A wrong drop was made; the level respawns once the delay elapses.
    ResetPending,
    Complete,
}

/// Progress counters of one level, passed to and returned from validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelState {
    pub placed: u32,
    pub total: u32,
    /// Next expected position in an ordered sequence.
    pub sequence_index: usize,
    pub phase: LevelPhase,
}

impl LevelState {
    pub fn new(total: u32) -> Self {
        Self {
            placed: 0,
            total,
            sequence_index: 0,
            phase: LevelPhase::Playing,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == LevelPhase::Playing
    }

    pub fn is_complete(&self) -> bool {
        self.phase == LevelPhase::Complete
    }

    /// Count one more correct placement, completing the level at `total`.
    pub fn record_placement(self) -> Self {
        let placed = self.placed + 1;
        Self {
            placed,
            phase: if placed >= self.total {
                LevelPhase::Complete
            } else {
                self.phase
            },
            ..self
        }
    }

    pub fn schedule_reset(self) -> Self {
        Self {
            phase: LevelPhase::ResetPending,
            ..self
        }
    }

    /// Back to zero progress, ready for play.
    pub fn reset(self) -> Self {
        Self::new(self.total)
    }

    /// "n/total" for progress labels.
    pub fn progress(&self) -> String {
        format!("{}/{}", self.placed, self.total)
    }
}

/// Result of validating one drop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropOutcome {
    /// Counted; the item snaps to `snap_to` and stays there.
    Placed { snap_to: Vec2 },
    /// Counted; the item is used up and leaves the scene.
    Consumed,
    /// Missed; the item goes back to `return_to`.
    Rejected { return_to: Vec2 },
    /// Landed only on zones expecting another type.
    WrongZone { zone: usize },
    /// Landed outside every zone.
    NoZone,
    /// Out of order; the whole level resets after `delay` seconds.
    ResetScheduled { delay: f32 },
    /// Nothing happens.
    Ignored,
}

impl DropOutcome {
    pub fn counted(&self) -> bool {
        matches!(self, DropOutcome::Placed { .. } | DropOutcome::Consumed)
    }
}

/// One configurable validator, parameterised by strategy.
#[derive(Debug, Clone)]
pub enum DropRule {
    /// Each item carries its own `PointTarget`.
    Radius { on_miss: MissPolicy },
    /// Items carry a type; zones say which type they accept.
    Zones {
        zones: Vec<TargetZone>,
        hit: HitMode,
        /// Snap somewhere inside the inner half of the zone instead of its centre.
        jitter: bool,
    },
    /// Items must enter `receiver` in exactly the order of `expected`.
    Sequence {
        expected: Vec<String>,
        receiver: Circle,
        reset_delay: f32,
    },
}

impl DropRule {
    /// Validate the release of `item` at its current position.
    pub fn apply(
        &self,
        item: &mut DraggableItem,
        state: LevelState,
        rng: &mut Rng,
    ) -> (LevelState, DropOutcome) {
        if item.placed || !state.is_playing() {
            return (state, DropOutcome::Ignored);
        }
        let (state, outcome) = match self {
            DropRule::Radius { on_miss } => radius::evaluate(item, state, *on_miss),
            DropRule::Zones { zones, hit, jitter } => {
                zone::evaluate(item, state, zones, *hit, jitter.then_some(rng))
            }
            DropRule::Sequence { expected, receiver, reset_delay } => {
                sequence::evaluate(item, state, expected, *receiver, *reset_delay)
            }
        };
        log::debug!("drop '{}' at {:?}: {:?} ({})", item.key, item.pos, outcome, state.progress());
        (state, outcome)
    }
}
