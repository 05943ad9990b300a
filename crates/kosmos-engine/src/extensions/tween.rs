// extensions/tween.rs
//
// Tweens: animated value transitions keyed by EntityId.
//
// Usage:
//   let mut tweens = TweenState::new();
//   tweens.add(id, Tween::position(from, to, 0.2, Easing::QuadOut).with_on_complete(RETURNED));
//   let finished = tweens.tick(dt, &mut scene);

use glam::Vec2;
use crate::api::types::EntityId;
use crate::core::scene::Scene;
use super::easing::{Easing, ease, ease_vec2};

/// What property a tween animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenTarget {
    /// Animate Entity.pos
    Position { from: Vec2, to: Vec2 },
    /// Animate Entity.pos.y only
    PositionY { from: f32, to: f32 },
    /// Animate Entity.scale (world size)
    Scale { from: Vec2, to: Vec2 },
    /// Animate sprite and text opacity
    Alpha { from: f32, to: f32 },
}

/// What happens when a tween reaches its end value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TweenLoop {
    /// Stop and remove the tween.
    #[default]
    Once,
    /// Play back to the start value once, then stop.
    Yoyo,
    /// Restart from the beginning forever.
    Loop,
}

/// A single tween animation.
#[derive(Debug, Clone)]
pub struct Tween {
    pub target: TweenTarget,
    /// Duration of one leg in seconds.
    pub duration: f32,
    /// Seconds to wait before the first leg starts.
    pub delay: f32,
    elapsed: f32,
    pub easing: Easing,
    pub loop_mode: TweenLoop,
    forward: bool,
    /// Tag reported back through `TweenFinished` when the tween ends.
    pub on_complete: Option<u32>,
    /// Remove the entity from the scene when the tween ends.
    pub despawn_on_complete: bool,
}

impl Tween {
    fn new(target: TweenTarget, duration: f32, easing: Easing) -> Self {
        Self {
            target,
            duration,
            delay: 0.0,
            elapsed: 0.0,
            easing,
            loop_mode: TweenLoop::Once,
            forward: true,
            on_complete: None,
            despawn_on_complete: false,
        }
    }

    pub fn position(from: Vec2, to: Vec2, duration: f32, easing: Easing) -> Self {
        Self::new(TweenTarget::Position { from, to }, duration, easing)
    }

    pub fn position_y(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self::new(TweenTarget::PositionY { from, to }, duration, easing)
    }

    pub fn scale(from: Vec2, to: Vec2, duration: f32, easing: Easing) -> Self {
        Self::new(TweenTarget::Scale { from, to }, duration, easing)
    }

    pub fn alpha(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self::new(TweenTarget::Alpha { from, to }, duration, easing)
    }

    /// Fade out to transparent.
    pub fn fade_out(duration: f32, easing: Easing) -> Self {
        Self::alpha(1.0, 0.0, duration, easing)
    }

    // -- Builder methods --

    pub fn with_loop(mut self, mode: TweenLoop) -> Self {
        self.loop_mode = mode;
        self
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn with_on_complete(mut self, tag: u32) -> Self {
        self.on_complete = Some(tag);
        self
    }

    pub fn despawn_on_complete(mut self) -> Self {
        self.despawn_on_complete = true;
        self
    }

    /// Normalized progress of the current leg [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Advance by `dt`. Returns the eased parameter to apply (None while
    /// delayed) and whether the tween is done.
    fn advance(&mut self, dt: f32) -> (Option<f32>, bool) {
        let mut dt = dt;
        if self.delay > 0.0 {
            self.delay -= dt;
            if self.delay > 0.0 {
                return (None, false);
            }
            dt = -self.delay;
            self.delay = 0.0;
        }

        self.elapsed += dt;
        let t = self.progress();
        let value = if self.forward { t } else { 1.0 - t };

        let mut done = false;
        if self.elapsed >= self.duration {
            match self.loop_mode {
                TweenLoop::Once => done = true,
                TweenLoop::Yoyo if self.forward => {
                    self.forward = false;
                    self.elapsed = 0.0;
                }
                TweenLoop::Yoyo => done = true,
                TweenLoop::Loop => self.elapsed = 0.0,
            }
        }
        (Some(value), done)
    }

    fn apply(&self, scene: &mut Scene, entity: EntityId, t: f32) {
        let Some(entity) = scene.get_mut(entity) else { return };
        match self.target {
            TweenTarget::Position { from, to } => {
                entity.pos = ease_vec2(from, to, t, self.easing);
            }
            TweenTarget::PositionY { from, to } => {
                entity.pos.y = ease(from, to, t, self.easing);
            }
            TweenTarget::Scale { from, to } => {
                entity.scale = ease_vec2(from, to, t, self.easing);
            }
            TweenTarget::Alpha { from, to } => {
                entity.set_alpha(ease(from, to, t, self.easing));
            }
        }
    }
}

/// Handle to a tween for later reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenId(pub u32);

/// Report for a tween that ended this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweenFinished {
    pub entity: EntityId,
    pub on_complete: Option<u32>,
    pub despawn: bool,
}

/// Manages all active tweens, advanced in insertion order.
#[derive(Debug, Default)]
pub struct TweenState {
    tweens: Vec<(TweenId, EntityId, Tween)>,
    next_id: u32,
}

impl TweenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tween for an entity. Returns a handle for later control.
    pub fn add(&mut self, entity: EntityId, tween: Tween) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tweens.push((id, entity, tween));
        id
    }

    pub fn remove(&mut self, id: TweenId) -> bool {
        let before = self.tweens.len();
        self.tweens.retain(|(t, _, _)| *t != id);
        self.tweens.len() != before
    }

    /// Remove all tweens for an entity. Completion tags are not reported.
    pub fn remove_entity(&mut self, entity: EntityId) {
        self.tweens.retain(|(_, e, _)| *e != entity);
    }

    pub fn has_entity(&self, entity: EntityId) -> bool {
        self.tweens.iter().any(|(_, e, _)| *e == entity)
    }

    /// Advance all tweens and apply them to entities in the scene.
    /// Tweens whose entity no longer exists are dropped without a report.
    pub fn tick(&mut self, dt: f32, scene: &mut Scene) -> Vec<TweenFinished> {
        let mut finished = Vec::new();

        self.tweens.retain_mut(|(_, entity, tween)| {
            if !scene.contains(*entity) {
                return false;
            }
            let (value, done) = tween.advance(dt);
            if let Some(t) = value {
                tween.apply(scene, *entity, t);
            }
            if done {
                finished.push(TweenFinished {
                    entity: *entity,
                    on_complete: tween.on_complete,
                    despawn: tween.despawn_on_complete,
                });
            }
            !done
        });

        finished
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn clear(&mut self) {
        self.tweens.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;
    use crate::components::sprite::SpriteComponent;

    #[test]
    fn tween_position() {
        let mut tweens = TweenState::new();
        let mut scene = Scene::new();
        let id = EntityId(1);

        scene.spawn(Entity::new(id).with_pos(Vec2::ZERO));
        tweens.add(id, Tween::position(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            1.0,
            Easing::Linear,
        ).with_on_complete(4));

        assert!(tweens.tick(0.5, &mut scene).is_empty());
        let e = scene.get(id).unwrap();
        assert!((e.pos.x - 50.0).abs() < 0.01);

        let finished = tweens.tick(0.5, &mut scene);
        let e = scene.get(id).unwrap();
        assert!((e.pos.x - 100.0).abs() < 0.01);
        assert_eq!(
            finished,
            vec![TweenFinished { entity: id, on_complete: Some(4), despawn: false }]
        );
        assert!(tweens.is_empty());
    }

    #[test]
    fn delay_holds_value_then_starts() {
        let mut tweens = TweenState::new();
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id).with_sprite(SpriteComponent::default()));

        tweens.add(id, Tween::fade_out(0.5, Easing::Linear).with_delay(1.0));
        tweens.tick(0.9, &mut scene);
        assert_eq!(scene.get(id).unwrap().sprite.as_ref().unwrap().alpha, 1.0);

        tweens.tick(0.35, &mut scene);
        let alpha = scene.get(id).unwrap().sprite.as_ref().unwrap().alpha;
        assert!((alpha - 0.5).abs() < 0.01, "alpha was {}", alpha);
    }

    #[test]
    fn yoyo_returns_to_start_then_finishes() {
        let mut tweens = TweenState::new();
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id).with_scale(Vec2::splat(10.0)));

        tweens.add(id, Tween::scale(
            Vec2::splat(10.0),
            Vec2::splat(11.0),
            0.1,
            Easing::Linear,
        ).with_loop(TweenLoop::Yoyo));

        tweens.tick(0.1, &mut scene);
        assert!((scene.get(id).unwrap().scale.x - 11.0).abs() < 0.01);
        assert_eq!(tweens.len(), 1);

        let finished = tweens.tick(0.1, &mut scene);
        assert!((scene.get(id).unwrap().scale.x - 10.0).abs() < 0.01);
        assert_eq!(finished.len(), 1);
        assert!(tweens.is_empty());
    }

    #[test]
    fn loop_keeps_running() {
        let mut tweens = TweenState::new();
        let mut scene = Scene::new();
        let id = EntityId(1);

        scene.spawn(Entity::new(id));
        tweens.add(id, Tween::position_y(0.0, 100.0, 1.0, Easing::Linear).with_loop(TweenLoop::Loop));

        assert!(tweens.tick(1.0, &mut scene).is_empty());
        assert_eq!(tweens.len(), 1);
    }

    #[test]
    fn despawn_flag_is_reported() {
        let mut tweens = TweenState::new();
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id));

        tweens.add(id, Tween::fade_out(0.5, Easing::QuadOut).despawn_on_complete());
        let finished = tweens.tick(0.5, &mut scene);
        assert!(finished[0].despawn);
        assert_eq!(finished[0].on_complete, None);
    }

    #[test]
    fn remove_entity_tweens() {
        let mut tweens = TweenState::new();
        let id = EntityId(1);

        tweens.add(id, Tween::position(Vec2::ZERO, Vec2::ONE, 1.0, Easing::Linear));
        tweens.add(id, Tween::alpha(0.0, 1.0, 1.0, Easing::Linear));
        tweens.add(EntityId(2), Tween::alpha(0.0, 1.0, 1.0, Easing::Linear));

        assert_eq!(tweens.len(), 3);
        tweens.remove_entity(id);
        assert!(!tweens.has_entity(id));
        assert_eq!(tweens.len(), 1);
    }

    #[test]
    fn orphaned_tweens_are_dropped() {
        let mut tweens = TweenState::new();
        let mut scene = Scene::new();
        tweens.add(EntityId(9), Tween::position_y(0.0, 1.0, 1.0, Easing::Linear).with_on_complete(1));
        assert!(tweens.tick(2.0, &mut scene).is_empty());
        assert!(tweens.is_empty());
    }
}
