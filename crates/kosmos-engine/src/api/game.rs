use glam::Vec2;
use crate::api::types::{EntityId, SoundEvent, GameEvent};
use crate::assets::registry::SpriteRegistry;
use crate::components::entity::Entity;
use crate::components::sprite::SpriteComponent;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::core::timer::{TimerId, TimerQueue};
use crate::extensions::tween::{Tween, TweenId, TweenState};
use crate::input::drag::{DragEvent, DragTracker};
use crate::input::queue::InputQueue;
use crate::systems::animation::tick_animations;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Clear colour as 0xRRGGBB.
    pub background_color: u32,
    /// Maximum number of render instances (default: 512).
    pub max_instances: usize,
    /// Maximum number of sound events per frame (default: 32).
    pub max_sounds: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Pointer travel in pixels before a press becomes a drag.
    pub drag_threshold: f32,
    /// Initial RNG seed; the host may reseed at startup.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            background_color: 0x00_00_00,
            max_instances: 512,
            max_sounds: 32,
            max_events: 32,
            drag_threshold: 10.0,
            seed: 42,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The game loop tick: react to input and signals, spawn/despawn entities.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Something the engine finished since the previous update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// A timer scheduled with `after`/`every` fired its event.
    Timer(u32),
    /// A tween tagged with `with_on_complete(tag)` ended on `entity`.
    TweenDone { entity: EntityId, tag: u32 },
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub tweens: TweenState,
    pub timers: TimerQueue,
    pub drag: DragTracker,
    pub sprites: SpriteRegistry,
    pub rng: Rng,
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
    /// CSS classes the host applies to the page body.
    pub theme: Vec<String>,
    world: Vec2,
    signals: Vec<Signal>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            scene: Scene::new(),
            tweens: TweenState::new(),
            timers: TimerQueue::new(),
            drag: DragTracker::new(config.drag_threshold),
            sprites: SpriteRegistry::new(),
            rng: Rng::new(config.seed),
            sounds: Vec::new(),
            events: Vec::new(),
            theme: Vec::new(),
            world: Vec2::new(config.world_width, config.world_height),
            signals: Vec::new(),
            next_id: 1,
        }
    }

    /// World size in game units.
    pub fn world(&self) -> Vec2 {
        self.world
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (sounds, events).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }

    /// Add an entity to the scene and return its id.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        self.scene.spawn(entity);
        id
    }

    /// Remove an entity and every tween driving it.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        self.tweens.remove_entity(id);
        self.scene.despawn(id)
    }

    /// Resolve a sprite by manifest name, warning once if it is missing.
    pub fn sprite(&mut self, name: &str) -> Option<SpriteComponent> {
        self.sprites.sprite_or_warn(name)
    }

    pub fn tween(&mut self, id: EntityId, tween: Tween) -> TweenId {
        self.tweens.add(id, tween)
    }

    /// Schedule `event` to fire once after `delay` seconds.
    pub fn after(&mut self, delay: f32, event: u32) -> TimerId {
        self.timers.after(delay, event)
    }

    /// Schedule `event` to fire every `interval` seconds.
    pub fn every(&mut self, interval: f32, event: u32) -> TimerId {
        self.timers.every(interval, event)
    }

    /// Drag gestures for this update. Grabbing an entity stops its tweens.
    pub fn poll_drag(&mut self, input: &InputQueue) -> Vec<DragEvent> {
        let events = self.drag.process(input, &self.scene);
        for event in &events {
            if let DragEvent::Start { entity, .. } = event {
                self.tweens.remove_entity(*entity);
            }
        }
        events
    }

    /// Signals produced since the last call.
    pub fn take_signals(&mut self) -> Vec<Signal> {
        std::mem::take(&mut self.signals)
    }

    /// Advance tweens, timers and sprite animations by one fixed step.
    /// Called by the runner after `Game::update`.
    pub fn step_systems(&mut self, dt: f32) {
        for done in self.tweens.tick(dt, &mut self.scene) {
            if let Some(tag) = done.on_complete {
                self.signals.push(Signal::TweenDone { entity: done.entity, tag });
            }
            if done.despawn {
                self.despawn(done.entity);
            }
        }
        for event in self.timers.tick(dt) {
            self.signals.push(Signal::Timer(event));
        }
        tick_animations(&mut self.scene, dt);
    }

    /// Drop everything scene-local: entities, tweens, timers, pending signals,
    /// the active drag and the theme. Sprites, RNG and ids are kept.
    pub fn reset_scene(&mut self) {
        self.scene.clear();
        self.tweens.clear();
        self.timers.clear();
        self.drag.cancel();
        self.signals.clear();
        self.theme.clear();
    }

    pub fn set_theme(&mut self, classes: &[&str]) {
        self.theme = classes.iter().map(|c| c.to_string()).collect();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
