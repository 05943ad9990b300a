//! Level 2: fit the missing pieces into the Egyptian picture.

use glam::Vec2;
use kosmos_engine::{DragEvent, EngineContext, EntityId, Entity, RenderLayer, TextComponent};

use super::common::{self, WHITE};
use super::{Frame, GameScene};
use crate::catalog::PuzzleConfig;
use crate::events::{game_events, sounds};
use crate::flow::SceneKey;
use crate::placement::item::find_mut;
use crate::placement::{DraggableItem, DropOutcome, DropRule, LevelState, PointTarget};

const TITLE: &str = "Level 2: Setze die fehlenden Teile ein";
const LIFT: f32 = 1.1;

const FLASH_SECS: f32 = 0.3;
const FADE_DELAY: f32 = 0.8;
const FADE_SECS: f32 = 1.0;

mod timers {
    pub const NARRATION: u32 = 1;
    pub const FADE: u32 = 2;
    pub const NEXT_SCENE: u32 = 3;
}

/// Tween tags.
mod tags {
    pub const RETURNED: u32 = 1;
}

pub struct PuzzleScene {
    config: PuzzleConfig,
    rule: DropRule,
    items: Vec<DraggableItem>,
    state: LevelState,
    progress: Option<EntityId>,
}

impl PuzzleScene {
    pub fn new(config: PuzzleConfig) -> Self {
        let rule = DropRule::Radius { on_miss: config.on_miss };
        let state = LevelState::new(config.pieces.len() as u32);
        Self {
            config,
            rule,
            items: Vec::new(),
            state,
            progress: None,
        }
    }

    fn progress_text(&self) -> String {
        format!("Ordnung: {}", self.state.progress())
    }

    fn placed_size(&self, key: &str) -> Option<Vec2> {
        self.config
            .pieces
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.size * p.placed_scale)
    }

    fn lift(&self, ctx: &mut EngineContext, entity: EntityId) {
        let Some(item) = self.items.iter().find(|i| i.entity == Some(entity)) else { return };
        if let Some(e) = ctx.scene.get_mut(entity) {
            e.layer = RenderLayer::Lifted;
            e.scale = item.size * LIFT;
        }
    }

    fn drop(&mut self, ctx: &mut EngineContext, entity: EntityId, pos: Vec2) {
        let Some(item) = find_mut(&mut self.items, entity) else { return };
        item.pos = pos;
        let (state, outcome) = self.rule.apply(item, self.state, &mut ctx.rng);
        let (key, size) = (item.key.clone(), item.size);
        self.state = state;

        match outcome {
            DropOutcome::Placed { snap_to } => {
                let placed = self.placed_size(&key).unwrap_or(size);
                if let Some(e) = ctx.scene.get_mut(entity) {
                    e.pos = snap_to;
                    e.scale = placed;
                    e.layer = RenderLayer::Targets;
                    e.lock();
                }
                common::pulse(ctx, entity, placed);
                common::play(ctx, sounds::PIECE_PLACED);
                if let Some(id) = self.progress {
                    common::set_text(ctx, id, self.progress_text());
                }
                common::report_progress(ctx, &self.state);
                if self.state.is_complete() {
                    self.finish(ctx);
                }
            }
            DropOutcome::Rejected { return_to } => {
                common::return_home(ctx, entity, return_to, size, tags::RETURNED);
            }
            _ => {}
        }
    }

    fn finish(&self, ctx: &mut EngineContext) {
        common::report_complete(ctx, SceneKey::LevelTwo);
        common::play(ctx, sounds::STOP_MUSIC);
        common::camera(ctx, game_events::CAMERA_FLASH, FLASH_SECS);
        ctx.after(FADE_DELAY, timers::FADE);
    }
}

impl GameScene for PuzzleScene {
    fn key(&self) -> SceneKey {
        SceneKey::LevelTwo
    }

    fn enter(&mut self, ctx: &mut EngineContext) {
        let world = ctx.world();
        ctx.set_theme(&["level2-background", "level2-game-container"]);
        common::backdrop(ctx, "level2_background");
        common::camera(ctx, game_events::CAMERA_FADE_IN, 1.0);
        common::play(ctx, sounds::LEVEL_TWO_MUSIC);
        ctx.after(2.0, timers::NARRATION);

        common::label(
            ctx,
            Vec2::new(world.x / 2.0, 40.0),
            TextComponent::new(TITLE).with_color(WHITE),
        );

        self.items.clear();
        for piece in &self.config.pieces {
            let target = PointTarget::radius(piece.target, self.config.radius).with_snap_offset(piece.offset);
            let sprite = ctx.sprite(&format!("piece_{}", piece.key));
            let id = ctx.next_id();
            ctx.spawn(
                Entity::new(id)
                    .with_tag(piece.key.as_str())
                    .with_pos(piece.start)
                    .with_scale(piece.size)
                    .with_sprite(sprite)
                    .draggable(),
            );
            self.items.push(
                DraggableItem::at_point(piece.key.as_str(), piece.start, piece.size, target).with_entity(id),
            );
        }

        self.state = self.state.reset();
        self.progress = Some(common::label(
            ctx,
            Vec2::new(world.x / 2.0, world.y - 40.0),
            TextComponent::new(self.progress_text()).with_color(WHITE),
        ));
    }

    fn update(&mut self, ctx: &mut EngineContext, frame: &Frame) -> Option<SceneKey> {
        if frame.timer_fired(timers::NARRATION) {
            common::play(ctx, sounds::NARRATION_TWO);
        }
        if frame.timer_fired(timers::FADE) {
            common::camera(ctx, game_events::CAMERA_FADE_OUT, FADE_SECS);
            ctx.after(FADE_SECS, timers::NEXT_SCENE);
        }
        if frame.timer_fired(timers::NEXT_SCENE) {
            return Some(SceneKey::LevelThree);
        }

        for entity in frame.tweens_done(tags::RETURNED) {
            common::set_layer(ctx, entity, RenderLayer::Items);
        }

        for event in ctx.poll_drag(frame.input) {
            match event {
                DragEvent::Start { entity, .. } => self.lift(ctx, entity),
                DragEvent::Move { entity, pos } => common::move_entity(ctx, entity, pos),
                DragEvent::End { entity, pos } => {
                    common::move_entity(ctx, entity, pos);
                    self.drop(ctx, entity, pos);
                }
            }
        }
        None
    }
}
