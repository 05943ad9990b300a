//! Level 3: brew the potion by dropping ingredients into the cauldron in order.

use glam::Vec2;
use kosmos_engine::{AnimationComponent, AnimationDef, DragEvent, EngineContext, Entity, EntityId, RenderLayer, TextComponent};

use super::common;
use super::{Frame, GameScene};
use crate::catalog::PotionConfig;
use crate::events::sounds;
use crate::flow::SceneKey;
use crate::placement::item::find_mut;
use crate::placement::{Circle, DraggableItem, DropOutcome, DropRule, LevelState};

/// Size of one frame of the cauldron sheet, scaled to cover the world.
const FRAME: Vec2 = Vec2::new(1536.0, 1024.0);
const START_FPS: f32 = 20.0;
const FPS_STEP: f32 = 2.0;
const DONE_FRAME: (f32, f32) = (3.0, 0.0);

const LABEL_COLOR: &str = "#FFFF00";
const LABEL_BACKGROUND: &str = "#1e1e1e75";
const WRONG: &str = "Falsche Zutat! Alle Zutaten zurückgesetzt!";
const DONE: &str = "Brau abgeschlossen! Das Gebräu ist fertig!";

mod timers {
    pub const RESET: u32 = 1;
    pub const NEXT_SCENE: u32 = 2;
}

/// Boiling speed for the number of ingredients already in the pot.
fn brew_fps(collected: u32) -> f32 {
    (START_FPS - collected as f32 * FPS_STEP).max(1.0)
}

pub struct PotionScene {
    config: PotionConfig,
    rule: DropRule,
    items: Vec<DraggableItem>,
    state: LevelState,
    background: Option<EntityId>,
    feedback: Option<EntityId>,
}

impl PotionScene {
    pub fn new(config: PotionConfig) -> Self {
        let rule = DropRule::Sequence {
            expected: config.sequence.clone(),
            receiver: Circle::new(Vec2::ZERO, config.cauldron_radius),
            reset_delay: config.reset_delay,
        };
        let state = LevelState::new(config.sequence.len() as u32);
        Self {
            config,
            rule,
            items: Vec::new(),
            state,
            background: None,
            feedback: None,
        }
    }

    fn counter_text(&self) -> String {
        format!("Zutaten: {}", self.state.progress())
    }

    fn say(&self, ctx: &mut EngineContext, text: impl Into<String>) {
        if let Some(id) = self.feedback {
            common::set_text(ctx, id, text);
        }
    }

    fn animation<'a>(&self, ctx: &'a mut EngineContext) -> Option<&'a mut AnimationComponent> {
        self.background
            .and_then(|id| ctx.scene.get_mut(id))
            .and_then(|e| e.animation.as_mut())
    }

    /// Clear whatever ingredients are left and lay out the full set again.
    fn lay_out(&mut self, ctx: &mut EngineContext) {
        for id in self.items.drain(..).filter_map(|i| i.entity) {
            ctx.despawn(id);
        }
        let scale = ctx.world() / self.config.reference;
        let size = Vec2::splat(self.config.item_size);
        for (key, pos) in self.config.sequence.iter().zip(&self.config.positions) {
            let start = *pos * scale;
            let sprite = ctx.sprite(key);
            let id = ctx.next_id();
            ctx.spawn(
                Entity::new(id)
                    .with_tag(key.as_str())
                    .with_pos(start)
                    .with_scale(size)
                    .with_sprite(sprite)
                    .draggable(),
            );
            self.items.push(DraggableItem::in_sequence(key.as_str(), start, size).with_entity(id));
        }

        self.state = self.state.reset();
        if let Some(anim) = self.animation(ctx) {
            anim.set_fps(brew_fps(0));
        }
        self.say(ctx, self.counter_text());
    }

    fn drop(&mut self, ctx: &mut EngineContext, entity: EntityId, pos: Vec2) {
        let Some(item) = find_mut(&mut self.items, entity) else { return };
        item.pos = pos;
        let (state, outcome) = self.rule.apply(item, self.state, &mut ctx.rng);
        self.state = state;

        match outcome {
            DropOutcome::Consumed => {
                ctx.despawn(entity);
                self.items.retain(|i| i.entity != Some(entity));
                let fps = brew_fps(self.state.placed);
                if let Some(anim) = self.animation(ctx) {
                    anim.set_fps(fps);
                }
                common::report_progress(ctx, &self.state);
                if self.state.is_complete() {
                    self.finish(ctx);
                } else {
                    self.say(ctx, self.counter_text());
                }
            }
            DropOutcome::ResetScheduled { delay } => {
                self.say(ctx, WRONG);
                ctx.after(delay, timers::RESET);
            }
            _ => {}
        }
    }

    fn finish(&mut self, ctx: &mut EngineContext) {
        self.say(ctx, DONE);
        if let Some(anim) = self.animation(ctx) {
            anim.play("done");
            anim.hold_frame(0);
        }
        common::play(ctx, sounds::STOP_MUSIC);
        common::report_complete(ctx, SceneKey::LevelThree);
        ctx.after(3.0, timers::NEXT_SCENE);
    }
}

impl GameScene for PotionScene {
    fn key(&self) -> SceneKey {
        SceneKey::LevelThree
    }

    fn enter(&mut self, ctx: &mut EngineContext) {
        let world = ctx.world();
        ctx.set_theme(&["level3-background", "level3-game-container"]);

        let cover = (world / FRAME).max_element();
        let anim = AnimationComponent::single(
            "brew",
            AnimationDef::from_frames(vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)], START_FPS, true),
        )
        .with("done", AnimationDef::from_frames(vec![DONE_FRAME], 1.0, false));
        let sprite = ctx.sprite("potion_background");
        let id = ctx.next_id();
        self.background = Some(ctx.spawn(
            Entity::new(id)
                .with_tag("backdrop")
                .with_pos(world * 0.5)
                .with_scale(FRAME * cover)
                .with_layer(RenderLayer::Background)
                .with_sprite(sprite)
                .with_animation(anim),
        ));
        common::play(ctx, sounds::LEVEL_THREE_MUSIC);

        let center = world * 0.5 + self.config.cauldron_offset;
        if let DropRule::Sequence { receiver, .. } = &mut self.rule {
            receiver.center = center;
        }

        self.feedback = Some(common::label(
            ctx,
            Vec2::new(world.x / 2.0, world.y - 30.0),
            TextComponent::new("")
                .with_color(LABEL_COLOR)
                .with_background(LABEL_BACKGROUND),
        ));
        self.lay_out(ctx);
    }

    fn update(&mut self, ctx: &mut EngineContext, frame: &Frame) -> Option<SceneKey> {
        if frame.timer_fired(timers::NEXT_SCENE) {
            return Some(SceneKey::LevelFour);
        }
        if frame.timer_fired(timers::RESET) {
            log::info!("potion reset after a wrong ingredient");
            self.lay_out(ctx);
        }

        for event in ctx.poll_drag(frame.input) {
            match event {
                DragEvent::Start { .. } => {}
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
