//! Level 1: put the planets back in order along the target line.

use glam::Vec2;
use kosmos_engine::{
    DragEvent, EngineContext, Easing, Entity, EntityId, RenderLayer, SpriteComponent, TextComponent, Tween,
    TweenLoop,
};

use super::common::{self, GOLD};
use super::{Frame, GameScene};
use crate::catalog::PlanetsConfig;
use crate::flow::SceneKey;
use crate::placement::item::find_mut;
use crate::placement::{DraggableItem, DropOutcome, DropRule, LevelState, PointTarget};

const TITLE: &str = "Level 1: Ordne die Planeten";
const INTRO: &str = "Bringe die Planeten in ihre korrekte\nReihenfolge und ziehe sie auf die Ziellinie!";
const DONE: &str =
    "Das Chaos ist gebannt!\nDu hast die Planeten erfolgreich in\ndie richtige Umlaufbahn gebracht.";

const INTRO_HOLD: f32 = 4.0;
const DONE_HOLD: f32 = 5.0;
const SWITCH_DELAY: f32 = 6.0;

/// Timer events.
mod timers {
    pub const NEXT_SCENE: u32 = 1;
}

pub struct PlanetsScene {
    config: PlanetsConfig,
    rule: DropRule,
    items: Vec<DraggableItem>,
    state: LevelState,
    feedback: Option<EntityId>,
}

impl PlanetsScene {
    pub fn new(config: PlanetsConfig) -> Self {
        let rule = DropRule::Radius { on_miss: config.on_miss };
        let state = LevelState::new(config.order.len() as u32);
        Self {
            config,
            rule,
            items: Vec::new(),
            state,
            feedback: None,
        }
    }

    fn target(&self, slot: usize) -> PointTarget {
        let pos = self.config.first_target + Vec2::new(slot as f32 * self.config.spacing, 0.0);
        PointTarget {
            pos,
            tolerance: self.config.tolerance,
            metric: self.config.metric,
            snap_offset: Vec2::ZERO,
        }
    }

    fn feedback_text(&self) -> String {
        format!("Ordnung: {}", self.state.progress())
    }

    fn drop(&mut self, ctx: &mut EngineContext, entity: EntityId, pos: Vec2) {
        let Some(item) = find_mut(&mut self.items, entity) else { return };
        item.pos = pos;
        let (state, outcome) = self.rule.apply(item, self.state, &mut ctx.rng);
        self.state = state;

        let DropOutcome::Placed { snap_to } = outcome else { return };
        if let Some(e) = ctx.scene.get_mut(entity) {
            e.pos = snap_to;
            e.lock();
        }
        ctx.tween(
            entity,
            Tween::alpha(1.0, 0.5, 0.2, Easing::Linear).with_loop(TweenLoop::Yoyo),
        );
        if let Some(id) = self.feedback {
            common::set_text(ctx, id, self.feedback_text());
        }
        common::report_progress(ctx, &self.state);

        if self.state.is_complete() {
            common::report_complete(ctx, SceneKey::LevelOne);
            common::show_message(ctx, DONE, DONE_HOLD);
            ctx.after(SWITCH_DELAY, timers::NEXT_SCENE);
        }
    }
}

impl GameScene for PlanetsScene {
    fn key(&self) -> SceneKey {
        SceneKey::LevelOne
    }

    fn enter(&mut self, ctx: &mut EngineContext) {
        let world = ctx.world();
        ctx.set_theme(&["level1-background", "level1-game-container"]);

        common::label(
            ctx,
            Vec2::new(world.x / 2.0, 20.0),
            TextComponent::new(TITLE).with_size(28.0).with_color(GOLD),
        );

        let size = Vec2::splat(self.config.size);
        let margin = self.config.spawn_margin as i32;
        let band = self.config.spawn_band;
        self.items.clear();
        for slot in 0..self.config.order.len() {
            let target = self.target(slot);
            let id = ctx.next_id();
            ctx.spawn(
                Entity::new(id)
                    .with_tag("target")
                    .with_pos(target.pos)
                    .with_scale(size)
                    .with_layer(RenderLayer::Targets)
                    .with_sprite(SpriteComponent::solid(0xFF_FF_FF).with_alpha(0.2)),
            );

            let key = self.config.order[slot].clone();
            let start = Vec2::new(
                ctx.rng.between(margin, world.x as i32 - margin) as f32,
                ctx.rng.between(band.x as i32, band.y as i32) as f32,
            );
            let sprite = ctx.sprite(&key);
            let id = ctx.next_id();
            ctx.spawn(
                Entity::new(id)
                    .with_tag(key.as_str())
                    .with_pos(start)
                    .with_scale(size)
                    .with_sprite(sprite)
                    .draggable(),
            );
            self.items.push(DraggableItem::at_point(key, start, size, target).with_entity(id));
        }

        self.state = self.state.reset();
        self.feedback = Some(common::label(
            ctx,
            Vec2::new(world.x / 2.0, world.y - 30.0),
            TextComponent::new(self.feedback_text()).with_color(GOLD),
        ));
        common::show_message(ctx, INTRO, INTRO_HOLD);
    }

    fn update(&mut self, ctx: &mut EngineContext, frame: &Frame) -> Option<SceneKey> {
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
        frame.timer_fired(timers::NEXT_SCENE).then_some(SceneKey::LevelTwo)
    }
}
