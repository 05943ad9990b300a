//! Level 4: sort the machine's falling parts into their bins.

use glam::Vec2;
use kosmos_engine::{
    AnimationComponent, AnimationDef, DragEvent, Easing, EngineContext, Entity, EntityId, Rect, RenderLayer,
    SpriteComponent, TextAlign, TextComponent, TimerId, Tween,
};

use super::common::{self, WHITE};
use super::{Frame, GameScene};
use crate::catalog::SortingConfig;
use crate::flow::SceneKey;
use crate::placement::item::find_mut;
use crate::placement::{DraggableItem, DropOutcome, DropRule, HitMode, LevelState, TargetZone};

const ENGINE_POS: Vec2 = Vec2::new(908.0, 415.0);
const ENGINE_SIZE: Vec2 = Vec2::new(190.0, 250.0);
const LEVER_POS: Vec2 = Vec2::new(900.0, 326.0);
const LEVER_SIZE: Vec2 = Vec2::new(128.0, 102.0);
const ZONE_TINTS: [u32; 3] = [0xFF_00_00, 0x00_FF_00, 0x00_00_FF];

const WRONG_SORT: &str = "Falsche Sortierung! Level wird neugestartet.";
const NEXT_DELAY: f32 = 3.0;

mod timers {
    pub const SPAWN: u32 = 1;
    pub const NEXT_SCENE: u32 = 2;
}

mod tags {
    pub const LANDED: u32 = 1;
}

pub struct SortingScene {
    config: SortingConfig,
    rule: DropRule,
    items: Vec<DraggableItem>,
    state: LevelState,
    running: bool,
    spawner: Option<TimerId>,
    background: Option<EntityId>,
    lever: Option<EntityId>,
    counter: Option<EntityId>,
}

impl SortingScene {
    pub fn new(config: SortingConfig) -> Self {
        let zones = config
            .lanes
            .iter()
            .enumerate()
            .map(|(i, lane)| {
                let rect = Rect::new(
                    lane.x - config.zone_size.x / 2.0,
                    config.landing_y,
                    config.zone_size.x,
                    config.zone_size.y,
                );
                TargetZone::new(format!("bin_{i}"), rect, lane.kind.as_str())
            })
            .collect();
        let rule = DropRule::Zones {
            zones,
            hit: HitMode::Contains,
            jitter: false,
        };
        let state = LevelState::new(config.required);
        Self {
            config,
            rule,
            items: Vec::new(),
            state,
            running: false,
            spawner: None,
            background: None,
            lever: None,
            counter: None,
        }
    }

    fn counter_text(&self) -> String {
        format!("Sortiere Items: {}", self.state.progress())
    }

    fn refresh_counter(&self, ctx: &mut EngineContext) {
        if let Some(id) = self.counter {
            common::set_text(ctx, id, self.counter_text());
        }
    }

    fn show_machine(&self, ctx: &mut EngineContext, on: bool) {
        if let Some(anim) = self
            .background
            .and_then(|id| ctx.scene.get_mut(id))
            .and_then(|e| e.animation.as_mut())
        {
            anim.play_if_different(if on { "work" } else { "off" });
        }
        if let Some(sprite) = self
            .lever
            .and_then(|id| ctx.scene.get_mut(id))
            .and_then(|e| e.sprite.as_mut())
        {
            sprite.col = if on { 1.0 } else { 0.0 };
        }
    }

    fn start(&mut self, ctx: &mut EngineContext) {
        self.running = true;
        self.show_machine(ctx, true);
        self.spawner = Some(ctx.every(self.config.spawn_interval, timers::SPAWN));
        log::debug!("sorting machine on");
    }

    /// Switch the machine off. Loose items are cleared; the counter is zeroed
    /// unless the level is already won.
    fn stop(&mut self, ctx: &mut EngineContext) {
        self.running = false;
        self.show_machine(ctx, false);
        if let Some(id) = self.spawner.take() {
            ctx.timers.cancel(id);
        }
        for id in self.items.drain(..).filter_map(|i| i.entity) {
            ctx.despawn(id);
        }
        if !self.state.is_complete() {
            self.state = self.state.reset();
        }
        self.refresh_counter(ctx);
        log::debug!("sorting machine off");
    }

    /// Drop a part of type `kind` into the chute above lane `lane`.
    fn spawn(&mut self, ctx: &mut EngineContext, lane: usize, kind: usize) {
        let (Some(lane), Some(kind)) = (self.config.lanes.get(lane), self.config.lanes.get(kind)) else {
            return;
        };
        let start = Vec2::new(lane.x, self.config.spawn_y);
        let size = Vec2::splat(self.config.item_size);
        let sprite = ctx.sprite(&kind.kind);
        let id = ctx.next_id();
        ctx.spawn(
            Entity::new(id)
                .with_tag(kind.kind.as_str())
                .with_pos(start)
                .with_scale(size)
                .with_sprite(sprite)
                .draggable(),
        );
        ctx.tween(
            id,
            Tween::position_y(start.y, self.config.landing_y, self.config.fall_duration, Easing::Linear)
                .with_on_complete(tags::LANDED),
        );
        self.items
            .push(DraggableItem::of_kind(kind.kind.as_str(), kind.kind.as_str(), start, size).with_entity(id));
    }

    fn spawn_random(&mut self, ctx: &mut EngineContext) {
        let lanes = self.config.lanes.len();
        let (Some(kind), Some(lane)) = (ctx.rng.index(lanes), ctx.rng.index(lanes)) else { return };
        self.spawn(ctx, lane, kind);
    }

    fn remove(&mut self, ctx: &mut EngineContext, entity: EntityId) {
        ctx.despawn(entity);
        self.items.retain(|i| i.entity != Some(entity));
    }

    /// Validate a part at `pos`. `by_hand` is false when it simply landed.
    fn resolve(&mut self, ctx: &mut EngineContext, entity: EntityId, pos: Vec2, by_hand: bool) {
        let Some(item) = find_mut(&mut self.items, entity) else { return };
        item.pos = pos;
        let (state, outcome) = self.rule.apply(item, self.state, &mut ctx.rng);
        self.state = state;
        self.remove(ctx, entity);

        match outcome {
            DropOutcome::Placed { .. } => {
                self.refresh_counter(ctx);
                common::report_progress(ctx, &self.state);
                if self.state.is_complete() {
                    common::report_complete(ctx, SceneKey::LevelFour);
                    self.stop(ctx);
                    ctx.after(NEXT_DELAY, timers::NEXT_SCENE);
                }
            }
            DropOutcome::WrongZone { .. } if by_hand => {
                log::info!("wrong bin, sorting restarts");
                self.stop(ctx);
                common::show_message(ctx, WRONG_SORT, 2.0);
            }
            _ => {}
        }
    }

    fn lever_clicked(&self, ctx: &EngineContext, frame: &Frame) -> bool {
        frame
            .clicked()
            .is_some_and(|p| self.lever.is_some() && ctx.scene.pick(p) == self.lever)
    }
}

impl GameScene for SortingScene {
    fn key(&self) -> SceneKey {
        SceneKey::LevelFour
    }

    fn enter(&mut self, ctx: &mut EngineContext) {
        let world = ctx.world();

        let anim = AnimationComponent::single("off", AnimationDef::from_frames(vec![(0.0, 0.0)], 1.0, false))
            .with("work", AnimationDef::from_frames(vec![(1.0, 0.0), (2.0, 0.0)], 1.0, true));
        let sprite = ctx.sprite("machine_background");
        let id = ctx.next_id();
        self.background = Some(ctx.spawn(
            Entity::new(id)
                .with_tag("backdrop")
                .with_pos(world * 0.5)
                .with_scale(world)
                .with_layer(RenderLayer::Background)
                .with_sprite(sprite)
                .with_animation(anim),
        ));

        let sprite = ctx.sprite("engine");
        let id = ctx.next_id();
        ctx.spawn(
            Entity::new(id)
                .with_tag("engine")
                .with_pos(ENGINE_POS)
                .with_scale(ENGINE_SIZE)
                .with_layer(RenderLayer::Targets)
                .with_sprite(sprite),
        );

        let sprite = ctx.sprite("lever");
        let id = ctx.next_id();
        self.lever = Some(ctx.spawn(
            Entity::new(id)
                .with_tag("lever")
                .with_pos(LEVER_POS)
                .with_scale(LEVER_SIZE)
                .with_sprite(sprite)
                .interactive(),
        ));

        if let DropRule::Zones { zones, .. } = &self.rule {
            for (zone, tint) in zones.iter().zip(ZONE_TINTS.iter().cycle()) {
                let id = ctx.next_id();
                ctx.spawn(
                    Entity::new(id)
                        .with_tag(zone.id.as_str())
                        .with_pos(zone.rect.center())
                        .with_scale(zone.rect.size())
                        .with_layer(RenderLayer::Targets)
                        .with_sprite(SpriteComponent::solid(*tint).with_alpha(0.2)),
                );
            }
        }

        self.items.clear();
        self.state = self.state.reset();
        self.running = false;
        self.counter = Some(common::label(
            ctx,
            Vec2::new(10.0, 10.0),
            TextComponent::new(self.counter_text())
                .with_size(20.0)
                .with_color(WHITE)
                .with_align(TextAlign::Left)
                .with_origin(Vec2::ZERO),
        ));
    }

    fn update(&mut self, ctx: &mut EngineContext, frame: &Frame) -> Option<SceneKey> {
        if frame.timer_fired(timers::NEXT_SCENE) {
            return Some(SceneKey::LevelFive);
        }
        if frame.timer_fired(timers::SPAWN) && self.running {
            self.spawn_random(ctx);
        }
        for entity in frame.tweens_done(tags::LANDED) {
            let Some(pos) = ctx.scene.get(entity).map(|e| e.pos) else { continue };
            self.resolve(ctx, entity, pos, false);
        }

        if self.lever_clicked(ctx, frame) && !self.state.is_complete() {
            if self.running {
                self.stop(ctx);
            } else {
                self.start(ctx);
            }
        }

        for event in ctx.poll_drag(frame.input) {
            match event {
                DragEvent::Start { entity, .. } => common::set_layer(ctx, entity, RenderLayer::Lifted),
                DragEvent::Move { entity, pos } => common::move_entity(ctx, entity, pos),
                DragEvent::End { entity, pos } => {
                    common::move_entity(ctx, entity, pos);
                    self.resolve(ctx, entity, pos, true);
                }
            }
        }
        None
    }
}
