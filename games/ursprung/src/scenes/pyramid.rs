//! Level 2, pyramid variant: sort blocks and glyphs into their zones while sand storms blow.

use glam::Vec2;
use kosmos_engine::{
    DragEvent, Easing, EngineContext, Entity, EntityId, Rect, RenderLayer, TextComponent, Tween,
};

use super::common::{self, WHITE};
use super::{Frame, GameScene};
use crate::catalog::PyramidConfig;
use crate::events::game_events;
use crate::flow::SceneKey;
use crate::placement::item::find_mut;
use crate::placement::{DraggableItem, DropOutcome, DropRule, LevelState, TargetZone};

const ZONE_LABEL_COLOR: &str = "#ffffcc";
const STORM_ALPHA: f32 = 0.7;
const STORM_RAMP: f32 = 0.2;
const STORM_HOLD: f32 = 0.4;
const DRIFT: (i32, i32) = (10, 5);
const DRIFT_SECS: f32 = 0.3;

mod timers {
    pub const STORM: u32 = 1;
    pub const FADE: u32 = 2;
    pub const NEXT_SCENE: u32 = 3;
}

mod tags {
    pub const RETURNED: u32 = 1;
}

pub struct PyramidScene {
    config: PyramidConfig,
    rule: DropRule,
    items: Vec<DraggableItem>,
    state: LevelState,
    counter: Option<EntityId>,
    overlay: Option<EntityId>,
}

impl PyramidScene {
    pub fn new(config: PyramidConfig) -> Self {
        let zones = config
            .zones
            .iter()
            .map(|z| TargetZone::new(z.id.as_str(), Rect::from_center(z.center, z.size), z.expects.as_str()))
            .collect();
        let rule = DropRule::Zones {
            zones,
            hit: config.hit,
            jitter: config.jitter,
        };
        let state = LevelState::new(config.items.len() as u32);
        Self {
            config,
            rule,
            items: Vec::new(),
            state,
            counter: None,
            overlay: None,
        }
    }

    fn counter_text(&self) -> String {
        format!("Korrekt platziert: {}", self.state.placed)
    }

    fn drop(&mut self, ctx: &mut EngineContext, entity: EntityId, pos: Vec2) {
        let Some(item) = find_mut(&mut self.items, entity) else { return };
        item.pos = pos;
        let (state, outcome) = self.rule.apply(item, self.state, &mut ctx.rng);
        let (start, size) = (item.start, item.size);
        self.state = state;

        match outcome {
            DropOutcome::Placed { snap_to } => {
                if let Some(e) = ctx.scene.get_mut(entity) {
                    e.pos = snap_to;
                    e.layer = RenderLayer::Targets;
                    e.lock();
                }
                common::pulse(ctx, entity, size);
                if let Some(id) = self.counter {
                    common::set_text(ctx, id, self.counter_text());
                }
                common::report_progress(ctx, &self.state);
                if self.state.is_complete() {
                    common::report_complete(ctx, SceneKey::LevelTwo);
                    common::camera(ctx, game_events::CAMERA_FLASH, 0.3);
                    ctx.after(0.8, timers::FADE);
                }
            }
            DropOutcome::WrongZone { .. } | DropOutcome::NoZone => {
                common::return_home(ctx, entity, start, size, tags::RETURNED);
            }
            _ => {}
        }
    }

    /// Flash the sand overlay and nudge every loose item.
    fn storm(&self, ctx: &mut EngineContext) {
        if let Some(overlay) = self.overlay {
            ctx.tween(overlay, Tween::alpha(0.0, STORM_ALPHA, STORM_RAMP, Easing::Linear));
            ctx.tween(
                overlay,
                Tween::alpha(STORM_ALPHA, 0.0, STORM_RAMP, Easing::Linear).with_delay(STORM_RAMP + STORM_HOLD),
            );
        }
        let held = ctx.drag.dragging();
        for item in self.items.iter().filter(|i| !i.placed) {
            let Some(id) = item.entity.filter(|id| Some(*id) != held) else { continue };
            let Some(from) = ctx.scene.get(id).map(|e| e.pos) else { continue };
            let to = from
                + Vec2::new(
                    ctx.rng.between(-DRIFT.0, DRIFT.0) as f32,
                    ctx.rng.between(-DRIFT.1, DRIFT.1) as f32,
                );
            ctx.tween(id, Tween::position(from, to, DRIFT_SECS, Easing::QuadOut));
        }
        log::debug!("sand storm");
    }
}

impl GameScene for PyramidScene {
    fn key(&self) -> SceneKey {
        SceneKey::LevelTwo
    }

    fn enter(&mut self, ctx: &mut EngineContext) {
        let world = ctx.world();
        ctx.set_theme(&["level2-background", "level2-game-container"]);
        common::backdrop(ctx, "egypt_background");

        let sand = ctx.sprite("sand_overlay");
        let id = ctx.next_id();
        self.overlay = Some(ctx.spawn(
            Entity::new(id)
                .with_tag("sand_overlay")
                .with_pos(world * 0.5)
                .with_scale(world)
                .with_layer(RenderLayer::Overlay)
                .with_sprite(sand.map(|s| s.with_alpha(0.0))),
        ));

        for zone in &self.config.zones {
            let sprite = ctx.sprite(&zone.id);
            let id = ctx.next_id();
            ctx.spawn(
                Entity::new(id)
                    .with_tag(zone.id.as_str())
                    .with_pos(zone.center)
                    .with_scale(zone.size)
                    .with_layer(RenderLayer::Targets)
                    .with_sprite(sprite),
            );
            common::label(
                ctx,
                Vec2::new(zone.center.x, zone.center.y + zone.size.y / 2.0 + 12.0),
                TextComponent::new(zone.label.as_str())
                    .with_size(14.0)
                    .with_color(ZONE_LABEL_COLOR),
            );
        }

        self.items.clear();
        for def in &self.config.items {
            let start = Vec2::new(
                ctx.rng.between(def.spawn_min.x as i32, def.spawn_max.x as i32) as f32,
                ctx.rng.between(def.spawn_min.y as i32, def.spawn_max.y as i32) as f32,
            );
            let sprite = ctx.sprite(&def.key);
            let id = ctx.next_id();
            ctx.spawn(
                Entity::new(id)
                    .with_tag(def.key.as_str())
                    .with_pos(start)
                    .with_scale(def.size)
                    .with_sprite(sprite)
                    .draggable(),
            );
            self.items
                .push(DraggableItem::of_kind(def.key.as_str(), def.kind.as_str(), start, def.size).with_entity(id));
        }

        self.state = self.state.reset();
        self.counter = Some(common::label(
            ctx,
            Vec2::new(world.x / 2.0, 20.0),
            TextComponent::new(self.counter_text()).with_size(20.0).with_color(WHITE),
        ));
        ctx.every(self.config.storm_interval, timers::STORM);
    }

    fn update(&mut self, ctx: &mut EngineContext, frame: &Frame) -> Option<SceneKey> {
        if frame.timer_fired(timers::STORM) && !self.state.is_complete() {
            self.storm(ctx);
        }
        if frame.timer_fired(timers::FADE) {
            common::camera(ctx, game_events::CAMERA_FADE_OUT, 1.0);
            ctx.after(1.0, timers::NEXT_SCENE);
        }
        if frame.timer_fired(timers::NEXT_SCENE) {
            return Some(SceneKey::LevelThree);
        }

        for entity in frame.tweens_done(tags::RETURNED) {
            common::set_layer(ctx, entity, RenderLayer::Items);
        }

        for event in ctx.poll_drag(frame.input) {
            match event {
                DragEvent::Start { entity, .. } => common::set_layer(ctx, entity, RenderLayer::Lifted),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::testing;
    use kosmos_engine::{GameEvent, InputEvent, InputQueue};

    const PARK: Vec2 = Vec2::new(900.0, 560.0);

    fn scene() -> (PyramidScene, EngineContext) {
        let mut ctx = testing::context();
        let mut scene = PyramidScene::new(PyramidConfig::default());
        scene.enter(&mut ctx);
        (scene, ctx)
    }

    fn park(ctx: &mut EngineContext, key: &str) -> EntityId {
        let id = ctx.scene.find_by_tag(key).map(|e| e.id).unwrap();
        common::move_entity(ctx, id, PARK);
        id
    }

    fn drag_to(to: Vec2) -> InputQueue {
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: PARK.x, y: PARK.y });
        input.push(InputEvent::PointerMove { x: to.x, y: to.y });
        input.push(InputEvent::PointerUp { x: to.x, y: to.y });
        input
    }

    fn zone_center(scene: &PyramidScene, id: &str) -> Vec2 {
        scene.config.zones.iter().find(|z| z.id == id).map(|z| z.center).unwrap()
    }

    #[test]
    fn block_lands_in_inner_half_of_its_zone() {
        let (mut scene, mut ctx) = scene();
        let block = park(&mut ctx, "block_base");
        let center = zone_center(&scene, "zone_base");

        testing::step(&mut scene, &mut ctx, &drag_to(center));

        assert_eq!(scene.state.placed, 1);
        let e = ctx.scene.get(block).unwrap();
        let offset = (e.pos - center).abs();
        assert!(offset.x <= 50.0 && offset.y <= 20.0, "{offset:?}");
        assert!(!e.draggable);
    }

    #[test]
    fn wrong_zone_and_empty_ground_send_items_home() {
        let (mut scene, mut ctx) = scene();
        let start = scene.items.iter().find(|i| i.key == "glyph_ankh").unwrap().start;
        let ankh = park(&mut ctx, "glyph_ankh");

        let input = drag_to(zone_center(&scene, "zone_wall_left"));
        testing::step(&mut scene, &mut ctx, &input);
        testing::idle(&mut scene, &mut ctx, 0.5);
        assert_eq!(ctx.scene.get(ankh).unwrap().pos, start);
        assert_eq!(ctx.scene.get(ankh).unwrap().layer, RenderLayer::Items);

        common::move_entity(&mut ctx, ankh, PARK);
        testing::step(&mut scene, &mut ctx, &drag_to(Vec2::new(900.0, 400.0)));
        testing::idle(&mut scene, &mut ctx, 0.5);
        assert_eq!(ctx.scene.get(ankh).unwrap().pos, start);
        assert_eq!(scene.state.placed, 0);
    }

    #[test]
    fn storm_drifts_loose_items_slightly() {
        let (mut scene, mut ctx) = scene();
        let before: Vec<(EntityId, Vec2)> = scene
            .items
            .iter()
            .filter_map(|i| i.entity.map(|id| (id, i.start)))
            .collect();

        testing::idle(&mut scene, &mut ctx, 7.1);
        assert!(ctx.tweens.has_entity(scene.overlay.unwrap()));

        testing::idle(&mut scene, &mut ctx, 1.0);
        for (id, start) in before {
            let moved = (ctx.scene.get(id).unwrap().pos - start).abs();
            assert!(moved.x <= 10.0 && moved.y <= 5.0, "{moved:?}");
        }
    }

    #[test]
    fn all_items_placed_leads_to_level_three() {
        let (mut scene, mut ctx) = scene();
        let defs = scene.config.items.clone();
        for def in &defs {
            let zone = scene.config.zones.iter().find(|z| z.expects == def.kind).unwrap().center;
            park(&mut ctx, &def.key);
            testing::step(&mut scene, &mut ctx, &drag_to(zone));
        }
        assert!(scene.state.is_complete());
        assert!(ctx.events.contains(&GameEvent::new(game_events::CAMERA_FLASH, 300.0, 0.0, 0.0)));
        assert_eq!(testing::idle(&mut scene, &mut ctx, 2.0), Some(SceneKey::LevelThree));
    }
}
