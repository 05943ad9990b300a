//! Building blocks every scene uses: labels, backdrops, messages, host events.

use glam::Vec2;
use kosmos_engine::{
    EngineContext, EntityId, Easing, Entity, GameEvent, RenderLayer, SoundEvent, TextComponent, Tween,
    TweenLoop,
};

use crate::events::game_events;
use crate::flow::SceneKey;
use crate::placement::LevelState;

pub const GOLD: &str = "#FFD700";
pub const WHITE: &str = "#ffffff";

/// How long a return-to-start tween takes.
pub const RETURN_SECS: f32 = 0.2;
const MESSAGE_FADE_SECS: f32 = 0.5;

/// Spawn a text label on the UI layer.
pub fn label(ctx: &mut EngineContext, pos: Vec2, text: TextComponent) -> EntityId {
    let id = ctx.next_id();
    ctx.spawn(Entity::new(id).with_pos(pos).with_layer(RenderLayer::UI).with_text(text))
}

pub fn set_text(ctx: &mut EngineContext, id: EntityId, content: impl Into<String>) {
    if let Some(text) = ctx.scene.get_mut(id).and_then(|e| e.text.as_mut()) {
        text.content = content.into();
    }
}

/// Full-screen background sprite.
pub fn backdrop(ctx: &mut EngineContext, sprite: &str) -> EntityId {
    let world = ctx.world();
    let sprite = ctx.sprite(sprite);
    let id = ctx.next_id();
    ctx.spawn(
        Entity::new(id)
            .with_tag("backdrop")
            .with_pos(world * 0.5)
            .with_scale(world)
            .with_layer(RenderLayer::Background)
            .with_sprite(sprite),
    )
}

/// Centred notice at a quarter of the screen height that fades out after `hold` seconds.
pub fn show_message(ctx: &mut EngineContext, text: &str, hold: f32) -> EntityId {
    let world = ctx.world();
    let id = label(
        ctx,
        Vec2::new(world.x / 2.0, world.y / 4.0),
        TextComponent::new(text)
            .with_color(GOLD)
            .with_background("rgba(0,0,0,0.7)"),
    );
    ctx.tween(
        id,
        Tween::fade_out(MESSAGE_FADE_SECS, Easing::QuadOut)
            .with_delay(hold)
            .despawn_on_complete(),
    );
    id
}

/// Send a draggable back to `home`, shrinking it from its lifted size.
pub fn return_home(ctx: &mut EngineContext, id: EntityId, home: Vec2, size: Vec2, tag: u32) {
    let Some(entity) = ctx.scene.get(id) else { return };
    let (from, lifted) = (entity.pos, entity.scale);
    ctx.tween(id, Tween::position(from, home, RETURN_SECS, Easing::QuadOut).with_on_complete(tag));
    ctx.tween(id, Tween::scale(lifted, size, RETURN_SECS, Easing::QuadOut));
}

/// Short ×1.1 pulse on a placed item.
pub fn pulse(ctx: &mut EngineContext, id: EntityId, size: Vec2) {
    ctx.tween(
        id,
        Tween::scale(size, size * 1.1, 0.12, Easing::CubicOut).with_loop(TweenLoop::Yoyo),
    );
}

pub fn move_entity(ctx: &mut EngineContext, id: EntityId, pos: Vec2) {
    if let Some(entity) = ctx.scene.get_mut(id) {
        entity.pos = pos;
    }
}

pub fn set_layer(ctx: &mut EngineContext, id: EntityId, layer: RenderLayer) {
    if let Some(entity) = ctx.scene.get_mut(id) {
        entity.layer = layer;
    }
}

pub fn play(ctx: &mut EngineContext, sound: u32) {
    ctx.emit_sound(SoundEvent(sound));
}

/// Camera effect on the host; `kind` is one of the `CAMERA_*` events.
pub fn camera(ctx: &mut EngineContext, kind: f32, seconds: f32) {
    ctx.emit_event(GameEvent::new(kind, seconds * 1000.0, 0.0, 0.0));
}

pub fn report_progress(ctx: &mut EngineContext, state: &LevelState) {
    ctx.emit_event(GameEvent::new(
        game_events::PROGRESS,
        state.placed as f32,
        state.total as f32,
        0.0,
    ));
}

pub fn report_complete(ctx: &mut EngineContext, key: SceneKey) {
    ctx.emit_event(GameEvent::new(game_events::LEVEL_COMPLETE, key.index() as f32, 0.0, 0.0));
    log::info!("{} complete", key.name());
}
