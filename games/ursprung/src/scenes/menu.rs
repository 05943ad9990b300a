use glam::Vec2;
use kosmos_engine::{EngineContext, Entity, EntityId, RenderLayer, TextComponent};

use super::common::{self, WHITE};
use super::{Frame, GameScene};
use crate::events::sounds;
use crate::flow::SceneKey;

const LOGO_SIZE: Vec2 = Vec2::new(400.0, 260.0);
const BUTTON_TEXT: &str = "Spiel starten";
const BUTTON_HIT: Vec2 = Vec2::new(280.0, 56.0);
const HOVER: &str = "#1E354C";

/// Title screen with a single start button.
pub struct MenuScene {
    button: Option<EntityId>,
    hovered: bool,
}

impl MenuScene {
    pub fn new() -> Self {
        Self {
            button: None,
            hovered: false,
        }
    }

    fn on_button(&self, ctx: &EngineContext, p: Vec2) -> bool {
        self.button.is_some() && ctx.scene.pick(p) == self.button
    }

    fn set_hover(&mut self, ctx: &mut EngineContext, hovered: bool) {
        if hovered == self.hovered {
            return;
        }
        self.hovered = hovered;
        let Some(text) = self
            .button
            .and_then(|id| ctx.scene.get_mut(id))
            .and_then(|e| e.text.as_mut())
        else {
            return;
        };
        text.color = if hovered { HOVER } else { WHITE }.to_string();
    }
}

impl GameScene for MenuScene {
    fn key(&self) -> SceneKey {
        SceneKey::GameMenu
    }

    fn enter(&mut self, ctx: &mut EngineContext) {
        let world = ctx.world();
        common::play(ctx, sounds::MENU_MUSIC);

        let logo_pos = Vec2::new(world.x / 2.0, world.y / 2.0 - 100.0);
        let sprite = ctx.sprite("logo");
        let id = ctx.next_id();
        ctx.spawn(
            Entity::new(id)
                .with_tag("logo")
                .with_pos(logo_pos)
                .with_scale(LOGO_SIZE)
                .with_layer(RenderLayer::Items)
                .with_sprite(sprite),
        );

        let id = ctx.next_id();
        self.button = Some(ctx.spawn(
            Entity::new(id)
                .with_tag("start")
                .with_pos(Vec2::new(world.x / 2.0, logo_pos.y + LOGO_SIZE.y / 2.0 + 40.0))
                .with_scale(BUTTON_HIT)
                .with_layer(RenderLayer::UI)
                .with_text(TextComponent::new(BUTTON_TEXT).with_size(40.0))
                .interactive(),
        ));
    }

    fn update(&mut self, ctx: &mut EngineContext, frame: &Frame) -> Option<SceneKey> {
        if let Some(p) = frame.pointer() {
            let over = self.on_button(ctx, p);
            self.set_hover(ctx, over);
        }
        let p = frame.clicked()?;
        if self.on_button(ctx, p) {
            common::play(ctx, sounds::STOP_MUSIC);
            return Some(SceneKey::StoryTelling);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::testing;
    use kosmos_engine::{InputEvent, InputQueue, SoundEvent};

    fn button_pos(ctx: &EngineContext) -> Vec2 {
        ctx.scene.find_by_tag("start").map(|e| e.pos).unwrap()
    }

    #[test]
    fn hover_recolours_the_button() {
        let mut ctx = testing::context();
        let mut menu = MenuScene::new();
        menu.enter(&mut ctx);
        let at = button_pos(&ctx);

        let mut input = InputQueue::new();
        input.push(InputEvent::PointerMove { x: at.x, y: at.y });
        testing::step(&mut menu, &mut ctx, &input);
        let color = ctx.scene.find_by_tag("start").and_then(|e| e.text.clone()).unwrap().color;
        assert_eq!(color, HOVER);

        let mut input = InputQueue::new();
        input.push(InputEvent::PointerMove { x: 5.0, y: 5.0 });
        testing::step(&mut menu, &mut ctx, &input);
        let color = ctx.scene.find_by_tag("start").and_then(|e| e.text.clone()).unwrap().color;
        assert_eq!(color, WHITE);
    }

    #[test]
    fn click_on_button_starts_the_story() {
        let mut ctx = testing::context();
        let mut menu = MenuScene::new();
        menu.enter(&mut ctx);
        assert_eq!(ctx.sounds, vec![SoundEvent(sounds::MENU_MUSIC)]);

        let mut miss = InputQueue::new();
        miss.push(InputEvent::PointerDown { x: 5.0, y: 5.0 });
        assert_eq!(testing::step(&mut menu, &mut ctx, &miss), None);

        let at = button_pos(&ctx);
        let mut hit = InputQueue::new();
        hit.push(InputEvent::PointerDown { x: at.x, y: at.y });
        assert_eq!(testing::step(&mut menu, &mut ctx, &hit), Some(SceneKey::StoryTelling));
        assert_eq!(ctx.sounds.last(), Some(&SoundEvent(sounds::STOP_MUSIC)));
    }
}
