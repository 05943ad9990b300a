use glam::Vec2;
use kosmos_engine::{Easing, EngineContext, TextComponent, Tween};

use super::common::{self, WHITE};
use super::{Frame, GameScene};
use crate::events::sounds;
use crate::flow::SceneKey;
use crate::texts;

const TEXT_SIZE: f32 = 26.0;
const SCROLL_SECS: f32 = 40.0;

mod tags {
    pub const SCROLLED: u32 = 1;
}

/// Scrolling credits; any click or key, or the end of the scroll, returns to the menu.
pub struct CreditsScene {
    done: bool,
}

impl CreditsScene {
    pub fn new() -> Self {
        Self { done: false }
    }
}

impl GameScene for CreditsScene {
    fn key(&self) -> SceneKey {
        SceneKey::LevelCredits
    }

    fn enter(&mut self, ctx: &mut EngineContext) {
        let world = ctx.world();
        ctx.set_theme(&["credits-background", "credits-container", "side-panels-hidden"]);
        common::backdrop(ctx, "credits_background");
        common::play(ctx, sounds::CREDITS_MUSIC);

        let top = world.y + 50.0;
        let end = -texts::estimated_height(texts::CREDITS, TEXT_SIZE) / 2.0;
        let id = common::label(
            ctx,
            Vec2::new(world.x / 2.0, top),
            TextComponent::new(texts::CREDITS)
                .with_size(TEXT_SIZE)
                .with_color(WHITE)
                .with_wrap(world.x - 100.0),
        );
        ctx.tween(
            id,
            Tween::position_y(top, end, SCROLL_SECS, Easing::Linear).with_on_complete(tags::SCROLLED),
        );
        self.done = false;
    }

    fn update(&mut self, ctx: &mut EngineContext, frame: &Frame) -> Option<SceneKey> {
        let skipped = frame.clicked().is_some() || frame.any_key();
        let scrolled = frame.tweens_done(tags::SCROLLED).next().is_some();
        if self.done || !(skipped || scrolled) {
            return None;
        }
        self.done = true;
        common::play(ctx, sounds::STOP_MUSIC);
        Some(SceneKey::GameMenu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::testing;
    use kosmos_engine::{InputEvent, InputQueue, SoundEvent};

    fn credits_text_y(ctx: &EngineContext) -> f32 {
        ctx.scene
            .iter()
            .find(|e| e.text.as_ref().is_some_and(|t| t.content == texts::CREDITS))
            .map(|e| e.pos.y)
            .unwrap()
    }

    #[test]
    fn text_scrolls_up_from_below_the_screen() {
        let mut ctx = testing::context();
        let mut credits = CreditsScene::new();
        credits.enter(&mut ctx);
        assert_eq!(credits_text_y(&ctx), 650.0);

        assert_eq!(testing::idle(&mut credits, &mut ctx, 10.0), None);
        assert!(credits_text_y(&ctx) < 650.0);
    }

    #[test]
    fn any_key_returns_to_the_menu() {
        let mut ctx = testing::context();
        let mut credits = CreditsScene::new();
        credits.enter(&mut ctx);

        let mut input = InputQueue::new();
        input.push(InputEvent::KeyDown { key_code: 27 });
        assert_eq!(testing::step(&mut credits, &mut ctx, &input), Some(SceneKey::GameMenu));
        assert_eq!(ctx.sounds.last(), Some(&SoundEvent(sounds::STOP_MUSIC)));
    }

    #[test]
    fn finished_scroll_returns_to_the_menu() {
        let mut ctx = testing::context();
        let mut credits = CreditsScene::new();
        credits.enter(&mut ctx);
        assert_eq!(testing::idle(&mut credits, &mut ctx, 41.0), Some(SceneKey::GameMenu));
    }
}
