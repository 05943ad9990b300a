//! Typewriter interludes before the first level and after the last one.

use glam::Vec2;
use kosmos_engine::{EngineContext, EntityId, TextComponent, Typewriter};

use super::common;
use super::{Frame, GameScene};
use crate::events::{keys, sounds};
use crate::flow::SceneKey;
use crate::texts;

const TEXT_TOP: f32 = 50.0;
const TEXT_SIZE: f32 = 22.0;
const WHEEL_FACTOR: f32 = 0.4;
const HINT_COLOR: &str = "#aaaaaa";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Intro,
    Outro,
}

pub struct StoryScene {
    part: Part,
    writer: Typewriter,
    text: Option<EntityId>,
    hint: Option<EntityId>,
}

impl StoryScene {
    pub fn intro() -> Self {
        Self::new(Part::Intro, texts::STORY_INTRO, 0.03)
    }

    pub fn outro() -> Self {
        Self::new(Part::Outro, texts::STORY_OUTRO, 0.07)
    }

    fn new(part: Part, text: &str, interval: f32) -> Self {
        Self {
            part,
            writer: Typewriter::new(text, interval),
            text: None,
            hint: None,
        }
    }

    fn next(&self) -> SceneKey {
        match self.part {
            Part::Intro => SceneKey::LevelOne,
            Part::Outro => SceneKey::LevelCredits,
        }
    }

    fn show_hint(&mut self, ctx: &mut EngineContext) {
        if self.hint.is_some() {
            return;
        }
        let world = ctx.world();
        self.hint = Some(common::label(
            ctx,
            Vec2::new(world.x / 2.0, world.y - 30.0),
            TextComponent::new(texts::CONTINUE_HINT)
                .with_size(18.0)
                .with_color(HINT_COLOR),
        ));
    }

    fn refresh(&self, ctx: &mut EngineContext) {
        if let Some(id) = self.text {
            common::set_text(ctx, id, self.writer.visible());
        }
    }

    /// Vertical text position for a wheel delta, clamped to the page.
    fn scrolled(y: f32, dy: f32, height: f32) -> f32 {
        (y - dy * WHEEL_FACTOR).clamp(TEXT_TOP - height, TEXT_TOP)
    }
}

impl GameScene for StoryScene {
    fn key(&self) -> SceneKey {
        match self.part {
            Part::Intro => SceneKey::StoryTelling,
            Part::Outro => SceneKey::StoryOutro,
        }
    }

    fn enter(&mut self, ctx: &mut EngineContext) {
        let world = ctx.world();
        match self.part {
            Part::Intro => {
                ctx.set_theme(&["side-panels-hidden"]);
                common::play(ctx, sounds::STORY_MUSIC);
            }
            Part::Outro => {
                ctx.set_theme(&["levelOutro-background", "level5-game-container", "side-panels-hidden"]);
                common::play(ctx, sounds::OUTRO_MUSIC);
            }
        }
        self.text = Some(common::label(
            ctx,
            Vec2::new(world.x / 2.0, TEXT_TOP),
            TextComponent::new("")
                .with_size(TEXT_SIZE)
                .with_origin(Vec2::new(0.5, 0.0))
                .with_wrap(world.x - 80.0),
        ));
    }

    fn update(&mut self, ctx: &mut EngineContext, frame: &Frame) -> Option<SceneKey> {
        if frame.clicked().is_some() || frame.key_pressed(keys::SPACE) {
            if !self.writer.is_done() {
                self.writer.finish();
                self.refresh(ctx);
                self.show_hint(ctx);
            } else {
                common::play(ctx, sounds::STOP_MUSIC);
                return Some(self.next());
            }
        }

        if self.writer.tick(frame.dt) {
            self.refresh(ctx);
            if self.writer.is_done() {
                self.show_hint(ctx);
            }
        }

        let dy = frame.wheel();
        if dy != 0.0 {
            let height = ctx.world().y;
            if let Some(entity) = self.text.and_then(|id| ctx.scene.get_mut(id)) {
                entity.pos.y = Self::scrolled(entity.pos.y, dy, height);
            }
        }
        None
    }
}
