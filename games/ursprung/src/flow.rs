//! Linear scene order and scene switching.

use kosmos_engine::{EngineContext, GameEvent, InputQueue};

use crate::catalog::LevelCatalog;
use crate::events::game_events;
use crate::scenes::{self, Frame, GameScene};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKey {
    GameMenu,
    StoryTelling,
    LevelOne,
    LevelTwo,
    LevelThree,
    LevelFour,
    LevelFive,
    StoryOutro,
    LevelCredits,
}

impl SceneKey {
    pub const ORDER: [SceneKey; 9] = [
        SceneKey::GameMenu,
        SceneKey::StoryTelling,
        SceneKey::LevelOne,
        SceneKey::LevelTwo,
        SceneKey::LevelThree,
        SceneKey::LevelFour,
        SceneKey::LevelFive,
        SceneKey::StoryOutro,
        SceneKey::LevelCredits,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ORDER.get(index).copied()
    }

    /// The scene that follows this one; the credits wrap around to the menu.
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            SceneKey::GameMenu => "GameMenuScene",
            SceneKey::StoryTelling => "StoryTellingScene",
            SceneKey::LevelOne => "LevelOneScene",
            SceneKey::LevelTwo => "LevelTwoScene",
            SceneKey::LevelThree => "LevelThreeScene",
            SceneKey::LevelFour => "LevelFourScene",
            SceneKey::LevelFive => "LevelFiveScene",
            SceneKey::StoryOutro => "StoryOutroScene",
            SceneKey::LevelCredits => "LevelCreditsScene",
        }
    }
}

/// Owns the running scene and swaps it when it asks for another.
pub struct Flow {
    catalog: LevelCatalog,
    current: Box<dyn GameScene>,
    dt: f32,
}

impl Flow {
    /// Not entered yet; call `switch` or `start` with a context.
    pub fn new(catalog: LevelCatalog, dt: f32) -> Self {
        let current = scenes::build(SceneKey::GameMenu, &catalog);
        Self { catalog, current, dt }
    }

    pub fn current(&self) -> SceneKey {
        self.current.key()
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn start(&mut self, ctx: &mut EngineContext) {
        self.switch(ctx, SceneKey::GameMenu);
    }

    /// Tear down the engine scene and enter `key`.
    pub fn switch(&mut self, ctx: &mut EngineContext, key: SceneKey) {
        ctx.reset_scene();
        self.current = scenes::build(key, &self.catalog);
        self.current.enter(ctx);
        ctx.emit_event(GameEvent::new(game_events::SCENE_CHANGED, key.index() as f32, 0.0, 0.0));
        log::info!("scene: {}", key.name());
    }

    /// One fixed step of the running scene.
    pub fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        let signals = ctx.take_signals();
        let frame = Frame {
            input,
            signals: &signals,
            dt: self.dt,
        };
        if let Some(next) = self.current.update(ctx, &frame) {
            self.switch(ctx, next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_linear_and_wraps() {
        let mut key = SceneKey::GameMenu;
        let mut seen = vec![key];
        for _ in 0..8 {
            key = key.next();
            seen.push(key);
        }
        assert_eq!(seen, SceneKey::ORDER.to_vec());
        assert_eq!(SceneKey::LevelCredits.next(), SceneKey::GameMenu);
    }

    #[test]
    fn index_round_trips() {
        for key in SceneKey::ORDER {
            assert_eq!(SceneKey::from_index(key.index()), Some(key));
        }
        assert_eq!(SceneKey::from_index(9), None);
    }

    #[test]
    fn switching_resets_and_announces() {
        let mut ctx = EngineContext::new();
        let mut flow = Flow::new(LevelCatalog::default(), 1.0 / 60.0);
        flow.start(&mut ctx);
        ctx.every(2.0, 99);

        flow.switch(&mut ctx, SceneKey::LevelFive);
        assert_eq!(flow.current(), SceneKey::LevelFive);
        assert!(!ctx.timers.is_pending(99));
        let last = ctx.events.last().copied();
        assert_eq!(last, Some(GameEvent::new(game_events::SCENE_CHANGED, 6.0, 0.0, 0.0)));
    }
}
