//! The nine scenes of the game and what they share.

pub mod common;
pub mod credits;
pub mod lights_out;
pub mod menu;
pub mod planets;
pub mod potion;
pub mod puzzle;
pub mod pyramid;
pub mod sorting;
pub mod story;

use glam::Vec2;
use kosmos_engine::{EngineContext, EntityId, InputQueue, Signal};

use crate::catalog::{LevelCatalog, LevelTwoVariant};
use crate::flow::SceneKey;

/// Everything a scene sees during one fixed step.
pub struct Frame<'a> {
    pub input: &'a InputQueue,
    /// Timers and tagged tweens that finished during the previous step.
    pub signals: &'a [Signal],
    pub dt: f32,
}

impl Frame<'_> {
    /// Position of the first pointer press this step.
    pub fn clicked(&self) -> Option<Vec2> {
        self.input.first_press()
    }

    /// Latest pointer position reported this step.
    pub fn pointer(&self) -> Option<Vec2> {
        self.input.last_pointer()
    }

    pub fn key_pressed(&self, code: u32) -> bool {
        self.input.key_down(code)
    }

    pub fn any_key(&self) -> bool {
        self.input.any_key_down()
    }

    pub fn wheel(&self) -> f32 {
        self.input.wheel_delta()
    }

    pub fn timer_fired(&self, event: u32) -> bool {
        self.signals.contains(&Signal::Timer(event))
    }

    /// Entities whose tween tagged `tag` finished.
    pub fn tweens_done(&self, tag: u32) -> impl Iterator<Item = EntityId> + '_ {
        self.signals.iter().filter_map(move |s| match *s {
            Signal::TweenDone { entity, tag: t } if t == tag => Some(entity),
            _ => None,
        })
    }
}

/// A scene of the linear flow.
pub trait GameScene {
    fn key(&self) -> SceneKey;

    /// Spawn entities, labels and timers. The engine scene is empty on entry.
    fn enter(&mut self, ctx: &mut EngineContext);

    /// One fixed step. Returns the scene to switch to, if any.
    fn update(&mut self, ctx: &mut EngineContext, frame: &Frame) -> Option<SceneKey>;
}

pub fn build(key: SceneKey, catalog: &LevelCatalog) -> Box<dyn GameScene> {
    match key {
        SceneKey::GameMenu => Box::new(menu::MenuScene::new()),
        SceneKey::StoryTelling => Box::new(story::StoryScene::intro()),
        SceneKey::LevelOne => Box::new(planets::PlanetsScene::new(catalog.planets.clone())),
        SceneKey::LevelTwo => match catalog.level_two {
            LevelTwoVariant::Puzzle => Box::new(puzzle::PuzzleScene::new(catalog.puzzle.clone())),
            LevelTwoVariant::Pyramid => Box::new(pyramid::PyramidScene::new(catalog.pyramid.clone())),
        },
        SceneKey::LevelThree => Box::new(potion::PotionScene::new(catalog.potion.clone())),
        SceneKey::LevelFour => Box::new(sorting::SortingScene::new(catalog.sorting.clone())),
        SceneKey::LevelFive => Box::new(lights_out::LightsOutScene::new(catalog.lights_out.clone())),
        SceneKey::StoryOutro => Box::new(story::StoryScene::outro()),
        SceneKey::LevelCredits => Box::new(credits::CreditsScene::new()),
    }
}
