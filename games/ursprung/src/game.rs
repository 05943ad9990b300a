use kosmos_engine::*;

use crate::catalog::LevelCatalog;
use crate::events::custom;
use crate::flow::{Flow, SceneKey};

const WORLD_W: f32 = 1000.0;
const WORLD_H: f32 = 600.0;
const FIXED_DT: f32 = 1.0 / 60.0;

pub struct Ursprung {
    flow: Flow,
}

impl Ursprung {
    pub fn new() -> Self {
        Self {
            flow: Flow::new(LevelCatalog::load(), FIXED_DT),
        }
    }

    pub fn scene(&self) -> SceneKey {
        self.flow.current()
    }

    /// Returns whether the event switched scenes.
    fn handle_custom(&mut self, ctx: &mut EngineContext, kind: u32, a: f32) -> bool {
        let target = match kind {
            custom::RESTART_SCENE => Some(self.flow.current()),
            custom::GOTO_SCENE => match SceneKey::from_index(a as usize) {
                Some(key) if a >= 0.0 => Some(key),
                _ => {
                    log::warn!("no scene with index {a}");
                    None
                }
            },
            _ => {
                log::warn!("unknown custom event {kind}");
                None
            }
        };
        let Some(key) = target else { return false };
        self.flow.switch(ctx, key);
        true
    }
}

impl Game for Ursprung {
    fn config(&self) -> GameConfig {
        GameConfig {
            world_width: WORLD_W,
            world_height: WORLD_H,
            fixed_dt: FIXED_DT,
            background_color: 0x000000,
            drag_threshold: 10.0,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.flow.start(ctx);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        let mut switched = false;
        for (kind, a, ..) in input.customs() {
            switched |= self.handle_custom(ctx, kind, a);
        }
        // The fresh scene starts with the next step's input.
        if switched {
            return;
        }
        self.flow.update(ctx, input);
    }
}
