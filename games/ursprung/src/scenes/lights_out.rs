//! Level 5: switch on every cell of the quantum computer.

use glam::Vec2;
use kosmos_engine::{EngineContext, Entity, EntityId, Rect, RenderLayer, SpriteComponent, TextComponent};

use super::common::{self, WHITE};
use super::{Frame, GameScene};
use crate::catalog::LightsOutConfig;
use crate::events::{game_events, sounds};
use crate::flow::SceneKey;
use crate::placement::{GridLayout, LightsOut};

const TITLE: &str = "Level 5: Quanten-KI-Computer";
const GOAL: &str = "Ziel: Alle Felder AN, um den Computer einzuschalten.";
const WON: &str =
    "Super! Du hast den Quanten-KI-Computer aktiviert.\nKlicke irgendwo, um zum nächsten Level zu gehen.";

const GAP: f32 = 4.0;
const GUARD_SECS: f32 = 0.2;
const FADE_SECS: f32 = 1.0;

/// Fill, stroke and stroke width of a cell.
struct CellStyle {
    fill: u32,
    stroke: u32,
    width: f32,
}

const ON: CellStyle = CellStyle {
    fill: 0x00_AA_FF,
    stroke: 0x66_CC_FF,
    width: 4.0,
};
const OFF: CellStyle = CellStyle {
    fill: 0x00_22_33,
    stroke: 0x44_44_44,
    width: 2.0,
};

mod timers {
    pub const ARMED: u32 = 1;
    pub const NEXT_SCENE: u32 = 2;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Playing,
    /// Solved; clicks are ignored until the guard elapses.
    Won,
    /// Solved and the guard elapsed; the next click leaves.
    Armed,
    Leaving,
}

pub struct LightsOutScene {
    config: LightsOutConfig,
    grid: LightsOut,
    layout: Option<GridLayout>,
    /// (stroke, fill) quads per cell, row-major.
    tiles: Vec<(EntityId, EntityId)>,
    status: Option<EntityId>,
    phase: Phase,
}

impl LightsOutScene {
    pub fn new(config: LightsOutConfig) -> Self {
        let grid = LightsOut::new_lit(config.cols, config.rows);
        Self {
            config,
            grid,
            layout: None,
            tiles: Vec::new(),
            status: None,
            phase: Phase::Playing,
        }
    }

    fn paint(&self, ctx: &mut EngineContext) {
        let inner = self.config.tile - GAP;
        for ((_, _, on), &(stroke, fill)) in self.grid.cells().zip(&self.tiles) {
            let style = if on { &ON } else { &OFF };
            if let Some(e) = ctx.scene.get_mut(stroke) {
                e.sprite = Some(SpriteComponent::solid(style.stroke));
            }
            if let Some(e) = ctx.scene.get_mut(fill) {
                e.sprite = Some(SpriteComponent::solid(style.fill));
                e.scale = Vec2::splat(inner - 2.0 * style.width);
            }
        }
    }

    /// Cell under `p`, ignoring the gaps between tiles.
    fn cell_at(&self, p: Vec2) -> Option<(usize, usize)> {
        let layout = self.layout?;
        let (x, y) = layout.world_to_grid(p)?;
        let tile = Rect::from_center(layout.cell_center(x, y), Vec2::splat(self.config.tile - GAP));
        tile.contains(p).then_some((x, y))
    }

    fn press(&mut self, ctx: &mut EngineContext, x: usize, y: usize) {
        self.grid.toggle(x, y);
        self.paint(ctx);
        if !self.grid.is_solved() {
            return;
        }
        self.phase = Phase::Won;
        if let Some(id) = self.status {
            common::set_text(ctx, id, WON);
        }
        for &(_, fill) in &self.tiles {
            if let Some(e) = ctx.scene.get_mut(fill) {
                e.interactive = false;
            }
        }
        common::report_complete(ctx, SceneKey::LevelFive);
        ctx.after(GUARD_SECS, timers::ARMED);
    }
}

impl GameScene for LightsOutScene {
    fn key(&self) -> SceneKey {
        SceneKey::LevelFive
    }

    fn enter(&mut self, ctx: &mut EngineContext) {
        let world = ctx.world();
        ctx.set_theme(&["level5-background", "level5-game-container"]);
        common::camera(ctx, game_events::CAMERA_FADE_IN, 1.0);
        common::play(ctx, sounds::LEVEL_FIVE_MUSIC);
        common::play(ctx, sounds::NARRATION_FIVE);
        common::backdrop(ctx, "level5_background");

        common::label(
            ctx,
            Vec2::new(world.x / 2.0, 30.0),
            TextComponent::new(TITLE).with_size(26.0).with_color("#00ffe0"),
        );
        common::label(
            ctx,
            Vec2::new(world.x / 2.0, 60.0),
            TextComponent::new(GOAL).with_size(16.0).with_color("#ccccff"),
        );
        self.status = Some(common::label(
            ctx,
            Vec2::new(world.x / 2.0, world.y - 30.0),
            TextComponent::new("").with_size(20.0).with_color(WHITE),
        ));

        let c = &self.config;
        let layout = GridLayout::centered(world, c.cols, c.rows, c.tile, c.y_offset);
        self.layout = Some(layout);
        self.tiles.clear();
        for y in 0..c.rows {
            for x in 0..c.cols {
                let center = layout.cell_center(x, y);
                let stroke = ctx.next_id();
                ctx.spawn(
                    Entity::new(stroke)
                        .with_tag("tile")
                        .with_pos(center)
                        .with_scale(Vec2::splat(c.tile - GAP))
                        .with_layer(RenderLayer::Targets),
                );
                let fill = ctx.next_id();
                ctx.spawn(
                    Entity::new(fill)
                        .with_tag("tile")
                        .with_pos(center)
                        .with_scale(Vec2::splat(c.tile - GAP))
                        .with_layer(RenderLayer::Items)
                        .interactive(),
                );
                self.tiles.push((stroke, fill));
            }
        }

        self.grid = LightsOut::new_lit(c.cols, c.rows);
        self.grid.scramble(&mut ctx.rng, c.mix_clicks);
        self.phase = Phase::Playing;
        self.paint(ctx);
        log::debug!("lights-out scrambled, {} of {} lit", self.grid.lit_count(), c.cols * c.rows);
    }

    fn update(&mut self, ctx: &mut EngineContext, frame: &Frame) -> Option<SceneKey> {
        if frame.timer_fired(timers::NEXT_SCENE) {
            return Some(SceneKey::StoryOutro);
        }
        if frame.timer_fired(timers::ARMED) && self.phase == Phase::Won {
            self.phase = Phase::Armed;
        }

        let p = frame.clicked()?;
        match self.phase {
            Phase::Playing => {
                if let Some((x, y)) = self.cell_at(p) {
                    self.press(ctx, x, y);
                }
            }
            Phase::Armed => {
                self.phase = Phase::Leaving;
                common::play(ctx, sounds::STOP_MUSIC);
                common::camera(ctx, game_events::CAMERA_FADE_OUT, FADE_SECS);
                ctx.after(FADE_SECS, timers::NEXT_SCENE);
            }
            Phase::Won | Phase::Leaving => {}
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::testing;
    use kosmos_engine::{GameEvent, InputEvent, InputQueue, SoundEvent};

    fn scene() -> (LightsOutScene, EngineContext) {
        let mut ctx = testing::context();
        let mut scene = LightsOutScene::new(LightsOutConfig::default());
        scene.enter(&mut ctx);
        (scene, ctx)
    }

    fn click(at: Vec2) -> InputQueue {
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: at.x, y: at.y });
        input
    }

    fn fill_tint(ctx: &EngineContext, scene: &LightsOutScene, x: usize, y: usize) -> u32 {
        let (_, fill) = scene.tiles[y * 6 + x];
        ctx.scene.get(fill).and_then(|e| e.sprite.as_ref()).map(|s| s.tint).unwrap()
    }

    /// Put the grid one press at (2, 2) away from solved.
    fn almost_solved(scene: &mut LightsOutScene, ctx: &mut EngineContext) {
        scene.grid = LightsOut::new_lit(6, 6);
        scene.grid.toggle(2, 2);
        scene.paint(ctx);
    }

    #[test]
    fn grid_starts_scrambled_and_centred() {
        let (scene, ctx) = scene();
        assert!(!scene.grid.is_solved());
        assert_eq!(scene.layout.unwrap().origin, Vec2::new(332.0, 152.0));
        assert_eq!(scene.tiles.len(), 36);
        assert!(ctx.sounds.contains(&SoundEvent(sounds::NARRATION_FIVE)));
    }

    #[test]
    fn clicking_a_cell_flips_it_and_its_neighbours() {
        let (mut scene, mut ctx) = scene();
        let before = scene.grid.clone();
        let center = scene.layout.unwrap().cell_center(0, 0);

        testing::step(&mut scene, &mut ctx, &click(center));

        let mut expected = before;
        expected.toggle(0, 0);
        assert_eq!(scene.grid, expected);
        let tint = if scene.grid.get(0, 0) == Some(true) { ON.fill } else { OFF.fill };
        assert_eq!(fill_tint(&ctx, &scene, 0, 0), tint);
    }

    #[test]
    fn gaps_between_tiles_do_nothing() {
        let (mut scene, mut ctx) = scene();
        let before = scene.grid.clone();
        // Right edge of cell (0, 0): inside the cell square, outside the tile.
        let gap = scene.layout.unwrap().origin + Vec2::new(55.0, 28.0);
        testing::step(&mut scene, &mut ctx, &click(gap));
        assert_eq!(scene.grid, before);
    }

    #[test]
    fn win_locks_input_then_next_click_fades_to_outro() {
        let (mut scene, mut ctx) = scene();
        almost_solved(&mut scene, &mut ctx);
        let layout = scene.layout.unwrap();

        testing::step(&mut scene, &mut ctx, &click(layout.cell_center(2, 2)));
        assert!(scene.grid.is_solved());
        assert_eq!(fill_tint(&ctx, &scene, 2, 2), ON.fill);

        // Inside the guard: ignored, grid untouched.
        testing::step(&mut scene, &mut ctx, &click(layout.cell_center(0, 0)));
        assert!(scene.grid.is_solved());
        assert_eq!(scene.phase, Phase::Won);

        testing::idle(&mut scene, &mut ctx, 0.3);
        assert_eq!(testing::step(&mut scene, &mut ctx, &click(Vec2::new(10.0, 10.0))), None);
        assert!(scene.grid.is_solved());
        assert!(ctx.events.contains(&GameEvent::new(game_events::CAMERA_FADE_OUT, 1000.0, 0.0, 0.0)));
        assert_eq!(ctx.sounds.last(), Some(&SoundEvent(sounds::STOP_MUSIC)));

        assert_eq!(testing::idle(&mut scene, &mut ctx, 1.1), Some(SceneKey::StoryOutro));
    }
}
