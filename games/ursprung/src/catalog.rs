//! Level catalog: the geometry and item data of every mini-game.
//!
//! Shipped as `assets/levels.json` and embedded at build time. A catalog that
//! fails to parse or validate is logged and replaced by the built-in default.

use std::collections::HashSet;

use anyhow::{ensure, Context, Result};
use glam::Vec2;
use serde::Deserialize;

use crate::placement::{HitMode, Metric, MissPolicy};

const SHIPPED: &str = include_str!("../assets/levels.json");

/// Which of the two level-two designs is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelTwoVariant {
    /// Missing pieces of the Egyptian scene, snapped by radius.
    #[default]
    Puzzle,
    /// Pyramid blocks and glyph tablets sorted onto zones, with sandstorms.
    Pyramid,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LevelCatalog {
    pub level_two: LevelTwoVariant,
    pub planets: PlanetsConfig,
    pub puzzle: PuzzleConfig,
    pub pyramid: PyramidConfig,
    pub potion: PotionConfig,
    pub sorting: SortingConfig,
    pub lights_out: LightsOutConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlanetsConfig {
    /// Planet keys in target order, left to right.
    pub order: Vec<String>,
    /// Centre of the first target.
    pub first_target: Vec2,
    pub spacing: f32,
    pub tolerance: f32,
    pub metric: Metric,
    pub on_miss: MissPolicy,
    pub size: f32,
    /// Horizontal distance start positions keep from the world edges.
    pub spawn_margin: f32,
    /// Vertical start band (min, max).
    pub spawn_band: Vec2,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PuzzlePiece {
    pub key: String,
    pub start: Vec2,
    /// World size before placement.
    pub size: Vec2,
    pub target: Vec2,
    pub offset: Vec2,
    /// Size multiplier once placed.
    pub placed_scale: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PuzzleConfig {
    pub radius: f32,
    pub on_miss: MissPolicy,
    pub pieces: Vec<PuzzlePiece>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ZoneConfig {
    pub id: String,
    pub label: String,
    pub center: Vec2,
    pub size: Vec2,
    pub expects: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PyramidItem {
    pub key: String,
    pub kind: String,
    pub size: Vec2,
    /// Start positions are drawn from this box (inclusive).
    pub spawn_min: Vec2,
    pub spawn_max: Vec2,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PyramidConfig {
    pub hit: HitMode,
    pub jitter: bool,
    pub storm_interval: f32,
    pub zones: Vec<ZoneConfig>,
    pub items: Vec<PyramidItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PotionConfig {
    pub sequence: Vec<String>,
    /// Start positions in reference coordinates, one per sequence entry.
    pub positions: Vec<Vec2>,
    /// World size the positions were authored for.
    pub reference: Vec2,
    pub item_size: f32,
    /// Cauldron centre relative to the world centre.
    pub cauldron_offset: Vec2,
    pub cauldron_radius: f32,
    pub reset_delay: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SortingLane {
    pub x: f32,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SortingConfig {
    pub lanes: Vec<SortingLane>,
    pub spawn_y: f32,
    /// Falling items stop here; also the top edge of the drop-in zones.
    pub landing_y: f32,
    pub zone_size: Vec2,
    pub item_size: f32,
    pub spawn_interval: f32,
    pub fall_duration: f32,
    pub required: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LightsOutConfig {
    pub cols: usize,
    pub rows: usize,
    pub tile: f32,
    pub y_offset: f32,
    pub mix_clicks: usize,
}

impl LevelCatalog {
    /// Parse and validate a catalog.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json).context("level catalog is not valid JSON")?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The embedded catalog, or the built-in default if it is rejected.
    pub fn load() -> Self {
        match Self::from_json(SHIPPED) {
            Ok(catalog) => catalog,
            Err(err) => {
                log::error!("level catalog rejected, using built-in levels: {err:#}");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.planets.validate().context("planets")?;
        self.puzzle.validate().context("puzzle")?;
        self.pyramid.validate().context("pyramid")?;
        self.potion.validate().context("potion")?;
        self.sorting.validate().context("sorting")?;
        self.lights_out.validate().context("lights_out")?;
        Ok(())
    }
}

fn unique<'a>(keys: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for key in keys {
        ensure!(seen.insert(key), "duplicate item key '{key}'");
    }
    Ok(())
}

impl PlanetsConfig {
    fn validate(&self) -> Result<()> {
        ensure!(!self.order.is_empty(), "no planets");
        unique(self.order.iter().map(String::as_str))?;
        ensure!(self.tolerance > 0.0, "tolerance must be positive");
        ensure!(self.size > 0.0, "planet size must be positive");
        ensure!(self.spawn_band.x <= self.spawn_band.y, "spawn band is inverted");
        Ok(())
    }
}

impl PuzzleConfig {
    fn validate(&self) -> Result<()> {
        ensure!(!self.pieces.is_empty(), "no puzzle pieces");
        unique(self.pieces.iter().map(|p| p.key.as_str()))?;
        ensure!(self.radius > 0.0, "radius must be positive");
        for piece in &self.pieces {
            ensure!(piece.placed_scale > 0.0, "piece '{}' has a non-positive placed scale", piece.key);
        }
        Ok(())
    }
}

impl PyramidConfig {
    fn validate(&self) -> Result<()> {
        ensure!(!self.zones.is_empty(), "no zones");
        ensure!(!self.items.is_empty(), "no items");
        unique(self.items.iter().map(|i| i.key.as_str()))?;
        for item in &self.items {
            ensure!(
                self.zones.iter().any(|z| z.expects == item.kind),
                "no zone accepts item '{}' of type '{}'",
                item.key,
                item.kind
            );
            ensure!(
                item.spawn_min.cmple(item.spawn_max).all(),
                "item '{}' has an inverted spawn box",
                item.key
            );
        }
        ensure!(self.storm_interval > 0.0, "storm interval must be positive");
        Ok(())
    }
}

impl PotionConfig {
    fn validate(&self) -> Result<()> {
        ensure!(!self.sequence.is_empty(), "empty ingredient sequence");
        unique(self.sequence.iter().map(String::as_str))?;
        ensure!(
            self.positions.len() >= self.sequence.len(),
            "{} ingredients but only {} start positions",
            self.sequence.len(),
            self.positions.len()
        );
        ensure!(self.reference.cmpgt(Vec2::ZERO).all(), "reference size must be positive");
        ensure!(self.cauldron_radius > 0.0, "cauldron radius must be positive");
        ensure!(self.reset_delay >= 0.0, "reset delay must not be negative");
        Ok(())
    }
}

impl SortingConfig {
    fn validate(&self) -> Result<()> {
        ensure!(!self.lanes.is_empty(), "no lanes");
        ensure!(self.required > 0, "required count must be positive");
        ensure!(self.spawn_interval > 0.0, "spawn interval must be positive");
        ensure!(self.fall_duration > 0.0, "fall duration must be positive");
        ensure!(self.landing_y > self.spawn_y, "items must fall downwards");
        Ok(())
    }
}

impl LightsOutConfig {
    fn validate(&self) -> Result<()> {
        ensure!(self.cols > 0 && self.rows > 0, "grid must have at least one cell");
        ensure!(self.tile > 0.0, "tile size must be positive");
        Ok(())
    }
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self {
            level_two: LevelTwoVariant::Puzzle,
            planets: PlanetsConfig::default(),
            puzzle: PuzzleConfig::default(),
            pyramid: PyramidConfig::default(),
            potion: PotionConfig::default(),
            sorting: SortingConfig::default(),
            lights_out: LightsOutConfig::default(),
        }
    }
}

impl Default for PlanetsConfig {
    fn default() -> Self {
        Self {
            order: keys(&["merkur", "venus", "erde", "mars", "jupiter", "saturn", "uranus", "neptun"]),
            first_target: Vec2::new(300.0, 300.0),
            spacing: 85.0,
            tolerance: 35.0,
            metric: Metric::Axis,
            on_miss: MissPolicy::Stay,
            size: 60.0,
            spawn_margin: 50.0,
            spawn_band: Vec2::new(150.0, 400.0),
        }
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        let piece = |key: &str, start: [f32; 2], size: [f32; 2], target: [f32; 2], offset: [f32; 2], placed_scale: f32| PuzzlePiece {
            key: key.to_string(),
            start: Vec2::from(start),
            size: Vec2::from(size),
            target: Vec2::from(target),
            offset: Vec2::from(offset),
            placed_scale,
        };
        Self {
            radius: 50.0,
            on_miss: MissPolicy::Return,
            pieces: vec![
                piece("nose", [150.0, 520.0], [70.0, 60.0], [720.0, 170.0], [30.0, 9.0], 1.3),
                piece("door", [400.0, 520.0], [60.0, 110.0], [615.0, 410.0], [9.0, 24.0], 1.3),
                piece("crown", [200.0, 170.0], [80.0, 80.0], [450.0, 490.0], [-12.0, 32.0], 1.4),
                piece("stone", [650.0, 350.0], [90.0, 70.0], [240.0, 520.0], [-22.0, 40.0], 1.26),
                piece("obelisk", [900.0, 520.0], [50.0, 90.0], [125.0, 100.0], [-11.0, -23.0], 1.38),
                piece("symbol", [600.0, 200.0], [70.0, 70.0], [145.0, 200.0], [-21.0, 18.0], 1.1),
                piece("camel", [500.0, 100.0], [90.0, 70.0], [450.0, 350.0], [0.0, 5.0], 1.0),
                piece("human", [900.0, 220.0], [40.0, 80.0], [380.0, 360.0], [0.0, 0.0], 1.0),
            ],
        }
    }
}

impl Default for PyramidConfig {
    fn default() -> Self {
        let zone = |id: &str, label: &str, center: [f32; 2], size: [f32; 2], expects: &str| ZoneConfig {
            id: id.to_string(),
            label: label.to_string(),
            center: Vec2::from(center),
            size: Vec2::from(size),
            expects: expects.to_string(),
        };
        let item = |key: &str, kind: &str, size: [f32; 2], spawn_min: [f32; 2], spawn_max: [f32; 2]| PyramidItem {
            key: key.to_string(),
            kind: kind.to_string(),
            size: Vec2::from(size),
            spawn_min: Vec2::from(spawn_min),
            spawn_max: Vec2::from(spawn_max),
        };
        Self {
            hit: HitMode::Overlap,
            jitter: true,
            storm_interval: 7.0,
            zones: vec![
                zone("zone_base", "Fundament", [250.0, 420.0], [200.0, 80.0], "block_base"),
                zone("zone_mid", "Mitte", [400.0, 330.0], [160.0, 70.0], "block_mid"),
                zone("zone_top", "Spitze", [550.0, 250.0], [120.0, 60.0], "block_top"),
                zone("zone_wall_left", "Grabwand L", [100.0, 220.0], [120.0, 160.0], "wall_left"),
                zone("zone_wall_right", "Grabwand R", [700.0, 220.0], [120.0, 160.0], "wall_right"),
            ],
            items: vec![
                item("block_base", "block_base", [180.0, 60.0], [250.0, 480.0], [550.0, 560.0]),
                item("block_mid", "block_mid", [140.0, 55.0], [250.0, 480.0], [550.0, 560.0]),
                item("block_top", "block_top", [100.0, 50.0], [250.0, 480.0], [550.0, 560.0]),
                item("glyph_sun", "wall_left", [60.0, 60.0], [250.0, 120.0], [550.0, 220.0]),
                item("glyph_bird", "wall_left", [60.0, 60.0], [250.0, 120.0], [550.0, 220.0]),
                item("glyph_ankh", "wall_right", [60.0, 60.0], [250.0, 120.0], [550.0, 220.0]),
            ],
        }
    }
}

impl Default for PotionConfig {
    fn default() -> Self {
        Self {
            sequence: keys(&[
                "mushroom", "sheet", "stick", "eye", "bone", "bottle", "crawl", "feather", "berry", "crystal",
            ]),
            positions: [
                [820.0, 560.0],
                [350.0, 520.0],
                [230.0, 330.0],
                [85.0, 200.0],
                [300.0, 488.0],
                [910.0, 232.0],
                [896.0, 562.0],
                [180.0, 570.0],
                [250.0, 208.0],
                [955.0, 420.0],
            ]
            .into_iter()
            .map(Vec2::from)
            .collect(),
            reference: Vec2::new(1000.0, 600.0),
            item_size: 70.0,
            cauldron_offset: Vec2::new(-15.0, 50.0),
            cauldron_radius: 100.0,
            reset_delay: 1.5,
        }
    }
}

impl Default for SortingConfig {
    fn default() -> Self {
        let lane = |x: f32, kind: &str| SortingLane { x, kind: kind.to_string() };
        Self {
            lanes: vec![lane(215.0, "item_red"), lane(475.0, "item_green"), lane(742.0, "item_blue")],
            spawn_y: 240.0,
            landing_y: 445.0,
            zone_size: Vec2::new(150.0, 75.0),
            item_size: 50.0,
            spawn_interval: 1.5,
            fall_duration: 5.0,
            required: 15,
        }
    }
}

impl Default for LightsOutConfig {
    fn default() -> Self {
        Self {
            cols: 6,
            rows: 6,
            tile: 56.0,
            y_offset: 20.0,
            mix_clicks: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_catalog_is_the_builtin_one() {
        let shipped = LevelCatalog::from_json(SHIPPED).expect("shipped catalog must load");
        assert_eq!(shipped, LevelCatalog::default());
    }

    #[test]
    fn builtin_catalog_validates() {
        LevelCatalog::default().validate().expect("built-in catalog must validate");
    }

    #[test]
    fn variant_names_parse() {
        let v: LevelTwoVariant = serde_json::from_str("\"pyramid\"").unwrap();
        assert_eq!(v, LevelTwoVariant::Pyramid);
    }

    #[test]
    fn duplicate_sequence_keys_are_rejected() {
        let mut catalog = LevelCatalog::default();
        catalog.potion.sequence[1] = "mushroom".to_string();
        let err = catalog.validate().unwrap_err();
        assert!(format!("{err:#}").contains("duplicate item key 'mushroom'"));
    }

    #[test]
    fn every_sequence_key_needs_a_position() {
        let mut catalog = LevelCatalog::default();
        catalog.potion.positions.truncate(9);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn zone_types_must_be_accepted_somewhere() {
        let mut catalog = LevelCatalog::default();
        catalog.pyramid.items[0].kind = "sphinx".to_string();
        let err = catalog.validate().unwrap_err();
        assert!(format!("{err:#}").starts_with("pyramid"));
    }

    #[test]
    fn empty_grid_is_rejected() {
        let mut catalog = LevelCatalog::default();
        catalog.lights_out.cols = 0;
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn broken_json_reports_context() {
        let err = LevelCatalog::from_json("{ \"level_two\": ").unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }
}
