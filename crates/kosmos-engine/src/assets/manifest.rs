use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// What the host loaded: atlas images, named sprite cells and sound files.
/// Only names and grid cells matter on this side; the host owns the pixels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    #[serde(default)]
    pub atlases: Vec<AtlasDescriptor>,
    #[serde(default)]
    pub sprites: HashMap<String, SpriteDescriptor>,
    /// Keyed by file name; `event_id` is the `SoundEvent` that plays the file.
    #[serde(default)]
    pub sounds: HashMap<String, SoundDescriptor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasDescriptor {
    pub name: String,
    pub cols: u32,
    pub rows: u32,
    pub path: String,
}

/// One cell (or a `span` x `span` block) of an atlas.
/// Full-screen backgrounds are 1x1 atlases with a single sprite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    pub atlas: u32,
    #[serde(default)]
    pub col: u32,
    #[serde(default)]
    pub row: u32,
    #[serde(default = "one")]
    pub span: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundDescriptor {
    pub path: String,
    #[serde(default)]
    pub event_id: Option<u32>,
    /// Music loops and replaces whatever music is playing.
    #[serde(default)]
    pub music: bool,
}

fn one() -> u32 {
    1
}

impl AssetManifest {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether `sprite` points at an existing atlas and stays inside its grid.
    pub fn resolves(&self, sprite: &SpriteDescriptor) -> bool {
        self.atlases.get(sprite.atlas as usize).is_some_and(|atlas| {
            sprite.col + sprite.span <= atlas.cols && sprite.row + sprite.span <= atlas.rows
        })
    }

    /// Names of sprites that do not resolve, sorted.
    pub fn dangling_sprites(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .sprites
            .iter()
            .filter(|(_, desc)| !self.resolves(desc))
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_manifest_with_sounds() {
        let json = r#"{
            "atlases": [],
            "sounds": {
                "menu_music": { "path": "audio/menu.mp3", "event_id": 1, "music": true },
                "piece_placed": { "path": "audio/plop.mp3", "event_id": 5 },
                "unused": { "path": "audio/unused.mp3" }
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.sounds.len(), 3);
        assert!(manifest.sounds["menu_music"].music);
        assert_eq!(manifest.sounds["piece_placed"].event_id, Some(5));
        assert!(!manifest.sounds["piece_placed"].music);
        assert_eq!(manifest.sounds["unused"].event_id, None);
    }

    #[test]
    fn parse_sprites_with_default_span() {
        let json = r#"{
            "atlases": [
                { "name": "planets", "cols": 8, "rows": 1, "path": "planets.png" }
            ],
            "sprites": {
                "erde": { "atlas": 0, "col": 2, "row": 0 }
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.atlases[0].cols, 8);
        assert_eq!(manifest.sprites["erde"].col, 2);
        assert_eq!(manifest.sprites["erde"].span, 1);
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        assert!(AssetManifest::from_json(r#"{ "sprites": [1, 2] }"#).is_err());
    }

    #[test]
    fn sprites_outside_their_atlas_are_dangling() {
        let json = r#"{
            "atlases": [
                { "name": "potion", "cols": 3, "rows": 1, "path": "potion.png" },
                { "name": "credits", "cols": 1, "rows": 1, "path": "credits.jpg" }
            ],
            "sprites": {
                "potion_background": { "atlas": 0 },
                "credits_background": { "atlas": 1 },
                "too_far": { "atlas": 0, "col": 3 },
                "no_atlas": { "atlas": 7 }
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.dangling_sprites(), vec!["no_atlas", "too_far"]);
    }
}
