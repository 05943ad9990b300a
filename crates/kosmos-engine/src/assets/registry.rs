use std::collections::{HashMap, HashSet};
use crate::assets::manifest::AssetManifest;
use crate::components::sprite::{AtlasId, SpriteComponent};

/// Registry of named sprites, built from an AssetManifest.
/// Provides name-based sprite lookup for game code.
#[derive(Debug, Default)]
pub struct SpriteRegistry {
    sprites: HashMap<String, SpriteComponent>,
    warned: HashSet<String>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sprites that do not resolve against their atlas are left out with a warning.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        for name in manifest.dangling_sprites() {
            log::warn!("sprite '{}' is outside its atlas, skipped", name);
        }
        let sprites = manifest
            .sprites
            .iter()
            .filter(|(_, desc)| manifest.resolves(desc))
            .map(|(name, desc)| {
                let sprite = SpriteComponent {
                    atlas: AtlasId(desc.atlas),
                    col: desc.col as f32,
                    row: desc.row as f32,
                    cell_span: desc.span as f32,
                    ..Default::default()
                };
                (name.clone(), sprite)
            })
            .collect();
        Self {
            sprites,
            warned: HashSet::new(),
        }
    }

    /// Look up a sprite by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<&SpriteComponent> {
        self.sprites.get(name)
    }

    /// Look up a sprite, logging a warning the first time a name is missing.
    pub fn sprite_or_warn(&mut self, name: &str) -> Option<SpriteComponent> {
        if let Some(sprite) = self.sprites.get(name) {
            return Some(sprite.clone());
        }
        if self.warned.insert(name.to_string()) {
            log::warn!("sprite '{}' not found in manifest", name);
        }
        None
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
