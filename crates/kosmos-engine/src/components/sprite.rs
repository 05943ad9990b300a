/// Identifies which texture atlas a sprite belongs to.
/// Index into the AssetManifest's atlas list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AtlasId(pub u32);

impl AtlasId {
    /// Untextured quad filled with the sprite tint.
    pub const SOLID: AtlasId = AtlasId(u32::MAX);

    /// Atlas index as written into the instance buffer (-1 for solid quads).
    pub fn wire_value(self) -> f32 {
        if self == Self::SOLID {
            -1.0
        } else {
            self.0 as f32
        }
    }
}

/// How an entity appears on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteComponent {
    /// Which atlas this sprite belongs to.
    pub atlas: AtlasId,
    /// Column in the atlas grid.
    pub col: f32,
    /// Row in the atlas grid.
    pub row: f32,
    /// Number of cells this sprite spans (1.0 = single cell, 2.0 = 2x2 block).
    pub cell_span: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// Multiplied colour as 0xRRGGBB; the fill colour for solid quads.
    pub tint: u32,
}

impl SpriteComponent {
    /// A flat coloured rectangle (grid tiles, target markers, zone fills).
    pub fn solid(tint: u32) -> Self {
        Self {
            atlas: AtlasId::SOLID,
            tint,
            ..Default::default()
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self {
            atlas: AtlasId(0),
            col: 0.0,
            row: 0.0,
            cell_span: 1.0,
            alpha: 1.0,
            tint: 0xFF_FF_FF,
        }
    }
}
