use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::animation::AnimationComponent;
use crate::components::layer::RenderLayer;
use crate::components::sprite::SpriteComponent;
use crate::components::text::TextComponent;
use crate::core::geometry::Rect;

/// Fat Entity: a single struct with optional components.
/// Designed for simplicity and rapid prototyping over ECS purity.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are skipped).
    pub active: bool,
    /// Position (centre) in world space.
    pub pos: Vec2,
    /// Rotation in radians.
    pub rotation: f32,
    /// World-space size. Also the hit box for pointer picking.
    pub scale: Vec2,
    /// Draw order bucket.
    pub layer: RenderLayer,
    /// Whether the pointer can hit this entity.
    pub interactive: bool,
    /// Whether pointer drags move this entity. Implies `interactive`.
    pub draggable: bool,
    /// Sprite component. Entities without one are not drawn.
    pub sprite: Option<SpriteComponent>,
    /// Sprite frame animation.
    pub animation: Option<AnimationComponent>,
    /// Text label, drawn by the host.
    pub text: Option<TextComponent>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
            layer: RenderLayer::default(),
            interactive: false,
            draggable: false,
            sprite: None,
            animation: None,
            text: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    /// Attach a sprite if one was resolved; `None` leaves the entity undrawn.
    pub fn with_sprite(mut self, sprite: impl Into<Option<SpriteComponent>>) -> Self {
        self.sprite = sprite.into();
        self
    }

    pub fn with_animation(mut self, animation: AnimationComponent) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn with_text(mut self, text: TextComponent) -> Self {
        self.text = Some(text);
        self
    }

    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    pub fn draggable(mut self) -> Self {
        self.interactive = true;
        self.draggable = true;
        self
    }

    /// Axis-aligned bounds centred on `pos`.
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, self.scale)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.bounds().contains(point)
    }

    /// Stop all pointer interaction (used once an item is placed).
    pub fn lock(&mut self) {
        self.interactive = false;
        self.draggable = false;
    }

    /// Opacity of whatever this entity draws.
    pub fn set_alpha(&mut self, alpha: f32) {
        if let Some(sprite) = &mut self.sprite {
            sprite.alpha = alpha;
        }
        if let Some(text) = &mut self.text {
            text.alpha = alpha;
        }
    }
}
