use glam::Vec2;
use serde::Serialize;

/// Horizontal alignment of wrapped lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// A text label. Rust owns content and placement; the host measures and draws it.
#[derive(Debug, Clone, PartialEq)]
pub struct TextComponent {
    pub content: String,
    /// Font size in world pixels.
    pub size: f32,
    /// CSS colour string.
    pub color: String,
    pub align: TextAlign,
    /// Anchor within the measured text box: (0.5, 0.5) centres it on the entity.
    pub origin: Vec2,
    /// Word-wrap width in world pixels.
    pub wrap_width: Option<f32>,
    /// Optional box fill behind the text.
    pub background: Option<String>,
    pub alpha: f32,
}

impl TextComponent {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: 24.0,
            color: "#ffffff".to_string(),
            align: TextAlign::Center,
            origin: Vec2::splat(0.5),
            wrap_width: None,
            background: None,
            alpha: 1.0,
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_wrap(mut self, width: f32) -> Self {
        self.wrap_width = Some(width);
        self
    }

    pub fn with_background(mut self, fill: impl Into<String>) -> Self {
        self.background = Some(fill.into());
        self
    }
}
