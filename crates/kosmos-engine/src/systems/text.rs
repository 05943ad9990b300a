//! Text label system.
//!
//! Labels are entities carrying a `TextComponent`. Their text includes umlauts
//! and needs word wrapping, so instead of glyph sprites the host draws them from
//! a JSON frame built here, together with the page theme classes.

use serde::Serialize;
use crate::components::entity::Entity;
use crate::components::text::TextAlign;

/// One label as seen by the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextInstance<'a> {
    pub id: u32,
    pub text: &'a str,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: &'a str,
    pub align: TextAlign,
    pub origin: [f32; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<&'a str>,
    pub alpha: f32,
    pub layer: u8,
}

/// Everything the host needs besides the sprite buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiFrame<'a> {
    /// CSS classes for the page body.
    pub theme: &'a [String],
    pub texts: Vec<TextInstance<'a>>,
}

/// Collect visible labels back-to-front.
pub fn build_ui_frame<'a>(entities: impl Iterator<Item = &'a Entity>, theme: &'a [String]) -> UiFrame<'a> {
    let mut labels: Vec<&Entity> = entities
        .filter(|e| e.active && e.text.is_some())
        .collect();
    labels.sort_by_key(|e| e.layer);

    let texts = labels
        .into_iter()
        .filter_map(|e| {
            let text = e.text.as_ref()?;
            Some(TextInstance {
                id: e.id.0,
                text: &text.content,
                x: e.pos.x,
                y: e.pos.y,
                size: text.size,
                color: &text.color,
                align: text.align,
                origin: text.origin.to_array(),
                wrap: text.wrap_width,
                background: text.background.as_deref(),
                alpha: text.alpha,
                layer: e.layer.as_u8(),
            })
        })
        .collect();

    UiFrame { theme, texts }
}

/// Serialize the UI frame. Falls back to an empty frame on failure.
pub fn ui_json<'a>(entities: impl Iterator<Item = &'a Entity>, theme: &'a [String]) -> String {
    let frame = build_ui_frame(entities, theme);
    match serde_json::to_string(&frame) {
        Ok(json) => json,
        Err(err) => {
            log::error!("failed to serialize ui frame: {}", err);
            r#"{"theme":[],"texts":[]}"#.to_string()
        }
    }
}
