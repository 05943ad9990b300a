//! Ticks animations and writes the current frame into the sprite.

use crate::core::scene::Scene;

/// Tick all entity animations and copy the current frame into the sprite.
pub fn tick_animations(scene: &mut Scene, dt: f32) {
    for entity in scene.iter_mut() {
        let Some(anim) = entity.animation.as_mut() else { continue };
        anim.tick(dt);

        if let (Some((col, row)), Some(sprite)) = (anim.current_frame(), entity.sprite.as_mut()) {
            sprite.col = col;
            sprite.row = row;
        }
    }
}
