use crate::components::entity::Entity;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from a set of entities.
/// Instances are ordered by layer (back-to-front), keeping spawn order
/// within a layer. Entities without sprites are skipped.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    let mut visible: Vec<&Entity> = entities
        .filter(|e| e.active && e.sprite.is_some())
        .collect();
    // Stable sort keeps spawn order inside a layer.
    visible.sort_by_key(|e| e.layer);

    let mut dropped = 0usize;
    for entity in visible {
        let Some(sprite) = &entity.sprite else { continue };

        let instance = RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            rotation: entity.rotation,
            width: entity.scale.x,
            height: entity.scale.y,
            atlas: sprite.atlas.wire_value(),
            col: sprite.col,
            row: sprite.row,
            cell_span: sprite.cell_span,
            alpha: sprite.alpha,
            tint: sprite.tint as f32,
        };

        if !buffer.push(instance) {
            dropped += 1;
        }
    }

    if dropped > 0 {
        log::warn!(
            "render buffer full ({} instances), dropped {}",
            buffer.capacity(),
            dropped
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::layer::RenderLayer;
    use crate::components::sprite::{AtlasId, SpriteComponent};
    use glam::Vec2;

    #[test]
    fn build_buffer_orders_by_layer() {
        let entities = vec![
            Entity::new(EntityId(1))
                .with_pos(Vec2::new(10.0, 20.0))
                .with_layer(RenderLayer::Items)
                .with_sprite(SpriteComponent::default()),
            Entity::new(EntityId(2))
                .with_pos(Vec2::new(30.0, 40.0))
                .with_layer(RenderLayer::Background)
                .with_sprite(SpriteComponent::default()),
            Entity::new(EntityId(3))
                .with_pos(Vec2::new(50.0, 60.0))
                .with_layer(RenderLayer::Items)
                .with_sprite(SpriteComponent::default()),
        ];

        let mut buffer = RenderBuffer::default();
        build_render_buffer(entities.iter(), &mut buffer);

        let xs: Vec<f32> = buffer.instances.iter().map(|i| i.x).collect();
        assert_eq!(xs, vec![30.0, 10.0, 50.0]);
    }

    #[test]
    fn solid_quads_carry_tint() {
        let entities = vec![Entity::new(EntityId(1))
            .with_scale(Vec2::new(52.0, 52.0))
            .with_sprite(SpriteComponent::solid(0xFF_D7_00))];
        let mut buffer = RenderBuffer::default();
        build_render_buffer(entities.iter(), &mut buffer);

        let inst = buffer.instances[0];
        assert_eq!(inst.atlas, -1.0);
        assert_eq!(inst.tint, 0xFF_D7_00 as f32);
        assert_eq!(inst.width, 52.0);
        assert_ne!(SpriteComponent::default().atlas, AtlasId::SOLID);
    }

    #[test]
    fn inactive_and_spriteless_entities_are_skipped() {
        let mut hidden = Entity::new(EntityId(1)).with_sprite(SpriteComponent::default());
        hidden.active = false;
        let label = Entity::new(EntityId(2));

        let entities = vec![hidden, label];
        let mut buffer = RenderBuffer::default();
        build_render_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
    }
}
