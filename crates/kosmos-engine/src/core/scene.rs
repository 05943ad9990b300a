use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Simple entity storage using a flat Vec.
/// Spawn order is preserved, so later entities draw and pick above earlier
/// ones within the same layer.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(128),
        }
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove an entity by ID. Returns the removed entity if found.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(idx))
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    /// Ids of all entities with the given tag, in spawn order.
    pub fn ids_by_tag(&self, tag: &str) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|e| e.tag == tag)
            .map(|e| e.id)
            .collect()
    }

    /// Top-most active, interactive entity under `point`.
    /// Higher layers win; within a layer the most recently spawned wins.
    pub fn pick(&self, point: Vec2) -> Option<EntityId> {
        self.entities
            .iter()
            .enumerate()
            .filter(|(_, e)| e.active && e.interactive && e.contains(point))
            .max_by_key(|(idx, e)| (e.layer, *idx))
            .map(|(_, e)| e.id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layer::RenderLayer;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id).with_pos(Vec2::new(10.0, 20.0)));
        let e = scene.get(id).unwrap();
        assert_eq!(e.pos, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn despawn_keeps_spawn_order() {
        let mut scene = Scene::new();
        for i in 1..=4 {
            scene.spawn(Entity::new(EntityId(i)));
        }
        assert!(scene.despawn(EntityId(2)).is_some());
        assert!(scene.despawn(EntityId(2)).is_none());
        let order: Vec<u32> = scene.iter().map(|e| e.id.0).collect();
        assert_eq!(order, vec![1, 3, 4]);
    }

    #[test]
    fn find_by_tag() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("planet"));
        scene.spawn(Entity::new(EntityId(2)).with_tag("marker"));
        scene.spawn(Entity::new(EntityId(3)).with_tag("planet"));
        assert_eq!(scene.find_by_tag("marker").unwrap().id, EntityId(2));
        assert_eq!(scene.ids_by_tag("planet"), vec![EntityId(1), EntityId(3)]);
    }

    #[test]
    fn pick_prefers_top_layer_then_latest() {
        let mut scene = Scene::new();
        let size = Vec2::splat(50.0);
        scene.spawn(Entity::new(EntityId(1)).with_scale(size).draggable());
        scene.spawn(Entity::new(EntityId(2)).with_scale(size).draggable());
        scene.spawn(
            Entity::new(EntityId(3))
                .with_pos(Vec2::new(200.0, 0.0))
                .with_scale(size)
                .draggable(),
        );
        assert_eq!(scene.pick(Vec2::new(5.0, 5.0)), Some(EntityId(2)));

        scene.get_mut(EntityId(1)).unwrap().layer = RenderLayer::Lifted;
        assert_eq!(scene.pick(Vec2::new(5.0, 5.0)), Some(EntityId(1)));
        assert_eq!(scene.pick(Vec2::new(100.0, 100.0)), None);
    }

    #[test]
    fn pick_skips_inactive_and_decorative() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_scale(Vec2::splat(50.0)).draggable());
        scene.spawn(Entity::new(EntityId(2)).with_scale(Vec2::splat(50.0)));
        assert_eq!(scene.pick(Vec2::ZERO), Some(EntityId(1)));
        scene.get_mut(EntityId(1)).unwrap().active = false;
        assert_eq!(scene.pick(Vec2::ZERO), None);
    }
}
