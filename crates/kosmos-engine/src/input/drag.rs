//! Pointer drag tracking.
//!
//! Turns raw pointer events into drag gestures on draggable entities. A press
//! only becomes a drag once the pointer travels `threshold` pixels, so a plain
//! click never moves anything. The entity keeps its grab offset while dragged.

use glam::Vec2;
use crate::api::types::EntityId;
use crate::core::scene::Scene;
use crate::input::queue::{InputEvent, InputQueue};

/// A drag gesture step. Positions are where the entity centre should be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    Start { entity: EntityId, pos: Vec2 },
    Move { entity: EntityId, pos: Vec2 },
    End { entity: EntityId, pos: Vec2 },
}

impl DragEvent {
    pub fn entity(&self) -> EntityId {
        match *self {
            DragEvent::Start { entity, .. }
            | DragEvent::Move { entity, .. }
            | DragEvent::End { entity, .. } => entity,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Grab {
    entity: EntityId,
    pressed_at: Vec2,
    offset: Vec2,
    dragging: bool,
}

#[derive(Debug)]
pub struct DragTracker {
    threshold: f32,
    grab: Option<Grab>,
}

impl DragTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            grab: None,
        }
    }

    /// Entity currently being dragged (past the threshold).
    pub fn dragging(&self) -> Option<EntityId> {
        self.grab.filter(|g| g.dragging).map(|g| g.entity)
    }

    /// Forget the current press, e.g. when its entity is removed.
    pub fn cancel(&mut self) {
        self.grab = None;
    }

    /// Consume this frame's pointer events.
    pub fn process(&mut self, input: &InputQueue, scene: &Scene) -> Vec<DragEvent> {
        let mut out = Vec::new();
        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { x, y } => self.press(Vec2::new(x, y), scene),
                InputEvent::PointerMove { x, y } => self.motion(Vec2::new(x, y), scene, &mut out),
                InputEvent::PointerUp { x, y } => self.release(Vec2::new(x, y), scene, &mut out),
                _ => {}
            }
        }
        out
    }

    fn press(&mut self, p: Vec2, scene: &Scene) {
        if self.grab.is_some() {
            return;
        }
        let Some(id) = scene.pick(p) else { return };
        let Some(entity) = scene.get(id) else { return };
        if !entity.draggable {
            return;
        }
        self.grab = Some(Grab {
            entity: id,
            pressed_at: p,
            offset: p - entity.pos,
            dragging: false,
        });
    }

    fn motion(&mut self, p: Vec2, scene: &Scene, out: &mut Vec<DragEvent>) {
        let Some(grab) = self.grab.as_mut() else { return };
        if !scene.contains(grab.entity) {
            self.grab = None;
            return;
        }
        let pos = p - grab.offset;
        if !grab.dragging {
            if p.distance(grab.pressed_at) < self.threshold {
                return;
            }
            grab.dragging = true;
            out.push(DragEvent::Start { entity: grab.entity, pos });
        }
        out.push(DragEvent::Move { entity: grab.entity, pos });
    }

    fn release(&mut self, p: Vec2, scene: &Scene, out: &mut Vec<DragEvent>) {
        let Some(grab) = self.grab.take() else { return };
        if grab.dragging && scene.contains(grab.entity) {
            out.push(DragEvent::End { entity: grab.entity, pos: p - grab.offset });
        }
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;

    fn scene_with_item() -> Scene {
        let mut scene = Scene::new();
        scene.spawn(
            Entity::new(EntityId(1))
                .with_pos(Vec2::new(100.0, 100.0))
                .with_scale(Vec2::splat(40.0))
                .draggable(),
        );
        scene.spawn(
            Entity::new(EntityId(2))
                .with_pos(Vec2::new(300.0, 100.0))
                .with_scale(Vec2::splat(40.0))
                .interactive(),
        );
        scene
    }

    fn queue(events: &[InputEvent]) -> InputQueue {
        let mut q = InputQueue::new();
        for e in events {
            q.push(*e);
        }
        q
    }

    #[test]
    fn small_moves_stay_below_threshold() {
        let scene = scene_with_item();
        let mut drag = DragTracker::new(10.0);
        let events = drag.process(
            &queue(&[
                InputEvent::PointerDown { x: 100.0, y: 100.0 },
                InputEvent::PointerMove { x: 105.0, y: 103.0 },
                InputEvent::PointerUp { x: 105.0, y: 103.0 },
            ]),
            &scene,
        );
        assert!(events.is_empty());
        assert_eq!(drag.dragging(), None);
    }

    #[test]
    fn drag_keeps_grab_offset() {
        let scene = scene_with_item();
        let mut drag = DragTracker::new(10.0);
        let events = drag.process(
            &queue(&[
                InputEvent::PointerDown { x: 110.0, y: 95.0 },
                InputEvent::PointerMove { x: 160.0, y: 95.0 },
            ]),
            &scene,
        );
        assert_eq!(
            events,
            vec![
                DragEvent::Start { entity: EntityId(1), pos: Vec2::new(150.0, 100.0) },
                DragEvent::Move { entity: EntityId(1), pos: Vec2::new(150.0, 100.0) },
            ]
        );
        assert_eq!(drag.dragging(), Some(EntityId(1)));

        let events = drag.process(&queue(&[InputEvent::PointerUp { x: 210.0, y: 305.0 }]), &scene);
        assert_eq!(
            events,
            vec![DragEvent::End { entity: EntityId(1), pos: Vec2::new(200.0, 310.0) }]
        );
        assert_eq!(drag.dragging(), None);
    }

    #[test]
    fn non_draggable_entities_are_not_grabbed() {
        let scene = scene_with_item();
        let mut drag = DragTracker::new(10.0);
        let events = drag.process(
            &queue(&[
                InputEvent::PointerDown { x: 300.0, y: 100.0 },
                InputEvent::PointerMove { x: 400.0, y: 100.0 },
                InputEvent::PointerUp { x: 400.0, y: 100.0 },
            ]),
            &scene,
        );
        assert!(events.is_empty());
    }

    #[test]
    fn removed_entity_ends_silently() {
        let mut scene = scene_with_item();
        let mut drag = DragTracker::new(10.0);
        drag.process(
            &queue(&[
                InputEvent::PointerDown { x: 100.0, y: 100.0 },
                InputEvent::PointerMove { x: 150.0, y: 100.0 },
            ]),
            &scene,
        );
        scene.despawn(EntityId(1));
        let events = drag.process(&queue(&[InputEvent::PointerUp { x: 150.0, y: 100.0 }]), &scene);
        assert!(events.is_empty());
    }
}
