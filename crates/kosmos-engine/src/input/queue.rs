use glam::Vec2;

/// Input the host forwards to the engine, already in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    /// Browser `keyCode` of the pressed key.
    KeyDown { key_code: u32 },
    KeyUp { key_code: u32 },
    /// Wheel delta, positive scrolls down.
    Wheel { dy: f32 },
    /// Host page command. `kind` is game-defined, `a`..`c` are its arguments.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// Events collected since the last frame.
/// The runner shows them to the first fixed step of a frame and then clears them.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Position of the first pointer press.
    pub fn first_press(&self) -> Option<Vec2> {
        self.events.iter().find_map(|e| match *e {
            InputEvent::PointerDown { x, y } => Some(Vec2::new(x, y)),
            _ => None,
        })
    }

    /// Most recent pointer position of any kind (down, up or move).
    pub fn last_pointer(&self) -> Option<Vec2> {
        self.events
            .iter()
            .filter_map(|e| match *e {
                InputEvent::PointerMove { x, y }
                | InputEvent::PointerDown { x, y }
                | InputEvent::PointerUp { x, y } => Some(Vec2::new(x, y)),
                _ => None,
            })
            .last()
    }

    pub fn key_down(&self, code: u32) -> bool {
        self.events
            .iter()
            .any(|e| matches!(*e, InputEvent::KeyDown { key_code } if key_code == code))
    }

    pub fn any_key_down(&self) -> bool {
        self.events.iter().any(|e| matches!(e, InputEvent::KeyDown { .. }))
    }

    pub fn wheel_delta(&self) -> f32 {
        self.events
            .iter()
            .map(|e| match *e {
                InputEvent::Wheel { dy } => dy,
                _ => 0.0,
            })
            .sum()
    }

    /// `(kind, a, b, c)` of every host command, in arrival order.
    pub fn customs(&self) -> impl Iterator<Item = (u32, f32, f32, f32)> + '_ {
        self.events.iter().filter_map(|e| match *e {
            InputEvent::Custom { kind, a, b, c } => Some((kind, a, b, c)),
            _ => None,
        })
    }
}
