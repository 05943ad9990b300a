//! Frame animations that step an entity's sprite through atlas cells.
//!
//! The frame rate can change mid-playback, which is how the cauldron slows its
//! bubbling as ingredients go in.

use std::collections::HashMap;

/// A named sequence of atlas cells.
#[derive(Debug, Clone)]
pub struct AnimationDef {
    /// (col, row) of each frame.
    pub frames: Vec<(f32, f32)>,
    /// Seconds each frame stays on screen.
    pub frame_duration: f32,
    pub looping: bool,
}

impl AnimationDef {
    /// Frames as atlas (col, row) cells, played at `fps`.
    pub fn from_frames(frames: Vec<(f32, f32)>, fps: f32, looping: bool) -> Self {
        Self {
            frames,
            frame_duration: 1.0 / fps.max(f32::EPSILON),
            looping,
        }
    }

    fn last(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }
}

/// Playback state plus every sequence the entity can switch between.
#[derive(Debug, Clone)]
pub struct AnimationComponent {
    pub animations: HashMap<String, AnimationDef>,
    /// Key into `animations`.
    pub current: String,
    pub frame_index: usize,
    /// Time spent on the current frame.
    pub frame_timer: f32,
    /// False once a one-shot ends or a frame is held.
    pub playing: bool,
}

impl AnimationComponent {
    /// Starts out playing `name`.
    pub fn single(name: impl Into<String>, def: AnimationDef) -> Self {
        let name = name.into();
        Self {
            animations: HashMap::from([(name.clone(), def)]),
            current: name,
            frame_index: 0,
            frame_timer: 0.0,
            playing: true,
        }
    }

    pub fn with(mut self, name: impl Into<String>, def: AnimationDef) -> Self {
        self.animations.insert(name.into(), def);
        self
    }

    /// Switch to `name` and restart it. Unknown names are logged and ignored.
    pub fn play(&mut self, name: &str) {
        if !self.animations.contains_key(name) {
            log::warn!("animation '{}' not defined", name);
            return;
        }
        self.current = name.to_owned();
        self.frame_index = 0;
        self.frame_timer = 0.0;
        self.playing = true;
    }

    pub fn play_if_different(&mut self, name: &str) {
        if self.current != name {
            self.play(name);
        }
    }

    /// Change the current sequence's frame rate without restarting it.
    pub fn set_fps(&mut self, fps: f32) {
        if let Some(def) = self.animations.get_mut(&self.current) {
            def.frame_duration = 1.0 / fps.max(f32::EPSILON);
        }
    }

    /// Stop on frame `index` of the current sequence (clamped to its last frame).
    pub fn hold_frame(&mut self, index: usize) {
        if let Some(def) = self.animations.get(&self.current) {
            self.frame_index = index.min(def.last());
        }
        self.frame_timer = 0.0;
        self.playing = false;
    }

    pub fn current_frame(&self) -> Option<(f32, f32)> {
        let def = self.animations.get(&self.current)?;
        def.frames.get(self.frame_index).copied()
    }

    /// Advance by `dt`. Returns whether the visible frame changed.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.playing {
            return false;
        }
        let Some(def) = self.animations.get(&self.current) else { return false };
        if def.frames.is_empty() {
            return false;
        }

        let before = self.frame_index;
        self.frame_timer += dt;
        while self.playing && self.frame_timer >= def.frame_duration {
            self.frame_timer -= def.frame_duration;
            if self.frame_index < def.last() {
                self.frame_index += 1;
            } else if def.looping {
                self.frame_index = 0;
            } else {
                self.playing = false;
            }
        }
        self.frame_index != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three-frame cauldron strip at `fps`.
    fn brew(fps: f32) -> AnimationComponent {
        AnimationComponent::single(
            "brew",
            AnimationDef::from_frames(vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)], fps, true),
        )
    }

    #[test]
    fn looping_animation_wraps_around() {
        let mut anim = brew(10.0);
        assert_eq!(anim.current_frame(), Some((0.0, 0.0)));

        assert!(anim.tick(0.15));
        assert_eq!(anim.current_frame(), Some((1.0, 0.0)));

        anim.tick(0.2);
        assert_eq!(anim.frame_index, 0);
        assert!(anim.playing);
    }

    #[test]
    fn one_shot_animation_stops_on_its_last_frame() {
        let def = AnimationDef::from_frames(vec![(0.0, 1.0), (1.0, 1.0)], 10.0, false);
        let mut anim = AnimationComponent::single("once", def);

        anim.tick(0.35);
        assert!(!anim.playing);
        assert_eq!(anim.current_frame(), Some((1.0, 1.0)));
        assert!(!anim.tick(1.0));
    }

    #[test]
    fn set_fps_keeps_the_current_frame() {
        let mut anim = brew(20.0);
        anim.tick(0.06);
        assert_eq!(anim.frame_index, 1);

        anim.set_fps(2.0);
        anim.tick(0.1);
        assert_eq!(anim.frame_index, 1);
        anim.tick(0.5);
        assert_eq!(anim.frame_index, 2);
    }

    #[test]
    fn hold_frame_clamps_and_stops() {
        let mut anim = brew(20.0);
        anim.hold_frame(2);
        assert_eq!(anim.current_frame(), Some((2.0, 0.0)));
        assert!(!anim.tick(1.0));

        anim.hold_frame(10);
        assert_eq!(anim.frame_index, 2);
    }

    #[test]
    fn play_restarts_only_when_switching() {
        let mut anim = AnimationComponent::single("off", AnimationDef::from_frames(vec![(0.0, 0.0)], 1.0, false))
            .with("work", AnimationDef::from_frames(vec![(1.0, 0.0), (2.0, 0.0)], 1.0, true));

        anim.play("work");
        anim.tick(1.0);
        assert_eq!(anim.frame_index, 1);

        anim.play_if_different("work");
        assert_eq!(anim.frame_index, 1);

        anim.play_if_different("off");
        assert_eq!(anim.current, "off");
        assert_eq!(anim.frame_index, 0);

        anim.play("missing");
        assert_eq!(anim.current, "off");
    }
}
