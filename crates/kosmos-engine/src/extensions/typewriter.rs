// extensions/typewriter.rs
//
// Character-by-character text reveal for story screens.

/// Reveals `full` one character per `interval` seconds.
#[derive(Debug, Clone)]
pub struct Typewriter {
    full: String,
    /// Byte offsets of every char boundary after the first char.
    boundaries: Vec<usize>,
    shown: usize,
    interval: f32,
    timer: f32,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, interval: f32) -> Self {
        let full = text.into();
        let boundaries = full
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();
        Self {
            full,
            boundaries,
            shown: 0,
            interval: interval.max(f32::EPSILON),
            timer: 0.0,
        }
    }

    /// Advance the reveal. Returns true if more text became visible.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.is_done() {
            return false;
        }
        self.timer += dt;
        let before = self.shown;
        while self.timer >= self.interval && !self.is_done() {
            self.timer -= self.interval;
            self.shown += 1;
        }
        self.shown != before
    }

    /// Show the whole text immediately.
    pub fn finish(&mut self) {
        self.shown = self.boundaries.len();
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.boundaries.len()
    }

    /// Currently revealed prefix.
    pub fn visible(&self) -> &str {
        match self.shown {
            0 => "",
            n => &self.full[..self.boundaries[n - 1]],
        }
    }

    pub fn full_text(&self) -> &str {
        &self.full
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_char_per_interval() {
        let mut tw = Typewriter::new("Erde", 0.03);
        assert_eq!(tw.visible(), "");
        assert!(tw.tick(0.031));
        assert_eq!(tw.visible(), "E");
        tw.tick(0.062);
        assert_eq!(tw.visible(), "Erd");
        assert!(!tw.is_done());
        tw.tick(0.1);
        assert_eq!(tw.visible(), "Erde");
        assert!(tw.is_done());
        assert!(!tw.tick(1.0));
    }

    #[test]
    fn handles_multibyte_characters() {
        let mut tw = Typewriter::new("Gebräu", 0.07);
        tw.tick(0.07 * 5.0 + 0.001);
        assert_eq!(tw.visible(), "Gebrä");
    }

    #[test]
    fn finish_shows_everything() {
        let mut tw = Typewriter::new("Am Anfang war nichts.", 0.07);
        tw.tick(0.1);
        tw.finish();
        assert!(tw.is_done());
        assert_eq!(tw.visible(), tw.full_text());
    }

    #[test]
    fn empty_text_is_done() {
        let tw = Typewriter::new("", 0.03);
        assert!(tw.is_done());
        assert_eq!(tw.visible(), "");
    }
}
