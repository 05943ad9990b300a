//! Numeric ids shared with the host page.

/// Game event kinds sent to the host (`GameEvent::kind`).
pub mod game_events {
    /// a = scene index
    pub const SCENE_CHANGED: f32 = 1.0;
    /// a = placed, b = total
    pub const PROGRESS: f32 = 2.0;
    /// a = scene index
    pub const LEVEL_COMPLETE: f32 = 3.0;
    /// a = duration in ms
    pub const CAMERA_FLASH: f32 = 4.0;
    /// a = duration in ms
    pub const CAMERA_FADE_OUT: f32 = 5.0;
    /// a = duration in ms
    pub const CAMERA_FADE_IN: f32 = 6.0;
}

/// Custom events from the host (`game_custom_event(kind, a, b, c)`).
pub mod custom {
    /// Re-enter the current scene.
    pub const RESTART_SCENE: u32 = 1;
    /// a = scene index
    pub const GOTO_SCENE: u32 = 2;
}

/// Sound ids, resolved to files by the manifest's `sounds` table.
pub mod sounds {
    pub const STOP_MUSIC: u32 = 1;
    pub const MENU_MUSIC: u32 = 2;
    pub const STORY_MUSIC: u32 = 3;
    pub const LEVEL_TWO_MUSIC: u32 = 4;
    pub const LEVEL_THREE_MUSIC: u32 = 5;
    pub const LEVEL_FIVE_MUSIC: u32 = 6;
    pub const OUTRO_MUSIC: u32 = 7;
    pub const CREDITS_MUSIC: u32 = 8;
    pub const NARRATION_TWO: u32 = 9;
    pub const NARRATION_FIVE: u32 = 10;
    pub const PIECE_PLACED: u32 = 11;
}

/// Browser key codes.
pub mod keys {
    pub const SPACE: u32 = 32;
}
