/// Render layer. Controls draw order and pointer priority.
///
/// Layers are drawn back-to-front: Background first, UI last.
/// Picking walks the same order in reverse, so a lifted item wins over
/// everything below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    Background = 0,
    /// Target markers, drop zones, cauldrons.
    Targets = 1,
    #[default]
    Items = 2,
    /// The item currently being dragged or a piece raised above its peers.
    Lifted = 3,
    /// Full-screen overlays (sandstorm, flashes drawn as sprites).
    Overlay = 4,
    UI = 5,
}

impl RenderLayer {
    /// Total number of render layers.
    pub const COUNT: usize = 6;

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Background),
            1 => Some(Self::Targets),
            2 => Some(Self::Items),
            3 => Some(Self::Lifted),
            4 => Some(Self::Overlay),
            5 => Some(Self::UI),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
