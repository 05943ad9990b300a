use bytemuck::{Pod, Zeroable};

/// Per-instance render data read by the host renderer as a flat f32 array.
/// Must match the host protocol: 11 floats = 44 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// X position (centre) in world space.
    pub x: f32,
    /// Y position (centre) in world space.
    pub y: f32,
    /// Rotation in radians.
    pub rotation: f32,
    /// World-space width.
    pub width: f32,
    /// World-space height.
    pub height: f32,
    /// Atlas index, -1 for an untextured quad.
    pub atlas: f32,
    /// Atlas column.
    pub col: f32,
    /// Atlas row.
    pub row: f32,
    /// UV cell span (1.0 = single cell).
    pub cell_span: f32,
    /// Opacity.
    pub alpha: f32,
    /// 0xRRGGBB stored as a float (exact below 2^24).
    pub tint: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 11;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing all sprite instances, back-to-front.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
    capacity: usize,
}

impl RenderBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Append an instance. Returns false once the configured capacity is reached.
    pub fn push(&mut self, instance: RenderInstance) -> bool {
        if self.instances.len() >= self.capacity {
            return false;
        }
        self.instances.push(instance);
        true
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Raw pointer to instance data for host-side reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::with_capacity(512)
    }
}
