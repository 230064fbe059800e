/// Frame buffer layout shared with the JS host.
/// Must stay in sync with the host's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Camera: 20 floats]   position xyz, aspect, projection (column-major 4×4)
/// [Bodies: body_count × 4 floats]   rotation_y, position xyz
/// ```
///
/// The star positions are not part of this buffer; the host reads them from
/// their own pointer and re-uploads when the star generation changes.

use bytemuck::{Pod, Zeroable};

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Floats per camera slot.
pub const CAMERA_FLOATS: usize = 20;

/// Floats per body slot.
pub const BODY_FLOATS: usize = 4;

/// Mask keeping a counter within the integers f32 represents exactly.
pub const F32_EXACT_MASK: u32 = 0x00ff_ffff;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Header section.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct FrameHeader {
    pub protocol_version: f32,
    /// Frames run since init.
    pub frame_counter: f32,
    /// 1.0 when the last tick asked for a redraw.
    pub render_requested: f32,
    /// Low 24 bits of the star generation, exact in f32.
    pub star_generation: f32,
    pub star_count: f32,
    pub surface_width: f32,
    pub surface_height: f32,
    pub camera_distance: f32,
    /// `ZoomPhase::code()`.
    pub zoom_phase: f32,
    pub scroll_count: f32,
    pub reserved: [f32; 6],
}

/// Camera section.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraSlot {
    pub position: [f32; 3],
    pub aspect: f32,
    pub projection: [[f32; 4]; 4],
}

impl Default for CameraSlot {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            aspect: 1.0,
            projection: glam::Mat4::IDENTITY.to_cols_array_2d(),
        }
    }
}

/// Per-body section.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodySlot {
    pub rotation_y: f32,
    pub position: [f32; 3],
}

/// Offsets of each section in the flat buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Number of body slots.
    pub body_count: usize,

    /// Offset (in floats) where the camera slot begins.
    pub camera_offset: usize,
    /// Offset (in floats) where body slots begin.
    pub bodies_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(body_count: usize) -> Self {
        let camera_offset = HEADER_FLOATS;
        let bodies_offset = camera_offset + CAMERA_FLOATS;
        let buffer_total_floats = bodies_offset + body_count * BODY_FLOATS;

        Self {
            body_count,
            camera_offset,
            bodies_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Offset of body slot `index`.
    pub fn body_offset(&self, index: usize) -> usize {
        self.bodies_offset + index * BODY_FLOATS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_sizes_match_wire_format() {
        assert_eq!(std::mem::size_of::<FrameHeader>(), HEADER_FLOATS * 4);
        assert_eq!(std::mem::size_of::<CameraSlot>(), CAMERA_FLOATS * 4);
        assert_eq!(std::mem::size_of::<BodySlot>(), BODY_FLOATS * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(2);
        assert_eq!(layout.camera_offset, HEADER_FLOATS);
        assert_eq!(layout.bodies_offset, layout.camera_offset + CAMERA_FLOATS);
        assert_eq!(layout.body_offset(1), layout.bodies_offset + BODY_FLOATS);
        assert_eq!(layout.buffer_total_floats, 16 + 20 + 2 * 4);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn default_camera_has_identity_projection() {
        let slot = CameraSlot::default();
        assert_eq!(slot.projection, glam::Mat4::IDENTITY.to_cols_array_2d());
    }
}
