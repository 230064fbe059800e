//! Scene handles backed by the flat frame buffer.
//!
//! The simulation writes through `SceneHandle` into typed slots; `pack`
//! flattens them into the f32 buffer the JS host reads after each tick.

use glam::{Mat4, Vec3};

use crate::api::types::{Body, BODY_COUNT};
use crate::bridge::protocol::{
    BodySlot, CameraSlot, FrameHeader, ProtocolLayout, F32_EXACT_MASK, PROTOCOL_VERSION,
};
use crate::renderer::handles::{CameraHandle, MeshHandle, SceneHandle};
use crate::systems::zoom::ZoomController;

impl MeshHandle for BodySlot {
    fn set_rotation_y(&mut self, angle: f32) {
        self.rotation_y = angle;
    }

    fn set_position(&mut self, pos: Vec3) {
        self.position = pos.to_array();
    }
}

impl CameraHandle for CameraSlot {
    fn set_position(&mut self, pos: Vec3) {
        self.position = pos.to_array();
    }

    fn set_projection(&mut self, aspect: f32, projection: Mat4) {
        self.aspect = aspect;
        self.projection = projection.to_cols_array_2d();
    }
}

/// Typed frame state plus its packed f32 mirror.
pub struct FrameBuffer {
    header: FrameHeader,
    camera: CameraSlot,
    bodies: [BodySlot; BODY_COUNT],
    layout: ProtocolLayout,
    packed: Vec<f32>,
    /// Bumped each time the star buffer changes; the header mirrors it.
    star_generation: u32,
}

impl FrameBuffer {
    pub fn new() -> Self {
        let layout = ProtocolLayout::new(BODY_COUNT);
        let packed = vec![0.0; layout.buffer_total_floats];
        let header = FrameHeader {
            protocol_version: PROTOCOL_VERSION,
            ..FrameHeader::default()
        };
        Self {
            header,
            camera: CameraSlot::default(),
            bodies: [BodySlot::default(); BODY_COUNT],
            layout,
            packed,
            star_generation: 0,
        }
    }

    /// Clear per-frame flags. Call before running a tick.
    pub fn begin_frame(&mut self) {
        self.header.render_requested = 0.0;
    }

    /// Record simulation state that has no handle of its own.
    pub fn record_zoom(&mut self, zoom: &ZoomController) {
        self.header.camera_distance = zoom.distance();
        self.header.zoom_phase = zoom.phase().code() as f32;
        self.header.scroll_count = zoom.scroll_count() as f32;
    }

    pub fn record_star_count(&mut self, count: usize) {
        self.header.star_count = count as f32;
    }

    /// Count one completed frame.
    pub fn end_frame(&mut self) {
        self.header.frame_counter += 1.0;
    }

    /// Flatten all slots into the packed buffer.
    pub fn pack(&mut self) -> &[f32] {
        let layout = &self.layout;
        let header: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&self.header));
        let camera: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&self.camera));
        let bodies: &[f32] = bytemuck::cast_slice(&self.bodies[..]);

        self.packed[..layout.camera_offset].copy_from_slice(header);
        self.packed[layout.camera_offset..layout.bodies_offset].copy_from_slice(camera);
        self.packed[layout.bodies_offset..].copy_from_slice(bodies);
        &self.packed
    }

    pub fn star_generation(&self) -> u32 {
        self.star_generation
    }

    pub fn header(&self) -> &FrameHeader {
        &self.header
    }

    pub fn camera_slot(&self) -> &CameraSlot {
        &self.camera
    }

    pub fn body_slot(&self, body: Body) -> &BodySlot {
        &self.bodies[body.index()]
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    /// Pointer to the packed buffer (valid until the next `pack`).
    pub fn buffer_ptr(&self) -> *const f32 {
        self.packed.as_ptr()
    }

    pub fn buffer_len(&self) -> usize {
        self.packed.len()
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneHandle for FrameBuffer {
    type Mesh = BodySlot;
    type Camera = CameraSlot;

    fn mesh(&mut self, body: Body) -> &mut BodySlot {
        &mut self.bodies[body.index()]
    }

    fn camera(&mut self) -> &mut CameraSlot {
        &mut self.camera
    }

    fn mark_stars_dirty(&mut self) {
        self.star_generation = self.star_generation.wrapping_add(1);
        self.header.star_generation = (self.star_generation & F32_EXACT_MASK) as f32;
    }

    fn resize_surface(&mut self, width: u32, height: u32) {
        self.header.surface_width = width as f32;
        self.header.surface_height = height as f32;
    }

    fn request_render(&mut self) {
        self.header.render_requested = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::ZoomConfig;
    use crate::bridge::protocol::HEADER_FLOATS;

    #[test]
    fn new_buffer_is_sized_by_layout() {
        let buffer = FrameBuffer::new();
        assert_eq!(buffer.buffer_len(), buffer.layout().buffer_total_floats);
        assert_eq!(buffer.header().protocol_version, PROTOCOL_VERSION);
    }

    #[test]
    fn pack_places_sections_at_offsets() {
        let mut buffer = FrameBuffer::new();
        buffer.mesh(Body::Moon).set_position(Vec3::new(1.0, 2.0, 3.0));
        buffer.mesh(Body::Moon).set_rotation_y(0.5);
        buffer.mesh(Body::Earth).set_rotation_y(0.25);
        buffer.camera().set_position(Vec3::new(0.0, 0.0, 5.0));
        buffer.resize_surface(640, 480);
        buffer.request_render();

        let layout = buffer.layout().clone();
        let packed = buffer.pack().to_vec();

        assert_eq!(packed[0], PROTOCOL_VERSION);
        assert_eq!(packed[2], 1.0); // render_requested
        assert_eq!(packed[5], 640.0);
        assert_eq!(packed[6], 480.0);
        assert_eq!(packed[layout.camera_offset + 2], 5.0);
        assert_eq!(packed[layout.body_offset(0)], 0.25);
        assert_eq!(&packed[layout.body_offset(1)..layout.body_offset(1) + 4], &[0.5, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn projection_written_column_major() {
        let mut buffer = FrameBuffer::new();
        let m = Mat4::perspective_rh(1.0, 2.0, 0.1, 100.0);
        buffer.camera().set_projection(2.0, m);
        let layout = buffer.layout().clone();
        let packed = buffer.pack();
        assert_eq!(packed[layout.camera_offset + 3], 2.0);
        assert_eq!(&packed[layout.camera_offset + 4..layout.bodies_offset], &m.to_cols_array()[..]);
    }

    #[test]
    fn star_generation_counts_marks() {
        let mut buffer = FrameBuffer::new();
        buffer.mark_stars_dirty();
        buffer.mark_stars_dirty();
        assert_eq!(buffer.star_generation(), 2);
        assert_eq!(buffer.header().star_generation, 2.0);
    }

    #[test]
    fn star_generation_keeps_changing_past_f32_precision() {
        let mut buffer = FrameBuffer::new();
        buffer.star_generation = 1 << 24;
        let before = buffer.header().star_generation;
        let mut seen = Vec::new();
        for _ in 0..3 {
            buffer.mark_stars_dirty();
            seen.push((buffer.star_generation(), buffer.header().star_generation));
        }
        assert_eq!(seen[0].0, (1 << 24) + 1);
        assert_eq!(seen[2].0, (1 << 24) + 3);
        assert_ne!(seen[0].1, before);
        assert_ne!(seen[0].1, seen[1].1);
        assert_ne!(seen[1].1, seen[2].1);
    }

    #[test]
    fn star_generation_wraps_without_overflow() {
        let mut buffer = FrameBuffer::new();
        buffer.star_generation = u32::MAX;
        buffer.mark_stars_dirty();
        assert_eq!(buffer.star_generation(), 0);
        assert_eq!(buffer.header().star_generation, 0.0);
    }

    #[test]
    fn begin_frame_clears_render_flag() {
        let mut buffer = FrameBuffer::new();
        buffer.request_render();
        buffer.begin_frame();
        assert_eq!(buffer.header().render_requested, 0.0);
    }

    #[test]
    fn records_zoom_state() {
        let mut buffer = FrameBuffer::new();
        let mut zoom = ZoomController::new(ZoomConfig::default());
        for _ in 0..25 {
            zoom.on_scroll();
        }
        buffer.record_zoom(&zoom);
        buffer.end_frame();
        let packed = buffer.pack();
        assert_eq!(packed[1], 1.0);
        assert_eq!(packed[7], 6.0);
        assert_eq!(packed[8], 1.0);
        assert_eq!(packed[9], 24.0);
        assert!(packed.len() > HEADER_FLOATS);
    }
}
