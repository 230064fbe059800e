use glam::Mat4;

use crate::api::config::CameraConfig;

/// Perspective camera description.
/// The host owns the real camera; this holds what the simulation decides
/// about it (aspect, projection, viewport size).
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width / height of the viewport.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Viewport size in pixels.
    pub viewport: (u32, u32),
}

impl PerspectiveCamera {
    pub fn new(config: &CameraConfig, width: u32, height: u32) -> Self {
        let mut camera = Self {
            fov_y: config.fov_degrees.to_radians(),
            aspect: 1.0,
            near: config.near,
            far: config.far,
            viewport: (width, height),
        };
        camera.resize(width, height);
        camera
    }

    /// Right-handed perspective projection, depth in [0, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Resize the viewport (e.g. on window resize).
    /// A zero-height viewport keeps the previous aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}
