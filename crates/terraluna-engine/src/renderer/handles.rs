//! Capability handles onto the host renderer.
//!
//! All drawing happens in the host (a JavaScript 3D library in the browser).
//! The simulation never holds renderer types; it only pushes transforms and
//! requests through these narrow traits. The web crate implements them on top
//! of the shared frame buffer, tests implement them with a recorder.

use glam::{Mat4, Vec3};

use crate::api::types::Body;

/// A single renderable mesh whose transform the simulation drives.
pub trait MeshHandle {
    /// Set the rotation about the vertical axis, in radians.
    fn set_rotation_y(&mut self, angle: f32);

    /// Set the world-space position.
    fn set_position(&mut self, pos: Vec3);
}

/// The host camera.
pub trait CameraHandle {
    /// Set the world-space eye position. The camera always looks at the origin.
    fn set_position(&mut self, pos: Vec3);

    /// Replace the aspect ratio and projection matrix.
    fn set_projection(&mut self, aspect: f32, projection: Mat4);
}

/// The host scene: mesh and camera lookup plus frame-level requests.
///
/// # Example Implementation
///
/// ```ignore
/// struct ThreeScene { earth: JsMesh, moon: JsMesh, camera: JsCamera, /* ... */ }
///
/// impl SceneHandle for ThreeScene {
///     type Mesh = JsMesh;
///     type Camera = JsCamera;
///
///     fn mesh(&mut self, body: Body) -> &mut JsMesh {
///         match body { Body::Earth => &mut self.earth, Body::Moon => &mut self.moon }
///     }
///     // ...
/// }
/// ```
pub trait SceneHandle {
    type Mesh: MeshHandle;
    type Camera: CameraHandle;

    /// Handle for one of the animated bodies.
    fn mesh(&mut self, body: Body) -> &mut Self::Mesh;

    /// Handle for the camera.
    fn camera(&mut self) -> &mut Self::Camera;

    /// The star position buffer changed and must be re-uploaded.
    fn mark_stars_dirty(&mut self);

    /// Resize the drawing surface to exactly `width × height` pixels.
    fn resize_surface(&mut self, width: u32, height: u32);

    /// Draw the current scene with the current camera.
    fn request_render(&mut self);
}

/// In-memory handles that remember every call, for tests.
#[cfg(test)]
pub(crate) mod recording {
    use super::*;
    use crate::api::types::BODY_COUNT;

    #[derive(Debug, Default, Clone)]
    pub struct RecordedMesh {
        pub rotation_y: f32,
        pub position: Vec3,
        pub rotation_writes: usize,
        pub position_writes: usize,
    }

    impl MeshHandle for RecordedMesh {
        fn set_rotation_y(&mut self, angle: f32) {
            self.rotation_y = angle;
            self.rotation_writes += 1;
        }

        fn set_position(&mut self, pos: Vec3) {
            self.position = pos;
            self.position_writes += 1;
        }
    }

    #[derive(Debug, Default, Clone)]
    pub struct RecordedCamera {
        pub position: Vec3,
        pub aspect: f32,
        pub projection: Mat4,
        pub projection_writes: usize,
    }

    impl CameraHandle for RecordedCamera {
        fn set_position(&mut self, pos: Vec3) {
            self.position = pos;
        }

        fn set_projection(&mut self, aspect: f32, projection: Mat4) {
            self.aspect = aspect;
            self.projection = projection;
            self.projection_writes += 1;
        }
    }

    #[derive(Debug, Default, Clone)]
    pub struct RecordingScene {
        pub meshes: [RecordedMesh; BODY_COUNT],
        pub camera: RecordedCamera,
        pub stars_dirty: usize,
        pub surface: Option<(u32, u32)>,
        pub renders: usize,
    }

    impl SceneHandle for RecordingScene {
        type Mesh = RecordedMesh;
        type Camera = RecordedCamera;

        fn mesh(&mut self, body: Body) -> &mut RecordedMesh {
            &mut self.meshes[body.index()]
        }

        fn camera(&mut self) -> &mut RecordedCamera {
            &mut self.camera
        }

        fn mark_stars_dirty(&mut self) {
            self.stars_dirty += 1;
        }

        fn resize_surface(&mut self, width: u32, height: u32) {
            self.surface = Some((width, height));
        }

        fn request_render(&mut self) {
            self.renders += 1;
        }
    }
}
