use crate::api::context::SimContext;
use crate::renderer::handles::{CameraHandle, SceneHandle};

/// Apply a viewport resize: new aspect and projection for the camera, and a
/// drawing surface of exactly `width × height`.
pub fn resize<H: SceneHandle>(ctx: &mut SimContext, width: u32, height: u32, host: &mut H) {
    ctx.camera.resize(width, height);
    let aspect = ctx.camera.aspect;
    let projection = ctx.camera.projection_matrix();
    host.camera().set_projection(aspect, projection);
    host.resize_surface(width, height);
}
