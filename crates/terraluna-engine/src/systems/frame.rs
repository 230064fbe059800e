//! The per-refresh frame loop.

use crate::api::context::SimContext;
use crate::api::types::Body;
use crate::components::body::OrbitingBody;
use crate::renderer::handles::{CameraHandle, MeshHandle, SceneHandle};

/// Advance everything that moves by one frame and ask the host to draw.
///
/// `now_ms` is the host wall clock in milliseconds. Runs unconditionally;
/// the host calls it once per display refresh.
pub fn run_frame<H: SceneHandle>(ctx: &mut SimContext, now_ms: f64, host: &mut H) {
    let t = ctx.clock.sample(now_ms);

    // ── Bodies ───────────────────────────────────────────────────────
    ctx.earth.advance_spin();
    ctx.moon.advance_spin();
    ctx.moon.follow_orbit(t);
    push_body(&ctx.earth, host);
    push_body(&ctx.moon, host);

    // ── Stars ────────────────────────────────────────────────────────
    let twinkled = ctx.stars.twinkle(
        &mut ctx.rng,
        ctx.config.twinkle_probability,
        ctx.config.twinkle_amplitude,
    );
    if twinkled.is_some() {
        host.mark_stars_dirty();
    }

    // ── Camera ───────────────────────────────────────────────────────
    ctx.controls.update();
    let eye = ctx.camera_position();
    host.camera().set_position(eye);

    host.request_render();
}

/// Write one body's transform through its mesh handle.
pub fn push_body<H: SceneHandle>(body: &OrbitingBody, host: &mut H) {
    let mesh = host.mesh(body.body);
    mesh.set_rotation_y(body.spin as f32);
    if body.body == Body::Moon {
        mesh.set_position(body.position);
    }
}
