use glam::Vec3;

use crate::api::config::SceneConfig;
use crate::api::types::Body;
use crate::components::body::OrbitingBody;
use crate::components::starfield::StarField;
use crate::core::rng::Rng;
use crate::core::time::FrameClock;
use crate::input::controls::OrbitControls;
use crate::renderer::camera::PerspectiveCamera;
use crate::systems::zoom::ZoomController;

/// Initial Moon position before the first frame places it on its orbit.
const MOON_START: Vec3 = Vec3::new(1.5, 0.0, 0.0);

/// All mutable simulation state, owned by the host application and passed by
/// reference into the frame loop, zoom controller and input handling.
pub struct SimContext {
    pub config: SceneConfig,
    pub earth: OrbitingBody,
    pub moon: OrbitingBody,
    pub stars: StarField,
    pub zoom: ZoomController,
    pub camera: PerspectiveCamera,
    pub controls: OrbitControls,
    pub clock: FrameClock,
    pub(crate) rng: Rng,
}

impl SimContext {
    /// Build the scene state for a `width × height` viewport.
    pub fn new(config: SceneConfig, width: u32, height: u32) -> Self {
        let mut rng = Rng::new(config.seed);
        let stars = StarField::generate(config.star_count, config.star_spread, &mut rng);

        let earth = OrbitingBody::new(Body::Earth, config.earth_spin_rate);
        let moon = OrbitingBody::new(Body::Moon, config.moon_spin_rate)
            .with_orbit(config.moon_orbit_radius, config.moon_orbit_rate)
            .with_position(MOON_START);

        Self {
            earth,
            moon,
            stars,
            zoom: ZoomController::new(config.zoom.clone()),
            camera: PerspectiveCamera::new(&config.camera, width, height),
            controls: OrbitControls::new(config.camera.damping),
            clock: FrameClock::new(config.time_scale),
            rng,
            config,
        }
    }

    pub fn body(&self, body: Body) -> &OrbitingBody {
        match body {
            Body::Earth => &self.earth,
            Body::Moon => &self.moon,
        }
    }

    /// Eye position from the orbit angles and the zoom distance.
    pub fn camera_position(&self) -> Vec3 {
        self.controls.position(self.zoom.distance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> SceneConfig {
        SceneConfig {
            star_count: 32,
            ..SceneConfig::default()
        }
    }

    #[test]
    fn starts_at_rest_on_z_axis() {
        let ctx = SimContext::new(small_config(), 800, 600);
        assert!((ctx.camera_position() - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-6);
        assert_eq!(ctx.stars.len(), 32);
        assert_eq!(ctx.moon.position, MOON_START);
        assert_eq!(ctx.earth.spin, 0.0);
    }

    #[test]
    fn same_seed_same_sky() {
        let a = SimContext::new(small_config(), 800, 600);
        let b = SimContext::new(small_config(), 800, 600);
        assert_eq!(a.stars.positions(), b.stars.positions());
    }

    #[test]
    fn body_lookup() {
        let ctx = SimContext::new(small_config(), 800, 600);
        assert_eq!(ctx.body(Body::Earth).body, Body::Earth);
        assert_eq!(ctx.body(Body::Moon).body, Body::Moon);
    }
}
