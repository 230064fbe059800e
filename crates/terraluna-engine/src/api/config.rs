use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;

/// Upper bound on `star_count`; the star buffer holds three floats per star.
pub const MAX_STAR_COUNT: usize = 1_000_000;

/// Tunables for the whole scene, provided by the host at init.
/// Every field has a default, so an empty JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Number of points in the starfield.
    pub star_count: usize,
    /// Edge length of the cube the stars are scattered in.
    pub star_spread: f32,
    /// Earth spin per frame, radians.
    pub earth_spin_rate: f64,
    /// Moon spin per frame, radians.
    pub moon_spin_rate: f64,
    /// Radius of the Moon's circular orbit.
    pub moon_orbit_radius: f64,
    /// Orbit angle per unit of scaled time.
    pub moon_orbit_rate: f64,
    /// Scaled time units per host millisecond.
    pub time_scale: f64,
    /// Per-frame probability that one star twinkles.
    pub twinkle_probability: f32,
    /// Half-width of the vertical twinkle offset.
    pub twinkle_amplitude: f32,
    /// Seed for the starfield and twinkle generator.
    pub seed: u64,
    pub zoom: ZoomConfig,
    pub camera: CameraConfig,
}

/// Scroll-zoom tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Scroll events needed before zoom steps start firing.
    pub threshold: u32,
    /// Distance added per zoom step.
    pub step: f32,
    /// Distance above which the camera starts returning to rest.
    pub ceiling: f32,
    /// Default camera distance.
    pub resting_distance: f32,
    /// Distance removed per return tick.
    pub return_speed: f32,
}

/// Camera projection and orbit-control tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Fraction of orbit velocity removed each update (0 = no damping).
    pub damping: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            star_count: 10_000,
            star_spread: 2000.0,
            earth_spin_rate: 0.005,
            moon_spin_rate: 0.003,
            moon_orbit_radius: 2.0,
            moon_orbit_rate: 0.5,
            time_scale: 1e-4,
            twinkle_probability: 0.05,
            twinkle_amplitude: 0.25,
            seed: 42,
            zoom: ZoomConfig::default(),
            camera: CameraConfig::default(),
        }
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            threshold: 25,
            step: 1.0,
            ceiling: 20.0,
            resting_distance: 5.0,
            return_speed: 0.05,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            damping: 0.12,
        }
    }
}

impl SceneConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(ConfigError::Serialize)
    }

    /// Reject values that would stall or break the simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        }

        if self.star_count == 0 {
            return invalid("star_count", "must be at least 1");
        }
        if self.star_count > MAX_STAR_COUNT {
            return invalid("star_count", "must not exceed MAX_STAR_COUNT");
        }
        if !(self.earth_spin_rate.is_finite() && self.earth_spin_rate >= 0.0) {
            return invalid("earth_spin_rate", "must be finite and not negative");
        }
        if !(self.moon_spin_rate.is_finite() && self.moon_spin_rate >= 0.0) {
            return invalid("moon_spin_rate", "must be finite and not negative");
        }
        if !(self.moon_orbit_radius.is_finite() && self.moon_orbit_radius >= 0.0) {
            return invalid("moon_orbit_radius", "must be finite and not negative");
        }
        if !self.moon_orbit_rate.is_finite() {
            return invalid("moon_orbit_rate", "must be finite");
        }
        if !(self.star_spread > 0.0) {
            return invalid("star_spread", "must be positive");
        }
        if !(0.0..=1.0).contains(&self.twinkle_probability) {
            return invalid("twinkle_probability", "must be within [0, 1]");
        }
        if !(self.twinkle_amplitude >= 0.0) {
            return invalid("twinkle_amplitude", "must not be negative");
        }
        if !(self.time_scale > 0.0) {
            return invalid("time_scale", "must be positive");
        }

        let zoom = &self.zoom;
        if zoom.threshold == 0 {
            return invalid("zoom.threshold", "must be at least 1");
        }
        if !(zoom.step > 0.0) {
            return invalid("zoom.step", "must be positive");
        }
        if !(zoom.return_speed > 0.0) {
            return invalid("zoom.return_speed", "must be positive");
        }
        if !(zoom.resting_distance > 0.0) {
            return invalid("zoom.resting_distance", "must be positive");
        }
        if !(zoom.ceiling > zoom.resting_distance) {
            return invalid("zoom.ceiling", "must exceed the resting distance");
        }

        let camera = &self.camera;
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return invalid("camera.fov_degrees", "must be within (0, 180)");
        }
        if !(camera.near > 0.0 && camera.far > camera.near) {
            return invalid("camera.far", "must exceed a positive near plane");
        }
        if !(0.0..=1.0).contains(&camera.damping) {
            return invalid("camera.damping", "must be within [0, 1]");
        }
        Ok(())
    }
}
