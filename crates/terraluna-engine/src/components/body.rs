use glam::Vec3;

use crate::api::types::Body;

/// Circular orbit around the origin in the XZ plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub radius: f64,
    /// Radians per unit of scaled time.
    pub rate: f64,
}

impl Orbit {
    /// Position on the orbit at scaled time `t`.
    pub fn position_at(&self, t: f64) -> Vec3 {
        let angle = t * self.rate;
        Vec3::new(
            (angle.cos() * self.radius) as f32,
            0.0,
            (angle.sin() * self.radius) as f32,
        )
    }
}

/// A body whose transform the frame loop drives.
/// Angles are accumulated in f64 so long sessions don't drift.
#[derive(Debug, Clone)]
pub struct OrbitingBody {
    pub body: Body,
    /// Accumulated spin about Y, radians. Only ever grows.
    pub spin: f64,
    /// Spin added per frame.
    pub spin_rate: f64,
    /// Present for bodies that circle the origin.
    pub orbit: Option<Orbit>,
    /// World-space position.
    pub position: Vec3,
}

impl OrbitingBody {
    /// A body spinning in place at the origin.
    pub fn new(body: Body, spin_rate: f64) -> Self {
        Self {
            body,
            spin: 0.0,
            spin_rate,
            orbit: None,
            position: Vec3::ZERO,
        }
    }

    // -- Builder pattern --

    pub fn with_orbit(mut self, radius: f64, rate: f64) -> Self {
        self.orbit = Some(Orbit { radius, rate });
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Add one frame's worth of spin.
    pub fn advance_spin(&mut self) {
        self.spin += self.spin_rate;
    }

    /// Move to the orbit position for scaled time `t`. No-op without an orbit.
    pub fn follow_orbit(&mut self, t: f64) {
        if let Some(orbit) = self.orbit {
            self.position = orbit.position_at(t);
        }
    }
}
