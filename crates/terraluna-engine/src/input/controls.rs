//! Damped orbit controls.
//!
//! Pointer drags spin the camera around the origin; the spin keeps going
//! after release and decays by the damping factor on every update.
//! Distance is not touched here, the zoom controller owns it.

use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Keeps the camera off the poles, where "up" is undefined.
const POLE_MARGIN: f32 = 1e-3;
const MAX_ELEVATION: f32 = FRAC_PI_2 - POLE_MARGIN;

/// Orbit camera state: angles around the origin plus pending angular velocity.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    /// Rotation around the Y axis (radians). 0 puts the camera on +Z.
    pub azimuth: f32,
    /// Angle above the XZ plane (radians).
    pub elevation: f32,
    /// Pending azimuth change, applied and decayed by `update`.
    azimuth_velocity: f32,
    /// Pending elevation change, applied and decayed by `update`.
    elevation_velocity: f32,
    /// Fraction of velocity removed per update.
    damping: f32,
    /// Last pointer position while a drag is in progress.
    drag_from: Option<(f32, f32)>,
}

impl OrbitControls {
    pub fn new(damping: f32) -> Self {
        Self {
            azimuth: 0.0,
            elevation: 0.0,
            azimuth_velocity: 0.0,
            elevation_velocity: 0.0,
            damping: damping.clamp(0.0, 1.0),
            drag_from: None,
        }
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.drag_from = Some((x, y));
    }

    /// Feed a pointer move. A full viewport-height drag is one full turn.
    pub fn pointer_move(&mut self, x: f32, y: f32, viewport_height: u32) {
        let Some((from_x, from_y)) = self.drag_from else {
            return;
        };
        self.drag_from = Some((x, y));
        if viewport_height == 0 {
            return;
        }
        let per_pixel = TAU / viewport_height as f32;
        // Dragging right swings the camera left, so the scene follows the pointer.
        self.azimuth_velocity -= (x - from_x) * per_pixel;
        self.elevation_velocity += (y - from_y) * per_pixel;
    }

    pub fn pointer_up(&mut self) {
        self.drag_from = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }

    /// Apply a `damping` share of the pending rotation and decay the rest.
    /// Over many updates a drag rotates by exactly its pointer delta.
    /// With zero damping the whole delta lands at once. Call once per frame.
    pub fn update(&mut self) {
        let share = if self.damping > 0.0 { self.damping } else { 1.0 };
        self.azimuth += self.azimuth_velocity * share;
        self.elevation = (self.elevation + self.elevation_velocity * share)
            .clamp(-MAX_ELEVATION, MAX_ELEVATION);

        let keep = 1.0 - share;
        self.azimuth_velocity *= keep;
        self.elevation_velocity *= keep;
    }

    /// Camera eye position at `distance` from the origin.
    pub fn position(&self, distance: f32) -> Vec3 {
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_el, cos_el) = self.elevation.sin_cos();
        Vec3::new(sin_az * cos_el, sin_el, cos_az * cos_el) * distance
    }

    /// Remaining angular velocity as (azimuth, elevation).
    pub fn velocity(&self) -> (f32, f32) {
        (self.azimuth_velocity, self.elevation_velocity)
    }
}
