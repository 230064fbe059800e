use glam::Vec3;

use crate::core::rng::Rng;

/// Floats per star in the position buffer: x, y, z.
pub const STAR_FLOATS: usize = 3;

/// Flat `[x, y, z] * N` star position buffer, uploaded by the host as-is.
///
/// After generation only the Y components change, one star at a time.
/// Telling the host to re-upload is the caller's job.
pub struct StarField {
    positions: Vec<f32>,
}

impl StarField {
    /// Scatter `count` stars uniformly in a cube of edge `spread` centered on the origin.
    pub fn generate(count: usize, spread: f32, rng: &mut Rng) -> Self {
        let mut positions = Vec::with_capacity(count * STAR_FLOATS);
        for _ in 0..count {
            let x = rng.spread(spread);
            let y = rng.spread(spread);
            let z = rng.spread(spread);
            positions.extend_from_slice(&[x, y, z]);
        }
        Self { positions }
    }

    /// Number of stars.
    pub fn len(&self) -> usize {
        self.positions.len() / STAR_FLOATS
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of star `index`, if it exists.
    pub fn star(&self, index: usize) -> Option<Vec3> {
        let base = index.checked_mul(STAR_FLOATS)?;
        let end = base.checked_add(STAR_FLOATS)?;
        let p = self.positions.get(base..end)?;
        Some(Vec3::new(p[0], p[1], p[2]))
    }

    /// Raw buffer for upload.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Pointer to the buffer for SharedArrayBuffer-style reads.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.positions.as_ptr()
    }

    /// Nudge the Y of one random star by up to ±`amplitude`, with the given
    /// probability. Returns the star that moved.
    pub fn twinkle(&mut self, rng: &mut Rng, probability: f32, amplitude: f32) -> Option<usize> {
        if self.is_empty() || !rng.chance(probability) {
            return None;
        }
        let index = rng.next_index(self.len());
        let offset = rng.spread(amplitude * 2.0);
        self.positions[index * STAR_FLOATS + 1] += offset;
        Some(index)
    }
}
