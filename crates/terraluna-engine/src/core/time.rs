/// Frame clock.
/// Counts frame-loop invocations and turns host wall-clock samples into a
/// scaled time value that never runs backwards.
pub struct FrameClock {
    /// Seconds-like units per host millisecond (default: 1e-4).
    time_scale: f64,
    /// Last accepted host sample in milliseconds.
    last_ms: Option<f64>,
    /// Number of completed frames.
    frames: u64,
}

impl FrameClock {
    pub fn new(time_scale: f64) -> Self {
        Self {
            time_scale,
            last_ms: None,
            frames: 0,
        }
    }

    /// Accept a host sample for this frame. Returns the scaled time.
    /// A sample older than the last one is replaced by the last one.
    pub fn sample(&mut self, now_ms: f64) -> f64 {
        let now = match self.last_ms {
            Some(last) if now_ms < last || now_ms.is_nan() => last,
            None if now_ms.is_nan() => 0.0,
            _ => now_ms,
        };
        self.last_ms = Some(now);
        self.frames += 1;
        now * self.time_scale
    }

    /// Number of frames sampled so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
