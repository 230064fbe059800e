//! Scroll-driven zoom-out with an automatic return to rest.
//!
//! Scrolls are counted; once the count reaches the threshold every further
//! scroll pulls the camera back one step. The count is decremented rather
//! than reset after a step, so after the first step each scroll fires.
//! Past the ceiling the camera glides back to the resting distance, one
//! `return_speed` per tick, and the count starts over.

use crate::api::config::ZoomConfig;
use crate::api::types::TaskStatus;

/// Zoom controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomPhase {
    /// At rest, counting scrolls.
    Idle,
    /// Pulled back at least one step, below the ceiling.
    Zoomed,
    /// Gliding back to rest.
    Returning,
}

impl ZoomPhase {
    /// Numeric code for the wire format.
    pub fn code(self) -> u32 {
        match self {
            ZoomPhase::Idle => 0,
            ZoomPhase::Zoomed => 1,
            ZoomPhase::Returning => 2,
        }
    }
}

/// What one scroll event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// Counted, below the threshold.
    Counted,
    /// Pulled the camera back one step.
    Stepped,
    /// Pulled the camera past the ceiling; the return task should start.
    ReturnStarted,
}

/// Owns the camera distance and the scroll counter.
#[derive(Debug, Clone)]
pub struct ZoomController {
    config: ZoomConfig,
    distance: f32,
    scroll_count: u32,
    phase: ZoomPhase,
}

impl ZoomController {
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            distance: config.resting_distance,
            scroll_count: 0,
            phase: ZoomPhase::Idle,
            config,
        }
    }

    /// Handle one scroll event.
    pub fn on_scroll(&mut self) -> ScrollOutcome {
        self.scroll_count += 1;
        if self.scroll_count < self.config.threshold {
            return ScrollOutcome::Counted;
        }

        // Stay one below the threshold so the next scroll fires again.
        self.scroll_count -= 1;
        self.distance += self.config.step;

        if self.distance > self.config.ceiling {
            if self.phase == ZoomPhase::Returning {
                // Already gliding back; the running return task picks this up.
                return ScrollOutcome::Stepped;
            }
            log::debug!("zoom: distance {:.2} past ceiling, returning to rest", self.distance);
            self.phase = ZoomPhase::Returning;
            return ScrollOutcome::ReturnStarted;
        }

        if self.phase == ZoomPhase::Idle {
            self.phase = ZoomPhase::Zoomed;
        }
        ScrollOutcome::Stepped
    }

    /// Advance the return-to-rest animation by one tick.
    ///
    /// Returns `Pending` while the camera is still above rest. On the tick that
    /// reaches rest the distance snaps to exactly the resting distance and the
    /// scroll count resets. Outside `Returning` this is a no-op that reports `Done`.
    pub fn tick(&mut self) -> TaskStatus {
        if self.phase != ZoomPhase::Returning {
            return TaskStatus::Done;
        }

        let rest = self.config.resting_distance;
        let next = self.distance - self.config.return_speed;
        if next > rest {
            self.distance = next;
            return TaskStatus::Pending;
        }

        self.distance = rest;
        self.scroll_count = 0;
        self.phase = ZoomPhase::Idle;
        log::debug!("zoom: back at rest ({rest})");
        TaskStatus::Done
    }

    /// Current camera distance from the origin.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn scroll_count(&self) -> u32 {
        self.scroll_count
    }

    pub fn phase(&self) -> ZoomPhase {
        self.phase
    }

    pub fn resting_distance(&self) -> f32 {
        self.config.resting_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ZoomController {
        ZoomController::new(ZoomConfig::default())
    }

    fn scroll(zoom: &mut ZoomController, times: usize) {
        for _ in 0..times {
            zoom.on_scroll();
        }
    }

    #[test]
    fn starts_at_rest() {
        let zoom = controller();
        assert_eq!(zoom.distance(), 5.0);
        assert_eq!(zoom.scroll_count(), 0);
        assert_eq!(zoom.phase(), ZoomPhase::Idle);
    }

    #[test]
    fn below_threshold_only_counts() {
        let mut zoom = controller();
        for _ in 0..24 {
            assert_eq!(zoom.on_scroll(), ScrollOutcome::Counted);
        }
        assert_eq!(zoom.distance(), 5.0);
        assert_eq!(zoom.scroll_count(), 24);
        assert_eq!(zoom.phase(), ZoomPhase::Idle);
    }

    #[test]
    fn twenty_fifth_scroll_steps_and_keeps_count_at_24() {
        let mut zoom = controller();
        scroll(&mut zoom, 24);
        assert_eq!(zoom.on_scroll(), ScrollOutcome::Stepped);
        assert_eq!(zoom.distance(), 6.0);
        assert_eq!(zoom.scroll_count(), 24);
        assert_eq!(zoom.phase(), ZoomPhase::Zoomed);
    }

    #[test]
    fn every_scroll_past_threshold_steps() {
        let mut zoom = controller();
        scroll(&mut zoom, 25);
        for expected in 7..=20 {
            assert_eq!(zoom.on_scroll(), ScrollOutcome::Stepped);
            assert_eq!(zoom.distance(), expected as f32);
            assert_eq!(zoom.scroll_count(), 24);
        }
    }

    #[test]
    fn exceeding_ceiling_starts_return() {
        let mut zoom = controller();
        // 24 counted, then steps to 6..=20, then the step to 21 crosses the ceiling.
        scroll(&mut zoom, 24 + 15);
        assert_eq!(zoom.distance(), 20.0);
        assert_eq!(zoom.phase(), ZoomPhase::Zoomed);

        assert_eq!(zoom.on_scroll(), ScrollOutcome::ReturnStarted);
        assert_eq!(zoom.distance(), 21.0);
        assert_eq!(zoom.phase(), ZoomPhase::Returning);
    }

    #[test]
    fn return_glides_down_to_exact_rest() {
        let mut zoom = controller();
        scroll(&mut zoom, 24 + 16);
        assert_eq!(zoom.phase(), ZoomPhase::Returning);

        let mut previous = zoom.distance();
        let mut ticks = 0;
        while zoom.tick() == TaskStatus::Pending {
            let now = zoom.distance();
            assert!(now < previous, "distance must shrink: {previous} -> {now}");
            assert!(previous - now <= 0.05 + 1e-4);
            assert!(now > 5.0);
            assert_eq!(zoom.scroll_count(), 24, "count only resets at rest");
            previous = now;
            ticks += 1;
            assert!(ticks < 1000, "return never finished");
        }

        assert_eq!(zoom.distance(), 5.0);
        assert_eq!(zoom.scroll_count(), 0);
        assert_eq!(zoom.phase(), ZoomPhase::Idle);
        // 16 units at 0.05 per tick.
        assert!((318..=321).contains(&ticks), "ticks = {ticks}");
    }

    #[test]
    fn tick_outside_return_is_noop() {
        let mut zoom = controller();
        scroll(&mut zoom, 26);
        assert_eq!(zoom.tick(), TaskStatus::Done);
        assert_eq!(zoom.distance(), 7.0);
        assert_eq!(zoom.phase(), ZoomPhase::Zoomed);
    }

    #[test]
    fn scroll_while_returning_steps_without_restarting() {
        let mut zoom = controller();
        scroll(&mut zoom, 24 + 16);
        zoom.tick();
        let before = zoom.distance();
        assert_eq!(zoom.on_scroll(), ScrollOutcome::Stepped);
        assert!((zoom.distance() - (before + 1.0)).abs() < 1e-5);
        assert_eq!(zoom.phase(), ZoomPhase::Returning);
    }

    #[test]
    fn after_rest_threshold_applies_again() {
        let mut zoom = controller();
        scroll(&mut zoom, 24 + 16);
        while zoom.tick() == TaskStatus::Pending {}
        for _ in 0..24 {
            assert_eq!(zoom.on_scroll(), ScrollOutcome::Counted);
        }
        assert_eq!(zoom.on_scroll(), ScrollOutcome::Stepped);
        assert_eq!(zoom.distance(), 6.0);
    }

    #[test]
    fn distance_never_below_rest() {
        let mut zoom = controller();
        scroll(&mut zoom, 24 + 16);
        for _ in 0..2000 {
            zoom.tick();
            assert!(zoom.distance() >= zoom.resting_distance());
        }
    }

    #[test]
    fn phase_codes() {
        assert_eq!(ZoomPhase::Idle.code(), 0);
        assert_eq!(ZoomPhase::Zoomed.code(), 1);
        assert_eq!(ZoomPhase::Returning.code(), 2);
    }
}
