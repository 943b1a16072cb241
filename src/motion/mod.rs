use std::time::{Duration, Instant};

/// Smoothing factor for the hero parallax: fraction of the remaining
/// distance covered each frame.
pub const PARALLAX_EASE: f32 = 0.085;

/// Below this distance the parallax is considered settled and stops
/// requesting repaints.
pub const PARALLAX_SETTLE_EPSILON: f32 = 0.0005;

/// A single-slot cancellable deferred window.
///
/// Arming the slot always replaces any prior deadline, so at most one
/// window is pending at a time. Used for the deck's rotation lock and the
/// post-swipe tap suppression.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeadlineSlot {
    deadline: Option<Instant>,
}

impl DeadlineSlot {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the window to expire `duration` after `now`, cancelling any
    /// previously armed window.
    pub fn arm(&mut self, now: Instant, duration: Duration) {
        self.deadline = Some(now + duration);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// True while the window has been armed and has not yet expired.
    pub fn is_active(&self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) => now < deadline,
            None => false,
        }
    }
}

/// Per-frame pointer-parallax smoother for the hero section.
///
/// The target lives in [-1, 1] on both axes; each `step` moves the current
/// value a fixed fraction of the remaining distance, matching the original
/// render-loop easing. The smoother is an explicit lifecycle object: it does
/// nothing until started, and stopping it zeroes all state so no stale
/// offset survives a teardown.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallaxSmoother {
    active: bool,
    target: (f32, f32),
    current: (f32, f32),
}

impl ParallaxSmoother {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    pub fn stop(&mut self) {
        self.active = false;
        self.target = (0.0, 0.0);
        self.current = (0.0, 0.0);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Set the pointer-derived target, clamped to [-1, 1] per axis.
    pub fn retarget(&mut self, x: f32, y: f32) {
        if !self.active {
            return;
        }
        self.target = (x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0));
    }

    /// Ease the target back to the origin (pointer left the section).
    pub fn release(&mut self) {
        self.target = (0.0, 0.0);
    }

    /// Advance one frame. Returns true while the smoother still needs
    /// further frames, so the caller knows to keep requesting repaints.
    pub fn step(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.current.0 += (self.target.0 - self.current.0) * PARALLAX_EASE;
        self.current.1 += (self.target.1 - self.current.1) * PARALLAX_EASE;
        !self.is_settled()
    }

    pub fn offset(&self) -> (f32, f32) {
        self.current
    }

    fn is_settled(&self) -> bool {
        (self.target.0 - self.current.0).abs() < PARALLAX_SETTLE_EPSILON
            && (self.target.1 - self.current.1).abs() < PARALLAX_SETTLE_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline_slot_inactive_by_default() {
        let slot = DeadlineSlot::new();
        assert!(!slot.is_active(Instant::now()));
    }

    #[test]
    fn test_deadline_slot_active_until_expiry() {
        let now = Instant::now();
        let mut slot = DeadlineSlot::new();
        slot.arm(now, Duration::from_millis(420));

        assert!(slot.is_active(now));
        assert!(slot.is_active(now + Duration::from_millis(419)));
        assert!(!slot.is_active(now + Duration::from_millis(420)));
    }

    #[test]
    fn test_deadline_slot_rearm_replaces_prior_window() {
        let now = Instant::now();
        let mut slot = DeadlineSlot::new();
        slot.arm(now, Duration::from_millis(500));
        // Re-arm with a shorter window; the long one must be gone.
        slot.arm(now, Duration::from_millis(100));

        assert!(!slot.is_active(now + Duration::from_millis(200)));
    }

    #[test]
    fn test_deadline_slot_cancel() {
        let now = Instant::now();
        let mut slot = DeadlineSlot::new();
        slot.arm(now, Duration::from_millis(500));
        slot.cancel();
        assert!(!slot.is_active(now));
    }

    #[test]
    fn test_parallax_ignores_input_until_started() {
        let mut parallax = ParallaxSmoother::new();
        parallax.retarget(1.0, 1.0);
        assert!(!parallax.step());
        assert_eq!(parallax.offset(), (0.0, 0.0));
    }

    #[test]
    fn test_parallax_target_clamped() {
        let mut parallax = ParallaxSmoother::new();
        parallax.start();
        parallax.retarget(4.0, -7.5);
        // Converge far enough that the current value would overshoot [-1, 1]
        // if the target were not clamped.
        for _ in 0..500 {
            parallax.step();
        }
        let (x, y) = parallax.offset();
        assert!(x <= 1.0 && x > 0.99);
        assert!(y >= -1.0 && y < -0.99);
    }

    #[test]
    fn test_parallax_converges_and_settles() {
        let mut parallax = ParallaxSmoother::new();
        parallax.start();
        parallax.retarget(0.5, -0.25);

        let mut frames = 0;
        while parallax.step() {
            frames += 1;
            assert!(frames < 1000, "smoother never settled");
        }
        let (x, y) = parallax.offset();
        assert!((x - 0.5).abs() < 0.01);
        assert!((y + 0.25).abs() < 0.01);
    }

    #[test]
    fn test_parallax_stop_resets_state() {
        let mut parallax = ParallaxSmoother::new();
        parallax.start();
        parallax.retarget(1.0, 1.0);
        parallax.step();
        parallax.stop();

        assert_eq!(parallax.offset(), (0.0, 0.0));
        assert!(!parallax.step());
    }
}
