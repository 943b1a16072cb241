use std::time::{Duration, Instant};

use crate::motion::DeadlineSlot;

/// How long a rotation stays locked after it commits (the cycle animation
/// window). Further rotation triggers during the lock are dropped.
pub const CYCLE_DURATION: Duration = Duration::from_millis(420);

/// Lock window under the reduced-motion preference.
pub const REDUCED_CYCLE_DURATION: Duration = Duration::from_millis(40);

/// After a committed swipe, tap-activation on the same stage is ignored for
/// this long so the trailing synthetic click cannot open a link.
pub const SUPPRESS_WINDOW: Duration = Duration::from_millis(260);

/// Dominant-axis displacement that commits a swipe.
pub const SWIPE_TRIGGER_PX: f32 = 42.0;

/// Displacement on either axis beyond which a gesture counts as movement
/// rather than a tap.
pub const MOVE_TOLERANCE_PX: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// What a finished gesture turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// End event for a pointer we never tracked, or a moved gesture that
    /// stayed under the swipe threshold.
    Ignored,
    /// The pointer never exceeded the move tolerance; the caller should
    /// fall through to front-card activation.
    Tap,
    /// A swipe committed one rotation in this direction.
    Swiped(Direction),
}

#[derive(Debug, Clone, Copy)]
struct Gesture {
    pointer_id: u64,
    origin: (f32, f32),
    moved: bool,
}

/// Rotation engine for the fan deck.
///
/// Owns the rotation order (always a permutation of `0..card_count`), the
/// time-based rotation lock, the post-swipe suppress window, and the active
/// pointer gesture. All timing is deadline-based against a caller-supplied
/// `Instant` so the engine stays a pure state machine.
#[derive(Debug, Clone)]
pub struct DeckEngine {
    order: Vec<usize>,
    lock: DeadlineSlot,
    suppress: DeadlineSlot,
    gesture: Option<Gesture>,
    reduced_motion: bool,
}

impl DeckEngine {
    pub fn new(card_count: usize) -> Self {
        Self {
            order: (0..card_count).collect(),
            lock: DeadlineSlot::new(),
            suppress: DeadlineSlot::new(),
            gesture: None,
            reduced_motion: false,
        }
    }

    /// Current rotation order: slot position -> card index.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Card index shown in the front slot.
    pub fn front(&self) -> usize {
        self.order[0]
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    pub fn is_locked(&self, now: Instant) -> bool {
        self.lock.is_active(now)
    }

    pub fn is_suppressed(&self, now: Instant) -> bool {
        self.suppress.is_active(now)
    }

    /// Apply exactly one rotation step. Dropped (returns false) while the
    /// lock window from a previous rotation is still active; otherwise arms
    /// a fresh lock, replacing any expired one.
    pub fn rotate(&mut self, direction: Direction, now: Instant) -> bool {
        if self.order.len() < 2 || self.lock.is_active(now) {
            return false;
        }

        let window = if self.reduced_motion {
            REDUCED_CYCLE_DURATION
        } else {
            CYCLE_DURATION
        };
        self.lock.arm(now, window);

        match direction {
            Direction::Next => self.order.rotate_left(1),
            Direction::Prev => self.order.rotate_right(1),
        }
        true
    }

    /// Gate front-card activation. Returns the link to open, or None when
    /// the card has no link or a suppress/lock window swallows the tap.
    pub fn activate_front<'a>(&self, link: Option<&'a str>, now: Instant) -> Option<&'a str> {
        if self.suppress.is_active(now) || self.lock.is_active(now) {
            return None;
        }
        link
    }

    /// Begin tracking a pointer. Only touch-like sources count, except in
    /// the compact viewport where mouse drags swipe too.
    pub fn pointer_down(&mut self, pointer_id: u64, x: f32, y: f32, touch_like: bool, compact: bool) {
        if !touch_like && !compact {
            return;
        }
        self.gesture = Some(Gesture {
            pointer_id,
            origin: (x, y),
            moved: false,
        });
    }

    /// Track displacement; flips `moved` once either axis leaves the tap
    /// tolerance. Events for other pointers are ignored.
    pub fn pointer_move(&mut self, pointer_id: u64, x: f32, y: f32) {
        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };
        if gesture.pointer_id != pointer_id {
            return;
        }

        let dx = x - gesture.origin.0;
        let dy = y - gesture.origin.1;
        if dx.abs() > MOVE_TOLERANCE_PX || dy.abs() > MOVE_TOLERANCE_PX {
            gesture.moved = true;
        }
    }

    /// Finish a gesture (pointer up or cancel). A stationary gesture is a
    /// tap candidate; a dominant-axis displacement past the swipe threshold
    /// commits one rotation and arms the suppress window.
    pub fn pointer_end(&mut self, pointer_id: u64, x: f32, y: f32, now: Instant) -> GestureOutcome {
        let Some(gesture) = self.gesture else {
            return GestureOutcome::Ignored;
        };
        if gesture.pointer_id != pointer_id {
            return GestureOutcome::Ignored;
        }
        self.gesture = None;

        if !gesture.moved {
            return GestureOutcome::Tap;
        }

        let dx = x - gesture.origin.0;
        let dy = y - gesture.origin.1;
        let (abs_x, abs_y) = (dx.abs(), dy.abs());

        if abs_x.max(abs_y) < SWIPE_TRIGGER_PX {
            return GestureOutcome::Ignored;
        }

        self.suppress.arm(now, SUPPRESS_WINDOW);

        // Dragging left or up advances the deck, matching the fan motion.
        let dominant = if abs_x >= abs_y { dx } else { dy };
        let direction = if dominant < 0.0 {
            Direction::Next
        } else {
            Direction::Prev
        };

        if self.rotate(direction, now) {
            GestureOutcome::Swiped(direction)
        } else {
            GestureOutcome::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unlocked(start: Instant, cycles: u32) -> Instant {
        start + (CYCLE_DURATION + Duration::from_millis(10)) * cycles
    }

    #[test]
    fn test_rotate_next_moves_head_to_tail() {
        let now = Instant::now();
        let mut deck = DeckEngine::new(5);
        assert!(deck.rotate(Direction::Next, now));
        assert_eq!(deck.order(), &[1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_rotate_prev_moves_tail_to_head() {
        let now = Instant::now();
        let mut deck = DeckEngine::new(5);
        assert!(deck.rotate(Direction::Prev, now));
        assert_eq!(deck.order(), &[4, 0, 1, 2, 3]);
    }

    #[test]
    fn test_n_rotations_equal_left_rotation_by_n() {
        let start = Instant::now();
        let mut deck = DeckEngine::new(5);
        for i in 0..7 {
            assert!(deck.rotate(Direction::Next, unlocked(start, i)));
        }
        let mut expected: Vec<usize> = (0..5).collect();
        expected.rotate_left(7 % 5);
        assert_eq!(deck.order(), expected.as_slice());
    }

    #[test]
    fn test_next_then_prev_restores_order() {
        let start = Instant::now();
        let mut deck = DeckEngine::new(5);
        assert!(deck.rotate(Direction::Next, unlocked(start, 0)));
        assert_eq!(deck.order(), &[1, 2, 3, 4, 0]);
        assert!(deck.rotate(Direction::Prev, unlocked(start, 1)));
        assert_eq!(deck.order(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_rotate_during_lock_is_dropped() {
        let now = Instant::now();
        let mut deck = DeckEngine::new(5);
        assert!(deck.rotate(Direction::Next, now));
        assert!(!deck.rotate(Direction::Next, now + Duration::from_millis(100)));
        assert!(!deck.rotate(Direction::Prev, now + Duration::from_millis(200)));
        assert_eq!(deck.order(), &[1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_dropped_rotate_does_not_extend_lock() {
        let now = Instant::now();
        let mut deck = DeckEngine::new(5);
        assert!(deck.rotate(Direction::Next, now));
        // A dropped call late in the window must not re-arm the lock.
        assert!(!deck.rotate(Direction::Next, now + Duration::from_millis(400)));
        assert!(!deck.is_locked(now + Duration::from_millis(421)));
    }

    #[test]
    fn test_reduced_motion_shortens_lock() {
        let now = Instant::now();
        let mut deck = DeckEngine::new(5);
        deck.set_reduced_motion(true);
        assert!(deck.rotate(Direction::Next, now));
        assert!(deck.is_locked(now + Duration::from_millis(30)));
        assert!(deck.rotate(Direction::Next, now + Duration::from_millis(50)));
    }

    #[test]
    fn test_activate_front_passes_link_through() {
        let now = Instant::now();
        let deck = DeckEngine::new(5);
        assert_eq!(deck.activate_front(Some("https://example.com"), now), Some("https://example.com"));
    }

    #[test]
    fn test_activate_front_without_link_is_noop() {
        let now = Instant::now();
        let deck = DeckEngine::new(5);
        assert_eq!(deck.activate_front(None, now), None);
    }

    #[test]
    fn test_activate_front_blocked_while_locked() {
        let now = Instant::now();
        let mut deck = DeckEngine::new(5);
        deck.rotate(Direction::Next, now);
        assert_eq!(deck.activate_front(Some("x"), now + Duration::from_millis(10)), None);
    }

    #[test]
    fn test_small_drag_is_tap_candidate() {
        let now = Instant::now();
        let mut deck = DeckEngine::new(5);
        deck.pointer_down(7, 100.0, 100.0, true, false);
        deck.pointer_move(7, 104.0, 103.0);
        assert_eq!(deck.pointer_end(7, 104.0, 103.0, now), GestureOutcome::Tap);
        assert_eq!(deck.order(), &[0, 1, 2, 3, 4]);
        assert!(!deck.is_suppressed(now));
    }

    #[test]
    fn test_swipe_left_rotates_next_and_suppresses() {
        let now = Instant::now();
        let mut deck = DeckEngine::new(5);
        deck.pointer_down(7, 200.0, 100.0, true, false);
        deck.pointer_move(7, 150.0, 100.0);
        let outcome = deck.pointer_end(7, 150.0, 100.0, now);

        assert_eq!(outcome, GestureOutcome::Swiped(Direction::Next));
        assert_eq!(deck.order(), &[1, 2, 3, 4, 0]);
        assert!(deck.is_suppressed(now + Duration::from_millis(250)));
        assert!(!deck.is_suppressed(now + Duration::from_millis(260)));
        // The trailing tap is swallowed.
        assert_eq!(deck.activate_front(Some("x"), now + Duration::from_millis(100)), None);
    }

    #[test]
    fn test_swipe_right_rotates_prev() {
        let now = Instant::now();
        let mut deck = DeckEngine::new(5);
        deck.pointer_down(1, 100.0, 100.0, true, false);
        deck.pointer_move(1, 160.0, 110.0);
        assert_eq!(deck.pointer_end(1, 160.0, 110.0, now), GestureOutcome::Swiped(Direction::Prev));
        assert_eq!(deck.order(), &[4, 0, 1, 2, 3]);
    }

    #[test]
    fn test_vertical_swipe_uses_dominant_axis() {
        let now = Instant::now();
        let mut deck = DeckEngine::new(5);
        deck.pointer_down(1, 100.0, 200.0, true, false);
        deck.pointer_move(1, 110.0, 140.0);
        assert_eq!(deck.pointer_end(1, 110.0, 140.0, now), GestureOutcome::Swiped(Direction::Next));
    }

    #[test]
    fn test_moved_but_below_swipe_threshold_does_nothing() {
        let now = Instant::now();
        let mut deck = DeckEngine::new(5);
        deck.pointer_down(3, 100.0, 100.0, true, false);
        deck.pointer_move(3, 120.0, 100.0);
        assert_eq!(deck.pointer_end(3, 120.0, 100.0, now), GestureOutcome::Ignored);
        assert_eq!(deck.order(), &[0, 1, 2, 3, 4]);
        assert!(!deck.is_suppressed(now));
    }

    #[test]
    fn test_end_for_untracked_pointer_ignored() {
        let now = Instant::now();
        let mut deck = DeckEngine::new(5);
        assert_eq!(deck.pointer_end(42, 0.0, 0.0, now), GestureOutcome::Ignored);

        deck.pointer_down(1, 100.0, 100.0, true, false);
        assert_eq!(deck.pointer_end(2, 300.0, 100.0, now), GestureOutcome::Ignored);
        // The original gesture is still live for its own pointer.
        deck.pointer_move(1, 40.0, 100.0);
        assert_eq!(deck.pointer_end(1, 40.0, 100.0, now), GestureOutcome::Swiped(Direction::Next));
    }

    #[test]
    fn test_mouse_drag_ignored_on_desktop_but_tracked_in_compact() {
        let now = Instant::now();
        let mut deck = DeckEngine::new(5);

        deck.pointer_down(0, 200.0, 100.0, false, false);
        assert_eq!(deck.pointer_end(0, 100.0, 100.0, now), GestureOutcome::Ignored);
        assert_eq!(deck.order(), &[0, 1, 2, 3, 4]);

        deck.pointer_down(0, 200.0, 100.0, false, true);
        deck.pointer_move(0, 100.0, 100.0);
        assert_eq!(deck.pointer_end(0, 100.0, 100.0, now), GestureOutcome::Swiped(Direction::Next));
    }

    #[test]
    fn test_swipe_during_lock_arms_suppress_but_drops_rotation() {
        let now = Instant::now();
        let mut deck = DeckEngine::new(5);
        deck.rotate(Direction::Next, now);

        deck.pointer_down(1, 200.0, 100.0, true, false);
        deck.pointer_move(1, 100.0, 100.0);
        let mid_lock = now + Duration::from_millis(100);
        assert_eq!(deck.pointer_end(1, 100.0, 100.0, mid_lock), GestureOutcome::Ignored);
        assert_eq!(deck.order(), &[1, 2, 3, 4, 0]);
    }
}
