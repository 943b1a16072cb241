/// The timeline section starts animating when its top reaches this fraction
/// of the viewport height.
pub const ENTRY_VIEWPORT_FRACTION: f32 = 0.76;

/// The animation completes when the section bottom reaches this fraction of
/// the viewport height.
pub const EXIT_VIEWPORT_FRACTION: f32 = 0.18;

/// Scroll progress of the tracked section through its animation range,
/// clamped to [0, 1].
///
/// `section_top` is the section's top edge in viewport coordinates (negative
/// once scrolled past the top). Degenerate geometry yields 0 so a not yet
/// laid out section leaves the marker parked at the path start.
pub fn section_progress(section_top: f32, section_height: f32, viewport_height: f32) -> f32 {
    if section_height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }

    let entry = ENTRY_VIEWPORT_FRACTION * viewport_height;
    let exit = EXIT_VIEWPORT_FRACTION * viewport_height;
    // Traversal spans from (top == entry) to (top + height == exit).
    let span = entry - (exit - section_height);
    if span <= 0.0 {
        return 0.0;
    }

    ((entry - section_top) / span).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT_H: f32 = 1000.0;
    const SECTION_H: f32 = 2000.0;

    #[test]
    fn test_progress_zero_at_entry_threshold() {
        let top = ENTRY_VIEWPORT_FRACTION * VIEWPORT_H;
        assert_eq!(section_progress(top, SECTION_H, VIEWPORT_H), 0.0);
    }

    #[test]
    fn test_progress_one_at_exit_threshold() {
        let top = EXIT_VIEWPORT_FRACTION * VIEWPORT_H - SECTION_H;
        assert_eq!(section_progress(top, SECTION_H, VIEWPORT_H), 1.0);
    }

    #[test]
    fn test_progress_clamped_outside_range() {
        // Section well below the viewport: not yet entered.
        assert_eq!(section_progress(5000.0, SECTION_H, VIEWPORT_H), 0.0);
        // Section scrolled far past the top.
        assert_eq!(section_progress(-10_000.0, SECTION_H, VIEWPORT_H), 1.0);
    }

    #[test]
    fn test_progress_monotonic_in_scroll() {
        let mut last = 0.0;
        let mut top = ENTRY_VIEWPORT_FRACTION * VIEWPORT_H;
        while top > EXIT_VIEWPORT_FRACTION * VIEWPORT_H - SECTION_H {
            let p = section_progress(top, SECTION_H, VIEWPORT_H);
            assert!(p >= last);
            last = p;
            top -= 50.0;
        }
    }

    #[test]
    fn test_degenerate_geometry_yields_zero() {
        assert_eq!(section_progress(100.0, 0.0, VIEWPORT_H), 0.0);
        assert_eq!(section_progress(100.0, SECTION_H, 0.0), 0.0);
    }
}
