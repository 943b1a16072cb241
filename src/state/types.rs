/// Window width below which the fan deck switches to compact slot geometry
/// and mouse drags count as swipes.
pub const DECK_COMPACT_BREAKPOINT: f32 = 768.0;

/// Window width below which the road timeline uses the straight compact path.
pub const ROAD_COMPACT_BREAKPOINT: f32 = 860.0;

/// Width class standing in for the original's media-query breakpoints.
/// Each widget picks its class against its own breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportClass {
    #[default]
    Desktop,
    Compact,
}

impl ViewportClass {
    pub fn from_width(width: f32, breakpoint: f32) -> Self {
        if width <= breakpoint {
            ViewportClass::Compact
        } else {
            ViewportClass::Desktop
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_class_from_width() {
        assert_eq!(ViewportClass::from_width(1280.0, DECK_COMPACT_BREAKPOINT), ViewportClass::Desktop);
        assert_eq!(ViewportClass::from_width(768.0, DECK_COMPACT_BREAKPOINT), ViewportClass::Compact);
        assert_eq!(ViewportClass::from_width(800.0, ROAD_COMPACT_BREAKPOINT), ViewportClass::Compact);
        assert_eq!(ViewportClass::from_width(861.0, ROAD_COMPACT_BREAKPOINT), ViewportClass::Desktop);
    }
}
