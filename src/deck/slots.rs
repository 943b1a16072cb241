use crate::state::ViewportClass;

/// Number of visible slots in the fan deck.
pub const DECK_SLOTS: usize = 5;

/// Visual transform for one deck slot, indexed positionally against the
/// current rotation order. Offsets are in logical pixels relative to the
/// stage center; depth pushes the card "toward" the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotTransform {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
    pub rotation_degrees: f32,
    pub scale: f32,
    pub opacity: f32,
    pub blur: f32,
    pub z_index: i32,
}

/// Slot 0 is the front card; 1-2 fan to the left, 3-4 to the right.
const DESKTOP_SLOTS: [SlotTransform; DECK_SLOTS] = [
    SlotTransform { x: 0.0, y: 0.0, depth: 56.0, rotation_degrees: 0.0, scale: 1.0, opacity: 1.0, blur: 0.0, z_index: 20 },
    SlotTransform { x: -140.0, y: 36.0, depth: 34.0, rotation_degrees: -12.0, scale: 0.95, opacity: 0.9, blur: 0.0, z_index: 16 },
    SlotTransform { x: -210.0, y: 74.0, depth: 16.0, rotation_degrees: -20.0, scale: 0.9, opacity: 0.72, blur: 0.5, z_index: 12 },
    SlotTransform { x: 140.0, y: 36.0, depth: 34.0, rotation_degrees: 12.0, scale: 0.95, opacity: 0.9, blur: 0.0, z_index: 16 },
    SlotTransform { x: 210.0, y: 74.0, depth: 16.0, rotation_degrees: 20.0, scale: 0.9, opacity: 0.72, blur: 0.5, z_index: 12 },
];

const COMPACT_SLOTS: [SlotTransform; DECK_SLOTS] = [
    SlotTransform { x: 0.0, y: 0.0, depth: 46.0, rotation_degrees: 0.0, scale: 1.0, opacity: 1.0, blur: 0.0, z_index: 20 },
    SlotTransform { x: -86.0, y: 28.0, depth: 28.0, rotation_degrees: -10.0, scale: 0.95, opacity: 0.88, blur: 0.0, z_index: 16 },
    SlotTransform { x: -128.0, y: 54.0, depth: 14.0, rotation_degrees: -17.0, scale: 0.9, opacity: 0.66, blur: 0.6, z_index: 12 },
    SlotTransform { x: 86.0, y: 28.0, depth: 28.0, rotation_degrees: 10.0, scale: 0.95, opacity: 0.88, blur: 0.0, z_index: 16 },
    SlotTransform { x: 128.0, y: 54.0, depth: 14.0, rotation_degrees: 17.0, scale: 0.9, opacity: 0.66, blur: 0.6, z_index: 12 },
];

/// Slot geometry for the active viewport class.
pub fn slot_transforms(class: ViewportClass) -> &'static [SlotTransform; DECK_SLOTS] {
    match class {
        ViewportClass::Desktop => &DESKTOP_SLOTS,
        ViewportClass::Compact => &COMPACT_SLOTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_slot_is_neutral() {
        for class in [ViewportClass::Desktop, ViewportClass::Compact] {
            let front = &slot_transforms(class)[0];
            assert_eq!(front.x, 0.0);
            assert_eq!(front.rotation_degrees, 0.0);
            assert_eq!(front.scale, 1.0);
            assert_eq!(front.opacity, 1.0);
        }
    }

    #[test]
    fn test_front_slot_stacks_on_top() {
        for class in [ViewportClass::Desktop, ViewportClass::Compact] {
            let slots = slot_transforms(class);
            assert!(slots[1..].iter().all(|s| s.z_index < slots[0].z_index));
        }
    }
}
