mod engine;
mod slots;

pub use engine::{DeckEngine, Direction, GestureOutcome};
pub use slots::{slot_transforms, SlotTransform, DECK_SLOTS};
