mod path;
mod progress;

pub use path::{map_to_rect, MarkerPose, PathPoint, RoadPath, ROAD_VIEW_BOX};
pub use progress::{section_progress, ENTRY_VIEWPORT_FRACTION, EXIT_VIEWPORT_FRACTION};
