use crate::state::ViewportClass;

/// Path-space view box the road geometry is authored in (width, height).
pub const ROAD_VIEW_BOX: (f32, f32) = (100.0, 1040.0);

/// The jet artwork points "up", so its default orientation is 90 degrees
/// off the path tangent.
pub const MARKER_ROTATION_OFFSET_DEGREES: f32 = 90.0;

/// How far past the marker (in path length units) to sample when deriving
/// the heading vector.
const HEADING_LOOKAHEAD: f32 = 1.6;

/// Polyline samples per cubic segment; plenty for a path this gentle.
const SAMPLES_PER_SEGMENT: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub x: f32,
    pub y: f32,
}

impl PathPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Where to put the marker and how to rotate it, in path space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPose {
    pub point: PathPoint,
    pub angle_degrees: f32,
}

struct CubicSegment {
    p0: PathPoint,
    c1: PathPoint,
    c2: PathPoint,
    p1: PathPoint,
}

impl CubicSegment {
    fn point_at(&self, t: f32) -> PathPoint {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        PathPoint::new(
            b0 * self.p0.x + b1 * self.c1.x + b2 * self.c2.x + b3 * self.p1.x,
            b0 * self.p0.y + b1 * self.c1.y + b2 * self.c2.y + b3 * self.p1.y,
        )
    }
}

/// An immutable road geometry: a chain of cubic segments flattened into an
/// arc-length table so positions along the path can be queried by distance.
pub struct RoadPath {
    samples: Vec<PathPoint>,
    cumulative: Vec<f32>,
    total_length: f32,
}

impl RoadPath {
    /// The weaving desktop road: three cubics snaking around x = 50.
    pub fn desktop() -> Self {
        Self::from_segments(&[
            CubicSegment {
                p0: PathPoint::new(50.0, 0.0),
                c1: PathPoint::new(38.0, 110.0),
                c2: PathPoint::new(62.0, 230.0),
                p1: PathPoint::new(50.0, 350.0),
            },
            CubicSegment {
                p0: PathPoint::new(50.0, 350.0),
                c1: PathPoint::new(38.0, 470.0),
                c2: PathPoint::new(62.0, 590.0),
                p1: PathPoint::new(50.0, 710.0),
            },
            CubicSegment {
                p0: PathPoint::new(50.0, 710.0),
                c1: PathPoint::new(38.0, 830.0),
                c2: PathPoint::new(62.0, 930.0),
                p1: PathPoint::new(50.0, 1040.0),
            },
        ])
    }

    /// The compact road: a straight vertical run near the left edge.
    pub fn compact() -> Self {
        Self::from_segments(&[CubicSegment {
            p0: PathPoint::new(3.5, 0.0),
            c1: PathPoint::new(3.5, 260.0),
            c2: PathPoint::new(3.5, 520.0),
            p1: PathPoint::new(3.5, 1040.0),
        }])
    }

    pub fn for_viewport(class: ViewportClass) -> Self {
        match class {
            ViewportClass::Desktop => Self::desktop(),
            ViewportClass::Compact => Self::compact(),
        }
    }

    fn from_segments(segments: &[CubicSegment]) -> Self {
        let mut samples = Vec::with_capacity(segments.len() * SAMPLES_PER_SEGMENT + 1);
        let mut cumulative = Vec::with_capacity(segments.len() * SAMPLES_PER_SEGMENT + 1);
        let mut length = 0.0;

        for (i, segment) in segments.iter().enumerate() {
            let start = if i == 0 { 0 } else { 1 };
            for step in start..=SAMPLES_PER_SEGMENT {
                let t = step as f32 / SAMPLES_PER_SEGMENT as f32;
                let point = segment.point_at(t);
                if let Some(prev) = samples.last() {
                    let prev: &PathPoint = prev;
                    length += ((point.x - prev.x).powi(2) + (point.y - prev.y).powi(2)).sqrt();
                }
                samples.push(point);
                cumulative.push(length);
            }
        }

        Self {
            samples,
            cumulative,
            total_length: length,
        }
    }

    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    pub fn start_point(&self) -> PathPoint {
        self.samples[0]
    }

    pub fn end_point(&self) -> PathPoint {
        *self.samples.last().expect("path has samples")
    }

    /// Point at `distance` along the path, clamped to the path's extent.
    pub fn point_at_length(&self, distance: f32) -> PathPoint {
        let distance = distance.clamp(0.0, self.total_length);

        let idx = match self
            .cumulative
            .binary_search_by(|len| len.partial_cmp(&distance).expect("finite lengths"))
        {
            Ok(idx) => return self.samples[idx],
            Err(idx) => idx,
        };
        if idx == 0 {
            return self.samples[0];
        }
        if idx >= self.samples.len() {
            return self.end_point();
        }

        let span = self.cumulative[idx] - self.cumulative[idx - 1];
        let t = if span > 0.0 {
            (distance - self.cumulative[idx - 1]) / span
        } else {
            0.0
        };
        let a = self.samples[idx - 1];
        let b = self.samples[idx];
        PathPoint::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }

    /// Marker position and heading for a clamped progress value. Heading is
    /// derived from a short look-ahead along the path, offset so the marker
    /// art aligns with the tangent; at the very end the look-behind keeps the
    /// heading from collapsing to a zero vector.
    pub fn marker_pose(&self, progress: f32) -> MarkerPose {
        let progress = progress.clamp(0.0, 1.0);
        let travel = self.total_length * progress;
        let ahead = (travel + HEADING_LOOKAHEAD).min(self.total_length);

        let point = self.point_at_length(travel);
        let (from, to) = if ahead - travel > f32::EPSILON {
            (point, self.point_at_length(ahead))
        } else {
            (self.point_at_length(travel - HEADING_LOOKAHEAD), point)
        };

        let angle_degrees =
            (to.y - from.y).atan2(to.x - from.x).to_degrees() + MARKER_ROTATION_OFFSET_DEGREES;

        MarkerPose { point, angle_degrees }
    }
}

/// Map a path-space point into an on-screen rect given as
/// (left, top, width, height). The road is authored against `ROAD_VIEW_BOX`
/// and stretched to fill, matching the original's non-uniform scaling.
pub fn map_to_rect(point: PathPoint, rect: (f32, f32, f32, f32)) -> (f32, f32) {
    let (left, top, width, height) = rect;
    (
        left + point.x / ROAD_VIEW_BOX.0 * width,
        top + point.y / ROAD_VIEW_BOX.1 * height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.5
    }

    #[test]
    fn test_desktop_endpoints() {
        let path = RoadPath::desktop();
        let start = path.point_at_length(0.0);
        assert!(close(start.x, 50.0) && close(start.y, 0.0));
        let end = path.point_at_length(path.total_length());
        assert!(close(end.x, 50.0) && close(end.y, 1040.0));
    }

    #[test]
    fn test_desktop_longer_than_straight_line() {
        let path = RoadPath::desktop();
        assert!(path.total_length() > 1040.0);
    }

    #[test]
    fn test_compact_path_is_vertical() {
        let path = RoadPath::compact();
        assert!(close(path.total_length(), 1040.0));
        for progress in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let point = path.point_at_length(path.total_length() * progress);
            assert!(close(point.x, 3.5));
        }
    }

    #[test]
    fn test_marker_pose_at_start_matches_initial_tangent() {
        let path = RoadPath::desktop();
        let pose = path.marker_pose(0.0);
        assert_eq!(pose.point, path.start_point());

        let ahead = path.point_at_length(1.6);
        let expected = (ahead.y - pose.point.y).atan2(ahead.x - pose.point.x).to_degrees()
            + MARKER_ROTATION_OFFSET_DEGREES;
        assert!((pose.angle_degrees - expected).abs() < 1e-3);
    }

    #[test]
    fn test_marker_pose_at_end() {
        let path = RoadPath::desktop();
        let pose = path.marker_pose(1.0);
        assert!(close(pose.point.x, path.end_point().x));
        assert!(close(pose.point.y, path.end_point().y));
        assert!(pose.angle_degrees.is_finite());
    }

    #[test]
    fn test_marker_pose_clamps_progress() {
        let path = RoadPath::desktop();
        assert_eq!(path.marker_pose(-0.5), path.marker_pose(0.0));
        assert_eq!(path.marker_pose(2.0), path.marker_pose(1.0));
    }

    #[test]
    fn test_marker_stays_inside_view_box_for_any_progress() {
        let path = RoadPath::desktop();
        for i in -5..=25 {
            let pose = path.marker_pose(i as f32 * 0.05);
            assert!(pose.point.x >= 0.0 && pose.point.x <= ROAD_VIEW_BOX.0);
            assert!(pose.point.y >= 0.0 && pose.point.y <= ROAD_VIEW_BOX.1);
        }
    }

    #[test]
    fn test_compact_heading_points_down_the_road() {
        let path = RoadPath::compact();
        let pose = path.marker_pose(0.5);
        // Straight down in screen coordinates is 90 degrees; with the art
        // offset the marker sits at 180.
        assert!((pose.angle_degrees - 180.0).abs() < 0.5);
    }

    #[test]
    fn test_map_to_rect_scales_view_box() {
        let rect = (10.0, 20.0, 200.0, 2080.0);
        let (x, y) = map_to_rect(PathPoint::new(50.0, 520.0), rect);
        assert_eq!(x, 10.0 + 100.0);
        assert_eq!(y, 20.0 + 1040.0);

        let (x, y) = map_to_rect(PathPoint::new(0.0, 0.0), rect);
        assert_eq!((x, y), (10.0, 20.0));
    }
}
