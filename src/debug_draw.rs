//! Line segments describing the current solve, for hosts that want to draw it.
//! Nothing here feeds back into the solver.

use nalgebra::Point3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Link between two consecutive joints, as computed by forward kinematics.
    Link,
    /// From the effector to the target it is approaching.
    EffectorToTarget,
    /// From the destination object to the target point derived from it.
    DestinationToTarget,
}

impl SegmentKind {
    /// Suggested RGB color.
    pub fn color(&self) -> [f32; 3] {
        match self {
            SegmentKind::Link => [0.0, 0.0, 1.0],
            SegmentKind::EffectorToTarget => [0.0, 1.0, 0.0],
            SegmentKind::DestinationToTarget => [0.0, 0.5, 0.0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugSegment {
    pub from: Point3<f64>,
    pub to: Point3<f64>,
    pub kind: SegmentKind,
}

/// Segments between consecutive joint positions.
pub fn link_segments(positions: &[Point3<f64>]) -> Vec<DebugSegment> {
    positions.windows(2)
        .map(|pair| DebugSegment { from: pair[0], to: pair[1], kind: SegmentKind::Link })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_segments() {
        let positions = [Point3::origin(), Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0)];
        let segments = link_segments(&positions);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].from, positions[1]);
        assert_eq!(segments[1].to, positions[2]);
        assert!(segments.iter().all(|s| s.kind == SegmentKind::Link));
        assert!(link_segments(&positions[..1]).is_empty());
    }
}
