use crate::fractal::Rule;
use crate::geometry::{LineSegment, Segment};
use crate::math::{add, scale};

/// Splits a segment at its midpoint. The curve stays straight.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalfSplit;

impl Rule<LineSegment> for HalfSplit {
    fn apply(&self, segment: &LineSegment) -> Vec<LineSegment> {
        let mid = add(segment.start, scale(segment.direction(), 0.5));
        vec![
            LineSegment::new(segment.start, mid),
            LineSegment::new(mid, segment.end),
        ]
    }

    fn branching_factor(&self) -> Option<usize> {
        Some(2)
    }
}
