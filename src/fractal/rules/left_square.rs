use std::f64::consts::FRAC_PI_2;

use crate::fractal::Rule;
use crate::geometry::{LineSegment, Segment};
use crate::math::{add, rotate_left, scale};

/// Replaces the middle third with a square bump on the left.
///
/// ```text
///        b ───── c
///        │       │
/// start ─a       d─ end
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LeftSquare;

impl Rule<LineSegment> for LeftSquare {
    fn apply(&self, segment: &LineSegment) -> Vec<LineSegment> {
        let third = scale(segment.direction(), 1.0 / 3.0);
        let up = rotate_left(third, FRAC_PI_2);
        let a = add(segment.start, third);
        let d = add(a, third);
        let b = add(a, up);
        let c = add(d, up);
        vec![
            LineSegment::new(segment.start, a),
            LineSegment::new(a, b),
            LineSegment::new(b, c),
            LineSegment::new(c, d),
            LineSegment::new(d, segment.end),
        ]
    }

    fn branching_factor(&self) -> Option<usize> {
        Some(5)
    }
}
