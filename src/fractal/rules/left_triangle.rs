use std::f64::consts::FRAC_PI_2;

use crate::fractal::Rule;
use crate::geometry::{LineSegment, Segment};
use crate::math::{add, rotate_left, scale};

/// Raises a spike from the midpoint to the left and retraces it.
///
/// With `f` half the segment vector and `l` = `f` turned left by 90°:
/// `start→mid`, `mid→mid+l`, `mid+l→mid`, `mid→end`. The second and third
/// children are exact reverses of each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeftTriangle;

impl Rule<LineSegment> for LeftTriangle {
    fn apply(&self, segment: &LineSegment) -> Vec<LineSegment> {
        let fwd = scale(segment.direction(), 0.5);
        let left = rotate_left(fwd, FRAC_PI_2);
        let mid = add(segment.start, fwd);
        let up = add(mid, left);
        vec![
            LineSegment::new(segment.start, mid),
            LineSegment::new(mid, up),
            LineSegment::new(up, mid),
            LineSegment::new(mid, segment.end),
        ]
    }

    fn branching_factor(&self) -> Option<usize> {
        Some(4)
    }
}
