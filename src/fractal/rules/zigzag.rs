use std::f64::consts::FRAC_PI_2;

use crate::fractal::Rule;
use crate::geometry::{LineSegment, Segment};
use crate::math::{add, rotate_left, scale};

/// Swings left at the first quarter and right at the third.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zigzag;

impl Rule<LineSegment> for Zigzag {
    fn apply(&self, segment: &LineSegment) -> Vec<LineSegment> {
        let quarter = scale(segment.direction(), 0.25);
        let swing = rotate_left(quarter, FRAC_PI_2);
        let a = add(add(segment.start, quarter), swing);
        let b = add(add(segment.start, scale(quarter, 3.0)), scale(swing, -1.0));
        vec![
            LineSegment::new(segment.start, a),
            LineSegment::new(a, b),
            LineSegment::new(b, segment.end),
        ]
    }

    fn branching_factor(&self) -> Option<usize> {
        Some(3)
    }
}
