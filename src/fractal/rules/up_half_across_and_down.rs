use std::f64::consts::FRAC_PI_2;

use crate::fractal::Rule;
use crate::geometry::{Segment, Side, SidedSegment};
use crate::math::{add, rotate_left, rotate_right, scale};

/// Steps half a segment out to the owned side, across, and back.
///
/// For a segment owning its left side, with `h` half the segment vector and
/// `u` = `h` turned left by 90°:
///
/// ```text
///   a = start + u      b = a + h      c = end + u
///
///   a ───── b ───── c
///   │               │
/// start            end
/// ```
///
/// The children are `start→a`, `a→b`, `b→c`, `c→end` with sides
/// `right, left, left, right`. A right-owning segment mirrors this: `u`
/// turns right and the sides become `left, right, right, left`. The outer
/// legs flip side so the owned region stays on the same face of the
/// growing boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpHalfAcrossAndDown;

impl Rule<SidedSegment> for UpHalfAcrossAndDown {
    fn apply(&self, segment: &SidedSegment) -> Vec<SidedSegment> {
        let half = scale(segment.direction(), 0.5);
        let offset = match segment.side {
            Side::Left => rotate_left(half, FRAC_PI_2),
            Side::Right => rotate_right(half, FRAC_PI_2),
        };
        let a = add(segment.start, offset);
        let b = add(a, half);
        let c = add(segment.end, offset);

        let inner = segment.side;
        let outer = inner.opposite();
        vec![
            SidedSegment::new(segment.start, a, outer),
            SidedSegment::new(a, b, inner),
            SidedSegment::new(b, c, inner),
            SidedSegment::new(c, segment.end, outer),
        ]
    }

    fn branching_factor(&self) -> Option<usize> {
        Some(4)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::Point2;

    fn assert_point(actual: Point2, x: f64, y: f64) {
        assert_abs_diff_eq!(actual.x, x, epsilon = 1e-9);
        assert_abs_diff_eq!(actual.y, y, epsilon = 1e-9);
    }

    #[test]
    fn left_side_steps_up_on_screen() {
        let seg = SidedSegment::new(Point2::new(0.0, 0.0), Point2::new(100.0, 0.0), Side::Left);
        let children = UpHalfAcrossAndDown.apply(&seg);
        assert_eq!(children.len(), 4);

        assert_point(children[0].start, 0.0, 0.0);
        assert_point(children[0].end, 0.0, -50.0);
        assert_point(children[1].end, 50.0, -50.0);
        assert_point(children[2].end, 100.0, -50.0);
        assert_point(children[3].end, 100.0, 0.0);

        let sides: Vec<_> = children.iter().map(|c| c.side).collect();
        assert_eq!(sides, [Side::Right, Side::Left, Side::Left, Side::Right]);
    }

    #[test]
    fn right_side_mirrors_left() {
        let seg = SidedSegment::new(Point2::new(0.0, 0.0), Point2::new(100.0, 0.0), Side::Right);
        let children = UpHalfAcrossAndDown.apply(&seg);

        assert_point(children[0].end, 0.0, 50.0);
        assert_point(children[1].end, 50.0, 50.0);
        assert_point(children[2].end, 100.0, 50.0);

        let sides: Vec<_> = children.iter().map(|c| c.side).collect();
        assert_eq!(sides, [Side::Left, Side::Right, Side::Right, Side::Left]);
    }

    #[test]
    fn children_share_exact_endpoints() {
        let seg = SidedSegment::new(Point2::new(1.5, -2.0), Point2::new(7.25, 3.0), Side::Left);
        let children = UpHalfAcrossAndDown.apply(&seg);
        assert_eq!(children[0].start, seg.start);
        assert_eq!(children[3].end, seg.end);
        for pair in children.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn degenerate_segment_collapses_to_a_point() {
        let p = Point2::new(4.0, 4.0);
        let children = UpHalfAcrossAndDown.apply(&SidedSegment::new(p, p, Side::Left));
        for child in children {
            assert_eq!(child.start, p);
            assert_eq!(child.end, p);
        }
    }
}
