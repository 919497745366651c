use crate::math::{sub, Point2, Vector2};

/// A directed piece of a curve from `start` to `end`.
///
/// Implementors must keep the start→end orientation: connectivity checks
/// and flattening read the endpoints in that order.
pub trait Segment: Clone {
    /// Returns the start point.
    fn start(&self) -> Point2;

    /// Returns the end point.
    fn end(&self) -> Point2;

    /// Returns the vector from start to end.
    fn direction(&self) -> Vector2 {
        sub(self.end(), self.start())
    }
}

/// A plain directed line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point2,
    pub end: Point2,
}

impl LineSegment {
    /// Creates a new segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }
}

impl Segment for LineSegment {
    fn start(&self) -> Point2 {
        self.start
    }

    fn end(&self) -> Point2 {
        self.end
    }
}

/// Which half-plane, relative to a segment's direction, the segment owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A line segment that owns the area on one side of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidedSegment {
    pub start: Point2,
    pub end: Point2,
    pub side: Side,
}

impl SidedSegment {
    /// Creates a new sided segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2, side: Side) -> Self {
        Self { start, end, side }
    }
}

impl Segment for SidedSegment {
    fn start(&self) -> Point2 {
        self.start
    }

    fn end(&self) -> Point2 {
        self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_points_from_start_to_end() {
        let seg = LineSegment::new(Point2::new(1.0, 2.0), Point2::new(4.0, -2.0));
        assert_eq!(seg.direction(), Vector2::new(3.0, -4.0));
    }

    #[test]
    fn opposite_side_flips() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }
}
