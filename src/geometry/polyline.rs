use crate::math::Point2;

use super::LineSegment;

/// An axis-aligned bounding box in 2D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb2 {
    /// Returns the extent along x.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Returns the extent along y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// An open polyline: straight lines through `points` in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}

impl Polyline {
    /// Creates a polyline from its vertices.
    #[must_use]
    pub fn from_points(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polyline has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of segments in this polyline.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Returns the first vertex, if any.
    #[must_use]
    pub fn first(&self) -> Option<Point2> {
        self.points.first().copied()
    }

    /// Returns the last vertex, if any.
    #[must_use]
    pub fn last(&self) -> Option<Point2> {
        self.points.last().copied()
    }

    /// Iterates over the segments between consecutive vertices.
    pub fn segments(&self) -> impl Iterator<Item = LineSegment> + '_ {
        self.points
            .windows(2)
            .map(|pair| LineSegment::new(pair[0], pair[1]))
    }

    /// Computes the axis-aligned bounding box, or `None` when empty.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb2> {
        let first = self.first()?;
        let mut bounds = Aabb2 {
            min: first,
            max: first,
        };
        for p in &self.points[1..] {
            bounds.min.x = bounds.min.x.min(p.x);
            bounds.min.y = bounds.min.y.min(p.y);
            bounds.max.x = bounds.max.x.max(p.x);
            bounds.max.y = bounds.max.y.max(p.y);
        }
        Some(bounds)
    }
}
