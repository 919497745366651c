//! Recursive subdivision of a seed segment into a fractal curve.
//!
//! A [`Rule`] replaces one segment with a short chain of segments that
//! starts and ends where the replaced segment did. [`Expand`] applies a rule
//! recursively to a fixed [`Depth`], and [`flatten`] turns the resulting
//! chain into a [`Polyline`](crate::geometry::Polyline).

mod depth;
mod expand;
mod flatten;
pub mod rules;

pub use depth::Depth;
pub use expand::Expand;
pub use flatten::{check_chain, check_rule_output, flatten};

use crate::geometry::Segment;

/// One subdivision step.
///
/// The returned chain must be non-empty, connected end-to-start, begin at
/// `segment.start()` and finish at `segment.end()`. [`Expand`] verifies this
/// after every application.
///
/// Any `Fn(&S) -> Vec<S>` closure is a rule.
pub trait Rule<S: Segment> {
    /// Replaces `segment` with its children, in path order.
    fn apply(&self, segment: &S) -> Vec<S>;

    /// Number of children produced per application, if fixed.
    fn branching_factor(&self) -> Option<usize> {
        None
    }
}

impl<S, F> Rule<S> for F
where
    S: Segment,
    F: Fn(&S) -> Vec<S>,
{
    fn apply(&self, segment: &S) -> Vec<S> {
        self(segment)
    }
}
