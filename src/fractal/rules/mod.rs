//! Built-in subdivision rules.
//!
//! | rule                      | segment          | branching |
//! |---------------------------|------------------|-----------|
//! | [`UpHalfAcrossAndDown`]   | [`SidedSegment`] | 4         |
//! | [`LeftTriangle`]          | [`LineSegment`]  | 4         |
//! | [`LeftSquare`]            | [`LineSegment`]  | 5         |
//! | [`Zigzag`]                | [`LineSegment`]  | 3         |
//! | [`HalfSplit`]             | [`LineSegment`]  | 2         |
//!
//! [`SidedSegment`]: crate::geometry::SidedSegment
//! [`LineSegment`]: crate::geometry::LineSegment

mod half_split;
mod left_square;
mod left_triangle;
mod up_half_across_and_down;
mod zigzag;

pub use half_split::HalfSplit;
pub use left_square::LeftSquare;
pub use left_triangle::LeftTriangle;
pub use up_half_across_and_down::UpHalfAcrossAndDown;
pub use zigzag::Zigzag;
