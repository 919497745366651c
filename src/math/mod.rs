pub mod vec_2d;

pub use vec_2d::{add, ensure_finite, rotate_left, rotate_right, scale, sub};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Maximum gap allowed between the end of one segment and the start of the next.
pub const CONNECT_TOLERANCE: f64 = 1e-9;
