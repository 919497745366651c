//! 2D point/vector arithmetic.
//!
//! Rotations use a screen-style frame where `y` grows downward, so a
//! positive angle passed to [`rotate_left`] turns a vector counter-clockwise
//! as it appears on screen:
//!
//! ```text
//! x' =  cos(a) * x + sin(a) * y
//! y' = -sin(a) * x + cos(a) * y
//! ```

use crate::error::{GeometryError, Result};

use super::{Point2, Vector2};

/// Translates point `a` by vector `v`.
#[must_use]
pub fn add(a: Point2, v: Vector2) -> Point2 {
    Point2::new(a.x + v.x, a.y + v.y)
}

/// Returns the vector from `b` to `a`.
#[must_use]
pub fn sub(a: Point2, b: Point2) -> Vector2 {
    Vector2::new(a.x - b.x, a.y - b.y)
}

/// Multiplies both components of `v` by `k`.
#[must_use]
pub fn scale(v: Vector2, k: f64) -> Vector2 {
    Vector2::new(v.x * k, v.y * k)
}

/// Rotates `v` about the origin by `angle` radians to the left.
#[must_use]
pub fn rotate_left(v: Vector2, angle: f64) -> Vector2 {
    let (s, c) = angle.sin_cos();
    Vector2::new(c * v.x + s * v.y, -s * v.x + c * v.y)
}

/// Rotates `v` about the origin by `angle` radians to the right.
#[must_use]
pub fn rotate_right(v: Vector2, angle: f64) -> Vector2 {
    rotate_left(v, -angle)
}

/// Checks that both coordinates of `p` are finite.
///
/// # Errors
///
/// Returns [`GeometryError::NonFinite`] if either coordinate is NaN or infinite.
pub fn ensure_finite(p: Point2) -> Result<()> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite { x: p.x, y: p.y }.into())
    }
}
