//! Serialization of a flattened curve into a stroked SVG document.

mod stroke_style;
mod svg_document;

pub use stroke_style::{LineCap, LineJoin, StrokeStyle};
pub use svg_document::{path_data, SvgDocument};

use crate::error::{RenderError, Result};
use crate::geometry::Aabb2;

/// The user-unit rectangle mapped onto the physical canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Creates a new view box.
    ///
    /// # Errors
    ///
    /// Returns an error if the width or height is not positive.
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Result<Self> {
        let finite = [min_x, min_y, width, height].iter().all(|v| v.is_finite());
        if !finite || width <= 0.0 || height <= 0.0 {
            return Err(RenderError::InvalidParameters(format!(
                "view box {min_x},{min_y},{width},{height} must be finite with positive size"
            ))
            .into());
        }
        Ok(Self {
            min_x,
            min_y,
            width,
            height,
        })
    }

    /// Fits a square view box around `bounds`, padded by `margin` on every side.
    ///
    /// The square keeps the curve's aspect ratio on a square canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if the padded box has no area (e.g. a single point
    /// with zero margin).
    pub fn fit(bounds: Aabb2, margin: f64) -> Result<Self> {
        let side = bounds.width().max(bounds.height()) + 2.0 * margin;
        let cx = (bounds.min.x + bounds.max.x) * 0.5;
        let cy = (bounds.min.y + bounds.max.y) * 0.5;
        Self::new(cx - side * 0.5, cy - side * 0.5, side, side)
    }
}

impl Default for ViewBox {
    fn default() -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            width: 100.0,
            height: 100.0,
        }
    }
}

/// Presentation parameters for [`SvgDocument`].
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentParams {
    /// Physical canvas width in millimeters.
    pub width_mm: f64,
    /// Physical canvas height in millimeters.
    pub height_mm: f64,
    /// User coordinates shown on the canvas.
    pub view_box: ViewBox,
    /// Stroke styling for the path.
    pub stroke: StrokeStyle,
    /// Decimal places written for each coordinate.
    pub precision: usize,
}

impl DocumentParams {
    /// Checks the canvas size.
    ///
    /// # Errors
    ///
    /// Returns an error if either physical dimension is not positive.
    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.width_mm) && ok(self.height_mm) {
            Ok(())
        } else {
            Err(RenderError::InvalidParameters(format!(
                "canvas {}mm x {}mm must have positive size",
                self.width_mm, self.height_mm
            ))
            .into())
        }
    }
}

impl Default for DocumentParams {
    fn default() -> Self {
        Self {
            width_mm: 203.2,
            height_mm: 203.2,
            view_box: ViewBox::default(),
            stroke: StrokeStyle::default(),
            precision: 3,
        }
    }
}
