use std::fmt::{self, Write as _};
use std::path::Path;

use tracing::info;

use crate::error::{RenderError, Result};
use crate::geometry::Polyline;
use crate::math::Point2;

use super::DocumentParams;

const XML_DECLARATION: &str = r#"<?xml version="1.0"?>"#;
const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// A single stroked path wrapped in an SVG envelope.
///
/// The path is `M` to the first point followed by `L` to every other point,
/// so rendering draws straight lines through the polyline in order.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    path_data: String,
    params: DocumentParams,
}

impl SvgDocument {
    /// Builds a document for `polyline`.
    ///
    /// # Errors
    ///
    /// Returns an error if the polyline is empty or the parameters are
    /// invalid.
    pub fn new(polyline: &Polyline, params: DocumentParams) -> Result<Self> {
        params.validate()?;
        let path_data = path_data(&polyline.points, params.precision)?;
        Ok(Self { path_data, params })
    }

    /// Returns the `d` attribute of the path.
    #[must_use]
    pub fn path_data(&self) -> &str {
        &self.path_data
    }

    /// Writes the document to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_string()).map_err(RenderError::from)?;
        info!(path = %path.display(), bytes = self.path_data.len(), "wrote svg");
        Ok(())
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.params;
        let vb = &p.view_box;
        let s = &p.stroke;
        writeln!(f, "{XML_DECLARATION}")?;
        write!(
            f,
            r#"<svg xmlns="{SVG_NAMESPACE}" version="1.1" width="{:.3}mm" height="{:.3}mm" viewBox="{:.3},{:.3},{:.3},{:.3}">"#,
            p.width_mm, p.height_mm, vb.min_x, vb.min_y, vb.width, vb.height,
        )?;
        write!(
            f,
            r#"<path stroke="{}" fill="none" stroke-width="{}" stroke-linecap="{}" stroke-linejoin="{}" stroke-miterlimit="{:.3}" d="{}"/>"#,
            s.color(),
            s.width(),
            s.line_cap().as_str(),
            s.line_join().as_str(),
            s.miter_limit(),
            self.path_data,
        )?;
        write!(f, "</svg>")
    }
}

/// Formats `points` as SVG path data: `M x,y L x,y L ...`.
///
/// Each coordinate is right-aligned to `precision + 3` characters.
///
/// # Errors
///
/// Returns [`RenderError::EmptyPath`] if `points` is empty.
pub fn path_data(points: &[Point2], precision: usize) -> Result<String> {
    let Some((first, rest)) = points.split_first() else {
        return Err(RenderError::EmptyPath.into());
    };
    let width = precision + 3;
    let mut d = String::with_capacity(points.len() * (2 * width + 4));
    push_point(&mut d, "M ", *first, width, precision);
    for p in rest {
        push_point(&mut d, " L ", *p, width, precision);
    }
    Ok(d)
}

fn push_point(d: &mut String, command: &str, p: Point2, width: usize, precision: usize) {
    // Writing to a String cannot fail.
    let _ = write!(
        d,
        "{command}{:width$.precision$},{:width$.precision$}",
        p.x, p.y
    );
}
