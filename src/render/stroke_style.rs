use crate::error::{RenderError, Result};

/// Shape drawn at the open ends of a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

impl LineCap {
    /// Returns the SVG attribute value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// Shape drawn where two stroke segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

impl LineJoin {
    /// Returns the SVG attribute value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

/// Style parameters for the rendered stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    width: f64,
    color: String,
    line_cap: LineCap,
    line_join: LineJoin,
    miter_limit: f64,
}

impl StrokeStyle {
    /// Creates a black stroke with round caps and joins.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive.
    pub fn new(width: f64) -> Result<Self> {
        if !(width > 0.0 && width.is_finite()) {
            return Err(RenderError::InvalidParameters(
                "stroke width must be positive".to_owned(),
            )
            .into());
        }
        Ok(Self {
            width,
            color: "#000000".to_owned(),
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
            miter_limit: 10.0,
        })
    }

    /// Sets the stroke color.
    ///
    /// # Errors
    ///
    /// Returns an error if `color` is empty or contains characters that
    /// would break out of an XML attribute.
    pub fn with_color(mut self, color: impl Into<String>) -> Result<Self> {
        let color = color.into();
        if color.is_empty() || color.contains(['"', '<', '>', '&']) {
            return Err(
                RenderError::InvalidParameters(format!("invalid stroke color {color:?}")).into(),
            );
        }
        self.color = color;
        Ok(self)
    }

    /// Sets the line cap.
    #[must_use]
    pub fn with_line_cap(mut self, line_cap: LineCap) -> Self {
        self.line_cap = line_cap;
        self
    }

    /// Sets the line join.
    #[must_use]
    pub fn with_line_join(mut self, line_join: LineJoin) -> Self {
        self.line_join = line_join;
        self
    }

    /// Sets the miter limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `miter_limit` is below 1, which SVG forbids.
    pub fn with_miter_limit(mut self, miter_limit: f64) -> Result<Self> {
        if !(miter_limit >= 1.0 && miter_limit.is_finite()) {
            return Err(RenderError::InvalidParameters(
                "miter limit must be at least 1".to_owned(),
            )
            .into());
        }
        self.miter_limit = miter_limit;
        Ok(self)
    }

    /// Returns the stroke width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the stroke color.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the line cap.
    #[must_use]
    pub fn line_cap(&self) -> LineCap {
        self.line_cap
    }

    /// Returns the line join.
    #[must_use]
    pub fn line_join(&self) -> LineJoin {
        self.line_join
    }

    /// Returns the miter limit.
    #[must_use]
    pub fn miter_limit(&self) -> f64 {
        self.miter_limit
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: 0.25,
            color: "#000000".to_owned(),
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            miter_limit: 10.0,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_with_valid_width() {
        let style = StrokeStyle::new(2.0).unwrap();
        assert!((style.width() - 2.0).abs() < f64::EPSILON);
        assert_eq!(style.color(), "#000000");
        assert_eq!(style.line_cap(), LineCap::Round);
        assert_eq!(style.line_join(), LineJoin::Round);
    }

    #[test]
    fn new_with_zero_width_fails() {
        assert!(StrokeStyle::new(0.0).is_err());
    }

    #[test]
    fn new_with_negative_width_fails() {
        assert!(StrokeStyle::new(-1.0).is_err());
    }

    #[test]
    fn new_with_nan_width_fails() {
        assert!(StrokeStyle::new(f64::NAN).is_err());
    }

    #[test]
    fn color_rejects_attribute_breakers() {
        let style = StrokeStyle::default();
        assert!(style.clone().with_color("").is_err());
        assert!(style.clone().with_color("red\" onload=\"x").is_err());
        assert_eq!(style.with_color("red").unwrap().color(), "red");
    }

    #[test]
    fn miter_limit_below_one_fails() {
        assert!(StrokeStyle::default().with_miter_limit(0.5).is_err());
        let style = StrokeStyle::default().with_miter_limit(4.0).unwrap();
        assert!((style.miter_limit() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cap_and_join_names() {
        assert_eq!(LineCap::Square.as_str(), "square");
        assert_eq!(LineJoin::Bevel.as_str(), "bevel");
    }
}
