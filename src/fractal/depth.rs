use crate::error::{ExpansionError, FractalError};

/// Number of recursive subdivision levels.
///
/// Output size grows as `branching_factor ^ depth`; bounding the depth is
/// up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Depth(u32);

impl Depth {
    /// Creates a depth from an unsigned level count.
    #[must_use]
    pub fn new(levels: u32) -> Self {
        Self(levels)
    }

    /// Returns the level count.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Returns the depth one level down, or `None` at zero.
    #[must_use]
    pub fn child(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl From<u32> for Depth {
    fn from(levels: u32) -> Self {
        Self(levels)
    }
}

impl TryFrom<i64> for Depth {
    type Error = FractalError;

    fn try_from(levels: i64) -> Result<Self, Self::Error> {
        if levels < 0 {
            return Err(ExpansionError::NegativeDepth(levels).into());
        }
        u32::try_from(levels)
            .map(Self)
            .map_err(|_| ExpansionError::DepthOutOfRange(levels).into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn negative_depth_is_rejected() {
        let err = Depth::try_from(-1_i64).unwrap_err();
        assert!(matches!(
            err,
            FractalError::Expansion(ExpansionError::NegativeDepth(-1))
        ));
    }

    #[test]
    fn non_negative_depth_is_accepted() {
        assert_eq!(Depth::try_from(0_i64).unwrap(), Depth::new(0));
        assert_eq!(Depth::try_from(6_i64).unwrap().get(), 6);
    }

    #[test]
    fn child_steps_down_to_zero() {
        let d = Depth::new(1);
        assert_eq!(d.child(), Some(Depth::new(0)));
        assert_eq!(d.child().unwrap().child(), None);
        assert_eq!(Depth::new(0).child(), None);
    }
}
