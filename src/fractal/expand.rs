use tracing::debug;

use crate::error::Result;
use crate::geometry::{Polyline, Segment};
use crate::math::ensure_finite;

use super::{check_rule_output, flatten, Depth, Rule};

/// Upper bound on segments reserved up front; larger outputs grow on demand.
const MAX_RESERVED_SEGMENTS: usize = 1 << 16;

/// Recursively expands a seed segment with a rule.
///
/// At depth zero the seed is returned unchanged. Otherwise the rule is
/// applied and each child is expanded one level shallower, concatenating
/// the results in order.
pub struct Expand<S, R> {
    seed: S,
    rule: R,
    depth: Depth,
}

impl<S, R> Expand<S, R>
where
    S: Segment,
    R: Rule<S>,
{
    /// Creates a new `Expand` operation.
    #[must_use]
    pub fn new(seed: S, rule: R, depth: Depth) -> Self {
        Self { seed, rule, depth }
    }

    /// Executes the expansion, returning the full segment chain.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed has a non-finite coordinate, or if any
    /// rule application breaks the rule contract. Nothing is returned on
    /// failure.
    pub fn execute(&self) -> Result<Vec<S>> {
        ensure_finite(self.seed.start())?;
        ensure_finite(self.seed.end())?;

        let mut out = Vec::with_capacity(
            self.expected_len()
                .map_or(0, |n| n.min(MAX_RESERVED_SEGMENTS)),
        );
        self.expand_into(&self.seed, self.depth, &mut out)?;

        debug!(
            depth = self.depth.get(),
            segments = out.len(),
            "expanded fractal"
        );
        Ok(out)
    }

    /// Executes the expansion and flattens the result into a polyline.
    ///
    /// # Errors
    ///
    /// See [`Expand::execute`].
    pub fn polyline(&self) -> Result<Polyline> {
        flatten(&self.execute()?)
    }

    /// Number of segments the expansion will produce, when the rule has a
    /// fixed branching factor and the count fits in `usize`.
    #[must_use]
    pub fn expected_len(&self) -> Option<usize> {
        self.rule
            .branching_factor()?
            .checked_pow(self.depth.get())
    }

    fn expand_into(&self, segment: &S, depth: Depth, out: &mut Vec<S>) -> Result<()> {
        let Some(next) = depth.child() else {
            out.push(segment.clone());
            return Ok(());
        };
        let children = self.rule.apply(segment);
        check_rule_output(segment, &children)?;
        for child in &children {
            self.expand_into(child, next, out)?;
        }
        Ok(())
    }
}
