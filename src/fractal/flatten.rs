use crate::error::{ExpansionError, Result};
use crate::geometry::{Polyline, Segment};
use crate::math::{Point2, CONNECT_TOLERANCE};

/// Checks that every segment ends where the next one starts.
///
/// # Errors
///
/// Returns [`ExpansionError::Disconnected`] for the first pair whose gap
/// exceeds [`CONNECT_TOLERANCE`] (or is NaN).
pub fn check_chain<S: Segment>(segments: &[S]) -> Result<()> {
    for (index, pair) in segments.windows(2).enumerate() {
        let gap = nalgebra::distance(&pair[0].end(), &pair[1].start());
        if !within_tolerance(gap) {
            return Err(ExpansionError::Disconnected { index, gap }.into());
        }
    }
    Ok(())
}

/// Checks one rule application against its parent segment.
///
/// The children must be non-empty, connected, and share the parent's
/// start and end points.
///
/// # Errors
///
/// Returns the [`ExpansionError`] describing the first violation found.
pub fn check_rule_output<S: Segment>(parent: &S, children: &[S]) -> Result<()> {
    let (Some(first), Some(last)) = (children.first(), children.last()) else {
        return Err(ExpansionError::EmptyRuleOutput.into());
    };
    endpoint_matches("start", parent.start(), first.start())?;
    endpoint_matches("end", parent.end(), last.end())?;
    check_chain(children)
}

/// Flattens a connected chain of segments into its point sequence.
///
/// The result is the first segment's start followed by every segment's
/// end, so `n` segments give `n + 1` points. An empty chain gives an empty
/// polyline.
///
/// # Errors
///
/// Returns [`ExpansionError::Disconnected`] if the chain is broken; no
/// partial polyline is produced.
pub fn flatten<S: Segment>(segments: &[S]) -> Result<Polyline> {
    check_chain(segments)?;
    let Some(first) = segments.first() else {
        return Ok(Polyline::default());
    };
    let mut points = Vec::with_capacity(segments.len() + 1);
    points.push(first.start());
    points.extend(segments.iter().map(Segment::end));
    Ok(Polyline::from_points(points))
}

fn endpoint_matches(which: &'static str, expected: Point2, actual: Point2) -> Result<()> {
    let distance = nalgebra::distance(&expected, &actual);
    if within_tolerance(distance) {
        Ok(())
    } else {
        Err(ExpansionError::EndpointMismatch { which, distance }.into())
    }
}

fn within_tolerance(gap: f64) -> bool {
    gap <= CONNECT_TOLERANCE
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FractalError;
    use crate::geometry::LineSegment;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> LineSegment {
        LineSegment::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    #[test]
    fn flatten_takes_first_start_then_every_end() {
        let chain = [
            seg(0.0, 0.0, 1.0, 0.0),
            seg(1.0, 0.0, 1.0, 1.0),
            seg(1.0, 1.0, 2.0, 1.0),
        ];
        let pline = flatten(&chain).unwrap();
        assert_eq!(
            pline.points,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(2.0, 1.0),
            ]
        );
    }

    #[test]
    fn flatten_empty_chain_is_empty() {
        let pline = flatten::<LineSegment>(&[]).unwrap();
        assert!(pline.is_empty());
    }

    #[test]
    fn flatten_rejects_broken_chain() {
        let chain = [seg(0.0, 0.0, 1.0, 0.0), seg(1.5, 0.0, 2.0, 0.0)];
        let err = flatten(&chain).unwrap_err();
        match err {
            FractalError::Expansion(ExpansionError::Disconnected { index, gap }) => {
                assert_eq!(index, 0);
                assert!((gap - 0.5).abs() < 1e-12);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn chain_tolerates_tiny_gaps() {
        let chain = [seg(0.0, 0.0, 1.0, 0.0), seg(1.0 + 1e-12, 0.0, 2.0, 0.0)];
        assert!(check_chain(&chain).is_ok());
    }

    #[test]
    fn chain_rejects_nan_gap() {
        let chain = [seg(0.0, 0.0, f64::NAN, 0.0), seg(1.0, 0.0, 2.0, 0.0)];
        assert!(check_chain(&chain).is_err());
    }

    #[test]
    fn rule_output_must_be_non_empty() {
        let parent = seg(0.0, 0.0, 1.0, 0.0);
        let err = check_rule_output::<LineSegment>(&parent, &[]).unwrap_err();
        assert!(matches!(
            err,
            FractalError::Expansion(ExpansionError::EmptyRuleOutput)
        ));
    }

    #[test]
    fn rule_output_must_keep_endpoints() {
        let parent = seg(0.0, 0.0, 2.0, 0.0);
        let short = [seg(0.0, 0.0, 1.0, 0.0)];
        let err = check_rule_output(&parent, &short).unwrap_err();
        assert!(matches!(
            err,
            FractalError::Expansion(ExpansionError::EndpointMismatch { which: "end", .. })
        ));

        let shifted = [seg(0.5, 0.0, 2.0, 0.0)];
        let err = check_rule_output(&parent, &shifted).unwrap_err();
        assert!(matches!(
            err,
            FractalError::Expansion(ExpansionError::EndpointMismatch { which: "start", .. })
        ));
    }

    #[test]
    fn retraced_spike_is_connected() {
        let parent = seg(0.0, 0.0, 2.0, 0.0);
        let children = [
            seg(0.0, 0.0, 1.0, 0.0),
            seg(1.0, 0.0, 1.0, -1.0),
            seg(1.0, -1.0, 1.0, 0.0),
            seg(1.0, 0.0, 2.0, 0.0),
        ];
        assert!(check_rule_output(&parent, &children).is_ok());
    }
}
