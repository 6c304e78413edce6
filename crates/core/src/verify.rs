//! Consistency and stability verification over captured triples

use crate::result::{Figure, VerificationResult, Violation};
use crate::triple::{ComparisonTriple, DEFAULT_TOLERANCE};

/// Default absolute tolerance for the re-render stability check.
///
/// Half a unit in the second decimal place: a difference figure that still
/// rounds to the same cents after a view switch counts as stable.
pub const STABILITY_TOLERANCE: f64 = 0.005;

/// Verify three raw display strings for consistency.
///
/// Normalizes each string, requires every figure to be strictly positive,
/// then requires the difference figure to equal current minus previous
/// within `tolerance` (default [`DEFAULT_TOLERANCE`], strict `<`).
///
/// Deterministic and side-effect free: identical input strings always yield
/// an identical result.
pub fn verify_triple(
    previous: &str,
    current: &str,
    difference: &str,
    tolerance: Option<f64>,
) -> VerificationResult {
    let triple = ComparisonTriple::capture(previous, current, difference)
        .with_tolerance(tolerance.unwrap_or(DEFAULT_TOLERANCE));
    verify_captured(&triple)
}

/// Verify an already-captured triple.
///
/// Used by callers that capture once and keep the snapshot around for a
/// later stability comparison.
pub fn verify_captured(triple: &ComparisonTriple) -> VerificationResult {
    let figures = [
        (Figure::Previous, triple.previous),
        (Figure::Current, triple.current),
        (Figure::Difference, triple.difference),
    ];
    for (figure, amount) in figures {
        if !amount.is_positive() {
            return VerificationResult::fail(
                *triple,
                Violation::NonPositiveValue {
                    figure,
                    value: amount.value(),
                },
            );
        }
    }

    let expected = triple.current.value() - triple.previous.value();
    let observed = triple.difference.value();
    if (observed - expected).abs() < triple.tolerance {
        VerificationResult::pass(*triple)
    } else {
        VerificationResult::fail(
            *triple,
            Violation::ArithmeticMismatch {
                expected,
                observed,
                tolerance: triple.tolerance,
            },
        )
    }
}

/// Verify that the difference figure is unchanged across a view switch.
///
/// The switch is expected not to touch the underlying data, so the before
/// and after snapshots must agree on the difference within `tolerance`
/// (default [`STABILITY_TOLERANCE`], strict `<`). Positivity is not
/// re-validated here; that belongs to the consistency check on each
/// individual snapshot.
pub fn verify_stable_across_change(
    before: &ComparisonTriple,
    after: &ComparisonTriple,
    tolerance: Option<f64>,
) -> VerificationResult {
    let tolerance = tolerance.unwrap_or(STABILITY_TOLERANCE);
    let before_diff = before.difference.value();
    let after_diff = after.difference.value();

    if (after_diff - before_diff).abs() < tolerance {
        VerificationResult::pass(*after)
    } else {
        VerificationResult::fail(
            *after,
            Violation::InstabilityDetected {
                before: before_diff,
                after: after_diff,
                tolerance,
            },
        )
    }
}
