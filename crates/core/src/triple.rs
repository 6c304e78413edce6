//! Captured snapshot of the three related dashboard figures

use serde::{Deserialize, Serialize};

use crate::amount::{normalize, NormalizedAmount};

/// Default absolute tolerance for the arithmetic cross-check.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// One consistent snapshot of the previous-year, current-year, and
/// year-difference figures, normalized and ready for comparison.
///
/// A triple is captured fresh for every verification call and discarded
/// afterwards; nothing holds page state across calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTriple {
    pub previous: NormalizedAmount,
    pub current: NormalizedAmount,
    pub difference: NormalizedAmount,
    /// Absolute tolerance used by the arithmetic cross-check.
    pub tolerance: f64,
}

impl ComparisonTriple {
    /// Normalize three raw display strings into a snapshot with the default
    /// tolerance.
    pub fn capture(previous: &str, current: &str, difference: &str) -> Self {
        Self {
            previous: normalize(previous),
            current: normalize(current),
            difference: normalize(difference),
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}
