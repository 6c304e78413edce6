//! Structured verification outcomes

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::triple::ComparisonTriple;

/// Which of the three displayed figures a violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Figure {
    Previous,
    Current,
    Difference,
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Figure::Previous => write!(f, "previous"),
            Figure::Current => write!(f, "current"),
            Figure::Difference => write!(f, "difference"),
        }
    }
}

/// A violated verification rule, carrying enough data for a diagnostic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Violation {
    /// A displayed figure was zero or negative. The dashboard only shows
    /// positive business quantities, so this means the cell never rendered
    /// real data.
    #[error("{figure} figure is {value}, expected a positive value")]
    NonPositiveValue { figure: Figure, value: f64 },

    /// The difference figure does not match current minus previous.
    #[error(
        "difference figure is {observed}, expected current - previous = {expected} \
         (tolerance {tolerance})"
    )]
    ArithmeticMismatch {
        expected: f64,
        observed: f64,
        tolerance: f64,
    },

    /// The difference figure changed across a view switch that should not
    /// touch the underlying data.
    #[error(
        "difference figure changed across view switch: {before} -> {after} \
         (tolerance {tolerance})"
    )]
    InstabilityDetected {
        before: f64,
        after: f64,
        tolerance: f64,
    },
}

/// Outcome of one verification call.
///
/// Carries the captured snapshot either way: on success so callers can log
/// the normalized values, on failure so the diagnostic shows what the UI
/// actually displayed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub triple: ComparisonTriple,
    pub violation: Option<Violation>,
}

impl VerificationResult {
    pub(crate) fn pass(triple: ComparisonTriple) -> Self {
        Self {
            triple,
            violation: None,
        }
    }

    pub(crate) fn fail(triple: ComparisonTriple, violation: Violation) -> Self {
        Self {
            triple,
            violation: Some(violation),
        }
    }

    pub fn passed(&self) -> bool {
        self.violation.is_none()
    }

    /// Convert into a plain `Result` for assertion layers that want `?`.
    pub fn into_result(self) -> Result<ComparisonTriple, Violation> {
        match self.violation {
            None => Ok(self.triple),
            Some(violation) => Err(violation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violations_render_labeled_diagnostics() {
        let violation = Violation::NonPositiveValue {
            figure: Figure::Previous,
            value: 0.0,
        };
        assert_eq!(
            violation.to_string(),
            "previous figure is 0, expected a positive value"
        );

        let violation = Violation::ArithmeticMismatch {
            expected: 50.0,
            observed: 49.98,
            tolerance: 0.01,
        };
        assert!(violation.to_string().contains("49.98"));
        assert!(violation.to_string().contains("50"));
    }

    #[test]
    fn into_result_splits_pass_and_fail() {
        let triple = ComparisonTriple::capture("$1.00", "$2.00", "$1.00");
        assert!(VerificationResult::pass(triple).into_result().is_ok());

        let failed = VerificationResult::fail(
            triple,
            Violation::NonPositiveValue {
                figure: Figure::Current,
                value: -1.0,
            },
        );
        assert!(failed.into_result().is_err());
    }
}
