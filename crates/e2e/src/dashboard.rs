//! Dashboard check flows
//!
//! Orchestrates the verification core against a live dashboard: reads the
//! three year-over-year figures through the [`UiReader`] capability, runs
//! the consistency and view-switch stability checks, and reports a
//! structured suite result. Every check captures fresh; no page state is
//! held between calls.

use std::time::Instant;

use tracing::{debug, error, info, warn};

use dashcheck_core::{
    verify_captured, verify_stable_across_change, ComparisonTriple, FieldId, UiReader,
    VerificationResult, ViewId, DEFAULT_TOLERANCE, STABILITY_TOLERANCE,
};

use crate::error::{CheckError, CheckResult};
use crate::fixtures;
use crate::report::{CheckOutcome, CheckSuiteResult};

/// Field and view identifiers for the dashboard under test, plus the
/// tolerances the checks run with.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub page_title: FieldId,

    pub previous_title: FieldId,
    pub current_title: FieldId,
    pub difference_title: FieldId,

    pub previous_value: FieldId,
    pub current_value: FieldId,
    pub difference_value: FieldId,

    pub table_view: ViewId,
    pub chart_view: ViewId,

    /// Tolerance for the arithmetic cross-check.
    pub tolerance: f64,

    /// Tolerance for the view-switch stability check.
    pub stability_tolerance: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_title: FieldId::new("page-title"),
            previous_title: FieldId::new("previous-year-title"),
            current_title: FieldId::new("current-year-title"),
            difference_title: FieldId::new("year-difference-title"),
            previous_value: FieldId::new("previous-year-value"),
            current_value: FieldId::new("current-year-value"),
            difference_value: FieldId::new("year-difference-value"),
            table_view: ViewId::new("table-view"),
            chart_view: ViewId::new("chart-view"),
            tolerance: DEFAULT_TOLERANCE,
            stability_tolerance: STABILITY_TOLERANCE,
        }
    }
}

/// Runs the dashboard checks over a reader.
pub struct DashboardChecker<R> {
    reader: R,
    config: DashboardConfig,
}

impl<R: UiReader> DashboardChecker<R> {
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, DashboardConfig::default())
    }

    pub fn with_config(reader: R, config: DashboardConfig) -> Self {
        Self { reader, config }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Read the three value cells into one snapshot.
    pub async fn capture_triple(&self) -> CheckResult<ComparisonTriple> {
        let previous = self.reader.read_text(&self.config.previous_value).await?;
        let current = self.reader.read_text(&self.config.current_value).await?;
        let difference = self.reader.read_text(&self.config.difference_value).await?;

        debug!(
            "Captured triple: previous={:?} current={:?} difference={:?}",
            previous, current, difference
        );

        Ok(ComparisonTriple::capture(&previous, &current, &difference)
            .with_tolerance(self.config.tolerance))
    }

    /// Verify the page title and the three section titles.
    ///
    /// The page title must match exactly; section titles only need to
    /// contain their expected label, since the UI decorates them with the
    /// selected company name.
    pub async fn check_labels(&self) -> CheckResult<()> {
        let title = self.reader.read_text(&self.config.page_title).await?;
        if title != fixtures::PAGE_TITLE {
            return Err(CheckError::TitleMismatch {
                expected: fixtures::PAGE_TITLE.to_string(),
                actual: title,
            });
        }

        let labels = [
            (&self.config.previous_title, fixtures::PREVIOUS_YEAR_LABEL),
            (&self.config.current_title, fixtures::CURRENT_YEAR_LABEL),
            (&self.config.difference_title, fixtures::YEAR_DIFFERENCE_LABEL),
        ];
        for (field, expected) in labels {
            let actual = self.reader.read_text(field).await?;
            if !actual.contains(expected) {
                return Err(CheckError::LabelMismatch {
                    field: field.to_string(),
                    expected: expected.to_string(),
                    actual,
                });
            }
        }

        Ok(())
    }

    /// Capture the three figures and verify they are mutually consistent.
    pub async fn check_consistency(&self) -> CheckResult<VerificationResult> {
        let triple = self.capture_triple().await?;
        let result = verify_captured(&triple);

        match &result.violation {
            None => debug!(
                "Figures consistent: {} + {} = {}",
                result.triple.previous, result.triple.difference, result.triple.current
            ),
            Some(violation) => warn!("Consistency check failed: {}", violation),
        }

        Ok(result)
    }

    /// Capture, cycle the view modes (table, chart, back to table), then
    /// verify the difference figure came through unchanged.
    pub async fn check_view_stability(&self) -> CheckResult<VerificationResult> {
        let before = self.capture_triple().await?;

        self.reader
            .trigger_view_change(&self.config.table_view)
            .await?;
        self.reader
            .trigger_view_change(&self.config.chart_view)
            .await?;
        self.reader
            .trigger_view_change(&self.config.table_view)
            .await?;

        let after = self.capture_triple().await?;
        let result =
            verify_stable_across_change(&before, &after, Some(self.config.stability_tolerance));

        if let Some(violation) = &result.violation {
            warn!("Stability check failed: {}", violation);
        }

        Ok(result)
    }

    /// Run every check in order and summarize.
    ///
    /// A reader failure in one check is recorded in its outcome rather than
    /// aborting the suite; the caller decides what a failure means.
    pub async fn run_all(&self) -> CheckSuiteResult {
        let start = Instant::now();
        let mut outcomes = Vec::new();

        info!("Running dashboard checks...");

        let t = Instant::now();
        let labels = self.check_labels().await;
        outcomes.push(CheckOutcome::from_unit("dashboard-labels", labels, t.elapsed()));

        let t = Instant::now();
        let consistency = self.check_consistency().await;
        outcomes.push(CheckOutcome::from_verification(
            "value-consistency",
            consistency,
            t.elapsed(),
        ));

        let t = Instant::now();
        let stability = self.check_view_stability().await;
        outcomes.push(CheckOutcome::from_verification(
            "view-switch-stability",
            stability,
            t.elapsed(),
        ));

        let suite = CheckSuiteResult::summarize(outcomes, start.elapsed());

        for outcome in &suite.outcomes {
            if outcome.passed {
                info!("✓ {} ({} ms)", outcome.name, outcome.duration_ms);
            } else {
                error!(
                    "✗ {} - {}",
                    outcome.name,
                    outcome.detail.as_deref().unwrap_or("unknown failure")
                );
            }
        }
        info!(
            "Check results: {} passed, {} failed ({} ms)",
            suite.passed, suite.failed, suite.duration_ms
        );

        suite
    }
}
