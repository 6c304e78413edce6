//! Structured check reports

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use dashcheck_core::VerificationResult;

use crate::error::{CheckError, CheckResult};

/// Result of running a single named check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
    pub duration_ms: u64,
    /// Diagnostic for a failed check; `None` on pass.
    pub detail: Option<String>,
}

impl CheckOutcome {
    /// Outcome of a check that either completes or errors.
    pub fn from_unit(name: &str, result: Result<(), CheckError>, elapsed: Duration) -> Self {
        let detail = result.err().map(|e| e.to_string());
        Self {
            name: name.to_string(),
            passed: detail.is_none(),
            duration_ms: elapsed.as_millis() as u64,
            detail,
        }
    }

    /// Outcome of a check that produces a verification result. A violated
    /// verification and a reader failure both count as failed, with the
    /// diagnostic telling them apart.
    pub fn from_verification(
        name: &str,
        result: Result<VerificationResult, CheckError>,
        elapsed: Duration,
    ) -> Self {
        let detail = match result {
            Ok(verification) => verification.violation.map(|v| v.to_string()),
            Err(e) => Some(e.to_string()),
        };
        Self {
            name: name.to_string(),
            passed: detail.is_none(),
            duration_ms: elapsed.as_millis() as u64,
            detail,
        }
    }
}

/// Result of running the full check suite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckSuiteResult {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckSuiteResult {
    pub fn summarize(outcomes: Vec<CheckOutcome>, elapsed: Duration) -> Self {
        let passed = outcomes.iter().filter(|o| o.passed).count();
        Self {
            total: outcomes.len(),
            passed,
            failed: outcomes.len() - passed,
            duration_ms: elapsed.as_millis() as u64,
            outcomes,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Write the suite result to a JSON file for a reporting layer.
    pub fn write_json(&self, dir: &Path) -> CheckResult<PathBuf> {
        std::fs::create_dir_all(dir)?;

        let path = dir.join("check-results.json");
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;

        info!("Results written to: {}", path.display());
        Ok(path)
    }
}
