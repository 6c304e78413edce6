//! DashCheck dashboard check flows
//!
//! This crate drives the verification core against a dashboard reached
//! through the abstract [`UiReader`](dashcheck_core::UiReader) capability:
//! it reads the three year-over-year dollar figures, runs the consistency
//! and view-switch stability checks, and reports structured suite results.
//!
//! Browser automation lives behind the reader trait. The [`scripted`]
//! module provides an in-memory reader so every flow here runs without a
//! browser; a real deployment plugs in a reader backed by its automation
//! stack.

pub mod dashboard;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod scripted;

pub use dashboard::{DashboardChecker, DashboardConfig};
pub use error::{CheckError, CheckResult};
pub use report::{CheckOutcome, CheckSuiteResult};
pub use scripted::ScriptedReader;
