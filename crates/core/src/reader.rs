//! Abstract UI reader capability
//!
//! The verification core never touches a browser. Whatever drives the real
//! page (Playwright, a recorded session, an in-memory script) implements
//! [`UiReader`] and owns all waiting: text handed to the core must already
//! be fully settled, with no in-progress async rendering behind it.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier for a text-bearing element on the dashboard.
///
/// Opaque to the core; how it maps to a DOM selector is the reader's
/// business.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a view-mode control (e.g. the table/chart toggle).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Failures surfaced by a reader implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    #[error("element not found: {0}")]
    NotFound(String),

    #[error("control not interactable: {0}")]
    NotInteractable(String),

    #[error("timed out waiting for {0} to settle")]
    Timeout(String),
}

/// Read-only access to the rendered dashboard plus the one interaction the
/// verification flow needs: switching view modes.
#[async_trait]
pub trait UiReader {
    /// Read the settled text content of an element.
    ///
    /// Implementations must wait out any in-progress rendering before
    /// returning; the returned string is treated as a consistent snapshot.
    async fn read_text(&self, field: &FieldId) -> Result<String, ReadError>;

    /// Activate a view-mode control.
    ///
    /// Any settle-time wait after the switch is the caller's concern, not
    /// part of this contract.
    async fn trigger_view_change(&self, view: &ViewId) -> Result<(), ReadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_errors_render_labeled_messages() {
        let err = ReadError::NotFound("previous-year-value".to_string());
        assert_eq!(err.to_string(), "element not found: previous-year-value");

        let err = ReadError::Timeout("year-difference-value".to_string());
        assert!(err.to_string().contains("settle"));
    }

    #[test]
    fn field_ids_round_trip_through_serde() {
        let field = FieldId::new("current-year-value");
        let json = serde_json::to_string(&field).unwrap();
        assert_eq!(json, "\"current-year-value\"");
        let back: FieldId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, field);
    }
}
