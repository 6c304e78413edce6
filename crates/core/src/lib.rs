//! DashCheck verification core
//!
//! Pure verification logic for the dynamic dollar figures on the Drive
//! Dollar dashboard, kept free of any browser dependency so it can be unit
//! tested on its own:
//! - Normalizes human-formatted currency strings ("$1,234.56") to numbers
//! - Checks that the previous-year / current-year / year-difference figures
//!   are mutually consistent within a tolerance
//! - Checks that the difference figure survives a view-mode switch unchanged
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                  Verification core                      │
//! ├─────────────────────────────────────────────────────────┤
//! │  normalize(raw) -> NormalizedAmount                     │
//! │  ComparisonTriple::capture(prev, curr, diff)            │
//! │  verify_triple(prev, curr, diff, tol?) -> Result        │
//! │  verify_stable_across_change(before, after, tol?)       │
//! ├─────────────────────────────────────────────────────────┤
//! │  UiReader (async capability, implemented elsewhere)     │
//! │    ├── read_text(field) -> String                       │
//! │    └── trigger_view_change(view)                        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The core never drives a browser. Callers obtain the raw display strings
//! through a [`UiReader`] implementation, which is responsible for all
//! waiting and settling; by the time text reaches this crate it is assumed
//! to be a consistent snapshot of the page.

pub mod amount;
pub mod reader;
pub mod result;
pub mod triple;
pub mod verify;

pub use amount::{normalize, NormalizedAmount};
pub use reader::{FieldId, ReadError, UiReader, ViewId};
pub use result::{Figure, VerificationResult, Violation};
pub use triple::{ComparisonTriple, DEFAULT_TOLERANCE};
pub use verify::{verify_captured, verify_stable_across_change, verify_triple, STABILITY_TOLERANCE};
