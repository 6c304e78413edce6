//! Currency display string normalization

use std::fmt;

use serde::{Deserialize, Serialize};

/// A numeric value parsed from a raw currency display string.
///
/// Only [`normalize`] produces these; callers never construct one directly,
/// so an amount in hand always reflects what the UI actually rendered.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedAmount(f64);

impl NormalizedAmount {
    /// The parsed numeric value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whether the value is strictly greater than zero.
    ///
    /// A zero or negative figure on the dashboard means the UI rendered no
    /// real data, so this is the predicate the verifier gates on.
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }
}

impl fmt::Display for NormalizedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Convert a raw display string like `"$1,234.56"` into a number.
///
/// Strips the dollar symbol, thousands commas, and any other non-numeric
/// noise, keeping digits, the decimal point, and a leading minus. Input the
/// expected locale only (`$` symbol, `,` grouping).
///
/// Malformed input never errors: anything that does not parse as a number
/// (empty string, symbol-only text, multiple decimal points) comes back as
/// `0`. The dashboard renders `$0.00` for unloaded cells, so downstream
/// positivity checks treat zero and garbage identically.
pub fn normalize(raw: &str) -> NormalizedAmount {
    let mut cleaned = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '0'..='9' | '.' => cleaned.push(ch),
            '-' if cleaned.is_empty() => cleaned.push(ch),
            _ => {}
        }
    }

    let value = cleaned.parse::<f64>().unwrap_or(0.0);
    // An absurdly long digit run can overflow to infinity; treat it like
    // any other unparseable cell.
    NormalizedAmount(if value.is_finite() { value } else { 0.0 })
}
