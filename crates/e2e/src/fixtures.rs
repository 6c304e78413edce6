//! Static expectations for the Drive Dollar dashboard

/// Exact text of the page title element.
pub const PAGE_TITLE: &str = "Drive Dollar";

/// Text each section title must contain.
pub const PREVIOUS_YEAR_LABEL: &str = "Previous Year";
pub const CURRENT_YEAR_LABEL: &str = "Current Year";
pub const YEAR_DIFFERENCE_LABEL: &str = "Year Difference";

/// A display triple the verifier accepts: difference equals current minus
/// previous to the cent.
pub const CONSISTENT_TRIPLE: (&str, &str, &str) = ("$100.00", "$150.00", "$50.00");

/// A display triple off by two cents, beyond the default tolerance.
pub const INCONSISTENT_TRIPLE: (&str, &str, &str) = ("$100.00", "$150.00", "$49.98");
