/// Every entity in the dataset is keyed by an integer id.
pub type DbId = i64;

/// Derived line counts and shared-line totals.
pub type LineCount = i64;
