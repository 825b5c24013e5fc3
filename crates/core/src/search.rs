//! Filtering and pagination helpers shared by every list endpoint.
//!
//! List queries compute the full filtered result set, sort it, and then
//! slice `[offset, offset + limit)` out of it. The helpers here cover the
//! first and last of those steps; sorting lives in [`crate::sort`].

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of list results per page.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Maximum number of list results per page.
pub const MAX_LIST_LIMIT: i64 = 250;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// A resolved `limit`/`offset` pair, already clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Page {
    /// Resolve raw query values against the configured default and maximum.
    pub fn resolve(limit: Option<i64>, offset: Option<i64>, default: i64, max: i64) -> Self {
        Self {
            limit: clamp_limit(limit, default, max),
            offset: clamp_offset(offset),
        }
    }

    /// Slice a fully sorted result set down to this page.
    ///
    /// An offset at or past the end yields an empty list.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let offset = usize::try_from(self.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(self.limit).unwrap_or(0);
        items.into_iter().skip(offset).take(limit).collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Substring filter
// ---------------------------------------------------------------------------

/// Case-insensitive substring filter on a text field.
///
/// An absent or empty needle matches everything.
#[derive(Debug, Clone, Default)]
pub struct TextFilter {
    needle: Option<String>,
}

impl TextFilter {
    pub fn new(raw: Option<&str>) -> Self {
        let needle = raw
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase());
        Self { needle }
    }

    pub fn matches(&self, text: &str) -> bool {
        match &self.needle {
            Some(needle) => text.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
