//! Count-based ranking shared by the two aggregation queries.
//!
//! Both "top conversation partners" and "top characters by lines" reduce to
//! the same final step: a set of `(character, count)` tallies ordered by
//! count descending with a deterministic tie-break. The tallies themselves
//! are computed by the caller from the dataset indices.

use std::cmp::Ordering;

use crate::types::{DbId, LineCount};

/// Number of characters reported in a movie's `top_characters`.
pub const TOP_CHARACTERS_LIMIT: usize = 5;

/// One tallied character awaiting ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    pub id: DbId,
    pub name: String,
    pub count: LineCount,
}

/// Order tallies by count descending, then name ascending, then id ascending.
pub fn compare_tallies(a: &Tally, b: &Tally) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

/// Rank tallies, dropping zero counts and keeping at most `limit` entries.
pub fn rank(mut tallies: Vec<Tally>, limit: Option<usize>) -> Vec<Tally> {
    tallies.retain(|t| t.count > 0);
    tallies.sort_by(compare_tallies);
    if let Some(limit) = limit {
        tallies.truncate(limit);
    }
    tallies
}
