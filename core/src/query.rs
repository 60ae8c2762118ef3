//! In-memory filtering and aggregation over a loaded complaint snapshot.
//!
//! RULES:
//!   - Every function is pure: no mutation of the input, fresh values out.
//!   - The working set is caller-held. The engine keeps no state and assumes
//!     the slice arrives in repository order (newest first) — it never
//!     re-sorts.

use crate::{
    record::ComplaintRecord,
    types::{Priority, Status},
};
use serde::Serialize;

/// Dashboard statistics row: exact counts by status equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

/// Public landing-page counters (total submitted, total resolved).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PublicStats {
    pub total: usize,
    pub resolved: usize,
}

/// Exact-match criteria, AND-combined. An unset criterion is a no-op; all
/// three unset returns the input unchanged.
#[derive(Debug, Clone, Default)]
pub struct ComplaintFilter {
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub category: Option<String>,
}

impl ComplaintFilter {
    fn matches(&self, record: &ComplaintRecord) -> bool {
        self.priority.is_none_or(|p| record.priority == p)
            && self.status.is_none_or(|s| record.status == s)
            && self
                .category
                .as_ref()
                .is_none_or(|c| &record.category == c)
    }
}

pub fn count_by_status(records: &[ComplaintRecord]) -> StatusCounts {
    let mut counts = StatusCounts {
        total: records.len(),
        ..StatusCounts::default()
    };
    for record in records {
        match record.status {
            Status::Pending => counts.pending += 1,
            Status::InProgress => counts.in_progress += 1,
            Status::Resolved => counts.resolved += 1,
        }
    }
    counts
}

/// The high-priority badge: High priority AND not yet Resolved.
pub fn count_high_priority_unresolved(records: &[ComplaintRecord]) -> usize {
    records
        .iter()
        .filter(|r| r.priority == Priority::High && r.status != Status::Resolved)
        .count()
}

/// Narrow the snapshot by the provided criteria, preserving relative order.
pub fn filter(records: &[ComplaintRecord], criteria: &ComplaintFilter) -> Vec<ComplaintRecord> {
    records
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect()
}

pub fn public_stats(records: &[ComplaintRecord]) -> PublicStats {
    let counts = count_by_status(records);
    PublicStats {
        total: counts.total,
        resolved: counts.resolved,
    }
}
