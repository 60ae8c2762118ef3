//! Query engine tests — pure filtering and aggregation over a caller-held
//! snapshot. No store involved.

use chrono::{TimeZone, Utc};
use intake_core::{
    query::{self, ComplaintFilter, StatusCounts},
    record::{ComplaintDraft, ComplaintRecord},
    types::{Priority, Status},
};

fn record(id: &str, priority: Priority, status: Status, category: &str) -> ComplaintRecord {
    ComplaintDraft {
        complaint_id: id.to_string(),
        user_name: "Ada Li".into(),
        user_email: "ada@example.com".into(),
        category: category.to_string(),
        priority,
        description: "test".into(),
        is_anonymous: false,
        file_url: None,
        status,
        admin_reply: String::new(),
    }
    .into_record(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
}

fn sample_set() -> Vec<ComplaintRecord> {
    vec![
        record("CMP-5-0", Priority::High, Status::Pending, "Service"),
        record("CMP-4-0", Priority::High, Status::Resolved, "Billing"),
        record("CMP-3-0", Priority::Low, Status::Pending, "Service"),
        record("CMP-2-0", Priority::Medium, Status::InProgress, "Technical"),
        record("CMP-1-0", Priority::High, Status::InProgress, "Service"),
    ]
}

/// An empty filter returns the input unchanged: same elements, same order.
#[test]
fn empty_filter_is_identity() {
    let records = sample_set();
    let filtered = query::filter(&records, &ComplaintFilter::default());
    assert_eq!(filtered, records);
}

/// A single criterion narrows by exact match, preserving relative order.
#[test]
fn status_filter_preserves_order() {
    let records = sample_set();
    let filtered = query::filter(
        &records,
        &ComplaintFilter {
            status: Some(Status::InProgress),
            ..Default::default()
        },
    );
    let ids: Vec<&str> = filtered.iter().map(|r| r.complaint_id.as_str()).collect();
    assert_eq!(ids, vec!["CMP-2-0", "CMP-1-0"]);
}

/// Multiple criteria AND-combine.
#[test]
fn criteria_and_combine() {
    let records = sample_set();
    let filtered = query::filter(
        &records,
        &ComplaintFilter {
            priority: Some(Priority::High),
            category: Some("Service".into()),
            ..Default::default()
        },
    );
    let ids: Vec<&str> = filtered.iter().map(|r| r.complaint_id.as_str()).collect();
    assert_eq!(ids, vec!["CMP-5-0", "CMP-1-0"]);
}

/// Filtering never mutates the input snapshot.
#[test]
fn filter_leaves_input_untouched() {
    let records = sample_set();
    let before = records.clone();
    let _ = query::filter(
        &records,
        &ComplaintFilter {
            priority: Some(Priority::Low),
            ..Default::default()
        },
    );
    assert_eq!(records, before);
}

/// Counts are exact equality matches on status.
#[test]
fn count_by_status_matches_exactly() {
    let counts = query::count_by_status(&sample_set());
    assert_eq!(
        counts,
        StatusCounts {
            total: 5,
            pending: 2,
            in_progress: 2,
            resolved: 1,
        }
    );
    assert_eq!(query::count_by_status(&[]), StatusCounts::default());
}

/// The badge counts High priority complaints not yet Resolved.
#[test]
fn high_priority_badge_excludes_resolved() {
    let records = vec![
        record("a", Priority::High, Status::Pending, "Service"),
        record("b", Priority::High, Status::Resolved, "Service"),
        record("c", Priority::Low, Status::Pending, "Service"),
    ];
    assert_eq!(query::count_high_priority_unresolved(&records), 1);
}

/// Landing-page stats are the total and resolved counters.
#[test]
fn public_stats_counts_total_and_resolved() {
    let stats = query::public_stats(&sample_set());
    assert_eq!(stats.total, 5);
    assert_eq!(stats.resolved, 1);
}
