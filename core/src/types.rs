//! Shared domain enums and primitive types.
//!
//! RULE: Display labels and style classes for each enum variant live here,
//! resolved once centrally. Render layers never rebuild them from strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-readable complaint identifier, format `CMP-<millis>-<0..9999>`.
pub type ComplaintId = String;

/// Complaint urgency as selected at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Parse the wire/form value. Exact match only.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Low" => Some(Self::Low),
            "Medium" => Some(Self::Medium),
            "High" => Some(Self::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Style class used by render layers (e.g. `priority-high`).
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Low => "priority-low",
            Self::Medium => "priority-medium",
            Self::High => "priority-high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complaint lifecycle status. New complaints start Pending.
///
/// Transitions are NOT order-restricted: an admin may move a complaint to
/// any of the three statuses at any time (a Resolved complaint can be
/// reopened). Validation happens in the status machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl Status {
    /// Parse the wire/form value. Exact match only — anything else is
    /// rejected by the status machine with `InvalidStatus`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(Self::Pending),
            "In Progress" => Some(Self::InProgress),
            "Resolved" => Some(Self::Resolved),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }

    /// Style class used by render layers (e.g. `status-in-progress`).
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Pending => "status-pending",
            Self::InProgress => "status-in-progress",
            Self::Resolved => "status-resolved",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_round_trips_display_strings() {
        for status in [Status::Pending, Status::InProgress, Status::Resolved] {
            assert_eq!(Status::parse(status.as_str()), Some(status));
        }
        assert_eq!(Status::parse("Closed"), None);
        assert_eq!(Status::parse("pending"), None, "parse is exact-match");
    }

    #[test]
    fn priority_parse_round_trips_display_strings() {
        for priority in [Priority::Low, Priority::Medium, Priority::High] {
            assert_eq!(Priority::parse(priority.as_str()), Some(priority));
        }
        assert_eq!(Priority::parse("Urgent"), None);
    }

    #[test]
    fn css_classes_are_lowercase_hyphenated() {
        assert_eq!(Status::InProgress.css_class(), "status-in-progress");
        assert_eq!(Priority::High.css_class(), "priority-high");
    }
}
