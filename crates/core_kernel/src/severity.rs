//! Severity grades for hidden facts
//!
//! Severity is an ordinal urgency classification (critical > high > medium >
//! low). Each grade carries a display label and a color token consumed by the
//! web client; lookups by raw key fall back to an Unknown/gray sentinel so
//! stale UI state degrades gracefully instead of failing.

use serde::{Deserialize, Serialize};

/// Urgency grade attached to a hidden fact
///
/// Ordered by descending urgency. `rank()` gives the sort position used by
/// the facts endpoint (critical first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

/// Display information for a severity grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityStyle {
    /// Human-readable label ("Critical", "High", ...)
    pub label: &'static str,
    /// Color token the client maps to its theme palette
    pub color_token: &'static str,
}

/// Sentinel style returned for severity keys outside the fixed table
pub const UNKNOWN_SEVERITY_STYLE: SeverityStyle = SeverityStyle {
    label: "Unknown",
    color_token: "gray",
};

impl Severity {
    /// All severities in descending urgency order
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Returns the wire key for this severity
    pub fn key(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    /// Returns the sort rank, most urgent first (critical = 0)
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
        }
    }

    /// Returns the display style for this severity
    pub fn style(&self) -> SeverityStyle {
        match self {
            Severity::Critical => SeverityStyle {
                label: "Critical",
                color_token: "red",
            },
            Severity::High => SeverityStyle {
                label: "High",
                color_token: "orange",
            },
            Severity::Medium => SeverityStyle {
                label: "Medium",
                color_token: "yellow",
            },
            Severity::Low => SeverityStyle {
                label: "Low",
                color_token: "blue",
            },
        }
    }

    /// Parses a wire key into a severity, `None` for unrecognized keys
    pub fn parse(key: &str) -> Option<Severity> {
        Severity::ALL.iter().copied().find(|s| s.key() == key)
    }

    /// Looks up the display style for a raw severity key
    ///
    /// Unknown keys resolve to the Unknown/gray sentinel rather than an
    /// error; the severity vocabulary is expected to grow over time and a
    /// client holding a newer key than this build must still render.
    pub fn style_for_key(key: &str) -> SeverityStyle {
        Severity::parse(key)
            .map(|s| s.style())
            .unwrap_or(UNKNOWN_SEVERITY_STYLE)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
