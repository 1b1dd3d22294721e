//! Builder Patterns for Test Data
//!
//! Builders start from a sensible default and let a test override only the
//! fields it cares about.

use chrono::TimeZone;
use chrono::Utc;
use core_kernel::{Category, Severity};
use domain_facts::{FactRecord, HiddenFact};

/// Builder for hidden facts
///
/// # Example
///
/// ```rust
/// use core_kernel::Severity;
/// use test_utils::FactBuilder;
///
/// let fact = FactBuilder::new("life-test-1")
///     .severity(Severity::Critical)
///     .title("Suicide exclusion")
///     .build();
/// assert!(fact.is_critical());
/// ```
#[derive(Debug, Clone)]
pub struct FactBuilder {
    fact: HiddenFact,
}

impl FactBuilder {
    /// Starts a builder with neutral defaults and the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            fact: HiddenFact {
                id: id.into(),
                category: Category::Life,
                title: "A hidden fact".to_string(),
                severity: Severity::Medium,
                description: "Something the fine print does not advertise.".to_string(),
                affected_policies: vec!["Term Life".to_string()],
                what_to_check: "The policy wording".to_string(),
                real_case: "A claim went differently than expected.".to_string(),
                example: None,
            },
        }
    }

    pub fn category(mut self, category: Category) -> Self {
        self.fact.category = category;
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.fact.severity = severity;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.fact.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.fact.description = description.into();
        self
    }

    pub fn what_to_check(mut self, what_to_check: impl Into<String>) -> Self {
        self.fact.what_to_check = what_to_check.into();
        self
    }

    pub fn real_case(mut self, real_case: impl Into<String>) -> Self {
        self.fact.real_case = real_case.into();
        self
    }

    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.fact.example = Some(example.into());
        self
    }

    pub fn affected_policies(mut self, policies: &[&str]) -> Self {
        self.fact.affected_policies = policies.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Builds the fact
    pub fn build(self) -> HiddenFact {
        self.fact
    }

    /// Builds a store record with a deterministic timestamp offset
    ///
    /// Records built with increasing `offset_secs` are increasingly newer.
    pub fn record(self, offset_secs: i64) -> FactRecord {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        FactRecord {
            fact: self.fact,
            created_at: base + chrono::Duration::seconds(offset_secs),
        }
    }
}
