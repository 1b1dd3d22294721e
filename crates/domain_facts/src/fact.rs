//! Hidden fact value objects
//!
//! A hidden fact is one insurer exclusion or fine-print item shown to end
//! users. Facts are immutable records; serde keys use camelCase to match the
//! wire format consumed by the web client.

use core_kernel::{Category, Severity};
use serde::{Deserialize, Serialize};

/// One catalogued insurer exclusion/fine-print item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenFact {
    /// Unique identifier within the catalog (e.g. "health-1")
    pub id: String,
    /// The insurance line this fact belongs to
    pub category: Category,
    /// Short headline shown in lists
    pub title: String,
    /// Urgency grade
    pub severity: Severity,
    /// What the fine print actually means for the policyholder
    pub description: String,
    /// Policy types the fact applies to, in display order
    pub affected_policies: Vec<String>,
    /// What a buyer should verify in their own policy wording
    pub what_to_check: String,
    /// A real claim scenario illustrating the impact
    pub real_case: String,
    /// Optional worked example with concrete numbers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl HiddenFact {
    /// Returns true if the fact is graded critical
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

/// A named group of facts for one insurance line
///
/// Groups are the unit of catalog declaration; the order of groups and of
/// facts within a group is the canonical presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroup {
    /// The insurance line every fact in this group belongs to
    pub category: Category,
    /// Display label for the group heading
    pub label: String,
    /// Facts in presentation order
    pub facts: Vec<HiddenFact>,
}

impl CategoryGroup {
    /// Number of facts in the group
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Returns true if the group declares no facts
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fact() -> HiddenFact {
        HiddenFact {
            id: "health-1".to_string(),
            category: Category::Health,
            title: "Room rent caps".to_string(),
            severity: Severity::Critical,
            description: "Proportionate deductions apply.".to_string(),
            affected_policies: vec!["Mediclaim".to_string()],
            what_to_check: "Room rent limit".to_string(),
            real_case: "A payout was reduced by 28 percent.".to_string(),
            example: None,
        }
    }

    #[test]
    fn test_is_critical() {
        let mut fact = sample_fact();
        assert!(fact.is_critical());

        fact.severity = Severity::Low;
        assert!(!fact.is_critical());
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let json = serde_json::to_value(sample_fact()).unwrap();
        assert!(json.get("affectedPolicies").is_some());
        assert!(json.get("whatToCheck").is_some());
        assert!(json.get("realCase").is_some());
        // Absent example is omitted entirely
        assert!(json.get("example").is_none());
    }
}
