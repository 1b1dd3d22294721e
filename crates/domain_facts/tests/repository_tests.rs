//! Fact Repository Tests
//!
//! Verifies the flattening contract, the catalog invariants the repository
//! relies on, and the permissive unknown-key lookups.

use core_kernel::{Category, Severity};
use domain_facts::{catalog, FactRepository};
use test_utils::assert_all_in_category;

// ============================================================================
// FLATTENING TESTS
// ============================================================================

mod flattening_tests {
    use super::*;

    /// all_facts returns the same sequence on every call
    #[test]
    fn test_all_facts_deterministic() {
        let repo = FactRepository::new();
        let first = repo.all_facts();
        let second = repo.all_facts();
        assert_eq!(first, second, "flattening must be stable across calls");
    }

    /// all_facts is the concatenation of group fact lists in declaration order
    #[test]
    fn test_all_facts_matches_group_concatenation() {
        let repo = FactRepository::new();
        let flattened = repo.all_facts();

        let expected: Vec<String> = catalog()
            .groups()
            .iter()
            .flat_map(|g| g.facts.iter().map(|f| f.id.clone()))
            .collect();
        let actual: Vec<String> = flattened.iter().map(|f| f.id.clone()).collect();

        assert_eq!(actual, expected);
    }

    /// Every flattened fact carries the category of its owning group
    #[test]
    fn test_category_stamping_invariant() {
        for group in catalog().groups() {
            for fact in &group.facts {
                assert_eq!(
                    fact.category, group.category,
                    "fact {} disagrees with its group key",
                    fact.id
                );
            }
        }
    }

    /// Counts exposed for stats agree with the flattened view
    #[test]
    fn test_counts_agree_with_flattening() {
        let repo = FactRepository::new();
        let facts = repo.all_facts();

        assert_eq!(repo.total_facts(), facts.len());
        assert_eq!(
            repo.critical_facts(),
            facts.iter().filter(|f| f.severity == Severity::Critical).count()
        );
    }
}

// ============================================================================
// LOOKUP TESTS
// ============================================================================

mod lookup_tests {
    use super::*;

    /// Known category keys return that category's facts in declared order
    #[test]
    fn test_facts_by_known_category() {
        let repo = FactRepository::new();
        let health = repo.facts_by_category("health");

        assert!(!health.is_empty());
        assert_all_in_category(&health, Category::Health);

        let declared = &catalog()
            .group(Category::Health)
            .expect("health group exists")
            .facts;
        assert_eq!(&health, declared);
    }

    /// The camelCase personalAccident key resolves
    #[test]
    fn test_camel_case_category_key() {
        let repo = FactRepository::new();
        let facts = repo.facts_by_category("personalAccident");
        assert!(!facts.is_empty());
        assert_all_in_category(&facts, Category::PersonalAccident);
    }

    /// Unknown category keys return an empty sequence, not an error
    #[test]
    fn test_unknown_category_returns_empty() {
        let repo = FactRepository::new();
        assert!(repo.facts_by_category("nonexistent").is_empty());
        assert!(repo.facts_by_category("").is_empty());
        assert!(repo.facts_by_category("HEALTH").is_empty());
    }

    /// Known severity keys return the fixed style table entries
    #[test]
    fn test_severity_label_known_keys() {
        let repo = FactRepository::new();
        assert_eq!(repo.severity_label("critical").label, "Critical");
        assert_eq!(repo.severity_label("critical").color_token, "red");
        assert_eq!(repo.severity_label("medium").color_token, "yellow");
    }

    /// Unknown severity keys resolve to the Unknown/gray sentinel
    #[test]
    fn test_severity_label_unknown_key() {
        let repo = FactRepository::new();
        let style = repo.severity_label("nonexistent");
        assert_eq!(style.label, "Unknown");
        assert_eq!(style.color_token, "gray");
    }
}
