//! Read-only views over the static catalog
//!
//! The repository exposes the catalog as flat, ordered sequences. Lookups
//! keyed by raw strings are deliberately permissive: category and severity
//! keys arrive from UI state and URL parameters, and an unrecognized key
//! degrades to an empty result or sentinel label rather than an error.

use core_kernel::{Category, Severity, SeverityStyle};

use crate::catalog::{catalog, Catalog};
use crate::fact::{CategoryGroup, HiddenFact};

/// Read-only access to the hidden-facts catalog
///
/// Cheap to construct; all instances share the process-wide catalog.
///
/// # Example
///
/// ```rust
/// use domain_facts::FactRepository;
///
/// let repo = FactRepository::new();
/// assert!(!repo.all_facts().is_empty());
/// assert!(repo.facts_by_category("nonexistent").is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FactRepository {
    catalog: &'static Catalog,
}

impl FactRepository {
    /// Creates a repository over the process-wide catalog
    pub fn new() -> Self {
        Self { catalog: catalog() }
    }

    /// Flattens the catalog into a single ordered fact list
    ///
    /// Iterates groups in declaration order and facts within each group in
    /// their declared order. The result is identical across calls: the
    /// flattening is a pure function of the static catalog.
    pub fn all_facts(&self) -> Vec<HiddenFact> {
        self.catalog
            .groups()
            .iter()
            .flat_map(|group| group.facts.iter().cloned())
            .collect()
    }

    /// Returns the facts for a raw category key
    ///
    /// Unknown keys return an empty sequence, never an error.
    pub fn facts_by_category(&self, key: &str) -> Vec<HiddenFact> {
        Category::parse(key)
            .and_then(|category| self.catalog.group(category))
            .map(|group| group.facts.clone())
            .unwrap_or_default()
    }

    /// Returns the display style for a raw severity key
    ///
    /// Unknown keys resolve to the Unknown/gray sentinel.
    pub fn severity_label(&self, key: &str) -> SeverityStyle {
        Severity::style_for_key(key)
    }

    /// All catalog groups in declaration order
    pub fn groups(&self) -> &'static [CategoryGroup] {
        self.catalog.groups()
    }

    /// Total number of facts in the catalog
    pub fn total_facts(&self) -> usize {
        self.catalog.total_facts()
    }

    /// Number of critical facts in the catalog
    pub fn critical_facts(&self) -> usize {
        self.catalog
            .groups()
            .iter()
            .flat_map(|g| g.facts.iter())
            .filter(|f| f.is_critical())
            .count()
    }
}

impl Default for FactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_facts_is_deterministic() {
        let repo = FactRepository::new();
        assert_eq!(repo.all_facts(), repo.all_facts());
    }

    #[test]
    fn test_all_facts_preserves_group_order() {
        let repo = FactRepository::new();
        let facts = repo.all_facts();

        // Facts appear grouped: once a new category starts, the previous
        // one never reappears.
        let mut seen = Vec::new();
        for fact in &facts {
            match seen.last() {
                Some(&current) if current == fact.category => {}
                _ => {
                    assert!(
                        !seen.contains(&fact.category),
                        "category {} reappears after other groups",
                        fact.category
                    );
                    seen.push(fact.category);
                }
            }
        }
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let repo = FactRepository::new();
        assert!(repo.facts_by_category("nonexistent").is_empty());
    }

    #[test]
    fn test_severity_label_fallback() {
        let repo = FactRepository::new();
        assert_eq!(repo.severity_label("nonexistent").label, "Unknown");
        assert_eq!(repo.severity_label("nonexistent").color_token, "gray");
        assert_eq!(repo.severity_label("critical").label, "Critical");
    }
}
