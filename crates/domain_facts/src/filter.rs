//! The fact filter engine
//!
//! Computes the subset of facts matching a query. The three predicates -
//! category, severity, free text - are AND-ed together; the text predicate is
//! an OR across title, description, what-to-check, and real-case fields.
//!
//! The engine is a selection, not a re-ranking: surviving facts keep their
//! relative order from the input sequence. It is a pure, total function with
//! no failure modes; an empty result is the normal "no matches" outcome.

use core_kernel::{Category, Severity};

use crate::fact::HiddenFact;

/// Category constraint for a query
///
/// `All` is the UI's "all categories" chip; `Only` restricts to one line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every category passes
    #[default]
    All,
    /// Only facts in exactly this category pass
    Only(Category),
}

/// A transient filter query, rebuilt on every interaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactQuery {
    /// Category constraint
    pub category: CategoryFilter,
    /// Optional severity constraint; `None` means any severity
    pub severity: Option<Severity>,
    /// Free-text search; blank or whitespace-only means no text filter
    pub search_text: String,
}

impl FactQuery {
    /// The identity query: matches every fact
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts the query to one category
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = CategoryFilter::Only(category);
        self
    }

    /// Restricts the query to one severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Sets the free-text search term
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// The trimmed, lower-cased search needle; `None` when blank
    fn needle(&self) -> Option<String> {
        let trimmed = self.search_text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }
}

/// Returns true if a single fact satisfies the query
pub fn matches(fact: &HiddenFact, query: &FactQuery) -> bool {
    let category_ok = match query.category {
        CategoryFilter::All => true,
        CategoryFilter::Only(category) => fact.category == category,
    };
    if !category_ok {
        return false;
    }

    if let Some(severity) = query.severity {
        if fact.severity != severity {
            return false;
        }
    }

    match query.needle() {
        None => true,
        Some(needle) => matches_text(fact, &needle),
    }
}

/// Computes the subset of `facts` matching `query`, preserving input order
///
/// Equivalent to a single conjunctive predicate over the three filters; the
/// result is always a subsequence of the input.
pub fn filter(facts: &[HiddenFact], query: &FactQuery) -> Vec<HiddenFact> {
    facts
        .iter()
        .filter(|fact| matches(fact, query))
        .cloned()
        .collect()
}

/// Case-insensitive literal substring match across the searchable fields
///
/// The needle is matched as one literal phrase: multi-word input is not
/// tokenized, so "heart attack" matches only facts containing that exact
/// phrase. `needle` must already be trimmed and lower-cased.
fn matches_text(fact: &HiddenFact, needle: &str) -> bool {
    fact.title.to_lowercase().contains(needle)
        || fact.description.to_lowercase().contains(needle)
        || fact.what_to_check.to_lowercase().contains(needle)
        || fact.real_case.to_lowercase().contains(needle)
}
