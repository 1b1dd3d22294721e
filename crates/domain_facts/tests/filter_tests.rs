//! Filter Engine Tests
//!
//! Covers the contract of the fact filter:
//! - Determinism and order preservation (selection, not re-ranking)
//! - Conjunction of the three predicates and their commutativity
//! - Free-text semantics: trimming, case-insensitivity, literal phrase
//!   matching with no tokenization
//!
//! # Test Organization
//!
//! - `identity_tests` - empty-query and empty-input behavior
//! - `predicate_tests` - each predicate and their conjunction
//! - `text_search_tests` - the free-text predicate's exact semantics
//! - `property_tests` - proptest coverage over arbitrary queries

use core_kernel::{Category, Severity};
use domain_facts::{filter, CategoryFilter, FactQuery, FactRepository, HiddenFact};
use proptest::prelude::*;
use test_utils::{assert_subsequence, QueryFixtures};

fn all_facts() -> Vec<HiddenFact> {
    FactRepository::new().all_facts()
}

// ============================================================================
// IDENTITY TESTS
// ============================================================================

mod identity_tests {
    use super::*;

    /// The empty query returns exactly the unfiltered catalog
    #[test]
    fn test_empty_query_identity() {
        let facts = all_facts();
        let result = filter(&facts, &QueryFixtures::empty());
        assert_eq!(result, facts);
    }

    /// An explicitly-blank query behaves like the empty query
    #[test]
    fn test_blank_fields_are_identity() {
        let facts = all_facts();
        let query = FactQuery {
            category: CategoryFilter::All,
            severity: None,
            search_text: String::new(),
        };
        assert_eq!(filter(&facts, &query), facts);
    }

    /// Empty input yields an empty result, never an error
    #[test]
    fn test_empty_input() {
        let query = FactQuery::all().with_severity(Severity::Critical);
        assert!(filter(&[], &query).is_empty());
    }

    /// A query matching nothing yields the valid empty state
    #[test]
    fn test_no_results_is_valid() {
        let facts = all_facts();
        let result = filter(&facts, &QueryFixtures::no_match_search());
        assert!(result.is_empty());
    }
}

// ============================================================================
// PREDICATE TESTS
// ============================================================================

mod predicate_tests {
    use super::*;

    /// Category predicate keeps exactly the facts of that line
    #[test]
    fn test_category_predicate() {
        let facts = all_facts();
        let result = filter(&facts, &FactQuery::all().with_category(Category::Motor));

        assert!(!result.is_empty());
        assert!(result.iter().all(|f| f.category == Category::Motor));

        let expected = facts
            .iter()
            .filter(|f| f.category == Category::Motor)
            .count();
        assert_eq!(result.len(), expected);
    }

    /// Severity predicate keeps exactly the facts of that grade
    #[test]
    fn test_severity_predicate() {
        let facts = all_facts();
        let result = filter(&facts, &FactQuery::all().with_severity(Severity::Critical));

        assert!(!result.is_empty());
        assert!(result.iter().all(|f| f.severity == Severity::Critical));
    }

    /// Fixture queries narrow to their expected shapes
    #[test]
    fn test_critical_health_fixture_query() {
        let facts = all_facts();
        let result = filter(&facts, &QueryFixtures::critical_health());

        assert!(!result.is_empty());
        assert!(result
            .iter()
            .all(|f| f.category == Category::Health && f.severity == Severity::Critical));
    }

    /// The full query equals the intersection of single-predicate filters
    #[test]
    fn test_conjunction_equals_intersection() {
        let facts = all_facts();
        let combined = filter(
            &facts,
            &FactQuery::all()
                .with_category(Category::Health)
                .with_severity(Severity::Critical)
                .with_search("room"),
        );

        let by_category = filter(&facts, &FactQuery::all().with_category(Category::Health));
        let by_severity = filter(&facts, &FactQuery::all().with_severity(Severity::Critical));
        let by_text = filter(&facts, &FactQuery::all().with_search("room"));

        let in_all = |fact: &HiddenFact| {
            by_category.iter().any(|f| f.id == fact.id)
                && by_severity.iter().any(|f| f.id == fact.id)
                && by_text.iter().any(|f| f.id == fact.id)
        };

        assert!(!combined.is_empty());
        for fact in &combined {
            assert!(in_all(fact), "{} missing from an individual filter", fact.id);
        }
        for fact in &facts {
            if in_all(fact) {
                assert!(
                    combined.iter().any(|f| f.id == fact.id),
                    "{} in every individual filter but not in the conjunction",
                    fact.id
                );
            }
        }
    }

    /// Applying the predicates as sequential narrowing filters in any order
    /// yields the same final set as the combined query
    #[test]
    fn test_predicate_commutativity() {
        let facts = all_facts();
        let combined = filter(
            &facts,
            &FactQuery::all()
                .with_category(Category::Health)
                .with_severity(Severity::High)
                .with_search("waiting"),
        );

        let category_only = FactQuery::all().with_category(Category::Health);
        let severity_only = FactQuery::all().with_severity(Severity::High);
        let text_only = FactQuery::all().with_search("waiting");

        let order_a = filter(&filter(&filter(&facts, &category_only), &severity_only), &text_only);
        let order_b = filter(&filter(&filter(&facts, &text_only), &category_only), &severity_only);
        let order_c = filter(&filter(&filter(&facts, &severity_only), &text_only), &category_only);

        assert_eq!(order_a, combined);
        assert_eq!(order_b, combined);
        assert_eq!(order_c, combined);
    }
}

// ============================================================================
// TEXT SEARCH TESTS
// ============================================================================

mod text_search_tests {
    use super::*;

    /// Search is case-insensitive over every searchable field
    #[test]
    fn test_case_insensitivity() {
        let facts = all_facts();
        let upper = filter(&facts, &FactQuery::all().with_search("DIABETES"));
        let lower = filter(&facts, &FactQuery::all().with_search("diabetes"));

        assert_eq!(upper, lower);
        assert!(!lower.is_empty(), "catalog should contain a diabetes case");
    }

    /// Leading and trailing whitespace around the term is ignored
    #[test]
    fn test_term_is_trimmed() {
        let facts = all_facts();
        let padded = filter(&facts, &FactQuery::all().with_search("  room rent  "));
        let bare = filter(&facts, &QueryFixtures::room_rent_search());
        assert_eq!(padded, bare);
        assert!(!bare.is_empty());
    }

    /// Whitespace-only search text applies no filter at all
    #[test]
    fn test_whitespace_only_is_identity() {
        let facts = all_facts();
        assert_eq!(filter(&facts, &FactQuery::all().with_search(" \t ")), facts);
    }

    /// Multi-word input is one literal phrase: word order matters and the
    /// words are never matched independently
    #[test]
    fn test_phrase_is_not_tokenized() {
        let facts = all_facts();

        // "pre-existing disease" appears in the catalog, so the inner
        // phrase matches...
        let forward = filter(&facts, &FactQuery::all().with_search("existing disease"));
        assert!(!forward.is_empty());

        // ...but the reversed word order does not.
        let reversed = filter(&facts, &FactQuery::all().with_search("disease existing"));
        assert!(reversed.is_empty());
    }

    /// The text predicate is an OR across title, description, what-to-check,
    /// and real-case fields
    #[test]
    fn test_search_spans_all_fields() {
        let facts = all_facts();

        // "airlifted" appears only in a real_case narrative
        let by_case = filter(&facts, &FactQuery::all().with_search("airlifted"));
        assert!(!by_case.is_empty());

        // "proposal form" appears only in a what_to_check field
        let by_check = filter(&facts, &FactQuery::all().with_search("proposal form"));
        assert!(!by_check.is_empty());
    }
}

// ============================================================================
// BUILT CORPUS TESTS
// ============================================================================

mod built_corpus_tests {
    use super::*;
    use test_utils::{FactBuilder, FactFixtures};

    /// Each searchable field participates in the OR; the optional example
    /// field does not
    #[test]
    fn test_text_predicate_field_set() {
        let facts = vec![
            FactBuilder::new("t-1").title("alpha marker").build(),
            FactBuilder::new("t-2").description("beta marker").build(),
            FactBuilder::new("t-3").what_to_check("gamma marker").build(),
            FactBuilder::new("t-4").real_case("delta marker").build(),
            FactBuilder::new("t-5").example("epsilon marker").build(),
        ];

        for (needle, expected) in [
            ("alpha", "t-1"),
            ("beta", "t-2"),
            ("gamma", "t-3"),
            ("delta", "t-4"),
        ] {
            let result = filter(&facts, &FactQuery::all().with_search(needle));
            assert_eq!(result.len(), 1, "needle '{needle}' should hit one fact");
            assert_eq!(result[0].id, expected);
        }

        let result = filter(&facts, &FactQuery::all().with_search("epsilon"));
        assert!(result.is_empty(), "the example field is not searchable");
    }

    /// Fixture facts behave as their descriptions promise
    #[test]
    fn test_fixture_facts() {
        let facts = vec![FactFixtures::room_rent(), FactFixtures::depreciation()];

        let critical = filter(&facts, &FactQuery::all().with_severity(Severity::Critical));
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].id, "fixture-health-1");

        let motor = filter(&facts, &FactQuery::all().with_category(Category::Motor));
        assert_eq!(motor.len(), 1);
        assert_eq!(motor[0].id, "fixture-motor-1");
    }
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

mod property_tests {
    use super::*;
    use test_utils::{fact_query_strategy as query_strategy, fake_fact};

    /// A generated corpus larger than the catalog, spread over every
    /// category and severity
    fn generated_corpus() -> Vec<HiddenFact> {
        let mut facts = Vec::new();
        for (i, category) in Category::ALL.iter().cycle().take(64).enumerate() {
            let severity = Severity::ALL[i % Severity::ALL.len()];
            facts.push(fake_fact(i, *category, severity));
        }
        facts
    }

    proptest! {
        /// Filtering twice with the same query returns identical sequences
        #[test]
        fn prop_filter_is_deterministic(query in query_strategy()) {
            let facts = all_facts();
            prop_assert_eq!(filter(&facts, &query), filter(&facts, &query));
        }

        /// Every result is a subsequence of the unfiltered catalog
        #[test]
        fn prop_filter_preserves_order(query in query_strategy()) {
            let facts = all_facts();
            let result = filter(&facts, &query);
            assert_subsequence(&result, &facts);
        }

        /// Filtering is idempotent: re-filtering a result with the same
        /// query changes nothing
        #[test]
        fn prop_filter_is_idempotent(query in query_strategy()) {
            let facts = all_facts();
            let once = filter(&facts, &query);
            let twice = filter(&once, &query);
            prop_assert_eq!(once, twice);
        }

        /// Upper-casing the search term never changes the result
        #[test]
        fn prop_search_case_insensitive(term in "[a-z ]{1,12}") {
            let facts = all_facts();
            let lower = filter(&facts, &FactQuery::all().with_search(term.clone()));
            let upper = filter(&facts, &FactQuery::all().with_search(term.to_uppercase()));
            prop_assert_eq!(lower, upper);
        }

        /// The contract holds on generated corpora, not just the catalog
        #[test]
        fn prop_holds_on_generated_corpus(query in query_strategy()) {
            let facts = generated_corpus();
            let result = filter(&facts, &query);
            assert_subsequence(&result, &facts);
            prop_assert_eq!(filter(&facts, &query), result);
        }
    }
}
