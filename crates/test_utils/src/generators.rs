//! Property-Based Test Data Generators
//!
//! Proptest strategies for domain values, plus fake-backed generation of
//! realistic-looking facts for volume tests.

use core_kernel::{Category, Severity};
use domain_facts::{CategoryFilter, FactQuery, HiddenFact};
use domain_rating::{Gender, ProductLine, QuoteInput};
use fake::faker::lorem::en::{Sentence, Words};
use fake::Fake;
use proptest::prelude::*;

/// Strategy for generating any category
pub fn category_strategy() -> impl Strategy<Value = Category> {
    proptest::sample::select(Category::ALL.to_vec())
}

/// Strategy for generating any severity
pub fn severity_strategy() -> impl Strategy<Value = Severity> {
    proptest::sample::select(Severity::ALL.to_vec())
}

/// Strategy for generating a category constraint
pub fn category_filter_strategy() -> impl Strategy<Value = CategoryFilter> {
    prop_oneof![
        Just(CategoryFilter::All),
        category_strategy().prop_map(CategoryFilter::Only),
    ]
}

/// Strategy for generating search text, biased toward interesting cases
pub fn search_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[a-z]{1,10}",
        Just("room rent".to_string()),
        Just("CLAIM".to_string()),
    ]
}

/// Strategy for generating complete filter queries
pub fn fact_query_strategy() -> impl Strategy<Value = FactQuery> {
    (
        category_filter_strategy(),
        proptest::option::of(severity_strategy()),
        search_text_strategy(),
    )
        .prop_map(|(category, severity, search_text)| FactQuery {
            category,
            severity,
            search_text,
        })
}

/// Strategy for generating quote inputs inside the UI-reachable domain
pub fn quote_input_strategy() -> impl Strategy<Value = QuoteInput> {
    (
        18u8..=100,
        prop_oneof![
            Just(ProductLine::Life),
            Just(ProductLine::Health),
            Just(ProductLine::Vehicle),
        ],
        100_000u64..=10_000_000,
        prop_oneof![Just(Gender::Male), Just(Gender::Female), Just(Gender::Other)],
    )
        .prop_map(|(age, product, sum_assured, gender)| QuoteInput {
            age,
            product,
            sum_assured,
            gender,
        })
}

/// Generates a plausible fact with fake prose for the given position
pub fn fake_fact(index: usize, category: Category, severity: Severity) -> HiddenFact {
    let words: Vec<String> = Words(2..5).fake();
    HiddenFact {
        id: format!("{}-{}", category.key(), index),
        category,
        title: words.join(" "),
        severity,
        description: Sentence(8..16).fake(),
        affected_policies: Words(1..3).fake(),
        what_to_check: Sentence(5..10).fake(),
        real_case: Sentence(8..16).fake(),
        example: None,
    }
}
