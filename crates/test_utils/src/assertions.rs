//! Custom Test Assertions
//!
//! Assertion helpers for domain types with more meaningful failure messages
//! than the standard macros.

use domain_facts::{FactRecord, HiddenFact};

/// Asserts that `subset` appears within `full` in the same relative order
///
/// This is the order-preservation contract of the filter engine: a filtered
/// result must be a subsequence of the input, never a re-ranking.
///
/// # Panics
///
/// Panics if any element of `subset` is missing from `full` or appears out
/// of relative order.
pub fn assert_subsequence(subset: &[HiddenFact], full: &[HiddenFact]) {
    let mut cursor = 0;
    for fact in subset {
        let position = full[cursor..]
            .iter()
            .position(|candidate| candidate.id == fact.id)
            .unwrap_or_else(|| {
                panic!(
                    "fact '{}' is missing or out of order relative to the full sequence",
                    fact.id
                )
            });
        cursor += position + 1;
    }
}

/// Asserts records follow the store ordering contract:
/// severity rank ascending, then creation time descending
///
/// # Panics
///
/// Panics on the first adjacent pair violating the contract.
pub fn assert_store_ordering(records: &[FactRecord]) {
    for pair in records.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let rank_a = a.fact.severity.rank();
        let rank_b = b.fact.severity.rank();
        assert!(
            rank_a < rank_b || (rank_a == rank_b && a.created_at >= b.created_at),
            "ordering contract violated: '{}' (rank {}, {}) before '{}' (rank {}, {})",
            a.fact.id,
            rank_a,
            a.created_at,
            b.fact.id,
            rank_b,
            b.created_at
        );
    }
}

/// Asserts every fact in `facts` carries the expected category
pub fn assert_all_in_category(facts: &[HiddenFact], category: core_kernel::Category) {
    for fact in facts {
        assert_eq!(
            fact.category, category,
            "fact '{}' is outside category {}",
            fact.id, category
        );
    }
}
