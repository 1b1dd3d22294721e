//! Catalog Fact Store Tests
//!
//! Exercises the in-process `FactStore` adapter through the port trait:
//! permissive parameter handling, the ordering contract, and stats.

use core_kernel::{Category, Severity};
use domain_facts::{
    filter, CatalogFactStore, FactQuery, FactRepository, FactSearchParams, FactStore,
};
use test_utils::assert_store_ordering;

fn store() -> CatalogFactStore {
    CatalogFactStore::new()
}

/// Category parameter restricts results exactly like the filter engine
#[tokio::test]
async fn test_category_parameter_matches_filter_engine() {
    let params = FactSearchParams {
        category: Some("motor".to_string()),
        ..Default::default()
    };
    let results = store().search(&params).await.unwrap();

    let engine = filter(
        &FactRepository::new().all_facts(),
        &FactQuery::all().with_category(Category::Motor),
    );

    let mut store_ids: Vec<String> = results.iter().map(|r| r.fact.id.clone()).collect();
    let mut engine_ids: Vec<String> = engine.iter().map(|f| f.id.clone()).collect();
    store_ids.sort();
    engine_ids.sort();
    assert_eq!(store_ids, engine_ids);
}

/// The "all" sentinel and an absent category both mean no filter
#[tokio::test]
async fn test_all_sentinel_is_no_filter() {
    let explicit = FactSearchParams {
        category: Some("all".to_string()),
        ..Default::default()
    };
    let absent = FactSearchParams::default();

    let with_sentinel = store().search(&explicit).await.unwrap();
    let without = store().search(&absent).await.unwrap();
    assert_eq!(with_sentinel.len(), without.len());
}

/// Severity parameter restricts to that grade
#[tokio::test]
async fn test_severity_parameter() {
    let params = FactSearchParams {
        severity: Some("critical".to_string()),
        ..Default::default()
    };
    let results = store().search(&params).await.unwrap();

    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.fact.severity == Severity::Critical));
}

/// Search parameter matches case-insensitively across the text fields
#[tokio::test]
async fn test_search_parameter_case_insensitive() {
    let upper = FactSearchParams {
        search: Some("ROOM RENT".to_string()),
        ..Default::default()
    };
    let lower = FactSearchParams {
        search: Some("room rent".to_string()),
        ..Default::default()
    };

    // One store instance: record timestamps are assigned at construction
    let store = store();
    let a = store.search(&upper).await.unwrap();
    let b = store.search(&lower).await.unwrap();
    assert_eq!(a, b);
    assert!(!a.is_empty());
}

/// Unknown filter vocabulary produces an empty result, not an error
#[tokio::test]
async fn test_unknown_keys_match_nothing() {
    let unknown_category = FactSearchParams {
        category: Some("nonexistent".to_string()),
        ..Default::default()
    };
    let unknown_severity = FactSearchParams {
        severity: Some("catastrophic".to_string()),
        ..Default::default()
    };

    assert!(store().search(&unknown_category).await.unwrap().is_empty());
    assert!(store().search(&unknown_severity).await.unwrap().is_empty());
}

/// Results come back in severity-rank order, newest first within a rank
#[tokio::test]
async fn test_ordering_contract() {
    let results = store().search(&FactSearchParams::default()).await.unwrap();
    assert_store_ordering(&results);
}

/// Stats reflect the full store regardless of any filtering
#[tokio::test]
async fn test_stats() {
    let repo = FactRepository::new();
    let stats = store().stats().await.unwrap();

    assert_eq!(stats.total, repo.total_facts() as u64);
    assert_eq!(stats.critical, repo.critical_facts() as u64);
    assert_eq!(stats.categories, Category::ALL.len() as u64);
}

/// The in-process store is always healthy
#[tokio::test]
async fn test_health_check() {
    assert!(store().health_check().await.is_ok());
}
