//! In-process fact store over the compiled-in catalog
//!
//! Serves the static catalog directly from memory. This is the adapter used
//! when the service runs without a database (demo deployments, tests); it
//! applies the same filter semantics the Postgres adapter expresses in SQL.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use core_kernel::{Category, Severity};

use crate::filter::{matches, FactQuery};
use crate::ports::{CatalogStats, FactRecord, FactSearchParams, FactStore, StoreError};
use crate::repository::FactRepository;

/// Fact store serving the compiled-in catalog
///
/// Catalog declaration order doubles as insertion order: later entries are
/// treated as newer, which matches what the Postgres adapter yields after
/// the catalog is seeded in declaration order.
#[derive(Debug, Clone)]
pub struct CatalogFactStore {
    records: Vec<FactRecord>,
}

impl CatalogFactStore {
    /// Builds a store over the process-wide catalog
    pub fn new() -> Self {
        let facts = FactRepository::new().all_facts();
        let base = Utc::now();
        let count = facts.len() as i64;

        let records = facts
            .into_iter()
            .enumerate()
            .map(|(index, fact)| FactRecord {
                fact,
                created_at: base - Duration::seconds(count - index as i64),
            })
            .collect();

        Self { records }
    }

    /// Number of records served by this store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maps raw search parameters onto a typed query
    ///
    /// Returns `None` when a category or severity key is outside the known
    /// vocabulary: such a filter can never match, so the search short-circuits
    /// to an empty result instead of erroring.
    fn build_query(params: &FactSearchParams) -> Option<FactQuery> {
        let mut query = FactQuery::all();

        if let Some(key) = params.category_filter() {
            query = query.with_category(Category::parse(key)?);
        }
        if let Some(key) = params.severity_filter() {
            query = query.with_severity(Severity::parse(key)?);
        }
        if let Some(text) = params.search.as_deref() {
            query = query.with_search(text);
        }

        Some(query)
    }
}

impl Default for CatalogFactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FactStore for CatalogFactStore {
    async fn search(&self, params: &FactSearchParams) -> Result<Vec<FactRecord>, StoreError> {
        let Some(query) = Self::build_query(params) else {
            return Ok(Vec::new());
        };

        let mut results: Vec<FactRecord> = self
            .records
            .iter()
            .filter(|record| matches(&record.fact, &query))
            .cloned()
            .collect();

        results.sort_by(|a, b| {
            a.fact
                .severity
                .rank()
                .cmp(&b.fact.severity.rank())
                .then_with(|| b.created_at.cmp(&a.created_at))
        });

        Ok(results)
    }

    async fn stats(&self) -> Result<CatalogStats, StoreError> {
        let total = self.records.len() as u64;
        let critical = self
            .records
            .iter()
            .filter(|r| r.fact.is_critical())
            .count() as u64;
        let categories = {
            let mut seen: Vec<Category> = Vec::new();
            for record in &self.records {
                if !seen.contains(&record.fact.category) {
                    seen.push(record.fact.category);
                }
            }
            seen.len() as u64
        };

        Ok(CatalogStats {
            total,
            critical,
            categories,
        })
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
