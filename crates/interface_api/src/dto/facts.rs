//! Facts endpoint DTOs

use domain_facts::{CatalogStats, FactRecord, FactSearchParams};
use serde::{Deserialize, Serialize};

/// Query parameters accepted by `GET /api/v1/facts`
///
/// All parameters are optional; `category=all` is equivalent to omitting
/// the category. Values outside the known vocabulary are not rejected -
/// they simply match nothing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FactsQueryParams {
    pub category: Option<String>,
    pub severity: Option<String>,
    pub search: Option<String>,
}

impl From<FactsQueryParams> for FactSearchParams {
    fn from(params: FactsQueryParams) -> Self {
        FactSearchParams {
            category: params.category,
            severity: params.severity,
            search: params.search,
        }
    }
}

/// Aggregate block of the facts response
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FactsStats {
    /// Facts in the whole store
    pub total: u64,
    /// Critical facts in the whole store
    pub critical: u64,
    /// Distinct categories in the whole store
    pub categories: u64,
    /// Facts matching the current filters
    pub filtered: u64,
}

impl FactsStats {
    pub fn new(stats: CatalogStats, filtered: u64) -> Self {
        Self {
            total: stats.total,
            critical: stats.critical,
            categories: stats.categories,
            filtered,
        }
    }
}

/// Body of `GET /api/v1/facts`
#[derive(Debug, Serialize)]
pub struct FactsResponse {
    pub facts: Vec<FactRecord>,
    pub stats: FactsStats,
}

/// One entry of the category facet listing
#[derive(Debug, Clone, Serialize)]
pub struct CategoryFacet {
    pub key: String,
    pub label: String,
    pub count: usize,
}
