//! Facts handlers

use axum::extract::{Query, State};
use axum::Json;
use domain_facts::{FactRepository, FactSearchParams};

use crate::dto::facts::{CategoryFacet, FactsQueryParams, FactsResponse, FactsStats};
use crate::{error::ApiError, AppState};

/// Searches the facts collection
///
/// Unknown category or severity values yield an empty result set; the only
/// error surface is the backing store itself, reported as a 500 with an
/// opaque message.
pub async fn search_facts(
    State(state): State<AppState>,
    Query(params): Query<FactsQueryParams>,
) -> Result<Json<FactsResponse>, ApiError> {
    let search: FactSearchParams = params.into();

    let facts = state.store.search(&search).await?;
    let stats = state.store.stats().await?;

    let filtered = facts.len() as u64;
    Ok(Json(FactsResponse {
        facts,
        stats: FactsStats::new(stats, filtered),
    }))
}

/// Lists the category facets of the static catalog
pub async fn list_categories() -> Json<Vec<CategoryFacet>> {
    let repo = FactRepository::new();
    let facets = repo
        .groups()
        .iter()
        .map(|group| CategoryFacet {
            key: group.category.key().to_string(),
            label: group.label.clone(),
            count: group.len(),
        })
        .collect();

    Json(facets)
}
