//! Facts store port
//!
//! The HTTP layer consumes facts through the `FactStore` trait rather than a
//! concrete backend, so the same routes can serve the compiled-in catalog or
//! a relational store. Adapters:
//!
//! - `CatalogFactStore` (this crate) - in-process, serves the static catalog
//! - `PgFactStore` (`infra_db`) - executes the filter in PostgreSQL
//!
//! Search parameters are raw strings on purpose: they come straight from
//! query parameters, and the permissive-lookup policy applies - an unknown
//! category or severity value matches nothing rather than failing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fact::HiddenFact;

/// Raw search parameters as received at the API boundary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactSearchParams {
    /// Category key; absent or `"all"` means no category filter
    pub category: Option<String>,
    /// Severity key; absent means no severity filter
    pub severity: Option<String>,
    /// Free-text search; absent or blank means no text filter
    pub search: Option<String>,
}

impl FactSearchParams {
    /// The effective category constraint, `None` when unfiltered
    pub fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != "all")
    }

    /// The effective severity constraint, `None` when unfiltered
    pub fn severity_filter(&self) -> Option<&str> {
        self.severity.as_deref().filter(|s| !s.is_empty())
    }

    /// The trimmed, lower-cased search term, `None` when blank
    pub fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}

/// A stored fact together with its creation timestamp
///
/// The facts endpoint orders results by ascending severity rank, then
/// descending `created_at`; the timestamp is the tiebreaker adapters must
/// supply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactRecord {
    #[serde(flatten)]
    pub fact: HiddenFact,
    pub created_at: DateTime<Utc>,
}

/// Aggregate counters for the stats block of the facts endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Total facts in the store
    pub total: u64,
    /// Facts graded critical
    pub critical: u64,
    /// Distinct categories present
    pub categories: u64,
}

/// Errors surfaced by fact store adapters
///
/// The filter computation itself cannot fail; these arise only from the
/// backing infrastructure of a particular adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection to the backing store failed
    #[error("Connection error: {0}")]
    Connection(String),

    /// A query against the backing store failed
    #[error("Query failed: {0}")]
    Query(String),

    /// A stored row could not be converted into a fact record
    #[error("Transformation error: {0}")]
    Transformation(String),

    /// An unexpected internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StoreError {
    pub fn connection(message: impl Into<String>) -> Self {
        StoreError::Connection(message.into())
    }

    pub fn query(message: impl Into<String>) -> Self {
        StoreError::Query(message.into())
    }

    pub fn transformation(message: impl Into<String>) -> Self {
        StoreError::Transformation(message.into())
    }
}

/// Port for searching the facts collection
///
/// Implementations must honor the ordering contract (severity rank
/// ascending, then creation time descending) and the permissive parameter
/// semantics of `FactSearchParams`.
#[async_trait]
pub trait FactStore: Send + Sync {
    /// Returns the facts matching `params`, ordered per the port contract
    async fn search(&self, params: &FactSearchParams) -> Result<Vec<FactRecord>, StoreError>;

    /// Returns aggregate counters over the whole store
    async fn stats(&self) -> Result<CatalogStats, StoreError>;

    /// Verifies the backing store is reachable
    async fn health_check(&self) -> Result<(), StoreError>;
}
