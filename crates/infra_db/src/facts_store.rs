//! Database-backed fact store
//!
//! `PgFactStore` implements the `domain_facts::FactStore` port against the
//! `hidden_facts` table: the category/severity/search predicates are pushed
//! down into SQL, with the same permissive semantics as the in-memory filter
//! engine (unknown filter values simply match no rows).
//!
//! The filter is dynamic, so queries are assembled with `QueryBuilder` at
//! runtime rather than the compile-time checked macros.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, QueryBuilder};
use tracing::{debug, warn};

use core_kernel::{Category, Severity};
use domain_facts::{
    CatalogStats, FactRecord, FactRepository, FactSearchParams, FactStore, HiddenFact, StoreError,
};

use crate::error::DatabaseError;

/// Severity ordering expression: most urgent first, unknown grades last
const SEVERITY_RANK_SQL: &str = "CASE severity \
     WHEN 'critical' THEN 0 \
     WHEN 'high' THEN 1 \
     WHEN 'medium' THEN 2 \
     WHEN 'low' THEN 3 \
     ELSE 4 END";

/// Fact store backed by the `hidden_facts` table
///
/// # Example
///
/// ```rust,ignore
/// use infra_db::PgFactStore;
///
/// let store = PgFactStore::new(pool);
/// store.seed_from_catalog().await?;
/// let records = store.search(&params).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PgFactStore {
    pool: PgPool,
}

/// Raw row shape of the `hidden_facts` table
#[derive(Debug, sqlx::FromRow)]
struct FactRow {
    id: String,
    category: String,
    title: String,
    severity: String,
    description: String,
    affected_policies: Vec<String>,
    what_to_check: String,
    real_case: String,
    example: Option<String>,
    created_at: DateTime<Utc>,
}

impl FactRow {
    /// Converts a table row into a typed fact record
    ///
    /// Fails when the stored category or severity key is outside the known
    /// vocabulary; callers decide how to degrade.
    fn into_record(self) -> Result<FactRecord, StoreError> {
        let category = Category::parse(&self.category).ok_or_else(|| {
            StoreError::transformation(format!(
                "fact {} has unknown category '{}'",
                self.id, self.category
            ))
        })?;
        let severity = Severity::parse(&self.severity).ok_or_else(|| {
            StoreError::transformation(format!(
                "fact {} has unknown severity '{}'",
                self.id, self.severity
            ))
        })?;

        Ok(FactRecord {
            fact: HiddenFact {
                id: self.id,
                category,
                title: self.title,
                severity,
                description: self.description,
                affected_policies: self.affected_policies,
                what_to_check: self.what_to_check,
                real_case: self.real_case,
                example: self.example,
            },
            created_at: self.created_at,
        })
    }
}

impl PgFactStore {
    /// Creates a store over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts the compiled-in catalog into the table
    ///
    /// Facts already present (by id) are left untouched, so re-seeding on
    /// startup is idempotent. Rows are inserted in catalog declaration
    /// order; their insertion timestamps preserve that order for the
    /// newest-first tiebreak of the search ordering.
    ///
    /// # Returns
    ///
    /// The number of newly inserted facts.
    pub async fn seed_from_catalog(&self) -> Result<u64, DatabaseError> {
        let facts = FactRepository::new().all_facts();
        let mut inserted = 0;

        for fact in facts {
            let result = sqlx::query(
                "INSERT INTO hidden_facts \
                 (id, category, title, severity, description, affected_policies, \
                  what_to_check, real_case, example) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
                 ON CONFLICT (id) DO NOTHING",
            )
            .bind(&fact.id)
            .bind(fact.category.key())
            .bind(&fact.title)
            .bind(fact.severity.key())
            .bind(&fact.description)
            .bind(&fact.affected_policies)
            .bind(&fact.what_to_check)
            .bind(&fact.real_case)
            .bind(&fact.example)
            .execute(&self.pool)
            .await?;

            inserted += result.rows_affected();
        }

        debug!(inserted, "Catalog seed complete");
        Ok(inserted)
    }

    async fn fetch_rows(&self, params: &FactSearchParams) -> Result<Vec<FactRow>, DatabaseError> {
        let mut builder: QueryBuilder<sqlx::Postgres> = QueryBuilder::new(
            "SELECT id, category, title, severity, description, affected_policies, \
             what_to_check, real_case, example, created_at \
             FROM hidden_facts WHERE 1 = 1",
        );

        if let Some(category) = params.category_filter() {
            builder.push(" AND category = ");
            builder.push_bind(category.to_string());
        }
        if let Some(severity) = params.severity_filter() {
            builder.push(" AND severity = ");
            builder.push_bind(severity.to_string());
        }
        if let Some(term) = params.search_term() {
            let pattern = format!("%{term}%");
            builder.push(" AND (title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR description ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR what_to_check ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR real_case ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        builder.push(" ORDER BY ");
        builder.push(SEVERITY_RANK_SQL);
        builder.push(", created_at DESC");

        let rows = builder
            .build_query_as::<FactRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}

impl From<DatabaseError> for StoreError {
    fn from(error: DatabaseError) -> Self {
        if error.is_connection_error() {
            StoreError::connection(error.to_string())
        } else {
            StoreError::query(error.to_string())
        }
    }
}

#[async_trait]
impl FactStore for PgFactStore {
    async fn search(&self, params: &FactSearchParams) -> Result<Vec<FactRecord>, StoreError> {
        let rows = self.fetch_rows(params).await?;

        // Rows with vocabulary outside this build are skipped, not fatal;
        // the seeded catalog cannot produce them.
        let records = rows
            .into_iter()
            .filter_map(|row| match row.into_record() {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(error = %err, "Skipping unconvertible fact row");
                    None
                }
            })
            .collect();

        Ok(records)
    }

    async fn stats(&self) -> Result<CatalogStats, StoreError> {
        let (total, critical, categories): (i64, i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), \
             COUNT(*) FILTER (WHERE severity = 'critical'), \
             COUNT(DISTINCT category) \
             FROM hidden_facts",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(CatalogStats {
            total: total.max(0) as u64,
            critical: critical.max(0) as u64,
            categories: categories.max(0) as u64,
        })
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_: sqlx::postgres::PgRow| ())
            .map_err(|e| StoreError::connection(e.to_string()))
    }
}
