//! Database Infrastructure
//!
//! PostgreSQL access for the PolicyLens platform:
//! - Connection pool configuration and creation
//! - Embedded migrations for the `hidden_facts` table
//! - `PgFactStore`, the database-backed implementation of the
//!   `domain_facts::FactStore` port, including catalog seeding
//!
//! The database is optional at runtime: deployments without one serve the
//! compiled-in catalog through `domain_facts::CatalogFactStore` instead.

pub mod error;
pub mod facts_store;
pub mod pool;

pub use error::DatabaseError;
pub use facts_store::PgFactStore;
pub use pool::{create_pool, create_pool_from_url, run_migrations, DatabaseConfig, DatabasePool};
