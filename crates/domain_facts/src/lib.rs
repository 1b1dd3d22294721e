//! Hidden Facts Domain
//!
//! This crate owns the "hidden facts" catalog - the exclusions and fine-print
//! items the comparison platform surfaces to end users - and the logic that
//! serves it:
//!
//! - **Value Objects**: `HiddenFact`, `CategoryGroup`
//! - **Catalog**: a compiled-in, immutable reference dataset, loaded once
//! - **Repository**: flattening and permissive category/severity lookups
//! - **Filter Engine**: conjunctive category/severity/free-text filtering,
//!   order-preserving
//! - **Port**: the `FactStore` trait the HTTP layer consumes, with an
//!   in-process adapter serving the compiled-in catalog
//!
//! The catalog is a static reference dataset: there are no create, update,
//! or delete operations, so every computation here is a pure function over
//! immutable data.
//!
//! # Example
//!
//! ```rust
//! use domain_facts::{FactRepository, FactQuery, filter};
//! use core_kernel::Severity;
//!
//! let repo = FactRepository::new();
//! let facts = repo.all_facts();
//!
//! let query = FactQuery::all().with_severity(Severity::Critical);
//! let critical = filter(&facts, &query);
//! assert!(critical.iter().all(|f| f.severity == Severity::Critical));
//! ```

pub mod adapters;
pub mod catalog;
pub mod fact;
pub mod filter;
pub mod ports;
pub mod repository;

pub use adapters::CatalogFactStore;
pub use catalog::{catalog, Catalog};
pub use fact::{CategoryGroup, HiddenFact};
pub use filter::{filter, matches, CategoryFilter, FactQuery};
pub use ports::{CatalogStats, FactRecord, FactSearchParams, FactStore, StoreError};
pub use repository::FactRepository;
