//! Premium Rating Domain
//!
//! Computes the indicative annual premium shown by the comparison
//! platform's calculator. The estimate is explicitly non-authoritative:
//! a deterministic formula over a fixed base-rate table, not an
//! underwriting decision.
//!
//! # Example
//!
//! ```rust
//! use domain_rating::{estimate, Gender, ProductLine, QuoteInput};
//!
//! let input = QuoteInput {
//!     age: 25,
//!     product: ProductLine::Life,
//!     sum_assured: 5_000_000,
//!     gender: Gender::Male,
//! };
//! assert_eq!(estimate(&input), 4780);
//! ```

pub mod estimator;

pub use estimator::{age_factor, estimate, sum_factor, Gender, ProductLine, QuoteInput};
