//! Quote estimation DTOs

use domain_rating::{Gender, ProductLine, QuoteInput};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fixed disclaimer returned with every estimate
pub const ESTIMATE_DISCLAIMER: &str = "This is an indicative estimate for \
comparison purposes only, not a quotation. Actual premiums depend on the \
insurer's underwriting.";

/// Body of `POST /api/v1/quotes/estimate`
///
/// The form constrains these domains client-side; the same constraints are
/// enforced here because the formula itself performs no validation.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    #[validate(range(min = 18, max = 100, message = "age must be between 18 and 100"))]
    pub age: u8,
    pub insurance_type: String,
    #[validate(range(min = 1, message = "sum assured must be positive"))]
    pub sum_assured: u64,
    pub gender: String,
}

impl EstimateRequest {
    /// Maps the request onto typed estimator input
    ///
    /// Unrecognized product and gender strings degrade permissively to the
    /// enum defaults (Life base rate, unit gender factor) instead of
    /// erroring, matching the calculator's behavior.
    pub fn into_input(self) -> QuoteInput {
        QuoteInput {
            age: self.age,
            product: ProductLine::parse(&self.insurance_type).unwrap_or_default(),
            sum_assured: self.sum_assured,
            gender: Gender::parse(&self.gender).unwrap_or_default(),
        }
    }
}

/// Body of a successful estimate response
#[derive(Debug, Clone, Serialize)]
pub struct EstimateResponse {
    /// Indicative annual premium in whole rupees
    pub premium: u64,
    /// Fixed non-authoritative disclaimer
    pub disclaimer: &'static str,
}
