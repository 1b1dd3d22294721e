//! The premium estimation formula
//!
//! All arithmetic uses `Decimal` so the factors combine exactly; the final
//! amount is rounded half-up to a whole rupee. The formula is total over its
//! inputs and performs no validation - input domains (age 18 to 100, a fixed
//! sum-assured menu) are enforced at the API boundary, not here. In
//! particular there is no floor under the age factor: an age below 18 yields
//! a factor below one, exactly as the formula states.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Product line being quoted
///
/// The parse boundary is permissive: unrecognized keys fall back to the
/// default line, whose base rate matches the fallback rate of the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductLine {
    #[default]
    Life,
    Health,
    Vehicle,
}

impl ProductLine {
    /// Returns the wire key for this product line
    pub fn key(&self) -> &'static str {
        match self {
            ProductLine::Life => "Life",
            ProductLine::Health => "Health",
            ProductLine::Vehicle => "Vehicle",
        }
    }

    /// Parses a wire key, `None` for unrecognized values
    pub fn parse(key: &str) -> Option<ProductLine> {
        match key {
            "Life" => Some(ProductLine::Life),
            "Health" => Some(ProductLine::Health),
            "Vehicle" => Some(ProductLine::Vehicle),
            _ => None,
        }
    }

    /// Annual base rate in rupees for this product line
    pub fn base_rate(&self) -> Decimal {
        match self {
            ProductLine::Life => dec!(2000),
            ProductLine::Health => dec!(5000),
            ProductLine::Vehicle => dec!(3000),
        }
    }
}

/// Applicant gender as collected by the calculator form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Gender {
    /// Parses a wire key, `None` for unrecognized values
    pub fn parse(key: &str) -> Option<Gender> {
        match key {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            "Other" => Some(Gender::Other),
            _ => None,
        }
    }

    /// Rating factor: a ten percent discount for female applicants
    pub fn factor(&self) -> Decimal {
        match self {
            Gender::Female => dec!(0.9),
            _ => dec!(1.0),
        }
    }
}

/// Inputs to a premium estimate
///
/// `sum_assured` is in whole rupees. Transient value object; constructed
/// fresh per calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteInput {
    pub age: u8,
    pub product: ProductLine,
    pub sum_assured: u64,
    pub gender: Gender,
}

/// Age loading: two percent per year above the floor age of 18
pub fn age_factor(age: u8) -> Decimal {
    dec!(1) + (Decimal::from(age) - dec!(18)) * dec!(0.02)
}

/// Sum-assured loading: half a unit per lakh of cover
pub fn sum_factor(sum_assured: u64) -> Decimal {
    Decimal::from(sum_assured) / dec!(100000) * dec!(0.5)
}

/// Computes the indicative annual premium in whole rupees
///
/// `premium = round(base_rate x age_factor x gender_factor
/// + sum_factor x 100)`, rounded half-up. Identical inputs always produce
/// the identical integer.
pub fn estimate(input: &QuoteInput) -> u64 {
    let amount = input.product.base_rate() * age_factor(input.age) * input.gender.factor()
        + sum_factor(input.sum_assured) * dec!(100);

    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0)
}
