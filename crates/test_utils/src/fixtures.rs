//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities. Fixtures are consistent and
//! predictable so assertions can reference exact values.

use core_kernel::{Category, Severity};
use domain_facts::{FactQuery, HiddenFact};
use domain_rating::{Gender, ProductLine, QuoteInput};

/// Fixture for filter query test data
pub struct QueryFixtures;

impl QueryFixtures {
    /// The identity query: matches the whole catalog
    pub fn empty() -> FactQuery {
        FactQuery::all()
    }

    /// Critical health facts
    pub fn critical_health() -> FactQuery {
        FactQuery::all()
            .with_category(Category::Health)
            .with_severity(Severity::Critical)
    }

    /// A free-text query known to hit the catalog
    pub fn room_rent_search() -> FactQuery {
        FactQuery::all().with_search("room rent")
    }

    /// A free-text query that matches nothing
    pub fn no_match_search() -> FactQuery {
        FactQuery::all().with_search("phrase that appears nowhere xyzzy")
    }
}

/// Fixture for quote input test data
pub struct QuoteFixtures;

impl QuoteFixtures {
    /// The reference quote: 25-year-old male, Life, 50 lakh (premium 4780)
    pub fn reference_male() -> QuoteInput {
        QuoteInput {
            age: 25,
            product: ProductLine::Life,
            sum_assured: 5_000_000,
            gender: Gender::Male,
        }
    }

    /// The reference quote for a female applicant (premium 4552)
    pub fn reference_female() -> QuoteInput {
        QuoteInput {
            gender: Gender::Female,
            ..Self::reference_male()
        }
    }

    /// A quote at the age floor with no age loading
    pub fn at_floor_age() -> QuoteInput {
        QuoteInput {
            age: 18,
            product: ProductLine::Vehicle,
            sum_assured: 800_000,
            gender: Gender::Other,
        }
    }
}

/// Fixture for standalone hidden facts, independent of the catalog
pub struct FactFixtures;

impl FactFixtures {
    /// A critical health fact mentioning room rent
    pub fn room_rent() -> HiddenFact {
        HiddenFact {
            id: "fixture-health-1".to_string(),
            category: Category::Health,
            title: "Room rent caps shrink the whole claim".to_string(),
            severity: Severity::Critical,
            description: "Proportionate deductions apply to every line item.".to_string(),
            affected_policies: vec!["Mediclaim".to_string()],
            what_to_check: "Room rent limit as a percentage of sum insured".to_string(),
            real_case: "A payout dropped by twenty-eight percent.".to_string(),
            example: Some("A six thousand rupee room halves the bill.".to_string()),
        }
    }

    /// A low-severity motor fact with no example
    pub fn depreciation() -> HiddenFact {
        HiddenFact {
            id: "fixture-motor-1".to_string(),
            category: Category::Motor,
            title: "Depreciation reduces part payouts".to_string(),
            severity: Severity::Low,
            description: "Fifty percent on rubber and plastic parts.".to_string(),
            affected_policies: vec!["Comprehensive Car".to_string()],
            what_to_check: "Whether a zero-depreciation rider is in force".to_string(),
            real_case: "A bumper claim settled below the garage bill.".to_string(),
            example: None,
        }
    }
}
