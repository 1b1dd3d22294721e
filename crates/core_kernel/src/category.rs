//! Insurance line classification
//!
//! Every hidden fact belongs to exactly one insurance line. The wire keys
//! (`"life"`, `"personalAccident"`, ...) are shared with the web client and
//! the facts table, so they are part of the public contract.

use serde::{Deserialize, Serialize};

/// The insurance line a hidden fact belongs to
///
/// Variants are ordered the way the catalog presents them; this order is
/// relied upon when flattening the catalog into a single fact list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Life insurance (term, endowment, ULIP)
    Life,
    /// Health insurance and mediclaim
    Health,
    /// Motor insurance (car and two-wheeler)
    Motor,
    /// Travel insurance
    Travel,
    /// Home and contents insurance
    Home,
    /// Business and commercial lines
    Business,
    /// Specialized covers (cyber, pet, event)
    Specialized,
    /// Personal accident cover
    PersonalAccident,
}

impl Category {
    /// All categories in catalog presentation order
    pub const ALL: [Category; 8] = [
        Category::Life,
        Category::Health,
        Category::Motor,
        Category::Travel,
        Category::Home,
        Category::Business,
        Category::Specialized,
        Category::PersonalAccident,
    ];

    /// Returns the wire key for this category
    ///
    /// Keys match the serde representation and the values stored in the
    /// facts table.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Life => "life",
            Category::Health => "health",
            Category::Motor => "motor",
            Category::Travel => "travel",
            Category::Home => "home",
            Category::Business => "business",
            Category::Specialized => "specialized",
            Category::PersonalAccident => "personalAccident",
        }
    }

    /// Returns the display label for this category
    pub fn label(&self) -> &'static str {
        match self {
            Category::Life => "Life Insurance",
            Category::Health => "Health Insurance",
            Category::Motor => "Motor Insurance",
            Category::Travel => "Travel Insurance",
            Category::Home => "Home Insurance",
            Category::Business => "Business Insurance",
            Category::Specialized => "Specialized Insurance",
            Category::PersonalAccident => "Personal Accident",
        }
    }

    /// Parses a wire key into a category
    ///
    /// Returns `None` for unrecognized keys. Category keys arrive from UI
    /// state and URL parameters, so lookups against them stay permissive;
    /// callers decide whether an unknown key means "match nothing" or
    /// "no filter".
    pub fn parse(key: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.key() == key)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
