//! The static hidden-facts catalog
//!
//! The catalog is authored data compiled into the binary: a fixed sequence of
//! category groups, each holding its facts in presentation order. It is built
//! once on first access and never mutated, so callers may hold references for
//! the lifetime of the process without synchronization.

use core_kernel::{Category, Severity};
use once_cell::sync::Lazy;

use crate::fact::{CategoryGroup, HiddenFact};

/// The full catalog of hidden facts
///
/// Group order and fact order within each group are part of the contract:
/// `FactRepository::all_facts` flattens in exactly this order.
#[derive(Debug)]
pub struct Catalog {
    groups: Vec<CategoryGroup>,
}

impl Catalog {
    /// All groups in declaration order
    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    /// Looks up the group for a category, if the catalog declares one
    pub fn group(&self, category: Category) -> Option<&CategoryGroup> {
        self.groups.iter().find(|g| g.category == category)
    }

    /// Total number of facts across all groups
    pub fn total_facts(&self) -> usize {
        self.groups.iter().map(|g| g.facts.len()).sum()
    }
}

/// Returns the process-wide catalog instance
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

static CATALOG: Lazy<Catalog> = Lazy::new(build_catalog);

/// Builds one fact, stamping the owning group's category
#[allow(clippy::too_many_arguments)]
fn fact(
    category: Category,
    id: &str,
    severity: Severity,
    title: &str,
    description: &str,
    affected_policies: &[&str],
    what_to_check: &str,
    real_case: &str,
    example: Option<&str>,
) -> HiddenFact {
    HiddenFact {
        id: id.to_string(),
        category,
        title: title.to_string(),
        severity,
        description: description.to_string(),
        affected_policies: affected_policies.iter().map(|p| p.to_string()).collect(),
        what_to_check: what_to_check.to_string(),
        real_case: real_case.to_string(),
        example: example.map(|e| e.to_string()),
    }
}

fn group(category: Category, facts: Vec<HiddenFact>) -> CategoryGroup {
    CategoryGroup {
        category,
        label: category.label().to_string(),
        facts,
    }
}

fn build_catalog() -> Catalog {
    let life = Category::Life;
    let health = Category::Health;
    let motor = Category::Motor;
    let travel = Category::Travel;
    let home = Category::Home;
    let business = Category::Business;
    let specialized = Category::Specialized;
    let pa = Category::PersonalAccident;

    let groups = vec![
        group(life, vec![
            fact(
                life,
                "life-1",
                Severity::Critical,
                "Suicide exclusion applies for the first policy year",
                "If death occurs by suicide within twelve months of issue, the nominee \
                 receives only a refund of premiums paid, not the sum assured. Reviving \
                 a lapsed policy restarts the twelve-month clock from the revival date.",
                &["Term Life", "Endowment", "ULIP"],
                "The exclusions section for the suicide clause period, and whether \
                 revival or reinstatement resets it",
                "A family's claim on a one crore term policy was settled at a premium \
                 refund of forty-eight thousand rupees because death occurred ten months \
                 after the policy was revived from a lapse.",
                Some(
                    "A policy issued in March and revived the following June after a \
                     missed premium is treated as twelve months from June, not March.",
                ),
            ),
            fact(
                life,
                "life-2",
                Severity::High,
                "Tobacco non-disclosure can void the policy years later",
                "Declaring yourself a non-smoker when you use any tobacco product is a \
                 material misstatement. Insurers can reject a death claim on this ground \
                 even when the cause of death is unrelated to tobacco.",
                &["Term Life"],
                "The proposal form's tobacco questions and how the insurer defines a \
                 tobacco user - many count occasional use within the last three years",
                "A claim was repudiated after the insurer found a pre-policy hospital \
                 record noting the insured chewed tobacco, although death was due to a \
                 road accident.",
                None,
            ),
        ]),
        group(health, vec![
            fact(
                health,
                "health-1",
                Severity::Critical,
                "Room rent caps shrink the whole claim, not just the room bill",
                "When you occupy a room costlier than your room rent limit, the insurer \
                 applies a proportionate deduction to every associated charge - surgeon \
                 fees, nursing, diagnostics - not merely the excess room rent.",
                &["Mediclaim", "Family Floater"],
                "The room rent limit expressed as a percentage of sum insured, and \
                 whether the policy wording mentions proportionate or ratable deduction",
                "Choosing a room two thousand rupees above the cap reduced a three point \
                 four lakh hospitalization payout by twenty-eight percent.",
                Some(
                    "On a three lakh sum insured with a one percent cap, the eligible \
                     room rate is three thousand rupees a day; a six thousand rupee room \
                     halves every line item of the bill.",
                ),
            ),
            fact(
                health,
                "health-2",
                Severity::High,
                "Porting carries waiting-period credit only for the old sum insured",
                "When you port to a new insurer, continuity credit for pre-existing \
                 disease waiting periods applies only up to your previous sum insured. \
                 Any enhanced portion starts its waiting period from zero.",
                &["Mediclaim", "Family Floater"],
                "The portability schedule in the new policy showing which waiting \
                 periods carry over and to what amount",
                "A policyholder who ported from a five lakh to a ten lakh cover had a \
                 diabetes-related claim paid only up to five lakh because the \
                 enhancement was still inside its waiting period.",
                None,
            ),
            fact(
                health,
                "health-3",
                Severity::Medium,
                "Consumables are quietly deducted as non-payables",
                "Items such as gloves, syringes, PPE kits, and admission charges fall \
                 under a standard non-payables list and are struck off the claim unless \
                 a consumables rider is in force.",
                &["Mediclaim", "Family Floater", "Top-up"],
                "Whether the policy offers a consumables cover rider and the insurer's \
                 list of non-payable items",
                "Non-payable deductions averaged four to eight percent of hospital \
                 bills in claims reviewed during the pandemic period.",
                None,
            ),
        ]),
        group(motor, vec![
            fact(
                motor,
                "motor-1",
                Severity::High,
                "Depreciation turns a full repair bill into a partial payout",
                "Standard comprehensive policies deduct depreciation on every replaced \
                 part - fifty percent on rubber, plastic, and nylon parts regardless of \
                 vehicle age - so the settlement is always below the garage bill unless \
                 a zero-depreciation rider is active.",
                &["Comprehensive Car", "Two-Wheeler"],
                "Whether a zero-depreciation rider is in force and the number of \
                 zero-dep claims allowed per policy year",
                "A bumper and headlamp replacement billed at sixty-two thousand rupees \
                 settled at thirty-nine thousand after depreciation on plastic parts.",
                Some(
                    "Plastic bumper worth ten thousand rupees: standard policy pays \
                     five thousand; zero-dep pays the full ten thousand.",
                ),
            ),
            fact(
                motor,
                "motor-2",
                Severity::Critical,
                "A licence class mismatch voids the claim entirely",
                "If the driver at the time of the accident holds a licence that does \
                 not cover the vehicle class - for example a light motor vehicle \
                 licence on a commercial vehicle - the insurer can repudiate both own \
                 damage and theft claims.",
                &["Comprehensive Car", "Third Party", "Commercial Vehicle"],
                "That every regular driver of the vehicle holds a valid licence for \
                 that exact vehicle class and transmission type where applicable",
                "A total loss claim after a highway accident was rejected because the \
                 driver's licence had expired eleven days earlier.",
                None,
            ),
        ]),
        group(travel, vec![
            fact(
                travel,
                "travel-1",
                Severity::High,
                "Adventure activities are excluded unless bought as an add-on",
                "Injuries during paragliding, scuba diving, trekking above a stated \
                 altitude, or skiing fall outside base travel policies; the adventure \
                 sports add-on must be purchased before departure.",
                &["International Travel", "Domestic Travel"],
                "The hazardous activities list and the altitude or depth limits \
                 attached to each activity",
                "A trekker airlifted in Nepal paid the full eight lakh evacuation cost \
                 because the route crossed the policy's four-thousand-meter limit.",
                None,
            ),
            fact(
                travel,
                "travel-2",
                Severity::Medium,
                "Baggage and theft claims need a police report within 24 hours",
                "Most policies require a local police report or airline property \
                 irregularity report filed within twenty-four hours of discovering a \
                 loss; late reporting is a standard ground for rejection.",
                &["International Travel"],
                "The claim intimation window for each benefit - baggage, passport \
                 loss, and theft often have different deadlines",
                "A stolen-camera claim was declined because the report was filed two \
                 days later, after the traveler returned from an island excursion.",
                None,
            ),
        ]),
        group(home, vec![
            fact(
                home,
                "home-1",
                Severity::High,
                "Underinsurance triggers the average clause on every claim",
                "If your declared sum insured is below the actual rebuilding or \
                 replacement value, the insurer pays claims in the same proportion - \
                 insuring at half the value means every claim pays half.",
                &["Home Structure", "Home Contents"],
                "Whether the sum insured reflects current reconstruction cost per \
                 square foot rather than the property's market price",
                "A kitchen fire claim of four lakh settled at two point four lakh \
                 because the house was insured for sixty percent of its rebuild value.",
                Some(
                    "Rebuild value fifty lakh, insured for twenty-five lakh: a ten \
                     lakh loss pays only five lakh under the average clause.",
                ),
            ),
            fact(
                home,
                "home-2",
                Severity::Medium,
                "Jewellery and valuables sit under tight sub-limits",
                "Contents policies cap payouts for jewellery, watches, and artwork at \
                 a small fraction of the contents sum insured unless items are \
                 individually declared and valued.",
                &["Home Contents"],
                "The valuables sub-limit and the per-item declaration threshold",
                "A burglary claim listing three lakh of jewellery settled at fifty \
                 thousand, the policy's undeclared-valuables ceiling.",
                None,
            ),
        ]),
        group(business, vec![
            fact(
                business,
                "business-1",
                Severity::Critical,
                "Business interruption pays only after material damage is admitted",
                "Loss-of-profit cover responds only when an admitted physical damage \
                 claim under the linked fire policy exists. Supply chain failures, \
                 power outages, or epidemics without physical damage pay nothing.",
                &["Business Interruption", "Fire and Special Perils"],
                "The material damage proviso and which policy must respond first for \
                 interruption benefits to trigger",
                "A factory idled for six weeks by a neighbor's fire recovered nothing \
                 because its own premises suffered no physical damage.",
                None,
            ),
            fact(
                business,
                "business-2",
                Severity::High,
                "Leaving premises unoccupied suspends burglary cover",
                "Burglary and housebreaking sections typically lapse automatically if \
                 the insured premises remain unoccupied beyond thirty consecutive \
                 days, unless the insurer agreed to an extension in writing.",
                &["Burglary", "Shopkeeper Package"],
                "The unoccupancy clause duration and the notification procedure for \
                 planned closures",
                "A warehouse break-in during a forty-day seasonal shutdown was not \
                 covered; the unoccupancy clause had lapsed the burglary section.",
                None,
            ),
        ]),
        group(specialized, vec![
            fact(
                specialized,
                "specialized-1",
                Severity::High,
                "Cyber policies sub-limit social engineering fraud",
                "Funds transferred because an employee was deceived - fake vendor \
                 emails, spoofed executive instructions - fall under a social \
                 engineering sub-limit that is often a tenth of the headline cyber \
                 sum insured.",
                &["Cyber Liability", "Crime"],
                "The social engineering and funds transfer fraud sub-limits, and any \
                 callback verification conditions attached to them",
                "A firm with a five crore cyber policy recovered only fifty lakh of a \
                 two crore loss to a spoofed supplier invoice.",
                None,
            ),
            fact(
                specialized,
                "specialized-2",
                Severity::Medium,
                "Pet insurance excludes breed-specific hereditary conditions",
                "Conditions a breed is predisposed to - hip dysplasia in German \
                 Shepherds, brachycephalic airway issues in Pugs - are commonly \
                 excluded or heavily sub-limited.",
                &["Pet Insurance"],
                "The hereditary and congenital conditions clause for your specific \
                 breed before relying on the cover",
                "Surgery for a Labrador's hip dysplasia was declined as a hereditary \
                 condition listed in the breed exclusion annexure.",
                None,
            ),
        ]),
        group(pa, vec![
            fact(
                pa,
                "pa-1",
                Severity::Critical,
                "Total disablement has a narrow, policy-defined meaning",
                "Permanent total disablement usually means loss of both limbs, both \
                 eyes, or one of each - being unable to continue your own occupation \
                 does not qualify unless the policy says so explicitly.",
                &["Personal Accident"],
                "The definition table of disablement benefits and whether own \
                 occupation cover is included",
                "A surgeon who lost fine motor function in one hand received the \
                 partial disablement percentage, a fraction of the full sum insured, \
                 although the injury ended her career.",
                None,
            ),
            fact(
                pa,
                "pa-2",
                Severity::High,
                "Weekly benefits depend on documented income, not actual loss",
                "Temporary total disablement pays a weekly amount capped at a \
                 percentage of documented earnings; self-employed policyholders \
                 without income proof are settled at the policy's minimum slab.",
                &["Personal Accident"],
                "The income documentation the insurer accepts and the weekly benefit \
                 cap formula",
                "A shop owner recovering from a fracture for twelve weeks received \
                 the minimum weekly slab because bank statements alone were not \
                 accepted as income proof.",
                None,
            ),
        ]),
    ];

    Catalog { groups }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_builds_once() {
        let first = catalog();
        let second = catalog();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_every_category_has_a_group() {
        for category in Category::ALL {
            assert!(
                catalog().group(category).is_some(),
                "missing group for {}",
                category.key()
            );
        }
    }

    #[test]
    fn test_group_category_matches_facts() {
        for group in catalog().groups() {
            for fact in &group.facts {
                assert_eq!(
                    fact.category,
                    group.category,
                    "fact {} is filed under the wrong group",
                    fact.id
                );
            }
        }
    }

    #[test]
    fn test_fact_ids_are_unique() {
        let mut ids: Vec<&str> = catalog()
            .groups()
            .iter()
            .flat_map(|g| g.facts.iter().map(|f| f.id.as_str()))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total, "duplicate fact ids in catalog");
    }
}
