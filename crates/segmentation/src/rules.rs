//! Built-in rule tables for the restaurant and supermarket showcases.

use insights_core::types::{attributes, AreaOfInterest, MealPreference, VisitTime};
use insights_core::{Domain, InsightsResult};

use crate::builder::RuleBuilder;
use crate::engine::RuleSet;

pub const LOYAL_LOCAL_LUNCH_GOERS: &str = "Loyal Local Lunch Goers";
pub const CONTINENTAL_DINNER_ENTHUSIASTS: &str = "Continental Dinner Enthusiasts";
pub const REGULAR_BREAKFAST_CROWD: &str = "Regular Breakfast Crowd";
pub const GENERAL_PATRONS: &str = "General Patrons";

pub const REGULAR_GROCERY_SHOPPERS: &str = "Regular Grocery Shoppers";
pub const ELECTRONICS_ENTHUSIASTS: &str = "Electronics Enthusiasts";
pub const QUICK_SNACK_BUYERS: &str = "Quick Snack Buyers";
pub const GENERAL_SHOPPERS: &str = "General Shoppers";

pub fn restaurant_rules() -> InsightsResult<RuleSet> {
    RuleSet::new(
        Domain::Restaurant,
        vec![
            RuleBuilder::new(LOYAL_LOCAL_LUNCH_GOERS)
                .description("Frequent lunch visitors who order local dishes")
                .attribute_equals(attributes::FREQUENT_VISITOR, true)
                .attribute_equals(attributes::TIME_OF_VISIT, VisitTime::Lunch.as_str())
                .attribute_in(
                    attributes::MEAL_PREFERENCE,
                    [MealPreference::Local.as_str(), MealPreference::Both.as_str()],
                )
                .build(),
            RuleBuilder::new(CONTINENTAL_DINNER_ENTHUSIASTS)
                .description("Dinner visitors with a taste for continental dishes")
                .attribute_equals(attributes::TIME_OF_VISIT, VisitTime::Dinner.as_str())
                .attribute_in(
                    attributes::MEAL_PREFERENCE,
                    [MealPreference::Continental.as_str(), MealPreference::Both.as_str()],
                )
                .build(),
            RuleBuilder::new(REGULAR_BREAKFAST_CROWD)
                .description("Frequent breakfast visitors")
                .attribute_equals(attributes::TIME_OF_VISIT, VisitTime::Breakfast.as_str())
                .attribute_equals(attributes::FREQUENT_VISITOR, true)
                .build(),
        ],
        GENERAL_PATRONS,
    )
}

pub fn supermarket_rules() -> InsightsResult<RuleSet> {
    RuleSet::new(
        Domain::Supermarket,
        vec![
            RuleBuilder::new(REGULAR_GROCERY_SHOPPERS)
                .description("Frequent shoppers in groceries or produce")
                .attribute_equals(attributes::FREQUENT_VISITOR, true)
                .attribute_in(
                    attributes::AREA_OF_INTEREST,
                    [AreaOfInterest::Groceries.as_str(), AreaOfInterest::Produce.as_str()],
                )
                .build(),
            RuleBuilder::new(ELECTRONICS_ENTHUSIASTS)
                .description("Electronics browsers staying over half an hour")
                .attribute_equals(attributes::AREA_OF_INTEREST, AreaOfInterest::Electronics.as_str())
                .attribute_gt(attributes::DURATION_MINUTES, 30)
                .build(),
            RuleBuilder::new(QUICK_SNACK_BUYERS)
                .description("Short visits to the snack aisle")
                .attribute_equals(attributes::AREA_OF_INTEREST, AreaOfInterest::Snacks.as_str())
                .attribute_lt(attributes::DURATION_MINUTES, 20)
                .build(),
        ],
        GENERAL_SHOPPERS,
    )
}

pub fn rules_for(domain: Domain) -> InsightsResult<RuleSet> {
    match domain {
        Domain::Restaurant => restaurant_rules(),
        Domain::Supermarket => supermarket_rules(),
    }
}
