//! Static marketing suggestions keyed by segment label.

use std::collections::HashMap;

use serde::Serialize;

use insights_core::{Domain, InsightsError, InsightsResult};
use insights_segmentation::rules::*;
use insights_segmentation::RuleSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub suggestion: &'static str,
    pub example: &'static str,
}

/// Immutable label → suggestion table for one venue. Lookups are exact.
#[derive(Debug, Clone)]
pub struct SuggestionCatalog {
    domain: Domain,
    entries: HashMap<&'static str, Suggestion>,
}

impl SuggestionCatalog {
    fn from_entries(domain: Domain, entries: [(&'static str, &'static str, &'static str); 4]) -> Self {
        Self {
            domain,
            entries: entries
                .into_iter()
                .map(|(label, suggestion, example)| (label, Suggestion { suggestion, example }))
                .collect(),
        }
    }

    pub fn restaurant() -> Self {
        Self::from_entries(
            Domain::Restaurant,
            [
                (
                    LOYAL_LOCAL_LUNCH_GOERS,
                    "Offer a special discount on popular local dishes during lunchtime for frequent visitors.",
                    "Enjoy 15% off your favorite Nigerian dish this lunch!",
                ),
                (
                    CONTINENTAL_DINNER_ENTHUSIASTS,
                    "Promote new continental dishes or a special continental set menu for dinner.",
                    "Try our new Italian Platter this evening!",
                ),
                (
                    REGULAR_BREAKFAST_CROWD,
                    "Introduce a breakfast loyalty program or a new breakfast item.",
                    "Get a free coffee with your 5th breakfast order!",
                ),
                (
                    GENERAL_PATRONS,
                    "Target with general promotions or gather more preference data.",
                    "Welcome! Take our quick survey for a chance to win a free meal!",
                ),
            ],
        )
    }

    pub fn supermarket() -> Self {
        Self::from_entries(
            Domain::Supermarket,
            [
                (
                    REGULAR_GROCERY_SHOPPERS,
                    "Offer discounts on frequently purchased groceries or introduce a subscription box for essentials.",
                    "Save 10% on your usual grocery items this week!",
                ),
                (
                    ELECTRONICS_ENTHUSIASTS,
                    "Notify them about new electronics arrivals or special offers on gadgets.",
                    "Check out the latest smartphones in our electronics section!",
                ),
                (
                    QUICK_SNACK_BUYERS,
                    "Place promotional offers on snacks near the entrance or checkout.",
                    "Grab a discounted snack on your way out!",
                ),
                (
                    GENERAL_SHOPPERS,
                    "Broad promotions or encourage them to explore different sections.",
                    "Discover new products throughout the store this week!",
                ),
            ],
        )
    }

    pub fn for_domain(domain: Domain) -> Self {
        match domain {
            Domain::Restaurant => Self::restaurant(),
            Domain::Supermarket => Self::supermarket(),
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn lookup(&self, segment: &str) -> InsightsResult<&Suggestion> {
        self.entries
            .get(segment)
            .ok_or_else(|| InsightsError::UnknownSegment {
                domain: self.domain.to_string(),
                label: segment.to_string(),
            })
    }

    /// Fails on the first rule-set label without a suggestion.
    pub fn ensure_covers(&self, rules: &RuleSet) -> InsightsResult<()> {
        for label in rules.labels() {
            self.lookup(label)?;
        }
        Ok(())
    }
}
