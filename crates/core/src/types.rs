//! Visitor records produced by the synthetic generator, one variant per venue.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::InsightsError;

/// Attribute keys exposed to segment predicates.
pub mod attributes {
    pub const VISITOR_ID: &str = "visitor_id";
    pub const ARRIVAL_TIME: &str = "arrival_time";
    pub const DURATION_MINUTES: &str = "duration_minutes";
    pub const FREQUENT_VISITOR: &str = "frequent_visitor";
    pub const MEAL_PREFERENCE: &str = "meal_preference";
    pub const TIME_OF_VISIT: &str = "time_of_visit";
    pub const AREA_OF_INTEREST: &str = "area_of_interest";
}

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ─── Domain ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Restaurant,
    Supermarket,
}

impl Domain {
    pub const ALL: [Domain; 2] = [Domain::Restaurant, Domain::Supermarket];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Restaurant => "restaurant",
            Domain::Supermarket => "supermarket",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Domain::Restaurant => "Restaurant",
            Domain::Supermarket => "Supermarket",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "restaurant" => Ok(Domain::Restaurant),
            "supermarket" => Ok(Domain::Supermarket),
            _ => Err(InsightsError::InvalidValue {
                kind: "domain",
                value: s.to_string(),
            }),
        }
    }
}

// ─── Categorical attributes ─────────────────────────────────────────────────

macro_rules! categorical {
    ($(#[$meta:meta])* $name:ident, $kind:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = InsightsError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| InsightsError::InvalidValue {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

categorical!(
    /// Cuisine a restaurant visitor tends to order.
    MealPreference, "meal preference", {
        Local => "Local",
        Continental => "Continental",
        Both => "Both",
    }
);

categorical!(
    /// Meal period of a restaurant visit.
    VisitTime, "time of visit", {
        Lunch => "Lunch",
        Dinner => "Dinner",
        Breakfast => "Breakfast",
    }
);

categorical!(
    /// Store section where a supermarket visitor dwelt the longest.
    AreaOfInterest, "area of interest", {
        Produce => "Produce",
        Groceries => "Groceries",
        Electronics => "Electronics",
        HomeGoods => "Home Goods",
        Snacks => "Snacks",
    }
);

// ─── Records ────────────────────────────────────────────────────────────────

/// Common view over a visitor record, used by the classifier and the
/// tabular sinks.
pub trait VisitorRecord {
    const DOMAIN: Domain;

    fn visitor_id(&self) -> u32;

    /// Attribute value by key, `None` if the record has no such attribute.
    fn attribute(&self, key: &str) -> Option<Value>;

    /// Column headers for tabular display.
    fn columns() -> &'static [&'static str];

    /// Cell values in `columns()` order.
    fn cells(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantVisit {
    pub visitor_id: u32,
    pub arrival_time: NaiveDateTime,
    pub duration_minutes: u32,
    pub frequent_visitor: bool,
    pub meal_preference: MealPreference,
    pub time_of_visit: VisitTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupermarketVisit {
    pub visitor_id: u32,
    pub arrival_time: NaiveDateTime,
    pub duration_minutes: u32,
    pub frequent_visitor: bool,
    pub area_of_interest: AreaOfInterest,
}

fn yes_no(flag: bool) -> String {
    let label = if flag { "Yes" } else { "No" };
    label.to_string()
}

impl VisitorRecord for RestaurantVisit {
    const DOMAIN: Domain = Domain::Restaurant;

    fn visitor_id(&self) -> u32 {
        self.visitor_id
    }

    fn attribute(&self, key: &str) -> Option<Value> {
        match key {
            attributes::VISITOR_ID => Some(json!(self.visitor_id)),
            attributes::ARRIVAL_TIME => {
                Some(json!(self.arrival_time.format(TIMESTAMP_FORMAT).to_string()))
            }
            attributes::DURATION_MINUTES => Some(json!(self.duration_minutes)),
            attributes::FREQUENT_VISITOR => Some(json!(self.frequent_visitor)),
            attributes::MEAL_PREFERENCE => Some(json!(self.meal_preference.as_str())),
            attributes::TIME_OF_VISIT => Some(json!(self.time_of_visit.as_str())),
            _ => None,
        }
    }

    fn columns() -> &'static [&'static str] {
        &[
            "Visitor ID",
            "Arrival Time",
            "Duration (minutes)",
            "Frequent Visitor",
            "Meal Type Preference",
            "Time of Visit",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.visitor_id.to_string(),
            self.arrival_time.format(TIMESTAMP_FORMAT).to_string(),
            self.duration_minutes.to_string(),
            yes_no(self.frequent_visitor),
            self.meal_preference.to_string(),
            self.time_of_visit.to_string(),
        ]
    }
}

impl VisitorRecord for SupermarketVisit {
    const DOMAIN: Domain = Domain::Supermarket;

    fn visitor_id(&self) -> u32 {
        self.visitor_id
    }

    fn attribute(&self, key: &str) -> Option<Value> {
        match key {
            attributes::VISITOR_ID => Some(json!(self.visitor_id)),
            attributes::ARRIVAL_TIME => {
                Some(json!(self.arrival_time.format(TIMESTAMP_FORMAT).to_string()))
            }
            attributes::DURATION_MINUTES => Some(json!(self.duration_minutes)),
            attributes::FREQUENT_VISITOR => Some(json!(self.frequent_visitor)),
            attributes::AREA_OF_INTEREST => Some(json!(self.area_of_interest.as_str())),
            _ => None,
        }
    }

    fn columns() -> &'static [&'static str] {
        &[
            "Visitor ID",
            "Arrival Time",
            "Duration (minutes)",
            "Frequent Visitor",
            "Area of Interest",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.visitor_id.to_string(),
            self.arrival_time.format(TIMESTAMP_FORMAT).to_string(),
            self.duration_minutes.to_string(),
            yes_no(self.frequent_visitor),
            self.area_of_interest.to_string(),
        ]
    }
}

/// Parse a `YYYY-MM-DD HH:MM:SS` timestamp as used for generator base times.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, InsightsError> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).map_err(|e| {
        InsightsError::InvalidParameters(format!("base time '{value}' is not a timestamp: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_visit() -> SupermarketVisit {
        SupermarketVisit {
            visitor_id: 3,
            arrival_time: parse_timestamp("2025-05-25 11:30:00").unwrap(),
            duration_minutes: 42,
            frequent_visitor: false,
            area_of_interest: AreaOfInterest::HomeGoods,
        }
    }

    #[test]
    fn test_categorical_labels_round_trip_through_from_str() {
        assert_eq!("home goods".parse::<AreaOfInterest>().unwrap(), AreaOfInterest::HomeGoods);
        assert_eq!("BOTH".parse::<MealPreference>().unwrap(), MealPreference::Both);
        assert!("Brunch".parse::<VisitTime>().is_err());
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let json = serde_json::to_value(AreaOfInterest::HomeGoods).unwrap();
        assert_eq!(json, json!("Home Goods"));
    }

    #[test]
    fn test_attribute_lookup() {
        let visit = sample_visit();
        assert_eq!(visit.attribute(attributes::DURATION_MINUTES), Some(json!(42)));
        assert_eq!(visit.attribute(attributes::AREA_OF_INTEREST), Some(json!("Home Goods")));
        assert_eq!(visit.attribute(attributes::MEAL_PREFERENCE), None);
    }

    #[test]
    fn test_cells_align_with_columns() {
        let visit = sample_visit();
        let cells = visit.cells();
        assert_eq!(cells.len(), SupermarketVisit::columns().len());
        assert_eq!(cells[1], "2025-05-25 11:30:00");
        assert_eq!(cells[3], "No");
    }

    #[test]
    fn test_domain_parse() {
        assert_eq!(" Restaurant ".parse::<Domain>().unwrap(), Domain::Restaurant);
        assert!("bakery".parse::<Domain>().is_err());
    }

    #[test]
    fn test_bad_timestamp_rejected() {
        assert!(matches!(
            parse_timestamp("25/05/2025"),
            Err(InsightsError::InvalidParameters(_))
        ));
    }
}
