//! Predicate types and evaluation logic for segment criteria.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use insights_core::VisitorRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredicateGroup {
    pub operator: LogicalOperator,
    pub predicates: Vec<Predicate>,
    #[serde(default)]
    pub groups: Vec<PredicateGroup>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalOperator {
    And,
    Or,
}

/// A single comparison against one record attribute. A record without the
/// attribute never satisfies the predicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Predicate {
    pub key: String,
    pub operator: ComparisonOperator,
    pub value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOperator {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    InList,
    NotInList,
}

impl ComparisonOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOperator::Equals => "=",
            ComparisonOperator::NotEquals => "!=",
            ComparisonOperator::GreaterThan => ">",
            ComparisonOperator::GreaterThanOrEqual => ">=",
            ComparisonOperator::LessThan => "<",
            ComparisonOperator::LessThanOrEqual => "<=",
            ComparisonOperator::InList => "in",
            ComparisonOperator::NotInList => "not in",
        }
    }
}

impl Predicate {
    pub fn matches<R: VisitorRecord>(&self, record: &R) -> bool {
        record
            .attribute(&self.key)
            .is_some_and(|actual| compare_values(&actual, self.operator, &self.value))
    }

    pub fn describe(&self) -> String {
        format!("{} {} {}", self.key, self.operator.symbol(), self.value)
    }
}

impl PredicateGroup {
    pub fn matches<R: VisitorRecord>(&self, record: &R) -> bool {
        match self.operator {
            LogicalOperator::And => {
                self.predicates.iter().all(|p| p.matches(record))
                    && self.groups.iter().all(|g| g.matches(record))
            }
            LogicalOperator::Or => {
                self.predicates.iter().any(|p| p.matches(record))
                    || self.groups.iter().any(|g| g.matches(record))
            }
        }
    }

    pub fn describe(&self) -> String {
        let joiner = match self.operator {
            LogicalOperator::And => " AND ",
            LogicalOperator::Or => " OR ",
        };
        self.predicates
            .iter()
            .map(Predicate::describe)
            .chain(self.groups.iter().map(|g| format!("({})", g.describe())))
            .collect::<Vec<_>>()
            .join(joiner)
    }
}

pub fn compare_values(actual: &Value, operator: ComparisonOperator, expected: &Value) -> bool {
    match operator {
        ComparisonOperator::Equals => actual == expected,
        ComparisonOperator::NotEquals => actual != expected,
        ComparisonOperator::GreaterThan => numeric_cmp(actual, expected) == Some(Ordering::Greater),
        ComparisonOperator::GreaterThanOrEqual => matches!(
            numeric_cmp(actual, expected),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        ComparisonOperator::LessThan => numeric_cmp(actual, expected) == Some(Ordering::Less),
        ComparisonOperator::LessThanOrEqual => matches!(
            numeric_cmp(actual, expected),
            Some(Ordering::Less | Ordering::Equal)
        ),
        ComparisonOperator::InList => expected
            .as_array()
            .is_some_and(|list| list.contains(actual)),
        ComparisonOperator::NotInList => expected
            .as_array()
            .map_or(true, |list| !list.contains(actual)),
    }
}

fn numeric_cmp(a: &Value, b: &Value) -> Option<Ordering> {
    let a_num = a.as_f64()?;
    let b_num = b.as_f64()?;
    a_num.partial_cmp(&b_num)
}
