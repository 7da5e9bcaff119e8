//! Rule builder — fluent API for constructing segment criteria.

use serde_json::Value;

use crate::engine::SegmentRule;
use crate::predicates::{ComparisonOperator, LogicalOperator, Predicate, PredicateGroup};

pub struct RuleBuilder {
    label: String,
    description: Option<String>,
    predicates: Vec<Predicate>,
    groups: Vec<PredicateGroup>,
    operator: LogicalOperator,
}

impl RuleBuilder {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
            predicates: Vec::new(),
            groups: Vec::new(),
            operator: LogicalOperator::And,
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_or(mut self) -> Self {
        self.operator = LogicalOperator::Or;
        self
    }

    fn push(mut self, key: impl Into<String>, operator: ComparisonOperator, value: Value) -> Self {
        self.predicates.push(Predicate {
            key: key.into(),
            operator,
            value,
        });
        self
    }

    pub fn attribute_equals(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(key, ComparisonOperator::Equals, value.into())
    }

    pub fn attribute_not_equals(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(key, ComparisonOperator::NotEquals, value.into())
    }

    pub fn attribute_in<V: Into<Value>>(
        self,
        key: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let list = values.into_iter().map(Into::into).collect();
        self.push(key, ComparisonOperator::InList, Value::Array(list))
    }

    pub fn attribute_gt(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(key, ComparisonOperator::GreaterThan, value.into())
    }

    pub fn attribute_lt(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(key, ComparisonOperator::LessThan, value.into())
    }

    /// Nest an already-built group, e.g. an OR inside an AND rule.
    pub fn group(mut self, group: PredicateGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn build(self) -> SegmentRule {
        SegmentRule {
            label: self.label,
            description: self.description,
            criteria: PredicateGroup {
                operator: self.operator,
                predicates: self.predicates,
                groups: self.groups,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_collects_predicates_in_order() {
        let rule = RuleBuilder::new("Night Owls")
            .description("late visitors")
            .attribute_equals("time_of_visit", "Dinner")
            .attribute_in("meal_preference", ["Continental", "Both"])
            .attribute_gt("duration_minutes", 60)
            .build();

        assert_eq!(rule.label, "Night Owls");
        assert_eq!(rule.description.as_deref(), Some("late visitors"));
        assert_eq!(rule.criteria.operator, LogicalOperator::And);
        assert_eq!(rule.criteria.predicates.len(), 3);
        assert_eq!(rule.criteria.predicates[1].value, json!(["Continental", "Both"]));
        assert_eq!(
            rule.criteria.predicates[2].operator,
            ComparisonOperator::GreaterThan
        );
    }

    #[test]
    fn test_with_or_switches_operator() {
        let rule = RuleBuilder::new("Either")
            .with_or()
            .attribute_equals("frequent_visitor", true)
            .attribute_lt("duration_minutes", 20)
            .build();
        assert_eq!(rule.criteria.operator, LogicalOperator::Or);
    }
}
