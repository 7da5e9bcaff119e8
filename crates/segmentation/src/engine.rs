//! Segmentation engine — assigns each record exactly one segment label
//! using ordered rules where the first match wins.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use insights_core::{Domain, InsightsError, InsightsResult, VisitorRecord};

use crate::predicates::PredicateGroup;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentRule {
    pub label: String,
    pub description: Option<String>,
    pub criteria: PredicateGroup,
}

impl SegmentRule {
    pub fn matches<R: VisitorRecord>(&self, record: &R) -> bool {
        self.criteria.matches(record)
    }
}

/// An ordered rule table with a fallback label. Rules after the first
/// matching one are never consulted for that record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    domain: Domain,
    rules: Vec<SegmentRule>,
    default_label: String,
}

/// A record paired with the segment it was assigned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classified<R> {
    #[serde(flatten)]
    pub record: R,
    pub segment: String,
}

impl<R: VisitorRecord> Classified<R> {
    pub fn columns() -> Vec<&'static str> {
        let mut columns = R::columns().to_vec();
        columns.push("Segment");
        columns
    }

    pub fn cells(&self) -> Vec<String> {
        let mut cells = self.record.cells();
        cells.push(self.segment.clone());
        cells
    }
}

impl RuleSet {
    pub fn new(
        domain: Domain,
        rules: Vec<SegmentRule>,
        default_label: impl Into<String>,
    ) -> InsightsResult<Self> {
        let default_label = default_label.into();
        {
            let mut seen = HashSet::new();
            for label in rules.iter().map(|r| r.label.as_str()).chain([default_label.as_str()]) {
                if label.trim().is_empty() {
                    return Err(InsightsError::InvalidRuleSet(format!(
                        "{domain} rule set has an empty label"
                    )));
                }
                if !seen.insert(label) {
                    return Err(InsightsError::InvalidRuleSet(format!(
                        "{domain} rule set repeats label '{label}'"
                    )));
                }
            }
        }

        debug!(%domain, rules = rules.len(), "Rule set loaded");
        Ok(Self {
            domain,
            rules,
            default_label,
        })
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn rules(&self) -> &[SegmentRule] {
        &self.rules
    }

    pub fn default_label(&self) -> &str {
        &self.default_label
    }

    /// The closed label set: rule labels in evaluation order, default last.
    pub fn labels(&self) -> Vec<&str> {
        self.rules
            .iter()
            .map(|r| r.label.as_str())
            .chain(std::iter::once(self.default_label.as_str()))
            .collect()
    }

    /// Index of the first rule the record satisfies, `None` for the default.
    pub fn matching_rule<R: VisitorRecord>(&self, record: &R) -> Option<usize> {
        debug_assert_eq!(R::DOMAIN, self.domain, "record domain does not match rule set");
        self.rules.iter().position(|rule| rule.matches(record))
    }

    pub fn classify<R: VisitorRecord>(&self, record: &R) -> &str {
        match self.matching_rule(record) {
            Some(index) => &self.rules[index].label,
            None => &self.default_label,
        }
    }

    pub fn classify_all<R: VisitorRecord>(&self, records: Vec<R>) -> Vec<Classified<R>> {
        let classified: Vec<Classified<R>> = records
            .into_iter()
            .map(|record| {
                let segment = self.classify(&record).to_string();
                Classified { record, segment }
            })
            .collect();

        debug!(domain = %self.domain, records = classified.len(), "Classified records");
        classified
    }
}
