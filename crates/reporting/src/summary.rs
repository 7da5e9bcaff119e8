//! Segment summarizer — per-label counts in order of first appearance.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use insights_core::{Domain, VisitorRecord};
use insights_segmentation::Classified;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentCount {
    pub segment: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SegmentSummary {
    pub report_id: Uuid,
    pub domain: Domain,
    pub total: u64,
    /// Only labels that occur, in discovery order.
    pub counts: Vec<SegmentCount>,
    pub computed_at: DateTime<Utc>,
}

impl SegmentSummary {
    pub fn count(&self, segment: &str) -> Option<u64> {
        self.counts
            .iter()
            .find(|c| c.segment == segment)
            .map(|c| c.count)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.counts.iter().map(|c| c.segment.as_str())
    }

    /// Counts sorted largest first; ties keep discovery order.
    pub fn ranked(&self) -> Vec<SegmentCount> {
        let mut ranked = self.counts.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }
}

pub fn summarize<R: VisitorRecord>(records: &[Classified<R>]) -> SegmentSummary {
    let mut counts: IndexMap<&str, u64> = IndexMap::new();
    for entry in records {
        *counts.entry(entry.segment.as_str()).or_insert(0) += 1;
    }

    let summary = SegmentSummary {
        report_id: Uuid::new_v4(),
        domain: R::DOMAIN,
        total: records.len() as u64,
        counts: counts
            .into_iter()
            .map(|(segment, count)| SegmentCount {
                segment: segment.to_string(),
                count,
            })
            .collect(),
        computed_at: Utc::now(),
    };

    debug!(
        domain = %summary.domain,
        total = summary.total,
        segments = summary.counts.len(),
        "Summarized segments"
    );
    summary
}

/// Value counts of an attribute, largest first; ties keep discovery order.
pub fn tally<I, S>(values: I) -> Vec<(String, u64)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut counts: IndexMap<String, u64> = IndexMap::new();
    for value in values {
        *counts.entry(value.into()).or_insert(0) += 1;
    }
    let mut ranked: Vec<(String, u64)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use insights_core::types::{AreaOfInterest, SupermarketVisit};

    fn classified(segments: &[&str]) -> Vec<Classified<SupermarketVisit>> {
        segments
            .iter()
            .enumerate()
            .map(|(i, segment)| Classified {
                record: SupermarketVisit {
                    visitor_id: i as u32 + 1,
                    arrival_time: NaiveDate::from_ymd_opt(2025, 5, 25)
                        .unwrap()
                        .and_hms_opt(11, 0, 0)
                        .unwrap(),
                    duration_minutes: 15,
                    frequent_visitor: false,
                    area_of_interest: AreaOfInterest::Snacks,
                },
                segment: segment.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_counts_follow_discovery_order() {
        let records = classified(&["B", "A", "B", "C", "A", "B"]);
        let summary = summarize(&records);
        let labels: Vec<&str> = summary.labels().collect();
        assert_eq!(labels, vec!["B", "A", "C"]);
        assert_eq!(summary.count("B"), Some(3));
        assert_eq!(summary.count("D"), None);
        assert_eq!(summary.domain, Domain::Supermarket);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let records = classified(&["x", "y", "x", "z", "x"]);
        let summary = summarize(&records);
        let sum: u64 = summary.counts.iter().map(|c| c.count).sum();
        assert_eq!(sum, summary.total);
        assert_eq!(summary.total, 5);
    }

    #[test]
    fn test_ranked_is_stable_on_ties() {
        let records = classified(&["late", "early", "early", "late", "solo"]);
        let ranked = summarize(&records).ranked();
        let order: Vec<&str> = ranked.iter().map(|c| c.segment.as_str()).collect();
        assert_eq!(order, vec!["late", "early", "solo"]);
    }

    #[test]
    fn test_empty_table_has_no_segments() {
        let summary = summarize::<SupermarketVisit>(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.counts.is_empty());
    }

    #[test]
    fn test_tally_ranks_values() {
        let counts = tally(["Local", "Both", "Local", "Continental", "Local", "Both"]);
        assert_eq!(
            counts,
            vec![
                ("Local".to_string(), 3),
                ("Both".to_string(), 2),
                ("Continental".to_string(), 1),
            ]
        );
    }
}
