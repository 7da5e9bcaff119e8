//! Per-segment marketing insights: the visitor count joined with the
//! catalog suggestion for that segment.

use serde::Serialize;

use insights_core::InsightsResult;

use crate::catalog::SuggestionCatalog;
use crate::summary::SegmentSummary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketingInsight {
    pub segment: String,
    pub visitors: u64,
    pub suggestion: &'static str,
    pub example: &'static str,
}

/// One insight per segment present in `summary`, in discovery order.
pub fn marketing_insights(
    summary: &SegmentSummary,
    catalog: &SuggestionCatalog,
) -> InsightsResult<Vec<MarketingInsight>> {
    summary
        .counts
        .iter()
        .map(|entry| {
            let suggestion = catalog.lookup(&entry.segment)?;
            Ok(MarketingInsight {
                segment: entry.segment.clone(),
                visitors: entry.count,
                suggestion: suggestion.suggestion,
                example: suggestion.example,
            })
        })
        .collect()
}
