//! The narrated walkthrough, rendered through any `PresentationSink`.

use tracing::info;

use insights_core::types::RestaurantVisit;
use insights_core::{Domain, InsightsResult, VisitorRecord};
use insights_reporting::{tally, Chart, ChartKind, PresentationSink};

use crate::narrative;
use crate::pipeline::{DomainReport, Showcase};

/// Render the walkthrough for `domains` (in the order given). The combined
/// insights section only appears when both venues are included.
pub fn present<S: PresentationSink + ?Sized>(
    showcase: &Showcase,
    domains: &[Domain],
    preview_rows: usize,
    sink: &mut S,
) -> InsightsResult<()> {
    sink.heading(narrative::TITLE)?;
    sink.text(narrative::INTRODUCTION)?;
    sink.heading(narrative::DATA_SOURCES_HEADING)?;
    sink.text(narrative::DATA_SOURCES)?;
    sink.heading(narrative::ENHANCEMENTS_HEADING)?;
    sink.text(narrative::ENHANCEMENTS)?;

    let mut restaurant: Option<DomainReport<RestaurantVisit>> = None;
    for domain in domains {
        match domain {
            Domain::Restaurant => {
                let report = showcase.restaurant_report()?;
                present_domain(&report, ChartKind::Pie, preview_rows, sink)?;
                restaurant = Some(report);
            }
            Domain::Supermarket => {
                let report = showcase.supermarket_report()?;
                present_domain(&report, ChartKind::Bar, preview_rows, sink)?;
            }
        }
    }

    let both = Domain::ALL.iter().all(|d| domains.contains(d));
    if both {
        sink.heading(narrative::COMBINED_HEADING)?;
        sink.text(narrative::COMBINED_INSIGHTS)?;
    }

    if let Some(report) = &restaurant {
        sink.chart(&meal_preference_chart(report))?;
    }

    sink.heading(narrative::BENEFITS_HEADING)?;
    sink.text(narrative::BENEFITS)?;
    sink.heading(narrative::PRIVACY_HEADING)?;
    sink.warning(narrative::PRIVACY)?;
    sink.text(narrative::CLOSING)?;

    info!(domains = domains.len(), "Presentation rendered");
    Ok(())
}

fn present_domain<R: VisitorRecord, S: PresentationSink + ?Sized>(
    report: &DomainReport<R>,
    chart_kind: ChartKind,
    preview_rows: usize,
    sink: &mut S,
) -> InsightsResult<()> {
    let title = report.domain.title();

    sink.heading(narrative::venue_heading(report.domain))?;
    sink.text(narrative::venue_intro(report.domain))?;
    let total = report.records.len();
    let shown = preview_rows.min(total);
    sink.table(
        &format!("{title} visitors (first {shown} of {total})"),
        R::columns(),
        &report.preview(preview_rows),
    )?;

    sink.heading(&format!("AI-Driven Segmentation: {title}"))?;
    sink.text(narrative::segmentation_intro(report.domain))?;
    sink.chart(&report.segment_chart(chart_kind))?;

    sink.heading(&format!("AI-Powered Marketing: {title}"))?;
    for insight in &report.insights {
        sink.heading(&format!("Segment: {}", insight.segment))?;
        sink.text(&format!(
            "Number of visitors in this segment: {}\n- AI Suggestion: {}\n- Example: '{}'",
            insight.visitors, insight.suggestion, insight.example
        ))?;
    }
    Ok(())
}

fn meal_preference_chart(report: &DomainReport<RestaurantVisit>) -> Chart {
    Chart::from_counts(
        ChartKind::Bar,
        "Restaurant Meal Type Preferences",
        "Meal Type",
        tally(
            report
                .records
                .iter()
                .map(|entry| entry.record.meal_preference.as_str()),
        ),
    )
}
