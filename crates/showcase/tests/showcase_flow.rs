//! End-to-end tests: configuration → generated tables → segments →
//! insights → rendered blocks.

use insights_core::types::{MealPreference, VisitTime};
use insights_core::{AppConfig, Domain};
use insights_generator::{RestaurantParams, SyntheticGenerator};
use insights_reporting::{JsonSink, SuggestionCatalog, TerminalSink};
use insights_segmentation::restaurant_rules;
use insights_showcase::{present, run_domain, Showcase};
use serde_json::Value;

fn showcase() -> Showcase {
    Showcase::from_config(&AppConfig::default()).unwrap()
}

fn blocks_of(doc: &Value, kind: &str) -> Vec<Value> {
    doc["blocks"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|b| b["type"] == kind)
        .cloned()
        .collect()
}

#[test]
fn test_counts_sum_to_table_size_for_both_venues() {
    let showcase = showcase();

    let restaurant = showcase.restaurant_report().unwrap();
    let sum: u64 = restaurant.summary.counts.iter().map(|c| c.count).sum();
    assert_eq!(sum, 300);
    assert_eq!(restaurant.summary.total, 300);

    let supermarket = showcase.supermarket_report().unwrap();
    let sum: u64 = supermarket.summary.counts.iter().map(|c| c.count).sum();
    assert_eq!(sum, 350);
}

#[test]
fn test_every_record_gets_a_known_label() {
    let showcase = showcase();
    let report = showcase.supermarket_report().unwrap();
    let labels = showcase.rules(Domain::Supermarket).labels();
    assert!(report
        .records
        .iter()
        .all(|entry| labels.contains(&entry.segment.as_str())));
}

#[test]
fn test_runs_are_reproducible_for_a_seed() {
    let first = showcase().restaurant_report().unwrap();
    let second = showcase().restaurant_report().unwrap();
    assert_eq!(first.records, second.records);
    assert_eq!(first.summary.counts, second.summary.counts);
}

#[test]
fn test_insights_follow_first_appearance() {
    let report = showcase().restaurant_report().unwrap();
    let mut first_seen: Vec<&str> = Vec::new();
    for entry in &report.records {
        if !first_seen.contains(&entry.segment.as_str()) {
            first_seen.push(&entry.segment);
        }
    }
    let insight_order: Vec<&str> = report.insights.iter().map(|i| i.segment.as_str()).collect();
    assert_eq!(insight_order, first_seen);
}

#[test]
fn test_breakfast_regular_in_generated_table() {
    let config = AppConfig::default();
    let params = RestaurantParams::try_from(&config.restaurant).unwrap();
    let mut visits = SyntheticGenerator::seeded(7).restaurant(&params);
    let mut regular = visits[0].clone();
    regular.visitor_id = 301;
    regular.frequent_visitor = true;
    regular.time_of_visit = VisitTime::Breakfast;
    regular.meal_preference = MealPreference::Local;
    visits.push(regular);

    let report = run_domain(
        visits,
        &restaurant_rules().unwrap(),
        &SuggestionCatalog::restaurant(),
    )
    .unwrap();
    let last = report.records.last().unwrap();
    assert_eq!(last.record.visitor_id, 301);
    assert_eq!(last.segment, "Regular Breakfast Crowd");
    assert_eq!(report.summary.total, 301);
}

#[test]
fn test_full_presentation_blocks() {
    let showcase = showcase();
    let mut sink = JsonSink::new();
    present(&showcase, &Domain::ALL, 5, &mut sink).unwrap();
    let doc = sink.into_document();

    let charts = blocks_of(&doc, "chart");
    let titles: Vec<&str> = charts.iter().map(|c| c["title"].as_str().unwrap()).collect();
    assert_eq!(
        titles,
        vec![
            "Restaurant Customer Segments",
            "Supermarket Customer Segments",
            "Restaurant Meal Type Preferences",
        ]
    );
    assert_eq!(charts[0]["kind"], "pie");
    assert_eq!(charts[1]["kind"], "bar");

    let tables = blocks_of(&doc, "table");
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0]["rows"].as_array().unwrap().len(), 5);

    let headings: Vec<String> = blocks_of(&doc, "heading")
        .iter()
        .map(|h| h["text"].as_str().unwrap().to_string())
        .collect();
    assert!(headings.iter().any(|h| h == "Combined Insights and AI's Role"));

    let restaurant = showcase.restaurant_report().unwrap();
    for insight in &restaurant.insights {
        assert!(headings.contains(&format!("Segment: {}", insight.segment)));
    }

    assert_eq!(blocks_of(&doc, "warning").len(), 1);
}

#[test]
fn test_single_venue_skips_combined_section() {
    let mut sink = JsonSink::new();
    present(&showcase(), &[Domain::Supermarket], 3, &mut sink).unwrap();
    let doc = sink.into_document();

    let charts = blocks_of(&doc, "chart");
    assert_eq!(charts.len(), 1);
    assert_eq!(charts[0]["title"], "Supermarket Customer Segments");
    assert!(!blocks_of(&doc, "heading")
        .iter()
        .any(|h| h["text"] == "Combined Insights and AI's Role"));
}

#[test]
fn test_terminal_rendering() {
    let mut sink = TerminalSink::new(Vec::new());
    present(&showcase(), &[Domain::Restaurant], 2, &mut sink).unwrap();
    let out = String::from_utf8(sink.into_inner()).unwrap();

    assert!(out.contains("Restaurant Customer Segments (share of 300)"));
    assert!(out.contains("Restaurant visitors (first 2 of 300)"));
    assert!(out.contains("Meal Type Preference"));
    assert!(out.contains("WARNING: Ethical data handling is essential."));
}

#[test]
fn test_preview_title_counts_rows_actually_shown() {
    let mut config = AppConfig::default();
    config.supermarket.visitors = 3;
    let showcase = Showcase::from_config(&config).unwrap();

    let mut sink = JsonSink::new();
    present(&showcase, &[Domain::Supermarket], 5, &mut sink).unwrap();
    let tables = blocks_of(&sink.into_document(), "table");
    assert_eq!(tables[0]["title"], "Supermarket visitors (first 3 of 3)");
    assert_eq!(tables[0]["rows"].as_array().unwrap().len(), 3);

    config.supermarket.visitors = 0;
    let showcase = Showcase::from_config(&config).unwrap();
    let mut sink = JsonSink::new();
    present(&showcase, &[Domain::Supermarket], 5, &mut sink).unwrap();
    let tables = blocks_of(&sink.into_document(), "table");
    assert_eq!(tables[0]["title"], "Supermarket visitors (first 0 of 0)");
}
