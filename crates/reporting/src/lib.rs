//! Segment reporting — counts per segment, marketing suggestions, chart
//! tables, and the display sinks they are rendered through.

pub mod catalog;
pub mod chart;
pub mod export;
pub mod insights;
pub mod sink;
pub mod summary;

pub use catalog::{Suggestion, SuggestionCatalog};
pub use chart::{Chart, ChartKind, ChartPoint};
pub use insights::{marketing_insights, MarketingInsight};
pub use sink::{JsonSink, PresentationSink, TerminalSink};
pub use summary::{summarize, tally, SegmentCount, SegmentSummary};
