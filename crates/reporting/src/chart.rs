//! Chart tables handed to the chart sink.

use serde::Serialize;

use crate::summary::SegmentSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Pie,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ChartPoint>,
}

impl Chart {
    /// Segment sizes, largest first.
    pub fn segments(kind: ChartKind, title: impl Into<String>, summary: &SegmentSummary) -> Self {
        Self {
            kind,
            title: title.into(),
            x_label: "Segment".into(),
            y_label: "Count".into(),
            points: summary
                .ranked()
                .into_iter()
                .map(|c| ChartPoint {
                    label: c.segment,
                    value: c.count,
                })
                .collect(),
        }
    }

    pub fn from_counts(
        kind: ChartKind,
        title: impl Into<String>,
        x_label: impl Into<String>,
        counts: Vec<(String, u64)>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            x_label: x_label.into(),
            y_label: "Count".into(),
            points: counts
                .into_iter()
                .map(|(label, value)| ChartPoint { label, value })
                .collect(),
        }
    }

    pub fn total(&self) -> u64 {
        self.points.iter().map(|p| p.value).sum()
    }

    /// Percentage share of each point, 0.0 everywhere for an empty chart.
    pub fn shares(&self) -> Vec<(&str, f64)> {
        let total = self.total();
        self.points
            .iter()
            .map(|p| {
                let share = if total == 0 {
                    0.0
                } else {
                    p.value as f64 * 100.0 / total as f64
                };
                (p.label.as_str(), share)
            })
            .collect()
    }
}
