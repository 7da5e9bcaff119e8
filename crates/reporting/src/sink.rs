//! Display sinks. The pipeline hands finished tables, charts and text to a
//! `PresentationSink` and consumes nothing back.

use std::io::Write;

use chrono::Utc;
use serde_json::{json, Value};

use insights_core::InsightsResult;

use crate::chart::{Chart, ChartKind};

pub trait PresentationSink {
    fn heading(&mut self, text: &str) -> InsightsResult<()>;

    fn text(&mut self, body: &str) -> InsightsResult<()>;

    fn warning(&mut self, body: &str) -> InsightsResult<()>;

    fn table(&mut self, title: &str, columns: &[&str], rows: &[Vec<String>]) -> InsightsResult<()>;

    fn chart(&mut self, chart: &Chart) -> InsightsResult<()>;
}

// ─── Terminal ───────────────────────────────────────────────────────────────

const BAR_WIDTH: usize = 40;

/// Plain-text rendering for a terminal or log file.
pub struct TerminalSink<W: Write> {
    out: W,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PresentationSink for TerminalSink<W> {
    fn heading(&mut self, text: &str) -> InsightsResult<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{text}")?;
        writeln!(self.out, "{}", "=".repeat(text.chars().count()))?;
        Ok(())
    }

    fn text(&mut self, body: &str) -> InsightsResult<()> {
        writeln!(self.out, "{}", body.trim_end())?;
        Ok(())
    }

    fn warning(&mut self, body: &str) -> InsightsResult<()> {
        for (i, line) in body.trim_end().lines().enumerate() {
            if i == 0 {
                writeln!(self.out, "WARNING: {line}")?;
            } else {
                writeln!(self.out, "         {line}")?;
            }
        }
        Ok(())
    }

    fn table(&mut self, title: &str, columns: &[&str], rows: &[Vec<String>]) -> InsightsResult<()> {
        let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let render = |cells: Vec<&str>| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        writeln!(self.out, "{title}")?;
        writeln!(self.out, "  {}", render(columns.to_vec()))?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(self.out, "  {}", rule.join("  "))?;
        for row in rows {
            writeln!(self.out, "  {}", render(row.iter().map(String::as_str).collect()))?;
        }
        Ok(())
    }

    fn chart(&mut self, chart: &Chart) -> InsightsResult<()> {
        let label_width = chart
            .points
            .iter()
            .map(|p| p.label.chars().count())
            .max()
            .unwrap_or(0);

        match chart.kind {
            ChartKind::Bar => {
                writeln!(self.out, "{} ({} by {})", chart.title, chart.y_label, chart.x_label)?;
                let max = chart.points.iter().map(|p| p.value).max().unwrap_or(0);
                for point in &chart.points {
                    let len = if max == 0 {
                        0
                    } else {
                        (point.value as usize * BAR_WIDTH).div_ceil(max as usize)
                    };
                    writeln!(
                        self.out,
                        "  {:<label_width$}  {} {}",
                        point.label,
                        "#".repeat(len),
                        point.value
                    )?;
                }
            }
            ChartKind::Pie => {
                let bar_width = BAR_WIDTH;
                writeln!(self.out, "{} (share of {})", chart.title, chart.total())?;
                for ((label, share), point) in chart.shares().into_iter().zip(&chart.points) {
                    let len = (share * bar_width as f64 / 100.0).round() as usize;
                    writeln!(
                        self.out,
                        "  {:<label_width$}  {:>5.1}%  {:<bar_width$}  ({})",
                        label,
                        share,
                        "*".repeat(len),
                        point.value
                    )?;
                }
            }
        }
        Ok(())
    }
}

// ─── JSON ───────────────────────────────────────────────────────────────────

/// Collects every block into a single JSON document.
#[derive(Debug, Default)]
pub struct JsonSink {
    blocks: Vec<Value>,
}

impl JsonSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[Value] {
        &self.blocks
    }

    pub fn into_document(self) -> Value {
        json!({
            "generated_at": Utc::now().to_rfc3339(),
            "blocks": self.blocks,
        })
    }

    pub fn write_to<W: Write>(self, mut out: W) -> InsightsResult<()> {
        serde_json::to_writer_pretty(&mut out, &self.into_document())?;
        writeln!(out)?;
        Ok(())
    }
}

impl PresentationSink for JsonSink {
    fn heading(&mut self, text: &str) -> InsightsResult<()> {
        self.blocks.push(json!({ "type": "heading", "text": text }));
        Ok(())
    }

    fn text(&mut self, body: &str) -> InsightsResult<()> {
        self.blocks.push(json!({ "type": "text", "body": body }));
        Ok(())
    }

    fn warning(&mut self, body: &str) -> InsightsResult<()> {
        self.blocks.push(json!({ "type": "warning", "body": body }));
        Ok(())
    }

    fn table(&mut self, title: &str, columns: &[&str], rows: &[Vec<String>]) -> InsightsResult<()> {
        self.blocks.push(json!({
            "type": "table",
            "title": title,
            "columns": columns,
            "rows": rows,
        }));
        Ok(())
    }

    fn chart(&mut self, chart: &Chart) -> InsightsResult<()> {
        let mut block = serde_json::to_value(chart)?;
        if let Value::Object(ref mut map) = block {
            map.insert("type".into(), json!("chart"));
        }
        self.blocks.push(block);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F: FnOnce(&mut TerminalSink<Vec<u8>>)>(f: F) -> String {
        let mut sink = TerminalSink::new(Vec::new());
        f(&mut sink);
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn test_terminal_table_aligns_columns() {
        let out = render(|sink| {
            sink.table(
                "Preview",
                &["Id", "Area"],
                &[
                    vec!["1".into(), "Home Goods".into()],
                    vec!["10".into(), "Snacks".into()],
                ],
            )
            .unwrap()
        });
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Preview");
        assert_eq!(lines[1], "  Id  Area");
        assert_eq!(lines[2], "  --  ----------");
        assert_eq!(lines[3], "  1   Home Goods");
        assert_eq!(lines[4], "  10  Snacks");
    }

    #[test]
    fn test_terminal_bar_chart_scales_to_max() {
        let chart = Chart::from_counts(
            ChartKind::Bar,
            "Segments",
            "Segment",
            vec![("Big".into(), 20), ("Small".into(), 5)],
        );
        let out = render(|sink| sink.chart(&chart).unwrap());
        assert!(out.contains(&format!("Big    {} 20", "#".repeat(BAR_WIDTH))));
        assert!(out.contains(&format!("Small  {} 5", "#".repeat(10))));
    }

    #[test]
    fn test_terminal_pie_chart_shows_percentages() {
        let chart = Chart::from_counts(
            ChartKind::Pie,
            "Segments",
            "Segment",
            vec![("A".into(), 3), ("B".into(), 1)],
        );
        let out = render(|sink| sink.chart(&chart).unwrap());
        assert!(out.contains("Segments (share of 4)"));
        assert!(out.contains(" 75.0%"));
        assert!(out.contains(" 25.0%"));
    }

    #[test]
    fn test_terminal_warning_indents_continuation() {
        let out = render(|sink| sink.warning("first\nsecond").unwrap());
        assert_eq!(out, "WARNING: first\n         second\n");
    }

    #[test]
    fn test_json_sink_collects_typed_blocks() {
        let mut sink = JsonSink::new();
        sink.heading("Title").unwrap();
        sink.table("Rows", &["a"], &[vec!["1".into()]]).unwrap();
        sink.chart(&Chart::from_counts(ChartKind::Pie, "P", "x", vec![("k".into(), 1)]))
            .unwrap();

        let doc = sink.into_document();
        let blocks = doc["blocks"].as_array().unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0]["type"], "heading");
        assert_eq!(blocks[1]["rows"][0][0], "1");
        assert_eq!(blocks[2]["type"], "chart");
        assert_eq!(blocks[2]["kind"], "pie");
        assert_eq!(blocks[2]["points"][0]["value"], 1);
    }
}
