//! Terminal dashboard for a single lot

use super::wrap;
use crate::format;
use crate::projection::{LotOutcome, VerdictKind};

/// Width of the longest bar in the cost/revenue chart
const CHART_WIDTH: usize = 40;
const TEXT_WIDTH: usize = 72;

/// Headline figure with an optional secondary delta
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
    pub delta: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: &'static str,
    pub value: f64,
}

/// Success/alert styling of the narrative block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Success,
    Alert,
}

impl Style {
    pub fn marker(&self) -> &'static str {
        match self {
            Style::Success => "\u{2705}",
            Style::Alert => "\u{1F6A8}",
        }
    }
}

impl From<VerdictKind> for Style {
    fn from(kind: VerdictKind) -> Self {
        match kind {
            VerdictKind::Profitable => Style::Success,
            VerdictKind::LossMaking => Style::Alert,
        }
    }
}

/// Everything the dashboard shows, already formatted
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub metrics: [Metric; 4],
    pub chart: [ChartBar; 2],
    pub narrative: String,
    pub style: Style,
}

impl Dashboard {
    pub fn new(outcome: &LotOutcome) -> Self {
        let p = &outcome.projection;
        let style = Style::from(outcome.verdict.kind);

        let metrics = [
            Metric {
                label: "Final Weight (avg)",
                value: format::kilograms(p.final_weight_kg),
                delta: Some(format::arrobas(p.final_weight_arrobas)),
            },
            Metric {
                label: "Total Lot Cost",
                value: format::currency(p.total_cost),
                delta: None,
            },
            Metric {
                label: "Gross Revenue",
                value: format::currency(p.gross_revenue),
                delta: None,
            },
            Metric {
                label: "Projected Profit",
                value: format::currency(p.total_profit),
                delta: Some(format!("{} ROI", format::percent(p.roi_percent))),
            },
        ];

        let chart = [
            ChartBar { label: "Investment (Costs)", value: p.total_cost },
            ChartBar { label: "Return (Revenue)", value: p.gross_revenue },
        ];

        Self {
            metrics,
            chart,
            narrative: outcome.verdict.narrative_with_marker(style.marker()),
            style,
        }
    }

    /// Render as plain terminal text
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("\u{1F402} Feedlot Simulator | Profit Projection\n");
        out.push_str(&"=".repeat(TEXT_WIDTH));
        out.push('\n');

        for metric in &self.metrics {
            match &metric.delta {
                Some(delta) => out.push_str(&format!("{:<22}{:>20}   ({})\n", metric.label, metric.value, delta)),
                None => out.push_str(&format!("{:<22}{:>20}\n", metric.label, metric.value)),
            }
        }

        out.push_str("\n\u{1F4CA} Financial X-Ray\n");
        let max = self.chart.iter().map(|b| b.value).fold(0.0_f64, f64::max);
        for bar in &self.chart {
            out.push_str(&format!(
                "{:<20}{:<width$}  {}\n",
                bar.label,
                "#".repeat(bar_length(bar.value, max)),
                format::currency(bar.value),
                width = CHART_WIDTH
            ));
        }

        out.push_str("\n\u{1F4CB} Quick Report\n");
        for line in wrap(&self.narrative, TEXT_WIDTH) {
            out.push_str(&line);
            out.push('\n');
        }

        out
    }
}

fn bar_length(value: f64, max: f64) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max) * CHART_WIDTH as f64).round() as usize
}
