//! Fixed-layout lot report for export
//!
//! Three sections: input parameters, financial results and the verdict
//! paragraph. Rendering sanitizes the text to Latin-1 so the output can be
//! written with a single-byte encoding.

use super::sanitize::{sanitize_latin1, to_latin1_bytes};
use super::dashboard::Style;
use super::wrap;
use crate::format;
use crate::lot::LotParameters;
use crate::projection::LotOutcome;
use chrono::NaiveDate;
use std::io::{self, Write};

const PAGE_WIDTH: usize = 78;
const LABEL_WIDTH: usize = 34;

const TITLE: &str = "\u{1F402} Feedlot Simulator | Lot Report";
const FOOTER: &str = "Projection only. Figures assume constant prices and daily gain over the feeding period.";

#[derive(Debug, Clone, PartialEq)]
pub struct LotDocument {
    pub generated_on: NaiveDate,
    /// Input parameters as label -> display string, in input order
    pub parameters: Vec<(&'static str, String)>,
    /// Financial results as label -> display string
    pub results: Vec<(&'static str, String)>,
    pub verdict_text: String,
}

impl LotDocument {
    pub fn new(params: &LotParameters, outcome: &LotOutcome, generated_on: NaiveDate) -> Self {
        let p = &outcome.projection;

        let parameters = vec![
            ("Head count", params.head_count.to_string()),
            ("Entry weight", format::kilograms(params.entry_weight_kg)),
            ("Purchase price (per @)", format::currency(params.purchase_price_per_arroba)),
            ("Sale price (per @)", format::currency(params.sale_price_per_arroba)),
            ("Diet cost (per head/day)", format::currency(params.diet_cost_per_head_per_day)),
            ("Days on feed", params.feeding_days.to_string()),
            ("Expected daily gain", format!("{:.3} kg/day", params.daily_gain_kg)),
            ("Operational cost", format::currency(params.operational_cost)),
        ];

        let results = vec![
            ("Final weight", format!("{} ({})", format::kilograms(p.final_weight_kg), format::arrobas(p.final_weight_arrobas))),
            ("Total cost", format::currency(p.total_cost)),
            ("Gross revenue", format::currency(p.gross_revenue)),
            ("Projected profit", format::currency(p.total_profit)),
            ("ROI", format::percent(p.roi_percent)),
            ("Break-even price (per @)", format::currency(p.break_even_price_per_arroba)),
        ];

        let marker = Style::from(outcome.verdict.kind).marker();

        Self {
            generated_on,
            parameters,
            results,
            verdict_text: outcome.verdict.narrative_with_marker(marker),
        }
    }

    /// Render the document as Latin-1-safe text
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(TITLE);
        out.push('\n');
        out.push_str(&format!("Generated on {}\n", self.generated_on.format("%Y-%m-%d")));
        out.push_str(&"=".repeat(PAGE_WIDTH));
        out.push('\n');

        push_section(&mut out, "1. Input Parameters", &self.parameters);
        push_section(&mut out, "2. Financial Results", &self.results);

        out.push_str("\n3. Verdict\n");
        out.push_str(&"-".repeat(PAGE_WIDTH));
        out.push('\n');
        for line in wrap(&sanitize_latin1(&self.verdict_text), PAGE_WIDTH) {
            out.push_str(&line);
            out.push('\n');
        }

        out.push('\n');
        out.push_str(&"=".repeat(PAGE_WIDTH));
        out.push('\n');
        out.push_str(FOOTER);
        out.push('\n');

        sanitize_latin1(&out)
    }

    /// Write the rendered document as Latin-1 bytes
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(&to_latin1_bytes(&self.render()))?;
        writer.flush()
    }
}

fn push_section(out: &mut String, heading: &str, rows: &[(&'static str, String)]) {
    out.push('\n');
    out.push_str(heading);
    out.push('\n');
    out.push_str(&"-".repeat(PAGE_WIDTH));
    out.push('\n');
    for (label, value) in rows {
        out.push_str(&format!("{:<width$}{}\n", format!("{}:", label), value, width = LABEL_WIDTH));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::evaluate;

    fn document(params: LotParameters) -> LotDocument {
        let outcome = evaluate(&params).unwrap();
        LotDocument::new(&params, &outcome, NaiveDate::from_ymd_opt(2026, 3, 14).unwrap())
    }

    #[test]
    fn test_parameter_listing() {
        let doc = document(LotParameters::default());

        assert_eq!(doc.parameters.len(), 8);
        assert_eq!(doc.parameters[0], ("Head count", "50".to_string()));
        assert_eq!(doc.parameters[2], ("Purchase price (per @)", "R$ 280.00".to_string()));
        assert_eq!(doc.parameters[6], ("Expected daily gain", "1.500 kg/day".to_string()));
    }

    #[test]
    fn test_results_listing() {
        let doc = document(LotParameters::default());
        let lookup = |label: &str| doc.results.iter().find(|(l, _)| *l == label).map(|(_, v)| v.as_str());

        assert_eq!(lookup("Total cost"), Some("R$ 196,250.00"));
        assert_eq!(lookup("Gross revenue"), Some("R$ 224,750.00"));
        assert_eq!(lookup("Projected profit"), Some("R$ 28,500.00"));
        assert_eq!(lookup("ROI"), Some("14.5%"));
    }

    #[test]
    fn test_render_sanitizes_symbols() {
        let text = document(loss_lot()).render();
        let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");

        assert!(text.starts_with("[LOT] Feedlot Simulator | Lot Report\n"));
        assert!(text.contains("Generated on 2026-03-14"));
        assert!(flat.contains("[ALERT] LOSS scenario."));
        assert!(text.chars().all(|c| u32::from(c) <= 0xFF));

        let approved = document(LotParameters::default()).render();
        let flat = approved.split_whitespace().collect::<Vec<_>>().join(" ");
        assert!(flat.contains("[APPROVED] Scenario VIABLE"));
    }

    #[test]
    fn test_sections_in_order() {
        let text = document(LotParameters::default()).render();
        let inputs = text.find("1. Input Parameters").unwrap();
        let results = text.find("2. Financial Results").unwrap();
        let verdict = text.find("3. Verdict").unwrap();
        assert!(inputs < results && results < verdict);
        assert!(text.contains(&format!("{:<34}R$ 196,250.00\n", "Total cost:")));
    }

    #[test]
    fn test_write_to_latin1() {
        let mut buf = Vec::new();
        document(LotParameters::default()).write_to(&mut buf).unwrap();
        assert!(buf.starts_with(b"[LOT] Feedlot"));
        assert!(buf.is_ascii());
    }

    fn loss_lot() -> LotParameters {
        LotParameters { sale_price_per_arroba: 250.0, ..Default::default() }
    }
}
