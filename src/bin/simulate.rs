//! Project a single feedlot lot and show the dashboard, export the document,
//! or print the result as JSON
//!
//! Parameters come from the built-in defaults, then an optional JSON file
//! (`--params`), then individual flags.

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};
use feedlot_simulator::lot::load_parameters;
use feedlot_simulator::{evaluate, Dashboard, LotDocument, LotOutcome, LotParameters};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Dashboard,
    Document,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "simulate", version, about = "Profit projection for a cattle-feeding lot")]
struct Args {
    /// JSON file with lot parameters; missing fields use the defaults
    #[arg(long)]
    params: Option<PathBuf>,

    /// Number of animals
    #[arg(long)]
    head_count: Option<u32>,

    /// Entry weight per head (kg)
    #[arg(long)]
    entry_weight_kg: Option<f64>,

    /// Purchase price per arroba
    #[arg(long)]
    purchase_price: Option<f64>,

    /// Sale price per arroba
    #[arg(long)]
    sale_price: Option<f64>,

    /// Diet cost per head per day
    #[arg(long)]
    diet_cost: Option<f64>,

    /// Days on feed
    #[arg(long)]
    feeding_days: Option<u32>,

    /// Expected daily gain (kg/day)
    #[arg(long, allow_negative_numbers = true)]
    daily_gain_kg: Option<f64>,

    /// Other operating costs for the whole lot
    #[arg(long)]
    operational_cost: Option<f64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Dashboard)]
    format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Args {
    fn apply_overrides(&self, mut params: LotParameters) -> LotParameters {
        if let Some(v) = self.head_count { params.head_count = v; }
        if let Some(v) = self.entry_weight_kg { params.entry_weight_kg = v; }
        if let Some(v) = self.purchase_price { params.purchase_price_per_arroba = v; }
        if let Some(v) = self.sale_price { params.sale_price_per_arroba = v; }
        if let Some(v) = self.diet_cost { params.diet_cost_per_head_per_day = v; }
        if let Some(v) = self.feeding_days { params.feeding_days = v; }
        if let Some(v) = self.daily_gain_kg { params.daily_gain_kg = v; }
        if let Some(v) = self.operational_cost { params.operational_cost = v; }
        params
    }

    fn parameters(&self) -> Result<LotParameters> {
        let base = match &self.params {
            Some(path) => load_parameters(path)
                .with_context(|| format!("Failed to load parameters from {}", path.display()))?,
            None => LotParameters::default(),
        };
        Ok(self.apply_overrides(base))
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    parameters: &'a LotParameters,
    #[serde(flatten)]
    outcome: &'a LotOutcome,
    narrative: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let params = args.parameters()?;

    let outcome = match evaluate(&params) {
        Ok(outcome) => outcome,
        Err(e) => {
            log::warn!("Projection rejected: {}", e);
            return Err(e).context("Cannot project this lot");
        }
    };
    log::info!(
        "Lot of {} head: profit {:.2}, verdict {:?}",
        params.head_count, outcome.projection.total_profit, outcome.verdict.kind
    );

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        OutputFormat::Dashboard => {
            write!(out, "{}", Dashboard::new(&outcome).render())?;
        }
        OutputFormat::Document => {
            let document = LotDocument::new(&params, &outcome, Local::now().date_naive());
            document.write_to(&mut out)?;
        }
        OutputFormat::Json => {
            let report = JsonReport {
                parameters: &params,
                outcome: &outcome,
                narrative: outcome.verdict.narrative(),
            };
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    if let Some(path) = &args.output {
        println!("Output written to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "simulate",
            "--head-count", "80",
            "--sale-price", "295.5",
            "--daily-gain-kg", "-0.25",
            "--format", "json",
        ]);
        let params = args.parameters().unwrap();

        assert_eq!(params.head_count, 80);
        assert_eq!(params.sale_price_per_arroba, 295.5);
        assert_eq!(params.daily_gain_kg, -0.25);
        assert_eq!(params.entry_weight_kg, 300.0);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_no_flags_gives_defaults() {
        let args = Args::parse_from(["simulate"]);
        assert_eq!(args.parameters().unwrap(), LotParameters::default());
        assert_eq!(args.format, OutputFormat::Dashboard);
    }
}
