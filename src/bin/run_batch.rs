//! Project every lot in a CSV file
//!
//! Each lot is projected independently; results are written one row per lot,
//! in input order, with the failure reason for lots that cannot be projected.

use anyhow::{Context, Result};
use clap::Parser;
use feedlot_simulator::lot::load_lots;
use feedlot_simulator::{evaluate, LotOutcome, LotParameters, ProjectionError, VerdictKind};
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "run_batch", about = "Project every lot listed in a CSV file")]
struct Args {
    /// Input CSV with one lot per row
    #[arg(default_value = "lots.csv")]
    input: PathBuf,

    /// Output CSV
    #[arg(long, default_value = "lot_projection_output.csv")]
    output: PathBuf,
}

/// One output row
#[derive(Debug, Default, Serialize)]
struct BatchRow {
    lot_id: String,
    final_weight_kg: Option<f64>,
    final_weight_arrobas: Option<f64>,
    acquisition_cost: Option<f64>,
    feeding_cost: Option<f64>,
    operational_cost: Option<f64>,
    total_cost: Option<f64>,
    gross_revenue: Option<f64>,
    total_profit: Option<f64>,
    profit_per_head: Option<f64>,
    roi_percent: Option<f64>,
    break_even_price_per_arroba: Option<f64>,
    verdict: Option<VerdictKind>,
    error: Option<String>,
}

impl BatchRow {
    fn new(lot_id: String, result: &Result<LotOutcome, ProjectionError>) -> Self {
        match result {
            Ok(outcome) => {
                let p = &outcome.projection;
                Self {
                    lot_id,
                    final_weight_kg: Some(round2(p.final_weight_kg)),
                    final_weight_arrobas: Some(round2(p.final_weight_arrobas)),
                    acquisition_cost: Some(round2(p.acquisition_cost)),
                    feeding_cost: Some(round2(p.feeding_cost)),
                    operational_cost: Some(round2(p.operational_cost)),
                    total_cost: Some(round2(p.total_cost)),
                    gross_revenue: Some(round2(p.gross_revenue)),
                    total_profit: Some(round2(p.total_profit)),
                    profit_per_head: Some(round2(p.profit_per_head)),
                    roi_percent: Some(round2(p.roi_percent)),
                    break_even_price_per_arroba: Some(round2(p.break_even_price_per_arroba)),
                    verdict: Some(outcome.verdict.kind),
                    error: None,
                }
            }
            Err(e) => Self {
                lot_id,
                error: Some(e.to_string()),
                ..Default::default()
            },
        }
    }
}

/// Project every lot in parallel; results keep the input order
fn project_lots(lots: &[(String, LotParameters)]) -> Vec<Result<LotOutcome, ProjectionError>> {
    lots.par_iter().map(|(_, params)| evaluate(params)).collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading lots from {}...", args.input.display());
    let lots = load_lots(&args.input)
        .with_context(|| format!("Failed to load lots from {}", args.input.display()))?;
    println!("Loaded {} lots in {:?}", lots.len(), start.elapsed());

    println!("Running projections...");
    let proj_start = Instant::now();

    let results = project_lots(&lots);

    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    let mut profitable = 0usize;
    let mut loss_making = 0usize;
    let mut failed = 0usize;
    let mut total_profit = 0.0;

    for ((lot_id, _), result) in lots.iter().zip(&results) {
        match result {
            Ok(outcome) => {
                total_profit += outcome.projection.total_profit;
                match outcome.verdict.kind {
                    VerdictKind::Profitable => profitable += 1,
                    VerdictKind::LossMaking => loss_making += 1,
                }
            }
            Err(e) => {
                log::warn!("Lot {} could not be projected: {}", lot_id, e);
                failed += 1;
            }
        }
        writer.serialize(BatchRow::new(lot_id.clone(), result))?;
    }
    writer.flush()?;

    println!("Output written to {}", args.output.display());

    println!("\nBatch Summary:");
    println!("  Lots:         {}", lots.len());
    println!("  Profitable:   {}", profitable);
    println!("  Loss-making:  {}", loss_making);
    println!("  Failed:       {}", failed);
    println!("  Total profit: {}", feedlot_simulator::format::currency(total_profit));

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedlot_simulator::lot::load_lots_from_reader;

    #[test]
    fn test_row_from_outcome() {
        let result = evaluate(&LotParameters::default());
        let row = BatchRow::new("A1".to_string(), &result);

        assert_eq!(row.total_cost, Some(196_250.0));
        assert_eq!(row.roi_percent, Some(14.52));
        assert_eq!(row.break_even_price_per_arroba, Some(270.69));
        assert_eq!(row.verdict, Some(VerdictKind::Profitable));
        assert!(row.error.is_none());
    }

    #[test]
    fn test_row_from_error() {
        let result = evaluate(&LotParameters { head_count: 0, ..Default::default() });
        let row = BatchRow::new("Z9".to_string(), &result);

        assert_eq!(row.lot_id, "Z9");
        assert!(row.total_cost.is_none());
        assert!(row.error.unwrap().contains("division by zero"));
    }

    #[test]
    fn test_invalid_lot_does_not_sink_batch() {
        let data = "lot_id,head_count,entry_weight_kg,purchase_price_per_arroba,sale_price_per_arroba,diet_cost_per_head_per_day,feeding_days,daily_gain_kg
A1,50,300.0,280.00,310.00,12.50,90,1.5
BAD,0,300.0,280.00,310.00,12.50,90,1.5
C3,50,300.0,280.00,250.00,12.50,90,1.5
";
        let lots = load_lots_from_reader(data.as_bytes()).expect("Failed to load");
        let results = project_lots(&lots);
        let rows: Vec<BatchRow> = lots
            .iter()
            .zip(&results)
            .map(|((id, _), result)| BatchRow::new(id.clone(), result))
            .collect();

        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].lot_id, "A1");
        assert_eq!(rows[0].total_profit, Some(28_500.0));
        assert_eq!(rows[0].verdict, Some(VerdictKind::Profitable));

        assert_eq!(rows[1].lot_id, "BAD");
        assert!(rows[1].verdict.is_none());
        assert!(rows[1].error.as_deref().unwrap().contains("division by zero"));

        assert_eq!(rows[2].lot_id, "C3");
        assert_eq!(rows[2].total_profit, Some(-15_000.0));
        assert_eq!(rows[2].verdict, Some(VerdictKind::LossMaking));
        assert!(rows[2].error.is_none());
    }
}
