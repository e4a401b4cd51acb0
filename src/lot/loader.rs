//! Load lot parameters from JSON and CSV files

use super::LotParameters;
use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One row of a lot CSV file
///
/// Expected header:
/// `lot_id,head_count,entry_weight_kg,purchase_price_per_arroba,sale_price_per_arroba,diet_cost_per_head_per_day,feeding_days,daily_gain_kg[,operational_cost]`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotRecord {
    pub lot_id: String,
    pub head_count: u32,
    pub entry_weight_kg: f64,
    pub purchase_price_per_arroba: f64,
    pub sale_price_per_arroba: f64,
    pub diet_cost_per_head_per_day: f64,
    pub feeding_days: u32,
    pub daily_gain_kg: f64,
    #[serde(default)]
    pub operational_cost: f64,
}

impl LotRecord {
    pub fn parameters(&self) -> LotParameters {
        LotParameters {
            head_count: self.head_count,
            entry_weight_kg: self.entry_weight_kg,
            purchase_price_per_arroba: self.purchase_price_per_arroba,
            sale_price_per_arroba: self.sale_price_per_arroba,
            diet_cost_per_head_per_day: self.diet_cost_per_head_per_day,
            feeding_days: self.feeding_days,
            daily_gain_kg: self.daily_gain_kg,
            operational_cost: self.operational_cost,
        }
    }
}

/// Load a single lot from a JSON file; missing fields take their defaults
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<LotParameters, LoadError> {
    let file = File::open(path.as_ref())?;
    let params = load_parameters_from_reader(file)?;
    log::debug!("Loaded lot parameters from {}", path.as_ref().display());
    Ok(params)
}

pub fn load_parameters_from_reader<R: Read>(reader: R) -> Result<LotParameters, LoadError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load every lot from a CSV file
///
/// Rows are parsed, not validated: a lot with out-of-range values is still
/// returned, and fails on its own when it is projected.
pub fn load_lots<P: AsRef<Path>>(path: P) -> Result<Vec<(String, LotParameters)>, LoadError> {
    let file = File::open(path.as_ref())?;
    let lots = load_lots_from_reader(file)?;
    log::info!("Loaded {} lots from {}", lots.len(), path.as_ref().display());
    Ok(lots)
}

pub fn load_lots_from_reader<R: Read>(reader: R) -> Result<Vec<(String, LotParameters)>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut lots = Vec::new();
    for result in rdr.deserialize() {
        let record: LotRecord = result?;
        let params = record.parameters();
        lots.push((record.lot_id, params));
    }

    Ok(lots)
}
