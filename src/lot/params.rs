//! Lot input parameters

use crate::error::ProjectionError;
use serde::{Deserialize, Serialize};

/// Kilograms in one arroba, the unit all cattle prices are quoted in
pub const ARROBA_KG: f64 = 30.0;

/// Inputs describing one feedlot lot
///
/// Every field has a serde default, so a partial JSON document is filled
/// in from the standard lot (50 head at 300 kg, 90 days on feed).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LotParameters {
    /// Number of animals in the lot (>= 1)
    #[serde(default = "default_head_count")]
    pub head_count: u32,

    /// Average entry (lean) weight per head in kg
    #[serde(default = "default_entry_weight_kg")]
    pub entry_weight_kg: f64,

    /// Purchase price per arroba of lean cattle
    #[serde(default = "default_purchase_price")]
    pub purchase_price_per_arroba: f64,

    /// Expected sale price per arroba of finished cattle
    #[serde(default = "default_sale_price")]
    pub sale_price_per_arroba: f64,

    /// Diet cost per head per day
    #[serde(default = "default_diet_cost")]
    pub diet_cost_per_head_per_day: f64,

    /// Days on feed
    #[serde(default = "default_feeding_days")]
    pub feeding_days: u32,

    /// Expected average daily gain (GMD) in kg/day. Zero or negative is allowed.
    #[serde(default = "default_daily_gain_kg")]
    pub daily_gain_kg: f64,

    /// Other operating costs for the whole lot (labour, freight, vet...)
    #[serde(default)]
    pub operational_cost: f64,
}

fn default_head_count() -> u32 { 50 }
fn default_entry_weight_kg() -> f64 { 300.0 }
fn default_purchase_price() -> f64 { 280.00 }
fn default_sale_price() -> f64 { 310.00 }
fn default_diet_cost() -> f64 { 12.50 }
fn default_feeding_days() -> u32 { 90 }
fn default_daily_gain_kg() -> f64 { 1.500 }

impl Default for LotParameters {
    fn default() -> Self {
        Self {
            head_count: default_head_count(),
            entry_weight_kg: default_entry_weight_kg(),
            purchase_price_per_arroba: default_purchase_price(),
            sale_price_per_arroba: default_sale_price(),
            diet_cost_per_head_per_day: default_diet_cost(),
            feeding_days: default_feeding_days(),
            daily_gain_kg: default_daily_gain_kg(),
            operational_cost: 0.0,
        }
    }
}

impl LotParameters {
    /// Entry weight expressed in arrobas
    pub fn entry_weight_arrobas(&self) -> f64 {
        self.entry_weight_kg / ARROBA_KG
    }

    /// Check the documented constraints on every field
    ///
    /// A zero head count is reported as a division by zero, since every
    /// per-head figure divides by it.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if self.head_count == 0 {
            return Err(ProjectionError::DivisionByZero { quantity: "profit per head" });
        }

        positive("entry_weight_kg", self.entry_weight_kg)?;
        positive("purchase_price_per_arroba", self.purchase_price_per_arroba)?;
        positive("sale_price_per_arroba", self.sale_price_per_arroba)?;
        non_negative("diet_cost_per_head_per_day", self.diet_cost_per_head_per_day)?;
        non_negative("operational_cost", self.operational_cost)?;
        finite("daily_gain_kg", self.daily_gain_kg)?;

        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ProjectionError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ProjectionError::InvalidInput { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ProjectionError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ProjectionError::InvalidInput { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ProjectionError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ProjectionError::InvalidInput { field, value })
    }
}
