//! Projected financial figures for one lot

use serde::{Deserialize, Serialize};

/// Derived metrics for a lot, recomputed in full from its parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LotProjection {
    // Growth
    pub final_weight_kg: f64,
    pub final_weight_arrobas: f64,

    // Costs
    pub acquisition_cost: f64,
    pub feeding_cost: f64,
    pub operational_cost: f64,
    pub total_cost: f64,

    // Revenue and indicators
    pub gross_revenue: f64,
    pub total_profit: f64,
    pub profit_per_head: f64,
    pub roi_percent: f64,
    pub break_even_price_per_arroba: f64,
}

impl LotProjection {
    /// Named view of every field, in declaration order
    pub fn fields(&self) -> [(&'static str, f64); 11] {
        [
            ("final_weight_kg", self.final_weight_kg),
            ("final_weight_arrobas", self.final_weight_arrobas),
            ("acquisition_cost", self.acquisition_cost),
            ("feeding_cost", self.feeding_cost),
            ("operational_cost", self.operational_cost),
            ("total_cost", self.total_cost),
            ("gross_revenue", self.gross_revenue),
            ("total_profit", self.total_profit),
            ("profit_per_head", self.profit_per_head),
            ("roi_percent", self.roi_percent),
            ("break_even_price_per_arroba", self.break_even_price_per_arroba),
        ]
    }
}
