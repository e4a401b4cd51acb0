//! Lot projection: parameters in, financial metrics out

use super::{classify, LotProjection, Verdict};
use crate::error::ProjectionError;
use crate::lot::{LotParameters, ARROBA_KG};
use serde::Serialize;

/// Projection and verdict for one lot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LotOutcome {
    pub projection: LotProjection,
    pub verdict: Verdict,
}

/// Project a lot from its parameters
///
/// Pure and deterministic: the same parameters always give bit-identical
/// results. Fails instead of returning an infinite or NaN figure.
pub fn project(params: &LotParameters) -> Result<LotProjection, ProjectionError> {
    params.validate()?;

    let head_count = f64::from(params.head_count);
    let days = f64::from(params.feeding_days);

    // 1. Growth
    let final_weight_kg = params.entry_weight_kg + params.daily_gain_kg * days;
    let final_weight_arrobas = final_weight_kg / ARROBA_KG;

    // 2. Costs
    let acquisition_cost = params.entry_weight_arrobas() * params.purchase_price_per_arroba * head_count;
    let feeding_cost = params.diet_cost_per_head_per_day * days * head_count;
    let total_cost = acquisition_cost + feeding_cost + params.operational_cost;

    // 3. Revenue
    let gross_revenue = final_weight_arrobas * params.sale_price_per_arroba * head_count;

    // 4. Indicators
    let total_profit = gross_revenue - total_cost;
    let profit_per_head = total_profit / head_count;

    // Unreachable for validated input (entry weight and purchase price are > 0)
    if total_cost == 0.0 {
        return Err(ProjectionError::DivisionByZero { quantity: "return on investment" });
    }
    let roi_percent = (total_profit / total_cost) * 100.0;

    if final_weight_kg == 0.0 {
        return Err(ProjectionError::DivisionByZero { quantity: "break-even price" });
    }
    let break_even_price_per_arroba = (total_cost / head_count) / final_weight_arrobas;

    let projection = LotProjection {
        final_weight_kg,
        final_weight_arrobas,
        acquisition_cost,
        feeding_cost,
        operational_cost: params.operational_cost,
        total_cost,
        gross_revenue,
        total_profit,
        profit_per_head,
        roi_percent,
        break_even_price_per_arroba,
    };

    if let Some((quantity, _)) = projection.fields().into_iter().find(|(_, v)| !v.is_finite()) {
        return Err(ProjectionError::NonFinite { quantity });
    }

    log::debug!(
        "Projected lot: {} head, {} days, final {:.1} kg, profit {:.2}, ROI {:.2}%",
        params.head_count, params.feeding_days, final_weight_kg, total_profit, roi_percent
    );

    Ok(projection)
}

/// Project a lot and classify the outcome
pub fn evaluate(params: &LotParameters) -> Result<LotOutcome, ProjectionError> {
    let projection = project(params)?;
    let verdict = classify(&projection, params);
    Ok(LotOutcome { projection, verdict })
}
