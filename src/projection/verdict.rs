//! Verdict classification and the lot narrative
//!
//! The verdict is structured data: a kind, a template and the values that
//! fill it. Symbols and styling belong to whichever surface renders it.

use super::LotProjection;
use crate::format;
use crate::lot::LotParameters;
use serde::Serialize;

/// Narrative template; placeholders are replaced by [`Verdict::narrative`]
pub const NARRATIVE_TEMPLATE: &str = "Strategy summary: to earn {profit_per_head} per head, \
the cattle must gain {daily_gain_kg} kg/day for {feeding_days} days. \
The break-even point is selling the arroba for at least {break_even_price}. \
Below that, the lot loses money. {message}";

/// Outcome classification of a lot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VerdictKind {
    Profitable,
    LossMaking,
}

impl VerdictKind {
    pub fn message(&self) -> &'static str {
        match self {
            VerdictKind::Profitable => "Scenario VIABLE and PROFITABLE.",
            VerdictKind::LossMaking => "LOSS scenario. Review costs or sale price.",
        }
    }
}

/// Values substituted into the narrative template
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NarrativeValues {
    pub profit_per_head: f64,
    pub daily_gain_kg: f64,
    pub feeding_days: u32,
    pub break_even_price_per_arroba: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub kind: VerdictKind,
    pub template: &'static str,
    pub values: NarrativeValues,
}

impl Verdict {
    /// Narrative with the plain verdict message
    pub fn narrative(&self) -> String {
        self.render(self.kind.message().to_string())
    }

    /// Narrative with a surface-specific marker in front of the verdict message
    pub fn narrative_with_marker(&self, marker: &str) -> String {
        self.render(format!("{} {}", marker, self.kind.message()))
    }

    fn render(&self, message: String) -> String {
        self.template
            .replace("{profit_per_head}", &format::currency(self.values.profit_per_head))
            .replace("{daily_gain_kg}", &self.values.daily_gain_kg.to_string())
            .replace("{feeding_days}", &self.values.feeding_days.to_string())
            .replace("{break_even_price}", &format::currency(self.values.break_even_price_per_arroba))
            .replace("{message}", &message)
    }
}

/// Classify a projected lot
///
/// Profitable only when profit is strictly positive; a lot that exactly
/// breaks even is a loss-making verdict.
pub fn classify(projection: &LotProjection, params: &LotParameters) -> Verdict {
    let kind = if projection.total_profit > 0.0 {
        VerdictKind::Profitable
    } else {
        VerdictKind::LossMaking
    };

    Verdict {
        kind,
        template: NARRATIVE_TEMPLATE,
        values: NarrativeValues {
            profit_per_head: projection.profit_per_head,
            daily_gain_kg: params.daily_gain_kg,
            feeding_days: params.feeding_days,
            break_even_price_per_arroba: projection.break_even_price_per_arroba,
        },
    }
}
