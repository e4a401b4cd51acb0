//! Projection engine for single-lot feedlot projections

mod engine;
mod result;
mod verdict;

pub use engine::{evaluate, project, LotOutcome};
pub use result::LotProjection;
pub use verdict::{classify, NarrativeValues, Verdict, VerdictKind, NARRATIVE_TEMPLATE};
