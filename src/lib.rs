//! Feedlot Simulator - profit projection engine for cattle-feeding lots
//!
//! This library provides:
//! - Lot input parameters with defaults, validation and file loaders
//! - A pure projection engine (final weight, costs, revenue, profit, ROI, break-even)
//! - Verdict classification with a structured narrative
//! - Terminal dashboard and fixed-layout document reporting

pub mod error;
pub mod format;
pub mod lot;
pub mod projection;
pub mod report;

// Re-export commonly used types
pub use error::{LoadError, ProjectionError};
pub use lot::{LotParameters, ARROBA_KG};
pub use projection::{classify, evaluate, project, LotOutcome, LotProjection, Verdict, VerdictKind};
pub use report::{Dashboard, LotDocument};
