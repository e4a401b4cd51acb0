//! Lot parameters and input loading

mod params;
pub mod loader;

pub use params::{LotParameters, ARROBA_KG};
pub use loader::{
    load_lots, load_lots_from_reader, load_parameters, load_parameters_from_reader, LotRecord,
};
