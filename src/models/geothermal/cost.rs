//! Capital costs of wells and of well-field permitting and monitoring.
//!
//! Every cost is a base cost in reference-year dollars escalated to a cost
//! year by a producer price index, then marked up by indirect and project
//! contingency factors. Price indices come from a [`PriceIndexTable`], which
//! callers fill from their own data; [`CostTable`] is an in-memory table that
//! can be deserialized from any `serde` format.
//!
//! ```
//! use twine_geothermal::models::geothermal::cost::{
//!     CapitalCostWell, CostTable, PriceIndex,
//! };
//! use uom::si::{f64::Length, length::meter};
//!
//! let table = CostTable::new()
//!     .with_index(2019, PriceIndex::OilAndGas, 1.0)
//!     .with_index(2019, PriceIndex::Permit, 1.0);
//!
//! let cost = CapitalCostWell::water_baseline(
//!     Length::new::<meter>(2500.0),
//!     Length::new::<meter>(0.205),
//!     0.95,
//!     2019,
//!     &table,
//! )
//! .unwrap();
//! assert!(cost > 1e6);
//! ```

mod error;
mod table;
mod well;
mod well_field;

pub use error::CostError;
pub use table::{CostTable, CostYear, PriceIndex, PriceIndexTable};
pub use well::CapitalCostWell;
pub use well_field::{CapitalCostWellField, WellFieldCostInputs};

/// Indirect cost multiplier.
const X_IC: f64 = 1.05;

/// Project contingency multiplier.
const X_PC: f64 = 1.15;

/// Combined markup applied to every escalated base cost.
fn markup() -> f64 {
    X_IC * X_PC
}
