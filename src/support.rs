//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric constraints used to validate inputs.
//! - [`simulation`]: Process-wide simulation properties (formation rock, gravity).
//! - [`thermo`]: Working fluids and fluid property providers.
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod simulation;
pub mod thermo;
pub mod units;
