//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units at its public boundaries.
//! This module provides the quantities well modeling needs that [`uom`] does
//! not name directly, plus a temperature-difference helper.
//!
//! ## Temperature differences
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use twine_geothermal::support::units::TemperatureDifference;
//!
//! let formation = ThermodynamicTemperature::new::<degree_celsius>(102.5);
//! let fluid = ThermodynamicTemperature::new::<degree_celsius>(97.0);
//! let delta_t = formation.minus(fluid);
//! // delta_t is a TemperatureInterval of 5.5 K
//! ```
//!
//! ## Formation temperature gradients
//!
//! A [`TemperatureGradient`] is built by dividing an interval by a length:
//!
//! ```
//! use uom::si::f64::{Length, TemperatureInterval};
//! use uom::si::{length::meter, temperature_interval::kelvin};
//! use twine_geothermal::support::units::TemperatureGradient;
//!
//! let gradient: TemperatureGradient =
//!     TemperatureInterval::new::<kelvin>(0.06) / Length::new::<meter>(1.0);
//! assert!((gradient.value - 0.06).abs() < 1e-15);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{
    SpecificEnthalpy, SpecificGasConstant, TemperatureGradient, ThermalDiffusivity,
};
pub use temperature_difference::TemperatureDifference;
