//! Working fluids and fluid property providers.
//!
//! The wellbore model never evaluates an equation of state itself. It asks a
//! [`FluidPropertyProvider`] for density, viscosity and enthalpy at a
//! pressure and temperature, and for the temperature at a pressure and
//! enthalpy. Any property library can be plugged in behind that trait.

mod capability;
mod error;

pub mod fluid;
pub mod model;

pub use capability::FluidPropertyProvider;
pub use error::PropertyError;
pub use fluid::{UnknownFluidError, WorkingFluid};
