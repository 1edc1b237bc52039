//! Fluid property models.
//!
//! Each model implements [`FluidPropertyProvider`](super::FluidPropertyProvider).
//! [`Incompressible`] and [`PerfectGas`] cover a single fluid with constant
//! properties. [`CoolProp`] (behind the `coolprop` feature) covers both
//! fluids with full equations of state.

pub mod incompressible;
pub mod perfect_gas;

#[cfg(feature = "coolprop")]
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub mod coolprop;

pub use incompressible::Incompressible;
pub use perfect_gas::PerfectGas;

#[cfg(feature = "coolprop")]
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub use coolprop::CoolProp;
