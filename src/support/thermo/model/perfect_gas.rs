//! Calorically perfect gas model.
//!
//! `PerfectGas` implements a simple engineering approximation: an ideal gas
//! equation of state with a constant heat capacity and constant viscosity.
//!
//! # Assumptions
//!
//! - Ideal gas equation of state: `p = ρ·R·T`
//! - Calorically perfect: `cp` does not vary with temperature
//! - Enthalpy depends on temperature only: `h = h_ref + cp·(T − T_ref)`
//!
//! # When To Use
//!
//! Use this model for quick screening runs and tests. Supercritical CO2 in a
//! deep well is far from ideal; use [`super::CoolProp`] (when enabled) for
//! anything that has to match field data.

use std::marker::PhantomData;

use thiserror::Error;
use uom::{
    ConstZero,
    si::{
        available_energy::joule_per_kilogram,
        dynamic_viscosity::pascal_second,
        f64::{
            DynamicViscosity, MassDensity, Pressure, SpecificHeatCapacity,
            ThermodynamicTemperature,
        },
        mass_density::kilogram_per_cubic_meter,
        pressure::pascal,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermodynamic_temperature::{degree_celsius, kelvin},
    },
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::{FluidPropertyProvider, PropertyError, WorkingFluid},
    units::{SpecificEnthalpy, SpecificGasConstant, TemperatureDifference},
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PerfectGasParametersError {
    #[error("invalid gas constant R: {r:?}")]
    GasConstant { r: SpecificGasConstant },
    #[error("invalid cp: {cp:?}")]
    Cp { cp: SpecificHeatCapacity },
    #[error("invalid viscosity: {viscosity:?}")]
    Viscosity { viscosity: DynamicViscosity },
    #[error("non-physical heat capacities: cv = cp - R must be > 0; cp={cp:?}, R={r:?}")]
    NonPhysicalCv {
        r: SpecificGasConstant,
        cp: SpecificHeatCapacity,
    },
}

/// Reference values used to define the enthalpy offset of a [`PerfectGas`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGasReference {
    pub temperature: ThermodynamicTemperature,
    pub enthalpy: SpecificEnthalpy,
}

impl Default for PerfectGasReference {
    /// Returns a reference of 0°C and `h_ref = 0`.
    fn default() -> Self {
        Self {
            temperature: ThermodynamicTemperature::new::<degree_celsius>(0.0),
            enthalpy: SpecificEnthalpy::ZERO,
        }
    }
}

/// Constant parameters for the [`PerfectGas`] model.
///
/// These values are typically provided by a fluid's [`PerfectGasFluid`] implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGasParameters {
    pub gas_constant: SpecificGasConstant,
    pub cp: SpecificHeatCapacity,
    pub viscosity: DynamicViscosity,
    pub reference: PerfectGasReference,
}

impl PerfectGasParameters {
    #[must_use]
    pub fn new(
        gas_constant: SpecificGasConstant,
        cp: SpecificHeatCapacity,
        viscosity: DynamicViscosity,
    ) -> Self {
        Self {
            gas_constant,
            cp,
            viscosity,
            reference: PerfectGasReference::default(),
        }
    }

    #[must_use]
    pub fn with_reference(mut self, reference: PerfectGasReference) -> Self {
        self.reference = reference;
        self
    }
}

/// Fluid constants required by the [`PerfectGas`] model.
pub trait PerfectGasFluid {
    /// The fluid this model answers queries for.
    const FLUID: WorkingFluid;

    /// Returns the constant parameters for use with [`PerfectGas`].
    fn parameters() -> PerfectGasParameters;
}

/// Perfect gas model (constant `cp`) using the ideal gas equation of state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGas<Fluid> {
    r: f64,
    cp: f64,
    mu: f64,
    t_ref: ThermodynamicTemperature,
    h_ref: SpecificEnthalpy,
    _marker: PhantomData<Fluid>,
}

impl<Fluid: PerfectGasFluid> PerfectGas<Fluid> {
    /// Creates a perfect gas model using constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`PerfectGasParametersError`] if any required constant is
    /// invalid or if `cv = cp - R` is non-physical.
    pub fn new() -> Result<Self, PerfectGasParametersError> {
        let parameters = Fluid::parameters();

        let gas_constant = parameters.gas_constant;
        let r = gas_constant.get::<joule_per_kilogram_kelvin>();
        if StrictlyPositive::check(&r).is_err() {
            return Err(PerfectGasParametersError::GasConstant { r: gas_constant });
        }

        let cp = parameters.cp;
        if StrictlyPositive::check(&cp.get::<joule_per_kilogram_kelvin>()).is_err() {
            return Err(PerfectGasParametersError::Cp { cp });
        }

        if StrictlyPositive::check(&(cp.get::<joule_per_kilogram_kelvin>() - r)).is_err() {
            return Err(PerfectGasParametersError::NonPhysicalCv {
                r: gas_constant,
                cp,
            });
        }

        let viscosity = parameters.viscosity;
        if StrictlyPositive::check(&viscosity.get::<pascal_second>()).is_err() {
            return Err(PerfectGasParametersError::Viscosity { viscosity });
        }

        Ok(Self {
            r,
            cp: cp.get::<joule_per_kilogram_kelvin>(),
            mu: viscosity.get::<pascal_second>(),
            t_ref: parameters.reference.temperature,
            h_ref: parameters.reference.enthalpy,
            _marker: PhantomData,
        })
    }

    /// Validates the fluid and returns `(p, T)` in SI base units.
    fn check_state(
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<(f64, f64), PropertyError> {
        let p = Self::check_pressure(fluid, pressure)?;
        let t = temperature.get::<kelvin>();
        if !(t.is_finite() && t > 0.0) {
            return Err(PropertyError::out_of_domain(format!(
                "{fluid} temperature {t} K must be positive"
            )));
        }
        Ok((p, t))
    }

    fn check_pressure(fluid: WorkingFluid, pressure: Pressure) -> Result<f64, PropertyError> {
        if fluid != Fluid::FLUID {
            return Err(PropertyError::UnsupportedFluid { fluid });
        }
        let p = pressure.get::<pascal>();
        if p.is_finite() && p > 0.0 {
            Ok(p)
        } else {
            Err(PropertyError::out_of_domain(format!(
                "{fluid} pressure {p} Pa must be positive"
            )))
        }
    }
}

impl<Fluid: PerfectGasFluid> FluidPropertyProvider for PerfectGas<Fluid> {
    /// Computes density with `ρ = p/(R·T)`.
    fn density(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<MassDensity, PropertyError> {
        let (p, t) = Self::check_state(fluid, pressure, temperature)?;
        Ok(MassDensity::new::<kilogram_per_cubic_meter>(p / (self.r * t)))
    }

    fn viscosity(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<DynamicViscosity, PropertyError> {
        Self::check_state(fluid, pressure, temperature)?;
        Ok(DynamicViscosity::new::<pascal_second>(self.mu))
    }

    /// Computes enthalpy with `h = h₀ + cp·(T − T₀)`.
    fn enthalpy(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        Self::check_state(fluid, pressure, temperature)?;
        let sensible = self.cp * temperature.minus(self.t_ref).value;
        Ok(self.h_ref + SpecificEnthalpy::new::<joule_per_kilogram>(sensible))
    }

    fn temperature_from_enthalpy(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        enthalpy: SpecificEnthalpy,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        Self::check_pressure(fluid, pressure)?;
        let dh = (enthalpy - self.h_ref).get::<joule_per_kilogram>();
        let t = self.t_ref.get::<kelvin>() + dh / self.cp;
        if !(t.is_finite() && t > 0.0) {
            return Err(PropertyError::out_of_domain(format!(
                "{fluid} enthalpy {dh} J/kg above reference maps to non-physical temperature {t} K"
            )));
        }
        Ok(ThermodynamicTemperature::new::<kelvin>(t))
    }
}
