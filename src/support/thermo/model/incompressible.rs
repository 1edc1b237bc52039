//! Incompressible liquid model with constant properties.
//!
//! `Incompressible` implements a simple engineering approximation for liquids:
//! constant density, constant specific heat capacity and constant viscosity.
//!
//! # Assumptions
//!
//! - Density is treated as constant (`ρ = ρ_ref`)
//! - Calorically perfect liquid: `cp` is constant
//! - Enthalpy carries the flow work term: `h = h_ref + cp·(T − T_ref) + (p − p_ref)/ρ`
//!
//! The flow work term keeps the model consistent with a steady-flow energy
//! balance, so an adiabatic column of liquid stays isothermal while its
//! pressure changes hydrostatically.
//!
//! # Valid Envelope
//!
//! Queries are accepted for `273.16 K ≤ T ≤ 623.15 K` and `p > 0`.
//! Anything else fails with [`PropertyError::OutOfDomain`].

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
        pressure::{atmosphere, pascal},
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermodynamic_temperature::{degree_celsius, kelvin},
    },
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::{FluidPropertyProvider, PropertyError, WorkingFluid},
    units::{SpecificEnthalpy, TemperatureDifference},
};

/// Lowest accepted temperature, in kelvin.
const MIN_TEMPERATURE: f64 = 273.16;

/// Highest accepted temperature, in kelvin.
const MAX_TEMPERATURE: f64 = 623.15;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IncompressibleParametersError {
    #[error("invalid cp: {cp:?}")]
    Cp { cp: SpecificHeatCapacity },
    #[error("invalid density: {density:?}")]
    Density { density: MassDensity },
    #[error("invalid viscosity: {viscosity:?}")]
    Viscosity { viscosity: DynamicViscosity },
    #[error("invalid reference pressure: {p_ref:?}")]
    ReferencePressure { p_ref: Pressure },
}

/// Reference values used to define the enthalpy offset of an [`Incompressible`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncompressibleReference {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub enthalpy: SpecificEnthalpy,
}

impl Default for IncompressibleReference {
    /// Returns a reference with `T_ref = 25°C`, `p_ref = 1 atm` and `h_ref = 0`.
    fn default() -> Self {
        Self {
            temperature: ThermodynamicTemperature::new::<degree_celsius>(25.0),
            pressure: Pressure::new::<atmosphere>(1.0),
            enthalpy: SpecificEnthalpy::ZERO,
        }
    }
}

/// Constant parameters for the [`Incompressible`] model.
///
/// These values are typically provided by a fluid's [`IncompressibleFluid`] implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncompressibleParameters {
    pub cp: SpecificHeatCapacity,
    pub density: MassDensity,
    pub viscosity: DynamicViscosity,
    pub reference: IncompressibleReference,
}

impl IncompressibleParameters {
    #[must_use]
    pub fn new(
        cp: SpecificHeatCapacity,
        density: MassDensity,
        viscosity: DynamicViscosity,
    ) -> Self {
        Self {
            cp,
            density,
            viscosity,
            reference: IncompressibleReference::default(),
        }
    }

    #[must_use]
    pub fn with_reference(mut self, reference: IncompressibleReference) -> Self {
        self.reference = reference;
        self
    }
}

/// Fluid constants required by the [`Incompressible`] model.
pub trait IncompressibleFluid {
    /// The fluid this model answers queries for.
    const FLUID: WorkingFluid;

    /// Returns the constant parameters for use with [`Incompressible`].
    fn parameters() -> IncompressibleParameters;
}

/// Incompressible liquid model with constant density, heat capacity and viscosity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incompressible<Fluid> {
    cp: f64,
    rho: f64,
    mu: f64,
    t_ref: ThermodynamicTemperature,
    p_ref: f64,
    h_ref: SpecificEnthalpy,
    _marker: PhantomData<Fluid>,
}

impl<Fluid: IncompressibleFluid> Incompressible<Fluid> {
    /// Creates an incompressible model using constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`IncompressibleParametersError`] if any required constant is invalid.
    pub fn new() -> Result<Self, IncompressibleParametersError> {
        Self::with_parameters(Fluid::parameters())
    }

    /// Creates an incompressible model from explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns [`IncompressibleParametersError`] if any parameter is invalid.
    pub fn with_parameters(
        parameters: IncompressibleParameters,
    ) -> Result<Self, IncompressibleParametersError> {
        let cp = parameters.cp;
        if StrictlyPositive::check(&cp.value).is_err() {
            return Err(IncompressibleParametersError::Cp { cp });
        }

        let density = parameters.density;
        if StrictlyPositive::check(&density.value).is_err() {
            return Err(IncompressibleParametersError::Density { density });
        }

        let viscosity = parameters.viscosity;
        if StrictlyPositive::check(&viscosity.value).is_err() {
            return Err(IncompressibleParametersError::Viscosity { viscosity });
        }

        let p_ref = parameters.reference.pressure;
        if StrictlyPositive::check(&p_ref.value).is_err() {
            return Err(IncompressibleParametersError::ReferencePressure { p_ref });
        }

        Ok(Self {
            cp: cp.get::<joule_per_kilogram_kelvin>(),
            rho: density.get::<kilogram_per_cubic_meter>(),
            mu: viscosity.get::<pascal_second>(),
            t_ref: parameters.reference.temperature,
            p_ref: p_ref.get::<pascal>(),
            h_ref: parameters.reference.enthalpy,
            _marker: PhantomData,
        })
    }

    /// Returns the constant density used by this model.
    #[must_use]
    pub fn reference_density(&self) -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(self.rho)
    }

    /// Returns the constant specific heat capacity used by this model.
    #[must_use]
    pub fn specific_heat(&self) -> SpecificHeatCapacity {
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(self.cp)
    }

    fn check_fluid(fluid: WorkingFluid) -> Result<(), PropertyError> {
        if fluid == Fluid::FLUID {
            Ok(())
        } else {
            Err(PropertyError::UnsupportedFluid { fluid })
        }
    }

    fn check_pressure(pressure: Pressure) -> Result<f64, PropertyError> {
        let p = pressure.get::<pascal>();
        if p.is_finite() && p > 0.0 {
            Ok(p)
        } else {
            Err(PropertyError::out_of_domain(format!(
                "{} pressure {p} Pa must be positive",
                Fluid::FLUID
            )))
        }
    }

    fn check_temperature(temperature: ThermodynamicTemperature) -> Result<(), PropertyError> {
        let t = temperature.get::<kelvin>();
        if (MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&t) {
            Ok(())
        } else {
            Err(PropertyError::out_of_domain(format!(
                "{} temperature {t} K is outside [{MIN_TEMPERATURE}, {MAX_TEMPERATURE}] K",
                Fluid::FLUID
            )))
        }
    }

    fn check_state(
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<f64, PropertyError> {
        Self::check_fluid(fluid)?;
        Self::check_temperature(temperature)?;
        Self::check_pressure(pressure)
    }
}

impl<Fluid: IncompressibleFluid> FluidPropertyProvider for Incompressible<Fluid> {
    fn density(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<MassDensity, PropertyError> {
        Self::check_state(fluid, pressure, temperature)?;
        Ok(MassDensity::new::<kilogram_per_cubic_meter>(self.rho))
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

    /// Computes enthalpy with `h = h₀ + cp·(T − T₀) + (p − p₀)/ρ`.
    fn enthalpy(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let p = Self::check_state(fluid, pressure, temperature)?;
        let sensible = self.cp * temperature.minus(self.t_ref).value;
        let flow_work = (p - self.p_ref) / self.rho;
        Ok(self.h_ref + SpecificEnthalpy::new::<joule_per_kilogram>(sensible + flow_work))
    }

    /// Inverts the enthalpy relation in closed form.
    fn temperature_from_enthalpy(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        enthalpy: SpecificEnthalpy,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        Self::check_fluid(fluid)?;
        let p = Self::check_pressure(pressure)?;

        let dh = (enthalpy - self.h_ref).get::<joule_per_kilogram>();
        let t = self.t_ref.get::<kelvin>() + (dh - (p - self.p_ref) / self.rho) / self.cp;
        let temperature = ThermodynamicTemperature::new::<kelvin>(t);
        Self::check_temperature(temperature)?;
        Ok(temperature)
    }

    fn heat_capacity(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificHeatCapacity, PropertyError> {
        Self::check_state(fluid, pressure, temperature)?;
        Ok(self.specific_heat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::pressure::megapascal;

    use crate::support::thermo::fluid::Water;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct MockLiquid;

    impl IncompressibleFluid for MockLiquid {
        const FLUID: WorkingFluid = WorkingFluid::Water;

        fn parameters() -> IncompressibleParameters {
            IncompressibleParameters::new(
                SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(10_000.0),
                MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
                DynamicViscosity::new::<pascal_second>(1e-3),
            )
        }
    }

    fn mock_liquid_model() -> Incompressible<MockLiquid> {
        Incompressible::<MockLiquid>::new()
            .expect("mock liquid parameters must be physically valid")
    }

    #[test]
    fn enthalpy_grows_with_temperature_and_pressure() -> Result<(), PropertyError> {
        let thermo = mock_liquid_model();
        let p = Pressure::new::<megapascal>(1.0);
        let t_a = ThermodynamicTemperature::new::<degree_celsius>(30.0);
        let t_b = ThermodynamicTemperature::new::<degree_celsius>(60.0);

        let h_a = thermo.enthalpy(WorkingFluid::Water, p, t_a)?;
        let h_b = thermo.enthalpy(WorkingFluid::Water, p, t_b)?;
        assert_relative_eq!((h_b - h_a).value, 10_000.0 * 30.0, epsilon = 1e-6);

        let p_high = Pressure::new::<megapascal>(2.0);
        let h_c = thermo.enthalpy(WorkingFluid::Water, p_high, t_a)?;
        assert_relative_eq!((h_c - h_a).value, 1e6 / 1000.0, epsilon = 1e-9);

        Ok(())
    }

    #[test]
    fn temperature_from_enthalpy_inverts_enthalpy() -> Result<(), PropertyError> {
        let thermo = Incompressible::<Water>::new().unwrap();
        let p = Pressure::new::<megapascal>(25.0);
        let t = ThermodynamicTemperature::new::<degree_celsius>(67.0);

        let h = thermo.enthalpy(WorkingFluid::Water, p, t)?;
        let back = thermo.temperature_from_enthalpy(WorkingFluid::Water, p, h)?;
        assert_relative_eq!(back.get::<kelvin>(), t.get::<kelvin>(), epsilon = 1e-9);

        Ok(())
    }

    #[test]
    fn heat_capacity_matches_constant() -> Result<(), PropertyError> {
        let thermo = mock_liquid_model();
        let p = Pressure::new::<megapascal>(1.0);
        let t = ThermodynamicTemperature::new::<degree_celsius>(40.0);

        let cp = thermo.heat_capacity(WorkingFluid::Water, p, t)?;
        assert_relative_eq!(cp.get::<joule_per_kilogram_kelvin>(), 10_000.0);

        Ok(())
    }

    #[test]
    fn rejects_states_outside_envelope() {
        let thermo = mock_liquid_model();
        let p = Pressure::new::<megapascal>(1.0);

        let too_hot = ThermodynamicTemperature::new::<degree_celsius>(400.0);
        assert!(matches!(
            thermo.density(WorkingFluid::Water, p, too_hot),
            Err(PropertyError::OutOfDomain { .. })
        ));

        let t = ThermodynamicTemperature::new::<degree_celsius>(20.0);
        assert!(matches!(
            thermo.viscosity(WorkingFluid::Water, Pressure::new::<pascal>(-5.0), t),
            Err(PropertyError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn rejects_other_fluids() {
        let thermo = mock_liquid_model();
        let p = Pressure::new::<megapascal>(1.0);
        let t = ThermodynamicTemperature::new::<degree_celsius>(20.0);

        assert_eq!(
            thermo.density(WorkingFluid::CarbonDioxide, p, t),
            Err(PropertyError::UnsupportedFluid {
                fluid: WorkingFluid::CarbonDioxide
            })
        );
    }

    #[test]
    fn rejects_invalid_parameters() {
        let parameters = MockLiquid::parameters();
        let bad = IncompressibleParameters {
            density: MassDensity::ZERO,
            ..parameters
        };
        assert!(matches!(
            Incompressible::<MockLiquid>::with_parameters(bad),
            Err(IncompressibleParametersError::Density { .. })
        ));
    }
}
