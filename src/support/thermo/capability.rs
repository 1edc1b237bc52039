use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{
        DynamicViscosity, MassDensity, Pressure, SpecificHeatCapacity, TemperatureInterval,
        ThermodynamicTemperature,
    },
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::units::SpecificEnthalpy;

use super::{PropertyError, WorkingFluid};

/// Temperature step used by [`FluidPropertyProvider::heat_capacity`], in kelvin.
const HEAT_CAPACITY_STEP: f64 = 0.01;

/// Fluid property lookups consumed by the wellbore model.
///
/// Implementations must be safe for concurrent reads when shared between
/// threads: any caching has to be load-once, then immutable.
///
/// Every method fails with [`PropertyError::OutOfDomain`] outside the fluid's
/// valid pressure-temperature envelope, and with
/// [`PropertyError::UnsupportedFluid`] for fluids the provider has no data for.
pub trait FluidPropertyProvider {
    /// Returns the density at the given pressure and temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the density cannot be calculated.
    fn density(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<MassDensity, PropertyError>;

    /// Returns the dynamic viscosity at the given pressure and temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the viscosity cannot be calculated.
    fn viscosity(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<DynamicViscosity, PropertyError>;

    /// Returns the specific enthalpy at the given pressure and temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the enthalpy cannot be calculated.
    fn enthalpy(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEnthalpy, PropertyError>;

    /// Returns the temperature at the given pressure and specific enthalpy.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature cannot be calculated.
    fn temperature_from_enthalpy(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        enthalpy: SpecificEnthalpy,
    ) -> Result<ThermodynamicTemperature, PropertyError>;

    /// Returns the isobaric specific heat capacity.
    ///
    /// The default implementation takes a forward difference of
    /// [`enthalpy`](Self::enthalpy) over a 0.01 K step.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if either enthalpy evaluation fails.
    fn heat_capacity(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificHeatCapacity, PropertyError> {
        let step = TemperatureInterval::new::<delta_kelvin>(HEAT_CAPACITY_STEP);
        let h_lo = self.enthalpy(fluid, pressure, temperature)?;
        let h_hi = self.enthalpy(fluid, pressure, temperature + step)?;
        let cp = (h_hi - h_lo).get::<joule_per_kilogram>() / HEAT_CAPACITY_STEP;
        Ok(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp))
    }
}

impl<T: FluidPropertyProvider + ?Sized> FluidPropertyProvider for &T {
    fn density(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<MassDensity, PropertyError> {
        (**self).density(fluid, pressure, temperature)
    }

    fn viscosity(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<DynamicViscosity, PropertyError> {
        (**self).viscosity(fluid, pressure, temperature)
    }

    fn enthalpy(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        (**self).enthalpy(fluid, pressure, temperature)
    }

    fn temperature_from_enthalpy(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        enthalpy: SpecificEnthalpy,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        (**self).temperature_from_enthalpy(fluid, pressure, enthalpy)
    }

    fn heat_capacity(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificHeatCapacity, PropertyError> {
        (**self).heat_capacity(fluid, pressure, temperature)
    }
}
