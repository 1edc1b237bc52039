//! CoolProp-backed fluid property model.

mod error;

use std::sync::{Mutex, MutexGuard};

use rfluids::{
    io::{FluidInputPair, FluidParam},
    native::AbstractState,
};
use uom::si::{
    available_energy::joule_per_kilogram,
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, MassDensity, Pressure, SpecificHeatCapacity, ThermodynamicTemperature,
    },
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    thermo::{FluidPropertyProvider, PropertyError, WorkingFluid},
    units::SpecificEnthalpy,
};

pub use error::CoolPropError;

/// CoolProp backend used for every fluid.
const BACKEND: &str = "HEOS";

/// A fluid property model backed by `CoolProp`'s Helmholtz equations of state.
///
/// One `AbstractState` is kept per supported fluid, each behind its own
/// mutex so that an update and the queries that follow it stay atomic.
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub struct CoolProp {
    water: Mutex<AbstractState>,
    carbon_dioxide: Mutex<AbstractState>,
}

impl CoolProp {
    /// Construct a new CoolProp-backed model for water and CO2.
    ///
    /// # Errors
    ///
    /// Returns [`CoolPropError`] if either `AbstractState` cannot be created.
    pub fn new() -> Result<Self, CoolPropError> {
        Ok(Self {
            water: Mutex::new(AbstractState::new(BACKEND, "Water")?),
            carbon_dioxide: Mutex::new(AbstractState::new(BACKEND, "CarbonDioxide")?),
        })
    }

    fn lock(&self, fluid: WorkingFluid) -> Result<MutexGuard<'_, AbstractState>, CoolPropError> {
        let state = match fluid {
            WorkingFluid::Water => &self.water,
            WorkingFluid::CarbonDioxide => &self.carbon_dioxide,
        };
        state
            .lock()
            .map_err(|_| CoolPropError::Poisoned { fluid })
    }

    /// Updates the fluid's state from pressure and temperature and reads one output.
    fn pt_output(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        param: FluidParam,
    ) -> Result<f64, CoolPropError> {
        let mut abstract_state = self.lock(fluid)?;
        abstract_state.update(
            FluidInputPair::PT,
            pressure.get::<pascal>(),
            temperature.get::<kelvin>(),
        )?;
        Ok(abstract_state.keyed_output(param)?)
    }
}

impl FluidPropertyProvider for CoolProp {
    fn density(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<MassDensity, PropertyError> {
        let density = self.pt_output(fluid, pressure, temperature, FluidParam::DMass)?;
        Ok(MassDensity::new::<kilogram_per_cubic_meter>(density))
    }

    fn viscosity(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<DynamicViscosity, PropertyError> {
        let viscosity =
            self.pt_output(fluid, pressure, temperature, FluidParam::DynamicViscosity)?;
        Ok(DynamicViscosity::new::<pascal_second>(viscosity))
    }

    fn enthalpy(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let enthalpy = self.pt_output(fluid, pressure, temperature, FluidParam::HMass)?;
        Ok(SpecificEnthalpy::new::<joule_per_kilogram>(enthalpy))
    }

    fn temperature_from_enthalpy(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        enthalpy: SpecificEnthalpy,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        let mut abstract_state = self.lock(fluid)?;
        abstract_state
            .update(
                FluidInputPair::HMassP,
                enthalpy.get::<joule_per_kilogram>(),
                pressure.get::<pascal>(),
            )
            .map_err(CoolPropError::Rfluids)?;
        let temperature = abstract_state
            .keyed_output(FluidParam::T)
            .map_err(CoolPropError::Rfluids)?;
        Ok(ThermodynamicTemperature::new::<kelvin>(temperature))
    }

    fn heat_capacity(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificHeatCapacity, PropertyError> {
        let cp = self.pt_output(fluid, pressure, temperature, FluidParam::CpMass)?;
        Ok(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp))
    }
}

// Static assertion: CoolProp must be Send + Sync so one instance can back
// concurrent well solves. rfluids serializes the FFI calls; the local mutexes
// keep update/query pairs atomic.
#[allow(dead_code)]
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn check() {
        assert_send_sync::<CoolProp>();
    }
};
