use std::cell::Cell;

use uom::si::f64::{DynamicViscosity, MassDensity, Pressure, ThermodynamicTemperature};

use crate::support::{
    thermo::{
        FluidPropertyProvider, PropertyError, WorkingFluid, fluid::Water, model::Incompressible,
    },
    units::SpecificEnthalpy,
};

/// Incompressible water that counts every property lookup.
#[derive(Debug)]
pub(super) struct CountingWater {
    inner: Incompressible<Water>,
    calls: Cell<usize>,
}

impl CountingWater {
    pub(super) fn new() -> Self {
        Self {
            inner: Incompressible::<Water>::new().expect("water parameters are valid"),
            calls: Cell::new(0),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.get()
    }

    fn tick(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl FluidPropertyProvider for CountingWater {
    fn density(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<MassDensity, PropertyError> {
        self.tick();
        self.inner.density(fluid, pressure, temperature)
    }

    fn viscosity(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<DynamicViscosity, PropertyError> {
        self.tick();
        self.inner.viscosity(fluid, pressure, temperature)
    }

    fn enthalpy(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        self.tick();
        self.inner.enthalpy(fluid, pressure, temperature)
    }

    fn temperature_from_enthalpy(
        &self,
        fluid: WorkingFluid,
        pressure: Pressure,
        enthalpy: SpecificEnthalpy,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        self.tick();
        self.inner.temperature_from_enthalpy(fluid, pressure, enthalpy)
    }
}
