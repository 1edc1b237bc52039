use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, SpecificHeatCapacity},
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::support::{
    thermo::{
        WorkingFluid,
        model::perfect_gas::{PerfectGasFluid, PerfectGasParameters},
    },
    units::SpecificGasConstant,
};

/// Marker for carbon dioxide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarbonDioxide;

impl PerfectGasFluid for CarbonDioxide {
    const FLUID: WorkingFluid = WorkingFluid::CarbonDioxide;

    fn parameters() -> PerfectGasParameters {
        PerfectGasParameters::new(
            SpecificGasConstant::new::<joule_per_kilogram_kelvin>(188.92),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(844.0),
            DynamicViscosity::new::<pascal_second>(1.5e-5),
        )
    }
}
