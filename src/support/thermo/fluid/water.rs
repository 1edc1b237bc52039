use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, MassDensity, SpecificHeatCapacity},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
};

use crate::support::thermo::{
    WorkingFluid,
    model::incompressible::{IncompressibleFluid, IncompressibleParameters},
};

/// Marker for liquid water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Water;

impl IncompressibleFluid for Water {
    const FLUID: WorkingFluid = WorkingFluid::Water;

    fn parameters() -> IncompressibleParameters {
        IncompressibleParameters::new(
            SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(4.184),
            MassDensity::new::<kilogram_per_cubic_meter>(997.047),
            DynamicViscosity::new::<pascal_second>(8.9e-4),
        )
    }
}
