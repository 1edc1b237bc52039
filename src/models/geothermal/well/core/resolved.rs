//! Validation and discretization of a well solve.

use std::f64::consts::PI;

use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Length, MassRate, Pressure, ThermodynamicTemperature, Time},
    length::meter,
    mass_rate::kilogram_per_second,
    pressure::pascal,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, NonNegative, NonZero, StrictlyPositive},
    simulation::{FrictionCorrelation, GlobalSimulationProperties},
    thermo::WorkingFluid,
};

use super::{
    FlowPath, InputError, WellError, WellGeometry, WellInput, WellSolverConfig, heat_loss,
};

/// Everything the segment march needs, checked and reduced to SI values.
///
/// Building a `Resolved` performs every input check, so once it exists the
/// only remaining failures come from the property provider or the iteration.
#[derive(Debug, Clone, Copy)]
pub(super) struct Resolved {
    pub fluid: WorkingFluid,
    pub inlet_pressure: Pressure,
    pub inlet_temperature: ThermodynamicTemperature,
    pub elapsed_time: Time,
    pub mass_flow: MassRate,

    pub segments: usize,
    pub max_iters: usize,
    pub temperature_tol: f64,
    pub pressure_tol: f64,

    /// One segment of the discretized flow path.
    pub segment: FlowPath,
    pub dz: f64,
    pub dl: f64,
    pub area: f64,

    pub m_dot: f64,
    pub gravity: f64,
    pub correlation: FrictionCorrelation,

    pub formation_inlet: f64,
    pub gradient: f64,

    pub response_factor: f64,

    /// Heat transfer coefficient per unit length, W/(m·K).
    pub heat_coefficient: f64,
}

impl Resolved {
    pub fn new(
        geometry: &WellGeometry,
        properties: &GlobalSimulationProperties,
        config: &WellSolverConfig,
        input: &WellInput,
    ) -> Result<Self, WellError> {
        let diffusivity = properties.thermal_diffusivity();
        let response_factor =
            heat_loss::response_factor(input.elapsed_time, geometry.radius, diffusivity)?;
        let heat_transfer_factor =
            heat_loss::heat_transfer_factor(input.elapsed_time, geometry.radius, diffusivity)?;
        StrictlyPositive::check(&properties.rock_thermal_conductivity)
            .map_err(InputError::Conductivity)?;
        NonZero::check(&input.mass_flow).map_err(InputError::MassFlow)?;
        StrictlyPositive::check(&input.pressure).map_err(InputError::InletPressure)?;
        NonNegative::check(&geometry.roughness).map_err(InputError::Roughness)?;
        NonNegative::check(&geometry.dr_total).map_err(InputError::HorizontalRun)?;
        NonZero::check(&config.segments).map_err(InputError::Segments)?;
        StrictlyPositive::check(&geometry.path_length()).map_err(|_| WellError::InvalidGeometry)?;

        let n = config.segments as f64;
        let dz = geometry.dz_total.get::<meter>() / n;
        let dr = geometry.dr_total.get::<meter>() / n;
        let dl = dz.hypot(dr);
        let radius = geometry.radius.get::<meter>();

        let heat_coefficient = if config.heat_loss {
            2.0 * PI
                * properties.rock_thermal_conductivity.get::<watt_per_meter_kelvin>()
                * heat_transfer_factor
        } else {
            0.0
        };

        Ok(Self {
            fluid: input.fluid,
            inlet_pressure: input.pressure,
            inlet_temperature: input.temperature,
            elapsed_time: input.elapsed_time,
            mass_flow: input.mass_flow,
            segments: config.segments,
            max_iters: config.max_iters.max(1),
            temperature_tol: config.temperature_tol.get::<delta_kelvin>(),
            pressure_tol: config.pressure_tol.get::<pascal>(),
            segment: FlowPath {
                elevation_change: Length::new::<meter>(dz),
                length: Length::new::<meter>(dl),
                radius: geometry.radius,
                roughness: geometry.roughness,
            },
            dz,
            dl,
            area: PI * radius * radius,
            m_dot: input.mass_flow.get::<kilogram_per_second>(),
            gravity: properties.gravity.get::<meter_per_second_squared>(),
            correlation: properties.friction_correlation,
            formation_inlet: input.formation_temperature.get::<kelvin>(),
            gradient: geometry.temperature_gradient.value,
            response_factor,
            heat_coefficient,
        })
    }

    /// Undisturbed formation temperature at elevation `z` relative to the inlet, in kelvin.
    ///
    /// The gradient applies to the distance travelled vertically, so its sign
    /// alone says whether the rock warms or cools along the flow path.
    pub fn formation_temperature(&self, z: f64) -> f64 {
        self.formation_inlet + self.gradient * z.abs()
    }
}
