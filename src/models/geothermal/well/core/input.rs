use uom::si::f64::{MassRate, Pressure, ThermodynamicTemperature, Time};

use crate::support::thermo::WorkingFluid;

use super::WellResult;

/// Per-call inputs to a well solve.
///
/// The mass flow is signed. A positive value marches in the direction of
/// flow; a negative value marches against it, from the known outlet back
/// to the inlet.
///
/// Marching against the flow undoes the approach to the formation
/// temperature, so the fluid-to-formation temperature difference grows by
/// roughly `e^NTU` over the well. Strongly coupled wells (long paths, low
/// flow) can therefore leave the provider's valid range, and a solve fails
/// with [`WellError::ReverseMarch`](super::WellError::ReverseMarch) once a
/// single segment's NTU reaches 2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WellInput {
    /// Fluid carried by the well.
    pub fluid: WorkingFluid,

    /// Fluid pressure at the known end.
    pub pressure: Pressure,

    /// Fluid temperature at the known end.
    pub temperature: ThermodynamicTemperature,

    /// Undisturbed formation temperature at the known end.
    pub formation_temperature: ThermodynamicTemperature,

    /// Time since the well started flowing.
    pub elapsed_time: Time,

    /// Signed mass flow rate.
    pub mass_flow: MassRate,
}

impl WellInput {
    #[must_use]
    pub fn new(
        fluid: WorkingFluid,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        formation_temperature: ThermodynamicTemperature,
        elapsed_time: Time,
        mass_flow: MassRate,
    ) -> Self {
        Self {
            fluid,
            pressure,
            temperature,
            formation_temperature,
            elapsed_time,
            mass_flow,
        }
    }

    /// Creates the input for a well fed by the end of a previous well.
    ///
    /// Fluid, end state, elapsed time and mass flow carry over; only the
    /// formation temperature at the new well's inlet must be given.
    #[must_use]
    pub fn continuing(
        previous: &WellResult,
        formation_temperature: ThermodynamicTemperature,
    ) -> Self {
        let end = previous.end_state();
        Self {
            fluid: end.fluid,
            pressure: end.pressure,
            temperature: end.temperature,
            formation_temperature,
            elapsed_time: previous.elapsed_time(),
            mass_flow: previous.mass_flow(),
        }
    }

    #[must_use]
    pub fn with_fluid(mut self, fluid: WorkingFluid) -> Self {
        self.fluid = fluid;
        self
    }
}
