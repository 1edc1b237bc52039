use uom::si::f64::{
    Length, MassDensity, MassRate, Power, Pressure, ThermodynamicTemperature, Time,
};

use crate::support::{thermo::WorkingFluid, units::SpecificEnthalpy};

/// Thermodynamic state of the fluid at one end of a well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidState {
    pub fluid: WorkingFluid,
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
    pub enthalpy: SpecificEnthalpy,
}

/// Fluid and formation state at one node of the discretized well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WellNode {
    /// Elevation above the known end, positive upward.
    pub elevation: Length,

    /// Measured length from the known end.
    pub measured_length: Length,

    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
    pub enthalpy: SpecificEnthalpy,
    pub density: MassDensity,

    /// Undisturbed formation temperature at this node.
    pub formation_temperature: ThermodynamicTemperature,

    /// Heat gained by the fluid over the segment ending at this node.
    ///
    /// Zero for the first node.
    pub heat_gain: Power,
}

/// Outcome of a well solve.
///
/// The node profile always holds `segments + 1` nodes, ordered from the
/// known end.
#[derive(Debug, Clone, PartialEq)]
pub struct WellResult {
    initial: FluidState,
    end: FluidState,
    elapsed_time: Time,
    mass_flow: MassRate,
    response_factor: f64,
    nodes: Vec<WellNode>,
}

impl WellResult {
    pub(super) fn new(
        fluid: WorkingFluid,
        elapsed_time: Time,
        mass_flow: MassRate,
        response_factor: f64,
        nodes: Vec<WellNode>,
    ) -> Self {
        let state = |node: &WellNode| FluidState {
            fluid,
            pressure: node.pressure,
            temperature: node.temperature,
            enthalpy: node.enthalpy,
        };
        let initial = state(&nodes[0]);
        let end = state(&nodes[nodes.len() - 1]);
        Self {
            initial,
            end,
            elapsed_time,
            mass_flow,
            response_factor,
            nodes,
        }
    }

    #[must_use]
    pub fn end_pressure(&self) -> Pressure {
        self.end.pressure
    }

    #[must_use]
    pub fn end_temperature(&self) -> ThermodynamicTemperature {
        self.end.temperature
    }

    #[must_use]
    pub fn end_enthalpy(&self) -> SpecificEnthalpy {
        self.end.enthalpy
    }

    #[must_use]
    pub fn initial_state(&self) -> FluidState {
        self.initial
    }

    #[must_use]
    pub fn end_state(&self) -> FluidState {
        self.end
    }

    #[must_use]
    pub fn elapsed_time(&self) -> Time {
        self.elapsed_time
    }

    #[must_use]
    pub fn mass_flow(&self) -> MassRate {
        self.mass_flow
    }

    /// Dimensionless formation response used for the solve.
    #[must_use]
    pub fn response_factor(&self) -> f64 {
        self.response_factor
    }

    #[must_use]
    pub fn nodes(&self) -> &[WellNode] {
        &self.nodes
    }

    /// Total heat gained by the fluid from the formation.
    ///
    /// Negative when the fluid loses heat.
    #[must_use]
    pub fn heat_gain(&self) -> Power {
        self.nodes.iter().map(|node| node.heat_gain).sum()
    }

    /// Pressure at the far end minus pressure at the known end.
    #[must_use]
    pub fn pressure_change(&self) -> Pressure {
        self.end.pressure - self.initial.pressure
    }
}
