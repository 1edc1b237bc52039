//! Semi-analytical wellbore model.
//!
//! [`SemiAnalyticalWell`] computes the fluid state at the far end of a
//! straight well after the well has been flowing for some time. Heat
//! exchange with the formation uses a transient conduction response, and the
//! pressure change combines hydrostatic head with Darcy-Weisbach friction.
//!
//! ```
//! use twine_geothermal::{
//!     models::geothermal::well::{SemiAnalyticalWell, WellGeometry, WellInput},
//!     support::{
//!         simulation::GlobalSimulationProperties,
//!         thermo::{WorkingFluid, fluid::Water, model::Incompressible},
//!     },
//! };
//! use uom::si::{
//!     f64::{Length, MassRate, Pressure, ThermodynamicTemperature, Time},
//!     length::meter,
//!     mass_rate::kilogram_per_second,
//!     pressure::megapascal,
//!     thermodynamic_temperature::degree_celsius,
//!     time::year,
//! };
//!
//! let well = SemiAnalyticalWell::new(
//!     WellGeometry::vertical(Length::new::<meter>(2500.0), Length::new::<meter>(0.205)),
//!     GlobalSimulationProperties::default(),
//!     Incompressible::<Water>::new().unwrap(),
//! );
//!
//! let result = well
//!     .solve(&WellInput::new(
//!         WorkingFluid::Water,
//!         Pressure::new::<megapascal>(25.0),
//!         ThermodynamicTemperature::new::<degree_celsius>(97.0),
//!         ThermodynamicTemperature::new::<degree_celsius>(102.5),
//!         Time::new::<year>(10.0),
//!         MassRate::new::<kilogram_per_second>(136.0),
//!     ))
//!     .unwrap();
//!
//! assert!(result.end_pressure() < Pressure::new::<megapascal>(1.0));
//! ```

mod core;

pub use self::core::{
    FlowPath, FlowRegime, FluidState, InputError, PressureChange, TimeRegime, WellError,
    WellGeometry, WellInput, WellNode, WellResult, WellSolverConfig, dimensionless_time,
    heat_transfer_factor, pressure_change, response_factor, time_regime,
};

use twine_core::Model;

use crate::support::{simulation::GlobalSimulationProperties, thermo::FluidPropertyProvider};

/// A straight well solved by marching from its known end.
///
/// The well holds no state between solves: each call to
/// [`solve`](Self::solve) depends only on its input and the fixed geometry,
/// properties, configuration and property provider.
#[derive(Debug, Clone)]
pub struct SemiAnalyticalWell<Thermo> {
    geometry: WellGeometry,
    properties: GlobalSimulationProperties,
    config: WellSolverConfig,
    thermo: Thermo,
}

impl<Thermo: FluidPropertyProvider> SemiAnalyticalWell<Thermo> {
    /// Creates a well with the default [`WellSolverConfig`].
    pub fn new(
        geometry: WellGeometry,
        properties: GlobalSimulationProperties,
        thermo: Thermo,
    ) -> Self {
        Self {
            geometry,
            properties,
            config: WellSolverConfig::default(),
            thermo,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: WellSolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn geometry(&self) -> &WellGeometry {
        &self.geometry
    }

    pub fn properties(&self) -> &GlobalSimulationProperties {
        &self.properties
    }

    pub fn config(&self) -> &WellSolverConfig {
        &self.config
    }

    pub fn thermo(&self) -> &Thermo {
        &self.thermo
    }

    /// Solves the well for one set of conditions at its known end.
    ///
    /// # Errors
    ///
    /// Returns [`WellError`] if an input is invalid, the geometry is
    /// degenerate, the provider fails or does not support the fluid, or a
    /// segment does not converge.
    pub fn solve(&self, input: &WellInput) -> Result<WellResult, WellError> {
        self::core::solve(
            &self.geometry,
            &self.properties,
            &self.config,
            input,
            &self.thermo,
        )
    }
}

impl<Thermo: FluidPropertyProvider> Model for SemiAnalyticalWell<Thermo> {
    type Input = WellInput;
    type Output = WellResult;
    type Error = WellError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.solve(input)
    }
}
