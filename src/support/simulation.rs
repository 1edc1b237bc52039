//! Process-wide simulation properties.
//!
//! [`GlobalSimulationProperties`] groups the formation and environment
//! constants every well in a study shares. It is built once, either in code
//! through the `with_*` builders or deserialized from a configuration file,
//! and handed to each well by value.
//!
//! ```
//! use twine_geothermal::support::simulation::GlobalSimulationProperties;
//! use uom::si::{f64::ThermalConductivity, thermal_conductivity::watt_per_meter_kelvin};
//!
//! let props = GlobalSimulationProperties::default()
//!     .with_rock_thermal_conductivity(ThermalConductivity::new::<watt_per_meter_kelvin>(3.0));
//! assert!(props.thermal_diffusivity().value > 1e-6);
//! ```

use serde::{Deserialize, Serialize};
use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, MassDensity, SpecificHeatCapacity, ThermalConductivity},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::units::ThermalDiffusivity;

/// Turbulent Darcy friction factor correlation.
///
/// Laminar flow always uses `f = 64/Re`; this selects the correlation used
/// once the flow is turbulent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrictionCorrelation {
    /// Implicit Colebrook-White equation, iterated from a Haaland estimate.
    #[default]
    ColebrookWhite,
    /// Explicit Haaland approximation.
    Haaland,
    /// Explicit Swamee-Jain approximation.
    SwameeJain,
}

/// Formation and environment constants shared by every well in a study.
///
/// Missing fields fall back to their defaults when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSimulationProperties {
    /// Rock thermal conductivity, 2.1 W/(m·K) by default.
    pub rock_thermal_conductivity: ThermalConductivity,

    /// Rock density, 2650 kg/m³ by default.
    pub rock_density: MassDensity,

    /// Rock specific heat capacity, 1000 J/(kg·K) by default.
    pub rock_specific_heat: SpecificHeatCapacity,

    /// Gravitational acceleration, 9.81 m/s² by default.
    pub gravity: Acceleration,

    /// Turbulent friction factor correlation.
    pub friction_correlation: FrictionCorrelation,
}

impl Default for GlobalSimulationProperties {
    fn default() -> Self {
        Self {
            rock_thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(2.1),
            rock_density: MassDensity::new::<kilogram_per_cubic_meter>(2650.0),
            rock_specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1000.0),
            gravity: Acceleration::new::<meter_per_second_squared>(9.81),
            friction_correlation: FrictionCorrelation::default(),
        }
    }
}

impl GlobalSimulationProperties {
    #[must_use]
    pub fn with_rock_thermal_conductivity(mut self, value: ThermalConductivity) -> Self {
        self.rock_thermal_conductivity = value;
        self
    }

    #[must_use]
    pub fn with_rock_density(mut self, value: MassDensity) -> Self {
        self.rock_density = value;
        self
    }

    #[must_use]
    pub fn with_rock_specific_heat(mut self, value: SpecificHeatCapacity) -> Self {
        self.rock_specific_heat = value;
        self
    }

    #[must_use]
    pub fn with_gravity(mut self, value: Acceleration) -> Self {
        self.gravity = value;
        self
    }

    #[must_use]
    pub fn with_friction_correlation(mut self, value: FrictionCorrelation) -> Self {
        self.friction_correlation = value;
        self
    }

    /// Returns the formation thermal diffusivity, `α = k / (ρ·c)`.
    #[must_use]
    pub fn thermal_diffusivity(&self) -> ThermalDiffusivity {
        self.rock_thermal_conductivity / (self.rock_density * self.rock_specific_heat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_diffusivity() {
        let props = GlobalSimulationProperties::default();
        assert_relative_eq!(
            props.thermal_diffusivity().value,
            2.1 / (2650.0 * 1000.0),
            max_relative = 1e-12
        );
    }

    #[test]
    fn builders_override_single_fields() {
        let props = GlobalSimulationProperties::default()
            .with_rock_density(MassDensity::new::<kilogram_per_cubic_meter>(2500.0))
            .with_friction_correlation(FrictionCorrelation::Haaland);

        assert_eq!(props.friction_correlation, FrictionCorrelation::Haaland);
        assert_relative_eq!(props.rock_density.get::<kilogram_per_cubic_meter>(), 2500.0);
        assert_relative_eq!(
            props.rock_thermal_conductivity.get::<watt_per_meter_kelvin>(),
            2.1
        );
    }

    #[test]
    fn deserializes_partial_toml() {
        let props: GlobalSimulationProperties = toml::from_str(
            r#"
            rock_thermal_conductivity = 3.0
            friction_correlation = "swamee_jain"
            "#,
        )
        .unwrap();

        assert_relative_eq!(
            props.rock_thermal_conductivity.get::<watt_per_meter_kelvin>(),
            3.0
        );
        assert_eq!(props.friction_correlation, FrictionCorrelation::SwameeJain);
        assert_relative_eq!(props.gravity.get::<meter_per_second_squared>(), 9.81);
        assert_relative_eq!(
            props.rock_specific_heat.get::<joule_per_kilogram_kelvin>(),
            1000.0
        );
    }

    #[test]
    fn empty_toml_is_default() {
        let props: GlobalSimulationProperties = toml::from_str("").unwrap();
        assert_eq!(props, GlobalSimulationProperties::default());
    }
}
