use uom::si::{
    f64::{Length, TemperatureInterval},
    length::{meter, micrometer},
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::units::TemperatureGradient;

/// Increase of formation temperature with depth, K/m.
const GEOTHERMAL_GRADIENT: f64 = 0.035;

/// Fixed flow-path geometry of a well.
///
/// Elevation is measured along the flow direction and is positive upward:
/// a production well lifting fluid 2500 m has `dz_total = +2500 m`, an
/// injection well reaching 3500 m depth has `dz_total = -3500 m`.
///
/// The formation temperature at elevation `z` relative to the inlet is
/// `T_e(z) = T_e,inlet + temperature_gradient · |z|`. The gradient is signed
/// along the flow path: a production well rising through rock that cools
/// toward the surface takes a negative gradient (−0.035 K/m), an injection
/// well descending into warmer rock a positive one (0.06 K/m).
///
/// Constructors do not validate. The solver checks the geometry when a
/// well is solved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WellGeometry {
    /// Signed elevation change from inlet to outlet, positive upward.
    pub dz_total: Length,

    /// Total horizontal run.
    pub dr_total: Length,

    /// Wellbore radius.
    pub radius: Length,

    /// Absolute wall roughness.
    pub roughness: Length,

    /// Formation temperature change per unit of vertical distance travelled.
    pub temperature_gradient: TemperatureGradient,
}

impl WellGeometry {
    /// Default absolute roughness of a steel-cased well, 55 µm.
    #[must_use]
    pub fn default_roughness() -> Length {
        Length::new::<micrometer>(55.0)
    }

    /// Default formation gradient for a well with elevation change `dz_total`.
    ///
    /// The rock warms 0.035 K per meter of depth, so a rising well gets
    /// −0.035 K/m and a descending or level well gets 0.035 K/m.
    #[must_use]
    pub fn default_temperature_gradient(dz_total: Length) -> TemperatureGradient {
        let per_meter = if dz_total.get::<meter>() > 0.0 {
            -GEOTHERMAL_GRADIENT
        } else {
            GEOTHERMAL_GRADIENT
        };
        TemperatureInterval::new::<delta_kelvin>(per_meter) / Length::new::<meter>(1.0)
    }

    /// Creates a vertical well with the given signed elevation change.
    #[must_use]
    pub fn vertical(dz_total: Length, radius: Length) -> Self {
        Self::deviated(dz_total, Length::new::<meter>(0.0), radius)
    }

    /// Creates a horizontal well with the given run.
    #[must_use]
    pub fn horizontal(dr_total: Length, radius: Length) -> Self {
        Self::deviated(Length::new::<meter>(0.0), dr_total, radius)
    }

    /// Creates a straight deviated well from its elevation change and horizontal run.
    #[must_use]
    pub fn deviated(dz_total: Length, dr_total: Length, radius: Length) -> Self {
        Self {
            dz_total,
            dr_total,
            radius,
            roughness: Self::default_roughness(),
            temperature_gradient: Self::default_temperature_gradient(dz_total),
        }
    }

    #[must_use]
    pub fn with_roughness(mut self, roughness: Length) -> Self {
        self.roughness = roughness;
        self
    }

    #[must_use]
    pub fn with_temperature_gradient(mut self, gradient: TemperatureGradient) -> Self {
        self.temperature_gradient = gradient;
        self
    }

    /// Returns the measured length of the flow path, `sqrt(dz² + dr²)`.
    #[must_use]
    pub fn path_length(&self) -> Length {
        Length::new::<meter>(self.dz_total.get::<meter>().hypot(self.dr_total.get::<meter>()))
    }
}
