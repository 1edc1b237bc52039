//! Hydrostatic and frictional pressure change along a straight segment.
//!
//! The hydrostatic term is `−ρ·g·dz`, so flowing downward gains pressure.
//! The frictional term is Darcy-Weisbach, `f·(L/D)·ρ·v²/2`, and always
//! opposes the flow: it is subtracted for a positive mass flow and added
//! when marching against the flow.

use std::f64::consts::PI;

use uom::si::{
    acceleration::meter_per_second_squared,
    dynamic_viscosity::pascal_second,
    f64::{Acceleration, DynamicViscosity, Length, MassDensity, MassRate, Pressure},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    pressure::pascal,
};

use crate::support::{
    constraint::{Constraint, NonZero, StrictlyPositive},
    simulation::FrictionCorrelation,
};

use super::InputError;

/// Reynolds number below which flow is laminar.
const LAMINAR_LIMIT: f64 = 2300.0;

/// Iteration cap for the implicit Colebrook-White equation.
const COLEBROOK_MAX_ITERS: usize = 50;

/// A straight piece of wellbore.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowPath {
    /// Signed elevation change in the direction of marching, positive upward.
    pub elevation_change: Length,

    /// Measured length along the path.
    pub length: Length,

    pub radius: Length,

    pub roughness: Length,
}

/// Flow regime selected by Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    Laminar,
    Turbulent,
}

impl FlowRegime {
    #[must_use]
    pub fn classify(reynolds: f64) -> Self {
        if reynolds < LAMINAR_LIMIT {
            Self::Laminar
        } else {
            Self::Turbulent
        }
    }

    /// Returns the Darcy friction factor for this regime.
    ///
    /// `relative_roughness` is `ε/D`.
    #[must_use]
    pub fn friction_factor(
        self,
        reynolds: f64,
        relative_roughness: f64,
        correlation: FrictionCorrelation,
    ) -> f64 {
        match self {
            Self::Laminar => 64.0 / reynolds,
            Self::Turbulent => match correlation {
                FrictionCorrelation::ColebrookWhite => {
                    colebrook_white(reynolds, relative_roughness)
                }
                FrictionCorrelation::Haaland => haaland(reynolds, relative_roughness),
                FrictionCorrelation::SwameeJain => swamee_jain(reynolds, relative_roughness),
            },
        }
    }
}

/// Components of the pressure change over a [`FlowPath`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureChange {
    pub hydrostatic: Pressure,
    pub friction: Pressure,
    pub total: Pressure,
    pub reynolds: f64,
    pub regime: FlowRegime,
    pub friction_factor: f64,
}

/// Computes the signed pressure change over a path.
///
/// # Errors
///
/// Returns [`InputError`] if the mass flow is zero or the density or
/// viscosity is not strictly positive.
pub fn pressure_change(
    density: MassDensity,
    viscosity: DynamicViscosity,
    mass_flow: MassRate,
    path: &FlowPath,
    correlation: FrictionCorrelation,
    gravity: Acceleration,
) -> Result<PressureChange, InputError> {
    NonZero::check(&mass_flow).map_err(InputError::MassFlow)?;
    StrictlyPositive::check(&density).map_err(InputError::Density)?;
    StrictlyPositive::check(&viscosity).map_err(InputError::Viscosity)?;

    let rho = density.get::<kilogram_per_cubic_meter>();
    let mu = viscosity.get::<pascal_second>();
    let m_dot = mass_flow.get::<kilogram_per_second>();
    let g = gravity.get::<meter_per_second_squared>();
    let diameter = 2.0 * path.radius.get::<meter>();
    let area = PI * diameter * diameter / 4.0;

    let reynolds = 4.0 * m_dot.abs() / (PI * diameter * mu);
    let regime = FlowRegime::classify(reynolds);
    let friction_factor =
        regime.friction_factor(reynolds, path.roughness.get::<meter>() / diameter, correlation);

    let velocity = m_dot / (rho * area);
    let friction_loss =
        friction_factor * path.length.get::<meter>() / diameter * rho * velocity * velocity / 2.0;

    let hydrostatic = -rho * g * path.elevation_change.get::<meter>();
    let friction = -m_dot.signum() * friction_loss;

    Ok(PressureChange {
        hydrostatic: Pressure::new::<pascal>(hydrostatic),
        friction: Pressure::new::<pascal>(friction),
        total: Pressure::new::<pascal>(hydrostatic + friction),
        reynolds,
        regime,
        friction_factor,
    })
}

fn haaland(reynolds: f64, relative_roughness: f64) -> f64 {
    let x = -1.8 * ((relative_roughness / 3.7).powf(1.11) + 6.9 / reynolds).log10();
    1.0 / (x * x)
}

fn swamee_jain(reynolds: f64, relative_roughness: f64) -> f64 {
    let log = (relative_roughness / 3.7 + 5.74 / reynolds.powf(0.9)).log10();
    0.25 / (log * log)
}

/// Solves `1/√f = −2·log10(ε/(3.7·D) + 2.51/(Re·√f))` by fixed-point iteration.
fn colebrook_white(reynolds: f64, relative_roughness: f64) -> f64 {
    let mut x = 1.0 / haaland(reynolds, relative_roughness).sqrt();
    for _ in 0..COLEBROOK_MAX_ITERS {
        let next = -2.0 * (relative_roughness / 3.7 + 2.51 * x / reynolds).log10();
        let done = (next - x).abs() <= 1e-12 * next.abs();
        x = next;
        if done {
            break;
        }
    }
    1.0 / (x * x)
}
