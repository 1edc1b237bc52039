use thiserror::Error;
use uom::si::f64::{Pressure, TemperatureInterval};

use crate::support::{
    constraint::ConstraintError,
    thermo::{PropertyError, WorkingFluid},
};

/// An input that violates its physical constraint.
///
/// Every variant is detected before the first fluid property lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("elapsed time must be strictly positive")]
    ElapsedTime(#[source] ConstraintError),

    #[error("wellbore radius must be strictly positive")]
    WellboreRadius(#[source] ConstraintError),

    #[error("formation thermal diffusivity must be strictly positive")]
    Diffusivity(#[source] ConstraintError),

    #[error("formation thermal conductivity must be strictly positive")]
    Conductivity(#[source] ConstraintError),

    #[error("mass flow rate must not be zero")]
    MassFlow(#[source] ConstraintError),

    #[error("fluid density must be strictly positive")]
    Density(#[source] ConstraintError),

    #[error("fluid viscosity must be strictly positive")]
    Viscosity(#[source] ConstraintError),

    #[error("inlet pressure must be strictly positive")]
    InletPressure(#[source] ConstraintError),

    #[error("wellbore roughness must not be negative")]
    Roughness(#[source] ConstraintError),

    #[error("horizontal run must not be negative")]
    HorizontalRun(#[source] ConstraintError),

    #[error("a well needs at least one segment")]
    Segments(#[source] ConstraintError),
}

/// Errors that can occur while solving a well.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WellError {
    /// An input failed validation.
    #[error("invalid input")]
    InvalidInput(#[from] InputError),

    /// Both the elevation change and the horizontal run are zero.
    #[error("degenerate well geometry: the flow path has zero length")]
    InvalidGeometry,

    /// The property provider has no data for the requested fluid.
    #[error("fluid {fluid} is not supported by the property provider")]
    InvalidFluid { fluid: WorkingFluid },

    /// A segment hit the iteration cap without meeting both tolerances.
    #[error(
        "segment {segment} did not converge in {iterations} iterations: \
         dT={temperature_residual:?}, dP={pressure_residual:?}"
    )]
    Convergence {
        /// Zero-based segment index, counted from the inlet.
        segment: usize,

        /// Iterations performed on the segment.
        iterations: usize,

        /// Temperature change over the last iteration.
        temperature_residual: TemperatureInterval,

        /// Pressure change over the last iteration.
        pressure_residual: Pressure,
    },

    /// A segment exchanges too much heat to be marched against the flow.
    ///
    /// Marching backward, the implicit energy update breaks down once a
    /// segment's NTU, `U·dL/(|ṁ|·cp)`, reaches 2.
    #[error(
        "segment {segment} cannot be marched against the flow: segment NTU {ntu} reaches 2"
    )]
    ReverseMarch {
        /// Zero-based segment index, counted from the known end.
        segment: usize,

        /// Number of transfer units of the segment.
        ntu: f64,
    },

    /// A fluid property lookup failed.
    ///
    /// The provider's error is carried unmodified as the source.
    #[error("fluid property evaluation failed: {context}")]
    Property {
        /// Which lookup failed.
        context: String,

        #[source]
        source: PropertyError,
    },
}

impl WellError {
    /// Wraps a provider failure with the lookup that produced it.
    ///
    /// An [`PropertyError::UnsupportedFluid`] becomes [`WellError::InvalidFluid`].
    pub(super) fn property_failed(context: impl Into<String>, err: PropertyError) -> Self {
        match err {
            PropertyError::UnsupportedFluid { fluid } => Self::InvalidFluid { fluid },
            source => Self::Property {
                context: context.into(),
                source,
            },
        }
    }
}
