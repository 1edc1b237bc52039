use uom::si::{
    f64::{Pressure, TemperatureInterval},
    pressure::pascal,
    temperature_interval::kelvin as delta_kelvin,
};

/// Discretization and iteration settings for a well solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WellSolverConfig {
    /// Number of equal segments along the flow path.
    ///
    /// A value of `1` treats the whole well as a single lumped segment.
    pub segments: usize,

    /// Maximum iteration count per segment.
    pub max_iters: usize,

    /// Convergence tolerance on the segment end temperature.
    pub temperature_tol: TemperatureInterval,

    /// Convergence tolerance on the segment end pressure.
    pub pressure_tol: Pressure,

    /// Whether the fluid exchanges heat with the formation.
    pub heat_loss: bool,
}

impl Default for WellSolverConfig {
    fn default() -> Self {
        Self {
            segments: 100,
            max_iters: 100,
            temperature_tol: TemperatureInterval::new::<delta_kelvin>(1e-6),
            pressure_tol: Pressure::new::<pascal>(1e-3),
            heat_loss: true,
        }
    }
}

impl WellSolverConfig {
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    #[must_use]
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    #[must_use]
    pub fn with_tolerances(mut self, temperature: TemperatureInterval, pressure: Pressure) -> Self {
        self.temperature_tol = temperature;
        self.pressure_tol = pressure;
        self
    }

    /// Disables or enables heat exchange with the formation.
    #[must_use]
    pub fn with_heat_loss(mut self, heat_loss: bool) -> Self {
        self.heat_loss = heat_loss;
        self
    }
}
