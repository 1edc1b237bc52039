//! Transient heat exchange between the wellbore and the formation.
//!
//! Conduction into an infinite formation around a cylinder gives a
//! dimensionless temperature response `f(t_D)` of the rock face, where
//! `t_D = α·t / r²`. The response is evaluated with one correlation per
//! [`TimeRegime`]:
//!
//! | Regime       | Range              | Response                                      |
//! |--------------|--------------------|-----------------------------------------------|
//! | `Short`      | `t_D < 1.5`        | `1.1281·√t_D·(1 − 0.3·√t_D)`                  |
//! | `Transition` | `1.5 ≤ t_D < 2.8`  | linear in `ln t_D` between the two neighbors  |
//! | `Long`       | `t_D ≥ 2.8`        | `1/β`, `β = 2/(ln 4t_D − 2γ) − 2γ/(ln 4t_D − 2γ)²` |
//!
//! with `γ = 0.58`. The response is continuous and non-decreasing in time.
//!
//! The heat transfer coefficient per unit well length is `2π·k·φ(t_D)`,
//! where the [heat transfer factor](heat_transfer_factor) `φ` is
//!
//! ```text
//! φ = f(t_D) / f*²   for t_D < 2.8
//! φ = 1 / f(t_D)     for t_D ≥ 2.8
//! ```
//!
//! and `f* = f(2.8)`. Before the long-time regime the coupling builds up
//! with the response, so exchange vanishes as `t → 0⁺` and grows with
//! elapsed time. From `t_D = 2.8` on, it is the long-time conduction
//! coefficient `2π·k/f`, and the two pieces meet continuously.

use uom::si::{
    f64::{Length, Time},
    length::meter,
    time::second,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    units::ThermalDiffusivity,
};

use super::InputError;

/// Upper bound of the short-time regime.
const SHORT_LIMIT: f64 = 1.5;

/// Lower bound of the long-time regime.
const LONG_LIMIT: f64 = 2.8;

/// Euler-constant approximation used by the long-time solution.
const GAMMA: f64 = 0.58;

/// Correlation regime selected by dimensionless time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRegime {
    Short,
    Transition,
    Long,
}

impl TimeRegime {
    /// Selects the regime for a dimensionless time.
    #[must_use]
    pub fn classify(t_d: f64) -> Self {
        if t_d < SHORT_LIMIT {
            Self::Short
        } else if t_d < LONG_LIMIT {
            Self::Transition
        } else {
            Self::Long
        }
    }

    /// Evaluates this regime's response at `t_d`.
    #[must_use]
    pub fn response(self, t_d: f64) -> f64 {
        match self {
            Self::Short => short_time(t_d),
            Self::Transition => transition(t_d),
            Self::Long => long_time(t_d),
        }
    }

    /// Evaluates this regime's heat transfer factor at `t_d`.
    #[must_use]
    pub fn heat_transfer(self, t_d: f64) -> f64 {
        match self {
            Self::Short | Self::Transition => {
                let settled = long_time(LONG_LIMIT);
                self.response(t_d) / (settled * settled)
            }
            Self::Long => 1.0 / long_time(t_d),
        }
    }
}

/// Returns the dimensionless time `t_D = α·t / r²`.
///
/// # Errors
///
/// Returns [`InputError`] if the elapsed time, radius or diffusivity is not
/// strictly positive.
pub fn dimensionless_time(
    elapsed_time: Time,
    wellbore_radius: Length,
    diffusivity: ThermalDiffusivity,
) -> Result<f64, InputError> {
    StrictlyPositive::check(&elapsed_time).map_err(InputError::ElapsedTime)?;
    StrictlyPositive::check(&wellbore_radius).map_err(InputError::WellboreRadius)?;
    StrictlyPositive::check(&diffusivity).map_err(InputError::Diffusivity)?;

    let r = wellbore_radius.get::<meter>();
    Ok(diffusivity.value * elapsed_time.get::<second>() / (r * r))
}

/// Returns the regime that applies after `elapsed_time`.
///
/// # Errors
///
/// Returns [`InputError`] under the same conditions as [`dimensionless_time`].
pub fn time_regime(
    elapsed_time: Time,
    wellbore_radius: Length,
    diffusivity: ThermalDiffusivity,
) -> Result<TimeRegime, InputError> {
    dimensionless_time(elapsed_time, wellbore_radius, diffusivity).map(TimeRegime::classify)
}

/// Returns the dimensionless formation response `f(t_D) ≥ 0`.
///
/// # Errors
///
/// Returns [`InputError`] under the same conditions as [`dimensionless_time`].
pub fn response_factor(
    elapsed_time: Time,
    wellbore_radius: Length,
    diffusivity: ThermalDiffusivity,
) -> Result<f64, InputError> {
    let t_d = dimensionless_time(elapsed_time, wellbore_radius, diffusivity)?;
    Ok(TimeRegime::classify(t_d).response(t_d))
}

/// Returns the heat transfer factor `φ ≥ 0`, the per-length coefficient
/// divided by `2π·k`.
///
/// # Errors
///
/// Returns [`InputError`] under the same conditions as [`dimensionless_time`].
pub fn heat_transfer_factor(
    elapsed_time: Time,
    wellbore_radius: Length,
    diffusivity: ThermalDiffusivity,
) -> Result<f64, InputError> {
    let t_d = dimensionless_time(elapsed_time, wellbore_radius, diffusivity)?;
    Ok(TimeRegime::classify(t_d).heat_transfer(t_d))
}

fn short_time(t_d: f64) -> f64 {
    let s = t_d.sqrt();
    1.1281 * s * (1.0 - 0.3 * s)
}

fn long_time(t_d: f64) -> f64 {
    let x = (4.0 * t_d).ln() - 2.0 * GAMMA;
    let beta = 2.0 / x - 2.0 * GAMMA / (x * x);
    1.0 / beta
}

fn transition(t_d: f64) -> f64 {
    let lo = short_time(SHORT_LIMIT);
    let hi = long_time(LONG_LIMIT);
    let w = (t_d.ln() - SHORT_LIMIT.ln()) / (LONG_LIMIT.ln() - SHORT_LIMIT.ln());
    lo + w * (hi - lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::{f64::Time, time::year};

    use crate::support::{constraint::ConstraintError, simulation::GlobalSimulationProperties};

    fn diffusivity() -> ThermalDiffusivity {
        GlobalSimulationProperties::default().thermal_diffusivity()
    }

    fn ten_years() -> Time {
        Time::new::<second>(10.0 * 365.0 * 86_400.0)
    }

    #[test]
    fn classifies_regimes() {
        assert_eq!(TimeRegime::classify(0.01), TimeRegime::Short);
        assert_eq!(TimeRegime::classify(1.5), TimeRegime::Transition);
        assert_eq!(TimeRegime::classify(2.0), TimeRegime::Transition);
        assert_eq!(TimeRegime::classify(2.8), TimeRegime::Long);
        assert_eq!(TimeRegime::classify(6000.0), TimeRegime::Long);
    }

    #[test]
    fn ten_year_production_well_is_long_time() {
        let radius = Length::new::<meter>(0.205);
        let t_d = dimensionless_time(ten_years(), radius, diffusivity()).unwrap();
        assert_relative_eq!(
            t_d,
            2.1 / 2.65e6 * 3.1536e8 / (0.205 * 0.205),
            max_relative = 1e-12
        );
        assert_eq!(
            time_regime(ten_years(), radius, diffusivity()).unwrap(),
            TimeRegime::Long
        );

        let x = (4.0 * t_d).ln() - 1.16;
        let expected = 1.0 / (2.0 / x - 1.16 / (x * x));
        assert_relative_eq!(
            response_factor(ten_years(), radius, diffusivity()).unwrap(),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn continuous_at_regime_boundaries() {
        for boundary in [SHORT_LIMIT, LONG_LIMIT] {
            let just_below = boundary * (1.0 - 1e-12);
            let below = TimeRegime::classify(just_below).response(just_below);
            let above = TimeRegime::classify(boundary).response(boundary);
            assert_relative_eq!(below, above, max_relative = 1e-9);
        }
    }

    #[test]
    fn long_time_heat_transfer_is_conduction_coefficient() {
        let radius = Length::new::<meter>(0.205);
        let f = response_factor(ten_years(), radius, diffusivity()).unwrap();
        assert_relative_eq!(
            heat_transfer_factor(ten_years(), radius, diffusivity()).unwrap(),
            1.0 / f,
            max_relative = 1e-12
        );
    }

    #[test]
    fn heat_transfer_is_continuous_and_vanishes_early() {
        for boundary in [SHORT_LIMIT, LONG_LIMIT] {
            let just_below = boundary * (1.0 - 1e-12);
            let below = TimeRegime::classify(just_below).heat_transfer(just_below);
            let above = TimeRegime::classify(boundary).heat_transfer(boundary);
            assert_relative_eq!(below, above, max_relative = 1e-9);
        }

        let radius = Length::new::<meter>(0.279);
        let early = heat_transfer_factor(Time::new::<second>(1e-3), radius, diffusivity()).unwrap();
        assert!(early > 0.0 && early < 1e-3, "factor after one millisecond was {early}");
    }

    #[test]
    fn vanishes_at_very_short_times() {
        let radius = Length::new::<meter>(0.279);
        let f = response_factor(Time::new::<second>(1e-3), radius, diffusivity()).unwrap();
        assert!(f < 1e-3, "response after one millisecond was {f}");
    }

    #[test]
    fn rejects_non_positive_inputs() {
        let radius = Length::new::<meter>(0.2);
        assert_eq!(
            response_factor(Time::new::<second>(0.0), radius, diffusivity()),
            Err(InputError::ElapsedTime(ConstraintError::Zero))
        );
        assert_eq!(
            response_factor(ten_years(), Length::new::<meter>(-0.2), diffusivity()),
            Err(InputError::WellboreRadius(ConstraintError::Negative))
        );
        assert_eq!(
            response_factor(ten_years(), radius, diffusivity() * 0.0),
            Err(InputError::Diffusivity(ConstraintError::Zero))
        );
    }

    proptest! {
        #[test]
        fn non_decreasing_in_time(
            years in 1e-9_f64..50.0,
            factor in 1.0_f64..10.0,
            radius in 0.05_f64..0.5,
        ) {
            let r = Length::new::<meter>(radius);
            let earlier = response_factor(Time::new::<year>(years), r, diffusivity()).unwrap();
            let later =
                response_factor(Time::new::<year>(years * factor), r, diffusivity()).unwrap();
            prop_assert!(later >= earlier);
            prop_assert!(earlier >= 0.0);
        }

        #[test]
        fn heat_transfer_grows_until_long_time(
            t_d in 1e-12_f64..LONG_LIMIT,
            factor in 1.0_f64..10.0,
        ) {
            let later_t_d = (t_d * factor).min(LONG_LIMIT);
            let earlier = TimeRegime::classify(t_d).heat_transfer(t_d);
            let later = TimeRegime::classify(later_t_d).heat_transfer(later_t_d);
            prop_assert!(later >= earlier * (1.0 - 1e-12));
            prop_assert!(earlier >= 0.0);
        }
    }
}
