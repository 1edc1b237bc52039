//! Semi-analytical wellbore solver.
//!
//! The well is split into equal straight segments. The formation response is
//! evaluated once for the elapsed time, then each segment is marched from the
//! known end, iterating between the pressure change and the energy balance.

mod config;
mod error;
mod geometry;
mod heat_loss;
mod input;
mod march;
mod pressure_drop;
mod resolved;
mod results;

#[cfg(test)]
mod test_support;

pub use config::WellSolverConfig;
pub use error::{InputError, WellError};
pub use geometry::WellGeometry;
pub use heat_loss::{
    TimeRegime, dimensionless_time, heat_transfer_factor, response_factor, time_regime,
};
pub use input::WellInput;
pub use pressure_drop::{FlowPath, FlowRegime, PressureChange, pressure_change};
pub use results::{FluidState, WellNode, WellResult};

use tracing::debug;

use crate::support::{simulation::GlobalSimulationProperties, thermo::FluidPropertyProvider};

use march::march;
use resolved::Resolved;

/// Solves a well from its known end.
///
/// Every input is validated before the first property lookup, so an
/// [`WellError::InvalidInput`] or [`WellError::InvalidGeometry`] never
/// reaches the provider.
///
/// # Errors
///
/// Returns [`WellError`] on invalid inputs, property failures, or a segment
/// that does not converge.
pub(super) fn solve(
    geometry: &WellGeometry,
    properties: &GlobalSimulationProperties,
    config: &WellSolverConfig,
    input: &WellInput,
    thermo: &impl FluidPropertyProvider,
) -> Result<WellResult, WellError> {
    let resolved = Resolved::new(geometry, properties, config, input)?;

    debug!(
        fluid = %resolved.fluid,
        segments = resolved.segments,
        response_factor = resolved.response_factor,
        heat_coefficient = resolved.heat_coefficient,
        "solving well"
    );

    let nodes = march(&resolved, thermo)?;
    let result = WellResult::new(
        resolved.fluid,
        resolved.elapsed_time,
        resolved.mass_flow,
        resolved.response_factor,
        nodes,
    );

    debug!(
        end_pressure = ?result.end_pressure(),
        end_temperature = ?result.end_temperature(),
        heat_gain = ?result.heat_gain(),
        "well solved"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, MassRate, Pressure, TemperatureInterval, ThermodynamicTemperature, Time},
        length::meter,
        mass_rate::kilogram_per_second,
        pressure::pascal,
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::{degree_celsius, kelvin},
        thermal_conductivity::watt_per_meter_kelvin,
        time::second,
    };

    use crate::support::{
        constraint::ConstraintError,
        thermo::{
            PropertyError, WorkingFluid,
            fluid::{CarbonDioxide, Water},
            model::{Incompressible, PerfectGas},
        },
        units::{TemperatureDifference, TemperatureGradient},
    };

    use super::test_support::CountingWater;

    const TEN_YEARS: f64 = 10.0 * 365.0 * 86_400.0;

    fn water() -> Incompressible<Water> {
        Incompressible::<Water>::new().unwrap()
    }

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    fn gradient(kelvin_per_meter: f64) -> TemperatureGradient {
        TemperatureInterval::new::<delta_kelvin>(kelvin_per_meter) / Length::new::<meter>(1.0)
    }

    fn production_well() -> WellGeometry {
        WellGeometry::vertical(Length::new::<meter>(2500.0), Length::new::<meter>(0.205))
            .with_temperature_gradient(gradient(-0.035))
    }

    fn injection_well() -> WellGeometry {
        WellGeometry::vertical(Length::new::<meter>(-3500.0), Length::new::<meter>(0.279))
            .with_temperature_gradient(gradient(0.06))
    }

    fn production_input() -> WellInput {
        WellInput::new(
            WorkingFluid::Water,
            Pressure::new::<pascal>(25e6),
            celsius(97.0),
            celsius(102.5),
            Time::new::<second>(TEN_YEARS),
            MassRate::new::<kilogram_per_second>(136.0),
        )
    }

    fn injection_input() -> WellInput {
        WellInput::new(
            WorkingFluid::Water,
            Pressure::new::<pascal>(1e6),
            celsius(25.0),
            celsius(15.0),
            Time::new::<second>(TEN_YEARS),
            MassRate::new::<kilogram_per_second>(5.0),
        )
    }

    fn run(
        geometry: &WellGeometry,
        config: &WellSolverConfig,
        input: &WellInput,
    ) -> Result<WellResult, WellError> {
        solve(
            geometry,
            &GlobalSimulationProperties::default(),
            config,
            input,
            &water(),
        )
    }

    #[test]
    fn adiabatic_horizontal_run_conserves_enthalpy() {
        let radius = Length::new::<meter>(0.279);
        let well = WellGeometry::horizontal(Length::new::<meter>(3000.0), radius);
        let config = WellSolverConfig::default().with_heat_loss(false);
        let result = run(&well, &config, &injection_input()).unwrap();

        let h_in = result.initial_state().enthalpy.value;
        assert_relative_eq!(result.end_enthalpy().value, h_in, max_relative = 1e-12);
        assert!(result.pressure_change().get::<pascal>() < 0.0);
        assert_eq!(result.heat_gain().value, 0.0);
        assert_eq!(result.nodes().len(), 101);
    }

    #[test]
    fn vertical_column_is_hydrostatic() {
        let config = WellSolverConfig::default().with_heat_loss(false);
        let mut input = production_input();
        input.mass_flow = MassRate::new::<kilogram_per_second>(1e-6);

        let result = run(&production_well(), &config, &input).unwrap();

        let rho = water().reference_density().value;
        let expected = 25e6 - rho * 9.81 * 2500.0;
        assert_relative_eq!(
            result.end_pressure().get::<pascal>(),
            expected,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            result.end_temperature().get::<kelvin>(),
            celsius(97.0).get::<kelvin>(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn horizontal_heat_exchange_follows_exponential_approach() {
        let radius = Length::new::<meter>(0.205);
        let length = 3000.0;
        let well = WellGeometry::horizontal(Length::new::<meter>(length), radius);
        let input = WellInput::new(
            WorkingFluid::Water,
            Pressure::new::<pascal>(1e6),
            celsius(25.0),
            celsius(80.0),
            Time::new::<second>(TEN_YEARS),
            MassRate::new::<kilogram_per_second>(5.0),
        );
        let props = GlobalSimulationProperties::default();
        let result = solve(&well, &props, &WellSolverConfig::default(), &input, &water()).unwrap();

        let f = response_factor(input.elapsed_time, radius, props.thermal_diffusivity()).unwrap();
        let u = 2.0 * std::f64::consts::PI
            * props.rock_thermal_conductivity.get::<watt_per_meter_kelvin>()
            / f;
        let ntu = u * length / (5.0 * water().specific_heat().value);
        let expected = 80.0 + (25.0 - 80.0) * (-ntu).exp();

        assert_relative_eq!(
            result.end_temperature().get::<degree_celsius>(),
            expected,
            epsilon = 1e-3
        );

        // Heat gained matches the enthalpy rise.
        let dh = result.end_enthalpy().value - result.initial_state().enthalpy.value;
        assert_relative_eq!(result.heat_gain().value, 5.0 * dh, max_relative = 1e-6);
    }

    #[test]
    fn lumped_segment_matches_fine_discretization() {
        let fine = run(
            &production_well(),
            &WellSolverConfig::default(),
            &production_input(),
        )
        .unwrap();
        let lumped = run(
            &production_well(),
            &WellSolverConfig::default().with_segments(1),
            &production_input(),
        )
        .unwrap();

        assert_eq!(lumped.nodes().len(), 2);
        let gap = fine.end_temperature().minus(lumped.end_temperature());
        assert!(
            gap.get::<delta_kelvin>().abs() < 0.01,
            "lumped and segmented end temperatures differ by {gap:?}"
        );
        assert_relative_eq!(
            fine.end_pressure().get::<pascal>(),
            lumped.end_pressure().get::<pascal>(),
            max_relative = 1e-4
        );
    }

    #[test]
    fn production_well_cools_slightly_on_the_way_up() {
        let result = run(&production_well(), &WellSolverConfig::default(), &production_input())
            .unwrap();

        let t_out = result.end_temperature().get::<degree_celsius>();
        assert!(t_out < 97.0 && t_out > 95.0, "outlet at {t_out} °C");
        assert!(result.heat_gain().value < 0.0);

        let top = result.nodes().last().unwrap();
        assert_relative_eq!(top.elevation.get::<meter>(), 2500.0, max_relative = 1e-12);
        assert_relative_eq!(
            top.formation_temperature.get::<degree_celsius>(),
            102.5 - 0.035 * 2500.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn vanishing_elapsed_time_returns_the_inlet_state() {
        let input = WellInput {
            elapsed_time: Time::new::<second>(1e-6),
            ..production_input()
        };
        let result = run(&production_well(), &WellSolverConfig::default(), &input).unwrap();

        // Only viscous heating remains, a few hundredths of a kelvin at most.
        let drift = result.end_temperature().minus(celsius(97.0));
        assert!(
            drift.get::<delta_kelvin>().abs() < 0.05,
            "end temperature drifted by {drift:?}"
        );
        assert!(
            result.heat_gain().value.abs() < 100.0,
            "heat exchanged: {:?}",
            result.heat_gain()
        );
    }

    #[test]
    fn heat_exchange_grows_with_elapsed_time() {
        // All times fall before the long-time regime of a 0.205 m well.
        let seconds = [10.0, 600.0, 3_600.0, 36_000.0, 140_000.0];
        let results: Vec<_> = seconds
            .iter()
            .map(|&t| {
                let input = WellInput {
                    elapsed_time: Time::new::<second>(t),
                    ..production_input()
                };
                run(&production_well(), &WellSolverConfig::default(), &input).unwrap()
            })
            .collect();

        for pair in results.windows(2) {
            let (earlier, later) = (&pair[0], &pair[1]);
            assert!(later.heat_gain().value < 0.0);
            assert!(
                later.heat_gain().value.abs() > earlier.heat_gain().value.abs(),
                "{:?} then {:?}",
                earlier.heat_gain(),
                later.heat_gain()
            );
            assert!(later.end_temperature() < earlier.end_temperature());
        }
    }

    #[test]
    fn deviated_well_uses_elevation_for_head_and_length_for_friction() {
        let radius = Length::new::<meter>(0.1);
        let well = WellGeometry::deviated(
            Length::new::<meter>(-300.0),
            Length::new::<meter>(400.0),
            radius,
        );
        let input = WellInput {
            mass_flow: MassRate::new::<kilogram_per_second>(20.0),
            ..injection_input()
        };
        let props = GlobalSimulationProperties::default();
        let config = WellSolverConfig::default().with_heat_loss(false);
        let result = solve(&well, &props, &config, &input, &water()).unwrap();

        let rho = water().reference_density();
        let mu = water()
            .viscosity(WorkingFluid::Water, input.pressure, input.temperature)
            .unwrap();
        let expected = pressure_change(
            rho,
            mu,
            input.mass_flow,
            &FlowPath {
                elevation_change: Length::new::<meter>(-300.0),
                length: Length::new::<meter>(500.0),
                radius,
                roughness: well.roughness,
            },
            props.friction_correlation,
            props.gravity,
        )
        .unwrap();

        assert_relative_eq!(
            expected.hydrostatic.get::<pascal>(),
            rho.value * 9.81 * 300.0,
            max_relative = 1e-12
        );
        assert!(expected.friction.get::<pascal>() < 0.0);
        assert_relative_eq!(
            result.pressure_change().get::<pascal>(),
            expected.total.get::<pascal>(),
            max_relative = 1e-6
        );
        assert_relative_eq!(
            result.nodes().last().unwrap().measured_length.get::<meter>(),
            500.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn deviated_well_exchanges_heat_over_its_measured_length() {
        let radius = Length::new::<meter>(0.1);
        let well = WellGeometry::deviated(
            Length::new::<meter>(-300.0),
            Length::new::<meter>(400.0),
            radius,
        )
        .with_temperature_gradient(gradient(0.0));
        let input = WellInput {
            formation_temperature: celsius(80.0),
            mass_flow: MassRate::new::<kilogram_per_second>(20.0),
            ..injection_input()
        };
        let props = GlobalSimulationProperties::default();
        let result = solve(&well, &props, &WellSolverConfig::default(), &input, &water()).unwrap();

        let phi =
            heat_transfer_factor(input.elapsed_time, radius, props.thermal_diffusivity()).unwrap();
        let u = 2.0
            * std::f64::consts::PI
            * props.rock_thermal_conductivity.get::<watt_per_meter_kelvin>()
            * phi;
        let ntu = u * 500.0 / (20.0 * water().specific_heat().value);
        let expected = 80.0 + (25.0 - 80.0) * (-ntu).exp();

        assert_relative_eq!(
            result.end_temperature().get::<degree_celsius>(),
            expected,
            epsilon = 1e-2
        );
    }

    #[test]
    fn perfect_gas_co2_production_expands_and_cools() {
        let input = WellInput {
            fluid: WorkingFluid::CarbonDioxide,
            ..production_input()
        };
        let co2 = PerfectGas::<CarbonDioxide>::new().unwrap();
        let result = solve(
            &production_well(),
            &GlobalSimulationProperties::default(),
            &WellSolverConfig::default(),
            &input,
            &co2,
        )
        .unwrap();

        let end_pressure = result.end_pressure().get::<pascal>();
        assert!(end_pressure < 25e6 && end_pressure > 1e7, "end pressure {end_pressure} Pa");

        // Lifting the gas costs enthalpy, and the rock above is cooler.
        let t_out = result.end_temperature().get::<degree_celsius>();
        assert!(t_out < 80.0 && t_out > 15.0, "outlet at {t_out} °C");
        assert!(result.heat_gain().value < 0.0);
    }

    #[test]
    fn perfect_gas_co2_injection_compresses_and_heats() {
        let input = WellInput {
            fluid: WorkingFluid::CarbonDioxide,
            ..injection_input()
        };
        let co2 = PerfectGas::<CarbonDioxide>::new().unwrap();
        let result = solve(
            &injection_well(),
            &GlobalSimulationProperties::default(),
            &WellSolverConfig::default(),
            &input,
            &co2,
        )
        .unwrap();

        let end_pressure = result.end_pressure().get::<pascal>();
        assert!(end_pressure > 1.3e6 && end_pressure < 2.5e6, "end pressure {end_pressure} Pa");

        // The rock warms 0.06 K/m on the way down to 225 °C.
        let t_out = result.end_temperature().get::<degree_celsius>();
        assert!(t_out > 100.0 && t_out < 225.0, "outlet at {t_out} °C");
        assert!(result.heat_gain().value > 0.0);
        assert_relative_eq!(
            result.nodes().last().unwrap().formation_temperature.get::<degree_celsius>(),
            15.0 + 0.06 * 3500.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn reports_convergence_failure() {
        let config = WellSolverConfig::default().with_max_iters(1);
        let error = run(&production_well(), &config, &production_input()).unwrap_err();

        let WellError::Convergence {
            segment,
            iterations,
            pressure_residual,
            ..
        } = error
        else {
            panic!("expected a convergence error, got {error:?}");
        };
        assert_eq!(segment, 0);
        assert_eq!(iterations, 1);
        assert!(pressure_residual.get::<pascal>() > 1.0);
    }

    #[test]
    fn unsupported_fluid_is_invalid_fluid() {
        let input = production_input();
        let co2 = WellInput {
            fluid: WorkingFluid::CarbonDioxide,
            ..input
        };
        assert_eq!(
            run(&production_well(), &WellSolverConfig::default(), &co2).unwrap_err(),
            WellError::InvalidFluid {
                fluid: WorkingFluid::CarbonDioxide
            }
        );
    }

    #[test]
    fn out_of_range_inlet_propagates_provider_error() {
        let input = WellInput {
            temperature: celsius(400.0),
            ..production_input()
        };
        let error = run(&production_well(), &WellSolverConfig::default(), &input).unwrap_err();
        assert!(
            matches!(
                error,
                WellError::Property {
                    source: PropertyError::OutOfDomain { .. },
                    ..
                }
            ),
            "unexpected error: {error:?}"
        );
    }

    #[test]
    fn invalid_inputs_never_reach_the_provider() {
        let props = GlobalSimulationProperties::default();
        let config = WellSolverConfig::default();
        let thermo = CountingWater::new();

        let cases = [
            (
                production_well(),
                WellInput {
                    elapsed_time: Time::new::<second>(0.0),
                    ..production_input()
                },
                WellError::InvalidInput(InputError::ElapsedTime(ConstraintError::Zero)),
            ),
            (
                WellGeometry::vertical(Length::new::<meter>(2500.0), Length::new::<meter>(0.0)),
                production_input(),
                WellError::InvalidInput(InputError::WellboreRadius(ConstraintError::Zero)),
            ),
            (
                production_well(),
                WellInput {
                    mass_flow: MassRate::new::<kilogram_per_second>(0.0),
                    ..production_input()
                },
                WellError::InvalidInput(InputError::MassFlow(ConstraintError::Zero)),
            ),
            (
                WellGeometry::vertical(Length::new::<meter>(0.0), Length::new::<meter>(0.205)),
                production_input(),
                WellError::InvalidGeometry,
            ),
        ];

        for (geometry, input, expected) in cases {
            assert_eq!(
                solve(&geometry, &props, &config, &input, &thermo).unwrap_err(),
                expected
            );
        }
        assert_eq!(thermo.calls(), 0);

        solve(&production_well(), &props, &config, &production_input(), &thermo).unwrap();
        assert!(thermo.calls() > 0);
    }

    #[test]
    fn chained_wells_carry_the_end_state() {
        let radius = Length::new::<meter>(0.279);
        let vertical = injection_well();
        let horizontal = WellGeometry::horizontal(Length::new::<meter>(3000.0), radius)
            .with_temperature_gradient(gradient(0.06));
        let config = WellSolverConfig::default();

        let down = run(&vertical, &config, &injection_input()).unwrap();
        let bottom_formation = celsius(15.0 + 0.06 * 3500.0);
        let chained = WellInput::continuing(&down, bottom_formation);

        assert_eq!(chained.pressure, down.end_pressure());
        assert_eq!(chained.temperature, down.end_temperature());
        assert_eq!(chained.mass_flow, injection_input().mass_flow);

        let across = run(&horizontal, &config, &chained).unwrap();

        // Going down gains roughly a hydrostatic head and warms the fluid.
        assert!(down.end_pressure().get::<pascal>() > 3.3e7);
        assert!(down.end_temperature() > celsius(25.0));

        // The horizontal section heats toward the formation without passing it.
        let t_mid = down.end_temperature().get::<degree_celsius>();
        let t_end = across.end_temperature().get::<degree_celsius>();
        assert!(t_end > t_mid && t_end < 225.0, "{t_mid} °C -> {t_end} °C");
        assert!(across.end_pressure() < down.end_pressure());
        assert_relative_eq!(
            across.initial_state().enthalpy.value,
            down.end_enthalpy().value,
            max_relative = 1e-9
        );
    }

    #[test]
    fn reverse_march_recovers_the_inlet() {
        let radius = Length::new::<meter>(0.205);
        let well = WellGeometry::horizontal(Length::new::<meter>(3000.0), radius);
        let config = WellSolverConfig::default();
        let forward = run(&well, &config, &injection_input()).unwrap();

        let backward_input = WellInput {
            pressure: forward.end_pressure(),
            temperature: forward.end_temperature(),
            mass_flow: -forward.mass_flow(),
            ..injection_input()
        };
        let backward = run(&well, &config, &backward_input).unwrap();

        assert_relative_eq!(
            backward.end_temperature().get::<kelvin>(),
            celsius(25.0).get::<kelvin>(),
            epsilon = 1e-4
        );
        assert_relative_eq!(
            backward.end_pressure().get::<pascal>(),
            1e6,
            epsilon = 1e-2
        );
    }

    #[test]
    fn reverse_march_rejects_overcoupled_segments() {
        let well = WellGeometry::horizontal(
            Length::new::<meter>(3000.0),
            Length::new::<meter>(0.279),
        );
        let input = WellInput {
            mass_flow: MassRate::new::<kilogram_per_second>(-1e-3),
            ..injection_input()
        };
        let error = run(&well, &WellSolverConfig::default(), &input).unwrap_err();

        let WellError::ReverseMarch { segment, ntu } = error else {
            panic!("expected a reverse march error, got {error:?}");
        };
        assert_eq!(segment, 0);
        assert!(ntu >= 2.0, "segment NTU {ntu}");
    }
}
