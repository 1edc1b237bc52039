//! Segment-by-segment march from the known end of a well.
//!
//! Each segment starts from the state at its upstream node and iterates
//! between the pressure change and the energy balance until the end state
//! stops moving. The energy balance per segment is
//!
//! ```text
//! h_i = h_{i-1} + Q/ṁ − g·dz − (v_i² − v_{i-1}²)/2
//! Q   = U·dL·(T_e,mid − (T_{i-1} + T_i)/2)
//! ```
//!
//! and is solved implicitly in `T_i` through a local `cp`, which keeps large
//! heat transfer coefficients from oscillating.

use tracing::{trace, warn};
use uom::si::{
    acceleration::meter_per_second_squared,
    available_energy::joule_per_kilogram,
    f64::{
        Acceleration, Length, MassDensity, Power, Pressure, TemperatureInterval,
        ThermodynamicTemperature,
    },
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    power::watt,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{thermo::FluidPropertyProvider, units::SpecificEnthalpy};

use super::{WellError, WellNode, pressure_drop::pressure_change, resolved::Resolved};

/// Smallest accepted denominator of the implicit energy update.
const IMPLICIT_FLOOR: f64 = 1e-9;

/// Node state in SI base units.
#[derive(Debug, Clone, Copy)]
struct Point {
    p: f64,
    t: f64,
    h: f64,
    rho: f64,
}

/// Marches every segment and returns the node profile, inlet first.
pub(super) fn march(
    resolved: &Resolved,
    thermo: &impl FluidPropertyProvider,
) -> Result<Vec<WellNode>, WellError> {
    let fluid = resolved.fluid;
    let p_in = resolved.inlet_pressure;
    let t_in = resolved.inlet_temperature;

    let h_in = thermo
        .enthalpy(fluid, p_in, t_in)
        .map_err(|err| WellError::property_failed("enthalpy(inlet)", err))?;
    let rho_in = thermo
        .density(fluid, p_in, t_in)
        .map_err(|err| WellError::property_failed("density(inlet)", err))?;

    let mut prev = Point {
        p: p_in.get::<pascal>(),
        t: t_in.get::<kelvin>(),
        h: h_in.get::<joule_per_kilogram>(),
        rho: rho_in.get::<kilogram_per_cubic_meter>(),
    };

    let mut nodes = Vec::with_capacity(resolved.segments + 1);
    nodes.push(node(resolved, 0, prev, 0.0));

    for segment in 0..resolved.segments {
        let (next, heat) = solve_segment(resolved, thermo, segment, prev)?;
        nodes.push(node(resolved, segment + 1, next, heat));
        prev = next;
    }

    Ok(nodes)
}

/// Iterates one segment to convergence.
///
/// Returns the end state and the heat gained over the segment.
fn solve_segment(
    resolved: &Resolved,
    thermo: &impl FluidPropertyProvider,
    segment: usize,
    prev: Point,
) -> Result<(Point, f64), WellError> {
    let fluid = resolved.fluid;
    let z_mid = (segment as f64 + 0.5) * resolved.dz;
    let t_e_mid = resolved.formation_temperature(z_mid);
    let ua = resolved.heat_coefficient * resolved.dl;
    let m_dot = resolved.m_dot;
    let v_prev = m_dot / (prev.rho * resolved.area);
    let gravity = Acceleration::new::<meter_per_second_squared>(resolved.gravity);

    let failed = |what: &str, err| {
        WellError::property_failed(format!("{what}(segment {segment})"), err)
    };

    let mut guess = prev;
    let mut residuals = (f64::INFINITY, f64::INFINITY);

    for iteration in 1..=resolved.max_iters {
        let p_avg = 0.5 * (prev.p + guess.p);
        let t_avg = 0.5 * (prev.t + guess.t);

        let viscosity = thermo
            .viscosity(fluid, pa(p_avg), temp(t_avg))
            .map_err(|err| failed("viscosity", err))?;
        let density = MassDensity::new::<kilogram_per_cubic_meter>(0.5 * (prev.rho + guess.rho));

        let dp = pressure_change(
            density,
            viscosity,
            resolved.mass_flow,
            &resolved.segment,
            resolved.correlation,
            gravity,
        )?;
        let p_new = prev.p + dp.total.get::<pascal>();

        let q = ua * (t_e_mid - t_avg);
        let v_new = m_dot / (guess.rho * resolved.area);
        let h_explicit = prev.h + q / m_dot
            - resolved.gravity * resolved.dz
            - 0.5 * (v_new * v_new - v_prev * v_prev);

        let cp = thermo
            .heat_capacity(fluid, pa(p_new), temp(guess.t))
            .map_err(|err| failed("heat_capacity", err))?
            .get::<joule_per_kilogram_kelvin>();
        let Some(h_new) = implicit_enthalpy(h_explicit, guess.h, ua / (2.0 * m_dot), cp) else {
            let ntu = ua / (m_dot.abs() * cp);
            warn!(segment, ntu, "segment too strongly coupled to march against the flow");
            return Err(WellError::ReverseMarch { segment, ntu });
        };

        let t_new = thermo
            .temperature_from_enthalpy(fluid, pa(p_new), enthalpy(h_new))
            .map_err(|err| failed("temperature_from_enthalpy", err))?
            .get::<kelvin>();
        let rho_new = thermo
            .density(fluid, pa(p_new), temp(t_new))
            .map_err(|err| failed("density", err))?
            .get::<kilogram_per_cubic_meter>();

        residuals = ((t_new - guess.t).abs(), (p_new - guess.p).abs());
        guess = Point {
            p: p_new,
            t: t_new,
            h: h_new,
            rho: rho_new,
        };

        if residuals.0 < resolved.temperature_tol && residuals.1 < resolved.pressure_tol {
            trace!(segment, iterations = iteration, p = p_new, t = t_new, "segment converged");
            let heat = ua * (t_e_mid - 0.5 * (prev.t + t_new));
            return Ok((guess, heat));
        }
    }

    warn!(
        segment,
        iterations = resolved.max_iters,
        dt = residuals.0,
        dp = residuals.1,
        "segment did not converge"
    );
    Err(WellError::Convergence {
        segment,
        iterations: resolved.max_iters,
        temperature_residual: TemperatureInterval::new::<delta_kelvin>(residuals.0),
        pressure_residual: pa(residuals.1),
    })
}

/// Applies the linearized implicit correction to an explicit enthalpy.
///
/// With `b = U·dL/(2ṁ)`, the heat term depends on the unknown end
/// temperature as `−b·T_i`. Linearizing `T_i` about the current guess
/// through `cp` gives `h_i·(1 + b/cp) = h_explicit + (b/cp)·h_guess`. Falls
/// back to the explicit value when `cp` is not positive.
///
/// Returns `None` when the denominator collapses, which can only happen for
/// a negative mass flow.
fn implicit_enthalpy(h_explicit: f64, h_guess: f64, b: f64, cp: f64) -> Option<f64> {
    if cp <= 0.0 || !cp.is_finite() {
        return Some(h_explicit);
    }
    let k = b / cp;
    let denominator = 1.0 + k;
    if denominator <= IMPLICIT_FLOOR {
        return None;
    }
    Some((h_explicit + k * h_guess) / denominator)
}

fn node(resolved: &Resolved, index: usize, point: Point, heat: f64) -> WellNode {
    let i = index as f64;
    let z = i * resolved.dz;
    WellNode {
        elevation: Length::new::<meter>(z),
        measured_length: Length::new::<meter>(i * resolved.dl),
        pressure: pa(point.p),
        temperature: temp(point.t),
        enthalpy: enthalpy(point.h),
        density: MassDensity::new::<kilogram_per_cubic_meter>(point.rho),
        formation_temperature: temp(resolved.formation_temperature(z)),
        heat_gain: Power::new::<watt>(heat),
    }
}

fn pa(value: f64) -> Pressure {
    Pressure::new::<pascal>(value)
}

fn temp(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(value)
}

fn enthalpy(value: f64) -> SpecificEnthalpy {
    SpecificEnthalpy::new::<joule_per_kilogram>(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn implicit_update_without_heat_is_explicit() {
        assert_eq!(implicit_enthalpy(1.5e5, 1.0e5, 0.0, 4184.0), Some(1.5e5));
    }

    #[test]
    fn implicit_update_falls_back_without_heat_capacity() {
        assert_eq!(implicit_enthalpy(1.5e5, 1.0e5, 10.0, 0.0), Some(1.5e5));
        assert_eq!(implicit_enthalpy(1.5e5, 1.0e5, 10.0, f64::NAN), Some(1.5e5));
    }

    #[test]
    fn implicit_update_refuses_collapsed_denominator() {
        assert_eq!(implicit_enthalpy(1.5e5, 1.0e5, -5000.0, 4184.0), None);
        assert_eq!(implicit_enthalpy(1.5e5, 1.0e5, -4184.0, 4184.0), None);
        assert!(implicit_enthalpy(1.5e5, 1.0e5, -2000.0, 4184.0).is_some());
    }

    #[test]
    fn implicit_update_is_a_fixed_point_of_the_linear_balance() {
        // h = h_exp − k·(h − h_guess) must hold for the returned h.
        let (h_exp, h_guess, b, cp) = (2.0e5, 1.8e5, 2500.0, 4184.0);
        let h = implicit_enthalpy(h_exp, h_guess, b, cp).unwrap();
        assert_relative_eq!(h, h_exp - b / cp * (h - h_guess), max_relative = 1e-14);
    }
}
