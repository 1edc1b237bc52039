use uom::si::{f64::Length, length::meter};

use crate::support::constraint::{Constraint, StrictlyPositive, UnitIntervalLowerOpen};

use super::{CostError, PriceIndex, PriceIndexTable, markup};

/// Coefficients of the drilling cost curve `a·L² + b·L·D + c`, in dollars.
const A: f64 = 0.105;
const B: f64 = 1776.0;
const C: f64 = 2.753e5;

/// Flat reduction standing in for the learning curve of an ideal drilling campaign.
const IDEAL_LEARNING: f64 = 0.8;

/// Capital cost of drilling and completing a single water well.
///
/// The cost follows a quadratic in measured length `L` with a cross term in
/// diameter `D`, escalated by the oil and gas drilling index and divided by
/// the drilling success rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapitalCostWell;

impl CapitalCostWell {
    /// Returns the baseline well cost in cost-year dollars.
    ///
    /// # Errors
    ///
    /// Returns [`CostError::InvalidInput`] if the length or radius is not
    /// strictly positive or the success rate is outside `(0, 1]`, and the
    /// table's error if the price index is unavailable.
    pub fn water_baseline(
        length: Length,
        radius: Length,
        success_rate: f64,
        cost_year: u16,
        table: &impl PriceIndexTable,
    ) -> Result<f64, CostError> {
        drilling_cost(length, radius, success_rate, cost_year, table)
    }

    /// Returns the well cost after full learning-curve reductions.
    ///
    /// # Errors
    ///
    /// Same as [`water_baseline`](Self::water_baseline).
    pub fn water_ideal(
        length: Length,
        radius: Length,
        success_rate: f64,
        cost_year: u16,
        table: &impl PriceIndexTable,
    ) -> Result<f64, CostError> {
        drilling_cost(length, radius, success_rate, cost_year, table)
            .map(|cost| IDEAL_LEARNING * cost)
    }
}

fn drilling_cost(
    length: Length,
    radius: Length,
    success_rate: f64,
    cost_year: u16,
    table: &impl PriceIndexTable,
) -> Result<f64, CostError> {
    StrictlyPositive::check(&length).map_err(CostError::invalid("well length"))?;
    StrictlyPositive::check(&radius).map_err(CostError::invalid("well radius"))?;
    UnitIntervalLowerOpen::check(&success_rate).map_err(CostError::invalid("success rate"))?;

    let ppi = table.price_index(cost_year, PriceIndex::OilAndGas)?;
    let l = length.get::<meter>();
    let d = 2.0 * radius.get::<meter>();

    Ok(markup() * ppi * (A * l * l + B * l * d + C) / success_rate)
}
