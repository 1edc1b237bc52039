use uom::si::f64::Length;

use super::{CapitalCostWell, CostError, PriceIndex, PriceIndexTable, markup};

/// Base permitting cost of a well field, in reference-year dollars.
const PERMITTING: f64 = 665_700.0;

/// Additional CO2 permitting cost per square kilometer of monitored area.
const CO2_PERMITTING_PER_KM2: f64 = 45_000.0;

/// Surface monitoring cost per square kilometer of monitored area.
const SURFACE_MONITORING_PER_KM2: f64 = 138_000.0;

/// Square meters per square kilometer.
const M2_PER_KM2: f64 = 1e6;

/// Inputs to the CO2 monitoring cost of a well field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WellFieldCostInputs {
    /// Wells along one side of the square well pattern.
    pub well_count: u32,

    pub cost_year: u16,

    /// Measured length of each monitoring well.
    pub monitoring_well_length: Length,

    /// Radius of each monitoring well.
    pub monitoring_well_radius: Length,
}

impl WellFieldCostInputs {
    #[must_use]
    pub fn new(
        well_count: u32,
        cost_year: u16,
        monitoring_well_length: Length,
        monitoring_well_radius: Length,
    ) -> Self {
        Self {
            well_count,
            cost_year,
            monitoring_well_length,
            monitoring_well_radius,
        }
    }
}

/// Capital cost of permitting a well field and monitoring a CO2 plume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapitalCostWellField;

impl CapitalCostWellField {
    /// Returns the area that must be monitored for a CO2 plume, in m².
    ///
    /// The area is a square of side `max(N, 1)·1000 m + 1600 m`.
    #[must_use]
    pub fn co2_monitoring_area(well_count: u32) -> f64 {
        let side = f64::from(well_count.max(1)) * 1000.0 + 1600.0;
        side * side
    }

    /// Returns the base permitting cost.
    ///
    /// # Errors
    ///
    /// Returns the table's error if the permit index is unavailable.
    pub fn permitting(cost_year: u16, table: &impl PriceIndexTable) -> Result<f64, CostError> {
        let ppi = table.price_index(cost_year, PriceIndex::Permit)?;
        Ok(markup() * ppi * PERMITTING)
    }

    /// Returns the extra permitting cost of storing CO2.
    ///
    /// # Errors
    ///
    /// Returns the table's error if the permit index is unavailable.
    pub fn co2_permitting_increment(
        well_count: u32,
        cost_year: u16,
        table: &impl PriceIndexTable,
    ) -> Result<f64, CostError> {
        let ppi = table.price_index(cost_year, PriceIndex::Permit)?;
        let area = Self::co2_monitoring_area(well_count) / M2_PER_KM2;
        Ok(markup() * ppi * CO2_PERMITTING_PER_KM2 * area)
    }

    /// Returns the cost of monitoring wells and surface monitoring at baseline well costs.
    ///
    /// # Errors
    ///
    /// Returns [`CostError`] if a monitoring well input is invalid or an
    /// index is unavailable.
    pub fn co2_monitoring_wells_baseline(
        inputs: &WellFieldCostInputs,
        table: &impl PriceIndexTable,
    ) -> Result<f64, CostError> {
        let well = CapitalCostWell::water_baseline(
            inputs.monitoring_well_length,
            inputs.monitoring_well_radius,
            1.0,
            inputs.cost_year,
            table,
        )?;
        monitoring(inputs, well, table)
    }

    /// Returns the cost of monitoring wells and surface monitoring at ideal well costs.
    ///
    /// # Errors
    ///
    /// Same as [`co2_monitoring_wells_baseline`](Self::co2_monitoring_wells_baseline).
    pub fn co2_monitoring_wells_ideal(
        inputs: &WellFieldCostInputs,
        table: &impl PriceIndexTable,
    ) -> Result<f64, CostError> {
        let well = CapitalCostWell::water_ideal(
            inputs.monitoring_well_length,
            inputs.monitoring_well_radius,
            1.0,
            inputs.cost_year,
            table,
        )?;
        monitoring(inputs, well, table)
    }

    /// Total field cost for a CO2 system with baseline monitoring wells.
    ///
    /// Permitting, plus the CO2 permitting increment, plus monitoring.
    ///
    /// # Errors
    ///
    /// Returns [`CostError`] if an input is invalid or an index is unavailable.
    pub fn co2_monitoring_baseline(
        inputs: &WellFieldCostInputs,
        table: &impl PriceIndexTable,
    ) -> Result<f64, CostError> {
        Ok(Self::co2_permitting(inputs, table)?
            + Self::co2_monitoring_wells_baseline(inputs, table)?)
    }

    /// Total field cost for a CO2 system with ideal monitoring wells.
    ///
    /// # Errors
    ///
    /// Returns [`CostError`] if an input is invalid or an index is unavailable.
    pub fn co2_monitoring_ideal(
        inputs: &WellFieldCostInputs,
        table: &impl PriceIndexTable,
    ) -> Result<f64, CostError> {
        Ok(Self::co2_permitting(inputs, table)? + Self::co2_monitoring_wells_ideal(inputs, table)?)
    }

    /// Field cost of a CO2 system without plume monitoring.
    ///
    /// # Errors
    ///
    /// Returns the table's error if the permit index is unavailable.
    pub fn co2(cost_year: u16, table: &impl PriceIndexTable) -> Result<f64, CostError> {
        Self::permitting(cost_year, table)
    }

    /// Field cost of a water system.
    ///
    /// # Errors
    ///
    /// Returns the table's error if the permit index is unavailable.
    pub fn water(cost_year: u16, table: &impl PriceIndexTable) -> Result<f64, CostError> {
        Self::permitting(cost_year, table)
    }

    fn co2_permitting(
        inputs: &WellFieldCostInputs,
        table: &impl PriceIndexTable,
    ) -> Result<f64, CostError> {
        Ok(Self::permitting(inputs.cost_year, table)?
            + Self::co2_permitting_increment(inputs.well_count, inputs.cost_year, table)?)
    }
}

/// `N²` monitoring wells plus surface monitoring over the plume area.
fn monitoring(
    inputs: &WellFieldCostInputs,
    well_cost: f64,
    table: &impl PriceIndexTable,
) -> Result<f64, CostError> {
    let ppi = table.price_index(inputs.cost_year, PriceIndex::OilAndGasSupport)?;
    let area = CapitalCostWellField::co2_monitoring_area(inputs.well_count) / M2_PER_KM2;
    let n = f64::from(inputs.well_count);
    Ok(n * n * well_cost + markup() * ppi * SURFACE_MONITORING_PER_KM2 * area)
}
