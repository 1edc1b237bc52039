use std::fmt;

use serde::{Deserialize, Serialize};

use super::CostError;

/// A named producer price index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceIndex {
    /// Oil and gas drilling, `PPI_O&G`.
    #[serde(rename = "PPI_O&G")]
    OilAndGas,

    /// Oil and gas support activities, `PPI_O&G-s`.
    #[serde(rename = "PPI_O&G-s")]
    OilAndGasSupport,

    /// Permitting, `PPI_Permit`.
    #[serde(rename = "PPI_Permit")]
    Permit,
}

impl PriceIndex {
    /// Returns the column name used in cost tables.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PriceIndex::OilAndGas => "PPI_O&G",
            PriceIndex::OilAndGasSupport => "PPI_O&G-s",
            PriceIndex::Permit => "PPI_Permit",
        }
    }
}

impl fmt::Display for PriceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Source of year-indexed price multipliers.
///
/// Implementations must be safe for concurrent reads once loaded.
pub trait PriceIndexTable {
    /// Returns the value of `index` for `cost_year`.
    ///
    /// # Errors
    ///
    /// Returns [`CostError::MissingCostYear`] if the year is absent and
    /// [`CostError::UnknownIndex`] if the year lacks the index.
    fn price_index(&self, cost_year: u16, index: PriceIndex) -> Result<f64, CostError>;
}

impl<T: PriceIndexTable + ?Sized> PriceIndexTable for &T {
    fn price_index(&self, cost_year: u16, index: PriceIndex) -> Result<f64, CostError> {
        (**self).price_index(cost_year, index)
    }
}

/// Price indices for one cost year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostYear {
    pub year: u16,

    #[serde(rename = "PPI_O&G", default, skip_serializing_if = "Option::is_none")]
    pub oil_and_gas: Option<f64>,

    #[serde(rename = "PPI_O&G-s", default, skip_serializing_if = "Option::is_none")]
    pub oil_and_gas_support: Option<f64>,

    #[serde(rename = "PPI_Permit", default, skip_serializing_if = "Option::is_none")]
    pub permit: Option<f64>,
}

impl CostYear {
    fn get(&self, index: PriceIndex) -> Option<f64> {
        match index {
            PriceIndex::OilAndGas => self.oil_and_gas,
            PriceIndex::OilAndGasSupport => self.oil_and_gas_support,
            PriceIndex::Permit => self.permit,
        }
    }

    fn set(&mut self, index: PriceIndex, value: f64) {
        let slot = match index {
            PriceIndex::OilAndGas => &mut self.oil_and_gas,
            PriceIndex::OilAndGasSupport => &mut self.oil_and_gas_support,
            PriceIndex::Permit => &mut self.permit,
        };
        *slot = Some(value);
    }
}

/// In-memory [`PriceIndexTable`].
///
/// Deserializes from a list of yearly rows, for example in TOML:
///
/// ```toml
/// [[year]]
/// year = 2019
/// "PPI_O&G" = 1.62
/// "PPI_O&G-s" = 1.31
/// PPI_Permit = 1.25
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostTable {
    #[serde(rename = "year", default)]
    years: Vec<CostYear>,
}

impl CostTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one index for one year, adding the year if needed.
    #[must_use]
    pub fn with_index(mut self, year: u16, index: PriceIndex, value: f64) -> Self {
        self.insert(year, index, value);
        self
    }

    /// Sets one index for one year, adding the year if needed.
    pub fn insert(&mut self, year: u16, index: PriceIndex, value: f64) {
        let position = self.years.iter().position(|row| row.year == year);
        let row = match position {
            Some(i) => &mut self.years[i],
            None => {
                self.years.push(CostYear {
                    year,
                    ..CostYear::default()
                });
                let last = self.years.len() - 1;
                &mut self.years[last]
            }
        };
        row.set(index, value);
    }

    /// Returns the yearly rows in insertion order.
    #[must_use]
    pub fn years(&self) -> &[CostYear] {
        &self.years
    }
}

impl PriceIndexTable for CostTable {
    fn price_index(&self, cost_year: u16, index: PriceIndex) -> Result<f64, CostError> {
        let row = self
            .years
            .iter()
            .find(|row| row.year == cost_year)
            .ok_or(CostError::MissingCostYear { year: cost_year })?;
        row.get(index).ok_or(CostError::UnknownIndex {
            year: cost_year,
            index,
        })
    }
}
