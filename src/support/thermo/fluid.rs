//! Working fluid identifiers.
//!
//! [`WorkingFluid`] is the runtime identity passed to every property query.
//! The marker types [`Water`] and [`CarbonDioxide`] carry the constants of
//! the simplified property models ([`Incompressible`](crate::support::thermo::model::Incompressible)
//! and [`PerfectGas`](crate::support::thermo::model::PerfectGas)).

mod carbon_dioxide;
mod water;

use std::{fmt, str::FromStr};

use thiserror::Error;

pub use carbon_dioxide::CarbonDioxide;
pub use water::Water;

/// A fluid the wellbore model can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkingFluid {
    Water,
    CarbonDioxide,
}

impl WorkingFluid {
    /// Returns the canonical short name (`"water"` or `"CO2"`).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            WorkingFluid::Water => "water",
            WorkingFluid::CarbonDioxide => "CO2",
        }
    }
}

impl fmt::Display for WorkingFluid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized fluid name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized fluid: {name:?}")]
pub struct UnknownFluidError {
    pub name: String,
}

impl FromStr for WorkingFluid {
    type Err = UnknownFluidError;

    /// Parses a fluid name, ignoring ASCII case.
    ///
    /// Accepts `water`, `co2` and `carbon_dioxide` (or `carbondioxide`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "water" => Ok(WorkingFluid::Water),
            "co2" | "carbon_dioxide" | "carbondioxide" => Ok(WorkingFluid::CarbonDioxide),
            _ => Err(UnknownFluidError {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names() {
        assert_eq!("water".parse(), Ok(WorkingFluid::Water));
        assert_eq!("CO2".parse(), Ok(WorkingFluid::CarbonDioxide));
        assert_eq!(" co2 ".parse(), Ok(WorkingFluid::CarbonDioxide));
        assert_eq!("Carbon_Dioxide".parse(), Ok(WorkingFluid::CarbonDioxide));
    }

    #[test]
    fn rejects_unknown_names() {
        let error = "brine".parse::<WorkingFluid>().unwrap_err();
        assert_eq!(error.name, "brine");
    }

    #[test]
    fn display_roundtrips() {
        for fluid in [WorkingFluid::Water, WorkingFluid::CarbonDioxide] {
            assert_eq!(fluid.to_string().parse(), Ok(fluid));
        }
    }
}
