use std::cmp::Ordering;

use super::{Constraint, ConstraintError};

/// Marker type enforcing that a value lies in the lower-open unit interval: `0 < x ≤ 1`.
///
/// Drilling success rates live here: a certain success is `1`, and a zero
/// success rate would make the expected well cost unbounded.
///
/// # Examples
///
/// ```
/// use twine_geothermal::support::constraint::{Constraint, UnitIntervalLowerOpen};
///
/// assert!(UnitIntervalLowerOpen::check(&1.0).is_ok());
/// assert!(UnitIntervalLowerOpen::check(&0.95).is_ok());
/// assert!(UnitIntervalLowerOpen::check(&0.0).is_err());
/// assert!(UnitIntervalLowerOpen::check(&1.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalLowerOpen;

impl Constraint<f64> for UnitIntervalLowerOpen {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&0.0), value.partial_cmp(&1.0)) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
