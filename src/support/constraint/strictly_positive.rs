use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// # Examples
///
/// ```
/// use twine_geothermal::support::constraint::{Constraint, StrictlyPositive};
/// use uom::si::{f64::Time, time::second};
///
/// assert!(StrictlyPositive::check(&Time::new::<second>(3.1536e8)).is_ok());
/// assert!(StrictlyPositive::check(&0.0).is_err());
/// assert!(StrictlyPositive::check(&-1.0).is_err());
/// assert!(StrictlyPositive::check(&f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
