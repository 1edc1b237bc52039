use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Used for quantities where zero is physically meaningful, such as the
/// absolute roughness of a smooth wellbore or a well's horizontal run.
///
/// # Examples
///
/// ```
/// use twine_geothermal::support::constraint::{Constraint, NonNegative};
/// use uom::si::{f64::Length, length::meter};
///
/// assert!(NonNegative::check(&Length::new::<meter>(0.0)).is_ok());
/// assert!(NonNegative::check(&Length::new::<meter>(-55e-6)).is_err());
/// assert!(NonNegative::check(&f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
