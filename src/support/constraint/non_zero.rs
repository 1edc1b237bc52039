use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constraint, ConstraintError};

/// Marker type enforcing that a value is non-zero.
///
/// A well's mass flow rate is signed (the sign gives the flow direction), but
/// a zero flow leaves the friction factor undefined.
///
/// # Examples
///
/// ```
/// use twine_geothermal::support::constraint::{Constraint, NonZero};
/// use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};
///
/// assert!(NonZero::check(&MassRate::new::<kilogram_per_second>(-5.0)).is_ok());
/// assert!(NonZero::check(&MassRate::new::<kilogram_per_second>(0.0)).is_err());
/// assert!(NonZero::check(&f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonZero;

impl<T: PartialOrd + Zero> Constraint<T> for NonZero {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Less) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
