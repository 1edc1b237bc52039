//! Numeric constraints used to validate inputs.
//!
//! Well and cost inputs carry physical invariants (a wellbore radius is
//! strictly positive, a roughness is never negative, a mass flow must not be
//! zero). The types in this module express those invariants so they can be
//! checked once, at the boundary, and relied on afterwards.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`NonZero`]: Not equal to zero
//! - [`StrictlyPositive`]: Greater than zero
//! - [`UnitIntervalLowerOpen`]: Lower-open unit interval `0 < x ≤ 1`
//!
//! Each marker implements [`Constraint<T>`] and is applied through
//! [`Constraint::check`] where an input enters the crate.

mod non_negative;
mod non_zero;
mod strictly_positive;
mod unit_interval;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use non_zero::NonZero;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::UnitIntervalLowerOpen;

/// A numeric invariant that a value can be checked against.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}
