use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::PriceIndex;

/// Errors that can occur while estimating a capital cost.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CostError {
    /// The table has no row for the requested cost year.
    #[error("no price indices for cost year {year}")]
    MissingCostYear { year: u16 },

    /// The cost year exists but lacks the requested price index.
    #[error("price index {index} is missing for cost year {year}")]
    UnknownIndex { year: u16, index: PriceIndex },

    /// A length, radius or success rate violates its constraint.
    #[error("invalid {quantity}")]
    InvalidInput {
        quantity: &'static str,

        #[source]
        source: ConstraintError,
    },
}

impl CostError {
    pub(super) fn invalid(quantity: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidInput { quantity, source }
    }
}
