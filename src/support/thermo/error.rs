use thiserror::Error;

use super::WorkingFluid;

/// Errors that may occur when evaluating fluid properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The property is undefined at the given state.
    ///
    /// For example, the specific heat capacity of a pure fluid within the vapor dome.
    #[error("undefined property: {context}")]
    Undefined { context: String },

    /// The input state is outside the model's valid pressure-temperature envelope.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The provided state is invalid or inconsistent.
    #[error("invalid state: {context}")]
    InvalidState { context: String },

    /// The calculation failed due to a numerical or internal error.
    #[error("calculation error: {context}")]
    Calculation { context: String },

    /// The provider has no property data for the requested fluid.
    #[error("fluid {fluid} is not supported by this property model")]
    UnsupportedFluid { fluid: WorkingFluid },
}

impl PropertyError {
    /// Creates an [`PropertyError::OutOfDomain`] error from a context message.
    pub(crate) fn out_of_domain(context: impl Into<String>) -> Self {
        Self::OutOfDomain {
            context: context.into(),
        }
    }
}
