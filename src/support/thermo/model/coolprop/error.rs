use thiserror::Error;

use crate::support::thermo::{PropertyError, WorkingFluid};

/// Errors returned by the [`CoolProp`](super::CoolProp) model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoolPropError {
    #[error(transparent)]
    Rfluids(#[from] rfluids::native::CoolPropError),
    #[error("CoolProp abstract state for {fluid} poisoned by a panicked query")]
    Poisoned { fluid: WorkingFluid },
}

impl From<CoolPropError> for PropertyError {
    fn from(error: CoolPropError) -> Self {
        match error {
            CoolPropError::Rfluids(message) => classify(&message.to_string()),
            poisoned @ CoolPropError::Poisoned { .. } => PropertyError::Calculation {
                context: poisoned.to_string(),
            },
        }
    }
}

/// Classifies a CoolProp message into a [`PropertyError`] variant.
///
/// `rfluids` surfaces CoolProp failures as plain strings, so the
/// classification is by substring. Unrecognized messages become
/// [`PropertyError::Calculation`] with the message kept as context.
fn classify(message: &str) -> PropertyError {
    const UNDEFINED: &[&str] = &["not defined", "two-phase"];
    const OUT_OF_DOMAIN: &[&str] = &[
        "not in range",
        "out of range",
        "outside the range of validity",
        "must be in range",
        "must be between",
        "below the minimum",
        "above the maximum",
    ];
    const INVALID_STATE: &[&str] = &["not a valid number", "invalid state", "invalid number"];

    let lowered = message.to_lowercase();
    let context = message.to_string();
    let any = |needles: &[&str]| needles.iter().any(|needle| lowered.contains(needle));

    if any(UNDEFINED) {
        PropertyError::Undefined { context }
    } else if any(OUT_OF_DOMAIN) {
        PropertyError::OutOfDomain { context }
    } else if any(INVALID_STATE) {
        PropertyError::InvalidState { context }
    } else {
        PropertyError::Calculation { context }
    }
}
