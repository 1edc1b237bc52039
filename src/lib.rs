#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Twine Geothermal
//!
//! Wellbore heat-transfer and hydraulics models, plus well-field capital cost
//! estimation, for [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain models, including the semi-analytical wellbore solver
//!   ([`models::geothermal::well::SemiAnalyticalWell`]) and the capital cost
//!   layer ([`models::geothermal::cost`]).
//! - [`support`]: Supporting utilities used by models (constraints, units,
//!   fluid property providers, global simulation properties).
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Model-specific code lives in a model's internal `core` module and is only
//! reachable through the types the model re-exports.

pub mod models;
pub mod support;
