//! Geothermal and CO2-plume well models.
//!
//! - [`well`]: Semi-analytical wellbore model for a single vertical, horizontal
//!   or deviated well.
//! - [`cost`]: Capital cost of wells and of well-field permitting and monitoring.

pub mod cost;
pub mod well;
