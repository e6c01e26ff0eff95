//! # Physics Module
//!
//! The pedagogical energy model and kinematics helpers. This is not a force
//! field: bonds contribute a harmonic length-deviation penalty to the reported
//! potential energy but never push atoms, and the thermal term is a flat bath
//! value that does not depend on how many atoms exist.
//!
//! - [`potentials`] - Scalar formulas and physical constants
//! - [`energy`] - The energy accountant, recomputed from scratch on every call
//! - [`params`] - Environmental simulation parameters and partial updates

pub mod energy;
pub mod params;
pub mod potentials;
