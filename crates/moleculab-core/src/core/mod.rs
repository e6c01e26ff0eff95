//! # Core Module
//!
//! Stateless building blocks of the sandbox: reference data, the entity
//! graph, the energy model and geometry helpers. Nothing in here owns a
//! simulation loop; that lives in [`crate::engine`].
//!
//! - **Reference Data** ([`catalog`]) - Element and bond-kind tables
//! - **Entity Graph** ([`models`]) - Atoms, bonds, the entity store and the selection
//! - **Energy Model** ([`physics`]) - Energy accountant, potentials and simulation parameters
//! - **Geometry** ([`utils`]) - Rays and hit tests used for pointer picking

pub mod catalog;
pub mod models;
pub mod physics;
pub mod utils;
