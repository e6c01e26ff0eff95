//! # Core Models Module
//!
//! Data structures for the atom/bond graph owned by the engine.
//!
//! ## Key Components
//!
//! - [`ids`] - Session-unique, monotonically assigned identifiers for atoms and bonds
//! - [`atom`] - A particle with element identity, position, velocity and charge
//! - [`bond`] - An edge between two atoms carrying its own strength and equilibrium length
//! - [`store`] - The authoritative id-indexed collections and their invariants
//! - [`selection`] - The set of selected atoms
//!
//! ## Usage
//!
//! ```ignore
//! use moleculab::core::catalog::{BondKind, Element};
//! use moleculab::core::models::store::EntityStore;
//!
//! let mut store = EntityStore::new();
//! let c = store.add_atom(Element::Carbon, Point3::new(0.0, 0.0, 0.0));
//! let o = store.add_atom(Element::Oxygen, Point3::new(1.5, 0.0, 0.0));
//! store.add_bond(c, o, &BondKind::Double.builtin_spec())?;
//! ```

pub mod atom;
pub mod bond;
pub mod ids;
pub mod selection;
pub mod store;
