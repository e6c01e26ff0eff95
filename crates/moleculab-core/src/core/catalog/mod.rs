//! # Catalog Module
//!
//! Static reference data for the elements and bond kinds the sandbox knows about.
//!
//! Both axes of the catalog are closed enums ([`element::Element`] and
//! [`bond_kind::BondKind`]) so a lookup can never miss. The runtime table
//! ([`table::Catalog`]) starts from the built-in values and can be replaced
//! wholesale by a TOML file, which is validated for completeness on load.

pub mod bond_kind;
pub mod element;
pub mod table;

pub use bond_kind::{BondKind, BondTypeSpec};
pub use element::{Element, ElementSpec};
pub use table::{Catalog, CatalogError};
