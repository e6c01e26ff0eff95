use crate::core::catalog::{BondKind, Catalog, Element};
use crate::core::models::ids::AtomId;
use crate::core::models::store::EntityStore;
use crate::core::utils::geometry::Ray;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// What a pointer activation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// Toggle the hit atom in the selection.
    #[default]
    Select,
    /// Place a new atom along the ray.
    Add,
    /// Remove the hit atom.
    Delete,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown interaction mode: '{0}'")]
pub struct ParseModeError(pub String);

impl FromStr for InteractionMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "select" => Ok(Self::Select),
            "add" => Ok(Self::Add),
            "delete" | "remove" => Ok(Self::Delete),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

impl fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Select => "select",
            Self::Add => "add",
            Self::Delete => "delete",
        })
    }
}

/// The result of resolving one pointer activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionOutcome {
    Added(AtomId),
    Selected(AtomId),
    Deselected(AtomId),
    Removed(AtomId),
    Miss,
}

/// Current mode plus the element and bond kind chosen in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub mode: InteractionMode,
    pub element: Element,
    pub bond_kind: BondKind,
}

/// Finds the first atom hit along `ray`, treating each atom as a sphere of its catalog radius.
///
/// Equal hit distances resolve to the atom that comes first in store iteration order.
pub fn pick_atom(store: &EntityStore, catalog: &Catalog, ray: &Ray) -> Option<AtomId> {
    let mut best: Option<(AtomId, f64)> = None;
    for atom in store.atoms_iter() {
        let radius = catalog.element(atom.element).radius;
        let Some(distance) = ray.sphere_hit(&atom.position, radius) else {
            continue;
        };
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((atom.id, distance));
        }
    }
    best.map(|(id, _)| id)
}
