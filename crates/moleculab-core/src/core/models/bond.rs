use super::ids::{AtomId, BondId};
use crate::core::catalog::{BondKind, BondTypeSpec};

/// Unordered pair of atom ids, normalized so `(a, b)` and `(b, a)` compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtomPair(AtomId, AtomId);

impl AtomPair {
    pub fn new(a: AtomId, b: AtomId) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }
}

/// An edge between two atoms.
///
/// `strength` and `length` are copied from the catalog when the bond is created,
/// so a bond keeps its parameters even if a different catalog is used later.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bond {
    pub id: BondId,
    pub atom1_id: AtomId,
    pub atom2_id: AtomId,
    pub kind: BondKind,
    pub strength: f64,
    pub length: f64,
}

impl Bond {
    pub fn new(id: BondId, atom1_id: AtomId, atom2_id: AtomId, spec: &BondTypeSpec) -> Self {
        Self {
            id,
            atom1_id,
            atom2_id,
            kind: spec.kind,
            strength: spec.strength,
            length: spec.length,
        }
    }

    pub fn pair(&self) -> AtomPair {
        AtomPair::new(self.atom1_id, self.atom2_id)
    }

    /// Returns the endpoint opposite `atom_id`, or `None` if the bond does not touch it.
    pub fn partner(&self, atom_id: AtomId) -> Option<AtomId> {
        if self.atom1_id == atom_id {
            Some(self.atom2_id)
        } else if self.atom2_id == atom_id {
            Some(self.atom1_id)
        } else {
            None
        }
    }
}
