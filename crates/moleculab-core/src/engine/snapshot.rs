use super::clock::ClockState;
use super::interaction::InteractionMode;
use crate::core::catalog::{BondKind, Catalog, Element};
use crate::core::models::atom::Atom;
use crate::core::models::bond::Bond;
use crate::core::models::ids::{AtomId, BondId};
use crate::core::models::selection::SelectionSet;
use crate::core::physics::energy::EnergyReport;
use crate::core::physics::params::SimulationParams;
use serde::Serialize;

/// Renderer-facing copy of one atom, with its catalog display data resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtomView {
    pub id: AtomId,
    pub element: Element,
    pub position: [f64; 3],
    pub velocity: [f64; 3],
    pub charge: f64,
    pub color: String,
    pub radius: f64,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BondView {
    pub id: BondId,
    pub atom1_id: AtomId,
    pub atom2_id: AtomId,
    pub kind: BondKind,
    pub strength: f64,
    pub length: f64,
}

/// An immutable point-in-time view of the whole engine.
///
/// Atoms and bonds appear in ascending id order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub atoms: Vec<AtomView>,
    pub bonds: Vec<BondView>,
    pub selection: Vec<AtomId>,
    pub energy: EnergyReport,
    pub mode: InteractionMode,
    pub clock: ClockState,
    pub ticks: u64,
    pub simulated_time: f64,
    pub params: SimulationParams,
}

impl Snapshot {
    pub fn atom(&self, id: AtomId) -> Option<&AtomView> {
        self.atoms.iter().find(|a| a.id == id)
    }
}

impl AtomView {
    pub(crate) fn capture(atom: &Atom, catalog: &Catalog, selection: &SelectionSet) -> Self {
        let spec = catalog.element(atom.element);
        Self {
            id: atom.id,
            element: atom.element,
            position: [atom.position.x, atom.position.y, atom.position.z],
            velocity: [atom.velocity.x, atom.velocity.y, atom.velocity.z],
            charge: atom.charge,
            color: spec.color.clone(),
            radius: spec.radius,
            selected: selection.contains(atom.id),
        }
    }
}

impl From<&Bond> for BondView {
    fn from(bond: &Bond) -> Self {
        Self {
            id: bond.id,
            atom1_id: bond.atom1_id,
            atom2_id: bond.atom2_id,
            kind: bond.kind,
            strength: bond.strength,
            length: bond.length,
        }
    }
}
