use super::atom::Atom;
use super::bond::{AtomPair, Bond};
use super::ids::{AtomId, BondId, IdAllocator};
use crate::core::catalog::{BondTypeSpec, Element};
use nalgebra::Point3;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("Atom {0} does not exist")]
    UnknownAtom(AtomId),
    #[error("Atoms {first} and {second} are already joined by bond {existing}")]
    DuplicateBond {
        first: AtomId,
        second: AtomId,
        existing: BondId,
    },
    #[error("Cannot bond atom {0} to itself")]
    SelfBond(AtomId),
}

/// An atom together with the bonds that were removed along with it.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedAtom {
    pub atom: Atom,
    pub bonds: Vec<Bond>,
}

/// Authoritative storage for the atom/bond graph.
///
/// Atoms and bonds live in id-ordered maps, so iteration always follows
/// creation order. Two secondary indices are kept in step with every mutation:
/// an unordered-pair index that enforces at most one bond per atom pair, and a
/// per-atom adjacency list used to cascade removals without scanning all bonds.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    atoms: BTreeMap<AtomId, Atom>,
    bonds: BTreeMap<BondId, Bond>,
    pair_index: HashMap<AtomPair, BondId>,
    bond_adjacency: HashMap<AtomId, Vec<BondId>>,
    atom_ids: IdAllocator,
    bond_ids: IdAllocator,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(&id)
    }

    pub fn atom_mut(&mut self, id: AtomId) -> Option<&mut Atom> {
        self.atoms.get_mut(&id)
    }

    pub fn contains_atom(&self, id: AtomId) -> bool {
        self.atoms.contains_key(&id)
    }

    /// Iterates atoms in creation order.
    pub fn atoms_iter(&self) -> impl Iterator<Item = &Atom> {
        self.atoms.values()
    }

    pub fn atoms_iter_mut(&mut self) -> impl Iterator<Item = &mut Atom> {
        self.atoms.values_mut()
    }

    pub fn bond(&self, id: BondId) -> Option<&Bond> {
        self.bonds.get(&id)
    }

    /// Iterates bonds in creation order.
    pub fn bonds_iter(&self) -> impl Iterator<Item = &Bond> {
        self.bonds.values()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Looks up the bond joining two atoms, in either order.
    pub fn bond_between(&self, a: AtomId, b: AtomId) -> Option<BondId> {
        self.pair_index.get(&AtomPair::new(a, b)).copied()
    }

    /// Inserts a new atom at rest and returns its freshly allocated id.
    pub fn add_atom(&mut self, element: Element, position: Point3<f64>) -> AtomId {
        let id = AtomId::from_raw(self.atom_ids.next_raw());
        self.atoms.insert(id, Atom::new(id, element, position));
        self.bond_adjacency.insert(id, Vec::new());
        id
    }

    /// Joins two existing, distinct, not-yet-bonded atoms.
    ///
    /// The bond's strength and equilibrium length are copied from `spec`.
    ///
    /// # Errors
    ///
    /// * [`StoreError::UnknownAtom`] if either id is absent.
    /// * [`StoreError::SelfBond`] if both ids are the same atom.
    /// * [`StoreError::DuplicateBond`] if the pair is already bonded.
    ///
    /// The store is unchanged when an error is returned.
    pub fn add_bond(
        &mut self,
        atom1_id: AtomId,
        atom2_id: AtomId,
        spec: &BondTypeSpec,
    ) -> Result<BondId, StoreError> {
        for id in [atom1_id, atom2_id] {
            if !self.atoms.contains_key(&id) {
                return Err(StoreError::UnknownAtom(id));
            }
        }
        if atom1_id == atom2_id {
            return Err(StoreError::SelfBond(atom1_id));
        }

        let pair = AtomPair::new(atom1_id, atom2_id);
        if let Some(&existing) = self.pair_index.get(&pair) {
            return Err(StoreError::DuplicateBond {
                first: atom1_id,
                second: atom2_id,
                existing,
            });
        }

        let id = BondId::from_raw(self.bond_ids.next_raw());
        self.bonds.insert(id, Bond::new(id, atom1_id, atom2_id, spec));
        self.pair_index.insert(pair, id);
        for atom_id in [atom1_id, atom2_id] {
            self.bond_adjacency.entry(atom_id).or_default().push(id);
        }
        Ok(id)
    }

    /// Removes an atom and every bond that references it.
    ///
    /// Returns `None` (and changes nothing) if the atom does not exist.
    pub fn remove_atom(&mut self, atom_id: AtomId) -> Option<RemovedAtom> {
        let atom = self.atoms.remove(&atom_id)?;

        let bond_ids = self.bond_adjacency.remove(&atom_id).unwrap_or_default();
        let mut bonds = Vec::with_capacity(bond_ids.len());
        for bond_id in bond_ids {
            let Some(bond) = self.bonds.remove(&bond_id) else {
                continue;
            };
            self.pair_index.remove(&bond.pair());
            if let Some(partner) = bond.partner(atom_id) {
                if let Some(adjacency) = self.bond_adjacency.get_mut(&partner) {
                    adjacency.retain(|&id| id != bond_id);
                }
            }
            bonds.push(bond);
        }
        bonds.sort_by_key(|bond| bond.id);

        Some(RemovedAtom { atom, bonds })
    }

    /// Drops every atom and bond, returning their ids in creation order.
    ///
    /// Id allocation is not reset, so ids handed out after a clear never collide
    /// with ids from before it.
    pub fn clear(&mut self) -> (Vec<AtomId>, Vec<BondId>) {
        let atom_ids = self.atoms.keys().copied().collect();
        let bond_ids = self.bonds.keys().copied().collect();
        self.atoms.clear();
        self.bonds.clear();
        self.pair_index.clear();
        self.bond_adjacency.clear();
        (atom_ids, bond_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::BondKind;

    fn spec(kind: BondKind) -> BondTypeSpec {
        kind.builtin_spec()
    }

    fn store_with_atoms(n: usize) -> (EntityStore, Vec<AtomId>) {
        let mut store = EntityStore::new();
        let ids = (0..n)
            .map(|i| store.add_atom(Element::Carbon, Point3::new(i as f64 * 1.5, 0.0, 0.0)))
            .collect();
        (store, ids)
    }

    fn assert_referential_integrity(store: &EntityStore) {
        for bond in store.bonds_iter() {
            assert!(store.contains_atom(bond.atom1_id));
            assert!(store.contains_atom(bond.atom2_id));
            assert_ne!(bond.atom1_id, bond.atom2_id);
            assert_eq!(store.bond_between(bond.atom1_id, bond.atom2_id), Some(bond.id));
        }
        assert_eq!(store.pair_index.len(), store.bond_count());
    }

    #[test]
    fn add_atom_assigns_increasing_ids_and_zero_velocity() {
        let (store, ids) = store_with_atoms(3);
        assert!(ids[0] < ids[1] && ids[1] < ids[2]);
        for id in ids {
            let atom = store.atom(id).unwrap();
            assert_eq!(atom.velocity.norm(), 0.0);
            assert_eq!(atom.charge, 0.0);
        }
    }

    #[test]
    fn add_bond_records_bond_and_adjacency() {
        let (mut store, ids) = store_with_atoms(3);
        let b1 = store.add_bond(ids[0], ids[1], &spec(BondKind::Single)).unwrap();
        let b2 = store.add_bond(ids[1], ids[2], &spec(BondKind::Double)).unwrap();

        assert_eq!(store.bond_count(), 2);
        assert_eq!(store.bond(b2).unwrap().kind, BondKind::Double);
        assert_eq!(store.bond_between(ids[1], ids[0]), Some(b1));
        assert_referential_integrity(&store);
    }

    #[test]
    fn add_bond_rejects_duplicate_pair_in_either_order() {
        let (mut store, ids) = store_with_atoms(2);
        let first = store.add_bond(ids[0], ids[1], &spec(BondKind::Single)).unwrap();

        let err = store
            .add_bond(ids[1], ids[0], &spec(BondKind::Triple))
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::DuplicateBond {
                first: ids[1],
                second: ids[0],
                existing: first,
            }
        );
        assert_eq!(store.bond_count(), 1);
        assert_eq!(store.bond(first).unwrap().kind, BondKind::Single);
    }

    #[test]
    fn add_bond_rejects_unknown_and_self_references() {
        let (mut store, ids) = store_with_atoms(1);
        let ghost = AtomId::from_raw(999);

        assert_eq!(
            store.add_bond(ids[0], ghost, &spec(BondKind::Single)),
            Err(StoreError::UnknownAtom(ghost))
        );
        assert_eq!(
            store.add_bond(ids[0], ids[0], &spec(BondKind::Single)),
            Err(StoreError::SelfBond(ids[0]))
        );
        assert_eq!(store.bond_count(), 0);
    }

    #[test]
    fn remove_atom_cascades_to_its_bonds() {
        let (mut store, ids) = store_with_atoms(3);
        let b01 = store.add_bond(ids[0], ids[1], &spec(BondKind::Single)).unwrap();
        let b12 = store.add_bond(ids[1], ids[2], &spec(BondKind::Single)).unwrap();
        let b02 = store.add_bond(ids[0], ids[2], &spec(BondKind::Single)).unwrap();

        let removed = store.remove_atom(ids[1]).unwrap();

        assert_eq!(removed.atom.id, ids[1]);
        let removed_bond_ids: Vec<_> = removed.bonds.iter().map(|b| b.id).collect();
        assert_eq!(removed_bond_ids, vec![b01, b12]);
        assert_eq!(store.atom_count(), 2);
        assert_eq!(store.bond_count(), 1);
        assert!(store.bond(b02).is_some());
        assert_referential_integrity(&store);
    }

    #[test]
    fn removing_one_endpoint_of_a_single_bond_leaves_no_bonds() {
        let (mut store, ids) = store_with_atoms(2);
        store.add_bond(ids[0], ids[1], &spec(BondKind::Single)).unwrap();
        store.remove_atom(ids[0]);
        assert_eq!(store.bond_count(), 0);
        assert_referential_integrity(&store);
    }

    #[test]
    fn remove_atom_on_absent_id_is_a_no_op() {
        let (mut store, ids) = store_with_atoms(2);
        store.add_bond(ids[0], ids[1], &spec(BondKind::Single)).unwrap();
        store.remove_atom(ids[0]);

        assert!(store.remove_atom(ids[0]).is_none());
        assert_eq!(store.atom_count(), 1);
        assert_eq!(store.bond_count(), 0);
    }

    #[test]
    fn pair_can_be_rebonded_after_cascade() {
        let (mut store, ids) = store_with_atoms(2);
        store.add_bond(ids[0], ids[1], &spec(BondKind::Single)).unwrap();
        store.remove_atom(ids[1]);
        let fresh = store.add_atom(Element::Oxygen, Point3::origin());
        assert!(store.add_bond(ids[0], fresh, &spec(BondKind::Double)).is_ok());
    }

    #[test]
    fn clear_empties_store_but_never_reuses_ids() {
        let (mut store, ids) = store_with_atoms(2);
        let bond = store.add_bond(ids[0], ids[1], &spec(BondKind::Single)).unwrap();

        let (cleared_atoms, cleared_bonds) = store.clear();
        assert_eq!(cleared_atoms, ids);
        assert_eq!(cleared_bonds, vec![bond]);
        assert!(store.is_empty());
        assert_eq!(store.bond_count(), 0);

        let next = store.add_atom(Element::Hydrogen, Point3::origin());
        assert!(ids.iter().all(|&old| next > old));
    }

    #[test]
    fn bond_parameters_come_from_the_supplied_spec() {
        let (mut store, ids) = store_with_atoms(2);
        let mut custom = spec(BondKind::Single);
        custom.strength = 1.0;
        custom.length = 2.0;
        let bond = store.add_bond(ids[0], ids[1], &custom).unwrap();

        assert_eq!(store.bond(bond).unwrap().strength, 1.0);
        assert_eq!(store.bond(bond).unwrap().length, 2.0);
    }
}
