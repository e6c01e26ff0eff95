use super::ids::AtomId;

/// The set of currently selected atoms, kept in selection order.
///
/// The engine removes ids from the selection whenever the matching atom is
/// removed from the store, so the selection is always a subset of
/// the live atom ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<AtomId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: AtomId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[AtomId] {
        &self.ids
    }

    /// Flips membership of `id`. Returns `true` if the atom is selected afterwards.
    pub fn toggle(&mut self, id: AtomId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Returns `true` if `id` was selected.
    pub fn remove(&mut self, id: AtomId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|&selected| selected != id);
        self.ids.len() != before
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Returns the two selected atoms in selection order, if exactly two are selected.
    pub fn as_pair(&self) -> Option<(AtomId, AtomId)> {
        match self.ids.as_slice() {
            [a, b] => Some((*a, *b)),
            _ => None,
        }
    }
}
