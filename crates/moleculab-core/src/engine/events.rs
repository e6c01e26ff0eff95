use crate::core::models::ids::{AtomId, BondId};
use serde::Serialize;

/// Entity lifecycle notices for consumers that keep per-entity resources.
///
/// Removals are always announced explicitly rather than left to be inferred
/// from an absence in the next snapshot. When an atom is removed, the notices
/// for its bonds come before the notice for the atom itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum EngineEvent {
    AtomAdded { id: AtomId },
    AtomRemoved { id: AtomId },
    BondAdded { id: BondId },
    BondRemoved { id: BondId },
    WorkspaceCleared,
}
