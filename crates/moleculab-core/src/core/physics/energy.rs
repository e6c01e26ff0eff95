use super::params::SimulationParams;
use super::potentials;
use crate::core::catalog::Catalog;
use crate::core::models::store::EntityStore;
use serde::Serialize;
use tracing::{instrument, warn};

/// Breakdown of the workspace energy. Always derived from current state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EnergyReport {
    pub kinetic: f64,
    pub potential: f64,
    pub thermal: f64,
    pub total: f64,
}

impl EnergyReport {
    pub fn new(kinetic: f64, potential: f64, thermal: f64) -> Self {
        Self {
            kinetic,
            potential,
            thermal,
            total: kinetic + potential + thermal,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

/// Sum of `0.5 · m · |v|²` over all atoms.
pub fn kinetic_energy(store: &EntityStore, catalog: &Catalog) -> f64 {
    store
        .atoms_iter()
        .map(|atom| potentials::kinetic(catalog.element(atom.element).mass, atom.speed_squared()))
        .sum()
}

/// Sum of the harmonic length-deviation penalty over all bonds.
///
/// Uses the strength and equilibrium length stored on each bond, not the
/// catalog's current values.
pub fn potential_energy(store: &EntityStore) -> f64 {
    let mut total = 0.0;
    for bond in store.bonds_iter() {
        let (Some(a), Some(b)) = (store.atom(bond.atom1_id), store.atom(bond.atom2_id)) else {
            warn!(
                "Skipping bond {} with a missing endpoint ({} - {}).",
                bond.id, bond.atom1_id, bond.atom2_id
            );
            continue;
        };
        let distance = nalgebra::distance(&a.position, &b.position);
        total += potentials::harmonic_deviation(distance, bond.length, bond.strength);
    }
    total
}

/// Recomputes the full energy report from scratch.
#[instrument(level = "trace", skip_all, fields(atoms = store.atom_count(), bonds = store.bond_count()))]
pub fn evaluate(store: &EntityStore, catalog: &Catalog, params: &SimulationParams) -> EnergyReport {
    EnergyReport::new(
        kinetic_energy(store, catalog),
        potential_energy(store),
        potentials::thermal_bath(params.temperature),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{BondKind, Element};
    use nalgebra::{Point3, Vector3};

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn report_total_is_sum_of_terms() {
        let report = EnergyReport::new(1.5, 2.0, 0.5);
        assert_eq!(report.total, 4.0);
    }

    #[test]
    fn empty_workspace_has_only_thermal_energy() {
        let store = EntityStore::new();
        let params = SimulationParams {
            temperature: 310.0,
            ..Default::default()
        };
        let report = evaluate(&store, &Catalog::builtin(), &params);

        assert_eq!(report.kinetic, 0.0);
        assert_eq!(report.potential, 0.0);
        assert_eq!(report.thermal, 310.0 * potentials::THERMAL_BATH_COEFFICIENT);
        assert_eq!(report.total, report.thermal);
    }

    #[test]
    fn kinetic_uses_element_mass() {
        let catalog = Catalog::builtin();
        let mut store = EntityStore::new();
        let id = store.add_atom(Element::Oxygen, Point3::origin());
        store.atom_mut(id).unwrap().velocity = Vector3::new(2.0, 0.0, 0.0);

        let expected = 0.5 * catalog.element(Element::Oxygen).mass * 4.0;
        assert!(f64_approx_equal(kinetic_energy(&store, &catalog), expected));
    }

    #[test]
    fn potential_for_stretched_double_bond() {
        let catalog = Catalog::builtin();
        let mut store = EntityStore::new();
        let c = store.add_atom(Element::Carbon, Point3::new(0.0, 0.0, 0.0));
        let o = store.add_atom(Element::Oxygen, Point3::new(1.5, 0.0, 0.0));
        let spec = catalog.bond_type(BondKind::Double);
        store.add_bond(c, o, spec).unwrap();

        let expected = spec.strength * (1.5 - spec.length).powi(2);
        assert!(f64_approx_equal(potential_energy(&store), expected));
    }

    #[test]
    fn thermal_term_does_not_scale_with_atom_count() {
        let catalog = Catalog::builtin();
        let params = SimulationParams::default();
        let mut store = EntityStore::new();
        let empty = evaluate(&store, &catalog, &params).thermal;
        for i in 0..10 {
            store.add_atom(Element::Hydrogen, Point3::new(i as f64, 0.0, 0.0));
        }
        assert_eq!(evaluate(&store, &catalog, &params).thermal, empty);
    }
}
