use moleculab::core::catalog::{BondKind, Catalog, Element};
use moleculab::core::models::ids::AtomId;
use moleculab::core::physics::params::SimulationParamsUpdate;
use moleculab::engine::config::EngineConfigBuilder;
use moleculab::engine::error::EngineError;
use moleculab::engine::events::EngineEvent;
use moleculab::engine::interaction::{InteractionMode, InteractionOutcome};
use moleculab::engine::sandbox::SandboxEngine;
use moleculab::engine::snapshot::Snapshot;
use nalgebra::{Point3, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeSet, HashSet};

fn assert_invariants(snapshot: &Snapshot) {
    let atom_ids: BTreeSet<AtomId> = snapshot.atoms.iter().map(|a| a.id).collect();
    assert_eq!(atom_ids.len(), snapshot.atoms.len(), "duplicate atom ids");

    let mut pairs = HashSet::new();
    for bond in &snapshot.bonds {
        assert_ne!(bond.atom1_id, bond.atom2_id, "self bond {}", bond.id);
        assert!(atom_ids.contains(&bond.atom1_id), "dangling bond {}", bond.id);
        assert!(atom_ids.contains(&bond.atom2_id), "dangling bond {}", bond.id);
        let pair = if bond.atom1_id < bond.atom2_id {
            (bond.atom1_id, bond.atom2_id)
        } else {
            (bond.atom2_id, bond.atom1_id)
        };
        assert!(pairs.insert(pair), "two bonds share pair {pair:?}");
    }

    for id in &snapshot.selection {
        assert!(atom_ids.contains(id), "selected atom {id} does not exist");
    }

    let ordered: Vec<AtomId> = snapshot.atoms.iter().map(|a| a.id).collect();
    assert!(ordered.windows(2).all(|w| w[0] < w[1]), "atoms out of creation order");
}

fn random_point(rng: &mut StdRng) -> Point3<f64> {
    Point3::new(
        rng.gen_range(-6.0..6.0),
        rng.gen_range(-6.0..6.0),
        rng.gen_range(-6.0..6.0),
    )
}

#[test]
fn random_operation_sequences_preserve_graph_invariants() {
    for seed in 0..20u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut engine =
            SandboxEngine::new(EngineConfigBuilder::new().seed(seed).build().unwrap());
        let mut issued: Vec<AtomId> = Vec::new();

        for _ in 0..300 {
            match rng.gen_range(0..10) {
                0 | 1 => {
                    let element = Element::ALL[rng.gen_range(0..Element::COUNT)];
                    let id = engine.place_atom(element, random_point(&mut rng)).unwrap();
                    issued.push(id);
                }
                2 | 3 if !issued.is_empty() => {
                    let id = issued[rng.gen_range(0..issued.len())];
                    let _ = engine.toggle_selection(id);
                }
                4 => {
                    let kind = BondKind::ALL[rng.gen_range(0..BondKind::COUNT)];
                    let _ = engine.create_bond(kind);
                }
                5 if !issued.is_empty() => {
                    let id = issued[rng.gen_range(0..issued.len())];
                    engine.remove_atom(id);
                }
                6 => {
                    let mode = [
                        InteractionMode::Select,
                        InteractionMode::Add,
                        InteractionMode::Delete,
                    ][rng.gen_range(0..3)];
                    engine.set_mode(mode);
                    let origin = random_point(&mut rng) * 3.0;
                    let direction = Point3::origin() - origin;
                    if let Ok(InteractionOutcome::Added(id)) =
                        engine.cast_interaction(origin, direction)
                    {
                        issued.push(id);
                    }
                }
                7 => {
                    engine.start();
                }
                8 => {
                    engine.tick(rng.gen_range(0.0..0.2)).unwrap();
                }
                9 if rng.gen_bool(0.05) => engine.clear_workspace(),
                _ => engine.stop(),
            }
            assert_invariants(&engine.snapshot());
        }
    }
}

#[test]
fn bonded_atom_removal_leaves_no_bonds() {
    let mut engine = SandboxEngine::default();
    let a = engine.place_atom(Element::Carbon, Point3::origin()).unwrap();
    let b = engine
        .place_atom(Element::Carbon, Point3::new(1.54, 0.0, 0.0))
        .unwrap();
    engine.toggle_selection(a).unwrap();
    engine.toggle_selection(b).unwrap();
    engine.bond_selection().unwrap();

    engine.remove_atom(b);

    assert_eq!(engine.store().bond_count(), 0);
    assert_invariants(&engine.snapshot());
}

#[test]
fn every_removal_is_announced_before_its_atom() {
    let mut engine = SandboxEngine::default();
    let center = engine.place_atom(Element::Carbon, Point3::origin()).unwrap();
    let mut bond_ids = Vec::new();
    for x in [1.0, -1.0, 2.0] {
        let leaf = engine
            .place_atom(Element::Hydrogen, Point3::new(x, 1.0, 0.0))
            .unwrap();
        engine.toggle_selection(center).unwrap();
        engine.toggle_selection(leaf).unwrap();
        bond_ids.push(engine.create_bond(BondKind::Single).unwrap());
    }
    engine.take_events();

    engine.set_mode(InteractionMode::Delete);
    engine
        .cast_interaction(Point3::new(0.0, 0.0, -10.0), Vector3::z())
        .unwrap();

    let mut expected: Vec<EngineEvent> = bond_ids
        .into_iter()
        .map(|id| EngineEvent::BondRemoved { id })
        .collect();
    expected.push(EngineEvent::AtomRemoved { id: center });
    assert_eq!(engine.take_events(), expected);
}

#[test]
fn custom_catalog_parameters_flow_into_new_bonds() {
    let mut toml = String::new();
    for element in Element::ALL {
        let spec = element.builtin_spec();
        toml.push_str(&format!(
            "[elements.{}]\ncolor = \"{}\"\nradius = {:?}\nmass = {:?}\nelectronegativity = {:?}\nvalence = {}\n\n",
            element.symbol(),
            spec.color,
            spec.radius,
            spec.mass,
            spec.electronegativity,
            spec.valence
        ));
    }
    for kind in BondKind::ALL {
        let spec = kind.builtin_spec();
        let strength = if kind == BondKind::Single { 100.0 } else { spec.strength };
        toml.push_str(&format!(
            "[bonds.{}]\nstrength = {:?}\nlength = {:?}\n\n",
            kind.as_str(),
            strength,
            spec.length
        ));
    }
    let catalog = Catalog::from_toml_str(&toml).unwrap();
    let mut engine =
        SandboxEngine::new(EngineConfigBuilder::new().catalog(catalog).build().unwrap());

    let a = engine.place_atom(Element::Carbon, Point3::origin()).unwrap();
    let b = engine
        .place_atom(Element::Carbon, Point3::new(2.54, 0.0, 0.0))
        .unwrap();
    engine.toggle_selection(a).unwrap();
    engine.toggle_selection(b).unwrap();
    engine.create_bond(BondKind::Single).unwrap();

    let bond = &engine.snapshot().bonds[0];
    assert_eq!(bond.strength, 100.0);
    assert!((engine.energy().potential - 100.0).abs() < 1e-9);
}

#[test]
fn parameter_updates_are_all_or_nothing() {
    let mut engine = SandboxEngine::default();
    let before = engine.snapshot();

    let result = engine.set_params(
        &SimulationParamsUpdate::default()
            .temperature(310.0)
            .time_scale(-1.0),
    );

    assert!(matches!(result, Err(EngineError::InvalidParameter(_))));
    assert_eq!(engine.snapshot(), before);
}
