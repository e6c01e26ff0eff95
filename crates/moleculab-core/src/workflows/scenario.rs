use crate::core::catalog::{BondKind, Element};
use crate::core::models::ids::AtomId;
use crate::core::physics::energy::EnergyReport;
use crate::engine::config::EngineConfig;
use crate::engine::error::EngineError;
use crate::engine::events::EngineEvent;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::sandbox::SandboxEngine;
use crate::engine::snapshot::Snapshot;
use nalgebra::Point3;
use serde::Serialize;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioAtom {
    pub element: Element,
    pub position: Point3<f64>,
}

/// A bond between two entries of [`ScenarioSpec::atoms`], by zero-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioBond {
    pub atoms: (usize, usize),
    pub kind: BondKind,
}

/// Largest tick count a scenario may request.
pub const MAX_TICKS: u64 = 10_000_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSpec {
    pub atoms: Vec<ScenarioAtom>,
    pub bonds: Vec<ScenarioBond>,
    pub ticks: u64,
    /// Wall-clock seconds passed to every tick before time scaling.
    pub dt: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergySample {
    pub tick: u64,
    pub time: f64,
    pub energy: EnergyReport,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioReport {
    /// Energy after the workspace was built, before the clock started.
    pub initial_energy: EnergyReport,
    /// One sample per requested tick.
    pub trace: Vec<EnergySample>,
    /// Lifecycle notices the engine emitted while the scenario ran, in order.
    pub events: Vec<EngineEvent>,
    pub snapshot: Snapshot,
}

#[instrument(skip_all, name = "scenario_workflow", fields(atoms = spec.atoms.len(), bonds = spec.bonds.len(), ticks = spec.ticks))]
pub fn run(
    spec: &ScenarioSpec,
    config: &EngineConfig,
    reporter: &ProgressReporter,
) -> Result<ScenarioReport, EngineError> {
    if spec.ticks > MAX_TICKS {
        return Err(EngineError::Scenario(format!(
            "tick count {} exceeds the maximum of {}",
            spec.ticks, MAX_TICKS
        )));
    }

    reporter.report(Progress::PhaseStart { name: "Build" });
    let mut engine = SandboxEngine::new(config.clone());
    let ids = place_atoms(&mut engine, &spec.atoms)?;
    for bond in &spec.bonds {
        connect(&mut engine, &ids, bond)?;
    }
    let initial_energy = engine.energy();
    let mut events = engine.take_events();
    info!(
        atoms = ids.len(),
        bonds = engine.store().bond_count(),
        total = initial_energy.total,
        "Scenario workspace built."
    );
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart { name: "Simulate" });
    if !engine.start() {
        reporter.report(Progress::Message(
            "Workspace is empty; the clock stays stopped.".to_string(),
        ));
    }

    reporter.report(Progress::RunStart {
        total_ticks: spec.ticks,
    });
    let mut trace = Vec::new();
    for index in 1..=spec.ticks {
        engine.tick(spec.dt)?;
        let energy = engine.energy();
        trace.push(EnergySample {
            tick: index,
            time: engine.simulated_time(),
            energy,
        });
        reporter.report(Progress::Tick { index, energy });
    }
    reporter.report(Progress::RunFinish);
    engine.stop();
    reporter.report(Progress::PhaseFinish);

    events.extend(engine.take_events());
    let snapshot = engine.snapshot();
    info!(
        ticks = snapshot.ticks,
        total = snapshot.energy.total,
        "Scenario finished."
    );

    Ok(ScenarioReport {
        initial_energy,
        trace,
        events,
        snapshot,
    })
}

fn place_atoms(
    engine: &mut SandboxEngine,
    atoms: &[ScenarioAtom],
) -> Result<Vec<AtomId>, EngineError> {
    atoms
        .iter()
        .map(|atom| engine.place_atom(atom.element, atom.position))
        .collect()
}

fn connect(
    engine: &mut SandboxEngine,
    ids: &[AtomId],
    bond: &ScenarioBond,
) -> Result<(), EngineError> {
    let (a, b) = bond.atoms;
    let resolve = |index: usize| {
        ids.get(index).copied().ok_or_else(|| {
            EngineError::Scenario(format!(
                "bond references atom index {index}, but only {} atoms are defined",
                ids.len()
            ))
        })
    };
    let first = resolve(a)?;
    let second = resolve(b)?;
    if first == second {
        return Err(EngineError::SelfBond(first));
    }

    engine.toggle_selection(first)?;
    engine.toggle_selection(second)?;
    engine.create_bond(bond.kind)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::clock::ClockState;
    use crate::engine::config::EngineConfigBuilder;
    use std::sync::Mutex;

    fn config() -> EngineConfig {
        EngineConfigBuilder::new().seed(11).build().unwrap()
    }

    fn water_like() -> ScenarioSpec {
        ScenarioSpec {
            atoms: vec![
                ScenarioAtom {
                    element: Element::Oxygen,
                    position: Point3::origin(),
                },
                ScenarioAtom {
                    element: Element::Hydrogen,
                    position: Point3::new(0.96, 0.0, 0.0),
                },
                ScenarioAtom {
                    element: Element::Hydrogen,
                    position: Point3::new(-0.24, 0.93, 0.0),
                },
            ],
            bonds: vec![
                ScenarioBond {
                    atoms: (0, 1),
                    kind: BondKind::Single,
                },
                ScenarioBond {
                    atoms: (0, 2),
                    kind: BondKind::Single,
                },
            ],
            ticks: 4,
            dt: 0.05,
        }
    }

    #[test]
    fn run_builds_workspace_and_records_one_sample_per_tick() {
        let report = run(&water_like(), &config(), &ProgressReporter::new()).unwrap();

        assert_eq!(report.snapshot.atoms.len(), 3);
        assert_eq!(report.snapshot.bonds.len(), 2);
        assert!(report.snapshot.selection.is_empty());
        assert_eq!(report.snapshot.clock, ClockState::Stopped);
        assert_eq!(report.snapshot.ticks, 4);
        let ticks: Vec<u64> = report.trace.iter().map(|s| s.tick).collect();
        assert_eq!(ticks, vec![1, 2, 3, 4]);
        assert!(report.initial_energy.potential > 0.0);
        assert_eq!(report.initial_energy.kinetic, 0.0);
    }

    #[test]
    fn run_is_reproducible_with_a_seed() {
        let first = run(&water_like(), &config(), &ProgressReporter::new()).unwrap();
        let second = run(&water_like(), &config(), &ProgressReporter::new()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn bond_with_out_of_range_index_is_a_scenario_error() {
        let mut spec = water_like();
        spec.bonds.push(ScenarioBond {
            atoms: (1, 7),
            kind: BondKind::Single,
        });

        let result = run(&spec, &config(), &ProgressReporter::new());

        assert!(matches!(result, Err(EngineError::Scenario(_))));
    }

    #[test]
    fn repeated_bond_is_rejected_as_duplicate() {
        let mut spec = water_like();
        spec.bonds.push(ScenarioBond {
            atoms: (1, 0),
            kind: BondKind::Double,
        });

        let result = run(&spec, &config(), &ProgressReporter::new());

        assert!(matches!(result, Err(EngineError::DuplicateBond { .. })));
    }

    #[test]
    fn bond_to_the_same_index_is_a_self_bond() {
        let mut spec = water_like();
        spec.bonds = vec![ScenarioBond {
            atoms: (2, 2),
            kind: BondKind::Single,
        }];

        let result = run(&spec, &config(), &ProgressReporter::new());

        assert!(matches!(result, Err(EngineError::SelfBond(_))));
    }

    #[test]
    fn empty_scenario_completes_with_clock_stopped() {
        let spec = ScenarioSpec {
            atoms: Vec::new(),
            bonds: Vec::new(),
            ticks: 3,
            dt: 0.1,
        };

        let report = run(&spec, &config(), &ProgressReporter::new()).unwrap();

        assert_eq!(report.snapshot.ticks, 0);
        assert_eq!(report.trace.len(), 3);
        assert!(report.trace.iter().all(|s| s.time == 0.0));
    }

    #[test]
    fn tick_count_above_the_maximum_is_rejected_before_building() {
        let spec = ScenarioSpec {
            atoms: Vec::new(),
            bonds: Vec::new(),
            ticks: u64::MAX,
            dt: 0.0,
        };
        let phases = Mutex::new(0usize);
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::PhaseStart { .. } = event {
                *phases.lock().unwrap() += 1;
            }
        }));

        let result = run(&spec, &config(), &reporter);
        drop(reporter);

        assert!(matches!(result, Err(EngineError::Scenario(_))));
        assert_eq!(phases.into_inner().unwrap(), 0);
    }

    #[test]
    fn events_are_drained_into_the_report() {
        let report = run(&water_like(), &config(), &ProgressReporter::new()).unwrap();

        let added_atoms = report
            .events
            .iter()
            .filter(|e| matches!(e, EngineEvent::AtomAdded { .. }))
            .count();
        let added_bonds = report
            .events
            .iter()
            .filter(|e| matches!(e, EngineEvent::BondAdded { .. }))
            .count();
        assert_eq!(added_atoms, 3);
        assert_eq!(added_bonds, 2);
        assert!(matches!(
            report.events.first(),
            Some(EngineEvent::AtomAdded { .. })
        ));
    }

    #[test]
    fn negative_dt_is_rejected() {
        let mut spec = water_like();
        spec.dt = -0.1;
        let result = run(&spec, &config(), &ProgressReporter::new());
        assert!(matches!(result, Err(EngineError::InvalidParameter(_))));
    }

    #[test]
    fn progress_events_cover_both_phases_and_every_tick() {
        let ticks = Mutex::new(0u64);
        let phases = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| match event {
            Progress::PhaseStart { name } => phases.lock().unwrap().push(name),
            Progress::Tick { .. } => *ticks.lock().unwrap() += 1,
            _ => {}
        }));

        run(&water_like(), &config(), &reporter).unwrap();
        drop(reporter);

        assert_eq!(phases.into_inner().unwrap(), vec!["Build", "Simulate"]);
        assert_eq!(ticks.into_inner().unwrap(), 4);
    }
}
