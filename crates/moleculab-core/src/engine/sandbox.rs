use super::clock::{ClockState, SimulationClock};
use super::config::EngineConfig;
use super::error::EngineError;
use super::events::EngineEvent;
use super::interaction::{InteractionMode, InteractionOutcome, InteractionState, pick_atom};
use super::snapshot::{AtomView, BondView, Snapshot};
use crate::core::catalog::{BondKind, Catalog, Element};
use crate::core::models::ids::{AtomId, BondId};
use crate::core::models::selection::SelectionSet;
use crate::core::models::store::EntityStore;
use crate::core::physics::energy::{self, EnergyReport};
use crate::core::physics::params::{SimulationParams, SimulationParamsUpdate};
use crate::core::utils::geometry::Ray;
use nalgebra::{Point3, Vector3};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// The single owner of all sandbox state.
///
/// Every operation runs to completion against `&mut self`; consumers read
/// state only through [`Snapshot`] copies and the [`EngineEvent`] queue.
/// The energy report is recomputed in full after every mutation and tick.
///
/// Lifecycle notices accumulate until [`SandboxEngine::take_events`] is called.
/// Long-lived consumers must drain them regularly.
#[derive(Debug)]
pub struct SandboxEngine {
    catalog: Catalog,
    store: EntityStore,
    selection: SelectionSet,
    interaction: InteractionState,
    clock: SimulationClock,
    params: SimulationParams,
    energy: EnergyReport,
    events: Vec<EngineEvent>,
    rng: StdRng,
    placement_distance: f64,
}

impl Default for SandboxEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl SandboxEngine {
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut engine = Self {
            catalog: config.catalog,
            store: EntityStore::new(),
            selection: SelectionSet::new(),
            interaction: InteractionState {
                mode: InteractionMode::default(),
                element: config.initial_element,
                bond_kind: config.initial_bond_kind,
            },
            clock: SimulationClock::default(),
            params: config.params,
            energy: EnergyReport::zero(),
            events: Vec::new(),
            rng,
            placement_distance: config.placement_distance,
        };
        engine.recompute_energy();
        engine
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn selection(&self) -> &[AtomId] {
        self.selection.ids()
    }

    pub fn mode(&self) -> InteractionMode {
        self.interaction.mode
    }

    pub fn selected_element(&self) -> Element {
        self.interaction.element
    }

    pub fn selected_bond_kind(&self) -> BondKind {
        self.interaction.bond_kind
    }

    pub fn params(&self) -> SimulationParams {
        self.params
    }

    pub fn clock_state(&self) -> ClockState {
        self.clock.state()
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn ticks(&self) -> u64 {
        self.clock.ticks()
    }

    pub fn simulated_time(&self) -> f64 {
        self.clock.simulated_time()
    }

    pub fn energy(&self) -> EnergyReport {
        self.energy
    }

    pub fn set_mode(&mut self, mode: InteractionMode) {
        if self.interaction.mode != mode {
            debug!(from = %self.interaction.mode, to = %mode, "Interaction mode changed.");
            self.interaction.mode = mode;
        }
    }

    pub fn set_selected_element(&mut self, element: Element) {
        self.interaction.element = element;
    }

    pub fn set_selected_bond_kind(&mut self, kind: BondKind) {
        self.interaction.bond_kind = kind;
    }

    /// Resolves one pointer activation according to the current mode.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRay`] if the origin is non-finite or the
    /// direction is zero or non-finite. Nothing changes in that case.
    pub fn cast_interaction(
        &mut self,
        origin: Point3<f64>,
        direction: Vector3<f64>,
    ) -> Result<InteractionOutcome, EngineError> {
        let ray = Ray::new(origin, direction).ok_or(EngineError::InvalidRay)?;

        let outcome = match self.interaction.mode {
            InteractionMode::Add => {
                let position = ray.point_at(self.placement_distance);
                let id = self.place_atom(self.interaction.element, position)?;
                InteractionOutcome::Added(id)
            }
            InteractionMode::Select => match pick_atom(&self.store, &self.catalog, &ray) {
                Some(id) if self.selection.toggle(id) => InteractionOutcome::Selected(id),
                Some(id) => InteractionOutcome::Deselected(id),
                None => InteractionOutcome::Miss,
            },
            InteractionMode::Delete => match pick_atom(&self.store, &self.catalog, &ray) {
                Some(id) => {
                    self.remove_atom(id);
                    InteractionOutcome::Removed(id)
                }
                None => InteractionOutcome::Miss,
            },
        };
        Ok(outcome)
    }

    /// Flips selection membership of an existing atom. Returns `true` if it is selected afterwards.
    pub fn toggle_selection(&mut self, id: AtomId) -> Result<bool, EngineError> {
        if !self.store.contains_atom(id) {
            return Err(EngineError::UnknownAtom(id));
        }
        Ok(self.selection.toggle(id))
    }

    /// Bonds the two selected atoms with `kind`.
    ///
    /// Fails with [`EngineError::SelectionSize`] unless exactly two atoms are
    /// selected, leaving the selection untouched. Once that check passes the
    /// selection is cleared whether or not the bond could be created.
    pub fn create_bond(&mut self, kind: BondKind) -> Result<BondId, EngineError> {
        let Some((first, second)) = self.selection.as_pair() else {
            return Err(EngineError::SelectionSize {
                found: self.selection.len(),
            });
        };
        self.selection.clear();

        let id = self
            .store
            .add_bond(first, second, self.catalog.bond_type(kind))?;
        debug!(bond = %id, %first, %second, %kind, "Bond created.");
        self.events.push(EngineEvent::BondAdded { id });
        self.recompute_energy();
        Ok(id)
    }

    /// [`create_bond`](Self::create_bond) with the currently chosen bond kind.
    pub fn bond_selection(&mut self) -> Result<BondId, EngineError> {
        self.create_bond(self.interaction.bond_kind)
    }

    pub fn place_atom(
        &mut self,
        element: Element,
        position: Point3<f64>,
    ) -> Result<AtomId, EngineError> {
        if !position.coords.iter().all(|c| c.is_finite()) {
            return Err(EngineError::InvalidPosition {
                x: position.x,
                y: position.y,
                z: position.z,
            });
        }
        let id = self.store.add_atom(element, position);
        debug!(atom = %id, %element, "Atom placed.");
        self.events.push(EngineEvent::AtomAdded { id });
        self.recompute_energy();
        Ok(id)
    }

    /// Removes an atom with its bonds and drops it from the selection.
    ///
    /// Returns `false` without changing anything if the atom does not exist.
    pub fn remove_atom(&mut self, id: AtomId) -> bool {
        let Some(removed) = self.store.remove_atom(id) else {
            return false;
        };
        self.selection.remove(id);
        for bond in &removed.bonds {
            self.events.push(EngineEvent::BondRemoved { id: bond.id });
        }
        self.events.push(EngineEvent::AtomRemoved { id });
        debug!(atom = %id, bonds = removed.bonds.len(), "Atom removed.");
        self.recompute_energy();
        true
    }

    /// Removes every atom and bond, stops the clock and zeroes the energy report.
    pub fn clear_workspace(&mut self) {
        let (atoms, bonds) = self.store.clear();
        self.selection.clear();
        self.clock.reset(&mut self.store);
        self.energy = EnergyReport::zero();
        self.events.push(EngineEvent::WorkspaceCleared);
        info!(
            atoms = atoms.len(),
            bonds = bonds.len(),
            "Workspace cleared."
        );
    }

    /// Assigns thermal velocities and starts the clock.
    ///
    /// An empty workspace is a silent no-op. Calling this while already running
    /// changes nothing. Returns whether the clock is running afterwards.
    pub fn start(&mut self) -> bool {
        if self.clock.is_running() {
            return true;
        }
        match self.clock.start(
            &mut self.store,
            &self.catalog,
            self.params.temperature,
            &mut self.rng,
        ) {
            Ok(()) => {
                info!(
                    atoms = self.store.atom_count(),
                    temperature = self.params.temperature,
                    "Simulation started."
                );
                self.recompute_energy();
                true
            }
            Err(err) => {
                debug!(error = %err, "Simulation start ignored.");
                false
            }
        }
    }

    pub fn stop(&mut self) {
        if self.clock.is_running() {
            info!(ticks = self.clock.ticks(), "Simulation stopped.");
        }
        self.clock.stop();
    }

    /// Stops the clock, brings every atom to rest and zeroes the energy report.
    pub fn reset(&mut self) {
        self.clock.reset(&mut self.store);
        self.energy = EnergyReport::zero();
        info!("Simulation reset.");
    }

    /// Advances the simulation by `elapsed_seconds` of wall time.
    ///
    /// Returns `Ok(false)` while stopped.
    ///
    /// # Errors
    ///
    /// Rejects a negative or non-finite elapsed time before any state changes.
    pub fn tick(&mut self, elapsed_seconds: f64) -> Result<bool, EngineError> {
        let advanced =
            self.clock
                .advance(&mut self.store, elapsed_seconds, self.params.time_scale)?;
        if advanced {
            self.recompute_energy();
        }
        Ok(advanced)
    }

    /// Applies a partial parameter update, all or nothing.
    pub fn set_params(&mut self, update: &SimulationParamsUpdate) -> Result<(), EngineError> {
        self.params = self.params.merged(update)?;
        debug!(params = ?self.params, "Simulation parameters updated.");
        self.recompute_energy();
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            atoms: self
                .store
                .atoms_iter()
                .map(|atom| AtomView::capture(atom, &self.catalog, &self.selection))
                .collect(),
            bonds: self.store.bonds_iter().map(BondView::from).collect(),
            selection: self.selection.ids().to_vec(),
            energy: self.energy,
            mode: self.interaction.mode,
            clock: self.clock.state(),
            ticks: self.clock.ticks(),
            simulated_time: self.clock.simulated_time(),
            params: self.params,
        }
    }

    /// Drains the pending lifecycle notices in the order they were raised.
    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    fn recompute_energy(&mut self) {
        self.energy = energy::evaluate(&self.store, &self.catalog, &self.params);
    }
}
