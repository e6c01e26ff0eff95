use super::error::EngineError;
use crate::core::catalog::Catalog;
use crate::core::models::store::EntityStore;
use crate::core::physics::params::InvalidParamError;
use crate::core::physics::potentials;
use nalgebra::Vector3;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockState {
    #[default]
    Stopped,
    Running,
}

/// Running/stopped state plus tick bookkeeping for the integrator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationClock {
    state: ClockState,
    ticks: u64,
    simulated_time: f64,
}

impl SimulationClock {
    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Accumulated scaled time in seconds.
    pub fn simulated_time(&self) -> f64 {
        self.simulated_time
    }

    /// Draws thermal velocities for every atom and starts the clock.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyWorkspace`] without touching anything if the store has no atoms.
    pub(crate) fn start(
        &mut self,
        store: &mut EntityStore,
        catalog: &Catalog,
        temperature: f64,
        rng: &mut impl Rng,
    ) -> Result<(), EngineError> {
        if store.is_empty() {
            return Err(EngineError::EmptyWorkspace);
        }
        assign_thermal_velocities(store, catalog, temperature, rng);
        self.state = ClockState::Running;
        Ok(())
    }

    pub(crate) fn stop(&mut self) {
        self.state = ClockState::Stopped;
    }

    /// Stops the clock, clears tick bookkeeping and brings every atom to rest.
    pub(crate) fn reset(&mut self, store: &mut EntityStore) {
        *self = Self::default();
        for atom in store.atoms_iter_mut() {
            atom.velocity = Vector3::zeros();
        }
    }

    /// Advances positions by one tick if the clock is running.
    ///
    /// Returns `Ok(false)` without changing anything while stopped.
    ///
    /// # Errors
    ///
    /// Rejects a negative or non-finite `elapsed` before any state changes.
    pub(crate) fn advance(
        &mut self,
        store: &mut EntityStore,
        elapsed: f64,
        time_scale: f64,
    ) -> Result<bool, EngineError> {
        validate_elapsed(elapsed)?;
        if !self.is_running() {
            return Ok(false);
        }
        let effective_dt = elapsed * time_scale;
        drift(store, effective_dt);
        self.ticks += 1;
        self.simulated_time += effective_dt;
        Ok(true)
    }
}

fn validate_elapsed(elapsed: f64) -> Result<(), InvalidParamError> {
    if !elapsed.is_finite() {
        return Err(InvalidParamError {
            name: "elapsed",
            value: elapsed,
            reason: "must be finite",
        });
    }
    if elapsed < 0.0 {
        return Err(InvalidParamError {
            name: "elapsed",
            value: elapsed,
            reason: "must not be negative",
        });
    }
    Ok(())
}

/// Gives every atom a random velocity with each axis drawn uniformly from
/// `[-0.5, 0.5] · thermal_speed(temperature, mass)`.
pub fn assign_thermal_velocities(
    store: &mut EntityStore,
    catalog: &Catalog,
    temperature: f64,
    rng: &mut impl Rng,
) {
    for atom in store.atoms_iter_mut() {
        let speed = potentials::thermal_speed(temperature, catalog.element(atom.element).mass);
        atom.velocity = Vector3::new(
            rng.gen_range(-0.5..=0.5) * speed,
            rng.gen_range(-0.5..=0.5) * speed,
            rng.gen_range(-0.5..=0.5) * speed,
        );
    }
}

/// First-order drift: `position += velocity · dt` for every atom.
pub fn drift(store: &mut EntityStore, dt: f64) {
    for atom in store.atoms_iter_mut() {
        atom.position += atom.velocity * dt;
    }
}
