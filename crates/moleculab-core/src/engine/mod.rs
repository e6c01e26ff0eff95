//! # Engine Module
//!
//! The stateful layer of the sandbox. [`sandbox::SandboxEngine`] owns the entity
//! store, selection, interaction state, simulation clock and parameters, and is
//! the only place where they are mutated.
//!
//! Rendering collaborators read immutable [`snapshot::Snapshot`] copies and drain
//! [`events::EngineEvent`] notices; they never hold references into engine state.

pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod interaction;
pub mod progress;
pub mod sandbox;
pub mod snapshot;
