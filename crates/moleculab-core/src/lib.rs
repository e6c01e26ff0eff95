//! # Moleculab Core Library
//!
//! The simulation and interaction engine behind a molecular sandbox: it owns the
//! atom/bond graph, a pedagogical energy model, and a select/add/delete interaction
//! protocol, independent of any rendering.
//!
//! ## Architectural Philosophy
//!
//! - **[`core`]: The Foundation.** Reference catalogs, the entity store, the
//!   energy accountant and geometry helpers. Stateless apart from the store itself.
//!
//! - **[`engine`]: The Logic Core.** [`engine::sandbox::SandboxEngine`] is the single
//!   owner of all mutable state. It resolves pointer rays, enforces the graph
//!   invariants, drives the simulation clock and hands out immutable snapshots.
//!
//! - **[`workflows`]: The Public API.** Scripted procedures built on the engine
//!   surface, such as running a declarative scenario for a fixed number of ticks.
//!
//! The physics is deliberately simple: first-order drift, a harmonic bond term
//! that only feeds the reported potential energy, and a flat thermal bath term.

pub mod core;
pub mod engine;
pub mod workflows;
