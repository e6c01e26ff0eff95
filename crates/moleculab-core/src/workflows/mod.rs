//! # Workflows Module
//!
//! High-level entry points that drive a [`SandboxEngine`](crate::engine::sandbox::SandboxEngine)
//! through its public surface.
//!
//! - **Scenario Workflow** ([`scenario`]) - Builds a workspace from a declarative
//!   description, starts the clock and records the energy after every tick.

pub mod scenario;
