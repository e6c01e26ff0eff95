use thiserror::Error;

use super::config::ConfigError;
use crate::core::models::ids::{AtomId, BondId};
use crate::core::models::store::StoreError;
use crate::core::physics::params::InvalidParamError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("Atom {0} does not exist")]
    UnknownAtom(AtomId),

    #[error("Atoms {first} and {second} are already joined by bond {existing}")]
    DuplicateBond {
        first: AtomId,
        second: AtomId,
        existing: BondId,
    },

    #[error("Cannot bond atom {0} to itself")]
    SelfBond(AtomId),

    #[error("Bonding requires exactly two selected atoms, found {found}")]
    SelectionSize { found: usize },

    #[error("Cannot start the simulation: the workspace has no atoms")]
    EmptyWorkspace,

    #[error("Interaction ray needs a finite origin and a finite, non-zero direction")]
    InvalidRay,

    #[error("Atom position must be finite, got ({x}, {y}, {z})")]
    InvalidPosition { x: f64, y: f64, z: f64 },

    #[error(transparent)]
    InvalidParameter(#[from] InvalidParamError),

    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UnknownAtom(id) => EngineError::UnknownAtom(id),
            StoreError::DuplicateBond {
                first,
                second,
                existing,
            } => EngineError::DuplicateBond {
                first,
                second,
                existing,
            },
            StoreError::SelfBond(id) => EngineError::SelfBond(id),
        }
    }
}
