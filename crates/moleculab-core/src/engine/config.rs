use crate::core::catalog::{BondKind, Catalog, Element};
use crate::core::physics::params::{InvalidParamError, SimulationParams};
use thiserror::Error;

/// Distance along the pointer ray at which add mode places new atoms.
pub const DEFAULT_PLACEMENT_DISTANCE: f64 = 10.0;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid initial simulation parameters: {0}")]
    Params(#[from] InvalidParamError),
    #[error("Placement distance must be finite and positive, got {0}")]
    PlacementDistance(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub catalog: Catalog,
    pub params: SimulationParams,
    /// Seed for velocity initialization; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub placement_distance: f64,
    pub initial_element: Element,
    pub initial_bond_kind: BondKind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalog: Catalog::builtin(),
            params: SimulationParams::default(),
            seed: None,
            placement_distance: DEFAULT_PLACEMENT_DISTANCE,
            initial_element: Element::default(),
            initial_bond_kind: BondKind::default(),
        }
    }
}

#[derive(Default)]
pub struct EngineConfigBuilder {
    catalog: Option<Catalog>,
    params: Option<SimulationParams>,
    seed: Option<u64>,
    placement_distance: Option<f64>,
    initial_element: Option<Element>,
    initial_bond_kind: Option<BondKind>,
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }
    pub fn params(mut self, params: SimulationParams) -> Self {
        self.params = Some(params);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn placement_distance(mut self, distance: f64) -> Self {
        self.placement_distance = Some(distance);
        self
    }
    pub fn initial_element(mut self, element: Element) -> Self {
        self.initial_element = Some(element);
        self
    }
    pub fn initial_bond_kind(mut self, kind: BondKind) -> Self {
        self.initial_bond_kind = Some(kind);
        self
    }

    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        let params = self.params.unwrap_or_default();
        params.validate()?;

        let placement_distance = self
            .placement_distance
            .unwrap_or(DEFAULT_PLACEMENT_DISTANCE);
        if !(placement_distance.is_finite() && placement_distance > 0.0) {
            return Err(ConfigError::PlacementDistance(placement_distance));
        }

        Ok(EngineConfig {
            catalog: self.catalog.unwrap_or_default(),
            params,
            seed: self.seed,
            placement_distance,
            initial_element: self.initial_element.unwrap_or_default(),
            initial_bond_kind: self.initial_bond_kind.unwrap_or_default(),
        })
    }
}
