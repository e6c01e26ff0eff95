use moleculab::engine::config::EngineConfig;
use moleculab::workflows::scenario::ScenarioSpec;
use std::path::PathBuf;

pub struct AppConfig {
    pub scenario: ScenarioSpec,
    pub engine: EngineConfig,
    /// Catalog file the engine was built from, if any.
    pub catalog_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub trace_path: Option<PathBuf>,
}
