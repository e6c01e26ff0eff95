use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileSimulationConfig {
    pub temperature: Option<f64>,
    pub pressure: Option<f64>,
    pub ph: Option<f64>,
    pub time_scale: Option<f64>,
    pub seed: Option<u64>,
    pub placement_distance: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileRunConfig {
    pub ticks: Option<u64>,
    pub dt: Option<f64>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileAtom {
    pub element: String,
    pub position: [f64; 3],
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileBond {
    /// Zero-based indices into the `[[atoms]]` list.
    pub atoms: [usize; 2],
    pub kind: Option<String>,
}

/// The on-disk scenario description. Every field is optional so command-line
/// flags and defaults can fill the gaps.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    /// Catalog override file, relative to the scenario file.
    pub catalog: Option<PathBuf>,
    pub simulation: Option<FileSimulationConfig>,
    pub run: Option<FileRunConfig>,
    #[serde(default)]
    pub atoms: Vec<FileAtom>,
    #[serde(default)]
    pub bonds: Vec<FileBond>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading scenario from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
