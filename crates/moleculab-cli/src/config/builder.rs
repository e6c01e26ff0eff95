use super::defaults::DefaultsConfig;
use super::file::{FileAtom, FileBond, FileConfig};
use super::models::AppConfig;
use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use moleculab::core::catalog::{BondKind, Catalog, Element};
use moleculab::core::physics::params::SimulationParams;
use moleculab::engine::config::EngineConfigBuilder;
use moleculab::workflows::scenario::{MAX_TICKS, ScenarioAtom, ScenarioBond, ScenarioSpec};
use nalgebra::Point3;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

pub fn build_config(args: &RunArgs) -> Result<AppConfig> {
    if let (Some(output), Some(trace)) = (&args.output, &args.trace) {
        if output == trace {
            return Err(CliError::Argument(format!(
                "--output and --trace must name different files, both are {}",
                output.display()
            )));
        }
    }

    let defaults = DefaultsConfig::default();

    let file_config = FileConfig::from_file(&args.scenario)?;
    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let sim_file = file_config.simulation.take().unwrap_or_default();
    let params = SimulationParams {
        temperature: args
            .temperature
            .or(sim_file.temperature)
            .unwrap_or(defaults.temperature),
        pressure: sim_file.pressure.unwrap_or(defaults.pressure),
        ph: sim_file.ph.unwrap_or(defaults.ph),
        time_scale: args
            .time_scale
            .or(sim_file.time_scale)
            .unwrap_or(defaults.time_scale),
    };
    let seed = args.seed.or(sim_file.seed);
    let placement_distance = sim_file
        .placement_distance
        .unwrap_or(defaults.placement_distance);

    let run_file = file_config.run.take().unwrap_or_default();
    let ticks = args.ticks.or(run_file.ticks).unwrap_or(defaults.ticks);
    if ticks > MAX_TICKS {
        return Err(CliError::Config(format!(
            "Tick count {} exceeds the maximum of {}",
            ticks, MAX_TICKS
        )));
    }
    let dt = args.dt.or(run_file.dt).unwrap_or(defaults.dt);
    if !dt.is_finite() || dt < 0.0 {
        return Err(CliError::Config(format!(
            "Tick duration must be finite and non-negative, got {}",
            dt
        )));
    }

    let catalog_path = resolve_catalog_path(
        args.catalog.as_deref(),
        file_config.catalog.as_deref(),
        &args.scenario,
    );
    let catalog = match &catalog_path {
        Some(path) => {
            info!("Loading catalog override from {:?}", path);
            Catalog::load(path)?
        }
        None => Catalog::builtin(),
    };

    let mut engine_builder = EngineConfigBuilder::new()
        .catalog(catalog)
        .params(params)
        .placement_distance(placement_distance);
    if let Some(seed) = seed {
        engine_builder = engine_builder.seed(seed);
    }
    let engine = engine_builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let scenario = ScenarioSpec {
        atoms: file_config
            .atoms
            .iter()
            .map(convert_atom)
            .collect::<Result<_>>()?,
        bonds: file_config
            .bonds
            .iter()
            .map(convert_bond)
            .collect::<Result<_>>()?,
        ticks,
        dt,
    };
    debug!(
        atoms = scenario.atoms.len(),
        bonds = scenario.bonds.len(),
        ticks,
        dt,
        "Scenario configuration merged."
    );

    Ok(AppConfig {
        scenario,
        engine,
        catalog_path,
        output_path: args.output.clone(),
        trace_path: args.trace.clone(),
    })
}

/// A command-line catalog path is taken as given; one from the scenario file
/// is resolved against the scenario file's directory.
fn resolve_catalog_path(
    cli_arg: Option<&Path>,
    file_arg: Option<&Path>,
    scenario_path: &Path,
) -> Option<PathBuf> {
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }
    let path = file_arg?;
    if path.is_absolute() {
        return Some(path.to_path_buf());
    }
    Some(match scenario_path.parent() {
        Some(dir) => dir.join(path),
        None => path.to_path_buf(),
    })
}

fn convert_atom(atom: &FileAtom) -> Result<ScenarioAtom> {
    let element = Element::from_str(&atom.element)
        .map_err(|e| CliError::Config(e.to_string()))?;
    let [x, y, z] = atom.position;
    Ok(ScenarioAtom {
        element,
        position: Point3::new(x, y, z),
    })
}

fn convert_bond(bond: &FileBond) -> Result<ScenarioBond> {
    let kind = match &bond.kind {
        Some(kind) => BondKind::from_str(kind).map_err(|e| CliError::Config(e.to_string()))?,
        None => BondKind::default(),
    };
    Ok(ScenarioBond {
        atoms: (bond.atoms[0], bond.atoms[1]),
        kind,
    })
}

fn parse_value<T: FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();
        let value_str = value_str.trim();

        match key {
            "catalog" => config.catalog = Some(PathBuf::from(value_str)),
            "simulation.temperature" => {
                config
                    .simulation
                    .get_or_insert_with(Default::default)
                    .temperature = Some(parse_value(key, value_str, "float")?);
            }
            "simulation.pressure" => {
                config
                    .simulation
                    .get_or_insert_with(Default::default)
                    .pressure = Some(parse_value(key, value_str, "float")?);
            }
            "simulation.ph" => {
                config.simulation.get_or_insert_with(Default::default).ph =
                    Some(parse_value(key, value_str, "float")?);
            }
            "simulation.time-scale" => {
                config
                    .simulation
                    .get_or_insert_with(Default::default)
                    .time_scale = Some(parse_value(key, value_str, "float")?);
            }
            "simulation.seed" => {
                config.simulation.get_or_insert_with(Default::default).seed =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "simulation.placement-distance" => {
                config
                    .simulation
                    .get_or_insert_with(Default::default)
                    .placement_distance = Some(parse_value(key, value_str, "float")?);
            }
            "run.ticks" => {
                config.run.get_or_insert_with(Default::default).ticks =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "run.dt" => {
                config.run.get_or_insert_with(Default::default).dt =
                    Some(parse_value(key, value_str, "float")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
