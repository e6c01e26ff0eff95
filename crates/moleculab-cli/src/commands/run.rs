use crate::cli::RunArgs;
use crate::config::build_config;
use crate::error::Result;
use crate::output;
use crate::utils::progress::CliProgressHandler;
use moleculab::core::physics::energy::EnergyReport;
use moleculab::engine::progress::ProgressReporter;
use moleculab::workflows::scenario;
use tracing::{debug, info};

pub fn run(args: RunArgs) -> Result<()> {
    info!("Merging scenario file and CLI arguments...");
    let app_config = build_config(&args)?;
    if let Some(path) = &app_config.catalog_path {
        println!("Using catalog: {}", path.display());
    }

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Running scenario with {} atom(s), {} bond(s) for {} tick(s)...",
        app_config.scenario.atoms.len(),
        app_config.scenario.bonds.len(),
        app_config.scenario.ticks
    );
    info!("Invoking the scenario workflow...");
    let report = scenario::run(&app_config.scenario, &app_config.engine, &reporter)?;

    debug!(
        events = report.events.len(),
        "Engine lifecycle notices drained."
    );
    print_energy("Initial energy", &report.initial_energy);
    print_energy("Final energy", &report.snapshot.energy);
    println!(
        "Simulated {} tick(s), {:.4} s of scaled time.",
        report.snapshot.ticks, report.snapshot.simulated_time
    );

    if let Some(path) = &app_config.output_path {
        output::write_snapshot_json(path, &report.snapshot)?;
        println!("✓ Snapshot written to: {}", path.display());
    }
    if let Some(path) = &app_config.trace_path {
        output::write_trace_csv(path, &report.trace)?;
        println!("✓ Energy trace written to: {}", path.display());
    }

    Ok(())
}

fn print_energy(label: &str, energy: &EnergyReport) {
    println!(
        "{label}: total {:.4} (kinetic {:.4}, potential {:.4}, thermal {:.4})",
        energy.total, energy.kinetic, energy.potential, energy.thermal
    );
}
