use crate::error::Result;
use moleculab::engine::snapshot::Snapshot;
use moleculab::workflows::scenario::EnergySample;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// One flattened row of the energy trace CSV.
#[derive(Debug, Serialize)]
struct TraceRow {
    tick: u64,
    time: f64,
    kinetic: f64,
    potential: f64,
    thermal: f64,
    total: f64,
}

impl From<&EnergySample> for TraceRow {
    fn from(sample: &EnergySample) -> Self {
        Self {
            tick: sample.tick,
            time: sample.time,
            kinetic: sample.energy.kinetic,
            potential: sample.energy.potential,
            thermal: sample.energy.thermal,
            total: sample.energy.total,
        }
    }
}

pub fn write_snapshot_json(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, snapshot)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    info!("Snapshot written to {:?}", path);
    Ok(())
}

pub fn write_trace_csv(path: &Path, trace: &[EnergySample]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for sample in trace {
        writer.serialize(TraceRow::from(sample))?;
    }
    writer.flush()?;
    info!(rows = trace.len(), "Energy trace written to {:?}", path);
    Ok(())
}
