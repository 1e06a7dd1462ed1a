//! CLI argument definitions for sgp4-bench

use clap::Parser;
use sgp4_core::GeophysicalModel;

pub const MAX_WORKERS: usize = 64;

#[derive(Parser, Debug)]
#[command(name = "sgp4-bench")]
#[command(about = "Batch SGP4 propagation throughput benchmark")]
#[command(version)]
pub struct Cli {
    /// Number of satellites to propagate
    #[arg(short, long, default_value = "9534")]
    pub satellites: usize,

    /// Time step in seconds
    #[arg(long, default_value = "60")]
    pub step: u32,

    /// Propagation window in seconds
    #[arg(long, default_value = "86400")]
    pub duration: f64,

    /// Worker threads, each owning a slice of the satellites (clamped to 1..=64)
    #[arg(short, long, default_value = "1")]
    pub workers: usize,

    /// Geophysical model: wgs72 or wgs84
    #[arg(long, default_value = "wgs72")]
    pub model: GeophysicalModel,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn workers(&self) -> usize {
        self.workers.clamp(1, MAX_WORKERS)
    }

    /// Instants per satellite, including the one at epoch.
    pub fn points_per_satellite(&self) -> usize {
        ((self.duration / f64::from(self.step.max(1))) as usize).saturating_add(1)
    }

    /// Satellites times instants, or `None` if that does not fit in a `u64`.
    pub fn total_propagations(&self) -> Option<u64> {
        let satellites = u64::try_from(self.satellites).ok()?;
        let points = u64::try_from(self.points_per_satellite()).ok()?;
        satellites.checked_mul(points)
    }
}
