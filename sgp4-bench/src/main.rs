//! sgp4-bench: batch SGP4 throughput benchmark
//!
//! Propagates a synthetic ISS-derived fleet over a time window, splitting the
//! satellites across worker threads that each own a private batch.

mod cli;
mod worker;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use sgp4_batch::{simd_name, Propagator};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let workers = cli.workers();
    let steps = cli.points_per_satellite();
    let step_seconds = f64::from(cli.step.max(1));
    let total_props = cli.total_propagations().context("satellites × steps overflows u64")?;

    print_plan(&cli, workers, steps, total_props);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .context("failed to build worker pool")?;
    let propagator = Propagator::new(cli.model.clone());
    let ranges = worker::partition(cli.satellites, workers);

    let start = Instant::now();
    let props = pool
        .install(|| worker::run_all(&propagator, ranges, steps, step_seconds))
        .context("propagation failed")?;
    let wall_time = start.elapsed().as_secs_f64();

    print_summary(&cli, wall_time, props);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_plan(cli: &Cli, workers: usize, steps: usize, total_props: u64) {
    println!("=== SGP4 Batch Benchmark ===");
    println!("SIMD:          {}", simd_name());
    println!("Model:         {}", cli.model);
    println!();
    println!("Configuration:");
    println!("  Satellites:  {}", cli.satellites);
    println!("  Step size:   {}s", cli.step.max(1));
    println!("  Points/sat:  {}", steps);
    println!("  Total props: {}", total_props);
    println!("  Workers:     {}", workers);
    println!();
    println!("Running benchmark...");
}

fn print_summary(cli: &Cli, wall_time: f64, props: u64) {
    let throughput = if wall_time > 0.0 {
        props as f64 / wall_time
    } else {
        0.0
    };

    println!();
    println!("=== Results ===");
    println!("  Wall time:    {:.3}s", wall_time);
    println!("  Propagations: {}", props);
    println!("  Throughput:   {:.0} prop/s", throughput);
    if cli.satellites > 0 {
        println!(
            "  Per sat:      {:.3}ms",
            wall_time * 1000.0 / cli.satellites as f64
        );
    }
}
