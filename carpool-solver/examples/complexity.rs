//! Time the exhaustive search over a grid of synthetic instance sizes.
//!
//! ```text
//! cargo run --release --example complexity -- [max-trips] [max-edges] [seed]
//! ```
//!
//! Prints one line per `(trips, edges)` point with the number of visited
//! configurations and the wall-clock time of the search.

use std::time::Instant;

use anyhow::{Context, bail};
use tracing_subscriber::EnvFilter;

use carpool_solver::planner::{NoOpMonitor, Planner, SearchConfig};
use carpool_solver::synthetic::generate;

const DEFAULT_MAX_TRIPS: usize = 8;
const DEFAULT_MAX_EDGES: usize = 8;
const DEFAULT_SEED: u64 = 0;

fn arg<T: std::str::FromStr>(args: &[String], pos: usize, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match args.get(pos) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("argument {} is not a valid number: {raw}", pos + 1)),
        None => Ok(default),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() > 3 {
        bail!("usage: complexity [max-trips] [max-edges] [seed]");
    }
    let max_trips = arg(&args, 0, DEFAULT_MAX_TRIPS)?;
    let max_edges = arg(&args, 1, DEFAULT_MAX_EDGES)?;
    let seed = arg(&args, 2, DEFAULT_SEED)?;

    let config = SearchConfig::default();
    println!("trips edges configurations ms");
    for num_trips in 1..=max_trips {
        for num_edges in 1..=max_edges {
            let trips = generate(num_trips, num_edges, seed);

            let started = Instant::now();
            let result = Planner::new(&trips, &config).search_with(&mut NoOpMonitor);
            let ms = started.elapsed().as_secs_f64() * 1000.0;

            tracing::debug!(
                num_trips,
                num_edges,
                benefit = result.assignment.max_benefit,
                "search finished"
            );
            println!("{num_trips} {num_edges} {} {ms:.3}", result.stats.configurations);
        }
    }

    Ok(())
}
