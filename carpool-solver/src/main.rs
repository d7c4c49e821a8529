use std::path::PathBuf;

use anyhow::{Context, bail};
use tracing_subscriber::EnvFilter;

use carpool_solver::input::read_instance;
use carpool_solver::output::{render, write_assignment};
use carpool_solver::planner::{Planner, SearchConfig};

const USAGE: &str = "usage: carpool-solver <input-file> <output-file>";

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [input, output] = args.as_slice() else {
        bail!("wrong number of arguments\n{USAGE}");
    };
    let input = PathBuf::from(input);
    let output = PathBuf::from(output);

    // Logs go to stderr so stdout carries only the result
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let trips = read_instance(&input)
        .with_context(|| format!("reading instance {}", input.display()))?;

    let config = SearchConfig::default();
    let result = Planner::new(&trips, &config).search();
    tracing::info!(stats = %result.stats, "search complete");

    write_assignment(&output, &result.assignment)
        .with_context(|| format!("writing result {}", output.display()))?;
    print!("{}", render(&result.assignment));

    Ok(())
}
