use anyhow::{bail, Result};
use clap::Parser;

use petri_core::{init_logging, SimConfig};
use petri_lib::{app, patterns};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed pattern name (see README for the catalog)
    #[arg(default_value = "glider")]
    pattern: String,

    /// Number of compute workers (overrides config)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Run without a terminal UI (requires --iterations)
    #[arg(long)]
    headless: bool,

    /// Stop after this many iterations; 0 runs until quit (overrides config)
    #[arg(short, long)]
    iterations: Option<u64>,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = SimConfig::load(&args.config)?;
    if let Some(workers) = args.workers {
        config.engine.workers = workers;
    }
    if let Some(iterations) = args.iterations {
        config.engine.max_iterations = iterations;
    }

    let Some(pattern) = patterns::lookup(&args.pattern) else {
        bail!(
            "no such pattern {:?}; available: {}",
            args.pattern,
            patterns::PATTERN_NAMES.join(", ")
        );
    };

    tracing::info!(
        pattern = %args.pattern,
        rows = pattern.rows,
        cols = pattern.cols,
        workers = config.engine.workers,
        "starting simulation"
    );

    app::run(app::RunOptions {
        pattern,
        config,
        headless: args.headless,
    })
}
