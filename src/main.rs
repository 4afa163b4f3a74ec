//! Elevation profile command-line interface.
//!
//! ```sh
//! elevation-spline profile samples.json --config job.toml
//! elevation-spline coefficients samples.json --nodes 20
//! ```

mod config;
mod runner;

use std::{io::Write, path::PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use elevation_spline::route::load_elevation_samples;

#[derive(Parser)]
#[command(name = "elevation-spline")]
#[command(about = "Natural cubic spline elevation profiles of hiking routes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit splines through subsets of the samples, print tables and route statistics.
    Profile {
        /// Open-Elevation style JSON with the route samples.
        input: PathBuf,
        /// Optional TOML configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Node counts to fit, comma separated (overrides config).
        #[arg(long, value_delimiter = ',')]
        subsets: Option<Vec<usize>>,
        /// Dense samples per spline (overrides config).
        #[arg(long)]
        samples: Option<usize>,
        /// Subset reported with coefficients and statistics (overrides config).
        #[arg(long)]
        report_nodes: Option<usize>,
        /// Hiker mass in kg for the energy estimate (overrides config).
        #[arg(long)]
        mass: Option<f64>,
        /// Output directory for profile CSV files (overrides config).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Do not write profile CSV files.
        #[arg(long)]
        no_csv: bool,
    },
    /// Print spline coefficients.
    Coefficients {
        /// Open-Elevation style JSON with the route samples.
        input: PathBuf,
        /// Number of evenly spread nodes (default: all samples).
        #[arg(short, long)]
        nodes: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Profile { input, config, subsets, samples, report_nodes, mass, output, no_csv } => {
            let mut job = match config {
                Some(path) => config::load_config(&path)?,
                None => config::JobConfig::default(),
            };
            if let Some(subsets) = subsets {
                job.analysis.subsets = subsets;
            }
            if let Some(samples) = samples {
                job.analysis.samples = samples;
            }
            if let Some(report_nodes) = report_nodes {
                job.analysis.report_nodes = report_nodes;
            }
            if let Some(mass) = mass {
                job.analysis.hiker_mass_kg = mass;
            }
            if let Some(output) = output {
                job.output.directory = output;
            }
            if no_csv {
                job.output.save_profile = false;
            }
            job.validate()?;

            let points = load_elevation_samples(&input)
                .with_context(|| format!("failed to load samples from {}", input.display()))?;
            runner::run_profile(&points, &job, &mut out)?;
        }
        Commands::Coefficients { input, nodes } => {
            let points = load_elevation_samples(&input)
                .with_context(|| format!("failed to load samples from {}", input.display()))?;
            runner::run_coefficients(&points, nodes, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
