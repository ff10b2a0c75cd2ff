//! Run the deterministic and finite-population models side by side.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use tracing::info;

use fisher_wright::chart::{render_svg, ChartStyle};
use fisher_wright::report::{write_report, Format};
use fisher_wright::{simulate_replicates, ConvergenceRule, SimParams};

#[derive(Parser, Debug)]
#[command(name = "fisher_wright")]
#[command(version, about = "Allele trajectories under selection, mutation and drift")]
struct Args {
    #[command(flatten)]
    params: SimParams,
    /// Random seed (drawn from the OS if omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Number of finite-population trajectories
    #[arg(short, long, default_value_t = 1)]
    replicates: usize,
    /// How the deterministic increment is tested for convergence
    #[arg(long, value_enum, default_value_t = ConvergenceRule::Signed)]
    convergence: ConvergenceRule,
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,
    /// Report destination (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Also write the chart as SVG
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let result = simulate_replicates(args.params, args.convergence, args.replicates, &mut rng)
        .context("invalid simulation parameters")?;
    info!(
        seed,
        horizon = result.horizon,
        replicates = result.replicates.len(),
        "simulation finished"
    );

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_report(&result, args.format, BufWriter::new(file))
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => write_report(&result, args.format, io::stdout().lock())
            .context("failed to write report")?,
    }

    if let Some(path) = &args.svg {
        let style = ChartStyle {
            caption: Some(format!(
                "P = {}, s = {}, mu = {}, nu = {}",
                result.params.popsize, result.params.selection, result.params.mu, result.params.nu
            )),
            ..ChartStyle::default()
        };
        let svg = render_svg(
            &result.deterministic,
            &result.replicates,
            result.horizon,
            result.params.popsize,
            &style,
        )?;
        std::fs::write(path, svg).with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "chart written");
    }

    Ok(())
}
