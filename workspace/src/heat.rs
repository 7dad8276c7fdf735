mod cli;

use std::{
    fs::File,
    io::BufWriter,
    path::PathBuf,
    time::Instant,
};
use anyhow::Context;
use clap::Parser;
use heatspace::{
    analysis,
    export::{ self, Payload },
    scheme::Method,
    solver,
};
use tracing::{ info, warn };

/// Solve the 1D heat equation with u(x, 0) = sin(πx) and zero boundaries.
#[derive(Parser)]
#[command(name = "heat")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Finite-difference solver for the 1D heat equation", long_about = None)]
struct Cli {
    /// Time-stepping scheme: FTCS, BTCS, or CN
    #[arg(short, long, default_value = "FTCS")]
    method: Method,

    #[command(flatten)]
    phys: cli::PhysArgs,

    /// CSV output path
    #[arg(short, long, default_value = "results.csv")]
    out: PathBuf,

    /// Also write the full field as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::init_logging(&cli.log_level)?;

    let config = cli.phys.config(cli.method);
    let res = config.validate().context("invalid parameters")?;
    info!(
        "method: {} ({}); dx = {}, dt = {}, t_max = {}, alpha = {}",
        config.method, config.method.name(),
        config.dx, config.dt, config.t_max, config.alpha,
    );
    info!(
        "grid: {} nodes (dx = {}), {} steps, r = {:.4}",
        res.grid.num_nodes(), res.grid.dx(), res.nt(),
        res.stability_ratio(config.alpha),
    );

    let start = Instant::now();
    let sol = solver::simulate(&config).context("simulation failed")?;
    let elapsed = start.elapsed();
    sol.diagnostics().iter().for_each(|diag| warn!("{}", diag));

    let norms = analysis::error_norms(&sol);
    if norms.has_invalid() {
        warn!(
            "{} of {} nodes are not finite at t = {}",
            norms.total - norms.valid, norms.total, sol.time().t_final(),
        );
    }
    info!("L2 error:  {:.6e}", norms.l2);
    info!("L∞ error:  {:.6e}", norms.linf);
    info!("runtime:   {:.3} ms", elapsed.as_secs_f64() * 1e3);

    let file = File::create(&cli.out)
        .with_context(|| format!("failed to create {}", cli.out.display()))?;
    export::write_csv(&sol, BufWriter::new(file))
        .with_context(|| format!("failed to write {}", cli.out.display()))?;
    info!("results written to {}", cli.out.display());

    if let Some(path) = cli.json.as_ref() {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        Payload::from(&sol).write_json(BufWriter::new(file))
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("field written to {}", path.display());
    }
    Ok(())
}
