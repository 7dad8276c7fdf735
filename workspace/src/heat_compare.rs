mod cli;

use std::time::Instant;
use anyhow::Context;
use clap::Parser;
use heatspace::{ analysis, scheme::Method, solver };
use tracing::{ info, warn };

/// Run every scheme on the same problem and compare accuracy and runtime.
#[derive(Parser)]
#[command(name = "heat_compare")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compare FTCS, BTCS, and Crank-Nicolson on the 1D heat equation", long_about = None)]
struct Cli {
    #[command(flatten)]
    phys: cli::PhysArgs,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::init_logging(&cli.log_level)?;

    let base = cli.phys.config(Method::Explicit);
    let res = base.validate().context("invalid parameters")?;
    info!("grid: {} nodes, {} steps", res.grid.num_nodes(), res.nt());
    println!(
        "nx = {}, nt = {}, r = {:.4}, t = {}",
        res.nx(), res.nt(), res.stability_ratio(base.alpha), res.time.t_final(),
    );
    println!(
        "{:<6} {:>14} {:>14} {:>8} {:>12}",
        "method", "L2", "L∞", "valid", "time (ms)",
    );
    for method in Method::ALL {
        let config = base.with_method(method);
        let start = Instant::now();
        let sol = solver::simulate(&config)
            .with_context(|| format!("{} run failed", method))?;
        let elapsed = start.elapsed();
        sol.diagnostics().iter().for_each(|diag| warn!("{}", diag));
        let norms = analysis::error_norms(&sol);
        println!(
            "{:<6} {:>14.6e} {:>14.6e} {:>8} {:>12.3}",
            method.code(),
            norms.l2,
            norms.linf,
            format!("{}/{}", norms.valid, norms.total),
            elapsed.as_secs_f64() * 1e3,
        );
    }
    Ok(())
}
