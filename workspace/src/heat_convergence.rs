mod cli;

use anyhow::Context;
use clap::Parser;
use ndarray as nd;
use heatspace::{ analysis, scheme::Method, solver };
use tracing::info;

/// Measure the temporal order of the implicit schemes by repeatedly halving dt
/// on a fixed grid.
#[derive(Parser)]
#[command(name = "heat_convergence")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Temporal convergence study for BTCS and Crank-Nicolson", long_about = None)]
struct Cli {
    /// Spatial step
    #[arg(long, default_value_t = 0.02)]
    dx: f64,

    /// Coarsest time step
    #[arg(long, default_value_t = 0.01)]
    dt: f64,

    /// End time
    #[arg(long = "tmax", default_value_t = 0.1)]
    t_max: f64,

    /// Diffusivity
    #[arg(long, default_value_t = 1.0)]
    alpha: f64,

    /// Number of time-step halvings
    #[arg(
        short, long,
        default_value_t = 5,
        value_parser = clap::value_parser!(u32).range(2..=30),
    )]
    levels: u32,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::init_logging(&cli.log_level)?;

    for method in [Method::FullyImplicit, Method::CrankNicolson] {
        println!(
            "{} (expected order {}), dx = {}",
            method.name(), method.order_in_time(), cli.dx,
        );
        println!(
            "{:>12} {:>14} {:>14} {:>8}",
            "dt", "L∞ (exact)", "Δ (self)", "order",
        );
        // successive final levels differ only by temporal error, so the
        // ratio of consecutive differences gives the order
        let mut prev_level: Option<nd::Array1<f64>> = None;
        let mut prev_diff: Option<f64> = None;
        for k in 0..=cli.levels {
            let dt = cli.dt / (1_usize << k) as f64;
            let config = cli::PhysArgs {
                dx: cli.dx,
                dt,
                t_max: cli.t_max,
                alpha: cli.alpha,
                length: 1.0,
            }.config(method);
            let sol = solver::simulate(&config)
                .with_context(|| format!("{} run at dt = {} failed", method, dt))?;
            info!("{}: dt = {}, nt = {}", method, dt, sol.time().nt());
            let linf = analysis::error_norms(&sol).linf;
            let level: nd::Array1<f64> = sol.final_level().to_owned();
            let diff = prev_level.as_ref()
                .map(|prev| analysis::max_difference(prev, &level));
            let order = prev_diff.zip(diff)
                .map(|(coarse, fine)| analysis::observed_order(coarse, fine, 2.0));
            println!(
                "{:>12.4e} {:>14.6e} {:>14} {:>8}",
                dt,
                linf,
                diff.map(|d| format!("{:.6e}", d)).unwrap_or_else(|| "-".into()),
                order.map(|p| format!("{:.3}", p)).unwrap_or_else(|| "-".into()),
            );
            prev_level = Some(level);
            prev_diff = diff;
        }
        println!();
    }
    Ok(())
}
