//! Argument groups and logging setup shared by the binaries.

use clap::Args;
use heatspace::{
    analytic::DEF_ALPHA,
    config::{ DEF_DT, DEF_DX, DEF_LENGTH, DEF_T_MAX, SimConfig },
    scheme::Method,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Physical parameters common to every run.
#[derive(Args, Clone, Debug)]
pub struct PhysArgs {
    /// Spatial step
    #[arg(long, default_value_t = DEF_DX)]
    pub dx: f64,

    /// Time step
    #[arg(long, default_value_t = DEF_DT)]
    pub dt: f64,

    /// End time
    #[arg(long = "tmax", default_value_t = DEF_T_MAX)]
    pub t_max: f64,

    /// Diffusivity
    #[arg(long, default_value_t = DEF_ALPHA)]
    pub alpha: f64,

    /// Domain length
    #[arg(long, default_value_t = DEF_LENGTH)]
    pub length: f64,
}

impl PhysArgs {
    /// Build a configuration for `method` from these parameters.
    pub fn config(&self, method: Method) -> SimConfig {
        SimConfig::new(method)
            .with_dx(self.dx)
            .with_dt(self.dt)
            .with_t_max(self.t_max)
            .with_alpha(self.alpha)
            .with_length(self.length)
    }
}

/// Install a global formatting subscriber at the named level (trace, debug,
/// info, warn, error); unknown names fall back to info.
pub fn init_logging(log_level: &str) -> anyhow::Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
