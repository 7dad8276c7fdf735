//! Simulation configuration and its validation.
//!
//! A [`SimConfig`] holds physical inputs only; the discrete resolution is
//! derived from it as
//! ```text
//! nx = round(L / dx)
//! nt = floor(t_max / dt)
//! ```
//! and checked for at least one interior node, at least one time step, and
//! sizes below [`MAX_INTERVALS`], [`MAX_STEPS`], and [`MAX_FIELD_VALUES`]
//! before anything is allocated. The grid spacing actually used is `L / nx`,
//! so that the last node sits on `x = L` even when `dx` does not divide `L`.

use serde::{ Deserialize, Serialize };
use crate::{
    analytic::DEF_ALPHA,
    error::ConfigError,
    grid::{ Grid, TimeAxis },
    scheme::{ Method, stability_ratio },
};

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default spatial step.
pub const DEF_DX: f64 = 0.1;

/// Default time step.
pub const DEF_DT: f64 = 0.001;

/// Default end time.
pub const DEF_T_MAX: f64 = 1.0;

/// Default domain length.
pub const DEF_LENGTH: f64 = 1.0;

/// Largest accepted number of spatial intervals.
pub const MAX_INTERVALS: usize = 50_000_000;

/// Largest accepted number of time steps.
pub const MAX_STEPS: usize = 100_000_000;

/// Largest accepted size of the full `(nt + 1) × (nx + 1)` field.
pub const MAX_FIELD_VALUES: usize = 500_000_000;

// relative slack applied before flooring t_max / dt, so that quotients landing
// a few ulps below an integer (e.g. 0.3 / 0.1) are not truncated
const STEP_COUNT_SLACK: f64 = 1e-9;

/// Physical inputs for a single run.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Time-stepping scheme.
    pub method: Method,
    /// Spatial step.
    pub dx: f64,
    /// Time step.
    pub dt: f64,
    /// End time.
    pub t_max: f64,
    /// Diffusivity.
    pub alpha: f64,
    /// Domain length.
    pub length: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            method: Method::Explicit,
            dx: DEF_DX,
            dt: DEF_DT,
            t_max: DEF_T_MAX,
            alpha: DEF_ALPHA,
            length: DEF_LENGTH,
        }
    }
}

/// Discrete resolution derived from a validated [`SimConfig`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    /// Spatial grid.
    pub grid: Grid,
    /// Time axis.
    pub time: TimeAxis,
}

impl Resolution {
    /// Get the number of spatial intervals.
    pub fn nx(&self) -> usize { self.grid.nx() }

    /// Get the number of time steps.
    pub fn nt(&self) -> usize { self.time.nt() }

    /// Stability ratio `α dt / dx²` on the derived grid.
    pub fn stability_ratio(&self, alpha: f64) -> f64 {
        stability_ratio(alpha, self.time.dt(), self.grid.dx())
    }
}

impl SimConfig {
    /// Create a new configuration with default values for everything except
    /// the method.
    pub fn new(method: Method) -> Self {
        Self { method, ..Self::default() }
    }

    /// Set the method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the spatial step.
    pub fn with_dx(mut self, dx: f64) -> Self {
        self.dx = dx;
        self
    }

    /// Set the time step.
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Set the end time.
    pub fn with_t_max(mut self, t_max: f64) -> Self {
        self.t_max = t_max;
        self
    }

    /// Set the diffusivity.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the domain length.
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    /// Stability ratio `α dt / dx²` for the requested `dx`.
    ///
    /// See [`Resolution::stability_ratio`] for the ratio on the derived grid.
    pub fn stability_ratio(&self) -> f64 {
        stability_ratio(self.alpha, self.dt, self.dx)
    }

    /// Check all inputs and derive the grid and time axis.
    pub fn validate(&self) -> ConfigResult<Resolution> {
        ConfigError::check_step("dx", self.dx)?;
        ConfigError::check_step("dt", self.dt)?;
        ConfigError::check_step("t_max", self.t_max)?;
        ConfigError::check_step("length", self.length)?;
        ConfigError::check_alpha(self.alpha)?;
        let nx = ConfigError::check_count(
            "nx", (self.length / self.dx).round(), MAX_INTERVALS)?;
        let nt = ConfigError::check_count(
            "nt",
            (self.t_max / self.dt * (1.0 + STEP_COUNT_SLACK)).floor(),
            MAX_STEPS,
        )?;
        ConfigError::check_nodes(nx)?;
        ConfigError::check_steps(nt)?;
        ConfigError::check_count(
            "field size",
            (nx as f64 + 1.0) * (nt as f64 + 1.0),
            MAX_FIELD_VALUES,
        )?;
        Ok(Resolution {
            grid: Grid::new(self.length / nx as f64, nx),
            time: TimeAxis::new(self.dt, nt),
        })
    }
}
