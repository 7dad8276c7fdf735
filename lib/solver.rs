//! Drive a [scheme][crate::scheme] from `t = 0` to the end of a time axis,
//! keeping every time level.
//!
//! The full `(nt + 1) × (nx + 1)` field is retained so that exporters and
//! visualizations have access to the entire space-time history.

use ndarray as nd;
use crate::{
    diagnostics::Diagnostic,
    config::SimConfig,
    error::{ ConfigError, HeatError },
    grid::{ Grid, TimeAxis, initial_field },
    scheme::{ Method, Stepper, stability_ratio },
};

pub type HResult<T> = Result<T, HeatError>;

/// The output of a single run.
///
/// This struct is usually only returned by a solver function; you probably
/// won't ever instantiate it yourself.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    method: Method,
    alpha: f64,
    grid: Grid,
    time: TimeAxis,
    // first axis indexes time
    u: nd::Array2<f64>,
    diagnostics: Vec<Diagnostic>,
}

impl Solution {
    /// Get the method used.
    pub fn method(&self) -> Method { self.method }

    /// Get the diffusivity.
    pub fn alpha(&self) -> f64 { self.alpha }

    /// Get the spatial grid.
    pub fn grid(&self) -> &Grid { &self.grid }

    /// Get the time axis.
    pub fn time(&self) -> &TimeAxis { &self.time }

    /// Get the stability ratio the run used.
    pub fn stability_ratio(&self) -> f64 {
        stability_ratio(self.alpha, self.time.dt(), self.grid.dx())
    }

    /// Get a reference to the full field, indexed `[time level, node]`.
    pub fn field(&self) -> &nd::Array2<f64> { &self.u }

    /// Consume `self`, returning the full field.
    pub fn into_field(self) -> nd::Array2<f64> { self.u }

    /// Get a view of the `n`-th time level.
    ///
    /// *Panics if `n > nt`*.
    pub fn level(&self, n: usize) -> nd::ArrayView1<'_, f64> {
        self.u.row(n)
    }

    /// Get a view of the last time level.
    pub fn final_level(&self) -> nd::ArrayView1<'_, f64> {
        self.level(self.time.nt())
    }

    /// Get any advisory diagnostics produced by the run.
    pub fn diagnostics(&self) -> &[Diagnostic] { &self.diagnostics }

    /// Return `true` if every value in the field is finite.
    pub fn is_bounded(&self) -> bool { self.u.iter().all(|uk| uk.is_finite()) }
}

/// Run `method` over the given grid and time axis.
///
/// The numerical path itself never fails: an unstable explicit run is
/// reported as a [`Diagnostic`] and may produce non-finite values. Errors are
/// only returned for grids with no interior nodes.
pub fn solve(method: Method, grid: Grid, time: TimeAxis, alpha: f64)
    -> HResult<Solution>
{
    ConfigError::check_nodes(grid.nx())?;
    let r = stability_ratio(alpha, time.dt(), grid.dx());
    let diagnostics: Vec<Diagnostic> = method.diagnose(r).into_iter().collect();
    tracing::debug!(
        "starting {} solver: nx={}, nt={}, dx={}, dt={}, alpha={}, r={:.4}",
        method, grid.nx(), time.nt(), grid.dx(), time.dt(), alpha, r,
    );

    let mut u = initial_field(&grid, &time);
    let mut stepper = Stepper::new(method, r, grid.nx())?;
    for n in 0..time.nt() {
        let (prev, mut next)
            = u.multi_slice_mut((nd::s![n, ..], nd::s![n + 1, ..]));
        stepper.step(&prev, &mut next)?;
    }

    tracing::debug!("{} solver finished", method);
    Ok(Solution { method, alpha, grid, time, u, diagnostics })
}

/// Validate a configuration and run it.
pub fn simulate(config: &SimConfig) -> HResult<Solution> {
    let res = config.validate()?;
    solve(config.method, res.grid, res.time, config.alpha)
}

/// Run the explicit scheme over `nx` intervals of width `dx` for `nt` steps of
/// size `dt`.
pub fn solve_ftcs(nx: usize, nt: usize, dx: f64, dt: f64, alpha: f64)
    -> HResult<Solution>
{
    solve(Method::Explicit, Grid::new(dx, nx), TimeAxis::new(dt, nt), alpha)
}

/// Run the fully implicit scheme over `nx` intervals of width `dx` for `nt`
/// steps of size `dt`.
pub fn solve_btcs(nx: usize, nt: usize, dx: f64, dt: f64, alpha: f64)
    -> HResult<Solution>
{
    solve(Method::FullyImplicit, Grid::new(dx, nx), TimeAxis::new(dt, nt), alpha)
}

/// Run the Crank-Nicolson scheme over `nx` intervals of width `dx` for `nt`
/// steps of size `dt`.
pub fn solve_crank_nicolson(nx: usize, nt: usize, dx: f64, dt: f64, alpha: f64)
    -> HResult<Solution>
{
    solve(Method::CrankNicolson, Grid::new(dx, nx), TimeAxis::new(dt, nt), alpha)
}
