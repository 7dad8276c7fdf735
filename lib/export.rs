//! Presentation of a [`Solution`] to outside consumers: tabular rows (written
//! as CSV) and a compact JSON payload for visualization clients.
//!
//! Nothing here opens files; writers are supplied by the caller.

use std::io::Write;
use serde::{ Deserialize, Serialize };
use crate::{
    analytic::exact_solution,
    error::HeatError,
    solver::Solution,
};

/// Column names of the tabular export.
pub const CSV_HEADER: &str = "x,t,u_numeric,u_exact,error";

/// A single `(time level, node)` row of the tabular export.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Record {
    /// Node coordinate.
    pub x: f64,
    /// Level time.
    pub t: f64,
    /// Computed value.
    pub u_numeric: f64,
    /// Exact value.
    pub u_exact: f64,
    /// Absolute error, or NaN if the computed value is not finite.
    pub error: f64,
}

/// Iterate over every `(time level, node)` pair of a solution, time-major.
pub fn records(sol: &Solution) -> impl Iterator<Item = Record> + '_ {
    let grid = *sol.grid();
    let time = *sol.time();
    let alpha = sol.alpha();
    sol.field().outer_iter().enumerate()
        .flat_map(move |(n, level)| {
            let t = time.t(n);
            level.into_iter().enumerate()
                .map(move |(i, u_numeric)| {
                    let x = grid.x(i);
                    let u_exact = exact_solution(x, t, alpha);
                    let error
                        = if u_numeric.is_finite() {
                            (u_numeric - u_exact).abs()
                        } else {
                            f64::NAN
                        };
                    Record { x, t, u_numeric: *u_numeric, u_exact, error }
                })
        })
}

/// Write the full space-time result of a solution as CSV.
///
/// Coordinates and times are written with 6 decimals; values in scientific
/// notation with 8 fractional digits.
pub fn write_csv<W: Write>(sol: &Solution, mut out: W) -> Result<(), HeatError> {
    writeln!(out, "{}", CSV_HEADER)?;
    for rec in records(sol) {
        writeln!(
            out,
            "{:.6},{:.6},{:.8e},{:.8e},{:.8e}",
            rec.x, rec.t, rec.u_numeric, rec.u_exact, rec.error,
        )?;
    }
    out.flush()?;
    Ok(())
}

/// Step sizes and the full field, shaped for a remote visualization client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    /// Spatial step.
    pub dx: f64,
    /// Time step.
    pub dt: f64,
    /// Field values, indexed `[time][space]`.
    pub u: Vec<Vec<f64>>,
}

impl Payload {
    /// Build a payload from a solution.
    pub fn from_solution(sol: &Solution) -> Self {
        let u: Vec<Vec<f64>>
            = sol.field().outer_iter()
            .map(|level| level.to_vec())
            .collect();
        Self { dx: sol.grid().dx(), dt: sol.time().dt(), u }
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, HeatError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize as JSON to a writer.
    pub fn write_json<W: Write>(&self, mut out: W) -> Result<(), HeatError> {
        serde_json::to_writer(&mut out, self)?;
        out.flush()?;
        Ok(())
    }
}

impl From<&Solution> for Payload {
    fn from(sol: &Solution) -> Self { Self::from_solution(sol) }
}
