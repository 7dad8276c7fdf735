//! Error norms against the exact solution.
//!
//! For a level at time `t`,
//! ```text
//! L2 = sqrt( (1/N) Σ_i (u[i] - u_exact(x[i], t))² )
//! L∞ = max_i |u[i] - u_exact(x[i], t)|
//! ```
//! Nodes holding NaN or ±∞ (as produced by a diverging explicit run) are
//! skipped, and `N` counts only the remaining nodes; when every node is valid
//! this is the usual `nx + 1`. If no node is valid both norms are NaN.

use ndarray as nd;
use crate::{
    Arr1,
    analytic::exact_solution,
    solver::Solution,
};

/// L2 and L∞ errors for a single time level.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ErrorNorms {
    /// Root-mean-square error over valid nodes.
    pub l2: f64,
    /// Maximum absolute error over valid nodes.
    pub linf: f64,
    /// Number of nodes with a finite numerical value.
    pub valid: usize,
    /// Total number of nodes.
    pub total: usize,
}

impl ErrorNorms {
    /// Return `true` if any node was excluded.
    pub fn has_invalid(&self) -> bool { self.valid < self.total }

    /// Return `true` if both norms are finite.
    pub fn is_finite(&self) -> bool {
        self.l2.is_finite() && self.linf.is_finite()
    }
}

/// Compute error norms for a single level `u` sampled at `x[i] = i dx` at time
/// `t`.
pub fn error_norms_slice<S>(u: &Arr1<S>, dx: f64, t: f64, alpha: f64)
    -> ErrorNorms
where S: nd::Data<Elem = f64>
{
    let (sum_sq, linf, valid)
        = u.iter().enumerate()
        .filter(|(_, uk)| uk.is_finite())
        .map(|(i, uk)| (uk - exact_solution(i as f64 * dx, t, alpha)).abs())
        .fold((0.0, 0.0, 0_usize), |(s, m, c): (f64, f64, usize), err| {
            (s + err * err, m.max(err), c + 1)
        });
    if valid == 0 {
        ErrorNorms { l2: f64::NAN, linf: f64::NAN, valid, total: u.len() }
    } else {
        let l2 = (sum_sq / valid as f64).sqrt();
        ErrorNorms { l2, linf, valid, total: u.len() }
    }
}

/// Compute error norms for the `n`-th level of a solution.
///
/// *Panics if `n` is out of bounds*.
pub fn error_norms_at(sol: &Solution, n: usize) -> ErrorNorms {
    error_norms_slice(&sol.level(n), sol.grid().dx(), sol.time().t(n), sol.alpha())
}

/// Compute error norms for the last level of a solution.
pub fn error_norms(sol: &Solution) -> ErrorNorms {
    error_norms_at(sol, sol.time().nt())
}

/// Compute the error norms of every level of a solution.
pub fn error_history(sol: &Solution) -> Vec<ErrorNorms> {
    (0..sol.time().num_levels())
        .map(|n| error_norms_at(sol, n))
        .collect()
}

/// Compute the absolute error at each node of the `n`-th level of a solution;
/// non-finite nodes give NaN.
///
/// *Panics if `n` is out of bounds*.
pub fn error_profile(sol: &Solution, n: usize) -> nd::Array1<f64> {
    let t = sol.time().t(n);
    let alpha = sol.alpha();
    let grid = sol.grid();
    sol.level(n).iter().enumerate()
        .map(|(i, uk)| {
            if uk.is_finite() {
                (uk - exact_solution(grid.x(i), t, alpha)).abs()
            } else {
                f64::NAN
            }
        })
        .collect()
}

/// Compute the maximum absolute difference between two levels on the same
/// grid, over nodes where both are finite; NaN if there are none.
///
/// Comparing runs that share a grid cancels the spatial error, leaving only
/// the temporal part.
///
/// *Panics if the arrays differ in length*.
pub fn max_difference<S, T>(a: &Arr1<S>, b: &Arr1<T>) -> f64
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    assert_eq!(a.len(), b.len(), "max_difference: length mismatch");
    a.iter().zip(b)
        .filter(|(ak, bk)| ak.is_finite() && bk.is_finite())
        .map(|(ak, bk)| (ak - bk).abs())
        .fold(f64::NAN, f64::max)
}

/// Estimate the observed order of convergence from the errors of two runs
/// whose step sizes differ by a factor `refinement > 1`.
///
/// ```
/// use heatspace::analysis::observed_order;
///
/// // halving the step quarters the error: second order
/// assert!((observed_order(4e-4, 1e-4, 2.0) - 2.0).abs() < 1e-12);
/// ```
pub fn observed_order(coarse: f64, fine: f64, refinement: f64) -> f64 {
    (coarse / fine).ln() / refinement.ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ analytic::exact_profile, grid::Grid };

    #[test]
    fn exact_level_has_zero_error() {
        let grid = Grid::new(0.1, 10);
        let u = exact_profile(&grid.nodes(), 0.3, 2.0);
        let norms = error_norms_slice(&u, 0.1, 0.3, 2.0);
        assert_eq!(norms.l2, 0.0);
        assert_eq!(norms.linf, 0.0);
        assert_eq!(norms.valid, 11);
        assert!(!norms.has_invalid());
    }

    #[test]
    fn norms_of_constant_offset() {
        let grid = Grid::new(0.25, 4);
        let u = exact_profile(&grid.nodes(), 0.0, 1.0) + 0.5;
        let norms = error_norms_slice(&u, 0.25, 0.0, 1.0);
        assert!((norms.l2 - 0.5).abs() < 1e-15);
        assert!((norms.linf - 0.5).abs() < 1e-15);
    }

    #[test]
    fn l2_averages_over_nodes() {
        // exact solution at t = 0 with dx = 1 vanishes at x = 0 and x = 1
        let u = nd::array![3.0, 4.0];
        let norms = error_norms_slice(&u, 1.0, 0.0, 1.0);
        assert!((norms.l2 - (12.5_f64).sqrt()).abs() < 1e-12);
        assert!((norms.linf - 4.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_nodes_are_skipped() {
        let u = nd::array![0.0, f64::NAN, 0.5, f64::INFINITY, f64::NEG_INFINITY];
        let norms = error_norms_slice(&u, 0.25, 0.0, 1.0);
        assert_eq!(norms.valid, 2);
        assert_eq!(norms.total, 5);
        assert!(norms.has_invalid());
        let err = (0.5 - (std::f64::consts::PI * 0.5).sin()).abs();
        assert!((norms.linf - err).abs() < 1e-15);
        assert!((norms.l2 - (err * err / 2.0).sqrt()).abs() < 1e-15);
    }

    #[test]
    fn all_invalid_gives_nan() {
        let u = nd::array![f64::NAN, f64::INFINITY, f64::NAN];
        let norms = error_norms_slice(&u, 0.5, 1.0, 1.0);
        assert!(norms.l2.is_nan());
        assert!(norms.linf.is_nan());
        assert_eq!(norms.valid, 0);
        assert!(!norms.is_finite());
    }

    #[test]
    fn max_difference_skips_invalid_nodes() {
        let a = nd::array![0.0, 1.0, f64::NAN, 2.0];
        let b = nd::array![0.5, 1.0, 3.0, -1.0];
        assert_eq!(max_difference(&a, &b), 3.0);
        let c = nd::array![f64::NAN, f64::INFINITY];
        let d = nd::array![0.0, 0.0];
        assert!(max_difference(&c, &d).is_nan());
    }

    #[test]
    fn observed_order_of_first_order_data() {
        assert!((observed_order(1e-2, 5e-3, 2.0) - 1.0).abs() < 1e-12);
    }
}
