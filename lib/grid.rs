//! Spatial grid, time axis, and the initial space-time field.
//!
//! In all 2D arrays, the first (or zero-th) axis indexes time and the second
//! indexes spatial nodes.

use ndarray as nd;
use crate::analytic::{ BOUNDARY_VALUE, initial_condition };

/// Uniform spatial grid over `[0, L]` with nodes `x[i] = i dx` for
/// `i ∊ {0, ..., nx}`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Grid {
    // node spacing
    dx: f64,
    // number of intervals; there are nx + 1 nodes
    nx: usize,
}

impl Grid {
    /// Create a new `Grid` with `nx` intervals of width `dx`.
    pub fn new(dx: f64, nx: usize) -> Self { Self { dx, nx } }

    /// Get the node spacing.
    pub fn dx(&self) -> f64 { self.dx }

    /// Get the number of intervals (one less than the number of nodes).
    pub fn nx(&self) -> usize { self.nx }

    /// Get the number of nodes.
    pub fn num_nodes(&self) -> usize { self.nx + 1 }

    /// Get the number of interior (non-boundary) nodes.
    pub fn num_interior(&self) -> usize { self.nx.saturating_sub(1) }

    /// Get the domain length `nx dx`.
    pub fn length(&self) -> f64 { self.nx as f64 * self.dx }

    /// Get the coordinate of the `i`-th node.
    pub fn x(&self, i: usize) -> f64 { i as f64 * self.dx }

    /// Get an array of all node coordinates.
    pub fn nodes(&self) -> nd::Array1<f64> {
        (0..=self.nx).map(|i| self.x(i)).collect()
    }
}

/// Uniform time axis with levels `t[n] = n dt` for `n ∊ {0, ..., nt}`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimeAxis {
    // step size
    dt: f64,
    // number of steps; there are nt + 1 levels
    nt: usize,
}

impl TimeAxis {
    /// Create a new `TimeAxis` with `nt` steps of size `dt`.
    pub fn new(dt: f64, nt: usize) -> Self { Self { dt, nt } }

    /// Get the step size.
    pub fn dt(&self) -> f64 { self.dt }

    /// Get the number of steps.
    pub fn nt(&self) -> usize { self.nt }

    /// Get the number of time levels, including `t = 0`.
    pub fn num_levels(&self) -> usize { self.nt + 1 }

    /// Get the time of the `n`-th level.
    pub fn t(&self, n: usize) -> f64 { n as f64 * self.dt }

    /// Get the time of the last level.
    pub fn t_final(&self) -> f64 { self.t(self.nt) }

    /// Get an array of all level times.
    pub fn levels(&self) -> nd::Array1<f64> {
        (0..=self.nt).map(|n| self.t(n)).collect()
    }
}

/// Set both boundary nodes of a single level to the boundary value.
pub(crate) fn clamp_boundaries<S>(u: &mut nd::ArrayBase<S, nd::Ix1>)
where S: nd::DataMut<Elem = f64>
{
    let n = u.len();
    u[0] = BOUNDARY_VALUE;
    u[n - 1] = BOUNDARY_VALUE;
}

/// Allocate the full `(nt + 1) × (nx + 1)` field, with the initial condition
/// applied to level 0 and the boundary value applied to the first and last
/// columns of every level.
pub fn initial_field(grid: &Grid, time: &TimeAxis) -> nd::Array2<f64> {
    let mut u: nd::Array2<f64>
        = nd::Array2::zeros((time.num_levels(), grid.num_nodes()));
    u.slice_mut(nd::s![0, ..]).iter_mut().enumerate()
        .for_each(|(i, uk)| { *uk = initial_condition(grid.x(i)); });
    u.axis_iter_mut(nd::Axis(0))
        .for_each(|mut level| clamp_boundaries(&mut level));
    u
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_layout() {
        let grid = Grid::new(0.1, 10);
        assert_eq!(grid.num_nodes(), 11);
        assert_eq!(grid.num_interior(), 9);
        assert_eq!(grid.x(0), 0.0);
        assert!((grid.x(10) - 1.0).abs() < 1e-15);
        assert!((grid.length() - 1.0).abs() < 1e-15);
        let x = grid.nodes();
        assert_eq!(x.len(), 11);
        assert_eq!(x[3], grid.x(3));
    }

    #[test]
    fn time_axis_layout() {
        let time = TimeAxis::new(0.25, 4);
        assert_eq!(time.num_levels(), 5);
        assert_eq!(time.t_final(), 1.0);
        assert_eq!(time.levels(), nd::array![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn initial_field_shape_and_values() {
        let grid = Grid::new(0.25, 4);
        let time = TimeAxis::new(0.01, 3);
        let u = initial_field(&grid, &time);
        assert_eq!(u.dim(), (4, 5));
        for i in 1..4 {
            assert_eq!(u[[0, i]], initial_condition(grid.x(i)));
        }
        assert!((u[[0, 2]] - 1.0).abs() < 1e-15);
        for level in u.axis_iter(nd::Axis(0)) {
            assert_eq!(level[0], 0.0);
            assert_eq!(level[4], 0.0);
        }
        assert!(u.slice(nd::s![1.., 1..4]).iter().all(|uk| *uk == 0.0));
    }

    #[test]
    fn zero_steps_is_single_level() {
        let u = initial_field(&Grid::new(0.5, 2), &TimeAxis::new(0.1, 0));
        assert_eq!(u.dim(), (1, 3));
        assert_eq!(u[[0, 1]], 1.0);
    }
}
