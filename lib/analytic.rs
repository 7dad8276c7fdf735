//! The initial condition and the exact separable solution used to validate
//! every scheme.
//!
//! On `[0, 1]` with `u(0, t) = u(1, t) = 0` and `u(x, 0) = sin(πx)`, the heat
//! equation `u_t = α u_xx` has the solution
//! ```text
//! u(x, t) = exp(-π² α t) sin(πx)
//! ```

use std::f64::consts::PI;
use ndarray as nd;
use crate::Arr1;

/// Default diffusivity.
pub const DEF_ALPHA: f64 = 1.0;

/// Boundary value held at both ends of the domain.
pub const BOUNDARY_VALUE: f64 = 0.0;

/// Initial condition `u(x, 0) = sin(πx)`.
pub fn initial_condition(x: f64) -> f64 {
    (PI * x).sin()
}

/// Exact solution `u(x, t) = exp(-π² α t) sin(πx)`.
pub fn exact_solution(x: f64, t: f64, alpha: f64) -> f64 {
    (-PI * PI * alpha * t).exp() * initial_condition(x)
}

/// Evaluate the exact solution over an array of coordinates at a single time.
pub fn exact_profile<S>(x: &Arr1<S>, t: f64, alpha: f64) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    x.mapv(|xk| exact_solution(xk, t, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_to_initial_condition_at_zero() {
        for k in 0..=10 {
            let x = k as f64 / 10.0;
            assert_eq!(exact_solution(x, 0.0, 3.7), initial_condition(x));
        }
    }

    #[test]
    fn decays_with_diffusivity() {
        let slow = exact_solution(0.5, 0.1, 1.0);
        let fast = exact_solution(0.5, 0.1, 2.0);
        assert!(fast < slow);
        assert!((slow - (-PI * PI * 0.1).exp()).abs() < 1e-15);
    }

    #[test]
    fn zero_diffusivity_is_static() {
        assert_eq!(exact_solution(0.25, 10.0, 0.0), initial_condition(0.25));
    }

    #[test]
    fn profile_vanishes_near_ends() {
        let x = nd::Array1::linspace(0.0, 1.0, 11);
        let u = exact_profile(&x, 0.2, DEF_ALPHA);
        assert_eq!(u[0], 0.0);
        assert!(u[10].abs() < 1e-15);
        assert!(u[5] > u[4] && u[5] > u[6]);
    }
}
