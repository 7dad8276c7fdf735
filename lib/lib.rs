//! Provides finite-difference solvers for the one-dimensional heat (diffusion)
//! equation
//! ```text
//! ∂u       ∂²u
//! -- = α ---
//! ∂t       ∂x²
//! ```
//! on a bounded interval with fixed (Dirichlet) boundary values, along with
//! tools to measure their accuracy against the exact solution for the initial
//! condition `u(x, 0) = sin(πx)`.
//!
//! Provides implementations for the following numerical routines:
//! - Time stepping:
//!     - Forward-time central-space (FTCS, explicit)
//!     - Backward-time central-space (BTCS, fully implicit)
//!     - Crank-Nicolson
//! - Linear algebra:
//!     - Thomas algorithm for tridiagonal systems
//! - Analysis:
//!     - L2 and L∞ error norms (robust to diverged nodes)
//!     - Observed order of convergence
//!
//! ```
//! use heatspace::{ analysis, config::SimConfig, scheme::Method, solver };
//!
//! let config = SimConfig::new(Method::CrankNicolson);
//! let sol = solver::simulate(&config).unwrap();
//! let norms = analysis::error_norms(&sol);
//! assert!(norms.linf < 1e-3);
//! ```

pub mod error;
pub mod analytic;
pub mod tridiag;
pub mod grid;
pub mod diagnostics;
pub mod scheme;
pub mod config;
pub mod solver;
pub mod analysis;
pub mod export;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
