//! Finite-difference time-stepping schemes for `u_t = α u_xx` with Dirichlet
//! boundaries.
//!
//! With `r = α dt / dx²`, each scheme advances one time level at a time:
//!
//! - **FTCS** (explicit, first order in time, stable only for `r ≤ 1/2`):
//! ```text
//! u[n+1][i] = u[n][i] + r (u[n][i+1] - 2 u[n][i] + u[n][i-1])
//! ```
//! - **BTCS** (fully implicit, first order in time, unconditionally stable):
//! ```text
//! -r u[n+1][i-1] + (1 + 2r) u[n+1][i] - r u[n+1][i+1] = u[n][i]
//! ```
//! - **Crank-Nicolson** (second order in time, unconditionally stable):
//! ```text
//! -r/2 u[n+1][i-1] + (1 + r) u[n+1][i] - r/2 u[n+1][i+1]
//!     = r/2 u[n][i-1] + (1 - r) u[n][i] + r/2 u[n][i+1]
//! ```
//!
//! The implicit schemes solve for the `nx - 1` interior nodes of each new
//! level with a [`Tridiagonal`] matrix that depends only on `r` and is
//! therefore built once per run.

use std::{ fmt, str::FromStr };
use ndarray as nd;
use serde::{ Deserialize, Serialize };
use crate::{
    Arr1,
    diagnostics::{ Diagnostic, EXPLICIT_STABILITY_LIMIT },
    error::ConfigError,
    grid::clamp_boundaries,
    tridiag::{ Tridiagonal, TriResult },
};

/// Compute the stability ratio `r = α dt / dx²`.
pub fn stability_ratio(alpha: f64, dt: f64, dx: f64) -> f64 {
    alpha * dt / dx.powi(2)
}

/// Time-stepping scheme selector.
///
/// Serialized as its short code; deserialized through [`FromStr`], so every
/// spelling accepted on the command line is also accepted in configuration
/// files.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Method {
    /// Forward-time, central-space explicit scheme.
    #[serde(rename = "FTCS")]
    Explicit,
    /// Backward-time, central-space fully implicit scheme.
    #[serde(rename = "BTCS")]
    FullyImplicit,
    /// Crank-Nicolson semi-implicit scheme.
    #[serde(rename = "CN")]
    CrankNicolson,
}

impl Method {
    /// All methods, in order of increasing implicitness.
    pub const ALL: [Self; 3]
        = [Self::Explicit, Self::FullyImplicit, Self::CrankNicolson];

    /// Return `true` if `self` is `Explicit`.
    pub fn is_explicit(&self) -> bool { matches!(self, Self::Explicit) }

    /// Return `true` if `self` is `FullyImplicit`.
    pub fn is_fully_implicit(&self) -> bool {
        matches!(self, Self::FullyImplicit)
    }

    /// Return `true` if `self` is `CrankNicolson`.
    pub fn is_crank_nicolson(&self) -> bool {
        matches!(self, Self::CrankNicolson)
    }

    /// Short code used on the command line and in serialized output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Explicit => "FTCS",
            Self::FullyImplicit => "BTCS",
            Self::CrankNicolson => "CN",
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Explicit => "explicit (FTCS)",
            Self::FullyImplicit => "fully implicit (BTCS)",
            Self::CrankNicolson => "Crank-Nicolson",
        }
    }

    /// Formal order of accuracy in time.
    pub fn order_in_time(&self) -> u32 {
        match self {
            Self::Explicit | Self::FullyImplicit => 1,
            Self::CrankNicolson => 2,
        }
    }

    /// Return `true` if the scheme is stable for every `r ≥ 0`.
    pub fn is_unconditionally_stable(&self) -> bool { !self.is_explicit() }

    /// Return the diagnostic warranted by running this scheme at stability
    /// ratio `r`, if any.
    pub fn diagnose(&self, r: f64) -> Option<Diagnostic> {
        (self.is_explicit() && r > EXPLICIT_STABILITY_LIMIT)
            .then_some(Diagnostic::UnstableExplicit { r })
    }

    /// Build the tridiagonal matrix for `m` interior unknowns at stability
    /// ratio `r`, or `None` for the explicit scheme.
    pub fn coefficients(&self, r: f64, m: usize)
        -> TriResult<Option<Tridiagonal<f64>>>
    {
        match self {
            Self::Explicit => Ok(None),
            Self::FullyImplicit
                => Tridiagonal::constant(m, -r, 1.0 + 2.0 * r, -r).map(Some),
            Self::CrankNicolson
                => Tridiagonal::constant(m, -r / 2.0, 1.0 + r, -r / 2.0)
                    .map(Some),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Method {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ftcs" | "explicit" => Ok(Self::Explicit),
            "btcs" | "implicit" | "fully-implicit" | "fully_implicit"
                => Ok(Self::FullyImplicit),
            "cn" | "crank-nicolson" | "crank_nicolson" | "cranknicolson"
                => Ok(Self::CrankNicolson),
            _ => Err(ConfigError::UnknownMethod(s.to_string())),
        }
    }
}

impl TryFrom<String> for Method {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

/// Per-run state for a single scheme: the stability ratio, the implicit
/// matrix (if any), and right-hand side/solution buffers reused across steps.
#[derive(Clone, Debug)]
pub struct Stepper {
    method: Method,
    r: f64,
    // number of intervals in the spatial grid
    nx: usize,
    system: Option<Tridiagonal<f64>>,
    rhs: Vec<f64>,
    sol: Vec<f64>,
}

impl Stepper {
    /// Create a new `Stepper` for a grid of `nx` intervals.
    ///
    /// *Returns an error for implicit methods if `nx < 2`*.
    pub fn new(method: Method, r: f64, nx: usize) -> TriResult<Self> {
        let m = nx.saturating_sub(1);
        let system = method.coefficients(r, m)?;
        let (rhs, sol)
            = if system.is_some() {
                (vec![0.0; m], vec![0.0; m])
            } else {
                (Vec::new(), Vec::new())
            };
        Ok(Self { method, r, nx, system, rhs, sol })
    }

    /// Get the method.
    pub fn method(&self) -> Method { self.method }

    /// Get the stability ratio.
    pub fn r(&self) -> f64 { self.r }

    /// Compute level `next` from level `prev`.
    ///
    /// Boundary values of `next` are held at the boundary value both before
    /// and after the interior update.
    ///
    /// *Panics if either level does not have `nx + 1` nodes*.
    pub fn step<S, T>(&mut self, prev: &Arr1<S>, next: &mut Arr1<T>)
        -> TriResult<()>
    where
        S: nd::Data<Elem = f64>,
        T: nd::DataMut<Elem = f64>,
    {
        assert_eq!(prev.len(), self.nx + 1);
        assert_eq!(next.len(), self.nx + 1);
        clamp_boundaries(next);
        let r = self.r;
        let nx = self.nx;
        match (self.method, self.system.as_mut()) {
            (Method::Explicit, _) | (_, None) => {
                let stencil
                    = prev.iter()
                    .zip(prev.iter().skip(1))
                    .zip(prev.iter().skip(2));
                next.iter_mut().skip(1).take(nx.saturating_sub(1)).zip(stencil)
                    .for_each(|(uk, ((ukm1, uk0), ukp1))| {
                        *uk = uk0 + r * (ukp1 - 2.0 * uk0 + ukm1);
                    });
            },
            (Method::FullyImplicit, Some(system)) => {
                let m = self.rhs.len();
                self.rhs.iter_mut().zip(prev.iter().skip(1))
                    .for_each(|(dk, uk)| { *dk = *uk; });
                self.rhs[0] += r * next[0];
                self.rhs[m - 1] += r * next[nx];
                system.solve_into(&self.rhs, &mut self.sol)?;
                next.iter_mut().skip(1).zip(&self.sol)
                    .for_each(|(uk, xk)| { *uk = *xk; });
            },
            (Method::CrankNicolson, Some(system)) => {
                let m = self.rhs.len();
                let stencil
                    = prev.iter()
                    .zip(prev.iter().skip(1))
                    .zip(prev.iter().skip(2));
                self.rhs.iter_mut().zip(stencil)
                    .for_each(|(dk, ((ukm1, uk0), ukp1))| {
                        *dk = (r / 2.0) * ukm1
                            + (1.0 - r) * uk0
                            + (r / 2.0) * ukp1;
                    });
                self.rhs[0] += (r / 2.0) * next[0];
                self.rhs[m - 1] += (r / 2.0) * next[nx];
                system.solve_into(&self.rhs, &mut self.sol)?;
                next.iter_mut().skip(1).zip(&self.sol)
                    .for_each(|(uk, xk)| { *uk = *xk; });
            },
        }
        clamp_boundaries(next);
        Ok(())
    }
}
