//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! Note that numerical trouble (an unstable explicit run, a near-singular
//! system) is never reported here: it shows up as non-finite values in the
//! field, which [`analysis`][crate::analysis] excludes, and as
//! [`Diagnostic`][crate::diagnostics::Diagnostic]s.
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from the functions in [`tridiag`][crate::tridiag].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TridiagError {
    /// Returned when a system of size zero is given.
    #[error("tridiagonal systems must have at least one unknown")]
    Empty,

    /// [`LengthError`]
    #[error("coefficient length error: {0}")]
    Length(#[from] LengthError),
}

/// Returned when a simulation configuration is rejected before any work is
/// done.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Returned when a method name cannot be parsed.
    #[error("unknown method {0:?}; available methods: FTCS, BTCS, CN")]
    UnknownMethod(String),

    /// Returned when a step size, end time, or domain length is non-positive
    /// or not finite.
    #[error("{name} must be a positive, finite number; got {value}")]
    BadStep { name: &'static str, value: f64 },

    /// Returned when the diffusivity is negative or not finite.
    #[error("diffusivity must be a non-negative, finite number; got {0}")]
    BadAlpha(f64),

    /// Returned when the spatial grid would have fewer than one interior node.
    #[error("spatial grid must have at least 2 intervals (one interior node); got {0}")]
    TooFewNodes(usize),

    /// Returned when the time axis would have no steps.
    #[error("time axis must have at least one step; got {0}")]
    TooFewSteps(usize),

    /// Returned when a derived count is not finite or exceeds its ceiling.
    #[error("{name} must be finite and at most {max}; got {value}")]
    TooLarge { name: &'static str, value: f64, max: usize },
}

impl ConfigError {
    pub(crate) fn check_step(name: &'static str, value: f64)
        -> Result<(), Self>
    {
        (value.is_finite() && value > 0.0).then_some(())
            .ok_or(Self::BadStep { name, value })
    }

    pub(crate) fn check_alpha(alpha: f64) -> Result<(), Self> {
        (alpha.is_finite() && alpha >= 0.0).then_some(())
            .ok_or(Self::BadAlpha(alpha))
    }

    pub(crate) fn check_nodes(nx: usize) -> Result<(), Self> {
        (nx >= 2).then_some(()).ok_or(Self::TooFewNodes(nx))
    }

    pub(crate) fn check_steps(nt: usize) -> Result<(), Self> {
        (nt >= 1).then_some(()).ok_or(Self::TooFewSteps(nt))
    }

    // `value` is the count as computed in floating point, before any cast
    pub(crate) fn check_count(name: &'static str, value: f64, max: usize)
        -> Result<usize, Self>
    {
        (value.is_finite() && value <= max as f64).then_some(value as usize)
            .ok_or(Self::TooLarge { name, value, max })
    }
}

/// Umbrella error for operations that both run a simulation and write its
/// results somewhere.
#[derive(Debug, Error)]
pub enum HeatError {
    /// [`ConfigError`]
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// [`TridiagError`]
    #[error("tridiagonal solve error: {0}")]
    Tridiag(#[from] TridiagError),

    /// [`std::io::Error`]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// [`serde_json::Error`]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
