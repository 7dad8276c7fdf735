//! Advisory events produced by a run.
//!
//! Diagnostics never alter a computation; they are collected into the
//! returned [`Solution`][crate::solver::Solution] for the caller to log or
//! inspect.

use std::fmt;
use serde::{ Deserialize, Serialize };

/// Stability threshold on `r = α dt / dx²` for the explicit scheme.
pub const EXPLICIT_STABILITY_LIMIT: f64 = 0.5;

/// A single advisory event.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The explicit scheme was run with a stability ratio above
    /// [`EXPLICIT_STABILITY_LIMIT`]; the result is expected to diverge.
    UnstableExplicit {
        /// Stability ratio `α dt / dx²`.
        r: f64,
    },
}

impl Diagnostic {
    /// Return `true` if `self` is `UnstableExplicit`.
    pub fn is_unstable_explicit(&self) -> bool {
        matches!(self, Self::UnstableExplicit { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnstableExplicit { r } => write!(
                f,
                "FTCS may be unstable (r = {r:.4} > {EXPLICIT_STABILITY_LIMIT})",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_reports_ratio() {
        let diag = Diagnostic::UnstableExplicit { r: 0.75 };
        assert_eq!(diag.to_string(), "FTCS may be unstable (r = 0.7500 > 0.5)");
        assert!(diag.is_unstable_explicit());
    }

    #[test]
    fn serializes_with_tag() {
        let diag = Diagnostic::UnstableExplicit { r: 2.0 };
        let json = serde_json::to_string(&diag).unwrap();
        assert_eq!(json, r#"{"kind":"unstable_explicit","r":2.0}"#);
        let back: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, diag);
    }
}
