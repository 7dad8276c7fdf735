//! Direct solution of tridiagonal linear systems via the Thomas algorithm
//! (forward elimination followed by back substitution).
//!
//! For a system of size *m*,
//! ```text
//! | b[0] c[0]                          | | x[0]   |   | d[0]   |
//! | a[1] b[1] c[1]                     | | x[1]   |   | d[1]   |
//! |      a[2] b[2] c[2]                | | x[2]   | = | d[2]   |
//! |                 ...                | | ...    |   | ...    |
//! |                   a[m-1] b[m-1]    | | x[m-1] |   | d[m-1] |
//! ```
//! `a[0]` and `c[m - 1]` lie outside the matrix and are never read.
//!
//! The elimination is only well defined when every pivot is non-zero, which is
//! guaranteed for diagonally dominant matrices (`|b[i]| > |a[i]| + |c[i]|`).
//! No pivot check is performed: a zero pivot produces non-finite values in the
//! solution instead of an error.

use ndarray as nd;
use num_traits::Float;
use crate::{
    Arr1,
    error::{ LengthError, TridiagError },
};

pub type TriResult<T> = Result<T, TridiagError>;

// forward sweep + back substitution over pre-validated inputs
//
// `cp` and `dp` are scratch space of length `m`; the solution is written to `x`
fn sweep<A>(
    a: &[A],
    b: &[A],
    c: &[A],
    d: &[A],
    cp: &mut [A],
    dp: &mut [A],
    x: &mut [A],
)
where A: Float
{
    let m = d.len();
    cp[0] = if m > 1 { c[0] / b[0] } else { A::zero() };
    dp[0] = d[0] / b[0];
    let mut denom: A;
    for i in 1..m {
        denom = b[i] - a[i] * cp[i - 1];
        cp[i] = if i < m - 1 { c[i] / denom } else { A::zero() };
        dp[i] = (d[i] - a[i] * dp[i - 1]) / denom;
    }
    x[m - 1] = dp[m - 1];
    for i in (0..m - 1).rev() {
        x[i] = dp[i] - cp[i] * x[i + 1];
    }
}

/// Solve a single tridiagonal system `A x = d`.
///
/// `a` is the sub-diagonal, `b` the main diagonal, and `c` the super-diagonal;
/// all four arrays must have the same length.
///
/// See [`Tridiagonal`] for repeated solves against the same matrix.
pub fn thomas<S, T, U, V, A>(
    a: &Arr1<S>,
    b: &Arr1<T>,
    c: &Arr1<U>,
    d: &Arr1<V>,
) -> TriResult<nd::Array1<A>>
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    U: nd::Data<Elem = A>,
    V: nd::Data<Elem = A>,
    A: Float,
{
    LengthError::check(a, d)?;
    LengthError::check(b, d)?;
    LengthError::check(c, d)?;
    let m = d.len();
    if m == 0 { return Err(TridiagError::Empty); }
    let a: Vec<A> = a.to_vec();
    let b: Vec<A> = b.to_vec();
    let c: Vec<A> = c.to_vec();
    let d: Vec<A> = d.to_vec();
    let mut cp: Vec<A> = vec![A::zero(); m];
    let mut dp: Vec<A> = vec![A::zero(); m];
    let mut x: Vec<A> = vec![A::zero(); m];
    sweep(&a, &b, &c, &d, &mut cp, &mut dp, &mut x);
    Ok(nd::Array1::from_vec(x))
}

/// A fixed tridiagonal matrix, validated once and solved against any number of
/// right-hand sides.
///
/// Scratch space for the forward sweep is owned by the struct, so repeated
/// calls to [`Self::solve_into`] perform no allocation.
#[derive(Clone, Debug)]
pub struct Tridiagonal<A> {
    // sub-diagonal; a[0] = 0
    a: Vec<A>,
    // main diagonal
    b: Vec<A>,
    // super-diagonal; c[m - 1] = 0
    c: Vec<A>,
    // modified super-diagonal
    cp: Vec<A>,
    // modified right-hand side
    dp: Vec<A>,
}

impl<A: Float> Tridiagonal<A> {
    /// Create a new matrix from its three diagonals.
    ///
    /// The out-of-matrix entries `a[0]` and `c[m - 1]` are zeroed.
    pub fn new(mut a: Vec<A>, b: Vec<A>, mut c: Vec<A>) -> TriResult<Self> {
        let m = b.len();
        if a.len() != m { return Err(LengthError(a.len(), m).into()); }
        if c.len() != m { return Err(LengthError(c.len(), m).into()); }
        if m == 0 { return Err(TridiagError::Empty); }
        a[0] = A::zero();
        c[m - 1] = A::zero();
        let cp = vec![A::zero(); m];
        let dp = vec![A::zero(); m];
        Ok(Self { a, b, c, cp, dp })
    }

    /// Create a new `m`×`m` matrix with constant values along each diagonal.
    pub fn constant(m: usize, sub: A, diag: A, sup: A) -> TriResult<Self> {
        Self::new(vec![sub; m], vec![diag; m], vec![sup; m])
    }

    /// Get the number of unknowns.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.b.len() }

    /// Get the sub-diagonal.
    pub fn sub(&self) -> &[A] { &self.a }

    /// Get the main diagonal.
    pub fn diag(&self) -> &[A] { &self.b }

    /// Get the super-diagonal.
    pub fn sup(&self) -> &[A] { &self.c }

    /// Return `true` if every row is strictly diagonally dominant.
    pub fn is_diagonally_dominant(&self) -> bool {
        self.a.iter().zip(&self.b).zip(&self.c)
            .all(|((ai, bi), ci)| bi.abs() > ai.abs() + ci.abs())
    }

    /// Solve `A x = d`, writing the solution into `x`.
    pub fn solve_into(&mut self, d: &[A], x: &mut [A]) -> TriResult<()> {
        let m = self.len();
        if d.len() != m { return Err(LengthError(d.len(), m).into()); }
        if x.len() != m { return Err(LengthError(x.len(), m).into()); }
        sweep(&self.a, &self.b, &self.c, d, &mut self.cp, &mut self.dp, x);
        Ok(())
    }

    /// Solve `A x = d`, returning a newly allocated solution.
    pub fn solve<S>(&mut self, d: &Arr1<S>) -> TriResult<nd::Array1<A>>
    where S: nd::Data<Elem = A>
    {
        let d: Vec<A> = d.to_vec();
        let mut x: Vec<A> = vec![A::zero(); self.len()];
        self.solve_into(&d, &mut x)?;
        Ok(nd::Array1::from_vec(x))
    }

    /// Compute the matrix-vector product `A x`.
    pub fn apply<S>(&self, x: &Arr1<S>) -> TriResult<nd::Array1<A>>
    where S: nd::Data<Elem = A>
    {
        let m = self.len();
        if x.len() != m { return Err(LengthError(x.len(), m).into()); }
        let y: nd::Array1<A>
            = (0..m)
            .map(|i| {
                let mut yi = self.b[i] * x[i];
                if i > 0 { yi = yi + self.a[i] * x[i - 1]; }
                if i < m - 1 { yi = yi + self.c[i] * x[i + 1]; }
                yi
            })
            .collect();
        Ok(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn residual(sys: &Tridiagonal<f64>, x: &nd::Array1<f64>, d: &[f64]) -> f64 {
        let ax = sys.apply(x).unwrap();
        ax.iter().zip(d)
            .map(|(axi, di)| (axi - di).abs())
            .fold(0.0, f64::max)
    }

    #[test]
    fn identity_returns_rhs() {
        let mut sys = Tridiagonal::constant(5, 0.0, 1.0, 0.0).unwrap();
        let d = nd::array![1.0, 2.0, 3.0, 4.0, 5.0];
        let x = sys.solve(&d).unwrap();
        assert_eq!(x, d);
    }

    #[test]
    fn laplacian_matches_known_solution() {
        // [2 -1 0 0; -1 2 -1 0; 0 -1 2 -1; 0 0 -1 2] x = [1 0 0 1] => x = 1
        let a = nd::array![0.0, -1.0, -1.0, -1.0];
        let b = nd::array![2.0, 2.0, 2.0, 2.0];
        let c = nd::array![-1.0, -1.0, -1.0, 0.0];
        let d = nd::array![1.0, 0.0, 0.0, 1.0];
        let x = thomas(&a, &b, &c, &d).unwrap();
        for xi in x.iter() {
            assert!((xi - 1.0).abs() < 1e-12, "{x}");
        }
    }

    #[test]
    fn single_unknown() {
        let x = thomas(
            &nd::array![3.0], &nd::array![4.0], &nd::array![5.0],
            &nd::array![2.0],
        ).unwrap();
        assert_eq!(x, nd::array![0.5]);
    }

    #[test]
    fn out_of_matrix_entries_are_ignored() {
        let mut sys = Tridiagonal::new(
            vec![100.0, -1.0, -1.0],
            vec![4.0, 4.0, 4.0],
            vec![-1.0, -1.0, 100.0],
        ).unwrap();
        assert_eq!(sys.sub()[0], 0.0);
        assert_eq!(sys.sup()[2], 0.0);
        let d = [1.0, 2.0, 3.0];
        let x = sys.solve(&nd::arr1(&d)).unwrap();
        assert!(residual(&sys, &x, &d) < 1e-12);
    }

    #[test]
    fn rejects_bad_lengths() {
        let err = thomas(
            &nd::array![0.0, 1.0], &nd::array![1.0, 1.0, 1.0],
            &nd::array![0.0, 0.0, 0.0], &nd::array![1.0, 1.0, 1.0],
        ).unwrap_err();
        assert_eq!(err, TridiagError::Length(LengthError(2, 3)));

        let mut sys = Tridiagonal::constant(3, -1.0, 4.0, -1.0).unwrap();
        assert!(sys.solve(&nd::array![1.0, 2.0]).is_err());
    }

    #[test]
    fn rejects_empty() {
        let empty: nd::Array1<f64> = nd::Array1::zeros(0);
        assert_eq!(
            thomas(&empty, &empty, &empty, &empty).unwrap_err(),
            TridiagError::Empty,
        );
        assert_eq!(
            Tridiagonal::<f64>::constant(0, 0.0, 1.0, 0.0).unwrap_err(),
            TridiagError::Empty,
        );
    }

    #[test]
    fn zero_pivot_yields_non_finite() {
        let x = thomas(
            &nd::array![0.0, 1.0], &nd::array![0.0, 1.0],
            &nd::array![1.0, 0.0], &nd::array![1.0, 1.0],
        ).unwrap();
        assert!(x.iter().any(|xi| !xi.is_finite()));
    }

    #[test]
    fn works_in_single_precision() {
        let mut sys = Tridiagonal::<f32>::constant(4, -1.0, 3.0, -1.0).unwrap();
        let d = [1.0_f32, 1.0, 1.0, 1.0];
        let mut x = [0.0_f32; 4];
        sys.solve_into(&d, &mut x).unwrap();
        let ax = sys.apply(&nd::arr1(&x)).unwrap();
        for (axi, di) in ax.iter().zip(&d) {
            assert!((axi - di).abs() < 1e-5);
        }
    }

    fn dominant_system() -> impl Strategy<Value = (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>)> {
        (1_usize..64).prop_flat_map(|m| {
            (
                prop::collection::vec(-1.0_f64..1.0, m),
                prop::collection::vec(0.1_f64..10.0, m),
                prop::collection::vec(-1.0_f64..1.0, m),
                prop::collection::vec(-100.0_f64..100.0, m),
                prop::collection::vec(prop::bool::ANY, m),
            )
        })
        .prop_map(|(a, margin, c, d, neg)| {
            let b: Vec<f64>
                = a.iter().zip(&c).zip(&margin).zip(&neg)
                .map(|(((ai, ci), mi), ni)| {
                    let bi = ai.abs() + ci.abs() + mi;
                    if *ni { -bi } else { bi }
                })
                .collect();
            (a, b, c, d)
        })
    }

    proptest! {
        #[test]
        fn residual_is_small_for_dominant_systems(
            (a, b, c, d) in dominant_system()
        ) {
            let mut sys = Tridiagonal::new(a, b, c).unwrap();
            prop_assert!(sys.is_diagonally_dominant());
            let x = sys.solve(&nd::arr1(&d)).unwrap();
            prop_assert!(residual(&sys, &x, &d) <= 1e-9);
        }

        #[test]
        fn free_function_agrees_with_struct(
            (a, b, c, d) in dominant_system()
        ) {
            let x_free = thomas(
                &nd::arr1(&a), &nd::arr1(&b), &nd::arr1(&c), &nd::arr1(&d),
            ).unwrap();
            let mut sys = Tridiagonal::new(a, b, c).unwrap();
            let x_sys = sys.solve(&nd::arr1(&d)).unwrap();
            prop_assert_eq!(x_free, x_sys);
        }
    }
}
