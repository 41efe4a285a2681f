//! Brent's method root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Outcome of a successful root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root<T: Float> {
    /// Abscissa of the root.
    pub x: T,
    /// Number of iterations consumed (0 when an endpoint was already a root).
    pub iterations: usize,
}

/// Brent's method root finder.
///
/// Combines bisection, secant, and inverse quadratic interpolation for
/// robust root finding without requiring derivatives. Guaranteed to
/// converge for continuous functions with a valid bracket.
///
/// # Algorithm
///
/// Each iteration keeps a bracket `[b, c]` with `f(b)` and `f(c)` of
/// opposite sign, `b` being the best estimate so far:
/// - **Inverse quadratic interpolation** when three distinct points exist
/// - **Secant step** when only two are available
/// - **Bisection** whenever the interpolated step would leave the bracket
///   or fails to shrink it fast enough
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{BrentSolver, SolverConfig};
///
/// let solver = BrentSolver::new(SolverConfig::default());
///
/// // Solve x³ - x - 2 = 0 in bracket [1, 2]
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let root = solver.find_root(f, 1.0, 2.0).unwrap();
/// assert!((f(root)).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct BrentSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BrentSolver<T> {
    /// Create a new Brent solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Find a root of `f` in the bracket `[a, b]`, returning only the abscissa.
    ///
    /// See [`BrentSolver::solve`] for the error contract.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{BrentSolver, SolverConfig};
    ///
    /// let solver = BrentSolver::new(SolverConfig::default());
    /// let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
    /// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
    /// ```
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        self.solve(f, a, b).map(|root| root.x)
    }

    /// Find a root of `f` in the bracket `[a, b]`.
    ///
    /// The endpoints may be given in either order.
    ///
    /// # Returns
    ///
    /// * `Ok(Root)` - Root and the number of iterations used
    /// * `Err(SolverError::NoBracket)` - `f(a)` and `f(b)` have the same sign
    /// * `Err(SolverError::NumericalInstability)` - `f` returned NaN at an endpoint
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    pub fn solve<F>(&self, f: F, a: T, b: T) -> Result<Root<T>, SolverError>
    where
        F: Fn(T) -> T,
    {
        let zero = T::zero();
        let one = T::one();
        let two = one + one;
        let three = two + one;
        let half = one / two;
        let tol = self.config.tolerance;

        let mut a = a;
        let mut b = b;
        let mut fa = f(a);
        let mut fb = f(b);

        if fa.is_nan() || fb.is_nan() {
            return Err(SolverError::NumericalInstability(
                "objective is NaN at a bracket endpoint".to_string(),
            ));
        }
        if fa == zero {
            return Ok(Root { x: a, iterations: 0 });
        }
        if fb == zero {
            return Ok(Root { x: b, iterations: 0 });
        }
        if (fa > zero) == (fb > zero) {
            return Err(SolverError::NoBracket {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }

        let mut c = b;
        let mut fc = fb;
        let mut d = b - a;
        let mut e = d;

        for iteration in 1..=self.config.max_iterations {
            // Re-establish the bracket [b, c]
            if (fb > zero) == (fc > zero) {
                c = a;
                fc = fa;
                d = b - a;
                e = d;
            }

            // b must be the better estimate
            if fc.abs() < fb.abs() {
                a = b;
                b = c;
                c = a;
                fa = fb;
                fb = fc;
                fc = fa;
            }

            let tol1 = two * T::epsilon() * b.abs() + half * tol;
            let m = half * (c - b);

            if fb.abs() < tol || m.abs() <= tol1 {
                return Ok(Root {
                    x: b,
                    iterations: iteration,
                });
            }

            if e.abs() >= tol1 && fa.abs() > fb.abs() {
                let s = fb / fa;
                let (mut p, mut q) = if a == c {
                    // Secant
                    (two * m * s, one - s)
                } else {
                    // Inverse quadratic interpolation
                    let qa = fa / fc;
                    let r = fb / fc;
                    (
                        s * (two * m * qa * (qa - r) - (b - a) * (r - one)),
                        (qa - one) * (r - one) * (s - one),
                    )
                };

                if p > zero {
                    q = -q;
                }
                p = p.abs();

                let min1 = three * m * q - (tol1 * q).abs();
                let min2 = (e * q).abs();
                if two * p < min1.min(min2) {
                    e = d;
                    d = p / q;
                } else {
                    d = m;
                    e = d;
                }
            } else {
                d = m;
                e = d;
            }

            a = b;
            fa = fb;

            b = if d.abs() > tol1 {
                b + d
            } else if m > zero {
                b + tol1
            } else {
                b - tol1
            };
            fb = f(b);
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
