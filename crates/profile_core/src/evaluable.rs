//! Evaluation contract for profiled functions.
//!
//! The original formulation of this tool let a callable return either a bare
//! value or a `(value, derivative)` pair and probed the shape of every result
//! at runtime. Here the shape is a declared, tagged contract: callers pick the
//! [`EvalFn`] variant once, and the evaluator branches on the variant rather
//! than on individual results. A function cannot silently switch shape
//! between grid points.

use num_traits::Float;

/// A scalar function profiled over a spot grid.
///
/// The evaluator borrows the callable read-only and never mutates it. `Sync`
/// is required because grid points are evaluated in parallel; both variants
/// must therefore be safe to invoke from multiple threads (pure functions
/// trivially are).
///
/// # Variants
///
/// * `ValueOnly` - the function yields a value; delta and gamma are computed
///   by finite differences.
/// * `ValueAndDelta` - each call also yields the analytic first derivative,
///   which the evaluator uses instead of differencing.
///
/// # Examples
///
/// ```rust
/// use profile_core::evaluable::EvalFn;
///
/// let square = |x: f64| x * x;
/// let f = EvalFn::ValueOnly(&square);
/// assert_eq!(f.value(3.0), 9.0);
///
/// let square_with_delta = |x: f64| (x * x, 2.0 * x);
/// let g = EvalFn::ValueAndDelta(&square_with_delta);
/// assert_eq!(g.value(3.0), 9.0);
/// assert!(g.has_analytic_delta());
/// ```
pub enum EvalFn<'a, T> {
    /// Value only; derivatives come from finite differences.
    ValueOnly(&'a (dyn Fn(T) -> T + Sync)),
    /// Each call yields `(value, analytic first derivative)`.
    ValueAndDelta(&'a (dyn Fn(T) -> (T, T) + Sync)),
}

impl<T> Clone for EvalFn<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EvalFn<'_, T> {}

impl<T: Float> EvalFn<'_, T> {
    /// Evaluates the value component at `x`.
    ///
    /// In the `ValueAndDelta` variant the derivative component is discarded.
    /// Non-finite results pass through untouched.
    #[inline]
    pub fn value(&self, x: T) -> T {
        match self {
            EvalFn::ValueOnly(f) => f(x),
            EvalFn::ValueAndDelta(f) => f(x).0,
        }
    }

    /// Evaluates both components at `x`.
    ///
    /// Only meaningful for the `ValueAndDelta` variant; callers must check
    /// [`has_analytic_delta`](Self::has_analytic_delta) first.
    ///
    /// # Panics
    ///
    /// Panics if called on a `ValueOnly` function.
    #[inline]
    pub fn value_and_delta(&self, x: T) -> (T, T) {
        match self {
            EvalFn::ValueOnly(_) => {
                panic!("value_and_delta called on a ValueOnly function")
            }
            EvalFn::ValueAndDelta(f) => f(x),
        }
    }

    /// Whether this function carries an analytic first derivative.
    #[inline]
    pub fn has_analytic_delta(&self) -> bool {
        matches!(self, EvalFn::ValueAndDelta(_))
    }
}

impl<T> std::fmt::Debug for EvalFn<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalFn::ValueOnly(_) => f.write_str("EvalFn::ValueOnly(..)"),
            EvalFn::ValueAndDelta(_) => f.write_str("EvalFn::ValueAndDelta(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_only_returns_value() {
        let cube = |x: f64| x * x * x;
        let f = EvalFn::ValueOnly(&cube);
        assert_eq!(f.value(2.0), 8.0);
        assert!(!f.has_analytic_delta());
    }

    #[test]
    fn pair_variant_discards_delta_in_value() {
        let g = |x: f64| (x * x, 2.0 * x);
        let f = EvalFn::ValueAndDelta(&g);
        assert_eq!(f.value(3.0), 9.0);
        assert_eq!(f.value_and_delta(3.0), (9.0, 6.0));
    }

    #[test]
    fn non_finite_values_pass_through() {
        let f = |x: f64| 1.0 / x;
        let f = EvalFn::ValueOnly(&f);
        assert!(f.value(0.0).is_infinite());

        let g = |_: f64| f64::NAN;
        let g = EvalFn::ValueOnly(&g);
        assert!(g.value(1.0).is_nan());
    }

    #[test]
    #[should_panic(expected = "ValueOnly")]
    fn value_and_delta_panics_on_value_only() {
        let square = |x: f64| x * x;
        let f = EvalFn::ValueOnly(&square);
        let _ = f.value_and_delta(1.0);
    }
}
