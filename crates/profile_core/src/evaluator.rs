//! Grid evaluation and finite-difference greeks.
//!
//! All three operations are stateless free functions: one pass over the spot
//! grid, one output element per input element, freshly allocated on every
//! call. Grid points are independent, so the pass is a parallel map; results
//! are collected back in grid order.
//!
//! The raw functions here do not validate the step width. A zero step yields
//! IEEE Inf/NaN in the outputs rather than an error; the validated entry
//! point is [`PlotSettings`](crate::settings::PlotSettings), whose builder
//! rejects degenerate steps before they reach this layer.

use num_traits::Float;
use rayon::prelude::*;

use crate::evaluable::EvalFn;

/// Evaluates the value component of `f` at every grid point.
///
/// `f` is invoked exactly once per index; the output has the same length and
/// index order as `grid`. Non-finite results propagate untouched.
///
/// # Examples
///
/// ```rust
/// use profile_core::evaluable::EvalFn;
/// use profile_core::evaluator::evaluate_values;
///
/// let square = |x: f64| x * x;
/// let y = evaluate_values(EvalFn::ValueOnly(&square), &[-2.0, 0.0, 2.0]);
/// assert_eq!(y, vec![4.0, 0.0, 4.0]);
/// ```
pub fn evaluate_values<T>(f: EvalFn<'_, T>, grid: &[T]) -> Vec<T>
where
    T: Float + Send + Sync,
{
    grid.par_iter().map(|&x| f.value(x)).collect()
}

/// Computes the first derivative of `f` at every grid point.
///
/// The effective step is `hard_coded_h` when supplied, else `h_fin_diff`.
///
/// For a [`ValueAndDelta`](EvalFn::ValueAndDelta) function the analytic
/// derivative is taken verbatim from a single call at `x` (no differencing,
/// no step dependence). For a [`ValueOnly`](EvalFn::ValueOnly) function the
/// one-sided forward difference `(f(x+h) - f(x)) / h` is used, which carries
/// an O(h) bias for functions with nonzero curvature.
pub fn compute_delta<T>(
    f: EvalFn<'_, T>,
    grid: &[T],
    h_fin_diff: T,
    hard_coded_h: Option<T>,
) -> Vec<T>
where
    T: Float + Send + Sync,
{
    let h = hard_coded_h.unwrap_or(h_fin_diff);
    match f {
        EvalFn::ValueAndDelta(_) => grid
            .par_iter()
            .map(|&x| f.value_and_delta(x).1)
            .collect(),
        EvalFn::ValueOnly(func) => grid
            .par_iter()
            .map(|&x| (func(x + h) - func(x)) / h)
            .collect(),
    }
}

/// Computes the second derivative of `f` at every grid point.
///
/// The effective step is resolved exactly as in [`compute_delta`].
///
/// For a [`ValueAndDelta`](EvalFn::ValueAndDelta) function gamma is the
/// central difference of the analytic delta, `(d(x+h) - d(x-h)) / 2h`, two
/// calls per index. For a [`ValueOnly`](EvalFn::ValueOnly) function it is the
/// three-point second difference `(f(x+h) - 2f(x) + f(x-h)) / h²`, three
/// calls per index.
pub fn compute_gamma<T>(
    f: EvalFn<'_, T>,
    grid: &[T],
    h_fin_diff: T,
    hard_coded_h: Option<T>,
) -> Vec<T>
where
    T: Float + Send + Sync,
{
    let h = hard_coded_h.unwrap_or(h_fin_diff);
    let two = T::one() + T::one();
    match f {
        EvalFn::ValueAndDelta(func) => grid
            .par_iter()
            .map(|&x| {
                let (_, delta_minus) = func(x - h);
                let (_, delta_plus) = func(x + h);
                (delta_plus - delta_minus) / (two * h)
            })
            .collect(),
        EvalFn::ValueOnly(func) => grid
            .par_iter()
            .map(|&x| (func(x + h) - two * func(x) + func(x - h)) / (h * h))
            .collect(),
    }
}
