//! Numerical properties of the grid evaluator.
//!
//! Exercises the documented finite-difference behaviour end to end: forward
//! bias of delta, second-order accuracy of gamma, the cancellation-driven
//! error blow-up as the step shrinks past the optimum, and exactness of the
//! analytic-derivative branch.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

use profile_core::evaluable::EvalFn;
use profile_core::evaluator::{compute_delta, compute_gamma, evaluate_values};

const GRID: [f64; 5] = [-2.0, -1.0, 0.0, 1.0, 2.0];

fn square(x: f64) -> f64 {
    x * x
}

fn square_with_delta(x: f64) -> (f64, f64) {
    (x * x, 2.0 * x)
}

#[test]
fn concrete_scenario_values() {
    let y = evaluate_values(EvalFn::ValueOnly(&square), &GRID);
    assert_eq!(y, vec![4.0, 1.0, 0.0, 1.0, 4.0]);

    // Pair variant yields identical values.
    let y = evaluate_values(EvalFn::ValueAndDelta(&square_with_delta), &GRID);
    assert_eq!(y, vec![4.0, 1.0, 0.0, 1.0, 4.0]);
}

#[test]
fn concrete_scenario_delta_forward_bias() {
    let h = 1e-4;
    let delta = compute_delta(EvalFn::ValueOnly(&square), &GRID, h, None);
    let expected = [-4.0 + h, -2.0 + h, h, 2.0 + h, 4.0 + h];
    for (d, e) in delta.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*d, *e, epsilon = 1e-8);
    }
}

#[test]
fn concrete_scenario_analytic_delta_is_exact() {
    let delta = compute_delta(EvalFn::ValueAndDelta(&square_with_delta), &GRID, 1e-4, None);
    assert_eq!(delta, vec![-4.0, -2.0, 0.0, 2.0, 4.0]);

    // And it is step-independent: a wildly different h changes nothing.
    let delta2 = compute_delta(EvalFn::ValueAndDelta(&square_with_delta), &GRID, 10.0, None);
    assert_eq!(delta, delta2);
}

#[test]
fn concrete_scenario_gamma() {
    let gamma = compute_gamma(EvalFn::ValueOnly(&square), &GRID, 1e-4, None);
    for g in gamma {
        assert_abs_diff_eq!(g, 2.0, epsilon = 1e-4);
    }
}

#[test]
fn delta_bias_shrinks_linearly_with_h() {
    // For f = x^2 the forward difference is 2x + h: the error IS h.
    let x = [1.0];
    for h in [1e-1, 1e-2, 1e-3] {
        let delta = compute_delta(EvalFn::ValueOnly(&square), &x, h, None);
        let bias = delta[0] - 2.0;
        assert_relative_eq!(bias, h, epsilon = 1e-6);
    }
}

#[test]
fn gamma_error_curve_is_u_shaped() {
    // Moderate steps: truncation is zero for a quadratic, rounding tiny.
    let grid = [0.5, 1.0, 2.0];
    let max_err = |h: f64| -> f64 {
        compute_gamma(EvalFn::ValueOnly(&square), &grid, h, None)
            .iter()
            .map(|g| (g - 2.0).abs())
            .fold(0.0, f64::max)
    };

    for h in [1e-2, 1e-3, 1e-4] {
        assert!(max_err(h) < 1e-4, "gamma error too large at h = {}", h);
    }

    // Far past the optimum, floating-point cancellation dominates and the
    // error grows instead of shrinking.
    assert!(max_err(1e-12) > max_err(1e-4));
    assert!(max_err(1e-12) > 1e-2);
}

#[test]
fn zero_step_is_not_an_error() {
    let delta = compute_delta(EvalFn::ValueOnly(&square), &GRID, 0.0, None);
    let gamma = compute_gamma(EvalFn::ValueOnly(&square), &GRID, 0.0, None);
    assert!(delta.iter().all(|d| d.is_nan()));
    assert!(gamma.iter().all(|g| g.is_nan()));

    // Analytic gamma with h = 0: (d(x) - d(x)) / 0 is also NaN.
    let gamma = compute_gamma(EvalFn::ValueAndDelta(&square_with_delta), &GRID, 0.0, None);
    assert!(gamma.iter().all(|g| g.is_nan()));
}

#[test]
fn hard_coded_step_overrides_in_both_operations() {
    let delta_a = compute_delta(EvalFn::ValueOnly(&square), &GRID, 1e-4, Some(1e-2));
    let delta_b = compute_delta(EvalFn::ValueOnly(&square), &GRID, 1e-2, None);
    assert_eq!(delta_a, delta_b);

    let gamma_a = compute_gamma(EvalFn::ValueOnly(&square), &GRID, 1e-4, Some(1e-2));
    let gamma_b = compute_gamma(EvalFn::ValueOnly(&square), &GRID, 1e-2, None);
    assert_eq!(gamma_a, gamma_b);
}

#[test]
fn non_finite_function_values_pass_through() {
    let reciprocal = |x: f64| 1.0 / x;
    let y = evaluate_values(EvalFn::ValueOnly(&reciprocal), &[-1.0, 0.0, 1.0]);
    assert_eq!(y[0], -1.0);
    assert!(y[1].is_infinite());
    assert_eq!(y[2], 1.0);
}

fn finite_grid_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1e6..1e6f64, 0..64)
}

proptest! {
    #[test]
    fn outputs_align_with_grid(grid in finite_grid_strategy(), h in 1e-8..1e-2f64) {
        let f = EvalFn::ValueOnly(&square);
        prop_assert_eq!(evaluate_values(f, &grid).len(), grid.len());
        prop_assert_eq!(compute_delta(f, &grid, h, None).len(), grid.len());
        prop_assert_eq!(compute_gamma(f, &grid, h, None).len(), grid.len());
    }

    #[test]
    fn values_equal_pointwise_application(grid in finite_grid_strategy()) {
        let y = evaluate_values(EvalFn::ValueOnly(&square), &grid);
        for (yi, xi) in y.iter().zip(grid.iter()) {
            prop_assert_eq!(*yi, xi * xi);
        }
    }

    #[test]
    fn analytic_delta_never_depends_on_step(
        grid in prop::collection::vec(-100.0..100.0f64, 1..16),
        h1 in 1e-8..1.0f64,
        h2 in 1e-8..1.0f64,
    ) {
        let f = EvalFn::ValueAndDelta(&square_with_delta);
        let a = compute_delta(f, &grid, h1, None);
        let b = compute_delta(f, &grid, h2, None);
        prop_assert_eq!(a, b);
    }
}
