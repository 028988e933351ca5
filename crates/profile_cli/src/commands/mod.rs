//! CLI command implementations
//!
//! Each submodule implements a specific CLI command; shared argument
//! plumbing (grid construction, function selection, report computation)
//! lives here.

pub mod chart;
pub mod profile;

use profile_core::evaluable::EvalFn;
use profile_core::functions::{BlackScholesCall, Quadratic};
use profile_core::render::{run_with_step_override, ProfileReport};
use profile_core::settings::PlotSettings;

use crate::{CliError, CommonArgs, FunctionKind, Result};

/// Builds the uniform spot grid from the command-line bounds.
pub(crate) fn build_grid(args: &CommonArgs) -> Result<Vec<f64>> {
    if args.grid_points == 0 {
        return Err(CliError::InvalidArgument(
            "--grid-points must be at least 1".to_string(),
        ));
    }
    if args.grid_min > args.grid_max {
        return Err(CliError::InvalidArgument(format!(
            "--grid-min ({}) must not exceed --grid-max ({})",
            args.grid_min, args.grid_max
        )));
    }
    if args.grid_points == 1 {
        return Ok(vec![args.grid_min]);
    }
    let n = args.grid_points;
    let step = (args.grid_max - args.grid_min) / (n - 1) as f64;
    Ok((0..n).map(|i| args.grid_min + step * i as f64).collect())
}

/// Validates the settings and computes the report for the selected function.
pub(crate) fn compute_report(args: &CommonArgs) -> Result<ProfileReport<f64>> {
    let settings = PlotSettings::builder()
        .output_statistic(args.statistic.into())
        .s0_grid(build_grid(args)?)
        .step_width(args.step_width)
        .build()?;

    with_eval_fn(args, |f| {
        run_with_step_override(f, &settings, args.hard_coded_h)
    })
}

/// Dispatches to the selected built-in function, constructing the declared
/// [`EvalFn`] variant once for the whole run.
fn with_eval_fn<R>(args: &CommonArgs, k: impl FnOnce(EvalFn<'_, f64>) -> R) -> Result<R> {
    match args.function {
        FunctionKind::Quadratic => {
            let q = Quadratic;
            if args.analytic {
                let f = move |x: f64| q.value_and_delta(x);
                Ok(k(EvalFn::ValueAndDelta(&f)))
            } else {
                let f = move |x: f64| q.value(x);
                Ok(k(EvalFn::ValueOnly(&f)))
            }
        }
        FunctionKind::BsCall => {
            let call = BlackScholesCall::new(args.strike, args.rate, args.vol, args.expiry)?;
            if args.analytic {
                let f = move |x: f64| call.value_and_delta(x);
                Ok(k(EvalFn::ValueAndDelta(&f)))
            } else {
                let f = move |x: f64| call.value(x);
                Ok(k(EvalFn::ValueOnly(&f)))
            }
        }
    }
}
