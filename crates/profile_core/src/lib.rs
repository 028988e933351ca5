//! # profile_core: Function Profiles and Finite-Difference Greeks
//!
//! ## Role
//!
//! profile_core turns a user-supplied scalar function into value, delta, and
//! gamma profiles over a spot grid, ready to be charted:
//! - Evaluation contract: [`EvalFn`] (`evaluable`)
//! - Grid evaluator: `evaluate_values`, `compute_delta`, `compute_gamma`
//!   (`evaluator`)
//! - Validated configuration: [`PlotSettings`], [`OutputStatistic`]
//!   (`settings`)
//! - Built-in evaluables: `Quadratic`, `BlackScholesCall` (`functions`)
//! - Figure model and orchestration: [`ProfileReport`], [`ChartFigure`]
//!   (`render`)
//!
//! ## Derivative conventions
//!
//! Delta is a **forward** finite difference `(f(x+h) - f(x)) / h` unless the
//! evaluable carries an analytic first derivative, in which case that
//! derivative is used verbatim. Gamma is the three-point central second
//! difference `(f(x+h) - 2f(x) + f(x-h)) / h²`, or the central difference of
//! the analytic delta when one is available. The step width is taken as-is:
//! choosing `h` appropriately for the function's scale is the caller's job.
//!
//! ## Usage
//!
//! ```rust
//! use profile_core::evaluable::EvalFn;
//! use profile_core::settings::{OutputStatistic, PlotSettings};
//! use profile_core::render::run;
//!
//! let square = |x: f64| x * x;
//! let f = EvalFn::ValueOnly(&square);
//!
//! let settings = PlotSettings::builder()
//!     .output_statistic(OutputStatistic::Gamma)
//!     .s0_grid(vec![-2.0, -1.0, 0.0, 1.0, 2.0])
//!     .step_width(1e-4)
//!     .build()
//!     .unwrap();
//!
//! let report = run(f, &settings);
//! let gamma = report.gamma.as_ref().unwrap();
//! assert!((gamma[0] - 2.0).abs() < 1e-4);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod evaluable;
pub mod evaluator;
pub mod functions;
pub mod render;
pub mod settings;

pub use evaluable::EvalFn;
pub use render::{run, run_with_step_override, ChartFigure, ChartPanel, ProfileReport};
pub use settings::{OutputStatistic, PlotSettings, SettingsError};
