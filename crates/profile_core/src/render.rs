//! Profile orchestration and chart figure model.
//!
//! [`run`] is the top-level entry point: it computes the arrays the selected
//! [`OutputStatistic`] requires and returns them as a [`ProfileReport`]. The
//! report converts into a [`ChartFigure`], a Chart.js-compatible line-chart
//! description that downstream surfaces serialise as JSON. Actual pixel
//! rendering is outside this crate; the figure model is the boundary.

use num_traits::Float;
use serde::Serialize;
use tracing::debug;

use crate::evaluable::EvalFn;
use crate::evaluator::{compute_delta, compute_gamma, evaluate_values};
use crate::settings::{OutputStatistic, PlotSettings};

/// Arrays produced by a profiling run.
///
/// Every present array has the same length and index order as the grid.
/// `delta` is present for the `Delta` and `Gamma` statistics, `gamma` only
/// for `Gamma`.
#[derive(Clone, Debug)]
pub struct ProfileReport<T> {
    /// The statistic this report was computed for.
    pub statistic: OutputStatistic,
    /// The spot grid.
    pub s0: Vec<T>,
    /// Function values at each grid point.
    pub value: Vec<T>,
    /// First derivative at each grid point, when requested.
    pub delta: Option<Vec<T>>,
    /// Second derivative at each grid point, when requested.
    pub gamma: Option<Vec<T>>,
}

/// A single panel of a figure: one line plot with axis labels and a title.
#[derive(Clone, Debug, Serialize)]
pub struct ChartPanel {
    /// Panel title.
    pub title: String,
    /// X-axis label.
    pub x_label: String,
    /// Y-axis label.
    pub y_label: String,
    /// X coordinates of the line.
    pub x: Vec<f64>,
    /// Y coordinates of the line.
    pub y: Vec<f64>,
}

/// A side-by-side multi-panel figure, serialisable to Chart.js-style JSON.
#[derive(Clone, Debug, Serialize)]
pub struct ChartFigure {
    /// Panels in left-to-right display order.
    pub panels: Vec<ChartPanel>,
}

impl ChartFigure {
    /// Serialises the figure to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Profiles `f` over the configured grid.
///
/// `PresentValue` computes values only; `Delta` adds the first derivative;
/// `Gamma` adds the second. The step width comes from the settings, which
/// guarantee it is positive and finite.
///
/// Panics raised by `f` propagate; no partial report is returned.
pub fn run<T>(f: EvalFn<'_, T>, settings: &PlotSettings<T>) -> ProfileReport<T>
where
    T: Float + Send + Sync,
{
    run_with_step_override(f, settings, None)
}

/// Like [`run`], but with an explicit step-width override.
///
/// When `hard_coded_h` is supplied it replaces the configured step width for
/// the delta and gamma computations; values are unaffected. The override is
/// taken as-is and bypasses the settings validation, so a degenerate step
/// produces NaN/Inf arrays just as the raw evaluator functions do.
pub fn run_with_step_override<T>(
    f: EvalFn<'_, T>,
    settings: &PlotSettings<T>,
    hard_coded_h: Option<T>,
) -> ProfileReport<T>
where
    T: Float + Send + Sync,
{
    let statistic = settings.output_statistic();
    let grid = settings.s0_grid();
    let h = settings.step_width();
    debug!(
        ?statistic,
        grid_points = grid.len(),
        analytic_delta = f.has_analytic_delta(),
        "profiling function over spot grid"
    );

    let value = evaluate_values(f, grid);
    let delta = match statistic {
        OutputStatistic::PresentValue => None,
        OutputStatistic::Delta | OutputStatistic::Gamma => {
            Some(compute_delta(f, grid, h, hard_coded_h))
        }
    };
    let gamma = match statistic {
        OutputStatistic::Gamma => Some(compute_gamma(f, grid, h, hard_coded_h)),
        _ => None,
    };

    ProfileReport {
        statistic,
        s0: grid.to_vec(),
        value,
        delta,
        gamma,
    }
}

impl<T: Float> ProfileReport<T> {
    /// Builds the figure for this report.
    ///
    /// One panel for `PresentValue`, two for `Delta`, three for `Gamma`,
    /// titled "Present value" / "Delta" / "Gamma" with x-axis label "x" and
    /// y-axis labels "Value" / "Delta" / "Gamma".
    pub fn to_figure(&self) -> ChartFigure {
        let x: Vec<f64> = self.s0.iter().map(|v| to_f64(*v)).collect();
        let line = |ys: &[T]| ys.iter().map(|v| to_f64(*v)).collect::<Vec<f64>>();

        let mut panels = vec![ChartPanel {
            title: "Present value".to_string(),
            x_label: "x".to_string(),
            y_label: "Value".to_string(),
            x: x.clone(),
            y: line(&self.value),
        }];
        if let Some(delta) = &self.delta {
            panels.push(ChartPanel {
                title: "Delta".to_string(),
                x_label: "x".to_string(),
                y_label: "Delta".to_string(),
                x: x.clone(),
                y: line(delta),
            });
        }
        if let Some(gamma) = &self.gamma {
            panels.push(ChartPanel {
                title: "Gamma".to_string(),
                x_label: "x".to_string(),
                y_label: "Gamma".to_string(),
                x,
                y: line(gamma),
            });
        }
        ChartFigure { panels }
    }
}

#[inline]
fn to_f64<T: Float>(v: T) -> f64 {
    // NaN already encodes "not representable"; reuse it for the (untypical)
    // case of a Float type whose values exceed f64 range.
    v.to_f64().unwrap_or(f64::NAN)
}
