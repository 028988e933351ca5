//! Plot configuration.
//!
//! Provides [`PlotSettings`] for configuring the spot grid, the
//! finite-difference step width, and the statistic to profile, and
//! [`OutputStatistic`] for selecting which outputs are produced.
//!
//! Settings are immutable once built. The builder validates everything the
//! evaluator itself deliberately does not: the grid must be non-empty and
//! finite, the step width finite and strictly positive.

use num_traits::Float;
use thiserror::Error;

/// Which statistic to compute and chart.
///
/// Each statistic includes the ones below it on the chart: `Delta` charts
/// value and delta, `Gamma` charts value, delta, and gamma.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum OutputStatistic {
    /// The raw function value (the undifferentiated profile).
    #[default]
    PresentValue,
    /// First derivative with respect to the spot input.
    Delta,
    /// Second derivative with respect to the spot input.
    Gamma,
}

/// Error type for [`PlotSettings`] validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    /// No spot grid was supplied to the builder.
    #[error("no spot grid supplied")]
    MissingGrid,

    /// The supplied spot grid is empty.
    #[error("spot grid must not be empty")]
    EmptyGrid,

    /// A grid point is NaN or infinite.
    #[error("spot grid point at index {index} is not finite")]
    NonFiniteGridPoint {
        /// Index of the offending grid point.
        index: usize,
    },

    /// No step width was supplied to the builder.
    #[error("no finite-differences step width supplied")]
    MissingStepWidth,

    /// The step width is zero, negative, or not finite.
    #[error("finite-differences step width must be finite and positive, got {h}")]
    InvalidStepWidth {
        /// The rejected step width.
        h: f64,
    },
}

/// Validated, immutable configuration for a profiling run.
///
/// Construct via [`PlotSettings::builder()`]; direct construction is not
/// possible, so every instance satisfies the invariants above.
///
/// # Examples
///
/// ```rust
/// use profile_core::settings::{OutputStatistic, PlotSettings};
///
/// let settings = PlotSettings::builder()
///     .output_statistic(OutputStatistic::Delta)
///     .s0_grid(vec![90.0, 100.0, 110.0])
///     .step_width(1e-4)
///     .build()
///     .unwrap();
/// assert_eq!(settings.s0_grid().len(), 3);
///
/// // Zero step width is rejected at construction.
/// let err = PlotSettings::builder()
///     .s0_grid(vec![1.0])
///     .step_width(0.0)
///     .build();
/// assert!(err.is_err());
/// ```
#[derive(Clone, Debug)]
pub struct PlotSettings<T: Float> {
    output_statistic: OutputStatistic,
    s0_grid: Vec<T>,
    step_width: T,
}

impl<T: Float> PlotSettings<T> {
    /// Creates a new builder.
    pub fn builder() -> PlotSettingsBuilder<T> {
        PlotSettingsBuilder::default()
    }

    /// The statistic to compute and chart.
    #[inline]
    pub fn output_statistic(&self) -> OutputStatistic {
        self.output_statistic
    }

    /// The spot grid the function is profiled over.
    ///
    /// Non-empty and finite; no ordering or uniqueness is imposed, though a
    /// monotonically increasing grid is the expected shape for charting.
    #[inline]
    pub fn s0_grid(&self) -> &[T] {
        &self.s0_grid
    }

    /// The finite-differences step width. Strictly positive and finite.
    #[inline]
    pub fn step_width(&self) -> T {
        self.step_width
    }
}

/// Builder for [`PlotSettings`].
#[derive(Debug)]
pub struct PlotSettingsBuilder<T: Float> {
    output_statistic: OutputStatistic,
    s0_grid: Option<Vec<T>>,
    step_width: Option<T>,
}

impl<T: Float> Default for PlotSettingsBuilder<T> {
    fn default() -> Self {
        Self {
            output_statistic: OutputStatistic::default(),
            s0_grid: None,
            step_width: None,
        }
    }
}

impl<T: Float> PlotSettingsBuilder<T> {
    /// Sets the statistic to compute (default: `PresentValue`).
    pub fn output_statistic(mut self, statistic: OutputStatistic) -> Self {
        self.output_statistic = statistic;
        self
    }

    /// Sets the spot grid.
    pub fn s0_grid(mut self, grid: Vec<T>) -> Self {
        self.s0_grid = Some(grid);
        self
    }

    /// Sets the finite-differences step width.
    pub fn step_width(mut self, h: T) -> Self {
        self.step_width = Some(h);
        self
    }

    /// Builds the settings, validating all fields.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if the grid is missing, empty, or contains
    /// non-finite points, or if the step width is missing, non-finite, zero,
    /// or negative.
    pub fn build(self) -> Result<PlotSettings<T>, SettingsError> {
        let s0_grid = self.s0_grid.ok_or(SettingsError::MissingGrid)?;
        if s0_grid.is_empty() {
            return Err(SettingsError::EmptyGrid);
        }
        if let Some(index) = s0_grid.iter().position(|x| !x.is_finite()) {
            return Err(SettingsError::NonFiniteGridPoint { index });
        }

        let step_width = self.step_width.ok_or(SettingsError::MissingStepWidth)?;
        if !step_width.is_finite() || step_width <= T::zero() {
            return Err(SettingsError::InvalidStepWidth {
                h: step_width.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(PlotSettings {
            output_statistic: self.output_statistic,
            s0_grid,
            step_width,
        })
    }
}
