//! Built-in evaluables.
//!
//! Ready-made functions for profiling, each exposing both a plain value form
//! and a `(value, analytic delta)` form so callers can construct either
//! [`EvalFn`](crate::evaluable::EvalFn) variant.

use num_traits::Float;
use thiserror::Error;

/// Error type for built-in function construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FunctionError {
    /// Strike must be strictly positive.
    #[error("strike must be positive, got {strike}")]
    InvalidStrike {
        /// The rejected strike.
        strike: f64,
    },

    /// Volatility must be strictly positive.
    #[error("volatility must be positive, got {volatility}")]
    InvalidVolatility {
        /// The rejected volatility.
        volatility: f64,
    },

    /// Expiry must be strictly positive.
    #[error("expiry must be positive, got {expiry}")]
    InvalidExpiry {
        /// The rejected expiry.
        expiry: f64,
    },
}

/// The parabola `x²`, with analytic delta `2x`.
///
/// The canonical exercise function: its second difference is exact for any
/// step width, which makes it the reference case for the gamma tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct Quadratic;

impl Quadratic {
    /// Value at `x`.
    #[inline]
    pub fn value<T: Float>(&self, x: T) -> T {
        x * x
    }

    /// Value and analytic first derivative at `x`.
    #[inline]
    pub fn value_and_delta<T: Float>(&self, x: T) -> (T, T) {
        let two = T::one() + T::one();
        (x * x, two * x)
    }
}

/// European call price as a function of spot, under Black-Scholes dynamics.
///
/// C(S) = S·N(d₁) - K·e^(-rT)·N(d₂), with analytic delta N(d₁). Strike,
/// volatility, and expiry are fixed at construction; the spot is the profiled
/// input.
///
/// # Examples
///
/// ```rust
/// use profile_core::functions::BlackScholesCall;
///
/// let call = BlackScholesCall::new(100.0, 0.05, 0.2, 1.0).unwrap();
/// let (price, delta) = call.value_and_delta(100.0);
/// assert!(price > 0.0);
/// assert!(delta > 0.5 && delta < 1.0); // ATM call with positive drift
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BlackScholesCall {
    strike: f64,
    rate: f64,
    volatility: f64,
    expiry: f64,
}

impl BlackScholesCall {
    /// Creates a new call profile.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError`] if strike, volatility, or expiry is not
    /// strictly positive.
    pub fn new(
        strike: f64,
        rate: f64,
        volatility: f64,
        expiry: f64,
    ) -> Result<Self, FunctionError> {
        if strike <= 0.0 {
            return Err(FunctionError::InvalidStrike { strike });
        }
        if volatility <= 0.0 {
            return Err(FunctionError::InvalidVolatility { volatility });
        }
        if expiry <= 0.0 {
            return Err(FunctionError::InvalidExpiry { expiry });
        }
        Ok(Self {
            strike,
            rate,
            volatility,
            expiry,
        })
    }

    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    #[inline]
    fn d1(&self, spot: f64) -> f64 {
        let vol_sqrt_t = self.volatility * self.expiry.sqrt();
        let log_moneyness = (spot / self.strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * self.expiry;
        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Call price at the given spot.
    ///
    /// Negative or zero spots are outside the lognormal model's domain and
    /// produce NaN, which the evaluator passes through like any other
    /// non-finite value.
    #[inline]
    pub fn value(&self, spot: f64) -> f64 {
        let d1 = self.d1(spot);
        let d2 = d1 - self.volatility * self.expiry.sqrt();
        let discount = (-self.rate * self.expiry).exp();
        spot * norm_cdf(d1) - self.strike * discount * norm_cdf(d2)
    }

    /// Call price and analytic delta N(d₁) at the given spot.
    #[inline]
    pub fn value_and_delta(&self, spot: f64) -> (f64, f64) {
        (self.value(spot), norm_cdf(self.d1(spot)))
    }
}

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// N(x) = erfc(-x/√2) / 2, using the Abramowitz and Stegun 7.1.26
/// approximation of erfc (maximum error 1.5e-7).
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc_approx(-x / std::f64::consts::SQRT_2)
}

/// Standard normal probability density function.
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Complementary error function via Abramowitz and Stegun 7.1.26.
#[inline]
fn erfc_approx(x: f64) -> f64 {
    let abs_x = x.abs();

    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let t = 1.0 / (1.0 + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    if x < 0.0 {
        2.0 - erfc_abs
    } else {
        erfc_abs
    }
}
