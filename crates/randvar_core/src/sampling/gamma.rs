//! Gamma-family samplers: Beta, Chi-Squared and F.
//!
//! All three are built on a unit-scale Gamma variate drawn with the
//! Marsaglia–Tsang squeeze/rejection method. For `shape < 1` the boost
//! `Gamma(shape) = Gamma(shape + 1) · U^(1/shape)` is applied with
//! `U ∈ (0, 1]`.
//!
//! Small shapes push `U^(1/shape)` below the smallest `f64`, so Beta and F
//! are formed from the logarithms of their Gamma variates and only
//! exponentiated at the end. Their outcomes saturate at the ends of the
//! support instead of turning into `0/0`.
//!
//! # Algorithm Reference
//!
//! - Marsaglia, G. & Tsang, W. W. (2000). "A Simple Method for Generating
//!   Gamma Variables". ACM Transactions on Mathematical Software.

use std::f64::consts::LN_2;

use super::normal::standard_normal;
use crate::source::UniformSource;

/// Unit-scale Gamma variate with the given shape (`shape > 0`).
pub(crate) fn gamma<S: UniformSource + ?Sized>(shape: f64, source: &mut S) -> f64 {
    if shape < 1.0 {
        return ln_gamma_variate(shape, source).exp();
    }
    marsaglia_tsang(shape, source)
}

/// Natural logarithm of a unit-scale Gamma variate (`shape > 0`).
///
/// Consumes the same draws, in the same order, as [`gamma`]. The result is
/// finite; it is clamped at `f64::MIN` for subnormal shapes.
pub(crate) fn ln_gamma_variate<S: UniformSource + ?Sized>(shape: f64, source: &mut S) -> f64 {
    if shape < 1.0 {
        let ln_boost = source.draw_open().ln() / shape;
        return (marsaglia_tsang(shape + 1.0, source).ln() + ln_boost).max(f64::MIN);
    }
    marsaglia_tsang(shape, source).ln()
}

/// Marsaglia–Tsang for `shape >= 1`. The result is strictly positive.
fn marsaglia_tsang<S: UniformSource + ?Sized>(shape: f64, source: &mut S) -> f64 {
    let d = shape - 1.0 / 3.0;
    let c = (9.0 * d).sqrt().recip();
    loop {
        let x = standard_normal(source);
        let t = 1.0 + c * x;
        if t <= 0.0 {
            continue;
        }
        let v = t * t * t;
        let u = source.draw_open();
        let x2 = x * x;
        if u < 1.0 - 0.0331 * x2 * x2 {
            return d * v;
        }
        if u.ln() < 0.5 * x2 + d * (1.0 - v + v.ln()) {
            return d * v;
        }
    }
}

/// Beta variate as a ratio of Gammas: `X / (X + Y)`.
///
/// `X ~ Gamma(α)` is drawn before `Y ~ Gamma(β)`. The ratio is evaluated
/// as `1 / (1 + exp(ln Y − ln X))`, which lies in `[0, 1]` for every valid
/// shape pair.
pub fn beta<S: UniformSource + ?Sized>(alpha: f64, beta: f64, source: &mut S) -> f64 {
    let ln_x = ln_gamma_variate(alpha, source);
    let ln_y = ln_gamma_variate(beta, source);
    (1.0 + (ln_y - ln_x).exp()).recip()
}

/// Chi-Squared with `k` degrees of freedom: `2 · Gamma(k/2)`.
pub fn chi_squared<S: UniformSource + ?Sized>(k: i64, source: &mut S) -> f64 {
    2.0 * gamma(0.5 * k as f64, source)
}

fn ln_chi_squared<S: UniformSource + ?Sized>(k: f64, source: &mut S) -> f64 {
    LN_2 + ln_gamma_variate(0.5 * k, source)
}

/// Snedecor's F: `(X₁/d₁) / (X₂/d₂)` with `Xᵢ ~ χ²(dᵢ)`.
///
/// Real degrees of freedom are accepted. The quotient is taken in log
/// space, so tiny degrees of freedom saturate at `0` or `+∞` but never
/// produce NaN.
pub fn fisher_f<S: UniformSource + ?Sized>(d1: f64, d2: f64, source: &mut S) -> f64 {
    let ln_numerator = ln_chi_squared(d1, source) - d1.ln();
    let ln_denominator = ln_chi_squared(d2, source) - d2.ln();
    (ln_numerator - ln_denominator).exp()
}
