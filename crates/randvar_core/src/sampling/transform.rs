//! Closed-form transforms of one or more uniform draws.
//!
//! Every sampler here consumes a fixed number of draws per outcome.

use crate::source::UniformSource;

/// Largest `n` accepted by Irwin-Hall and Bates. Each of their outcomes
/// consumes `n` draws.
pub const MAX_SUMMANDS: i64 = 1 << 24;

/// Bernoulli trial: success when `u ≤ p`.
///
/// Ties at `u == p` favour success. `p == 0` never succeeds, even on the
/// draw `u == 0`. Consumes one draw.
pub fn bernoulli<S: UniformSource + ?Sized>(p: f64, source: &mut S) -> bool {
    let u = source.draw();
    p > 0.0 && u <= p
}

/// Rademacher: `−1` when `u < ½`, `+1` otherwise. Consumes one draw.
pub fn rademacher<S: UniformSource + ?Sized>(source: &mut S) -> i64 {
    if source.draw() < 0.5 {
        -1
    } else {
        1
    }
}

/// Exponential with the given mean: `−mean·ln(1 − u)`.
///
/// Consumes one draw.
pub fn exponential<S: UniformSource + ?Sized>(mean: f64, source: &mut S) -> f64 {
    -mean * source.draw_open().ln()
}

/// Rayleigh: `σ·√(−2·ln(1 − u))`.
///
/// `1 − u` lies in (0, 1], so the logarithm is always finite. Consumes one
/// draw.
pub fn rayleigh<S: UniformSource + ?Sized>(sigma: f64, source: &mut S) -> f64 {
    sigma * (-2.0 * source.draw_open().ln()).sqrt()
}

/// Pareto with scale `x_m` and shape `α`: `x_m / (1 − u)^(1/α)`.
///
/// Outcomes are at least `x_m`. Consumes one draw.
pub fn pareto<S: UniformSource + ?Sized>(scale: f64, shape: f64, source: &mut S) -> f64 {
    scale / source.draw_open().powf(shape.recip())
}

/// Triangular on `[a, b]` with mode `c`, by two-branch inverse CDF.
///
/// With `F(c) = (c − a)/(b − a)`:
/// - `u < F(c)`: `a + √(u·(b − a)·(c − a))`
/// - otherwise: `b − √((1 − u)·(b − a)·(b − c))`
///
/// Consumes one draw.
pub fn triangular<S: UniformSource + ?Sized>(a: f64, c: f64, b: f64, source: &mut S) -> f64 {
    let u = source.draw();
    let width = b - a;
    let split = (c - a) / width;
    if u < split {
        a + (u * width * (c - a)).sqrt()
    } else {
        b - ((1.0 - u) * width * (b - c)).sqrt()
    }
}

/// Irwin-Hall: the sum of `n` draws. Consumes `n` draws.
pub fn irwin_hall<S: UniformSource + ?Sized>(n: i64, source: &mut S) -> f64 {
    (0..n).map(|_| source.draw()).sum()
}

/// Bates: the mean of `n` draws. Consumes `n` draws.
pub fn bates<S: UniformSource + ?Sized>(n: i64, source: &mut S) -> f64 {
    irwin_hall(n, source) / n as f64
}
