//! Poisson variates.
//!
//! The method depends on the magnitude of λ:
//!
//! - **λ < 10**: Knuth's multiplication method. Multiplies draws until the
//!   running product falls to `e^(−λ)`; expected `λ + 1` draws.
//! - **λ ≥ 10**: Hörmann's PTRS (transformed rejection with squeeze).
//!   Expected draws are bounded by a small constant for all λ.
//!
//! # Overflow Ceiling
//!
//! Outcomes are `i64`. [`LAMBDA_MAX`] keeps λ a safe distance below
//! `i64::MAX` so that no accepted candidate can overflow.
//!
//! # Algorithm Reference
//!
//! - Hörmann, W. (1993). "The transformed rejection method for generating
//!   Poisson random variables". Insurance: Mathematics and Economics.

use std::f64::consts::TAU;

use num_traits::ToPrimitive;

use super::special::{ln_factorial, stirling_tail};
use crate::source::UniformSource;

/// Largest accepted λ: `i64::MAX − ⌊0.00001 × i64::MAX⌋`.
pub const LAMBDA_MAX: f64 = i64::MAX as f64 - 92_233_720_368_547.0;

/// λ at which the sampler switches from multiplication to PTRS.
const PTRS_THRESHOLD: f64 = 10.0;

/// Poisson variate with mean `lambda` (`0 < lambda ≤ LAMBDA_MAX`).
pub fn poisson<S: UniformSource + ?Sized>(lambda: f64, source: &mut S) -> i64 {
    if lambda < PTRS_THRESHOLD {
        multiplication(lambda, source)
    } else {
        ptrs(lambda, source)
    }
}

fn multiplication<S: UniformSource + ?Sized>(lambda: f64, source: &mut S) -> i64 {
    let limit = (-lambda).exp();
    let mut product = source.draw_open();
    let mut k = 0;
    while product > limit {
        product *= source.draw_open();
        k += 1;
    }
    k
}

fn ptrs<S: UniformSource + ?Sized>(lambda: f64, source: &mut S) -> i64 {
    let sqrt_lambda = lambda.sqrt();
    let ln_lambda = lambda.ln();
    let b = 0.931 + 2.53 * sqrt_lambda;
    let a = -0.059 + 0.024_83 * b;
    let ln_inv_alpha = (1.1239 + 1.1328 / (b - 3.4)).ln();
    let v_r = 0.9277 - 3.6224 / (b - 2.0);

    loop {
        let u = source.draw() - 0.5;
        let v = source.draw_open();
        let us = 0.5 - u.abs();
        let kf = ((2.0 * a / us + b) * u + lambda + 0.43).floor();

        if us >= 0.07 && v <= v_r {
            if let Some(k) = kf.to_i64() {
                return k;
            }
        }
        if kf < 0.0 || (us < 0.013 && v > us) {
            continue;
        }
        let Some(k) = kf.to_i64() else {
            continue;
        };
        let accept = v.ln() + ln_inv_alpha - (a / (us * us) + b).ln();
        if accept <= ln_pmf(kf, lambda, ln_lambda) {
            return k;
        }
    }
}

/// `ln P(K = k)` for `K ~ Poisson(λ)`, stable for `k ≈ λ ≫ 1`.
fn ln_pmf(k: f64, lambda: f64, ln_lambda: f64) -> f64 {
    if k < 16.0 {
        return -lambda + k * ln_lambda - ln_factorial(k);
    }
    let delta = k - lambda;
    -k * (delta / lambda).ln_1p() + delta - 0.5 * (TAU * k).ln() - stirling_tail(k)
}
