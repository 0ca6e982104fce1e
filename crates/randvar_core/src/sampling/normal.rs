//! Normal variates via the Box–Muller transform.
//!
//! # Draw Budget
//!
//! Every standard normal consumes **exactly two** draws `u1, u2`:
//!
//! ```text
//! z = √(−2·ln(1 − u1)) · cos(2π·u2)
//! ```
//!
//! The sine partner of the pair is discarded rather than cached, so each
//! outcome depends only on its own two draws and a reseed never leaves a
//! stale half-pair behind.
//!
//! # Algorithm Reference
//!
//! - Box, G. E. P. & Muller, M. E. (1958). "A Note on the Generation of
//!   Random Normal Deviates". Annals of Mathematical Statistics.

use std::f64::consts::TAU;

use crate::source::UniformSource;

/// Standard normal variate (mean 0, standard deviation 1).
#[inline]
pub fn standard_normal<S: UniformSource + ?Sized>(source: &mut S) -> f64 {
    let radius = (-2.0 * source.draw_open().ln()).sqrt();
    let angle = TAU * source.draw();
    radius * angle.cos()
}

/// Normal variate with mean `mu` and standard deviation `sigma`.
#[inline]
pub fn normal<S: UniformSource + ?Sized>(mu: f64, sigma: f64, source: &mut S) -> f64 {
    mu + sigma * standard_normal(source)
}
