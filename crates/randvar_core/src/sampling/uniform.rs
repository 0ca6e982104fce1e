//! Samplers for the uniform family: continuous, discrete, arcsine and
//! rectangular.

use std::f64::consts::FRAC_PI_2;

use crate::source::UniformSource;

/// Largest `f64` strictly below `x` (finite `x` only).
fn next_below(x: f64) -> f64 {
    if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else if x == 0.0 {
        -f64::from_bits(1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}

/// Continuous uniform on `[a, b)`: `a + u·(b − a)`.
///
/// Rounding can push `a + u·(b − a)` up to `b` when `u` is close to one;
/// such results are pulled back to the largest value below `b`. When
/// `b − a` overflows, the equivalent `(1 − u)·a + u·b` is used.
///
/// Requires `a < b`, both finite. Consumes one draw.
pub fn continuous_uniform<S: UniformSource + ?Sized>(a: f64, b: f64, source: &mut S) -> f64 {
    let u = source.draw();
    let span = b - a;
    let x = if span.is_finite() {
        a + u * span
    } else {
        (1.0 - u) * a + u * b
    };
    if x < b {
        x
    } else {
        next_below(b).max(a)
    }
}

/// Discrete uniform on `{a, …, b}` by direct bin index.
///
/// `[0, 1)` is split into `b − a + 1` equal bins and the draw's bin is
/// `⌊u·(b − a + 1)⌋`, clamped to the last bin against rounding. The width
/// is computed in `i128` so that the full `i64` range is representable.
///
/// Requires `a < b`. Consumes one draw.
pub fn discrete_uniform<S: UniformSource + ?Sized>(a: i64, b: i64, source: &mut S) -> i64 {
    let u = source.draw();
    let last = i128::from(b) - i128::from(a);
    let bins = (last + 1) as f64;
    let index = ((u * bins) as i128).min(last);
    (i128::from(a) + index) as i64
}

/// Arcsine on `[a, b]`: `a + (b − a)·sin²(πu/2)`.
///
/// Consumes one draw.
pub fn arcsine<S: UniformSource + ?Sized>(a: f64, b: f64, source: &mut S) -> f64 {
    let s = (FRAC_PI_2 * source.draw()).sin();
    a + (b - a) * s * s
}

/// Rectangular (standard uniform centred on zero) on `[−½, ½)`.
///
/// Consumes one draw.
pub fn rectangular<S: UniformSource + ?Sized>(source: &mut S) -> f64 {
    source.draw() - 0.5
}
