//! Special functions needed by the rejection samplers.
//!
//! Rejection tests compare log-probabilities whose terms grow like
//! `k·ln k`. For the huge counts admitted by the Poisson and Binomial
//! ceilings those terms reach ~1e20, so differences are formed from the
//! Stirling expansion directly instead of subtracting two large
//! log-factorials.

use std::f64::consts::{LN_2, TAU};

/// `ln(k!)` for `k < 16`.
const LN_FACTORIAL_TABLE: [f64; 16] = [
    0.0,
    0.0,
    LN_2,
    1.791_759_469_228_055,
    3.178_053_830_347_945_6,
    4.787_491_742_782_046,
    6.579_251_212_010_101,
    8.525_161_361_065_415,
    10.604_602_902_745_25,
    12.801_827_480_081_469,
    15.104_412_573_075_516,
    17.502_307_845_873_887,
    19.987_214_495_661_885,
    22.552_163_853_123_42,
    25.191_221_182_738_68,
    27.899_271_383_840_89,
];

const TABLE_LIMIT: f64 = LN_FACTORIAL_TABLE.len() as f64;

/// Stirling series tail `1/12k − 1/360k³ + 1/1260k⁵`.
#[inline]
pub(crate) fn stirling_tail(k: f64) -> f64 {
    let inv = k.recip();
    let inv2 = inv * inv;
    inv * (1.0 / 12.0 - inv2 * (1.0 / 360.0 - inv2 / 1260.0))
}

/// Natural logarithm of `k!` for whole `k >= 0`.
///
/// Exact table lookup below 16; above that
/// `(k + ½)·ln k − k + ½·ln 2π + stirling_tail(k)`, accurate to double
/// precision.
pub(crate) fn ln_factorial(k: f64) -> f64 {
    if k < TABLE_LIMIT {
        return LN_FACTORIAL_TABLE[k as usize];
    }
    (k + 0.5) * k.ln() - k + 0.5 * TAU.ln() + stirling_tail(k)
}

/// `ln(m!) − ln(k!)` without cancellation for large `m`, `k`.
///
/// Uses `(k + ½)·ln(1 + (m − k)/k) + (m − k)·(ln m − 1) + tail(m) − tail(k)`
/// once both arguments are past the table.
pub(crate) fn ln_factorial_diff(m: f64, k: f64) -> f64 {
    if m < TABLE_LIMIT || k < TABLE_LIMIT {
        return ln_factorial(m) - ln_factorial(k);
    }
    let d = m - k;
    (k + 0.5) * (d / k).ln_1p() + d * (m.ln() - 1.0) + stirling_tail(m) - stirling_tail(k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_table_matches_products() {
        let mut acc = 0.0_f64;
        for k in 1..16 {
            acc += (k as f64).ln();
            assert_relative_eq!(ln_factorial(k as f64), acc, max_relative = 1e-14);
        }
        assert_eq!(ln_factorial(0.0), 0.0);
    }

    #[test]
    fn test_series_continuity_at_table_edge() {
        let from_table = ln_factorial(15.0) + 16.0_f64.ln();
        assert_relative_eq!(ln_factorial(16.0), from_table, max_relative = 1e-13);

        let mut acc = from_table;
        for k in 17..200 {
            acc += (k as f64).ln();
            assert_relative_eq!(ln_factorial(k as f64), acc, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_diff_matches_direct_for_moderate_arguments() {
        for (m, k) in [(20.0, 40.0), (100.0, 97.0), (1000.0, 1000.0), (5.0, 30.0)] {
            assert_relative_eq!(
                ln_factorial_diff(m, k),
                ln_factorial(m) - ln_factorial(k),
                epsilon = 1e-9,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_diff_is_stable_for_huge_arguments() {
        // ln((m+1)!) − ln(m!) = ln(m + 1)
        let m = 4.0e18;
        assert_relative_eq!(
            ln_factorial_diff(m + 1024.0, m),
            (1..=1024).map(|i| (m + i as f64).ln()).sum::<f64>(),
            max_relative = 1e-9
        );
    }
}
