//! Binomial variates.
//!
//! `p` is first reflected to `min(p, 1 − p)`; the outcome is mirrored back
//! as `n − k` when reflected. With `np` the reflected mean:
//!
//! - **np < 10**: sequential inversion. Walks the PMF from zero using the
//!   ratio `P(k)/P(k−1) = (n − k + 1)p / (kq)`. Restarts with a fresh draw
//!   if rounding walks past `np + 10·√(npq + 1)`.
//! - **np ≥ 10**: Hörmann's BTRS (transformed rejection with squeeze).
//!
//! `n = 0`, `p = 0` and `p = 1` return their single possible outcome
//! without drawing.
//!
//! # Algorithm Reference
//!
//! - Hörmann, W. (1993). "The generation of binomial random variates".
//!   Journal of Statistical Computation and Simulation.

use super::special::ln_factorial_diff;
use crate::source::UniformSource;

/// Reflected mean at which inversion hands over to BTRS.
const BTRS_THRESHOLD: f64 = 10.0;

/// Binomial variate: successes in `n` trials with probability `p`.
///
/// Requires `n >= 0` and `0 <= p <= 1`. The outcome is in `[0, n]`.
pub fn binomial<S: UniformSource + ?Sized>(n: i64, p: f64, source: &mut S) -> i64 {
    if n == 0 || p == 0.0 {
        return 0;
    }
    if p == 1.0 {
        return n;
    }

    let reflected = p > 0.5;
    let p = if reflected { 1.0 - p } else { p };
    let k = if n as f64 * p < BTRS_THRESHOLD {
        inversion(n, p, source)
    } else {
        btrs(n, p, source)
    };
    if reflected {
        n - k
    } else {
        k
    }
}

fn inversion<S: UniformSource + ?Sized>(n: i64, p: f64, source: &mut S) -> i64 {
    let nf = n as f64;
    let q = 1.0 - p;
    let ratio = p / q;
    let p0 = (nf * (-p).ln_1p()).exp();
    let bound = nf.min(nf * p + 10.0 * (nf * p * q + 1.0).sqrt());

    let mut k = 0_i64;
    let mut pk = p0;
    let mut u = source.draw();
    while u > pk {
        k += 1;
        if k as f64 > bound {
            k = 0;
            pk = p0;
            u = source.draw();
        } else {
            u -= pk;
            pk *= (nf - k as f64 + 1.0) * ratio / k as f64;
        }
    }
    k
}

fn btrs<S: UniformSource + ?Sized>(n: i64, p: f64, source: &mut S) -> i64 {
    let nf = n as f64;
    let q = 1.0 - p;
    let spq = (nf * p * q).sqrt();
    let b = 1.15 + 2.53 * spq;
    let a = -0.0873 + 0.0248 * b + 0.01 * p;
    let c = nf * p + 0.5;
    let v_r = 0.92 - 4.2 / b;
    let alpha = (2.83 + 5.1 / b) * spq;
    let lpq = (p / q).ln();
    let m = ((nf + 1.0) * p).floor();

    loop {
        let u = source.draw() - 0.5;
        let v = source.draw_open();
        let us = 0.5 - u.abs();
        let kf = ((2.0 * a / us + b) * u + c).floor();
        if kf < 0.0 || kf > nf {
            continue;
        }
        if us >= 0.07 && v <= v_r {
            return kf as i64;
        }
        let lhs = (v * alpha / (a / (us * us) + b)).ln();
        let rhs = ln_factorial_diff(m, kf) + ln_factorial_diff(nf - m, nf - kf) + (kf - m) * lpq;
        if lhs <= rhs {
            return kf as i64;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{ReplaySource, SeededSource};

    fn moments(samples: &[i64]) -> (f64, f64) {
        let n = samples.len() as f64;
        let mean = samples.iter().map(|&k| k as f64).sum::<f64>() / n;
        let var = samples
            .iter()
            .map(|&k| (k as f64 - mean).powi(2))
            .sum::<f64>()
            / n;
        (mean, var)
    }

    #[test]
    fn test_degenerate_parameters_draw_nothing() {
        let mut source = ReplaySource::new(vec![]);
        assert_eq!(binomial(0, 0.3, &mut source), 0);
        assert_eq!(binomial(10, 0.0, &mut source), 0);
        assert_eq!(binomial(10, 1.0, &mut source), 10);
    }

    #[test]
    fn test_inversion_walk() {
        // n = 2, p = 0.5: P(0) = 0.25, P(1) = 0.5, P(2) = 0.25
        let mut source = ReplaySource::new(vec![0.2, 0.3, 0.8]);
        assert_eq!(binomial(2, 0.5, &mut source), 0);
        assert_eq!(binomial(2, 0.5, &mut source), 1);
        assert_eq!(binomial(2, 0.5, &mut source), 2);
    }

    #[test]
    fn test_reflection_mirrors_outcome() {
        // p = 0.75 reflects to 0.25; n = 1: P(0) = 0.75 under the reflected law
        let mut source = ReplaySource::new(vec![0.5, 0.9]);
        assert_eq!(binomial(1, 0.75, &mut source), 1);
        assert_eq!(binomial(1, 0.75, &mut source), 0);
    }

    #[test]
    fn test_outcomes_within_range() {
        let mut source = SeededSource::from_seed(31);
        for (n, p) in [(1, 0.5), (7, 0.9), (30, 0.3), (500, 0.5), (2_000, 0.99)] {
            for _ in 0..10_000 {
                let k = binomial(n, p, &mut source);
                assert!((0..=n).contains(&k), "n={n} p={p}: {k}");
            }
        }
    }

    #[test]
    fn test_inversion_moments() {
        let mut source = SeededSource::from_seed(32);
        let (n, p) = (20, 0.2);
        let samples: Vec<i64> = (0..100_000).map(|_| binomial(n, p, &mut source)).collect();
        let (mean, var) = moments(&samples);
        assert!((mean - 4.0).abs() < 0.05, "mean {mean}");
        assert!((var - 3.2).abs() < 0.1, "variance {var}");
    }

    #[test]
    fn test_btrs_moments() {
        let mut source = SeededSource::from_seed(33);
        for (n, p) in [(100, 0.4), (10_000, 0.7), (1_000_000, 0.01)] {
            let samples: Vec<i64> = (0..100_000).map(|_| binomial(n, p, &mut source)).collect();
            let (mean, var) = moments(&samples);
            let expected_mean = n as f64 * p;
            let expected_var = expected_mean * (1.0 - p);
            assert!(
                (mean - expected_mean).abs() < 0.01 * expected_mean,
                "n={n} p={p}: mean {mean}"
            );
            assert!(
                (var - expected_var).abs() < 0.05 * expected_var,
                "n={n} p={p}: variance {var}"
            );
        }
    }

    #[test]
    fn test_huge_trial_count() {
        let mut source = SeededSource::from_seed(34);
        let n = i64::MAX / 2;
        for _ in 0..1000 {
            let k = binomial(n, 0.5, &mut source);
            assert!((0..=n).contains(&k));
        }
    }
}
