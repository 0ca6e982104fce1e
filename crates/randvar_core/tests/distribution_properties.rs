//! Integration tests for distribution construction and sampling properties.
//!
//! Exercises the public surface end to end: construction through the
//! loosely typed boundary, batch draws against explicit sources, and the
//! range and moment properties each kind guarantees.

use approx::assert_relative_eq;
use proptest::prelude::*;
use randvar_core::distribution::{
    construct, Beta, ContinuousUniform, Distribution, DistributionKind, FisherF, Normal,
    ParamValue, Poisson, Triangular,
};
use randvar_core::error::RandVarError;
use randvar_core::sampling::LAMBDA_MAX;
use randvar_core::source::{ReplaySource, SeededSource};
use randvar_core::stats::SampleStatistics;
use randvar_core::validation::{ConstraintKind, ValidationError};
use randvar_core::variable::RandomVariable;

/// One valid parameter set per constructible kind.
fn representative(kind: DistributionKind) -> Option<Vec<ParamValue>> {
    use ParamValue::{Integer as I, Real as R};
    let params = match kind {
        DistributionKind::Bernoulli => vec![R(0.4)],
        DistributionKind::Beta => vec![R(0.5), R(0.5)],
        DistributionKind::Binomial => vec![I(40), R(0.6)],
        DistributionKind::ChiSquared => vec![I(5)],
        DistributionKind::ContinuousUniform => vec![R(-1.0), R(1.0)],
        DistributionKind::DiscreteUniform => vec![I(-3), I(3)],
        DistributionKind::Exponential => vec![R(2.0)],
        DistributionKind::F => vec![R(4.0), R(6.0)],
        DistributionKind::Normal => vec![R(0.0), R(1.0)],
        DistributionKind::Poisson => vec![R(25.0)],
        DistributionKind::Rayleigh => vec![R(1.5)],
        DistributionKind::Arcsine => vec![R(0.0), R(2.0)],
        DistributionKind::Bates => vec![I(3)],
        DistributionKind::IrwinHall => vec![I(3)],
        DistributionKind::Pareto => vec![R(1.0), R(3.0)],
        DistributionKind::Rademacher | DistributionKind::Rectangular => vec![],
        DistributionKind::Triangular => vec![R(0.0), R(1.0), R(2.0)],
        DistributionKind::TruncatedNormal => return None,
    };
    Some(params)
}

fn all_distributions() -> Vec<Distribution> {
    DistributionKind::ALL
        .into_iter()
        .filter_map(|kind| representative(kind).map(|params| construct(kind, &params).unwrap()))
        .collect()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_beta_negative_alpha_is_rejected() {
    let err = construct(
        DistributionKind::Beta,
        &[ParamValue::Real(-1.0), ParamValue::Real(2.0)],
    )
    .unwrap_err();
    assert_eq!(
        err,
        RandVarError::Validation(ValidationError {
            parameter: "alpha",
            kind: ConstraintKind::NonPositive,
        })
    );
}

#[test]
fn test_poisson_lambda_bounds() {
    for lambda in [0.0, -1.0] {
        assert_eq!(
            Poisson::new(lambda).unwrap_err().kind,
            ConstraintKind::NonPositive
        );
    }
    assert!(Poisson::new(LAMBDA_MAX).is_ok());
    assert_eq!(
        Poisson::new(LAMBDA_MAX * 1.000_001).unwrap_err().kind,
        ConstraintKind::TooLarge
    );
}

#[test]
fn test_every_kind_yields_matching_outcome_type() {
    let mut source = SeededSource::from_seed(100);
    for distribution in all_distributions() {
        let discrete = distribution.kind().is_discrete();
        for outcome in distribution.outcomes(&mut source, 50) {
            assert_eq!(outcome.is_integer(), discrete, "{:?}", distribution.kind());
        }
    }
}

#[test]
fn test_zero_outcomes_for_every_kind() {
    let mut source = ReplaySource::new(vec![]);
    for distribution in all_distributions() {
        assert!(distribution.outcomes(&mut source, 0).is_empty());
    }
}

// =============================================================================
// Range and moment properties
// =============================================================================

#[test]
fn test_continuous_uniform_mean_converges() {
    let uniform = Distribution::from(ContinuousUniform::new(2.0, 6.0).unwrap());
    let mut source = SeededSource::from_seed(101);
    let batch = uniform.outcomes(&mut source, 100_000);
    assert!(batch.iter().all(|o| (2.0..6.0).contains(&o.as_f64())));
    assert_relative_eq!(batch.mean().unwrap(), 4.0, epsilon = 0.02);
}

#[test]
fn test_bernoulli_mean_within_tolerance() {
    let mut source = SeededSource::from_seed(102);
    for p in [0.0, 0.05, 0.5, 0.95, 1.0] {
        let coin = construct(DistributionKind::Bernoulli, &[ParamValue::Real(p)]).unwrap();
        let mean = coin.outcomes(&mut source, 100_000).mean().unwrap();
        assert!((mean - p).abs() <= 0.02, "p={p}: mean {mean}");
    }
}

#[test]
fn test_discrete_uniform_frequencies() {
    let die = construct(
        DistributionKind::DiscreteUniform,
        &[ParamValue::Integer(-2), ParamValue::Integer(2)],
    )
    .unwrap();
    let mut source = SeededSource::from_seed(103);
    let mut counts = [0usize; 5];
    for outcome in die.outcomes(&mut source, 100_000) {
        let k = outcome.as_i64().unwrap();
        assert!((-2..=2).contains(&k), "out of range: {k}");
        counts[(k + 2) as usize] += 1;
    }
    for count in counts {
        assert_relative_eq!(count as f64 / 100_000.0, 0.2, epsilon = 0.01);
    }
}

#[test]
fn test_poisson_outcomes_non_negative() {
    let mut source = SeededSource::from_seed(104);
    for lambda in [0.3, 7.0, 50.0, 1e12] {
        let poisson = Distribution::from(Poisson::new(lambda).unwrap());
        for outcome in poisson.outcomes(&mut source, 5_000) {
            assert!(outcome.as_i64().unwrap() >= 0);
        }
    }
}

#[test]
fn test_normal_golden_values() {
    // StdRng seeded with 42, Box-Muller over two draws per outcome.
    let normal = Distribution::from(Normal::standard());
    let mut source = SeededSource::from_seed(42);
    let expected = [
        -1.179_085_601_277_407_6,
        -1.181_107_500_240_590_2,
        -0.227_519_966_295_680_9,
        0.955_013_992_749_661_1,
        0.530_423_197_832_343_9,
    ];
    for (outcome, value) in normal.outcomes(&mut source, 5).into_iter().zip(expected) {
        assert!(!outcome.is_integer());
        assert_relative_eq!(outcome.as_f64(), value, max_relative = 1e-12);
    }

    let mut replay = ReplaySource::new(vec![0.5, 0.0]);
    assert_relative_eq!(
        normal.outcome(&mut replay).as_f64(),
        1.177_410_022_515_474_7,
        epsilon = 1e-15
    );
}

#[test]
fn test_triangular_and_beta_stay_in_support() {
    let mut source = SeededSource::from_seed(105);
    let tri = Distribution::from(Triangular::new(-1.0, -1.0, 3.0).unwrap());
    for outcome in tri.outcomes(&mut source, 10_000) {
        assert!((-1.0..=3.0).contains(&outcome.as_f64()));
    }
    for (alpha, beta) in [(0.2, 0.3), (0.05, 0.05), (0.001, 0.001)] {
        let variable = Distribution::from(Beta::new(alpha, beta).unwrap());
        for outcome in variable.outcomes(&mut source, 10_000) {
            let x = outcome.as_f64();
            assert!((0.0..=1.0).contains(&x), "beta({alpha}, {beta}) gave {x}");
        }
    }
}

#[test]
fn test_fisher_f_small_degrees_of_freedom_never_nan() {
    let mut source = SeededSource::from_seed(1);
    let f = Distribution::from(FisherF::new(0.001, 0.001).unwrap());
    for outcome in f.outcomes(&mut source, 10_000) {
        let x = outcome.as_f64();
        assert!(!x.is_nan() && x >= 0.0, "f(0.001, 0.001) gave {x}");
    }
}

// =============================================================================
// Property-based tests
// =============================================================================

proptest! {
    #[test]
    fn prop_continuous_uniform_in_range(
        a in -1e6..1e6_f64,
        width in 1e-6..1e6_f64,
        seed in any::<u64>(),
    ) {
        let b = a + width;
        prop_assume!(a < b);
        let uniform = Distribution::from(ContinuousUniform::new(a, b).unwrap());
        let mut source = SeededSource::from_seed(seed);
        for outcome in uniform.outcomes(&mut source, 100) {
            let x = outcome.as_f64();
            prop_assert!(a <= x && x < b, "{} not in [{}, {})", x, a, b);
        }
    }

    #[test]
    fn prop_discrete_uniform_in_range(
        a in any::<i64>(),
        b in any::<i64>(),
        seed in any::<u64>(),
    ) {
        prop_assume!(a < b);
        let uniform = construct(
            DistributionKind::DiscreteUniform,
            &[ParamValue::Integer(a), ParamValue::Integer(b)],
        )
        .unwrap();
        let mut source = SeededSource::from_seed(seed);
        for outcome in uniform.outcomes(&mut source, 100) {
            let k = outcome.as_i64().unwrap();
            prop_assert!(a <= k && k <= b);
        }
    }

    #[test]
    fn prop_binomial_in_range(
        n in 0..1_000_000_i64,
        p in 0.0..=1.0_f64,
        seed in any::<u64>(),
    ) {
        let binomial = construct(
            DistributionKind::Binomial,
            &[ParamValue::Integer(n), ParamValue::Real(p)],
        )
        .unwrap();
        let mut source = SeededSource::from_seed(seed);
        for outcome in binomial.outcomes(&mut source, 20) {
            let k = outcome.as_i64().unwrap();
            prop_assert!(0 <= k && k <= n);
        }
    }

    #[test]
    fn prop_same_seed_same_batch(seed in any::<u64>()) {
        for distribution in all_distributions() {
            let mut a = SeededSource::from_seed(seed);
            let mut b = SeededSource::from_seed(seed);
            prop_assert_eq!(
                distribution.outcomes(&mut a, 10),
                distribution.outcomes(&mut b, 10)
            );
        }
    }

    #[test]
    fn prop_non_finite_parameters_rejected(
        kind in prop::sample::select(vec![
            DistributionKind::Normal,
            DistributionKind::Beta,
            DistributionKind::ContinuousUniform,
            DistributionKind::Pareto,
        ]),
        bad in prop::sample::select(vec![f64::NAN, f64::INFINITY, f64::NEG_INFINITY]),
    ) {
        let err = construct(kind, &[ParamValue::Real(bad), ParamValue::Real(1.0)]).unwrap_err();
        match err {
            RandVarError::Validation(e) => prop_assert_eq!(e.kind, ConstraintKind::NotFinite),
            other => prop_assert!(false, "unexpected error {:?}", other),
        }
    }
}
