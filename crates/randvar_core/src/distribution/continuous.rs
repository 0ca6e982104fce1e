//! Real-valued distributions from the core catalogue.

use crate::sampling;
use crate::source::UniformSource;
use crate::validation::{self, ConstraintKind, ValidationError};

/// Beta distribution on (0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beta {
    alpha: f64,
    beta: f64,
}

impl Beta {
    /// Creates a Beta distribution; both shapes must be positive.
    ///
    /// # Examples
    /// ```
    /// use randvar_core::distribution::Beta;
    /// use randvar_core::validation::{ConstraintKind, ValidationError};
    ///
    /// assert!(Beta::new(2.0, 5.0).is_ok());
    /// assert_eq!(
    ///     Beta::new(-1.0, 2.0).unwrap_err(),
    ///     ValidationError::new("alpha", ConstraintKind::NonPositive)
    /// );
    /// ```
    pub fn new(alpha: f64, beta: f64) -> Result<Self, ValidationError> {
        let alpha = validation::positive("alpha", alpha)?;
        let beta = validation::positive("beta", beta)?;
        Ok(Self { alpha, beta })
    }

    /// Returns the first shape parameter.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the second shape parameter.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Draws one variate.
    #[inline]
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        sampling::beta(self.alpha, self.beta, source)
    }
}

/// Chi-Squared with `k` degrees of freedom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChiSquared {
    k: i64,
}

impl ChiSquared {
    /// Creates a Chi-Squared distribution; `k` must be a positive integer.
    pub fn new(k: i64) -> Result<Self, ValidationError> {
        let k = validation::positive_integer("k", k)?;
        Ok(Self { k })
    }

    /// Returns the degrees of freedom.
    #[inline]
    pub fn k(&self) -> i64 {
        self.k
    }

    /// Draws one variate. The outcome is real even though `k` is integral.
    #[inline]
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        sampling::chi_squared(self.k, source)
    }
}

/// Continuous uniform on `[a, b)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousUniform {
    a: f64,
    b: f64,
}

impl ContinuousUniform {
    /// Creates a continuous uniform distribution; requires finite `a < b`.
    pub fn new(a: f64, b: f64) -> Result<Self, ValidationError> {
        let a = validation::finite("a", a)?;
        let b = validation::finite("b", b)?;
        validation::less_than("a", a, b)?;
        Ok(Self { a, b })
    }

    /// Returns the lower bound (inclusive).
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the upper bound (exclusive).
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Draws one value in `[a, b)`.
    #[inline]
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        sampling::continuous_uniform(self.a, self.b, source)
    }
}

/// Exponential distribution.
///
/// Parameterised by its rate `λ`; the mean `1/λ` is stored alongside it
/// since that is what the sampler scales by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    rate: f64,
    mean: f64,
}

impl Exponential {
    /// Creates an Exponential distribution with the given rate.
    ///
    /// The rate must be positive and large enough that its reciprocal is
    /// finite; subnormal rates fail with [`ConstraintKind::NotFinite`].
    ///
    /// # Examples
    /// ```
    /// use randvar_core::distribution::Exponential;
    ///
    /// let exp = Exponential::new(4.0).unwrap();
    /// assert_eq!(exp.rate(), 4.0);
    /// assert_eq!(exp.mean(), 0.25);
    /// ```
    pub fn new(rate: f64) -> Result<Self, ValidationError> {
        let rate = validation::positive("rate", rate)?;
        let mean = rate.recip();
        if !mean.is_finite() {
            return Err(ValidationError::new("rate", ConstraintKind::NotFinite));
        }
        Ok(Self { rate, mean })
    }

    /// Returns the rate `λ`.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the mean `1/λ`.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Draws one non-negative variate.
    #[inline]
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        sampling::exponential(self.mean, source)
    }
}

/// Snedecor's F with `d1` and `d2` degrees of freedom.
///
/// Degrees of freedom may be any positive real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FisherF {
    d1: f64,
    d2: f64,
}

impl FisherF {
    /// Creates an F distribution; both degrees of freedom must be positive.
    pub fn new(d1: f64, d2: f64) -> Result<Self, ValidationError> {
        let d1 = validation::positive("d1", d1)?;
        let d2 = validation::positive("d2", d2)?;
        Ok(Self { d1, d2 })
    }

    /// Returns the numerator degrees of freedom.
    #[inline]
    pub fn d1(&self) -> f64 {
        self.d1
    }

    /// Returns the denominator degrees of freedom.
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d2
    }

    /// Draws one non-negative variate.
    #[inline]
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        sampling::fisher_f(self.d1, self.d2, source)
    }
}

/// Normal (Gaussian) distribution.
///
/// # Examples
/// ```
/// use randvar_core::distribution::Normal;
/// use randvar_core::source::SeededSource;
///
/// let normal = Normal::new(1.0, 2.0).unwrap();
/// let mut source = SeededSource::from_seed(42);
/// let x = normal.sample(&mut source);
/// assert!(x.is_finite());
///
/// assert_eq!(Normal::default(), Normal::standard());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mu: f64,
    sigma: f64,
}

impl Normal {
    /// Creates a Normal distribution; requires finite `mu` and `sigma > 0`.
    pub fn new(mu: f64, sigma: f64) -> Result<Self, ValidationError> {
        let mu = validation::finite("mu", mu)?;
        let sigma = validation::positive("sigma", sigma)?;
        Ok(Self { mu, sigma })
    }

    /// The standard normal, `N(0, 1)`.
    pub const fn standard() -> Self {
        Self {
            mu: 0.0,
            sigma: 1.0,
        }
    }

    /// Returns the mean.
    #[inline]
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Returns the standard deviation.
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Draws one variate; consumes exactly two draws.
    #[inline]
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        sampling::normal(self.mu, self.sigma, source)
    }
}

impl Default for Normal {
    fn default() -> Self {
        Self::standard()
    }
}

/// Rayleigh distribution with scale `sigma`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rayleigh {
    sigma: f64,
}

impl Rayleigh {
    /// Creates a Rayleigh distribution; `sigma` must be positive.
    pub fn new(sigma: f64) -> Result<Self, ValidationError> {
        let sigma = validation::positive("sigma", sigma)?;
        Ok(Self { sigma })
    }

    /// Returns the scale.
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Draws one non-negative variate.
    #[inline]
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        sampling::rayleigh(self.sigma, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{ReplaySource, SeededSource};
    use approx::assert_relative_eq;

    fn mean_and_variance(samples: &[f64]) -> (f64, f64) {
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        (mean, var)
    }

    #[test]
    fn test_beta_validation_order() {
        assert_eq!(Beta::new(-1.0, -2.0).unwrap_err().parameter, "alpha");
        assert_eq!(Beta::new(1.0, 0.0).unwrap_err().parameter, "beta");
        assert_eq!(
            Beta::new(f64::NAN, 1.0).unwrap_err().kind,
            ConstraintKind::NotFinite
        );
    }

    #[test]
    fn test_beta_moments() {
        let beta = Beta::new(2.0, 5.0).unwrap();
        let mut source = SeededSource::from_seed(10);
        let samples: Vec<f64> = (0..100_000).map(|_| beta.sample(&mut source)).collect();
        assert!(samples.iter().all(|&x| x > 0.0 && x < 1.0));
        let (mean, _) = mean_and_variance(&samples);
        assert!((mean - 2.0 / 7.0).abs() < 0.005, "mean {mean}");
    }

    #[test]
    fn test_chi_squared_requires_positive_k() {
        assert_eq!(
            ChiSquared::new(0).unwrap_err(),
            ValidationError::new("k", ConstraintKind::NonPositive)
        );
    }

    #[test]
    fn test_chi_squared_moments() {
        let chi = ChiSquared::new(4).unwrap();
        let mut source = SeededSource::from_seed(11);
        let samples: Vec<f64> = (0..100_000).map(|_| chi.sample(&mut source)).collect();
        let (mean, var) = mean_and_variance(&samples);
        assert!((mean - 4.0).abs() < 0.05, "mean {mean}");
        assert!((var - 8.0).abs() < 0.3, "variance {var}");
    }

    #[test]
    fn test_continuous_uniform_range_and_mean() {
        let uniform = ContinuousUniform::new(-3.0, 5.0).unwrap();
        let mut source = SeededSource::from_seed(12);
        let samples: Vec<f64> = (0..100_000).map(|_| uniform.sample(&mut source)).collect();
        assert!(samples.iter().all(|&x| (-3.0..5.0).contains(&x)));
        let (mean, _) = mean_and_variance(&samples);
        assert!((mean - 1.0).abs() < 0.05, "mean {mean}");
    }

    #[test]
    fn test_continuous_uniform_validation() {
        assert_eq!(
            ContinuousUniform::new(1.0, 1.0).unwrap_err(),
            ValidationError::new("a", ConstraintKind::LowerNotLessThanUpper)
        );
        assert_eq!(
            ContinuousUniform::new(0.0, f64::INFINITY).unwrap_err(),
            ValidationError::new("b", ConstraintKind::NotFinite)
        );
    }

    #[test]
    fn test_exponential_stores_mean() {
        let exp = Exponential::new(0.5).unwrap();
        assert_eq!(exp.mean(), 2.0);
        let mut source = ReplaySource::new(vec![0.0]);
        assert_eq!(exp.sample(&mut source), 0.0);
    }

    #[test]
    fn test_exponential_rejects_subnormal_rate() {
        assert_eq!(
            Exponential::new(f64::from_bits(1)).unwrap_err(),
            ValidationError::new("rate", ConstraintKind::NotFinite)
        );
        assert_eq!(
            Exponential::new(0.0).unwrap_err().kind,
            ConstraintKind::NonPositive
        );
    }

    #[test]
    fn test_fisher_f_accepts_real_degrees_of_freedom() {
        let f = FisherF::new(2.5, 10.0).unwrap();
        let mut source = SeededSource::from_seed(13);
        for _ in 0..1000 {
            assert!(f.sample(&mut source) >= 0.0);
        }
        assert_eq!(FisherF::new(1.0, -1.0).unwrap_err().parameter, "d2");
    }

    #[test]
    fn test_normal_validation() {
        assert_eq!(
            Normal::new(f64::INFINITY, 1.0).unwrap_err(),
            ValidationError::new("mu", ConstraintKind::NotFinite)
        );
        assert_eq!(
            Normal::new(0.0, 0.0).unwrap_err(),
            ValidationError::new("sigma", ConstraintKind::NonPositive)
        );
    }

    #[test]
    fn test_normal_scales_standard_draw() {
        let normal = Normal::new(3.0, 2.0).unwrap();
        let mut a = SeededSource::from_seed(14);
        let mut b = SeededSource::from_seed(14);
        let standard = Normal::standard();
        for _ in 0..100 {
            assert_relative_eq!(
                normal.sample(&mut a),
                3.0 + 2.0 * standard.sample(&mut b),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_rayleigh_golden_value() {
        let rayleigh = Rayleigh::new(2.0).unwrap();
        let mut source = ReplaySource::new(vec![0.5]);
        let expected = 2.0 * (-2.0 * 0.5_f64.ln()).sqrt();
        assert_relative_eq!(rayleigh.sample(&mut source), expected, epsilon = 1e-15);
    }
}
