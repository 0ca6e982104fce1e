//! Integer-valued distributions.

use crate::sampling;
use crate::source::UniformSource;
use crate::validation::{self, ValidationError};

/// Bernoulli trial with success probability `p`.
///
/// # Examples
/// ```
/// use randvar_core::distribution::Bernoulli;
///
/// let coin = Bernoulli::new(0.5).unwrap();
/// assert_eq!(coin.p(), 0.5);
/// assert!(Bernoulli::new(1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bernoulli {
    p: f64,
}

impl Bernoulli {
    /// Creates a Bernoulli trial; requires `0 <= p <= 1`.
    pub fn new(p: f64) -> Result<Self, ValidationError> {
        let p = validation::probability("p", p)?;
        Ok(Self { p })
    }

    /// Returns the success probability.
    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Draws one trial.
    #[inline]
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> bool {
        sampling::bernoulli(self.p, source)
    }
}

/// Number of successes in `n` independent trials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binomial {
    n: i64,
    p: f64,
}

impl Binomial {
    /// Creates a Binomial distribution.
    ///
    /// # Arguments
    /// * `n` - Number of trials (must be non-negative)
    /// * `p` - Success probability of each trial (must lie in `[0, 1]`)
    ///
    /// # Examples
    /// ```
    /// use randvar_core::distribution::Binomial;
    /// use randvar_core::validation::ConstraintKind;
    ///
    /// assert!(Binomial::new(10, 0.3).is_ok());
    /// let err = Binomial::new(-1, 0.3).unwrap_err();
    /// assert_eq!(err.kind, ConstraintKind::Negative);
    /// ```
    pub fn new(n: i64, p: f64) -> Result<Self, ValidationError> {
        let n = validation::non_negative_integer("n", n)?;
        let p = validation::probability("p", p)?;
        Ok(Self { n, p })
    }

    /// Returns the number of trials.
    #[inline]
    pub fn n(&self) -> i64 {
        self.n
    }

    /// Returns the success probability.
    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Draws one count in `[0, n]`.
    #[inline]
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> i64 {
        sampling::binomial(self.n, self.p, source)
    }
}

/// Uniform over the integers `a..=b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscreteUniform {
    a: i64,
    b: i64,
}

impl DiscreteUniform {
    /// Creates a discrete uniform distribution; requires `a < b`.
    pub fn new(a: i64, b: i64) -> Result<Self, ValidationError> {
        validation::less_than("a", a, b)?;
        Ok(Self { a, b })
    }

    /// Returns the lower bound (inclusive).
    #[inline]
    pub fn a(&self) -> i64 {
        self.a
    }

    /// Returns the upper bound (inclusive).
    #[inline]
    pub fn b(&self) -> i64 {
        self.b
    }

    /// Draws one integer in `[a, b]`.
    #[inline]
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> i64 {
        sampling::discrete_uniform(self.a, self.b, source)
    }
}

/// Poisson count with mean `lambda`.
///
/// `lambda` is capped at [`LAMBDA_MAX`](crate::sampling::LAMBDA_MAX) so that
/// every outcome fits in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson {
    lambda: f64,
}

impl Poisson {
    /// Creates a Poisson distribution; requires `0 < lambda <= LAMBDA_MAX`.
    ///
    /// # Examples
    /// ```
    /// use randvar_core::distribution::Poisson;
    /// use randvar_core::sampling::LAMBDA_MAX;
    /// use randvar_core::validation::ConstraintKind;
    ///
    /// assert!(Poisson::new(LAMBDA_MAX).is_ok());
    /// assert_eq!(Poisson::new(0.0).unwrap_err().kind, ConstraintKind::NonPositive);
    /// assert_eq!(Poisson::new(f64::MAX).unwrap_err().kind, ConstraintKind::TooLarge);
    /// ```
    pub fn new(lambda: f64) -> Result<Self, ValidationError> {
        let lambda = validation::positive("lambda", lambda)?;
        let lambda = validation::at_most("lambda", lambda, sampling::LAMBDA_MAX)?;
        Ok(Self { lambda })
    }

    /// Returns the mean.
    #[inline]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Draws one non-negative count.
    #[inline]
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> i64 {
        sampling::poisson(self.lambda, source)
    }
}

/// Fair ±1 sign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rademacher;

impl Rademacher {
    /// Creates the Rademacher distribution. It has no parameters.
    pub fn new() -> Self {
        Self
    }

    /// Draws `-1` or `1`.
    #[inline]
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> i64 {
        sampling::rademacher(source)
    }
}
