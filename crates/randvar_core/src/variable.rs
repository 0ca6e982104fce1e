//! # Batch Draw Protocol
//!
//! [`RandomVariable`] is the drawing interface shared by [`Distribution`]
//! and the derived variables in [`crate::derived`]. A variable is drawn
//! against an explicit [`UniformSource`]; nothing is looked up from global
//! state here.
//!
//! ```rust
//! use randvar_core::distribution::{Distribution, Poisson};
//! use randvar_core::source::SeededSource;
//! use randvar_core::variable::{Outcome, RandomVariable};
//!
//! let poisson = Distribution::from(Poisson::new(4.0).unwrap());
//! let mut source = SeededSource::from_seed(7);
//!
//! let batch = poisson.outcomes(&mut source, 100);
//! assert_eq!(batch.len(), 100);
//! assert!(batch.iter().all(|o| matches!(o, Outcome::Integer(k) if *k >= 0)));
//! ```

use std::fmt;

use crate::derived::{BinaryOp, Combined, Constant, Mapped};
use crate::distribution::Distribution;
use crate::source::UniformSource;

/// A single drawn value.
///
/// Integer-valued kinds (Bernoulli, Binomial, DiscreteUniform, Poisson,
/// Rademacher) yield [`Outcome::Integer`]; everything else yields
/// [`Outcome::Real`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Outcome {
    /// Integer outcome.
    Integer(i64),
    /// Real outcome.
    Real(f64),
}

impl Outcome {
    /// Returns the value as `f64`; integers widen.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Outcome::Integer(n) => n as f64,
            Outcome::Real(x) => x,
        }
    }

    /// Returns the integer value, or `None` for a real outcome.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Outcome::Integer(n) => Some(n),
            Outcome::Real(_) => None,
        }
    }

    /// Whether this is an integer outcome.
    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, Outcome::Integer(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Integer(n) => write!(f, "{}", n),
            Outcome::Real(x) => write!(f, "{}", x),
        }
    }
}

impl From<i64> for Outcome {
    fn from(n: i64) -> Self {
        Outcome::Integer(n)
    }
}

impl From<f64> for Outcome {
    fn from(x: f64) -> Self {
        Outcome::Real(x)
    }
}

/// Largest batch [`RandomVariable::outcomes`] reserves up front.
pub const PREALLOCATED_OUTCOMES: usize = 1 << 16;

/// Something that can be drawn from a uniform source.
///
/// Implementors provide [`outcome`](Self::outcome); batching, iteration and
/// composition are built on top of it. All methods consume draws from the
/// given source in order, so a batch is exactly the sequence of single
/// outcomes drawn one after another.
pub trait RandomVariable {
    /// Draws one outcome.
    fn outcome<S: UniformSource + ?Sized>(&self, source: &mut S) -> Outcome;

    /// Draws `count` outcomes in draw order.
    ///
    /// Up to [`PREALLOCATED_OUTCOMES`] outcomes are drawn into a single
    /// allocation; larger batches grow as they are drawn. `count == 0`
    /// returns an empty vector without touching the source.
    fn outcomes<S: UniformSource + ?Sized>(&self, source: &mut S, count: usize) -> Vec<Outcome> {
        let mut batch = Vec::with_capacity(count.min(PREALLOCATED_OUTCOMES));
        for _ in 0..count {
            batch.push(self.outcome(source));
        }
        batch
    }

    /// Lazy, infinite stream of outcomes.
    ///
    /// # Examples
    /// ```
    /// use randvar_core::distribution::{Distribution, Rademacher};
    /// use randvar_core::source::SeededSource;
    /// use randvar_core::variable::RandomVariable;
    ///
    /// let signs = Distribution::from(Rademacher);
    /// let mut source = SeededSource::from_seed(3);
    /// let total: i64 = signs
    ///     .outcome_iter(&mut source)
    ///     .take(10)
    ///     .filter_map(|o| o.as_i64())
    ///     .sum();
    /// assert!((-10..=10).contains(&total));
    /// ```
    fn outcome_iter<'a, S: UniformSource + ?Sized>(
        &'a self,
        source: &'a mut S,
    ) -> OutcomeIter<'a, Self, S>
    where
        Self: Sized,
    {
        OutcomeIter {
            variable: self,
            source,
        }
    }

    /// Alias of [`outcome`](Self::outcome).
    #[inline]
    fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> Outcome {
        self.outcome(source)
    }

    /// Alias of [`outcomes`](Self::outcomes).
    #[inline]
    fn samples<S: UniformSource + ?Sized>(&self, source: &mut S, count: usize) -> Vec<Outcome> {
        self.outcomes(source, count)
    }

    /// Applies `f` to every outcome.
    fn map<F>(self, f: F) -> Mapped<Self, F>
    where
        Self: Sized,
        F: Fn(f64) -> f64,
    {
        Mapped::new(self, f)
    }

    /// Combines this variable with `other` through `f`.
    ///
    /// Each outcome draws `self` first, then `other`.
    fn combine<B, F>(self, other: B, f: F) -> Combined<Self, B, F>
    where
        Self: Sized,
        B: RandomVariable,
        F: Fn(f64, f64) -> f64,
    {
        Combined::new(self, other, f)
    }

    /// Raises each outcome to the power drawn from `exponent`.
    ///
    /// The base is drawn before the exponent.
    fn pow<B>(self, exponent: B) -> Combined<Self, B, BinaryOp>
    where
        Self: Sized,
        B: RandomVariable,
    {
        let op: BinaryOp = f64::powf;
        self.combine(exponent, op)
    }

    /// Raises each outcome to a fixed power.
    fn powf(self, exponent: f64) -> Combined<Self, Constant, BinaryOp>
    where
        Self: Sized,
    {
        self.pow(Constant(exponent))
    }
}

/// Iterator returned by [`RandomVariable::outcome_iter`]. Never ends.
#[derive(Debug)]
pub struct OutcomeIter<'a, V, S: ?Sized> {
    variable: &'a V,
    source: &'a mut S,
}

impl<V: RandomVariable, S: UniformSource + ?Sized> Iterator for OutcomeIter<'_, V, S> {
    type Item = Outcome;

    #[inline]
    fn next(&mut self) -> Option<Outcome> {
        Some(self.variable.outcome(self.source))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl RandomVariable for Distribution {
    fn outcome<S: UniformSource + ?Sized>(&self, source: &mut S) -> Outcome {
        match self {
            Distribution::Bernoulli(d) => Outcome::Integer(i64::from(d.sample(source))),
            Distribution::Binomial(d) => Outcome::Integer(d.sample(source)),
            Distribution::DiscreteUniform(d) => Outcome::Integer(d.sample(source)),
            Distribution::Poisson(d) => Outcome::Integer(d.sample(source)),
            Distribution::Rademacher(d) => Outcome::Integer(d.sample(source)),
            Distribution::Beta(d) => Outcome::Real(d.sample(source)),
            Distribution::ChiSquared(d) => Outcome::Real(d.sample(source)),
            Distribution::ContinuousUniform(d) => Outcome::Real(d.sample(source)),
            Distribution::Exponential(d) => Outcome::Real(d.sample(source)),
            Distribution::F(d) => Outcome::Real(d.sample(source)),
            Distribution::Normal(d) => Outcome::Real(d.sample(source)),
            Distribution::Rayleigh(d) => Outcome::Real(d.sample(source)),
            Distribution::Arcsine(d) => Outcome::Real(d.sample(source)),
            Distribution::Bates(d) => Outcome::Real(d.sample(source)),
            Distribution::IrwinHall(d) => Outcome::Real(d.sample(source)),
            Distribution::Pareto(d) => Outcome::Real(d.sample(source)),
            Distribution::Rectangular(d) => Outcome::Real(d.sample(source)),
            Distribution::Triangular(d) => Outcome::Real(d.sample(source)),
        }
    }
}

impl<V: RandomVariable + ?Sized> RandomVariable for &V {
    #[inline]
    fn outcome<S: UniformSource + ?Sized>(&self, source: &mut S) -> Outcome {
        (**self).outcome(source)
    }
}
