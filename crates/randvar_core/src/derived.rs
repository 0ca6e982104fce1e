//! # Derived Random Variables
//!
//! Random variables built from other random variables: constants, pointwise
//! maps and binary combinations. Arithmetic operators are overloaded so that
//! variables compose like numbers:
//!
//! ```rust
//! use randvar_core::distribution::{Distribution, Normal, Rademacher};
//! use randvar_core::source::SeededSource;
//! use randvar_core::variable::RandomVariable;
//!
//! let noise = Distribution::from(Normal::new(0.0, 0.1).unwrap());
//! let sign = Distribution::from(Rademacher);
//! let signal = sign * 2.0 + noise;
//!
//! let mut source = SeededSource::from_seed(9);
//! let x = signal.outcome(&mut source).as_f64();
//! assert!(x.abs() > 1.0);
//! ```
//!
//! Derived outcomes are always [`Outcome::Real`]. A combination draws its
//! left operand before its right one.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::distribution::Distribution;
use crate::source::UniformSource;
use crate::variable::{Outcome, RandomVariable};

/// Function pointer used by the overloaded binary operators.
pub type BinaryOp = fn(f64, f64) -> f64;

/// Function pointer used by unary negation.
pub type UnaryOp = fn(f64) -> f64;

/// Degenerate variable that always yields the same value without drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant(pub f64);

impl RandomVariable for Constant {
    #[inline]
    fn outcome<S: UniformSource + ?Sized>(&self, _source: &mut S) -> Outcome {
        Outcome::Real(self.0)
    }
}

/// Pointwise map `f(X)`; see [`RandomVariable::map`].
#[derive(Clone)]
pub struct Mapped<V, F> {
    inner: V,
    f: F,
}

impl<V, F> Mapped<V, F> {
    /// Wraps `inner` so that each outcome is passed through `f`.
    pub fn new(inner: V, f: F) -> Self {
        Self { inner, f }
    }

    /// Returns the underlying variable.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: RandomVariable, F: Fn(f64) -> f64> RandomVariable for Mapped<V, F> {
    #[inline]
    fn outcome<S: UniformSource + ?Sized>(&self, source: &mut S) -> Outcome {
        Outcome::Real((self.f)(self.inner.outcome(source).as_f64()))
    }
}

impl<V: fmt::Debug, F> fmt::Debug for Mapped<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapped")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Binary combination `f(A, B)`; see [`RandomVariable::combine`].
#[derive(Clone)]
pub struct Combined<A, B, F> {
    left: A,
    right: B,
    f: F,
}

impl<A, B, F> Combined<A, B, F> {
    /// Combines `left` and `right` through `f`.
    pub fn new(left: A, right: B, f: F) -> Self {
        Self { left, right, f }
    }

    /// Returns the left operand.
    pub fn left(&self) -> &A {
        &self.left
    }

    /// Returns the right operand.
    pub fn right(&self) -> &B {
        &self.right
    }
}

impl<A, B, F> RandomVariable for Combined<A, B, F>
where
    A: RandomVariable,
    B: RandomVariable,
    F: Fn(f64, f64) -> f64,
{
    #[inline]
    fn outcome<S: UniformSource + ?Sized>(&self, source: &mut S) -> Outcome {
        let a = self.left.outcome(source).as_f64();
        let b = self.right.outcome(source).as_f64();
        Outcome::Real((self.f)(a, b))
    }
}

impl<A: fmt::Debug, B: fmt::Debug, F> fmt::Debug for Combined<A, B, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combined")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish_non_exhaustive()
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:tt; [$($gen:tt)*] $ty:ty) => {
        impl<$($gen)* Rhs: RandomVariable> $trait<Rhs> for $ty {
            type Output = Combined<Self, Rhs, BinaryOp>;

            fn $method(self, rhs: Rhs) -> Self::Output {
                let op: BinaryOp = |a, b| a $op b;
                self.combine(rhs, op)
            }
        }

        impl<$($gen)*> $trait<f64> for $ty {
            type Output = Combined<Self, Constant, BinaryOp>;

            fn $method(self, rhs: f64) -> Self::Output {
                let op: BinaryOp = |a, b| a $op b;
                self.combine(Constant(rhs), op)
            }
        }

        impl<$($gen)*> $trait<$ty> for f64 {
            type Output = Combined<Constant, $ty, BinaryOp>;

            fn $method(self, rhs: $ty) -> Self::Output {
                let op: BinaryOp = |a, b| a $op b;
                Constant(self).combine(rhs, op)
            }
        }
    };
}

macro_rules! impl_arithmetic {
    ($([$($gen:tt)*] $ty:ty);* $(;)?) => {
        $(
            impl_binary_op!(Add, add, +; [$($gen)*] $ty);
            impl_binary_op!(Sub, sub, -; [$($gen)*] $ty);
            impl_binary_op!(Mul, mul, *; [$($gen)*] $ty);
            impl_binary_op!(Div, div, /; [$($gen)*] $ty);
            impl_binary_op!(Rem, rem, %; [$($gen)*] $ty);

            impl<$($gen)*> Neg for $ty {
                type Output = Mapped<Self, UnaryOp>;

                fn neg(self) -> Self::Output {
                    let op: UnaryOp = |x| -x;
                    self.map(op)
                }
            }
        )*
    };
}

impl_arithmetic! {
    [] Distribution;
    [] Constant;
    [V: RandomVariable, F: Fn(f64) -> f64,] Mapped<V, F>;
    [A: RandomVariable, B: RandomVariable, F: Fn(f64, f64) -> f64,] Combined<A, B, F>;
}
