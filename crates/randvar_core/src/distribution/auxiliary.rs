//! Auxiliary real-valued distributions: Arcsine, Bates, Irwin-Hall, Pareto,
//! Rectangular and Triangular.

use crate::sampling;
use crate::source::UniformSource;
use crate::validation::{self, ValidationError};

/// Arcsine distribution on `[a, b]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arcsine {
    a: f64,
    b: f64,
}

impl Arcsine {
    /// Creates an Arcsine distribution; requires finite `a < b`.
    pub fn new(a: f64, b: f64) -> Result<Self, ValidationError> {
        let a = validation::finite("a", a)?;
        let b = validation::finite("b", b)?;
        validation::less_than("a", a, b)?;
        Ok(Self { a, b })
    }

    /// Returns the lower bound.
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the upper bound.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Draws one value in `[a, b]`.
    #[inline]
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        sampling::arcsine(self.a, self.b, source)
    }
}

/// Bates distribution: mean of `n` standard uniforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bates {
    n: i64,
}

impl Bates {
    /// Creates a Bates distribution; requires `0 < n <= MAX_SUMMANDS`.
    pub fn new(n: i64) -> Result<Self, ValidationError> {
        let n = validation::positive_integer("n", n)?;
        let n = validation::at_most("n", n, sampling::MAX_SUMMANDS)?;
        Ok(Self { n })
    }

    /// Returns the number of averaged draws.
    #[inline]
    pub fn n(&self) -> i64 {
        self.n
    }

    /// Draws one value in `[0, 1)`; consumes `n` draws.
    #[inline]
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        sampling::bates(self.n, source)
    }
}

/// Irwin-Hall distribution: sum of `n` standard uniforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrwinHall {
    n: i64,
}

impl IrwinHall {
    /// Creates an Irwin-Hall distribution; requires
    /// `0 < n <= MAX_SUMMANDS`.
    pub fn new(n: i64) -> Result<Self, ValidationError> {
        let n = validation::positive_integer("n", n)?;
        let n = validation::at_most("n", n, sampling::MAX_SUMMANDS)?;
        Ok(Self { n })
    }

    /// Returns the number of summed draws.
    #[inline]
    pub fn n(&self) -> i64 {
        self.n
    }

    /// Draws one value in `[0, n)`; consumes `n` draws.
    #[inline]
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        sampling::irwin_hall(self.n, source)
    }
}

/// Pareto (type I) distribution with scale `x_m` and shape `α`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pareto {
    scale: f64,
    shape: f64,
}

impl Pareto {
    /// Creates a Pareto distribution; scale and shape must be positive.
    pub fn new(scale: f64, shape: f64) -> Result<Self, ValidationError> {
        let scale = validation::positive("scale", scale)?;
        let shape = validation::positive("shape", shape)?;
        Ok(Self { scale, shape })
    }

    /// Returns the scale `x_m`, the smallest possible outcome.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the shape `α`.
    #[inline]
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Draws one value no smaller than the scale.
    #[inline]
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        sampling::pareto(self.scale, self.shape, source)
    }
}

/// Standard uniform shifted onto `[−½, ½)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rectangular;

impl Rectangular {
    /// Creates the Rectangular distribution. It has no parameters.
    pub fn new() -> Self {
        Self
    }

    /// Draws one value in `[−½, ½)`.
    #[inline]
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        sampling::rectangular(source)
    }
}

/// Triangular distribution on `[a, b]` with mode `c`.
///
/// # Examples
/// ```
/// use randvar_core::distribution::Triangular;
/// use randvar_core::validation::ConstraintKind;
///
/// let tri = Triangular::new(0.0, 1.0, 4.0).unwrap();
/// assert_eq!(tri.c(), 1.0);
///
/// let err = Triangular::new(0.0, 5.0, 4.0).unwrap_err();
/// assert_eq!(err.parameter, "c");
/// assert_eq!(err.kind, ConstraintKind::NotWithinBounds);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangular {
    a: f64,
    c: f64,
    b: f64,
}

impl Triangular {
    /// Creates a Triangular distribution.
    ///
    /// # Arguments
    /// * `a` - Lower bound (finite, strictly below `b`)
    /// * `c` - Mode (finite, within `[a, b]`)
    /// * `b` - Upper bound (finite)
    pub fn new(a: f64, c: f64, b: f64) -> Result<Self, ValidationError> {
        let a = validation::finite("a", a)?;
        let c = validation::finite("c", c)?;
        let b = validation::finite("b", b)?;
        validation::less_than("a", a, b)?;
        let c = validation::within("c", c, a, b)?;
        Ok(Self { a, c, b })
    }

    /// Returns the lower bound.
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the mode.
    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Returns the upper bound.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Draws one value in `[a, b]`.
    #[inline]
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        sampling::triangular(self.a, self.c, self.b, source)
    }
}
