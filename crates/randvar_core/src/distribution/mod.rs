//! # Distribution Variant Model
//!
//! One validated parameter record per distribution kind, and the
//! [`Distribution`] enum that wraps them for uniform handling.
//!
//! ## Construction
//!
//! Records are built through their `new` constructors, which run every
//! domain check before any value exists:
//!
//! ```rust
//! use randvar_core::distribution::{Distribution, Normal};
//!
//! let normal = Distribution::from(Normal::new(0.0, 1.0).unwrap());
//! assert_eq!(normal.kind().name(), "normal");
//! ```
//!
//! The loosely typed boundary ([`construct`]) takes a kind tag and a slice of
//! [`ParamValue`]s, checks arity, and dispatches to the same constructors:
//!
//! ```rust
//! use randvar_core::distribution::{construct, DistributionKind, ParamValue};
//!
//! let binomial = construct(
//!     DistributionKind::Binomial,
//!     &[ParamValue::Integer(10), ParamValue::Real(0.3)],
//! )
//! .unwrap();
//! assert_eq!(binomial.kind(), DistributionKind::Binomial);
//! ```
//!
//! ## Module Structure
//!
//! - [`discrete`]: Bernoulli, Binomial, DiscreteUniform, Poisson, Rademacher
//! - [`continuous`]: Beta, ChiSquared, ContinuousUniform, Exponential, F,
//!   Normal, Rayleigh
//! - [`auxiliary`]: Arcsine, Bates, IrwinHall, Pareto, Rectangular,
//!   Triangular

pub mod auxiliary;
pub mod continuous;
pub mod discrete;
mod kind;
mod param;

pub use auxiliary::{Arcsine, Bates, IrwinHall, Pareto, Rectangular, Triangular};
pub use continuous::{Beta, ChiSquared, ContinuousUniform, Exponential, FisherF, Normal, Rayleigh};
pub use discrete::{Bernoulli, Binomial, DiscreteUniform, Poisson, Rademacher};
pub use kind::DistributionKind;
pub use param::ParamValue;

use crate::error::{RandVarError, Result};
use crate::validation::{integer, real};

/// A validated distribution of any supported kind.
///
/// Dispatch is by `match`; each variant wraps its parameter record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "DistributionSpec", into = "DistributionSpec")
)]
pub enum Distribution {
    /// Bernoulli trial.
    Bernoulli(Bernoulli),
    /// Beta on (0, 1).
    Beta(Beta),
    /// Binomial count.
    Binomial(Binomial),
    /// Chi-Squared.
    ChiSquared(ChiSquared),
    /// Continuous uniform.
    ContinuousUniform(ContinuousUniform),
    /// Discrete uniform.
    DiscreteUniform(DiscreteUniform),
    /// Exponential.
    Exponential(Exponential),
    /// Snedecor's F.
    F(FisherF),
    /// Normal.
    Normal(Normal),
    /// Poisson count.
    Poisson(Poisson),
    /// Rayleigh.
    Rayleigh(Rayleigh),
    /// Arcsine.
    Arcsine(Arcsine),
    /// Bates.
    Bates(Bates),
    /// Irwin-Hall.
    IrwinHall(IrwinHall),
    /// Pareto.
    Pareto(Pareto),
    /// Rademacher.
    Rademacher(Rademacher),
    /// Rectangular.
    Rectangular(Rectangular),
    /// Triangular.
    Triangular(Triangular),
}

macro_rules! impl_from_record {
    ($($variant:ident($record:ty)),* $(,)?) => {
        $(
            impl From<$record> for Distribution {
                fn from(record: $record) -> Self {
                    Distribution::$variant(record)
                }
            }
        )*
    };
}

impl_from_record!(
    Bernoulli(Bernoulli),
    Beta(Beta),
    Binomial(Binomial),
    ChiSquared(ChiSquared),
    ContinuousUniform(ContinuousUniform),
    DiscreteUniform(DiscreteUniform),
    Exponential(Exponential),
    F(FisherF),
    Normal(Normal),
    Poisson(Poisson),
    Rayleigh(Rayleigh),
    Arcsine(Arcsine),
    Bates(Bates),
    IrwinHall(IrwinHall),
    Pareto(Pareto),
    Rademacher(Rademacher),
    Rectangular(Rectangular),
    Triangular(Triangular),
);

impl Distribution {
    /// Returns the kind tag of this distribution.
    pub fn kind(&self) -> DistributionKind {
        match self {
            Self::Bernoulli(_) => DistributionKind::Bernoulli,
            Self::Beta(_) => DistributionKind::Beta,
            Self::Binomial(_) => DistributionKind::Binomial,
            Self::ChiSquared(_) => DistributionKind::ChiSquared,
            Self::ContinuousUniform(_) => DistributionKind::ContinuousUniform,
            Self::DiscreteUniform(_) => DistributionKind::DiscreteUniform,
            Self::Exponential(_) => DistributionKind::Exponential,
            Self::F(_) => DistributionKind::F,
            Self::Normal(_) => DistributionKind::Normal,
            Self::Poisson(_) => DistributionKind::Poisson,
            Self::Rayleigh(_) => DistributionKind::Rayleigh,
            Self::Arcsine(_) => DistributionKind::Arcsine,
            Self::Bates(_) => DistributionKind::Bates,
            Self::IrwinHall(_) => DistributionKind::IrwinHall,
            Self::Pareto(_) => DistributionKind::Pareto,
            Self::Rademacher(_) => DistributionKind::Rademacher,
            Self::Rectangular(_) => DistributionKind::Rectangular,
            Self::Triangular(_) => DistributionKind::Triangular,
        }
    }

    /// Returns the `(name, value)` pairs in construction order.
    ///
    /// Feeding the values back through [`construct`] rebuilds an equal
    /// distribution.
    ///
    /// # Examples
    /// ```
    /// use randvar_core::distribution::{Distribution, Exponential, ParamValue};
    ///
    /// let exp = Distribution::from(Exponential::new(2.0).unwrap());
    /// assert_eq!(exp.parameters(), vec![("rate", ParamValue::Real(2.0))]);
    /// ```
    pub fn parameters(&self) -> Vec<(&'static str, ParamValue)> {
        let values: Vec<ParamValue> = match self {
            Self::Bernoulli(d) => vec![d.p().into()],
            Self::Beta(d) => vec![d.alpha().into(), d.beta().into()],
            Self::Binomial(d) => vec![d.n().into(), d.p().into()],
            Self::ChiSquared(d) => vec![d.k().into()],
            Self::ContinuousUniform(d) => vec![d.a().into(), d.b().into()],
            Self::DiscreteUniform(d) => vec![d.a().into(), d.b().into()],
            Self::Exponential(d) => vec![d.rate().into()],
            Self::F(d) => vec![d.d1().into(), d.d2().into()],
            Self::Normal(d) => vec![d.mu().into(), d.sigma().into()],
            Self::Poisson(d) => vec![d.lambda().into()],
            Self::Rayleigh(d) => vec![d.sigma().into()],
            Self::Arcsine(d) => vec![d.a().into(), d.b().into()],
            Self::Bates(d) => vec![d.n().into()],
            Self::IrwinHall(d) => vec![d.n().into()],
            Self::Pareto(d) => vec![d.scale().into(), d.shape().into()],
            Self::Rademacher(_) | Self::Rectangular(_) => Vec::new(),
            Self::Triangular(d) => vec![d.a().into(), d.c().into(), d.b().into()],
        };
        self.kind()
            .parameter_names()
            .iter()
            .copied()
            .zip(values)
            .collect()
    }
}

/// Builds a distribution from a kind tag and loosely typed parameters.
///
/// # Errors
/// - [`RandVarError::NotImplemented`] for [`DistributionKind::TruncatedNormal`]
/// - [`RandVarError::InvalidArgument`] when `params.len()` differs from
///   [`DistributionKind::arity`]
/// - [`RandVarError::Validation`] for the first parameter that fails its
///   domain check, in parameter order
///
/// # Examples
/// ```
/// use randvar_core::distribution::{construct, DistributionKind, ParamValue};
/// use randvar_core::error::RandVarError;
/// use randvar_core::validation::{ConstraintKind, ValidationError};
///
/// let err = construct(
///     DistributionKind::Beta,
///     &[ParamValue::Real(-1.0), ParamValue::Real(2.0)],
/// )
/// .unwrap_err();
/// assert_eq!(
///     err,
///     RandVarError::Validation(ValidationError::new("alpha", ConstraintKind::NonPositive))
/// );
/// ```
pub fn construct(kind: DistributionKind, params: &[ParamValue]) -> Result<Distribution> {
    if kind == DistributionKind::TruncatedNormal {
        return Err(not_implemented());
    }
    if params.len() != kind.arity() {
        return Err(RandVarError::InvalidArgument(format!(
            "{} expects {} parameter(s) [{}], got {}",
            kind,
            kind.arity(),
            kind.parameter_names().join(", "),
            params.len()
        )));
    }

    build(kind, params).map_err(|err| {
        if let RandVarError::Validation(rejected) = &err {
            tracing::trace!(
                distribution = %kind,
                parameter = rejected.parameter,
                constraint = ?rejected.kind,
                "Distribution construction rejected"
            );
        }
        err
    })
}

fn not_implemented() -> RandVarError {
    RandVarError::NotImplemented("truncated normal generator")
}

/// Dispatches to the record constructors; arity has already been checked.
fn build(kind: DistributionKind, params: &[ParamValue]) -> Result<Distribution> {
    let r = |i: usize| real(params[i]);
    let distribution: Distribution = match kind {
        DistributionKind::Bernoulli => Bernoulli::new(r(0))?.into(),
        DistributionKind::Beta => Beta::new(r(0), r(1))?.into(),
        DistributionKind::Binomial => Binomial::new(integer("n", params[0])?, r(1))?.into(),
        DistributionKind::ChiSquared => ChiSquared::new(integer("k", params[0])?)?.into(),
        DistributionKind::ContinuousUniform => ContinuousUniform::new(r(0), r(1))?.into(),
        DistributionKind::DiscreteUniform => {
            let a = integer("a", params[0])?;
            let b = integer("b", params[1])?;
            DiscreteUniform::new(a, b)?.into()
        }
        DistributionKind::Exponential => Exponential::new(r(0))?.into(),
        DistributionKind::F => FisherF::new(r(0), r(1))?.into(),
        DistributionKind::Normal => Normal::new(r(0), r(1))?.into(),
        DistributionKind::Poisson => Poisson::new(r(0))?.into(),
        DistributionKind::Rayleigh => Rayleigh::new(r(0))?.into(),
        DistributionKind::Arcsine => Arcsine::new(r(0), r(1))?.into(),
        DistributionKind::Bates => Bates::new(integer("n", params[0])?)?.into(),
        DistributionKind::IrwinHall => IrwinHall::new(integer("n", params[0])?)?.into(),
        DistributionKind::Pareto => Pareto::new(r(0), r(1))?.into(),
        DistributionKind::Rademacher => Rademacher.into(),
        DistributionKind::Rectangular => Rectangular.into(),
        DistributionKind::Triangular => Triangular::new(r(0), r(1), r(2))?.into(),
        DistributionKind::TruncatedNormal => return Err(not_implemented()),
    };
    Ok(distribution)
}

/// Serialisable description of a distribution: its kind and parameters.
///
/// With the `serde` feature, [`Distribution`] serialises through this
/// shape and deserialises through [`construct`], so invalid parameters are
/// rejected on the way in.
///
/// ```text
/// {"kind": "normal", "params": [0.0, 1.0]}
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistributionSpec {
    /// Distribution kind.
    pub kind: DistributionKind,
    /// Parameters in construction order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: Vec<ParamValue>,
}

impl From<Distribution> for DistributionSpec {
    fn from(distribution: Distribution) -> Self {
        Self {
            kind: distribution.kind(),
            params: distribution
                .parameters()
                .into_iter()
                .map(|(_, value)| value)
                .collect(),
        }
    }
}

impl TryFrom<DistributionSpec> for Distribution {
    type Error = RandVarError;

    fn try_from(spec: DistributionSpec) -> Result<Self> {
        construct(spec.kind, &spec.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ConstraintKind, ValidationError};

    fn reals(values: &[f64]) -> Vec<ParamValue> {
        values.iter().copied().map(ParamValue::Real).collect()
    }

    #[test]
    fn test_construct_every_kind() {
        let cases: Vec<(DistributionKind, Vec<ParamValue>)> = vec![
            (DistributionKind::Bernoulli, reals(&[0.3])),
            (DistributionKind::Beta, reals(&[2.0, 3.0])),
            (
                DistributionKind::Binomial,
                vec![ParamValue::Integer(10), ParamValue::Real(0.5)],
            ),
            (DistributionKind::ChiSquared, vec![ParamValue::Integer(3)]),
            (DistributionKind::ContinuousUniform, reals(&[0.0, 1.0])),
            (
                DistributionKind::DiscreteUniform,
                vec![ParamValue::Integer(1), ParamValue::Integer(6)],
            ),
            (DistributionKind::Exponential, reals(&[1.5])),
            (DistributionKind::F, reals(&[3.0, 7.0])),
            (DistributionKind::Normal, reals(&[0.0, 1.0])),
            (DistributionKind::Poisson, reals(&[4.0])),
            (DistributionKind::Rayleigh, reals(&[1.0])),
            (DistributionKind::Arcsine, reals(&[0.0, 1.0])),
            (DistributionKind::Bates, vec![ParamValue::Integer(4)]),
            (DistributionKind::IrwinHall, vec![ParamValue::Integer(4)]),
            (DistributionKind::Pareto, reals(&[1.0, 2.0])),
            (DistributionKind::Rademacher, vec![]),
            (DistributionKind::Rectangular, vec![]),
            (DistributionKind::Triangular, reals(&[0.0, 0.5, 1.0])),
        ];
        for (kind, params) in cases {
            let distribution = construct(kind, &params).unwrap();
            assert_eq!(distribution.kind(), kind);
            let round_trip: Vec<ParamValue> = distribution
                .parameters()
                .into_iter()
                .map(|(_, v)| v)
                .collect();
            assert_eq!(construct(kind, &round_trip).unwrap(), distribution);
        }
    }

    #[test]
    fn test_integer_parameters_widen_to_real() {
        let normal = construct(
            DistributionKind::Normal,
            &[ParamValue::Integer(1), ParamValue::Integer(2)],
        )
        .unwrap();
        assert_eq!(
            normal.parameters(),
            vec![("mu", ParamValue::Real(1.0)), ("sigma", ParamValue::Real(2.0))]
        );
    }

    #[test]
    fn test_real_rejected_for_integer_parameter() {
        let err = construct(
            DistributionKind::Binomial,
            &[ParamValue::Real(10.0), ParamValue::Real(0.5)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            RandVarError::Validation(ValidationError::new("n", ConstraintKind::NotInteger))
        );
    }

    #[test]
    fn test_wrong_arity() {
        let err = construct(DistributionKind::Normal, &reals(&[0.0])).unwrap_err();
        match err {
            RandVarError::InvalidArgument(msg) => {
                assert_eq!(msg, "normal expects 2 parameter(s) [mu, sigma], got 1");
            }
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
        assert!(matches!(
            construct(DistributionKind::Rademacher, &reals(&[1.0])),
            Err(RandVarError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_truncated_normal_not_implemented() {
        let err = construct(DistributionKind::TruncatedNormal, &reals(&[0.0, 1.0, -1.0, 1.0]))
            .unwrap_err();
        assert!(matches!(err, RandVarError::NotImplemented(_)));
    }

    #[test]
    fn test_typed_construction() {
        let d: Distribution = Poisson::new(3.0).unwrap().into();
        assert_eq!(d, Distribution::Poisson(Poisson::new(3.0).unwrap()));
        assert_eq!(d.kind(), DistributionKind::Poisson);
    }

    #[test]
    fn test_spec_round_trip() {
        let d = construct(DistributionKind::Triangular, &reals(&[0.0, 0.25, 1.0])).unwrap();
        let spec = DistributionSpec::from(d.clone());
        assert_eq!(spec.kind, DistributionKind::Triangular);
        assert_eq!(spec.params, reals(&[0.0, 0.25, 1.0]));
        assert_eq!(Distribution::try_from(spec).unwrap(), d);
    }

    #[test]
    fn test_invalid_spec_is_rejected() {
        let spec = DistributionSpec {
            kind: DistributionKind::Poisson,
            params: reals(&[-2.0]),
        };
        assert!(matches!(
            Distribution::try_from(spec),
            Err(RandVarError::Validation(_))
        ));
    }
}
