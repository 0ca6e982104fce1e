//! Distribution kind tags.

use std::fmt;
use std::str::FromStr;

use crate::error::RandVarError;

/// Tag identifying a distribution kind.
///
/// Used at the loosely typed construction boundary
/// ([`construct`](super::construct)) and reported by
/// [`Distribution::kind`](super::Distribution::kind). Names are snake_case.
///
/// # Examples
/// ```
/// use randvar_core::distribution::DistributionKind;
///
/// let kind: DistributionKind = "chi_squared".parse().unwrap();
/// assert_eq!(kind, DistributionKind::ChiSquared);
/// assert_eq!(kind.parameter_names(), &["k"]);
/// assert_eq!(kind.to_string(), "chi_squared");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DistributionKind {
    /// Bernoulli trial.
    Bernoulli,
    /// Beta on (0, 1).
    Beta,
    /// Binomial count.
    Binomial,
    /// Chi-Squared.
    ChiSquared,
    /// Continuous uniform on [a, b).
    ContinuousUniform,
    /// Discrete uniform on {a, …, b}.
    DiscreteUniform,
    /// Exponential.
    Exponential,
    /// Snedecor's F.
    F,
    /// Normal (Gaussian).
    Normal,
    /// Poisson count.
    Poisson,
    /// Rayleigh.
    Rayleigh,
    /// Arcsine on [a, b].
    Arcsine,
    /// Bates (mean of n uniforms).
    Bates,
    /// Irwin-Hall (sum of n uniforms).
    IrwinHall,
    /// Pareto (type I).
    Pareto,
    /// Rademacher (±1).
    Rademacher,
    /// Rectangular on [−½, ½).
    Rectangular,
    /// Triangular on [a, b] with mode c.
    Triangular,
    /// Truncated normal; declared but has no sampler.
    TruncatedNormal,
}

impl DistributionKind {
    /// Every kind, in declaration order.
    pub const ALL: [DistributionKind; 19] = [
        Self::Bernoulli,
        Self::Beta,
        Self::Binomial,
        Self::ChiSquared,
        Self::ContinuousUniform,
        Self::DiscreteUniform,
        Self::Exponential,
        Self::F,
        Self::Normal,
        Self::Poisson,
        Self::Rayleigh,
        Self::Arcsine,
        Self::Bates,
        Self::IrwinHall,
        Self::Pareto,
        Self::Rademacher,
        Self::Rectangular,
        Self::Triangular,
        Self::TruncatedNormal,
    ];

    /// Snake-case name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bernoulli => "bernoulli",
            Self::Beta => "beta",
            Self::Binomial => "binomial",
            Self::ChiSquared => "chi_squared",
            Self::ContinuousUniform => "continuous_uniform",
            Self::DiscreteUniform => "discrete_uniform",
            Self::Exponential => "exponential",
            Self::F => "f",
            Self::Normal => "normal",
            Self::Poisson => "poisson",
            Self::Rayleigh => "rayleigh",
            Self::Arcsine => "arcsine",
            Self::Bates => "bates",
            Self::IrwinHall => "irwin_hall",
            Self::Pareto => "pareto",
            Self::Rademacher => "rademacher",
            Self::Rectangular => "rectangular",
            Self::Triangular => "triangular",
            Self::TruncatedNormal => "truncated_normal",
        }
    }

    /// Parameter names in construction order.
    pub fn parameter_names(&self) -> &'static [&'static str] {
        match self {
            Self::Bernoulli => &["p"],
            Self::Beta => &["alpha", "beta"],
            Self::Binomial => &["n", "p"],
            Self::ChiSquared => &["k"],
            Self::ContinuousUniform | Self::DiscreteUniform | Self::Arcsine => &["a", "b"],
            Self::Exponential => &["rate"],
            Self::F => &["d1", "d2"],
            Self::Normal => &["mu", "sigma"],
            Self::Poisson => &["lambda"],
            Self::Rayleigh => &["sigma"],
            Self::Bates | Self::IrwinHall => &["n"],
            Self::Pareto => &["scale", "shape"],
            Self::Rademacher | Self::Rectangular => &[],
            Self::Triangular => &["a", "c", "b"],
            Self::TruncatedNormal => &["mu", "sigma", "a", "b"],
        }
    }

    /// Number of parameters required at construction.
    #[inline]
    pub fn arity(&self) -> usize {
        self.parameter_names().len()
    }

    /// Whether outcomes of this kind are integers.
    pub fn is_discrete(&self) -> bool {
        matches!(
            self,
            Self::Bernoulli
                | Self::Binomial
                | Self::DiscreteUniform
                | Self::Poisson
                | Self::Rademacher
        )
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistributionKind {
    type Err = RandVarError;

    /// Accepts snake_case names, case-insensitively, with `-` allowed in
    /// place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalised)
            .ok_or_else(|| {
                RandVarError::InvalidArgument(format!("unknown distribution: {}", s))
            })
    }
}
