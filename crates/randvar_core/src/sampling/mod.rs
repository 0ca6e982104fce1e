//! # Sampling Algorithms
//!
//! One function per distribution kind, mapping parameters and draws from a
//! [`UniformSource`](crate::source::UniformSource) to an outcome. Each
//! function is deterministic given its draws; replaying the same draw
//! sequence through a [`ReplaySource`](crate::source::ReplaySource)
//! reproduces the same outcome exactly.
//!
//! Parameters are assumed valid: the functions do not re-check the domain
//! constraints enforced at construction by [`crate::distribution`].
//!
//! ## Methods
//!
//! | Distribution | Method | Draws per outcome |
//! |---|---|---|
//! | Bernoulli, Rademacher | threshold | 1 |
//! | Exponential, Rayleigh, Pareto, Triangular | inverse CDF | 1 |
//! | Continuous/Discrete Uniform, Arcsine, Rectangular | direct transform | 1 |
//! | Irwin-Hall, Bates | sum / mean of draws | n |
//! | Normal | Box–Muller | 2 |
//! | Beta, Chi-Squared, F | Marsaglia–Tsang Gamma | variable |
//! | Poisson | multiplication / PTRS | variable |
//! | Binomial | inversion / BTRS | variable |

mod binomial;
mod gamma;
mod normal;
mod poisson;
mod special;
mod transform;
mod uniform;

pub use binomial::binomial;
pub use gamma::{beta, chi_squared, fisher_f};
pub use normal::{normal, standard_normal};
pub use poisson::{poisson, LAMBDA_MAX};
pub use transform::{
    bates, bernoulli, exponential, irwin_hall, pareto, rademacher, rayleigh, triangular,
    MAX_SUMMANDS,
};
pub use uniform::{arcsine, continuous_uniform, discrete_uniform, rectangular};
