//! # randvar_core: Random Variate Generation Engine
//!
//! Validated probability distributions and the algorithms that draw from
//! them, all built on a single stream of uniform variates.
//!
//! ## Layers
//!
//! - Uniform source (`source`): `UniformSource` trait, seeded, replay and
//!   shared implementations
//! - Validation rules (`validation`): parameter domain checks and
//!   `ValidationError`
//! - Distribution variant model (`distribution`): one validated record per
//!   kind, the `Distribution` enum and the `construct` boundary
//! - Sampling algorithms (`sampling`): one function per kind, generic over
//!   the source
//! - Batch draw protocol (`variable`): `RandomVariable` and `Outcome`
//! - Derived variables (`derived`) and batch statistics (`stats`)
//! - Process-wide facade (`api`)
//! - Error types: `RandVarError` (`error`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use randvar_core::distribution::{Distribution, Normal};
//! use randvar_core::source::SeededSource;
//! use randvar_core::stats::SampleStatistics;
//! use randvar_core::variable::RandomVariable;
//!
//! let normal = Distribution::from(Normal::new(10.0, 2.0).unwrap());
//! let mut source = SeededSource::from_seed(2024);
//!
//! let batch = normal.outcomes(&mut source, 10_000);
//! let mean = batch.mean().unwrap();
//! # assert!((mean - 10.0).abs() < 0.1);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation for distributions (as kind and parameters),
//!   outcomes, summaries and constraint kinds

#![warn(missing_docs)]

pub mod api;
pub mod derived;
pub mod distribution;
pub mod error;
pub mod sampling;
pub mod source;
pub mod stats;
pub mod validation;
pub mod variable;

pub use distribution::{construct, Distribution, DistributionKind, ParamValue};
pub use error::{RandVarError, Result};
pub use source::{Seed, SeededSource, SharedSource, UniformSource};
pub use variable::{Outcome, RandomVariable};
