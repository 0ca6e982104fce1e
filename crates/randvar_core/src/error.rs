//! Error types for the random variable engine.
//!
//! This module provides:
//! - `RandVarError`: Top-level error returned by construction, batch draws
//!   and the process-wide facade
//!
//! Parameter-level failures are described by
//! [`ValidationError`](crate::validation::ValidationError) and are wrapped by
//! `RandVarError::Validation`.

use thiserror::Error;

use crate::validation::ValidationError;

/// Categorised engine errors.
///
/// Every variant reflects a caller contract violation; none are transient
/// and none are retried internally.
///
/// # Variants
/// - `Validation`: A distribution parameter failed its domain check
/// - `InvalidArgument`: Negative outcome count, wrong parameter arity or
///   unknown distribution name
/// - `UninitializedGenerator`: The process-wide source was used before `init`
/// - `NotImplemented`: A declared generator has no sampler
///
/// # Examples
/// ```
/// use randvar_core::error::RandVarError;
///
/// let err = RandVarError::InvalidArgument("the number of outcomes cannot be negative".into());
/// assert_eq!(
///     err.to_string(),
///     "Invalid argument: the number of outcomes cannot be negative"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RandVarError {
    /// Parameter validation failed during construction.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Invalid call argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Sampling attempted before the process-wide generator was initialised.
    #[error("Uniform source used before initialisation; call `init` first")]
    UninitializedGenerator,

    /// The generator is declared but has no sampling algorithm.
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RandVarError>;
