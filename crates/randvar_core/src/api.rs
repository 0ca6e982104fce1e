//! # Process-wide Facade
//!
//! A thin layer over one [`SharedSource`] held in a process-wide
//! `OnceLock`. It mirrors the module-level interface of a scripting
//! binding: initialise once, then construct and draw without passing a
//! source around.
//!
//! Every call other than [`init`] fails with
//! [`RandVarError::UninitializedGenerator`] until [`init`] has run.
//!
//! ```rust
//! use randvar_core::api;
//! use randvar_core::distribution::{DistributionKind, ParamValue};
//!
//! api::init(Some(42));
//! let normal = api::construct(
//!     DistributionKind::Normal,
//!     &[ParamValue::Real(0.0), ParamValue::Real(1.0)],
//! )
//! .unwrap();
//!
//! let first = api::outcomes(&normal, 5).unwrap();
//! api::set_seed(42).unwrap();
//! assert_eq!(api::outcomes(&normal, 5).unwrap(), first);
//! ```

use std::sync::OnceLock;

use crate::distribution::{self, Distribution, DistributionKind, ParamValue};
use crate::error::{RandVarError, Result};
use crate::source::{Seed, SharedSource};
use crate::variable::{Outcome, RandomVariable};

static GLOBAL: OnceLock<SharedSource> = OnceLock::new();

/// Initialises the process-wide source and returns the seed in effect.
///
/// The first call creates the source, seeded with `seed` or from entropy.
/// Later calls reseed only when a seed is given; `init(None)` after
/// initialisation leaves the stream untouched.
pub fn init(seed: Option<Seed>) -> Seed {
    let mut created = false;
    let source = GLOBAL.get_or_init(|| {
        created = true;
        let source = match seed {
            Some(seed) => SharedSource::from_seed(seed),
            None => SharedSource::from_entropy(),
        };
        tracing::debug!(seed = source.seed(), "Initialised process-wide uniform source");
        source
    });
    if !created {
        if let Some(seed) = seed {
            source.set_seed(seed);
        }
    }
    source.seed()
}

/// Returns a handle to the process-wide source for explicit passing.
pub fn global() -> Result<SharedSource> {
    GLOBAL
        .get()
        .cloned()
        .ok_or(RandVarError::UninitializedGenerator)
}

fn source() -> Result<&'static SharedSource> {
    GLOBAL.get().ok_or(RandVarError::UninitializedGenerator)
}

/// Returns the current seed.
pub fn seed() -> Result<Seed> {
    Ok(source()?.seed())
}

/// Reseeds the process-wide stream.
pub fn set_seed(seed: Seed) -> Result<()> {
    source()?.set_seed(seed);
    Ok(())
}

/// Reseeds from entropy and returns the new seed.
pub fn new_seed() -> Result<Seed> {
    Ok(source()?.new_seed())
}

/// Builds a distribution; see [`distribution::construct`].
///
/// Requires initialisation, like every other facade call.
pub fn construct(kind: DistributionKind, params: &[ParamValue]) -> Result<Distribution> {
    source()?;
    distribution::construct(kind, params)
}

/// Draws one outcome from the process-wide stream.
pub fn outcome<V: RandomVariable>(variable: &V) -> Result<Outcome> {
    let shared = source()?;
    let mut guard = shared.lock();
    Ok(variable.outcome(&mut *guard))
}

/// Draws `count` outcomes as one contiguous run of the process-wide stream.
///
/// The whole batch is reserved before the first draw.
///
/// # Errors
/// - [`RandVarError::InvalidArgument`] if `count` is negative, or if a batch
///   of `count` outcomes cannot be allocated
/// - [`RandVarError::UninitializedGenerator`] before [`init`]
pub fn outcomes<V: RandomVariable>(variable: &V, count: i64) -> Result<Vec<Outcome>> {
    let shared = source()?;
    let count = usize::try_from(count).map_err(|_| {
        RandVarError::InvalidArgument("the number of outcomes cannot be negative".to_string())
    })?;
    let mut batch = Vec::new();
    batch.try_reserve_exact(count).map_err(|err| {
        RandVarError::InvalidArgument(format!("cannot allocate {} outcomes: {}", count, err))
    })?;
    let mut guard = shared.lock();
    batch.extend(variable.outcome_iter(&mut *guard).take(count));
    Ok(batch)
}
