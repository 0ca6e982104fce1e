//! # Uniform Source
//!
//! Every sampling algorithm in this crate is built on a single abstraction:
//! a stream of uniform variates in the half-open interval [0, 1). This
//! module defines that abstraction and its implementations.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: Seeded sources replay the same stream after a
//!   reseed with the same seed
//! - **Explicit context**: Sources are passed to samplers as `&mut S`, never
//!   looked up from hidden state; the process-wide generator in
//!   [`crate::api`] is a thin layer over [`SharedSource`]
//! - **Static dispatch**: Samplers are generic over [`UniformSource`]
//!
//! ## Module Structure
//!
//! - [`SeededSource`]: `StdRng` wrapper with seed management
//! - [`ReplaySource`]: replays a recorded draw sequence
//! - [`SharedSource`]: cloneable, mutex-guarded handle serialising draws on
//!   one logical stream
//!
//! ## Usage Example
//!
//! ```rust
//! use randvar_core::source::{SeededSource, UniformSource};
//!
//! let mut source = SeededSource::from_seed(12345);
//! let u = source.draw();
//! assert!((0.0..1.0).contains(&u));
//!
//! // Batch generation into a pre-allocated buffer
//! let mut buffer = vec![0.0; 1000];
//! source.fill(&mut buffer);
//! ```

mod replay;
mod seeded;
mod shared;

pub use replay::ReplaySource;
pub use seeded::SeededSource;
pub use shared::SharedSource;

/// Seed value accepted and reported by seeded sources.
pub type Seed = u64;

/// A stream of uniform variates in [0, 1).
///
/// Implementors must never return a value outside the half-open unit
/// interval.
pub trait UniformSource {
    /// Draws the next variate in [0, 1).
    fn draw(&mut self) -> f64;

    /// Draws the next variate mapped onto (0, 1].
    ///
    /// Consumes exactly one draw `u` and returns `1 - u`, which is safe to
    /// pass to `ln` or to raise to a negative power.
    #[inline]
    fn draw_open(&mut self) -> f64 {
        1.0 - self.draw()
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn draw(&mut self) -> f64 {
        (**self).draw()
    }
}
