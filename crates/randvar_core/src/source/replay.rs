//! Replay of a recorded draw sequence.

use super::UniformSource;

/// Uniform source that replays a fixed sequence of draws.
///
/// Sampling algorithms are deterministic given their draws, so replaying a
/// recorded sequence pins an algorithm's output exactly. Used heavily by
/// the sampler tests.
///
/// # Panics
///
/// `draw` panics when the recorded sequence is exhausted, or if a recorded
/// value lies outside [0, 1).
///
/// # Examples
///
/// ```rust
/// use randvar_core::source::{ReplaySource, UniformSource};
///
/// let mut source = ReplaySource::new(vec![0.25, 0.5]);
/// assert_eq!(source.draw(), 0.25);
/// assert_eq!(source.consumed(), 1);
/// assert_eq!(source.remaining(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct ReplaySource {
    draws: Vec<f64>,
    position: usize,
}

impl ReplaySource {
    /// Creates a source replaying `draws` in order.
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, position: 0 }
    }

    /// Number of draws consumed so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.position
    }

    /// Number of recorded draws not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.draws.len() - self.position
    }
}

impl UniformSource for ReplaySource {
    fn draw(&mut self) -> f64 {
        let u = *self
            .draws
            .get(self.position)
            .unwrap_or_else(|| panic!("replay exhausted after {} draws", self.position));
        assert!(
            (0.0..1.0).contains(&u),
            "recorded draw {u} outside [0, 1)"
        );
        self.position += 1;
        u
    }
}
