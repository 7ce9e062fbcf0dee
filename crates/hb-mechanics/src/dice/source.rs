//! Randomness sources that dice draw from.

use rand::{CryptoRng, Rng};

/// A uniform integer generator for dice faces.
///
/// Every `rand` generator that is [`CryptoRng`] is a source, so seeded
/// non-cryptographic generators cannot be passed in by accident. The
/// default rolls go through `rand::rng()`, which is thread-local and
/// reseeded from the operating system, so concurrent rolls on many
/// threads never share state.
pub trait DiceSource {
    /// Draw one face of a die with `sides` faces, uniformly in `1..=sides`.
    fn draw(&mut self, sides: u32) -> u32;
}

impl<R: CryptoRng> DiceSource for R {
    fn draw(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides)
    }
}
