//! The integer seed every provider reduces its payload to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A bounded, non-negative integer derived from provider data.
///
/// Seeds are only built by reducing a value modulo a provider modulus, so
/// `0 <= seed < modulus` always holds for the modulus that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(u64);

impl Seed {
    /// Reduce an arbitrary signed value into `[0, modulus)`.
    ///
    /// Uses the Euclidean remainder, so negative inputs still land in range.
    /// A zero modulus is treated as one.
    pub fn reduce(value: i128, modulus: u64) -> Self {
        let modulus = i128::from(modulus.max(1));
        // rem_euclid with a positive modulus is in [0, modulus), which fits u64
        Self(value.rem_euclid(modulus) as u64)
    }

    /// Reduce an unsigned value into `[0, modulus)`.
    pub fn reduce_unsigned(value: u128, modulus: u64) -> Self {
        let modulus = u128::from(modulus.max(1));
        Self((value % modulus) as u64)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<Seed> for u64 {
    fn from(seed: Seed) -> Self {
        seed.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
