//! Capability traits.

pub mod seed;

pub use seed::{SeedCapability, SeedFetcher};
