//! # worldseed
//!
//! Random draws seeded from third-party data.
//!
//! A caller names a source (`weather`, `time`, `news`); the registry asks the
//! bound fetcher for a seed, which performs one HTTP GET against the provider,
//! parses the payload and reduces it to an integer. That integer seeds a fresh
//! pseudo-random generator, and one `f64` in `[0, 1)` is drawn from it.
//!
//! ```rust,ignore
//! use worldseed::config::Settings;
//! use worldseed::registry::SourceRegistry;
//!
//! let registry = SourceRegistry::from_settings(&Settings::from_env()?)?;
//! assert_eq!(registry.list_sources(), ["weather", "time", "news"]);
//! let value = registry.draw("weather").await?;
//! ```
//!
//! The randomness is only as good as the provider data behind it and is not
//! suitable for cryptographic use.
#![deny(unsafe_code)]

pub mod config;
pub mod encoding;
pub mod error;
pub mod execution;
pub mod observability;
pub mod providers;
pub mod registry;
pub mod server_adapters;
pub mod traits;
pub mod types;

pub use error::{Result, SeedError};
pub use registry::{SourceRegistry, draw};
pub use traits::{SeedCapability, SeedFetcher};
pub use types::Seed;
