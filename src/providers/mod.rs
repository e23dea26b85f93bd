//! Seed fetchers, one per external provider.
//!
//! Each provider module has a `*Config` (endpoint plus provider parameters) and
//! a `*SeedFetcher` implementing [`crate::traits::SeedFetcher`].

pub mod news;
pub mod time;
pub mod weather;

pub use news::{NewsConfig, NewsSeedFetcher};
pub use time::{TimeConfig, TimeSeedFetcher};
pub use weather::{WeatherConfig, WeatherSeedFetcher};

/// Join a base URL and an endpoint path without doubling the slash.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}
