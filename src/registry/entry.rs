//! Registry entries and the registry itself.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::config::Settings;
use crate::error::{Result, SeedError};
use crate::providers::{NewsSeedFetcher, TimeSeedFetcher, WeatherSeedFetcher};
use crate::traits::SeedCapability;

/// The built-in providers, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Weather,
    Time,
    News,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] = [SourceKind::Weather, SourceKind::Time, SourceKind::News];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::Time => "time",
            Self::News => "news",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SeedError::UnknownSource(s.to_string()))
    }
}

/// A named binding between a source name and its seed capability.
#[derive(Debug, Clone)]
pub struct SourceEntry {
    name: String,
    fetcher: Arc<dyn SeedCapability>,
}

impl SourceEntry {
    pub fn new(name: impl Into<String>, fetcher: Arc<dyn SeedCapability>) -> Self {
        Self {
            name: name.into(),
            fetcher,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fetcher(&self) -> &Arc<dyn SeedCapability> {
        &self.fetcher
    }
}

/// Fixed set of sources.
///
/// Cheap to share behind an `Arc`; every operation takes `&self` and no state
/// survives a call.
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    entries: Vec<SourceEntry>,
}

impl SourceRegistry {
    /// Build a registry from explicit entries.
    ///
    /// Later duplicates of a name are shadowed by the first registration.
    pub fn new(entries: Vec<SourceEntry>) -> Self {
        let mut unique: Vec<SourceEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if unique.iter().any(|e| e.name == entry.name) {
                tracing::warn!(source = %entry.name, "Duplicate source ignored");
                continue;
            }
            unique.push(entry);
        }
        Self { entries: unique }
    }

    /// The default registry: weather, time, news.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let weather = WeatherSeedFetcher::new(settings.weather_config())?;
        let time = TimeSeedFetcher::new(settings.time_config())?;
        let news = NewsSeedFetcher::new(settings.news_config())?;
        Ok(Self::new(vec![
            SourceEntry::new(SourceKind::Weather.as_str(), Arc::new(weather)),
            SourceEntry::new(SourceKind::Time.as_str(), Arc::new(time)),
            SourceEntry::new(SourceKind::News.as_str(), Arc::new(news)),
        ]))
    }

    /// Source names in registration order. Never touches the network.
    pub fn list_sources(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// The capability bound to `name`.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn SeedCapability>> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.fetcher.clone())
            .ok_or_else(|| SeedError::UnknownSource(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One uniform draw in `[0, 1)` from the named source.
    pub async fn draw(&self, name: &str) -> Result<f64> {
        super::helpers::draw(self, name).await
    }
}
