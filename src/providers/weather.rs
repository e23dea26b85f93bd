//! Open-Meteo current temperature.

use std::sync::Arc;

use async_trait::async_trait;

use crate::encoding::{Clock, SystemClock, encode_weather};
use crate::error::Result;
use crate::execution::http::{build_http_client_from_config, get_json};
use crate::traits::SeedFetcher;
use crate::types::{HttpConfig, Seed, WeatherResponse};

pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.open-meteo.com";
const FORECAST_PATH: &str = "/v1/forecast";

/// Weather provider configuration
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherConfig {
    pub base_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub http_config: HttpConfig,
}

impl WeatherConfig {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            latitude,
            longitude,
            http_config: HttpConfig::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = http_config;
        self
    }
}

/// Seeds from the current temperature scaled by the elapsed seconds.
#[derive(Debug, Clone)]
pub struct WeatherSeedFetcher {
    config: WeatherConfig,
    http_client: reqwest::Client,
    clock: Arc<dyn Clock>,
}

impl WeatherSeedFetcher {
    pub fn new(config: WeatherConfig) -> Result<Self> {
        let http_client = build_http_client_from_config(&config.http_config)?;
        Ok(Self {
            config,
            http_client,
            clock: Arc::new(SystemClock),
        })
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &WeatherConfig {
        &self.config
    }
}

#[async_trait]
impl SeedFetcher for WeatherSeedFetcher {
    type Response = WeatherResponse;

    fn provider_id(&self) -> &'static str {
        "weather"
    }

    async fn fetch(&self) -> Result<WeatherResponse> {
        let url = super::endpoint(&self.config.base_url, FORECAST_PATH);
        let query = [
            ("latitude", self.config.latitude.to_string()),
            ("longitude", self.config.longitude.to_string()),
            ("current", "temperature_2m".to_string()),
        ];
        get_json(&self.http_client, self.provider_id(), &url, &query).await
    }

    fn encode(&self, data: &WeatherResponse) -> Seed {
        encode_weather(data.current.temperature, self.clock.since_epoch())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{FixedClock, SEED_MODULUS};

    #[test]
    fn encode_uses_the_clock_reading() {
        let fetcher = WeatherSeedFetcher::new(WeatherConfig::new(0.0, 0.0))
            .unwrap()
            .with_clock(Arc::new(FixedClock::from_secs(1_000)));
        let seed = fetcher.encode(&WeatherResponse::new(25.0));
        assert_eq!(seed.value(), 25_000);
    }

    #[test]
    fn encode_is_pure_for_a_frozen_clock() {
        let fetcher = WeatherSeedFetcher::new(WeatherConfig::new(0.0, 0.0))
            .unwrap()
            .with_clock(Arc::new(FixedClock::from_secs(1_713_787_200)));
        let data = WeatherResponse::new(-3.7);
        let first = fetcher.encode(&data);
        assert_eq!(first, fetcher.encode(&data));
        assert!(first.value() < SEED_MODULUS);
    }

    #[test]
    fn config_defaults_to_open_meteo() {
        let config = WeatherConfig::new(55.752116, 48.744554);
        assert_eq!(config.base_url, DEFAULT_WEATHER_BASE_URL);
        assert_eq!(
            super::super::endpoint(&config.base_url, FORECAST_PATH),
            "https://api.open-meteo.com/v1/forecast"
        );
    }
}
