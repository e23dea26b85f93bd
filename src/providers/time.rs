//! timeapi.io current time for a zone.

use async_trait::async_trait;

use crate::encoding::encode_time;
use crate::error::Result;
use crate::execution::http::{build_http_client_from_config, get_json};
use crate::traits::SeedFetcher;
use crate::types::{HttpConfig, Seed, TimeResponse};

pub const DEFAULT_TIME_BASE_URL: &str = "https://www.timeapi.io";
const CURRENT_ZONE_PATH: &str = "/api/Time/current/zone";

/// Time provider configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TimeConfig {
    pub base_url: String,
    /// IANA zone name, e.g. `Europe/Amsterdam`.
    pub time_zone: String,
    pub http_config: HttpConfig,
}

impl TimeConfig {
    pub fn new(time_zone: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_TIME_BASE_URL.to_string(),
            time_zone: time_zone.into(),
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

/// Seeds from the provider's reported instant.
///
/// Unlike the other providers this one does not read the local clock: the
/// payload is the time.
#[derive(Debug, Clone)]
pub struct TimeSeedFetcher {
    config: TimeConfig,
    http_client: reqwest::Client,
}

impl TimeSeedFetcher {
    pub fn new(config: TimeConfig) -> Result<Self> {
        let http_client = build_http_client_from_config(&config.http_config)?;
        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &TimeConfig {
        &self.config
    }
}

#[async_trait]
impl SeedFetcher for TimeSeedFetcher {
    type Response = TimeResponse;

    fn provider_id(&self) -> &'static str {
        "time"
    }

    async fn fetch(&self) -> Result<TimeResponse> {
        let url = super::endpoint(&self.config.base_url, CURRENT_ZONE_PATH);
        let query = [("timeZone", self.config.time_zone.as_str())];
        get_json(&self.http_client, self.provider_id(), &url, &query).await
    }

    fn encode(&self, data: &TimeResponse) -> Seed {
        encode_time(&data.date_time)
    }
}
