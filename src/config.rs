//! Process settings.
//!
//! Loaded from `WORLDSEED_*` environment variables, validated once at start-up
//! and turned into per-provider configurations.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use validator::{Validate, ValidationError};

use crate::error::{Result, SeedError};
use crate::providers::news::{DEFAULT_NEWS_BASE_URL, NewsConfig};
use crate::providers::time::{DEFAULT_TIME_BASE_URL, TimeConfig};
use crate::providers::weather::{DEFAULT_WEATHER_BASE_URL, WeatherConfig};
use crate::types::HttpConfig;

/// Prefix shared by every environment variable.
pub const ENV_PREFIX: &str = "WORLDSEED_";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["text", "json", "json-compact"];

/// Application settings.
#[derive(Debug, Validate)]
pub struct Settings {
    #[validate(length(min = 1))]
    pub host: String,
    pub port: u16,
    /// Deployment environment name (`dev`, `prod`, ...).
    pub environment: String,

    #[validate(custom(function = "validate_log_level"))]
    pub log_level: String,
    #[validate(custom(function = "validate_log_format"))]
    pub log_format: String,
    pub log_file: Option<PathBuf>,

    pub news_api_key: SecretString,
    #[validate(length(min = 1))]
    pub news_query: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub weather_latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub weather_longitude: f64,
    /// Per-request timeout, in seconds.
    #[validate(range(exclusive_min = 0.0, max = 600.0))]
    pub requests_timeout: f64,
    /// Connect timeout, in seconds. Unset leaves it to `requests_timeout`.
    #[validate(range(exclusive_min = 0.0, max = 600.0))]
    pub connect_timeout: Option<f64>,
    #[validate(length(min = 1))]
    pub time_zone: String,

    #[validate(length(min = 1))]
    pub weather_base_url: String,
    #[validate(length(min = 1))]
    pub time_base_url: String,
    #[validate(length(min = 1))]
    pub news_base_url: String,
}

fn validate_log_level(value: &str) -> std::result::Result<(), ValidationError> {
    if LOG_LEVELS.contains(&value.to_ascii_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ValidationError::new("log_level"))
    }
}

fn validate_log_format(value: &str) -> std::result::Result<(), ValidationError> {
    if LOG_FORMATS.contains(&value.to_ascii_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ValidationError::new("log_format"))
    }
}

impl Settings {
    /// Defaults for everything except the news API key, which has none.
    pub fn new(news_api_key: impl Into<String>) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            environment: "dev".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            log_file: None,
            news_api_key: SecretString::from(news_api_key.into()),
            news_query: "tesla".to_string(),
            weather_latitude: 55.752116,
            weather_longitude: 48.744554,
            requests_timeout: 3.0,
            connect_timeout: None,
            time_zone: "Europe/Amsterdam".to_string(),
            weather_base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            time_base_url: DEFAULT_TIME_BASE_URL.to_string(),
            news_base_url: DEFAULT_NEWS_BASE_URL.to_string(),
        }
    }

    /// Load and validate settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load and validate settings through an arbitrary variable lookup.
    ///
    /// `lookup` receives full variable names, prefix included. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(&format!("{ENV_PREFIX}{name}")).filter(|v| !v.trim().is_empty())
        };

        let api_key = var("NEWS_API_KEY").ok_or_else(|| {
            SeedError::ConfigurationError(format!("{ENV_PREFIX}NEWS_API_KEY is required"))
        })?;
        let mut settings = Self::new(api_key);

        if let Some(v) = var("HOST") {
            settings.host = v;
        }
        if let Some(v) = var("PORT") {
            settings.port = parse_var("PORT", &v)?;
        }
        if let Some(v) = var("ENVIRONMENT") {
            settings.environment = v;
        }
        if let Some(v) = var("LOG_LEVEL") {
            settings.log_level = v.to_ascii_lowercase();
        }
        if let Some(v) = var("LOG_FORMAT") {
            settings.log_format = v.to_ascii_lowercase();
        }
        if let Some(v) = var("LOG_FILE") {
            settings.log_file = Some(PathBuf::from(v));
        }
        if let Some(v) = var("NEWS_QUERY") {
            settings.news_query = v;
        }
        if let Some(v) = var("WEATHER_LATITUDE") {
            settings.weather_latitude = parse_var("WEATHER_LATITUDE", &v)?;
        }
        if let Some(v) = var("WEATHER_LONGITUDE") {
            settings.weather_longitude = parse_var("WEATHER_LONGITUDE", &v)?;
        }
        if let Some(v) = var("REQUESTS_TIMEOUT") {
            settings.requests_timeout = parse_var("REQUESTS_TIMEOUT", &v)?;
        }
        if let Some(v) = var("CONNECT_TIMEOUT") {
            settings.connect_timeout = Some(parse_var("CONNECT_TIMEOUT", &v)?);
        }
        if let Some(v) = var("TIME_ZONE") {
            settings.time_zone = v;
        }
        if let Some(v) = var("WEATHER_BASE_URL") {
            settings.weather_base_url = v;
        }
        if let Some(v) = var("TIME_BASE_URL") {
            settings.time_base_url = v;
        }
        if let Some(v) = var("NEWS_BASE_URL") {
            settings.news_base_url = v;
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_log_format(mut self, format: impl Into<String>) -> Self {
        self.log_format = format.into();
        self
    }

    pub fn with_news_query(mut self, query: impl Into<String>) -> Self {
        self.news_query = query.into();
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.weather_latitude = latitude;
        self.weather_longitude = longitude;
        self
    }

    pub fn with_time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = time_zone.into();
        self
    }

    pub fn with_requests_timeout(mut self, timeout: Duration) -> Self {
        self.requests_timeout = timeout.as_secs_f64();
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout.as_secs_f64());
        self
    }

    /// Point every provider at the same base URL (a mock server, usually).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.weather_base_url = base_url.clone();
        self.time_base_url = base_url.clone();
        self.news_base_url = base_url;
        self
    }

    /// `host:port` to bind the boundary adapter to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.requests_timeout).unwrap_or(Duration::from_secs(3))
    }

    pub fn http_config(&self) -> HttpConfig {
        HttpConfig::builder()
            .timeout(Some(self.request_timeout()))
            .connect_timeout(
                self.connect_timeout
                    .and_then(|secs| Duration::try_from_secs_f64(secs).ok()),
            )
            .build()
    }

    pub fn weather_config(&self) -> WeatherConfig {
        WeatherConfig::new(self.weather_latitude, self.weather_longitude)
            .with_base_url(&self.weather_base_url)
            .with_http_config(self.http_config())
    }

    pub fn time_config(&self) -> TimeConfig {
        TimeConfig::new(&self.time_zone)
            .with_base_url(&self.time_base_url)
            .with_http_config(self.http_config())
    }

    pub fn news_config(&self) -> NewsConfig {
        NewsConfig::new(self.news_api_key.expose_secret().to_owned(), &self.news_query)
            .with_base_url(&self.news_base_url)
            .with_http_config(self.http_config())
    }
}

fn parse_var<T>(name: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e| {
        SeedError::ConfigurationError(format!("{ENV_PREFIX}{name}='{raw}' is invalid: {e}"))
    })
}
