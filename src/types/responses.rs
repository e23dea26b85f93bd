//! Response models for the three providers.
//!
//! Each model keeps only the fields the encoder needs. Deserialization fails
//! closed: a missing or mistyped field is an error, never a default.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Open-Meteo forecast payload (`current.temperature_2m`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub current: CurrentWeather,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Air temperature at 2 m, in °C.
    #[serde(rename = "temperature_2m")]
    pub temperature: f64,
}

impl WeatherResponse {
    pub fn new(temperature: f64) -> Self {
        Self {
            current: CurrentWeather { temperature },
        }
    }
}

/// timeapi.io current-time payload (`dateTime`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeResponse {
    #[serde(rename = "dateTime", deserialize_with = "deserialize_provider_instant")]
    pub date_time: DateTime<Utc>,
}

impl TimeResponse {
    pub fn new(date_time: DateTime<Utc>) -> Self {
        Self { date_time }
    }
}

/// NewsAPI `everything` payload, requested with `pageSize=1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsResponse {
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
}

impl NewsResponse {
    pub fn with_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            articles: titles
                .into_iter()
                .map(|title| Article {
                    title: title.into(),
                })
                .collect(),
        }
    }

    /// Title of the first article, if the search returned any.
    pub fn first_title(&self) -> Option<&str> {
        self.articles.first().map(|a| a.title.as_str())
    }
}

/// Parse an ISO-8601 instant.
///
/// Values with an offset are converted to UTC. Values without one (timeapi.io
/// reports local wall-clock time that way) are read as UTC.
pub fn parse_provider_instant(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        // Zone-local wall time read as UTC: the instant is shifted by the
        // zone offset, but the same payload always yields the same value.
        Err(rfc_err) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|_| rfc_err),
    }
}

fn deserialize_provider_instant<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_provider_instant(&raw)
        .map_err(|e| serde::de::Error::custom(format!("invalid dateTime '{raw}': {e}")))
}
