//! Unified entry for test support modules
//!
//! - Lightweight wrappers for the mock backends
//! - Settings and payload builders shared by the provider tests

#![allow(dead_code)]

pub mod mockito;

use serde_json::{Value, json};
use worldseed::config::Settings;

pub const TEST_API_KEY: &str = "test-news-api-key-0123456789";

/// Settings pointing every provider at `base_url`.
pub fn settings_for(base_url: &str) -> Settings {
    Settings::new(TEST_API_KEY).with_base_url(base_url)
}

/// Open-Meteo forecast body
pub fn weather_body(temperature: f64) -> Value {
    json!({
        "latitude": 55.75,
        "longitude": 48.75,
        "current_units": {"time": "iso8601", "interval": "seconds", "temperature_2m": "°C"},
        "current": {"time": "2024-04-22T12:00", "interval": 900, "temperature_2m": temperature}
    })
}

/// timeapi.io current-zone body
pub fn time_body(date_time: &str) -> Value {
    json!({
        "year": 2024,
        "month": 4,
        "day": 22,
        "hour": 12,
        "minute": 0,
        "seconds": 0,
        "milliSeconds": 0,
        "dateTime": date_time,
        "date": "04/22/2024",
        "time": "12:00",
        "timeZone": "Europe/Amsterdam",
        "dayOfWeek": "Monday",
        "dstActive": true
    })
}

/// NewsAPI `everything` body
pub fn news_body(titles: &[&str]) -> Value {
    let articles: Vec<Value> = titles
        .iter()
        .map(|title| {
            json!({
                "source": {"id": null, "name": "Example"},
                "author": null,
                "title": title,
                "url": "https://example.com/article",
                "publishedAt": "2024-04-22T11:58:00Z"
            })
        })
        .collect();
    json!({"status": "ok", "totalResults": titles.len(), "articles": articles})
}
