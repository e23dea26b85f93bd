//! Shared data types: HTTP configuration, seeds and provider payloads.

pub mod http;
pub mod responses;
pub mod seed;

pub use http::{HttpConfig, HttpConfigBuilder};
pub use responses::{Article, CurrentWeather, NewsResponse, TimeResponse, WeatherResponse};
pub use seed::Seed;
