//! NewsAPI latest article title.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::encoding::{Clock, SystemClock, encode_news};
use crate::error::Result;
use crate::execution::http::{build_http_client_from_config, get_json};
use crate::traits::SeedFetcher;
use crate::types::{HttpConfig, NewsResponse, Seed};

pub const DEFAULT_NEWS_BASE_URL: &str = "https://newsapi.org";
const EVERYTHING_PATH: &str = "/v2/everything";

/// News provider configuration
#[derive(Debug)]
pub struct NewsConfig {
    pub base_url: String,
    pub api_key: SecretString,
    /// Search phrase sent as `q`.
    pub query: String,
    pub http_config: HttpConfig,
}

impl NewsConfig {
    pub fn new(api_key: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_NEWS_BASE_URL.to_string(),
            api_key: SecretString::from(api_key.into()),
            query: query.into(),
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

/// Seeds from a stable hash of the newest matching headline.
///
/// When the search comes back empty the hash is replaced by a random value, so
/// that branch is not reproducible.
#[derive(Debug)]
pub struct NewsSeedFetcher {
    config: NewsConfig,
    http_client: reqwest::Client,
    clock: Arc<dyn Clock>,
}

impl NewsSeedFetcher {
    pub fn new(config: NewsConfig) -> Result<Self> {
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

    pub fn config(&self) -> &NewsConfig {
        &self.config
    }
}

#[async_trait]
impl SeedFetcher for NewsSeedFetcher {
    type Response = NewsResponse;

    fn provider_id(&self) -> &'static str {
        "news"
    }

    async fn fetch(&self) -> Result<NewsResponse> {
        let url = super::endpoint(&self.config.base_url, EVERYTHING_PATH);
        let query = [
            ("apiKey", self.config.api_key.expose_secret()),
            ("q", self.config.query.as_str()),
            ("sortBy", "publishedAt"),
            ("page", "1"),
            ("pageSize", "1"),
        ];
        get_json(&self.http_client, self.provider_id(), &url, &query).await
    }

    fn encode(&self, data: &NewsResponse) -> Seed {
        encode_news(data.first_title(), self.clock.since_epoch())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{FixedClock, SEED_MODULUS, stable_hash};

    fn fetcher_at(millis: u64) -> NewsSeedFetcher {
        NewsSeedFetcher::new(NewsConfig::new("key", "tesla"))
            .unwrap()
            .with_clock(Arc::new(FixedClock::from_millis(millis)))
    }

    #[test]
    fn encode_with_article() {
        let fetcher = fetcher_at(1_713_787_200_123);
        let data = NewsResponse::with_titles(["Sample Article Title"]);
        let expected = (u128::from(stable_hash("Sample Article Title")) * 1_713_787_200_123
            % u128::from(SEED_MODULUS)) as u64;
        assert_eq!(fetcher.encode(&data).value(), expected);
    }

    #[test]
    fn encode_uses_only_the_first_article() {
        let fetcher = fetcher_at(99_999);
        let one = NewsResponse::with_titles(["first"]);
        let two = NewsResponse::with_titles(["first", "second"]);
        assert_eq!(fetcher.encode(&one), fetcher.encode(&two));
    }

    #[test]
    fn encode_without_articles_is_bounded() {
        let fetcher = fetcher_at(1_713_787_200_123);
        let empty = NewsResponse::with_titles(Vec::<String>::new());
        assert!(fetcher.encode(&empty).value() < SEED_MODULUS);
    }

    #[test]
    fn config_debug_hides_api_key() {
        let config = NewsConfig::new("very-secret-api-key", "tesla");
        assert!(!format!("{config:?}").contains("very-secret-api-key"));
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn request_logs_mask_api_key() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/v2/everything")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"status":"ok","articles":[{"title":"t"}]}"#)
            .create_async()
            .await;

        let fetcher = NewsSeedFetcher::new(
            NewsConfig::new("very-secret-api-key-98765", "tesla").with_base_url(server.url()),
        )
        .unwrap();
        fetcher.get_seed().await.unwrap();

        assert!(logs_contain("Request started"));
        assert!(logs_contain("q=tesla"));
        assert!(!logs_contain("very-secret-api-key-98765"));
    }
}
