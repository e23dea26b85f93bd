//! Time seed fetcher against a wiremock server.

mod support;

use std::time::Duration;

use chrono::{TimeZone, Utc};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use worldseed::SeedError;
use worldseed::encoding::{SEED_MODULUS, TIME_MULTIPLIER};
use worldseed::providers::TimeSeedFetcher;
use worldseed::traits::SeedFetcher;

fn expected_seed(unix_secs: i64) -> u64 {
    (unix_secs as i128 * TIME_MULTIPLIER as i128).rem_euclid(SEED_MODULUS as i128) as u64
}

#[tokio::test]
async fn fetch_sends_zone_and_parses_instant() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/Time/current/zone"))
        .and(query_param("timeZone", "Europe/Amsterdam"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(support::time_body("2024-04-22T12:00:00Z")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let settings = support::settings_for(&mock_server.uri());
    let fetcher = TimeSeedFetcher::new(settings.time_config()).unwrap();
    let data = fetcher.fetch().await.unwrap();

    assert_eq!(
        data.date_time,
        Utc.with_ymd_and_hms(2024, 4, 22, 12, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn get_seed_multiplies_timestamp() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/Time/current/zone"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(support::time_body("2024-04-22T12:00:00")),
        )
        .mount(&mock_server)
        .await;

    let settings = support::settings_for(&mock_server.uri());
    let fetcher = TimeSeedFetcher::new(settings.time_config()).unwrap();

    let seed = fetcher.get_seed().await.unwrap();
    let t = Utc.with_ymd_and_hms(2024, 4, 22, 12, 0, 0).unwrap().timestamp();
    assert_eq!(seed.value(), expected_seed(t));

    // same payload, same seed
    assert_eq!(fetcher.get_seed().await.unwrap(), seed);
}

#[tokio::test]
async fn unknown_zone_is_upstream_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/Time/current/zone"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Invalid Timezone"))
        .mount(&mock_server)
        .await;

    let settings = support::settings_for(&mock_server.uri()).with_time_zone("Mars/Olympus");
    let fetcher = TimeSeedFetcher::new(settings.time_config()).unwrap();
    let err = fetcher.get_seed().await.unwrap_err();

    assert_eq!(
        err,
        SeedError::upstream_status("time", 400, "Invalid Timezone")
    );
}

#[tokio::test]
async fn unparseable_date_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/Time/current/zone"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::time_body("noon-ish")))
        .mount(&mock_server)
        .await;

    let settings = support::settings_for(&mock_server.uri());
    let fetcher = TimeSeedFetcher::new(settings.time_config()).unwrap();
    let err = fetcher.get_seed().await.unwrap_err();

    assert!(matches!(
        err,
        SeedError::UpstreamMalformed { ref message, .. } if message.contains("noon-ish")
    ));
}

#[tokio::test]
async fn slow_provider_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/Time/current/zone"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(support::time_body("2024-04-22T12:00:00Z"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let settings = support::settings_for(&mock_server.uri())
        .with_requests_timeout(Duration::from_millis(200));
    let fetcher = TimeSeedFetcher::new(settings.time_config()).unwrap();
    let err = fetcher.get_seed().await.unwrap_err();

    assert!(matches!(
        err,
        SeedError::UpstreamUnavailable {
            status: None,
            ref message,
            ..
        } if message.contains("timed out")
    ));
}
