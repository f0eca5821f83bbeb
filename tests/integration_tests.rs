//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: client builder → retrying transport →
//! reqwest → wiremock, and the `lotr` binary on top of it.
//!
//! The client is blocking, so every call runs on `spawn_blocking` while the
//! mock server keeps serving from the async runtime.

use lotr_sdk::filter::{Filter, RequestOptions};
use lotr_sdk::models::{Movie, MovieField, QuoteField};
use lotr_sdk::{Error, OneApiClient, SortDirection};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "integration-key";

// ============================================================================
// Helpers
// ============================================================================

async fn blocking<F, R>(f: F) -> R
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}

fn client(base_url: &str, max_retries: u32) -> OneApiClient {
    OneApiClient::builder()
        .api_key(API_KEY)
        .base_url(format!("{base_url}/v2"))
        .timeout(Duration::from_secs(5))
        .max_retries(max_retries)
        .retry_backoff(|_| Duration::from_millis(10))
        .build()
        .unwrap()
}

fn movie(id: &str, name: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "runtimeInMinutes": 178,
        "budgetInMillions": 93,
        "boxOfficeRevenueInMillions": 871.5,
        "academyAwardNominations": 13,
        "academyAwardWins": 4,
        "rottenTomatoesScore": 91
    })
}

fn page(docs: Vec<Value>, page: u64, pages: u64, limit: u64) -> Value {
    json!({
        "docs": docs,
        "total": pages * limit,
        "limit": limit,
        "offset": 0,
        "page": page,
        "pages": pages
    })
}

fn rate_limited(limit: u64, remaining: u64) -> ResponseTemplate {
    ResponseTemplate::new(429)
        .insert_header("x-ratelimit-limit", limit.to_string().as_str())
        .insert_header("x-ratelimit-remaining", remaining.to_string().as_str())
        .insert_header("x-ratelimit-reset", "1700000000")
        .set_body_string("Too many requests, please try again later.")
}

async fn mount_trilogy(server: &MockServer) {
    let movies = [
        ("5cd95395de30eff6ebccde5c", "The Fellowship of the Ring"),
        ("5cd95395de30eff6ebccde5b", "The Two Towers"),
        ("5cd95395de30eff6ebccde5d", "The Return of the King"),
    ];
    for (i, (id, name)) in movies.iter().enumerate() {
        let number = (i + 1) as u64;
        Mock::given(method("GET"))
            .and(path("/v2/movie"))
            .and(query_param("page", number.to_string().as_str()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(page(vec![movie(id, name)], number, 3, 1)),
            )
            .expect(1)
            .mount(server)
            .await;
    }
}

// ============================================================================
// Resource Integration Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_list_movies_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/movie"))
        .and(header("Authorization", "Bearer integration-key"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![movie("5cd95395de30eff6ebccde5c", "The Fellowship of the Ring")],
            1,
            1,
            1000,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let page = blocking(move || client(&uri, 3).movies().list(None))
        .await
        .unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page.items()[0].name, "The Fellowship of the Ring");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_with_filter_and_sort() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/quote"))
        .and(query_param("dialog", "/ring/i"))
        .and(query_param("sort", "dialog:desc"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![json!({
                "_id": "5cd96e05de30eff6ebcce7e9",
                "dialog": "One Ring to rule them all.",
                "movie": "5cd95395de30eff6ebccde5d",
                "character": "5cd99d4bde30eff6ebccfbe6"
            })],
            1,
            1,
            5,
        )))
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let quotes = blocking(move || {
        let options = RequestOptions::builder()
            .filter(Filter::field(QuoteField::Dialog)?.matches_regex("/ring/i"))
            .sort(QuoteField::Dialog, SortDirection::Desc)
            .limit(5)
            .build();
        client(&uri, 0).quotes().list(Some(&options))
    })
    .await
    .unwrap();

    assert_eq!(quotes.items()[0].dialog, "One Ring to rule them all.");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_all_walks_every_page_in_order() {
    let mock_server = MockServer::start().await;
    mount_trilogy(&mock_server).await;

    let uri = mock_server.uri();
    let movies: Vec<Movie> = blocking(move || {
        let options = RequestOptions::builder().limit(1).build();
        client(&uri, 3)
            .movies()
            .list_all(Some(options))
            .collect::<lotr_sdk::Result<Vec<_>>>()
    })
    .await
    .unwrap();

    let names: Vec<&str> = movies.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "The Fellowship of the Ring",
            "The Two Towers",
            "The Return of the King"
        ]
    );

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_by_id_empty_docs_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/movie/unknown"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(Vec::new(), 1, 1, 1000)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let result = blocking(move || client(&uri, 3).movies().get_by_id("unknown")).await;

    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/movie"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Unauthorized."
        })))
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let result = blocking(move || client(&uri, 3).movies().list(None)).await;

    assert!(matches!(result, Err(Error::Authentication { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_movie_with_quotes() {
    let mock_server = MockServer::start().await;
    let id = "5cd95395de30eff6ebccde5d";

    Mock::given(method("GET"))
        .and(path(format!("/v2/movie/{id}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(vec![movie(id, "The Return of the King")], 1, 1, 1000)),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/v2/movie/{id}/quote")))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![json!({
                "_id": "5cd96e05de30eff6ebcce7ea",
                "dialog": "My precious.",
                "movie": id,
                "character": "5cd99d4bde30eff6ebccfe9e"
            })],
            1,
            1,
            1000,
        )))
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let combined = blocking(move || client(&uri, 3).movies().get_with_quotes(id))
        .await
        .unwrap();

    assert_eq!(combined.movie.name, "The Return of the King");
    assert_eq!(combined.quotes.items()[0].dialog, "My precious.");
}

// ============================================================================
// Rate Limit Integration Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_retries_on_429_then_succeeds() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/movie"))
        .respond_with(rate_limited(100, 1))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![movie("5cd95395de30eff6ebccde5b", "The Two Towers")],
            1,
            1,
            1000,
        )))
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let page = blocking(move || client(&uri, 3).movies().list(None))
        .await
        .unwrap();

    assert_eq!(page.items()[0].name, "The Two Towers");
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_gives_up_after_max_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/movie"))
        .respond_with(rate_limited(100, 1))
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let err = blocking(move || client(&uri, 2).movies().list(None))
        .await
        .unwrap_err();

    assert!(err.is_rate_limited());
    assert!(err.to_string().contains("after 2 retries"));
    assert_eq!(err.rate_limit().map(|m| m.limit), Some(100));
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_exhausted_window_fails_fast() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/movie"))
        .respond_with(rate_limited(100, 100))
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let err = blocking(move || client(&uri, 5).movies().list(None))
        .await
        .unwrap_err();

    assert!(err.is_rate_limited());
    assert!(err.to_string().contains("No more requests remaining"));
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_retries_disabled() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/movie"))
        .respond_with(rate_limited(100, 1))
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let err = blocking(move || client(&uri, 0).movies().list(None))
        .await
        .unwrap_err();

    assert!(err.is_rate_limited());
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_all_recovers_from_mid_stream_429() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/movie"))
        .and(query_param("page", "2"))
        .respond_with(rate_limited(100, 1))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&mock_server)
        .await;
    mount_trilogy(&mock_server).await;

    let uri = mock_server.uri();
    let count = blocking(move || {
        let options = RequestOptions::builder()
            .filter(Filter::field(MovieField::Name).unwrap().exists())
            .limit(1)
            .build();
        client(&uri, 3).movies().list_all(Some(options)).count()
    })
    .await;

    assert_eq!(count, 3);
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 4);
}

// ============================================================================
// CLI Integration Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_movies_all() {
    let mock_server = MockServer::start().await;
    mount_trilogy(&mock_server).await;

    let base_url = format!("{}/v2", mock_server.uri());
    let output = blocking(move || {
        std::process::Command::new(env!("CARGO_BIN_EXE_lotr"))
            .args(["--api-key", API_KEY, "--base-url", &base_url])
            .args(["movies", "--all", "--limit", "1"])
            .env_remove("LOTR_API_KEY")
            .env_remove("LOTR_BASE_URL")
            .output()
            .unwrap()
    })
    .await;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<String> = stdout
        .lines()
        .map(|line| {
            let value: Value = serde_json::from_str(line).unwrap();
            value["name"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(
        names,
        vec![
            "The Fellowship of the Ring",
            "The Two Towers",
            "The Return of the King"
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_requires_api_key() {
    let output = blocking(|| {
        std::process::Command::new(env!("CARGO_BIN_EXE_lotr"))
            .args(["quote", "anything"])
            .env_remove("LOTR_API_KEY")
            .output()
            .unwrap()
    })
    .await;

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("api_key"));
}
