#![allow(dead_code)]

use httpmock::MockServer;
use ratenews_rs::{NewsClient, NewsClientBuilder, RetryConfig};
use url::Url;

pub const SEARCH_PATH: &str = "/v1/search/news.json";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// A builder already pointed at the mock server with test credentials.
pub fn builder_for(server: &MockServer) -> NewsClientBuilder {
    NewsClient::builder()
        .base_search(Url::parse(&format!("{}{}", server.base_url(), SEARCH_PATH)).unwrap())
        .credentials("test-client-id", "test-client-secret")
}

/// Client without result caching, for tests that count upstream hits.
pub fn uncached_client(server: &MockServer) -> NewsClient {
    builder_for(server).no_cache().build().unwrap()
}

/// Client without caching or retries, for failure-path tests.
pub fn no_retry_client(server: &MockServer) -> NewsClient {
    builder_for(server)
        .no_cache()
        .retry_policy(RetryConfig {
            enabled: false,
            ..RetryConfig::default()
        })
        .build()
        .unwrap()
}

pub fn naver_item(title: &str, link: &str, pub_date: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "originallink": link,
        "link": link,
        "description": "",
        "pubDate": pub_date
    })
}

pub fn naver_body(items: &[serde_json::Value]) -> String {
    serde_json::json!({
        "lastBuildDate": "Mon, 08 Sep 2025 16:20:00 +0900",
        "total": items.len(),
        "start": 1,
        "display": items.len(),
        "items": items
    })
    .to_string()
}

pub fn empty_body() -> String {
    naver_body(&[])
}
