//! Centralized constants for default endpoints, UA, and cache policy.

use std::time::Duration;

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Naver Open API news-search endpoint.
pub(crate) const DEFAULT_BASE_SEARCH: &str = "https://openapi.naver.com/v1/search/news.json";

/// Default TTL for cached aggregate results.
pub(crate) const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(600);

/// Environment variables read by `credentials_from_env`.
pub(crate) const ENV_CLIENT_ID: &str = "NAVER_CLIENT_ID";
pub(crate) const ENV_CLIENT_SECRET: &str = "NAVER_CLIENT_SECRET";
