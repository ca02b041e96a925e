//! Public client surface + builder.
//! Internals are split into `retry` (backoff policy) and `constants`
//! (UA + default endpoint + cache defaults).

mod constants;
mod retry;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::cache::ResultCache;
use crate::core::error::NewsError;
use crate::core::models::NewsItem;
use constants::{
    DEFAULT_BASE_SEARCH, DEFAULT_CACHE_TTL, ENV_CLIENT_ID, ENV_CLIENT_SECRET, USER_AGENT,
};

pub use retry::{Backoff, RetryConfig};

/// Shared HTTP client, upstream endpoint, credentials, retry policy, and the
/// process-wide result cache. Cheap to clone.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: Client,
    base_search: Url,
    client_id: Option<String>,
    client_secret: Option<String>,
    retry: RetryConfig,
    cache: Option<Arc<ResultCache>>,
}

impl Default for NewsClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl NewsClient {
    /// Create a new builder.
    pub fn builder() -> NewsClientBuilder {
        NewsClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn base_search(&self) -> &Url {
        &self.base_search
    }

    /// Both credentials, or `None` when either is missing or blank.
    pub(crate) fn credentials(&self) -> Option<(&str, &str)> {
        let id = self.client_id.as_deref().filter(|s| !s.trim().is_empty())?;
        let secret = self
            .client_secret
            .as_deref()
            .filter(|s| !s.trim().is_empty())?;
        Some((id, secret))
    }

    /// Whether aggregate results are memoized.
    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    pub(crate) async fn cache_get(&self, key: &str) -> Option<Vec<NewsItem>> {
        self.cache.as_ref()?.get(key).await
    }

    pub(crate) async fn cache_put(
        &self,
        key: &str,
        items: &[NewsItem],
        ttl_override: Option<Duration>,
    ) {
        if let Some(cache) = &self.cache {
            cache.put(key, items, ttl_override).await;
        }
    }

    /// Send a request, retrying transient failures per the retry policy.
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
        retry_override: Option<&RetryConfig>,
    ) -> Result<reqwest::Response, NewsError> {
        let cfg = retry_override.unwrap_or(&self.retry);
        let mut attempt: u32 = 0;
        loop {
            let this_try = req
                .try_clone()
                .ok_or_else(|| NewsError::Data("request is not cloneable for retry".into()))?;
            let outcome = this_try.send().await;

            let retriable = match &outcome {
                Ok(resp) => cfg.retry_on_status.contains(&resp.status().as_u16()),
                Err(e) => {
                    (e.is_timeout() && cfg.retry_on_timeout)
                        || (e.is_connect() && cfg.retry_on_connect)
                }
            };

            if !cfg.enabled || !retriable || attempt >= cfg.max_retries {
                return outcome.map_err(NewsError::from);
            }

            let delay = cfg.backoff.delay(attempt);
            tracing::debug!(
                attempt,
                delay_ms = delay.as_millis() as u64,
                "retrying upstream request"
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct NewsClientBuilder {
    user_agent: Option<String>,
    base_search: Option<Url>,
    client_id: Option<String>,
    client_secret: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
    cache_ttl: Option<Duration>,
    cache_disabled: bool,
}

impl NewsClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the news-search endpoint (used by tests to point at a mock).
    #[must_use]
    pub fn base_search(mut self, url: Url) -> Self {
        self.base_search = Some(url);
        self
    }

    /// Set the Naver Open API credentials.
    #[must_use]
    pub fn credentials(mut self, id: impl Into<String>, secret: impl Into<String>) -> Self {
        self.client_id = Some(id.into());
        self.client_secret = Some(secret.into());
        self
    }

    /// Read credentials from `NAVER_CLIENT_ID` / `NAVER_CLIENT_SECRET`.
    /// Missing variables leave the credentials unset; the steady-state
    /// surface then returns empty results and logs a warning per phrase.
    #[must_use]
    pub fn credentials_from_env(mut self) -> Self {
        if let Ok(id) = std::env::var(ENV_CLIENT_ID) {
            self.client_id = Some(id);
        }
        if let Ok(secret) = std::env::var(ENV_CLIENT_SECRET) {
            self.client_secret = Some(secret);
        }
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Override the default retry policy for every request on this client.
    #[must_use]
    pub fn retry_policy(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Override the default 10-minute TTL for cached aggregate results.
    #[must_use]
    pub fn cache_ttl(mut self, dur: Duration) -> Self {
        self.cache_ttl = Some(dur);
        self
    }

    /// Disable result caching entirely.
    #[must_use]
    pub fn no_cache(mut self) -> Self {
        self.cache_disabled = true;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns a `NewsError` if the default endpoint cannot be parsed or the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<NewsClient, NewsError> {
        let base_search = match self.base_search {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_SEARCH)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }
        let http = httpb.build()?;

        let cache = if self.cache_disabled {
            None
        } else {
            Some(Arc::new(ResultCache::new(
                self.cache_ttl.unwrap_or(DEFAULT_CACHE_TTL),
            )))
        };

        Ok(NewsClient {
            http,
            base_search,
            client_id: self.client_id,
            client_secret: self.client_secret,
            retry: self.retry.unwrap_or_default(),
            cache,
        })
    }
}
